//! Landing page.

use leptos::prelude::*;

/// Home page with a short introduction and a pointer to the projects list.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"Welcome"</h1>
            <p>
                "This is my personal portfolio. Have a look at my "
                <a href="/projects">"projects"</a>
                " and leave a rating if you like what you see."
            </p>
        </div>
    }
}
