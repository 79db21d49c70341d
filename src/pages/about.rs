//! About page.

use leptos::prelude::*;

/// Static about page.
#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <h1>"About"</h1>
            <p>
                "I build small web things and put the ones I like here. "
                "Each project on this site can be rated by visitors, so feel "
                "free to tell me what you think."
            </p>
        </div>
    }
}
