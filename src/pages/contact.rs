//! Contact page.

use leptos::prelude::*;

/// Static contact page.
#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <div class="contact-page">
            <h1>"Contact"</h1>
            <p>
                "You can reach me by email at "
                <a href="mailto:hello@example.com">"hello@example.com"</a>
                "."
            </p>
        </div>
    }
}
