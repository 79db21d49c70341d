//! Fallback page for unmatched routes.

use leptos::prelude::*;

/// 404 page shown for any unknown path.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"Page not found"</h1>
            <p>
                "Nothing lives at this address. Try the "
                <a href="/">"home page"</a>
                "."
            </p>
        </div>
    }
}
