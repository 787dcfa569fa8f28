//! Not found page component
//!
//! Shown for every route other than the portfolio itself.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::theme::ThemeToggle;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <div class="not-found-toggle">
                <ThemeToggle />
            </div>

            <div class="not-found-body">
                <div class="not-found-icon">"🧭"</div>

                <h1 class="not-found-code">"404"</h1>

                <h2 class="not-found-title">"Page Not Found"</h2>

                <p class="not-found-text">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <A href="/" attr:class="btn-primary-custom">
                    "Back to Portfolio"
                </A>
            </div>

            <p class="not-found-footer">"Rachid El Mekkaouy"</p>
        </div>
    }
}
