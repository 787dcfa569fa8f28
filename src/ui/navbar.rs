//! Fixed top navigation with section links, theme toggle and mobile overlay

use leptos::prelude::*;

use crate::core::SectionId;
use crate::ui::page_state::use_portfolio_state;
use crate::ui::theme::ThemeToggle;

#[component]
pub fn Navbar() -> impl IntoView {
    let state = use_portfolio_state();
    let active = state.active_section();

    view! {
        <nav class="portfolio-nav">
            <span class="nav-logo">"R"<span>"."</span>"E"</span>

            // Desktop navigation links
            <div class="desktop-nav">
                {SectionId::ALL
                    .into_iter()
                    .map(|section| {
                        view! {
                            <button
                                class="nav-link"
                                class:active=move || active.get() == section
                                on:click=move |_| state.navigate(section)
                            >
                                {section.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="nav-controls">
                <ThemeToggle />

                // Hamburger, only visible on small screens
                <button
                    class="hamburger"
                    on:click=move |_| state.toggle_menu()
                    aria-label="Open menu"
                    aria-expanded=move || state.menu_open.get().to_string()
                >
                    "☰"
                </button>
            </div>
        </nav>

        <Show when=move || state.menu_open.get()>
            <div class="mobile-menu">
                <button class="mobile-close" on:click=move |_| state.close_menu() aria-label="Close menu">
                    "✕"
                </button>
                {SectionId::ALL
                    .into_iter()
                    .map(|section| {
                        view! {
                            <button class="nav-link" on:click=move |_| state.navigate(section)>
                                {section.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </Show>
    }
}
