use leptos::html::Div;
use leptos::prelude::*;

use crate::core::SectionId;
use crate::core::catalog::HERO_STATS;
use crate::ui::dom;

/// Landing section. Every child fades up once the row enters the viewport.
#[component]
pub fn HeroSection(node_ref: NodeRef<Div>, visible: Memo<bool>) -> impl IntoView {
    view! {
        <section id=SectionId::Home.anchor() class="hero-section">
            // Decorative background
            <div class="glow-orb orb-1"></div>
            <div class="glow-orb orb-2"></div>
            <div class="glow-orb orb-3"></div>
            <div class="hero-grid-overlay"></div>

            <div class="hero-row" node_ref=node_ref>
                <div class="hero-text">
                    <div class="hero-badge fade-up" class:visible=visible>
                        <span class="hero-badge-dot"></span>
                        "Available for work"
                    </div>

                    <h1 class="hero-name fade-up" class:visible=visible>
                        "Rachid"<br />
                        <span class="hero-name-last">"El Mekkaouy"</span>
                        <span class="hero-cursor"></span>
                    </h1>

                    <p class="hero-role fade-up" class:visible=visible>
                        "Full Stack Developer"
                    </p>

                    <p class="hero-subtitle fade-up" class:visible=visible>
                        "Building elegant, high-performance web applications from front to back. "
                        "Passionate about clean code and seamless user experiences."
                    </p>

                    <div class="hero-actions fade-up" class:visible=visible>
                        <button
                            class="btn-primary-custom"
                            on:click=move |_| { dom::scroll_to_section(SectionId::Projects); }
                        >
                            "View Projects →"
                        </button>
                        <button
                            class="btn-outline-custom"
                            on:click=move |_| { dom::scroll_to_section(SectionId::Contact); }
                        >
                            "Let's Talk"
                        </button>
                    </div>

                    <div class="hero-stats fade-up" class:visible=visible>
                        {HERO_STATS
                            .iter()
                            .map(|(value, label)| {
                                view! {
                                    <div class="hero-stat">
                                        <div class="hero-stat-number">{*value}</div>
                                        <div class="hero-stat-label">{*label}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="hero-avatar-col">
                    <div class="avatar-wrapper">
                        <div class="avatar-ring-2"></div>
                        <div class="avatar-ring"></div>
                        <div class="avatar-pulse"></div>
                        <div class="avatar-circle">"👨‍💻"</div>
                        <div class="avatar-badge badge-react">"⚛"</div>
                        <div class="avatar-badge badge-php">"🐘"</div>
                        <div class="avatar-badge badge-python">"🐍"</div>
                    </div>
                </div>
            </div>
        </section>
    }
}
