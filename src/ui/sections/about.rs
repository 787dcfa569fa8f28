use leptos::prelude::*;

use crate::core::SectionId;
use crate::core::catalog::{ABOUT_INFO, ABOUT_TRAITS};

/// Biography. Not animated: it is usually on screen right after the hero.
#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id=SectionId::About.anchor() class="about-section">
            <div class="section-row">
                <div class="about-visual">
                    <div class="about-visual-glow"></div>
                    <div class="about-code-lines">
                        <span class="code-line cl-1"></span>
                        <span class="code-line cl-2"></span>
                        <span class="code-line cl-3"></span>
                        <span class="code-line cl-4"></span>
                    </div>
                    <span class="about-emoji">"🚀"</span>
                </div>

                <div class="about-content">
                    <p class="section-label">"About Me"</p>
                    <h2 class="section-title">"Crafting Digital" <br /> <em>"Experiences"</em></h2>
                    <p class="about-text">
                        "Hi! I'm " <strong>"Rachid El Mekkaouy"</strong>
                        ", a passionate full-stack developer with a strong foundation in both "
                        "front-end and back-end technologies. I love turning complex problems "
                        "into clean, elegant solutions."
                    </p>
                    <p class="about-text">
                        "Whether it's building reactive UIs with React, crafting robust APIs with "
                        "Laravel, or architecting cloud-deployed services, I bring dedication and "
                        "creativity to every project."
                    </p>

                    <div class="tag-row">
                        {ABOUT_TRAITS
                            .iter()
                            .map(|t| view! { <span class="tag">{*t}</span> })
                            .collect_view()}
                    </div>

                    <div class="about-info-row">
                        {ABOUT_INFO
                            .iter()
                            .map(|(icon, text)| {
                                view! {
                                    <div class="about-info-item">
                                        <span class="about-info-icon">{*icon}</span>
                                        <span>{*text}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
