use leptos::html::Div;
use leptos::prelude::*;

use crate::core::SectionId;
use crate::core::catalog::{SkillFilter, filter_skills};
use crate::ui::page_state::use_portfolio_state;
use crate::ui::sections::stagger_style;

/// Per-card fade-in delay
const SKILL_STAGGER_MS: u32 = 40;

/// Filterable skill grid
///
/// The selected filter lives in [`PortfolioState`](crate::ui::page_state::PortfolioState)
/// so it is kept when the user scrolls away and back.
#[component]
pub fn SkillsSection(node_ref: NodeRef<Div>, visible: Memo<bool>) -> impl IntoView {
    let state = use_portfolio_state();
    let filter = state.skill_filter;

    view! {
        <section id=SectionId::Skills.anchor() class="skills-section">
            <div class="glow-orb orb-skills"></div>

            <div class="section-container" node_ref=node_ref>
                <div class="section-heading">
                    <p class="section-label">"What I Know"</p>
                    <h2 class="section-title">"My " <em>"Skills"</em></h2>
                </div>

                <div class="filter-row">
                    {SkillFilter::options()
                        .map(|option| {
                            view! {
                                <button
                                    class="filter-btn"
                                    class:active=move || filter.get() == option
                                    on:click=move |_| state.select_filter(option)
                                >
                                    {option.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="skills-grid">
                    {move || {
                        filter_skills(filter.get())
                            .enumerate()
                            .map(|(i, skill)| {
                                let style = format!(
                                    "--skill-color: {}; {}",
                                    skill.color,
                                    stagger_style(i, SKILL_STAGGER_MS),
                                );
                                view! {
                                    <div class="skill-card fade-up" class:visible=visible style=style>
                                        <div class="skill-icon">{skill.icon}</div>
                                        <div class="skill-name">{skill.name}</div>
                                        <div class="skill-cat">{skill.category.label()}</div>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </section>
    }
}
