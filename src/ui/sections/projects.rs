use leptos::html::Div;
use leptos::prelude::*;

use crate::core::SectionId;
use crate::core::catalog::PROJECTS;
use crate::ui::sections::stagger_style;

const PROJECT_STAGGER_MS: u32 = 120;

#[component]
pub fn ProjectsSection(node_ref: NodeRef<Div>, visible: Memo<bool>) -> impl IntoView {
    view! {
        <section id=SectionId::Projects.anchor() class="projects-section">
            <div class="section-container" node_ref=node_ref>
                <div class="section-heading">
                    <p class="section-label">"Portfolio"</p>
                    <h2 class="section-title">"Featured " <em>"Projects"</em></h2>
                </div>

                <div class="projects-grid">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(i, project)| {
                            let style = format!(
                                "--project-color: {}; {}",
                                project.color,
                                stagger_style(i, PROJECT_STAGGER_MS),
                            );
                            view! {
                                <div class="project-card fade-up" class:visible=visible style=style>
                                    <div class="project-card-accent"></div>
                                    <div class="project-icon">{project.icon}</div>
                                    <h3 class="project-title">{project.title}</h3>
                                    <p class="project-desc">{project.description}</p>
                                    <div class="tag-row">
                                        {project
                                            .tech
                                            .iter()
                                            .map(|tech| {
                                                view! {
                                                    <span class="tag" style=format!("--tag-color: {}", project.color)>
                                                        {*tech}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                    <div class="project-arrow">"→"</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
