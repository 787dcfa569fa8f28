//! The single-page portfolio
//!
//! Owns the page-wide state and composes the sections in order. Each
//! animated section gets its own visibility flag bound to its content row.

use leptos::html::Div;
use leptos::prelude::*;

use crate::core::{SectionId, VisibilityThreshold};
use crate::ui::navbar::Navbar;
use crate::ui::page_state::provide_portfolio_state;
use crate::ui::scroll::use_active_section_tracking;
use crate::ui::sections::{
    AboutSection, ContactSection, Footer, HeroSection, ProjectsSection, SkillsSection,
};
use crate::ui::visibility::use_section_visibility;

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let state = provide_portfolio_state();
    use_active_section_tracking(state);

    let hero_ref = NodeRef::<Div>::new();
    let skills_ref = NodeRef::<Div>::new();
    let projects_ref = NodeRef::<Div>::new();
    let contact_ref = NodeRef::<Div>::new();

    let threshold = VisibilityThreshold::DEFAULT;
    let hero_visible = use_section_visibility(state, SectionId::Home, hero_ref, threshold);
    let skills_visible = use_section_visibility(state, SectionId::Skills, skills_ref, threshold);
    let projects_visible =
        use_section_visibility(state, SectionId::Projects, projects_ref, threshold);
    let contact_visible =
        use_section_visibility(state, SectionId::Contact, contact_ref, threshold);

    view! {
        <div class="portfolio-root">
            <Navbar />
            <main>
                <HeroSection node_ref=hero_ref visible=hero_visible />
                <AboutSection />
                <SkillsSection node_ref=skills_ref visible=skills_visible />
                <ProjectsSection node_ref=projects_ref visible=projects_visible />
                <ContactSection node_ref=contact_ref visible=contact_visible />
            </main>
            <Footer />
        </div>
    }
}
