//! Top-level page state shared by the navbar and the sections
//!
//! Holds the active-section tracker, the mobile menu flag, the skill filter
//! and the visibility arena, and routes user intents to them.

use leptos::prelude::*;

use crate::core::catalog::SkillFilter;
use crate::core::{ActiveSectionTracker, SectionId, VisibilityArena};
use crate::ui::dom;

#[derive(Clone, Copy)]
pub struct PortfolioState {
    tracker: RwSignal<ActiveSectionTracker>,
    pub menu_open: RwSignal<bool>,
    pub skill_filter: RwSignal<SkillFilter>,
    pub(crate) visibility: RwSignal<VisibilityArena>,
}

impl PortfolioState {
    pub fn new() -> Self {
        Self {
            tracker: RwSignal::new(ActiveSectionTracker::new()),
            menu_open: RwSignal::new(false),
            skill_filter: RwSignal::new(SkillFilter::All),
            visibility: RwSignal::new(VisibilityArena::new()),
        }
    }

    pub fn active_section(&self) -> Memo<SectionId> {
        let tracker = self.tracker;
        Memo::new(move |_| tracker.with(|t| t.active()))
    }

    /// Nav link click: highlight immediately, scroll there, close the menu
    pub fn navigate(&self, section: SectionId) {
        dom::scroll_to_section(section);
        self.menu_open.set(false);
        self.tracker.maybe_update(|t| t.navigate(section));
    }

    /// Re-run the active-section scan against the current layout
    pub fn sync_active_section(&self) {
        self.tracker.maybe_update(|t| t.on_scroll(dom::measure_section));
    }

    pub fn close_menu(&self) {
        self.menu_open.set(false);
    }

    pub fn toggle_menu(&self) {
        self.menu_open.update(|open| *open = !*open);
    }

    pub fn select_filter(&self, filter: SkillFilter) {
        self.skill_filter.set(filter);
    }

    /// Whether `section` has entered the viewport at least once
    pub fn is_visible(&self, section: SectionId) -> Memo<bool> {
        let visibility = self.visibility;
        Memo::new(move |_| visibility.with(|arena| arena.is_visible(section)))
    }
}

impl Default for PortfolioState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_portfolio_state() -> PortfolioState {
    let state = PortfolioState::new();
    provide_context(state);
    state
}

pub fn use_portfolio_state() -> PortfolioState {
    use_context::<PortfolioState>().expect("PortfolioState should be provided")
}
