//! Page sections and active-section tracking
//!
//! The page is split into a fixed, ordered set of sections. While the user
//! scrolls, the section whose box spans the activation line near the top of
//! the viewport becomes the active one and is highlighted in the navbar.

/// Distance from the viewport top (in CSS pixels) used as the activation line
pub const ACTIVATION_OFFSET: f64 = 120.0;

/// Named region of the page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SectionId {
    #[default]
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl SectionId {
    /// Number of sections on the page
    pub const COUNT: usize = 5;

    /// All sections in document order
    pub const ALL: [SectionId; Self::COUNT] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// Sections that fade in when they first enter the viewport
    pub const ANIMATED: [SectionId; 4] = [
        SectionId::Home,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// Document anchor id of the section element
    pub fn anchor(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    /// Navbar label
    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.anchor() == anchor)
    }

    /// Position in document order, used to index per-section storage
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn is_animated(&self) -> bool {
        Self::ANIMATED.contains(self)
    }
}

/// Vertical extent of a rendered section relative to the viewport top
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Whether the box crosses the horizontal line `line`, edges included
    pub fn spans(&self, line: f64) -> bool {
        self.top <= line && self.bottom >= line
    }
}

/// Tracks which section is currently active
///
/// Scroll samples and explicit navigation both write the same value. A
/// sample in which no section spans the activation line leaves the current
/// value untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveSectionTracker {
    active: SectionId,
    offset: f64,
}

impl Default for ActiveSectionTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ActiveSectionTracker {
    pub fn new() -> Self {
        Self::with_offset(ACTIVATION_OFFSET)
    }

    pub fn with_offset(offset: f64) -> Self {
        Self {
            active: SectionId::default(),
            offset,
        }
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// First section, in document order, spanning the activation line
    ///
    /// `measure` returns `None` for sections whose element is missing from
    /// the document; those are skipped.
    pub fn scan<F>(&self, mut measure: F) -> Option<SectionId>
    where
        F: FnMut(SectionId) -> Option<SectionBounds>,
    {
        SectionId::ALL
            .into_iter()
            .find(|section| measure(*section).is_some_and(|b| b.spans(self.offset)))
    }

    /// Apply a scroll sample. Returns `true` when the active section changed.
    pub fn on_scroll<F>(&mut self, measure: F) -> bool
    where
        F: FnMut(SectionId) -> Option<SectionBounds>,
    {
        match self.scan(measure) {
            Some(section) => self.navigate(section),
            None => false,
        }
    }

    /// Select a section directly, bypassing the scan until the next sample.
    /// Returns `true` when the active section changed.
    pub fn navigate(&mut self, section: SectionId) -> bool {
        let changed = self.active != section;
        self.active = section;
        changed
    }
}
