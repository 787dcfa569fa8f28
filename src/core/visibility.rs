//! One-shot viewport visibility tracking
//!
//! Every animated section owns a slot in a [`VisibilityArena`]. A slot starts
//! hidden, and the first intersection sample at or above its threshold marks
//! it visible for good. Observation is scoped by a [`TrackerHandle`]: samples
//! delivered through a handle that has been detached (or replaced by a newer
//! attach) are dropped, so a late callback from a torn-down observer can
//! never touch the slot.

use thiserror::Error;

use super::section::SectionId;

#[derive(Debug, Clone, PartialEq, Error)]
#[error("visibility threshold must be in (0, 1], got {0}")]
pub struct ThresholdError(pub f64);

/// Fraction of an element's area that must be inside the viewport
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityThreshold(f64);

impl VisibilityThreshold {
    /// 10% of the element visible
    pub const DEFAULT: VisibilityThreshold = VisibilityThreshold(0.1);

    pub fn new(fraction: f64) -> Result<Self, ThresholdError> {
        if fraction > 0.0 && fraction <= 1.0 {
            Ok(Self(fraction))
        } else {
            Err(ThresholdError(fraction))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_met_by(&self, ratio: f64) -> bool {
        ratio >= self.0
    }
}

impl Default for VisibilityThreshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Proof of an active observation on one arena slot
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrackerHandle {
    section: SectionId,
    epoch: u32,
}

impl TrackerHandle {
    pub fn section(&self) -> SectionId {
        self.section
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct TrackerSlot {
    threshold: VisibilityThreshold,
    epoch: u32,
    observing: bool,
    visible: bool,
}

/// Per-section visibility flags with attach/detach lifecycle
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisibilityArena {
    slots: [TrackerSlot; SectionId::COUNT],
}

impl VisibilityArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start observing `section`. Any previous handle for the slot goes stale.
    pub fn attach(&mut self, section: SectionId, threshold: VisibilityThreshold) -> TrackerHandle {
        let slot = &mut self.slots[section.index()];
        slot.epoch = slot.epoch.wrapping_add(1);
        slot.threshold = threshold;
        slot.observing = true;
        TrackerHandle {
            section,
            epoch: slot.epoch,
        }
    }

    /// Stop observing. The visibility flag keeps its value.
    pub fn detach(&mut self, handle: TrackerHandle) {
        let slot = &mut self.slots[handle.section.index()];
        if slot.epoch == handle.epoch {
            slot.observing = false;
        }
    }

    /// Record an intersection sample
    ///
    /// Returns `true` only for the sample that flips the slot to visible.
    pub fn observe(&mut self, handle: TrackerHandle, ratio: f64) -> bool {
        let slot = &mut self.slots[handle.section.index()];
        if !slot.observing || slot.epoch != handle.epoch || slot.visible {
            return false;
        }
        if slot.threshold.is_met_by(ratio) {
            slot.visible = true;
            return true;
        }
        false
    }

    pub fn is_visible(&self, section: SectionId) -> bool {
        self.slots[section.index()].visible
    }

    pub fn is_observing(&self, section: SectionId) -> bool {
        self.slots[section.index()].observing
    }

    /// Whether samples from `handle` would still be accepted
    pub fn is_current(&self, handle: TrackerHandle) -> bool {
        let slot = &self.slots[handle.section.index()];
        slot.observing && slot.epoch == handle.epoch
    }
}
