//! Scroll-triggered marker classes.
//!
//! The animator picks its targets once, at page-ready, and keeps observing
//! them for the page's lifetime. An element gets the marker class the first
//! time it is visible at or beyond the threshold; the class is never removed,
//! so scrolling back out leaves it in place.
//!
//! Content rendered after initialization is not observed.

use std::collections::HashMap;

use dxg_core::ChildSelector;

use crate::dom::{Document, NodeId};

/// Targets, threshold and marker class for a [`VisibilityAnimator`].
#[derive(Debug, Clone)]
pub struct AnimatorSettings {
    pub selector: ChildSelector,
    pub threshold: f64,
    pub marker_class: String,
}

impl Default for AnimatorSettings {
    fn default() -> Self {
        Self {
            selector: ChildSelector::default(),
            threshold: 0.1,
            marker_class: "animate-in".to_string(),
        }
    }
}

/// One visibility change reported by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub target: NodeId,
    /// Visible fraction of the target, in `[0, 1]`.
    pub intersection_ratio: f64,
    pub is_intersecting: bool,
}

/// Whether `ratio` counts as visible under `threshold`.
fn is_visible(ratio: f64, threshold: f64) -> bool {
    ratio > 0.0 && ratio >= threshold
}

#[derive(Debug, Clone)]
pub struct VisibilityAnimator {
    targets: Vec<NodeId>,
    threshold: f64,
    marker_class: String,
}

impl VisibilityAnimator {
    /// Select every element currently matching the configured selector and
    /// start observing it.
    #[must_use]
    pub fn init(doc: &Document, settings: &AnimatorSettings) -> Self {
        let selector = &settings.selector;
        let targets = doc.select(selector);
        tracing::debug!(targets = targets.len(), %selector, "observing elements");
        Self {
            targets,
            threshold: settings.threshold,
            marker_class: settings.marker_class.clone(),
        }
    }

    #[must_use]
    pub fn targets(&self) -> &[NodeId] {
        &self.targets
    }

    #[must_use]
    pub fn is_observed(&self, target: NodeId) -> bool {
        self.targets.contains(&target)
    }

    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Apply a batch of entries. Returns how many elements newly received
    /// the marker class.
    pub fn handle_entries(&self, doc: &mut Document, entries: &[IntersectionEntry]) -> usize {
        let mut marked = 0;
        for entry in entries {
            if entry.is_intersecting
                && is_visible(entry.intersection_ratio, self.threshold)
                && self.is_observed(entry.target)
                && doc.add_class(entry.target, &self.marker_class)
            {
                marked += 1;
            }
        }
        marked
    }

    /// A tracker that produces entries for this animator's targets.
    #[must_use]
    pub fn tracker(&self) -> IntersectionTracker {
        let mut tracker = IntersectionTracker::new(self.threshold);
        for target in &self.targets {
            tracker.observe(*target);
        }
        tracker
    }
}

/// Turns raw visible ratios into [`IntersectionEntry`] values, emitting an
/// entry only when a target crosses the threshold in either direction.
#[derive(Debug, Clone)]
pub struct IntersectionTracker {
    threshold: f64,
    last_ratio: HashMap<NodeId, f64>,
}

impl IntersectionTracker {
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            last_ratio: HashMap::new(),
        }
    }

    /// Start tracking `target`, initially out of view.
    pub fn observe(&mut self, target: NodeId) {
        self.last_ratio.entry(target).or_insert(0.0);
    }

    /// Record a new visible ratio for `target`.
    ///
    /// Returns an entry when the target's visibility changed across the
    /// threshold; `None` for unobserved targets or movement that stays on
    /// one side of it.
    pub fn update(&mut self, target: NodeId, ratio: f64) -> Option<IntersectionEntry> {
        let ratio = ratio.clamp(0.0, 1.0);
        let last = self.last_ratio.get_mut(&target)?;
        let was_visible = is_visible(*last, self.threshold);
        *last = ratio;
        let now_visible = is_visible(ratio, self.threshold);

        (was_visible != now_visible).then_some(IntersectionEntry {
            target,
            intersection_ratio: ratio,
            is_intersecting: ratio > 0.0,
        })
    }
}
