//! Scroll-driven active-section tracking, expressed as an explicit observer
//! registration interface instead of a rendering framework's lifecycle hooks.
//! Sections register a vertical band; feeding the tracker a scroll offset
//! recomputes which section the viewport anchor currently sits in.

use std::sync::{Arc, Mutex, Weak};

use serde::Serialize;

/// Vertical band a section occupies in the document, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.bottom
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionInfo {
    pub id: String,
    pub label: String,
}

struct Registration {
    token: u64,
    id: String,
    label: String,
    bounds: SectionBounds,
}

#[derive(Default)]
struct TrackerState {
    next_token: u64,
    sections: Vec<Registration>,
    active: Option<String>,
}

/// Tracks the active page section from scroll offsets.
///
/// Registrations live until their `Subscription` is cancelled or dropped;
/// re-registering an id replaces its bounds in place, keeping document order.
pub struct SectionTracker {
    /// Offset below the scroll position used as the anchor line, matching the
    /// fixed-header height the client compensates for.
    anchor_offset: f64,
    state: Mutex<TrackerState>,
}

impl SectionTracker {
    pub fn new(anchor_offset: f64) -> Arc<Self> {
        Arc::new(Self {
            anchor_offset,
            state: Mutex::new(TrackerState::default()),
        })
    }

    /// Registers a section band for observation. The returned subscription
    /// unregisters it on `cancel` or drop.
    pub fn observe(
        self: &Arc<Self>,
        id: impl Into<String>,
        label: impl Into<String>,
        bounds: SectionBounds,
    ) -> Subscription {
        let id = id.into();
        let label = label.into();
        let mut state = self.state.lock().expect("tracker mutex poisoned");
        let token = state.next_token;
        state.next_token += 1;

        if let Some(existing) = state.sections.iter_mut().find(|r| r.id == id) {
            existing.token = token;
            existing.label = label;
            existing.bounds = bounds;
        } else {
            state.sections.push(Registration {
                token,
                id,
                label,
                bounds,
            });
        }

        Subscription {
            tracker: Arc::downgrade(self),
            token,
        }
    }

    /// Feeds a new scroll offset and returns the resulting active section.
    /// Between bands the previous active section is kept, mirroring how the
    /// intersection-based original only updated on entry.
    pub fn record_scroll(&self, offset: f64) -> Option<String> {
        let anchor = offset + self.anchor_offset;
        let mut state = self.state.lock().expect("tracker mutex poisoned");
        let hit = state
            .sections
            .iter()
            .find(|r| r.bounds.contains(anchor))
            .map(|r| r.id.clone());
        if hit.is_some() {
            state.active = hit;
        }
        state.active.clone()
    }

    /// Marks a section active directly, as a click on a nav link does ahead
    /// of the smooth scroll it triggers.
    pub fn activate(&self, id: &str) -> bool {
        let mut state = self.state.lock().expect("tracker mutex poisoned");
        let known = state.sections.iter().any(|r| r.id == id);
        if known {
            state.active = Some(id.to_string());
        }
        known
    }

    pub fn active_section(&self) -> Option<String> {
        self.state
            .lock()
            .expect("tracker mutex poisoned")
            .active
            .clone()
    }

    /// Registered sections in document order, for nav hydration.
    pub fn sections(&self) -> Vec<SectionInfo> {
        self.state
            .lock()
            .expect("tracker mutex poisoned")
            .sections
            .iter()
            .map(|r| SectionInfo {
                id: r.id.clone(),
                label: r.label.clone(),
            })
            .collect()
    }

    fn unregister(&self, token: u64) {
        let mut state = self.state.lock().expect("tracker mutex poisoned");
        state.sections.retain(|r| r.token != token);
    }
}

/// Handle for one observed section. Cancelling (or dropping) removes the
/// registration, the explicit replacement for an unmount effect.
pub struct Subscription {
    tracker: Weak<SectionTracker>,
    token: u64,
}

impl Subscription {
    pub fn cancel(self) {
        // Drop does the work.
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(tracker) = self.tracker.upgrade() {
            tracker.unregister(self.token);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker_with_sections() -> (Arc<SectionTracker>, Vec<Subscription>) {
        let tracker = SectionTracker::new(80.0);
        let subs = vec![
            tracker.observe("hero", "Home", SectionBounds::new(0.0, 600.0)),
            tracker.observe("about", "About", SectionBounds::new(600.0, 1400.0)),
            tracker.observe("contact", "Contact", SectionBounds::new(1400.0, 2200.0)),
        ];
        (tracker, subs)
    }

    #[test]
    fn scroll_selects_the_section_under_the_anchor() {
        let (tracker, _subs) = tracker_with_sections();
        assert_eq!(tracker.record_scroll(0.0).as_deref(), Some("hero"));
        // 550 + 80 anchor offset lands inside "about".
        assert_eq!(tracker.record_scroll(550.0).as_deref(), Some("about"));
        assert_eq!(tracker.record_scroll(1500.0).as_deref(), Some("contact"));
    }

    #[test]
    fn active_section_is_sticky_between_bands() {
        let (tracker, _subs) = tracker_with_sections();
        tracker.record_scroll(700.0);
        assert_eq!(tracker.record_scroll(5000.0).as_deref(), Some("about"));
    }

    #[test]
    fn cancelling_a_subscription_unregisters_the_section() {
        let (tracker, mut subs) = tracker_with_sections();
        subs.remove(1).cancel(); // "about"
        let ids: Vec<_> = tracker.sections().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["hero", "contact"]);
        // The anchor now falls in no band, so the previous active is kept.
        tracker.record_scroll(0.0);
        assert_eq!(tracker.record_scroll(700.0).as_deref(), Some("hero"));
    }

    #[test]
    fn reobserving_a_section_replaces_its_bounds() {
        let tracker = SectionTracker::new(0.0);
        let _a = tracker.observe("hero", "Home", SectionBounds::new(0.0, 100.0));
        let _b = tracker.observe("hero", "Home", SectionBounds::new(0.0, 900.0));
        assert_eq!(tracker.sections().len(), 1);
        assert_eq!(tracker.record_scroll(500.0).as_deref(), Some("hero"));
    }

    #[test]
    fn activate_marks_known_sections_only() {
        let (tracker, _subs) = tracker_with_sections();
        assert!(tracker.activate("contact"));
        assert_eq!(tracker.active_section().as_deref(), Some("contact"));
        assert!(!tracker.activate("missing"));
    }
}
