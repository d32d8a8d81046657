//! Navigator Model
//!
//! State owned by one section index navigator: the entries it draws, the
//! reference measurement of its first row and the per-gesture tracker.

use super::section::NavSection;

/// One label in the navigator strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigatorEntry {
    pub section_key: String,
    pub title: String,
    /// True iff the section has items
    pub active: bool,
}

impl NavigatorEntry {
    /// Build the entries for a section list
    ///
    /// The title comes from `title_for` when given; an empty title falls back
    /// to the section key.
    pub fn build(sections: &[NavSection], title_for: Option<&dyn Fn(&str) -> String>) -> Vec<Self> {
        sections
            .iter()
            .map(|section| {
                let title = title_for
                    .map(|format| format(&section.key))
                    .filter(|title| !title.is_empty())
                    .unwrap_or_else(|| section.key.clone());
                Self {
                    section_key: section.key.clone(),
                    title,
                    active: section.active,
                }
            })
            .collect()
    }
}

/// Absolute position and size of the navigator's first row
///
/// Every row is assumed to be this tall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutMeasurement {
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

/// Where a selection came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectSource {
    /// Pointer press or drag over the strip
    Touch,
    /// Programmatic selection by key
    Direct,
}

/// A section the navigator wants the list to scroll to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavSelection {
    pub key: String,
    pub source: SelectSource,
}

/// Per-gesture tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    /// A gesture is in progress; `last_selected` is the last index it fired for
    Tracking { last_selected: Option<usize> },
}

impl GestureState {
    /// Responder granted: a new gesture starts with a fresh tracker
    pub fn grant(&mut self) {
        *self = GestureState::Tracking {
            last_selected: None,
        };
    }

    /// Moving without a grant (e.g. a drag entering the strip) starts tracking;
    /// an ongoing gesture keeps its last index
    pub fn track(&mut self) {
        if *self == GestureState::Idle {
            self.grant();
        }
    }

    pub fn release(&mut self) {
        *self = GestureState::Idle;
    }

    pub fn is_tracking(&self) -> bool {
        matches!(self, GestureState::Tracking { .. })
    }

    pub fn last_selected(&self) -> Option<usize> {
        match self {
            GestureState::Tracking { last_selected } => *last_selected,
            GestureState::Idle => None,
        }
    }

    /// Record a fired index; returns false when it matches the last one
    pub fn enter(&mut self, index: usize) -> bool {
        if self.last_selected() == Some(index) {
            return false;
        }
        *self = GestureState::Tracking {
            last_selected: Some(index),
        };
        true
    }

    /// Forget the last fired index without ending the gesture
    pub fn reset_tracker(&mut self) {
        if let GestureState::Tracking { last_selected } = self {
            *last_selected = None;
        }
    }
}

/// Measurement scheduled by a render, resolved on the next event-loop turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PendingMeasure {
    #[default]
    None,
    Scheduled(LayoutMeasurement),
}

impl PendingMeasure {
    pub fn schedule(&mut self, measurement: LayoutMeasurement) {
        *self = PendingMeasure::Scheduled(measurement);
    }

    pub fn cancel(&mut self) {
        *self = PendingMeasure::None;
    }

    pub fn is_scheduled(&self) -> bool {
        matches!(self, PendingMeasure::Scheduled(_))
    }

    /// Take the scheduled measurement, leaving nothing pending
    pub fn resolve(&mut self) -> Option<LayoutMeasurement> {
        match std::mem::take(self) {
            PendingMeasure::Scheduled(measurement) => Some(measurement),
            PendingMeasure::None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav(key: &str, active: bool) -> NavSection {
        NavSection {
            key: key.to_string(),
            active,
        }
    }

    #[test]
    fn test_entries_default_title_is_key() {
        let entries = NavigatorEntry::build(&[nav("A", true), nav("B", false)], None);
        assert_eq!(entries[0].title, "A");
        assert!(entries[0].active);
        assert_eq!(entries[1].title, "B");
        assert!(!entries[1].active);
    }

    #[test]
    fn test_entries_use_formatter_with_key_fallback() {
        let format = |key: &str| if key == "#" { String::new() } else { key.to_lowercase() };
        let entries = NavigatorEntry::build(&[nav("A", true), nav("#", true)], Some(&format as &dyn Fn(&str) -> String));
        assert_eq!(entries[0].title, "a");
        assert_eq!(entries[1].title, "#");
    }

    #[test]
    fn test_gesture_state_transitions() {
        let mut state = GestureState::default();
        assert!(!state.is_tracking());

        state.grant();
        assert_eq!(state, GestureState::Tracking { last_selected: None });

        assert!(state.enter(2));
        assert!(!state.enter(2));
        assert!(state.enter(3));
        assert_eq!(state.last_selected(), Some(3));

        state.reset_tracker();
        assert!(state.is_tracking());
        assert_eq!(state.last_selected(), None);

        state.release();
        assert_eq!(state, GestureState::Idle);
    }

    #[test]
    fn test_grant_while_tracking_starts_fresh() {
        let mut state = GestureState::Tracking {
            last_selected: Some(1),
        };
        state.grant();
        assert_eq!(state, GestureState::Tracking { last_selected: None });
    }

    #[test]
    fn test_track_keeps_last_index() {
        let mut state = GestureState::Tracking {
            last_selected: Some(1),
        };
        state.track();
        assert_eq!(state.last_selected(), Some(1));

        let mut idle = GestureState::Idle;
        idle.track();
        assert_eq!(idle, GestureState::Tracking { last_selected: None });
    }

    #[test]
    fn test_pending_measure_resolves_once() {
        let measurement = LayoutMeasurement { y: 4, width: 3, height: 1 };
        let mut pending = PendingMeasure::default();
        pending.schedule(measurement);
        assert!(pending.is_scheduled());
        assert_eq!(pending.resolve(), Some(measurement));
        assert_eq!(pending.resolve(), None);
    }

    #[test]
    fn test_pending_measure_cancel() {
        let mut pending = PendingMeasure::default();
        pending.schedule(LayoutMeasurement { y: 0, width: 1, height: 1 });
        pending.cancel();
        assert_eq!(pending.resolve(), None);
    }
}
