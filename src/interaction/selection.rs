use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::animation::TimerQueue;

/// Delay before a bar that lost the highlight returns to the normal stroke.
pub const HIGHLIGHT_RESET_DELAY: Duration = Duration::from_millis(100);

/// Receives selection changes. Notified on every scroll update, not only when
/// the index changes.
pub trait BarSelectionObserver {
    fn on_bar_selected(&mut self, value: f64, index: usize);
}

/// What happens to a pending highlight reset when its bar is selected again
/// before the reset fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HighlightResetPolicy {
    /// Pending resets always fire. A bar re-selected within the delay loses
    /// its highlight when the older reset lands.
    #[default]
    KeepPending,
    /// Selecting a bar drops any pending reset targeting it.
    CancelSuperseded,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarSelection {
    pub value: f64,
    pub index: usize,
}

impl BarSelection {
    /// Reported when there is no data to select from.
    pub const EMPTY: Self = Self {
        value: 0.0,
        index: 0,
    };

    #[must_use]
    pub fn new(value: f64, index: usize) -> Self {
        Self { value, index }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightSwap {
    pub previous: usize,
    pub current: usize,
}

/// Last highlighted bar, pending highlight resets and the selection observer.
pub struct SelectionState {
    last_highlighted: usize,
    pending_resets: TimerQueue<usize>,
    reset_policy: HighlightResetPolicy,
    observer: Option<Weak<RefCell<dyn BarSelectionObserver>>>,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new(HighlightResetPolicy::default())
    }
}

impl SelectionState {
    #[must_use]
    pub fn new(reset_policy: HighlightResetPolicy) -> Self {
        Self {
            last_highlighted: 0,
            pending_resets: TimerQueue::default(),
            reset_policy,
            observer: None,
        }
    }

    /// Stores a non-owning handle to `observer`.
    pub fn set_observer<O>(&mut self, observer: &Rc<RefCell<O>>)
    where
        O: BarSelectionObserver + 'static,
    {
        let observer: Rc<RefCell<dyn BarSelectionObserver>> = observer.clone();
        self.observer = Some(Rc::downgrade(&observer));
    }

    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    #[must_use]
    pub fn has_observer(&self) -> bool {
        self.observer
            .as_ref()
            .is_some_and(|observer| observer.strong_count() > 0)
    }

    #[must_use]
    pub fn reset_policy(&self) -> HighlightResetPolicy {
        self.reset_policy
    }

    pub fn set_reset_policy(&mut self, policy: HighlightResetPolicy) {
        self.reset_policy = policy;
    }

    #[must_use]
    pub fn last_highlighted(&self) -> usize {
        self.last_highlighted
    }

    /// Reports a selection to the observer and returns what was reported.
    ///
    /// `None` (no data) is reported as `(0, 0)`.
    pub fn observe(&mut self, selection: Option<BarSelection>) -> BarSelection {
        let selection = selection.unwrap_or(BarSelection::EMPTY);
        trace!(index = selection.index, value = selection.value, "bar selected");
        self.notify(selection);
        selection
    }

    fn notify(&mut self, selection: BarSelection) {
        let Some(weak) = self.observer.as_ref() else {
            return;
        };
        let Some(observer) = weak.upgrade() else {
            trace!("selection observer dropped; detaching");
            self.observer = None;
            return;
        };
        match observer.try_borrow_mut() {
            Ok(mut observer) => observer.on_bar_selected(selection.value, selection.index),
            Err(_) => warn!(
                index = selection.index,
                "selection observer already borrowed; skipping notification"
            ),
        };
    }

    /// Moves the highlight to `index`.
    ///
    /// Returns `None` when `index` is already the highlighted bar. Otherwise the
    /// previously highlighted bar gets a reset scheduled at
    /// `now + HIGHLIGHT_RESET_DELAY` and the caller must highlight `current`
    /// immediately.
    pub fn swap_highlight(&mut self, index: usize, now: Duration) -> Option<HighlightSwap> {
        if index == self.last_highlighted {
            return None;
        }

        let previous = self.last_highlighted;
        self.pending_resets
            .schedule(now + HIGHLIGHT_RESET_DELAY, previous);
        if self.reset_policy == HighlightResetPolicy::CancelSuperseded {
            let dropped = self.pending_resets.retain(|pending| *pending != index);
            if dropped > 0 {
                trace!(index, dropped, "cancelled superseded highlight resets");
            }
        }
        self.last_highlighted = index;
        Some(HighlightSwap {
            previous,
            current: index,
        })
    }

    /// Pulls `last_highlighted` back into range after the bar count changed.
    pub fn rebase(&mut self, bar_count: usize) {
        if self.last_highlighted >= bar_count {
            self.last_highlighted = 0;
        }
    }

    #[must_use]
    pub fn next_reset_due(&self) -> Option<Duration> {
        self.pending_resets.next_due()
    }

    pub fn pop_due_reset(&mut self, now: Duration) -> Option<usize> {
        self.pending_resets.pop_due(now)
    }

    #[must_use]
    pub fn pending_reset_count(&self) -> usize {
        self.pending_resets.len()
    }

    #[must_use]
    pub fn pending_reset_targets(&self) -> Vec<usize> {
        self.pending_resets.payloads().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<(f64, usize)>,
    }

    impl BarSelectionObserver for Recorder {
        fn on_bar_selected(&mut self, value: f64, index: usize) {
            self.calls.push((value, index));
        }
    }

    #[test]
    fn observe_notifies_every_time_even_when_unchanged() {
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        let mut state = SelectionState::default();
        state.set_observer(&recorder);

        state.observe(Some(BarSelection::new(7.0, 1)));
        state.observe(Some(BarSelection::new(7.0, 1)));
        state.observe(None);

        assert_eq!(recorder.borrow().calls, vec![(7.0, 1), (7.0, 1), (0.0, 0)]);
    }

    #[test]
    fn dropped_observer_is_detached() {
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        let mut state = SelectionState::default();
        state.set_observer(&recorder);
        assert!(state.has_observer());

        drop(recorder);
        assert!(!state.has_observer());
        state.observe(Some(BarSelection::new(1.0, 0)));
    }

    #[test]
    fn swap_schedules_reset_for_previous_bar_only_on_change() {
        let mut state = SelectionState::default();
        let now = Duration::from_millis(40);

        assert_eq!(state.swap_highlight(0, now), None);
        assert_eq!(
            state.swap_highlight(2, now),
            Some(HighlightSwap {
                previous: 0,
                current: 2
            })
        );
        assert_eq!(state.next_reset_due(), Some(Duration::from_millis(140)));
        assert_eq!(state.pop_due_reset(Duration::from_millis(139)), None);
        assert_eq!(state.pop_due_reset(Duration::from_millis(140)), Some(0));
    }

    #[test]
    fn cancel_superseded_drops_reset_of_reselected_bar() {
        let mut state = SelectionState::new(HighlightResetPolicy::CancelSuperseded);
        state.swap_highlight(2, Duration::ZERO);
        state.swap_highlight(3, Duration::from_millis(10));
        assert_eq!(state.pending_reset_targets(), vec![0, 2]);

        state.swap_highlight(2, Duration::from_millis(20));
        assert_eq!(state.pending_reset_targets(), vec![0, 3]);
    }

    #[test]
    fn rebase_clamps_stale_index() {
        let mut state = SelectionState::default();
        state.swap_highlight(9, Duration::ZERO);
        state.rebase(4);
        assert_eq!(state.last_highlighted(), 0);
    }
}
