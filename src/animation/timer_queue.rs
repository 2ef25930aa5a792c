use std::time::Duration;

#[derive(Debug, Clone)]
struct TimerEntry<T> {
    due: Duration,
    seq: u64,
    payload: T,
}

/// One-shot timers keyed by a payload.
///
/// Entries fire in due order; entries sharing a due time fire in the order
/// they were scheduled. Scheduling never replaces an existing entry.
#[derive(Debug, Clone)]
pub struct TimerQueue<T> {
    entries: Vec<TimerEntry<T>>,
    next_seq: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_seq: 0,
        }
    }
}

impl<T> TimerQueue<T> {
    pub fn schedule(&mut self, due: Duration, payload: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(TimerEntry { due, seq, payload });
    }

    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.entries.iter().map(|entry| entry.due).min()
    }

    /// Removes and returns the earliest entry due at or before `now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<T> {
        let position = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.due <= now)
            .min_by_key(|(_, entry)| (entry.due, entry.seq))
            .map(|(position, _)| position)?;
        Some(self.entries.remove(position).payload)
    }

    /// Drops every entry whose payload fails `keep`. Returns how many were dropped.
    pub fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| keep(&entry.payload));
        before - self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn payloads(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|entry| &entry.payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_due_then_schedule_order() {
        let mut queue = TimerQueue::default();
        queue.schedule(Duration::from_millis(200), "late");
        queue.schedule(Duration::from_millis(100), "first");
        queue.schedule(Duration::from_millis(100), "second");

        assert_eq!(queue.next_due(), Some(Duration::from_millis(100)));
        assert_eq!(queue.pop_due(Duration::from_millis(50)), None);
        assert_eq!(queue.pop_due(Duration::from_millis(150)), Some("first"));
        assert_eq!(queue.pop_due(Duration::from_millis(150)), Some("second"));
        assert_eq!(queue.pop_due(Duration::from_millis(150)), None);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn retain_reports_dropped_entries() {
        let mut queue = TimerQueue::default();
        queue.schedule(Duration::ZERO, 1usize);
        queue.schedule(Duration::ZERO, 2usize);
        queue.schedule(Duration::ZERO, 1usize);
        assert_eq!(queue.retain(|payload| *payload != 1), 2);
        assert_eq!(queue.payloads().copied().collect::<Vec<_>>(), vec![2]);
    }
}
