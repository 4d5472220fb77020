/// Fixed-interval gravity timer.
///
/// Each firing schedules the next one a full interval after the firing time,
/// so a slow frame delays the following tick instead of causing a burst.
/// Cancellation is permanent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickTimer {
    interval_ms: u64,
    next_due_ms: u64,
    cancelled: bool,
}

impl TickTimer {
    /// Arm the timer; the first tick is due one interval after `now_ms`.
    pub fn new(interval_ms: u64, now_ms: u64) -> Self {
        let interval_ms = interval_ms.max(1);
        Self {
            interval_ms,
            next_due_ms: now_ms.saturating_add(interval_ms),
            cancelled: false,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn is_due(&self, now_ms: u64) -> bool {
        !self.cancelled && now_ms >= self.next_due_ms
    }

    /// Time left until the next tick, `None` once cancelled.
    pub fn remaining_ms(&self, now_ms: u64) -> Option<u64> {
        if self.cancelled {
            return None;
        }
        Some(self.next_due_ms.saturating_sub(now_ms))
    }

    /// Record a tick at `now_ms` and schedule the next one.
    pub fn fire(&mut self, now_ms: u64) {
        self.next_due_ms = now_ms.saturating_add(self.interval_ms);
    }

    /// Stop the timer. Returns `false` if it was already cancelled.
    pub fn cancel(&mut self) -> bool {
        if self.cancelled {
            return false;
        }
        self.cancelled = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_is_one_interval_out() {
        let t = TickTimer::new(500, 1000);
        assert!(!t.is_due(1499));
        assert!(t.is_due(1500));
        assert_eq!(t.remaining_ms(1200), Some(300));
    }

    #[test]
    fn fire_reschedules_from_fire_time() {
        let mut t = TickTimer::new(500, 0);
        // Late by 120ms.
        t.fire(620);
        assert!(!t.is_due(1119));
        assert!(t.is_due(1120));
    }

    #[test]
    fn remaining_saturates_when_overdue() {
        let t = TickTimer::new(100, 0);
        assert_eq!(t.remaining_ms(250), Some(0));
    }

    #[test]
    fn cancel_is_permanent_and_reported_once() {
        let mut t = TickTimer::new(500, 0);
        assert!(t.cancel());
        assert!(!t.cancel());
        assert!(t.is_cancelled());
        assert!(!t.is_due(10_000));
        assert_eq!(t.remaining_ms(0), None);
    }

    #[test]
    fn zero_interval_is_clamped() {
        assert_eq!(TickTimer::new(0, 0).interval_ms(), 1);
    }
}
