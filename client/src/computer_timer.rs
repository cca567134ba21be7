use std::time::{Duration, Instant};

/// Paces the computer's reply so it does not land in the same frame as the
/// human's click. Armed when the computer gets the turn, fires once.
pub struct ComputerMoveTimer {
    delay: Duration,
    armed_at: Option<Instant>,
}

impl ComputerMoveTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            armed_at: None,
        }
    }

    pub fn disarm(&mut self) {
        self.armed_at = None;
    }

    /// Returns true exactly once per computer turn, after the delay elapsed.
    pub fn poll(&mut self, is_computer_turn: bool, now: Instant) -> bool {
        if !is_computer_turn {
            self.armed_at = None;
            return false;
        }

        let armed_at = *self.armed_at.get_or_insert(now);
        if now.duration_since(armed_at) >= self.delay {
            self.armed_at = None;
            return true;
        }
        false
    }

    /// Time left before the armed timer fires.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.armed_at
            .map(|armed_at| self.delay.saturating_sub(now.duration_since(armed_at)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_after_delay() {
        let mut timer = ComputerMoveTimer::new(Duration::from_millis(300));
        let start = Instant::now();
        assert!(!timer.poll(true, start));
        assert!(timer.remaining(start).is_some());
        assert!(!timer.poll(true, start + Duration::from_millis(299)));
        assert!(timer.poll(true, start + Duration::from_millis(300)));
        assert_eq!(timer.remaining(start), None);
    }

    #[test]
    fn test_rearms_for_next_turn() {
        let mut timer = ComputerMoveTimer::new(Duration::from_millis(100));
        let start = Instant::now();
        timer.poll(true, start);
        assert!(timer.poll(true, start + Duration::from_millis(150)));
        assert!(!timer.poll(true, start + Duration::from_millis(160)));
        assert!(timer.poll(true, start + Duration::from_millis(260)));
    }

    #[test]
    fn test_not_computer_turn_disarms() {
        let mut timer = ComputerMoveTimer::new(Duration::from_millis(100));
        let start = Instant::now();
        timer.poll(true, start);
        assert!(!timer.poll(false, start + Duration::from_millis(500)));
        assert_eq!(timer.remaining(start), None);
    }

    #[test]
    fn test_zero_delay_fires_immediately() {
        let mut timer = ComputerMoveTimer::new(Duration::ZERO);
        assert!(timer.poll(true, Instant::now()));
    }

    #[test]
    fn test_remaining() {
        let mut timer = ComputerMoveTimer::new(Duration::from_millis(300));
        let start = Instant::now();
        assert_eq!(timer.remaining(start), None);
        timer.poll(true, start);
        assert_eq!(
            timer.remaining(start + Duration::from_millis(100)),
            Some(Duration::from_millis(200))
        );
        timer.disarm();
        assert_eq!(timer.remaining(start), None);
    }
}
