use std::time::{Duration, Instant};

/// Throttles per-frame ticks down to a fixed polling rate
pub struct PollTimer {
    interval: Duration,
    last_poll: Option<Instant>,
}

impl PollTimer {
    pub fn from_hz(hz: u32) -> Self {
        Self {
            interval: Duration::from_secs_f64(1.0 / hz.max(1) as f64),
            last_poll: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns true (and restarts the interval) when a poll is due. The first call always polls.
    pub fn poll_due(&mut self, now: Instant) -> bool {
        let due = match self.last_poll {
            Some(last_poll) => now.saturating_duration_since(last_poll) >= self.interval,
            None => true,
        };

        if due {
            self.last_poll = Some(now);
        }

        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_four_hz_interval() {
        let timer = PollTimer::from_hz(24);
        assert_eq!(timer.interval().as_micros(), 41_666);
    }

    #[test]
    fn first_tick_polls_immediately() {
        let mut timer = PollTimer::from_hz(24);
        assert!(timer.poll_due(Instant::now()));
    }

    #[test]
    fn frame_ticks_are_throttled() {
        let mut timer = PollTimer::from_hz(24);
        let start = Instant::now();
        let frame = Duration::from_micros(16_667); // 60 fps

        let polls = (0..60)
            .filter(|&i| timer.poll_due(start + frame * i))
            .count();

        // 41.7 ms doesn't divide into 16.7 ms frames, so every third frame polls
        assert_eq!(polls, 20);
    }

    #[test]
    fn waits_for_full_interval() {
        let mut timer = PollTimer::from_hz(24);
        let start = Instant::now();

        assert!(timer.poll_due(start));
        assert!(!timer.poll_due(start + Duration::from_millis(10)));
        assert!(!timer.poll_due(start + Duration::from_millis(41)));
        assert!(timer.poll_due(start + Duration::from_millis(42)));
        assert!(!timer.poll_due(start + Duration::from_millis(43)));
    }
}
