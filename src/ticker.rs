use std::time::{Duration, Instant};

/// UI refresh interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 250;

/// Countdown granularity
pub const COUNTDOWN_PERIOD: Duration = Duration::from_secs(1);

/// Get UI refresh duration
pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}

/// One-shot, re-armable 1-second schedule driving the countdown.
///
/// The controller arms it when the timer starts running, re-arms after each
/// fired tick and cancels it whenever the timer leaves the running state.
#[derive(Debug, Clone, Default)]
pub struct Ticker {
    deadline: Option<Instant>,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule the next tick one period from `now`, replacing any pending one
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + COUNTDOWN_PERIOD);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Number of whole periods elapsed at `now`. Consumes them and keeps
    /// the schedule aligned to the original deadline.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let Some(deadline) = self.deadline else {
            return 0;
        };
        if now < deadline {
            return 0;
        }

        let overdue = now - deadline;
        let periods = (overdue.as_millis() / COUNTDOWN_PERIOD.as_millis()) as u32 + 1;
        self.deadline = Some(deadline + COUNTDOWN_PERIOD * periods);
        periods
    }

    /// How long the event loop may block before the next tick is due
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|deadline| deadline.saturating_duration_since(now))
    }
}

/// Poll timeout for the event loop: the UI refresh interval, shortened when a
/// countdown tick is due sooner.
pub fn poll_timeout(ticker: &Ticker, now: Instant) -> Duration {
    match ticker.time_until_due(now) {
        Some(until) => until.min(tick_duration()),
        None => tick_duration(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_duration() {
        let duration = tick_duration();
        assert_eq!(duration, Duration::from_millis(250));
    }

    #[test]
    fn test_unarmed_ticker_never_fires() {
        let mut ticker = Ticker::new();
        let now = Instant::now();
        assert!(!ticker.is_armed());
        assert_eq!(ticker.poll(now + Duration::from_secs(10)), 0);
    }

    #[test]
    fn test_fires_once_per_second() {
        let mut ticker = Ticker::new();
        let start = Instant::now();
        ticker.arm(start);

        assert_eq!(ticker.poll(start + Duration::from_millis(999)), 0);
        assert_eq!(ticker.poll(start + Duration::from_secs(1)), 1);
        assert_eq!(ticker.poll(start + Duration::from_millis(1500)), 0);
        assert_eq!(ticker.poll(start + Duration::from_secs(2)), 1);
    }

    #[test]
    fn test_catches_up_after_stall() {
        let mut ticker = Ticker::new();
        let start = Instant::now();
        ticker.arm(start);

        assert_eq!(ticker.poll(start + Duration::from_millis(3500)), 3);
        assert_eq!(ticker.poll(start + Duration::from_secs(4)), 1);
    }

    #[test]
    fn test_cancel() {
        let mut ticker = Ticker::new();
        let start = Instant::now();
        ticker.arm(start);
        ticker.cancel();

        assert!(!ticker.is_armed());
        assert_eq!(ticker.poll(start + Duration::from_secs(5)), 0);
    }

    #[test]
    fn test_rearm_restarts_period() {
        let mut ticker = Ticker::new();
        let start = Instant::now();
        ticker.arm(start);
        ticker.arm(start + Duration::from_millis(800));

        assert_eq!(ticker.poll(start + Duration::from_secs(1)), 0);
        assert_eq!(ticker.poll(start + Duration::from_millis(1800)), 1);
    }

    #[test]
    fn test_poll_timeout() {
        let mut ticker = Ticker::new();
        let start = Instant::now();
        assert_eq!(poll_timeout(&ticker, start), tick_duration());

        ticker.arm(start);
        assert_eq!(
            poll_timeout(&ticker, start + Duration::from_millis(900)),
            Duration::from_millis(100)
        );
        assert_eq!(poll_timeout(&ticker, start), tick_duration());
    }
}
