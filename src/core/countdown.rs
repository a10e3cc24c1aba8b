//! # Countdown
//!
//! `CountdownBudget` is the total time allotted to a quiz session. It is a
//! duration, not a wall-clock deadline. `Countdown` is the ticking copy the
//! Quiz view owns; the session container never decrements it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CountdownBudget {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl CountdownBudget {
    pub fn new(hours: u64, minutes: u64, seconds: u64) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Normalizes a second count into hours/minutes/seconds.
    pub fn from_secs(total: u64) -> Self {
        Self {
            hours: total / 3600,
            minutes: (total % 3600) / 60,
            seconds: total % 60,
        }
    }

    pub fn total_secs(&self) -> u64 {
        self.hours
            .saturating_mul(3600)
            .saturating_add(self.minutes.saturating_mul(60))
            .saturating_add(self.seconds)
    }

    pub fn as_duration(&self) -> Duration {
        Duration::from_secs(self.total_secs())
    }

}

impl From<Duration> for CountdownBudget {
    fn from(value: Duration) -> Self {
        Self::from_secs(value.as_secs())
    }
}

impl fmt::Display for CountdownBudget {
    /// `HH:MM:SS`, with minutes and seconds normalized.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = Self::from_secs(self.total_secs());
        write!(f, "{:02}:{:02}:{:02}", n.hours, n.minutes, n.seconds)
    }
}

/// A running countdown, advanced by the caller with elapsed wall time.
#[derive(Debug, Clone)]
pub struct Countdown {
    budget: Duration,
    remaining: Duration,
}

impl Countdown {
    pub fn new(budget: CountdownBudget) -> Self {
        let budget = budget.as_duration();
        Self {
            budget,
            remaining: budget,
        }
    }

    /// Subtracts `elapsed`, saturating at zero. Returns true once expired.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        self.remaining = self.remaining.saturating_sub(elapsed);
        self.is_expired()
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Time consumed so far.
    pub fn elapsed(&self) -> Duration {
        self.budget - self.remaining
    }

    pub fn is_expired(&self) -> bool {
        self.remaining.is_zero()
    }

    /// Remaining time rounded up to whole seconds, as a budget for display.
    pub fn remaining_budget(&self) -> CountdownBudget {
        let secs = self.remaining.as_secs() + u64::from(self.remaining.subsec_nanos() > 0);
        CountdownBudget::from_secs(secs)
    }

    /// Fraction of the budget still left, in `0.0..=1.0`.
    pub fn ratio_remaining(&self) -> f64 {
        if self.budget.is_zero() {
            return 0.0;
        }
        self.remaining.as_secs_f64() / self.budget.as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_from_secs_normalizes() {
        let b = CountdownBudget::from_secs(3725);
        assert_eq!(b, CountdownBudget::new(1, 2, 5));
        assert_eq!(b.total_secs(), 3725);
    }

    #[test]
    fn test_budget_display_normalizes_overflowing_minutes() {
        // The minute field is allowed to exceed 59; display folds it into hours.
        let b = CountdownBudget::new(0, 120, 0);
        assert_eq!(b.to_string(), "02:00:00");
        assert_eq!(CountdownBudget::from_secs(75).to_string(), "00:01:15");
    }

    #[test]
    fn test_total_secs_saturates_on_huge_budget() {
        let budget = CountdownBudget::new(u64::MAX, 59, 59);
        assert_eq!(budget.total_secs(), u64::MAX);
        assert_eq!(budget.as_duration(), Duration::from_secs(u64::MAX));
    }

    #[test]
    fn test_countdown_ticks_and_expires() {
        let mut c = Countdown::new(CountdownBudget::from_secs(3));
        assert!(!c.tick(Duration::from_millis(1500)));
        assert_eq!(c.remaining_budget().total_secs(), 2);
        assert!(!c.tick(Duration::from_millis(1000)));
        assert!(c.tick(Duration::from_secs(10)));
        assert!(c.remaining().is_zero());
        assert_eq!(c.elapsed(), Duration::from_secs(3));
    }

    #[test]
    fn test_zero_budget_is_already_expired() {
        let c = Countdown::new(CountdownBudget::default());
        assert!(c.is_expired());
        assert_eq!(c.ratio_remaining(), 0.0);
    }

    #[test]
    fn test_ratio_remaining() {
        let mut c = Countdown::new(CountdownBudget::from_secs(10));
        c.tick(Duration::from_secs(5));
        assert!((c.ratio_remaining() - 0.5).abs() < f64::EPSILON);
    }
}
