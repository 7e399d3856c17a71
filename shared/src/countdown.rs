use serde::{Deserialize, Serialize};

const MS_PER_SECOND: u64 = 1_000;
const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 3_600;
const SECONDS_PER_DAY: u64 = 86_400;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct CountdownParts {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub expired: bool,
}

pub struct Countdown;

impl Countdown {
    /// Time left from `now_ms` until `deadline_ms`, both in Unix milliseconds.
    pub fn until(now_ms: u64, deadline_ms: u64) -> CountdownParts {
        if now_ms >= deadline_ms {
            return CountdownParts {
                expired: true,
                ..CountdownParts::default()
            };
        }

        // Round partial seconds up so the display never shows 0s while time remains.
        let total = (deadline_ms - now_ms + MS_PER_SECOND - 1) / MS_PER_SECOND;
        CountdownParts {
            days: total / SECONDS_PER_DAY,
            hours: (total % SECONDS_PER_DAY) / SECONDS_PER_HOUR,
            minutes: (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            seconds: total % SECONDS_PER_MINUTE,
            expired: false,
        }
    }

    /// Next UTC midnight strictly after `now_ms`. The daily promo resets there.
    pub fn next_daily_reset(now_ms: u64) -> u64 {
        let day_ms = SECONDS_PER_DAY * MS_PER_SECOND;
        (now_ms / day_ms + 1) * day_ms
    }
}

impl CountdownParts {
    pub fn total_seconds(&self) -> u64 {
        self.days * SECONDS_PER_DAY
            + self.hours * SECONDS_PER_HOUR
            + self.minutes * SECONDS_PER_MINUTE
            + self.seconds
    }

    pub fn format_compact(&self) -> String {
        if self.expired {
            return "Offer ended".to_string();
        }
        if self.days > 0 {
            format!("{}d {}h {}m", self.days, self.hours, self.minutes)
        } else if self.hours > 0 {
            format!("{}h {}m {}s", self.hours, self.minutes, self.seconds)
        } else if self.minutes > 0 {
            format!("{}m {}s", self.minutes, self.seconds)
        } else {
            format!("{}s", self.seconds)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_until_splits_units() {
        let deadline = (SECONDS_PER_DAY + 2 * SECONDS_PER_HOUR + 3 * SECONDS_PER_MINUTE + 4) * 1_000;
        let parts = Countdown::until(0, deadline);
        assert_eq!(
            parts,
            CountdownParts { days: 1, hours: 2, minutes: 3, seconds: 4, expired: false }
        );
        assert_eq!(parts.total_seconds() * 1_000, deadline);
        assert_eq!(parts.format_compact(), "1d 2h 3m");
    }

    #[test]
    fn test_partial_second_rounds_up() {
        let parts = Countdown::until(10_001, 11_000);
        assert_eq!(parts.seconds, 1);
        assert_eq!(parts.format_compact(), "1s");
    }

    #[test]
    fn test_next_daily_reset() {
        let day = SECONDS_PER_DAY * 1_000;
        assert_eq!(Countdown::next_daily_reset(0), day);
        assert_eq!(Countdown::next_daily_reset(day - 1), day);
        assert_eq!(Countdown::next_daily_reset(day), 2 * day);
    }

    #[test]
    fn test_expired() {
        assert!(Countdown::until(5_000, 5_000).expired);
        assert_eq!(Countdown::until(9_000, 1_000).format_compact(), "Offer ended");
    }
}
