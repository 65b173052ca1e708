//! Daily prayer times.

use crate::domain::error::{PrayerDeckError, Result};
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// A labelled time of day at which the user is prompted to pray.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrayerTime {
    pub hour: u32,
    pub minute: u32,
    pub label: String,
}

impl PrayerTime {
    /// # Errors
    ///
    /// [`PrayerDeckError::InvalidConfig`] if `hour >= 24` or `minute >= 60`.
    pub fn new(hour: u32, minute: u32, label: impl Into<String>) -> Result<Self> {
        let time = Self {
            hour,
            minute,
            label: label.into(),
        };
        time.validate()?;
        Ok(time)
    }

    /// Checks the fields form a wall-clock time. Deserialized values skip
    /// [`PrayerTime::new`], so config loading calls this explicitly.
    ///
    /// # Errors
    ///
    /// [`PrayerDeckError::InvalidConfig`] if `hour >= 24` or `minute >= 60`.
    pub fn validate(&self) -> Result<()> {
        if self.hour >= 24 || self.minute >= 60 {
            return Err(PrayerDeckError::InvalidConfig(format!(
                "prayer time {:02}:{:02} ({}) is not a valid time of day",
                self.hour, self.minute, self.label
            )));
        }
        Ok(())
    }

    /// Whether `now` falls within this time's minute.
    #[must_use]
    pub fn matches(&self, now: NaiveTime) -> bool {
        self.hour == now.hour() && self.minute == now.minute()
    }

    /// Minutes since midnight, for ordering.
    #[must_use]
    pub const fn minute_of_day(&self) -> u32 {
        self.hour * 60 + self.minute
    }
}

/// Morning, midday, evening and night prayer.
#[must_use]
pub fn default_prayer_times() -> Vec<PrayerTime> {
    [
        (6, "Morning Prayer"),
        (12, "Midday Prayer"),
        (18, "Evening Prayer"),
        (21, "Night Prayer"),
    ]
    .into_iter()
    .map(|(hour, label)| PrayerTime {
        hour,
        minute: 0,
        label: label.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_times() {
        assert!(PrayerTime::new(24, 0, "x").is_err());
        assert!(PrayerTime::new(23, 60, "x").is_err());
        assert!(PrayerTime::new(23, 59, "x").is_ok());
    }

    #[test]
    fn matches_whole_minute() {
        let t = PrayerTime::new(6, 0, "Morning Prayer").unwrap();
        assert!(t.matches(NaiveTime::from_hms_opt(6, 0, 0).unwrap()));
        assert!(t.matches(NaiveTime::from_hms_opt(6, 0, 59).unwrap()));
        assert!(!t.matches(NaiveTime::from_hms_opt(6, 1, 0).unwrap()));
    }
}
