//! Hourly time slots a user can commit to praying in.
//!
//! Slots run on the hour from 6:00 AM to 11:00 PM and are written the way they
//! are shown: `"6:00 AM"`, `"12:00 PM"`, `"11:00 PM"`.

use crate::domain::error::{PrayerDeckError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// First committable hour (6 AM).
pub const FIRST_SLOT_HOUR: u32 = 6;

/// Last committable hour (11 PM).
pub const LAST_SLOT_HOUR: u32 = 23;

/// Label attached to prayer times created from a commitment.
pub const COMMITTED_LABEL: &str = "Committed Prayer";

/// One committable hour of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot {
    hour: u32,
}

impl TimeSlot {
    /// # Errors
    ///
    /// [`PrayerDeckError::InvalidConfig`] outside 6..=23.
    pub fn new(hour: u32) -> Result<Self> {
        if (FIRST_SLOT_HOUR..=LAST_SLOT_HOUR).contains(&hour) {
            Ok(Self { hour })
        } else {
            Err(PrayerDeckError::InvalidConfig(format!(
                "no prayer slot at hour {hour}"
            )))
        }
    }

    /// Every slot in display order.
    pub fn all() -> impl Iterator<Item = Self> {
        (FIRST_SLOT_HOUR..=LAST_SLOT_HOUR).map(|hour| Self { hour })
    }

    /// Hour of day, 0-23.
    #[must_use]
    pub const fn hour(self) -> u32 {
        self.hour
    }

    /// Parses a `"h:00 AM"` / `"h:00 PM"` label.
    ///
    /// ```
    /// use prayer_deck::scheduler::TimeSlot;
    ///
    /// assert_eq!(TimeSlot::parse("12:00 PM").unwrap().hour(), 12);
    /// assert_eq!(TimeSlot::parse("9:00 pm").unwrap().hour(), 21);
    /// assert!(TimeSlot::parse("3:00 AM").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// [`PrayerDeckError::InvalidConfig`] for malformed labels, labels not on
    /// the hour, and hours outside the committable range.
    pub fn parse(label: &str) -> Result<Self> {
        let invalid = || PrayerDeckError::InvalidConfig(format!("invalid time slot '{label}'"));

        let (clock, meridiem) = label.trim().split_once(' ').ok_or_else(invalid)?;
        let (hour, minute) = clock.split_once(':').ok_or_else(invalid)?;
        let hour: u32 = hour.parse().map_err(|_| invalid())?;
        if minute != "00" || !(1..=12).contains(&hour) {
            return Err(invalid());
        }

        let hour = match meridiem.trim().to_ascii_uppercase().as_str() {
            "AM" => hour % 12,
            "PM" => hour % 12 + 12,
            _ => return Err(invalid()),
        };
        Self::new(hour)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let meridiem = if self.hour < 12 { "AM" } else { "PM" };
        let display_hour = match self.hour % 12 {
            0 => 12,
            h => h,
        };
        write!(f, "{display_hour}:00 {meridiem}")
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = PrayerDeckError;

    fn try_from(label: String) -> Result<Self> {
        Self::parse(&label)
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.to_string()
    }
}
