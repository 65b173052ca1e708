//! Prayer-time notification scheduler.
//!
//! The scheduler is an ordinary owned value: whoever drives it calls
//! [`NotificationScheduler::poll`] roughly once per [`POLL_INTERVAL`] with the
//! local time of day. A notification is produced when the time matches a
//! configured prayer time, subject to three suppressions:
//!
//! 1. The user is currently praying.
//! 2. A notification is already showing.
//! 3. The same hour:minute already fired (polling twice within a minute).

use super::prayer_times::{default_prayer_times, PrayerTime};
use super::slots::{TimeSlot, COMMITTED_LABEL};
use crate::app::Action;
use crate::domain::error::Result;
use chrono::{NaiveTime, Timelike};
use serde::Serialize;
use std::time::Duration;

/// How often a driver should poll.
pub const POLL_INTERVAL: Duration = Duration::from_secs(60);

const TEST_MESSAGE: &str = "🙏 Test Prayer Notification - May God bless you";

/// A prompt to pray, as shown by the notification banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub message: String,
    /// Label of the prayer time that fired; `None` for test notifications.
    pub prayer_label: Option<String>,
}

/// Matches wall-clock time against prayer times and tracks banner state.
#[derive(Debug, Clone)]
pub struct NotificationScheduler {
    times: Vec<PrayerTime>,
    showing: Option<Notification>,
    praying: bool,
    last_fired: Option<(u32, u32)>,
}

impl Default for NotificationScheduler {
    fn default() -> Self {
        Self {
            times: default_prayer_times(),
            showing: None,
            praying: false,
            last_fired: None,
        }
    }
}

impl NotificationScheduler {
    /// Scheduler over `times`, kept in time-of-day order.
    ///
    /// # Errors
    ///
    /// [`PrayerDeckError::InvalidConfig`](crate::PrayerDeckError::InvalidConfig)
    /// if any time is not a valid time of day.
    pub fn new(mut times: Vec<PrayerTime>) -> Result<Self> {
        for time in &times {
            time.validate()?;
        }
        times.sort_by_key(PrayerTime::minute_of_day);
        Ok(Self {
            times,
            ..Self::default()
        })
    }

    #[must_use]
    pub fn prayer_times(&self) -> &[PrayerTime] {
        &self.times
    }

    #[must_use]
    pub const fn is_praying(&self) -> bool {
        self.praying
    }

    /// The notification currently on screen.
    #[must_use]
    pub const fn current(&self) -> Option<&Notification> {
        self.showing.as_ref()
    }

    /// Checks `now` against the prayer times. Returns the notification to
    /// show, if one is due and not suppressed.
    pub fn poll(&mut self, now: NaiveTime) -> Option<Notification> {
        if self.praying {
            tracing::trace!("user is praying, skipping notification");
            return None;
        }
        if self.showing.is_some() {
            tracing::trace!("notification already showing, skipping");
            return None;
        }

        let key = (now.hour(), now.minute());
        if self.last_fired == Some(key) {
            return None;
        }

        let due = self.times.iter().find(|time| time.matches(now))?;
        tracing::debug!(label = %due.label, hour = key.0, minute = key.1, "prayer time reached");

        let notification = Notification {
            message: format!("Time for {}", due.label),
            prayer_label: Some(due.label.clone()),
        };
        self.showing = Some(notification.clone());
        self.last_fired = Some(key);
        Some(notification)
    }

    /// Dismisses the banner.
    pub fn hide(&mut self) {
        self.showing = None;
    }

    /// Shows a test notification unless the user is praying. Replaces any
    /// banner already showing.
    pub fn trigger_test(&mut self) -> Option<Notification> {
        if self.praying {
            tracing::debug!("user is praying, not showing test notification");
            return None;
        }
        let notification = Notification {
            message: TEST_MESSAGE.to_string(),
            prayer_label: None,
        };
        self.showing = Some(notification.clone());
        Some(notification)
    }

    /// Marks the user as praying and hides any banner.
    pub fn start_prayer(&mut self) {
        self.praying = true;
        self.hide();
    }

    pub fn end_prayer(&mut self) {
        self.praying = false;
    }

    /// Keeps praying state in step with the session controller.
    pub fn apply_session_action(&mut self, action: &Action) {
        match action {
            Action::PrayerStarted => self.start_prayer(),
            Action::PrayerEnded => self.end_prayer(),
            _ => {}
        }
    }

    /// Adds a daily prompt at a committed slot. Committing twice is a no-op.
    pub fn commit(&mut self, slot: TimeSlot) {
        let exists = self.times.iter().any(|time| {
            time.hour == slot.hour() && time.minute == 0 && time.label == COMMITTED_LABEL
        });
        if exists {
            return;
        }

        tracing::debug!(slot = %slot, "committed to prayer slot");
        self.times.push(PrayerTime {
            hour: slot.hour(),
            minute: 0,
            label: COMMITTED_LABEL.to_string(),
        });
        self.times.sort_by_key(PrayerTime::minute_of_day);
    }

    /// First prayer time strictly after `now`, wrapping to tomorrow.
    #[must_use]
    pub fn next_prayer_time(&self, now: NaiveTime) -> Option<&PrayerTime> {
        let minute_of_day = now.hour() * 60 + now.minute();
        self.times
            .iter()
            .find(|time| time.minute_of_day() > minute_of_day)
            .or_else(|| self.times.first())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u32, minute: u32, second: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, second).unwrap()
    }

    #[test]
    fn fires_at_prayer_time() {
        let mut s = NotificationScheduler::default();
        assert!(s.poll(at(5, 59, 0)).is_none());

        let n = s.poll(at(6, 0, 10)).unwrap();
        assert_eq!(n.message, "Time for Morning Prayer");
        assert_eq!(s.current(), Some(&n));
    }

    #[test]
    fn same_minute_fires_once() {
        let mut s = NotificationScheduler::default();
        assert!(s.poll(at(12, 0, 0)).is_some());
        s.hide();
        assert!(s.poll(at(12, 0, 40)).is_none());
    }

    #[test]
    fn showing_banner_suppresses_new_ones() {
        let mut s = NotificationScheduler::new(vec![
            PrayerTime::new(7, 0, "a").unwrap(),
            PrayerTime::new(7, 1, "b").unwrap(),
        ])
        .unwrap();
        assert!(s.poll(at(7, 0, 0)).is_some());
        assert!(s.poll(at(7, 1, 0)).is_none());
    }

    #[test]
    fn praying_suppresses_everything() {
        let mut s = NotificationScheduler::default();
        assert!(s.trigger_test().is_some());
        s.apply_session_action(&Action::PrayerStarted);
        assert!(s.current().is_none());
        assert!(s.poll(at(18, 0, 0)).is_none());
        assert!(s.trigger_test().is_none());

        s.apply_session_action(&Action::PrayerEnded);
        assert!(s.poll(at(18, 0, 0)).is_some());
    }

    #[test]
    fn commitments_add_prompts() {
        let mut s = NotificationScheduler::default();
        let slot = TimeSlot::parse("7:00 AM").unwrap();
        s.commit(slot);
        s.commit(slot);
        assert_eq!(s.prayer_times().len(), 5);

        let n = s.poll(at(7, 0, 0)).unwrap();
        assert_eq!(n.prayer_label.as_deref(), Some(COMMITTED_LABEL));
    }

    #[test]
    fn next_prayer_wraps_past_midnight() {
        let s = NotificationScheduler::default();
        assert_eq!(s.next_prayer_time(at(6, 0, 0)).unwrap().label, "Midday Prayer");
        assert_eq!(s.next_prayer_time(at(22, 15, 0)).unwrap().label, "Morning Prayer");
    }
}
