//! Prayer-time notifications and slot commitments.
//!
//! Owned explicitly by the runtime and driven by polling; there is no global
//! timer. The session controller's [`Action::PrayerStarted`] and
//! [`Action::PrayerEnded`] are fed back through
//! [`NotificationScheduler::apply_session_action`] so prompts pause while the
//! user is praying.
//!
//! [`Action::PrayerStarted`]: crate::app::Action::PrayerStarted
//! [`Action::PrayerEnded`]: crate::app::Action::PrayerEnded

pub mod notifier;
pub mod prayer_times;
pub mod slots;

pub use notifier::{Notification, NotificationScheduler, POLL_INTERVAL};
pub use prayer_times::{default_prayer_times, PrayerTime};
pub use slots::TimeSlot;
