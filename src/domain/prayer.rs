//! Prayer request model.
//!
//! A [`PrayerItem`] is one request to be prayed over during a session. Items are
//! immutable once loaded into a [`Deck`](super::Deck); the presentation-only
//! `time_ago` label is carried through untouched and never used in logic.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label used by submitters who chose not to share their name.
pub const ANONYMOUS_LABEL: &str = "Anonymous";

/// Request category, as offered on the submission screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    SpiritualGrowth,
    FinancialBreakthrough,
    JobOpportunities,
    MarriageAndRelationships,
    HealthAndHealing,
    FamilyAndChildren,
    Other,
}

impl Category {
    /// Every category in submission-screen order.
    pub const ALL: [Self; 7] = [
        Self::SpiritualGrowth,
        Self::FinancialBreakthrough,
        Self::JobOpportunities,
        Self::MarriageAndRelationships,
        Self::HealthAndHealing,
        Self::FamilyAndChildren,
        Self::Other,
    ];

    /// Human-readable label shown on the card badge.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SpiritualGrowth => "Spiritual Growth",
            Self::FinancialBreakthrough => "Financial Breakthrough",
            Self::JobOpportunities => "Job Opportunities",
            Self::MarriageAndRelationships => "Marriage & Relationships",
            Self::HealthAndHealing => "Health & Healing",
            Self::FamilyAndChildren => "Family & Children",
            Self::Other => "Other",
        }
    }

    /// Parses a category label. Unknown labels fall back to [`Category::Other`].
    ///
    /// ```
    /// use prayer_deck::domain::Category;
    ///
    /// assert_eq!(Category::from_label("Health & Healing"), Category::HealthAndHealing);
    /// assert_eq!(Category::from_label("Gardening"), Category::Other);
    /// ```
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(label))
            .unwrap_or(Self::Other)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.label().to_string()
    }
}

/// Who submitted a request.
///
/// On the wire this is a plain display name; the sentinel `"Anonymous"` maps to
/// [`Submitter::Anonymous`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Submitter {
    Named(String),
    Anonymous,
}

impl Submitter {
    /// Byline shown under the card body.
    ///
    /// ```
    /// use prayer_deck::domain::Submitter;
    ///
    /// assert_eq!(Submitter::Named("Sarah M.".into()).byline(), "by Sarah M.");
    /// assert_eq!(Submitter::Anonymous.byline(), "Anonymous");
    /// ```
    #[must_use]
    pub fn byline(&self) -> String {
        match self {
            Self::Named(name) => format!("by {name}"),
            Self::Anonymous => ANONYMOUS_LABEL.to_string(),
        }
    }
}

impl From<String> for Submitter {
    fn from(name: String) -> Self {
        let trimmed = name.trim();
        if trimmed.is_empty() || trimmed == ANONYMOUS_LABEL {
            Self::Anonymous
        } else {
            Self::Named(trimmed.to_string())
        }
    }
}

impl From<Submitter> for String {
    fn from(submitter: Submitter) -> Self {
        match submitter {
            Submitter::Named(name) => name,
            Submitter::Anonymous => ANONYMOUS_LABEL.to_string(),
        }
    }
}

/// One request to be prayed over.
///
/// # Fields
///
/// - `id`: Unique within a deck, stable for the lifetime of a session
/// - `category`: Request category badge
/// - `title`: Short heading
/// - `body`: Full request text (`content` on the wire)
/// - `submitter`: Display name or anonymous (`submittedBy` on the wire)
/// - `urgent`: Shows the urgent badge
/// - `time_ago`: Relative age label, display only (`timeAgo` on the wire)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrayerItem {
    pub id: u32,
    pub category: Category,
    pub title: String,
    #[serde(rename = "content")]
    pub body: String,
    #[serde(rename = "submittedBy")]
    pub submitter: Submitter,
    #[serde(default)]
    pub urgent: bool,
    #[serde(default)]
    pub time_ago: String,
}

impl PrayerItem {
    /// Creates a non-urgent item with an empty age label.
    #[must_use]
    pub fn new(
        id: u32,
        category: Category,
        title: impl Into<String>,
        body: impl Into<String>,
        submitter: Submitter,
    ) -> Self {
        Self {
            id,
            category,
            title: title.into(),
            body: body.into(),
            submitter,
            urgent: false,
            time_ago: String::new(),
        }
    }

    /// Marks the item urgent.
    #[must_use]
    pub fn urgent(mut self) -> Self {
        self.urgent = true;
        self
    }

    /// Sets the relative-age label.
    #[must_use]
    pub fn aged(mut self, time_ago: impl Into<String>) -> Self {
        self.time_ago = time_ago.into();
        self
    }
}
