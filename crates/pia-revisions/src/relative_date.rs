//! Relative-date buckets.
//!
//! A timestamp is placed in the finest bucket that applies, measured in
//! calendar days and months at a fixed UTC offset. Older timestamps never
//! land in a finer bucket than newer ones.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Offset, Utc};
use pia_common_config::RevisionsConfig;
use std::fmt;

/// Phrase of [`RelativeAge::Absolute`]; its slug selects month-year formatting.
pub const ABSOLUTE_MONTH_PHRASE: &str = "Translate month";

/// How long ago something happened, coarsened to a display bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelativeAge {
    Today,
    Yesterday,
    /// Whole calendar days, at least 2.
    DaysAgo(u32),
    ThisMonth,
    LastMonth,
    /// Older than every relative bucket; labelled by month and year.
    Absolute,
}

impl RelativeAge {
    /// Position in the finest-to-coarsest ordering.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Today => 0,
            Self::Yesterday => 1,
            Self::DaysAgo(_) => 2,
            Self::ThisMonth => 3,
            Self::LastMonth => 4,
            Self::Absolute => 5,
        }
    }

    /// English phrase, later slugified into a translation key.
    pub fn phrase(&self) -> String {
        match self {
            Self::Today => "Today".to_string(),
            Self::Yesterday => "Yesterday".to_string(),
            Self::DaysAgo(n) => format!("{n} days ago"),
            Self::ThisMonth => "This month".to_string(),
            Self::LastMonth => "Last month".to_string(),
            Self::Absolute => ABSOLUTE_MONTH_PHRASE.to_string(),
        }
    }
}

impl fmt::Display for RelativeAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.phrase())
    }
}

/// Bucket thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelativeDatePolicy {
    /// Largest day count reported as [`RelativeAge::DaysAgo`].
    pub max_days_ago: u32,
    /// Whether [`RelativeAge::LastMonth`] is used.
    pub last_month_bucket: bool,
    /// Offset at which calendar days and months are read.
    pub offset: FixedOffset,
}

impl Default for RelativeDatePolicy {
    fn default() -> Self {
        Self::from_config(&RevisionsConfig::default())
    }
}

impl RelativeDatePolicy {
    /// Build from the `revisions` config section.
    ///
    /// An out-of-range offset falls back to UTC.
    pub fn from_config(config: &RevisionsConfig) -> Self {
        let offset = FixedOffset::east_opt(config.utc_offset_minutes.saturating_mul(60))
            .unwrap_or_else(|| {
                tracing::warn!(
                    minutes = config.utc_offset_minutes,
                    "invalid UTC offset, using UTC"
                );
                Utc.fix()
            });

        Self {
            max_days_ago: config.max_days_ago,
            last_month_bucket: config.last_month_bucket,
            offset,
        }
    }

    fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.offset).date_naive()
    }

    /// Bucket of `instant` as seen at `now`. Instants after `now` are `Today`.
    pub fn classify(&self, instant: DateTime<Utc>, now: DateTime<Utc>) -> RelativeAge {
        let today = self.local_date(now);
        let day = self.local_date(instant);

        if day >= today {
            return RelativeAge::Today;
        }

        let days = (today - day).num_days();
        if days == 1 {
            return RelativeAge::Yesterday;
        }
        if days <= i64::from(self.max_days_ago) {
            // `days` is bounded by `max_days_ago` here.
            return RelativeAge::DaysAgo(days as u32);
        }

        let month = (day.year(), day.month());
        if month == (today.year(), today.month()) {
            return RelativeAge::ThisMonth;
        }
        if self.last_month_bucket && month == previous_month(today) {
            return RelativeAge::LastMonth;
        }
        RelativeAge::Absolute
    }

    /// Relative phrase for `instant`.
    pub fn phrase(&self, instant: DateTime<Utc>, now: DateTime<Utc>) -> String {
        self.classify(instant, now).phrase()
    }
}

fn previous_month(date: NaiveDate) -> (i32, u32) {
    match date.month() {
        1 => (date.year() - 1, 12),
        m => (date.year(), m - 1),
    }
}
