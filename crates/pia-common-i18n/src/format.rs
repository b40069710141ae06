//! Locale-aware date formatting.

use super::Locale;
use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// Full month name and year, e.g. "March 2024" or "mars 2024".
pub fn month_year<Tz: TimeZone>(dt: &DateTime<Tz>, locale: Locale) -> String
where
    Tz::Offset: Display,
{
    dt.format_localized("%B %Y", locale.chrono_locale()).to_string()
}
