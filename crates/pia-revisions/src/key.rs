//! Group key resolution.

use crate::relative_date::{RelativeDatePolicy, ABSOLUTE_MONTH_PHRASE};
use crate::slug::slugify;
use chrono::{DateTime, Utc};
use pia_common_i18n::{interpolate, month_year, Locale, Translator};

/// Prefix of the relative-date messages.
pub const DATE_KEY_PREFIX: &str = "date.";

/// Placeholder a counted message may use for the count.
pub const COUNT_PLACEHOLDER: &str = "{count}";

const COUNT_ARG: &str = "count";

/// Turns revision dates into localized group labels.
///
/// The locale is read from the translator once, when the resolver is built,
/// so every label of one table uses the same locale.
#[derive(Clone, Copy)]
pub struct GroupKeyResolver<'a> {
    policy: &'a RelativeDatePolicy,
    translator: &'a dyn Translator,
    locale: Locale,
}

impl<'a> GroupKeyResolver<'a> {
    pub fn new(policy: &'a RelativeDatePolicy, translator: &'a dyn Translator) -> Self {
        Self {
            policy,
            translator,
            locale: translator.locale(),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Label for a record created at `created_at`, seen at `now`.
    pub fn key_for(&self, created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
        let slug = slugify(&self.policy.phrase(created_at, now));

        if slug.chars().any(|c| c.is_ascii_digit()) {
            if let Some((count, unit)) = slug.split_once('-') {
                return self.counted(count, unit);
            }
        } else if slug == slugify(ABSOLUTE_MONTH_PHRASE) {
            let local = created_at.with_timezone(&self.policy.offset);
            return month_year(&local, self.locale);
        }

        self.translator
            .resolve_in(self.locale, &format!("{DATE_KEY_PREFIX}{slug}"))
    }

    /// `date.<unit>` with the count substituted, or appended when the
    /// message has no placeholder.
    fn counted(&self, count: &str, unit: &str) -> String {
        let message = self
            .translator
            .resolve_in(self.locale, &format!("{DATE_KEY_PREFIX}{unit}"));
        if message.contains(COUNT_PLACEHOLDER) {
            interpolate(&message, &[(COUNT_ARG, count)])
        } else {
            format!("{message} {count}")
        }
    }
}

impl std::fmt::Debug for GroupKeyResolver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroupKeyResolver")
            .field("policy", self.policy)
            .field("locale", &self.locale)
            .finish()
    }
}
