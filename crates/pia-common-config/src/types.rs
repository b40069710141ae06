//! Configuration types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PiaConfig {
    /// Preferred locale code (e.g. "fr"); detected from the environment when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Revision sidebar configuration.
    pub revisions: RevisionsConfig,
    /// Measure editor configuration.
    pub measures: MeasuresConfig,
    /// Knowledge base configuration.
    pub knowledge: KnowledgeConfig,
    /// Message catalog location.
    pub i18n: I18nConfig,
}

/// Revision sidebar configuration.
///
/// The bucket fields form the relative-date policy used to label revisions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RevisionsConfig {
    /// Largest day count labelled "N days ago"; older revisions of the
    /// current month fall in "this month".
    pub max_days_ago: u32,
    /// Whether the previous calendar month gets its own "last month" bucket.
    pub last_month_bucket: bool,
    /// Offset from UTC, in minutes, used to decide calendar days and months.
    pub utc_offset_minutes: i32,
    /// Show the sidebar title.
    pub show_title: bool,
}

impl Default for RevisionsConfig {
    fn default() -> Self {
        Self {
            max_days_ago: 7,
            last_month_bucket: true,
            utc_offset_minutes: 0,
            show_title: true,
        }
    }
}

/// Measure editor configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MeasuresConfig {
    /// Reference codes of the answers whose list holds measure titles.
    pub tag_answer_references: Vec<u32>,
    /// Prefix of the rich-text editor element id; the measure id is appended.
    pub editor_element_prefix: String,
}

impl Default for MeasuresConfig {
    fn default() -> Self {
        Self {
            tag_answer_references: vec![324, 334, 344],
            editor_element_prefix: "pia-measure-content-".to_string(),
        }
    }
}

/// Knowledge base configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeConfig {
    /// JSON file replacing the bundled example knowledge base.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example_dataset: Option<PathBuf>,
}

/// Message catalog location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Directory with one sub-directory per locale.
    pub locale_dir: PathBuf,
    /// Catalog file stem.
    pub domain: String,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            locale_dir: PathBuf::from("locales"),
            domain: "pia".to_string(),
        }
    }
}

impl PiaConfig {
    /// Effective locale: the configured one if valid, else detected.
    pub fn effective_locale(&self) -> pia_common_i18n::Locale {
        pia_common_i18n::detect_locale_with_override(self.locale.as_deref())
    }

    /// Catalog loader settings.
    pub fn loader_config(&self) -> pia_common_i18n::LoaderConfig {
        pia_common_i18n::LoaderConfig {
            locale_dir: self.i18n.locale_dir.clone(),
            domain: self.i18n.domain.clone(),
        }
    }
}
