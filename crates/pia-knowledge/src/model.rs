//! Knowledge base records.

use chrono::{DateTime, Utc};
use pia_common_core::{KnowledgeBaseId, KnowledgeEntryId};
use serde::{Deserialize, Serialize};

/// A named collection of knowledge entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    pub id: KnowledgeBaseId,
    pub name: String,
    pub author: String,
    pub contributors: String,
    /// Bundled read-only base shipped with the application.
    #[serde(default)]
    pub is_example: bool,
    pub created_at: DateTime<Utc>,
}

/// One piece of guidance stored in a knowledge base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    pub id: KnowledgeEntryId,
    pub knowledge_base_id: KnowledgeBaseId,
    pub slug: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    /// Assessment items the entry applies to.
    #[serde(default)]
    pub items: Vec<u32>,
    pub created_at: DateTime<Utc>,
}

/// Entry of the bundled example knowledge base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleEntry {
    pub slug: String,
    pub filters: String,
    pub category: String,
    pub placeholder: String,
    pub name: String,
    pub description: String,
}

/// Inline-editable fields of a [`KnowledgeBase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseField {
    Name,
    Author,
    Contributors,
}

impl BaseField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Author => "author",
            Self::Contributors => "contributors",
        }
    }
}

impl std::str::FromStr for BaseField {
    type Err = pia_common_core::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "author" => Ok(Self::Author),
            "contributors" => Ok(Self::Contributors),
            other => Err(pia_common_core::Error::validation(format!(
                "knowledge base has no editable field '{other}'"
            ))),
        }
    }
}

impl KnowledgeBase {
    /// Overwrite one editable field.
    pub fn set_field(&mut self, field: BaseField, value: String) {
        match field {
            BaseField::Name => self.name = value,
            BaseField::Author => self.author = value,
            BaseField::Contributors => self.contributors = value,
        }
    }
}
