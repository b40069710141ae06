//! Measure and answer records.

use pia_common_core::{AnswerId, MeasureId, PiaId};
use serde::{Deserialize, Serialize};

/// A mitigation measure attached to an assessment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Measure {
    pub id: MeasureId,
    pub pia_id: PiaId,
    pub title: Option<String>,
    pub content: Option<String>,
    /// Hint shown by the knowledge panel while the content is edited.
    #[serde(default)]
    pub placeholder: String,
}

impl Measure {
    pub fn new(id: MeasureId, pia_id: PiaId) -> Self {
        Self {
            id,
            pia_id,
            ..Self::default()
        }
    }
}

/// Stored response to one assessment question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub id: AnswerId,
    pub pia_id: PiaId,
    /// Reference code of the question.
    pub reference_to: u32,
    #[serde(default)]
    pub data: AnswerData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnswerData {
    pub text: Option<String>,
    pub gauge: Option<u8>,
    pub list: Option<Vec<String>>,
}

impl Answer {
    /// Replace the first list item equal to `old` with `new`.
    ///
    /// Returns whether the list changed.
    pub fn replace_list_item(&mut self, old: &str, new: &str) -> bool {
        let Some(item) = self
            .data
            .list
            .as_mut()
            .and_then(|list| list.iter_mut().find(|item| item.as_str() == old))
        else {
            return false;
        };
        *item = new.to_string();
        true
    }
}

/// Evaluation attached to a measure. Status 0 means not evaluated yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub status: u8,
}

impl Evaluation {
    pub fn is_evaluated(&self) -> bool {
        self.status > 0
    }
}

/// A rich-text editor instance attached to a page element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EditorHandle(pub u64);
