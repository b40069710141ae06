//! Collaborators of the measure editor.

use crate::model::{Answer, EditorHandle, Measure};
use async_trait::async_trait;
use pia_common_core::{MeasureId, PiaId, Result};

/// Measure persistence.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MeasureStore: Send + Sync {
    async fn load(&self, id: MeasureId) -> Result<Measure>;
    async fn save(&self, measure: &Measure) -> Result<()>;
}

/// Answers addressed by assessment and question reference code.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnswerService: Send + Sync {
    async fn get(&self, pia_id: PiaId, reference_to: u32) -> Result<Answer>;
    async fn update(&self, answer: &Answer) -> Result<()>;
}

/// Assessment-wide validation state.
#[cfg_attr(test, mockall::automock)]
pub trait GlobalEvaluation: Send + Sync {
    /// Re-run validation of the whole assessment.
    fn validate(&self);
    /// Whether answers may currently be edited.
    fn answer_edition_enabled(&self) -> bool;
}

/// Knowledge panel shown next to the editor.
#[cfg_attr(test, mockall::automock)]
pub trait KnowledgeHints: Send + Sync {
    /// Hide the knowledge entry matching a measure title already in use.
    fn hide_item(&self, title: &str);
    /// Swap a hidden title after a rename.
    fn replace_hidden_item(&self, new_title: &str, old_title: &str);
    fn set_placeholder(&self, placeholder: Option<String>);
}

/// Host of rich-text editor widgets.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RichTextEditorHost: Send + Sync {
    /// Attach an editor to the element with id `element_id`.
    async fn load(&self, element_id: &str) -> Result<EditorHandle>;
    fn remove(&self, handle: EditorHandle);
}

/// Remembers which measure the removal dialog applies to.
#[cfg_attr(test, mockall::automock)]
pub trait PendingRemovalStore: Send + Sync {
    fn set_pending_measure(&self, id: MeasureId);
}
