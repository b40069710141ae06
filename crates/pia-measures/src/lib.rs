//! Measure editing for PIA assessments.
//!
//! [`MeasureEditor`] binds one measure's title and rich-text content to its
//! storage, and keeps the tag answers listing measure titles in step with
//! renames.

pub mod editor;
pub mod model;
pub mod service;

pub use editor::{
    DisplayState, MeasureEditor, MeasureForm, MeasureServices, NOT_ENOUGH_MEASURES_DIALOG,
    REMOVE_MEASURE_DIALOG,
};
pub use model::{Answer, AnswerData, EditorHandle, Evaluation, Measure};
pub use service::{
    AnswerService, GlobalEvaluation, KnowledgeHints, MeasureStore, PendingRemovalStore,
    RichTextEditorHost,
};
