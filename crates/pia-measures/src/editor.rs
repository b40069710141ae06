//! Measure editor controller.
//!
//! Binds the title and rich-text content of one measure. Renaming a measure
//! also renames it inside the tag answers that list measure titles.

use crate::model::{EditorHandle, Evaluation, Measure};
use crate::service::{
    AnswerService, GlobalEvaluation, KnowledgeHints, MeasureStore, PendingRemovalStore,
    RichTextEditorHost,
};
use futures::future::join_all;
use pia_common_config::MeasuresConfig;
use pia_common_core::{MeasureId, ModalService, PiaId, ShutdownHandle};
use pia_common_log::spans::{component_span, instrument_future, service_span};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Dialog shown when removing would leave the assessment without a measure.
pub const NOT_ENOUGH_MEASURES_DIALOG: &str = "not-enough-measures-to-remove";

/// Dialog confirming removal of a measure.
pub const REMOVE_MEASURE_DIALOG: &str = "remove-measure";

/// Everything the editor delegates to.
#[derive(Clone)]
pub struct MeasureServices {
    pub store: Arc<dyn MeasureStore>,
    pub answers: Arc<dyn AnswerService>,
    pub evaluation: Arc<dyn GlobalEvaluation>,
    pub hints: Arc<dyn KnowledgeHints>,
    pub editors: Arc<dyn RichTextEditorHost>,
    pub pending: Arc<dyn PendingRemovalStore>,
    pub modals: Arc<dyn ModalService>,
}

/// Form values as displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeasureForm {
    pub title: String,
    pub content: String,
    /// Whether the title field accepts input.
    pub title_editable: bool,
}

/// Visibility of the measure block and its side panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayState {
    pub collapsed: bool,
    pub comments_visible: bool,
    pub evaluation_visible: bool,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            collapsed: false,
            comments_visible: true,
            evaluation_visible: true,
        }
    }
}

/// Trim surrounding whitespace; blank input clears the field.
fn normalize(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Rename `old` to `new` in the answer at `reference`, if it lists `old`.
async fn rewrite_tag(
    answers: &dyn AnswerService,
    pia_id: PiaId,
    reference: u32,
    old: &str,
    new: &str,
) {
    let mut answer = match answers.get(pia_id, reference).await {
        Ok(answer) => answer,
        Err(e) => {
            warn!(reference, error = %e, "failed to load tag answer");
            return;
        }
    };

    if !answer.replace_list_item(old, new) {
        return;
    }

    match answers.update(&answer).await {
        Ok(()) => debug!(reference, "tag answer renamed"),
        Err(e) => warn!(reference, error = %e, "failed to save tag answer"),
    }
}

/// Edits one measure.
pub struct MeasureEditor {
    measure: Measure,
    form: MeasureForm,
    element_id: String,
    editor: Option<EditorHandle>,
    evaluation: Evaluation,
    display: DisplayState,
    tag_references: Vec<u32>,
    services: MeasureServices,
    shutdown: ShutdownHandle,
}

impl MeasureEditor {
    pub fn new(
        id: MeasureId,
        pia_id: PiaId,
        config: &MeasuresConfig,
        services: MeasureServices,
    ) -> Self {
        Self {
            measure: Measure::new(id, pia_id),
            form: MeasureForm {
                title_editable: true,
                ..MeasureForm::default()
            },
            element_id: format!("{}{}", config.editor_element_prefix, id),
            editor: None,
            evaluation: Evaluation::default(),
            display: DisplayState::default(),
            tag_references: config.tag_answer_references.clone(),
            services,
            shutdown: ShutdownHandle::new(),
        }
    }

    /// Load the measure and fill the form.
    ///
    /// A measure that already has a title starts with the title locked.
    pub async fn init(&mut self) {
        let span = component_span("measure", "init");
        let load = self.services.store.load(self.measure.id);
        let loaded = instrument_future(load, span).await;

        if self.shutdown.is_shutdown() {
            debug!(measure = %self.measure.id, "editor disposed, dropping loaded measure");
            return;
        }

        let measure = match loaded {
            Ok(measure) => measure,
            Err(e) => {
                warn!(measure = %self.measure.id, error = %e, "failed to load measure");
                return;
            }
        };

        let pia_id = self.measure.pia_id;
        self.measure = Measure { pia_id, ..measure };

        if let Some(title) = &self.measure.title {
            self.services.hints.hide_item(title);
        }
        self.form.title = self.measure.title.clone().unwrap_or_default();
        self.form.content = self.measure.content.clone().unwrap_or_default();
        self.form.title_editable = self.measure.title.is_none();
    }

    /// Unlock the title if answers may be edited. Returns whether it was unlocked.
    pub fn title_focus_in(&mut self) -> bool {
        if self.services.evaluation.answer_edition_enabled() {
            self.form.title_editable = true;
        }
        self.form.title_editable
    }

    /// Save the edited title and propagate a rename to the tag answers.
    ///
    /// The stored measure only changes once the save succeeds.
    pub async fn title_focus_out(&mut self, text: &str) {
        let title = normalize(text);
        self.form.title = title.clone().unwrap_or_default();
        let edited = Measure {
            title,
            ..self.measure.clone()
        };

        let save = self.services.store.save(&edited);
        let span = component_span("measure", "title_focus_out");
        if let Err(e) = instrument_future(save, span).await {
            warn!(measure = %self.measure.id, error = %e, "failed to save measure title");
            return;
        }
        let previous = std::mem::replace(&mut self.measure, edited).title;

        if previous != self.measure.title {
            let new = self.measure.title.as_deref().unwrap_or_default();
            let old = previous.as_deref().unwrap_or_default();
            self.services.hints.replace_hidden_item(new, old);

            if let (Some(old), Some(new)) = (previous.as_deref(), self.measure.title.as_deref()) {
                info!(measure = %self.measure.id, "measure renamed, updating tag answers");
                let answers = self.services.answers.as_ref();
                let pia_id = self.measure.pia_id;
                join_all(
                    self.tag_references
                        .iter()
                        .map(|&reference| rewrite_tag(answers, pia_id, reference, old, new)),
                )
                .await;
            }
        }

        if self.measure.title.is_some() {
            self.form.title_editable = false;
        }
        self.services.evaluation.validate();
    }

    /// Open the rich-text editor when answers may be edited.
    pub async fn content_focus_in(&mut self) {
        if !self.services.evaluation.answer_edition_enabled() || self.editor.is_some() {
            return;
        }

        self.services
            .hints
            .set_placeholder(Some(self.measure.placeholder.clone()));

        let load = self.services.editors.load(&self.element_id);
        match instrument_future(load, service_span("editor", "load")).await {
            Ok(handle) => self.editor = Some(handle),
            Err(e) => warn!(element = %self.element_id, error = %e, "failed to load editor"),
        }
    }

    /// Close the editor and save the content.
    pub async fn content_focus_out(&mut self, text: &str) {
        self.services.hints.set_placeholder(None);
        if let Some(handle) = self.editor.take() {
            self.services.editors.remove(handle);
        }

        let content = normalize(text);
        self.form.content = content.clone().unwrap_or_default();
        let edited = Measure {
            content,
            ..self.measure.clone()
        };

        let save = self.services.store.save(&edited);
        match instrument_future(save, service_span("measures", "save")).await {
            Ok(()) => {
                self.measure = edited;
                self.services.evaluation.validate();
            }
            Err(e) => {
                warn!(measure = %self.measure.id, error = %e, "failed to save measure content")
            }
        }
    }

    /// Collapse or expand the block.
    ///
    /// Expanding shows the comments, and the evaluation only once the measure
    /// has been evaluated.
    pub fn toggle_display(&mut self) -> DisplayState {
        self.display = if self.display.collapsed {
            DisplayState {
                collapsed: false,
                comments_visible: true,
                evaluation_visible: self.evaluation.is_evaluated(),
            }
        } else {
            DisplayState {
                collapsed: true,
                comments_visible: false,
                evaluation_visible: false,
            }
        };
        self.display
    }

    pub fn evaluation_change(&mut self, evaluation: Evaluation) {
        self.evaluation = evaluation;
    }

    /// Ask to remove this measure, given how many the section holds.
    pub fn remove_measure(&self, measure_count: usize) {
        if measure_count <= 1 {
            self.services.modals.open(NOT_ENOUGH_MEASURES_DIALOG);
            return;
        }
        self.services.pending.set_pending_measure(self.measure.id);
        self.services.modals.open(REMOVE_MEASURE_DIALOG);
    }

    /// Remove the editor widget and ignore late completions.
    pub fn dispose(&mut self) {
        if let Some(handle) = self.editor.take() {
            self.services.editors.remove(handle);
        }
        self.shutdown.shutdown();
    }

    pub fn shutdown_handle(&self) -> ShutdownHandle {
        self.shutdown.clone()
    }

    pub fn measure(&self) -> &Measure {
        &self.measure
    }

    pub fn form(&self) -> &MeasureForm {
        &self.form
    }

    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    pub fn display(&self) -> DisplayState {
        self.display
    }

    pub fn has_editor(&self) -> bool {
        self.editor.is_some()
    }
}

impl std::fmt::Debug for MeasureEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MeasureEditor")
            .field("measure", &self.measure.id)
            .field("element_id", &self.element_id)
            .field("editor", &self.editor)
            .finish()
    }
}
