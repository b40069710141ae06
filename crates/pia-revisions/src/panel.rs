//! Revisions sidebar controller.

use crate::groups::RevisionGroups;
use crate::key::GroupKeyResolver;
use crate::model::Revision;
use crate::relative_date::RelativeDatePolicy;
use chrono::{DateTime, Utc};
use pia_common_core::{Clock, EventEmitter, RevisionId, ShutdownHandle};
use pia_common_i18n::{Locale, Translator};
use pia_common_log::spans::{component_span, Timer};
use std::sync::Arc;
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{debug, info};

/// Requests sent from the sidebar to its host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevisionEvent {
    /// The user asked to snapshot the current assessment.
    NewRevisionRequested,
    /// The user picked a revision to preview.
    RevisionSelected(RevisionId),
}

/// Values bound by the host.
#[derive(Debug, Clone, Default)]
pub struct PanelInputs {
    /// Creation date of the revision currently shown, if any.
    pub current_version: Option<DateTime<Utc>>,
    pub revisions: Vec<Revision>,
    pub show_title: bool,
}

/// Locale switches observed by a [`RevisionsPanel`].
#[derive(Debug)]
pub struct LocaleChanges {
    changes: broadcast::Receiver<Locale>,
    shutdown: ShutdownHandle,
}

impl LocaleChanges {
    /// Next locale switch, or `None` once the sender is gone or the panel
    /// was disposed. Missed switches are skipped.
    pub async fn next(&mut self) -> Option<Locale> {
        loop {
            tokio::select! {
                _ = self.shutdown.wait() => return None,
                change = self.changes.recv() => match change {
                    Ok(locale) => return Some(locale),
                    Err(RecvError::Lagged(missed)) => debug!(missed, "locale changes lagged"),
                    Err(RecvError::Closed) => return None,
                },
            }
        }
    }
}

/// Lists revisions grouped under relative-date labels.
pub struct RevisionsPanel {
    policy: RelativeDatePolicy,
    translator: Arc<dyn Translator>,
    clock: Arc<dyn Clock>,
    inputs: PanelInputs,
    opened: bool,
    groups: RevisionGroups<Revision>,
    events: EventEmitter<RevisionEvent>,
    shutdown: ShutdownHandle,
}

impl RevisionsPanel {
    /// Bind the panel and build the initial groups.
    pub fn init(
        policy: RelativeDatePolicy,
        translator: Arc<dyn Translator>,
        clock: Arc<dyn Clock>,
        inputs: PanelInputs,
    ) -> Self {
        let mut panel = Self {
            policy,
            translator,
            clock,
            inputs,
            opened: false,
            groups: RevisionGroups::new(),
            events: EventEmitter::new(),
            shutdown: ShutdownHandle::new(),
        };
        panel.rebuild();
        panel
    }

    fn rebuild(&mut self) {
        if self.shutdown.is_shutdown() {
            debug!("panel disposed, skipping rebuild");
            return;
        }

        let span = component_span("revisions", "rebuild");
        let _enter = span.enter();
        let timer = Timer::start("group_revisions");

        let resolver = GroupKeyResolver::new(&self.policy, self.translator.as_ref());
        let now = self.clock.now();
        self.groups =
            RevisionGroups::by_relative_date(self.inputs.revisions.iter().cloned(), &resolver, now);

        timer.finish();
        debug!(
            locale = %resolver.locale(),
            revisions = self.inputs.revisions.len(),
            groups = self.groups.len(),
            "revision groups rebuilt"
        );
    }

    /// Replace the bound revisions and regroup.
    pub fn on_input_change(&mut self, revisions: Vec<Revision>) {
        self.inputs.revisions = revisions;
        self.rebuild();
    }

    /// Update which revision is the one currently shown.
    pub fn set_current_version(&mut self, current_version: Option<DateTime<Utc>>) {
        self.inputs.current_version = current_version;
    }

    /// Regroup under the translator's current locale.
    pub fn on_locale_change(&mut self) {
        self.rebuild();
    }

    /// Locale broadcasts for this panel, ending once it is disposed.
    ///
    /// The stream does not borrow the panel, so a host can interleave
    /// [`on_locale_change`](Self::on_locale_change) with its other inputs:
    ///
    /// ```ignore
    /// let mut locales = panel.locale_changes(translator.subscribe());
    /// loop {
    ///     tokio::select! {
    ///         Some(_) = locales.next() => panel.on_locale_change(),
    ///         Some(revisions) = inputs.recv() => panel.on_input_change(revisions),
    ///         else => break,
    ///     }
    /// }
    /// ```
    pub fn locale_changes(&self, changes: broadcast::Receiver<Locale>) -> LocaleChanges {
        LocaleChanges {
            changes,
            shutdown: self.shutdown.clone(),
        }
    }

    /// Regroup on every locale broadcast until the sender goes away or the
    /// panel is disposed through its [`ShutdownHandle`].
    ///
    /// Holds the panel for the whole loop; hosts that also feed revisions
    /// use [`locale_changes`](Self::locale_changes) instead.
    pub async fn watch_locale(&mut self, changes: broadcast::Receiver<Locale>) {
        let mut changes = self.locale_changes(changes);
        while let Some(locale) = changes.next().await {
            debug!(locale = %locale, "locale change received");
            self.on_locale_change();
        }
        debug!("stopped watching locale");
    }

    pub fn request_new_revision(&self) {
        info!("new revision requested");
        self.events.emit(RevisionEvent::NewRevisionRequested);
    }

    pub fn select_revision(&self, id: RevisionId) {
        info!(revision = %id, "revision selected");
        self.events.emit(RevisionEvent::RevisionSelected(id));
    }

    /// Open or close the sidebar. Returns the new state.
    pub fn toggle_opened(&mut self) -> bool {
        self.opened = !self.opened;
        self.opened
    }

    /// Whether `revision` is the one currently shown.
    pub fn is_current(&self, revision: &Revision) -> bool {
        self.inputs.current_version == Some(revision.created_at)
    }

    /// Stop reacting to input and locale changes.
    pub fn dispose(&mut self) {
        self.shutdown.shutdown();
    }

    /// Handle that disposes the panel from another task.
    pub fn shutdown_handle(&self) -> ShutdownHandle {
        self.shutdown.clone()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<RevisionEvent> {
        self.events.subscribe()
    }

    pub fn groups(&self) -> &RevisionGroups<Revision> {
        &self.groups
    }

    pub fn is_opened(&self) -> bool {
        self.opened
    }

    pub fn show_title(&self) -> bool {
        self.inputs.show_title
    }
}

impl std::fmt::Debug for RevisionsPanel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RevisionsPanel")
            .field("policy", &self.policy)
            .field("revisions", &self.inputs.revisions.len())
            .field("groups", &self.groups.len())
            .field("opened", &self.opened)
            .field("disposed", &self.shutdown.is_shutdown())
            .finish()
    }
}
