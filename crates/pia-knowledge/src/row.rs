//! Knowledge base list row controller.

use crate::dataset;
use crate::model::{BaseField, KnowledgeBase};
use crate::service::KnowledgeService;
use pia_common_config::KnowledgeConfig;
use pia_common_core::{EventEmitter, ModalService, Result, ShutdownHandle};
use pia_common_log::spans::{instrument_future, service_span};
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

/// Dialog confirming removal of a knowledge base.
pub const REMOVE_DIALOG: &str = "modal-remove-knowledgebase";

/// Notifications for the list holding the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnowledgeEvent {
    /// The base was edited or is about to be removed.
    Changed,
    /// A copy of the base was requested.
    Duplicated,
}

/// One knowledge base in the list, with its entry count.
pub struct KnowledgeBaseRow {
    base: KnowledgeBase,
    entry_count: usize,
    example_count: usize,
    knowledge: Arc<dyn KnowledgeService>,
    modals: Arc<dyn ModalService>,
    events: EventEmitter<KnowledgeEvent>,
    shutdown: ShutdownHandle,
}

impl KnowledgeBaseRow {
    /// Row counting example bases against the dataset selected by `config`.
    ///
    /// Fails when a configured dataset file cannot be read.
    pub fn new(
        base: KnowledgeBase,
        config: &KnowledgeConfig,
        knowledge: Arc<dyn KnowledgeService>,
        modals: Arc<dyn ModalService>,
    ) -> Result<Self> {
        Ok(Self {
            base,
            entry_count: 0,
            example_count: dataset::example_count(config)?,
            knowledge,
            modals,
            events: EventEmitter::new(),
            shutdown: ShutdownHandle::new(),
        })
    }

    /// Load the entry count.
    ///
    /// Example bases count the example dataset. A failed lookup keeps the
    /// previous count.
    pub async fn init(&mut self) {
        if self.base.is_example {
            self.entry_count = self.example_count;
            return;
        }

        let base_id = self.base.id;
        let lookup = self.knowledge.get_entries(base_id);
        let result = instrument_future(lookup, service_span("knowledge", "get_entries")).await;

        if self.shutdown.is_shutdown() {
            debug!(base = %base_id, "row disposed, dropping entry count");
            return;
        }

        match result {
            Ok(entries) => self.entry_count = entries.len(),
            Err(e) => warn!(base = %base_id, error = %e, "failed to count knowledge entries"),
        }
    }

    /// Commit an inline edit of `field`.
    ///
    /// Unknown field names are rejected. A failed save is logged; the row
    /// keeps the edited text.
    pub async fn focus_out(&mut self, field: &str, text: &str) -> Result<()> {
        let field: BaseField = field.parse()?;
        self.base.set_field(field, text.to_string());

        if let Err(e) = self.knowledge.update_base(&self.base).await {
            warn!(
                base = %self.base.id,
                field = field.as_str(),
                error = %e,
                "failed to save knowledge base"
            );
        }
        self.events.emit(KnowledgeEvent::Changed);
        Ok(())
    }

    /// Ask the user to confirm removal.
    pub fn remove(&self) {
        info!(base = %self.base.id, "knowledge base removal requested");
        self.knowledge.select(self.base.id);
        self.modals.open(REMOVE_DIALOG);
        self.events.emit(KnowledgeEvent::Changed);
    }

    pub async fn export(&self) {
        if let Err(e) = self.knowledge.export(self.base.id).await {
            warn!(base = %self.base.id, error = %e, "knowledge base export failed");
        }
    }

    pub async fn duplicate(&self) {
        if let Err(e) = self.knowledge.duplicate(self.base.id).await {
            warn!(base = %self.base.id, error = %e, "knowledge base duplication failed");
        }
        self.events.emit(KnowledgeEvent::Duplicated);
    }

    /// Ignore lookups that complete from now on.
    pub fn dispose(&mut self) {
        self.shutdown.shutdown();
    }

    /// Handle that disposes the row from another task.
    pub fn shutdown_handle(&self) -> ShutdownHandle {
        self.shutdown.clone()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<KnowledgeEvent> {
        self.events.subscribe()
    }

    pub fn base(&self) -> &KnowledgeBase {
        &self.base
    }

    pub fn entry_count(&self) -> usize {
        self.entry_count
    }
}

impl std::fmt::Debug for KnowledgeBaseRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KnowledgeBaseRow")
            .field("base", &self.base.id)
            .field("entry_count", &self.entry_count)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::KnowledgeEntry;
    use crate::service::MockKnowledgeService;
    use mockall::{mock, predicate::eq};
    use pia_common_core::{Error, KnowledgeBaseId, KnowledgeEntryId};
    use pia_test_utils::{fixed_now, temp_file_named};

    mock! {
        Modals {}
        impl ModalService for Modals {
            fn open(&self, dialog_id: &str);
        }
    }

    fn base(is_example: bool) -> KnowledgeBase {
        KnowledgeBase {
            id: KnowledgeBaseId::new(3),
            name: "Health data".into(),
            author: "DPO".into(),
            contributors: String::new(),
            is_example,
            created_at: fixed_now(),
        }
    }

    fn entries(n: u64) -> Vec<KnowledgeEntry> {
        (0..n)
            .map(|i| KnowledgeEntry {
                id: KnowledgeEntryId::new(i),
                knowledge_base_id: KnowledgeBaseId::new(3),
                slug: format!("entry-{i}"),
                name: format!("Entry {i}"),
                category: "Measure".into(),
                description: String::new(),
                items: vec![],
                created_at: fixed_now(),
            })
            .collect()
    }

    fn make_row(
        knowledge: MockKnowledgeService,
        modals: MockModals,
        is_example: bool,
    ) -> KnowledgeBaseRow {
        KnowledgeBaseRow::new(
            base(is_example),
            &KnowledgeConfig::default(),
            Arc::new(knowledge),
            Arc::new(modals),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_init_counts_entries() {
        let mut knowledge = MockKnowledgeService::new();
        knowledge
            .expect_get_entries()
            .with(eq(KnowledgeBaseId::new(3)))
            .times(1)
            .returning(|_| Ok(entries(5)));

        let mut row = make_row(knowledge, MockModals::new(), false);
        row.init().await;
        assert_eq!(row.entry_count(), 5);
    }

    #[tokio::test]
    async fn test_example_base_uses_bundled_dataset() {
        let mut knowledge = MockKnowledgeService::new();
        knowledge.expect_get_entries().never();

        let mut row = make_row(knowledge, MockModals::new(), true);
        row.init().await;
        assert_eq!(row.entry_count(), dataset::bundled_entries().len());
    }

    #[tokio::test]
    async fn test_example_base_uses_configured_dataset() {
        let (_dir, path) = temp_file_named(
            "kb.json",
            r#"[
                {"slug":"a","filters":"f","category":"c","placeholder":"p","name":"A","description":"d"},
                {"slug":"b","filters":"f","category":"c","placeholder":"p","name":"B","description":"d"}
            ]"#,
        );
        let config = KnowledgeConfig {
            example_dataset: Some(path),
        };
        let mut knowledge = MockKnowledgeService::new();
        knowledge.expect_get_entries().never();

        let mut row = KnowledgeBaseRow::new(
            base(true),
            &config,
            Arc::new(knowledge),
            Arc::new(MockModals::new()),
        )
        .unwrap();
        row.init().await;
        assert_eq!(row.entry_count(), 2);
    }

    #[test]
    fn test_unreadable_dataset_is_rejected() {
        let config = KnowledgeConfig {
            example_dataset: Some("/nonexistent/kb.json".into()),
        };
        let row = KnowledgeBaseRow::new(
            base(true),
            &config,
            Arc::new(MockKnowledgeService::new()),
            Arc::new(MockModals::new()),
        );
        assert!(row.is_err());
    }

    #[tokio::test]
    async fn test_failed_lookup_keeps_previous_count() {
        let mut knowledge = MockKnowledgeService::new();
        let mut calls = 0;
        knowledge.expect_get_entries().times(2).returning(move |_| {
            calls += 1;
            if calls == 1 {
                Ok(entries(2))
            } else {
                Err(Error::service("offline"))
            }
        });

        let mut row = make_row(knowledge, MockModals::new(), false);
        row.init().await;
        row.init().await;
        assert_eq!(row.entry_count(), 2);
    }

    #[tokio::test]
    async fn test_failed_first_lookup_leaves_zero() {
        let mut knowledge = MockKnowledgeService::new();
        knowledge
            .expect_get_entries()
            .returning(|_| Err(Error::service("offline")));

        let mut row = make_row(knowledge, MockModals::new(), false);
        row.init().await;
        assert_eq!(row.entry_count(), 0);
    }

    #[tokio::test]
    async fn test_disposed_row_drops_count() {
        let mut knowledge = MockKnowledgeService::new();
        knowledge.expect_get_entries().returning(|_| Ok(entries(4)));

        let mut row = make_row(knowledge, MockModals::new(), false);
        row.dispose();
        row.init().await;
        assert_eq!(row.entry_count(), 0);
    }

    #[tokio::test]
    async fn test_focus_out_saves_and_notifies() {
        let mut knowledge = MockKnowledgeService::new();
        knowledge
            .expect_update_base()
            .withf(|b| b.name == "Biometrics")
            .times(1)
            .returning(|_| Ok(()));

        let mut row = make_row(knowledge, MockModals::new(), false);
        let mut rx = row.subscribe();

        row.focus_out("name", "Biometrics").await.unwrap();
        assert_eq!(row.base().name, "Biometrics");
        assert_eq!(rx.try_recv().unwrap(), KnowledgeEvent::Changed);
    }

    #[tokio::test]
    async fn test_focus_out_rejects_unknown_field() {
        let mut knowledge = MockKnowledgeService::new();
        knowledge.expect_update_base().never();

        let mut row = make_row(knowledge, MockModals::new(), false);
        let err = row.focus_out("is_example", "true").await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn test_remove_selects_and_opens_dialog() {
        let mut knowledge = MockKnowledgeService::new();
        knowledge
            .expect_select()
            .with(eq(KnowledgeBaseId::new(3)))
            .times(1)
            .return_const(());
        let mut modals = MockModals::new();
        modals
            .expect_open()
            .withf(|id| id == REMOVE_DIALOG)
            .times(1)
            .return_const(());

        let row = make_row(knowledge, modals, false);
        let mut rx = row.subscribe();
        row.remove();
        assert_eq!(rx.try_recv().unwrap(), KnowledgeEvent::Changed);
    }

    #[tokio::test]
    async fn test_export_and_duplicate_delegate() {
        let mut knowledge = MockKnowledgeService::new();
        knowledge.expect_export().times(1).returning(|_| Ok(()));
        knowledge
            .expect_duplicate()
            .times(1)
            .returning(|_| Err(Error::service("quota")));

        let row = make_row(knowledge, MockModals::new(), false);
        let mut rx = row.subscribe();
        row.export().await;
        row.duplicate().await;
        assert_eq!(rx.try_recv().unwrap(), KnowledgeEvent::Duplicated);
    }
}
