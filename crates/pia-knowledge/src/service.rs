//! Knowledge storage collaborator.

use crate::model::{KnowledgeBase, KnowledgeEntry};
use async_trait::async_trait;
use pia_common_core::{KnowledgeBaseId, Result};

/// Storage and lifecycle operations on knowledge bases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KnowledgeService: Send + Sync {
    /// Entries stored in a base.
    async fn get_entries(&self, base_id: KnowledgeBaseId) -> Result<Vec<KnowledgeEntry>>;

    /// Remember the base targeted by the next confirmation dialog.
    fn select(&self, base_id: KnowledgeBaseId);

    /// Export a base to a downloadable file.
    async fn export(&self, base_id: KnowledgeBaseId) -> Result<()>;

    /// Copy a base and its entries.
    async fn duplicate(&self, base_id: KnowledgeBaseId) -> Result<()>;

    /// Persist edited base metadata.
    async fn update_base(&self, base: &KnowledgeBase) -> Result<()>;
}
