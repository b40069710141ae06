//! Revision records.

use chrono::{DateTime, Utc};
use pia_common_core::{PiaId, RevisionId};
use serde::{Deserialize, Serialize};

/// A record that can be placed on the revision timeline.
pub trait Dated {
    /// Creation instant.
    fn created_at(&self) -> DateTime<Utc>;
}

impl<T: Dated + ?Sized> Dated for &T {
    fn created_at(&self) -> DateTime<Utc> {
        (**self).created_at()
    }
}

/// A saved snapshot of an assessment.
///
/// Fields other than the identifiers and the creation date (the exported
/// assessment itself, usually) are carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Revision {
    pub id: RevisionId,
    pub pia_id: PiaId,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Revision {
    /// A revision with no extra fields.
    pub fn new(id: RevisionId, pia_id: PiaId, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            pia_id,
            created_at,
            extra: serde_json::Map::new(),
        }
    }
}

impl Dated for Revision {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
