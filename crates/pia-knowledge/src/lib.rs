//! Knowledge base list rows.

pub mod dataset;
pub mod model;
pub mod row;
pub mod service;

pub use model::{BaseField, ExampleEntry, KnowledgeBase, KnowledgeEntry};
pub use row::{KnowledgeBaseRow, KnowledgeEvent, REMOVE_DIALOG};
pub use service::KnowledgeService;
