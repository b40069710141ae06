//! Command implementations.

mod config;
mod revisions;
mod slugify;

pub use config::{ConfigAction, ConfigCommand};
pub use revisions::{RevisionsCommand, RevisionsOutput};
pub use slugify::SlugifyCommand;
