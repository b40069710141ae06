//! PIA toolkit common core types and utilities.

pub mod dialogs;
pub mod error;
pub mod events;
pub mod id;
pub mod timestamp;

pub use dialogs::ModalService;
pub use error::{Error, Result};
pub use events::{EventEmitter, ShutdownHandle};
pub use id::*;
pub use timestamp::{Clock, FixedClock, SystemClock};
