//! Configuration types for the PIA toolkit.
//!
//! This crate provides the configuration used by the PIA toolkit,
//! read from `.pia/config.yaml` files.

pub mod env;
pub mod loader;
pub mod types;

pub use env::*;
pub use loader::*;
pub use types::*;
