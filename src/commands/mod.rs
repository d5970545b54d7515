//! Command handlers.
//!
//! This module contains the handlers behind each `catalog-bench` subcommand.

pub mod populate;
pub mod preview;
pub mod validate;
pub mod verify;

pub use populate::run_populate;
pub use preview::run_preview;
pub use validate::run_validate;
pub use verify::run_verify;
