//! Building blocks of a generated row.
//!
//! Each module is a pure function of the config, the row index and (where
//! noted) a caller-supplied random stream. [`crate::generator`] wires them
//! together in a fixed order.

pub mod description;
pub mod injection;
pub mod name;
pub mod picker;
pub mod rng;
pub mod timestamp;
pub mod vocabulary;
