//! Common types and utilities for catalog populators.
//!
//! This crate provides the argument types shared by every populate and
//! verify command, so all of them resolve the dataset the same way.

pub mod args;

pub use args::CommonPopulateArgs;
