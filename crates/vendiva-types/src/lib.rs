//! Shared types, adapter traits, and error types for the Vendiva platform.
//!
//! This crate contains the vocabulary shared between the feature crates and
//! any store adapter implementation: the error type, timestamps with ISO
//! serde helpers, multilingual text values, the persisted row layouts, and
//! the `StoreAdapter` trait itself.

pub mod error;
pub mod plan;
pub mod prelude;
pub mod site_mode;
pub mod store_adapter;
pub mod text;
pub mod types;

// vim: ts=4
