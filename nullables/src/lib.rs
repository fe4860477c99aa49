//! Nullable infrastructure for deterministic testing.
//!
//! External dependencies are abstracted behind traits. This crate provides
//! test-friendly implementations that:
//! - Return deterministic values
//! - Can be inspected programmatically
//! - Never touch the filesystem or network
//!
//! Usage: swap real implementations for nullables in tests.

pub mod store;

pub use store::NullRowStore;
