//! Fundamental types for IOU ledger states.
//!
//! This crate defines the identity primitives shared across the workspace:
//! party references, linear identifiers, and the common error type.

pub mod error;
pub mod identifier;
pub mod party;

pub use error::IouError;
pub use identifier::UniqueIdentifier;
pub use party::Party;
