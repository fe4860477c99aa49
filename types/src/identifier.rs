//! Linear identifiers.
//!
//! A linear state keeps one identifier for its whole history: every amended
//! version of the same logical IOU carries the identifier its issuance drew.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A globally unique identifier for a linear state.
///
/// The optional `external_id` is a human label (e.g. an invoice number) and
/// carries no uniqueness guarantee. Uniqueness comes from `id`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UniqueIdentifier {
    external_id: Option<String>,
    id: Uuid,
}

impl UniqueIdentifier {
    /// Draw a fresh identifier with a random v4 token.
    pub fn new(external_id: Option<String>) -> Self {
        Self::from_parts(external_id, Uuid::new_v4())
    }

    /// Rebuild an identifier from a known label and token.
    pub fn from_parts(external_id: Option<String>, id: Uuid) -> Self {
        Self { external_id, id }
    }

    pub fn external_id(&self) -> Option<&str> {
        self.external_id.as_deref()
    }

    /// The unique token.
    pub fn id(&self) -> Uuid {
        self.id
    }
}

impl Default for UniqueIdentifier {
    fn default() -> Self {
        Self::new(None)
    }
}

impl fmt::Display for UniqueIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.external_id {
            Some(label) => write!(f, "{}_{}", label, self.id),
            None => write!(f, "{}", self.id),
        }
    }
}
