//! Party references.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque reference to a ledger party.
///
/// Resolution of the underlying identity (keys, certificates) belongs to the
/// identity subsystem; this layer only relies on a stable display name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Party {
    name: String,
}

impl Party {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The party's display name, used as the persistence key.
    pub fn display_name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl From<&str> for Party {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Party {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
