//! The IOU state object.

use iou_types::{IouError, Party, UniqueIdentifier};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::schema::{self, PersistentState, SchemaMarker};

/// The state object recording an IOU agreement between two parties.
///
/// Construction performs no validation. Amount ranges, distinct parties and
/// the meaning of `constraint_type` are all decided by the contract layer
/// that verifies transactions carrying this state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IouState {
    amount: i32,
    lender: Party,
    borrower: Party,
    linear_id: UniqueIdentifier,
    constraint_type: Option<i32>,
}

impl IouState {
    /// Create a new IOU state.
    ///
    /// `lender` is the party issuing the IOU, `borrower` the party receiving
    /// and approving it.
    pub fn new(
        amount: i32,
        lender: Party,
        borrower: Party,
        linear_id: UniqueIdentifier,
        constraint_type: Option<i32>,
    ) -> Self {
        Self {
            amount,
            lender,
            borrower,
            linear_id,
            constraint_type,
        }
    }

    pub fn amount(&self) -> i32 {
        self.amount
    }

    pub fn lender(&self) -> &Party {
        &self.lender
    }

    pub fn borrower(&self) -> &Party {
        &self.borrower
    }

    pub fn linear_id(&self) -> &UniqueIdentifier {
        &self.linear_id
    }

    pub fn constraint_type(&self) -> Option<i32> {
        self.constraint_type
    }

    /// The stable identity shared by every version of this IOU.
    pub fn identity(&self) -> &UniqueIdentifier {
        &self.linear_id
    }

    /// The parties that must be made aware of this state: lender, then borrower.
    pub fn participants(&self) -> [&Party; 2] {
        [&self.lender, &self.borrower]
    }

    /// Whether `other` is a version of the same logical IOU.
    ///
    /// Compares identities only; every other field may differ.
    pub fn same_logical_iou(&self, other: &IouState) -> bool {
        self.linear_id == other.linear_id
    }

    /// Build the successor of this state with a new amount and constraint.
    ///
    /// Parties and `linear_id` carry over; `self` is left untouched.
    pub fn amend(&self, amount: i32, constraint_type: Option<i32>) -> Self {
        Self {
            amount,
            constraint_type,
            ..self.clone()
        }
    }

    /// The schema markers this state can be projected into.
    ///
    /// Every call returns a fresh iterator over the same fixed list.
    pub fn supported_schemas(&self) -> impl Iterator<Item = SchemaMarker> + Clone {
        schema::supported_descriptors().map(|d| d.marker)
    }

    /// Project this state into the row shape of `marker`.
    ///
    /// Fails with [`IouError::UnsupportedSchema`] when `marker` was not
    /// yielded by [`supported_schemas`](Self::supported_schemas).
    pub fn project_to(&self, marker: SchemaMarker) -> Result<PersistentState, IouError> {
        schema::projection_for(marker).map(|project| project(self))
    }
}

impl fmt::Display for IouState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "IOUState(value={}, lender={}, borrower={}, linearId={})",
            self.amount, self.lender, self.borrower, self.linear_id
        )
    }
}
