//! Persistence schemas for IOU states.
//!
//! Each supported schema is one entry in a fixed table binding a
//! [`SchemaDescriptor`] to the function that builds its row. Adding a schema
//! version means adding a table entry and a [`PersistentState`] variant;
//! published row shapes never change.

use iou_types::IouError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::IouState;

/// A versioned tag naming one persistence shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SchemaMarker {
    pub family: &'static str,
    pub version: u32,
}

impl SchemaMarker {
    pub const fn new(family: &'static str, version: u32) -> Self {
        Self { family, version }
    }
}

impl fmt::Display for SchemaMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/v{}", self.family, self.version)
    }
}

/// Schema family for IOU rows, version 1.
pub const IOU_SCHEMA_V1: SchemaMarker = SchemaMarker::new("iou", 1);

/// Table layout an indexer needs to create storage for a schema.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SchemaDescriptor {
    pub marker: SchemaMarker,
    pub table: &'static str,
    pub columns: &'static [&'static str],
}

/// Row for [`IOU_SCHEMA_V1`], stored in table `iou_states`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistentIou {
    pub lender: String,
    pub borrower: String,
    pub value: i32,
    pub linear_id: Uuid,
    pub constraint_type: Option<i32>,
}

/// A projected row, tagged by the schema version that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "schema", rename_all = "snake_case")]
pub enum PersistentState {
    IouV1(PersistentIou),
}

impl PersistentState {
    pub fn marker(&self) -> SchemaMarker {
        match self {
            Self::IouV1(_) => IOU_SCHEMA_V1,
        }
    }

    /// The linear identifier token the row is keyed on.
    pub fn linear_id(&self) -> Uuid {
        match self {
            Self::IouV1(row) => row.linear_id,
        }
    }

    /// Whether `party_name` appears in any party column of the row.
    pub fn involves(&self, party_name: &str) -> bool {
        match self {
            Self::IouV1(row) => row.lender == party_name || row.borrower == party_name,
        }
    }

    pub fn as_iou_v1(&self) -> Option<&PersistentIou> {
        match self {
            Self::IouV1(row) => Some(row),
        }
    }
}

struct Projection {
    descriptor: SchemaDescriptor,
    project: fn(&IouState) -> PersistentState,
}

const PROJECTIONS: &[Projection] = &[Projection {
    descriptor: SchemaDescriptor {
        marker: IOU_SCHEMA_V1,
        table: "iou_states",
        columns: &["lender", "borrower", "value", "linear_id", "constraint_type"],
    },
    project: project_iou_v1,
}];

fn project_iou_v1(state: &IouState) -> PersistentState {
    PersistentState::IouV1(PersistentIou {
        lender: state.lender().display_name().to_string(),
        borrower: state.borrower().display_name().to_string(),
        value: state.amount(),
        linear_id: state.linear_id().id(),
        constraint_type: state.constraint_type(),
    })
}

fn unsupported(marker: SchemaMarker) -> IouError {
    IouError::UnsupportedSchema {
        family: marker.family.to_string(),
        version: marker.version,
    }
}

/// All schemas IOU states can be projected into, oldest first.
pub fn supported_descriptors() -> impl Iterator<Item = SchemaDescriptor> + Clone {
    PROJECTIONS.iter().map(|p| p.descriptor)
}

/// Look up the table layout for `marker`.
pub fn descriptor(marker: SchemaMarker) -> Result<SchemaDescriptor, IouError> {
    PROJECTIONS
        .iter()
        .find(|p| p.descriptor.marker == marker)
        .map(|p| p.descriptor)
        .ok_or_else(|| unsupported(marker))
}

pub(crate) fn projection_for(
    marker: SchemaMarker,
) -> Result<fn(&IouState) -> PersistentState, IouError> {
    PROJECTIONS
        .iter()
        .find(|p| p.descriptor.marker == marker)
        .map(|p| p.project)
        .ok_or_else(|| unsupported(marker))
}
