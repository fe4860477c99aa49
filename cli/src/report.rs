//! JSON reports printed by the `iou` subcommands.

use iou_state::{supported_descriptors, IouState, PersistentState, SchemaMarker, IOU_SCHEMA_V1};
use iou_types::{Party, UniqueIdentifier};
use serde::Serialize;
use uuid::Uuid;

use crate::error::CliError;

/// Everything a caller of the state sees: summary, identity, participants, rows.
#[derive(Debug, Serialize)]
pub struct StateReport {
    pub summary: String,
    pub linear_id: String,
    pub participants: Vec<String>,
    pub rows: Vec<PersistentState>,
}

/// Inputs needed to build one IOU state.
#[derive(Clone, Debug)]
pub struct IouInput {
    pub amount: i32,
    pub lender: String,
    pub borrower: String,
    pub external_id: Option<String>,
    pub linear_id: Option<String>,
    pub constraint_type: Option<i32>,
}

impl IouInput {
    /// Build the state, drawing a fresh linear id unless one was given.
    pub fn build(&self) -> Result<IouState, CliError> {
        let linear_id = match &self.linear_id {
            Some(raw) => {
                let id = Uuid::parse_str(raw).map_err(|e| CliError::InvalidLinearId {
                    input: raw.clone(),
                    reason: e.to_string(),
                })?;
                UniqueIdentifier::from_parts(self.external_id.clone(), id)
            }
            None => UniqueIdentifier::new(self.external_id.clone()),
        };
        Ok(IouState::new(
            self.amount,
            Party::new(self.lender.as_str()),
            Party::new(self.borrower.as_str()),
            linear_id,
            self.constraint_type,
        ))
    }
}

/// Project `state` into `schema_version` (IOU family) or, when absent, into
/// every schema it supports.
pub fn state_report(
    state: &IouState,
    schema_version: Option<u32>,
) -> Result<StateReport, CliError> {
    let markers: Vec<SchemaMarker> = match schema_version {
        Some(version) => vec![SchemaMarker::new(IOU_SCHEMA_V1.family, version)],
        None => state.supported_schemas().collect(),
    };
    let rows = markers
        .into_iter()
        .map(|marker| state.project_to(marker))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(StateReport {
        summary: state.to_string(),
        linear_id: state.linear_id().to_string(),
        participants: state
            .participants()
            .iter()
            .map(|p| p.display_name().to_string())
            .collect(),
        rows,
    })
}

pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, CliError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

pub fn schemas_json(pretty: bool) -> Result<String, CliError> {
    let descriptors: Vec<_> = supported_descriptors().collect();
    to_json(&descriptors, pretty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use iou_types::IouError;

    const TOKEN: &str = "00000000-0000-4000-8000-000000000123";

    fn input() -> IouInput {
        IouInput {
            amount: 100,
            lender: "PartyA".into(),
            borrower: "PartyB".into(),
            external_id: Some("ID".into()),
            linear_id: Some(TOKEN.into()),
            constraint_type: None,
        }
    }

    #[test]
    fn builds_state_with_given_linear_id() {
        let state = input().build().unwrap();
        assert_eq!(state.linear_id().to_string(), format!("ID_{TOKEN}"));
        assert_eq!(state.amount(), 100);
    }

    #[test]
    fn rejects_malformed_linear_id() {
        let mut bad = input();
        bad.linear_id = Some("not-a-uuid".into());
        assert!(matches!(bad.build(), Err(CliError::InvalidLinearId { .. })));
    }

    #[test]
    fn draws_fresh_linear_id_when_absent() {
        let mut fresh = input();
        fresh.linear_id = None;
        let a = fresh.build().unwrap();
        let b = fresh.build().unwrap();
        assert!(!a.same_logical_iou(&b));
    }

    #[test]
    fn report_covers_all_supported_schemas() {
        let state = input().build().unwrap();
        let report = state_report(&state, None).unwrap();
        assert_eq!(report.participants, vec!["PartyA", "PartyB"]);
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].linear_id().to_string(), TOKEN);
    }

    #[test]
    fn report_for_unsupported_version_fails() {
        let state = input().build().unwrap();
        let err = state_report(&state, Some(2)).unwrap_err();
        assert!(matches!(
            err,
            CliError::Iou(IouError::UnsupportedSchema { version: 2, .. })
        ));
    }

    #[test]
    fn schemas_json_lists_v1_table() {
        let json = schemas_json(false).unwrap();
        assert!(json.contains("\"table\":\"iou_states\""));
        assert!(json.contains("\"version\":1"));
    }
}
