use proptest::prelude::*;

use iou_state::{IouState, PersistentState, SchemaMarker, IOU_SCHEMA_V1};
use iou_types::{IouError, Party, UniqueIdentifier};
use uuid::Uuid;

fn arb_state() -> impl Strategy<Value = IouState> {
    (
        any::<i32>(),
        "[A-Za-z][A-Za-z0-9 =,]{0,24}",
        "[A-Za-z][A-Za-z0-9 =,]{0,24}",
        proptest::option::of("[a-z0-9-]{1,12}"),
        any::<u128>(),
        proptest::option::of(any::<i32>()),
    )
        .prop_map(|(amount, lender, borrower, label, bits, constraint_type)| {
            IouState::new(
                amount,
                Party::new(lender),
                Party::new(borrower),
                UniqueIdentifier::from_parts(label, Uuid::from_u128(bits)),
                constraint_type,
            )
        })
}

proptest! {
    /// identity() is exactly the identifier passed at construction.
    #[test]
    fn identity_is_stable(state in arb_state()) {
        let expected = UniqueIdentifier::from_parts(
            state.linear_id().external_id().map(str::to_string),
            state.linear_id().id(),
        );
        prop_assert_eq!(state.identity(), &expected);
        prop_assert_eq!(state.identity(), state.identity());
    }

    /// participants() is [lender, borrower] on every call.
    #[test]
    fn participants_are_deterministic(state in arb_state()) {
        let first = state.participants();
        prop_assert_eq!(first, [state.lender(), state.borrower()]);
        prop_assert_eq!(state.participants(), first);
    }

    /// Every supported marker projects; the v1 row mirrors the state.
    #[test]
    fn v1_projection_mirrors_state(state in arb_state()) {
        let markers: Vec<SchemaMarker> = state.supported_schemas().collect();
        prop_assert_eq!(&markers, &vec![IOU_SCHEMA_V1]);

        for marker in markers {
            let row = state.project_to(marker).unwrap();
            prop_assert_eq!(row.marker(), marker);
            let PersistentState::IouV1(row) = row;
            prop_assert_eq!(row.lender.as_str(), state.lender().display_name());
            prop_assert_eq!(row.borrower.as_str(), state.borrower().display_name());
            prop_assert_eq!(row.value, state.amount());
            prop_assert_eq!(row.linear_id, state.linear_id().id());
            prop_assert_eq!(row.constraint_type, state.constraint_type());
        }
    }

    /// Projecting twice yields identical rows.
    #[test]
    fn projection_is_idempotent(state in arb_state()) {
        prop_assert_eq!(
            state.project_to(IOU_SCHEMA_V1).unwrap(),
            state.project_to(IOU_SCHEMA_V1).unwrap()
        );
    }

    /// Any marker outside the supported list is rejected.
    #[test]
    fn unsupported_versions_are_rejected(state in arb_state(), version in 2u32..1_000) {
        let err = state.project_to(SchemaMarker::new("iou", version)).unwrap_err();
        prop_assert_eq!(err, IouError::UnsupportedSchema { family: "iou".into(), version });
    }

    /// Amendments keep the identifier and supersede only the amount and constraint.
    #[test]
    fn amendment_preserves_identity(
        state in arb_state(),
        amount in any::<i32>(),
        constraint_type in proptest::option::of(any::<i32>()),
    ) {
        let next = state.amend(amount, constraint_type);
        prop_assert!(next.same_logical_iou(&state));
        prop_assert_eq!(next.lender(), state.lender());
        prop_assert_eq!(next.borrower(), state.borrower());
        prop_assert_eq!(next.amount(), amount);
        prop_assert_eq!(next.constraint_type(), constraint_type);
    }
}

#[test]
fn concrete_scenario() {
    let token = Uuid::parse_str("00000000-0000-4000-8000-000000000123").unwrap();
    let state = IouState::new(
        100,
        Party::new("PartyA"),
        Party::new("PartyB"),
        UniqueIdentifier::from_parts(Some("ID".into()), token),
        None,
    );

    assert_eq!(state.participants(), [&Party::new("PartyA"), &Party::new("PartyB")]);

    let row = state.project_to(IOU_SCHEMA_V1).unwrap();
    let json = serde_json::to_value(&row).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "schema": "iou_v1",
            "lender": "PartyA",
            "borrower": "PartyB",
            "value": 100,
            "linear_id": "00000000-0000-4000-8000-000000000123",
            "constraint_type": null,
        })
    );
}
