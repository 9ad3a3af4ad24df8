//! Property tests for form validation and the record store.
//!
//! Each property runs over generated names, padding and numbers rather than
//! a handful of fixed strings.

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use station_core::validation::{
    validate_customer, validate_transaction, CustomerInput, FormField, TransactionInput,
};
use station_core::{RecordStore, TabController, Transaction, ValidationError};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()
}

fn seeded_store() -> RecordStore {
    RecordStore::new(
        vec![Transaction {
            id: "T1".to_string(),
            customer_name: "Manang Inday".to_string(),
            gallons_ordered: 4,
            time_in: now(),
            time_out: None,
        }],
        Vec::new(),
        Default::default(),
    )
}

/// Free text that is not blank once trimmed.
fn text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9 ,.'-]{0,30}"
}

fn padding() -> impl Strategy<Value = String> {
    "[ \t]{0,3}"
}

/// Text that no number parser accepts, plus the non-finite spellings.
fn not_a_number() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z][A-Za-z ]{0,15}",
        "[0-9]{1,3}[A-Za-z]{1,5}",
        Just("inf".to_string()),
        Just("NaN".to_string()),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn valid_transaction_appends_exactly_one(
        name in text(),
        qty in 1..=u32::MAX,
        left in padding(),
        right in padding(),
    ) {
        let mut store = seeded_store();
        let input = TransactionInput::new(
            format!("{left}{name}{right}"),
            format!("{right}{qty}{left}"),
        );

        let record = validate_transaction(&input, now()).unwrap();
        let id = store.append(record);

        prop_assert_eq!(store.transactions().len(), 2);
        let stored = store.transaction(&id).unwrap();
        prop_assert_eq!(stored.customer_name.as_str(), name.trim());
        prop_assert_eq!(stored.gallons_ordered, qty);
        prop_assert!(stored.time_out.is_none());
    }

    #[test]
    fn non_positive_quantity_never_reaches_store(name in text(), qty in i64::MIN..=0) {
        let mut store = seeded_store();
        let before = store.clone();

        let result = validate_transaction(&TransactionInput::new(name, qty.to_string()), now());
        if let Ok(record) = result.clone() {
            store.append(record);
        }

        let rejection = result.unwrap_err();
        prop_assert!(matches!(rejection.error, ValidationError::MustBePositive { .. }), "expected ValidationError::MustBePositive");
        prop_assert!(rejection.clear_field);
        prop_assert_eq!(store, before);
    }

    #[test]
    fn non_numeric_quantity_never_reaches_store(name in text(), raw in not_a_number()) {
        let store = seeded_store();
        let rejection =
            validate_transaction(&TransactionInput::new(name, raw.clone()), now()).unwrap_err();

        prop_assert_eq!(rejection.field, FormField::GallonsOrdered);
        prop_assert!(matches!(rejection.error, ValidationError::NotANumber { .. }), "{raw:?}");
        prop_assert!(rejection.clear_field);
        prop_assert_eq!(store, seeded_store());
    }

    #[test]
    fn fractional_quantity_names_whole_number_rule(whole in 0u32..10_000, frac in 1u32..100) {
        let raw = format!("{whole}.{frac:02}");
        let rejection =
            validate_transaction(&TransactionInput::new("Jane Doe", raw), now()).unwrap_err();

        prop_assert!(matches!(rejection.error, ValidationError::NotAWholeNumber { .. }), "expected ValidationError::NotAWholeNumber");
        prop_assert!(rejection.clear_field);
    }

    #[test]
    fn whole_decimal_quantity_matches_integer(qty in 1u32..1_000_000) {
        let plain = validate_transaction(&TransactionInput::new("A", qty.to_string()), now());
        let decimal = validate_transaction(&TransactionInput::new("A", format!("{qty}.0")), now());

        prop_assert_eq!(plain.unwrap(), decimal.unwrap());
    }

    #[test]
    fn valid_customer_round_trips_modulo_trimming(
        name in text(),
        address in text(),
        remarks in text(),
        orders in 0..=u32::MAX,
        pad in padding(),
    ) {
        let mut store = RecordStore::default();
        let input = CustomerInput::new(
            format!("{pad}{name}"),
            format!("{address}{pad}"),
            format!("{pad}{orders}{pad}"),
            format!("{pad}{remarks}{pad}"),
        );

        store.append(validate_customer(&input).unwrap());

        prop_assert_eq!(store.customers().len(), 1);
        let stored = &store.customers()[0];
        prop_assert_eq!(stored.name.as_str(), name.trim());
        prop_assert_eq!(stored.address.as_str(), address.trim());
        prop_assert_eq!(stored.orders_this_month, orders);
        prop_assert_eq!(stored.remarks.as_str(), remarks.trim());
    }

    #[test]
    fn negative_order_count_is_cleared(orders in i64::MIN..0) {
        let input = CustomerInput::new("Roger Cruz", "Blk 1", orders.to_string(), "cash");
        let rejection = validate_customer(&input).unwrap_err();

        prop_assert_eq!(rejection.field, FormField::OrdersThisMonth);
        prop_assert!(rejection.clear_field);
    }

    #[test]
    fn blank_fields_are_never_cleared(blank in padding(), which in 0usize..4) {
        let mut fields = ["Roger Cruz", "Blk 1", "8", "cash"].map(String::from);
        fields[which] = blank;
        let [name, address, orders, remarks] = fields;

        let rejection =
            validate_customer(&CustomerInput::new(name, address, orders, remarks)).unwrap_err();

        prop_assert!(matches!(rejection.error, ValidationError::Required { .. }), "expected ValidationError::Required");
        prop_assert!(!rejection.clear_field);
    }

    #[test]
    fn unknown_tab_ids_leave_controller_unchanged(id in "\\PC{0,20}") {
        let normalized = id.trim().to_ascii_lowercase();
        prop_assume!(!["transactions", "customers", "sales", "inout"].contains(&normalized.as_str()));

        let mut tabs = TabController::new();
        let before = tabs.clone();

        prop_assert!(tabs.select_id(&id).is_err());
        prop_assert_eq!(tabs, before);
    }

    #[test]
    fn mark_fulfilled_unknown_id_changes_nothing(id in "[A-Za-z0-9-]{0,36}", minutes in 0i64..1440) {
        prop_assume!(id != "T1");
        let mut store = seeded_store();
        let before = store.clone();

        store.mark_fulfilled(&id, now() + Duration::minutes(minutes));

        prop_assert_eq!(store, before);
    }
}
