//! # Transaction Commands
//!
//! Commands for the In/Out tab.
//!
//! ## Transaction Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Delivery Lifecycle                                   │
//! │                                                                         │
//! │  ┌──────────┐  add_transaction  ┌──────────┐  mark_fulfilled ┌────────┐ │
//! │  │   Form   │──────────────────►│ Pending  │────────────────►│  Out   │ │
//! │  │  draft   │  (validated)      │ time-out │  (time-out set) │        │ │
//! │  └──────────┘                   │  = N/A   │                 └────────┘ │
//! │       ▲                         └──────────┘                            │
//! │       └── rejected: message + maybe cleared field                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use station_core::validation::TransactionInput;
use station_core::view::{transaction_rows, TransactionRow};
use station_core::FulfillOutcome;
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::state::{ConfigState, StationState};

/// Current in/out table.
pub fn list_transactions(station: &StationState, config: &ConfigState) -> Vec<TransactionRow> {
    debug!("list_transactions command");
    let opts = config.render_options();
    station.with_station(|s| transaction_rows(&s.store, &opts))
}

/// Validates the form and appends a new delivery.
///
/// ## Returns
/// The updated in/out table, newest row last. On rejection the store is
/// untouched and the error names the field (and whether to clear it); the
/// station's draft keeps the other values.
pub fn add_transaction(
    station: &StationState,
    config: &ConfigState,
    input: TransactionInput,
) -> Result<Vec<TransactionRow>, ApiError> {
    debug!(?input, "add_transaction command");

    let clock = station.clock();
    let opts = config.render_options();

    station.with_station_mut(|s| {
        s.transaction_form.fill(input);
        let record = s.transaction_form.submit(clock).map_err(|rejection| {
            debug!(field = ?rejection.field, %rejection, "Transaction rejected");
            ApiError::from(rejection)
        })?;

        let id = s.store.append(record);
        info!(%id, "Transaction added");
        Ok(transaction_rows(&s.store, &opts))
    })
}

/// Response for [`mark_fulfilled`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkFulfilledResponse {
    pub outcome: FulfillOutcome,
    pub rows: Vec<TransactionRow>,
}

/// Stamps time-out on a pending delivery.
///
/// Unknown ids and already-fulfilled rows are not errors: the table comes
/// back unchanged and `outcome` says why.
pub fn mark_fulfilled(
    station: &StationState,
    config: &ConfigState,
    transaction_id: &str,
) -> MarkFulfilledResponse {
    debug!(%transaction_id, "mark_fulfilled command");

    let now = station.clock().now();
    let opts = config.render_options();

    station.with_station_mut(|s| {
        let outcome = s.store.mark_fulfilled(transaction_id, now);
        match outcome {
            FulfillOutcome::Fulfilled => info!(%transaction_id, "Transaction marked out"),
            FulfillOutcome::AlreadyFulfilled => {
                debug!(%transaction_id, "Transaction already out")
            }
            FulfillOutcome::NotFound => warn!(%transaction_id, "Unknown transaction id"),
        }

        MarkFulfilledResponse {
            outcome,
            rows: transaction_rows(&s.store, &opts),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use chrono::{Duration, TimeZone, Utc};
    use station_core::validation::FormField;
    use station_core::view::RowStatus;
    use station_core::{FixedClock, RecordStore, TabController, Transaction};
    use std::sync::Arc;

    fn setup() -> (StationState, ConfigState, Arc<FixedClock>) {
        let t0 = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let clock = Arc::new(FixedClock::new(t0));
        let store = RecordStore::new(
            vec![Transaction {
                id: "T1".to_string(),
                customer_name: "Jane Doe".to_string(),
                gallons_ordered: 2,
                time_in: t0,
                time_out: None,
            }],
            Vec::new(),
            Default::default(),
        );
        let state = StationState::with_clock(store, TabController::new(), clock.clone());
        (state, ConfigState::default(), clock)
    }

    #[test]
    fn test_add_transaction() {
        let (state, config, _) = setup();

        let rows =
            add_transaction(&state, &config, TransactionInput::new("Jane Doe", "3")).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].customer_name, "Jane Doe");
        assert_eq!(rows[1].gallons_ordered, 3);
        assert_eq!(rows[1].time_in, "08:00 AM");
        assert_eq!(rows[1].time_out, "N/A");
    }

    #[test]
    fn test_add_transaction_rejected() {
        let (state, config, _) = setup();

        let err = add_transaction(&state, &config, TransactionInput::new("Jane Doe", "0"))
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.field, Some(FormField::GallonsOrdered));
        assert!(err.clear_field);
        assert_eq!(list_transactions(&state, &config).len(), 1);

        let draft = state.with_station(|s| s.transaction_form.input().clone());
        assert_eq!(draft, TransactionInput::new("Jane Doe", ""));
    }

    #[test]
    fn test_add_transaction_resets_draft() {
        let (state, config, _) = setup();

        add_transaction(&state, &config, TransactionInput::new("Jane Doe", "3.0")).unwrap();

        let draft = state.with_station(|s| s.transaction_form.input().clone());
        assert_eq!(draft, TransactionInput::default());
    }

    #[test]
    fn test_mark_fulfilled() {
        let (state, config, clock) = setup();
        clock.advance(Duration::minutes(30));

        let response = mark_fulfilled(&state, &config, "T1");

        assert_eq!(response.outcome, FulfillOutcome::Fulfilled);
        assert_eq!(response.rows[0].status, RowStatus::Fulfilled);
        assert_eq!(response.rows[0].time_out, "08:30 AM");
    }

    #[test]
    fn test_mark_fulfilled_unknown_id() {
        let (state, config, _) = setup();
        let before = list_transactions(&state, &config);

        let response = mark_fulfilled(&state, &config, "nope");

        assert_eq!(response.outcome, FulfillOutcome::NotFound);
        assert_eq!(response.rows, before);
    }
}
