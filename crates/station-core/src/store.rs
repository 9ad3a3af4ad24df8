//! # Record Store
//!
//! The authoritative in-memory copy of the station's three collections.
//!
//! ## Mutation Surface
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       RecordStore                                       │
//! │                                                                         │
//! │   transactions: Vec<Transaction>   ◄── append(NewRecord::Transaction)   │
//! │                                    ◄── mark_fulfilled(id, now)          │
//! │                                                                         │
//! │   customers:    Vec<Customer>      ◄── append(NewRecord::Customer)      │
//! │                                                                         │
//! │   sales:        SalesSnapshot      (read-only after load)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing else can change the collections: the fields are private and only
//! shared slices are handed out. The store does no validation; records reach
//! it already checked by the validation module.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::source::{DataSource, InitialData};
use crate::types::{new_record_id, Customer, NewRecord, SalesSnapshot, Transaction};

/// What `mark_fulfilled` found.
///
/// Informational only. Only `Fulfilled` means the store changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum FulfillOutcome {
    /// Time-out was absent and is now set.
    Fulfilled,
    /// Time-out was already set; left as it was.
    AlreadyFulfilled,
    /// No transaction has that id.
    NotFound,
}

/// In-memory holder of transactions, customers and the sales snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    transactions: Vec<Transaction>,
    customers: Vec<Customer>,
    sales: SalesSnapshot,
}

impl RecordStore {
    /// Creates a store from already-built collections.
    pub fn new(
        transactions: Vec<Transaction>,
        customers: Vec<Customer>,
        sales: SalesSnapshot,
    ) -> Self {
        RecordStore {
            transactions,
            customers,
            sales,
        }
    }

    /// Loads the initial collections from a data source.
    ///
    /// The source is trusted for content but not for shape: duplicate ids
    /// within a collection or a delivery of zero gallons fail with
    /// `CoreError::DataSource`.
    pub fn load(source: &dyn DataSource) -> CoreResult<Self> {
        let InitialData {
            transactions,
            customers,
            sales,
        } = source.load()?;

        ensure_unique_ids("transaction", transactions.iter().map(|t| t.id.as_str()))?;
        ensure_unique_ids("customer", customers.iter().map(|c| c.id.as_str()))?;

        if let Some(empty) = transactions.iter().find(|t| t.gallons_ordered == 0) {
            return Err(CoreError::DataSource(format!(
                "transaction {} has no gallons ordered",
                empty.id
            )));
        }

        debug!(
            transactions = transactions.len(),
            customers = customers.len(),
            "Record store loaded"
        );

        Ok(RecordStore::new(transactions, customers, sales))
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Appends a validated record under a fresh id and returns that id.
    ///
    /// Insertion order is preserved; the newest record is last.
    pub fn append(&mut self, record: impl Into<NewRecord>) -> String {
        let id = new_record_id();
        let record = record.into();
        let kind = record.kind();

        match record {
            NewRecord::Transaction(t) => self.transactions.push(t.into_record(id.clone())),
            NewRecord::Customer(c) => self.customers.push(c.into_record(id.clone())),
        }

        debug!(?kind, %id, "Record appended");
        id
    }

    /// Sets time-out on a transaction that does not have one yet.
    ///
    /// Unknown ids and already fulfilled transactions leave the store as it
    /// was. A `now` earlier than time-in is stored as given and logged.
    pub fn mark_fulfilled(&mut self, transaction_id: &str, now: DateTime<Utc>) -> FulfillOutcome {
        let Some(transaction) = self
            .transactions
            .iter_mut()
            .find(|t| t.id == transaction_id)
        else {
            debug!(%transaction_id, "mark_fulfilled: no such transaction");
            return FulfillOutcome::NotFound;
        };

        if transaction.time_out.is_some() {
            return FulfillOutcome::AlreadyFulfilled;
        }

        if now < transaction.time_in {
            warn!(
                %transaction_id,
                time_in = %transaction.time_in,
                time_out = %now,
                "Time-out is earlier than time-in"
            );
        }

        transaction.time_out = Some(now);
        debug!(%transaction_id, "Transaction fulfilled");
        FulfillOutcome::Fulfilled
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn sales(&self) -> &SalesSnapshot {
        &self.sales
    }

    /// Looks up a transaction by id.
    pub fn transaction(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Number of transactions still waiting for a time-out.
    pub fn pending_count(&self) -> usize {
        self.transactions.iter().filter(|t| !t.is_fulfilled()).count()
    }
}

fn ensure_unique_ids<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> CoreResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CoreError::DataSource(format!("duplicate {kind} id {id}")));
        }
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::{NewCustomer, NewTransaction};
    use crate::validation::{
        validate_customer, validate_transaction, CustomerInput, TransactionInput,
    };
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()
    }

    fn transaction(id: &str, time_out: Option<DateTime<Utc>>) -> Transaction {
        Transaction {
            id: id.to_string(),
            customer_name: "Jane Doe".to_string(),
            gallons_ordered: 2,
            time_in: t0(),
            time_out,
        }
    }

    fn store_with(transactions: Vec<Transaction>) -> RecordStore {
        RecordStore::new(
            transactions,
            Vec::new(),
            SalesSnapshot {
                day: Money::from_pesos(1500),
                week: Money::from_pesos(9000),
                month: Money::from_pesos(52000),
            },
        )
    }

    struct FixedSource(InitialData);

    impl DataSource for FixedSource {
        fn load(&self) -> CoreResult<InitialData> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_load_accepts_clean_data() {
        let source = FixedSource(InitialData {
            transactions: vec![transaction("T1", None), transaction("T2", Some(t0()))],
            customers: Vec::new(),
            sales: SalesSnapshot::default(),
        });

        let store = RecordStore::load(&source).unwrap();
        assert_eq!(store.transactions().len(), 2);
        assert_eq!(store.pending_count(), 1);
    }

    #[test]
    fn test_load_rejects_duplicate_ids() {
        let source = FixedSource(InitialData {
            transactions: vec![transaction("T1", None), transaction("T1", None)],
            customers: Vec::new(),
            sales: SalesSnapshot::default(),
        });

        let err = RecordStore::load(&source).unwrap_err();
        assert!(matches!(err, CoreError::DataSource(_)));
        assert_eq!(err.to_string(), "Data source failed: duplicate transaction id T1");
    }

    #[test]
    fn test_load_rejects_zero_gallons() {
        let mut empty = transaction("T9", None);
        empty.gallons_ordered = 0;
        let source = FixedSource(InitialData {
            transactions: vec![empty],
            customers: Vec::new(),
            sales: SalesSnapshot::default(),
        });

        assert!(matches!(
            RecordStore::load(&source),
            Err(CoreError::DataSource(_))
        ));
    }

    #[test]
    fn test_append_transaction() {
        let mut store = store_with(vec![transaction("T1", None)]);
        let record = validate_transaction(&TransactionInput::new("Jane Doe", "3"), t0()).unwrap();

        let id = store.append(record);

        assert_eq!(store.transactions().len(), 2);
        let last = store.transactions().last().unwrap();
        assert_eq!(last.id, id);
        assert_eq!(last.customer_name, "Jane Doe");
        assert_eq!(last.gallons_ordered, 3);
        assert!(last.time_out.is_none());
    }

    #[test]
    fn test_append_preserves_order_and_unique_ids() {
        let mut store = RecordStore::default();
        let names = ["A", "B", "C"];

        let ids: Vec<String> = names
            .iter()
            .map(|name| {
                store.append(NewTransaction {
                    customer_name: name.to_string(),
                    gallons_ordered: 1,
                    time_in: t0(),
                })
            })
            .collect();

        let stored: Vec<&str> = store
            .transactions()
            .iter()
            .map(|t| t.customer_name.as_str())
            .collect();
        assert_eq!(stored, names);
        assert_ne!(ids[0], ids[1]);
        assert_ne!(ids[1], ids[2]);
    }

    #[test]
    fn test_append_customer_keeps_fields() {
        let mut store = RecordStore::default();
        let customer =
            validate_customer(&CustomerInput::new(" Roger Cruz ", "Blk 1", "8", "Pays cash"))
                .unwrap();

        store.append(customer);

        assert_eq!(store.customers().len(), 1);
        assert!(store.transactions().is_empty());
        let stored = &store.customers()[0];
        assert_eq!(stored.name, "Roger Cruz");
        assert_eq!(stored.address, "Blk 1");
        assert_eq!(stored.orders_this_month, 8);
        assert_eq!(stored.remarks, "Pays cash");
    }

    #[test]
    fn test_rejected_input_never_reaches_store() {
        let mut store = store_with(vec![transaction("T1", None)]);
        let before = store.clone();

        for raw in ["0", "-1", "abc"] {
            if let Ok(record) =
                validate_transaction(&TransactionInput::new("Jane Doe", raw), t0())
            {
                store.append(record);
            }
        }

        assert_eq!(store, before);
    }

    #[test]
    fn test_mark_fulfilled_sets_time_out() {
        let mut store = store_with(vec![transaction("T1", None)]);
        let now = t0() + Duration::minutes(45);

        let outcome = store.mark_fulfilled("T1", now);

        assert_eq!(outcome, FulfillOutcome::Fulfilled);
        let t = store.transaction("T1").unwrap();
        assert_eq!(t.time_out, Some(now));
        assert!(t.time_out.unwrap() >= t.time_in);
        assert_eq!(store.pending_count(), 0);
    }

    #[test]
    fn test_mark_fulfilled_twice_is_idempotent() {
        let mut store = store_with(vec![transaction("T1", None)]);
        let first = t0() + Duration::minutes(10);

        store.mark_fulfilled("T1", first);
        let outcome = store.mark_fulfilled("T1", first + Duration::hours(1));

        assert_eq!(outcome, FulfillOutcome::AlreadyFulfilled);
        assert_eq!(store.transaction("T1").unwrap().time_out, Some(first));
    }

    #[test]
    fn test_mark_fulfilled_unknown_id_is_noop() {
        let mut store = store_with(vec![transaction("T1", None)]);
        store.append(NewCustomer {
            name: "Mark Reyes".to_string(),
            address: "Purok 1".to_string(),
            orders_this_month: 15,
            remarks: "Pays Gcash".to_string(),
        });
        let before = store.clone();

        let outcome = store.mark_fulfilled("missing", t0());

        assert_eq!(outcome, FulfillOutcome::NotFound);
        assert_eq!(store, before);
    }

    #[test]
    fn test_mark_fulfilled_touches_only_target() {
        let mut store = store_with(vec![transaction("T1", None), transaction("T2", None)]);

        store.mark_fulfilled("T2", t0() + Duration::minutes(5));

        assert!(store.transaction("T1").unwrap().time_out.is_none());
        assert!(store.transaction("T2").unwrap().time_out.is_some());
        assert_eq!(store.pending_count(), 1);
    }

    #[test]
    fn test_mark_fulfilled_with_early_clock_is_stored_as_given() {
        let mut store = store_with(vec![transaction("T1", None)]);
        let early = t0() - Duration::minutes(5);

        assert_eq!(store.mark_fulfilled("T1", early), FulfillOutcome::Fulfilled);
        assert!(!store.transaction("T1").unwrap().is_chronological());
    }
}
