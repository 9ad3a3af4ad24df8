//! # Domain Types
//!
//! Record types held by the station's record store.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   Transaction   │   │    Customer     │   │  SalesSnapshot  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  day            │       │
//! │  │  customer_name  │   │  name           │   │  week           │       │
//! │  │  gallons        │   │  address        │   │  month          │       │
//! │  │  time_in        │   │  orders/month   │   │  (read-only)    │       │
//! │  │  time_out?      │   │  remarks        │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  No foreign keys: a transaction's customer_name is free text and is    │
//! │  never matched against the customer list.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## New vs. Stored Records
//! Validators produce `NewTransaction` / `NewCustomer` (no id yet). The record
//! store assigns the UUID when it appends them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::money::Money;

/// Generates a fresh record identifier (UUID v4).
pub fn new_record_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Transaction
// =============================================================================

/// One delivery order: gallons ordered, when it came in, and when it went out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier (UUID v4 for records created here).
    pub id: String,

    /// Customer name as typed on the form.
    pub customer_name: String,

    /// Gallons ordered, always > 0.
    pub gallons_ordered: u32,

    /// When the order was recorded.
    #[ts(as = "String")]
    pub time_in: DateTime<Utc>,

    /// When the order was marked fulfilled. `None` until then.
    #[ts(as = "Option<String>")]
    pub time_out: Option<DateTime<Utc>>,
}

impl Transaction {
    /// Checks if the order has been marked fulfilled.
    #[inline]
    pub fn is_fulfilled(&self) -> bool {
        self.time_out.is_some()
    }

    /// Checks that time-out, if present, is not earlier than time-in.
    ///
    /// Nothing enforces this on write; seeded or imported data may violate it.
    pub fn is_chronological(&self) -> bool {
        match self.time_out {
            Some(out) => out >= self.time_in,
            None => true,
        }
    }
}

/// A validated transaction that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub customer_name: String,
    pub gallons_ordered: u32,
    pub time_in: DateTime<Utc>,
}

impl NewTransaction {
    /// Turns the draft into a stored record with the given id.
    ///
    /// Time-out always starts absent.
    pub fn into_record(self, id: String) -> Transaction {
        Transaction {
            id,
            customer_name: self.customer_name,
            gallons_ordered: self.gallons_ordered,
            time_in: self.time_in,
            time_out: None,
        }
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A stored customer profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub address: String,
    pub orders_this_month: u32,
    pub remarks: String,
}

/// A validated customer that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub address: String,
    pub orders_this_month: u32,
    pub remarks: String,
}

impl NewCustomer {
    pub fn into_record(self, id: String) -> Customer {
        Customer {
            id,
            name: self.name,
            address: self.address,
            orders_this_month: self.orders_this_month,
            remarks: self.remarks,
        }
    }
}

// =============================================================================
// Sales Snapshot
// =============================================================================

/// Daily, weekly and monthly sales totals.
///
/// Loaded once at startup and never updated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SalesSnapshot {
    pub day: Money,
    pub week: Money,
    pub month: Money,
}

// =============================================================================
// Record Kinds
// =============================================================================

/// The two appendable collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Transaction,
    Customer,
}

/// A validated record on its way into the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewRecord {
    Transaction(NewTransaction),
    Customer(NewCustomer),
}

impl NewRecord {
    /// Which collection this record belongs in.
    pub fn kind(&self) -> RecordKind {
        match self {
            NewRecord::Transaction(_) => RecordKind::Transaction,
            NewRecord::Customer(_) => RecordKind::Customer,
        }
    }
}

impl From<NewTransaction> for NewRecord {
    fn from(t: NewTransaction) -> Self {
        NewRecord::Transaction(t)
    }
}

impl From<NewCustomer> for NewRecord {
    fn from(c: NewCustomer) -> Self {
        NewRecord::Customer(c)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
