//! # View Renderer
//!
//! Projects the record store into what the active tab displays.
//!
//! ## Projection
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  &RecordStore + active Tab + RenderOptions                              │
//! │          │                                                              │
//! │          ▼                                                              │
//! │  render() ─── pure, takes shared borrows only ───┐                      │
//! │                                                   ▼                     │
//! │  Transactions ► TransactionRow { name, gallons, "08:15 AM", "N/A",      │
//! │                                  status: Fulfilled | MarkFulfilled }    │
//! │  Customers    ► CustomerRow    { name, address, orders, remarks }       │
//! │  Sales        ► SalesCard      { "Daily Sales", "₱1,250.00" } × 3       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Times are printed as `hh:mm AM/PM` with a fixed offset, never the host
//! locale.

use chrono::{DateTime, FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::{Money, DEFAULT_CURRENCY_SYMBOL};
use crate::store::RecordStore;
use crate::tabs::{Tab, TabController};
use crate::types::{Customer, SalesSnapshot, Transaction};

/// Shown in place of a missing time-out.
pub const NOT_AVAILABLE: &str = "N/A";

/// Display settings for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Offset applied to timestamps before formatting.
    pub utc_offset: FixedOffset,

    /// Prefix for money amounts.
    pub currency_symbol: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            utc_offset: Utc.fix(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

/// Formats an optional timestamp as `hh:mm AM/PM`, or `N/A` when absent.
///
/// ## Example
/// ```rust
/// use chrono::{FixedOffset, TimeZone, Utc};
/// use station_core::view::format_time;
///
/// let offset = FixedOffset::east_opt(8 * 3600).unwrap();
/// let t = Utc.with_ymd_and_hms(2024, 3, 1, 0, 5, 0).unwrap();
/// assert_eq!(format_time(Some(t), offset), "08:05 AM");
/// assert_eq!(format_time(None, offset), "N/A");
/// ```
pub fn format_time(time: Option<DateTime<Utc>>, offset: FixedOffset) -> String {
    match time {
        Some(t) => t.with_timezone(&offset).format("%I:%M %p").to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

// =============================================================================
// Rows
// =============================================================================

/// What the action column of a transaction row shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RowStatus {
    /// Time-out is set.
    Fulfilled,

    /// Time-out is absent; the row offers a button that fulfils it.
    #[serde(rename_all = "camelCase")]
    MarkFulfilled { transaction_id: String },
}

impl RowStatus {
    /// Text for the action column.
    pub fn label(&self) -> &'static str {
        match self {
            RowStatus::Fulfilled => "Fulfilled",
            RowStatus::MarkFulfilled { .. } => "Mark Out",
        }
    }
}

/// One line of the in/out table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRow {
    pub id: String,
    pub customer_name: String,
    pub gallons_ordered: u32,
    pub time_in: String,
    pub time_out: String,
    pub status: RowStatus,

    /// Set when time-out precedes time-in.
    pub out_of_order: bool,
}

impl TransactionRow {
    fn project(t: &Transaction, opts: &RenderOptions) -> Self {
        let status = if t.is_fulfilled() {
            RowStatus::Fulfilled
        } else {
            RowStatus::MarkFulfilled {
                transaction_id: t.id.clone(),
            }
        };

        TransactionRow {
            id: t.id.clone(),
            customer_name: t.customer_name.clone(),
            gallons_ordered: t.gallons_ordered,
            time_in: format_time(Some(t.time_in), opts.utc_offset),
            time_out: format_time(t.time_out, opts.utc_offset),
            status,
            out_of_order: !t.is_chronological(),
        }
    }
}

/// One line of the customer table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRow {
    pub id: String,
    pub name: String,
    pub address: String,
    pub orders_this_month: u32,
    pub remarks: String,
}

impl From<&Customer> for CustomerRow {
    fn from(c: &Customer) -> Self {
        CustomerRow {
            id: c.id.clone(),
            name: c.name.clone(),
            address: c.address.clone(),
            orders_this_month: c.orders_this_month,
            remarks: c.remarks.clone(),
        }
    }
}

/// One of the three sales figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SalesCard {
    pub label: String,
    pub amount: Money,
    pub display: String,
}

impl SalesCard {
    fn new(label: &str, amount: Money, opts: &RenderOptions) -> Self {
        SalesCard {
            label: label.to_string(),
            amount,
            display: amount.format_with(&opts.currency_symbol),
        }
    }
}

/// Daily, weekly, monthly cards in that order.
pub fn sales_cards(sales: &SalesSnapshot, opts: &RenderOptions) -> Vec<SalesCard> {
    vec![
        SalesCard::new("Daily Sales", sales.day, opts),
        SalesCard::new("Weekly Sales", sales.week, opts),
        SalesCard::new("Monthly Sales", sales.month, opts),
    ]
}

pub fn transaction_rows(store: &RecordStore, opts: &RenderOptions) -> Vec<TransactionRow> {
    store
        .transactions()
        .iter()
        .map(|t| TransactionRow::project(t, opts))
        .collect()
}

pub fn customer_rows(store: &RecordStore) -> Vec<CustomerRow> {
    store.customers().iter().map(CustomerRow::from).collect()
}

// =============================================================================
// View
// =============================================================================

/// Body of a rendered tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewContent {
    Transactions { rows: Vec<TransactionRow> },
    Customers { rows: Vec<CustomerRow> },
    Sales { cards: Vec<SalesCard> },
}

/// A rendered tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct View {
    pub tab: Tab,
    pub title: String,
    pub content: ViewContent,
}

/// Renders a specific tab.
pub fn render_tab(store: &RecordStore, tab: Tab, opts: &RenderOptions) -> View {
    let content = match tab {
        Tab::Transactions => ViewContent::Transactions {
            rows: transaction_rows(store, opts),
        },
        Tab::Customers => ViewContent::Customers {
            rows: customer_rows(store),
        },
        Tab::Sales => ViewContent::Sales {
            cards: sales_cards(store.sales(), opts),
        },
    };

    View {
        tab,
        title: tab.title().to_string(),
        content,
    }
}

/// Renders whatever tab is active.
pub fn render(store: &RecordStore, tabs: &TabController, opts: &RenderOptions) -> View {
    render_tab(store, tabs.active(), opts)
}

// =============================================================================
// Unit Tests
// =============================================================================
