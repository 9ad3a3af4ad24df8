//! # Dashboard Commands
//!
//! Every operation the dashboard front end can ask for. Each command takes
//! only the state it needs and returns plain serializable values, so the IPC
//! bridge in [`crate::ipc`] is a thin dispatch table.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs          ◄─── You are here (exports)
//! ├── view.rs         ◄─── get_view, select_tab
//! ├── transaction.rs  ◄─── list_transactions, add_transaction, mark_fulfilled
//! ├── customer.rs     ◄─── list_customers, add_customer
//! ├── sales.rs        ◄─── get_sales
//! └── config.rs       ◄─── get_config
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Front end writes one JSON line to stdin:                               │
//! │    {"command":"add_transaction",                                        │
//! │     "args":{"customerName":"Jane Doe","gallonsOrdered":"3"}}            │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ipc::dispatch ──► commands::transaction::add_transaction(              │
//! │                        &StationState,   ◄── shared, mutex-guarded       │
//! │                        &ConfigState,    ◄── read-only                   │
//! │                        TransactionInput ◄── from "args"                 │
//! │                    ) -> Result<Vec<TransactionRow>, ApiError>           │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  One JSON line back on stdout:  {"ok":[...]}  or  {"error":{...}}       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! ```rust,ignore
//! // Only needs the station
//! fn list_customers(station: &StationState)
//!
//! // Only needs config
//! fn get_config(config: &ConfigState)
//!
//! // Needs both (renders times and money)
//! fn get_sales(station: &StationState, config: &ConfigState)
//! ```

pub mod config;
pub mod customer;
pub mod sales;
pub mod transaction;
pub mod view;
