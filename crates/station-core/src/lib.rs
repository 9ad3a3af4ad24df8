//! # station-core: Record Management for the Water Station Dashboard
//!
//! Everything the dashboard knows about deliveries, customers and sales lives
//! here as plain data and pure functions. No I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Golden Valley Station                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation (frontend)                         │   │
//! │  │        In/Out tab ─── Customers tab ─── Sales tab               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON-lines IPC                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 station-dashboard (commands)                    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ station-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   validation ──► store ──► view          tabs                   │   │
//! │  │   forms          source    money         clock                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Transaction, Customer, SalesSnapshot
//! - [`validation`] - Raw form strings to typed records
//! - [`forms`] - Draft form state with clear-on-reject rules
//! - [`store`] - The in-memory record store
//! - [`tabs`] - Active tab selection
//! - [`view`] - Projection of the store for display
//! - [`source`] - Initial data (mocked)
//! - [`money`] - Integer currency amounts
//! - [`clock`] - Time source
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::Utc;
//! use station_core::validation::{validate_transaction, TransactionInput};
//! use station_core::view::{render, RenderOptions, ViewContent};
//! use station_core::{RecordStore, TabController};
//!
//! let mut store = RecordStore::default();
//! let tabs = TabController::new();
//!
//! let record = validate_transaction(&TransactionInput::new("Jane Doe", "3"), Utc::now())
//!     .expect("valid input");
//! let id = store.append(record);
//! store.mark_fulfilled(&id, Utc::now());
//!
//! let view = render(&store, &tabs, &RenderOptions::default());
//! assert!(matches!(view.content, ViewContent::Transactions { ref rows } if rows.len() == 1));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod clock;
pub mod error;
pub mod forms;
pub mod money;
pub mod source;
pub mod store;
pub mod tabs;
pub mod types;
pub mod validation;
pub mod view;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use source::{DataSource, InitialData, MockDataSource};
pub use store::{FulfillOutcome, RecordStore};
pub use tabs::{Tab, TabController};
pub use types::*;
