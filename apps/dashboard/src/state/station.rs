//! # Station State
//!
//! The single owner of the record store and the active tab.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Station State Operations                             │
//! │                                                                         │
//! │  Frontend Action          Command                 State Change          │
//! │  ───────────────          ───────                 ────────────          │
//! │                                                                         │
//! │  Add Transaction ────────► add_transaction() ───► transaction_form      │
//! │                                                   .submit() then        │
//! │                                                   store.append()        │
//! │                                                                         │
//! │  Click Mark Out ─────────► mark_fulfilled() ────► store.mark_fulfilled()│
//! │                                                                         │
//! │  Add Customer ───────────► add_customer() ──────► customer_form         │
//! │                                                   .submit() then        │
//! │                                                   store.append()        │
//! │                                                                         │
//! │  Click Tab ──────────────► select_tab() ────────► tabs.select()         │
//! │                                                                         │
//! │  View ───────────────────► get_view() ──────────► (read only)           │
//! │                                                                         │
//! │  NOTE: Every command holds the lock for its whole run, so commands      │
//! │        never interleave.                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use station_core::forms::{CustomerForm, TransactionForm};
use station_core::{Clock, RecordStore, SystemClock, TabController};

/// Everything the dashboard mutates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Station {
    pub store: RecordStore,
    pub tabs: TabController,

    /// Draft of the "Add New Transaction" form after the last submit.
    pub transaction_form: TransactionForm,

    /// Draft of the "Add New Customer" form after the last submit.
    pub customer_form: CustomerForm,
}

/// Shared handle to the station plus the clock commands stamp times with.
///
/// ## Thread Safety
/// `Arc<Mutex<Station>>` so the handle can be cloned into whatever drives
/// the commands. Only one command touches the station at a time.
#[derive(Clone)]
pub struct StationState {
    station: Arc<Mutex<Station>>,
    clock: Arc<dyn Clock>,
}

impl StationState {
    /// Creates state using the system clock.
    pub fn new(store: RecordStore, tabs: TabController) -> Self {
        Self::with_clock(store, tabs, Arc::new(SystemClock))
    }

    /// Creates state with an explicit clock (tests pin time this way).
    pub fn with_clock(store: RecordStore, tabs: TabController, clock: Arc<dyn Clock>) -> Self {
        StationState {
            station: Arc::new(Mutex::new(Station {
                store,
                tabs,
                ..Station::default()
            })),
            clock,
        }
    }

    /// Clock used for time-in and time-out stamps.
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Executes a function with read access to the station.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let pending = station_state.with_station(|s| s.store.pending_count());
    /// ```
    pub fn with_station<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Station) -> R,
    {
        let station = self.station.lock().unwrap_or_else(PoisonError::into_inner);
        f(&station)
    }

    /// Executes a function with write access to the station.
    pub fn with_station_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Station) -> R,
    {
        let mut station = self.station.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut station)
    }
}

impl std::fmt::Debug for StationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StationState")
            .field("station", &self.station)
            .finish_non_exhaustive()
    }
}
