//! # State Module
//!
//! Application state for the dashboard.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │          ┌─────────────────────────┐   ┌─────────────────────────┐     │
//! │          │      StationState       │   │      ConfigState        │     │
//! │          │                         │   │                         │     │
//! │          │  Arc<Mutex<Station>>    │   │  station_name           │     │
//! │          │   • RecordStore         │   │  currency_symbol        │     │
//! │          │   • TabController       │   │  utc_offset_minutes     │     │
//! │          │  Arc<dyn Clock>         │   │  initial_tab            │     │
//! │          └─────────────────────────┘   └─────────────────────────┘     │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • StationState: one command at a time under the mutex                 │
//! │  • ConfigState: read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands take the state they need as explicit arguments; nothing is
//! global.

mod config;
mod station;

pub use config::ConfigState;
pub use station::{Station, StationState};
