//! # Station Dashboard Library
//!
//! Backend for the Golden Valley water station dashboard. Owns the record
//! store and active tab, and answers front-end commands over a JSON-lines
//! channel.
//!
//! ## Module Organization
//! ```text
//! station_dashboard_lib/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── ipc.rs          ◄─── JSON-lines request/response loop
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── station.rs  ◄─── Record store + tab controller behind a mutex
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── view.rs     ◄─── Tab switching and rendering
//! │   ├── transaction.rs ◄ In/out deliveries
//! │   ├── customer.rs ◄─── Customer records
//! │   ├── sales.rs    ◄─── Sales cards
//! │   └── config.rs   ◄─── Configuration retrieval
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## State Management
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Dashboard State                                      │
//! │                                                                         │
//! │  ┌──────────────────────────────┐   ┌──────────────────────────────┐   │
//! │  │    StationState              │   │    ConfigState               │   │
//! │  │                              │   │                              │   │
//! │  │  • Record store              │   │  • Station name              │   │
//! │  │  • Active tab                │   │  • Currency symbol           │   │
//! │  │  • Clock                     │   │  • Display offset            │   │
//! │  └──────────────────────────────┘   └──────────────────────────────┘   │
//! │                                                                         │
//! │  Each command receives only the state it needs.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod ipc;
pub mod state;

use chrono::Utc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use error::AppError;
use state::{ConfigState, StationState};
use station_core::{MockDataSource, RecordStore, TabController};

/// Runs the dashboard until stdin closes.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: INFO (DEBUG for station crates), RUST_LOG overrides      │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • STATION_* environment variables over defaults                     │
/// │                                                                         │
/// │  3. Load Initial Data ────────────────────────────────────────────────► │
/// │     • Mock data source anchored at "now"                                │
/// │                                                                         │
/// │  4. Initialize State ─────────────────────────────────────────────────► │
/// │     • StationState: store + tab controller on the configured tab        │
/// │                                                                         │
/// │  5. Serve ────────────────────────────────────────────────────────────► │
/// │     • stdin requests, stdout responses, until EOF                       │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), AppError> {
    init_tracing();

    info!("Starting station dashboard");

    let config = ConfigState::from_env();
    info!(station = %config.station_name, tab = %config.initial_tab, "Configuration loaded");

    let source = MockDataSource::new(Utc::now(), config.mock_seed);
    let store = RecordStore::load(&source)?;
    info!(
        transactions = store.transactions().len(),
        customers = store.customers().len(),
        "Initial data loaded"
    );

    let station = StationState::new(store, TabController::starting_at(config.initial_tab));

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    ipc::serve(stdin.lock(), stdout.lock(), &station, &config)
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr; stdout carries responses only.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=station=trace` - Show trace for station crates only
/// - Default: INFO, DEBUG for station crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,station=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
