//! # Station Dashboard Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging to stderr)
//! 2. Load configuration from the environment
//! 3. Load initial data from the mock data source
//! 4. Create state (StationState, ConfigState)
//! 5. Serve JSON-lines commands on stdin/stdout until EOF

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match station_dashboard_lib::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Dashboard stopped");
            eprintln!("station-dashboard: {e}");
            ExitCode::FAILURE
        }
    }
}
