//! # View Commands
//!
//! Tab switching and whole-view rendering.

use station_core::view::{render, View};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{ConfigState, StationState};

/// Renders the active tab.
pub fn get_view(station: &StationState, config: &ConfigState) -> View {
    debug!("get_view command");
    let opts = config.render_options();
    station.with_station(|s| render(&s.store, &s.tabs, &opts))
}

/// Switches tabs and returns the newly visible view.
///
/// Unknown tab ids are rejected and the current tab stays selected.
pub fn select_tab(
    station: &StationState,
    config: &ConfigState,
    tab: &str,
) -> Result<View, ApiError> {
    debug!(%tab, "select_tab command");
    let opts = config.render_options();

    station.with_station_mut(|s| {
        let selected = s.tabs.select_id(tab)?;
        info!(tab = %selected, "Tab selected");
        Ok(render(&s.store, &s.tabs, &opts))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use station_core::view::ViewContent;
    use station_core::{RecordStore, Tab, TabController};

    #[test]
    fn test_select_tab() {
        let state = StationState::new(RecordStore::default(), TabController::new());
        let config = ConfigState::default();

        assert_eq!(get_view(&state, &config).tab, Tab::Transactions);

        let view = select_tab(&state, &config, "sales").unwrap();
        assert_eq!(view.tab, Tab::Sales);
        assert!(matches!(view.content, ViewContent::Sales { .. }));
        assert_eq!(get_view(&state, &config).tab, Tab::Sales);
    }

    #[test]
    fn test_select_unknown_tab() {
        let state = StationState::new(
            RecordStore::default(),
            TabController::starting_at(Tab::Customers),
        );
        let config = ConfigState::default();

        let err = select_tab(&state, &config, "settings").unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(get_view(&state, &config).tab, Tab::Customers);
    }
}
