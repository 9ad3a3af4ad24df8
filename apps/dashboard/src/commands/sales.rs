//! # Sales Commands

use station_core::view::{sales_cards, SalesCard};
use tracing::debug;

use crate::state::{ConfigState, StationState};

/// Daily, weekly and monthly sales cards.
pub fn get_sales(station: &StationState, config: &ConfigState) -> Vec<SalesCard> {
    debug!("get_sales command");
    let opts = config.render_options();
    station.with_station(|s| sales_cards(s.store.sales(), &opts))
}
