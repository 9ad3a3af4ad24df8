//! # Customer Commands
//!
//! Commands for the Customers tab.

use station_core::validation::CustomerInput;
use station_core::view::{customer_rows, CustomerRow};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::StationState;

/// Current customer table.
pub fn list_customers(station: &StationState) -> Vec<CustomerRow> {
    debug!("list_customers command");
    station.with_station(|s| customer_rows(&s.store))
}

/// Validates the form and appends a new customer.
///
/// ## Returns
/// The updated customer table, newest row last.
pub fn add_customer(
    station: &StationState,
    input: CustomerInput,
) -> Result<Vec<CustomerRow>, ApiError> {
    debug!(?input, "add_customer command");

    station.with_station_mut(|s| {
        s.customer_form.fill(input);
        let customer = s.customer_form.submit().map_err(|rejection| {
            debug!(field = ?rejection.field, %rejection, "Customer rejected");
            ApiError::from(rejection)
        })?;

        let id = s.store.append(customer);
        info!(%id, "Customer added");
        Ok(customer_rows(&s.store))
    })
}
