use crate::state::ConfigState;
use tracing::debug;

/// Returns the current configuration.
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}
