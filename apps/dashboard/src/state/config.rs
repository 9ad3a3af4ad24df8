//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STATION_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use station_core::money::DEFAULT_CURRENCY_SYMBOL;
use station_core::view::RenderOptions;
use station_core::Tab;
use tracing::warn;

/// Largest real-world UTC offset, in minutes (UTC+14).
const MAX_OFFSET_MINUTES: i32 = 14 * 60;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Station name (dashboard heading)
    pub station_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Offset applied when showing times, in minutes east of UTC
    pub utc_offset_minutes: i32,

    /// Tab shown when the dashboard opens
    pub initial_tab: Tab,

    /// Seed for the mock data source
    pub mock_seed: u64,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Station: "Golden Valley Water Station"
    /// - Currency: ₱
    /// - Times shown in UTC+8
    /// - Opens on the transactions tab
    fn default() -> Self {
        ConfigState {
            station_name: "Golden Valley Water Station".to_string(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            utc_offset_minutes: 8 * 60,
            initial_tab: Tab::Transactions,
            mock_seed: 1,
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `STATION_NAME`: Override station name
    /// - `STATION_CURRENCY_SYMBOL`: Override currency symbol
    /// - `STATION_UTC_OFFSET`: Display offset in minutes (e.g., "480")
    /// - `STATION_INITIAL_TAB`: `transactions`, `customers` or `sales`
    /// - `STATION_MOCK_SEED`: Seed for generated data
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Bad values keep the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(name) = lookup("STATION_NAME") {
            config.station_name = name;
        }

        if let Some(symbol) = lookup("STATION_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(raw) = lookup("STATION_UTC_OFFSET") {
            match raw.trim().parse::<i32>() {
                Ok(minutes) if (-MAX_OFFSET_MINUTES..=MAX_OFFSET_MINUTES).contains(&minutes) => {
                    config.utc_offset_minutes = minutes;
                }
                _ => warn!(value = %raw, "Ignoring invalid STATION_UTC_OFFSET"),
            }
        }

        if let Some(raw) = lookup("STATION_INITIAL_TAB") {
            match raw.parse::<Tab>() {
                Ok(tab) => config.initial_tab = tab,
                Err(e) => warn!(value = %raw, error = %e, "Ignoring invalid STATION_INITIAL_TAB"),
            }
        }

        if let Some(raw) = lookup("STATION_MOCK_SEED") {
            match raw.trim().parse::<u64>() {
                Ok(seed) => config.mock_seed = seed,
                Err(_) => warn!(value = %raw, "Ignoring invalid STATION_MOCK_SEED"),
            }
        }

        config
    }

    /// Display offset as a chrono offset. Out-of-range values show UTC.
    pub fn utc_offset(&self) -> FixedOffset {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| RenderOptions::default().utc_offset)
    }

    /// Options handed to the view renderer.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            utc_offset: self.utc_offset(),
            currency_symbol: self.currency_symbol.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> ConfigState {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ConfigState::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config, ConfigState::default());
        assert_eq!(config.currency_symbol, "₱");
        assert_eq!(config.utc_offset().local_minus_utc(), 8 * 3600);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("STATION_NAME", "Blue Spring Refilling"),
            ("STATION_CURRENCY_SYMBOL", "$"),
            ("STATION_UTC_OFFSET", "-300"),
            ("STATION_INITIAL_TAB", "sales"),
            ("STATION_MOCK_SEED", "99"),
        ]);

        assert_eq!(config.station_name, "Blue Spring Refilling");
        assert_eq!(config.render_options().currency_symbol, "$");
        assert_eq!(config.utc_offset().local_minus_utc(), -300 * 60);
        assert_eq!(config.initial_tab, Tab::Sales);
        assert_eq!(config.mock_seed, 99);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config_from(&[
            ("STATION_UTC_OFFSET", "9999"),
            ("STATION_INITIAL_TAB", "reports"),
            ("STATION_MOCK_SEED", "-1"),
        ]);

        let defaults = ConfigState::default();
        assert_eq!(config.utc_offset_minutes, defaults.utc_offset_minutes);
        assert_eq!(config.initial_tab, defaults.initial_tab);
        assert_eq!(config.mock_seed, defaults.mock_seed);
    }

    #[test]
    fn test_extreme_offsets_fall_back() {
        let defaults = ConfigState::default();

        for raw in ["-2147483648", "2147483647", "-841", "841"] {
            let config = config_from(&[("STATION_UTC_OFFSET", raw)]);
            assert_eq!(config.utc_offset_minutes, defaults.utc_offset_minutes, "{raw}");
        }

        let edge = config_from(&[("STATION_UTC_OFFSET", "-840")]);
        assert_eq!(edge.utc_offset().local_minus_utc(), -840 * 60);
    }

    #[test]
    fn test_out_of_range_field_shows_utc() {
        let config = ConfigState {
            utc_offset_minutes: i32::MIN,
            ..ConfigState::default()
        };
        assert_eq!(config.utc_offset().local_minus_utc(), 0);
    }
}
