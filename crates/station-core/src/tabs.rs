//! # Tab Controller
//!
//! Which of the three dashboard views is showing.
//!
//! ```text
//!   ┌──────────────┐  select   ┌──────────────┐  select   ┌──────────────┐
//!   │ Transactions │ ◄───────► │  Customers   │ ◄───────► │    Sales     │
//!   └──────────────┘           └──────────────┘           └──────────────┘
//!         ▲ initial
//! ```
//!
//! Selection is plain state: it gates what the renderer shows and never
//! touches records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;

/// The closed set of dashboard views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    /// In/out delivery transactions.
    #[default]
    #[serde(alias = "inout")]
    Transactions,
    Customers,
    Sales,
}

impl Tab {
    /// All tabs in display order.
    pub const ALL: [Tab; 3] = [Tab::Transactions, Tab::Customers, Tab::Sales];

    /// Identifier used on the wire.
    pub const fn id(&self) -> &'static str {
        match self {
            Tab::Transactions => "transactions",
            Tab::Customers => "customers",
            Tab::Sales => "sales",
        }
    }

    /// Short label for the tab strip.
    pub const fn label(&self) -> &'static str {
        match self {
            Tab::Transactions => "In/Out",
            Tab::Customers => "Customers",
            Tab::Sales => "Sales",
        }
    }

    /// Heading shown above the tab's content.
    pub const fn title(&self) -> &'static str {
        match self {
            Tab::Transactions => "In/Out Transactions",
            Tab::Customers => "Customer Details",
            Tab::Sales => "Sales Overview",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Tab {
    type Err = ValidationError;

    /// Parses a tab identifier. `"inout"` is accepted for the transactions tab.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "transactions" | "inout" => Ok(Tab::Transactions),
            "customers" => Ok(Tab::Customers),
            "sales" => Ok(Tab::Sales),
            _ => Err(ValidationError::NotAllowed {
                field: "tab".to_string(),
                allowed: Tab::ALL.iter().map(|t| t.id().to_string()).collect(),
            }),
        }
    }
}

/// Holds the active tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabController {
    active: Tab,
}

impl TabController {
    /// Starts on the transactions tab.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts on a specific tab.
    pub fn starting_at(tab: Tab) -> Self {
        TabController { active: tab }
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    pub fn select(&mut self, tab: Tab) {
        self.active = tab;
    }

    /// Parses and selects. An unknown id leaves the selection unchanged.
    pub fn select_id(&mut self, id: &str) -> Result<Tab, ValidationError> {
        let tab = id.parse::<Tab>()?;
        self.select(tab);
        Ok(tab)
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        self.active == tab
    }
}
