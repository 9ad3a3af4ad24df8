//! # Data Source
//!
//! Supplies the collections the record store starts with.
//!
//! The dashboard has no backend yet, so [`MockDataSource`] fabricates a
//! believable day at the station: five regular customers, ten recent
//! deliveries (some already out) and a sales snapshot. Values are derived
//! arithmetically from a seed, so the same seed and anchor always give the
//! same data.

use chrono::{DateTime, Duration, Utc};

use crate::error::CoreResult;
use crate::money::Money;
use crate::types::{new_record_id, Customer, SalesSnapshot, Transaction};

/// Everything the store needs at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitialData {
    pub transactions: Vec<Transaction>,
    pub customers: Vec<Customer>,
    pub sales: SalesSnapshot,
}

/// Where initial data comes from.
pub trait DataSource {
    fn load(&self) -> CoreResult<InitialData>;
}

/// Regular customers: (name, address, orders this month, remarks).
const REGULARS: &[(&str, &str, u32, &str)] = &[
    ("Jane Doe", "Blk 6 Lot 9 Phase 2", 12, "Bulk Order"),
    ("James Villarosa", "Blk 1 Lot 4 Phase 3", 5, "Once every week delivery"),
    ("Manang Inday", "Blk 19 Lot 3 Phase 1", 20, "Morning Deliver"),
    ("Roger Cruz", "Blk 1 Lot 4 Bato Street", 8, "Pays cash"),
    ("Mark Reyes", "Blk 1 Lot 4 Purok 1", 15, "Pays Gcash"),
];

/// Number of deliveries generated.
pub const MOCK_TRANSACTION_COUNT: usize = 10;

const MINUTES_PER_DAY: u64 = 24 * 60;

/// Deterministic stand-in for the real data backend.
#[derive(Debug, Clone)]
pub struct MockDataSource {
    anchor: DateTime<Utc>,
    seed: u64,
}

impl MockDataSource {
    /// Creates a source whose deliveries fall in the 24 hours before `anchor`.
    pub fn new(anchor: DateTime<Utc>, seed: u64) -> Self {
        MockDataSource { anchor, seed }
    }

    fn transaction(&self, index: usize) -> Transaction {
        let n = self.seed.wrapping_add(index as u64);
        let (name, ..) = REGULARS[(n as usize) % REGULARS.len()];

        let minutes_ago = n.wrapping_mul(7919) % MINUTES_PER_DAY;
        let time_in = self.anchor - Duration::minutes(minutes_ago as i64);

        // Roughly half the deliveries are already out.
        let time_out = if n % 2 == 0 {
            let wait = n.wrapping_mul(37) % (12 * 60);
            Some((time_in + Duration::minutes(wait as i64)).min(self.anchor))
        } else {
            None
        };

        Transaction {
            id: new_record_id(),
            customer_name: name.to_string(),
            gallons_ordered: (n.wrapping_mul(3) % 5) as u32 + 1,
            time_in,
            time_out,
        }
    }

    fn customers(&self) -> Vec<Customer> {
        REGULARS
            .iter()
            .map(|&(name, address, orders, remarks)| Customer {
                id: new_record_id(),
                name: name.to_string(),
                address: address.to_string(),
                orders_this_month: orders,
                remarks: remarks.to_string(),
            })
            .collect()
    }

    /// Daily sales for `days_back` days before the anchor: ₱1,000 - ₱2,999.
    fn daily_sales(&self, days_back: u64) -> Money {
        let n = self.seed.wrapping_add(days_back);
        Money::from_pesos(1000 + (n.wrapping_mul(131) % 2000) as i64)
    }

    fn sales(&self) -> SalesSnapshot {
        let month_extra = (self.seed.wrapping_mul(977) % 20_000) as i64;
        let week: Money = (0..7).map(|d| self.daily_sales(d)).sum();

        SalesSnapshot {
            day: self.daily_sales(0),
            week,
            month: week + Money::from_pesos(33_000 + month_extra),
        }
    }
}

impl DataSource for MockDataSource {
    fn load(&self) -> CoreResult<InitialData> {
        Ok(InitialData {
            transactions: (0..MOCK_TRANSACTION_COUNT)
                .map(|i| self.transaction(i))
                .collect(),
            customers: self.customers(),
            sales: self.sales(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn anchor() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap()
    }

    #[test]
    fn test_mock_shapes() {
        let data = MockDataSource::new(anchor(), 7).load().unwrap();

        assert_eq!(data.transactions.len(), MOCK_TRANSACTION_COUNT);
        assert_eq!(data.customers.len(), 5);
        assert_eq!(data.customers[3].name, "Roger Cruz");
    }

    #[test]
    fn test_mock_transactions_are_well_formed() {
        let data = MockDataSource::new(anchor(), 42).load().unwrap();

        for t in &data.transactions {
            assert!((1..=5).contains(&t.gallons_ordered));
            assert!(t.time_in <= anchor());
            assert!(t.time_in > anchor() - Duration::days(1));
            assert!(t.is_chronological());
            if let Some(out) = t.time_out {
                assert!(out <= anchor());
            }
        }
        assert!(data.transactions.iter().any(|t| t.is_fulfilled()));
        assert!(data.transactions.iter().any(|t| !t.is_fulfilled()));
    }

    #[test]
    fn test_mock_is_deterministic_except_ids() {
        let a = MockDataSource::new(anchor(), 3).load().unwrap();
        let b = MockDataSource::new(anchor(), 3).load().unwrap();

        assert_eq!(a.sales, b.sales);
        for (x, y) in a.transactions.iter().zip(&b.transactions) {
            assert_eq!(x.customer_name, y.customer_name);
            assert_eq!(x.time_in, y.time_in);
            assert_eq!(x.time_out, y.time_out);
            assert_ne!(x.id, y.id);
        }
    }

    #[test]
    fn test_mock_sales_ranges() {
        for seed in 0..20 {
            let sales = MockDataSource::new(anchor(), seed).load().unwrap().sales;

            assert!(sales.day >= Money::from_pesos(1000) && sales.day < Money::from_pesos(3000));
            assert!(sales.week >= Money::from_pesos(7000));
            assert!(sales.month > sales.week);
        }
    }
}
