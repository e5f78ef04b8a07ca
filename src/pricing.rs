//! Static pricing catalog.
//!
//! Current GCP list prices, hardcoded at construction. Monthly rates unless
//! the SKU name says otherwise (per-GB, per-million-requests, per-second).
//! Updating prices means building a new table, not mutating one live; the
//! table is passed by reference into the engine rather than read from any
//! global.

use crate::error::{CostError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Service categories the catalog is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategory {
    Compute,
    Database,
    Serverless,
    Storage,
    Network,
    Monitoring,
    Addons,
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ServiceCategory::Compute => "compute",
            ServiceCategory::Database => "database",
            ServiceCategory::Serverless => "serverless",
            ServiceCategory::Storage => "storage",
            ServiceCategory::Network => "network",
            ServiceCategory::Monitoring => "monitoring",
            ServiceCategory::Addons => "addons",
        };
        write!(f, "{}", name)
    }
}

/// Immutable (category, SKU) -> unit price mapping.
#[derive(Debug, Clone)]
pub struct PriceTable {
    prices: HashMap<(ServiceCategory, &'static str), f64>,
}

impl PriceTable {
    /// Build the catalog of current list prices.
    pub fn new() -> Self {
        use ServiceCategory::*;

        let mut prices = HashMap::new();
        let mut add = |category: ServiceCategory, sku: &'static str, price: f64| {
            prices.insert((category, sku), price);
        };

        // GKE node pools (e2 family), per node-month
        add(Compute, "small", 24.27);
        add(Compute, "medium", 48.55);
        add(Compute, "standard-2", 97.11);
        add(Compute, "standard-4", 194.22);

        // Cloud SQL instances, per instance-month (compute only)
        add(Database, "micro", 15.00);
        add(Database, "small", 50.00);
        add(Database, "standard-1", 95.00);
        add(Database, "standard-2", 190.00);
        add(Database, "standard-4", 380.00);

        // Block storage, per GB-month
        add(Storage, "sql-ssd", 0.17);
        add(Storage, "persistent-ssd", 0.17);
        add(Storage, "persistent-standard", 0.04);

        // Cloud Run
        add(Serverless, "requests-per-million", 0.40);
        add(Serverless, "vcpu-second", 0.000024);
        add(Serverless, "gib-second", 0.0000025);
        add(Serverless, "always-on-instance", 8.76);

        // Networking
        add(Network, "egress-per-gb", 0.12);
        add(Network, "load-balancer", 18.00);

        // Operations suite: monitoring tiers flat per month, logging per GB,
        // secret manager per 10K operations
        add(Monitoring, "basic", 5.00);
        add(Monitoring, "premium", 25.00);
        add(Monitoring, "logging", 0.50);
        add(Monitoring, "secret-manager", 0.06);

        // Enterprise-only flat surcharges (Cloud Armor/VPC, premium support)
        add(Addons, "security-tooling", 100.00);
        add(Addons, "premium-support", 200.00);

        Self { prices }
    }

    /// Look up the unit price for a (category, sku) pair.
    ///
    /// Fails with `UnknownSku` when the pair is absent. Lookups never fall
    /// back to zero.
    pub fn price(&self, category: ServiceCategory, sku: &str) -> Result<f64> {
        self.prices
            .get(&(category, sku))
            .copied()
            .ok_or_else(|| CostError::UnknownSku {
                category,
                sku: sku.to_string(),
            })
    }

    /// Whether the catalog has a price for this pair.
    pub fn has_price(&self, category: ServiceCategory, sku: &str) -> bool {
        self.prices.contains_key(&(category, sku))
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_prices() {
        let table = PriceTable::new();
        assert_eq!(
            table.price(ServiceCategory::Compute, "small").unwrap(),
            24.27
        );
        assert_eq!(
            table.price(ServiceCategory::Database, "micro").unwrap(),
            15.00
        );
        assert_eq!(
            table.price(ServiceCategory::Storage, "sql-ssd").unwrap(),
            0.17
        );
        assert_eq!(
            table.price(ServiceCategory::Network, "load-balancer").unwrap(),
            18.00
        );
    }

    #[test]
    fn test_unknown_sku_fails_loudly() {
        let table = PriceTable::new();
        let err = table
            .price(ServiceCategory::Compute, "mega-ultra")
            .unwrap_err();
        match err {
            CostError::UnknownSku { category, sku } => {
                assert_eq!(category, ServiceCategory::Compute);
                assert_eq!(sku, "mega-ultra");
            }
            other => panic!("expected UnknownSku, got: {other}"),
        }
    }

    #[test]
    fn test_sku_is_scoped_to_category() {
        let table = PriceTable::new();
        // "micro" is a database SKU, not a compute one
        assert!(table.has_price(ServiceCategory::Database, "micro"));
        assert!(!table.has_price(ServiceCategory::Compute, "micro"));
    }
}
