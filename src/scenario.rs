//! Fixed deployment scenarios.
//!
//! Exactly four named sizings are recognized. Each carries its own usage
//! profile and component selection, frozen at compile time; the runtime
//! string name is mapped onto the variant at the boundary and anything else
//! is an `UnknownScenario` error.

use crate::error::{CostError, Result};
use serde::{Deserialize, Serialize};

/// The four recognized deployment sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    Demo,
    Staging,
    Production,
    Enterprise,
}

/// Monitoring tier selected per scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonitoringTier {
    Basic,
    Premium,
}

impl MonitoringTier {
    pub fn sku(&self) -> &'static str {
        match self {
            MonitoringTier::Basic => "basic",
            MonitoringTier::Premium => "premium",
        }
    }
}

/// Monthly usage parameters for one scenario.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UsageProfile {
    pub requests_per_month: u64,
    pub avg_cpu_time_ms: u64,
    pub avg_memory_mb: u64,
    pub storage_gb: u64,
    pub egress_gb: u64,
}

/// Chosen SKUs and multipliers for one scenario.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentSelection {
    pub compute_machine_type: &'static str,
    pub node_count: u32,
    pub preemptible: bool,
    pub db_machine_type: &'static str,
    pub db_storage_gb: u64,
    pub db_high_availability: bool,
    pub db_backup_gb: u64,
    pub monitoring: MonitoringTier,
    /// Always-warm reserved instances for the web serverless path.
    pub web_min_instances: u32,
    /// Always-warm reserved instances for the worker serverless path.
    pub worker_min_instances: u32,
}

impl Scenario {
    pub const ALL: [Scenario; 4] = [
        Scenario::Demo,
        Scenario::Staging,
        Scenario::Production,
        Scenario::Enterprise,
    ];

    /// Map a runtime name onto a scenario. Case-sensitive; lowercase names
    /// only, anything else is `UnknownScenario`.
    pub fn from_name(name: &str) -> Result<Scenario> {
        match name {
            "demo" => Ok(Scenario::Demo),
            "staging" => Ok(Scenario::Staging),
            "production" => Ok(Scenario::Production),
            "enterprise" => Ok(Scenario::Enterprise),
            other => Err(CostError::UnknownScenario(other.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Scenario::Demo => "demo",
            Scenario::Staging => "staging",
            Scenario::Production => "production",
            Scenario::Enterprise => "enterprise",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Scenario::Demo => "Minimal footprint for demos and proofs of concept",
            Scenario::Staging => "Pre-production environment for integration testing",
            Scenario::Production => "Highly available production deployment",
            Scenario::Enterprise => "Large-scale deployment with security tooling and support",
        }
    }

    pub fn usage(&self) -> UsageProfile {
        match self {
            Scenario::Demo => UsageProfile {
                requests_per_month: 10_000,
                avg_cpu_time_ms: 200,
                avg_memory_mb: 256,
                storage_gb: 50,
                egress_gb: 10,
            },
            Scenario::Staging => UsageProfile {
                requests_per_month: 50_000,
                avg_cpu_time_ms: 300,
                avg_memory_mb: 512,
                storage_gb: 100,
                egress_gb: 25,
            },
            Scenario::Production => UsageProfile {
                requests_per_month: 200_000,
                avg_cpu_time_ms: 500,
                avg_memory_mb: 1024,
                storage_gb: 200,
                egress_gb: 100,
            },
            Scenario::Enterprise => UsageProfile {
                requests_per_month: 1_000_000,
                avg_cpu_time_ms: 750,
                avg_memory_mb: 2048,
                storage_gb: 500,
                egress_gb: 500,
            },
        }
    }

    pub fn selection(&self) -> ComponentSelection {
        match self {
            Scenario::Demo => ComponentSelection {
                compute_machine_type: "small",
                node_count: 1,
                preemptible: true,
                db_machine_type: "micro",
                db_storage_gb: 20,
                db_high_availability: false,
                db_backup_gb: 5,
                monitoring: MonitoringTier::Basic,
                web_min_instances: 0,
                worker_min_instances: 0,
            },
            Scenario::Staging => ComponentSelection {
                compute_machine_type: "medium",
                node_count: 2,
                preemptible: false,
                db_machine_type: "standard-1",
                db_storage_gb: 50,
                db_high_availability: false,
                db_backup_gb: 15,
                monitoring: MonitoringTier::Basic,
                web_min_instances: 0,
                worker_min_instances: 0,
            },
            Scenario::Production => ComponentSelection {
                compute_machine_type: "standard-2",
                node_count: 3,
                preemptible: false,
                db_machine_type: "standard-2",
                db_storage_gb: 100,
                db_high_availability: true,
                db_backup_gb: 50,
                monitoring: MonitoringTier::Premium,
                web_min_instances: 1,
                worker_min_instances: 1,
            },
            Scenario::Enterprise => ComponentSelection {
                compute_machine_type: "standard-4",
                node_count: 6,
                preemptible: false,
                db_machine_type: "standard-4",
                db_storage_gb: 200,
                db_high_availability: true,
                db_backup_gb: 100,
                monitoring: MonitoringTier::Premium,
                web_min_instances: 0,
                worker_min_instances: 1,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_recognizes_all_four() {
        for scenario in Scenario::ALL {
            assert_eq!(Scenario::from_name(scenario.name()).unwrap(), scenario);
        }
    }

    #[test]
    fn test_from_name_is_case_sensitive() {
        assert!(Scenario::from_name("Demo").is_err());
        assert!(Scenario::from_name("PRODUCTION").is_err());
        assert!(Scenario::from_name("").is_err());
    }

    #[test]
    fn test_unknown_name_carries_input() {
        let err = Scenario::from_name("galactic").unwrap_err();
        assert!(err.to_string().contains("galactic"));
    }

    #[test]
    fn test_always_warm_policy() {
        // Only production keeps the web path warm; production and
        // enterprise keep the worker path warm.
        assert_eq!(Scenario::Demo.selection().web_min_instances, 0);
        assert_eq!(Scenario::Staging.selection().worker_min_instances, 0);
        assert_eq!(Scenario::Production.selection().web_min_instances, 1);
        assert_eq!(Scenario::Production.selection().worker_min_instances, 1);
        assert_eq!(Scenario::Enterprise.selection().web_min_instances, 0);
        assert_eq!(Scenario::Enterprise.selection().worker_min_instances, 1);
    }
}
