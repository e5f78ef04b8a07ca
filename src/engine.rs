//! Cost estimation engine.
//!
//! Pure functions from usage parameters and the static price table to
//! monthly dollar amounts. No I/O here; rendering and persistence live in
//! `report` and `interactive`. Every lookup failure aborts the whole
//! computation for that scenario, so callers never see a partial breakdown.

use crate::error::Result;
use crate::pricing::{PriceTable, ServiceCategory};
use crate::scenario::{Scenario, UsageProfile};
use serde::Serialize;

/// Discount multiplier for preemptible node pools (fixed 80% off list).
const PREEMPTIBLE_MULTIPLIER: f64 = 0.2;

/// Backups are priced at 8% of the primary SQL SSD rate.
const BACKUP_RATE_FRACTION: f64 = 0.08;

/// One named line in a cost breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct LineItem {
    pub label: String,
    pub monthly_cost: f64,
}

/// Ordered per-component costs; insertion order is computation order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CostBreakdown {
    items: Vec<LineItem>,
}

impl CostBreakdown {
    pub fn push(&mut self, label: impl Into<String>, monthly_cost: f64) {
        self.items.push(LineItem {
            label: label.into(),
            monthly_cost,
        });
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Exact sum of all line items; there are no hidden adjustments.
    pub fn monthly_total(&self) -> f64 {
        self.items.iter().map(|item| item.monthly_cost).sum()
    }
}

/// Fully computed estimate for one scenario. Ephemeral; recomputed on each
/// request, never cached.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResult {
    pub name: String,
    pub description: String,
    pub usage: UsageProfile,
    pub breakdown: CostBreakdown,
    pub monthly_cost: f64,
    pub annual_cost: f64,
}

/// Monthly cost of a GKE node pool.
pub fn compute_node_cost(
    prices: &PriceTable,
    machine_type: &str,
    node_count: u32,
    preemptible: bool,
) -> Result<f64> {
    let per_node = prices.price(ServiceCategory::Compute, machine_type)?;
    let mut cost = per_node * node_count as f64;
    if preemptible {
        cost *= PREEMPTIBLE_MULTIPLIER;
    }
    Ok(cost)
}

/// Monthly cost of a managed Cloud SQL instance: compute base (doubled for
/// HA), primary SSD storage, and backups at 8% of the primary rate.
pub fn managed_db_cost(
    prices: &PriceTable,
    machine_type: &str,
    storage_gb: u64,
    high_availability: bool,
    backup_gb: u64,
) -> Result<f64> {
    let mut base = prices.price(ServiceCategory::Database, machine_type)?;
    if high_availability {
        base *= 2.0;
    }
    let ssd_rate = prices.price(ServiceCategory::Storage, "sql-ssd")?;
    let storage = storage_gb as f64 * ssd_rate;
    let backup = backup_gb as f64 * ssd_rate * BACKUP_RATE_FRACTION;
    Ok(base + storage + backup)
}

/// Monthly Cloud Run cost: requests, CPU time, memory time, plus flat-rate
/// always-on reserved instances. Assumes exactly 1 vCPU per invocation.
/// With zero requests every usage-scaled term vanishes and only the
/// reservation remains.
pub fn serverless_cost(
    prices: &PriceTable,
    requests_per_month: u64,
    avg_cpu_time_ms: u64,
    avg_memory_mb: u64,
    min_instances: u32,
) -> Result<f64> {
    let per_million = prices.price(ServiceCategory::Serverless, "requests-per-million")?;
    let per_vcpu_second = prices.price(ServiceCategory::Serverless, "vcpu-second")?;
    let per_gib_second = prices.price(ServiceCategory::Serverless, "gib-second")?;
    let per_instance = prices.price(ServiceCategory::Serverless, "always-on-instance")?;

    let requests = requests_per_month as f64;
    let cpu_seconds = requests * avg_cpu_time_ms as f64 / 1000.0;
    let gib_seconds = cpu_seconds * avg_memory_mb as f64 / 1024.0;

    let request_cost = requests / 1_000_000.0 * per_million;
    let cpu_cost = cpu_seconds * per_vcpu_second;
    let memory_cost = gib_seconds * per_gib_second;
    let reserved_cost = min_instances as f64 * per_instance;

    Ok(request_cost + cpu_cost + memory_cost + reserved_cost)
}

/// Compute the full estimate for one named scenario.
///
/// Line items are pushed in a fixed order: nodes, database, serverless web,
/// serverless worker, storage, load balancer, egress, monitoring, and (for
/// enterprise only) the two flat surcharges. The worker path models
/// asynchronous background processing as one-tenth the request volume at
/// double CPU time and double memory.
pub fn aggregate_scenario(prices: &PriceTable, name: &str) -> Result<ScenarioResult> {
    let scenario = Scenario::from_name(name)?;
    let usage = scenario.usage();
    let selection = scenario.selection();

    let mut breakdown = CostBreakdown::default();

    breakdown.push(
        format!(
            "GKE nodes ({} x{})",
            selection.compute_machine_type, selection.node_count
        ),
        compute_node_cost(
            prices,
            selection.compute_machine_type,
            selection.node_count,
            selection.preemptible,
        )?,
    );

    breakdown.push(
        format!("Cloud SQL ({})", selection.db_machine_type),
        managed_db_cost(
            prices,
            selection.db_machine_type,
            selection.db_storage_gb,
            selection.db_high_availability,
            selection.db_backup_gb,
        )?,
    );

    breakdown.push(
        "Cloud Run (web)",
        serverless_cost(
            prices,
            usage.requests_per_month,
            usage.avg_cpu_time_ms,
            usage.avg_memory_mb,
            selection.web_min_instances,
        )?,
    );

    breakdown.push(
        "Cloud Run (worker)",
        serverless_cost(
            prices,
            usage.requests_per_month / 10,
            usage.avg_cpu_time_ms * 2,
            usage.avg_memory_mb * 2,
            selection.worker_min_instances,
        )?,
    );

    let ssd_rate = prices.price(ServiceCategory::Storage, "persistent-ssd")?;
    breakdown.push(
        format!("Persistent SSD ({} GB)", usage.storage_gb),
        usage.storage_gb as f64 * ssd_rate,
    );

    breakdown.push(
        "Load balancer",
        prices.price(ServiceCategory::Network, "load-balancer")?,
    );

    let egress_rate = prices.price(ServiceCategory::Network, "egress-per-gb")?;
    breakdown.push(
        format!("Network egress ({} GB)", usage.egress_gb),
        usage.egress_gb as f64 * egress_rate,
    );

    breakdown.push(
        format!("Monitoring ({})", selection.monitoring.sku()),
        prices.price(ServiceCategory::Monitoring, selection.monitoring.sku())?,
    );

    if scenario == Scenario::Enterprise {
        breakdown.push(
            "Security tooling",
            prices.price(ServiceCategory::Addons, "security-tooling")?,
        );
        breakdown.push(
            "Premium support",
            prices.price(ServiceCategory::Addons, "premium-support")?,
        );
    }

    let monthly_cost = breakdown.monthly_total();
    Ok(ScenarioResult {
        name: scenario.name().to_string(),
        description: scenario.description().to_string(),
        usage,
        breakdown,
        monthly_cost,
        annual_cost: monthly_cost * 12.0,
    })
}

/// Estimate each named scenario independently, preserving input order.
pub fn compare_scenarios(
    prices: &PriceTable,
    names: &[&str],
) -> Result<Vec<(String, ScenarioResult)>> {
    names
        .iter()
        .map(|name| Ok((name.to_string(), aggregate_scenario(prices, name)?)))
        .collect()
}
