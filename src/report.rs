//! Report rendering.
//!
//! Console output uses comfy-table; the full report is a plain-text document
//! written to a timestamped file (`gcp-cost-report-<YYYYMMDD-HHMMSS>.txt`).
//! The engine never writes anything itself; all I/O lives here.

use crate::config::Config;
use crate::engine::{self, ScenarioResult};
use crate::error::Result;
use crate::pricing::PriceTable;
use crate::scenario::Scenario;
use chrono::Local;
use comfy_table::{Cell, Table};
use console::style;
use std::fmt::Write as _;
use std::path::PathBuf;

/// Print one scenario's breakdown to the console.
pub fn print_scenario(result: &ScenarioResult, currency: &str) {
    println!();
    println!(
        "{} {}",
        style(format!("Scenario: {}", result.name)).bold().cyan(),
        style(format!("({})", result.description)).dim()
    );

    let mut table = Table::new();
    table.set_header(vec!["Component", "Monthly", "% of total"]);
    for item in result.breakdown.items() {
        let percent = if result.monthly_cost > 0.0 {
            item.monthly_cost / result.monthly_cost * 100.0
        } else {
            0.0
        };
        table.add_row(vec![
            Cell::new(&item.label),
            Cell::new(format!("{}{:.2}", currency, item.monthly_cost)),
            Cell::new(format!("{:.1}%", percent)),
        ]);
    }
    println!("{table}");

    println!(
        "  {} {}{:.2}   {} {}{:.2}",
        style("Monthly:").bold(),
        currency,
        result.monthly_cost,
        style("Annual:").bold(),
        currency,
        result.annual_cost
    );
}

/// Print a side-by-side comparison table for several scenarios.
pub fn print_comparison(results: &[(String, ScenarioResult)], currency: &str) {
    let mut table = Table::new();
    table.set_header(vec!["Scenario", "Monthly", "Annual", "Requests/mo"]);
    for (name, result) in results {
        table.add_row(vec![
            Cell::new(name),
            Cell::new(format!("{}{:.2}", currency, result.monthly_cost)),
            Cell::new(format!("{}{:.2}", currency, result.annual_cost)),
            Cell::new(format!("{}", result.usage.requests_per_month)),
        ]);
    }
    println!("{table}");
}

/// Build the full multi-section report document.
pub fn render_report(prices: &PriceTable, config: &Config) -> Result<String> {
    let names: Vec<&str> = config.report.scenarios.iter().map(String::as_str).collect();
    let results = engine::compare_scenarios(prices, &names)?;
    let currency = &config.display.currency_symbol;

    let mut out = String::new();
    let now = Local::now();
    let _ = writeln!(out, "GCP COST ESTIMATION REPORT");
    let _ = writeln!(out, "Generated: {}", now.format("%Y-%m-%d %H:%M:%S"));
    let _ = writeln!(out, "{}", "=".repeat(70));

    // Summary
    let _ = writeln!(out, "\nSUMMARY");
    let _ = writeln!(out, "{}", "-".repeat(70));
    let _ = writeln!(
        out,
        "{:<14} {:>16} {:>16}",
        "Scenario", "Monthly", "Annual"
    );
    for (name, result) in &results {
        let monthly = format!("{}{:.2}", currency, result.monthly_cost);
        let annual = format!("{}{:.2}", currency, result.annual_cost);
        let _ = writeln!(out, "{:<14} {:>16} {:>16}", name, monthly, annual);
    }

    // Per-scenario breakdowns
    for (name, result) in &results {
        let _ = writeln!(out, "\n{}", "=".repeat(70));
        let _ = writeln!(out, "SCENARIO: {} - {}", name, result.description);
        let _ = writeln!(out, "{}", "-".repeat(70));
        for item in result.breakdown.items() {
            let percent = if result.monthly_cost > 0.0 {
                item.monthly_cost / result.monthly_cost * 100.0
            } else {
                0.0
            };
            let amount = format!("{}{:.2}", currency, item.monthly_cost);
            let _ = writeln!(
                out,
                "  {:<34} {:>14}  {:>5.1}%",
                item.label, amount, percent
            );
        }
        let monthly = format!("{}{:.2}", currency, result.monthly_cost);
        let annual = format!("{}{:.2}", currency, result.annual_cost);
        let _ = writeln!(out, "  {:<34} {:>14}", "MONTHLY TOTAL", monthly);
        let _ = writeln!(out, "  {:<34} {:>14}", "ANNUAL TOTAL", annual);

        let usage = &result.usage;
        let _ = writeln!(out, "\n  Usage statistics:");
        let _ = writeln!(out, "    Requests/month: {}", usage.requests_per_month);
        let _ = writeln!(out, "    Avg CPU time:   {} ms", usage.avg_cpu_time_ms);
        let _ = writeln!(out, "    Avg memory:     {} MB", usage.avg_memory_mb);
        let _ = writeln!(out, "    Storage:        {} GB", usage.storage_gb);
        let _ = writeln!(out, "    Egress:         {} GB", usage.egress_gb);
    }

    // Recommendations are fixed guidance, not derived from the numbers.
    let _ = writeln!(out, "\n{}", "=".repeat(70));
    let _ = writeln!(out, "RECOMMENDATIONS");
    let _ = writeln!(out, "{}", "-".repeat(70));
    let _ = writeln!(
        out,
        "  - Preemptible nodes cut compute cost by 80% for interruptible workloads."
    );
    let _ = writeln!(
        out,
        "  - Committed-use discounts apply once a sizing is stable for 12+ months."
    );
    let _ = writeln!(
        out,
        "  - Keep min-instances at 0 outside production to avoid idle reservations."
    );
    let _ = writeln!(
        out,
        "  - Review egress volume before scaling: it grows faster than compute."
    );

    Ok(out)
}

/// Render the report and write it to a timestamped file in the configured
/// output directory. Returns the path written.
pub fn write_report(prices: &PriceTable, config: &Config) -> Result<PathBuf> {
    let content = render_report(prices, config)?;
    let filename = format!(
        "gcp-cost-report-{}.txt",
        Local::now().format("%Y%m%d-%H%M%S")
    );
    let path = config.report.output_dir.join(filename);
    tracing::debug!(path = %path.display(), bytes = content.len(), "writing report");
    std::fs::write(&path, content)?;
    Ok(path)
}

/// Serialize scenario results as JSON, honoring `--output json`.
pub fn to_json(results: &[(String, ScenarioResult)]) -> Result<String> {
    let map: serde_json::Map<String, serde_json::Value> = results
        .iter()
        .map(|(name, result)| Ok((name.clone(), serde_json::to_value(result)?)))
        .collect::<Result<_>>()?;
    Ok(serde_json::to_string_pretty(&serde_json::Value::Object(
        map,
    ))?)
}

/// Names of all four scenarios, in canonical size order.
pub fn all_scenario_names() -> Vec<&'static str> {
    Scenario::ALL.iter().map(|s| s.name()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_render_report_has_all_sections() {
        let prices = PriceTable::new();
        let config = Config::default();
        let report = render_report(&prices, &config).unwrap();

        assert!(report.contains("SUMMARY"));
        assert!(report.contains("RECOMMENDATIONS"));
        for name in ["demo", "staging", "production", "enterprise"] {
            assert!(report.contains(&format!("SCENARIO: {}", name)));
        }
        assert!(report.contains("Requests/month: 10000"));
    }

    #[test]
    fn test_render_report_unknown_scenario_fails() {
        let prices = PriceTable::new();
        let mut config = Config::default();
        config.report.scenarios = vec!["demo".to_string(), "colossal".to_string()];
        assert!(render_report(&prices, &config).is_err());
    }

    #[test]
    fn test_write_report_creates_timestamped_file() {
        let temp_dir = TempDir::new().unwrap();
        let prices = PriceTable::new();
        let mut config = Config::default();
        config.report.output_dir = temp_dir.path().to_path_buf();

        let path = write_report(&prices, &config).unwrap();
        assert!(path.exists());
        let name = path.file_name().unwrap().to_string_lossy();
        assert!(name.starts_with("gcp-cost-report-"));
        assert!(name.ends_with(".txt"));
    }

    #[test]
    fn test_to_json_round_trips_names() {
        let prices = PriceTable::new();
        let results = engine::compare_scenarios(&prices, &["demo", "production"]).unwrap();
        let json = to_json(&results).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value.get("demo").is_some());
        assert!(value.get("production").is_some());
        assert!(value.get("staging").is_none());
    }
}
