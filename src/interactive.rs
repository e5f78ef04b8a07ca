//! Interactive menu shell.
//!
//! Thin wrapper over the engine: prompts on stdin, prints results, and keeps
//! the session alive through bad input. Unknown scenarios and malformed
//! numbers are reported and the menu loops; only "exit" ends the session.

use crate::config::Config;
use crate::engine;
use crate::pricing::PriceTable;
use crate::report;
use anyhow::Result;
use console::style;
use std::io::{self, BufRead, Write};

pub fn run(prices: &PriceTable, config: &Config) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!();
        println!("{}", style("GCP Cost Estimator").bold().cyan());
        println!("  1) Estimate a single scenario");
        println!("  2) Compare all scenarios");
        println!("  3) Write full report");
        println!("  4) Custom serverless calculation");
        println!("  5) Exit");
        print!("Choice: ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        match line?.trim() {
            "1" => {
                print!("Scenario name (demo/staging/production/enterprise): ");
                io::stdout().flush()?;
                let Some(name) = lines.next() else { break };
                let name = name?.trim().to_lowercase();
                match engine::aggregate_scenario(prices, &name) {
                    Ok(result) => {
                        report::print_scenario(&result, &config.display.currency_symbol)
                    }
                    Err(e) => println!("{} {}", style("Error:").red(), e),
                }
            }
            "2" => {
                let names = report::all_scenario_names();
                match engine::compare_scenarios(prices, &names) {
                    Ok(results) => {
                        report::print_comparison(&results, &config.display.currency_symbol)
                    }
                    Err(e) => println!("{} {}", style("Error:").red(), e),
                }
            }
            "3" => match report::write_report(prices, config) {
                Ok(path) => println!("Report written to: {}", path.display()),
                Err(e) => println!("{} {}", style("Error:").red(), e),
            },
            "4" => {
                if let Err(e) = custom_calculation(prices, config, &mut lines) {
                    println!("{} {}", style("Error:").red(), e);
                }
            }
            "5" | "exit" | "q" => break,
            other => println!("Unknown choice: '{}'", other),
        }
    }

    Ok(())
}

fn custom_calculation(
    prices: &PriceTable,
    config: &Config,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<()> {
    let requests: u64 = prompt_number(lines, "Requests per month")?;
    let cpu_ms: u64 = prompt_number(lines, "Avg CPU time (ms)")?;
    let memory_mb: u64 = prompt_number(lines, "Avg memory (MB)")?;
    let min_instances: u32 = prompt_number(lines, "Min instances")?;

    let cost = engine::serverless_cost(prices, requests, cpu_ms, memory_mb, min_instances)?;
    println!(
        "Estimated serverless cost: {}{:.2}/month ({}{:.2}/year)",
        config.display.currency_symbol,
        cost,
        config.display.currency_symbol,
        cost * 12.0
    );
    Ok(())
}

fn prompt_number<T: std::str::FromStr>(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
) -> Result<T> {
    loop {
        print!("{}: ", label);
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            anyhow::bail!("input closed");
        };
        match parse_number(&line?) {
            Some(n) => return Ok(n),
            None => println!("please enter a valid number"),
        }
    }
}

fn parse_number<T: std::str::FromStr>(input: &str) -> Option<T> {
    input.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number::<u64>("42"), Some(42));
        assert_eq!(parse_number::<u64>("  1000 "), Some(1000));
        assert_eq!(parse_number::<u64>("abc"), None);
        assert_eq!(parse_number::<u64>("-5"), None);
        assert_eq!(parse_number::<u64>("3.5"), None);
        assert_eq!(parse_number::<u64>(""), None);
    }

    #[test]
    fn test_parse_number_rejects_out_of_range() {
        // Larger than u32::MAX must not wrap into a small instance count
        assert_eq!(parse_number::<u32>("4294967296"), None);
        assert_eq!(parse_number::<u32>("4294967295"), Some(u32::MAX));
    }

    #[test]
    fn test_prompt_number_retries_until_valid() {
        let inputs = vec!["not-a-number".to_string(), "7".to_string()];
        let mut lines = inputs.into_iter().map(io::Result::Ok);
        let n: u64 = prompt_number(&mut lines, "test").unwrap();
        assert_eq!(n, 7);
    }

    #[test]
    fn test_prompt_number_retries_on_overflow() {
        let inputs = vec!["4294967296".to_string(), "2".to_string()];
        let mut lines = inputs.into_iter().map(io::Result::Ok);
        let n: u32 = prompt_number(&mut lines, "test").unwrap();
        assert_eq!(n, 2);
    }

    #[test]
    fn test_custom_calculation_zero_requests() {
        let prices = PriceTable::new();
        let config = Config::default();
        let mut lines = vec!["0", "500", "1024", "0"]
            .into_iter()
            .map(|s| io::Result::Ok(s.to_string()));
        assert!(custom_calculation(&prices, &config, &mut lines).is_ok());
    }
}
