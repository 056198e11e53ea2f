//! # Fleet Report
//!
//! Prints the dashboard and the analytics report for a fleet.
//!
//! ## Usage
//! ```bash
//! # Demo fleet, JSON output
//! cargo run -p fleet-store --bin fleet-report
//!
//! # Analytics as CSV (needs a role with the export permission)
//! FLEET_ROLE=manager cargo run -p fleet-store --bin fleet-report -- --csv
//!
//! # Custom config file
//! cargo run -p fleet-store --bin fleet-report -- --config ./fleet.toml
//! ```

use std::env;
use std::path::PathBuf;

use fleet_core::metrics::fleet_kpis;
use fleet_store::commands::analytics::{export_analytics, get_analytics};
use fleet_store::commands::dashboard::get_dashboard;
use fleet_store::{init_tracing, seed, FleetConfig, FleetStore};
use tracing::{info, warn};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut config_path: Option<PathBuf> = None;
    let mut empty = false;
    let mut csv = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--empty" => empty = true,
            "--csv" => csv = true,
            "--help" | "-h" => {
                println!("Fleet Ops Report");
                println!();
                println!("Usage: fleet-report [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --config <PATH>  Config file (default: ./fleet.toml)");
                println!("      --empty          Start from an empty fleet");
                println!("      --csv            Print analytics as CSV instead of JSON");
                println!("  -h, --help           Show this help message");
                return Ok(());
            }
            other => eprintln!("Ignoring unknown argument: {}", other),
        }
        i += 1;
    }

    // Loaded before the subscriber exists, so failures are logged below.
    let loaded = FleetConfig::load(config_path);
    let config = loaded.as_ref().cloned().unwrap_or_default();
    init_tracing(&config.log_filter);
    if let Err(e) = &loaded {
        warn!("Failed to load fleet config: {}. Using defaults.", e);
    }

    let initial = if empty || !config.seed_demo_data {
        fleet_core::FleetState::new()
    } else {
        seed::demo_state()
    };
    let store = FleetStore::new(initial);
    let role = config.default_role;
    info!(%role, currency = %config.currency_code, "Report starting");

    if csv {
        let table = export_analytics(&store, &role)?;
        println!("{}", table.to_csv());
        return Ok(());
    }

    let kpis = store.with_state(fleet_kpis);
    let analytics = get_analytics(&store);

    println!("Fleet Ops Report");
    println!("================");
    println!("Vehicles:    {} in service, {} available", kpis.total, kpis.available);
    println!("Utilization: {}%", kpis.utilization);
    println!("Revenue:     {}", config.format_currency(analytics.summary.total_revenue));
    println!("Cost:        {}", config.format_currency(analytics.summary.total_cost));
    println!("ROI:         {:.1}%", analytics.summary.overall_roi);
    println!();

    println!("{}", serde_json::to_string_pretty(&get_dashboard(&store))?);
    println!("{}", serde_json::to_string_pretty(&analytics)?);

    Ok(())
}
