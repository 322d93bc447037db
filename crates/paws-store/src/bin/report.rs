//! # Shop Report
//!
//! Command-line smoke tool: seeds the default pet-supply catalog, runs a few
//! sample transactions, and prints the two tables the summary window renders
//! (full product list and refill priority), plus the day/money figures.
//!
//! ## Usage
//! ```bash
//! # Print the report with the default refill threshold (10)
//! cargo run -p paws-store --bin report
//!
//! # Custom threshold
//! cargo run -p paws-store --bin report -- --threshold 5
//!
//! # Skip the sample transactions, report the untouched seed catalog
//! cargo run -p paws-store --bin report -- --no-demo
//! ```

use std::env;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use paws_store::{seed, StoreState};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut threshold: i64 = 10;
    let mut demo = true;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--threshold" | "-t" => {
                if i + 1 < args.len() {
                    threshold = args[i + 1].parse().unwrap_or(10);
                    i += 1;
                }
            }
            "--no-demo" => {
                demo = false;
            }
            "--help" | "-h" => {
                println!("Paws POS Shop Report");
                println!();
                println!("Usage: report [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -t, --threshold <N>  Refill alert threshold (default: 10)");
                println!("      --no-demo        Skip the sample transactions");
                println!("  -h, --help           Show this help message");
                return ExitCode::SUCCESS;
            }
            _ => {}
        }
        i += 1;
    }

    let catalog = match seed::pet_supply_catalog() {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("seed catalog is invalid: {e}");
            return ExitCode::FAILURE;
        }
    };
    let state = StoreState::new(catalog);

    if demo {
        run_demo(&state);
    }

    print_report(&state, threshold);
    ExitCode::SUCCESS
}

/// A short trading session: two good purchases, two rejections, a day
/// advance, one more sale on the new day.
fn run_demo(state: &StoreState) {
    let buys: &[(&str, u32)] = &[
        ("CANIDAE Beef & Oatmeal Dry Dog Food", 3),
        (
            "Instinct Raw Boost Whole Grain Real Chicken & Brown Rice Recipe \
             Dry Dog Food with Freeze-Dried Raw Pieces",
            2,
        ),
        ("Gourmet Hamster Pellets", 1), // not in the catalog
        ("CANIDAE Beef & Oatmeal Dry Dog Food", 50), // more than the shelf holds
    ];

    for &(name, qty) in buys {
        match state.purchase(name, qty) {
            Ok(receipt) => println!("✓ {receipt}"),
            Err(e) => println!("✗ purchase failed: {e}"),
        }
    }

    let day = state.advance_day();
    println!("— day advanced to {day} —");

    if let Ok(receipt) = state.purchase("CANIDAE Beef & Oatmeal Dry Dog Food", 1) {
        println!("✓ {receipt}");
    }
    println!();
}

fn print_report(state: &StoreState, threshold: i64) {
    let ledger = state.ledger_snapshot();
    println!("Day {}", ledger.day);
    println!("Earned today: {}", ledger.money_today);
    println!("Earned total: {}", ledger.money_total);
    println!();

    println!("Products");
    println!(
        "  {:<50} {:>9} {:>7} {:>6} {:>6} {:>12}",
        "Name", "Price", "Shelf", "Today", "Total", "Earned"
    );
    for row in state.catalog_snapshot() {
        println!(
            "  {:<50} {:>9} {:>7} {:>6} {:>6} {:>12}",
            truncate(&row.name, 50),
            row.price.to_string(),
            row.on_shelf,
            row.sold_today,
            row.sold_total,
            row.earned_total.to_string(),
        );
    }
    println!();

    let low = state.refill_list(threshold);
    println!("Refill priority (shelf <= {threshold})");
    if low.is_empty() {
        println!("  (nothing below threshold)");
    }
    for row in low {
        println!(
            "  {:<50} {:>7} {:>12}",
            truncate(&row.name, 50),
            row.on_shelf,
            row.earned_total.to_string(),
        );
    }
}

/// Keeps the long seed names from blowing the table layout.
fn truncate(name: &str, max: usize) -> String {
    if name.chars().count() <= max {
        name.to_string()
    } else {
        let cut: String = name.chars().take(max - 1).collect();
        format!("{cut}…")
    }
}
