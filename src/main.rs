//! Cash-flow projection CLI
//!
//! Projects contract billing into dated revenue and cost entries

use anyhow::{Context, Result};
use cashflow_projection::{
    contract::{load_contracts, to_profiles},
    export::{format_display_date, write_csv_all},
    projection::{DEFAULT_PROJECTION_MONTHS, MonthlyBucket},
    aggregate_by_month, BillingFrequency, BillingProfile, CashFlowProjection, PaymentTerms,
    PortfolioRunner, ProjectionConfig, RateCard,
};
use chrono::NaiveDate;
use clap::Parser;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "cashflow_projection", version, about = "Project contract billing cash flows")]
struct Args {
    /// Contracts file (CSV, or JSON array when the extension is .json)
    #[arg(short, long)]
    contracts: Option<PathBuf>,

    /// Number of months to project
    #[arg(short, long, default_value_t = DEFAULT_PROJECTION_MONTHS)]
    months: u32,

    /// Write the entry table as CSV to this path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print projections as JSON instead of tables
    #[arg(long)]
    json: bool,

    /// Print the monthly roll-up after each table
    #[arg(long)]
    monthly: bool,

    /// Merge all contracts into a single projection
    #[arg(long)]
    consolidated: bool,

    /// Omit the year from displayed dates
    #[arg(long)]
    no_year: bool,
}

/// Contract used when no contracts file is given
fn demo_profile() -> Result<BillingProfile> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).context("invalid demo start date")?;
    Ok(BillingProfile::new("Office cleaning (CT-001)", start)
        .with_frequency(BillingFrequency::Monthly)
        .with_payment_terms(PaymentTerms::Net(14))
        .with_rates(RateCard {
            monthly_revenue: 5000.0,
            monthly_cost: 3000.0,
            ..Default::default()
        }))
}

fn print_table(projection: &CashFlowProjection, include_year: bool) {
    println!("{:<12} {:<50} {:>12} {:>12} {:>14}", "Date", "Description", "Incoming", "Outgoing", "Balance");
    println!("{}", "-".repeat(104));
    for entry in &projection.entries {
        println!(
            "{:<12} {:<50} {:>12.2} {:>12.2} {:>14.2}",
            format_display_date(entry.date, include_year),
            entry.description,
            entry.incoming,
            entry.outgoing,
            entry.balance,
        );
    }

    let summary = projection.summary();
    println!("\nSummary ({} to {}):", projection.projection_start, projection.projection_end);
    println!("  Invoices: {}  Supplier payments: {}", summary.revenue_entries, summary.cost_entries);
    println!("  Total Incoming: ${:.2}", summary.total_incoming);
    println!("  Total Outgoing: ${:.2}", summary.total_outgoing);
    println!("  Net Cash Flow:  ${:.2}", summary.net_cash_flow);
    if let Some(date) = summary.lowest_balance_date {
        println!(
            "  Lowest Balance: ${:.2} on {}",
            summary.lowest_balance,
            format_display_date(date, include_year)
        );
    }
}

fn print_monthly(buckets: &[MonthlyBucket]) {
    println!("\n{:<10} {:>12} {:>12} {:>14}", "Month", "Incoming", "Outgoing", "Balance");
    for bucket in buckets {
        println!(
            "{:<10} {:>12.2} {:>12.2} {:>14.2}",
            bucket.month, bucket.incoming, bucket.outgoing, bucket.balance
        );
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let profiles = match &args.contracts {
        Some(path) => {
            let records = load_contracts(path)
                .with_context(|| format!("failed to load contracts from {}", path.display()))?;
            to_profiles(&records)?
        }
        None => vec![demo_profile()?],
    };

    let config = ProjectionConfig {
        projection_months: args.months,
        include_year_in_dates: !args.no_year,
    };
    let include_year = config.include_year_in_dates;
    let runner = PortfolioRunner::new(config);

    let mut projections = runner.run_batch(&profiles)?;
    if args.consolidated {
        projections = PortfolioRunner::consolidate(&projections).into_iter().collect();
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&projections)?);
    } else {
        for (idx, projection) in projections.iter().enumerate() {
            if idx > 0 {
                println!();
            }
            print_table(projection, include_year);
            if args.monthly {
                print_monthly(&aggregate_by_month(&projection.entries));
            }
        }
    }

    if let Some(path) = &args.output {
        let file = File::create(path)
            .with_context(|| format!("unable to create {}", path.display()))?;
        write_csv_all(&projections, BufWriter::new(file), include_year)?;
        eprintln!("Entries written to: {}", path.display());
    }

    Ok(())
}
