use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use colored::Colorize;

use swine_herd_analyzer::{
    analysis::{estimate_revenue, summarize_mortality, Analyzer, GrowthPolicy},
    models::{MortalityEntry, Operation, Role, ShipmentEntry},
    reference::ReferenceTables,
    report::{
        print_consumption_table, print_growth_report, print_growth_table, print_herd_summary,
        print_mortality_summary, print_revenue_report, print_stock_report,
    },
    store::{
        export_batches_csv, import_batches_csv, ActivityKind, ActivityLog, FarmStore,
        JsonFileStore,
    },
    FarmRecords, HerdError,
};

#[derive(Parser)]
#[command(
    name = "herd-analyzer",
    about = "Swine Herd Analyzer - growth, feed, and herd record analysis",
    version,
    author
)]
struct Cli {
    /// Role to run as (admin or client)
    #[arg(long, global = true, default_value = "client")]
    role: Role,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate daily weight gain against the reference table
    Evaluate {
        /// Animal age in days
        #[arg(short, long)]
        age: i32,

        /// Current live weight in kg
        #[arg(short, long)]
        weight: f64,

        /// Measured weight at the bracket start (defaults to the table's
        /// theoretical value)
        #[arg(short, long)]
        start_weight: Option<f64>,

        /// Custom reference tables (TOML)
        #[arg(short, long)]
        tables: Option<PathBuf>,

        /// Percent above reference that counts as out of range
        #[arg(long, default_value = "10.0")]
        above: f64,

        /// Percent below reference that counts as out of range
        #[arg(long, default_value = "10.0")]
        below: f64,
    },

    /// Estimate how long the feed on hand lasts
    Stock {
        /// Path to the farm records JSON file
        #[arg(short, long)]
        input: PathBuf,

        /// Override the feed quantity instead of summing the silos (kg)
        #[arg(short, long)]
        feed: Option<f64>,

        /// Evaluation date (defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Custom reference tables (TOML)
        #[arg(short, long)]
        tables: Option<PathBuf>,
    },

    /// Display a herd summary from the records
    Summary {
        /// Path to the farm records JSON file
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Print a reference table
    Reference {
        /// Which table: growth or consumption
        #[arg(short = 'w', long, default_value = "growth")]
        table: String,

        /// Custom reference tables (TOML)
        #[arg(short, long)]
        tables: Option<PathBuf>,
    },

    /// Quick mortality calculation
    Mortality {
        /// Initial head count
        #[arg(short, long)]
        initial: u32,

        /// Animals lost
        #[arg(short, long)]
        losses: u32,
    },

    /// Project gross shipping revenue
    Revenue {
        /// Mean live weight per truck (kg)
        #[arg(short = 'w', long)]
        truck_weight: f64,

        /// Price per kg
        #[arg(short, long)]
        price: f64,

        /// Trucks shipped per day
        #[arg(long, default_value = "1")]
        trucks_per_day: u32,

        /// Days in the shipping window
        #[arg(short, long, default_value = "1")]
        days: u32,
    },

    /// Log losses against a batch and update its head count
    LogMortality {
        /// Path to the farm records JSON file
        #[arg(short, long)]
        input: PathBuf,

        /// Batch identifier
        #[arg(short, long)]
        batch: String,

        /// Animals lost
        #[arg(short, long)]
        quantity: u32,

        /// Date of the losses (defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Cause, when known
        #[arg(short, long)]
        cause: Option<String>,
    },

    /// Log a shipment against a batch and update its head count
    LogShipment {
        /// Path to the farm records JSON file
        #[arg(short, long)]
        input: PathBuf,

        /// Batch identifier
        #[arg(short, long)]
        batch: String,

        /// Animals shipped
        #[arg(short, long)]
        animals: u32,

        /// Trucks used
        #[arg(short, long, default_value = "1")]
        trucks: u32,

        /// Shipment date (defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// Convert batch records between JSON and CSV
    Convert {
        /// Input file (.json farm records or .csv batch list)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file (.csv batch list or .json farm records)
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn load_tables(path: Option<&PathBuf>) -> Result<ReferenceTables> {
    match path {
        Some(path) => Ok(ReferenceTables::load(path)?),
        None => Ok(ReferenceTables::default()),
    }
}

fn require(role: Role, op: Operation, action: &str) -> Result<()> {
    if !role.permits(op) {
        return Err(HerdError::PermissionDenied(format!(
            "role '{role}' may not {action}; run with --role admin"
        ))
        .into());
    }
    Ok(())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn next_entry_id(prefix: &str, count: usize) -> String {
    format!("{prefix}-{}", count + 1)
}

fn log_activity(input: &PathBuf, kind: ActivityKind, description: String, role: Role) -> Result<()> {
    let path = input.with_extension("activity.json");
    let mut log = ActivityLog::load(&path)?;
    log.record(kind, description, Some(&role.to_string()));
    log.save(&path)?;
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let cli = Cli::parse();
    let role = cli.role;

    match cli.command {
        Commands::Evaluate {
            age,
            weight,
            start_weight,
            tables,
            above,
            below,
        } => {
            let tables = load_tables(tables.as_ref())?;
            let policy = GrowthPolicy {
                above_threshold_percent: above,
                below_threshold_percent: below,
                ..GrowthPolicy::default()
            };
            let records = FarmRecords::default();
            let analyzer = Analyzer::new(&records, &tables).with_policy(policy);
            let eval = analyzer.evaluate_measurement(age, weight, start_weight);
            print_growth_report(&eval);
        }

        Commands::Stock {
            input,
            feed,
            date,
            tables,
        } => {
            let tables = load_tables(tables.as_ref())?;
            let records = JsonFileStore::new(&input).load()?;
            let as_of = date.unwrap_or_else(today);

            let estimate = match feed {
                Some(feed) => swine_herd_analyzer::analysis::estimate_stock_duration(
                    &records.batches,
                    &tables.consumption,
                    feed,
                    as_of,
                ),
                None => Analyzer::new(&records, &tables).stock_duration(as_of),
            };
            println!(
                "\n{}",
                format!("Feed stock as of {as_of}: {}", input.display())
                    .bold()
                    .cyan()
            );
            print_stock_report(&estimate);
        }

        Commands::Summary { input } => {
            let records = JsonFileStore::new(&input).load()?;
            let tables = ReferenceTables::default();
            let analyzer = Analyzer::new(&records, &tables);
            println!(
                "\n{}",
                format!("Herd: {}", records.name).bold().cyan()
            );
            print_herd_summary(&analyzer.herd_metrics());
        }

        Commands::Reference { table, tables } => {
            let tables = load_tables(tables.as_ref())?;
            match table.to_lowercase().as_str() {
                "growth" | "gain" | "gpd" => print_growth_table(&tables.growth),
                "consumption" | "feed" => print_consumption_table(&tables.consumption),
                _ => anyhow::bail!("Unknown table: {table}. Use: growth or consumption"),
            }
        }

        Commands::Mortality { initial, losses } => {
            let summary = summarize_mortality(initial, losses)?;
            print_mortality_summary(&summary);
        }

        Commands::Revenue {
            truck_weight,
            price,
            trucks_per_day,
            days,
        } => {
            let revenue = estimate_revenue(truck_weight, price, trucks_per_day, days)?;
            print_revenue_report(&revenue);
        }

        Commands::LogMortality {
            input,
            batch,
            quantity,
            date,
            cause,
        } => {
            require(role, Operation::LogMortality, "log mortality")?;
            let store = JsonFileStore::new(&input);
            let mut records = store.load()?;
            let entry = MortalityEntry {
                id: next_entry_id("m", records.mortality_log.len()),
                batch_id: batch.clone(),
                date: date.unwrap_or_else(today),
                quantity,
                cause,
            };
            records.record_mortality(entry)?;
            store.save(&records)?;
            log_activity(
                &input,
                ActivityKind::Mortality,
                format!("logged {quantity} losses for batch {batch}"),
                role,
            )?;
            println!(
                "{} Logged {} losses for batch {} ({} remain)",
                "Success:".green().bold(),
                quantity,
                batch,
                records.batch(&batch).map(|b| b.current_quantity).unwrap_or(0)
            );
        }

        Commands::LogShipment {
            input,
            batch,
            animals,
            trucks,
            date,
        } => {
            require(role, Operation::LogShipment, "log shipments")?;
            let store = JsonFileStore::new(&input);
            let mut records = store.load()?;
            let entry = ShipmentEntry {
                id: next_entry_id("s", records.shipment_log.len()),
                batch_id: batch.clone(),
                date: date.unwrap_or_else(today),
                animal_quantity: animals,
                truck_quantity: trucks,
            };
            records.record_shipment(entry)?;
            store.save(&records)?;
            log_activity(
                &input,
                ActivityKind::Shipment,
                format!("shipped {animals} animals from batch {batch}"),
                role,
            )?;
            println!(
                "{} Shipped {} animals from batch {} in {} truck(s)",
                "Success:".green().bold(),
                animals,
                batch,
                trucks
            );
        }

        Commands::Convert { input, output } => {
            require(role, Operation::ConvertRecords, "convert records")?;
            let in_ext = input
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("")
                .to_lowercase();
            let out_ext = output
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("")
                .to_lowercase();

            match (in_ext.as_str(), out_ext.as_str()) {
                ("json", "csv") => {
                    let records = JsonFileStore::new(&input).load()?;
                    export_batches_csv(&records.batches, &output)?;
                }
                ("csv", "json") => {
                    let batches = import_batches_csv(&input)?;
                    let mut records = FarmRecords::new(
                        output
                            .file_stem()
                            .map(|s| s.to_string_lossy().to_string())
                            .unwrap_or_else(|| "Imported".to_string()),
                    );
                    records.batches = batches;
                    JsonFileStore::new(&output).save(&records)?;
                }
                _ => anyhow::bail!(
                    "Unsupported conversion: .{in_ext} -> .{out_ext}. Use .json <-> .csv"
                ),
            }
            println!(
                "{} Converted {} -> {}",
                "Success:".green().bold(),
                input.display(),
                output.display()
            );
        }
    }

    Ok(())
}
