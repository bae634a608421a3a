use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use lab_reports::config::{DATA_FILE_ENV, DEFAULT_DATA_FILE, DEFAULT_LAB_NAME};
use lab_reports::render::{receipt_number, render_catalog, render_document, render_listing};
use lab_reports::{
    Catalog, CorruptStorePolicy, LabConfig, ParameterValues, ReportRecord, ReportStore,
    report_labels, select_numbered,
};
use log::info;

#[derive(Parser)]
#[command(name = "lab-reports")]
#[command(version)]
#[command(about = "Record and look up patient lab reports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Report store file
    #[arg(long, global = true, env = DATA_FILE_ENV, default_value = DEFAULT_DATA_FILE)]
    data_file: PathBuf,

    /// Refuse to start from an unreadable store instead of treating it as empty
    #[arg(long, global = true)]
    strict: bool,

    /// Heading printed on report documents
    #[arg(long, global = true, default_value = DEFAULT_LAB_NAME)]
    lab_name: String,
}

#[derive(Subcommand)]
enum Commands {
    /// List available tests and their parameters
    Tests,

    /// Evaluate parameter values without storing a report
    Evaluate {
        /// Test name as listed by `tests`
        #[arg(short, long)]
        test: String,

        /// Parameter value as NAME=VALUE (repeatable)
        #[arg(short, long = "value", value_parser = parse_parameter)]
        values: Vec<(String, String)>,
    },

    /// Add a new report for a patient
    Add {
        /// Patient name
        #[arg(short, long)]
        name: String,

        /// Patient phone number
        #[arg(short, long)]
        phone: String,

        /// Test name as listed by `tests`
        #[arg(short, long)]
        test: String,

        /// Parameter value as NAME=VALUE (repeatable)
        #[arg(short, long = "value", value_parser = parse_parameter)]
        values: Vec<(String, String)>,

        /// Refuse values that cannot be evaluated instead of storing an Error result
        #[arg(long)]
        reject_invalid: bool,
    },

    /// Show every report stored for a phone number
    List {
        #[arg(short, long)]
        phone: String,
    },

    /// Print a single report as a document
    Show {
        #[arg(short, long)]
        phone: String,

        /// Report number as shown by `list` (starting at 1)
        #[arg(short, long)]
        report: usize,
    },
}

fn parse_parameter(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(format!("expected NAME=VALUE, got '{s}'")),
    }
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let policy = if cli.strict {
        CorruptStorePolicy::Fail
    } else {
        CorruptStorePolicy::TreatAsEmpty
    };
    let config = LabConfig::default()
        .with_data_file(&cli.data_file)
        .with_lab_name(cli.lab_name)
        .with_corrupt_store_policy(policy);

    match cli.command {
        Commands::Tests => {
            print!("{}", render_catalog(Catalog::global()));
        }
        Commands::Evaluate { test, values } => {
            let values: ParameterValues = values.into_iter().collect();
            match lab_reports::evaluate(&test, &values) {
                Ok(classification) => println!("{classification}"),
                Err(e) => bail!("Could not evaluate {test}: {e}"),
            }
        }
        Commands::Add {
            name,
            phone,
            test,
            values,
            reject_invalid,
        } => {
            let mut store = ReportStore::load(config).context("Failed to load report store")?;
            let values: ParameterValues = values.into_iter().collect();
            let record = if reject_invalid {
                ReportRecord::create_checked(name, &test, values)?
            } else {
                ReportRecord::create(name, &test, values)?
            };
            let result = record.result();
            store
                .append(&phone, record)
                .context("Failed to save report")?;
            info!("Report saved for {}", phone.trim());
            println!("Report saved ({} result: {result})", test.trim());
        }
        Commands::List { phone } => {
            let store = ReportStore::load(config).context("Failed to load report store")?;
            let reports = store.reports_for(&phone);
            print!("{}", render_listing(reports));
            for label in report_labels(reports) {
                println!("{label}");
            }
        }
        Commands::Show { phone, report } => {
            let lab_name = config.lab_name.clone();
            let store = ReportStore::load(config).context("Failed to load report store")?;
            let reports = store.reports_for(&phone);
            let record = select_numbered(reports, report)
                .with_context(|| format!("No report #{report} for {}", phone.trim()))?;
            print!(
                "{}",
                render_document(&lab_name, phone.trim(), record, report, receipt_number())
            );
        }
    }

    Ok(())
}
