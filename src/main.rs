use std::path::PathBuf;

use anyhow::Context;
use chrono::Local;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use conduct_ledger::{import, report, risk, AppConfig, OffenseKind, ReportSnapshot, SearchSummary};

#[derive(Parser)]
#[command(name = "conduct-ledger")]
#[command(about = "Student conduct violation ledger with risk tiers", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List offense kinds with labels and points
    Catalog,
    /// Write realistic sample incidents to a CSV file
    Seed {
        #[arg(long, default_value = "violations.csv")]
        out: PathBuf,
    },
    /// Search records by student name or id and offense kind
    Search {
        #[arg(long)]
        csv: PathBuf,
        #[arg(long, default_value = "")]
        term: String,
        #[arg(long)]
        offense: Option<OffenseKind>,
        #[arg(long)]
        json: bool,
    },
    /// Rank students by accumulated points
    Score {
        #[arg(long)]
        csv: PathBuf,
        #[arg(long, default_value_t = 10)]
        limit: usize,
        #[arg(long)]
        json: bool,
    },
    /// Write the plain-text conduct report
    Report {
        #[arg(long)]
        csv: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::from_env();
    init_logging(&config, cli.verbose);

    match cli.command {
        Commands::Catalog => {
            for kind in OffenseKind::ALL {
                println!("{:<11} {:<28} {:>2} puntos", kind.code(), kind.label(), kind.points());
            }
        }
        Commands::Seed { out } => {
            let file = std::fs::File::create(&out)
                .with_context(|| format!("failed to create {}", out.display()))?;
            let drafts = import::seed_drafts();
            import::write_drafts(file, &drafts)?;
            println!("Wrote {} sample records to {}.", drafts.len(), out.display());
        }
        Commands::Search {
            csv,
            term,
            offense,
            json,
        } => {
            let ledger = import::load_ledger(&csv)
                .with_context(|| format!("failed to load {}", csv.display()))?;
            let summary = SearchSummary::new(ledger.search(&term, offense));

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
                return Ok(());
            }

            if summary.records.is_empty() {
                println!("No records found.");
                return Ok(());
            }

            println!(
                "Records found: {} | Matching points: {}",
                summary.record_count, summary.matching_points
            );
            for record in &summary.records {
                println!(
                    "- {} {} ({}) {} on {}: {} [{} points, by {}]",
                    record.id,
                    record.student_name,
                    record.student_id,
                    record.offense_kind.label(),
                    record.incident_date,
                    record.description,
                    record.points,
                    record.registered_by
                );
            }
        }
        Commands::Score { csv, limit, json } => {
            let ledger = import::load_ledger(&csv)
                .with_context(|| format!("failed to load {}", csv.display()))?;
            let standings = risk::standings(ledger.all());

            if json {
                let top: Vec<_> = standings.into_iter().take(limit).collect();
                println!("{}", serde_json::to_string_pretty(&top)?);
                return Ok(());
            }

            if standings.is_empty() {
                println!("No records in ledger.");
                return Ok(());
            }

            println!("Students by accumulated points:");
            for standing in standings.iter().take(limit) {
                println!(
                    "- {} ({}) {} points across {} records [{}]",
                    standing.student_name,
                    standing.student_id,
                    standing.total_points,
                    standing.record_count,
                    standing.tier
                );
            }
        }
        Commands::Report { csv, out } => {
            let ledger = import::load_ledger(&csv)
                .with_context(|| format!("failed to load {}", csv.display()))?;
            let today = Local::now().date_naive();
            let snapshot = ReportSnapshot::from_records(ledger.all(), today);
            let out = out.unwrap_or_else(|| config.report_dir.join(report::report_file_name(today)));

            std::fs::write(&out, report::format(&snapshot))
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!("Report written to {}.", out.display());
        }
    }

    Ok(())
}

fn init_logging(config: &AppConfig, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
