//! Print stock decisions as JSON.
//!
//! Without `--db` the built-in sample dataset is used. Without `--config` the
//! default lead-time policy applies.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;
use pharma_stock_core::{Database, InMemorySource, InventoryEngine, MedicineSource, PolicyConfig};

#[derive(Parser, Debug)]
#[command(name = "stock-report")]
#[command(about = "Medicine stockout and reorder report")]
#[command(version)]
struct Args {
    /// SQLite inventory database
    #[arg(long)]
    db: Option<PathBuf>,

    /// Policy document: lead-time or critical-threshold JSON
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // RUST_LOG overrides the default level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let args = Args::parse();
    println!("{}", run(&args)?);
    Ok(())
}

fn run(args: &Args) -> anyhow::Result<String> {
    let policy = match &args.config {
        Some(path) => PolicyConfig::from_file(path)
            .with_context(|| format!("loading policy from {}", path.display()))?,
        None => PolicyConfig::default(),
    };

    match &args.db {
        Some(path) => {
            let db = Database::open(path)
                .with_context(|| format!("opening database {}", path.display()))?;
            render(&InventoryEngine::new(&db), &policy)
        }
        None => {
            info!("No --db given; using the sample dataset");
            let source = InMemorySource::sample();
            render(&InventoryEngine::new(&source), &policy)
        }
    }
}

/// Lead-time policies print the full report, threshold policies their alerts.
fn render<S: MedicineSource + ?Sized>(
    engine: &InventoryEngine<'_, S>,
    policy: &PolicyConfig,
) -> anyhow::Result<String> {
    match policy {
        PolicyConfig::LeadTime(config) => Ok(engine.report(config)?.to_json()?),
        PolicyConfig::CriticalThreshold(_) => {
            Ok(serde_json::to_string_pretty(&engine.apply(policy)?)?)
        }
    }
}
