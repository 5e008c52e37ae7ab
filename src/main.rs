use clap::Parser;
use debt_ledger::application::engine::DebtEngine;
use debt_ledger::infrastructure::in_memory::InMemoryStore;
#[cfg(feature = "storage-rocksdb")]
use debt_ledger::infrastructure::rocksdb::RocksDbStore;
use debt_ledger::interfaces::csv::action_reader::ActionReader;
use debt_ledger::interfaces::csv::debt_reader::DebtReader;
use debt_ledger::interfaces::csv::debt_writer::DebtWriter;
use debt_ledger::interfaces::csv::ledger_writer::LedgerWriter;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input debt actions CSV file
    input: PathBuf,

    /// CSV file with the initial debt book to seed the store with
    #[arg(long)]
    debts: Option<PathBuf>,

    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[arg(long)]
    db_path: Option<PathBuf>,

    /// Write the emitted ledger entries to this CSV file
    #[arg(long)]
    ledger: Option<PathBuf>,
}

fn build_engine(db_path: Option<PathBuf>) -> Result<DebtEngine> {
    match db_path {
        #[cfg(feature = "storage-rocksdb")]
        Some(path) => {
            let store = RocksDbStore::open(path).into_diagnostic()?;
            Ok(DebtEngine::new(Box::new(store)))
        }
        #[cfg(not(feature = "storage-rocksdb"))]
        Some(_) => miette::bail!("--db-path requires a build with the storage-rocksdb feature"),
        None => Ok(DebtEngine::new(Box::new(InMemoryStore::new()))),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let engine = build_engine(cli.db_path)?;

    // Seed the debt book
    if let Some(path) = cli.debts {
        let file = File::open(path).into_diagnostic()?;
        let reader = DebtReader::new(file);
        let mut seeded = 0usize;
        for debt_result in reader.debts() {
            let debt = debt_result.into_diagnostic()?;
            engine.register_debt(debt).await.into_diagnostic()?;
            seeded += 1;
        }
        log::info!("seeded {} debts", seeded);
    }

    // Process debt actions
    let file = File::open(cli.input).into_diagnostic()?;
    let reader = ActionReader::new(file);
    for action_result in reader.actions() {
        match action_result {
            Ok(action) => {
                if let Err(e) = engine.apply(action).await {
                    eprintln!("Error applying debt action: {}", e);
                }
            }
            Err(e) => {
                eprintln!("Error reading debt action: {}", e);
            }
        }
    }

    // Export the ledger before the engine is consumed
    if let Some(path) = cli.ledger {
        let entries = engine.ledger().await.into_diagnostic()?;
        let file = File::create(path).into_diagnostic()?;
        let mut writer = LedgerWriter::new(file);
        writer.write_entries(entries).into_diagnostic()?;
    }

    // Output the final debt book
    let debts = engine.into_results().await.into_diagnostic()?;
    let stdout = io::stdout();
    let mut writer = DebtWriter::new(stdout.lock());
    writer.write_debts(debts).into_diagnostic()?;

    Ok(())
}
