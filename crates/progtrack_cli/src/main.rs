//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `progtrack_core` linkage and storage wiring from a shell.
//! - Print deterministic, plain-text summaries of a tracker database.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use progtrack_core::db::{open_db, DEFAULT_DB_FILE_NAME};
use progtrack_core::{
    format_all_for_export, group_by_country, init_logging, summary_stats, Program,
    ProgramPersistence, ProgramStore, SqliteProgramSlot,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "progtrack", version, about = "Program application tracker probe")]
struct Cli {
    /// Tracker database file. Defaults to the system temp dir.
    #[arg(long, env = "PROGTRACK_DB_PATH")]
    db: Option<PathBuf>,
    /// Absolute directory for rolling log files. Logging is off when unset.
    #[arg(long)]
    log_dir: Option<String>,
    #[arg(long, default_value = progtrack_core::default_log_level())]
    log_level: String,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print core ping and version.
    Ping,
    /// Print overview counters relative to today.
    Stats,
    /// Print per-country program counts.
    Countries,
    /// Print every program as an export block.
    Export,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        init_logging(&cli.log_level, log_dir)
            .map_err(anyhow::Error::msg)
            .context("failed to initialize logging")?;
    }

    match cli.command.unwrap_or(Command::Ping) {
        Command::Ping => print_ping(),
        Command::Stats => print_stats(&load_snapshot(cli.db)?),
        Command::Countries => print_countries(&load_snapshot(cli.db)?),
        Command::Export => print!("{}", format_all_for_export(&load_snapshot(cli.db)?)),
    }
    Ok(())
}

fn print_ping() {
    println!("progtrack_core ping={}", progtrack_core::ping());
    println!("progtrack_core version={}", progtrack_core::core_version());
}

fn load_snapshot(db: Option<PathBuf>) -> Result<Vec<Program>> {
    let db_path = db.unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME));
    let conn = open_db(&db_path)
        .with_context(|| format!("failed to open tracker db `{}`", db_path.display()))?;
    let store = ProgramStore::open(ProgramPersistence::new(SqliteProgramSlot::new(&conn)));
    Ok(store.snapshot())
}

fn print_stats(snapshot: &[Program]) {
    let today = chrono::Local::now().date_naive();
    let stats = summary_stats(snapshot, today);
    println!("total={}", stats.total);
    println!("upcoming={}", stats.upcoming_count);
    println!("countries={}", stats.unique_country_count);
    println!("virtual={}", stats.virtual_count);
}

fn print_countries(snapshot: &[Program]) {
    for (country, programs) in group_by_country(snapshot) {
        let label = if country.is_empty() {
            "(none)"
        } else {
            country.as_str()
        };
        println!("{label}\t{}", programs.len());
    }
}
