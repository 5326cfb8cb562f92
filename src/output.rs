//! Colored console output for the chain spec translator.
//!
//! Color scheme: blue+bold headers, cyan values, green success,
//! yellow warnings, dimmed secondary text.

use crate::chainspec::{Dialect, Fork, ForkSchedule};
use colored::Colorize;
use std::path::Path;

// ── Helpers ────────────────────────────────────────────────────────

/// Render the active forks as `name@block` pairs, or `none`.
pub fn format_forks(schedule: &ForkSchedule) -> String {
    let active: Vec<String> = schedule
        .active()
        .map(|(fork, block): (Fork, u64)| format!("{fork}@{block}"))
        .collect();
    if active.is_empty() {
        "none".to_string()
    } else {
        active.join(", ")
    }
}

// ── Banner ─────────────────────────────────────────────────────────

/// Print the startup banner with the genesis identity.
pub fn print_banner(network: &str, chain_id: u64, schedule: &ForkSchedule) {
    println!();
    println!("{}", "=== Chain Spec Translator ===".blue().bold());
    println!("  Network:      {}", network.cyan());
    println!("  Chain ID:     {}", chain_id.to_string().cyan());
    println!("  Forks:        {}", format_forks(schedule).cyan());
}

/// Print where the genesis came from.
pub fn print_genesis_source(source: &str) {
    println!("  Genesis:      {}", source.dimmed());
}

// ── Export ─────────────────────────────────────────────────────────

/// Print that a chain spec was written.
pub fn print_spec_written(dialect: Dialect, path: &Path) {
    println!(
        "  {} {} chain spec written to {}",
        "OK".green().bold(),
        dialect.to_string().cyan(),
        path.display().to_string().dimmed()
    );
}

/// Print that a dialect was skipped because the genesis can't be expressed in it.
pub fn print_spec_skipped(dialect: Dialect, reason: &str) {
    println!(
        "  {} {} chain spec skipped: {}",
        "WARNING:".yellow().bold(),
        dialect.to_string().cyan(),
        reason
    );
}

/// Print the export summary.
pub fn print_summary(written: usize, requested: usize) {
    println!();
    let line = format!("Exported {written}/{requested} chain specs");
    if written == requested {
        println!("{}", line.green().bold());
    } else if written == 0 {
        println!("{}", line.red().bold());
    } else {
        println!("{}", line.yellow().bold());
    }
}
