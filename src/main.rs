//! Password security auditor CLI.
//!
//! Prompts for a password without echo, runs the audit pipeline and
//! renders the report to the terminal or as JSON.

mod render;

use anyhow::Context;
use chrono::Datelike;
use clap::Parser;
use pwd_audit::{Auditor, PolicyThresholds};
use secrecy::SecretString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Command-line interface for the password auditor
#[derive(Parser)]
#[command(name = "pwd-audit")]
#[command(about = "Password security auditor")]
#[command(version)]
struct Cli {
    /// Path to a wordlist file, one candidate password per line
    #[arg(long, env = "PWD_AUDIT_WORDLIST", value_name = "FILE")]
    wordlist: Option<PathBuf>,

    /// Output the report in JSON format
    #[arg(long)]
    json: bool,

    /// Filename to save the JSON report (implies --json)
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Minimum password length required by policy
    #[arg(long, default_value_t = 12)]
    min_length: usize,

    /// Minimum strength score (0-5) required by policy
    #[arg(long, default_value_t = 4)]
    min_score: u8,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pwd_audit=warn")),
        )
        .init();

    let cli = Cli::parse();

    println!("=== Password Security Auditor ===");
    println!("WARNING: only audit passwords you are authorized to inspect\n");

    let password = SecretString::new(
        rpassword::prompt_password("Enter password to audit (input hidden): ")
            .context("failed to read password")?
            .into(),
    );

    let mut auditor = Auditor::new(chrono::Local::now().year()).with_thresholds(PolicyThresholds {
        min_length: cli.min_length,
        min_score: cli.min_score,
    });
    if let Some(path) = &cli.wordlist {
        auditor = auditor.with_wordlist(path);
    }

    println!("\nAuditing...");
    let report = auditor.audit(&password, None).await;
    drop(password);

    if cli.json || cli.output.is_some() {
        render::write_json(&report, cli.output.as_deref())?;
        return Ok(());
    }

    render::print_report(&report);

    if prompt_line("\nSave as JSON? (y/N): ")?.eq_ignore_ascii_case("y") {
        let filename = prompt_line("Filename [audit_report.json]: ")?;
        let path = if filename.is_empty() {
            Path::new("audit_report.json")
        } else {
            Path::new(&filename)
        };
        render::write_json(&report, Some(path))?;
    }

    Ok(())
}

fn prompt_line(prompt: &str) -> anyhow::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
