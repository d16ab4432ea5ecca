// Command-line front end: check every justification in a log file.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use tseitin_check::{parse_log_file, CheckReport, CheckerConfig, TseitinChecker};

#[derive(Parser)]
#[clap(
    name = "tseitin-check",
    about = "Check Tseitin defining clauses recorded in a justification log."
)]
struct Args {
    /// Justification log to check
    #[clap(value_name = "FILE")]
    file: PathBuf,

    /// Identify and/or/xor terms whose children agree up to reordering
    #[clap(long)]
    commutative: bool,

    /// Print a JSON report instead of one line per justification
    #[clap(long)]
    json: bool,
}

fn main() -> ExitCode {
    // Use RUST_LOG to control log levels, e.g. RUST_LOG=tseitin_check=debug
    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).without_time().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();

    let log = match parse_log_file(&args.file) {
        Ok(log) => log,
        Err(e) => {
            eprintln!("Error reading {}: {}", args.file.display(), e);
            return ExitCode::from(2);
        }
    };

    let config = CheckerConfig {
        equiv_modulo_commutativity: args.commutative,
    };
    let checker = TseitinChecker::with_config(&log.bank, config);
    let report = CheckReport::from_justifications(&checker, &log.bank, &log.justifications);
    info!(
        total = report.total,
        accepted = report.accepted,
        terms = log.bank.len(),
        "checked justification log"
    );

    if args.json {
        match report.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing report: {}", e);
                return ExitCode::from(2);
            }
        }
    } else {
        for (result, jst) in report.results.iter().zip(&log.justifications) {
            let label = result
                .name
                .as_ref()
                .map(|n| format!("{} ({})", result.index, n))
                .unwrap_or_else(|| result.index.to_string());
            match &result.rule {
                Some(rule) => println!("ok   {} {}", label, rule),
                None => println!("FAIL {} {}", label, jst.display(&log.bank)),
            }
        }
        println!(
            "{} justifications: {} accepted, {} rejected",
            report.total, report.accepted, report.rejected
        );
    }

    if report.all_accepted() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}
