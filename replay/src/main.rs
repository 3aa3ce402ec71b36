//! Replays a scripted sequence of host events through the Runecraft plugin
//! and prints the session and panel after every step.

mod host;
mod runner;
mod script;

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::filter::EnvFilter;

use crate::runner::{StepReport, run_script};
use crate::script::load_script;

#[derive(Parser)]
#[command(version, about = "Replay host events through the Runecraft plugin")]
struct Cli {
    /// TOML event script
    script: PathBuf,

    /// Only print steps whose panel or notifications changed
    #[arg(short, long)]
    changes_only: bool,

    /// Append logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

const LOG_PATH_VAR: &str = "RUNECRAFT_LOG_PATH";

/// Log to `--log-file`, then `RUNECRAFT_LOG_PATH`, then stderr.
fn init_logging(log_file: Option<&Path>) {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    let path = log_file
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(LOG_PATH_VAR).map(PathBuf::from));
    let Some(path) = path else {
        builder.with_writer(std::io::stderr).init();
        return;
    };

    match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => builder.with_ansi(false).with_writer(file).init(),
        Err(e) => {
            builder.with_writer(std::io::stderr).init();
            tracing::warn!(path = %path.display(), error = %e, "cannot open log file, logging to stderr");
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref());

    let script = match load_script(&cli.script) {
        Ok(script) => script,
        Err(e) => {
            tracing::error!(error = %e, "cannot load script");
            std::process::exit(1);
        }
    };

    let start = chrono::Utc::now().naive_utc();
    let reports = run_script(&script, start);

    let mut previous: Option<&StepReport> = None;
    for report in &reports {
        let changed = previous.is_none_or(|p| {
            p.panel != report.panel || !report.notifications.is_empty()
        });
        if !cli.changes_only || changed {
            print_report(report);
        }
        previous = Some(report);
    }
}

fn print_report(report: &StepReport) {
    let event = report.event.unwrap_or("-");
    let (chipped, soul, blood) = report
        .session
        .map(|s| (s.total_chipped, s.soul_runes, s.blood_runes))
        .unwrap_or_default();
    let panel = if report.panel.is_empty() {
        "(hidden)".to_string()
    } else {
        report.panel.join(" | ")
    };

    println!(
        "#{:<3} {} {:<28} chipped={:<4} soul={:<4} blood={:<4} panel={}",
        report.index,
        report.at.format("%H:%M:%S"),
        event,
        chipped,
        soul,
        blood,
        panel
    );
    for message in &report.notifications {
        println!("     notify: {message}");
    }
}
