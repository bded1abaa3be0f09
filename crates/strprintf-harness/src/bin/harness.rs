//! CLI entrypoint for the strprintf conformance harness.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Parser, Subcommand};

use strprintf_harness::HarnessError;
use strprintf_harness::console;
use strprintf_harness::fixtures::FixtureSet;
use strprintf_harness::report::ConformanceReport;
use strprintf_harness::runner::{TestRunner, execute_case};
use strprintf_harness::structured_log::{LogEmitter, LogEntry, LogLevel, Outcome};

/// Conformance tooling for strprintf.
#[derive(Debug, Parser)]
#[command(name = "strprintf-harness")]
#[command(about = "Conformance testing harness for strprintf")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Verify the engine against a fixture file.
    Verify {
        /// Fixture JSON file.
        #[arg(long)]
        fixture: PathBuf,
        /// Output report path (markdown).
        #[arg(long)]
        report: Option<PathBuf>,
        /// Structured JSONL log path (defaults to stdout when omitted
        /// together with --report).
        #[arg(long)]
        log: Option<PathBuf>,
        /// Optional fixed timestamp string for deterministic output.
        #[arg(long)]
        timestamp: Option<String>,
    },
    /// Rewrite a fixture file's expected fields from the current engine.
    Bless {
        /// Fixture JSON file, updated in place.
        #[arg(long)]
        fixture: PathBuf,
    },
    /// Print the boot banner and a few formatted samples through the
    /// cooked stdout consumer.
    Demo,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli.command) {
        Ok(clean) => {
            if clean {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(err) => {
            eprintln!("harness error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<bool, HarnessError> {
    match command {
        Command::Verify {
            fixture,
            report,
            log,
            timestamp,
        } => {
            let timestamp = timestamp.unwrap_or_else(now);
            let set = FixtureSet::from_file(&fixture)?;
            let runner = TestRunner::new(set.family.clone());
            let results = runner.run(&set);

            let mut emitter = match &log {
                Some(path) => LogEmitter::to_file(path)?,
                None => LogEmitter::to_stdout(),
            };
            for result in &results {
                let mut entry = LogEntry::new(
                    timestamp.clone(),
                    if result.passed {
                        LogLevel::Info
                    } else {
                        LogLevel::Error
                    },
                    "case_done",
                );
                entry.campaign = Some(runner.campaign.clone());
                entry.case = Some(result.case_name.clone());
                entry.outcome = Some(if result.passed {
                    Outcome::Pass
                } else {
                    Outcome::Fail
                });
                entry.detail = result.diff.clone();
                emitter.emit(&entry)?;
            }

            let summary = ConformanceReport::from_results(&runner.campaign, &timestamp, &results);
            if let Some(path) = report {
                std::fs::write(&path, summary.to_markdown())?;
            }
            println!("{} / {} cases passed", summary.passed, summary.total);
            Ok(summary.all_passed())
        }
        Command::Bless { fixture } => {
            let mut set = FixtureSet::from_file(&fixture)?;
            for case in &mut set.cases {
                let (actual, rc) = execute_case(case);
                case.expected_output = actual;
                case.expected_rc = rc;
            }
            set.to_file(&fixture)?;
            println!("blessed {} cases", set.cases.len());
            Ok(true)
        }
        Command::Demo => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            Ok(console::demo(&mut out) >= 0)
        }
    }
}

fn now() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("unix:{secs}")
}
