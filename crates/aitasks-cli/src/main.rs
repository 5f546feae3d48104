mod commands;
mod output;
mod prompt;

use aitasks_core::dispatch::{self, CommandTable, Context, Invocation};
use aitasks_core::paths;
use aitasks_core::scaffold::DiskOverrides;
use anyhow::Context as _;
use clap::{CommandFactory, Parser};
use commands::Commands;
use output::{print_json, print_report, report_json};
use prompt::StdinPrompt;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "aitasks", about = "A CLI tool to generate AI task files")]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    /// Directory holding template overrides (default: docs/ next to the executable)
    #[arg(long, global = true, value_name = "DIR")]
    templates_dir: Option<PathBuf>,

    /// Exit with status 1 if any file fails to generate
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();

    if cli.version {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return;
    }

    let Some(command) = cli.command else {
        // Help goes to stdout; a closed pipe is not worth reporting.
        let _ = Cli::command().print_help();
        println!();
        return;
    };

    // Default to warn when RUST_LOG is unset or invalid.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let table = CommandTable::standard();
    let invocation = command.into_invocation();
    let overrides_dir = cli
        .templates_dir
        .unwrap_or_else(paths::default_overrides_dir);
    tracing::debug!(
        command = %invocation.command,
        overrides = %overrides_dir.display(),
        "dispatching"
    );

    let mut prompt = StdinPrompt;
    let mut ctx = Context {
        overrides: &DiskOverrides,
        overrides_dir,
        prompt: &mut prompt,
    };

    let succeeded = match run(&table, &invocation, &mut ctx, cli.json) {
        Ok(succeeded) => succeeded,
        Err(e) => {
            // Print the full error chain (anyhow's alternate Display)
            eprintln!("error: {e:#}");
            false
        }
    };

    if cli.strict && !succeeded {
        std::process::exit(1);
    }
}

/// Run one invocation and report it. Returns whether every file was generated.
///
/// Generation failures are reported here and never escape as `Err`; only
/// output failures do.
fn run(
    table: &CommandTable,
    invocation: &Invocation,
    ctx: &mut Context<'_>,
    json: bool,
) -> anyhow::Result<bool> {
    match dispatch::dispatch(table, invocation, ctx) {
        Ok(report) => {
            if json {
                let value = report_json(&report).context("failed to serialize report")?;
                print_json(&value).context("failed to print report")?;
            } else {
                print_report(&report);
            }
            Ok(report.succeeded())
        }
        Err(e) => {
            eprintln!("Error running {}: {e}", invocation.command);
            if json {
                print_json(&serde_json::json!({
                    "command": invocation.command,
                    "error": e.to_string(),
                    "succeeded": false,
                }))
                .context("failed to print error report")?;
            }
            Ok(false)
        }
    }
}
