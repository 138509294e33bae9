//! shindex CLI entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use shindex::{build_index, write_index, Cli, Result};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(summary) => {
            println!("{summary}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            e.exit_code()
        }
    }
}

fn run(cli: &Cli) -> Result<String> {
    let result = build_index(&cli.root)?;
    write_index(&result.index, &cli.output)?;

    let mut summary = format!(
        "Indexed {} functions into {}",
        result.index.len(),
        cli.output.display()
    );
    if !result.warnings.is_empty() {
        summary.push_str(&format!(" ({} warnings)", result.warnings.len()));
    }
    Ok(summary)
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "shindex=debug" } else { "shindex=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
