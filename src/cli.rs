//! CLI argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// Shell-script function indexer
#[derive(Parser, Debug)]
#[command(name = "shindex")]
#[command(about = "Index shell functions under a directory into a deterministic JSON lookup file")]
#[command(version)]
pub struct Cli {
    /// Root directory to scan for shell scripts
    #[arg(value_name = "ROOT")]
    pub root: PathBuf,

    /// Destination path for the JSON index
    #[arg(short, long, default_value = "function_index.json")]
    pub output: PathBuf,

    /// Show per-file progress on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_root_only() {
        let cli = Cli::try_parse_from(["shindex", "scripts"]).unwrap();
        assert_eq!(cli.root, PathBuf::from("scripts"));
        assert_eq!(cli.output, PathBuf::from("function_index.json"));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parses_output_and_verbose() {
        let cli =
            Cli::try_parse_from(["shindex", "-v", "--output", "out.json", "scripts"]).unwrap();
        assert_eq!(cli.output, PathBuf::from("out.json"));
        assert!(cli.verbose);
    }

    #[test]
    fn test_root_is_required() {
        assert!(Cli::try_parse_from(["shindex"]).is_err());
    }
}
