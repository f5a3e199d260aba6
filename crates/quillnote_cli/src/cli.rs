use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "quillnote",
    version,
    about = "Normalize project markdown and merge chapter extraction results"
)]
pub struct Cli {
    /// Log level for file logging (trace|debug|info|warn|error).
    /// Requires `--log-dir`.
    #[arg(long, global = true, value_parser = parse_level)]
    pub log_level: Option<String>,

    /// Directory for rolling log files. File logging is off when omitted.
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

fn parse_level(value: &str) -> Result<String, String> {
    quillnote_core::parse_log_level(value)
        .map(str::to_string)
        .map_err(|err| err.to_string())
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Strip HTML contamination and canonicalize whitespace.
    Normalize(NormalizeArgs),
    /// Merge a chapter payload into a project document.
    Sync(SyncArgs),
    /// Print chapter statistics for a payload as JSON.
    Stats(StatsArgs),
}

#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Write the result to this file instead of stdout.
    #[arg(long, conflicts_with = "in_place")]
    pub output: Option<PathBuf>,

    /// Overwrite the input document.
    #[arg(long, default_value_t = false)]
    pub in_place: bool,
}

#[derive(Args, Debug, Clone)]
pub struct NormalizeArgs {
    pub input: PathBuf,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug, Clone)]
pub struct SyncArgs {
    #[arg(long)]
    pub document: PathBuf,

    /// JSON payload with title, summary, characters and locations.
    #[arg(long)]
    pub payload: PathBuf,

    /// JSON heading rules overriding the built-in categories.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Normalize the document before merging.
    #[arg(long, default_value_t = false)]
    pub normalize: bool,

    /// Print the merge report to stderr.
    #[arg(long, default_value_t = false)]
    pub report: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug, Clone)]
pub struct StatsArgs {
    #[arg(long)]
    pub payload: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn sync_accepts_global_log_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "quillnote",
            "sync",
            "--document",
            "project.md",
            "--payload",
            "chapter.json",
            "--in-place",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        let Commands::Sync(args) = cli.command else {
            panic!("expected sync command");
        };
        assert!(args.output.in_place);
        assert!(!args.normalize);
    }

    #[test]
    fn log_level_is_canonicalized_at_parse_time() {
        let cli = Cli::try_parse_from([
            "quillnote",
            "--log-level",
            "WARNING",
            "stats",
            "--payload",
            "p.json",
        ])
        .unwrap();
        assert_eq!(cli.log_level.as_deref(), Some("warn"));
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let result = Cli::try_parse_from([
            "quillnote",
            "stats",
            "--payload",
            "p.json",
            "--log-level",
            "loud",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn output_and_in_place_conflict() {
        let result = Cli::try_parse_from([
            "quillnote",
            "normalize",
            "notes.md",
            "--in-place",
            "--output",
            "out.md",
        ]);
        assert!(result.is_err());
    }
}
