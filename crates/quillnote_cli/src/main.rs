//! QuillNote command-line entry point.
//!
//! # Responsibility
//! - Expose core normalization and section sync over local files.
//! - Keep file I/O and argument handling out of the core crate.

mod cli;
mod commands;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::error;

use crate::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        error!("event=command_failed module=cli status=error error={err}");
        eprintln!("error: {err}");
        for cause in err.chain().skip(1) {
            eprintln!("  caused by: {cause}");
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.log_level.is_some() && cli.log_dir.is_none() {
        bail!("--log-level has no effect without --log-dir");
    }
    if let Some(log_dir) = &cli.log_dir {
        let log_dir = std::path::absolute(log_dir)
            .with_context(|| format!("failed to resolve {}", log_dir.display()))?;
        let level = cli
            .log_level
            .as_deref()
            .unwrap_or_else(|| quillnote_core::default_log_level());
        quillnote_core::init_logging(level, &log_dir.to_string_lossy())
            .context("failed to initialize logging")?;
        log::info!(
            "event=cli_start module=cli status=ok core_version={}",
            quillnote_core::core_version()
        );
    }

    match cli.command {
        Commands::Normalize(args) => commands::normalize_file(args),
        Commands::Sync(args) => commands::sync_file(args),
        Commands::Stats(args) => commands::print_stats(args),
    }
}

#[cfg(test)]
mod tests {
    use super::run;
    use crate::cli::Cli;
    use clap::Parser;

    #[test]
    fn log_level_without_log_dir_fails_before_running() {
        let cli = Cli::try_parse_from([
            "quillnote",
            "--log-level",
            "debug",
            "stats",
            "--payload",
            "missing.json",
        ])
        .unwrap();

        let err = run(cli).unwrap_err();
        assert!(err.to_string().contains("--log-dir"));
    }
}
