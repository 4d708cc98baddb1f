//! Re-map the values of one ordered mapping through another.
//!
//! The core is [`mapping::remap`]: for every `(key, lookup)` in a source
//! mapping it looks `lookup` up in a target mapping, producing a result with
//! the source's keys in the source's order. Lookups that miss become `None`.
//! Everything else in the crate is the CLI around it.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod context;
pub mod error;
pub mod mapping;
pub mod parse;
pub mod ports;
pub mod render;

pub use error::RemapError;
pub use mapping::{remap, Mapping, Remapped};

use clap::error::ErrorKind;
use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print().map_err(|e| format!("failed to print help: {e}"))?;
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    commands::dispatch(&cli.command)
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn run_executes_demo() {
        let result = run(["remap", "demo"]);
        assert!(result.is_ok());
    }

    #[test]
    fn run_succeeds_on_version_and_help() {
        assert!(run(["remap", "--version"]).is_ok());
        assert!(run(["remap", "apply", "--help"]).is_ok());
    }

    #[test]
    fn run_errors_on_unknown_subcommand() {
        let result = run(["remap", "unknown"]);
        assert!(result.is_err());
    }

    #[test]
    fn run_errors_on_invalid_source() {
        let result = run(["remap", "apply", "--source", "[1]", "--target", "{}"]);
        assert!(result.unwrap_err().contains("invalid argument `source`"));
    }
}
