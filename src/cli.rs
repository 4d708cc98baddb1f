//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};

use crate::parse::InputFormat;
use crate::render::OutputStyle;

/// Top-level CLI parser for `remap`.
#[derive(Debug, Parser)]
#[command(name = "remap", version, about = "Re-map the values of one mapping through another")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look up every source value in the target and print the result.
    Apply(ApplyArgs),
    /// Run the built-in example: {a: x, b: y, c: z} through {x: ABC1, y: BCD1, z: DEF1}.
    Demo {
        /// Output style.
        #[arg(short, long, value_enum, default_value_t = OutputStyle::Record)]
        output: OutputStyle,
    },
}

/// Arguments for `remap apply`.
#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// Source mapping; its values are looked up in the target.
    #[arg(short, long)]
    pub source: String,

    /// Target mapping providing the final values.
    #[arg(short, long)]
    pub target: String,

    /// Format of the source and target text.
    #[arg(long, value_enum, default_value_t = InputFormat::Json)]
    pub input_format: InputFormat,

    /// Output style.
    #[arg(short, long, value_enum, default_value_t = OutputStyle::Record)]
    pub output: OutputStyle,

    /// Fail instead of printing a result when any lookup key is missing.
    #[arg(long)]
    pub strict: bool,

    /// Do not warn about missing lookup keys.
    #[arg(short, long)]
    pub quiet: bool,
}
