//! CLI definitions using clap.

use std::num::NonZeroU32;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell as CompletionShell;

use blockworks::util::shell::ColorChoice;

/// blockworks - building blocks from an abstract factory
#[derive(Parser)]
#[command(name = "blockworks")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Coloring: auto, always, never
    #[arg(long, global = true, default_value = "auto", value_parser = parse_color)]
    pub color: ColorChoice,

    /// Output format for results and errors
    #[arg(long, global = true, value_enum, default_value_t = MessageFormat::Human)]
    pub message_format: MessageFormat,

    /// Defaults to `run` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum MessageFormat {
    Human,
    Json,
}

fn parse_color(s: &str) -> Result<ColorChoice, String> {
    s.parse()
}

#[derive(Subcommand)]
pub enum Commands {
    /// Choose a block kind and its dimensions interactively
    Run(RunArgs),

    /// Build one block from command-line arguments
    Make(MakeArgs),

    /// List the available block kinds
    Kinds,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Default)]
pub struct RunArgs {
    /// Stop at the first invalid value instead of asking again
    #[arg(long)]
    pub strict: bool,

    /// Give up after this many invalid values for one field
    #[arg(long, value_name = "N", conflicts_with = "strict")]
    pub max_attempts: Option<NonZeroU32>,
}

#[derive(Args)]
pub struct MakeArgs {
    /// Block kind: 1/round, 2/square or 3/triangle
    pub kind: String,

    /// Radius of a round block
    #[arg(long, allow_hyphen_values = true)]
    pub radius: Option<String>,

    /// Side length of a square block
    #[arg(long, alias = "sideLength", allow_hyphen_values = true)]
    pub side_length: Option<String>,

    /// Base of a triangle block
    #[arg(long, allow_hyphen_values = true)]
    pub base: Option<String>,

    /// Height of a triangle block
    #[arg(long, allow_hyphen_values = true)]
    pub height: Option<String>,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: CompletionShell,
}
