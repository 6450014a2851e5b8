use clap::{Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "tenpin")]
#[command(about = "Score a ten-pin bowling game roll by roll")]
pub(crate) struct Cli {
    /// Rolls as pin counts or score-sheet symbols (e.g. `X 7/ 9-` or `10 7 3 9 0`)
    #[arg(value_name = "ROLLS", conflicts_with = "stdin")]
    pub(crate) rolls: Vec<String>,

    /// Read rolls from standard input instead of arguments
    #[arg(long)]
    pub(crate) stdin: bool,

    /// Output format
    #[arg(long, value_enum, env = "TENPIN_FORMAT", default_value = "text")]
    pub(crate) format: OutputFormat,

    /// Disable colored output (also disabled by NO_COLOR or a non-terminal stdout)
    #[arg(long)]
    pub(crate) no_color: bool,

    /// Append the raw frame dump after the score sheet
    #[arg(long)]
    pub(crate) dump: bool,

    /// Skip rejected rolls with a warning instead of failing
    #[arg(long)]
    pub(crate) lenient: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}
