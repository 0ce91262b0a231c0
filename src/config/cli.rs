use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "dashfit")]
#[command(about = "Fixed-width formatting for hosts, currency amounts and coin symbols")]
pub struct CliConfig {
    #[arg(long, help = "TOML file with locale and display settings")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Override the decimal separator")]
    pub decimal_separator: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Short domain label for one or more hosts
    Domain {
        #[arg(required = true)]
        hosts: Vec<String>,
    },
    /// Host without scheme prefix and trailing slash
    ShortHost { host: String },
    /// Aligned currency amount, optionally cut to a width
    Currency {
        amount: String,
        #[arg(long)]
        width: Option<usize>,
    },
    /// Ellipsis-fit text into a fixed-width column
    Fit {
        text: String,
        #[arg(long)]
        width: usize,
        #[arg(long, value_enum, default_value_t = Align::Right)]
        align: Align,
        #[arg(long, help = "Reserve one column of spacing")]
        pad: bool,
        #[arg(long)]
        ellipsis: Option<String>,
    },
    /// Shortened coin symbol
    Coin { symbol: String },
    /// Split host:port
    HostPort { input: String },
    /// Print whether the first version is newer than the second
    Version { this: String, that: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Align {
    /// Right-aligned, spaces on the left
    Left,
    /// Left-aligned, spaces on the right
    Right,
}
