mod commands;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use nano_units_core::batch::Direction;
use nano_units_core::AmountKind;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nano-units", about = "Exact conversion between amounts and nano units")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Kind {
    /// Decimal text, arbitrary precision
    Text,
    /// 64-bit float, limited precision
    Float,
    /// Integer, scaled without validation
    Integer,
}

impl From<Kind> for AmountKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Text => AmountKind::Text,
            Kind::Float => AmountKind::Float,
            Kind::Integer => AmountKind::Integer,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum BatchDirection {
    ToNano,
    FromNano,
}

impl From<BatchDirection> for Direction {
    fn from(direction: BatchDirection) -> Self {
        match direction {
            BatchDirection::ToNano => Direction::ToNano,
            BatchDirection::FromNano => Direction::FromNano,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a decimal amount to nano units
    ToNano {
        /// Amount to convert, e.g. 1.5 or -0.000000001
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Fractional digits per unit (default 9, or NANO_UNITS_DECIMALS)
        #[arg(long)]
        decimals: Option<u32>,
        /// How to interpret the value
        #[arg(long, value_enum, default_value_t = Kind::Text)]
        kind: Kind,
    },
    /// Convert nano units back to a decimal amount
    FromNano {
        /// Integer amount of nano units
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Fractional digits per unit (default 9, or NANO_UNITS_DECIMALS)
        #[arg(long)]
        decimals: Option<u32>,
        /// How to interpret the value
        #[arg(long, value_enum, default_value_t = Kind::Text)]
        kind: Kind,
    },
    /// Convert one amount per line from a file ("-" reads stdin)
    Batch {
        /// Path to the input file
        file: String,
        /// Conversion direction
        #[arg(long, value_enum)]
        direction: BatchDirection,
        /// Fractional digits per unit (default 9, or NANO_UNITS_DECIMALS)
        #[arg(long)]
        decimals: Option<u32>,
        /// Number of parallel workers (0 = auto)
        #[arg(long)]
        workers: Option<usize>,
    },
    /// Print the combined value of message send-mode flags
    SendMode {
        /// Flag names, e.g. pay-gas-separately ignore-errors
        #[arg(required = true)]
        modes: Vec<String>,
    },
}

fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))
}

fn main() -> anyhow::Result<()> {
    init_tracing()?;
    let cli = Cli::parse();

    match cli.command {
        Commands::ToNano {
            value,
            decimals,
            kind,
        } => commands::to_nano::run(&value, kind.into(), decimals),
        Commands::FromNano {
            value,
            decimals,
            kind,
        } => commands::from_nano::run(&value, kind.into(), decimals),
        Commands::Batch {
            file,
            direction,
            decimals,
            workers,
        } => commands::batch::run(&file, direction.into(), decimals, workers),
        Commands::SendMode { modes } => commands::send_mode::run(&modes),
    }
}
