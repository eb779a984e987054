//! linlog - Cineon-style log/lin conversion CLI

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use linlog_core::{LogLinParams, Mode};

mod commands;

#[derive(Parser)]
#[command(name = "linlog")]
#[command(author, version, about = "Cineon-style log/lin conversion")]
#[command(long_about = "
Convert pixel values between logarithmic film density encoding and linear
light, per RGB channel, with configurable black point, white point, and
gamma.

Examples:
  linlog convert 0.18 0.18 0.18             # Encode mid-gray to log
  linlog convert -m log2lin 0.5 0.5 0.5     # Decode log code values
  cat values.txt | linlog convert           # Stream triples from stdin
  linlog coeffs --black 95 --white 685      # Show derived offset/gain
  linlog curve -n 1024 > curve.csv          # Sample the curve as CSV
  linlog convert --gamma 0.5,0.6,0.7 1 1 1  # Per-channel parameters
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert RGB triples from arguments or stdin
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Print the derived per-channel offset and gain
    Coeffs(CoeffsArgs),

    /// Sample the curve and write CSV to stdout
    Curve(CurveArgs),
}

/// Conversion direction.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Direction {
    /// Log code values to linear light
    Log2lin,
    /// Linear light to log code values
    Lin2log,
}

impl Direction {
    fn mode(self) -> Mode {
        match self {
            Direction::Log2lin => Mode::LogToLin,
            Direction::Lin2log => Mode::LinToLog,
        }
    }
}

/// Curve parameters shared by all subcommands.
#[derive(Args, Clone)]
struct CurveParams {
    /// Black point code value, uniform or r,g,b
    #[arg(long, value_parser = parse_triple, default_value = "95")]
    black: [f32; 3],

    /// White point code value, uniform or r,g,b
    #[arg(long, value_parser = parse_triple, default_value = "685")]
    white: [f32; 3],

    /// Gamma, uniform or r,g,b
    #[arg(long, value_parser = parse_triple, default_value = "0.6")]
    gamma: [f32; 3],
}

impl CurveParams {
    fn to_params(&self) -> LogLinParams {
        LogLinParams {
            black_point: self.black,
            white_point: self.white,
            gamma: self.gamma,
        }
    }
}

#[derive(Args)]
struct ConvertArgs {
    /// Values to convert, in groups of three; read from stdin when omitted
    values: Vec<f32>,

    /// Conversion direction
    #[arg(short, long, value_enum, default_value_t = Direction::Lin2log)]
    mode: Direction,

    #[command(flatten)]
    params: CurveParams,
}

#[derive(Args)]
struct CoeffsArgs {
    #[command(flatten)]
    params: CurveParams,
}

#[derive(Args)]
struct CurveArgs {
    /// Number of samples over [0, 1]
    #[arg(short = 'n', long, default_value_t = 33)]
    samples: usize,

    /// Conversion direction
    #[arg(short, long, value_enum, default_value_t = Direction::Lin2log)]
    mode: Direction,

    #[command(flatten)]
    params: CurveParams,
}

/// Parse "v" or "r,g,b" into a per-channel triple.
fn parse_triple(s: &str) -> Result<[f32; 3], String> {
    let parts: Vec<&str> = s.split(',').collect();
    let parse = |p: &str| {
        p.trim()
            .parse::<f32>()
            .map_err(|_| format!("not a number: {p}"))
    };
    match parts.as_slice() {
        [v] => {
            let v = parse(v)?;
            Ok([v, v, v])
        }
        [r, g, b] => Ok([parse(r)?, parse(g)?, parse(b)?]),
        _ => Err(format!("expected one value or r,g,b, got {s:?}")),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Convert(args) => commands::convert::run(args, cli.verbose),
        Commands::Coeffs(args) => commands::coeffs::run(args, cli.verbose),
        Commands::Curve(args) => commands::curve::run(args, cli.verbose),
    }
}
