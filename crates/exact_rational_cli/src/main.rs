//! Exact Rational CLI
//!
//! Exact rational arithmetic from the command line. Every operand is given
//! as a decimal numerator followed by a decimal denominator.
//!
//! # Usage
//! ```bash
//! # 1/2 + 1/3
//! exact-rational add 1 2 1 3
//!
//! # normalize a fraction
//! exact-rational show 6 -4
//!
//! # compare two values, with debug logging
//! exact-rational --verbose cmp 2 4 1 2
//! ```

mod error;

use clap::{Args, Parser, Subcommand};
use error::{CliError, Result};
use exact_rational_core::{ApproxNumber, Rational};
use num_bigint::BigInt;
use std::cmp::Ordering;

#[derive(Parser)]
#[command(name = "exact-rational")]
#[command(about = "Exact rational arithmetic over arbitrary-precision integers")]
#[command(version)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the value in lowest terms
    #[command(allow_negative_numbers = true)]
    Show(UnaryArgs),

    /// Add two values
    #[command(allow_negative_numbers = true)]
    Add(BinaryArgs),

    /// Subtract the second value from the first
    #[command(allow_negative_numbers = true)]
    Sub(BinaryArgs),

    /// Multiply two values
    #[command(allow_negative_numbers = true)]
    Mul(BinaryArgs),

    /// Divide the first value by the second
    #[command(allow_negative_numbers = true)]
    Div(BinaryArgs),

    /// Compare two values
    #[command(allow_negative_numbers = true)]
    Cmp(BinaryArgs),

    /// Print the floating-point approximation and truncated integer
    #[command(allow_negative_numbers = true)]
    Approx(UnaryArgs),
}

#[derive(Args)]
struct UnaryArgs {
    /// Numerator
    numer: String,

    /// Denominator
    denom: String,
}

#[derive(Args)]
struct BinaryArgs {
    /// Numerator of the first value
    lhs_numer: String,

    /// Denominator of the first value
    lhs_denom: String,

    /// Numerator of the second value
    rhs_numer: String,

    /// Denominator of the second value
    rhs_denom: String,
}

fn parse_integer(input: &str) -> Result<BigInt> {
    input.parse().map_err(|source| CliError::Integer {
        input: input.to_string(),
        source,
    })
}

fn parse_operand(numer: &str, denom: &str) -> Result<Rational> {
    let r = Rational::new(parse_integer(numer)?, parse_integer(denom)?)?;
    log::debug!("operand {}/{} normalized to {}", numer, denom, r);
    Ok(r)
}

impl UnaryArgs {
    fn operand(&self) -> Result<Rational> {
        parse_operand(&self.numer, &self.denom)
    }
}

impl BinaryArgs {
    fn operands(&self) -> Result<(Rational, Rational)> {
        Ok((
            parse_operand(&self.lhs_numer, &self.lhs_denom)?,
            parse_operand(&self.rhs_numer, &self.rhs_denom)?,
        ))
    }
}

/// Execute one command and return the text to print
fn run(command: &Commands) -> Result<String> {
    let output = match command {
        Commands::Show(args) => args.operand()?.to_string(),
        Commands::Add(args) => {
            let (a, b) = args.operands()?;
            (a + b).to_string()
        }
        Commands::Sub(args) => {
            let (a, b) = args.operands()?;
            (a - b).to_string()
        }
        Commands::Mul(args) => {
            let (a, b) = args.operands()?;
            (a * b).to_string()
        }
        Commands::Div(args) => {
            let (a, b) = args.operands()?;
            a.checked_div(&b)?.to_string()
        }
        Commands::Cmp(args) => {
            let (a, b) = args.operands()?;
            match a.cmp(&b) {
                Ordering::Less => "less",
                Ordering::Equal => "equal",
                Ordering::Greater => "greater",
            }
            .to_string()
        }
        Commands::Approx(args) => {
            let r = args.operand()?;
            format!("{} {}", r.to_f64(), r.truncate_to_i64())
        }
    };

    Ok(output)
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let log_env = env_logger::Env::default().default_filter_or(default_filter);
    env_logger::Builder::from_env(log_env)
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli.command) {
        Ok(output) => println!("{}", output),
        Err(err) => {
            log::debug!("command failed: {:?}", err);
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    }
}
