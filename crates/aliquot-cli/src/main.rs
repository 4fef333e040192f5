//! Aliquot command-line driver.
//!
//! Prints exact arithmetic results, rational expansions, polynomial roots
//! and Collatz statistics.

#![warn(clippy::all)]

mod collatz;

use std::process;

use aliquot::prelude::*;
use clap::{ArgAction, Parser, Subcommand};
use thiserror::Error;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use collatz::{CollatzError, Columns};

/// Errors reported to the user.
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
    #[error(transparent)]
    Collatz(#[from] CollatzError),
    #[error("invalid floating point value '{0}'")]
    InvalidFloat(String),
    #[error("a polynomial needs at least one coefficient")]
    NoCoefficients,
}

#[derive(Parser, Debug)]
#[command(name = "aliquot")]
#[command(version)]
#[command(about = "Exact integer, rational and polynomial arithmetic")]
struct Args {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Maximum fractional digits when printing rationals
    #[arg(long, env = "ALIQUOT_DIGITS", default_value_t = Rational::DEFAULT_MAX_DIGITS, global = true)]
    digits: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a, b, a + b, a * b, a / b and a % b for two integers
    Int {
        #[arg(allow_negative_numbers = true)]
        a: String,
        #[arg(allow_negative_numbers = true)]
        b: String,
    },

    /// Expand a rational given as a decimal (`1.25`) or fraction (`22/7`)
    Rational {
        #[arg(allow_negative_numbers = true)]
        value: String,

        /// Read the value as an IEEE double and expand its exact binary value
        #[arg(long)]
        float: bool,

        /// Print in scientific notation
        #[arg(short, long)]
        scientific: bool,
    },

    /// Isolate the real roots of a polynomial
    Roots {
        /// Coefficients, highest degree first (`1 -2 1` is x^2 - 2x + 1)
        #[arg(required = true, allow_negative_numbers = true)]
        coefficients: Vec<String>,

        /// Maximum distance between a reported root and the true root
        #[arg(long, env = "ALIQUOT_MAX_ERROR", default_value = "0.0001")]
        max_error: String,

        /// Lower end of the search interval (defaults to the Cauchy bound)
        #[arg(long, allow_negative_numbers = true, requires = "upper")]
        lower: Option<String>,

        /// Upper end of the search interval
        #[arg(long, allow_negative_numbers = true, requires = "lower")]
        upper: Option<String>,
    },

    /// Explore Collatz sequences
    Collatz {
        #[command(subcommand)]
        action: CollatzAction,
    },
}

#[derive(Subcommand, Debug)]
enum CollatzAction {
    /// Step statistics for consecutive start values
    Stats {
        start: String,

        /// Number of consecutive start values
        #[arg(short, long, default_value_t = 1)]
        count: u64,
    },

    /// Print every value of one sequence with glyph renderings
    Trace {
        start: String,

        /// Width of the decimal column
        #[arg(long, default_value_t = 10)]
        decimal_width: usize,

        /// Binary digits shown
        #[arg(long, default_value_t = 64)]
        binary_width: usize,

        /// Ternary digits shown
        #[arg(long, default_value_t = 64)]
        ternary_width: usize,
    },

    /// How many times a value can be tripled below a bit length
    Pow3 { value: String, bits: usize },
}

fn main() {
    let args = Args::parse();

    let level = if args.quiet {
        Level::ERROR
    } else {
        match args.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {e}");
        process::exit(1);
    }

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    match &args.command {
        Command::Int { a, b } => run_int(a, b),
        Command::Rational {
            value,
            float,
            scientific,
        } => run_rational(value, *float, *scientific, args.digits),
        Command::Roots {
            coefficients,
            max_error,
            lower,
            upper,
        } => {
            let interval = match (lower, upper) {
                (Some(lo), Some(hi)) => Some((parse_rational(lo)?, parse_rational(hi)?)),
                _ => None,
            };
            run_roots(coefficients, &parse_rational(max_error)?, interval, args.digits)
        }
        Command::Collatz { action } => run_collatz(action),
    }
}

/// Parses `[-]digits[.digits]` or `numerator/denominator`.
fn parse_rational(s: &str) -> Result<Rational, ArithmeticError> {
    match s.split_once('/') {
        Some((numer, denom)) => Rational::new(numer.trim().parse()?, denom.trim().parse()?),
        None => s.parse(),
    }
}

fn run_int(a: &str, b: &str) -> Result<(), CliError> {
    let a: Integer = a.parse()?;
    let b: Integer = b.parse()?;
    let (quotient, remainder) = a.div_rem(&b)?;

    println!("{a}");
    println!("{b}");
    println!("{}", &a + &b);
    println!("{}", &a * &b);
    println!("{quotient}");
    println!("{remainder}");
    Ok(())
}

fn run_rational(value: &str, float: bool, scientific: bool, digits: usize) -> Result<(), CliError> {
    let r = if float {
        let x: f64 = value
            .trim()
            .parse()
            .map_err(|_| CliError::InvalidFloat(value.to_string()))?;
        Rational::try_from(x)?
    } else {
        parse_rational(value)?
    };
    debug!(numerator = %r.numerator(), denominator = %r.denominator(), "parsed rational");

    if scientific {
        println!("{}", r.to_scientific_string(digits));
    } else {
        println!("{}", r.to_decimal_string(digits));
    }
    println!("= {} / {}", r.numerator(), r.denominator());
    println!("floor {}  ceil {}  round {}", r.floor(), r.ceil(), r.round());
    Ok(())
}

fn run_roots(
    coefficients: &[String],
    max_error: &Rational,
    interval: Option<(Rational, Rational)>,
    digits: usize,
) -> Result<(), CliError> {
    if coefficients.is_empty() {
        return Err(CliError::NoCoefficients);
    }
    let mut p = Polynomial::zero();
    for (exp, c) in (0u32..).zip(coefficients.iter().rev()) {
        p.add_term(parse_rational(c)?, exp);
    }
    info!(degree = p.degree(), terms = p.len(), "isolating real roots");

    let roots = match interval {
        Some((lower, upper)) => roots_in_range(&sturm_sequence(&p), &lower, &upper, max_error)?,
        None => real_roots(&p, max_error)?,
    };

    println!("p(x) = {p}");
    if roots.is_empty() {
        println!("no real roots");
    }
    for root in &roots {
        println!("{}", root.to_decimal_string(digits));
    }
    Ok(())
}

fn run_collatz(action: &CollatzAction) -> Result<(), CliError> {
    match action {
        CollatzAction::Stats { start, count } => {
            let mut value: Integer = start.parse()?;
            for _ in 0..*count {
                let s = collatz::stats(&value)?;
                println!(
                    "{value}->C={},M={},D={},B={}",
                    s.total(),
                    s.multiplies,
                    s.halvings,
                    s.peak_bits
                );
                value = &value + &Integer::new(1);
            }
        }
        CollatzAction::Trace {
            start,
            decimal_width,
            binary_width,
            ternary_width,
        } => {
            let columns = Columns {
                decimal: *decimal_width,
                binary: *binary_width,
                ternary: *ternary_width,
            };
            for value in collatz::trajectory(&start.parse()?)? {
                println!("{}", collatz::render_line(&value, columns));
            }
        }
        CollatzAction::Pow3 { value, bits } => {
            let n = collatz::pow3_exponentiations(&value.parse()?, *bits)?;
            println!("{n}");
        }
    }
    Ok(())
}
