use std::process::ExitCode;

use bitwise_arith::harness::{DEFAULT_HIGH, DEFAULT_LOW};
use bitwise_arith::{Report, SelfCheck};
use clap::Parser;
use colored::Colorize;
use env_logger::Env;

/// Checks bitwise implementations of + - * / % pow gcd against native arithmetic.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// First value of the checked range
    #[arg(long, default_value_t = DEFAULT_LOW, allow_negative_numbers = true,
          value_parser = clap::value_parser!(i64).range(-4096..=4096))]
    low: i64,

    /// End of the checked range (exclusive)
    #[arg(long, default_value_t = DEFAULT_HIGH, allow_negative_numbers = true,
          value_parser = clap::value_parser!(i64).range(-4096..=4096))]
    high: i64,

    /// Print a per-operation table to stderr
    #[arg(short, long)]
    report: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    if args.low >= args.high {
        eprintln!("error: --low ({}) must be below --high ({})", args.low, args.high);
        return ExitCode::FAILURE;
    }

    match SelfCheck::new(args.low, args.high).run() {
        Ok(report) => {
            if args.report {
                print_table(&report);
            }
            println!("{}", report.summary_line());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn print_table(report: &Report) {
    eprintln!("{:<10} {:>8} {:>10}  result", "operation", "checked", "mismatches");
    for r in report.operations() {
        let verdict = r.verdict.to_string();
        let verdict = if r.verdict.is_pass() { verdict.as_str().green() } else { verdict.as_str().red().bold() };
        eprintln!("{:<10} {:>8} {:>10}  {}", r.operation.name(), r.checked, r.mismatches, verdict);
    }
}
