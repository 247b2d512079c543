// Benchmark as:
// RUST_LOG=info cargo run --profile perf --bin bench -- --programs fib-50,fib-93 --runs 10 --format table
//
// With no arguments, computes F(50) once at u64 and prints the answer and the
// elapsed wall-clock seconds.

use anyhow::Result;
use clap::{
    builder::{NonEmptyStringValueParser, TypedValueParser},
    Parser,
};
use fib_perf::common::{
    bench_program::{self, DEFAULT_PROGRAM},
    bench_width::BenchWidth,
    logger::setup_logger,
    print_utils::{log_performance_summary, log_section, render, OutputFormat},
    timing::measure_runs,
};
use std::str::FromStr;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about=None)]
struct Args {
    /// Registered programs to run, or `all`.
    #[clap(long, env = "FIB_PROGRAMS", use_value_delimiter = true, value_delimiter = ',', default_value = DEFAULT_PROGRAM, value_parser = NonEmptyStringValueParser::new().map(|x| x.to_lowercase()))]
    programs: Vec<String>,

    /// Compute F(n) for this n instead of the registered programs.
    #[clap(long, env = "FIB_N")]
    n: Option<u32>,

    /// u64 | u128
    #[clap(long, env = "FIB_WIDTH", default_value = "u64")]
    width: String,

    #[clap(long, env = "FIB_RUNS", default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    runs: u32,

    /// Fail instead of wrapping when a term overflows the width.
    #[clap(long, env = "FIB_STRICT")]
    strict: bool,

    /// text | table | json
    #[clap(long, env = "FIB_FORMAT", default_value = "text")]
    format: String,
}

fn main() -> Result<()> {
    setup_logger();

    let args = Args::parse();
    let width = BenchWidth::from_str(&args.width)?;
    let format = OutputFormat::from_str(&args.format)?;
    let programs = bench_program::select(&args.programs, args.n)?;

    // Run benchmarks.
    let mut results = Vec::with_capacity(programs.len());
    for program in &programs {
        log_section(&program.name().to_uppercase());
        info!(
            "n={}, width={}, runs={}, strict={} ({})",
            program.n, width, args.runs, args.strict, program.note
        );
        if program.n > width.max_exact_n() && !args.strict {
            warn!(
                "F({}) exceeds {} bits; the answer wraps",
                program.n,
                width.bits()
            );
        }

        let report = measure_runs(program, width, args.runs, args.strict)?;
        log_performance_summary(&report);
        results.push(report);
    }

    // Print results.
    println!("{}", render(&results, format)?);

    Ok(())
}
