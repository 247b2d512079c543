use crate::common::{
    bench_program::BenchProgram, bench_width::BenchWidth, print_utils::BenchReport,
};
use anyhow::{Context, Result};
use fibonacci_lib::{checked_fib, fib, fib_with, SequenceError, SequenceInt};
use std::{
    hint::black_box,
    time::{Duration, Instant},
};
use tracing::debug;

/// One timed generator call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    /// `F(n)` widened to `u128`; lossless for every supported width.
    pub answer: u128,
    pub elapsed: Duration,
}

pub fn time_operation<T, F: FnOnce() -> T>(operation: F) -> (T, Duration) {
    let start = Instant::now();
    let result = operation();
    let duration = start.elapsed();
    (result, duration)
}

fn measure_at<T>(n: u32, strict: bool) -> Result<Measurement, SequenceError>
where
    T: SequenceInt + Into<u128>,
{
    let (answer, elapsed) = if strict {
        time_operation(|| checked_fib::<T>(black_box(n)))
    } else {
        time_operation(|| Ok(fib_with::<T>(black_box(n))))
    };
    let answer = black_box(answer?);

    Ok(Measurement {
        answer: answer.into(),
        elapsed,
    })
}

/// Times a single `F(n)` computation at the given width.
pub fn measure(n: u32, width: BenchWidth, strict: bool) -> Result<Measurement, SequenceError> {
    match width {
        BenchWidth::U64 if !strict => {
            let (answer, elapsed) = time_operation(|| fib(black_box(n)));
            Ok(Measurement {
                answer: black_box(answer).into(),
                elapsed,
            })
        }
        BenchWidth::U64 => measure_at::<u64>(n, strict),
        BenchWidth::U128 => measure_at::<u128>(n, strict),
    }
}

/// Runs `program` `runs` times and collects the timings into a report.
pub fn measure_runs(
    program: &BenchProgram,
    width: BenchWidth,
    runs: u32,
    strict: bool,
) -> Result<BenchReport> {
    let mut answer = None;
    let mut durations = Vec::with_capacity(runs as usize);

    for run in 0..runs.max(1) {
        let measurement = measure(program.n, width, strict)
            .with_context(|| format!("{} failed on run {}", program.name(), run))?;
        debug!("{} run {}: {:?}", program.name(), run, measurement.elapsed);
        answer.get_or_insert(measurement.answer);
        durations.push(measurement.elapsed);
    }

    Ok(BenchReport::new(
        program,
        width,
        answer.unwrap_or_default(),
        durations,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::bench_program::find;

    #[test]
    fn test_time_operation() {
        let (value, duration) = time_operation(|| 7);
        assert_eq!(value, 7);
        assert!(duration < Duration::from_secs(1));
    }

    #[test]
    fn test_measure_widths() {
        let m = measure(50, BenchWidth::U64, false).unwrap();
        assert_eq!(m.answer, 12_586_269_025);

        let m = measure(50, BenchWidth::U128, true).unwrap();
        assert_eq!(m.answer, 12_586_269_025);
    }

    #[test]
    fn test_measure_wraps_unless_strict() {
        let wrapped = measure(94, BenchWidth::U64, false).unwrap();
        assert_eq!(wrapped.answer, 1_293_530_146_158_671_551);

        let err = measure(94, BenchWidth::U64, true).unwrap_err();
        assert_eq!(err, SequenceError::Overflow { n: 94, bits: 64 });
    }

    #[test]
    fn test_measure_runs() {
        let program = find("fib-93").unwrap();
        let report = measure_runs(&program, BenchWidth::U64, 4, true).unwrap();
        assert_eq!(report.program, "fib-93");
        assert_eq!(report.answer, "12200160415121876738");
        assert_eq!(report.runs.len(), 4);
        assert!(report.min <= report.mean && report.mean <= report.max);
    }

    #[test]
    fn test_measure_runs_strict_overflow() {
        let program = BenchProgram::adhoc(200);
        let err = measure_runs(&program, BenchWidth::U128, 1, true).unwrap_err();
        assert_eq!(err.to_string(), "fib-200 failed on run 0");
        assert!(err.root_cause().to_string().contains("128-bit"));
    }
}
