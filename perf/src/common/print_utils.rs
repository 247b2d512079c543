use crate::common::{bench_program::BenchProgram, bench_width::BenchWidth};
use anyhow::{anyhow, Error, Result};
use serde::Serialize;
use std::time::Duration;
use tracing::info;

pub fn log_section(title: &str) {
    info!("╔═══════════════════════╗");
    info!("║{:^23}║", title);
    info!("╚═══════════════════════╝");
}

pub fn log_performance_summary(report: &BenchReport) {
    log_section("PERFORMANCE SUMMARY");
    info!(
        "{} (n={}, width={}, runs={})",
        report.program,
        report.n,
        report.width,
        report.runs.len()
    );
    info!("Time Metrics (wall time)");
    info!("----------------------------------------");
    info!("MIN:       {}", format_duration(report.min));
    info!("MEAN:      {}", format_duration(report.mean));
    info!("MAX:       {}", format_duration(report.max));
    info!("----------------------------------------");
}

pub fn format_duration(duration: Duration) -> String {
    let secs_f64 = duration.as_secs_f64();
    let secs = secs_f64.round() as u64;
    let minutes = secs / 60;
    let seconds = secs % 60;

    if minutes > 0 {
        format!("{}m{}s", minutes, seconds)
    } else if seconds > 0 {
        format!("{}s", seconds)
    } else if duration.as_millis() > 0 {
        format!("{}ms", (secs_f64 * 1000.0).round() as u64)
    } else if duration.as_micros() > 0 {
        format!("{}µs", duration.as_micros())
    } else {
        format!("{}ns", duration.as_nanos())
    }
}

#[derive(Debug, Serialize)]
pub struct BenchReport {
    pub program: String,
    pub n: u32,
    pub width: BenchWidth,
    /// Decimal, since a `u128` term does not survive a JSON number.
    pub answer: String,
    pub runs: Vec<Duration>,
    pub min: Duration,
    pub mean: Duration,
    pub max: Duration,
    pub success: bool,
}

impl BenchReport {
    pub fn new(
        program: &BenchProgram,
        width: BenchWidth,
        answer: u128,
        runs: Vec<Duration>,
    ) -> Self {
        let min = runs.iter().min().copied().unwrap_or_default();
        let max = runs.iter().max().copied().unwrap_or_default();
        let mean = if runs.is_empty() {
            Duration::default()
        } else {
            runs.iter().sum::<Duration>() / runs.len() as u32
        };

        Self {
            program: program.name(),
            n: program.n,
            width,
            answer: answer.to_string(),
            success: !runs.is_empty(),
            runs,
            min,
            mean,
            max,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Table,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow!("unsupported output format: {}", s)),
        }
    }
}

/// `Found answer <N>` and `Elapsed: <seconds>` for each report. With several
/// runs the fastest one is reported.
pub fn format_text(results: &[BenchReport]) -> Vec<String> {
    results
        .iter()
        .flat_map(|result| {
            [
                format!("Found answer {}", result.answer),
                format!("Elapsed: {}", result.min.as_secs_f64()),
            ]
        })
        .collect()
}

pub fn format_results(results: &[BenchReport]) -> Vec<String> {
    let mut table_text = String::new();
    table_text.push_str("```\n");
    table_text.push_str(
        "| program     | width | answer                                  | runs  | min        | mean       | max        | success |\n",
    );
    table_text.push_str(
        "|-------------|-------|-----------------------------------------|-------|------------|------------|------------|---------|",
    );

    for result in results.iter() {
        table_text.push_str(&format!(
            "\n| {:<11} | {:<5} | {:>39} | {:>5} | {:>10} | {:>10} | {:>10} | {:<7} |",
            result.program,
            result.width,
            result.answer,
            result.runs.len(),
            format_duration(result.min),
            format_duration(result.mean),
            format_duration(result.max),
            if result.success { "✅" } else { "❌" }
        ));
    }
    table_text.push_str("\n```");

    vec![
        "*Fibonacci Benchmark Results*\n".to_string(),
        String::new(),
        table_text,
    ]
}

pub fn render(results: &[BenchReport], format: OutputFormat) -> Result<String> {
    let lines = match format {
        OutputFormat::Text => format_text(results),
        OutputFormat::Table => format_results(results),
        OutputFormat::Json => vec![serde_json::to_string_pretty(results)?],
    };
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn report(n: u32, answer: u128, runs: &[u64]) -> BenchReport {
        BenchReport::new(
            &BenchProgram::adhoc(n),
            BenchWidth::U64,
            answer,
            runs.iter().map(|&us| Duration::from_micros(us)).collect(),
        )
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_secs(125)), "2m5s");
        assert_eq!(format_duration(Duration::from_secs(3)), "3s");
        assert_eq!(format_duration(Duration::from_millis(42)), "42ms");
        assert_eq!(format_duration(Duration::from_micros(7)), "7µs");
        assert_eq!(format_duration(Duration::from_nanos(120)), "120ns");
    }

    #[test]
    fn test_report_stats() {
        let r = report(50, 12_586_269_025, &[30, 10, 20]);
        assert_eq!(r.min, Duration::from_micros(10));
        assert_eq!(r.mean, Duration::from_micros(20));
        assert_eq!(r.max, Duration::from_micros(30));
        assert!(r.success);
    }

    #[test]
    fn test_format_text() {
        let r = report(50, 12_586_269_025, &[2, 1]);
        assert_eq!(
            format_text(&[r]),
            vec![
                "Found answer 12586269025".to_string(),
                "Elapsed: 0.000001".to_string(),
            ]
        );
    }

    #[test]
    fn test_render_table_and_json() {
        let results = vec![report(10, 55, &[5])];

        let table = render(&results, OutputFormat::Table).unwrap();
        assert!(table.contains("| fib-10"));
        assert!(table.contains(" 55 |"));

        let json: serde_json::Value =
            serde_json::from_str(&render(&results, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json[0]["program"], "fib-10");
        assert_eq!(json[0]["width"], "u64");
        assert_eq!(json[0]["answer"], "55");
        assert_eq!(json[0]["runs"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_parse_format() {
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::from_str("yaml").is_err());
    }
}
