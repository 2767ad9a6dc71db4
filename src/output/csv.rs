//! CSV rendering as `Section,Name,Value` rows.

use crate::result::{DescriptiveResult, PerformanceResult, ReliabilityResult};

fn num(value: f64, precision: usize) -> String {
    format!("{:.*}", precision, value)
}

/// Render descriptive statistics as CSV rows: summary, quartiles, the full
/// percentile table, and (when present) the histogram.
pub fn descriptive_csv(result: &DescriptiveResult, precision: usize) -> String {
    let mut out = String::new();

    out.push_str(&format!("Summary,Samples,{}\n", result.count));
    out.push_str(&format!("Summary,Minimum,{}\n", num(result.min, precision)));
    out.push_str(&format!("Summary,Maximum,{}\n", num(result.max, precision)));
    out.push_str(&format!("Summary,Mean,{}\n", num(result.mean, precision)));
    out.push_str(&format!("Summary,Median,{}\n", num(result.median(), precision)));
    out.push_str(&format!("Summary,StdDev,{}\n", num(result.std_dev, precision)));

    out.push_str(&format!(
        "Quartiles,First,{}\n",
        num(result.first_quartile(), precision)
    ));
    out.push_str(&format!(
        "Quartiles,Second,{}\n",
        num(result.median(), precision)
    ));
    out.push_str(&format!(
        "Quartiles,Third,{}\n",
        num(result.third_quartile(), precision)
    ));

    for p in 0..=100 {
        out.push_str(&format!(
            "Percentiles,{},{}\n",
            p,
            num(result.percentile(p), precision)
        ));
    }

    if let Some(ref histogram) = result.histogram {
        for bucket in histogram {
            out.push_str(&format!(
                "Histogram,{},{},{}\n",
                num(bucket.range_low, precision),
                num(bucket.range_high, precision),
                bucket.count
            ));
        }
    }

    out
}

/// Render a trial result as CSV: run header rows followed by the
/// descriptive rows.
pub fn performance_csv(result: &PerformanceResult, precision: usize) -> String {
    let mut out = String::new();

    out.push_str("Iterations,DegreeOfParallelism\n");
    out.push_str(&format!(
        "{},{}\n",
        result.iterations, result.degree_of_parallelism
    ));
    out.push_str("TotalSeconds,TotalMilliseconds,TotalTicks\n");
    out.push_str(&format!(
        "{},{},{}\n",
        num(result.total_seconds, precision),
        num(result.total_milliseconds, precision),
        result.total_ticks
    ));
    out.push('\n');
    out.push_str(&descriptive_csv(&result.descriptive, precision));

    out
}

/// Render a reliability result as CSV.
pub fn reliability_csv(result: &ReliabilityResult, precision: usize) -> String {
    let mut out = String::new();

    out.push_str(&format!("Valid,{}\n", result.is_valid));
    out.push_str(&format!("Count,{}\n", result.passed + result.failed));
    out.push_str(&format!(
        "Passed,{}%,{}\n",
        num(result.percent_passed(), precision),
        result.passed
    ));
    out.push_str(&format!(
        "Failed,{}%,{}\n",
        num(result.percent_failed(), precision),
        result.failed
    ));

    out
}
