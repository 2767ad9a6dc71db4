//! Human-readable terminal formatting.

use colored::Colorize;

use crate::analysis::TwoSampleHypothesis;
use crate::result::{ComparisonResult, DescriptiveResult, PerformanceResult, ReliabilityResult};

fn num(value: f64, precision: usize) -> String {
    format!("{:.*}", precision, value)
}

/// Format a comparison verdict for terminal output.
///
/// The verdict line is colored: green when the difference is significant,
/// yellow otherwise. Statistic, p-value and confidence interval follow on
/// indented lines.
pub fn format_comparison(result: &ComparisonResult, precision: usize) -> String {
    let verdict = verdict_sentence(result, precision);
    let headline = if result.significant {
        verdict.green().bold().to_string()
    } else {
        verdict.yellow().to_string()
    };

    let mut out = String::new();
    out.push_str(&headline);
    out.push('\n');
    out.push_str(&format!(
        "  statistic: {}, p-value: {}, alpha: {}\n",
        num(result.statistic, precision + 2),
        num(result.p_value, precision + 2),
        result.alpha
    ));
    out.push_str(&format!(
        "  95% CI for the difference: [{}, {}] ms\n",
        num(result.confidence.0, precision),
        num(result.confidence.1, precision)
    ));
    out
}

fn verdict_sentence(result: &ComparisonResult, precision: usize) -> String {
    let first = &result.first_sample.label;
    let second = &result.second_sample.label;
    let threshold = num(result.hypothesized_difference, precision);
    let observed = format!(
        "(Observed: {} vs {})",
        num(result.first_sample.mean, precision),
        num(result.second_sample.mean, precision)
    );

    if !result.significant {
        if result.hypothesized_difference == 0.0 {
            return format!("Difference between {} and {} is not significant.", first, second);
        }
        return format!(
            "Difference between {} and {} is not significant or is less than {}ms. {}",
            first, second, threshold, observed
        );
    }

    match result.hypothesis {
        TwoSampleHypothesis::ValuesAreDifferent => format!(
            "The values are different by at least {}ms. {}",
            threshold, observed
        ),
        TwoSampleHypothesis::FirstValueIsGreaterThanSecond => format!(
            "{} is greater than {} by at least {}ms. {}",
            first, second, threshold, observed
        ),
        TwoSampleHypothesis::FirstValueIsSmallerThanSecond => format!(
            "{} is less than {} by at least {}ms. {}",
            first, second, threshold, observed
        ),
    }
}

/// Format a trial result: the run header followed by its statistics.
pub fn format_performance(result: &PerformanceResult, precision: usize) -> String {
    let mut out = String::new();

    out.push_str(&format!("Total Iterations: {}\n", result.iterations));
    out.push_str(&format!(
        "Degree Of Parallelism: {}\n",
        result.degree_of_parallelism
    ));
    out.push_str(&format!(
        "Total Time: {} seconds, {} milliseconds, {} ticks\n",
        num(result.total_seconds, precision),
        num(result.total_milliseconds, precision),
        result.total_ticks
    ));
    out.push('\n');
    out.push_str("Statistics (ms)\n");
    out.push_str("---------------\n");
    out.push_str(&format_descriptive(&result.descriptive, precision));

    out
}

/// Format descriptive statistics: summary, quartiles, a 10x10 percentile
/// grid, and the histogram table when one was built.
pub fn format_descriptive(result: &DescriptiveResult, precision: usize) -> String {
    let mut out = String::new();

    out.push_str(&format!("Samples: {}\n", result.count));
    out.push_str(&format!("Minimum: {}\n", num(result.min, precision)));
    out.push_str(&format!("Maximum: {}\n", num(result.max, precision)));
    out.push('\n');
    out.push_str(&format!(
        "Mean: {}, Median: {}, Std Dev: {}\n",
        num(result.mean, precision),
        num(result.median(), precision),
        num(result.std_dev, precision)
    ));
    out.push('\n');
    out.push_str(&format!(
        "Quartiles: {}, {}, {}\n",
        num(result.first_quartile(), precision),
        num(result.median(), precision),
        num(result.third_quartile(), precision)
    ));
    out.push('\n');
    out.push_str("Percentiles\n");
    for row in 0..10 {
        let mut line = String::new();
        for col in 0..10 {
            line.push(' ');
            line.push_str(&num(result.percentile(row * 10 + col), precision));
        }
        out.push_str(&line);
        out.push('\n');
    }

    if let Some(ref histogram) = result.histogram {
        out.push('\n');
        out.push_str("Histogram Data\n");
        out.push_str("--------------\n");
        out.push_str("Bucket              Count\n");
        out.push_str("------              -----\n");
        for bucket in histogram {
            let range = format!(
                "{}-{}",
                num(bucket.range_low, precision),
                num(bucket.range_high, precision)
            );
            out.push_str(&format!("{:<22}{}\n", range, bucket.count));
        }
    }

    out
}

/// Format a reliability result.
pub fn format_reliability(result: &ReliabilityResult, precision: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!("Valid: {}\n", result.is_valid));
    out.push_str(&format!(
        "Total Iterations: {}\n",
        result.passed + result.failed
    ));
    out.push_str(&format!(
        "Passed: {}% ({})\n",
        num(result.percent_passed(), precision),
        result.passed
    ));
    out.push_str(&format!(
        "Failed: {}% ({})\n",
        num(result.percent_failed(), precision),
        result.failed
    ));
    out
}
