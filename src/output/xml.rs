//! XML rendering as element-per-field documents.
//!
//! Values are pre-formatted at the configured precision; documents are
//! hand-built strings with two-space indentation.

use crate::result::{DescriptiveResult, PerformanceResult, ReliabilityResult};

fn num(value: f64, precision: usize) -> String {
    format!("{:.*}", precision, value)
}

/// Render descriptive statistics as a `<PerformanceDetails>` document.
pub fn descriptive_xml(result: &DescriptiveResult, precision: usize) -> String {
    let mut out = String::new();

    out.push_str("<PerformanceDetails>\n");

    out.push_str("  <Summary>\n");
    out.push_str(&format!("    <Samples>{}</Samples>\n", result.count));
    out.push_str(&format!("    <Minimum>{}</Minimum>\n", num(result.min, precision)));
    out.push_str(&format!("    <Maximum>{}</Maximum>\n", num(result.max, precision)));
    out.push_str(&format!("    <Mean>{}</Mean>\n", num(result.mean, precision)));
    out.push_str(&format!("    <Median>{}</Median>\n", num(result.median(), precision)));
    out.push_str(&format!("    <StdDev>{}</StdDev>\n", num(result.std_dev, precision)));
    out.push_str("  </Summary>\n");

    out.push_str("  <Quartiles>\n");
    out.push_str(&format!(
        "    <First>{}</First>\n",
        num(result.first_quartile(), precision)
    ));
    out.push_str(&format!(
        "    <Second>{}</Second>\n",
        num(result.median(), precision)
    ));
    out.push_str(&format!(
        "    <Third>{}</Third>\n",
        num(result.third_quartile(), precision)
    ));
    out.push_str("  </Quartiles>\n");

    out.push_str("  <Percentiles>\n");
    for p in 0..=100 {
        out.push_str(&format!(
            "    <Percentile pct=\"{}\">{}</Percentile>\n",
            p,
            num(result.percentile(p), precision)
        ));
    }
    out.push_str("  </Percentiles>\n");

    if let Some(ref histogram) = result.histogram {
        out.push_str("  <Histogram>\n");
        for bucket in histogram {
            out.push_str(&format!(
                "    <Bucket lowerBound=\"{}\" upperBound=\"{}\">{}</Bucket>\n",
                num(bucket.range_low, precision),
                num(bucket.range_high, precision),
                bucket.count
            ));
        }
        out.push_str("  </Histogram>\n");
    }

    out.push_str("</PerformanceDetails>\n");
    out
}

/// Render a trial result as a `<PerformanceResult>` document with a run
/// header and embedded details.
pub fn performance_xml(result: &PerformanceResult, precision: usize) -> String {
    let mut out = String::new();

    out.push_str("<PerformanceResult>\n");
    out.push_str("  <Header>\n");
    out.push_str(&format!("    <Iterations>{}</Iterations>\n", result.iterations));
    out.push_str(&format!(
        "    <DegreeOfParallelism>{}</DegreeOfParallelism>\n",
        result.degree_of_parallelism
    ));
    out.push_str(&format!(
        "    <TotalSeconds>{}</TotalSeconds>\n",
        num(result.total_seconds, precision)
    ));
    out.push_str(&format!(
        "    <TotalMilliseconds>{}</TotalMilliseconds>\n",
        num(result.total_milliseconds, precision)
    ));
    out.push_str(&format!("    <TotalTicks>{}</TotalTicks>\n", result.total_ticks));
    out.push_str("  </Header>\n");

    for line in descriptive_xml(&result.descriptive, precision).lines() {
        out.push_str("  ");
        out.push_str(line);
        out.push('\n');
    }

    out.push_str("</PerformanceResult>\n");
    out
}

/// Render a reliability result as a `<ReliabilityResult>` document.
pub fn reliability_xml(result: &ReliabilityResult, precision: usize) -> String {
    let mut out = String::new();

    out.push_str("<ReliabilityResult>\n");
    out.push_str(&format!("  <Valid>{}</Valid>\n", result.is_valid));
    out.push_str(&format!("  <Count>{}</Count>\n", result.passed + result.failed));
    out.push_str("  <Passed>\n");
    out.push_str(&format!("    <Count>{}</Count>\n", result.passed));
    out.push_str(&format!(
        "    <Percent>{}%</Percent>\n",
        num(result.percent_passed(), precision)
    ));
    out.push_str("  </Passed>\n");
    out.push_str("  <Failed>\n");
    out.push_str(&format!("    <Count>{}</Count>\n", result.failed));
    out.push_str(&format!(
        "    <Percent>{}%</Percent>\n",
        num(result.percent_failed(), precision)
    ));
    out.push_str("  </Failed>\n");
    out.push_str("</ReliabilityResult>\n");
    out
}
