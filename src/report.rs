//! Report export - CSV and plain-text report generation.
//!
//! One-shot exports for the reports page: a daily series for the chosen
//! metric plus summary statistics, rendered either as CSV (with the
//! trailing summary block) or as a titled text report with a summary
//! table and a detail table. Exports are never re-imported.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

/// The three report types the page offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMetric {
    Revenue,
    Sales,
    Customers,
}

impl ReportMetric {
    /// Display label, used as the report title and CSV column header.
    pub fn label(&self) -> &'static str {
        match self {
            ReportMetric::Revenue => "Revenue Report",
            ReportMetric::Sales => "Sales Report",
            ReportMetric::Customers => "Customer Report",
        }
    }

    /// Fixed change-versus-last-period percentage for this metric.
    pub fn change(&self) -> f64 {
        match self {
            ReportMetric::Revenue => 12.5,
            ReportMetric::Sales => 8.3,
            ReportMetric::Customers => 15.7,
        }
    }

    fn value_of(&self, point: &ReportPoint) -> u64 {
        match self {
            ReportMetric::Revenue => point.revenue,
            ReportMetric::Sales => point.sales,
            ReportMetric::Customers => point.customers,
        }
    }
}

/// One day of report data, carrying all three metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportPoint {
    /// Short display date, e.g. "Jan 5".
    pub date: String,
    pub revenue: u64,
    pub sales: u64,
    pub customers: u64,
}

/// Daily report series for the trailing `days` days, oldest first.
pub fn report_series<G: Rng>(rng: &mut G, days: usize, today: DateTime<Utc>) -> Vec<ReportPoint> {
    (0..days)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset as i64);
            ReportPoint {
                date: date.format("%b %-d").to_string(),
                revenue: rng.gen_range(10000..25000),
                sales: rng.gen_range(20..70),
                customers: rng.gen_range(10..40),
            }
        })
        .collect()
}

/// Summary statistics over one metric of a series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryStats {
    pub total: u64,
    pub average: u64,
    /// Percent change versus the previous period.
    pub change: f64,
}

/// Total, average, and fixed period-over-period change for `metric`.
pub fn summarize(series: &[ReportPoint], metric: ReportMetric) -> SummaryStats {
    let total: u64 = series.iter().map(|p| metric.value_of(p)).sum();
    let average = if series.is_empty() {
        0
    } else {
        total / series.len() as u64
    };

    SummaryStats {
        total,
        average,
        change: metric.change(),
    }
}

fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Render the series as CSV: a `Date,<metric>,Notes` header, one row per
/// day, a blank row, then the summary block.
pub fn to_csv(series: &[ReportPoint], metric: ReportMetric) -> String {
    let label = metric.label();
    let stats = summarize(series, metric);

    let mut lines = Vec::with_capacity(series.len() + 6);
    lines.push(format!("Date,{},Notes", csv_field(label)));
    for point in series {
        lines.push(format!(
            "{},{},{}",
            csv_field(&point.date),
            metric.value_of(point),
            csv_field(&format!("{} data for {}", label, point.date))
        ));
    }
    lines.push(String::new());
    lines.push("Summary Statistics".to_string());
    lines.push(format!("Total,{}", stats.total));
    lines.push(format!("Average,{}", stats.average));
    lines.push(format!("Change from last period,+{}%", stats.change));

    lines.join("\n")
}

/// Render a titled plain-text report: a summary table followed by the
/// per-day detail table.
pub fn render_report(
    series: &[ReportPoint],
    metric: ReportMetric,
    generated: DateTime<Utc>,
) -> String {
    let stats = summarize(series, metric);
    let mut out = String::new();

    out.push_str(metric.label());
    out.push('\n');
    out.push_str(&format!("Generated: {}\n\n", generated.format("%Y-%m-%d")));

    out.push_str("Summary\n");
    out.push_str(&format!("  {:<24} {}\n", "Total", stats.total));
    out.push_str(&format!("  {:<24} {}\n", "Average", stats.average));
    out.push_str(&format!(
        "  {:<24} +{}%\n\n",
        "Change from last period", stats.change
    ));

    out.push_str(&format!("{:<12} {}\n", "Date", "Value"));
    for point in series {
        out.push_str(&format!("{:<12} {}\n", point.date, metric.value_of(point)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn series(days: usize) -> Vec<ReportPoint> {
        let mut rng = StdRng::seed_from_u64(41);
        report_series(&mut rng, days, Utc::now())
    }

    #[test]
    fn series_has_one_point_per_day() {
        for days in [7, 30, 90] {
            assert_eq!(series(days).len(), days);
        }
    }

    #[test]
    fn summary_totals_and_averages() {
        let points = series(30);
        let stats = summarize(&points, ReportMetric::Revenue);

        let total: u64 = points.iter().map(|p| p.revenue).sum();
        assert_eq!(stats.total, total);
        assert_eq!(stats.average, total / 30);
        assert_eq!(stats.change, 12.5);
    }

    #[test]
    fn csv_has_header_rows_and_summary_block() {
        let points = series(7);
        let csv = to_csv(&points, ReportMetric::Sales);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "Date,Sales Report,Notes");
        // 1 header + 7 rows + blank + 4 summary lines.
        assert_eq!(lines.len(), 13);
        assert_eq!(lines[8], "");
        assert_eq!(lines[9], "Summary Statistics");
        assert!(lines[12].starts_with("Change from last period,+8.3%"));
    }

    #[test]
    fn csv_rows_carry_per_day_notes() {
        let points = series(7);
        let csv = to_csv(&points, ReportMetric::Customers);
        assert!(csv.contains(&format!(
            "Customer Report data for {}",
            points[0].date
        )));
    }

    #[test]
    fn csv_fields_with_commas_are_quoted() {
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(csv_field("plain"), "plain");
    }

    #[test]
    fn text_report_is_titled_with_summary_and_detail() {
        let points = series(7);
        let report = render_report(&points, ReportMetric::Revenue, Utc::now());

        assert!(report.starts_with("Revenue Report\n"));
        assert!(report.contains("Summary\n"));
        assert!(report.contains("Change from last period"));
        assert!(report.contains(&points[6].date));
    }

    #[test]
    fn empty_series_summarizes_to_zero() {
        let stats = summarize(&[], ReportMetric::Sales);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.average, 0);
    }
}
