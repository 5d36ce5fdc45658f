//! Dashboard metrics - chart series and KPI cards.
//!
//! These feed the dashboard's charts and counters. Random series take an
//! injected `Rng` like the domain seeders; the pie segments and KPI set
//! are fixed values.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::Serialize;

/// One day of the revenue/users line chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    /// Short display date, e.g. "Jan 5".
    pub date: String,
    pub revenue: u64,
    pub users: u64,
}

/// Daily revenue/users series for the trailing `days` days, oldest first.
pub fn line_series<G: Rng>(rng: &mut G, days: usize, today: DateTime<Utc>) -> Vec<SeriesPoint> {
    (0..days)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset as i64);
            SeriesPoint {
                date: date.format("%b %-d").to_string(),
                revenue: rng.gen_range(15000..20000),
                users: rng.gen_range(1000..1500),
            }
        })
        .collect()
}

/// Per-product sales/profit bars.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBar {
    pub name: String,
    pub sales: u64,
    pub profit: u64,
}

const CATEGORIES: &[&str] = &["Product A", "Product B", "Product C", "Product D", "Product E"];

/// Sales/profit bars for the five product categories.
pub fn bar_series<G: Rng>(rng: &mut G) -> Vec<CategoryBar> {
    CATEGORIES
        .iter()
        .map(|name| CategoryBar {
            name: name.to_string(),
            sales: rng.gen_range(2000..10000),
            profit: rng.gen_range(1000..4000),
        })
        .collect()
}

/// One slice of the device-split pie.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSegment {
    pub name: &'static str,
    pub value: u64,
    pub color: &'static str,
}

/// The fixed device-split segments.
pub fn pie_segments() -> Vec<PieSegment> {
    vec![
        PieSegment { name: "Desktop", value: 4500, color: "#3b82f6" },
        PieSegment { name: "Mobile", value: 3200, color: "#8b5cf6" },
        PieSegment { name: "Tablet", value: 1800, color: "#ec4899" },
        PieSegment { name: "Other", value: 500, color: "#f59e0b" },
    ]
}

/// One KPI card: a headline value plus period-over-period change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kpi {
    pub label: &'static str,
    pub value: f64,
    /// Percent change versus the previous period; may be negative.
    pub change: f64,
    pub prefix: &'static str,
    pub suffix: &'static str,
}

/// The four dashboard KPI cards.
pub fn kpi_cards() -> Vec<Kpi> {
    vec![
        Kpi {
            label: "Total Revenue",
            value: 45231.0,
            change: 12.5,
            prefix: "$",
            suffix: "",
        },
        Kpi {
            label: "Active Users",
            value: 8549.0,
            change: 8.2,
            prefix: "",
            suffix: "",
        },
        Kpi {
            label: "Conversions",
            value: 1423.0,
            change: -3.4,
            prefix: "",
            suffix: "",
        },
        Kpi {
            label: "Growth Rate",
            value: 23.8,
            change: 5.1,
            prefix: "",
            suffix: "%",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn line_series_covers_the_window_oldest_first() {
        let mut rng = StdRng::seed_from_u64(31);
        let today = Utc::now();
        let series = line_series(&mut rng, 30, today);

        assert_eq!(series.len(), 30);
        assert_eq!(series.last().unwrap().date, today.format("%b %-d").to_string());
        for point in &series {
            assert!((15000..20000).contains(&point.revenue));
            assert!((1000..1500).contains(&point.users));
        }
    }

    #[test]
    fn bar_series_has_one_bar_per_category() {
        let mut rng = StdRng::seed_from_u64(32);
        let bars = bar_series(&mut rng);
        assert_eq!(bars.len(), 5);
        assert_eq!(bars[0].name, "Product A");
    }

    #[test]
    fn pie_segments_are_fixed() {
        let segments = pie_segments();
        let total: u64 = segments.iter().map(|s| s.value).sum();
        assert_eq!(total, 10000);
    }

    #[test]
    fn kpi_cards_include_a_negative_change() {
        let cards = kpi_cards();
        assert_eq!(cards.len(), 4);
        assert!(cards.iter().any(|k| k.change < 0.0));
    }
}
