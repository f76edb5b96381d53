//! Dashboard sales series
//!
//! Sample revenue series for the dashboard charts. No sales backend
//! exists yet, so every group/period pair gets a deterministic series in
//! a realistic band for that group. Being deterministic keeps the charts
//! stable across reloads and the summary numbers testable.
//!
//! Profit is modeled as a flat 30% margin on revenue.

use serde::{Deserialize, Serialize};

use crate::endpoints::ProductGroup;

/// Assumed profit margin on revenue
pub const PROFIT_MARGIN: f64 = 0.3;

// ============================================================================
// SalesPeriod
// ============================================================================

/// Aggregation window the dashboard charts over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SalesPeriod {
    /// One point per hour of the day
    #[default]
    Daily,
    /// One point per day of the month
    Monthly,
    /// One point per month of the year
    Yearly,
}

impl SalesPeriod {
    /// How many points a series of this period has
    pub fn point_count(&self) -> usize {
        match self {
            SalesPeriod::Daily => 24,
            SalesPeriod::Monthly => 30,
            SalesPeriod::Yearly => 12,
        }
    }

    /// Axis label of the i-th point
    pub fn label(&self, index: usize) -> String {
        match self {
            SalesPeriod::Daily => format!("{}:00", index),
            SalesPeriod::Monthly => format!("Day {}", index + 1),
            SalesPeriod::Yearly => format!("Month {}", index + 1),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SalesPeriod::Daily => "Daily",
            SalesPeriod::Monthly => "Monthly",
            SalesPeriod::Yearly => "Yearly",
        }
    }

    pub fn all() -> &'static [SalesPeriod] {
        &[SalesPeriod::Daily, SalesPeriod::Monthly, SalesPeriod::Yearly]
    }
}

// ============================================================================
// Series
// ============================================================================

/// One charted point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesPoint {
    pub label: String,
    pub total: f64,
}

/// Revenue band a group's sample values stay within
fn revenue_band(group: ProductGroup, period: SalesPeriod) -> (f64, f64) {
    let (daily_min, monthly_min, yearly_min) = match group {
        ProductGroup::Espresso => (50.0, 500.0, 6000.0),
        ProductGroup::Iced => (40.0, 400.0, 5000.0),
        ProductGroup::NonCoffee => (30.0, 300.0, 4000.0),
        ProductGroup::Pastries => (35.0, 350.0, 4500.0),
    };
    // Each band spans its minimum to double the minimum
    match period {
        SalesPeriod::Daily => (daily_min, daily_min * 2.0),
        SalesPeriod::Monthly => (monthly_min, monthly_min * 2.0),
        SalesPeriod::Yearly => (yearly_min, yearly_min * 2.0),
    }
}

/// Deterministic sample series for one group and period
pub fn sample_series(group: ProductGroup, period: SalesPeriod) -> Vec<SalesPoint> {
    let (min, max) = revenue_band(group, period);
    let mut state: u64 = 0x9E37_79B9
        ^ ((group as u64 + 1) << 16)
        ^ ((period.point_count() as u64) << 32);

    (0..period.point_count())
        .map(|i| {
            // xorshift64; fixed seed keeps the series stable run to run
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let frac = (state % 10_000) as f64 / 10_000.0;
            SalesPoint {
                label: period.label(i),
                total: min + frac * (max - min),
            }
        })
        .collect()
}

// ============================================================================
// SalesReport
// ============================================================================

/// All four groups' series for one period, plus the summary numbers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesReport {
    pub period: SalesPeriod,
    pub series: Vec<(ProductGroup, Vec<SalesPoint>)>,
}

impl SalesReport {
    /// Build the sample report for a period
    pub fn sample(period: SalesPeriod) -> Self {
        Self {
            period,
            series: ProductGroup::all()
                .iter()
                .map(|g| (*g, sample_series(*g, period)))
                .collect(),
        }
    }

    /// Revenue total per group, in menu order
    pub fn category_totals(&self) -> Vec<(ProductGroup, f64)> {
        self.series
            .iter()
            .map(|(group, points)| (*group, points.iter().map(|p| p.total).sum()))
            .collect()
    }

    /// Profit total per group
    pub fn profit_totals(&self) -> Vec<(ProductGroup, f64)> {
        self.category_totals()
            .into_iter()
            .map(|(group, total)| (group, total * PROFIT_MARGIN))
            .collect()
    }

    /// Revenue across all groups
    pub fn total_sales(&self) -> f64 {
        self.category_totals().iter().map(|(_, t)| t).sum()
    }

    /// Profit across all groups
    pub fn total_profit(&self) -> f64 {
        self.total_sales() * PROFIT_MARGIN
    }

    /// The group with the highest revenue
    pub fn top_category(&self) -> Option<ProductGroup> {
        self.category_totals()
            .into_iter()
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(group, _)| group)
    }

    /// Growth versus an assumed previous period at 90% of current revenue
    pub fn growth_rate(&self) -> f64 {
        let current = self.total_sales();
        if current == 0.0 {
            return 0.0;
        }
        let previous = current * 0.9;
        (current - previous) / previous * 100.0
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_point_counts_per_period() {
        assert_eq!(sample_series(ProductGroup::Espresso, SalesPeriod::Daily).len(), 24);
        assert_eq!(sample_series(ProductGroup::Iced, SalesPeriod::Monthly).len(), 30);
        assert_eq!(sample_series(ProductGroup::Pastries, SalesPeriod::Yearly).len(), 12);
    }

    #[test]
    fn test_series_is_deterministic() {
        let a = sample_series(ProductGroup::Espresso, SalesPeriod::Daily);
        let b = sample_series(ProductGroup::Espresso, SalesPeriod::Daily);
        assert_eq!(a, b);
    }

    #[test]
    fn test_values_stay_in_band() {
        for group in ProductGroup::all() {
            for period in SalesPeriod::all() {
                let (min, max) = revenue_band(*group, *period);
                for point in sample_series(*group, *period) {
                    assert!(
                        point.total >= min && point.total <= max,
                        "{} {} point {} outside [{}, {}]",
                        group,
                        period.display_name(),
                        point.total,
                        min,
                        max
                    );
                }
            }
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(SalesPeriod::Daily.label(0), "0:00");
        assert_eq!(SalesPeriod::Daily.label(23), "23:00");
        assert_eq!(SalesPeriod::Monthly.label(0), "Day 1");
        assert_eq!(SalesPeriod::Yearly.label(11), "Month 12");
    }

    #[test]
    fn test_profit_is_thirty_percent_of_revenue() {
        let report = SalesReport::sample(SalesPeriod::Daily);
        let revenue = report.total_sales();
        let profit = report.total_profit();
        assert!((profit - revenue * 0.3).abs() < 1e-9);

        for ((_, sales), (_, profit)) in report
            .category_totals()
            .iter()
            .zip(report.profit_totals().iter())
        {
            assert!((profit - sales * 0.3).abs() < 1e-9);
        }
    }

    #[test]
    fn test_report_has_all_groups_and_a_top_category() {
        let report = SalesReport::sample(SalesPeriod::Yearly);
        assert_eq!(report.series.len(), 4);
        assert!(report.top_category().is_some());
        // 90% baseline means growth is always just over 11%
        assert!((report.growth_rate() - 100.0 / 9.0).abs() < 1e-9);
    }
}
