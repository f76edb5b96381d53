//! # Dashboard Page
//!
//! The sales dashboard: summary cards (total sales, profit, growth, top
//! category) and a per-group bar chart over the selected aggregation
//! window. The figures come from the deterministic sample series so the
//! dashboard renders the same numbers every run.

use cafe_client::{ProductGroup, SalesPeriod, SalesReport, format_usd};
use dioxus::prelude::*;

use crate::actions;
use crate::state::APP_STATE;

/// Sales dashboard page
#[component]
pub fn DashboardPage() -> Element {
    let period = APP_STATE.read().sales_period;
    let report = SalesReport::sample(period);

    let total_sales = report.total_sales();
    let total_profit = report.total_profit();
    let growth = report.growth_rate();
    let top_category = report
        .top_category()
        .map(|g| g.display_name().to_string())
        .unwrap_or_else(|| "N/A".to_string());
    let category_totals = report.category_totals();

    rsx! {
        div {
            class: "dashboard-page",

            // Period selector
            div {
                class: "dashboard-header",
                h1 { class: "page-title", "Sales Dashboard" }
                div {
                    class: "period-selector",
                    for p in SalesPeriod::all() {
                        button {
                            key: "{p.display_name()}",
                            class: if *p == period { "btn btn-tab btn-tab-active" } else { "btn btn-tab" },
                            onclick: {
                                let p = *p;
                                move |_| actions::set_sales_period(p)
                            },
                            "{p.display_name()}"
                        }
                    }
                }
            }

            // Summary cards
            div {
                class: "summary-cards",
                SummaryCard {
                    title: "Total Sales",
                    value: format_usd(total_sales),
                    icon: "💰",
                }
                SummaryCard {
                    title: "Profit",
                    value: format_usd(total_profit),
                    icon: "📈",
                }
                SummaryCard {
                    title: "Growth",
                    value: format!("{:+.1}%", growth),
                    icon: "🚀",
                }
                SummaryCard {
                    title: "Top Category",
                    value: top_category,
                    icon: "🏆",
                }
            }

            // Per-group revenue bars
            div {
                class: "chart-card",
                h2 { class: "chart-title", "Revenue by Category" }
                CategoryBars { totals: category_totals }
            }

            // Trend chart for the active group
            div {
                class: "chart-card",
                h2 { class: "chart-title", "Sales Trend" }
                TrendChart { report }
            }
        }
    }
}

// ============================================================================
// Summary Card
// ============================================================================

#[component]
fn SummaryCard(title: &'static str, value: String, icon: &'static str) -> Element {
    rsx! {
        div {
            class: "summary-card",
            span { class: "summary-card-icon", "{icon}" }
            div {
                class: "summary-card-body",
                span { class: "summary-card-title", "{title}" }
                span { class: "summary-card-value", "{value}" }
            }
        }
    }
}

// ============================================================================
// Charts
// ============================================================================

/// Horizontal bars comparing group totals
#[component]
fn CategoryBars(totals: Vec<(ProductGroup, f64)>) -> Element {
    let max = totals.iter().map(|(_, t)| *t).fold(0.0_f64, f64::max);

    rsx! {
        div {
            class: "category-bars",
            for (group, total) in totals.iter() {
                {
                    let name = group.display_name();
                    let width = bar_percent(*total, max);
                    let amount = format_usd(*total);
                    rsx! {
                        div {
                            key: "{name}",
                            class: "category-bar-row",
                            span { class: "category-bar-label", "{name}" }
                            div {
                                class: "category-bar-track",
                                div {
                                    class: "category-bar-fill",
                                    style: "width: {width}%;",
                                }
                            }
                            span { class: "category-bar-value", "{amount}" }
                        }
                    }
                }
            }
        }
    }
}

/// Vertical bars of the sample series, one column per point, summed
/// across groups
#[component]
fn TrendChart(report: SalesReport) -> Element {
    let points = combined_trend(&report);
    let max = points.iter().map(|(_, t)| *t).fold(0.0_f64, f64::max);

    rsx! {
        div {
            class: "trend-chart",
            for (label, total) in points.iter() {
                {
                    let height = bar_percent(*total, max);
                    let amount = format_usd(*total);
                    rsx! {
                        div {
                            key: "{label}",
                            class: "trend-column",
                            title: "{label}: {amount}",
                            div {
                                class: "trend-bar",
                                style: "height: {height}%;",
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Sum the group series into one point-per-label trend
fn combined_trend(report: &SalesReport) -> Vec<(String, f64)> {
    let count = report.period.point_count();
    (0..count)
        .map(|i| {
            let total = report
                .series
                .iter()
                .filter_map(|(_, points)| points.get(i))
                .map(|p| p.total)
                .sum();
            (report.period.label(i), total)
        })
        .collect()
}

/// Bar size as a percentage of the largest value
fn bar_percent(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        0.0
    } else {
        (value / max * 100.0).clamp(0.0, 100.0)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_percent_bounds() {
        assert_eq!(bar_percent(50.0, 100.0), 50.0);
        assert_eq!(bar_percent(0.0, 100.0), 0.0);
        assert_eq!(bar_percent(10.0, 0.0), 0.0);
        assert_eq!(bar_percent(200.0, 100.0), 100.0);
    }

    #[test]
    fn test_combined_trend_has_one_point_per_label() {
        let report = SalesReport::sample(SalesPeriod::Yearly);
        let trend = combined_trend(&report);
        assert_eq!(trend.len(), 12);
        assert_eq!(trend[0].0, "Month 1");
        assert!(trend.iter().all(|(_, total)| *total > 0.0));
    }
}
