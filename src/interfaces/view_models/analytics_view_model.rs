use rust_decimal::prelude::ToPrimitive;

use crate::application::engine::AnalyticsSnapshot;
use crate::domain::analytics::fees::{FeeBreakdown, FeeBucket};
use crate::domain::analytics::filter::FilterState;
use crate::domain::analytics::summary::SummaryMetrics;
use crate::interfaces::chart;

/// Hex colors of the fee composition donut, one per bucket.
pub const MAKER_COLOR: &str = "#38bdf8";
pub const TAKER_COLOR: &str = "#f97316";
pub const FUNDING_COLOR: &str = "#22c55e";
/// Placeholder when no fees accrued in the filtered window.
pub const NEUTRAL_COLOR: &str = "#334155";

pub struct AnalyticsViewModel;

impl AnalyticsViewModel {
    /// "N trades - <range label>" line shown beside the filter controls.
    pub fn filter_summary(snapshot: &AnalyticsSnapshot, filter: &FilterState) -> String {
        format!(
            "{} trades - {}",
            snapshot.filtered_trades.len(),
            filter.range.label()
        )
    }

    /// Conic-gradient stop list for the fee donut, proportional to each
    /// bucket's share. Zero total collapses to the neutral placeholder.
    pub fn fee_gradient(breakdown: &FeeBreakdown) -> String {
        if breakdown.total.is_zero() {
            return format!("conic-gradient({NEUTRAL_COLOR} 0% 100%)");
        }

        let mut cursor = 0.0;
        let stops: Vec<String> = breakdown
            .slices()
            .iter()
            .map(|slice| {
                let color = match slice.bucket {
                    FeeBucket::Maker => MAKER_COLOR,
                    FeeBucket::Taker => TAKER_COLOR,
                    FeeBucket::Funding => FUNDING_COLOR,
                };
                let start = cursor;
                let end = cursor + slice.share * 100.0;
                cursor = end;
                format!("{color} {start:.2}% {end:.2}%")
            })
            .collect();
        format!("conic-gradient({})", stops.join(", "))
    }

    /// Cumulative equity line stamped into the given plot box.
    pub fn equity_path(snapshot: &AnalyticsSnapshot, width: f64, height: f64) -> String {
        let values: Vec<f64> = snapshot
            .equity_series
            .iter()
            .map(|point| point.cumulative.to_f64().unwrap_or(0.0))
            .collect();
        Self::stamp_path(snapshot, &values, width, height)
    }

    /// Drawdown line stamped into the same box and domain as the equity
    /// line, so the two overlay.
    pub fn drawdown_path(snapshot: &AnalyticsSnapshot, width: f64, height: f64) -> String {
        let values: Vec<f64> = snapshot
            .equity_series
            .iter()
            .map(|point| point.drawdown.to_f64().unwrap_or(0.0))
            .collect();
        Self::stamp_path(snapshot, &values, width, height)
    }

    /// Long/short share of the book as percentages of total trades.
    pub fn side_split(metrics: &SummaryMetrics) -> (f64, f64) {
        let total = metrics.total_trades.max(1) as f64;
        (
            metrics.long_trades as f64 / total * 100.0,
            metrics.short_trades as f64 / total * 100.0,
        )
    }

    fn stamp_path(snapshot: &AnalyticsSnapshot, values: &[f64], width: f64, height: f64) -> String {
        chart::build_line_path(
            values,
            width,
            height,
            snapshot.plot_domain.min.to_f64().unwrap_or(0.0),
            snapshot.plot_domain.max.to_f64().unwrap_or(0.0),
        )
    }
}
