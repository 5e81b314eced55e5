use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use std::fmt::Write;

use crate::application::engine::AnalyticsSnapshot;
use crate::domain::analytics::filter::FilterState;
use crate::interfaces::format;
use crate::interfaces::view_models::analytics_view_model::AnalyticsViewModel;

const HEAT_STRIP_WIDTH: usize = 12;

/// Renders a snapshot as text panels, the terminal stand-in for the
/// browser dashboard layout.
pub fn render(snapshot: &AnalyticsSnapshot, filter: &FilterState) -> String {
    let mut out = String::new();
    let metrics = &snapshot.metrics;

    let _ = writeln!(out, "Deriverse | Trading analytics");
    let _ = writeln!(
        out,
        "{}",
        AnalyticsViewModel::filter_summary(snapshot, filter)
    );
    let _ = writeln!(out);

    if snapshot.filtered_trades.is_empty() {
        let _ = writeln!(out, "No trades match the current filters.");
        return out;
    }

    let _ = writeln!(
        out,
        "Net PnL        {:>12}   gross {} - fees {}",
        format::signed_currency(metrics.net_pnl),
        format::currency(metrics.gross_pnl),
        format::currency(metrics.total_fees),
    );
    let _ = writeln!(
        out,
        "Win rate       {:>12}   profit factor {:.2} - expectancy {}",
        format::percent(metrics.win_rate),
        metrics.profit_factor,
        format::signed_currency(Decimal::from_f64(metrics.expectancy).unwrap_or(Decimal::ZERO)),
    );
    let (long_pct, short_pct) = AnalyticsViewModel::side_split(metrics);
    let _ = writeln!(
        out,
        "Positioning    {:>12}   {} long / {} short ({:.0}% / {:.0}%), bias {:.2}x",
        format!("{} trades", metrics.total_trades),
        metrics.long_trades,
        metrics.short_trades,
        long_pct,
        short_pct,
        metrics.long_short_ratio,
    );
    let _ = writeln!(
        out,
        "Volume         {:>12}   fee rate {} - avg hold {:.0} min",
        format::compact(metrics.total_volume),
        format::percent(metrics.fee_rate),
        metrics.avg_duration_mins,
    );
    let _ = writeln!(
        out,
        "Extremes       {:>12}   largest loss {} - avg win {} / avg loss {}",
        format::signed_currency(metrics.largest_gain),
        format::currency(metrics.largest_loss),
        format::currency(metrics.avg_win),
        format::currency(metrics.avg_loss),
    );

    let _ = writeln!(out);
    let _ = writeln!(out, "Equity curve ({} days)", snapshot.equity_series.len());
    if let Some(last) = snapshot.equity_series.last() {
        let _ = writeln!(
            out,
            "  cumulative {}  max drawdown {}",
            format::signed_currency(last.cumulative),
            format::currency(snapshot.max_drawdown),
        );
    }
    for point in &snapshot.equity_series {
        let _ = writeln!(
            out,
            "  {}  day {:>10}  total {:>10}  dd {:>10}",
            point.date.format("%Y-%m-%d"),
            format::signed_currency(point.pnl),
            format::signed_currency(point.cumulative),
            format::currency(point.drawdown),
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Fee composition ({})",
        format::currency(snapshot.fee_breakdown.total)
    );
    for slice in snapshot.fee_breakdown.slices() {
        let _ = writeln!(
            out,
            "  {:<8} {:>10}  {:>7}",
            slice.bucket.to_string(),
            format::currency(slice.value),
            format::percent(slice.share),
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Order types");
    for row in &snapshot.order_type_performance {
        let _ = writeln!(
            out,
            "  {:<8} {:>10}  {:>3} trades  win {:>7}",
            row.order_type.to_string(),
            format::signed_currency(row.pnl),
            row.trades,
            format::percent(row.win_rate),
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Sessions");
    for row in &snapshot.session_performance {
        let _ = writeln!(
            out,
            "  {:<8} {:>10}  {:>3} trades",
            row.session.to_string(),
            format::signed_currency(row.pnl),
            row.trades,
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Symbols");
    for row in &snapshot.symbol_performance {
        let _ = writeln!(
            out,
            "  {:<10} {:>10}  {:>3} trades",
            row.symbol,
            format::signed_currency(row.pnl),
            row.trades,
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Entry hours (UTC)");
    for bucket in &snapshot.hour_buckets {
        let filled = (bucket.intensity * HEAT_STRIP_WIDTH as f64).round() as usize;
        let _ = writeln!(
            out,
            "  {}  {:<width$}  {:>10}",
            bucket.label,
            "#".repeat(filled.min(HEAT_STRIP_WIDTH)),
            format::signed_currency(bucket.pnl),
            width = HEAT_STRIP_WIDTH,
        );
    }

    out
}
