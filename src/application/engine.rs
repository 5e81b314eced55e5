use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::domain::analytics::breakdowns::{
    HourBucket, OrderTypePerformance, SessionPerformance, SymbolPerformance, hour_buckets,
    order_type_performance, session_performance, symbol_performance,
};
use crate::domain::analytics::fees::FeeBreakdown;
use crate::domain::analytics::filter::{FilterState, filter_trades, latest_trade_date};
use crate::domain::analytics::series::{
    DailyPnl, EquityPoint, PlotDomain, daily_performance, equity_series, max_drawdown, plot_domain,
};
use crate::domain::analytics::summary::SummaryMetrics;
use crate::domain::trading::types::Trade;

/// Every derived view the presentation layer renders for one filter state.
/// Plain data: no formatting, no path stamping.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsSnapshot {
    pub filtered_trades: Vec<Trade>,
    pub metrics: SummaryMetrics,
    pub daily_performance: Vec<DailyPnl>,
    pub equity_series: Vec<EquityPoint>,
    pub plot_domain: PlotDomain,
    pub max_drawdown: Decimal,
    pub fee_breakdown: FeeBreakdown,
    pub order_type_performance: Vec<OrderTypePerformance>,
    pub session_performance: Vec<SessionPerformance>,
    pub symbol_performance: Vec<SymbolPerformance>,
    pub hour_buckets: Vec<HourBucket>,
}

/// Owns the full journal and derives per-filter snapshots from it. The
/// journal is loaded once and never mutated; every snapshot is a pure
/// function of (journal, filter state).
pub struct AnalyticsEngine {
    trades: Vec<Trade>,
}

impl AnalyticsEngine {
    pub fn new(trades: Vec<Trade>) -> Self {
        Self { trades }
    }

    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    /// Distinct symbols in the order they first appear, for the symbol
    /// selector.
    pub fn symbols(&self) -> Vec<String> {
        let mut symbols: Vec<String> = Vec::new();
        for trade in &self.trades {
            if !symbols.contains(&trade.symbol) {
                symbols.push(trade.symbol.clone());
            }
        }
        symbols
    }

    pub fn snapshot(&self, filter: &FilterState) -> AnalyticsSnapshot {
        let filtered_trades = match latest_trade_date(&self.trades) {
            Some(reference) => filter_trades(&self.trades, filter, reference),
            None => Vec::new(),
        };
        debug!(
            total = self.trades.len(),
            filtered = filtered_trades.len(),
            range = filter.range.token(),
            "derived filtered journal"
        );

        let metrics = SummaryMetrics::calculate(&filtered_trades);
        let daily = daily_performance(&filtered_trades);
        let series = equity_series(&daily);
        let domain = plot_domain(&series);
        let drawdown = max_drawdown(&series);
        let fee_breakdown = FeeBreakdown::calculate(&filtered_trades);
        let order_types = order_type_performance(&filtered_trades);
        let sessions = session_performance(&filtered_trades);
        let symbols = symbol_performance(&filtered_trades);
        let buckets = hour_buckets(&filtered_trades);

        AnalyticsSnapshot {
            filtered_trades,
            metrics,
            daily_performance: daily,
            equity_series: series,
            plot_domain: domain,
            max_drawdown: drawdown,
            fee_breakdown,
            order_type_performance: order_types,
            session_performance: sessions,
            symbol_performance: symbols,
            hour_buckets: buckets,
        }
    }
}
