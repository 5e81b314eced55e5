use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::trading::types::Trade;

/// Net PnL realized on one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyPnl {
    pub date: NaiveDate,
    pub pnl: Decimal,
}

/// One point of the cumulative equity scan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquityPoint {
    pub date: NaiveDate,
    /// That day's net PnL.
    pub pnl: Decimal,
    /// Running total up to and including this day.
    pub cumulative: Decimal,
    /// Cumulative minus the running peak, always <= 0.
    pub drawdown: Decimal,
}

/// Value range both equity lines are plotted against. Zero is always
/// included so the baseline stays visible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotDomain {
    pub min: Decimal,
    pub max: Decimal,
}

/// Buckets trades by calendar day and sums net PnL per bucket, ascending by
/// date. Trades sharing a date collapse into one point.
pub fn daily_performance(trades: &[Trade]) -> Vec<DailyPnl> {
    let mut days: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for trade in trades {
        *days.entry(trade.date).or_insert(Decimal::ZERO) += trade.net_pnl();
    }
    days.into_iter()
        .map(|(date, pnl)| DailyPnl { date, pnl })
        .collect()
}

/// Scans the daily sequence in date order, tracking the cumulative total and
/// the running peak (floored at zero).
pub fn equity_series(daily: &[DailyPnl]) -> Vec<EquityPoint> {
    let mut cumulative = Decimal::ZERO;
    let mut peak = Decimal::ZERO;
    daily
        .iter()
        .map(|day| {
            cumulative += day.pnl;
            peak = peak.max(cumulative);
            EquityPoint {
                date: day.date,
                pnl: day.pnl,
                cumulative,
                drawdown: cumulative - peak,
            }
        })
        .collect()
}

/// Deepest drawdown over the period, 0 for an empty series.
pub fn max_drawdown(series: &[EquityPoint]) -> Decimal {
    series
        .iter()
        .map(|point| point.drawdown)
        .min()
        .unwrap_or(Decimal::ZERO)
}

/// Min/max across every cumulative and drawdown value, with 0 forced in.
pub fn plot_domain(series: &[EquityPoint]) -> PlotDomain {
    let mut min = Decimal::ZERO;
    let mut max = Decimal::ZERO;
    for point in series {
        min = min.min(point.cumulative).min(point.drawdown);
        max = max.max(point.cumulative).max(point.drawdown);
    }
    PlotDomain { min, max }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::trading::types::{FeeType, OrderType, Session, Side};
    use rust_decimal_macros::dec;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, d).unwrap()
    }

    fn trade(date: NaiveDate, pnl: Decimal, fees: Decimal, funding: Decimal) -> Trade {
        Trade {
            id: "DV-0000".to_string(),
            symbol: "BTC-PERP".to_string(),
            side: Side::Long,
            order_type: OrderType::Market,
            entry_price: dec!(60000),
            exit_price: dec!(60500),
            quantity: dec!(1),
            pnl,
            fees,
            fee_type: FeeType::Taker,
            funding,
            duration_mins: 30,
            date,
            entry_hour: 3,
            session: Session::Asia,
            tags: vec![],
            note: String::new(),
            volume: dec!(60000),
        }
    }

    #[test]
    fn test_daily_performance_collapses_same_day_and_sorts() {
        let trades = vec![
            trade(day(12), dec!(100), dec!(5), dec!(1)),
            trade(day(3), dec!(-40), dec!(4), dec!(0)),
            trade(day(12), dec!(60), dec!(6), dec!(2)),
        ];
        let daily = daily_performance(&trades);
        assert_eq!(daily.len(), 2);
        assert_eq!(daily[0].date, day(3));
        assert_eq!(daily[0].pnl, dec!(-44));
        assert_eq!(daily[1].date, day(12));
        // (100 - 5 - 1) + (60 - 6 - 2)
        assert_eq!(daily[1].pnl, dec!(146));
    }

    #[test]
    fn test_equity_series_tracks_cumulative_and_peak() {
        let daily = vec![
            DailyPnl { date: day(1), pnl: dec!(100) },
            DailyPnl { date: day(2), pnl: dec!(-60) },
            DailyPnl { date: day(3), pnl: dec!(20) },
            DailyPnl { date: day(4), pnl: dec!(80) },
        ];
        let series = equity_series(&daily);

        let cumulative: Vec<Decimal> = series.iter().map(|p| p.cumulative).collect();
        assert_eq!(cumulative, vec![dec!(100), dec!(40), dec!(60), dec!(140)]);

        let drawdowns: Vec<Decimal> = series.iter().map(|p| p.drawdown).collect();
        assert_eq!(drawdowns, vec![dec!(0), dec!(-60), dec!(-40), dec!(0)]);
        assert_eq!(max_drawdown(&series), dec!(-60));
    }

    #[test]
    fn test_peak_floors_at_zero_for_losing_starts() {
        let daily = vec![
            DailyPnl { date: day(1), pnl: dec!(-50) },
            DailyPnl { date: day(2), pnl: dec!(-30) },
        ];
        let series = equity_series(&daily);
        // peak never drops below zero, so drawdown equals the cumulative loss
        assert_eq!(series[0].drawdown, dec!(-50));
        assert_eq!(series[1].drawdown, dec!(-80));
        assert_eq!(max_drawdown(&series), dec!(-80));
    }

    #[test]
    fn test_empty_series_is_flat_zero() {
        assert!(equity_series(&[]).is_empty());
        assert_eq!(max_drawdown(&[]), Decimal::ZERO);
        let domain = plot_domain(&[]);
        assert_eq!(domain.min, Decimal::ZERO);
        assert_eq!(domain.max, Decimal::ZERO);
    }

    #[test]
    fn test_plot_domain_spans_both_lines_and_zero() {
        let daily = vec![
            DailyPnl { date: day(1), pnl: dec!(200) },
            DailyPnl { date: day(2), pnl: dec!(-350) },
        ];
        let series = equity_series(&daily);
        let domain = plot_domain(&series);
        // cumulative dips to -150, drawdown to -350, peak cumulative is 200
        assert_eq!(domain.min, dec!(-350));
        assert_eq!(domain.max, dec!(200));

        let all_positive = equity_series(&[DailyPnl { date: day(1), pnl: dec!(75) }]);
        let domain = plot_domain(&all_positive);
        assert_eq!(domain.min, Decimal::ZERO);
        assert_eq!(domain.max, dec!(75));
    }
}
