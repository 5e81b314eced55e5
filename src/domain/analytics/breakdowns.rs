use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use std::collections::HashMap;

use crate::domain::trading::types::{OrderType, Session, Trade};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderTypePerformance {
    pub order_type: OrderType,
    pub pnl: Decimal,
    pub trades: usize,
    pub win_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionPerformance {
    pub session: Session,
    pub pnl: Decimal,
    pub trades: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymbolPerformance {
    pub symbol: String,
    pub pnl: Decimal,
    pub trades: usize,
}

/// One fixed 4-hour slot of the entry-time heat strip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourBucket {
    pub label: &'static str,
    pub pnl: Decimal,
    /// |pnl| normalized against the busiest bucket, in 0..1.
    pub intensity: f64,
}

pub const HOUR_BUCKET_LABELS: [&str; 6] = ["00-04", "04-08", "08-12", "12-16", "16-20", "20-24"];

/// Groups by order type; rows sorted by total PnL, best first.
pub fn order_type_performance(trades: &[Trade]) -> Vec<OrderTypePerformance> {
    let mut groups: HashMap<OrderType, (Decimal, usize, usize)> = HashMap::new();
    for trade in trades {
        let entry = groups
            .entry(trade.order_type)
            .or_insert((Decimal::ZERO, 0, 0));
        entry.0 += trade.pnl;
        entry.1 += 1;
        if trade.is_winner() {
            entry.2 += 1;
        }
    }

    let mut rows: Vec<OrderTypePerformance> = groups
        .into_iter()
        .map(|(order_type, (pnl, trades, wins))| OrderTypePerformance {
            order_type,
            pnl,
            trades,
            win_rate: wins as f64 / trades as f64,
        })
        .collect();
    rows.sort_by(|a, b| b.pnl.cmp(&a.pnl));
    rows
}

/// Groups by session, preserving the order sessions first appear in.
pub fn session_performance(trades: &[Trade]) -> Vec<SessionPerformance> {
    let mut rows: Vec<SessionPerformance> = Vec::new();
    for trade in trades {
        match rows.iter_mut().find(|row| row.session == trade.session) {
            Some(row) => {
                row.pnl += trade.pnl;
                row.trades += 1;
            }
            None => rows.push(SessionPerformance {
                session: trade.session,
                pnl: trade.pnl,
                trades: 1,
            }),
        }
    }
    rows
}

/// Groups by symbol; rows sorted by total PnL, best first.
pub fn symbol_performance(trades: &[Trade]) -> Vec<SymbolPerformance> {
    let mut groups: HashMap<&str, (Decimal, usize)> = HashMap::new();
    for trade in trades {
        let entry = groups
            .entry(trade.symbol.as_str())
            .or_insert((Decimal::ZERO, 0));
        entry.0 += trade.pnl;
        entry.1 += 1;
    }

    let mut rows: Vec<SymbolPerformance> = groups
        .into_iter()
        .map(|(symbol, (pnl, trades))| SymbolPerformance {
            symbol: symbol.to_string(),
            pnl,
            trades,
        })
        .collect();
    rows.sort_by(|a, b| b.pnl.cmp(&a.pnl));
    rows
}

/// Sums PnL into six fixed 4-hour buckets keyed by entry hour. The bucket
/// index clamps at 5 so an out-of-range hour cannot index past the strip.
pub fn hour_buckets(trades: &[Trade]) -> Vec<HourBucket> {
    let mut totals = [Decimal::ZERO; 6];
    for trade in trades {
        let index = usize::min(5, usize::from(trade.entry_hour) / 4);
        totals[index] += trade.pnl;
    }

    let max_abs = totals
        .iter()
        .map(|pnl| pnl.abs())
        .max()
        .unwrap_or(Decimal::ZERO)
        .max(Decimal::ONE);

    HOUR_BUCKET_LABELS
        .into_iter()
        .zip(totals)
        .map(|(label, pnl)| HourBucket {
            label,
            pnl,
            intensity: (pnl.abs() / max_abs).to_f64().unwrap_or(0.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::trading::types::{FeeType, Side};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn trade(
        order_type: OrderType,
        session: Session,
        symbol: &str,
        entry_hour: u8,
        pnl: Decimal,
    ) -> Trade {
        Trade {
            id: "DV-0000".to_string(),
            symbol: symbol.to_string(),
            side: Side::Long,
            order_type,
            entry_price: dec!(100),
            exit_price: dec!(101),
            quantity: dec!(10),
            pnl,
            fees: dec!(2),
            fee_type: FeeType::Taker,
            funding: dec!(0),
            duration_mins: 45,
            date: NaiveDate::from_ymd_opt(2026, 1, 20).unwrap(),
            entry_hour,
            session,
            tags: vec![],
            note: String::new(),
            volume: dec!(1000),
        }
    }

    #[test]
    fn test_order_type_rows_sorted_by_pnl_with_win_rate() {
        let trades = vec![
            trade(OrderType::Limit, Session::Asia, "BTC-PERP", 2, dec!(100)),
            trade(OrderType::Limit, Session::Asia, "BTC-PERP", 3, dec!(-40)),
            trade(OrderType::Market, Session::Asia, "BTC-PERP", 4, dec!(300)),
            trade(OrderType::Stop, Session::Asia, "BTC-PERP", 5, dec!(-10)),
        ];
        let rows = order_type_performance(&trades);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].order_type, OrderType::Market);
        assert_eq!(rows[0].pnl, dec!(300));
        assert_eq!(rows[0].win_rate, 1.0);
        assert_eq!(rows[1].order_type, OrderType::Limit);
        assert_eq!(rows[1].trades, 2);
        assert!((rows[1].win_rate - 0.5).abs() < 1e-9);
        assert_eq!(rows[2].order_type, OrderType::Stop);
        assert_eq!(rows[2].win_rate, 0.0);
    }

    #[test]
    fn test_session_rows_preserve_encounter_order() {
        let trades = vec![
            trade(OrderType::Limit, Session::Us, "ETH-PERP", 18, dec!(50)),
            trade(OrderType::Limit, Session::Asia, "ETH-PERP", 2, dec!(-20)),
            trade(OrderType::Limit, Session::Us, "ETH-PERP", 21, dec!(30)),
            trade(OrderType::Limit, Session::Europe, "ETH-PERP", 9, dec!(10)),
        ];
        let rows = session_performance(&trades);
        let order: Vec<Session> = rows.iter().map(|r| r.session).collect();
        assert_eq!(order, vec![Session::Us, Session::Asia, Session::Europe]);
        assert_eq!(rows[0].pnl, dec!(80));
        assert_eq!(rows[0].trades, 2);
    }

    #[test]
    fn test_symbol_rows_sorted_by_pnl() {
        let trades = vec![
            trade(OrderType::Limit, Session::Asia, "BTC-PERP", 1, dec!(-120)),
            trade(OrderType::Limit, Session::Asia, "ETH-PERP", 1, dec!(90)),
            trade(OrderType::Limit, Session::Asia, "SOL-PERP", 1, dec!(400)),
            trade(OrderType::Limit, Session::Asia, "ETH-PERP", 1, dec!(60)),
        ];
        let rows = symbol_performance(&trades);
        let symbols: Vec<&str> = rows.iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["SOL-PERP", "ETH-PERP", "BTC-PERP"]);
        assert_eq!(rows[1].pnl, dec!(150));
        assert_eq!(rows[1].trades, 2);
    }

    #[test]
    fn test_hour_bucket_edges() {
        let trades = vec![
            trade(OrderType::Limit, Session::Asia, "BTC-PERP", 0, dec!(100)),
            trade(OrderType::Limit, Session::Us, "BTC-PERP", 23, dec!(-200)),
        ];
        let buckets = hour_buckets(&trades);
        assert_eq!(buckets.len(), 6);
        assert_eq!(buckets[0].label, "00-04");
        assert_eq!(buckets[0].pnl, dec!(100));
        assert_eq!(buckets[5].label, "20-24");
        assert_eq!(buckets[5].pnl, dec!(-200));
        // normalized against the busiest bucket
        assert!((buckets[5].intensity - 1.0).abs() < 1e-9);
        assert!((buckets[0].intensity - 0.5).abs() < 1e-9);
        assert_eq!(buckets[2].intensity, 0.0);
    }

    #[test]
    fn test_out_of_range_hour_clamps_to_last_bucket() {
        let trades = vec![trade(OrderType::Limit, Session::Us, "BTC-PERP", 24, dec!(75))];
        let buckets = hour_buckets(&trades);
        assert_eq!(buckets[5].pnl, dec!(75));
    }

    #[test]
    fn test_empty_journal_keeps_intensity_defined() {
        let buckets = hour_buckets(&[]);
        assert_eq!(buckets.len(), 6);
        for bucket in buckets {
            assert_eq!(bucket.pnl, Decimal::ZERO);
            assert_eq!(bucket.intensity, 0.0);
        }
    }

    #[test]
    fn test_sub_unit_pnl_normalizes_against_floor_of_one() {
        let trades = vec![trade(OrderType::Limit, Session::Asia, "BTC-PERP", 1, dec!(0.5))];
        let buckets = hour_buckets(&trades);
        // max |pnl| is below the floor, so the floor of 1 is the denominator
        assert!((buckets[0].intensity - 0.5).abs() < 1e-9);
    }
}
