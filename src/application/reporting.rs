use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::Serialize;
use std::path::Path;
use tracing::info;

use crate::domain::trading::types::Trade;

/// Flat row shape for the exported journal. Tags collapse into one
/// pipe-separated column so the file stays one row per trade.
#[derive(Debug, Serialize)]
struct JournalRow<'a> {
    id: &'a str,
    date: String,
    symbol: &'a str,
    side: String,
    order_type: String,
    session: String,
    quantity: Decimal,
    entry_price: Decimal,
    exit_price: Decimal,
    pnl: Decimal,
    fees: Decimal,
    fee_type: String,
    funding: Decimal,
    duration_mins: i64,
    entry_hour: u8,
    volume: Decimal,
    tags: String,
    note: &'a str,
}

impl<'a> From<&'a Trade> for JournalRow<'a> {
    fn from(trade: &'a Trade) -> Self {
        Self {
            id: &trade.id,
            date: trade.date.format("%Y-%m-%d").to_string(),
            symbol: &trade.symbol,
            side: trade.side.to_string(),
            order_type: trade.order_type.to_string(),
            session: trade.session.to_string(),
            quantity: trade.quantity,
            entry_price: trade.entry_price,
            exit_price: trade.exit_price,
            pnl: trade.pnl,
            fees: trade.fees,
            fee_type: trade.fee_type.to_string(),
            funding: trade.funding,
            duration_mins: trade.duration_mins,
            entry_hour: trade.entry_hour,
            volume: trade.volume,
            tags: trade.tags.join("|"),
            note: &trade.note,
        }
    }
}

/// Writes the filtered journal to a CSV file and returns the row count.
pub fn export_journal_csv(trades: &[Trade], path: &Path) -> Result<usize> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create report file at {}", path.display()))?;

    for trade in trades {
        writer
            .serialize(JournalRow::from(trade))
            .with_context(|| format!("Failed to write journal row {}", trade.id))?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to flush report file at {}", path.display()))?;

    info!(rows = trades.len(), path = %path.display(), "journal exported");
    Ok(trades.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::trading::types::{FeeType, OrderType, Session, Side};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn trade(id: &str) -> Trade {
        Trade {
            id: id.to_string(),
            symbol: "ARB-PERP".to_string(),
            side: Side::Short,
            order_type: OrderType::Twap,
            entry_price: dec!(1.8),
            exit_price: dec!(1.7),
            quantity: dec!(5000),
            pnl: dec!(500),
            fees: dec!(9),
            fee_type: FeeType::Taker,
            funding: dec!(4),
            duration_mins: 240,
            date: NaiveDate::from_ymd_opt(2026, 1, 22).unwrap(),
            entry_hour: 16,
            session: Session::Us,
            tags: vec!["unwind".to_string(), "basis".to_string()],
            note: "took the spread off".to_string(),
            volume: dec!(9000),
        }
    }

    #[test]
    fn test_export_writes_header_and_rows() {
        let path = std::env::temp_dir().join("deriverse_reporting_test.csv");
        let trades = vec![trade("DV-9001"), trade("DV-9002")];

        let written = export_journal_csv(&trades, &path).unwrap();
        assert_eq!(written, 2);

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("id,date,symbol,side,order_type,session"));
        let first = lines.next().unwrap();
        assert!(first.contains("DV-9001"));
        assert!(first.contains("2026-01-22"));
        assert!(first.contains("TWAP"));
        assert!(first.contains("unwind|basis"));
        assert_eq!(lines.count(), 1);

        std::fs::remove_file(&path).ok();
    }
}
