use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Long,
    Short,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Long => write!(f, "Long"),
            Side::Short => write!(f, "Short"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderType {
    Limit,
    Market,
    Stop,
    #[serde(rename = "TWAP")]
    Twap,
    #[serde(rename = "OCO")]
    Oco,
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderType::Limit => write!(f, "Limit"),
            OrderType::Market => write!(f, "Market"),
            OrderType::Stop => write!(f, "Stop"),
            OrderType::Twap => write!(f, "TWAP"),
            OrderType::Oco => write!(f, "OCO"),
        }
    }
}

/// Which side of the order book the execution fee was charged on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeeType {
    Maker,
    Taker,
}

impl fmt::Display for FeeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeeType::Maker => write!(f, "Maker"),
            FeeType::Taker => write!(f, "Taker"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Session {
    Asia,
    Europe,
    #[serde(rename = "US")]
    Us,
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Session::Asia => write!(f, "Asia"),
            Session::Europe => write!(f, "Europe"),
            Session::Us => write!(f, "US"),
        }
    }
}

/// A closed trade in the journal. Records are seeded or imported once and
/// never mutated; every derived view is recomputed from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub id: String,
    pub symbol: String,
    pub side: Side,
    pub order_type: OrderType,
    pub entry_price: Decimal,
    pub exit_price: Decimal,
    pub quantity: Decimal,
    /// Realized profit/loss, before fees and funding.
    pub pnl: Decimal,
    pub fees: Decimal,
    pub fee_type: FeeType,
    pub funding: Decimal,
    pub duration_mins: i64,
    pub date: NaiveDate,
    /// Hour of day the position was opened, 0-23.
    pub entry_hour: u8,
    pub session: Session,
    pub tags: Vec<String>,
    pub note: String,
    /// Notional volume traded.
    pub volume: Decimal,
}

impl Trade {
    pub fn is_winner(&self) -> bool {
        self.pnl > Decimal::ZERO
    }

    pub fn is_loser(&self) -> bool {
        self.pnl < Decimal::ZERO
    }

    /// Realized PnL after execution fees and funding costs.
    pub fn net_pnl(&self) -> Decimal {
        self.pnl - self.fees - self.funding
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_trade(pnl: Decimal, fees: Decimal, funding: Decimal) -> Trade {
        Trade {
            id: "DV-0001".to_string(),
            symbol: "BTC-PERP".to_string(),
            side: Side::Long,
            order_type: OrderType::Limit,
            entry_price: dec!(64000),
            exit_price: dec!(64500),
            quantity: dec!(0.5),
            pnl,
            fees,
            fee_type: FeeType::Maker,
            funding,
            duration_mins: 90,
            date: NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
            entry_hour: 9,
            session: Session::Europe,
            tags: vec!["breakout".to_string()],
            note: "clean retest entry".to_string(),
            volume: dec!(32000),
        }
    }

    #[test]
    fn test_net_pnl_subtracts_fees_and_funding() {
        let trade = sample_trade(dec!(250), dec!(12), dec!(3));
        assert_eq!(trade.net_pnl(), dec!(235));
        assert!(trade.is_winner());
        assert!(!trade.is_loser());
    }

    #[test]
    fn test_breakeven_trade_is_neither_winner_nor_loser() {
        let trade = sample_trade(dec!(0), dec!(5), dec!(0));
        assert!(!trade.is_winner());
        assert!(!trade.is_loser());
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(OrderType::Twap.to_string(), "TWAP");
        assert_eq!(OrderType::Oco.to_string(), "OCO");
        assert_eq!(Session::Us.to_string(), "US");
        assert_eq!(Side::Short.to_string(), "Short");
        assert_eq!(FeeType::Taker.to_string(), "Taker");
    }

    #[test]
    fn test_trade_serde_roundtrip() {
        let trade = sample_trade(dec!(-120), dec!(8), dec!(2));
        let json = serde_json::to_string(&trade).unwrap();
        assert!(json.contains("\"Maker\""));
        let back: Trade = serde_json::from_str(&json).unwrap();
        assert_eq!(back, trade);
    }
}
