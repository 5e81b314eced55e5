use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

use crate::domain::trading::types::{Side, Trade};

/// Aggregate metrics over a filtered set of trades.
///
/// Every ratio guards its denominator; the empty set produces an all-zero
/// record rather than an error.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SummaryMetrics {
    pub total_trades: usize,
    /// Sum of realized PnL, before costs.
    pub gross_pnl: Decimal,
    /// Gross PnL minus total fees.
    pub net_pnl: Decimal,
    pub total_volume: Decimal,
    /// Execution fees plus funding costs.
    pub total_fees: Decimal,
    /// Total fees over total volume, volume floored at 1.
    pub fee_rate: f64,
    /// Winning trades over total trades, in 0..1.
    pub win_rate: f64,
    pub avg_duration_mins: f64,
    pub long_trades: usize,
    pub short_trades: usize,
    /// Long count over short count; degrades to the raw long count when
    /// there are no shorts.
    pub long_short_ratio: f64,
    pub largest_gain: Decimal,
    /// Most negative losing PnL, kept signed.
    pub largest_loss: Decimal,
    pub avg_win: Decimal,
    /// Mean absolute losing PnL.
    pub avg_loss: Decimal,
    /// Gross wins over absolute gross losses; 0 when there are no losers.
    pub profit_factor: f64,
    /// winRate * avgWin - (1 - winRate) * avgLoss.
    pub expectancy: f64,
}

impl SummaryMetrics {
    pub fn calculate(trades: &[Trade]) -> Self {
        if trades.is_empty() {
            return Self::default();
        }

        let total_trades = trades.len();
        let gross_pnl: Decimal = trades.iter().map(|t| t.pnl).sum();
        let total_volume: Decimal = trades.iter().map(|t| t.volume).sum();
        let total_fees: Decimal = trades.iter().map(|t| t.fees + t.funding).sum();
        let net_pnl = gross_pnl - total_fees;

        let winners: Vec<&Trade> = trades.iter().filter(|t| t.is_winner()).collect();
        let losers: Vec<&Trade> = trades.iter().filter(|t| t.is_loser()).collect();

        let win_rate = winners.len() as f64 / total_trades as f64;
        let avg_duration_mins =
            trades.iter().map(|t| t.duration_mins as f64).sum::<f64>() / total_trades as f64;

        let long_trades = trades.iter().filter(|t| t.side == Side::Long).count();
        let short_trades = total_trades - long_trades;
        let long_short_ratio = if short_trades > 0 {
            long_trades as f64 / short_trades as f64
        } else {
            long_trades as f64
        };

        let gross_wins: Decimal = winners.iter().map(|t| t.pnl).sum();
        let gross_losses: Decimal = losers.iter().map(|t| t.pnl).sum();

        let largest_gain = winners
            .iter()
            .map(|t| t.pnl)
            .max()
            .unwrap_or(Decimal::ZERO);
        let largest_loss = losers.iter().map(|t| t.pnl).min().unwrap_or(Decimal::ZERO);

        let avg_win = if winners.is_empty() {
            Decimal::ZERO
        } else {
            gross_wins / Decimal::from(winners.len())
        };
        let avg_loss = if losers.is_empty() {
            Decimal::ZERO
        } else {
            (gross_losses / Decimal::from(losers.len())).abs()
        };

        let profit_factor = if losers.is_empty() {
            0.0
        } else {
            gross_wins.to_f64().unwrap_or(0.0) / gross_losses.abs().to_f64().unwrap_or(1.0)
        };

        let expectancy = win_rate * avg_win.to_f64().unwrap_or(0.0)
            - (1.0 - win_rate) * avg_loss.to_f64().unwrap_or(0.0);

        let fee_rate = (total_fees / total_volume.max(Decimal::ONE))
            .to_f64()
            .unwrap_or(0.0);

        Self {
            total_trades,
            gross_pnl,
            net_pnl,
            total_volume,
            total_fees,
            fee_rate,
            win_rate,
            avg_duration_mins,
            long_trades,
            short_trades,
            long_short_ratio,
            largest_gain,
            largest_loss,
            avg_win,
            avg_loss,
            profit_factor,
            expectancy,
        }
    }
}
