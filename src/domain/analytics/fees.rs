use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use std::fmt;

use crate::domain::trading::types::{FeeType, Trade};

/// The three cost buckets the dashboard's composition donut shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FeeBucket {
    Maker,
    Taker,
    Funding,
}

impl fmt::Display for FeeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeeBucket::Maker => write!(f, "Maker"),
            FeeBucket::Taker => write!(f, "Taker"),
            FeeBucket::Funding => write!(f, "Funding"),
        }
    }
}

/// One bucket's total and its share of the combined cost.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeeSlice {
    pub bucket: FeeBucket,
    pub value: Decimal,
    /// Share of the grand total in 0..1; 0 when nothing accrued.
    pub share: f64,
}

/// Cost composition of the filtered journal. Execution fees land in the
/// bucket matching the trade's fee type; funding always accrues separately.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FeeBreakdown {
    pub maker: Decimal,
    pub taker: Decimal,
    pub funding: Decimal,
    pub total: Decimal,
}

impl FeeBreakdown {
    pub fn calculate(trades: &[Trade]) -> Self {
        let mut breakdown = Self::default();
        for trade in trades {
            match trade.fee_type {
                FeeType::Maker => breakdown.maker += trade.fees,
                FeeType::Taker => breakdown.taker += trade.fees,
            }
            breakdown.funding += trade.funding;
        }
        breakdown.total = breakdown.maker + breakdown.taker + breakdown.funding;
        breakdown
    }

    /// Bucket slices in display order (Maker, Taker, Funding).
    pub fn slices(&self) -> Vec<FeeSlice> {
        [
            (FeeBucket::Maker, self.maker),
            (FeeBucket::Taker, self.taker),
            (FeeBucket::Funding, self.funding),
        ]
        .into_iter()
        .map(|(bucket, value)| FeeSlice {
            bucket,
            value,
            share: if self.total.is_zero() {
                0.0
            } else {
                (value / self.total).to_f64().unwrap_or(0.0)
            },
        })
        .collect()
    }
}
