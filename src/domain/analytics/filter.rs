use chrono::{Datelike, Days, NaiveDate};
use std::fmt;
use std::str::FromStr;

use crate::domain::errors::AnalyticsError;
use crate::domain::trading::types::Trade;

/// Date window selectable in the dashboard. A closed set: unknown tokens are
/// rejected when parsed instead of falling back to a silent default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateRange {
    SevenDays,
    #[default]
    ThirtyDays,
    NinetyDays,
    YearToDate,
    All,
}

impl DateRange {
    /// Every selectable range, in the order the selector lists them.
    pub const ALL_OPTIONS: [DateRange; 5] = [
        DateRange::SevenDays,
        DateRange::ThirtyDays,
        DateRange::NinetyDays,
        DateRange::YearToDate,
        DateRange::All,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            DateRange::SevenDays => "7D",
            DateRange::ThirtyDays => "30D",
            DateRange::NinetyDays => "90D",
            DateRange::YearToDate => "YTD",
            DateRange::All => "ALL",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DateRange::SevenDays => "Last 7 days",
            DateRange::ThirtyDays => "Last 30 days",
            DateRange::NinetyDays => "Last 90 days",
            DateRange::YearToDate => "Year to date",
            DateRange::All => "All time",
        }
    }

    /// First day of the window relative to the reference date, inclusive.
    /// `None` disables the date predicate entirely.
    ///
    /// An N-day window covers the reference date itself, so the start is
    /// reference minus N-1 days.
    pub fn window_start(&self, reference: NaiveDate) -> Option<NaiveDate> {
        let start = match self {
            DateRange::SevenDays => reference.checked_sub_days(Days::new(6)),
            DateRange::ThirtyDays => reference.checked_sub_days(Days::new(29)),
            DateRange::NinetyDays => reference.checked_sub_days(Days::new(89)),
            DateRange::YearToDate => NaiveDate::from_ymd_opt(reference.year(), 1, 1),
            DateRange::All => return None,
        };
        Some(start.unwrap_or(NaiveDate::MIN))
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl FromStr for DateRange {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "7D" => Ok(DateRange::SevenDays),
            "30D" => Ok(DateRange::ThirtyDays),
            "90D" => Ok(DateRange::NinetyDays),
            "YTD" => Ok(DateRange::YearToDate),
            "ALL" => Ok(DateRange::All),
            _ => Err(AnalyticsError::UnknownDateRange(s.to_string())),
        }
    }
}

/// The three filter inputs a caller can change. Owned by the presentation
/// layer and passed by value into every recomputation.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    /// Exact symbol to keep. `None` keeps every symbol.
    pub symbol: Option<String>,
    pub range: DateRange,
    /// Free-text search over trade id, tags, and note. Whitespace-only
    /// disables the predicate.
    pub query: String,
}

impl FilterState {
    pub fn new(symbol: Option<String>, range: DateRange, query: impl Into<String>) -> Self {
        Self {
            symbol,
            range,
            query: query.into(),
        }
    }
}

/// Maps a symbol-selector value onto the symbol predicate, treating the
/// "All" sentinel as no filter.
pub fn parse_symbol_selection(selection: &str) -> Option<String> {
    let trimmed = selection.trim();
    if trimmed.is_empty() || trimmed == "All" {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// The reference date every window is anchored to: the maximum trade date in
/// the full collection, never wall-clock time. Keeps filtering deterministic
/// against fixed journals.
pub fn latest_trade_date(trades: &[Trade]) -> Option<NaiveDate> {
    trades.iter().map(|trade| trade.date).max()
}

/// Narrows the journal to the trades matching every active predicate.
/// Predicates AND together; input order is preserved.
pub fn filter_trades(trades: &[Trade], filter: &FilterState, reference: NaiveDate) -> Vec<Trade> {
    let query = filter.query.trim().to_lowercase();
    let window_start = filter.range.window_start(reference);

    trades
        .iter()
        .filter(|trade| match &filter.symbol {
            Some(symbol) => trade.symbol == *symbol,
            None => true,
        })
        .filter(|trade| query.is_empty() || matches_query(trade, &query))
        .filter(|trade| match window_start {
            Some(start) => trade.date >= start && trade.date <= reference,
            None => true,
        })
        .cloned()
        .collect()
}

fn matches_query(trade: &Trade, normalized: &str) -> bool {
    trade.id.to_lowercase().contains(normalized)
        || trade
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(normalized))
        || trade.note.to_lowercase().contains(normalized)
}
