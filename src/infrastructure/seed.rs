use chrono::NaiveDate;
use rust_decimal_macros::dec;

use crate::domain::trading::types::{FeeType, OrderType, Session, Side, Trade};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("seed dates are valid")
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// The built-in journal the dashboard starts from when no file is supplied.
/// Spans late 2025 through January 2026 so every date-range option selects a
/// different subset.
pub fn seed_journal() -> Vec<Trade> {
    vec![
        Trade {
            id: "DV-1001".to_string(),
            symbol: "BTC-PERP".to_string(),
            side: Side::Long,
            order_type: OrderType::Limit,
            entry_price: dec!(60250),
            exit_price: dec!(61900),
            quantity: dec!(0.8),
            pnl: dec!(1320),
            fees: dec!(18),
            fee_type: FeeType::Maker,
            funding: dec!(6),
            duration_mins: 510,
            date: day(2025, 10, 20),
            entry_hour: 2,
            session: Session::Asia,
            tags: tags(&["swing", "htf"]),
            note: "quarterly open reclaim".to_string(),
            volume: dec!(48200),
        },
        Trade {
            id: "DV-1002".to_string(),
            symbol: "ETH-PERP".to_string(),
            side: Side::Short,
            order_type: OrderType::Market,
            entry_price: dec!(3420),
            exit_price: dec!(3361),
            quantity: dec!(9),
            pnl: dec!(531),
            fees: dec!(31),
            fee_type: FeeType::Taker,
            funding: dec!(8),
            duration_mins: 140,
            date: day(2025, 11, 6),
            entry_hour: 14,
            session: Session::Europe,
            tags: tags(&["cpi", "fade"]),
            note: "faded the data spike".to_string(),
            volume: dec!(30800),
        },
        Trade {
            id: "DV-1003".to_string(),
            symbol: "BTC-PERP".to_string(),
            side: Side::Long,
            order_type: OrderType::Twap,
            entry_price: dec!(67800),
            exit_price: dec!(67100),
            quantity: dec!(0.6),
            pnl: dec!(-420),
            fees: dec!(22),
            fee_type: FeeType::Taker,
            funding: dec!(9),
            duration_mins: 360,
            date: day(2025, 11, 18),
            entry_hour: 9,
            session: Session::Europe,
            tags: tags(&["accumulation"]),
            note: "twap filled into chop".to_string(),
            volume: dec!(40700),
        },
        Trade {
            id: "DV-1004".to_string(),
            symbol: "DOGE-PERP".to_string(),
            side: Side::Long,
            order_type: OrderType::Market,
            entry_price: dec!(0.210),
            exit_price: dec!(0.236),
            quantity: dec!(90000),
            pnl: dec!(2340),
            fees: dec!(28),
            fee_type: FeeType::Taker,
            funding: dec!(14),
            duration_mins: 2880,
            date: day(2025, 12, 2),
            entry_hour: 1,
            session: Session::Asia,
            tags: tags(&["momentum", "listing"]),
            note: "rode the listing pump".to_string(),
            volume: dec!(18900),
        },
        Trade {
            id: "DV-1005".to_string(),
            symbol: "ETH-PERP".to_string(),
            side: Side::Long,
            order_type: OrderType::Limit,
            entry_price: dec!(3050),
            exit_price: dec!(2995),
            quantity: dec!(7),
            pnl: dec!(-385),
            fees: dec!(19),
            fee_type: FeeType::Maker,
            funding: dec!(7),
            duration_mins: 95,
            date: day(2025, 12, 10),
            entry_hour: 11,
            session: Session::Europe,
            tags: tags(&["support"]),
            note: "support gave way".to_string(),
            volume: dec!(21400),
        },
        Trade {
            id: "DV-1006".to_string(),
            symbol: "BTC-PERP".to_string(),
            side: Side::Short,
            order_type: OrderType::Stop,
            entry_price: dec!(72400),
            exit_price: dec!(71150),
            quantity: dec!(0.5),
            pnl: dec!(625),
            fees: dec!(20),
            fee_type: FeeType::Taker,
            funding: dec!(5),
            duration_mins: 75,
            date: day(2025, 12, 18),
            entry_hour: 20,
            session: Session::Us,
            tags: tags(&["breakdown"]),
            note: "stop entry through the shelf".to_string(),
            volume: dec!(36200),
        },
        Trade {
            id: "DV-1007".to_string(),
            symbol: "ARB-PERP".to_string(),
            side: Side::Long,
            order_type: OrderType::Limit,
            entry_price: dec!(1.24),
            exit_price: dec!(1.18),
            quantity: dec!(14000),
            pnl: dec!(-840),
            fees: dec!(16),
            fee_type: FeeType::Maker,
            funding: dec!(11),
            duration_mins: 1150,
            date: day(2025, 12, 30),
            entry_hour: 5,
            session: Session::Asia,
            tags: tags(&["range"]),
            note: "range floor failed overnight".to_string(),
            volume: dec!(17400),
        },
        Trade {
            id: "DV-1021".to_string(),
            symbol: "SOL-PERP".to_string(),
            side: Side::Long,
            order_type: OrderType::Limit,
            entry_price: dec!(198.4),
            exit_price: dec!(215.2),
            quantity: dec!(235),
            pnl: dec!(3940),
            fees: dec!(32),
            fee_type: FeeType::Maker,
            funding: dec!(12),
            duration_mins: 620,
            date: day(2026, 1, 5),
            entry_hour: 7,
            session: Session::Asia,
            tags: tags(&["breakout", "weekly"]),
            note: "weekly breakout with funding tailwind".to_string(),
            volume: dec!(46600),
        },
        Trade {
            id: "DV-1022".to_string(),
            symbol: "BTC-PERP".to_string(),
            side: Side::Long,
            order_type: OrderType::Market,
            entry_price: dec!(88400),
            exit_price: dec!(89750),
            quantity: dec!(0.4),
            pnl: dec!(540),
            fees: dec!(26),
            fee_type: FeeType::Taker,
            funding: dec!(4),
            duration_mins: 85,
            date: day(2026, 1, 8),
            entry_hour: 16,
            session: Session::Us,
            tags: tags(&["nyo", "scalp"]),
            note: "new york open drive".to_string(),
            volume: dec!(35400),
        },
        Trade {
            id: "DV-1023".to_string(),
            symbol: "ETH-PERP".to_string(),
            side: Side::Short,
            order_type: OrderType::Oco,
            entry_price: dec!(3180),
            exit_price: dec!(3249),
            quantity: dec!(6),
            pnl: dec!(-414),
            fees: dec!(24),
            fee_type: FeeType::Taker,
            funding: dec!(6),
            duration_mins: 130,
            date: day(2026, 1, 9),
            entry_hour: 18,
            session: Session::Us,
            tags: tags(&["squeeze"]),
            note: "short squeezed through invalidation".to_string(),
            volume: dec!(19100),
        },
        Trade {
            id: "DV-1042".to_string(),
            symbol: "SOL-PERP".to_string(),
            side: Side::Short,
            order_type: OrderType::Market,
            entry_price: dec!(236.8),
            exit_price: dec!(249.2),
            quantity: dec!(235),
            pnl: dec!(-2914),
            fees: dec!(36),
            fee_type: FeeType::Taker,
            funding: dec!(10),
            duration_mins: 310,
            date: day(2026, 1, 13),
            entry_hour: 12,
            session: Session::Europe,
            tags: tags(&["counter-trend"]),
            note: "fought the trend after lunch".to_string(),
            volume: dec!(55600),
        },
        Trade {
            id: "DV-1024".to_string(),
            symbol: "ARB-PERP".to_string(),
            side: Side::Short,
            order_type: OrderType::Market,
            entry_price: dec!(1.62),
            exit_price: dec!(1.54),
            quantity: dec!(11000),
            pnl: dec!(880),
            fees: dec!(21),
            fee_type: FeeType::Taker,
            funding: dec!(6),
            duration_mins: 420,
            date: day(2026, 1, 14),
            entry_hour: 3,
            session: Session::Asia,
            tags: tags(&["unwind"]),
            note: "unwound into asia lows".to_string(),
            volume: dec!(17800),
        },
        Trade {
            id: "DV-1025".to_string(),
            symbol: "BTC-PERP".to_string(),
            side: Side::Long,
            order_type: OrderType::Limit,
            entry_price: dec!(86900),
            exit_price: dec!(88350),
            quantity: dec!(0.5),
            pnl: dec!(725),
            fees: dec!(15),
            fee_type: FeeType::Maker,
            funding: dec!(7),
            duration_mins: 260,
            date: day(2026, 1, 16),
            entry_hour: 10,
            session: Session::Europe,
            tags: tags(&["pullback"]),
            note: "bought the london pullback".to_string(),
            volume: dec!(43500),
        },
        Trade {
            id: "DV-1026".to_string(),
            symbol: "ETH-PERP".to_string(),
            side: Side::Long,
            order_type: OrderType::Market,
            entry_price: dec!(3310),
            exit_price: dec!(3287),
            quantity: dec!(8),
            pnl: dec!(-184),
            fees: dec!(27),
            fee_type: FeeType::Taker,
            funding: dec!(5),
            duration_mins: 55,
            date: day(2026, 1, 16),
            entry_hour: 19,
            session: Session::Us,
            tags: tags(&["chase"]),
            note: "chased strength into resistance".to_string(),
            volume: dec!(26500),
        },
        Trade {
            id: "DV-1027".to_string(),
            symbol: "DOGE-PERP".to_string(),
            side: Side::Short,
            order_type: OrderType::Stop,
            entry_price: dec!(0.310),
            exit_price: dec!(0.292),
            quantity: dec!(60000),
            pnl: dec!(1080),
            fees: dec!(23),
            fee_type: FeeType::Taker,
            funding: dec!(9),
            duration_mins: 780,
            date: day(2026, 1, 19),
            entry_hour: 0,
            session: Session::Asia,
            tags: tags(&["distribution"]),
            note: "midnight breakdown from distribution".to_string(),
            volume: dec!(18600),
        },
        Trade {
            id: "DV-1028".to_string(),
            symbol: "BTC-PERP".to_string(),
            side: Side::Short,
            order_type: OrderType::Limit,
            entry_price: dec!(90100),
            exit_price: dec!(89420),
            quantity: dec!(0.7),
            pnl: dec!(476),
            fees: dec!(14),
            fee_type: FeeType::Maker,
            funding: dec!(6),
            duration_mins: 190,
            date: day(2026, 1, 21),
            entry_hour: 13,
            session: Session::Europe,
            tags: tags(&["deviation"]),
            note: "sold the deviation above range".to_string(),
            volume: dec!(63100),
        },
        Trade {
            id: "DV-1029".to_string(),
            symbol: "ARB-PERP".to_string(),
            side: Side::Long,
            order_type: OrderType::Twap,
            entry_price: dec!(1.41),
            exit_price: dec!(1.47),
            quantity: dec!(16000),
            pnl: dec!(960),
            fees: dec!(19),
            fee_type: FeeType::Maker,
            funding: dec!(8),
            duration_mins: 960,
            date: day(2026, 1, 22),
            entry_hour: 6,
            session: Session::Asia,
            tags: tags(&["basis", "carry"]),
            note: "carried the basis into expiry".to_string(),
            volume: dec!(22600),
        },
        Trade {
            id: "DV-1030".to_string(),
            symbol: "ETH-PERP".to_string(),
            side: Side::Long,
            order_type: OrderType::Limit,
            entry_price: dec!(3365),
            exit_price: dec!(3341),
            quantity: dec!(10),
            pnl: dec!(-240),
            fees: dec!(17),
            fee_type: FeeType::Maker,
            funding: dec!(9),
            duration_mins: 120,
            date: day(2026, 1, 24),
            entry_hour: 23,
            session: Session::Us,
            tags: tags(&["late-session"]),
            note: "late session fakeout".to_string(),
            volume: dec!(33700),
        },
        Trade {
            id: "DV-1031".to_string(),
            symbol: "DOGE-PERP".to_string(),
            side: Side::Long,
            order_type: OrderType::Market,
            entry_price: dec!(0.268),
            exit_price: dec!(0.281),
            quantity: dec!(70000),
            pnl: dec!(910),
            fees: dec!(25),
            fee_type: FeeType::Taker,
            funding: dec!(7),
            duration_mins: 340,
            date: day(2026, 1, 27),
            entry_hour: 15,
            session: Session::Europe,
            tags: tags(&["momentum"]),
            note: "momentum continuation off the open".to_string(),
            volume: dec!(18800),
        },
        Trade {
            id: "DV-1032".to_string(),
            symbol: "BTC-PERP".to_string(),
            side: Side::Long,
            order_type: OrderType::Market,
            entry_price: dec!(91400),
            exit_price: dec!(92610),
            quantity: dec!(0.6),
            pnl: dec!(726),
            fees: dec!(29),
            fee_type: FeeType::Taker,
            funding: dec!(8),
            duration_mins: 150,
            date: day(2026, 1, 28),
            entry_hour: 21,
            session: Session::Us,
            tags: tags(&["trend"]),
            note: "pressed the trend into the close".to_string(),
            volume: dec!(54800),
        },
    ]
}
