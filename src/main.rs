use anyhow::Result;
use clap::Parser;
use std::path::Path;
use tracing::info;
use tracing_subscriber::prelude::*;

use deriverse::application::engine::AnalyticsEngine;
use deriverse::application::reporting;
use deriverse::config::Config;
use deriverse::domain::analytics::filter::{DateRange, FilterState, parse_symbol_selection};
use deriverse::infrastructure::{import, seed};
use deriverse::interfaces::dashboard;
use deriverse::interfaces::view_models::analytics_view_model::AnalyticsViewModel;

#[derive(Parser)]
#[command(author, version, about = "Deriverse trading analytics dashboard", long_about = None)]
struct Cli {
    /// Symbol to focus on ("All" keeps every symbol)
    #[arg(short, long, default_value = "All")]
    symbol: String,

    /// Date range token: 7D, 30D, 90D, YTD or ALL
    #[arg(short, long)]
    range: Option<String>,

    /// Free-text search over trade ids, tags, and notes
    #[arg(short, long, default_value = "")]
    query: String,

    /// Load the journal from a JSON file instead of the built-in seed data
    #[arg(long)]
    data: Option<String>,

    /// Export the filtered journal to a CSV file
    #[arg(long)]
    export: Option<String>,

    /// Print the full snapshot as JSON instead of the dashboard panels
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    let trades = match cli.data.as_deref().or(config.journal_path.as_deref()) {
        Some(path) => import::load_journal(Path::new(path))?,
        None => seed::seed_journal(),
    };

    let range = match cli.range.as_deref() {
        Some(token) => token.parse::<DateRange>()?,
        None => config.default_range,
    };
    let filter = FilterState::new(parse_symbol_selection(&cli.symbol), range, cli.query.clone());

    let engine = AnalyticsEngine::new(trades);
    let snapshot = engine.snapshot(&filter);
    info!(
        trades = snapshot.filtered_trades.len(),
        range = filter.range.token(),
        "snapshot derived"
    );

    if let Some(path) = &cli.export {
        reporting::export_journal_csv(&snapshot.filtered_trades, Path::new(path))?;
    }

    if cli.json {
        let payload = serde_json::json!({
            "filter_summary": AnalyticsViewModel::filter_summary(&snapshot, &filter),
            "equity_path": AnalyticsViewModel::equity_path(
                &snapshot,
                config.plot_width,
                config.plot_height,
            ),
            "drawdown_path": AnalyticsViewModel::drawdown_path(
                &snapshot,
                config.plot_width,
                config.plot_height,
            ),
            "fee_gradient": AnalyticsViewModel::fee_gradient(&snapshot.fee_breakdown),
            "snapshot": snapshot,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        print!("{}", dashboard::render(&snapshot, &filter));
    }

    Ok(())
}
