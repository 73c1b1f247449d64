//! Sniperdash - DeFi Sniper Bot Dashboard Core
//!
//! CLI entry point: fixture demo, configuration validation, and
//! configuration export.

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use sniperdash::adapters::{
    CliApp, Command, DemoCmd, ExportCmd, LogNotifier, StaticCatalog, ValidateCmd,
};
use sniperdash::application::DashboardCore;
use sniperdash::config::{export_config, load_config};
use sniperdash::domain::config::{BotConfig, ConfigPatch};
use sniperdash::domain::portfolio::{Holding, HoldingsSnapshot};
use sniperdash::domain::transaction::{NewTransaction, TradeDirection, TradeOutcome};

fn main() -> Result<()> {
    let app = CliApp::parse();
    init_logging(app.verbose, app.debug)?;

    match app.command {
        Command::Demo(cmd) => demo_command(cmd),
        Command::Validate(cmd) => validate_command(cmd),
        Command::Export(cmd) => export_command(cmd),
    }
}

fn init_logging(verbose: bool, debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::new("warn")
    };

    fmt().with_env_filter(filter).init();
    Ok(())
}

/// Seed the core with the dashboard's fixture data and print a render.
fn demo_command(cmd: DemoCmd) -> Result<()> {
    let core = DashboardCore::new(
        Arc::new(StaticCatalog::with_defaults()),
        Arc::new(LogNotifier::new()),
    );

    seed_fixtures(&core)?;

    if cmd.json {
        let snapshot = core.dashboard();
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    print_dashboard(&core);
    Ok(())
}

fn seed_fixtures(core: &DashboardCore) -> Result<()> {
    // Connect a wallet through the ordinary stage/commit cycle.
    let patch = ConfigPatch {
        wallet_address: Some("0x71C7656EC7ab88b098defB751B7401B5f6d8976F".to_string()),
        ..Default::default()
    };
    let candidate = core.stage_config(&patch).context("Failed to stage configuration")?;
    core.save_config(candidate).context("Failed to save configuration")?;

    core.add_monitor("ETH").context("Failed to add monitor")?;
    core.add_monitor("PEPE").context("Failed to add monitor")?;
    core.start();

    let now = Utc::now();

    // A buy that resolves profitably.
    let pepe = core.record_transaction(NewTransaction::pending(
        now - Duration::minutes(28),
        "PEPE",
        TradeDirection::Buy,
        0.1,
        245.50,
        0.005,
        "0x1234...5678",
    ));
    core.resolve_transaction(pepe, TradeOutcome::Success, Some(15.2))
        .context("Failed to resolve transaction")?;

    // A sell that resolves at a loss.
    let shib = core.record_transaction(NewTransaction::pending(
        now - Duration::minutes(31),
        "SHIB",
        TradeDirection::Sell,
        1_000_000.0,
        0.00018,
        0.003,
        "0x9876...4321",
    ));
    core.resolve_transaction(shib, TradeOutcome::Failed, Some(-8.5))
        .context("Failed to resolve transaction")?;

    // A buy that failed outright, recorded terminal at submission.
    core.record_transaction(NewTransaction::settled(
        now - Duration::minutes(35),
        "DOGE",
        TradeDirection::Buy,
        0.05,
        122.75,
        0.004,
        TradeOutcome::Failed,
        None,
        "0xabcd...efgh",
    ));

    // A buy still awaiting confirmation.
    core.record_transaction(NewTransaction::pending(
        now - Duration::minutes(39),
        "FLOKI",
        TradeDirection::Buy,
        0.08,
        196.30,
        0.006,
        "0x5555...6666",
    ));

    core.refresh_holdings(HoldingsSnapshot::new(vec![
        Holding::new("ETH", 3.45, 8234.50),
        Holding::new("USDC", 2450.0, 2450.0),
        Holding::new("PEPE", 1_000_000.0, 1234.56),
        Holding::new("SHIB", 50_000_000.0, 928.26),
    ]));

    Ok(())
}

fn print_dashboard(core: &DashboardCore) {
    let snapshot = core.dashboard();

    println!("Bot: {} - {}", snapshot.state, snapshot.state.description());
    println!(
        "Network: {} via {}",
        snapshot.config.network, snapshot.config.rpc_provider
    );
    if let Some(ref wallet) = snapshot.config.wallet_address {
        println!("Wallet: {wallet}");
    }

    println!("\nMonitored coins ({}):", snapshot.monitors.len());
    for asset in &snapshot.monitors {
        println!(
            "  {} {} (${}) {:+.2}%",
            asset.logo, asset.symbol, asset.price_usd, asset.change_24h_pct
        );
    }

    let stats = &snapshot.stats;
    println!("\nTrade statistics:");
    println!(
        "  Total P&L: {:+.1}%  Win rate: {:.1}% ({}/{} trades)",
        stats.total_pnl_pct, stats.win_rate_pct, stats.profitable_trades, stats.total_trades
    );
    println!(
        "  Avg gain: {:+.1}%  Avg loss: {:+.1}%  Volume: ${:.2}",
        stats.avg_gain_pct, stats.avg_loss_pct, stats.total_volume_usd
    );
    match (&stats.best_trade, &stats.worst_trade) {
        (Some(best), Some(worst)) => println!(
            "  Best: {} {:+.1}%  Worst: {} {:+.1}%",
            best.symbol, best.pnl_pct, worst.symbol, worst.pnl_pct
        ),
        _ => println!("  Best/worst: no data"),
    }

    println!("\nTop tokens:");
    for (rank, rollup) in snapshot.rollups.iter().enumerate() {
        println!(
            "  {}. {} {:+.1}% over {} trades (${:.2} vol)",
            rank + 1,
            rollup.symbol,
            rollup.pnl_pct,
            rollup.trades,
            rollup.volume_usd
        );
    }

    println!("\nPortfolio:");
    for slice in &snapshot.distribution {
        println!(
            "  {} ${:.2} ({:.1}%)",
            slice.symbol, slice.usd_value, slice.share_pct
        );
    }
}

fn validate_command(cmd: ValidateCmd) -> Result<()> {
    let config = load_config(&cmd.config).context("Failed to load configuration")?;
    println!("Configuration OK: {}", cmd.config.display());
    println!(
        "  network={} provider={} slippage={}% take_profit={}% stop_loss={}%",
        config.network,
        config.rpc_provider,
        config.slippage_pct,
        config.take_profit_pct,
        config.stop_loss_pct
    );
    Ok(())
}

fn export_command(cmd: ExportCmd) -> Result<()> {
    export_config(&cmd.out, &BotConfig::default()).context("Failed to export configuration")?;
    println!("Default configuration written to {}", cmd.out.display());
    Ok(())
}
