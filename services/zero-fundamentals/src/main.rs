//! Zero Fundamentals - quarterly A-share financial statements from the command line.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use zero_common::config::Config;
use zero_common::logging::init_from_config;
use zero_common::{Error, Result};
use zero_fundamentals::{render_summary, FundamentalsService, Snapshot, StatementKind};

#[derive(Parser, Debug)]
#[command(name = "zero-fundamentals")]
#[command(version)]
#[command(about = "Fetch quarterly balance sheets and income statements for A-shares", long_about = None)]
struct Cli {
    /// Ticker, e.g. 600519, 000001.SZ or 830799.BJ
    symbol: String,

    /// Query date (YYYY-MM-DD); the latest quarter-end on or before it is reported
    date: String,

    /// Which statement to fetch
    #[arg(long, value_enum, default_value_t = StatementArg::Both)]
    statement: StatementArg,

    /// Report every period of the trailing window, newest first
    #[arg(long)]
    window: bool,

    /// Print snapshots as JSON instead of a summary
    #[arg(long)]
    json: bool,

    /// Config file to use instead of ~/.codecoder/config.json
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StatementArg {
    Balance,
    Income,
    Both,
}

impl StatementArg {
    fn kinds(self) -> &'static [StatementKind] {
        match self {
            Self::Balance => &[StatementKind::BalanceSheet],
            Self::Income => &[StatementKind::IncomeStatement],
            Self::Both => &StatementKind::ALL,
        }
    }
}

fn print(snapshots: &[Snapshot], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(snapshots)?);
        return Ok(());
    }

    if snapshots.is_empty() {
        println!("没有可用的财务数据");
    }
    for snapshot in snapshots {
        println!("{}", render_summary(snapshot));
    }
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_and_validate_from(path),
        None => Config::load_and_validate(),
    }
    .map_err(|e| Error::Config(format!("{e:#}")))?;

    init_from_config(&config.observability);
    tracing::debug!("Zero Fundamentals v{}", env!("CARGO_PKG_VERSION"));

    let service = FundamentalsService::from_config(&config.fundamentals)?;

    for &kind in cli.statement.kinds() {
        let orchestrator = service.orchestrator(kind);
        let snapshots = if cli.window {
            orchestrator.fetch_window(&cli.symbol, &cli.date).await?
        } else {
            vec![orchestrator.fetch_statement(&cli.symbol, &cli.date).await?]
        };
        print(&snapshots, cli.json)?;
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("error: {e}");
        std::process::exit(e.exit_code());
    }
}
