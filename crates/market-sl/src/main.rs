/*
[INPUT]:  CLI arguments, optional YAML settings file
[OUTPUT]: One stop-loss market sell order placed (or printed on dry run), exit code
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, startup flow, or exit handling
*/

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use console::style;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use market_sl::{run, OrderArgs, Settings};
use market_sl_adapter::{ApiCredentials, BittrexClient, RunConfig};

#[derive(Parser, Debug)]
#[command(
    name = "market-sl",
    version,
    about = "Place a Stop Loss Market sell order on Bittrex"
)]
struct Cli {
    /// Do not place the order, just print order details
    #[arg(short = 'd', long = "dry-run")]
    dry_run: bool,
    /// Do not verify order price and quantity against the market's minimum
    /// trade size and price precision (skips the market info request)
    #[arg(short = 'n', long = "no-verify")]
    no_verify: bool,
    /// Enable verbose output
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
    #[arg(long = "api-url", value_name = "URL", env = "MARKET_SL_API_URL")]
    api_url: Option<String>,
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    /// Tracing filter; defaults to "info" with --verbose, "warn" otherwise
    #[arg(long = "log-level", value_name = "LEVEL")]
    log_level: Option<String>,
    /// Symbol of the market where the SL order shall be placed, e.g. BTC-USD
    market_symbol: String,
    /// Quantity of base currency (e.g. BTC on the BTC-USD market) to sell
    #[arg(allow_negative_numbers = true)]
    size: String,
    /// Price level that shall trigger execution of the Stop Loss Market order
    #[arg(allow_negative_numbers = true)]
    price: String,
    /// API Key with 'Trade' privileges
    api_key: String,
    /// API Secret with 'Trade' privileges
    api_secret: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match execute(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", style("[!]").red());
            ExitCode::FAILURE
        }
    }
}

async fn execute(args: Cli) -> Result<()> {
    let default_level = if args.verbose { "info" } else { "warn" };
    init_tracing(args.log_level.as_deref().unwrap_or(default_level))?;

    let settings = Settings::resolve(args.config_path.as_deref(), args.api_url.clone())?;
    debug!(api_url = %settings.api_url, "settings resolved");
    let client = BittrexClient::with_config(settings.client_config()).context("create HTTP client")?;

    let config = RunConfig {
        dry_run: args.dry_run,
        skip_verification: args.no_verify,
        verbose: args.verbose,
    };
    let order = OrderArgs {
        market_symbol: args.market_symbol,
        size: args.size,
        price: args.price,
        credentials: ApiCredentials::new(args.api_key, args.api_secret),
    };

    run(&client, &order, config, &mut io::stdout().lock()).await?;
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
