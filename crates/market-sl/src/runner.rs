/*
[INPUT]:  Raw CLI order arguments, run flags, exchange client
[OUTPUT]: Built request (dry run) or created conditional order, user-facing report lines
[POS]:    Application layer - validate, verify, build, sign, submit
[UPDATE]: When the order placement flow changes
*/

use std::io::Write;

use anyhow::{Context, Result};
use console::style;
use market_sl_adapter::order::{build_from_spec, decimal_digits, verify};
use market_sl_adapter::{
    ApiCredentials, BittrexClient, ConditionalOrder, ConditionalOrderRequest, OrderSpec, RunConfig,
};
use tracing::info;

/// Order arguments exactly as typed by the user
#[derive(Debug, Clone)]
pub struct OrderArgs {
    pub market_symbol: String,
    pub size: String,
    pub price: String,
    pub credentials: ApiCredentials,
}

/// What a successful invocation did
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// Request built and printed, nothing submitted
    DryRun(ConditionalOrderRequest),
    Submitted(ConditionalOrder),
}

/// Place one stop-loss market sell order.
///
/// Steps run strictly in sequence; the first failure ends the invocation
/// and nothing is submitted after it.
pub async fn run<W: Write>(
    client: &BittrexClient,
    args: &OrderArgs,
    config: RunConfig,
    out: &mut W,
) -> Result<RunOutcome> {
    let spec = OrderSpec::parse(&args.market_symbol, &args.size, &args.price)?;

    let constraints = if config.skip_verification {
        info!(market_symbol = %spec.market_symbol, "market verification skipped");
        None
    } else {
        let market = client
            .get_market_info(&spec.market_symbol)
            .await
            .context("Market Info request failed")?;
        let constraints = market.constraints()?;
        if config.verbose {
            report(out, &format!(
                "Minimum trade size for {} is {}",
                spec.market_symbol, constraints.min_trade_size
            ))?;
            // An undersized order fails in verify before precision is looked at.
            if spec.quantity >= constraints.min_trade_size {
                report(out, &format!(
                    "Precision for {} is {}",
                    spec.market_symbol, constraints.price_precision
                ))?;
                report(out, &format!(
                    "Precision of requested price is {}",
                    decimal_digits(spec.trigger_price)
                ))?;
            }
        }
        Some(constraints)
    };

    let spec = verify(spec, constraints.as_ref())?;
    let request = build_from_spec(&spec);

    if config.verbose || config.dry_run {
        report(out, &format!("Order request: {}", serde_json::to_string(&request)?))?;
    }

    if config.dry_run {
        info!("dry run; order not submitted");
        return Ok(RunOutcome::DryRun(request));
    }

    let order = client
        .submit_conditional_order(&request, &args.credentials)
        .await
        .context("Order request failed")?;
    report(out, &format!(
        "Stop Loss Market order created successfully: {}",
        order.confirmation()
    ))?;
    Ok(RunOutcome::Submitted(order))
}

fn report<W: Write>(out: &mut W, message: &str) -> Result<()> {
    writeln!(out, "{} {}", style("[i]").cyan(), message).context("write output")
}
