//! Black-Scholes Calculator CLI
//!
//! Prices a European call and put from the calculator inputs and prints the
//! Greek summary. `--json` dumps the full dashboard payload instead.

use std::process::ExitCode;

use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing::Level;

use bs_options::prelude::*;

#[derive(Parser)]
#[command(name = "bs_cli")]
#[command(about = "Black-Scholes option prices and Greeks")]
struct Args {
    /// Spot price of the underlying (default: configured fallback spot)
    #[arg(long)]
    spot: Option<f64>,

    /// Strike price (default: next strike above spot)
    #[arg(long)]
    strike: Option<f64>,

    /// Expiry date, YYYY-MM-DD (default: 15 days from today)
    #[arg(long)]
    expiry: Option<NaiveDate>,

    /// Volatility in percent
    #[arg(long)]
    vol: Option<f64>,

    /// Risk-free rate in percent
    #[arg(long)]
    rate: Option<f64>,

    /// Path to a JSON configuration file
    #[arg(long, short)]
    config: Option<String>,

    /// Print the full dashboard payload as JSON
    #[arg(long)]
    json: bool,

    /// Debug logging
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> BSResult<()> {
    let config = match &args.config {
        Some(path) => CalculatorConfig::from_json_file(path)?,
        None => CalculatorConfig::default(),
    };

    let now = Local::now().naive_local();
    let mut inputs = match args.spot {
        Some(spot) => OptionInputs::from_source(&FixedSpot(spot), now.date(), &config.market),
        None => OptionInputs::from_source(&no_market_data, now.date(), &config.market),
    };
    if let Some(strike) = args.strike {
        inputs.strike = strike;
    }
    if let Some(expiry) = args.expiry {
        inputs.expiry = expiry;
    }
    if let Some(vol) = args.vol {
        inputs.volatility_pct = vol;
    }
    if let Some(rate) = args.rate {
        inputs.rate_pct = rate;
    }

    let params = inputs.to_params_with(now, &config.market)?;
    let report = build_dashboard_with(&params, &config);

    if args.json {
        println!("{}", report.to_json()?);
        return Ok(());
    }

    println!("Black-Scholes Calculator");
    println!("========================\n");
    println!("  Spot:   {:.1}", inputs.spot);
    println!("  Strike: {:.1}", inputs.strike);
    println!("  Expiry: {} (T = {:.6} years)", inputs.expiry, params.time);
    println!("  Vol:    {:.2}%", inputs.volatility_pct);
    println!("  Rate:   {:.3}%\n", inputs.rate_pct);

    println!("Option Prices:");
    println!("  Call: {:.3}", report.call_price);
    println!("  Put:  {:.3}", report.put_price);

    println!("\nGreek Summary:");
    println!("  {:<8} {:>14} {:>14}", "", "Call Greeks", "Put Greeks");
    for (kind, call, put) in report.summary.rows() {
        println!("  {:<8} {:>14} {:>14}", kind.label(), format_greek(call), format_greek(put));
    }

    Ok(())
}

/// No live feed is wired in; the configured fallback spot is used
fn no_market_data() -> BSResult<f64> {
    Err(BSError::data("no market data source, pass --spot"))
}

fn format_greek(value: f64) -> String {
    if value.is_nan() {
        "-".to_string()
    } else {
        format!("{}", value)
    }
}
