//! Black-Scholes Visualization
//!
//! Text rendering of the price heatmaps and Greek curves.

use std::process::ExitCode;

use chrono::{Duration, Local};
use clap::Parser;

use bs_options::prelude::*;

/// Shades from cheapest to most expensive cell
const SHADES: [char; 5] = [' ', '░', '▒', '▓', '█'];

#[derive(Parser)]
#[command(name = "bs_viz")]
#[command(about = "ASCII heatmaps and Greek curves")]
struct Args {
    /// Spot price of the underlying (default: configured fallback spot)
    #[arg(long)]
    spot: Option<f64>,

    /// Strike price (default: next strike above spot)
    #[arg(long)]
    strike: Option<f64>,

    /// Days to expiry (default: configured expiry days)
    #[arg(long)]
    days: Option<i64>,

    /// Volatility in percent
    #[arg(long)]
    vol: Option<f64>,

    /// Risk-free rate in percent
    #[arg(long)]
    rate: Option<f64>,

    /// Path to a JSON configuration file
    #[arg(long, short)]
    config: Option<String>,

    /// Curve samples printed per chart
    #[arg(long, default_value = "10")]
    samples: usize,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    let args = Args::parse();

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
    if let Some(days) = args.days {
        inputs.expiry = now.date() + Duration::days(days);
    }
    if let Some(vol) = args.vol {
        inputs.volatility_pct = vol;
    }
    if let Some(rate) = args.rate {
        inputs.rate_pct = rate;
    }

    let params = inputs.to_params_with(now, &config.market)?;
    let report = build_dashboard_with(&params, &config);

    println!("Black-Scholes Visualization");
    println!("===========================\n");

    for option_type in OptionType::ALL {
        println!("{} premium: {:.3}", option_type, report.price(option_type));
    }
    println!();

    for option_type in OptionType::ALL {
        print_heatmap(report.grid(option_type));
    }

    for option_type in OptionType::ALL {
        for greek in GreekKind::CHART_ORDER {
            if let Some(curve) = report.curve(option_type, greek) {
                print_curve(curve, args.samples);
            }
        }
    }

    Ok(())
}

/// No live feed is wired in; the configured fallback spot is used
fn no_market_data() -> BSResult<f64> {
    Err(BSError::data("no market data source, pass --spot"))
}

fn shade(price: f64, lo: f64, hi: f64) -> char {
    if hi <= lo {
        return SHADES[0];
    }
    let frac = ((price - lo) / (hi - lo)).clamp(0.0, 1.0);
    SHADES[(frac * (SHADES.len() - 1) as f64).round() as usize]
}

fn print_heatmap(grid: &SensitivityMatrix) {
    println!("{} Price Heatmap", grid.option_type);
    print!("Vol\\Spot |");
    for spot in &grid.spots {
        print!(" {:>9}", spot);
    }
    println!();
    println!("---------+{}", "-".repeat(10 * grid.spots.len()));

    let (lo, hi) = grid.price_range().unwrap_or((0.0, 0.0));
    for (row, vol) in grid.volatilities.iter().enumerate() {
        print!("  {:>5.3}  |", vol);
        for price in grid.prices.row(row) {
            print!(" {}{:>8.1}", shade(*price, lo, hi), price);
        }
        println!();
    }
    println!();
}

fn print_curve(curve: &GreekCurveSeries, samples: usize) {
    println!("{}", curve.title());

    let step = (curve.points.len() / samples.max(1)).max(1);
    for point in curve.points.iter().step_by(step) {
        println!("  {:>10.1}  {:>12.6}", point.spot, point.value);
    }
    println!(
        "  current {:>10.1}  {:>12.6}\n",
        curve.current.spot, curve.current.value
    );
}
