//! Example: Basic options pricing with Black-Scholes
//!
//! Run with: cargo run --example basic_pricing

use bs_options::prelude::*;

fn main() {
    // Option parameters
    let spot = 25000.0;
    let strike = 25100.0;
    let time = 15.0 / 365.0; // 15 days
    let rate = 0.06731;
    let vol = 0.40;

    let params = MarketParameters::new(rate, spot, strike, time, vol);

    println!("=== Black-Scholes Pricing ===\n");
    println!("Spot:     {:.2}", spot);
    println!("Strike:   {:.2}", strike);
    println!("Time:     {:.4} years ({:.0} days)", time, time * 365.0);
    println!("Rate:     {:.3}%", rate * 100.0);
    println!("Vol:      {:.1}%\n", vol * 100.0);

    let (d1, d2) = d1_d2(&params);
    println!("d1 = {:.6}, d2 = {:.6}\n", d1, d2);

    let call_price = bs_price(&params, OptionType::Call);
    println!("Call Price: {:.3}", call_price);

    let put_price = bs_price(&params, OptionType::Put);
    println!("Put Price:  {:.3}", put_price);

    // Verify put-call parity: C - P = S - K*e^(-rT)
    let parity_lhs = call_price - put_price;
    let parity_rhs = spot - strike * (-rate * time).exp();
    println!("\nPut-Call Parity Check:");
    println!("  C - P = {:.4}", parity_lhs);
    println!("  S - K*e^(-rT) = {:.4}", parity_rhs);
    println!("  Difference: {:.6}", (parity_lhs - parity_rhs).abs());

    println!("\n=== Greek Summary ===\n");
    let summary = summarize(&params);
    for (kind, call, put) in summary.rows() {
        println!("{:<6} call {:>12} put {:>12}", kind.label(), call, put);
    }

    // Expired contract: the model reports 0.0 instead of intrinsic value
    println!("\n=== Degenerate Inputs ===\n");
    let expired = params.with_time(0.0);
    println!("T = 0 call price: {}", bs_price(&expired, OptionType::Call));
    match bs_greeks(&expired, OptionType::Call) {
        Valuation::Computed(g) => println!("T = 0 greeks: {:?}", g),
        Valuation::Degenerate => println!("T = 0 greeks: not available"),
    }
}
