//! Opening-hand odds for common deck shapes.
//!
//! Run with: `cargo run --example opening_hand`
//! Set `RUST_LOG=deck_odds=debug` to see each evaluation logged.
//!
//! 1. **Playset table** — 1 to 4 copies in a 60-card deck, 7-card hand.
//! 2. **Limited deck** — the same table for a 40-card deck.
//! 3. **Confidence** — how deep you must dig to see a copy 50/90/99% of the time.
//! 4. **JSON** — the full report for the default request.

use deck_odds::{evaluate, DrawError, DrawRequest};
use tracing_subscriber::{fmt, EnvFilter};

/// Print one row per copy count for a deck size and hand size.
fn print_table(deck_size: u32, draw: u32) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  {deck_size}-card deck, {draw}-card hand");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  copies   seen     missed   avg copies   first copy at");
    for copies in 1..=4 {
        let report = evaluate(DrawRequest { copies, deck_size, draw });
        let first = report
            .expected_first_draw
            .map(|e| format!("{e:.2}"))
            .unwrap_or_else(|| "never".to_string());
        println!(
            "  {copies:>6}   {:>6.2}%  {:>6.2}%  {:>10.3}   {first:>13}",
            report.present * 100.0,
            report.absent * 100.0,
            report.expected_count,
        );
    }
    println!();
}

fn main() -> Result<(), DrawError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).init();

    print_table(60, 7);
    print_table(40, 7);

    println!("══ Cards needed to see a 4-of ══");
    println!();
    let request = DrawRequest::default();
    for confidence in [0.5, 0.9, 0.99] {
        match request.draws_for_confidence(confidence)? {
            Some(draw) => println!("  {:>4.0}%  →  {draw} cards", confidence * 100.0),
            None => println!("  {:>4.0}%  →  unreachable", confidence * 100.0),
        }
    }
    println!();

    println!("══ Report (default request) ══");
    println!();
    println!("{}", evaluate(request).to_json()?);
    Ok(())
}
