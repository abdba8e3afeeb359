//! # deck_odds
//!
//! Draw odds for a single card in a shuffled deck.
//!
//! Given a deck of `deck_size` cards holding `copies` copies of one target
//! card, this library answers the usual deck-building questions under a
//! uniform draw-without-replacement model:
//!
//! - how likely the card is to be missing from (or present in) a draw,
//! - at which draw the first copy turns up on average,
//! - how many copies a draw holds on average,
//! - how many cards must be drawn to see a copy with a given confidence.
//!
//! ## How it works
//!
//! 1. Describe the situation with a [`DrawRequest`] (defaults to a 60-card
//!    deck, a 4-copy card and a 7-card opening hand).
//! 2. Call [`evaluate`] (or [`try_evaluate`] to reject impossible decks
//!    first). The returned [`DrawReport`] carries every figure and
//!    serialises to JSON.
//! 3. For one-off numbers, call the free functions such as
//!    [`probability_card_present`] directly.
//!
//! ## Quick start
//!
//! ```rust
//! use deck_odds::{evaluate, probability_card_absent, DrawRequest};
//!
//! let report = evaluate(DrawRequest::default());
//! assert!((report.present - 0.3994996257446656).abs() < 1e-12);
//!
//! // Singleton in the opening hand:
//! let miss = probability_card_absent(1, 60, 7);
//! println!("a singleton is missing {:.1}% of the time", miss * 100.0);
//!
//! // Checked construction:
//! assert!(DrawRequest::new(4, 60, 61).is_err());
//! ```

pub mod draw_engine;

// Convenience re-exports so callers can use `deck_odds::evaluate`
// directly without reaching into `draw_engine::`.
pub use draw_engine::{
    draws_for_confidence, evaluate, expected_card_count, expected_first_draw,
    probability_card_absent, probability_card_present, product_of, try_evaluate,
    DrawError, DrawReport, DrawRequest, DEFAULT_COPIES, DEFAULT_DECK_SIZE, DEFAULT_DRAW,
};
