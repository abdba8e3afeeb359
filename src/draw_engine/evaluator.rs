//! Draw-without-replacement math for a single target card.
//!
//! Everything here is a pure function of `(copies, deck_size, draw)`. Inputs
//! are not validated; see [`DrawRequest::validate`](super::models::DrawRequest::validate)
//! for the checked path. Outside the domain the functions stay NaN-free where
//! they can: `copies > deck_size` behaves like an all-target deck, and a draw
//! larger than the deck is absent with probability 0 (or 1 when `copies == 0`).

/// Product of a sequence, `1.0` when empty. Streams the input.
pub fn product_of<I>(xs: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    xs.into_iter().fold(1.0, |acc, x| acc * x)
}

/// Probability that none of the `copies` target cards is among `draw` cards
/// taken from a deck of `deck_size`.
///
/// Computed as `C(m, draw) / C(deck_size, draw)` with `m = deck_size - copies`,
/// written as the descending product `Π (m - i) / (deck_size - i)` so large
/// decks never build factorials.
pub fn probability_card_absent(copies: u32, deck_size: u32, draw: u32) -> f64 {
    if copies == 0 {
        return 1.0;
    }
    let misses = deck_size.saturating_sub(copies);
    // C(misses, draw) = 0: a target card is unavoidable.
    if draw > misses {
        return 0.0;
    }
    product_of((0..draw).map(|i| f64::from(misses - i) / f64::from(deck_size - i)))
}

/// Probability that at least one copy is among the drawn cards.
pub fn probability_card_present(copies: u32, deck_size: u32, draw: u32) -> f64 {
    1.0 - probability_card_absent(copies, deck_size, draw)
}

/// Expected 1-based draw index at which the first copy turns up when drawing
/// through the deck one card at a time. Infinite when `copies == 0`.
///
/// Sums `n * P(first copy at draw n)` over `n = 1..=deck_size - copies + 1`;
/// past that point a copy has already been seen with certainty. The miss
/// probability of the draws so far is carried along, so the cost is linear
/// in the deck size.
pub fn expected_first_draw(copies: u32, deck_size: u32) -> f64 {
    if copies == 0 {
        return f64::INFINITY;
    }
    let copies = copies.min(deck_size);
    let misses = deck_size - copies;
    let last_possible = misses + 1;
    let copies_f = f64::from(copies);

    (1..=deck_size)
        .scan(1.0, |miss_so_far, n| {
            let seen = n - 1;
            let remaining = f64::from(deck_size - seen);
            let hit_now = *miss_so_far * copies_f / remaining;
            // seen <= misses inside the truncated range
            *miss_so_far *= f64::from(misses - seen) / remaining;
            Some(f64::from(n) * hit_now)
        })
        .take(last_possible as usize)
        .fold(0.0, |acc, term| acc + term)
}

/// Expected number of copies in the draw: `draw * copies / deck_size`.
///
/// An empty deck yields nothing, so the count is `0.0` there.
pub fn expected_card_count(copies: u32, deck_size: u32, draw: u32) -> f64 {
    if deck_size == 0 {
        return 0.0;
    }
    f64::from(draw) * f64::from(copies.min(deck_size)) / f64::from(deck_size)
}

/// Smallest draw size whose presence probability reaches `confidence`.
///
/// Returns `None` when `confidence` is not in `[0, 1]` or no draw from the
/// deck gets there (no copies at all).
pub fn draws_for_confidence(copies: u32, deck_size: u32, confidence: f64) -> Option<u32> {
    if !(0.0..=1.0).contains(&confidence) {
        return None;
    }
    let found = (0..=deck_size)
        .find(|&draw| probability_card_present(copies, deck_size, draw) >= confidence);
    tracing::trace!(
        target: "deck_odds::evaluator",
        copies,
        deck_size,
        confidence,
        draw = ?found,
        "confidence search finished"
    );
    found
}
