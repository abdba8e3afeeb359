//! Core draw engine — hypergeometric odds for one target card.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Request/report types, defaults, and the `DrawError` enum |
//! | `evaluator` | The pure probability and expectation functions |
//! | `report`    | Entry points `evaluate()` / `try_evaluate()` bundling everything |

pub mod evaluator;
pub mod models;
pub mod report;

pub use evaluator::{
    draws_for_confidence, expected_card_count, expected_first_draw,
    probability_card_absent, probability_card_present, product_of,
};
pub use models::{
    DrawError, DrawReport, DrawRequest, DEFAULT_COPIES, DEFAULT_DECK_SIZE, DEFAULT_DRAW,
};
pub use report::{evaluate, try_evaluate};
