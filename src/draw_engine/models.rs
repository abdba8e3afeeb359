use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Typical constructed deck size.
pub const DEFAULT_DECK_SIZE: u32 = 60;
/// A full playset of one card.
pub const DEFAULT_COPIES: u32 = 4;
/// Opening hand size.
pub const DEFAULT_DRAW: u32 = 7;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum DrawError {
    #[error("deck must contain at least one card")]
    EmptyDeck,
    #[error("{copies} copies do not fit in a deck of {deck_size} cards")]
    TooManyCopies { copies: u32, deck_size: u32 },
    #[error("cannot draw {draw} cards from a deck of {deck_size} cards")]
    DrawExceedsDeck { draw: u32, deck_size: u32 },
    #[error("confidence {0} is outside [0, 1]")]
    InvalidConfidence(f64),
    #[error("failed to serialize draw report: {source}")]
    Serialize {
        #[from]
        source: serde_json::Error,
    },
}

// ---------------------------------------------------------------------------
// Request / report types
// ---------------------------------------------------------------------------

/// One draw question: how likely is a card with `copies` copies to show up
/// when `draw` cards are taken from a shuffled deck of `deck_size` cards?
///
/// Missing fields fall back to the 60 / 4 / 7 opening-hand defaults when
/// deserialised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawRequest {
    pub copies: u32,
    pub deck_size: u32,
    pub draw: u32,
}

impl Default for DrawRequest {
    fn default() -> Self {
        DrawRequest {
            copies: DEFAULT_COPIES,
            deck_size: DEFAULT_DECK_SIZE,
            draw: DEFAULT_DRAW,
        }
    }
}

impl DrawRequest {
    /// Build a request, rejecting anything outside the mathematical domain.
    pub fn new(copies: u32, deck_size: u32, draw: u32) -> Result<Self, DrawError> {
        let request = DrawRequest { copies, deck_size, draw };
        request.validate()?;
        Ok(request)
    }

    pub fn with_copies(mut self, copies: u32) -> Self {
        self.copies = copies;
        self
    }

    pub fn with_deck_size(mut self, deck_size: u32) -> Self {
        self.deck_size = deck_size;
        self
    }

    pub fn with_draw(mut self, draw: u32) -> Self {
        self.draw = draw;
        self
    }

    /// Check `deck_size > 0`, `copies <= deck_size` and `draw <= deck_size`.
    pub fn validate(&self) -> Result<(), DrawError> {
        if self.deck_size == 0 {
            return Err(DrawError::EmptyDeck);
        }
        if self.copies > self.deck_size {
            return Err(DrawError::TooManyCopies {
                copies: self.copies,
                deck_size: self.deck_size,
            });
        }
        if self.draw > self.deck_size {
            return Err(DrawError::DrawExceedsDeck {
                draw: self.draw,
                deck_size: self.deck_size,
            });
        }
        Ok(())
    }
}

/// Every figure computed for a [`DrawRequest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawReport {
    pub request: DrawRequest,
    /// Probability that no copy appears in the draw.
    pub absent: f64,
    /// Probability that at least one copy appears in the draw.
    pub present: f64,
    /// Expected 1-based position of the first copy when drawing through the
    /// whole deck. `None` when the deck holds no copies.
    pub expected_first_draw: Option<f64>,
    /// Expected number of copies in the draw.
    pub expected_count: f64,
}

impl DrawReport {
    /// Pretty-printed JSON for display or logging.
    pub fn to_json(&self) -> Result<String, DrawError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
