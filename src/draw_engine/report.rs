use crate::draw_engine::{
    evaluator::{
        draws_for_confidence, expected_card_count, expected_first_draw,
        probability_card_absent,
    },
    models::{DrawError, DrawReport, DrawRequest},
};

/// Compute every figure for `request` without validating it.
pub fn evaluate(request: DrawRequest) -> DrawReport {
    let DrawRequest { copies, deck_size, draw } = request;

    let absent = probability_card_absent(copies, deck_size, draw);
    let first = expected_first_draw(copies, deck_size);
    let report = DrawReport {
        request,
        absent,
        present: 1.0 - absent,
        expected_first_draw: first.is_finite().then_some(first),
        expected_count: expected_card_count(copies, deck_size, draw),
    };

    tracing::debug!(
        target: "deck_odds::report",
        copies,
        deck_size,
        draw,
        absent = report.absent,
        present = report.present,
        expected_first_draw = ?report.expected_first_draw,
        expected_count = report.expected_count,
        "draw evaluated"
    );
    report
}

/// Validate `request`, then [`evaluate`] it.
pub fn try_evaluate(request: DrawRequest) -> Result<DrawReport, DrawError> {
    request.validate()?;
    Ok(evaluate(request))
}

impl DrawRequest {
    /// Smallest draw from this request's deck that shows a copy with at least
    /// `confidence` probability. The request's own `draw` is ignored.
    pub fn draws_for_confidence(&self, confidence: f64) -> Result<Option<u32>, DrawError> {
        self.validate()?;
        if !(0.0..=1.0).contains(&confidence) {
            return Err(DrawError::InvalidConfidence(confidence));
        }
        Ok(draws_for_confidence(self.copies, self.deck_size, confidence))
    }
}
