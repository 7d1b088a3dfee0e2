use uuid::Uuid;

/// Errors raised while grading a single pick against a final score.
///
/// Grading is evaluated per pick: one bad pick is reported alongside its
/// successfully graded siblings and never aborts the batch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GradingError {
    /// The pick was stored without a spread value. Grading must fail rather
    /// than assume a default line.
    #[error("Pick {pick_id} has no spread value and cannot be graded")]
    MissingSpread { pick_id: Uuid },

    /// A final score was negative.
    #[error("Malformed final score {home}-{away}: scores must be non-negative")]
    MalformedScore { home: i32, away: i32 },
}
