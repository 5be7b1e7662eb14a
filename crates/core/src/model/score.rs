use thiserror::Error;

use crate::model::ScoreTier;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScoreSummaryError {
    #[error("max possible points must be greater than zero")]
    ZeroMaxPoints,

    #[error("points ({points}) exceed max possible points ({max})")]
    PointsExceedMax { points: u32, max: u32 },
}

/// Final score of a completed quiz run, as shown on the finish screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreSummary {
    points: u32,
    max_possible_points: u32,
    highscore: u32,
}

impl ScoreSummary {
    /// Builds a summary, rejecting shapes that would break the percentage math.
    ///
    /// # Errors
    ///
    /// Returns `ScoreSummaryError::ZeroMaxPoints` if `max_possible_points` is zero.
    /// Returns `ScoreSummaryError::PointsExceedMax` if `points` exceeds the maximum.
    pub fn new(
        points: u32,
        max_possible_points: u32,
        highscore: u32,
    ) -> Result<Self, ScoreSummaryError> {
        if max_possible_points == 0 {
            return Err(ScoreSummaryError::ZeroMaxPoints);
        }
        if points > max_possible_points {
            return Err(ScoreSummaryError::PointsExceedMax {
                points,
                max: max_possible_points,
            });
        }

        Ok(Self {
            points,
            max_possible_points,
            highscore,
        })
    }

    #[must_use]
    pub fn points(&self) -> u32 {
        self.points
    }

    #[must_use]
    pub fn max_possible_points(&self) -> u32 {
        self.max_possible_points
    }

    #[must_use]
    pub fn highscore(&self) -> u32 {
        self.highscore
    }

    /// Score as a whole percentage of the maximum, rounded up.
    ///
    /// Any nonzero score reads as at least 1%.
    #[must_use]
    pub fn percentage(&self) -> u32 {
        let scaled = u64::from(self.points) * 100;
        let percentage = scaled.div_ceil(u64::from(self.max_possible_points));
        // points <= max_possible_points holds by construction, so this fits 0..=100.
        percentage as u32
    }

    /// Performance band for this score.
    #[must_use]
    pub fn tier(&self) -> ScoreTier {
        ScoreTier::from_percentage(self.percentage())
    }
}
