//
// ─── SCORE TIER ───────────────────────────────────────────────────────────────
//

/// Performance band for a final score percentage.
///
/// Bands cover the full 0-100 range with no gaps or overlap:
/// - `Top`: exactly 100
/// - `Second`: 80 to 99
/// - `Third`: 60 to 79
/// - `Mid`: 40 to 59
/// - `Low`: 1 to 39
/// - `Zero`: exactly 0, even though 0 also sits below 40
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    /// Perfect run.
    Top,
    /// Strong run, short of perfect.
    Second,
    /// Solid run.
    Third,
    /// Middling run.
    Mid,
    /// Weak run that still scored something.
    Low,
    /// Scored nothing at all.
    Zero,
}

impl ScoreTier {
    /// Maps a percentage to its performance band.
    ///
    /// Zero wins over `Low`: a scoreless run is its own band, not merely a
    /// weak one. Valid summaries never exceed 100; the open arm keeps the
    /// match exhaustive over `u32`.
    #[must_use]
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            100.. => Self::Top,
            80..=99 => Self::Second,
            60..=79 => Self::Third,
            40..=59 => Self::Mid,
            1..=39 => Self::Low,
            0 => Self::Zero,
        }
    }

    /// Emoji glyph shown next to the score on the finish screen.
    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            ScoreTier::Top => "🤴 🏆",
            ScoreTier::Second => "😎 🥈",
            ScoreTier::Third => "🤨 🥉",
            ScoreTier::Mid => "😉",
            ScoreTier::Low => "🐒",
            ScoreTier::Zero => "🤧",
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
