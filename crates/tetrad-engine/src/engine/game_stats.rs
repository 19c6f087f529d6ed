use serde::Serialize;

/// Score values for line clears.
///
/// Index corresponds to number of lines cleared by one landing:
/// - 0 lines: 0 points
/// - 1 line: 100 points
/// - 2 lines: 300 points
/// - 3 lines: 500 points
/// - 4 lines: 800 points
const SCORE_TABLE: [usize; 5] = [0, 100, 300, 500, 800];

/// Game statistics tracking score, lines cleared, and landed pieces.
///
/// - **Score**: Points earned from line clears
/// - **Level**: Derived from total lines cleared (1 level per 10 lines).
///   Display only; it does not change the fall interval.
/// - **Landed pieces**: Total number of pieces committed to the board
/// - **Line clear distribution**: Count of landings by lines cleared
///
/// # Example
///
/// ```
/// use tetrad_engine::GameStats;
///
/// let mut stats = GameStats::new();
/// stats.record_landing(4);
///
/// assert_eq!(stats.score(), 800);
/// assert_eq!(stats.total_cleared_lines(), 4);
/// assert_eq!(stats.line_cleared_counter()[4], 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameStats {
    score: usize,
    landed_pieces: usize,
    total_cleared_lines: usize,
    line_cleared_counter: [usize; 5],
}

impl Default for GameStats {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: 0,
            landed_pieces: 0,
            total_cleared_lines: 0,
            line_cleared_counter: [0; 5],
        }
    }

    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub const fn level(&self) -> usize {
        self.total_cleared_lines / 10
    }

    #[must_use]
    pub const fn landed_pieces(&self) -> usize {
        self.landed_pieces
    }

    #[must_use]
    pub const fn total_cleared_lines(&self) -> usize {
        self.total_cleared_lines
    }

    /// Returns a histogram of landings by lines cleared.
    ///
    /// Index `n` counts landings that cleared `n` lines.
    #[must_use]
    pub const fn line_cleared_counter(&self) -> &[usize; 5] {
        &self.line_cleared_counter
    }

    /// Updates statistics after a piece lands.
    ///
    /// A landing can complete at most the 4 rows the piece spans. Larger counts
    /// are still added to the line total but score nothing.
    pub fn record_landing(&mut self, cleared_lines: usize) {
        self.landed_pieces += 1;
        self.total_cleared_lines += cleared_lines;
        if let Some(count) = self.line_cleared_counter.get_mut(cleared_lines) {
            *count += 1;
        }
        self.score += SCORE_TABLE.get(cleared_lines).copied().unwrap_or(0);
    }
}
