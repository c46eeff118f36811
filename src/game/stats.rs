//! Cumulative win/loss statistics
//!
//! Stats only change through [`reduce`], a pure transition function.

/// Wins and losses accumulated since the program started
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub wins: u32,
    pub losses: u32,
}

/// Event fed to the stats reducer when a session ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsAction {
    Win,
    Loss,
}

/// Apply a finished game to the running stats
///
/// # Examples
/// ```
/// use hangman::game::{Stats, StatsAction, reduce};
///
/// let stats = reduce(Stats::default(), StatsAction::Win);
/// assert_eq!(stats, Stats { wins: 1, losses: 0 });
/// ```
#[must_use]
pub const fn reduce(stats: Stats, action: StatsAction) -> Stats {
    match action {
        StatsAction::Win => Stats {
            wins: stats.wins.saturating_add(1),
            ..stats
        },
        StatsAction::Loss => Stats {
            losses: stats.losses.saturating_add(1),
            ..stats
        },
    }
}

impl Stats {
    /// Number of games that reached a win or a loss
    #[must_use]
    pub const fn completed(self) -> u32 {
        self.wins.saturating_add(self.losses)
    }

    /// Percentage of completed games that were won, 0 when none completed
    #[must_use]
    pub fn winrate(self) -> f64 {
        match self.completed() {
            0 => 0.0,
            total => f64::from(self.wins) / f64::from(total) * 100.0,
        }
    }
}
