//! Game configuration options.

use crate::card::DECK_SIZE;

/// Total score that ends the game.
pub const WINNING_SCORE: u32 = 200;

/// Largest supported table.
///
/// Eleven hands can hold at most 78 of the 79 number cards without a
/// duplicate (one of the twelve `12`s is always left over), so with the
/// standard deck the draw and discard piles never run dry mid-round. From
/// twelve players up every card could sit in a hand at once.
pub const MAX_PLAYERS: u8 = 11;

const _: () = assert!((MAX_PLAYERS as usize) < DECK_SIZE);

/// How a tie for the highest total is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum TieBreak {
    /// Every player sharing the highest total wins.
    #[default]
    Shared,
    /// The tied player with the lowest seat wins.
    LowestSeat,
}

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use flip7::{GameOptions, TieBreak};
///
/// let options = GameOptions::default()
///     .with_players(4)
///     .with_target_score(150)
///     .with_tie_break(TieBreak::LowestSeat);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of players.
    pub players: u8,
    /// Total score at which the game ends.
    pub target_score: u32,
    /// Tie resolution for the final standings.
    pub tie_break: TieBreak,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            players: 2,
            target_score: WINNING_SCORE,
            tie_break: TieBreak::Shared,
        }
    }
}

impl GameOptions {
    /// Sets the number of players.
    ///
    /// # Example
    ///
    /// ```
    /// use flip7::GameOptions;
    ///
    /// let options = GameOptions::default().with_players(5);
    /// assert_eq!(options.players, 5);
    /// ```
    #[must_use]
    pub const fn with_players(mut self, players: u8) -> Self {
        self.players = players;
        self
    }

    /// Sets the score that ends the game.
    ///
    /// # Example
    ///
    /// ```
    /// use flip7::GameOptions;
    ///
    /// let options = GameOptions::default().with_target_score(100);
    /// assert_eq!(options.target_score, 100);
    /// ```
    #[must_use]
    pub const fn with_target_score(mut self, target_score: u32) -> Self {
        self.target_score = target_score;
        self
    }

    /// Sets the tie resolution.
    ///
    /// # Example
    ///
    /// ```
    /// use flip7::{GameOptions, TieBreak};
    ///
    /// let options = GameOptions::default().with_tie_break(TieBreak::LowestSeat);
    /// assert_eq!(options.tie_break, TieBreak::LowestSeat);
    /// ```
    #[must_use]
    pub const fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }
}
