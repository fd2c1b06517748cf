//! Turn and round result types.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// What the current player did on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnAction {
    /// Drew a card and kept it.
    Drew(Card),
    /// Drew a duplicate number card and busted. The card was discarded.
    Busted(Card),
    /// Chose to stop drawing.
    Folded,
}

/// Result of a single turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnResult {
    /// The player who acted.
    pub player_id: u8,
    /// What happened.
    pub action: TurnAction,
    /// Settlement of the round, if this turn ended it.
    pub round: Option<RoundResult>,
}

impl TurnResult {
    /// Returns whether this turn ended the round.
    #[must_use]
    pub const fn round_ended(&self) -> bool {
        self.round.is_some()
    }

    /// Returns whether this turn ended the game.
    #[must_use]
    pub fn game_over(&self) -> bool {
        self.round.as_ref().is_some_and(|round| round.game_over)
    }

    /// Returns the winners if this turn ended the game.
    #[must_use]
    pub fn winners(&self) -> Option<&[u8]> {
        self.round
            .as_ref()
            .filter(|round| round.game_over)
            .map(|round| round.winners.as_slice())
    }
}

/// One player's line in a round settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerRoundResult {
    /// The player ID.
    pub player_id: u8,
    /// Points banked this round.
    pub round_score: u32,
    /// Total after banking.
    pub total_score: u32,
    /// Whether the player busted.
    pub busted: bool,
}

/// Result of a settled round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Round number, starting at 1.
    pub round: u32,
    /// Results in seat order.
    pub players: Vec<PlayerRoundResult>,
    /// Whether someone reached the target score.
    pub game_over: bool,
    /// Winning player IDs. Empty unless the game is over.
    pub winners: Vec<u8>,
}

/// A player's position in the standings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Standing {
    /// The player ID.
    pub player_id: u8,
    /// Banked score.
    pub total_score: u32,
}
