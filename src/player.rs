//! Per-player round and game state.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// A seated player.
///
/// The hand, turn score and out flag live for one round; the total score
/// lives for the whole game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Seat index, stable for the game.
    id: u8,
    /// Cards drawn this round.
    hand: Vec<Card>,
    /// Sum of the hand's scores, or 0 after a bust.
    turn_score: u32,
    /// Points banked from finished rounds.
    total_score: u32,
    /// Whether the player stopped drawing this round.
    is_out: bool,
    /// Whether the player stopped because of a bust.
    busted: bool,
}

impl Player {
    /// Creates a player with an empty hand and no points.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self {
            id,
            hand: Vec::new(),
            turn_score: 0,
            total_score: 0,
            is_out: false,
            busted: false,
        }
    }

    /// Returns the player ID.
    #[must_use]
    pub const fn id(&self) -> u8 {
        self.id
    }

    /// Returns the cards in hand.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Returns the score of the current round.
    #[must_use]
    pub const fn turn_score(&self) -> u32 {
        self.turn_score
    }

    /// Returns the banked score.
    #[must_use]
    pub const fn total_score(&self) -> u32 {
        self.total_score
    }

    /// Returns whether the player is out for this round.
    #[must_use]
    pub const fn is_out(&self) -> bool {
        self.is_out
    }

    /// Returns whether the player busted this round.
    #[must_use]
    pub const fn is_busted(&self) -> bool {
        self.busted
    }

    /// Adds a card to the hand and rescores it.
    pub fn add_to_hand(&mut self, card: Card) {
        self.hand.push(card);
        self.recompute_turn_score();
    }

    /// Sets the turn score to the sum of the hand.
    pub fn recompute_turn_score(&mut self) {
        self.turn_score = self.hand.iter().map(|card| u32::from(card.score)).sum();
    }

    /// Returns whether any card in hand has this label.
    #[must_use]
    pub fn has_value(&self, value: &str) -> bool {
        self.hand.iter().any(|card| card.value == value)
    }

    /// Stops drawing for the rest of the round. Scores are untouched.
    pub const fn fold(&mut self) {
        self.is_out = true;
    }

    /// Zeroes the round score and folds.
    pub const fn bust(&mut self) {
        self.turn_score = 0;
        self.busted = true;
        self.fold();
    }

    /// Banks the turn score and resets the round state.
    ///
    /// Returns the cleared hand so the caller can discard it. Calling this
    /// twice in a row leaves the total unchanged.
    pub fn settle_round(&mut self) -> Vec<Card> {
        self.total_score += self.turn_score;
        self.turn_score = 0;
        self.is_out = false;
        self.busted = false;
        core::mem::take(&mut self.hand)
    }
}
