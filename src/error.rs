//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when drawing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// Both the deck and the discard pile are empty.
    #[error("deck and discard pile are both empty")]
    ExhaustedDeck,
}

/// Errors that can occur when creating a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// The game needs at least one player.
    #[error("no players")]
    NoPlayers,
    /// More players than the table seats.
    #[error("too many players: {requested}, maximum: {max}")]
    TooManyPlayers {
        /// Requested player count.
        requested: u8,
        /// Largest allowed player count.
        max: u8,
    },
    /// Not enough cards to deal the opening round.
    #[error("not enough cards to deal the opening round")]
    ExhaustedDeck,
}

impl From<DrawError> for SetupError {
    fn from(err: DrawError) -> Self {
        match err {
            DrawError::ExhaustedDeck => Self::ExhaustedDeck,
        }
    }
}

/// Errors that can occur when playing a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// The game has already finished.
    #[error("game is over")]
    GameOver,
    /// The current player is already out for this round.
    #[error("player is out for this round")]
    PlayerOut,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// Invalid game state for playing a turn.
    ///
    /// Only returned if a call observes `Dealing` or `RoundOver`, which the
    /// engine never leaves behind.
    #[error("invalid game state for playing a turn")]
    InvalidState,
    /// No cards left in the deck or the discard pile.
    #[error("deck and discard pile are both empty")]
    ExhaustedDeck,
}

impl From<DrawError> for TurnError {
    fn from(err: DrawError) -> Self {
        match err {
            DrawError::ExhaustedDeck => Self::ExhaustedDeck,
        }
    }
}
