//! Game state types.

/// Game state.
///
/// `Dealing` and `RoundOver` only exist inside a single call; between calls
/// a game is either waiting for a turn or finished. The re-deal after a
/// settlement draws from a deck and discard pile that hold every card again,
/// so it cannot fail and a caller never observes the transient states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Dealing the opening card of a round.
    Dealing,
    /// Waiting for the current player's turn.
    PlayerTurn,
    /// Every player is out and the round is being settled.
    RoundOver,
    /// A player reached the target score. No more turns are accepted.
    GameOver,
}
