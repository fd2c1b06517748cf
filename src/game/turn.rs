use crate::deck::draw_with_reclaim;
use crate::error::TurnError;
use crate::player::Player;
use crate::result::{TurnAction, TurnResult};

use super::{Game, GameState};

/// Finds the next seat after `from` whose player is still in the round.
///
/// The scan wraps around and checks `from` itself last. Returns `None` when
/// every player is out.
#[must_use]
pub fn next_active(players: &[Player], from: usize) -> Option<usize> {
    let len = players.len();
    (1..=len)
        .map(|offset| (from + offset) % len)
        .find(|&seat| players.get(seat).is_some_and(|player| !player.is_out()))
}

impl Game {
    /// Plays the current player's turn.
    ///
    /// With `will_draw` the player draws one card, busting on a duplicate
    /// number; otherwise the player stops for the round. When the last
    /// player drops out the round is settled and the next one dealt, and the
    /// returned result carries the settlement.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, the current player is already
    /// out, or no cards are left to draw.
    pub fn play_turn(&self, will_draw: bool) -> Result<TurnResult, TurnError> {
        self.take_turn(None, will_draw)
    }

    /// Plays a turn on behalf of `player_id`.
    ///
    /// # Errors
    ///
    /// Same as [`Game::play_turn`], plus [`TurnError::NotYourTurn`] when
    /// another player is due to act.
    pub fn play_turn_for(&self, player_id: u8, will_draw: bool) -> Result<TurnResult, TurnError> {
        self.take_turn(Some(player_id), will_draw)
    }

    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire turn"
    )]
    fn take_turn(&self, expected: Option<u8>, will_draw: bool) -> Result<TurnResult, TurnError> {
        let mut state = self.state.lock();
        match *state {
            GameState::PlayerTurn => {}
            GameState::GameOver => return Err(TurnError::GameOver),
            GameState::Dealing | GameState::RoundOver => return Err(TurnError::InvalidState),
        }

        let mut players = self.players.lock();
        let mut current = self.current.lock();
        let seat = *current;

        let player = players.get_mut(seat).ok_or(TurnError::InvalidState)?;
        let player_id = player.id();
        if expected.is_some_and(|id| id != player_id) {
            return Err(TurnError::NotYourTurn);
        }
        if player.is_out() {
            return Err(TurnError::PlayerOut);
        }

        let action = if will_draw {
            self.draw_for(player)?
        } else {
            player.fold();
            TurnAction::Folded
        };
        log::trace!("player {player_id}: {action:?}");

        let round = match next_active(&players, seat) {
            Some(next) => {
                *current = next;
                None
            }
            None => Some(self.finish_round(players.as_mut_slice(), &mut state, &mut current)?),
        };

        Ok(TurnResult {
            player_id,
            action,
            round,
        })
    }

    /// Draws a card for `player`. A number card whose label is already in
    /// hand busts.
    fn draw_for(&self, player: &mut Player) -> Result<TurnAction, TurnError> {
        let mut deck = self.deck.lock();
        let mut discard = self.discard.lock();
        let mut rng = self.rng.lock();

        let card = draw_with_reclaim(&mut deck, &mut discard, &mut *rng)?;

        if card.is_number() && player.has_value(card.value) {
            discard.add(card);
            player.bust();
            Ok(TurnAction::Busted(card))
        } else {
            player.add_to_hand(card);
            Ok(TurnAction::Drew(card))
        }
    }
}
