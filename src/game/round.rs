use core::sync::atomic::Ordering;

use alloc::vec::Vec;
use rand::Rng;

use crate::deck::{Deck, Discard, draw_with_reclaim};
use crate::error::{DrawError, TurnError};
use crate::options::{GameOptions, TieBreak};
use crate::player::Player;
use crate::result::{PlayerRoundResult, RoundResult};

use super::{Game, GameState};

/// Deals one card to every player in seat order.
pub(super) fn deal_round<R: Rng + ?Sized>(
    players: &mut [Player],
    deck: &mut Deck,
    discard: &mut Discard,
    rng: &mut R,
) -> Result<(), DrawError> {
    for player in players.iter_mut() {
        let card = draw_with_reclaim(deck, discard, rng)?;
        player.add_to_hand(card);
    }
    Ok(())
}

/// Returns the winners, or nothing if no one has reached the target.
pub(super) fn winners(players: &[Player], options: &GameOptions) -> Vec<u8> {
    let Some(best) = players.iter().map(Player::total_score).max() else {
        return Vec::new();
    };
    if best < options.target_score {
        return Vec::new();
    }

    let mut leaders = players
        .iter()
        .filter(|player| player.total_score() == best)
        .map(Player::id);

    match options.tie_break {
        TieBreak::Shared => leaders.collect(),
        TieBreak::LowestSeat => leaders.next().into_iter().collect(),
    }
}

impl Game {
    /// Settles the round and either ends the game or deals the next round.
    ///
    /// Called with the `state`, `players` and `current` locks held.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub(super) fn finish_round(
        &self,
        players: &mut [Player],
        state: &mut GameState,
        current: &mut usize,
    ) -> Result<RoundResult, TurnError> {
        *state = GameState::RoundOver;

        let mut dealer = self.dealer.lock();
        let mut deck = self.deck.lock();
        let mut discard = self.discard.lock();
        let mut rng = self.rng.lock();

        let round = self.round.load(Ordering::SeqCst);
        let mut results = Vec::with_capacity(players.len());

        for player in players.iter_mut() {
            let busted = player.is_busted();
            let round_score = player.turn_score();
            discard.extend(player.settle_round());
            results.push(PlayerRoundResult {
                player_id: player.id(),
                round_score,
                total_score: player.total_score(),
                busted,
            });
        }

        let winners = winners(players, &self.options);
        let game_over = !winners.is_empty();

        if game_over {
            *state = GameState::GameOver;
            log::debug!("round {round}: game over, winners {winners:?}");
        } else {
            *dealer = (*dealer + 1) % players.len();
            self.round.fetch_add(1, Ordering::SeqCst);
            log::debug!("round {round} settled, dealer is now seat {}", *dealer);

            *state = GameState::Dealing;
            deal_round(players, &mut deck, &mut discard, &mut *rng)?;
            *current = 0;
            *state = GameState::PlayerTurn;
        }

        Ok(RoundResult {
            round,
            players: results,
            game_over,
            winners,
        })
    }
}
