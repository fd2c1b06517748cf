//! Game engine and state management.

use core::sync::atomic::{AtomicU32, Ordering};

use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::deck::{Deck, Discard};
use crate::error::SetupError;
use crate::options::{GameOptions, MAX_PLAYERS};
use crate::player::Player;
use crate::result::Standing;

mod round;
pub mod state;
mod turn;

pub use state::GameState;
pub use turn::next_active;

/// A Flip 7 game engine that manages the deck, players, and round flow.
///
/// The game owns the deck, the discard pile and every player's state.
/// Players take turns through [`Game::play_turn`]; rounds are settled and
/// re-dealt automatically until someone reaches the target score.
///
/// Every mutating call takes the `state` lock first and keeps it for the
/// whole call, so one game never runs two turns at once. Other locks are
/// taken in field order: players, current, dealer, deck, discard, rng.
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    pub state: Mutex<GameState>,
    /// Players in seat order.
    pub players: Mutex<Vec<Player>>,
    /// Seat of the player to act.
    current: Mutex<usize>,
    /// Seat of the dealer.
    dealer: Mutex<usize>,
    /// Draw pile.
    pub deck: Mutex<Deck>,
    /// Discard pile.
    pub discard: Mutex<Discard>,
    /// Random number generator used for every reshuffle.
    rng: Mutex<ChaCha8Rng>,
    /// Round number, starting at 1.
    round: AtomicU32,
    /// Number of cards in play, fixed at creation.
    total_cards: usize,
}

impl Game {
    /// Creates a new game with the given seed and deals the first round.
    ///
    /// # Errors
    ///
    /// Returns an error if the player count is 0 or above [`MAX_PLAYERS`].
    ///
    /// # Example
    ///
    /// ```
    /// use flip7::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default().with_players(3), 42).unwrap();
    /// assert_eq!(game.state(), GameState::PlayerTurn);
    /// assert_eq!(game.current_player(), Some(0));
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, SetupError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::build();
        deck.shuffle(&mut rng);

        Self::from_parts(options, deck, rng)
    }

    /// Creates a game that deals from `deck` as given, without shuffling.
    ///
    /// The seed is only used when the discard pile is shuffled back in.
    ///
    /// # Errors
    ///
    /// Returns an error if the player count is invalid or `deck` cannot
    /// cover the opening deal.
    pub fn with_deck(options: GameOptions, seed: u64, deck: Deck) -> Result<Self, SetupError> {
        Self::from_parts(options, deck, ChaCha8Rng::seed_from_u64(seed))
    }

    fn from_parts(
        options: GameOptions,
        mut deck: Deck,
        mut rng: ChaCha8Rng,
    ) -> Result<Self, SetupError> {
        match options.players {
            0 => return Err(SetupError::NoPlayers),
            requested if requested > MAX_PLAYERS => {
                return Err(SetupError::TooManyPlayers {
                    requested,
                    max: MAX_PLAYERS,
                });
            }
            _ => {}
        }

        let mut players: Vec<Player> = (0..options.players).map(Player::new).collect();
        let mut discard = Discard::new();
        let total_cards = deck.len();

        round::deal_round(&mut players, &mut deck, &mut discard, &mut rng)?;
        log::debug!(
            "new game: {} players, {} cards, target {}",
            options.players,
            total_cards,
            options.target_score
        );

        Ok(Self {
            options,
            state: Mutex::new(GameState::PlayerTurn),
            players: Mutex::new(players),
            current: Mutex::new(0),
            dealer: Mutex::new(0),
            deck: Mutex::new(deck),
            discard: Mutex::new(discard),
            rng: Mutex::new(rng),
            round: AtomicU32::new(1),
            total_cards,
        })
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        *self.state.lock()
    }

    /// Returns whether the game has finished.
    pub fn is_game_over(&self) -> bool {
        self.state() == GameState::GameOver
    }

    /// Returns the player ID whose turn it is.
    ///
    /// Returns `None` once the game is over.
    pub fn current_player(&self) -> Option<u8> {
        let state = self.state.lock();
        if *state == GameState::GameOver {
            return None;
        }
        let players = self.players.lock();
        let current = self.current.lock();
        players.get(*current).map(Player::id)
    }

    /// Returns the dealer's player ID.
    pub fn dealer(&self) -> u8 {
        *self.dealer.lock() as u8
    }

    /// Returns the current round number, starting at 1.
    pub fn round(&self) -> u32 {
        self.round.load(Ordering::SeqCst)
    }

    /// Returns a snapshot of the specified player.
    pub fn player(&self, player_id: u8) -> Option<Player> {
        self.players.lock().get(player_id as usize).cloned()
    }

    /// Returns the number of players.
    pub fn player_count(&self) -> usize {
        self.players.lock().len()
    }

    /// Returns banked scores, highest first. Equal totals keep seat order.
    pub fn standings(&self) -> Vec<Standing> {
        let mut standings: Vec<Standing> = self
            .players
            .lock()
            .iter()
            .map(|player| Standing {
                player_id: player.id(),
                total_score: player.total_score(),
            })
            .collect();
        standings.sort_by(|a, b| b.total_score.cmp(&a.total_score));
        standings
    }

    /// Returns the winning player IDs.
    ///
    /// Empty until the game is over.
    pub fn winners(&self) -> Vec<u8> {
        let state = self.state.lock();
        if *state != GameState::GameOver {
            return Vec::new();
        }
        round::winners(&self.players.lock(), &self.options)
    }

    /// Returns the number of cards left in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.lock().len()
    }

    /// Returns the number of cards in the discard pile.
    pub fn discard_len(&self) -> usize {
        self.discard.lock().len()
    }

    /// Returns the number of cards held in players' hands.
    pub fn cards_in_hands(&self) -> usize {
        self.players.lock().iter().map(|player| player.hand().len()).sum()
    }

    /// Returns the number of cards the game was created with.
    pub const fn total_cards(&self) -> usize {
        self.total_cards
    }
}
