//! Draw pile and discard pile.

extern crate alloc;

use alloc::vec::Vec;
use core::iter;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{BONUS_POINTS, Card, DECK_SIZE, EFFECT_CARDS, MAX_FACE};
use crate::error::DrawError;

/// The draw pile. The last card in the vector is the top of the deck.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds the full, unshuffled deck.
    #[must_use]
    pub fn build() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for face in 0..=MAX_FACE {
            let copies = if face == 0 { 1 } else { face as usize };
            if let Some(card) = Card::number(face) {
                cards.extend(iter::repeat_n(card, copies));
            }
        }

        cards.extend(BONUS_POINTS.into_iter().filter_map(Card::bonus));
        cards.push(Card::multiplier());

        for _ in 0..EFFECT_CARDS {
            cards.push(Card::effect());
        }

        Self { cards }
    }

    /// Creates a deck that deals `draws` in order, first element first.
    #[must_use]
    pub fn from_draws(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Shuffles the deck with the given random source.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Cards taken out of play by busts and round ends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discard {
    cards: Vec<Card>,
}

impl Discard {
    /// Creates an empty discard pile.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Adds every card from an emptied hand.
    pub fn extend<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.cards.extend(cards);
    }

    /// Moves every card into `deck` and shuffles it.
    ///
    /// The discard pile is empty afterwards.
    pub fn reclaim<R: Rng + ?Sized>(&mut self, deck: &mut Deck, rng: &mut R) {
        deck.cards.append(&mut self.cards);
        deck.shuffle(rng);
    }

    /// Returns the discarded cards.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of discarded cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Draws the top card, refilling the deck from `discard` only if it is empty.
///
/// # Errors
///
/// Returns [`DrawError::ExhaustedDeck`] if both piles are empty.
pub fn draw_with_reclaim<R: Rng + ?Sized>(
    deck: &mut Deck,
    discard: &mut Discard,
    rng: &mut R,
) -> Result<Card, DrawError> {
    if deck.is_empty() {
        log::debug!("deck empty, reclaiming {} discarded cards", discard.len());
        discard.reclaim(deck, rng);
    }
    deck.draw().ok_or(DrawError::ExhaustedDeck)
}
