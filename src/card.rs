//! Card types and deck composition constants.

/// Card category.
///
/// The category decides how a card scores: only [`CardKind::Number`] cards
/// can bust a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardKind {
    /// Number card (0 through 12).
    Number,
    /// Bonus points or the `*2` multiplier.
    Bonus,
    /// Action card. Effects are not implemented; the card scores nothing.
    Effect,
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// Points the card adds to a hand.
    pub score: u8,
    /// Display label, also used for duplicate detection.
    pub value: &'static str,
    /// Card category.
    pub kind: CardKind,
}

const LABELS: [&str; 13] = [
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12",
];

/// Returns the decimal label for a face value up to [`MAX_FACE`].
const fn label(face: u8) -> Option<&'static str> {
    if face <= MAX_FACE {
        Some(LABELS[face as usize])
    } else {
        None
    }
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(score: u8, value: &'static str, kind: CardKind) -> Self {
        Self { score, value, kind }
    }

    /// Creates a number card worth its face value.
    ///
    /// Returns `None` for faces above [`MAX_FACE`].
    #[must_use]
    pub const fn number(face: u8) -> Option<Self> {
        match label(face) {
            Some(value) => Some(Self::new(face, value, CardKind::Number)),
            None => None,
        }
    }

    /// Creates a bonus card worth `points`.
    ///
    /// Returns `None` for points above [`MAX_FACE`].
    #[must_use]
    pub const fn bonus(points: u8) -> Option<Self> {
        match label(points) {
            Some(value) => Some(Self::new(points, value, CardKind::Bonus)),
            None => None,
        }
    }

    /// Creates the `*2` bonus card.
    ///
    /// The multiplier is not applied; the card scores 0.
    #[must_use]
    pub const fn multiplier() -> Self {
        Self::new(0, MULTIPLIER_LABEL, CardKind::Bonus)
    }

    /// Creates an effect card.
    #[must_use]
    pub const fn effect() -> Self {
        Self::new(0, EFFECT_LABEL, CardKind::Effect)
    }

    /// Returns whether this is a number card.
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self.kind, CardKind::Number)
    }
}

/// Label of the multiplier bonus card.
pub const MULTIPLIER_LABEL: &str = "*2";

/// Label shared by all effect cards.
pub const EFFECT_LABEL: &str = "stuff";

/// Highest number card face.
pub const MAX_FACE: u8 = 12;

/// Point values of the plain bonus cards.
pub const BONUS_POINTS: [u8; 5] = [2, 4, 6, 8, 10];

/// Number of effect cards.
pub const EFFECT_CARDS: usize = 9;

/// Number of cards in a freshly built deck.
///
/// 79 number cards, 6 bonus cards and 9 effect cards.
pub const DECK_SIZE: usize = 94;
