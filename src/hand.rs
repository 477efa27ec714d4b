use crate::cards::{parse_cards, Card, CardParseError};
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("expected exactly two hole cards, got {0}")]
    WrongHoleCardCount(usize),
    #[error("expected exactly three flop cards, got {0}")]
    WrongFlopCardCount(usize),
    #[error("duplicate card: {0}")]
    DuplicateCard(Card),
    #[error(transparent)]
    CardParse(#[from] CardParseError),
}

/// The player's two private hole cards.
///
/// ```
/// use casino_holdem_ev::cards::{Card, Rank, Suit};
/// use casino_holdem_ev::hand::HoleCards;
///
/// let hole = HoleCards::try_new(
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::King, Suit::Spades),
/// ).unwrap();
/// assert_eq!(hole.as_array().len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoleCards(Card, Card);

impl HoleCards {
    /// Return the first (left) hole card.
    pub fn first(&self) -> Card {
        self.0
    }

    /// Return the second (right) hole card.
    pub fn second(&self) -> Card {
        self.1
    }

    /// Return both hole cards as a fixed array.
    pub fn as_array(&self) -> [Card; 2] {
        [self.0, self.1]
    }

    pub fn try_new(a: Card, b: Card) -> Result<Self, HandError> {
        if a == b {
            return Err(HandError::DuplicateCard(a));
        }
        Ok(Self(a, b))
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        match slice {
            [a, b] => Self::try_new(*a, *b),
            _ => Err(HandError::WrongHoleCardCount(slice.len())),
        }
    }
}

impl FromStr for HoleCards {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slice(&parse_cards(s)?)
    }
}

/// The three community cards known when the call/fold decision is made.
///
/// ```
/// use casino_holdem_ev::hand::Flop;
///
/// let flop: Flop = "2c Jh 9s".parse().unwrap();
/// assert_eq!(flop.as_array().len(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flop([Card; 3]);

impl Flop {
    pub fn try_new(cards: [Card; 3]) -> Result<Self, HandError> {
        first_duplicate(&cards).map_or(Ok(Self(cards)), |c| Err(HandError::DuplicateCard(c)))
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        match slice {
            [a, b, c] => Self::try_new([*a, *b, *c]),
            _ => Err(HandError::WrongFlopCardCount(slice.len())),
        }
    }

    pub fn as_array(&self) -> [Card; 3] {
        self.0
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.0
    }
}

impl FromStr for Flop {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slice(&parse_cards(s)?)
    }
}

/// Ensure the five known cards (two hole + three flop) are all distinct.
///
/// ```
/// use casino_holdem_ev::hand::{validate_input_cards, Flop, HoleCards, HandError};
///
/// let hole: HoleCards = "As Kd".parse().unwrap();
/// let flop: Flop = "Ah Kc Qs".parse().unwrap();
/// validate_input_cards(&hole, &flop).unwrap();
///
/// let clash: Flop = "As 7c 2d".parse().unwrap();
/// assert!(matches!(validate_input_cards(&hole, &clash), Err(HandError::DuplicateCard(_))));
/// ```
pub fn validate_input_cards(hole: &HoleCards, flop: &Flop) -> Result<(), HandError> {
    let [a, b] = hole.as_array();
    let [c, d, e] = flop.as_array();
    match first_duplicate(&[a, b, c, d, e]) {
        Some(card) => Err(HandError::DuplicateCard(card)),
        None => Ok(()),
    }
}

/// Parse and validate text input in one step.
pub fn parse_input(hole: &str, flop: &str) -> Result<(HoleCards, Flop), HandError> {
    let hole: HoleCards = hole.parse()?;
    let flop: Flop = flop.parse()?;
    validate_input_cards(&hole, &flop)?;
    Ok((hole, flop))
}

fn first_duplicate(cards: &[Card]) -> Option<Card> {
    let mut seen = [false; 52];
    for c in cards {
        if std::mem::replace(&mut seen[c.index()], true) {
            return Some(*c);
        }
    }
    None
}
