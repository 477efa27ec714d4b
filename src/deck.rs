use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::Rng;

/// The cards still unseen in a request: a standard deck minus the known cards.
///
/// The set of cards never changes after construction. Dealing only permutes
/// the deck, so every trial starts from the same remaining cards.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use casino_holdem_ev::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        Self::without(&[])
    }

    /// All 52 cards minus `excluded`. Repeated entries in `excluded` are harmless.
    ///
    /// ```
    /// use casino_holdem_ev::cards::parse_cards;
    /// use casino_holdem_ev::deck::Deck;
    ///
    /// let known = parse_cards("As Kd 2c Jh 9s").unwrap();
    /// assert_eq!(Deck::without(&known).len(), 47);
    /// ```
    pub fn without(excluded: &[Card]) -> Self {
        let mut gone = [false; 52];
        for c in excluded {
            gone[c.index()] = true;
        }
        let mut cards = Vec::with_capacity(52 - excluded.len().min(52));
        for &s in &Suit::ALL {
            for &r in &Rank::ALL {
                let card = Card::new(r, s);
                if !gone[card.index()] {
                    cards.push(card);
                }
            }
        }
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Pick `N` distinct cards uniformly at random without removing them.
    ///
    /// Partially shuffles the deck in place; the multiset of cards is unchanged,
    /// so repeated calls sample independently from the full remaining deck.
    pub fn deal<const N: usize, R: Rng + ?Sized>(&mut self, rng: &mut R) -> [Card; N] {
        debug_assert!(N <= self.cards.len());
        let (picked, _) = self.cards.partial_shuffle(rng, N);
        std::array::from_fn(|i| picked[i])
    }
}
