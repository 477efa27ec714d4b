pub(crate) mod combinations;
pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;

use crate::cards::{Card, Rank};
use core::cmp::Ordering;
use core::fmt;

/// Compact, comparable hand strength. Higher is better.
/// Encodes category and ranked tiebreakers; equal values are exact ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandStrength(u32);

/// Poker hand category from weakest to strongest.
///
/// The ace-high straight flush is its own category because the ante and
/// bonus pay tables treat it separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    /// Strongest first.
    pub const ALL: [Category; 10] = [
        Category::RoyalFlush,
        Category::StraightFlush,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::Flush,
        Category::Straight,
        Category::ThreeOfAKind,
        Category::TwoPair,
        Category::Pair,
        Category::HighCard,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    const fn from_ordinal(v: u8) -> Category {
        match v {
            0 => Category::HighCard,
            1 => Category::Pair,
            2 => Category::TwoPair,
            3 => Category::ThreeOfAKind,
            4 => Category::Straight,
            5 => Category::Flush,
            6 => Category::FullHouse,
            7 => Category::FourOfAKind,
            8 => Category::StraightFlush,
            _ => Category::RoyalFlush,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Detailed evaluation result. `strength` drives ordering.
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct Evaluation {
    pub category: Category,
    pub best_five: [Card; 5],
    strength: HandStrength,
}

impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.strength.cmp(&other.strength)
    }
}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Evaluation {
    fn eq(&self, other: &Self) -> bool {
        self.strength == other.strength
    }
}

impl Eq for Evaluation {}

impl Evaluation {
    pub const fn strength(&self) -> HandStrength {
        self.strength
    }

    /// Rank of the defining group: the pair of a Pair, the top pair of Two
    /// Pair, the trips of a full house, the top card of a straight.
    pub fn primary_rank(&self) -> Rank {
        self.strength.primary_rank()
    }
}

const CAT_SHIFT: u32 = 20;
const RANK_BITS: u32 = 4;

impl HandStrength {
    /// Return the packed comparable value.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Pack a category and five rank tiebreakers into a comparable value.
    pub fn from_parts(category: Category, ranks_desc: &[Rank; 5]) -> Self {
        // Layout (most significant -> least):
        // [ category (4) | r0 (4) | r1 (4) | r2 (4) | r3 (4) | r4 (4) ]
        let mut v: u32 = (category as u32) << CAT_SHIFT;
        for (i, r) in ranks_desc.iter().enumerate() {
            let offset = CAT_SHIFT - RANK_BITS * (i as u32 + 1);
            v |= (*r as u32) << offset;
        }
        HandStrength(v)
    }

    /// Category encoded in this strength.
    ///
    /// ```
    /// use casino_holdem_ev::cards::parse_cards;
    /// use casino_holdem_ev::evaluator::{evaluate_cards, Category};
    ///
    /// let e = evaluate_cards(&parse_cards("As Ks Qs Js Ts 2d 3c").unwrap()).unwrap();
    /// assert_eq!(e.strength().category(), Category::RoyalFlush);
    /// ```
    pub const fn category(self) -> Category {
        Category::from_ordinal((self.0 >> CAT_SHIFT) as u8)
    }

    pub fn primary_rank(self) -> Rank {
        let v = ((self.0 >> (CAT_SHIFT - RANK_BITS)) & 0xF) as u8;
        Rank::from_value(v).unwrap_or(Rank::Two)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("need 5 to 7 cards to evaluate, got {0}")]
    CardCount(usize),
    #[error("board needs 3 to 5 cards, got {0}")]
    BoardCount(usize),
    #[error("card appears twice: {0}")]
    DuplicateCard(Card),
}

/// Evaluate a player's two hole cards against a 3, 4 or 5 card board.
///
/// ```
/// use casino_holdem_ev::cards::parse_cards;
/// use casino_holdem_ev::evaluator::{evaluate, Category};
///
/// let board = parse_cards("Qc Jd 9h 3s 2c").unwrap();
/// let hole = parse_cards("As Ah").unwrap();
/// let eval = evaluate(&board, &[hole[0], hole[1]]).unwrap();
/// assert_eq!(eval.category, Category::Pair);
/// ```
pub fn evaluate(board: &[Card], hole: &[Card; 2]) -> Result<Evaluation, EvalError> {
    if !(3..=5).contains(&board.len()) {
        return Err(EvalError::BoardCount(board.len()));
    }
    let mut all = [hole[0]; 7];
    all[1] = hole[1];
    all[2..2 + board.len()].copy_from_slice(board);
    evaluate_cards(&all[..2 + board.len()])
}

/// Evaluate the best five-card hand among 5, 6 or 7 distinct cards.
pub fn evaluate_cards(cards: &[Card]) -> Result<Evaluation, EvalError> {
    if !(5..=7).contains(&cards.len()) {
        return Err(EvalError::CardCount(cards.len()));
    }
    let mut seen = 0u64;
    for c in cards {
        let bit = 1u64 << c.index();
        if seen & bit != 0 {
            return Err(EvalError::DuplicateCard(*c));
        }
        seen |= bit;
    }
    Ok(best_of(cards))
}

/// Evaluate exactly five cards; detects category and encodes tie-breakers.
pub fn evaluate_five(cards: &[Card; 5]) -> Evaluation {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    let analysis = HandAnalysis::new(cards);
    DETECTORS
        .iter()
        .find_map(|d| d.detect(&analysis))
        .unwrap_or_else(|| analysis.build_evaluation(Category::HighCard, analysis.ranks))
}

/// Evaluate seven cards (two hole + five board): best of the 21 five-card subsets.
pub fn evaluate_seven(cards: &[Card; 7]) -> Evaluation {
    best_of(cards)
}

fn best_of(cards: &[Card]) -> Evaluation {
    use combinations::Combinations;

    let mut best = evaluate_five(&[cards[0], cards[1], cards[2], cards[3], cards[4]]);
    for idx in Combinations::<5>::new(cards.len()).skip(1) {
        let eval = evaluate_five(&idx.map(|i| cards[i]));
        if eval > best {
            best = eval;
        }
    }
    best
}
