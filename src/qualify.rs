//! Dealer qualification: the dealer contests the ante and play bets only with
//! a pair of fours or better.

use crate::cards::{Card, Rank};
use crate::evaluator::{evaluate, Category, EvalError, Evaluation};

/// Lowest pair that qualifies the dealer.
pub const QUALIFYING_PAIR: Rank = Rank::Four;

/// Qualification for an already evaluated dealer hand.
///
/// High card never qualifies, a single pair needs [`QUALIFYING_PAIR`] or
/// better, and every category above a pair qualifies whatever its ranks.
pub fn qualifies(dealer: &Evaluation) -> bool {
    match dealer.category {
        Category::HighCard => false,
        Category::Pair => dealer.primary_rank() >= QUALIFYING_PAIR,
        _ => true,
    }
}

/// Evaluate the dealer's hand on `board` and apply [`qualifies`].
///
/// ```
/// use casino_holdem_ev::cards::parse_cards;
/// use casino_holdem_ev::qualify::dealer_qualifies;
///
/// let board = parse_cards("2c 7d 9s").unwrap();
/// let fours = parse_cards("4s 4h").unwrap();
/// let threes = parse_cards("3s 3h").unwrap();
/// assert!(dealer_qualifies(&board, &[fours[0], fours[1]]).unwrap());
/// assert!(!dealer_qualifies(&board, &[threes[0], threes[1]]).unwrap());
/// ```
pub fn dealer_qualifies(board: &[Card], dealer_hole: &[Card; 2]) -> Result<bool, EvalError> {
    Ok(qualifies(&evaluate(board, dealer_hole)?))
}
