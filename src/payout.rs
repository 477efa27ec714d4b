//! Ante, play and bonus settlement for one Casino Hold'em hand.
//!
//! All amounts are net units for a one-unit ante, a two-unit play bet (the
//! call) and a one-unit bonus side bet.

use crate::cards::Rank;
use crate::evaluator::{Category, Evaluation};
use core::cmp::Ordering;
use core::fmt;

pub const ANTE_STAKE: i32 = 1;
pub const PLAY_STAKE: i32 = 2;
pub const BONUS_STAKE: i32 = 1;

/// Folding forfeits the ante and nothing else.
pub const FOLD_EV: f64 = -(ANTE_STAKE as f64);

/// Hand labels used for frequency tallies and the bonus table.
///
/// Same as [`Category`] except that a pair of aces is split out of `Pair`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[non_exhaustive]
pub enum HandClass {
    RoyalFlush,
    StraightFlush,
    FourOfAKind,
    FullHouse,
    Flush,
    Straight,
    ThreeOfAKind,
    TwoPair,
    PairOfAces,
    Pair,
    HighCard,
}

impl HandClass {
    /// Strongest first; also the tally index order.
    pub const ALL: [HandClass; 11] = [
        HandClass::RoyalFlush,
        HandClass::StraightFlush,
        HandClass::FourOfAKind,
        HandClass::FullHouse,
        HandClass::Flush,
        HandClass::Straight,
        HandClass::ThreeOfAKind,
        HandClass::TwoPair,
        HandClass::PairOfAces,
        HandClass::Pair,
        HandClass::HighCard,
    ];

    pub fn of(eval: &Evaluation) -> HandClass {
        match eval.category {
            Category::RoyalFlush => HandClass::RoyalFlush,
            Category::StraightFlush => HandClass::StraightFlush,
            Category::FourOfAKind => HandClass::FourOfAKind,
            Category::FullHouse => HandClass::FullHouse,
            Category::Flush => HandClass::Flush,
            Category::Straight => HandClass::Straight,
            Category::ThreeOfAKind => HandClass::ThreeOfAKind,
            Category::TwoPair => HandClass::TwoPair,
            Category::Pair if eval.primary_rank() == Rank::Ace => HandClass::PairOfAces,
            Category::Pair => HandClass::Pair,
            Category::HighCard => HandClass::HighCard,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            HandClass::RoyalFlush => "Royal Flush",
            HandClass::StraightFlush => "Straight Flush",
            HandClass::FourOfAKind => "Four of a Kind",
            HandClass::FullHouse => "Full House",
            HandClass::Flush => "Flush",
            HandClass::Straight => "Straight",
            HandClass::ThreeOfAKind => "Three of a Kind",
            HandClass::TwoPair => "Two Pair",
            HandClass::PairOfAces => "Pair of Aces",
            HandClass::Pair => "Pair",
            HandClass::HighCard => "High Card",
        }
    }
}

impl fmt::Display for HandClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ante pay table, paid only when the hero beats the dealer.
pub const fn ante_multiplier(category: Category) -> i32 {
    match category {
        Category::RoyalFlush => 100,
        Category::StraightFlush => 20,
        Category::FourOfAKind => 10,
        Category::FullHouse => 3,
        Category::Flush => 2,
        _ => 1,
    }
}

/// Bonus pay table on the hero's final hand, independent of the dealer.
/// Zero means the bonus stake is lost.
pub const fn bonus_multiplier(class: HandClass) -> i32 {
    match class {
        HandClass::RoyalFlush => 100,
        HandClass::StraightFlush => 50,
        HandClass::FourOfAKind => 40,
        HandClass::FullHouse => 30,
        HandClass::Flush => 20,
        HandClass::Straight | HandClass::ThreeOfAKind | HandClass::PairOfAces => 7,
        HandClass::TwoPair | HandClass::Pair | HandClass::HighCard => 0,
    }
}

/// Net result of one called hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandOutcome {
    pub ante: i32,
    pub play: i32,
    pub bonus: i32,
    pub hero_class: HandClass,
}

impl HandOutcome {
    /// Ante plus play, the main-game result of calling.
    pub const fn main_game(&self) -> i32 {
        self.ante + self.play
    }
}

/// Settle ante, play and bonus for a hero who called.
///
/// - hero ahead: ante pays the ante table, play pays 1:1, qualified or not
/// - exact tie: ante and play push
/// - hero behind, dealer not qualified: ante pays a flat 1:1, play pushes
/// - hero behind, dealer qualified: ante and play lose
///
/// ```
/// use casino_holdem_ev::cards::parse_cards;
/// use casino_holdem_ev::evaluator::evaluate;
/// use casino_holdem_ev::payout::resolve_hand;
///
/// let board = parse_cards("Ad Kc Kh 7s 2d").unwrap();
/// let aces = parse_cards("As Ah").unwrap();
/// let queens = parse_cards("Qs Qh").unwrap();
/// let hero = evaluate(&board, &[aces[0], aces[1]]).unwrap();
/// let dealer = evaluate(&board, &[queens[0], queens[1]]).unwrap();
/// let out = resolve_hand(&hero, &dealer, true);
/// assert_eq!((out.ante, out.play), (3, 2));
/// ```
pub fn resolve_hand(hero: &Evaluation, dealer: &Evaluation, dealer_qualifies: bool) -> HandOutcome {
    let (ante, play) = match hero.cmp(dealer) {
        Ordering::Greater => (ANTE_STAKE * ante_multiplier(hero.category), PLAY_STAKE),
        Ordering::Equal => (0, 0),
        Ordering::Less if !dealer_qualifies => (ANTE_STAKE, 0),
        Ordering::Less => (-ANTE_STAKE, -PLAY_STAKE),
    };
    let hero_class = HandClass::of(hero);
    HandOutcome { ante, play, bonus: resolve_bonus(hero_class), hero_class }
}

/// Net bonus result for one hand.
pub const fn resolve_bonus(class: HandClass) -> i32 {
    match bonus_multiplier(class) {
        0 => -BONUS_STAKE,
        m => BONUS_STAKE * m,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use crate::evaluator::evaluate;

    fn eval(board: &str, hole: &str) -> Evaluation {
        let board = parse_cards(board).unwrap();
        let hole = parse_cards(hole).unwrap();
        evaluate(&board, &[hole[0], hole[1]]).unwrap()
    }

    const BOARD: &str = "Ad Kc Kh 7s 2d";

    #[test]
    fn hero_win_pays_table_and_play_regardless_of_qualification() {
        let hero = eval(BOARD, "As Ah");
        assert_eq!(hero.category, Category::FullHouse);
        let dealer = eval(BOARD, "Qs Qh");
        for q in [true, false] {
            let out = resolve_hand(&hero, &dealer, q);
            assert_eq!((out.ante, out.play), (3, 2));
            assert_eq!(out.bonus, 30);
        }
    }

    #[test]
    fn straight_or_worse_win_pays_even_money() {
        let board = "9c 8d 7h 2s 3c";
        let hero = eval(board, "Ts 6d");
        let dealer = eval(board, "9s 4d");
        let out = resolve_hand(&hero, &dealer, true);
        assert_eq!(hero.category, Category::Straight);
        assert_eq!((out.ante, out.play, out.bonus), (1, 2, 7));
    }

    #[test]
    fn royal_flush_pays_top_of_both_tables() {
        let board = "Qs Js Ts 2d 3c";
        let hero = eval(board, "As Ks");
        let dealer = eval(board, "Ah Kh");
        let out = resolve_hand(&hero, &dealer, true);
        assert_eq!(out.hero_class, HandClass::RoyalFlush);
        assert_eq!((out.ante, out.play, out.bonus), (100, 2, 100));
    }

    #[test]
    fn exact_tie_pushes_ante_and_play() {
        let board = "Ac Kd Qh Js Tc";
        let hero = eval(board, "2s 3d");
        let dealer = eval(board, "4s 5d");
        let out = resolve_hand(&hero, &dealer, true);
        assert_eq!((out.ante, out.play), (0, 0));
        assert_eq!(out.bonus, 7);
    }

    #[test]
    fn loss_to_unqualified_dealer_pays_flat_ante_and_pushes_play() {
        // Hero's flush loses to a higher flush; a pretend non-qualified dealer
        // still pays the ante at 1:1, not the flush rate.
        let board = "2h 7h 9h Jc Kd";
        let hero = eval(board, "3h 5h");
        let dealer = eval(board, "Ah 4h");
        let out = resolve_hand(&hero, &dealer, false);
        assert_eq!((out.ante, out.play), (1, 0));
    }

    #[test]
    fn loss_to_qualified_dealer_loses_both() {
        let board = "2c 7d 9s Jh Kd";
        let hero = eval(board, "As 3h");
        let dealer = eval(board, "9c 9d");
        let out = resolve_hand(&hero, &dealer, true);
        assert_eq!((out.ante, out.play), (-1, -2));
        assert_eq!(out.main_game(), -3);
        assert_eq!(out.bonus, -1);
    }

    #[test]
    fn pair_of_aces_pays_bonus_other_pairs_lose_it() {
        let board = "2c 7d 9s Jh Kd";
        let aces = eval(board, "As Ah");
        assert_eq!(HandClass::of(&aces), HandClass::PairOfAces);
        assert_eq!(resolve_bonus(HandClass::of(&aces)), 7);

        let kings = eval(board, "Ks Qh");
        assert_eq!(HandClass::of(&kings), HandClass::Pair);
        assert_eq!(resolve_bonus(HandClass::of(&kings)), -1);
    }

    #[test]
    fn two_pair_with_aces_is_not_pair_of_aces() {
        let ev = eval("Ac Kd 7h 7s 2c", "As 3h");
        assert_eq!(HandClass::of(&ev), HandClass::TwoPair);
        assert_eq!(resolve_bonus(HandClass::TwoPair), -1);
    }

    #[test]
    fn ante_table_is_flat_below_straight() {
        for c in [Category::Straight, Category::ThreeOfAKind, Category::Pair, Category::HighCard] {
            assert_eq!(ante_multiplier(c), 1);
        }
        assert_eq!(ante_multiplier(Category::Flush), 2);
    }
}
