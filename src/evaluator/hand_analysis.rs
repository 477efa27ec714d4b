use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use crate::cards::{Card, Rank, Suit};
use crate::evaluator::{Category, Evaluation, HandStrength};

/// Pre-computed analysis of a 5-card hand.
/// Built once and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    pub sorted_cards: [Card; 5],
    /// Ranks of `sorted_cards`, highest first.
    pub ranks: [Rank; 5],
    pub rank_groups: RankGroups,
    pub flush_suit: Option<Suit>,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; 5]) -> Self {
        let mut sorted_cards = *cards;
        sorted_cards.sort_by(|a, b| b.rank().cmp(&a.rank()).then(b.suit().cmp(&a.suit())));

        let ranks = sorted_cards.map(Card::rank);

        let mut rank_counts = [0u8; 15];
        for &rank in ranks.iter() {
            rank_counts[rank.value() as usize] += 1;
        }

        let first_suit = sorted_cards[0].suit();
        let flush_suit = sorted_cards.iter().all(|c| c.suit() == first_suit).then_some(first_suit);

        Self {
            sorted_cards,
            ranks,
            rank_groups: RankGroups::from_counts(&rank_counts),
            flush_suit,
            straight_info: StraightInfo::detect(&ranks),
        }
    }

    pub fn is_flush(&self) -> bool {
        self.flush_suit.is_some()
    }

    /// Tiebreak for straights: only the top card matters.
    pub fn straight_tiebreak(&self) -> Option<[Rank; 5]> {
        self.straight_info
            .top_rank
            .map(|top| [top, Rank::Two, Rank::Two, Rank::Two, Rank::Two])
    }

    pub fn build_evaluation(&self, category: Category, tiebreak: [Rank; 5]) -> Evaluation {
        Evaluation {
            category,
            best_five: self.sorted_cards,
            strength: HandStrength::from_parts(category, &tiebreak),
        }
    }
}
