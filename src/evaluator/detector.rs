use super::hand_analysis::HandAnalysis;
use crate::cards::Rank;
use crate::evaluator::{Category, Evaluation};

/// Strategy pattern: each category detector knows how to detect and build its evaluation.
///
/// Detectors are tried strongest first, so each one may assume every
/// stronger category has already been ruled out.
pub trait CategoryDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<Evaluation>;
}

/// Royal Flush: ace-high straight flush
pub struct RoyalFlushDetector;

impl CategoryDetector for RoyalFlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        let tiebreak = analysis.straight_tiebreak().filter(|t| t[0] == Rank::Ace)?;
        analysis.is_flush().then(|| analysis.build_evaluation(Category::RoyalFlush, tiebreak))
    }
}

/// Straight Flush: five consecutive ranks, all same suit
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        let tiebreak = analysis.straight_tiebreak()?;
        analysis.is_flush().then(|| analysis.build_evaluation(Category::StraightFlush, tiebreak))
    }
}

/// Shared by every category that is fully described by its rank groups.
fn grouped(analysis: &HandAnalysis, category: Category) -> Evaluation {
    analysis.build_evaluation(category, analysis.rank_groups.tiebreak())
}

pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        analysis.rank_groups.quad().map(|_| grouped(analysis, Category::FourOfAKind))
    }
}

pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        analysis.rank_groups.has_full_house().then(|| grouped(analysis, Category::FullHouse))
    }
}

/// Flush: all five kickers count, highest first
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        analysis.is_flush().then(|| analysis.build_evaluation(Category::Flush, analysis.ranks))
    }
}

pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        analysis.straight_tiebreak().map(|t| analysis.build_evaluation(Category::Straight, t))
    }
}

pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        analysis.rank_groups.trips().map(|_| grouped(analysis, Category::ThreeOfAKind))
    }
}

pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        (analysis.rank_groups.pair_count() == 2).then(|| grouped(analysis, Category::TwoPair))
    }
}

pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        (analysis.rank_groups.pair_count() == 1).then(|| grouped(analysis, Category::Pair))
    }
}

/// High Card: always matches as the fallback
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<Evaluation> {
        Some(analysis.build_evaluation(Category::HighCard, analysis.ranks))
    }
}

pub const DETECTORS: [&dyn CategoryDetector; 10] = [
    &RoyalFlushDetector,
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{parse_cards, Card};

    fn analyze(text: &str) -> HandAnalysis {
        let v = parse_cards(text).unwrap();
        let five: [Card; 5] = [v[0], v[1], v[2], v[3], v[4]];
        HandAnalysis::new(&five)
    }

    #[test]
    fn royal_flush_detector_requires_ace_high() {
        assert!(RoyalFlushDetector.detect(&analyze("As Ks Qs Js Ts")).is_some());
        assert!(RoyalFlushDetector.detect(&analyze("Ks Qs Js Ts 9s")).is_none());
        assert!(RoyalFlushDetector.detect(&analyze("Ah Ks Qs Js Ts")).is_none());
    }

    #[test]
    fn steel_wheel_is_a_straight_flush_not_royal() {
        let a = analyze("Ah 2h 3h 4h 5h");
        assert!(RoyalFlushDetector.detect(&a).is_none());
        let e = StraightFlushDetector.detect(&a).unwrap();
        assert_eq!(e.category, Category::StraightFlush);
    }

    #[test]
    fn each_detector_builds_its_category() {
        let cases = [
            ("9c 9d 9h 9s Ac", Category::FourOfAKind),
            ("3c 3d 3h Js Jc", Category::FullHouse),
            ("Kh Th 8h 6h 3h", Category::Flush),
            ("9s 8h 7d 6c 5s", Category::Straight),
            ("Qc Qd Qh Ts 2c", Category::ThreeOfAKind),
            ("Jc Jd 9c 9h 2s", Category::TwoPair),
            ("Ah Ad Ts 9c 2d", Category::Pair),
        ];
        for (text, expected) in cases {
            let analysis = analyze(text);
            let found = DETECTORS.iter().find_map(|d| d.detect(&analysis)).unwrap();
            assert_eq!(found.category, expected, "{text}");
        }
    }

    #[test]
    fn high_card_detector_always_matches() {
        let e = HighCardDetector.detect(&analyze("As Kh Jd 9c 7s")).unwrap();
        assert_eq!(e.category, Category::HighCard);
    }

    #[test]
    fn straight_flush_also_satisfies_weaker_detectors() {
        let a = analyze("9h 8h 7h 6h 5h");
        assert!(StraightFlushDetector.detect(&a).is_some());
        assert!(FlushDetector.detect(&a).is_some());
        assert!(StraightDetector.detect(&a).is_some());
    }
}
