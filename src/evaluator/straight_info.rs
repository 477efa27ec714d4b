use crate::cards::Rank;

/// Whether five ranks form a straight, and its top card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub top_rank: Option<Rank>,
}

/// A-2-3-4-5 as a rank bitmask (bit = rank value).
const WHEEL_MASK: u16 = (1 << 14) | (1 << 5) | (1 << 4) | (1 << 3) | (1 << 2);

impl StraightInfo {
    /// Detect a straight from five ranks in any order.
    /// The wheel (A-2-3-4-5) plays the ace low, so its top card is the Five.
    pub fn detect(ranks: &[Rank; 5]) -> Self {
        let mask = ranks.iter().fold(0u16, |m, r| m | (1 << r.value()));
        if mask.count_ones() != 5 {
            return Self { top_rank: None };
        }
        if mask == WHEEL_MASK {
            return Self { top_rank: Some(Rank::Five) };
        }
        let low = mask.trailing_zeros();
        if mask >> low == 0b1_1111 {
            return Self { top_rank: Rank::from_value(low as u8 + 4) };
        }
        Self { top_rank: None }
    }
}
