use crate::cards::Rank;

/// Ranks of a five-card hand grouped by multiplicity, sorted by (count desc, rank desc).
///
/// Example: AAAKQ groups as [(Ace, 3), (King, 1), (Queen, 1)].
/// Stored inline; a five-card hand never has more than five groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankGroups {
    groups: [(Rank, u8); 5],
    len: usize,
}

impl RankGroups {
    /// Build from a rank count array indexed by rank value (2..=14).
    pub fn from_counts(rank_counts: &[u8; 15]) -> Self {
        let mut groups = [(Rank::Two, 0u8); 5];
        let mut len = 0;

        // Walk high to low so equal counts stay in descending rank order
        for rank in Rank::ALL.iter().rev().copied() {
            let count = rank_counts[rank.value() as usize];
            if count > 0 && len < groups.len() {
                groups[len] = (rank, count);
                len += 1;
            }
        }
        groups[..len].sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

        Self { groups, len }
    }

    fn as_slice(&self) -> &[(Rank, u8)] {
        &self.groups[..self.len]
    }

    fn with_count(&self, n: u8) -> impl Iterator<Item = Rank> + '_ {
        self.as_slice().iter().filter(move |(_, c)| *c == n).map(|(r, _)| *r)
    }

    pub fn quad(&self) -> Option<Rank> {
        self.with_count(4).next()
    }

    pub fn trips(&self) -> Option<Rank> {
        self.with_count(3).next()
    }

    /// Pair ranks, highest first.
    pub fn pairs(&self) -> impl Iterator<Item = Rank> + '_ {
        self.with_count(2)
    }

    pub fn pair_count(&self) -> usize {
        self.pairs().count()
    }

    pub fn has_full_house(&self) -> bool {
        self.trips().is_some() && self.pairs().next().is_some()
    }

    /// Group ranks in significance order, padded with `Rank::Two`.
    ///
    /// This is the tiebreak tuple for every category built from rank groups
    /// (quads, full house, trips, two pair, pair, high card).
    pub fn tiebreak(&self) -> [Rank; 5] {
        let mut out = [Rank::Two; 5];
        for (slot, (rank, _)) in out.iter_mut().zip(self.as_slice()) {
            *slot = *rank;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_counts(pairs: &[(u8, u8)]) -> [u8; 15] {
        let mut counts = [0u8; 15];
        for &(rank_val, count) in pairs {
            counts[rank_val as usize] = count;
        }
        counts
    }

    #[test]
    fn quad_with_kicker() {
        let groups = RankGroups::from_counts(&make_counts(&[(14, 4), (13, 1)])); // AAAAK
        assert_eq!(groups.quad(), Some(Rank::Ace));
        assert_eq!(groups.trips(), None);
        assert_eq!(groups.pair_count(), 0);
        assert_eq!(groups.tiebreak(), [Rank::Ace, Rank::King, Rank::Two, Rank::Two, Rank::Two]);
    }

    #[test]
    fn full_house_orders_trips_before_pair() {
        let groups = RankGroups::from_counts(&make_counts(&[(3, 3), (13, 2)])); // 333KK
        assert!(groups.has_full_house());
        assert_eq!(groups.trips(), Some(Rank::Three));
        assert_eq!(groups.pairs().collect::<Vec<_>>(), vec![Rank::King]);
        assert_eq!(groups.tiebreak()[..2], [Rank::Three, Rank::King]);
    }

    #[test]
    fn two_pair_high_pair_first() {
        let groups = RankGroups::from_counts(&make_counts(&[(9, 2), (13, 2), (14, 1)])); // KK99A
        assert_eq!(groups.pairs().collect::<Vec<_>>(), vec![Rank::King, Rank::Nine]);
        assert_eq!(groups.tiebreak()[..3], [Rank::King, Rank::Nine, Rank::Ace]);
    }

    #[test]
    fn one_pair_kickers_descend() {
        let groups = RankGroups::from_counts(&make_counts(&[(8, 2), (14, 1), (12, 1), (5, 1)]));
        assert_eq!(groups.pair_count(), 1);
        assert_eq!(
            groups.tiebreak(),
            [Rank::Eight, Rank::Ace, Rank::Queen, Rank::Five, Rank::Two]
        );
    }

    #[test]
    fn high_card_is_all_kickers() {
        let groups =
            RankGroups::from_counts(&make_counts(&[(14, 1), (10, 1), (7, 1), (5, 1), (2, 1)]));
        assert_eq!(groups.quad(), None);
        assert_eq!(groups.trips(), None);
        assert_eq!(groups.pair_count(), 0);
        assert_eq!(
            groups.tiebreak(),
            [Rank::Ace, Rank::Ten, Rank::Seven, Rank::Five, Rank::Two]
        );
    }
}
