use crate::payout::{HandClass, HandOutcome};

/// Integer running sums for a set of trials.
///
/// Everything is a plain sum so batches can be merged in any order and give
/// the same totals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Tally {
    pub(crate) trials: u64,
    pub(crate) ante: i64,
    pub(crate) play: i64,
    pub(crate) bonus: i64,
    /// Sum of squared ante+play, for the standard error of the call EV.
    pub(crate) main_sq: i64,
    pub(crate) wins: u64,
    pub(crate) pushes: u64,
    pub(crate) losses: u64,
    pub(crate) bonus_hits: u64,
    pub(crate) bonus_won: i64,
    pub(crate) classes: [u64; 11],
}

impl Tally {
    pub(crate) fn record(&mut self, out: &HandOutcome) {
        let main = i64::from(out.main_game());
        self.trials += 1;
        self.ante += i64::from(out.ante);
        self.play += i64::from(out.play);
        self.bonus += i64::from(out.bonus);
        self.main_sq += main * main;
        match main.signum() {
            1 => self.wins += 1,
            0 => self.pushes += 1,
            _ => self.losses += 1,
        }
        if out.bonus > 0 {
            self.bonus_hits += 1;
            self.bonus_won += i64::from(out.bonus);
        }
        self.classes[out.hero_class.index()] += 1;
    }

    pub(crate) fn merge(mut self, other: Tally) -> Tally {
        self.trials += other.trials;
        self.ante += other.ante;
        self.play += other.play;
        self.bonus += other.bonus;
        self.main_sq += other.main_sq;
        self.wins += other.wins;
        self.pushes += other.pushes;
        self.losses += other.losses;
        self.bonus_hits += other.bonus_hits;
        self.bonus_won += other.bonus_won;
        for (a, b) in self.classes.iter_mut().zip(other.classes) {
            *a += b;
        }
        self
    }

    pub(crate) fn count(&self, class: HandClass) -> u64 {
        self.classes[class.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(ante: i32, play: i32, bonus: i32, hero_class: HandClass) -> HandOutcome {
        HandOutcome { ante, play, bonus, hero_class }
    }

    #[test]
    fn record_sorts_wins_pushes_losses_by_main_game() {
        let mut t = Tally::default();
        t.record(&outcome(1, 2, -1, HandClass::Pair));
        t.record(&outcome(0, 0, 7, HandClass::Straight));
        t.record(&outcome(-1, -2, -1, HandClass::HighCard));
        t.record(&outcome(1, 0, -1, HandClass::HighCard));
        assert_eq!((t.wins, t.pushes, t.losses), (2, 1, 1));
        assert_eq!(t.ante, 1);
        assert_eq!(t.play, 0);
        assert_eq!(t.main_sq, 19);
        assert_eq!((t.bonus_hits, t.bonus_won), (1, 7));
        assert_eq!(t.count(HandClass::HighCard), 2);
    }

    #[test]
    fn merge_is_order_independent() {
        let mut a = Tally::default();
        a.record(&outcome(3, 2, 30, HandClass::FullHouse));
        let mut b = Tally::default();
        b.record(&outcome(-1, -2, -1, HandClass::Pair));
        b.record(&outcome(0, 0, -1, HandClass::TwoPair));
        assert_eq!(a.clone().merge(b.clone()), b.merge(a));
    }
}
