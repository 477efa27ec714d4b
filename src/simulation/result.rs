use super::tally::Tally;
use crate::payout::{HandClass, FOLD_EV};
use core::fmt;

/// Main-game advice: call (ante + play) or fold (lose the ante).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Decision {
    Call,
    Fold,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Decision::Call => "CALL",
            Decision::Fold => "FOLD",
        })
    }
}

/// Bonus side bet advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BonusDecision {
    Place,
    Skip,
}

impl fmt::Display for BonusDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BonusDecision::Place => "PLACE BONUS BET",
            BonusDecision::Skip => "SKIP BONUS BET",
        })
    }
}

/// How often the hero finished with one hand class.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct HandFrequency {
    pub class: HandClass,
    pub count: u64,
    pub pct: f64,
}

/// Aggregate of one request. EVs are net units per hand; `*_pct` and
/// `bonus_hit_rate` are percentages in 0..=100.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct SimulationResult {
    pub trials: u64,
    /// True when every completion was enumerated rather than sampled.
    pub exact: bool,
    /// Seed the sampler ran with; `None` for exact enumeration.
    pub seed: Option<u64>,
    pub ante_ev: f64,
    pub play_ev: f64,
    pub bonus_ev: f64,
    pub call_ev_with_bonus: f64,
    pub call_ev_without_bonus: f64,
    pub fold_ev_with_bonus: f64,
    pub fold_ev_without_bonus: f64,
    /// Standard error of `call_ev_without_bonus`; zero when exact.
    pub call_ev_stderr: f64,
    pub win_pct: f64,
    pub push_pct: f64,
    pub loss_pct: f64,
    pub bonus_hit_rate: f64,
    /// Mean bonus payout over the hands where the bonus paid.
    pub bonus_average_win: f64,
    /// One entry per [`HandClass`], strongest first.
    pub hand_frequencies: Vec<HandFrequency>,
    pub recommendation: Decision,
    pub bonus_recommendation: BonusDecision,
}

impl SimulationResult {
    pub(crate) fn from_tally(tally: &Tally, exact: bool, seed: Option<u64>) -> Self {
        let n = tally.trials.max(1) as f64;
        let mean = |sum: i64| sum as f64 / n;
        let pct = |count: u64| count as f64 / n * 100.0;

        let ante_ev = mean(tally.ante);
        let play_ev = mean(tally.play);
        let bonus_ev = mean(tally.bonus);
        let call_ev_without_bonus = ante_ev + play_ev;

        let call_ev_stderr = if exact || tally.trials < 2 {
            0.0
        } else {
            let var = (mean(tally.main_sq) - call_ev_without_bonus * call_ev_without_bonus)
                * n
                / (n - 1.0);
            (var.max(0.0) / n).sqrt()
        };

        let bonus_average_win = if tally.bonus_hits > 0 {
            tally.bonus_won as f64 / tally.bonus_hits as f64
        } else {
            0.0
        };

        let hand_frequencies = HandClass::ALL
            .iter()
            .map(|&class| {
                let count = tally.count(class);
                HandFrequency { class, count, pct: pct(count) }
            })
            .collect();

        let recommendation =
            if call_ev_without_bonus > FOLD_EV { Decision::Call } else { Decision::Fold };
        let bonus_recommendation =
            if bonus_ev > -1.0 { BonusDecision::Place } else { BonusDecision::Skip };

        Self {
            trials: tally.trials,
            exact,
            seed,
            ante_ev,
            play_ev,
            bonus_ev,
            call_ev_with_bonus: call_ev_without_bonus + bonus_ev,
            call_ev_without_bonus,
            fold_ev_with_bonus: FOLD_EV + bonus_ev,
            fold_ev_without_bonus: FOLD_EV,
            call_ev_stderr,
            win_pct: pct(tally.wins),
            push_pct: pct(tally.pushes),
            loss_pct: pct(tally.losses),
            bonus_hit_rate: pct(tally.bonus_hits),
            bonus_average_win,
            hand_frequencies,
            recommendation,
            bonus_recommendation,
        }
    }

    /// Frequency entry for one class.
    pub fn frequency(&self, class: HandClass) -> Option<&HandFrequency> {
        self.hand_frequencies.iter().find(|f| f.class == class)
    }

    /// Call-EV margin over folding. Positive means call.
    pub fn edge(&self) -> f64 {
        self.call_ev_without_bonus - self.fold_ev_without_bonus
    }
}
