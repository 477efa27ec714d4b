//! Monte Carlo and exhaustive drivers for the call/fold EV of one hand.
//!
//! A request is the hero's hole cards and the flop. Each trial deals the
//! dealer's two hole cards plus the turn and river from the 47 unseen cards,
//! settles the hand with [`crate::payout::resolve_hand`] and adds it to a
//! running tally. Trials run in fixed-size batches on rayon, each
//! batch with its own ChaCha stream, so a seeded request gives the same
//! result on any number of workers.

mod cancel;
mod config;
mod result;
mod tally;

pub use cancel::CancelToken;
pub use config::{Method, SimulationConfig, DEFAULT_BATCH_SIZE, DEFAULT_TRIALS};
pub use result::{BonusDecision, Decision, HandFrequency, SimulationResult};

use crate::cards::Card;
use crate::deck::Deck;
use crate::evaluator::combinations::{choose, Combinations};
use crate::evaluator::{evaluate_seven, Evaluation};
use crate::hand::{parse_input, validate_input_cards, Flop, HandError, HoleCards};
use crate::payout::{resolve_hand, HandOutcome};
use crate::qualify::qualifies;
use cancel::StopCheck;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use std::time::Instant;
use tally::Tally;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum SimulationError {
    #[error(transparent)]
    InvalidHand(#[from] HandError),
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
    #[error("could not start worker pool: {0}")]
    ThreadPool(String),
    #[error("simulation cancelled")]
    Cancelled,
}

/// A validated request, ready to run any number of times.
#[derive(Debug, Clone)]
pub struct Simulator {
    hole: HoleCards,
    flop: Flop,
    deck: Deck,
    config: SimulationConfig,
}

impl Simulator {
    /// Validate the cards and config and build the deck of unseen cards.
    pub fn new(hole: HoleCards, flop: Flop, config: SimulationConfig) -> Result<Self, SimulationError> {
        validate_input_cards(&hole, &flop)?;
        config.validate()?;
        let [a, b] = hole.as_array();
        let [c, d, e] = flop.as_array();
        let deck = Deck::without(&[a, b, c, d, e]);
        log::debug!("{:<32}{} {} | {} {} {}", "simulator ready", a, b, c, d, e);
        Ok(Self { hole, flop, deck, config })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Run with the configured [`Method`].
    pub fn execute(&self, cancel: &CancelToken) -> Result<SimulationResult, SimulationError> {
        match self.config.method {
            Method::MonteCarlo => self.run_with_cancel(cancel),
            Method::Exact => self.enumerate_with_cancel(cancel),
        }
    }

    /// Monte Carlo estimate over `config.trials` sampled completions.
    pub fn run(&self) -> Result<SimulationResult, SimulationError> {
        self.run_with_cancel(&CancelToken::new())
    }

    pub fn run_with_cancel(&self, cancel: &CancelToken) -> Result<SimulationResult, SimulationError> {
        let started = Instant::now();
        let stop = StopCheck::new(cancel, self.config.deadline.map(|d| started + d));
        let seed = self.config.seed.unwrap_or_else(rand::random);
        let batches = self.config.batch_count();
        log::debug!(
            "{:<32}{} trials in {} batches, seed {}",
            "sampling",
            self.config.trials,
            batches,
            seed
        );

        let tally = self.finish(
            self.in_pool(|| {
                (0..batches)
                    .into_par_iter()
                    .map(|batch| self.sample_batch(seed, batch, &stop))
                    .try_reduce(Tally::default, |a, b| Ok(a.merge(b)))
            }),
            started,
        )?;
        Ok(SimulationResult::from_tally(&tally, false, Some(seed)))
    }

    /// Exact EV over every turn/river pair and every dealer hand.
    pub fn enumerate(&self) -> Result<SimulationResult, SimulationError> {
        self.enumerate_with_cancel(&CancelToken::new())
    }

    pub fn enumerate_with_cancel(&self, cancel: &CancelToken) -> Result<SimulationResult, SimulationError> {
        let started = Instant::now();
        let stop = StopCheck::new(cancel, self.config.deadline.map(|d| started + d));
        let unseen = self.deck.cards();
        let runouts: Vec<[usize; 2]> = Combinations::<2>::new(unseen.len()).collect();
        log::debug!(
            "{:<32}{} runouts x {} dealer hands",
            "enumerating",
            runouts.len(),
            choose(unseen.len().saturating_sub(2), 2)
        );

        let tally = self.finish(
            self.in_pool(|| {
                runouts
                    .into_par_iter()
                    .map(|[t, r]| self.enumerate_runout(unseen, t, r, &stop))
                    .try_reduce(Tally::default, |a, b| Ok(a.merge(b)))
            }),
            started,
        )?;
        Ok(SimulationResult::from_tally(&tally, true, None))
    }

    fn sample_batch(&self, seed: u64, batch: u64, stop: &StopCheck<'_>) -> Result<Tally, SimulationError> {
        stop.check()?;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        rng.set_stream(batch);
        let mut deck = self.deck.clone();
        let hole = self.hole.as_array();
        let flop = self.flop.as_array();

        let mut tally = Tally::default();
        for _ in 0..self.config.batch_len(batch) {
            let [d1, d2, turn, river] = deck.deal::<4, _>(&mut rng);
            let board = [flop[0], flop[1], flop[2], turn, river];
            let hero = evaluate_seven(&seven(&hole, &board));
            tally.record(&showdown(&hero, &[d1, d2], &board));
        }
        Ok(tally)
    }

    fn enumerate_runout(
        &self,
        unseen: &[Card],
        turn: usize,
        river: usize,
        stop: &StopCheck<'_>,
    ) -> Result<Tally, SimulationError> {
        stop.check()?;
        let flop = self.flop.as_array();
        let board = [flop[0], flop[1], flop[2], unseen[turn], unseen[river]];
        let hero = evaluate_seven(&seven(&self.hole.as_array(), &board));

        let rest: Vec<Card> = unseen
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != turn && i != river)
            .map(|(_, &c)| c)
            .collect();

        let mut tally = Tally::default();
        for [a, b] in Combinations::<2>::new(rest.len()) {
            tally.record(&showdown(&hero, &[rest[a], rest[b]], &board));
        }
        Ok(tally)
    }

    /// Run `work` on a dedicated pool when `threads` is set, else on the global pool.
    fn in_pool<T, F>(&self, work: F) -> Result<T, SimulationError>
    where
        T: Send,
        F: FnOnce() -> Result<T, SimulationError> + Send,
    {
        match self.config.threads {
            Some(n) => rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|e| SimulationError::ThreadPool(e.to_string()))?
                .install(work),
            None => work(),
        }
    }

    fn finish(
        &self,
        outcome: Result<Tally, SimulationError>,
        started: Instant,
    ) -> Result<Tally, SimulationError> {
        match outcome {
            Ok(tally) => {
                log::info!(
                    "{:<32}{} hands in {:.2?}",
                    "simulation finished",
                    tally.trials,
                    started.elapsed()
                );
                Ok(tally)
            }
            Err(SimulationError::Cancelled) => {
                log::warn!("{:<32}after {:.2?}", "simulation cancelled", started.elapsed());
                Err(SimulationError::Cancelled)
            }
            Err(e) => Err(e),
        }
    }
}

fn seven(hole: &[Card; 2], board: &[Card; 5]) -> [Card; 7] {
    [hole[0], hole[1], board[0], board[1], board[2], board[3], board[4]]
}

/// Settle one completed hand for a hero who called.
fn showdown(hero: &Evaluation, dealer_hole: &[Card; 2], board: &[Card; 5]) -> HandOutcome {
    let dealer = evaluate_seven(&seven(dealer_hole, board));
    resolve_hand(hero, &dealer, qualifies(&dealer))
}

/// Parse text input, validate it and run with `config.method`.
///
/// ```
/// use casino_holdem_ev::simulation::{simulate, Decision, SimulationConfig};
///
/// let cfg = SimulationConfig::default().with_trials(2_000).with_seed(1);
/// let result = simulate("As Ah", "Ad Kc Kh", &cfg).unwrap();
/// assert_eq!(result.trials, 2_000);
/// assert_eq!(result.recommendation, Decision::Call);
/// ```
pub fn simulate(hole: &str, flop: &str, config: &SimulationConfig) -> Result<SimulationResult, SimulationError> {
    let (hole, flop) = parse_input(hole, flop)?;
    Simulator::new(hole, flop, config.clone())?.execute(&CancelToken::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sim(hole: &str, flop: &str, config: SimulationConfig) -> Simulator {
        let (hole, flop) = parse_input(hole, flop).unwrap();
        Simulator::new(hole, flop, config).unwrap()
    }

    #[test]
    fn deck_excludes_the_five_known_cards() {
        let s = sim("As Kd", "2c Jh 9s", SimulationConfig::default());
        assert_eq!(s.deck().len(), 47);
    }

    #[test]
    fn trial_count_and_percentages_add_up() {
        let cfg = SimulationConfig::default().with_trials(3_210).with_batch_size(500).with_seed(3);
        let r = sim("7c 2d", "9h Ks 4c", cfg).run().unwrap();
        assert_eq!(r.trials, 3_210);
        assert!((r.win_pct + r.push_pct + r.loss_pct - 100.0).abs() < 1e-9);
        let freq: f64 = r.hand_frequencies.iter().map(|f| f.pct).sum();
        assert!((freq - 100.0).abs() < 1e-9);
        assert_eq!(r.fold_ev_without_bonus, -1.0);
    }

    #[test]
    fn seeded_runs_repeat() {
        let cfg = SimulationConfig::default().with_trials(2_000).with_seed(99);
        let s = sim("Qs Jh", "Tc 9d 2s", cfg);
        assert_eq!(s.run().unwrap(), s.run().unwrap());
    }

    #[test]
    fn pre_cancelled_token_runs_nothing() {
        let s = sim("Qs Jh", "Tc 9d 2s", SimulationConfig::default());
        let token = CancelToken::new();
        token.cancel();
        assert!(matches!(s.run_with_cancel(&token), Err(SimulationError::Cancelled)));
        assert!(matches!(s.enumerate_with_cancel(&token), Err(SimulationError::Cancelled)));
    }

    #[test]
    fn duplicate_input_is_rejected_before_running() {
        let err = simulate("As Kd", "As 7c 2d", &SimulationConfig::default()).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidHand(HandError::DuplicateCard(_))));
    }

    #[test]
    fn zero_trials_is_a_config_error() {
        let err = simulate("As Kd", "2c Jh 9s", &SimulationConfig::default().with_trials(0)).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidConfig(_)));
    }
}
