use super::SimulationError;
use std::time::Duration;

pub const DEFAULT_TRIALS: u64 = 10_000;
pub const DEFAULT_BATCH_SIZE: u64 = 1_000;

/// How the completions of the hand are explored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    /// Sample `trials` random completions.
    #[default]
    MonteCarlo,
    /// Visit every turn, river and dealer hand once.
    Exact,
}

impl Method {
    pub fn toggle(self) -> Self {
        match self {
            Method::MonteCarlo => Method::Exact,
            Method::Exact => Method::MonteCarlo,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Method::MonteCarlo => "Monte Carlo",
            Method::Exact => "Exact",
        }
    }
}

/// Per-request settings.
///
/// ```
/// use casino_holdem_ev::simulation::SimulationConfig;
///
/// let cfg = SimulationConfig::default().with_trials(50_000).with_seed(7).with_threads(2);
/// assert_eq!(cfg.trials, 50_000);
/// assert_eq!(cfg.seed, Some(7));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    pub trials: u64,
    /// `None` draws a fresh seed per request.
    pub seed: Option<u64>,
    /// `None` runs on rayon's global pool.
    pub threads: Option<usize>,
    pub batch_size: u64,
    pub deadline: Option<Duration>,
    pub method: Method,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            seed: None,
            threads: None,
            batch_size: DEFAULT_BATCH_SIZE,
            deadline: None,
            method: Method::MonteCarlo,
        }
    }
}

impl SimulationConfig {
    pub fn with_trials(mut self, trials: u64) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    pub fn with_batch_size(mut self, batch_size: u64) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.method == Method::MonteCarlo && self.trials == 0 {
            return Err(SimulationError::InvalidConfig("trials must be greater than zero"));
        }
        if self.batch_size == 0 {
            return Err(SimulationError::InvalidConfig("batch size must be greater than zero"));
        }
        if self.threads == Some(0) {
            return Err(SimulationError::InvalidConfig("thread count must be greater than zero"));
        }
        Ok(())
    }

    pub(crate) fn batch_count(&self) -> u64 {
        self.trials.div_ceil(self.batch_size)
    }

    /// Trials in batch `index`; only the last batch may be short.
    pub(crate) fn batch_len(&self, index: u64) -> u64 {
        let start = index * self.batch_size;
        self.batch_size.min(self.trials.saturating_sub(start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = SimulationConfig::default();
        assert_eq!(cfg.trials, 10_000);
        assert_eq!(cfg.batch_size, 1_000);
        assert_eq!(cfg.batch_count(), 10);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn last_batch_takes_the_remainder() {
        let cfg = SimulationConfig::default().with_trials(2_500);
        assert_eq!(cfg.batch_count(), 3);
        assert_eq!(cfg.batch_len(0), 1_000);
        assert_eq!(cfg.batch_len(2), 500);
        let total: u64 = (0..cfg.batch_count()).map(|b| cfg.batch_len(b)).sum();
        assert_eq!(total, 2_500);
    }

    #[test]
    fn rejects_zero_sizes() {
        assert!(SimulationConfig::default().with_trials(0).validate().is_err());
        assert!(SimulationConfig::default().with_batch_size(0).validate().is_err());
        assert!(SimulationConfig::default().with_threads(0).validate().is_err());
    }

    #[test]
    fn exact_ignores_trial_count() {
        let cfg = SimulationConfig::default().with_trials(0).with_method(Method::Exact);
        assert!(cfg.validate().is_ok());
    }
}
