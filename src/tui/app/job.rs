use crate::hand::{Flop, HoleCards};
use crate::simulation::{CancelToken, SimulationError, SimulationResult, Simulator};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

/// A simulation running on a worker thread.
#[derive(Debug)]
pub(crate) struct Job {
    pub(crate) hole: HoleCards,
    pub(crate) flop: Flop,
    cancel: CancelToken,
    rx: Receiver<Result<SimulationResult, SimulationError>>,
    started: Instant,
}

/// Result of polling a [`Job`].
#[derive(Debug)]
pub(crate) enum JobPoll {
    Running,
    Done(Result<SimulationResult, SimulationError>),
}

impl Job {
    pub(crate) fn spawn(sim: Simulator, hole: HoleCards, flop: Flop) -> Self {
        let (tx, rx) = mpsc::channel();
        let cancel = CancelToken::new();
        let token = cancel.clone();
        thread::spawn(move || {
            // Receiver gone means the app quit; nothing to report to
            let _ = tx.send(sim.execute(&token));
        });
        Self { hole, flop, cancel, rx, started: Instant::now() }
    }

    pub(crate) fn cancel(&self) {
        self.cancel.cancel();
    }

    pub(crate) fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub(crate) fn poll(&self) -> JobPoll {
        match self.rx.try_recv() {
            Ok(outcome) => JobPoll::Done(outcome),
            Err(TryRecvError::Empty) => JobPoll::Running,
            Err(TryRecvError::Disconnected) => JobPoll::Done(Err(SimulationError::Cancelled)),
        }
    }
}
