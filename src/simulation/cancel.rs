use super::SimulationError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Shared flag that stops a running request at the next batch boundary.
///
/// Clones share the flag, so one clone can be handed to a worker thread and
/// the other kept by whoever may cancel.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Cancellation flag plus optional deadline, polled by every unit of work.
pub(crate) struct StopCheck<'a> {
    token: &'a CancelToken,
    deadline: Option<Instant>,
}

impl<'a> StopCheck<'a> {
    pub(crate) fn new(token: &'a CancelToken, deadline: Option<Instant>) -> Self {
        Self { token, deadline }
    }

    pub(crate) fn check(&self) -> Result<(), SimulationError> {
        let expired = self.deadline.is_some_and(|d| Instant::now() >= d);
        if expired || self.token.is_cancelled() {
            // Trip the shared flag so sibling batches stop without re-reading the clock
            self.token.cancel();
            return Err(SimulationError::Cancelled);
        }
        Ok(())
    }
}
