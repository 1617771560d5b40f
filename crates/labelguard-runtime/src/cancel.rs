use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Caller-supplied cancellation for the fetch phase.
///
/// Cloning shares the flag: cancelling any clone cancels them all. A token
/// observed as cancelled inside a fetch task makes that task report and
/// join normally, never block the completion barrier.
#[derive(Clone, Debug, Default)]
pub struct Cancellation {
    cancelled: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl Cancellation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            deadline: Some(Instant::now() + timeout),
        }
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        if self.cancelled.load(Ordering::Relaxed) {
            return true;
        }
        self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_token_is_live() {
        assert!(!Cancellation::new().is_cancelled());
    }

    #[test]
    fn cancel_is_shared_across_clones() {
        let ctx = Cancellation::new();
        let clone = ctx.clone();
        clone.cancel();
        assert!(ctx.is_cancelled());
    }

    #[test]
    fn elapsed_deadline_cancels() {
        let ctx = Cancellation::with_timeout(Duration::ZERO);
        assert!(ctx.is_cancelled());
    }
}
