//! Cancellation token threaded through the analysis loops.
//!
//! The engine is synchronous and CPU-bound; per-segment and per-candidate
//! work is the natural checkpoint granularity. A fired token turns the next
//! checkpoint into `AnalysisError::Cancelled`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::errors::AnalysisError;

/// Shared cancellation flag. Cloning is cheap and all clones observe the
/// same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire the token. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Checkpoint helper: `Err(Cancelled)` once the token has fired.
    pub fn check(&self) -> Result<(), AnalysisError> {
        if self.is_cancelled() {
            Err(AnalysisError::Cancelled)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_token_passes_checkpoints() {
        let token = CancelToken::new();
        assert!(!token.is_cancelled());
        assert!(token.check().is_ok());
    }

    #[test]
    fn test_cancel_observed_by_clones() {
        let token = CancelToken::new();
        let clone = token.clone();
        token.cancel();
        assert!(clone.is_cancelled());
        assert!(matches!(clone.check(), Err(AnalysisError::Cancelled)));
    }
}
