//! Cooperative cancellation for long-running searches.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A cooperative stop flag shared between a search and its caller.
///
/// Cloned tokens observe the same flag, so a caller keeps one handle and
/// passes a clone (or a reference) into the search. The engine checks the
/// flag once per popped search state and reports a distinct cancelled
/// outcome; it never relies on forcibly killing a worker, which would leave
/// no well-defined result.
///
/// # Examples
///
/// ```
/// use boxdoku_solver::CancelToken;
///
/// let token = CancelToken::new();
/// let handle = token.clone();
///
/// assert!(!token.is_cancelled());
/// handle.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Creates a token that has not been cancelled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation; every clone of the token observes it.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Returns `true` once cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
