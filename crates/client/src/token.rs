//! Stale-response guard for views that re-fetch as their subject changes.
//!
//! A view that fetches on every route-parameter change can see an earlier,
//! slower response arrive after a later one and overwrite fresher state.
//! The fix is to tag each request with a token captured at issue time and
//! apply a result only while its token is still the latest one issued.

use std::sync::atomic::{AtomicU64, Ordering};

/// A token captured when a request is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Issues monotonically increasing request tokens for one view.
#[derive(Debug, Default)]
pub struct RequestTokens {
    latest: AtomicU64,
}

impl RequestTokens {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new token, invalidating all previously issued ones.
    pub fn issue(&self) -> RequestToken {
        RequestToken(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// True while `token` is the most recently issued one. A stale token
    /// means the view has since asked for something else and the response
    /// carrying this token must be discarded.
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest.load(Ordering::SeqCst) == token.0
    }
}
