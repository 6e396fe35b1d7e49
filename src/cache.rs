//! Listing view cache.
//!
//! Rendered listing pages are cached outside this crate; what lives here is
//! the staleness ledger. A mutation invalidates the affected view path, and
//! the renderer checks [`ViewCache::is_stale`] before reusing a cached page,
//! calling [`ViewCache::mark_fresh`] once it has recomputed.

use async_trait::async_trait;
use std::collections::HashSet;
use tokio::sync::RwLock;
use tracing::{debug, trace};

/// Marks previously rendered views as stale after a mutation.
#[async_trait]
pub trait ListingCache: Send + Sync {
    /// Marks the view rendered at `path` stale so it is recomputed on next access.
    async fn invalidate(&self, path: &str);
}

/// Tracks which view paths need recomputation.
#[derive(Debug, Default)]
pub struct ViewCache {
    stale: RwLock<HashSet<String>>,
}

impl ViewCache {
    /// Creates an empty cache with no stale views.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the view at `path` must be recomputed before reuse.
    pub async fn is_stale(&self, path: &str) -> bool {
        self.stale.read().await.contains(path)
    }

    /// Clears the stale flag after the view has been recomputed.
    pub async fn mark_fresh(&self, path: &str) {
        let removed = self.stale.write().await.remove(path);
        trace!("Marked view {} fresh (was stale: {})", path, removed);
    }
}

#[async_trait]
impl ListingCache for ViewCache {
    async fn invalidate(&self, path: &str) {
        let mut stale = self.stale.write().await;
        if stale.insert(path.to_string()) {
            debug!("Invalidated cached view {}", path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalidate_marks_view_stale() {
        let cache = ViewCache::new();
        assert!(!cache.is_stale("/dashboard/invoices").await);

        cache.invalidate("/dashboard/invoices").await;
        assert!(cache.is_stale("/dashboard/invoices").await);
        // Other views are untouched
        assert!(!cache.is_stale("/dashboard").await);
    }

    #[tokio::test]
    async fn test_mark_fresh_clears_staleness() {
        let cache = ViewCache::new();
        cache.invalidate("/dashboard/invoices").await;
        cache.mark_fresh("/dashboard/invoices").await;
        assert!(!cache.is_stale("/dashboard/invoices").await);
    }

    #[tokio::test]
    async fn test_repeated_invalidation_is_idempotent() {
        let cache = ViewCache::new();
        cache.invalidate("/dashboard/invoices").await;
        cache.invalidate("/dashboard/invoices").await;
        assert!(cache.is_stale("/dashboard/invoices").await);

        cache.mark_fresh("/dashboard/invoices").await;
        assert!(!cache.is_stale("/dashboard/invoices").await);
    }
}
