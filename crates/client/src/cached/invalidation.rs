use std::fmt;
use std::future::Future;
use std::sync::Arc;

use notify_admin_core::cache::Cache;

/// A cache entry (or family of entries) made stale by a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invalidation {
    /// A single key.
    Key(String),
    /// Every key matching a glob pattern.
    Pattern(String),
}

impl Invalidation {
    pub fn key(key: impl Into<String>) -> Self {
        Invalidation::Key(key.into())
    }

    pub fn pattern(pattern: impl Into<String>) -> Self {
        Invalidation::Pattern(pattern.into())
    }
}

impl fmt::Display for Invalidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Invalidation::Key(key) => f.write_str(key),
            Invalidation::Pattern(pattern) => f.write_str(pattern),
        }
    }
}

/// Runs mutations and deletes the cache entries they make stale.
///
/// [`run`](Self::run) invalidates whatever the mutation's outcome, since a
/// failed request may still have been applied remotely.
#[derive(Clone)]
pub struct InvalidationGuard {
    cache: Arc<dyn Cache>,
}

impl InvalidationGuard {
    pub fn new(cache: Arc<dyn Cache>) -> Self {
        Self { cache }
    }

    /// Awaits `mutate`, deletes every target once, then returns the
    /// mutation's own result.
    pub async fn run<T, E, Fut>(&self, targets: &[Invalidation], mutate: Fut) -> Result<T, E>
    where
        Fut: Future<Output = Result<T, E>>,
    {
        let result = mutate.await;
        self.invalidate(targets).await;
        result
    }

    /// Awaits `mutate` and only deletes the targets if it succeeded.
    pub async fn run_on_success<T, E, Fut>(
        &self,
        targets: &[Invalidation],
        mutate: Fut,
    ) -> Result<T, E>
    where
        Fut: Future<Output = Result<T, E>>,
    {
        let value = mutate.await?;
        self.invalidate(targets).await;
        Ok(value)
    }

    /// Deletes every target. Store failures are logged and skipped.
    ///
    /// Returns the number of keys removed by pattern targets; single-key
    /// deletes are not counted because the store does not report them.
    pub async fn invalidate(&self, targets: &[Invalidation]) -> usize {
        let mut removed = 0;
        for target in targets {
            match target {
                Invalidation::Key(key) => {
                    if let Err(err) = self.cache.delete(key).await {
                        tracing::warn!(
                            invalidation = %target,
                            error = %err,
                            "Failed to invalidate cache key"
                        );
                    } else {
                        tracing::trace!(key = %key, "Cache key invalidated");
                    }
                }
                Invalidation::Pattern(pattern) => match self.cache.delete_pattern(pattern).await {
                    Ok(count) => {
                        tracing::trace!(pattern = %pattern, count, "Cache pattern invalidated");
                        removed += count;
                    }
                    Err(err) => {
                        tracing::warn!(
                            invalidation = %target,
                            error = %err,
                            "Failed to invalidate cache pattern"
                        );
                    }
                },
            }
        }
        removed
    }
}
