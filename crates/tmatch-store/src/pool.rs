//! Catalog connection pool
//!
//! An explicit pool object with deterministic acquire/release, replacing
//! thread-local global connection caching. A worker acquires one handle,
//! keeps it for its lifetime, and drops it at teardown; with that usage at
//! most one physical connection is ever opened per worker.

use crate::{SqliteCatalog, StoreError};
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

/// Pool of catalog connections for one database path
///
/// The pool itself is `Sync`; handed-out handles are exclusively owned by
/// the acquiring worker and never shared, so no locking guards catalog use.
pub struct CatalogPool {
    path: PathBuf,
    idle: Mutex<Vec<SqliteCatalog>>,
}

impl CatalogPool {
    /// Create a pool for the catalog at `path`
    ///
    /// No connection is opened until the first [`CatalogPool::acquire`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            idle: Mutex::new(Vec::new()),
        }
    }

    /// Hand out a catalog handle, reusing an idle connection if one exists
    ///
    /// Fails if a new connection must be opened and the backing database
    /// is unavailable; nothing is retained on failure.
    pub fn acquire(&self) -> Result<PooledCatalog<'_>, StoreError> {
        let cached = self
            .idle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop();

        let catalog = match cached {
            Some(catalog) => catalog,
            None => SqliteCatalog::open(&self.path)?,
        };

        Ok(PooledCatalog {
            catalog: Some(catalog),
            pool: self,
        })
    }

    /// Close every idle connection
    ///
    /// Handles currently held by workers are unaffected; they close when
    /// dropped after this call only if the pool is gone by then, otherwise
    /// they rejoin the idle list.
    pub fn close_all(&self) {
        self.idle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Number of idle connections currently held by the pool
    pub fn idle_count(&self) -> usize {
        self.idle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn release(&self, catalog: SqliteCatalog) {
        self.idle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(catalog);
    }
}

/// A catalog handle on loan from a [`CatalogPool`]
///
/// Dereferences to [`SqliteCatalog`]; returns the underlying connection to
/// the pool's idle list when dropped.
pub struct PooledCatalog<'a> {
    catalog: Option<SqliteCatalog>,
    pool: &'a CatalogPool,
}

impl std::ops::Deref for PooledCatalog<'_> {
    type Target = SqliteCatalog;

    fn deref(&self) -> &Self::Target {
        // Only Drop takes the catalog out
        self.catalog.as_ref().expect("catalog present until drop")
    }
}

impl Drop for PooledCatalog<'_> {
    fn drop(&mut self) {
        if let Some(catalog) = self.catalog.take() {
            self.pool.release(catalog);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use tmatch_domain::{Template, TemplateCatalog};

    fn pool_with_template(dir: &tempfile::TempDir) -> CatalogPool {
        let path = dir.path().join("catalog.db");
        let catalog = SqliteCatalog::open(&path).unwrap();
        catalog
            .insert_template(&Template::new(
                "t1",
                "show_version",
                "Value X (.*)\n\nStart\n  ^${X}\n",
            ))
            .unwrap();
        CatalogPool::new(path)
    }

    #[test]
    fn test_acquire_opens_lazily_and_release_reuses() {
        let dir = tempfile::tempdir().unwrap();
        let pool = pool_with_template(&dir);
        assert_eq!(pool.idle_count(), 0);

        let handle = pool.acquire().unwrap();
        assert_eq!(handle.template_count().unwrap(), 1);
        drop(handle);
        assert_eq!(pool.idle_count(), 1);

        // Reacquire picks up the idle connection instead of opening anew
        let _handle = pool.acquire().unwrap();
        assert_eq!(pool.idle_count(), 0);
    }

    #[test]
    fn test_close_all_discards_idle_connections() {
        let dir = tempfile::tempdir().unwrap();
        let pool = pool_with_template(&dir);
        drop(pool.acquire().unwrap());
        assert_eq!(pool.idle_count(), 1);

        pool.close_all();
        assert_eq!(pool.idle_count(), 0);
    }

    #[test]
    fn test_acquire_fails_on_unopenable_path() {
        let pool = CatalogPool::new("/nonexistent-dir/catalog.db");
        assert!(pool.acquire().is_err());
        assert_eq!(pool.idle_count(), 0);
    }

    #[test]
    fn test_concurrent_acquire_from_many_threads() {
        let dir = tempfile::tempdir().unwrap();
        let pool = pool_with_template(&dir);

        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    let handle = pool.acquire().unwrap();
                    let all = handle.query(&BTreeSet::new()).unwrap();
                    assert_eq!(all.len(), 1);
                });
            }
        });

        // Every handle made it back to the idle list
        assert!(pool.idle_count() >= 1);
        assert!(pool.idle_count() <= 4);
    }
}
