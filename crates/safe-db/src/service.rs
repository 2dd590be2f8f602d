//! Service layer over the status store.
//!
//! `BoardService` wraps `SafeDb` together with the listing page size. The
//! listing, submission, and deletion operations are implemented as
//! `impl BoardService` blocks in `repos`.

use safe_core::listing::DEFAULT_PAGE_SIZE;

use crate::SafeDb;
use crate::error::DatabaseError;

pub struct BoardService {
    db: SafeDb,
    page_size: u32,
}

impl BoardService {
    /// Open a local database and wrap it.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
    /// * `page_size` - Records per listing page. Zero is treated as the default.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str, page_size: u32) -> Result<Self, DatabaseError> {
        let db = SafeDb::open_local(db_path).await?;
        Ok(Self::from_db(db, page_size))
    }

    /// Wrap an existing `SafeDb`.
    #[must_use]
    pub const fn from_db(db: SafeDb, page_size: u32) -> Self {
        let page_size = if page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            page_size
        };
        Self { db, page_size }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &SafeDb {
        &self.db
    }

    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }
}
