//! Database migration runner.
//!
//! Embeds the SQL migration files at compile time and executes them on
//! database open. Every migration is safe to re-run.

use crate::SafeDb;
use crate::error::DatabaseError;

/// `safety_checks` table and its listing index.
const MIGRATION_001: &str = include_str!("../migrations/001_initial.sql");

/// Legacy timestamp rewrite and the normalized listing index.
const MIGRATION_002: &str = include_str!("../migrations/002_normalize_created_at.sql");

impl SafeDb {
    /// Run all embedded migrations in sequence.
    pub(crate) async fn run_migrations(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(MIGRATION_001)
            .await
            .map_err(|e| DatabaseError::Migration(format!("001_initial: {e}")))?;
        self.conn
            .execute_batch(MIGRATION_002)
            .await
            .map_err(|e| DatabaseError::Migration(format!("002_normalize_created_at: {e}")))?;
        Ok(())
    }
}
