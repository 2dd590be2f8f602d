//! # safe-db
//!
//! libSQL persistence for I Am Safe status records.
//!
//! The store is append-and-delete only: records are inserted by the
//! submission path, read by the listing path, and removed by the admin
//! deletion path. Every statement is parameterized and runs as a single
//! atomic operation, so concurrent requests need no in-process locking.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Database handle: a libSQL database and its shared connection.
pub struct SafeDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl SafeDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let safe_db = Self { db, conn };
        safe_db.run_migrations().await?;
        tracing::debug!(path, "database opened");
        Ok(safe_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_db() -> SafeDb {
        SafeDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;

        for name in ["safety_checks", "idx_safety_checks_created_norm"] {
            let mut rows = db
                .conn()
                .query(
                    "SELECT name FROM sqlite_master WHERE name = ?1",
                    [name],
                )
                .await
                .unwrap();
            assert!(
                rows.next().await.unwrap().is_some(),
                "'{name}' should exist"
            );
        }
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn store_assigns_id_and_timestamp() {
        let db = test_db().await;

        db.conn()
            .execute(
                "INSERT INTO safety_checks (name, location, status) VALUES (?1, ?2, ?3)",
                libsql::params!["Chan Tai Man", "Shelter#3", "Safe"],
            )
            .await
            .unwrap();

        let mut rows = db
            .conn()
            .query("SELECT id, ip_address, created_at FROM safety_checks", ())
            .await
            .unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<i64>(0).unwrap(), 1);
        assert_eq!(row.get::<String>(1).unwrap(), "unknown");
        let created_at = row.get::<String>(2).unwrap();
        helpers::parse_datetime(&created_at).unwrap();
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let db = test_db().await;
        let insert = "INSERT INTO safety_checks (name, location, status) VALUES ('a', 'b', 'Safe')";

        db.conn().execute(insert, ()).await.unwrap();
        db.conn()
            .execute("DELETE FROM safety_checks WHERE id = 1", ())
            .await
            .unwrap();
        db.conn().execute(insert, ()).await.unwrap();

        let mut rows = db
            .conn()
            .query("SELECT id FROM safety_checks", ())
            .await
            .unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<i64>(0).unwrap(), 2);
    }

    #[tokio::test]
    async fn reopen_rewrites_legacy_timestamps() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.db");
        let path = path.to_string_lossy();

        {
            let db = SafeDb::open_local(&path).await.unwrap();
            db.conn()
                .execute(
                    "INSERT INTO safety_checks (name, status, created_at) VALUES ('a', 'Safe', '2025-11-26 15:00:00')",
                    (),
                )
                .await
                .unwrap();
        }

        let db = SafeDb::open_local(&path).await.unwrap();
        let mut rows = db
            .conn()
            .query("SELECT created_at FROM safety_checks", ())
            .await
            .unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<String>(0).unwrap(), "2025-11-26T15:00:00.000Z");
    }

    #[tokio::test]
    async fn file_database_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.db");
        let path = path.to_string_lossy();

        {
            let db = SafeDb::open_local(&path).await.unwrap();
            db.conn()
                .execute(
                    "INSERT INTO safety_checks (name, location, status) VALUES ('a', 'b', 'Help')",
                    (),
                )
                .await
                .unwrap();
        }

        let db = SafeDb::open_local(&path).await.unwrap();
        let mut rows = db
            .conn()
            .query("SELECT status FROM safety_checks", ())
            .await
            .unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<String>(0).unwrap(), "Help");
    }
}
