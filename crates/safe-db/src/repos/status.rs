//! Status record repository: insert, paginated listing with search, delete.

use safe_core::auth::AdminGrant;
use safe_core::listing::{ListQuery, Page};
use safe_core::status::StatusRecord;
use safe_core::submission::NewStatus;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime, substring_pattern};
use crate::service::BoardService;

const RECORD_COLUMNS: &str =
    "id, name, id_number, location, status, message, ip_address, created_at";

/// Listing sort key. Matches the expression of `idx_safety_checks_created_norm`
/// so rows in either timestamp format order chronologically.
const CREATED_AT_KEY: &str = "strftime('%Y-%m-%dT%H:%M:%fZ', created_at)";

fn row_to_record(row: &libsql::Row) -> Result<StatusRecord, DatabaseError> {
    Ok(StatusRecord {
        id: row.get::<i64>(0)?,
        name: row.get::<String>(1)?,
        id_number: get_opt_string(row, 2)?,
        location: get_opt_string(row, 3)?.unwrap_or_default(),
        status: row.get::<String>(4)?,
        message: get_opt_string(row, 5)?,
        ip_address: get_opt_string(row, 6)?.unwrap_or_else(|| "unknown".to_string()),
        created_at: parse_datetime(&row.get::<String>(7)?)?,
    })
}

fn to_sql_int(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

impl BoardService {
    /// Insert a validated check-in. The store assigns `id` and `created_at`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the INSERT fails.
    pub async fn submit_status(&self, new: &NewStatus) -> Result<StatusRecord, DatabaseError> {
        let sql = format!(
            "INSERT INTO safety_checks (name, id_number, location, status, message, ip_address)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             RETURNING {RECORD_COLUMNS}"
        );
        let mut rows = self
            .db()
            .conn()
            .query(
                &sql,
                libsql::params![
                    new.name(),
                    new.id_number(),
                    new.location(),
                    new.status(),
                    new.message(),
                    new.ip_address()
                ],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let record = row_to_record(&row)?;

        tracing::info!(id = record.id, status = %record.status, "status record created");
        Ok(record)
    }

    /// Fetch one record by id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no record has this id.
    #[cfg(test)]
    pub(crate) async fn get_status(&self, id: i64) -> Result<StatusRecord, DatabaseError> {
        let sql = format!("SELECT {RECORD_COLUMNS} FROM safety_checks WHERE id = ?1");
        let mut rows = self.db().conn().query(&sql, [id]).await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_record(&row)
    }

    /// Total number of stored records.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    #[cfg(test)]
    pub(crate) async fn count_statuses(&self) -> Result<u64, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query("SELECT COUNT(*) FROM safety_checks", ())
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let count = row.get::<i64>(0)?;
        u64::try_from(count).map_err(|e| DatabaseError::Query(format!("negative count: {e}")))
    }

    /// One page of records, newest first, optionally filtered.
    ///
    /// Fetches `page_size + 1` rows; the extra row only sets `has_next`. A
    /// search string matches as a literal substring of `name`, `location`,
    /// `status`, or `id_number` (`LIKE`, ASCII case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a row is malformed.
    pub async fn list_statuses(
        &self,
        query: &ListQuery,
    ) -> Result<Page<StatusRecord>, DatabaseError> {
        let page_size = self.page_size();
        let limit = i64::from(page_size) + 1;
        let offset = to_sql_int(query.offset(page_size));

        let mut rows = match query.search() {
            Some(search) => {
                let sql = format!(
                    r"SELECT {RECORD_COLUMNS} FROM safety_checks
                     WHERE name LIKE ?1 ESCAPE '\'
                        OR location LIKE ?1 ESCAPE '\'
                        OR status LIKE ?1 ESCAPE '\'
                        OR id_number LIKE ?1 ESCAPE '\'
                     ORDER BY {CREATED_AT_KEY} DESC, id DESC LIMIT ?2 OFFSET ?3"
                );
                self.db()
                    .conn()
                    .query(&sql, libsql::params![substring_pattern(search), limit, offset])
                    .await?
            }
            None => {
                let sql = format!(
                    "SELECT {RECORD_COLUMNS} FROM safety_checks
                     ORDER BY {CREATED_AT_KEY} DESC, id DESC LIMIT ?1 OFFSET ?2"
                );
                self.db()
                    .conn()
                    .query(&sql, libsql::params![limit, offset])
                    .await?
            }
        };

        let mut fetched = Vec::new();
        while let Some(row) = rows.next().await? {
            fetched.push(row_to_record(&row)?);
        }

        Ok(Page::from_peeked(fetched, query.page(), page_size))
    }

    /// Delete one record. Requires proof of admin authorization.
    ///
    /// Deleting an id that does not exist is not an error; the returned count
    /// is simply zero.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the DELETE fails.
    pub async fn delete_status(&self, _grant: &AdminGrant, id: i64) -> Result<u64, DatabaseError> {
        let changes = self
            .db()
            .conn()
            .execute("DELETE FROM safety_checks WHERE id = ?1", [id])
            .await?;

        if changes == 0 {
            tracing::info!(id, "delete matched no record");
        } else {
            tracing::info!(id, changes, "status record deleted");
        }
        Ok(changes)
    }
}
