//! Shared test utilities for safe-db unit tests.

use safe_core::auth::{AdminGrant, AdminGuard};
use safe_core::status::StatusRecord;
use safe_core::submission::Submission;

use crate::service::BoardService;

/// Create an in-memory service with the given page size.
pub async fn test_service(page_size: u32) -> BoardService {
    BoardService::new_local(":memory:", page_size).await.unwrap()
}

/// Submit a record with the required fields only.
pub async fn submit(svc: &BoardService, name: &str, location: &str, status: &str) -> StatusRecord {
    let new = Submission {
        name: Some(name.into()),
        location: Some(location.into()),
        status: Some(status.into()),
        ..Submission::default()
    }
    .validate("127.0.0.1")
    .unwrap();
    svc.submit_status(&new).await.unwrap()
}

/// A grant minted from a throwaway guard.
pub fn admin_grant() -> AdminGrant {
    AdminGuard::new(Some("test-secret".into()))
        .authorize(Some("test-secret"))
        .unwrap()
}
