//! # safe-core
//!
//! Core types shared by every I Am Safe crate.
//!
//! - The `StatusRecord` entity and the `Status` enum
//! - Submission validation (the single source of truth for required fields)
//! - Listing queries and the page envelope returned by the listing service
//! - The admin guard used to authorize destructive actions
//! - Static localization tables
//! - Cross-cutting error types

pub mod auth;
pub mod errors;
pub mod i18n;
pub mod listing;
pub mod status;
pub mod submission;
