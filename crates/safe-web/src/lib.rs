//! # safe-web
//!
//! HTTP surface of the I Am Safe board: routing, the three request handlers,
//! HTML rendering, and server startup.

pub mod cli;
pub mod client_addr;
pub mod error;
pub mod render;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{router, serve, shutdown_signal};
pub use state::{AppState, BoardSettings};
