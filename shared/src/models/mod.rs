//! Data models
//!
//! Shared between staff-server and its clients (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod employee;
pub mod job;
pub mod role;
pub mod view;

// Re-exports
pub use employee::*;
pub use job::*;
pub use role::*;
pub use view::*;
