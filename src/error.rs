//! Error types for the dashboard library.
//!
//! The simulation core is in-memory arithmetic and has no I/O failure modes;
//! errors only arise where text crosses into typed identifiers (rail ids,
//! locale codes) and when the event log is exported to disk.

use thiserror::Error;

/// Errors raised by the dashboard library.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// A rail identifier other than `A` or `B` was supplied.
    #[error("unknown rail identifier `{0}` (expected A or B)")]
    UnknownRail(String),

    /// A locale code other than fr/en/es/de was supplied.
    #[error("unknown locale `{0}` (expected fr, en, es or de)")]
    UnknownLocale(String),

    /// The event log could not be written.
    #[error("failed to export event log: {0}")]
    LogExport(#[from] std::io::Error),

    /// The event log could not be serialized.
    #[error("failed to serialize event log: {0}")]
    LogSerialize(#[from] serde_json::Error),
}

/// Convenience result alias.
pub type Result<T> = std::result::Result<T, DashboardError>;
