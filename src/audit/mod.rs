//! Append-only audit log
//!
//! Every mutating operation leaves a JSONL trail so the user can reconstruct
//! what changed and when.

pub mod entry;
pub mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
