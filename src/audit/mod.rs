//! Audit log for ttm-finance
//!
//! Every create, update and delete of a debt or savings goal is appended to
//! a JSON-lines log with before/after snapshots.
//!
//! - `AuditEntry`: one logged operation
//! - `AuditLogger`: appends entries to and reads them back from the log file
//! - `generate_diff`: short field-level summary of what an update changed

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
