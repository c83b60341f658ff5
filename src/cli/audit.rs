//! `ttm audit`: show recent audit log entries

use crate::error::FinanceResult;
use crate::storage::Storage;

pub fn handle_audit_command(storage: &Storage, limit: usize) -> FinanceResult<()> {
    let entries = storage.audit().read_recent(limit)?;

    if entries.is_empty() {
        println!("No audit entries yet.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
