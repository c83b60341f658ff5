//! Storage layer for ttm-finance
//!
//! JSON file storage with atomic writes. `Storage` owns one repository per
//! entity type plus the audit logger, so services can persist a change and
//! record it in one place.

pub mod debts;
pub mod file_io;
pub mod goals;

pub use debts::DebtRepository;
pub use file_io::{read_json, write_atomic, write_json_atomic};
pub use goals::GoalRepository;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::FinancePaths;
use crate::error::FinanceError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: FinancePaths,
    pub debts: DebtRepository,
    pub goals: GoalRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance, creating directories as needed
    pub fn new(paths: FinancePaths) -> Result<Self, FinanceError> {
        paths.ensure_directories()?;

        Ok(Self {
            debts: DebtRepository::new(paths.debts_file()),
            goals: GoalRepository::new(paths.goals_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    pub fn paths(&self) -> &FinancePaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), FinanceError> {
        self.debts.load()?;
        self.goals.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), FinanceError> {
        self.debts.save()?;
        self.goals.save()?;
        Ok(())
    }

    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), FinanceError> {
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> Result<(), FinanceError> {
        self.audit.log(&AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
        ))
    }

    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), FinanceError> {
        self.audit
            .log(&AuditEntry::delete(entity_type, entity_id, entity_name, entity))
    }

    /// Record several entries (e.g. every row touched by a reorder) at once
    pub fn log_batch(&self, entries: &[AuditEntry]) -> Result<(), FinanceError> {
        self.audit.log_batch(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Debt, Money};
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        let _storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
    }

    #[test]
    fn test_save_all_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths.clone()).unwrap();

        let debt = Debt::new("Visa", Money::from_dollars(100), 20.0, Money::from_dollars(10));
        storage.debts.upsert(debt.clone()).unwrap();
        storage.save_all().unwrap();
        storage
            .log_create(EntityType::Debt, debt.id.to_string(), Some(debt.name.clone()), &debt)
            .unwrap();

        let mut reopened = Storage::new(paths).unwrap();
        reopened.load_all().unwrap();
        assert_eq!(reopened.debts.count().unwrap(), 1);
        assert_eq!(reopened.audit().read_all().unwrap().len(), 1);
    }
}
