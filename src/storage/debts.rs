//! Debt repository for JSON storage
//!
//! Manages loading and saving debts to debts.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::FinanceError;
use crate::models::{Debt, DebtId};

use super::file_io::{read_json, write_json_atomic};

/// On-disk layout of debts.json
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct DebtData {
    debts: Vec<Debt>,
}

/// Repository for debt persistence
pub struct DebtRepository {
    path: PathBuf,
    data: RwLock<HashMap<DebtId, Debt>>,
}

impl DebtRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<DebtId, Debt>>, FinanceError> {
        self.data
            .read()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<DebtId, Debt>>, FinanceError> {
        self.data
            .write()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load debts from disk, replacing anything held in memory
    pub fn load(&self) -> Result<(), FinanceError> {
        let file_data: DebtData = read_json(&self.path)?;

        let mut data = self.write()?;
        data.clear();
        for debt in file_data.debts {
            data.insert(debt.id, debt);
        }

        Ok(())
    }

    /// Save debts to disk in display order
    pub fn save(&self) -> Result<(), FinanceError> {
        let file_data = DebtData {
            debts: self.get_all()?,
        };
        write_json_atomic(&self.path, &file_data)
    }

    pub fn get(&self, id: DebtId) -> Result<Option<Debt>, FinanceError> {
        Ok(self.read()?.get(&id).cloned())
    }

    /// All debts in display order
    pub fn get_all(&self) -> Result<Vec<Debt>, FinanceError> {
        let mut debts: Vec<_> = self.read()?.values().cloned().collect();
        debts.sort_by(|a, b| a.sort_order.cmp(&b.sort_order).then(a.name.cmp(&b.name)));
        Ok(debts)
    }

    /// Find a debt by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> Result<Option<Debt>, FinanceError> {
        let name_lower = name.to_lowercase();
        Ok(self
            .read()?
            .values()
            .find(|d| d.name.to_lowercase() == name_lower)
            .cloned())
    }

    /// Find a debt by its short display ID or a UUID prefix
    pub fn get_by_short_id(&self, short: &str) -> Result<Option<Debt>, FinanceError> {
        let data = self.read()?;
        let mut matches = data.values().filter(|d| d.id.matches_short(short));
        match (matches.next(), matches.next()) {
            (Some(debt), None) => Ok(Some(debt.clone())),
            _ => Ok(None),
        }
    }

    pub fn upsert(&self, debt: Debt) -> Result<(), FinanceError> {
        self.write()?.insert(debt.id, debt);
        Ok(())
    }

    pub fn delete(&self, id: DebtId) -> Result<bool, FinanceError> {
        Ok(self.write()?.remove(&id).is_some())
    }

    /// Check if a name is taken by a debt other than `exclude_id`
    pub fn name_exists(&self, name: &str, exclude_id: Option<DebtId>) -> Result<bool, FinanceError> {
        let name_lower = name.to_lowercase();
        Ok(self
            .read()?
            .values()
            .any(|d| d.name.to_lowercase() == name_lower && Some(d.id) != exclude_id))
    }

    pub fn count(&self) -> Result<usize, FinanceError> {
        Ok(self.read()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, DebtRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = DebtRepository::new(temp_dir.path().join("debts.json"));
        (temp_dir, repo)
    }

    fn visa() -> Debt {
        Debt::new("Visa", Money::from_dollars(2500), 19.99, Money::from_dollars(75))
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        let debt = visa();
        let id = debt.id;

        repo.upsert(debt).unwrap();
        repo.save().unwrap();

        let reloaded = DebtRepository::new(temp_dir.path().join("debts.json"));
        reloaded.load().unwrap();
        let loaded = reloaded.get(id).unwrap().unwrap();
        assert_eq!(loaded.name, "Visa");
        assert_eq!(loaded.balance, Money::from_dollars(2500));
    }

    #[test]
    fn test_lookup_by_name_and_short_id() {
        let (_temp_dir, repo) = create_test_repo();
        let debt = visa();
        let short = debt.id.to_string();
        repo.upsert(debt).unwrap();

        assert!(repo.get_by_name("VISA").unwrap().is_some());
        assert!(repo.get_by_short_id(&short).unwrap().is_some());
        assert!(repo.get_by_name("Amex").unwrap().is_none());
    }

    #[test]
    fn test_get_all_respects_sort_order() {
        let (_temp_dir, repo) = create_test_repo();
        let mut first = Debt::new("Zed", Money::from_dollars(1), 1.0, Money::zero());
        first.sort_order = 0;
        let mut second = Debt::new("Alpha", Money::from_dollars(1), 1.0, Money::zero());
        second.sort_order = 1;
        repo.upsert(second).unwrap();
        repo.upsert(first).unwrap();

        let names: Vec<String> = repo.get_all().unwrap().into_iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["Zed", "Alpha"]);
    }

    #[test]
    fn test_name_exists_and_delete() {
        let (_temp_dir, repo) = create_test_repo();
        let debt = visa();
        let id = debt.id;
        repo.upsert(debt).unwrap();

        assert!(repo.name_exists("visa", None).unwrap());
        assert!(!repo.name_exists("visa", Some(id)).unwrap());

        assert!(repo.delete(id).unwrap());
        assert!(!repo.delete(id).unwrap());
        assert_eq!(repo.count().unwrap(), 0);
    }
}
