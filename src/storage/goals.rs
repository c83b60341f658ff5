//! Goal repository for JSON storage
//!
//! Manages loading and saving savings goals to goals.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::FinanceError;
use crate::models::{GoalId, SavingsGoal};

use super::file_io::{read_json, write_json_atomic};

/// On-disk layout of goals.json
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct GoalData {
    goals: Vec<SavingsGoal>,
}

/// Repository for savings goal persistence
pub struct GoalRepository {
    path: PathBuf,
    data: RwLock<HashMap<GoalId, SavingsGoal>>,
}

impl GoalRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<GoalId, SavingsGoal>>, FinanceError> {
        self.data
            .read()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<GoalId, SavingsGoal>>, FinanceError> {
        self.data
            .write()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load goals from disk, replacing anything held in memory
    pub fn load(&self) -> Result<(), FinanceError> {
        let file_data: GoalData = read_json(&self.path)?;

        let mut data = self.write()?;
        data.clear();
        for goal in file_data.goals {
            data.insert(goal.id, goal);
        }

        Ok(())
    }

    /// Save goals to disk in display order
    pub fn save(&self) -> Result<(), FinanceError> {
        let file_data = GoalData {
            goals: self.get_all()?,
        };
        write_json_atomic(&self.path, &file_data)
    }

    pub fn get(&self, id: GoalId) -> Result<Option<SavingsGoal>, FinanceError> {
        Ok(self.read()?.get(&id).cloned())
    }

    /// All goals in display order
    pub fn get_all(&self) -> Result<Vec<SavingsGoal>, FinanceError> {
        let mut goals: Vec<_> = self.read()?.values().cloned().collect();
        goals.sort_by(|a, b| a.sort_order.cmp(&b.sort_order).then(a.name.cmp(&b.name)));
        Ok(goals)
    }

    /// Find a goal by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> Result<Option<SavingsGoal>, FinanceError> {
        let name_lower = name.to_lowercase();
        Ok(self
            .read()?
            .values()
            .find(|g| g.name.to_lowercase() == name_lower)
            .cloned())
    }

    /// Find a goal by its short display ID or a UUID prefix
    pub fn get_by_short_id(&self, short: &str) -> Result<Option<SavingsGoal>, FinanceError> {
        let data = self.read()?;
        let mut matches = data.values().filter(|g| g.id.matches_short(short));
        match (matches.next(), matches.next()) {
            (Some(goal), None) => Ok(Some(goal.clone())),
            _ => Ok(None),
        }
    }

    pub fn upsert(&self, goal: SavingsGoal) -> Result<(), FinanceError> {
        self.write()?.insert(goal.id, goal);
        Ok(())
    }

    pub fn delete(&self, id: GoalId) -> Result<bool, FinanceError> {
        Ok(self.write()?.remove(&id).is_some())
    }

    /// Check if a name is taken by a goal other than `exclude_id`
    pub fn name_exists(&self, name: &str, exclude_id: Option<GoalId>) -> Result<bool, FinanceError> {
        let name_lower = name.to_lowercase();
        Ok(self
            .read()?
            .values()
            .any(|g| g.name.to_lowercase() == name_lower && Some(g.id) != exclude_id))
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

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("goals.json");
        let repo = GoalRepository::new(path.clone());

        let mut goal = SavingsGoal::new("Emergency Fund", Money::from_dollars(10_000));
        goal.saved = Money::from_dollars(1_500);
        let id = goal.id;
        repo.upsert(goal).unwrap();
        repo.save().unwrap();

        let reloaded = GoalRepository::new(path);
        reloaded.load().unwrap();
        let loaded = reloaded.get(id).unwrap().unwrap();
        assert_eq!(loaded.saved, Money::from_dollars(1_500));
        assert!(reloaded.name_exists("emergency fund", None).unwrap());
        assert!(reloaded.get_by_short_id(&id.to_string()).unwrap().is_some());
    }
}
