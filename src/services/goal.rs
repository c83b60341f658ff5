//! Savings goal service
//!
//! CRUD, deposits, reordering and progress reporting for savings goals.

use chrono::{Local, NaiveDate};
use tracing::info;

use crate::audit::{AuditEntry, EntityType};
use crate::error::{FinanceError, FinanceResult};
use crate::models::ordering::{move_item, next_position, renumber};
use crate::models::{GoalId, GoalProgress, Money, SavingsGoal};
use crate::storage::Storage;

pub struct GoalService<'a> {
    storage: &'a Storage,
}

/// Fields to change on an existing goal
#[derive(Debug, Clone, Default)]
pub struct GoalUpdate {
    pub name: Option<String>,
    pub target: Option<Money>,
    pub monthly_contribution: Option<Money>,
    /// `Some(None)` clears the target date
    pub target_date: Option<Option<NaiveDate>>,
}

impl GoalUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.target.is_none()
            && self.monthly_contribution.is_none()
            && self.target_date.is_none()
    }
}

/// A goal together with its progress as of today
#[derive(Debug, Clone)]
pub struct GoalSummary {
    pub goal: SavingsGoal,
    pub progress: GoalProgress,
}

impl<'a> GoalService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn create(
        &self,
        name: &str,
        target: Money,
        saved: Money,
        monthly_contribution: Money,
        target_date: Option<NaiveDate>,
    ) -> FinanceResult<SavingsGoal> {
        let name = name.trim();
        if self.storage.goals.name_exists(name, None)? {
            return Err(FinanceError::Duplicate {
                entity_type: "Goal",
                identifier: name.to_string(),
            });
        }

        let mut goal = SavingsGoal::new(name, target);
        goal.saved = saved;
        goal.monthly_contribution = monthly_contribution;
        goal.target_date = target_date;
        goal.validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;
        goal.sort_order = next_position(&self.storage.goals.get_all()?);

        self.storage.goals.upsert(goal.clone())?;
        self.storage.goals.save()?;
        self.storage.log_create(
            EntityType::Goal,
            goal.id.to_string(),
            Some(goal.name.clone()),
            &goal,
        )?;

        info!(id = %goal.id, name = %goal.name, "created goal");
        Ok(goal)
    }

    /// Find a goal by name, short display ID, or full UUID
    pub fn find(&self, identifier: &str) -> FinanceResult<Option<SavingsGoal>> {
        if let Some(goal) = self.storage.goals.get_by_name(identifier)? {
            return Ok(Some(goal));
        }

        if let Ok(id) = identifier.parse::<GoalId>() {
            return self.storage.goals.get(id);
        }

        self.storage.goals.get_by_short_id(identifier)
    }

    pub fn require(&self, identifier: &str) -> FinanceResult<SavingsGoal> {
        self.find(identifier)?
            .ok_or_else(|| FinanceError::goal_not_found(identifier))
    }

    pub fn list(&self) -> FinanceResult<Vec<SavingsGoal>> {
        self.storage.goals.get_all()
    }

    /// Every goal with its progress as of `today`
    pub fn summaries(&self, today: NaiveDate) -> FinanceResult<Vec<GoalSummary>> {
        Ok(self
            .list()?
            .into_iter()
            .map(|goal| GoalSummary {
                progress: goal.progress(today),
                goal,
            })
            .collect())
    }

    pub fn summary(&self, goal: SavingsGoal) -> GoalSummary {
        GoalSummary {
            progress: goal.progress(today()),
            goal,
        }
    }

    pub fn update(&self, id: GoalId, update: GoalUpdate) -> FinanceResult<SavingsGoal> {
        let mut goal = self.load(id)?;
        let before = goal.clone();

        if let Some(name) = update.name {
            let name = name.trim().to_string();
            if self.storage.goals.name_exists(&name, Some(id))? {
                return Err(FinanceError::Duplicate {
                    entity_type: "Goal",
                    identifier: name,
                });
            }
            goal.name = name;
        }
        if let Some(target) = update.target {
            goal.target = target;
        }
        if let Some(contribution) = update.monthly_contribution {
            goal.monthly_contribution = contribution;
        }
        if let Some(target_date) = update.target_date {
            goal.target_date = target_date;
        }

        goal.validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;
        goal.touch();

        self.persist_update(&before, &goal)?;
        Ok(goal)
    }

    /// Add money to a goal
    pub fn deposit(&self, id: GoalId, amount: Money) -> FinanceResult<SavingsGoal> {
        if !amount.is_positive() {
            return Err(FinanceError::Validation(format!(
                "Deposit must be greater than zero: {}",
                amount
            )));
        }

        let mut goal = self.load(id)?;
        let before = goal.clone();
        goal.deposit(amount);

        self.persist_update(&before, &goal)?;
        Ok(goal)
    }

    pub fn delete(&self, id: GoalId) -> FinanceResult<SavingsGoal> {
        let goal = self.load(id)?;
        self.storage.goals.delete(id)?;

        let mut remaining = self.storage.goals.get_all()?;
        renumber(&mut remaining);
        for g in remaining {
            self.storage.goals.upsert(g)?;
        }
        self.storage.goals.save()?;

        self.storage.log_delete(
            EntityType::Goal,
            goal.id.to_string(),
            Some(goal.name.clone()),
            &goal,
        )?;
        Ok(goal)
    }

    /// Move a goal to `position` (0-based) in the display order
    pub fn move_to(&self, id: GoalId, position: usize) -> FinanceResult<Vec<SavingsGoal>> {
        let mut goals = self.list()?;
        let from = goals
            .iter()
            .position(|g| g.id == id)
            .ok_or_else(|| FinanceError::goal_not_found(id.to_string()))?;
        let before = goals.clone();

        move_item(&mut goals, from, position)
            .map_err(|e| FinanceError::Validation(e.to_string()))?;

        let mut entries = Vec::new();
        for goal in goals.iter_mut() {
            let Some(old) = before.iter().find(|b| b.id == goal.id) else {
                continue;
            };
            if old.sort_order != goal.sort_order {
                goal.touch();
                entries.push(AuditEntry::update(
                    EntityType::Goal,
                    goal.id.to_string(),
                    Some(goal.name.clone()),
                    old,
                    &*goal,
                ));
            }
            self.storage.goals.upsert(goal.clone())?;
        }

        self.storage.goals.save()?;
        self.storage.log_batch(&entries)?;

        Ok(goals)
    }

    fn load(&self, id: GoalId) -> FinanceResult<SavingsGoal> {
        self.storage
            .goals
            .get(id)?
            .ok_or_else(|| FinanceError::goal_not_found(id.to_string()))
    }

    fn persist_update(&self, before: &SavingsGoal, after: &SavingsGoal) -> FinanceResult<()> {
        self.storage.goals.upsert(after.clone())?;
        self.storage.goals.save()?;
        self.storage.log_update(
            EntityType::Goal,
            after.id.to_string(),
            Some(after.name.clone()),
            before,
            after,
        )
    }
}

/// Today's date in the local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
