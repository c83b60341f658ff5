//! Debt service
//!
//! Business logic for managing stored debts: CRUD, reordering, and running
//! the payoff simulator over what is stored.

use tracing::info;

use crate::audit::{AuditEntry, EntityType};
use crate::error::{FinanceError, FinanceResult};
use crate::models::ordering::{move_item, next_position, renumber};
use crate::models::{Debt, DebtId, Money, PayoffOutcome};
use crate::storage::Storage;

use super::payoff::PayoffSimulator;

/// Service for debt management
pub struct DebtService<'a> {
    storage: &'a Storage,
}

/// Fields to change on an existing debt; `None` leaves a field as is
#[derive(Debug, Clone, Default)]
pub struct DebtUpdate {
    pub name: Option<String>,
    pub balance: Option<Money>,
    pub interest_rate: Option<f64>,
    pub minimum_payment: Option<Money>,
    pub notes: Option<String>,
}

impl DebtUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.balance.is_none()
            && self.interest_rate.is_none()
            && self.minimum_payment.is_none()
            && self.notes.is_none()
    }
}

/// Totals across every stored debt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebtTotals {
    pub count: usize,
    pub balance: Money,
    pub minimum_payments: Money,
}

impl<'a> DebtService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new debt at the end of the list
    pub fn create(
        &self,
        name: &str,
        balance: Money,
        interest_rate: f64,
        minimum_payment: Money,
    ) -> FinanceResult<Debt> {
        let name = name.trim();
        if self.storage.debts.name_exists(name, None)? {
            return Err(FinanceError::Duplicate {
                entity_type: "Debt",
                identifier: name.to_string(),
            });
        }

        let mut debt = Debt::new(name, balance, interest_rate, minimum_payment);
        debt.validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;
        debt.sort_order = next_position(&self.storage.debts.get_all()?);

        self.storage.debts.upsert(debt.clone())?;
        self.storage.debts.save()?;

        self.storage.log_create(
            EntityType::Debt,
            debt.id.to_string(),
            Some(debt.name.clone()),
            &debt,
        )?;

        info!(id = %debt.id, name = %debt.name, "created debt");
        Ok(debt)
    }

    pub fn get(&self, id: DebtId) -> FinanceResult<Option<Debt>> {
        self.storage.debts.get(id)
    }

    /// Find a debt by name, short display ID, or full UUID
    pub fn find(&self, identifier: &str) -> FinanceResult<Option<Debt>> {
        if let Some(debt) = self.storage.debts.get_by_name(identifier)? {
            return Ok(Some(debt));
        }

        if let Ok(id) = identifier.parse::<DebtId>() {
            return self.storage.debts.get(id);
        }

        self.storage.debts.get_by_short_id(identifier)
    }

    /// Like `find`, but a missing debt is an error
    pub fn require(&self, identifier: &str) -> FinanceResult<Debt> {
        self.find(identifier)?
            .ok_or_else(|| FinanceError::debt_not_found(identifier))
    }

    /// All debts in display order
    pub fn list(&self) -> FinanceResult<Vec<Debt>> {
        self.storage.debts.get_all()
    }

    pub fn totals(&self) -> FinanceResult<DebtTotals> {
        let debts = self.list()?;
        Ok(DebtTotals {
            count: debts.len(),
            balance: debts.iter().map(|d| d.balance).sum(),
            minimum_payments: debts
                .iter()
                .filter(|d| !d.is_paid_off())
                .map(|d| d.minimum_payment)
                .sum(),
        })
    }

    /// Apply an update to a debt
    pub fn update(&self, id: DebtId, update: DebtUpdate) -> FinanceResult<Debt> {
        let mut debt = self
            .storage
            .debts
            .get(id)?
            .ok_or_else(|| FinanceError::debt_not_found(id.to_string()))?;
        let before = debt.clone();

        if let Some(name) = update.name {
            let name = name.trim().to_string();
            if self.storage.debts.name_exists(&name, Some(id))? {
                return Err(FinanceError::Duplicate {
                    entity_type: "Debt",
                    identifier: name,
                });
            }
            debt.name = name;
        }
        if let Some(balance) = update.balance {
            debt.balance = balance;
        }
        if let Some(rate) = update.interest_rate {
            debt.interest_rate = rate;
        }
        if let Some(minimum) = update.minimum_payment {
            debt.minimum_payment = minimum;
        }
        if let Some(notes) = update.notes {
            debt.notes = notes;
        }

        debt.validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;
        debt.touch();

        self.storage.debts.upsert(debt.clone())?;
        self.storage.debts.save()?;

        self.storage.log_update(
            EntityType::Debt,
            debt.id.to_string(),
            Some(debt.name.clone()),
            &before,
            &debt,
        )?;

        Ok(debt)
    }

    /// Delete a debt and close the gap it leaves in the ordering
    pub fn delete(&self, id: DebtId) -> FinanceResult<Debt> {
        let debt = self
            .storage
            .debts
            .get(id)?
            .ok_or_else(|| FinanceError::debt_not_found(id.to_string()))?;

        self.storage.debts.delete(id)?;

        let mut remaining = self.storage.debts.get_all()?;
        renumber(&mut remaining);
        for d in remaining {
            self.storage.debts.upsert(d)?;
        }
        self.storage.debts.save()?;

        self.storage.log_delete(
            EntityType::Debt,
            debt.id.to_string(),
            Some(debt.name.clone()),
            &debt,
        )?;

        info!(id = %debt.id, name = %debt.name, "deleted debt");
        Ok(debt)
    }

    /// Move a debt to `position` (0-based) in the display order
    pub fn move_to(&self, id: DebtId, position: usize) -> FinanceResult<Vec<Debt>> {
        let mut debts = self.list()?;
        let from = debts
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| FinanceError::debt_not_found(id.to_string()))?;
        let before = debts.clone();

        move_item(&mut debts, from, position)
            .map_err(|e| FinanceError::Validation(e.to_string()))?;

        let mut entries = Vec::new();
        for debt in debts.iter_mut() {
            let Some(old) = before.iter().find(|b| b.id == debt.id) else {
                continue;
            };
            if old.sort_order != debt.sort_order {
                debt.touch();
                entries.push(AuditEntry::update(
                    EntityType::Debt,
                    debt.id.to_string(),
                    Some(debt.name.clone()),
                    old,
                    &*debt,
                ));
            }
            self.storage.debts.upsert(debt.clone())?;
        }

        self.storage.debts.save()?;
        self.storage.log_batch(&entries)?;

        Ok(debts)
    }

    /// Simulate paying down every stored debt
    pub fn plan(&self, monthly_budget: Money, simulator: &PayoffSimulator) -> FinanceResult<PayoffOutcome> {
        let debts = self.list()?;
        simulator.run(&debts, monthly_budget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::paths::FinancePaths;
    use crate::models::PayoffStrategy;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn add(service: &DebtService, name: &str, dollars: i64, rate: f64, min: i64) -> Debt {
        service
            .create(name, Money::from_dollars(dollars), rate, Money::from_dollars(min))
            .unwrap()
    }

    fn names(debts: &[Debt]) -> Vec<String> {
        debts.iter().map(|d| d.name.clone()).collect()
    }

    #[test]
    fn test_create_and_find() {
        let (_temp_dir, storage) = create_test_storage();
        let service = DebtService::new(&storage);

        let debt = add(&service, "Visa", 2500, 19.99, 75);
        assert_eq!(debt.sort_order, 0);

        assert_eq!(service.find("visa").unwrap().unwrap().id, debt.id);
        assert_eq!(service.find(&debt.id.to_string()).unwrap().unwrap().id, debt.id);
        assert_eq!(
            service.find(&debt.id.as_uuid().to_string()).unwrap().unwrap().id,
            debt.id
        );
        assert!(service.require("Amex").unwrap_err().is_not_found());

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Create);
    }

    #[test]
    fn test_create_rejects_duplicates_and_invalid() {
        let (_temp_dir, storage) = create_test_storage();
        let service = DebtService::new(&storage);
        add(&service, "Visa", 2500, 19.99, 75);

        let dup = service.create("VISA", Money::from_dollars(1), 1.0, Money::zero());
        assert!(matches!(dup, Err(FinanceError::Duplicate { .. })));

        let bad = service.create("Loan", Money::from_dollars(1), -3.0, Money::zero());
        assert!(bad.unwrap_err().is_validation());

        let empty = service.create("   ", Money::from_dollars(1), 1.0, Money::zero());
        assert!(empty.unwrap_err().is_validation());
    }

    #[test]
    fn test_update_logs_diff() {
        let (_temp_dir, storage) = create_test_storage();
        let service = DebtService::new(&storage);
        let debt = add(&service, "Car", 9000, 6.5, 250);

        let updated = service
            .update(
                debt.id,
                DebtUpdate {
                    balance: Some(Money::from_dollars(8500)),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.balance, Money::from_dollars(8500));

        let entries = storage.audit().read_recent(1).unwrap();
        assert_eq!(entries[0].operation, Operation::Update);
        assert!(entries[0]
            .diff_summary
            .as_deref()
            .unwrap()
            .contains("balance: 900000 -> 850000"));
    }

    #[test]
    fn test_update_rejects_taken_name() {
        let (_temp_dir, storage) = create_test_storage();
        let service = DebtService::new(&storage);
        add(&service, "Car", 9000, 6.5, 250);
        let visa = add(&service, "Visa", 2500, 19.99, 75);

        let result = service.update(
            visa.id,
            DebtUpdate {
                name: Some("car".into()),
                ..Default::default()
            },
        );
        assert!(matches!(result, Err(FinanceError::Duplicate { .. })));
    }

    #[test]
    fn test_move_and_delete_renumber() {
        let (_temp_dir, storage) = create_test_storage();
        let service = DebtService::new(&storage);
        add(&service, "A", 100, 1.0, 10);
        add(&service, "B", 100, 1.0, 10);
        let c = add(&service, "C", 100, 1.0, 10);

        let moved = service.move_to(c.id, 0).unwrap();
        assert_eq!(names(&moved), vec!["C", "A", "B"]);
        assert_eq!(names(&service.list().unwrap()), vec!["C", "A", "B"]);

        // every row changed position
        let updates = storage
            .audit()
            .read_all()
            .unwrap()
            .into_iter()
            .filter(|e| e.operation == Operation::Update)
            .count();
        assert_eq!(updates, 3);

        assert!(service.move_to(c.id, 3).unwrap_err().is_validation());

        let a = service.require("A").unwrap();
        service.delete(a.id).unwrap();
        let remaining = service.list().unwrap();
        assert_eq!(names(&remaining), vec!["C", "B"]);
        assert_eq!(
            remaining.iter().map(|d| d.sort_order).collect::<Vec<_>>(),
            vec![0, 1]
        );
    }

    #[test]
    fn test_totals_and_plan() {
        let (_temp_dir, storage) = create_test_storage();
        let service = DebtService::new(&storage);
        add(&service, "A", 100, 20.0, 10);
        add(&service, "B", 500, 5.0, 20);

        let totals = service.totals().unwrap();
        assert_eq!(totals.count, 2);
        assert_eq!(totals.balance, Money::from_dollars(600));
        assert_eq!(totals.minimum_payments, Money::from_dollars(30));

        let outcome = service
            .plan(Money::from_dollars(100), &PayoffSimulator::new(PayoffStrategy::Snowball))
            .unwrap();
        assert!(outcome.is_completed());
    }
}
