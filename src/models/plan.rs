//! Payoff plan models
//!
//! Everything here is derived: a plan is computed fresh on every run and is
//! never written back to storage (it can be exported).

use serde::{Deserialize, Serialize};

use super::ids::DebtId;
use super::money::Money;
use super::strategy::PayoffStrategy;

/// What one debt received in one month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtPayment {
    pub debt_id: DebtId,
    pub name: String,
    /// Minimum payment plus any leftover budget applied this month
    pub payment: Money,
    /// Part of the payment that covered this month's interest
    pub interest: Money,
    /// Balance after the payment
    pub remaining_balance: Money,
}

impl DebtPayment {
    /// Part of the payment that reduced the balance
    pub fn principal(&self) -> Money {
        self.payment - self.interest
    }
}

/// One simulated month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentPlanEntry {
    /// 1-based month index
    pub month: u32,
    /// One payment per debt, in the priority order used this month
    pub payments: Vec<DebtPayment>,
    /// Cumulative amount paid through this month
    pub total_paid: Money,
    /// Cumulative interest paid through this month
    pub total_interest: Money,
}

impl PaymentPlanEntry {
    /// Sum of payments made in this month alone
    pub fn month_paid(&self) -> Money {
        self.payments.iter().map(|p| p.payment).sum()
    }

    /// Total balance left across all debts after this month
    pub fn remaining_balance(&self) -> Money {
        self.payments.iter().map(|p| p.remaining_balance).sum()
    }

    pub fn payment_for(&self, debt_id: DebtId) -> Option<&DebtPayment> {
        self.payments.iter().find(|p| p.debt_id == debt_id)
    }
}

/// Month in which a debt reached zero
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtPayoff {
    pub debt_id: DebtId,
    pub name: String,
    /// `None` if the debt was not paid off within the schedule
    pub month: Option<u32>,
}

/// A computed month-by-month payoff schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoffPlan {
    pub strategy: PayoffStrategy,
    pub monthly_budget: Money,
    pub starting_balance: Money,
    pub entries: Vec<PaymentPlanEntry>,
    /// Payoff month per debt, in initial priority order
    pub payoffs: Vec<DebtPayoff>,
}

impl PayoffPlan {
    pub fn months(&self) -> u32 {
        self.entries.len() as u32
    }

    pub fn total_paid(&self) -> Money {
        self.entries.last().map(|e| e.total_paid).unwrap_or_default()
    }

    pub fn total_interest(&self) -> Money {
        self.entries
            .last()
            .map(|e| e.total_interest)
            .unwrap_or_default()
    }

    /// Balance left after the last simulated month
    pub fn remaining_balance(&self) -> Money {
        self.entries
            .last()
            .map(|e| e.remaining_balance())
            .unwrap_or(self.starting_balance)
    }

    pub fn payoff_month(&self, debt_id: DebtId) -> Option<u32> {
        self.payoffs
            .iter()
            .find(|p| p.debt_id == debt_id)
            .and_then(|p| p.month)
    }
}

/// Result of a payoff simulation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PayoffOutcome {
    /// Every balance reached zero within the horizon
    Completed { plan: PayoffPlan },
    /// The horizon was reached with a balance still outstanding
    HorizonExceeded { plan: PayoffPlan, horizon_months: u32 },
    /// The budget cannot cover the minimum payments
    BudgetInsufficient { required: Money, available: Money },
}

impl PayoffOutcome {
    /// The schedule, if one was produced
    pub fn plan(&self) -> Option<&PayoffPlan> {
        match self {
            Self::Completed { plan } | Self::HorizonExceeded { plan, .. } => Some(plan),
            Self::BudgetInsufficient { .. } => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}

/// Side-by-side summary of one strategy's run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategySummary {
    pub strategy: PayoffStrategy,
    pub months: u32,
    pub total_paid: Money,
    pub total_interest: Money,
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payment(id: DebtId, paid: i64, interest: i64, remaining: i64) -> DebtPayment {
        DebtPayment {
            debt_id: id,
            name: "d".into(),
            payment: Money::from_cents(paid),
            interest: Money::from_cents(interest),
            remaining_balance: Money::from_cents(remaining),
        }
    }

    #[test]
    fn test_entry_sums() {
        let a = DebtId::new();
        let b = DebtId::new();
        let entry = PaymentPlanEntry {
            month: 1,
            payments: vec![payment(a, 8000, 167, 2167), payment(b, 2000, 208, 48208)],
            total_paid: Money::from_cents(10000),
            total_interest: Money::from_cents(375),
        };

        assert_eq!(entry.month_paid().cents(), 10000);
        assert_eq!(entry.remaining_balance().cents(), 50375);
        assert_eq!(entry.payment_for(b).unwrap().principal().cents(), 1792);
    }

    #[test]
    fn test_empty_plan_accessors() {
        let plan = PayoffPlan {
            strategy: PayoffStrategy::Snowball,
            monthly_budget: Money::from_dollars(100),
            starting_balance: Money::zero(),
            entries: Vec::new(),
            payoffs: Vec::new(),
        };
        assert_eq!(plan.months(), 0);
        assert_eq!(plan.total_paid(), Money::zero());
        assert_eq!(plan.remaining_balance(), Money::zero());
    }

    #[test]
    fn test_outcome_serializes_with_status_tag() {
        let outcome = PayoffOutcome::BudgetInsufficient {
            required: Money::from_dollars(30),
            available: Money::from_dollars(20),
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "budget_insufficient");
        assert_eq!(json["required"], 3000);
        assert!(outcome.plan().is_none());
    }
}
