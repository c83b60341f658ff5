//! Debt payoff simulator
//!
//! Produces a month-by-month schedule for paying down a set of debts with a
//! fixed monthly budget. Every debt receives its minimum payment first; what
//! is left of the budget goes to debts in the strategy's priority order.
//!
//! The simulator is a pure function of its inputs: it never touches storage
//! and works on its own copy of the debts.

use tracing::debug;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{
    Debt, DebtPayment, DebtPayoff, Money, PaymentPlanEntry, PayoffOutcome, PayoffPlan,
    PayoffStrategy, Reprioritize, StrategySummary,
};

/// Ten years of monthly payments
pub const DEFAULT_HORIZON_MONTHS: u32 = 120;

/// Longest schedule a simulation may produce: a century of months
pub const MAX_HORIZON_MONTHS: u32 = 1200;

/// Runs payoff simulations for one strategy
#[derive(Debug, Clone, Copy)]
pub struct PayoffSimulator {
    strategy: PayoffStrategy,
    horizon_months: u32,
    reprioritize: Reprioritize,
}

impl PayoffSimulator {
    pub fn new(strategy: PayoffStrategy) -> Self {
        Self {
            strategy,
            horizon_months: DEFAULT_HORIZON_MONTHS,
            reprioritize: Reprioritize::Fixed,
        }
    }

    /// Cap the schedule at `months` iterations
    pub fn with_horizon(mut self, months: u32) -> Self {
        self.horizon_months = months;
        self
    }

    pub fn with_reprioritize(mut self, reprioritize: Reprioritize) -> Self {
        self.reprioritize = reprioritize;
        self
    }

    /// Simulate paying `debts` down with `monthly_budget` per month
    pub fn run(&self, debts: &[Debt], monthly_budget: Money) -> FinanceResult<PayoffOutcome> {
        self.validate(debts, monthly_budget)?;

        let required: Money = debts
            .iter()
            .filter(|d| !d.is_paid_off())
            .map(|d| d.minimum_payment)
            .sum();

        if monthly_budget < required {
            debug!(%required, available = %monthly_budget, "budget below minimum payments");
            return Ok(PayoffOutcome::BudgetInsufficient {
                required,
                available: monthly_budget,
            });
        }

        let mut working = debts.to_vec();
        self.strategy.prioritize(&mut working);

        let starting_balance: Money = working.iter().map(|d| d.balance).sum();
        let mut payoffs: Vec<DebtPayoff> = working
            .iter()
            .map(|d| DebtPayoff {
                debt_id: d.id,
                name: d.name.clone(),
                month: if d.is_paid_off() { Some(0) } else { None },
            })
            .collect();

        let mut entries = Vec::new();
        let mut total_paid = Money::zero();
        let mut total_interest = Money::zero();
        let mut month = 0;

        while month < self.horizon_months && working.iter().any(|d| !d.is_paid_off()) {
            month += 1;

            if self.reprioritize == Reprioritize::Monthly && month > 1 {
                self.strategy.prioritize(&mut working);
            }

            let mut paid = vec![Money::zero(); working.len()];
            let mut interest = vec![Money::zero(); working.len()];

            // Minimum payments
            for (i, debt) in working.iter_mut().enumerate() {
                if debt.is_paid_off() {
                    continue;
                }

                let accrued = debt.monthly_interest();
                let payment = debt.minimum_payment.min(debt.balance.saturating_add(accrued));
                let covered = accrued.min(payment);

                debt.balance -= payment - covered;
                paid[i] = payment;
                interest[i] = covered;
            }

            // Leftover budget, in priority order
            let spent: Money = paid.iter().sum();
            let mut leftover = (monthly_budget - spent).non_negative();

            for (i, debt) in working.iter_mut().enumerate() {
                if leftover.is_zero() {
                    break;
                }
                if debt.is_paid_off() {
                    continue;
                }

                let extra = leftover.min(debt.balance);
                debt.balance -= extra;
                paid[i] += extra;
                leftover -= extra;
            }

            let payments: Vec<DebtPayment> = working
                .iter()
                .enumerate()
                .map(|(i, debt)| DebtPayment {
                    debt_id: debt.id,
                    name: debt.name.clone(),
                    payment: paid[i],
                    interest: interest[i],
                    remaining_balance: debt.balance,
                })
                .collect();

            total_paid += paid.iter().sum::<Money>();
            total_interest += interest.iter().sum::<Money>();

            for payoff in payoffs.iter_mut().filter(|p| p.month.is_none()) {
                let done = working
                    .iter()
                    .any(|d| d.id == payoff.debt_id && d.is_paid_off());
                if done {
                    payoff.month = Some(month);
                }
            }

            entries.push(PaymentPlanEntry {
                month,
                payments,
                total_paid,
                total_interest,
            });
        }

        let plan = PayoffPlan {
            strategy: self.strategy,
            monthly_budget,
            starting_balance,
            entries,
            payoffs,
        };

        debug!(
            strategy = %self.strategy,
            months = plan.months(),
            total_interest = %plan.total_interest(),
            "payoff simulation finished"
        );

        if working.iter().all(|d| d.is_paid_off()) {
            Ok(PayoffOutcome::Completed { plan })
        } else {
            Ok(PayoffOutcome::HorizonExceeded {
                plan,
                horizon_months: self.horizon_months,
            })
        }
    }

    fn validate(&self, debts: &[Debt], monthly_budget: Money) -> FinanceResult<()> {
        if debts.is_empty() {
            return Err(FinanceError::Validation("No debts to plan".into()));
        }

        if monthly_budget.is_negative() {
            return Err(FinanceError::Validation(format!(
                "Monthly budget cannot be negative: {}",
                monthly_budget
            )));
        }

        if self.horizon_months == 0 || self.horizon_months > MAX_HORIZON_MONTHS {
            return Err(FinanceError::Validation(format!(
                "Payoff horizon must be between 1 and {} months: {}",
                MAX_HORIZON_MONTHS, self.horizon_months
            )));
        }

        for debt in debts {
            debt.validate()
                .map_err(|e| FinanceError::Validation(format!("{}: {}", debt.name, e)))?;
        }

        Ok(())
    }
}

/// Run every strategy against the same debts and budget
pub fn compare_strategies(
    debts: &[Debt],
    monthly_budget: Money,
    horizon_months: u32,
    reprioritize: Reprioritize,
) -> FinanceResult<Vec<StrategySummary>> {
    PayoffStrategy::ALL
        .iter()
        .map(|&strategy| {
            let outcome = PayoffSimulator::new(strategy)
                .with_horizon(horizon_months)
                .with_reprioritize(reprioritize)
                .run(debts, monthly_budget)?;

            match outcome {
                PayoffOutcome::BudgetInsufficient { required, available } => {
                    Err(FinanceError::Simulation(format!(
                        "Monthly budget {} does not cover minimum payments of {}",
                        available, required
                    )))
                }
                PayoffOutcome::Completed { plan } => Ok(summarize(&plan, true)),
                PayoffOutcome::HorizonExceeded { plan, .. } => Ok(summarize(&plan, false)),
            }
        })
        .collect()
}

fn summarize(plan: &PayoffPlan, completed: bool) -> StrategySummary {
    StrategySummary {
        strategy: plan.strategy,
        months: plan.months(),
        total_paid: plan.total_paid(),
        total_interest: plan.total_interest(),
        completed,
    }
}
