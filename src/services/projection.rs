//! Savings growth projections
//!
//! Compound interest with monthly contributions, and the FIRE (financial
//! independence, retire early) projection. Both are pure calculations.

use serde::Serialize;
use tracing::debug;

use crate::error::{FinanceError, FinanceResult};
use crate::models::Money;

/// Longest projection accepted, in years
pub const MAX_PROJECTION_YEARS: u32 = 100;

/// Highest annual rate accepted, in percent
pub const MAX_RATE_PERCENT: f64 = 1000.0;

/// Inputs for a compound interest projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompoundInput {
    pub principal: Money,
    pub monthly_contribution: Money,
    /// Annual rate as a percentage, compounded monthly
    pub annual_rate: f64,
    pub years: u32,
}

/// Balance at the end of one projected year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompoundYear {
    pub year: u32,
    /// Principal plus every contribution so far
    pub contributions: Money,
    /// Interest earned so far
    pub interest: Money,
    pub balance: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompoundProjection {
    pub input: CompoundInput,
    pub years: Vec<CompoundYear>,
}

impl CompoundProjection {
    pub fn final_balance(&self) -> Money {
        self.years
            .last()
            .map(|y| y.balance)
            .unwrap_or(self.input.principal)
    }

    pub fn total_interest(&self) -> Money {
        self.years.last().map(|y| y.interest).unwrap_or_default()
    }
}

/// Project a balance forward month by month
pub fn project_compound(input: CompoundInput) -> FinanceResult<CompoundProjection> {
    if input.principal.is_negative() || input.monthly_contribution.is_negative() {
        return Err(FinanceError::Validation(
            "Principal and contribution cannot be negative".into(),
        ));
    }
    check_rate("Annual rate", input.annual_rate)?;
    check_years(input.years)?;

    let monthly_rate = input.annual_rate / 1200.0;
    let mut balance = input.principal;
    let mut contributions = input.principal;
    let mut interest = Money::zero();
    let mut years = Vec::with_capacity(input.years as usize);

    for year in 1..=input.years {
        for _ in 0..12 {
            balance = grow(balance, input.monthly_contribution)?;
            contributions = grow(contributions, input.monthly_contribution)?;

            let earned = balance.scale(monthly_rate);
            balance = grow(balance, earned)?;
            interest = grow(interest, earned)?;
        }

        years.push(CompoundYear {
            year,
            contributions,
            interest,
            balance,
        });
    }

    debug!(years = input.years, final_balance = %balance, "compound projection finished");

    Ok(CompoundProjection { input, years })
}

/// Default safe withdrawal rate, percent per year
pub const DEFAULT_WITHDRAWAL_RATE: f64 = 4.0;

/// Inputs for a FIRE projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FireInput {
    pub annual_expenses: Money,
    /// Percent of the portfolio withdrawn per year in retirement
    pub withdrawal_rate: f64,
    pub current_savings: Money,
    pub annual_contribution: Money,
    /// Expected annual return, percent
    pub expected_return: f64,
    pub horizon_years: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FireYear {
    pub year: u32,
    pub savings: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FireProjection {
    pub input: FireInput,
    /// Portfolio size whose withdrawals cover the annual expenses
    pub fire_number: Money,
    /// `Some(0)` if already reached, `None` if not reached within the horizon
    pub years_to_fire: Option<u32>,
    pub years: Vec<FireYear>,
}

impl FireProjection {
    /// Percent of the FIRE number already saved, capped at 100
    pub fn progress_percent(&self) -> f64 {
        (self.input.current_savings.as_f64() / self.fire_number.as_f64() * 100.0).clamp(0.0, 100.0)
    }
}

/// Project savings year by year until they reach the FIRE number
pub fn project_fire(input: FireInput) -> FinanceResult<FireProjection> {
    if !input.annual_expenses.is_positive() {
        return Err(FinanceError::Validation(
            "Annual expenses must be greater than zero".into(),
        ));
    }
    if !input.withdrawal_rate.is_finite()
        || input.withdrawal_rate <= 0.0
        || input.withdrawal_rate > 100.0
    {
        return Err(FinanceError::Validation(format!(
            "Withdrawal rate must be between 0 and 100 percent: {}",
            input.withdrawal_rate
        )));
    }
    if input.current_savings.is_negative() || input.annual_contribution.is_negative() {
        return Err(FinanceError::Validation(
            "Savings and contribution cannot be negative".into(),
        ));
    }
    check_rate("Expected return", input.expected_return)?;
    check_years(input.horizon_years)?;

    let fire_number = input.annual_expenses.scale(100.0 / input.withdrawal_rate);
    let growth = input.expected_return / 100.0;

    let mut savings = input.current_savings;
    let mut years = Vec::new();
    let mut years_to_fire = if savings >= fire_number { Some(0) } else { None };

    if years_to_fire.is_none() {
        for year in 1..=input.horizon_years {
            let earned = savings.scale(growth);
            savings = grow(grow(savings, earned)?, input.annual_contribution)?;
            years.push(FireYear { year, savings });

            if savings >= fire_number {
                years_to_fire = Some(year);
                break;
            }
        }
    }

    debug!(%fire_number, ?years_to_fire, "fire projection finished");

    Ok(FireProjection {
        input,
        fire_number,
        years_to_fire,
        years,
    })
}

fn grow(amount: Money, by: Money) -> FinanceResult<Money> {
    amount.checked_add(by).ok_or_else(|| {
        FinanceError::Simulation("Projection exceeds the largest representable amount".into())
    })
}

fn check_rate(label: &str, rate: f64) -> FinanceResult<()> {
    if !rate.is_finite() || !(0.0..=MAX_RATE_PERCENT).contains(&rate) {
        return Err(FinanceError::Validation(format!(
            "{} must be between 0 and {} percent: {}",
            label, MAX_RATE_PERCENT, rate
        )));
    }
    Ok(())
}

fn check_years(years: u32) -> FinanceResult<()> {
    if years == 0 || years > MAX_PROJECTION_YEARS {
        return Err(FinanceError::Validation(format!(
            "Years must be between 1 and {}: {}",
            MAX_PROJECTION_YEARS, years
        )));
    }
    Ok(())
}
