//! Debt model
//!
//! A debt the user is paying down: a balance, an annual interest rate and a
//! contractual minimum payment.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::DebtId;
use super::money::Money;
use super::ordering::Positioned;

/// A debt (credit card, loan, line of credit, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Debt {
    /// Unique identifier
    pub id: DebtId,

    /// Display label (e.g., "Visa", "Car Loan")
    pub name: String,

    /// Outstanding balance, never negative
    pub balance: Money,

    /// Annual interest rate as a percentage (19.99 means 19.99% APR)
    pub interest_rate: f64,

    /// Payment owed every month regardless of strategy
    pub minimum_payment: Money,

    #[serde(default)]
    pub notes: String,

    /// Display position
    #[serde(default)]
    pub sort_order: i32,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Debt {
    /// Create a new debt
    pub fn new(
        name: impl Into<String>,
        balance: Money,
        interest_rate: f64,
        minimum_payment: Money,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: DebtId::new(),
            name: name.into(),
            balance,
            interest_rate,
            minimum_payment,
            notes: String::new(),
            sort_order: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Monthly interest rate as a fraction (APR / 1200)
    pub fn monthly_rate(&self) -> f64 {
        self.interest_rate / 1200.0
    }

    /// Interest accrued in one month on the current balance, rounded to the cent
    pub fn monthly_interest(&self) -> Money {
        self.balance.scale(self.monthly_rate())
    }

    pub fn is_paid_off(&self) -> bool {
        self.balance.is_zero()
    }

    /// Mark the debt as modified
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Validate the debt
    pub fn validate(&self) -> Result<(), DebtValidationError> {
        if self.name.trim().is_empty() {
            return Err(DebtValidationError::EmptyName);
        }

        if self.name.len() > 100 {
            return Err(DebtValidationError::NameTooLong(self.name.len()));
        }

        if self.balance.is_negative() {
            return Err(DebtValidationError::NegativeBalance(self.balance));
        }

        if !self.interest_rate.is_finite() || self.interest_rate < 0.0 {
            return Err(DebtValidationError::InvalidInterestRate(self.interest_rate));
        }

        if self.minimum_payment.is_negative() {
            return Err(DebtValidationError::NegativeMinimumPayment(
                self.minimum_payment,
            ));
        }

        Ok(())
    }
}

impl Positioned for Debt {
    fn sort_order(&self) -> i32 {
        self.sort_order
    }

    fn set_sort_order(&mut self, order: i32) {
        self.sort_order = order;
    }
}

impl fmt::Display for Debt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} at {:.2}%)", self.name, self.balance, self.interest_rate)
    }
}

/// Validation errors for debts
#[derive(Debug, Clone, PartialEq)]
pub enum DebtValidationError {
    EmptyName,
    NameTooLong(usize),
    NegativeBalance(Money),
    InvalidInterestRate(f64),
    NegativeMinimumPayment(Money),
}

impl fmt::Display for DebtValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Debt name cannot be empty"),
            Self::NameTooLong(len) => write!(f, "Debt name too long ({} chars, max 100)", len),
            Self::NegativeBalance(balance) => {
                write!(f, "Debt balance cannot be negative: {}", balance)
            }
            Self::InvalidInterestRate(rate) => {
                write!(f, "Interest rate must be a non-negative percentage: {}", rate)
            }
            Self::NegativeMinimumPayment(payment) => {
                write!(f, "Minimum payment cannot be negative: {}", payment)
            }
        }
    }
}

impl std::error::Error for DebtValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_debt() {
        let debt = Debt::new("Visa", Money::from_dollars(2500), 19.99, Money::from_dollars(75));
        assert_eq!(debt.name, "Visa");
        assert_eq!(debt.balance.cents(), 250_000);
        assert!(!debt.is_paid_off());
        assert!(debt.validate().is_ok());
    }

    #[test]
    fn test_monthly_interest() {
        let debt = Debt::new("Card", Money::from_dollars(1200), 12.0, Money::from_dollars(50));
        assert_eq!(debt.monthly_interest(), Money::from_dollars(12));

        let free = Debt::new("Family", Money::from_dollars(1200), 0.0, Money::from_dollars(50));
        assert_eq!(free.monthly_interest(), Money::zero());
    }

    #[test]
    fn test_validation() {
        let mut debt = Debt::new("Loan", Money::from_dollars(100), 5.0, Money::from_dollars(10));

        debt.name = "  ".into();
        assert_eq!(debt.validate(), Err(DebtValidationError::EmptyName));

        debt.name = "a".repeat(101);
        assert!(matches!(debt.validate(), Err(DebtValidationError::NameTooLong(101))));

        debt.name = "Loan".into();
        debt.balance = Money::from_cents(-1);
        assert!(matches!(debt.validate(), Err(DebtValidationError::NegativeBalance(_))));

        debt.balance = Money::zero();
        debt.interest_rate = -1.0;
        assert!(matches!(debt.validate(), Err(DebtValidationError::InvalidInterestRate(_))));

        debt.interest_rate = f64::NAN;
        assert!(debt.validate().is_err());

        debt.interest_rate = 0.0;
        debt.minimum_payment = Money::from_cents(-100);
        assert!(matches!(
            debt.validate(),
            Err(DebtValidationError::NegativeMinimumPayment(_))
        ));
    }

    #[test]
    fn test_serialization() {
        let debt = Debt::new("Visa", Money::from_dollars(100), 20.0, Money::from_dollars(10));
        let json = serde_json::to_string(&debt).unwrap();
        let deserialized: Debt = serde_json::from_str(&json).unwrap();
        assert_eq!(debt.id, deserialized.id);
        assert_eq!(debt.balance, deserialized.balance);
        assert_eq!(debt.interest_rate, deserialized.interest_rate);
    }

    #[test]
    fn test_display() {
        let debt = Debt::new("Visa", Money::from_cents(123_456), 19.9, Money::from_dollars(25));
        assert_eq!(debt.to_string(), "Visa ($1234.56 at 19.90%)");
    }
}
