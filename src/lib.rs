//! ttm-finance - debt payoff and savings planning
//!
//! Library behind the `ttm` command line tool. It stores debts and savings
//! goals as JSON files and runs planners over them:
//!
//! - the debt payoff simulator (snowball and avalanche strategies)
//! - compound interest projections with monthly contributions
//! - FIRE (financial independence) projections
//!
//! # Architecture
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (debts, goals, payoff plans)
//! - `storage`: JSON file storage layer
//! - `audit`: Audit logging of every change
//! - `services`: Business logic and the planners
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML export of plans
//! - `cli`: Command handlers for the `ttm` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use ttm_finance::models::{Debt, Money, PayoffStrategy};
//! use ttm_finance::services::PayoffSimulator;
//!
//! let debts = vec![Debt::new("Visa", Money::from_dollars(1200), 19.9, Money::from_dollars(35))];
//! let outcome = PayoffSimulator::new(PayoffStrategy::Snowball).run(&debts, Money::from_dollars(200))?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::FinanceError;
