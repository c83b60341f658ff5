//! User settings for ttm-finance
//!
//! Defaults for the planners: strategy, payoff horizon, withdrawal rate and
//! the currency symbol used in output. Every field has a serde default so
//! older config files keep loading.

use serde::{Deserialize, Serialize};

use super::paths::FinancePaths;
use crate::error::FinanceError;
use crate::models::{PayoffStrategy, Reprioritize};
use crate::services::payoff::DEFAULT_HORIZON_MONTHS;
use crate::services::projection::{DEFAULT_WITHDRAWAL_RATE, MAX_PROJECTION_YEARS};

/// User settings for ttm-finance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Strategy used by `plan` when none is given
    #[serde(default)]
    pub default_strategy: PayoffStrategy,

    /// Monthly budget used by `plan` when none is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_budget: Option<crate::models::Money>,

    /// Longest payoff schedule simulated, in months
    #[serde(default = "default_horizon_months")]
    pub payoff_horizon_months: u32,

    /// Re-evaluate debt priority every month instead of once up front
    #[serde(default)]
    pub reprioritize_monthly: bool,

    /// Safe withdrawal rate for FIRE projections, percent
    #[serde(default = "default_withdrawal_rate")]
    pub withdrawal_rate: f64,

    #[serde(default = "default_fire_horizon_years")]
    pub fire_horizon_years: u32,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_horizon_months() -> u32 {
    DEFAULT_HORIZON_MONTHS
}

fn default_withdrawal_rate() -> f64 {
    DEFAULT_WITHDRAWAL_RATE
}

fn default_fire_horizon_years() -> u32 {
    MAX_PROJECTION_YEARS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            default_strategy: PayoffStrategy::default(),
            monthly_budget: None,
            payoff_horizon_months: default_horizon_months(),
            reprioritize_monthly: false,
            withdrawal_rate: default_withdrawal_rate(),
            fire_horizon_years: default_fire_horizon_years(),
        }
    }
}

impl Settings {
    pub fn reprioritize(&self) -> Reprioritize {
        if self.reprioritize_monthly {
            Reprioritize::Monthly
        } else {
            Reprioritize::Fixed
        }
    }

    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &FinancePaths) -> Result<Self, FinanceError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| FinanceError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| FinanceError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinancePaths) -> Result<(), FinanceError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| FinanceError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| FinanceError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.default_strategy, PayoffStrategy::Snowball);
        assert_eq!(settings.payoff_horizon_months, 120);
        assert_eq!(settings.reprioritize(), Reprioritize::Fixed);
        assert_eq!(settings.withdrawal_rate, 4.0);
        assert!(settings.monthly_budget.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.default_strategy = PayoffStrategy::Avalanche;
        settings.monthly_budget = Some(Money::from_dollars(750));
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.default_strategy, PayoffStrategy::Avalanche);
        assert_eq!(loaded.monthly_budget, Some(Money::from_dollars(750)));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"currency_symbol": "€"}"#).unwrap();
        assert_eq!(settings.currency_symbol, "€");
        assert_eq!(settings.payoff_horizon_months, 120);
        assert_eq!(settings.fire_horizon_years, 100);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ nope").unwrap();

        assert!(matches!(
            Settings::load_or_create(&paths),
            Err(FinanceError::Config(_))
        ));
    }
}
