//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`GROCYFY_*`)
//! 2. Defaults (this file)
//!
//! Read-only after initialization.

use grocyfy_core::Money;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::session::{Theme, View};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Shown in the header of both views
    pub app_name: String,

    /// Currency symbol (for display only; amounts always have two decimals)
    pub currency_symbol: String,

    /// Theme the session starts in
    pub default_theme: Theme,

    /// View the session starts in
    pub start_view: View,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            app_name: "Grocyfy".to_string(),
            currency_symbol: "$".to_string(),
            default_theme: Theme::Dark,
            start_view: View::Landing,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `GROCYFY_CURRENCY_SYMBOL`: Override currency symbol
    /// - `GROCYFY_THEME`: `dark` or `light`
    /// - `GROCYFY_START_VIEW`: `landing` or `list`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; unrecognized values keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(symbol) = lookup("GROCYFY_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(theme) = lookup("GROCYFY_THEME") {
            match theme.trim().to_ascii_lowercase().as_str() {
                "dark" => config.default_theme = Theme::Dark,
                "light" => config.default_theme = Theme::Light,
                other => warn!(value = other, "unknown GROCYFY_THEME, keeping default"),
            }
        }

        if let Some(view) = lookup("GROCYFY_START_VIEW") {
            match view.trim().to_ascii_lowercase().as_str() {
                "landing" => config.start_view = View::Landing,
                "list" => config.start_view = View::ShoppingList,
                other => warn!(value = other, "unknown GROCYFY_START_VIEW, keeping default"),
            }
        }

        config
    }

    /// Formats an amount with the configured symbol and two decimals.
    ///
    /// ```rust
    /// use grocyfy_core::Money;
    /// use grocyfy_shell::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        let magnitude = Money::from_cents(amount.cents().saturating_abs());
        format!(
            "{}{}{}",
            sign,
            self.currency_symbol,
            magnitude.to_decimal_string()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_format_currency_positive() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
        assert_eq!(config.format_currency(Money::from_cents(100)), "$1.00");
        assert_eq!(config.format_currency(Money::from_cents(1)), "$0.01");
        assert_eq!(config.format_currency(Money::zero()), "$0.00");
    }

    #[test]
    fn test_format_currency_negative() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(Money::from_cents(-1234)), "-$12.34");
    }

    #[test]
    fn test_format_currency_custom_symbol() {
        let config = ConfigState {
            currency_symbol: "€".to_string(),
            ..ConfigState::default()
        };
        assert_eq!(config.format_currency(Money::from_cents(550)), "€5.50");
    }

    #[test]
    fn test_from_lookup_overrides() {
        let env: HashMap<&str, &str> = [
            ("GROCYFY_CURRENCY_SYMBOL", "£"),
            ("GROCYFY_THEME", "Light"),
            ("GROCYFY_START_VIEW", "list"),
        ]
        .into_iter()
        .collect();

        let config = ConfigState::from_lookup(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.currency_symbol, "£");
        assert_eq!(config.default_theme, Theme::Light);
        assert_eq!(config.start_view, View::ShoppingList);
    }

    #[test]
    fn test_from_lookup_ignores_unknown_values() {
        let config = ConfigState::from_lookup(|key| match key {
            "GROCYFY_THEME" => Some("sepia".to_string()),
            "GROCYFY_START_VIEW" => Some("settings".to_string()),
            _ => None,
        });
        assert_eq!(config, ConfigState::default());
    }
}
