//! # Configuration State
//!
//! Storefront configuration loaded at session start.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`TISSO_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tisso_core::Money;
use tracing::warn;

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Brand shown in the task bar
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Where the symbol goes relative to the amount
    pub symbol_position: SymbolPosition,

    /// Separator between major and minor units
    pub decimal_separator: char,

    /// How long the "added to cart" toast stays visible
    pub toast_duration_ms: u64,

    /// JSON catalog to load instead of the built-in demo grid
    pub catalog_path: Option<PathBuf>,
}

/// Placement of the currency symbol.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    /// `€980,00`
    Prefix,

    /// `980,00€`
    #[default]
    Suffix,
}

impl Default for ConfigState {
    /// Returns the configuration of the demo storefront.
    ///
    /// ## Default Values
    /// - Store: "TISSO VISON"
    /// - Currency: euro, suffix, comma decimals (`980,00€`)
    /// - Toast: 2 seconds
    /// - Catalog: built-in
    fn default() -> Self {
        ConfigState {
            store_name: "TISSO VISON".to_string(),
            currency_symbol: "€".to_string(),
            symbol_position: SymbolPosition::Suffix,
            decimal_separator: ',',
            toast_duration_ms: 2000,
            catalog_path: None,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `TISSO_STORE_NAME`: Override store name
    /// - `TISSO_CURRENCY_SYMBOL`: Override currency symbol
    /// - `TISSO_SYMBOL_POSITION`: `prefix` or `suffix`
    /// - `TISSO_DECIMAL_SEPARATOR`: a single character
    /// - `TISSO_TOAST_MS`: Toast duration in milliseconds
    /// - `TISSO_CATALOG_PATH`: Path to a JSON catalog
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Unparseable values are logged and ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("TISSO_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(symbol) = lookup("TISSO_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(position) = lookup("TISSO_SYMBOL_POSITION") {
            match position.to_lowercase().as_str() {
                "prefix" => config.symbol_position = SymbolPosition::Prefix,
                "suffix" => config.symbol_position = SymbolPosition::Suffix,
                other => warn!(value = other, "Ignoring TISSO_SYMBOL_POSITION"),
            }
        }

        if let Some(separator) = lookup("TISSO_DECIMAL_SEPARATOR") {
            let mut chars = separator.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => config.decimal_separator = c,
                _ => warn!(value = %separator, "Ignoring TISSO_DECIMAL_SEPARATOR"),
            }
        }

        if let Some(toast_ms) = lookup("TISSO_TOAST_MS") {
            match toast_ms.parse::<u64>() {
                Ok(ms) => config.toast_duration_ms = ms,
                Err(_) => warn!(value = %toast_ms, "Ignoring TISSO_TOAST_MS"),
            }
        }

        if let Some(path) = lookup("TISSO_CATALOG_PATH") {
            config.catalog_path = Some(PathBuf::from(path));
        }

        config
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    /// Formats an amount for display.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_cents(98000)), "980,00€");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        let number = format!(
            "{}{}{:02}",
            amount.major().abs(),
            self.decimal_separator,
            amount.minor_part()
        );

        match self.symbol_position {
            SymbolPosition::Prefix => format!("{sign}{}{number}", self.currency_symbol),
            SymbolPosition::Suffix => format!("{sign}{number}{}", self.currency_symbol),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_format_currency_default() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(Money::from_cents(98000)), "980,00€");
        assert_eq!(config.format_currency(Money::from_cents(1)), "0,01€");
        assert_eq!(config.format_currency(Money::zero()), "0,00€");
        assert_eq!(config.format_currency(Money::from_cents(-1234)), "-12,34€");
    }

    #[test]
    fn test_format_currency_prefix() {
        let config = ConfigState {
            currency_symbol: "$".to_string(),
            symbol_position: SymbolPosition::Prefix,
            decimal_separator: '.',
            ..ConfigState::default()
        };
        assert_eq!(config.format_currency(Money::from_cents(1099)), "$10.99");
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = ConfigState::from_lookup(lookup_from(&[
            ("TISSO_STORE_NAME", "Pop-up"),
            ("TISSO_CURRENCY_SYMBOL", "$"),
            ("TISSO_SYMBOL_POSITION", "Prefix"),
            ("TISSO_DECIMAL_SEPARATOR", "."),
            ("TISSO_TOAST_MS", "500"),
            ("TISSO_CATALOG_PATH", "/tmp/catalog.json"),
        ]));

        assert_eq!(config.store_name, "Pop-up");
        assert_eq!(config.symbol_position, SymbolPosition::Prefix);
        assert_eq!(config.decimal_separator, '.');
        assert_eq!(config.toast_duration(), Duration::from_millis(500));
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/catalog.json")));
    }

    #[test]
    fn test_from_lookup_ignores_bad_values() {
        let config = ConfigState::from_lookup(lookup_from(&[
            ("TISSO_TOAST_MS", "soon"),
            ("TISSO_DECIMAL_SEPARATOR", ",,"),
            ("TISSO_SYMBOL_POSITION", "middle"),
        ]));
        assert_eq!(config, ConfigState::default());
    }
}
