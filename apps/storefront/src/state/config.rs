//! # Configuration State
//!
//! Stores storefront configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`MARTS_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};

use marts_core::Destinations;

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Shop name shown in the page header
    pub shop_name: String,

    /// Order inbox, messaging number and design-files address
    pub destinations: Destinations,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            shop_name: "Business Marts".to_string(),
            destinations: Destinations::default(),
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `MARTS_SHOP_NAME`: Override shop name
    /// - `MARTS_ORDER_EMAIL`: Inbox for email orders
    /// - `MARTS_MESSAGING_NUMBER`: Digits-only number for messaging orders
    /// - `MARTS_DESIGN_EMAIL`: Where artwork should be sent
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(name) = non_blank(&lookup, "MARTS_SHOP_NAME")? {
            config.shop_name = name;
        }

        if let Some(email) = non_blank(&lookup, "MARTS_ORDER_EMAIL")? {
            config.destinations.order_email = email;
        }

        if let Some(number) = non_blank(&lookup, "MARTS_MESSAGING_NUMBER")? {
            if !number.chars().all(|c| c.is_ascii_digit()) {
                return Err(ConfigError::InvalidValue(
                    "MARTS_MESSAGING_NUMBER".to_string(),
                ));
            }
            config.destinations.messaging_number = number;
        }

        if let Some(email) = non_blank(&lookup, "MARTS_DESIGN_EMAIL")? {
            config.destinations.design_email = email;
        }

        Ok(config)
    }
}

/// A set-but-blank variable is an error; an unset one is `None`.
fn non_blank<F>(lookup: &F, key: &str) -> Result<Option<String>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Err(ConfigError::InvalidValue(key.to_string())),
        Some(value) => Ok(Some(value.trim().to_string())),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
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
    fn test_defaults() {
        let config = ConfigState::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ConfigState::default());
        assert_eq!(config.destinations.order_email, "info@businessmarts.site");
        assert_eq!(config.destinations.messaging_number, "9599270456");
    }

    #[test]
    fn test_overrides() {
        let config = ConfigState::from_lookup(lookup_from(&[
            ("MARTS_SHOP_NAME", "Marts Test"),
            ("MARTS_ORDER_EMAIL", " orders@example.com "),
            ("MARTS_MESSAGING_NUMBER", "15550001111"),
        ]))
        .unwrap();

        assert_eq!(config.shop_name, "Marts Test");
        assert_eq!(config.destinations.order_email, "orders@example.com");
        assert_eq!(config.destinations.messaging_number, "15550001111");
        assert_eq!(config.destinations.design_email, "design@businessmarts.site");
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            ConfigState::from_lookup(lookup_from(&[("MARTS_MESSAGING_NUMBER", "+91 959")])),
            Err(ConfigError::InvalidValue("MARTS_MESSAGING_NUMBER".to_string()))
        );
        assert_eq!(
            ConfigState::from_lookup(lookup_from(&[("MARTS_ORDER_EMAIL", "  ")])),
            Err(ConfigError::InvalidValue("MARTS_ORDER_EMAIL".to_string()))
        );
    }
}
