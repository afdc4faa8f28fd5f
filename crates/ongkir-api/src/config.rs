//! Service configuration from the environment
use ongkir_rates::{RateCard, RateCardError};
use std::path::PathBuf;

pub const DEFAULT_ADDR: &str = "0.0.0.0:8787";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Listen address (`ONGKIR_ADDR`)
    pub addr: String,
    /// YAML rate card to load at startup (`ONGKIR_RATE_CARD`); the
    /// built-in card is used when unset
    pub rate_card_path: Option<PathBuf>,
    /// Mount `PUT /v1/rate-card` (`ONGKIR_ADMIN=1|true|yes`); off by default
    pub admin: bool,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            addr: lookup("ONGKIR_ADDR")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_ADDR.to_string()),
            rate_card_path: lookup("ONGKIR_RATE_CARD")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            admin: lookup("ONGKIR_ADMIN")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        }
    }

    pub fn load_rate_card(&self) -> Result<RateCard, RateCardError> {
        match &self.rate_card_path {
            Some(path) => RateCard::from_path(path),
            None => Ok(RateCard::standard()),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            rate_card_path: None,
            admin: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::from_lookup(|_| None);
        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.load_rate_card().unwrap(), RateCard::standard());
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("ONGKIR_ADDR", "127.0.0.1:9000"),
            ("ONGKIR_RATE_CARD", "rate-cards/standard.yaml"),
            ("ONGKIR_ADMIN", "true"),
        ]
        .into_iter()
        .collect();
        let config = ApiConfig::from_lookup(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.addr, "127.0.0.1:9000");
        assert_eq!(config.rate_card_path, Some(PathBuf::from("rate-cards/standard.yaml")));
        assert!(config.admin);
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = ApiConfig::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(config, ApiConfig::default());
    }

    #[test]
    fn test_admin_needs_explicit_opt_in() {
        for value in ["0", "false", "no", "maybe"] {
            let config = ApiConfig::from_lookup(|key| (key == "ONGKIR_ADMIN").then(|| value.to_string()));
            assert!(!config.admin, "value {:?}", value);
        }
        let config = ApiConfig::from_lookup(|key| (key == "ONGKIR_ADMIN").then(|| " 1 ".to_string()));
        assert!(config.admin);
    }
}
