use serde::{Deserialize, Serialize};
use std::str::FromStr;
use trade_desk_api::{ApiError, ApiResult};
use trade_desk_db::repository::pagination::{PageRequest, DEFAULT_PAGE_SIZE};

pub const DEFAULT_REFERENCE_PREFIX: &str = "TRD";
pub const DEFAULT_CURRENCY: &str = "USD";
pub const DEFAULT_MAX_REFERENCE_ATTEMPTS: u32 = 5;
pub const MAX_REFERENCE_PREFIX_LEN: usize = 8;

/// Which checker actions are accepted against an item's current status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionPolicy {
    /// Any action on any item; the latest action wins.
    #[default]
    Permissive,
    /// Approved and rejected items cannot be acted on again.
    Strict,
}

impl FromStr for TransitionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "permissive" => Ok(TransitionPolicy::Permissive),
            "strict" => Ok(TransitionPolicy::Strict),
            other => Err(format!("unknown transition policy '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TradeDeskConfig {
    pub reference_prefix: String,
    pub default_currency: String,
    pub transition_policy: TransitionPolicy,
    pub page_size: usize,
    pub max_reference_attempts: u32,
}

impl Default for TradeDeskConfig {
    fn default() -> Self {
        Self {
            reference_prefix: DEFAULT_REFERENCE_PREFIX.to_string(),
            default_currency: DEFAULT_CURRENCY.to_string(),
            transition_policy: TransitionPolicy::default(),
            page_size: DEFAULT_PAGE_SIZE,
            max_reference_attempts: DEFAULT_MAX_REFERENCE_ATTEMPTS,
        }
    }
}

impl TradeDeskConfig {
    /// Reads `TRADE_DESK_*` variables, using defaults for the unset ones.
    pub fn from_env() -> ApiResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ApiResult<Self> {
        let defaults = Self::default();
        let env_or = |key: &str, default: String| lookup(key).unwrap_or(default);

        let config = Self {
            reference_prefix: env_or("TRADE_DESK_REFERENCE_PREFIX", defaults.reference_prefix),
            default_currency: env_or("TRADE_DESK_DEFAULT_CURRENCY", defaults.default_currency),
            transition_policy: parse_or(
                &lookup,
                "TRADE_DESK_TRANSITION_POLICY",
                defaults.transition_policy,
            )?,
            page_size: parse_or(&lookup, "TRADE_DESK_PAGE_SIZE", defaults.page_size)?,
            max_reference_attempts: parse_or(
                &lookup,
                "TRADE_DESK_MAX_REFERENCE_ATTEMPTS",
                defaults.max_reference_attempts,
            )?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Listing page `page` at the configured page size.
    pub fn page_request(&self, page: usize) -> PageRequest {
        PageRequest::new(self.page_size, page)
    }

    pub fn validate(&self) -> ApiResult<()> {
        let prefix = &self.reference_prefix;
        if prefix.is_empty()
            || prefix.len() > MAX_REFERENCE_PREFIX_LEN
            || !prefix.chars().all(|c| c.is_ascii_alphanumeric())
        {
            return Err(ApiError::ConfigError(format!(
                "reference prefix '{prefix}' must be 1 to {MAX_REFERENCE_PREFIX_LEN} ASCII letters or digits"
            )));
        }
        if self.default_currency.trim().is_empty() {
            return Err(ApiError::ConfigError("default currency must not be blank".to_string()));
        }
        if self.page_size == 0 {
            return Err(ApiError::ConfigError("page size must be at least 1".to_string()));
        }
        if self.max_reference_attempts == 0 {
            return Err(ApiError::ConfigError(
                "max reference attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> ApiResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| ApiError::ConfigError(format!("Invalid {key}: {e}"))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let config = TradeDeskConfig::from_lookup(lookup_from(&[]))?;
        assert_eq!(config, TradeDeskConfig::default());
        assert_eq!(config.reference_prefix, "TRD");
        assert_eq!(config.page_size, 10);
        Ok(())
    }

    #[test]
    fn test_overrides() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let config = TradeDeskConfig::from_lookup(lookup_from(&[
            ("TRADE_DESK_REFERENCE_PREFIX", "UBN"),
            ("TRADE_DESK_DEFAULT_CURRENCY", "NGN"),
            ("TRADE_DESK_TRANSITION_POLICY", "Strict"),
            ("TRADE_DESK_PAGE_SIZE", "25"),
            ("TRADE_DESK_MAX_REFERENCE_ATTEMPTS", "3"),
        ]))?;

        assert_eq!(config.reference_prefix, "UBN");
        assert_eq!(config.default_currency, "NGN");
        assert_eq!(config.transition_policy, TransitionPolicy::Strict);
        assert_eq!(config.page_size, 25);
        assert_eq!(config.max_reference_attempts, 3);
        Ok(())
    }

    #[test]
    fn test_page_request_uses_configured_size() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let config = TradeDeskConfig::from_lookup(lookup_from(&[("TRADE_DESK_PAGE_SIZE", "25")]))?;
        assert_eq!(config.page_request(3), PageRequest::new(25, 3));
        assert_eq!(config.page_request(3).offset(), 50);
        assert_eq!(TradeDeskConfig::default().page_request(0), PageRequest::default());
        Ok(())
    }

    #[test]
    fn test_malformed_values_are_config_errors() {
        let result = TradeDeskConfig::from_lookup(lookup_from(&[("TRADE_DESK_PAGE_SIZE", "ten")]));
        assert!(matches!(result, Err(ApiError::ConfigError(_))));

        let result =
            TradeDeskConfig::from_lookup(lookup_from(&[("TRADE_DESK_TRANSITION_POLICY", "lenient")]));
        assert!(matches!(result, Err(ApiError::ConfigError(_))));
    }

    #[test]
    fn test_prefix_validation() {
        for prefix in ["", "TRADEDESK1", "TR-D"] {
            let config = TradeDeskConfig {
                reference_prefix: prefix.to_string(),
                ..Default::default()
            };
            assert!(matches!(config.validate(), Err(ApiError::ConfigError(_))), "{prefix}");
        }
    }
}
