//! Helper configuration
//!
//! Loaded from TOML, every field optional:
//!
//! ```toml
//! predicate_cache_capacity = 256
//! all_match = "pair"            # or "every"
//! predicate_prefix = "user_has_role"
//! ```

use super::predicate::{AllMatchMode, DEFAULT_PREFIX};
use crate::error::{HierAuthError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for an [`AuthHelper`](crate::AuthHelper)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelperConfig {
    /// Number of parsed predicate names kept in the LRU cache
    pub predicate_cache_capacity: usize,

    /// Required match count for `...And...` predicates
    pub all_match: AllMatchMode,

    /// Snake-case prefix of predicate names
    pub predicate_prefix: String,
}

impl HelperConfig {
    /// Default cache capacity
    pub const DEFAULT_CACHE_CAPACITY: usize = 256;

    /// Valid prefixes: lowercase snake case, starting with a letter
    const PREFIX_PATTERN: &'static str = r"^[a-z][a-z0-9_]*$";

    /// Parse configuration from a TOML string
    ///
    /// # Errors
    ///
    /// Returns `TomlParse` for malformed TOML and `Config` if validation fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use hierauth::{AllMatchMode, HelperConfig};
    ///
    /// let config = HelperConfig::from_toml(r#"all_match = "every""#).unwrap();
    /// assert_eq!(config.all_match, AllMatchMode::Every);
    /// assert_eq!(config.predicate_prefix, "user_has_role");
    /// ```
    pub fn from_toml(source: &str) -> Result<Self> {
        let config: HelperConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml(&source)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.predicate_cache_capacity == 0 {
            return Err(HierAuthError::Config(
                "predicate_cache_capacity must be greater than zero".to_string(),
            ));
        }

        let re = Regex::new(Self::PREFIX_PATTERN)?;
        if !re.is_match(&self.predicate_prefix) {
            return Err(HierAuthError::Config(format!(
                "predicate_prefix '{}' must be lowercase snake_case",
                self.predicate_prefix
            )));
        }

        Ok(())
    }
}

impl Default for HelperConfig {
    fn default() -> Self {
        HelperConfig {
            predicate_cache_capacity: Self::DEFAULT_CACHE_CAPACITY,
            all_match: AllMatchMode::default(),
            predicate_prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HelperConfig::default();
        assert_eq!(config.predicate_cache_capacity, 256);
        assert_eq!(config.all_match, AllMatchMode::Pair);
        assert_eq!(config.predicate_prefix, "user_has_role");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(HelperConfig::from_toml("").unwrap(), HelperConfig::default());
    }

    #[test]
    fn test_full_toml() {
        let config = HelperConfig::from_toml(
            r#"
            predicate_cache_capacity = 16
            all_match = "every"
            predicate_prefix = "can_act_as"
            "#,
        )
        .unwrap();

        assert_eq!(config.predicate_cache_capacity, 16);
        assert_eq!(config.all_match, AllMatchMode::Every);
        assert_eq!(config.predicate_prefix, "can_act_as");
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let err = HelperConfig::from_toml("predicate_cache_capacity = 0").unwrap_err();
        assert!(matches!(err, HierAuthError::Config(_)));
    }

    #[test]
    fn test_bad_prefix_rejected() {
        for prefix in ["", "UserHasRole", "user-has-role", "9lives", "user has role"] {
            let config = HelperConfig {
                predicate_prefix: prefix.to_string(),
                ..HelperConfig::default()
            };
            assert!(config.validate().is_err(), "prefix {:?} accepted", prefix);
        }
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let err = HelperConfig::from_toml(r#"all_match = "most""#).unwrap_err();
        assert!(matches!(err, HierAuthError::TomlParse(_)));
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = HelperConfig {
            all_match: AllMatchMode::Every,
            ..HelperConfig::default()
        };
        let text = toml::to_string(&config).unwrap();
        assert_eq!(HelperConfig::from_toml(&text).unwrap(), config);
    }
}
