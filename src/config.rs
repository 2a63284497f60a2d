//! Provider configuration.
//!
//! The provider block names an API key and either a region (`env`) or a
//! custom `domain`. Anything left out falls back to the matching
//! `CORALOGIX_*` environment variable.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ProviderError;

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "CORALOGIX_API_KEY";
/// Environment variable holding the region.
pub const ENV_VAR: &str = "CORALOGIX_ENV";
/// Environment variable holding a custom domain.
pub const DOMAIN_VAR: &str = "CORALOGIX_DOMAIN";

const REGIONS: [(&str, &str); 5] = [
    ("APAC1", "app.coralogix.in"),
    ("APAC2", "coralogixsg.com"),
    ("EUROPE1", "coralogix.com"),
    ("EUROPE2", "eu2.coralogix.com"),
    ("USA1", "coralogix.us"),
];

fn default_create() -> Duration {
    Duration::from_secs(60)
}

fn default_read() -> Duration {
    Duration::from_secs(30)
}

fn default_update() -> Duration {
    Duration::from_secs(60)
}

fn default_delete() -> Duration {
    Duration::from_secs(30)
}

/// Deadlines of the resource operations, written as `"90s"` or `"2m"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Timeouts {
    #[serde(default = "default_create", with = "humantime_serde")]
    pub create: Duration,
    #[serde(default = "default_read", with = "humantime_serde")]
    pub read: Duration,
    #[serde(default = "default_update", with = "humantime_serde")]
    pub update: Duration,
    #[serde(default = "default_delete", with = "humantime_serde")]
    pub delete: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            create: default_create(),
            read: default_read(),
            update: default_update(),
            delete: default_delete(),
        }
    }
}

/// The provider configuration block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default)]
    pub timeouts: Timeouts,
}

/// A configuration with every fallback applied.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub api_key: String,
    /// `https://ng-api-grpc.<domain>:443`
    pub endpoint: String,
    pub timeouts: Timeouts,
}

impl std::fmt::Debug for ResolvedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedConfig")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("timeouts", &self.timeouts)
            .finish()
    }
}

/// Domain of a region token such as `EUROPE2`.
pub fn region_domain(env: &str) -> Result<&'static str, ProviderError> {
    REGIONS
        .iter()
        .find(|(region, _)| region.eq_ignore_ascii_case(env))
        .map(|(_, domain)| *domain)
        .ok_or_else(|| {
            let known: Vec<&str> = REGIONS.iter().map(|(region, _)| *region).collect();
            ProviderError::Configuration(format!(
                "unknown env {:?}, expected one of {}",
                env,
                known.join(", ")
            ))
        })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl ProviderConfig {
    /// Parse the provider block handed over by the host.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ProviderError> {
        if value.is_null() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Apply the environment fallbacks.
    pub fn resolve(&self) -> Result<ResolvedConfig, ProviderError> {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    /// Apply fallbacks from `lookup` instead of the process environment.
    pub fn resolve_with(
        &self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<ResolvedConfig, ProviderError> {
        let api_key = non_blank(self.api_key.clone())
            .or_else(|| non_blank(lookup(API_KEY_VAR)))
            .ok_or_else(|| {
                ProviderError::Configuration(format!(
                    "api_key must be set, or {} exported",
                    API_KEY_VAR
                ))
            })?;

        let env = non_blank(self.env.clone()).or_else(|| non_blank(lookup(ENV_VAR)));
        let domain = non_blank(self.domain.clone()).or_else(|| non_blank(lookup(DOMAIN_VAR)));
        let domain = match (env, domain) {
            (Some(env), None) => region_domain(&env)?.to_string(),
            (None, Some(domain)) => domain,
            (Some(_), Some(_)) => {
                return Err(ProviderError::Configuration(
                    "only one of env, domain may be set".to_string(),
                ))
            },
            (None, None) => {
                return Err(ProviderError::Configuration(format!(
                    "one of env, domain must be set, or {} / {} exported",
                    ENV_VAR, DOMAIN_VAR
                )))
            },
        };

        Ok(ResolvedConfig {
            api_key,
            endpoint: format!("https://ng-api-grpc.{}:443", domain),
            timeouts: self.timeouts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_timeouts_parse_human_durations() {
        let config =
            ProviderConfig::from_value(json!({"timeouts": {"create": "2m", "read": "90s"}})).unwrap();
        assert_eq!(config.timeouts.create, Duration::from_secs(120));
        assert_eq!(config.timeouts.read, Duration::from_secs(90));
        assert_eq!(config.timeouts.update, Duration::from_secs(60));
        assert_eq!(config.timeouts.delete, Duration::from_secs(30));
    }

    #[test]
    fn test_null_block_is_default() {
        let config = ProviderConfig::from_value(serde_json::Value::Null).unwrap();
        assert_eq!(config, ProviderConfig::default());
        assert_eq!(config.timeouts, Timeouts::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(ProviderConfig::from_value(json!({"region": "USA1"})).is_err());
    }

    #[test]
    fn test_resolve_region() {
        let config = ProviderConfig {
            api_key: Some("key".into()),
            env: Some("europe2".into()),
            ..Default::default()
        };
        let resolved = config.resolve_with(vars(&[])).unwrap();
        assert_eq!(resolved.endpoint, "https://ng-api-grpc.eu2.coralogix.com:443");
        assert!(!format!("{:?}", resolved).contains("key\""));
    }

    #[test]
    fn test_resolve_falls_back_to_environment() {
        let config = ProviderConfig::default();
        let resolved = config
            .resolve_with(vars(&[(API_KEY_VAR, "from-env"), (DOMAIN_VAR, "example.org")]))
            .unwrap();
        assert_eq!(resolved.api_key, "from-env");
        assert_eq!(resolved.endpoint, "https://ng-api-grpc.example.org:443");
    }

    #[test]
    fn test_resolve_errors() {
        let err = ProviderConfig::default().resolve_with(vars(&[])).unwrap_err();
        assert!(err.message().contains("api_key"));

        let both = ProviderConfig {
            api_key: Some("k".into()),
            env: Some("USA1".into()),
            domain: Some("example.org".into()),
            ..Default::default()
        };
        assert!(both.resolve_with(vars(&[])).is_err());

        let unknown = ProviderConfig {
            api_key: Some("k".into()),
            env: Some("MARS1".into()),
            ..Default::default()
        };
        let err = unknown.resolve_with(vars(&[])).unwrap_err();
        assert!(matches!(err, ProviderError::Configuration(_)));
    }
}
