//! The provider surface: JSON state in, JSON state out.
//!
//! [`ProviderService`] is what a host drives. [`CoralogixProvider`] implements
//! it for the one resource type this crate serves, `coralogix_alert`, by
//! decoding state into an [`AlertConfig`] and handing it to
//! [`AlertResource`].

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::alert::{AlertConfig, AlertResource};
use crate::client::{AlertsClient, GrpcAlertsClient};
use crate::config::{ProviderConfig, Timeouts};
use crate::diagnostic::Diagnostic;
use crate::error::ProviderError;
use crate::types::{ImportedResource, ProviderMetadata, ALERT_RESOURCE_TYPE};
use crate::validation;

/// Operations a host performs on a provider.
///
/// States are plain JSON values; how they map onto the remote API is up to
/// the implementation.
#[async_trait]
pub trait ProviderService: Send + Sync + 'static {
    /// Resource and data source types served.
    fn metadata(&self) -> ProviderMetadata;

    /// Configure the provider with credentials and settings.
    /// Returns diagnostics (errors and warnings).
    async fn configure(&self, config: Value) -> Result<Vec<Diagnostic>, ProviderError>;

    /// Validate a resource's configuration before anything is applied.
    async fn validate_resource_config(
        &self,
        resource_type: &str,
        config: Value,
    ) -> Result<Vec<Diagnostic>, ProviderError> {
        let _ = (resource_type, config);
        Ok(vec![])
    }

    /// Create a new resource.
    async fn create(&self, resource_type: &str, planned_state: Value) -> Result<Value, ProviderError>;

    /// Read the current state of a resource. `Value::Null` means it no
    /// longer exists.
    async fn read(&self, resource_type: &str, current_state: Value) -> Result<Value, ProviderError>;

    /// Update an existing resource.
    async fn update(
        &self,
        resource_type: &str,
        prior_state: Value,
        planned_state: Value,
    ) -> Result<Value, ProviderError>;

    /// Delete a resource.
    async fn delete(&self, resource_type: &str, current_state: Value) -> Result<(), ProviderError>;

    /// Import existing infrastructure into management.
    async fn import_resource(
        &self,
        resource_type: &str,
        _id: &str,
    ) -> Result<Vec<ImportedResource>, ProviderError> {
        Err(ProviderError::Unimplemented(format!(
            "Import not supported for resource type: {}",
            resource_type
        )))
    }
}

/// Provider for Coralogix resources.
pub struct CoralogixProvider {
    alerts: RwLock<Option<AlertResource>>,
    client: Option<Arc<dyn AlertsClient>>,
}

impl Default for CoralogixProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl CoralogixProvider {
    /// An unconfigured provider. [`ProviderService::configure`] connects it.
    pub fn new() -> Self {
        Self {
            alerts: RwLock::new(None),
            client: None,
        }
    }

    /// A provider bound to `client`. It is usable straight away, and
    /// `configure` only updates its timeouts.
    pub fn with_client(client: Arc<dyn AlertsClient>) -> Self {
        Self {
            alerts: RwLock::new(Some(AlertResource::new(client.clone(), Timeouts::default()))),
            client: Some(client),
        }
    }

    async fn alerts(&self, resource_type: &str) -> Result<AlertResource, ProviderError> {
        if resource_type != ALERT_RESOURCE_TYPE {
            return Err(ProviderError::UnknownResource(resource_type.to_string()));
        }
        self.alerts.read().await.clone().ok_or_else(|| {
            ProviderError::Configuration("provider has not been configured".to_string())
        })
    }
}

fn decode(state: Value) -> Result<AlertConfig, ProviderError> {
    Ok(serde_json::from_value(state)?)
}

fn state_id(config: &AlertConfig) -> Result<String, ProviderError> {
    config
        .id
        .clone()
        .ok_or_else(|| ProviderError::Validation("state has no id".to_string()))
}

#[async_trait]
impl ProviderService for CoralogixProvider {
    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            resources: vec![ALERT_RESOURCE_TYPE.to_string()],
            data_sources: vec![],
        }
    }

    async fn configure(&self, config: Value) -> Result<Vec<Diagnostic>, ProviderError> {
        let config = ProviderConfig::from_value(config)?;

        let alerts = match &self.client {
            Some(client) => AlertResource::new(client.clone(), config.timeouts),
            None => {
                let resolved = match config.resolve() {
                    Ok(resolved) => resolved,
                    Err(ProviderError::Configuration(msg)) => {
                        return Ok(vec![Diagnostic::error(msg)]);
                    },
                    Err(e) => return Err(e),
                };
                let client = GrpcAlertsClient::connect(&resolved)?;
                info!(endpoint = %resolved.endpoint, "Provider configured");
                AlertResource::new(Arc::new(client), resolved.timeouts)
            },
        };

        *self.alerts.write().await = Some(alerts);
        Ok(vec![])
    }

    async fn validate_resource_config(
        &self,
        resource_type: &str,
        config: Value,
    ) -> Result<Vec<Diagnostic>, ProviderError> {
        if resource_type != ALERT_RESOURCE_TYPE {
            return Err(ProviderError::UnknownResource(resource_type.to_string()));
        }
        match serde_json::from_value::<AlertConfig>(config) {
            Ok(config) => Ok(validation::validate(&config)),
            Err(e) => Ok(vec![Diagnostic::error("invalid alert configuration").with_detail(e.to_string())]),
        }
    }

    async fn create(&self, resource_type: &str, planned_state: Value) -> Result<Value, ProviderError> {
        let alerts = self.alerts(resource_type).await?;
        info!(resource_type, "Create called");
        let created = alerts.create(&decode(planned_state)?).await?;
        Ok(serde_json::to_value(created)?)
    }

    async fn read(&self, resource_type: &str, current_state: Value) -> Result<Value, ProviderError> {
        let alerts = self.alerts(resource_type).await?;
        debug!(resource_type, "Read called");
        let current = decode(current_state)?;
        match alerts.read(&state_id(&current)?, current.time_zone()).await? {
            Some(config) => Ok(serde_json::to_value(config)?),
            None => Ok(Value::Null),
        }
    }

    async fn update(
        &self,
        resource_type: &str,
        prior_state: Value,
        planned_state: Value,
    ) -> Result<Value, ProviderError> {
        let alerts = self.alerts(resource_type).await?;
        info!(resource_type, "Update called");
        let id = state_id(&decode(prior_state)?)?;
        let updated = alerts.update(&id, &decode(planned_state)?).await?;
        Ok(serde_json::to_value(updated)?)
    }

    async fn delete(&self, resource_type: &str, current_state: Value) -> Result<(), ProviderError> {
        let alerts = self.alerts(resource_type).await?;
        info!(resource_type, "Delete called");
        alerts.delete(&state_id(&decode(current_state)?)?).await
    }

    async fn import_resource(
        &self,
        resource_type: &str,
        id: &str,
    ) -> Result<Vec<ImportedResource>, ProviderError> {
        let alerts = self.alerts(resource_type).await?;
        info!(resource_type, id, "Import called");
        let imported = alerts.import(id).await?;
        Ok(vec![ImportedResource::new(
            resource_type,
            serde_json::to_value(imported)?,
        )])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::InMemoryAlertsClient;
    use serde_json::json;

    fn provider() -> CoralogixProvider {
        CoralogixProvider::with_client(Arc::new(InMemoryAlertsClient::new()))
    }

    #[tokio::test]
    async fn test_unconfigured_provider() {
        let provider = CoralogixProvider::new();
        let err = provider
            .create(ALERT_RESOURCE_TYPE, json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::Configuration(_)));
    }

    #[tokio::test]
    async fn test_configure_reports_missing_credentials() {
        let provider = CoralogixProvider::new();
        let config = json!({"api_key": "k", "env": "USA1", "domain": "example.org"});
        let diagnostics = provider.configure(config).await.unwrap();
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].summary.contains("only one of env, domain"));
    }

    #[tokio::test]
    async fn test_unknown_resource_type() {
        let err = provider()
            .read("coralogix_dashboard", json!({"id": "x"}))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::UnknownResource(_)));
    }

    #[tokio::test]
    async fn test_validate_resource_config() {
        let provider = provider();
        let diagnostics = provider
            .validate_resource_config(ALERT_RESOURCE_TYPE, json!({"name": "x", "severity": "Loud"}))
            .await
            .unwrap();
        assert_eq!(diagnostics[0].summary, "invalid alert configuration");

        let diagnostics = provider
            .validate_resource_config(
                ALERT_RESOURCE_TYPE,
                json!({"name": "x", "severity": "Info", "standard": {"condition": {"immediately": true}}}),
            )
            .await
            .unwrap();
        assert!(diagnostics.is_empty());
    }

    #[tokio::test]
    async fn test_metadata() {
        assert!(provider().metadata().serves(ALERT_RESOURCE_TYPE));
    }
}
