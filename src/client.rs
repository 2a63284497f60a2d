//! The alerts backend as seen by the resource driver.
//!
//! [`AlertsClient`] is the seam between lifecycle code and the network:
//! [`GrpcAlertsClient`] talks to the Coralogix alert service, and tests plug in
//! [`crate::testing::InMemoryAlertsClient`].

use async_trait::async_trait;
use tonic::metadata::MetadataValue;
use tonic::service::interceptor::InterceptedService;
use tonic::service::Interceptor;
use tonic::transport::{Channel, ClientTlsConfig, Endpoint};
use tracing::debug;

use crate::config::ResolvedConfig;
use crate::error::ProviderError;
use crate::generated as proto;
use crate::generated::alert_service_client::AlertServiceClient;

/// Alert CRUD calls, one per backend RPC.
#[async_trait]
pub trait AlertsClient: Send + Sync {
    /// Create an alert, returning it as stored (with its assigned id).
    async fn create_alert(&self, alert: proto::Alert) -> Result<proto::Alert, ProviderError>;

    /// Fetch an alert by id. A missing alert is [`ProviderError::NotFound`].
    async fn get_alert(&self, id: &str) -> Result<proto::Alert, ProviderError>;

    /// Replace the alert carrying `alert.id`.
    async fn update_alert(&self, alert: proto::Alert) -> Result<proto::Alert, ProviderError>;

    /// Delete an alert by id.
    async fn delete_alert(&self, id: &str) -> Result<(), ProviderError>;
}

/// Attaches `authorization: Bearer <api key>` to every request.
#[derive(Clone)]
pub struct ApiKeyInterceptor {
    header: MetadataValue<tonic::metadata::Ascii>,
}

impl ApiKeyInterceptor {
    pub fn new(api_key: &str) -> Result<Self, ProviderError> {
        let header = format!("Bearer {}", api_key).parse().map_err(|_| {
            ProviderError::Configuration("api_key is not a valid header value".to_string())
        })?;
        Ok(Self { header })
    }
}

impl Interceptor for ApiKeyInterceptor {
    fn call(&mut self, mut request: tonic::Request<()>) -> Result<tonic::Request<()>, tonic::Status> {
        request
            .metadata_mut()
            .insert("authorization", self.header.clone());
        Ok(request)
    }
}

/// [`AlertsClient`] over the `AlertService` gRPC API.
#[derive(Clone)]
pub struct GrpcAlertsClient {
    inner: AlertServiceClient<InterceptedService<Channel, ApiKeyInterceptor>>,
}

impl GrpcAlertsClient {
    /// Build a client for `config.endpoint`. The connection is opened on the
    /// first call.
    pub fn connect(config: &ResolvedConfig) -> Result<Self, ProviderError> {
        let channel = Endpoint::from_shared(config.endpoint.clone())
            .map_err(|e| ProviderError::Configuration(format!("invalid endpoint: {}", e)))?
            .tls_config(ClientTlsConfig::new().with_native_roots())?
            .connect_lazy();
        let interceptor = ApiKeyInterceptor::new(&config.api_key)?;
        debug!(endpoint = %config.endpoint, "Alert service client ready");

        Ok(Self {
            inner: AlertServiceClient::with_interceptor(channel, interceptor),
        })
    }
}

fn returned_alert(alert: Option<proto::Alert>, call: &str) -> Result<proto::Alert, ProviderError> {
    alert.ok_or_else(|| ProviderError::Internal(format!("{} returned no alert", call)))
}

#[async_trait]
impl AlertsClient for GrpcAlertsClient {
    async fn create_alert(&self, alert: proto::Alert) -> Result<proto::Alert, ProviderError> {
        let response = self
            .inner
            .clone()
            .create_alert(proto::CreateAlertRequest { alert: Some(alert) })
            .await?;
        returned_alert(response.into_inner().alert, "CreateAlert")
    }

    async fn get_alert(&self, id: &str) -> Result<proto::Alert, ProviderError> {
        let response = self
            .inner
            .clone()
            .get_alert_by_unique_id(proto::GetAlertByUniqueIdRequest {
                id: Some(id.to_string()),
            })
            .await?;
        returned_alert(response.into_inner().alert, "GetAlertByUniqueId")
    }

    async fn update_alert(&self, alert: proto::Alert) -> Result<proto::Alert, ProviderError> {
        let response = self
            .inner
            .clone()
            .update_alert_by_unique_id(proto::UpdateAlertByUniqueIdRequest { alert: Some(alert) })
            .await?;
        returned_alert(response.into_inner().alert, "UpdateAlertByUniqueId")
    }

    async fn delete_alert(&self, id: &str) -> Result<(), ProviderError> {
        self.inner
            .clone()
            .delete_alert_by_unique_id(proto::DeleteAlertByUniqueIdRequest {
                id: Some(id.to_string()),
            })
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interceptor_sets_bearer_header() {
        let mut interceptor = ApiKeyInterceptor::new("secret").unwrap();
        let request = interceptor.call(tonic::Request::new(())).unwrap();
        assert_eq!(
            request.metadata().get("authorization").unwrap().to_str().unwrap(),
            "Bearer secret"
        );
    }

    #[test]
    fn test_interceptor_rejects_control_characters() {
        assert!(ApiKeyInterceptor::new("bad\nkey").is_err());
    }
}
