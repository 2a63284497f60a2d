//! Testing utilities: an in-memory alerts backend and a lifecycle harness.
//!
//! # Example
//!
//! ```ignore
//! use coralogix_provider::testing::{InMemoryAlertsClient, ProviderTester};
//! use coralogix_provider::CoralogixProvider;
//! use serde_json::json;
//!
//! #[tokio::test]
//! async fn test_create_alert() {
//!     let backend = Arc::new(InMemoryAlertsClient::new());
//!     let tester = ProviderTester::new(CoralogixProvider::with_client(backend));
//!
//!     let state = tester.create("coralogix_alert", json!({
//!         "name": "errors",
//!         "severity": "Info",
//!         "standard": {"condition": {"immediately": true}}
//!     })).await.unwrap();
//!
//!     assert!(state["id"].is_string());
//! }
//! ```

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::client::AlertsClient;
use crate::diagnostic::{Diagnostic, DiagnosticSeverity};
use crate::error::ProviderError;
use crate::generated as proto;
use crate::provider::ProviderService;
use crate::types::ImportedResource;

/// `notify_every` the backend stores when a request leaves it out, in seconds.
pub const DEFAULT_NOTIFY_EVERY_SECS: f64 = 60.0;

/// An [`AlertsClient`] that keeps alerts in memory.
///
/// It assigns ids, fills in `notify_every` the way the real backend does,
/// and answers `NotFound` for unknown ids.
#[derive(Debug, Default)]
pub struct InMemoryAlertsClient {
    alerts: Mutex<HashMap<String, proto::Alert>>,
    next_id: AtomicU64,
}

impl InMemoryAlertsClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored alerts.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// The stored alert, as the backend would return it.
    pub fn get(&self, id: &str) -> Option<proto::Alert> {
        self.lock().get(id).cloned()
    }

    /// Drop an alert behind the provider's back.
    pub fn remove(&self, id: &str) -> Option<proto::Alert> {
        self.lock().remove(id)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, proto::Alert>> {
        self.alerts.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn store(&self, mut alert: proto::Alert, id: String) -> proto::Alert {
        alert.id = Some(id.clone());
        if alert.notify_every.is_none() {
            alert.notify_every = Some(DEFAULT_NOTIFY_EVERY_SECS);
        }
        self.lock().insert(id, alert.clone());
        alert
    }
}

fn not_found(id: &str) -> ProviderError {
    ProviderError::NotFound(format!("alert {} does not exist", id))
}

#[async_trait]
impl AlertsClient for InMemoryAlertsClient {
    async fn create_alert(&self, alert: proto::Alert) -> Result<proto::Alert, ProviderError> {
        let id = format!("alert-{}", self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        Ok(self.store(alert, id))
    }

    async fn get_alert(&self, id: &str) -> Result<proto::Alert, ProviderError> {
        self.get(id).ok_or_else(|| not_found(id))
    }

    async fn update_alert(&self, alert: proto::Alert) -> Result<proto::Alert, ProviderError> {
        let id = alert
            .id
            .clone()
            .ok_or_else(|| ProviderError::InvalidRequest("alert id is required".to_string()))?;
        if !self.lock().contains_key(&id) {
            return Err(not_found(&id));
        }
        Ok(self.store(alert, id))
    }

    async fn delete_alert(&self, id: &str) -> Result<(), ProviderError> {
        self.remove(id).map(|_| ()).ok_or_else(|| not_found(id))
    }
}

/// A test harness around a [`ProviderService`].
pub struct ProviderTester<P: ProviderService> {
    provider: P,
}

impl<P: ProviderService> ProviderTester<P> {
    /// Create a new tester for the given provider.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Get a reference to the underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Configure the provider, failing on any error diagnostic.
    pub async fn configure(&self, config: Value) -> Result<(), TestError> {
        check_diagnostics(self.provider.configure(config).await?)
    }

    /// Validate a resource configuration, failing on any error diagnostic.
    pub async fn validate_resource_config(
        &self,
        resource_type: &str,
        config: Value,
    ) -> Result<(), TestError> {
        check_diagnostics(
            self.provider
                .validate_resource_config(resource_type, config)
                .await?,
        )
    }

    pub async fn create(&self, resource_type: &str, planned_state: Value) -> Result<Value, ProviderError> {
        self.provider.create(resource_type, planned_state).await
    }

    pub async fn read(&self, resource_type: &str, current_state: Value) -> Result<Value, ProviderError> {
        self.provider.read(resource_type, current_state).await
    }

    pub async fn update(
        &self,
        resource_type: &str,
        prior_state: Value,
        planned_state: Value,
    ) -> Result<Value, ProviderError> {
        self.provider
            .update(resource_type, prior_state, planned_state)
            .await
    }

    pub async fn delete(&self, resource_type: &str, current_state: Value) -> Result<(), ProviderError> {
        self.provider.delete(resource_type, current_state).await
    }

    pub async fn import_resource(
        &self,
        resource_type: &str,
        id: &str,
    ) -> Result<Vec<ImportedResource>, ProviderError> {
        self.provider.import_resource(resource_type, id).await
    }

    /// Validate, create, then read back.
    pub async fn lifecycle_create(&self, resource_type: &str, config: Value) -> Result<Value, TestError> {
        self.validate_resource_config(resource_type, config.clone())
            .await?;
        let created = self.create(resource_type, config).await?;
        Ok(self.read(resource_type, created).await?)
    }

    /// Validate, update, then read back.
    pub async fn lifecycle_update(
        &self,
        resource_type: &str,
        prior_state: Value,
        config: Value,
    ) -> Result<Value, TestError> {
        self.validate_resource_config(resource_type, config.clone())
            .await?;
        let updated = self.update(resource_type, prior_state, config).await?;
        Ok(self.read(resource_type, updated).await?)
    }

    /// create → read → update → read → delete.
    ///
    /// Returns the state after the update (before delete).
    pub async fn lifecycle_crud(
        &self,
        resource_type: &str,
        initial_config: Value,
        updated_config: Value,
    ) -> Result<Value, TestError> {
        let created = self.lifecycle_create(resource_type, initial_config).await?;
        let updated = self
            .lifecycle_update(resource_type, created, updated_config)
            .await?;
        self.delete(resource_type, updated.clone()).await?;
        Ok(updated)
    }
}

/// Error type for test operations that may fail with diagnostics.
#[derive(Debug)]
pub enum TestError {
    /// The operation failed with diagnostics.
    Diagnostics(Vec<Diagnostic>),
    /// The operation failed with a provider error.
    Provider(ProviderError),
}

impl std::fmt::Display for TestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TestError::Diagnostics(diags) => {
                writeln!(f, "Operation failed with {} diagnostic(s):", diags.len())?;
                for diag in diags {
                    writeln!(f, "  [{:?}] {}", diag.severity, diag)?;
                }
                Ok(())
            },
            TestError::Provider(e) => write!(f, "Provider error: {}", e),
        }
    }
}

impl std::error::Error for TestError {}

impl From<ProviderError> for TestError {
    fn from(e: ProviderError) -> Self {
        TestError::Provider(e)
    }
}

fn check_diagnostics(diagnostics: Vec<Diagnostic>) -> Result<(), TestError> {
    let errors: Vec<_> = diagnostics.into_iter().filter(|d| d.is_error()).collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(TestError::Diagnostics(errors))
    }
}

/// Assert that diagnostics contain no errors.
///
/// # Panics
///
/// Panics if there are any error diagnostics.
pub fn assert_no_errors(diagnostics: &[Diagnostic]) {
    let errors: Vec<_> = diagnostics
        .iter()
        .filter(|d| matches!(d.severity, DiagnosticSeverity::Error))
        .collect();

    assert!(
        errors.is_empty(),
        "Expected no errors, but got {} error(s): {:?}",
        errors.len(),
        errors.iter().map(|d| d.to_string()).collect::<Vec<_>>()
    );
}

/// Assert that diagnostics contain an error at `attribute`.
///
/// # Panics
///
/// Panics if no error diagnostic is anchored at `attribute`.
pub fn assert_error_at(diagnostics: &[Diagnostic], attribute: &str) {
    let found = diagnostics
        .iter()
        .any(|d| d.is_error() && d.attribute.as_deref() == Some(attribute));

    assert!(
        found,
        "Expected an error at '{}', got: {:?}",
        attribute,
        diagnostics.iter().map(|d| d.to_string()).collect::<Vec<_>>()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::CoralogixProvider;
    use crate::types::ALERT_RESOURCE_TYPE;
    use serde_json::json;
    use std::sync::Arc;
    use tokio_test::assert_ok;

    fn tester() -> (Arc<InMemoryAlertsClient>, ProviderTester<CoralogixProvider>) {
        let backend = Arc::new(InMemoryAlertsClient::new());
        let tester = ProviderTester::new(CoralogixProvider::with_client(backend.clone()));
        (backend, tester)
    }

    fn ratio_alert(threshold: f64) -> Value {
        json!({
            "name": "checkout error ratio",
            "severity": "Critical",
            "notification": {"ignore_infinity": true, "recipients": {"webhooks": ["slack"]}},
            "scheduling": {
                "time_zone": "UTC-5",
                "time_frames": [{"days_enabled": ["Saturday", "Sunday"], "start_time": 21, "end_time": "23:45"}]
            },
            "ratio": {
                "query_1": {"search_query": "status:5..", "applications": ["checkout"]},
                "query_2": {"search_query": "status:...", "applications": ["checkout"]},
                "condition": {
                    "more_than": true,
                    "queries_ratio": threshold,
                    "time_window": "30Min",
                    "group_by": ["region"],
                    "group_by_q2": true
                }
            }
        })
    }

    #[tokio::test]
    async fn test_lifecycle_crud() {
        let (backend, tester) = tester();
        assert_ok!(tester.configure(json!({"timeouts": {"create": "10s"}})).await);

        let updated = tester
            .lifecycle_crud(ALERT_RESOURCE_TYPE, ratio_alert(0.2), ratio_alert(0.5))
            .await
            .unwrap();

        assert_eq!(updated["ratio"]["condition"]["queries_ratio"], 0.5);
        assert_eq!(updated["ratio"]["condition"]["group_by_q2"], true);
        assert_eq!(updated["scheduling"]["time_zone"], "UTC-5");
        assert_eq!(
            updated["scheduling"]["time_frames"][0]["start_time"],
            "21:00"
        );
        assert_eq!(updated["notification"]["notify_every_min"], 1);
        assert!(backend.is_empty());
    }

    #[tokio::test]
    async fn test_schedule_is_stored_in_gmt() {
        let (backend, tester) = tester();
        let state = tester
            .create(ALERT_RESOURCE_TYPE, ratio_alert(0.2))
            .await
            .unwrap();
        let id = state["id"].as_str().unwrap();

        let stored = backend.get(id).unwrap();
        let frame = &stored.active_when.unwrap().timeframes[0];
        assert_eq!(frame.range.as_ref().unwrap().start.as_ref().unwrap().hours, 2);
        assert_eq!(
            frame.days_of_week,
            vec![proto::DayOfWeek::Sunday as i32, proto::DayOfWeek::MondayOrUnspecified as i32]
        );
    }

    #[tokio::test]
    async fn test_out_of_band_deletion() {
        let (backend, tester) = tester();
        let state = tester
            .create(ALERT_RESOURCE_TYPE, ratio_alert(0.2))
            .await
            .unwrap();
        backend.remove(state["id"].as_str().unwrap());

        let read = tester.read(ALERT_RESOURCE_TYPE, state.clone()).await.unwrap();
        assert_eq!(read, Value::Null);

        assert_ok!(tester.delete(ALERT_RESOURCE_TYPE, state.clone()).await);
        let err = tester
            .update(ALERT_RESOURCE_TYPE, state, ratio_alert(0.5))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_import() {
        let (_backend, tester) = tester();
        let state = tester
            .create(ALERT_RESOURCE_TYPE, ratio_alert(0.2))
            .await
            .unwrap();

        let imported = tester
            .import_resource(ALERT_RESOURCE_TYPE, state["id"].as_str().unwrap())
            .await
            .unwrap();
        assert_eq!(imported.len(), 1);
        assert_eq!(imported[0].state["name"], "checkout error ratio");
        assert_eq!(imported[0].state["scheduling"]["time_zone"], "UTC+0");
    }

    #[tokio::test]
    async fn test_validation_diagnostics() {
        let (_backend, tester) = tester();
        let mut config = ratio_alert(0.2);
        config["notification"]["notify_only_on_triggered_group_by_values"] = json!(true);
        config["ratio"]["condition"]["group_by_q1"] = json!(true);

        let diagnostics = tester
            .provider()
            .validate_resource_config(ALERT_RESOURCE_TYPE, config.clone())
            .await
            .unwrap();
        assert_no_errors(&diagnostics);

        let err = tester.create(ALERT_RESOURCE_TYPE, config).await.unwrap_err();
        assert!(err.message().contains("group_by_q1"), "{}", err);
    }

    #[test]
    fn test_assert_error_at() {
        let diagnostics = vec![Diagnostic::error("must not be empty").with_attribute("name")];
        assert_error_at(&diagnostics, "name");
    }

    #[test]
    #[should_panic(expected = "Expected no errors")]
    fn test_assert_no_errors_fails() {
        assert_no_errors(&[Diagnostic::error("boom")]);
    }

    #[test]
    fn test_test_error_display() {
        let err = TestError::Diagnostics(vec![Diagnostic::error("bad").with_attribute("name")]);
        assert!(err.to_string().contains("name: bad"));
    }
}
