//! The `coralogix_alert` resource.
//!
//! [`expand_alert`] turns a typed configuration into the backend's wire
//! alert, [`flatten_alert`] goes the other way, and [`AlertResource`] drives
//! the create/read/update/delete lifecycle over an [`AlertsClient`].
//!
//! The codec is pure: it performs no I/O and never logs. Everything that
//! could be rejected is rejected before the first request is sent.

pub mod collections;
pub mod common;
pub mod dispatch;
pub mod flow;
pub mod lookup;
pub mod metric;
pub mod model;
pub mod new_value;
pub mod ratio;
pub mod schedule;
pub mod standard;
pub mod time_relative;
pub mod tracing;
pub mod unique_count;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use ::tracing::{debug, info, instrument, warn};

use self::collections::{expand_meta_labels, flatten_meta_labels, wire_string};
use self::common::{
    alert_condition, condition_parameters, expand_notification, flatten_notification,
    NotificationFlags,
};
use self::dispatch::{expand_alert_type, flatten_alert_type};
use self::lookup::{wire_enum, SEVERITIES};
pub use self::model::{AlertConfig, AlertType, UtcOffset};
use self::model::ExpirationDate;
use self::schedule::{expand_scheduling, flatten_scheduling};
use crate::client::AlertsClient;
use crate::config::Timeouts;
use crate::diagnostic::into_result;
use crate::error::ProviderError;
use crate::generated as proto;
use crate::validation;

/// Expand a configuration into the wire alert sent to the backend.
///
/// The configuration's `id`, when set, is carried through.
pub fn expand_alert(config: &AlertConfig) -> Result<proto::Alert, ProviderError> {
    let flags = NotificationFlags::from_notification(config.notification.as_ref());
    let parts = expand_alert_type(config.alert_type()?, flags)?;
    let notification = expand_notification(config.notification.as_ref());

    let expiration = config
        .expiration_date
        .as_ref()
        .map(|date| -> Result<proto::Date, ProviderError> {
            let field = |value: u32, name: &str| {
                i32::try_from(value).map_err(|_| {
                    ProviderError::Validation(format!("expiration_date.{} is out of range", name))
                })
            };
            Ok(proto::Date {
                year: field(date.year, "year")?,
                month: field(date.month, "month")?,
                day: field(date.day, "day")?,
            })
        })
        .transpose()?;

    Ok(proto::Alert {
        id: config.id.clone(),
        name: Some(config.name.clone()),
        description: Some(config.description.clone()),
        is_active: Some(config.enabled),
        severity: SEVERITIES.expand(config.severity)? as i32,
        expiration,
        condition: Some(parts.condition),
        notifications: notification.notifications,
        filters: Some(parts.filters),
        active_when: config.scheduling.as_ref().map(expand_scheduling).transpose()?,
        notify_every: notification.notify_every,
        notification_payload_filters: notification.payload_filters,
        meta_labels: expand_meta_labels(&config.meta_labels),
        tracing_alert: parts.tracing_alert,
    })
}

/// Flatten a wire alert into a configuration.
///
/// Wire schedules are in GMT; `time_zone` is the offset they are shifted
/// back into, normally the one of the prior configuration.
pub fn flatten_alert(
    alert: &proto::Alert,
    time_zone: UtcOffset,
) -> Result<AlertConfig, ProviderError> {
    let flags = alert_condition(alert)
        .and_then(condition_parameters)
        .map(NotificationFlags::from_parameters)
        .unwrap_or_default();

    let severity: proto::AlertSeverity = wire_enum(SEVERITIES.domain(), alert.severity)?;
    let name = wire_string(&alert.name).unwrap_or_default();
    let mut config = AlertConfig::new(
        name,
        SEVERITIES.flatten(&severity)?,
        flatten_alert_type(alert)?,
    );

    config.id = alert.id.clone();
    config.enabled = alert.is_active.unwrap_or(true);
    config.description = alert.description.clone().unwrap_or_default();
    config.meta_labels = flatten_meta_labels(&alert.meta_labels);
    config.expiration_date = alert
        .expiration
        .as_ref()
        .map(|date| -> Result<ExpirationDate, ProviderError> {
            let field = |value: i32, name: &str| {
                u32::try_from(value).map_err(|_| {
                    ProviderError::Validation(format!(
                        "backend expiration {} {} is negative",
                        name, value
                    ))
                })
            };
            Ok(ExpirationDate {
                day: field(date.day, "day")?,
                month: field(date.month, "month")?,
                year: field(date.year, "year")?,
            })
        })
        .transpose()?;
    config.notification = flatten_notification(alert, flags);
    config.scheduling = flatten_scheduling(alert.active_when.as_ref(), time_zone)?;

    Ok(config)
}

/// Validate and expand in one step, so nothing invalid reaches the backend.
fn prepare(config: &AlertConfig) -> Result<proto::Alert, ProviderError> {
    into_result(&validation::validate(config))?;
    expand_alert(config)
}

async fn with_deadline<T>(
    deadline: Duration,
    operation: impl Future<Output = Result<T, ProviderError>>,
) -> Result<T, ProviderError> {
    Ok(::tokio::time::timeout(deadline, operation).await??)
}

/// Lifecycle driver of `coralogix_alert`.
#[derive(Clone)]
pub struct AlertResource {
    client: Arc<dyn AlertsClient>,
    timeouts: Timeouts,
}

impl AlertResource {
    pub fn new(client: Arc<dyn AlertsClient>, timeouts: Timeouts) -> Self {
        Self { client, timeouts }
    }

    /// Create the alert and return it as stored.
    #[instrument(skip(self, config), name = "alert.create", fields(name = %config.name))]
    pub async fn create(&self, config: &AlertConfig) -> Result<AlertConfig, ProviderError> {
        let mut alert = prepare(config)?;
        alert.id = None;

        with_deadline(self.timeouts.create, async {
            let created = self.client.create_alert(alert).await?;
            let id = created.id.clone().ok_or_else(|| {
                ProviderError::Internal("CreateAlert returned an alert without an id".to_string())
            })?;
            info!(%id, "Alert created");
            self.read_back(&id, config.time_zone()).await
        })
        .await
    }

    /// Read the alert. `None` means it was removed outside of this provider.
    #[instrument(skip(self), name = "alert.read")]
    pub async fn read(
        &self,
        id: &str,
        time_zone: UtcOffset,
    ) -> Result<Option<AlertConfig>, ProviderError> {
        with_deadline(self.timeouts.read, self.fetch(id, time_zone)).await
    }

    /// Replace the alert with `config` and return it as stored.
    #[instrument(skip(self, config), name = "alert.update")]
    pub async fn update(&self, id: &str, config: &AlertConfig) -> Result<AlertConfig, ProviderError> {
        let mut alert = prepare(config)?;
        alert.id = Some(id.to_string());

        with_deadline(self.timeouts.update, async {
            self.client.update_alert(alert).await?;
            info!(%id, "Alert updated");
            self.read_back(id, config.time_zone()).await
        })
        .await
    }

    /// Delete the alert. An alert that is already gone counts as deleted.
    #[instrument(skip(self), name = "alert.delete")]
    pub async fn delete(&self, id: &str) -> Result<(), ProviderError> {
        with_deadline(self.timeouts.delete, async {
            match self.client.delete_alert(id).await {
                Ok(()) => {
                    info!(%id, "Alert deleted");
                    Ok(())
                },
                Err(e) if e.is_not_found() => {
                    warn!(%id, "Alert already removed");
                    Ok(())
                },
                Err(e) => Err(e),
            }
        })
        .await
    }

    /// Adopt an existing alert. Its schedule is read back in `UTC+0`.
    #[instrument(skip(self), name = "alert.import")]
    pub async fn import(&self, id: &str) -> Result<AlertConfig, ProviderError> {
        with_deadline(self.timeouts.read, self.read_back(id, UtcOffset::default())).await
    }

    async fn fetch(
        &self,
        id: &str,
        time_zone: UtcOffset,
    ) -> Result<Option<AlertConfig>, ProviderError> {
        match self.client.get_alert(id).await {
            Ok(alert) => {
                debug!(%id, filter_type = ?alert.filters.as_ref().map(|f| f.filter_type), "Alert fetched");
                flatten_alert(&alert, time_zone).map(Some)
            },
            Err(e) if e.is_not_found() => {
                warn!(%id, "Alert not found, it was removed outside of this provider");
                Ok(None)
            },
            Err(e) => Err(e),
        }
    }

    async fn read_back(&self, id: &str, time_zone: UtcOffset) -> Result<AlertConfig, ProviderError> {
        self.fetch(id, time_zone)
            .await?
            .ok_or_else(|| ProviderError::NotFound(format!("alert {}", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::lookup::{DayOfWeek, Severity, TimeWindow};
    use super::model::*;
    use super::*;
    use crate::testing::InMemoryAlertsClient;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn config(value: serde_json::Value) -> AlertConfig {
        serde_json::from_value(value).unwrap()
    }

    fn scheduled_standard() -> AlertConfig {
        config(json!({
            "name": "night errors",
            "description": "errors while nobody watches",
            "severity": "Error",
            "meta_labels": [{"key": "team", "value": "sre"}],
            "expiration_date": {"day": 1, "month": 6, "year": 2030},
            "notification": {
                "on_trigger_and_resolved": true,
                "recipients": {"emails": ["ops@example.com"], "webhooks": ["pager"]},
                "notify_every_min": 30,
                "payload_fields": ["coralogix.metadata.applicationName"]
            },
            "scheduling": {
                "time_zone": "UTC+3",
                "time_frames": [{"days_enabled": ["Monday", "Friday"], "start_time": "22:00", "end_time": "02:30"}]
            },
            "standard": {
                "applications": ["api"],
                "severities": ["Error", "Critical"],
                "search_query": "timeout",
                "condition": {"more_than": true, "occurrences_threshold": 10, "time_window": "15Min", "group_by": ["host"]}
            }
        }))
    }

    #[test]
    fn test_expand_top_level_fields() {
        let alert = expand_alert(&scheduled_standard()).unwrap();

        assert_eq!(alert.id, None);
        assert_eq!(alert.name.as_deref(), Some("night errors"));
        assert_eq!(alert.is_active, Some(true));
        assert_eq!(alert.severity, proto::AlertSeverity::Error as i32);
        assert_eq!(
            alert.expiration,
            Some(proto::Date {
                year: 2030,
                month: 6,
                day: 1
            })
        );
        assert_eq!(alert.notify_every, Some(1800.0));
        assert_eq!(alert.meta_labels.len(), 1);

        let Some(proto::alert_condition::Condition::MoreThan(c)) =
            alert.condition.as_ref().and_then(|c| c.condition.as_ref())
        else {
            panic!("expected more_than");
        };
        assert_eq!(c.parameters.as_ref().unwrap().notify_on_resolved, Some(true));

        let frame = &alert.active_when.as_ref().unwrap().timeframes[0];
        assert_eq!(frame.range.as_ref().unwrap().start.as_ref().unwrap().hours, 19);
        assert_eq!(frame.range.as_ref().unwrap().end.as_ref().unwrap().hours, 23);
    }

    #[test]
    fn test_round_trip_through_wire() {
        let config = scheduled_standard();
        let alert = expand_alert(&config).unwrap();
        let flattened = flatten_alert(&alert, config.time_zone()).unwrap();
        assert_eq!(flattened, config);
    }

    #[test]
    fn test_exactly_one_alert_type_on_expand() {
        let mut config = scheduled_standard();
        config.new_value = Some(NewValueAlert {
            filters: CommonFilters::default(),
            condition: NewValueCondition {
                key_to_track: "ip".into(),
                time_window: lookup::NewValueTimeWindow::TwelveHours,
            },
        });
        let err = expand_alert(&config).unwrap_err();
        assert!(err.message().contains("found [standard, new_value]"));
    }

    #[test]
    fn test_flatten_defaults_missing_fields() {
        let config = AlertConfig::new(
            "bare",
            Severity::Info,
            AlertType::Standard(StandardAlert {
                filters: CommonFilters::default(),
                condition: StandardCondition {
                    immediately: true,
                    ..Default::default()
                },
            }),
        );
        let mut alert = expand_alert(&config).unwrap();
        alert.is_active = None;
        alert.description = None;

        let flattened = flatten_alert(&alert, UtcOffset::default()).unwrap();
        assert!(flattened.enabled);
        assert_eq!(flattened.description, "");
        assert_eq!(flattened.notification, None);
        assert_eq!(flattened.scheduling, None);
    }

    #[test]
    fn test_flatten_rejects_unknown_severity() {
        let mut alert = expand_alert(&scheduled_standard()).unwrap();
        alert.severity = 99;
        assert!(matches!(
            flatten_alert(&alert, UtcOffset::default()).unwrap_err(),
            ProviderError::UnknownToken { .. }
        ));
    }

    fn resource(client: Arc<InMemoryAlertsClient>) -> AlertResource {
        AlertResource::new(client, Timeouts::default())
    }

    #[tokio::test]
    async fn test_create_read_update_delete() {
        let client = Arc::new(InMemoryAlertsClient::new());
        let alerts = resource(client.clone());
        let config = scheduled_standard();

        let created = alerts.create(&config).await.unwrap();
        let id = created.id.clone().unwrap();
        let mut expected = config.clone();
        expected.id = Some(id.clone());
        assert_eq!(created, expected);

        let read = alerts.read(&id, config.time_zone()).await.unwrap();
        assert_eq!(read, Some(expected.clone()));

        let mut changed = expected.clone();
        if let Some(standard) = changed.standard.as_mut() {
            standard.condition.time_window = Some(TimeWindow::OneHour);
        }
        changed.enabled = false;
        let updated = alerts.update(&id, &changed).await.unwrap();
        assert_eq!(updated, changed);

        alerts.delete(&id).await.unwrap();
        assert_eq!(alerts.read(&id, config.time_zone()).await.unwrap(), None);
        alerts.delete(&id).await.unwrap();
        assert_eq!(client.len(), 0);
    }

    #[tokio::test]
    async fn test_invalid_config_never_reaches_backend() {
        let client = Arc::new(InMemoryAlertsClient::new());
        let alerts = resource(client.clone());
        let mut config = scheduled_standard();
        config.name = String::new();

        let err = alerts.create(&config).await.unwrap_err();
        assert!(matches!(err, ProviderError::Validation(_)));
        assert_eq!(client.len(), 0);
    }

    #[tokio::test]
    async fn test_backend_default_notify_every_is_read_back() {
        let client = Arc::new(InMemoryAlertsClient::new());
        let alerts = resource(client.clone());
        let mut config = scheduled_standard();
        if let Some(n) = config.notification.as_mut() {
            n.notify_every_min = None;
        }

        let created = alerts.create(&config).await.unwrap();
        assert_eq!(created.notification.unwrap().notify_every_min, Some(1));
    }

    #[tokio::test]
    async fn test_import_reads_schedule_in_utc() {
        let client = Arc::new(InMemoryAlertsClient::new());
        let alerts = resource(client.clone());
        let created = alerts.create(&scheduled_standard()).await.unwrap();

        let imported = alerts.import(created.id.as_deref().unwrap()).await.unwrap();
        let scheduling = imported.scheduling.unwrap();
        assert_eq!(scheduling.time_zone, UtcOffset::default());
        let frame = scheduling.time_frames.iter().next().unwrap();
        assert_eq!(frame.start_time.hour(), 19);
        assert!(frame.days_enabled.contains(&DayOfWeek::Monday));

        assert!(alerts.import("missing").await.unwrap_err().is_not_found());
    }
}
