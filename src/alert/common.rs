//! Pieces shared by the alert kinds: the common filter block, condition
//! operator selection, the undetected-values sub-object and notifications.

use super::collections::{
    expand_enums, flatten_enums, repeated_to_set, set_to_repeated, wire_string,
};
use super::lookup::{wire_enum, DeadmanRatio, Lookup, DEADMAN_RATIOS, LOG_SEVERITIES};
use super::model::{CommonFilters, ManageUndetectedValues, Notification, Recipients};
use crate::error::ProviderError;
use crate::generated as proto;
use crate::generated::alert_condition::Condition;
use crate::generated::alert_filters::{FilterType, MetadataFilters};

/// The wire pieces one alert kind contributes to an alert.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertParts {
    pub filters: proto::AlertFilters,
    pub condition: proto::AlertCondition,
    pub tracing_alert: Option<proto::TracingAlert>,
}

impl AlertParts {
    pub fn new(filters: proto::AlertFilters, condition: Condition) -> Self {
        Self {
            filters,
            condition: proto::AlertCondition {
                condition: Some(condition),
            },
            tracing_alert: None,
        }
    }
}

/// The condition of a wire alert, if any.
pub fn alert_condition(alert: &proto::Alert) -> Option<&Condition> {
    alert.condition.as_ref().and_then(|c| c.condition.as_ref())
}

pub fn alert_filters(alert: &proto::Alert) -> Result<&proto::AlertFilters, ProviderError> {
    alert
        .filters
        .as_ref()
        .ok_or_else(|| ProviderError::Validation("backend alert has no filters".to_string()))
}

/// Parameters carried by a condition; immediate and flow conditions have none.
pub fn condition_parameters(condition: &Condition) -> Option<&proto::ConditionParameters> {
    match condition {
        Condition::Immediate(_) | Condition::Flow(_) => None,
        Condition::LessThan(c) => c.parameters.as_ref(),
        Condition::MoreThan(c) => c.parameters.as_ref(),
        Condition::MoreThanUsual(c) => c.parameters.as_ref(),
        Condition::NewValue(c) => c.parameters.as_ref(),
        Condition::UniqueCount(c) => c.parameters.as_ref(),
    }
}

/// Wrap parameters in the `less_than` or `more_than` condition.
pub fn threshold_condition(less_than: bool, parameters: proto::ConditionParameters) -> Condition {
    if less_than {
        Condition::LessThan(proto::LessThanCondition {
            parameters: Some(parameters),
        })
    } else {
        Condition::MoreThan(proto::MoreThanCondition {
            parameters: Some(parameters),
        })
    }
}

/// Decode a raw timeframe through the table of one alert kind.
pub fn flatten_time_window<S>(
    table: &Lookup<S, proto::Timeframe>,
    raw: i32,
) -> Result<S, ProviderError>
where
    S: Copy + Eq + std::hash::Hash + std::fmt::Debug,
{
    let wire: proto::Timeframe = wire_enum(table.domain(), raw)?;
    table.flatten(&wire)
}

/// Expand the common filter block with the given filter-type discriminant.
pub fn expand_filters(
    filters: &CommonFilters,
    filter_type: FilterType,
) -> Result<proto::AlertFilters, ProviderError> {
    Ok(proto::AlertFilters {
        severities: expand_enums(&*LOG_SEVERITIES, &filters.severities)?,
        metadata: Some(MetadataFilters {
            categories: set_to_repeated(&filters.categories),
            applications: set_to_repeated(&filters.applications),
            subsystems: set_to_repeated(&filters.subsystems),
            computers: set_to_repeated(&filters.computers),
            classes: set_to_repeated(&filters.classes),
            methods: set_to_repeated(&filters.methods),
            ip_addresses: set_to_repeated(&filters.ip_addresses),
        }),
        text: filters.search_query.clone(),
        filter_type: filter_type as i32,
        alias: None,
        ratio_alerts: Vec::new(),
    })
}

pub fn flatten_filters(filters: &proto::AlertFilters) -> Result<CommonFilters, ProviderError> {
    let metadata = filters.metadata.clone().unwrap_or_default();
    Ok(CommonFilters {
        search_query: wire_string(&filters.text),
        severities: flatten_enums(&*LOG_SEVERITIES, &filters.severities)?,
        applications: repeated_to_set(&metadata.applications),
        subsystems: repeated_to_set(&metadata.subsystems),
        categories: repeated_to_set(&metadata.categories),
        computers: repeated_to_set(&metadata.computers),
        classes: repeated_to_set(&metadata.classes),
        methods: repeated_to_set(&metadata.methods),
        ip_addresses: repeated_to_set(&metadata.ip_addresses),
    })
}

/// Pick the single operator flag that is set.
///
/// `flags` pairs each attribute name with its value and the operator it
/// selects. Zero or several set flags is a validation error.
pub fn select_operator<K: Copy>(
    block: &str,
    flags: &[(&str, bool, K)],
) -> Result<K, ProviderError> {
    let mut selected = flags.iter().filter(|(_, set, _)| *set);
    match (selected.next(), selected.next()) {
        (Some((_, _, kind)), None) => Ok(*kind),
        _ => {
            let names: Vec<&str> = flags.iter().map(|(name, _, _)| *name).collect();
            Err(ProviderError::Validation(format!(
                "{}: exactly one of {} must be true",
                block,
                names.join(", ")
            )))
        },
    }
}

/// Name of a wire condition kind, for error messages.
pub fn condition_name(condition: &Condition) -> &'static str {
    match condition {
        Condition::Immediate(_) => "immediate",
        Condition::LessThan(_) => "less_than",
        Condition::MoreThan(_) => "more_than",
        Condition::MoreThanUsual(_) => "more_than_usual",
        Condition::NewValue(_) => "new_value",
        Condition::Flow(_) => "flow",
        Condition::UniqueCount(_) => "unique_count",
    }
}

/// Error for a wire condition the alert kind cannot carry.
pub fn unexpected_condition(block: &str, condition: Option<&Condition>) -> ProviderError {
    ProviderError::Validation(format!(
        "{} alert cannot have a {} condition",
        block,
        condition.map(condition_name).unwrap_or("missing")
    ))
}

/// Parameters of a condition that must carry them.
pub fn required_parameters<'a>(
    block: &str,
    parameters: &'a Option<proto::ConditionParameters>,
) -> Result<&'a proto::ConditionParameters, ProviderError> {
    parameters.as_ref().ok_or_else(|| {
        ProviderError::Validation(format!("{} condition has no parameters", block))
    })
}

/// Whether an undetected-values policy belongs on this condition: only
/// `less_than` conditions that group by something.
pub fn deadman_applies(less_than: bool, group_by: &[String]) -> bool {
    less_than && !group_by.is_empty()
}

/// Expand `manage_undetected_values` into the related-extended-data object.
///
/// Where the policy does not apply, setting it is an error. Where it applies
/// but is unset, the backend default is left in place.
pub fn expand_deadman(
    block: &str,
    manage: Option<&ManageUndetectedValues>,
    applies: bool,
) -> Result<Option<proto::RelatedExtendedData>, ProviderError> {
    let Some(manage) = manage else {
        return Ok(None);
    };
    if !applies {
        return Err(ProviderError::Validation(format!(
            "{}: manage_undetected_values requires less_than with a non-empty group_by",
            block
        )));
    }

    match (
        manage.enable_triggering_on_undetected_values,
        manage.auto_retire_ratio,
    ) {
        (true, Some(ratio)) => Ok(Some(proto::RelatedExtendedData {
            cleanup_deadman_duration: Some(DEADMAN_RATIOS.expand(ratio)? as i32),
            should_trigger_deadman: Some(true),
        })),
        (true, None) => Err(ProviderError::Validation(format!(
            "{}: auto_retire_ratio is required when enable_triggering_on_undetected_values is true",
            block
        ))),
        (false, None) => Ok(Some(proto::RelatedExtendedData {
            cleanup_deadman_duration: None,
            should_trigger_deadman: Some(false),
        })),
        (false, Some(_)) => Err(ProviderError::Validation(format!(
            "{}: auto_retire_ratio is not allowed when enable_triggering_on_undetected_values is false",
            block
        ))),
    }
}

/// Flatten the related-extended-data object. Absent means the backend
/// default: triggering enabled, never auto-retired. A present object
/// enables triggering only when the flag is explicitly set.
pub fn flatten_deadman(
    data: Option<&proto::RelatedExtendedData>,
) -> Result<ManageUndetectedValues, ProviderError> {
    let Some(data) = data else {
        return Ok(ManageUndetectedValues::default());
    };
    if data.should_trigger_deadman != Some(true) {
        return Ok(ManageUndetectedValues {
            enable_triggering_on_undetected_values: false,
            auto_retire_ratio: None,
        });
    }

    let wire: proto::CleanupDeadmanDuration = wire_enum(
        DEADMAN_RATIOS.domain(),
        data.cleanup_deadman_duration.unwrap_or_default(),
    )?;
    let ratio: DeadmanRatio = DEADMAN_RATIOS.flatten(&wire)?;
    Ok(ManageUndetectedValues {
        enable_triggering_on_undetected_values: true,
        auto_retire_ratio: Some(ratio),
    })
}

/// Flatten the policy only where it applies.
pub fn flatten_deadman_if(
    applies: bool,
    parameters: &proto::ConditionParameters,
) -> Result<Option<ManageUndetectedValues>, ProviderError> {
    if applies {
        flatten_deadman(parameters.related_extended_data.as_ref()).map(Some)
    } else {
        Ok(None)
    }
}

/// The notification flags stored in condition parameters on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotificationFlags {
    pub notify_on_resolved: Option<bool>,
    pub ignore_infinity: Option<bool>,
    pub notify_group_by_only_alerts: Option<bool>,
}

impl NotificationFlags {
    pub fn from_notification(notification: Option<&Notification>) -> Self {
        notification
            .map(|n| Self {
                notify_on_resolved: n.on_trigger_and_resolved,
                ignore_infinity: n.ignore_infinity,
                notify_group_by_only_alerts: n.notify_only_on_triggered_group_by_values,
            })
            .unwrap_or_default()
    }

    pub fn from_parameters(parameters: &proto::ConditionParameters) -> Self {
        Self {
            notify_on_resolved: parameters.notify_on_resolved,
            ignore_infinity: parameters.ignore_infinity,
            notify_group_by_only_alerts: parameters.notify_group_by_only_alerts,
        }
    }

    pub fn apply(&self, parameters: &mut proto::ConditionParameters) {
        parameters.notify_on_resolved = self.notify_on_resolved;
        parameters.ignore_infinity = self.ignore_infinity;
        parameters.notify_group_by_only_alerts = self.notify_group_by_only_alerts;
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// The alert-level half of a notification block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WireNotification {
    pub notifications: Option<proto::AlertNotifications>,
    /// Seconds.
    pub notify_every: Option<f64>,
    pub payload_filters: Vec<String>,
}

pub fn expand_notification(notification: Option<&Notification>) -> WireNotification {
    let Some(notification) = notification else {
        return WireNotification::default();
    };

    WireNotification {
        notifications: notification.recipients.as_ref().map(|r| proto::AlertNotifications {
            emails: set_to_repeated(&r.emails),
            integrations: set_to_repeated(&r.webhooks),
        }),
        notify_every: notification
            .notify_every_min
            .filter(|min| *min > 0)
            .map(|min| f64::from(min) * 60.0),
        payload_filters: set_to_repeated(&notification.payload_fields),
    }
}

/// Rebuild the notification block. `None` when nothing in it is set.
pub fn flatten_notification(
    alert: &proto::Alert,
    flags: NotificationFlags,
) -> Option<Notification> {
    let recipients = alert
        .notifications
        .as_ref()
        .map(|n| Recipients {
            emails: repeated_to_set(&n.emails),
            webhooks: repeated_to_set(&n.integrations),
        })
        .filter(|r| !r.emails.is_empty() || !r.webhooks.is_empty());
    let notify_every_min = alert
        .notify_every
        // Whole minutes; a partial minute is dropped.
        .map(|secs| (secs / 60.0).floor() as u32)
        .filter(|min| *min > 0);
    let payload_fields = repeated_to_set(&alert.notification_payload_filters);

    if flags.is_empty()
        && recipients.is_none()
        && notify_every_min.is_none()
        && payload_fields.is_empty()
    {
        return None;
    }

    Some(Notification {
        on_trigger_and_resolved: flags.notify_on_resolved,
        ignore_infinity: flags.ignore_infinity,
        notify_only_on_triggered_group_by_values: flags.notify_group_by_only_alerts,
        recipients,
        notify_every_min,
        payload_fields,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::lookup::LogSeverity;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Op {
        Less,
        More,
    }

    #[test]
    fn test_select_operator() {
        let op = select_operator("ratio.condition", &[("less_than", false, Op::Less), ("more_than", true, Op::More)]);
        assert_eq!(op.unwrap(), Op::More);

        let err = select_operator("ratio.condition", &[("less_than", false, Op::Less), ("more_than", false, Op::More)])
            .unwrap_err();
        assert_eq!(
            err.message(),
            "ratio.condition: exactly one of less_than, more_than must be true"
        );
        assert!(select_operator("x", &[("a", true, Op::Less), ("b", true, Op::More)]).is_err());
    }

    #[test]
    fn test_filters_round_trip() {
        let filters = CommonFilters {
            search_query: Some("level:error".into()),
            severities: [LogSeverity::Error, LogSeverity::Critical].into_iter().collect(),
            applications: ["api".to_string()].into_iter().collect(),
            ip_addresses: ["10.0.0.1".to_string()].into_iter().collect(),
            ..Default::default()
        };
        let wire = expand_filters(&filters, FilterType::Ratio).unwrap();
        assert_eq!(wire.filter_type, FilterType::Ratio as i32);
        assert_eq!(flatten_filters(&wire).unwrap(), filters);
    }

    #[test]
    fn test_deadman_consistency() {
        let enabled_without_ratio = ManageUndetectedValues {
            enable_triggering_on_undetected_values: true,
            auto_retire_ratio: None,
        };
        assert!(expand_deadman("s", Some(&enabled_without_ratio), true).is_err());

        let disabled_with_ratio = ManageUndetectedValues {
            enable_triggering_on_undetected_values: false,
            auto_retire_ratio: Some(DeadmanRatio::OneHour),
        };
        assert!(expand_deadman("s", Some(&disabled_with_ratio), true).is_err());

        let enabled = ManageUndetectedValues {
            enable_triggering_on_undetected_values: true,
            auto_retire_ratio: Some(DeadmanRatio::SixHours),
        };
        let wire = expand_deadman("s", Some(&enabled), true).unwrap();
        assert_eq!(flatten_deadman(wire.as_ref()).unwrap(), enabled);

        let disabled = ManageUndetectedValues {
            enable_triggering_on_undetected_values: false,
            auto_retire_ratio: None,
        };
        let wire = expand_deadman("s", Some(&disabled), true).unwrap();
        assert_eq!(flatten_deadman(wire.as_ref()).unwrap(), disabled);
    }

    #[test]
    fn test_deadman_requires_less_than_with_group_by() {
        assert!(!deadman_applies(true, &[]));
        assert!(!deadman_applies(false, &["host".to_string()]));
        assert!(deadman_applies(true, &["host".to_string()]));

        let policy = ManageUndetectedValues::default();
        assert!(expand_deadman("s", Some(&policy), false).is_err());
        assert_eq!(expand_deadman("s", None, false).unwrap(), None);
    }

    #[test]
    fn test_absent_deadman_defaults() {
        let policy = flatten_deadman(None).unwrap();
        assert!(policy.enable_triggering_on_undetected_values);
        assert_eq!(policy.auto_retire_ratio, Some(DeadmanRatio::Never));
    }

    #[test]
    fn test_deadman_flag_unset_is_disabled() {
        let data = proto::RelatedExtendedData {
            should_trigger_deadman: None,
            cleanup_deadman_duration: Some(
                proto::CleanupDeadmanDuration::CleanupDeadmanDuration5min as i32,
            ),
        };
        assert_eq!(
            flatten_deadman(Some(&data)).unwrap(),
            ManageUndetectedValues {
                enable_triggering_on_undetected_values: false,
                auto_retire_ratio: None,
            }
        );
    }

    #[test]
    fn test_notify_every_rounds_down_to_whole_minutes() {
        let alert = proto::Alert {
            notify_every: Some(90.0),
            ..Default::default()
        };
        let notification = flatten_notification(&alert, NotificationFlags::default()).unwrap();
        assert_eq!(notification.notify_every_min, Some(1));

        let alert = proto::Alert {
            notify_every: Some(59.0),
            ..Default::default()
        };
        assert_eq!(flatten_notification(&alert, NotificationFlags::default()), None);
    }

    #[test]
    fn test_notification_round_trip() {
        let notification = Notification {
            on_trigger_and_resolved: Some(true),
            ignore_infinity: None,
            notify_only_on_triggered_group_by_values: Some(false),
            recipients: Some(Recipients {
                emails: ["ops@example.com".to_string()].into_iter().collect(),
                webhooks: Default::default(),
            }),
            notify_every_min: Some(10),
            payload_fields: ["coralogix.metadata.sdkId".to_string()].into_iter().collect(),
        };

        let wire = expand_notification(Some(&notification));
        assert_eq!(wire.notify_every, Some(600.0));

        let mut params = proto::ConditionParameters::default();
        NotificationFlags::from_notification(Some(&notification)).apply(&mut params);

        let alert = proto::Alert {
            notifications: wire.notifications,
            notify_every: wire.notify_every,
            notification_payload_filters: wire.payload_filters,
            ..Default::default()
        };
        let back = flatten_notification(&alert, NotificationFlags::from_parameters(&params));
        assert_eq!(back, Some(notification));
    }

    #[test]
    fn test_empty_notification_is_none() {
        assert_eq!(
            flatten_notification(&proto::Alert::default(), NotificationFlags::default()),
            None
        );
    }
}
