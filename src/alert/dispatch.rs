//! Routing between the eight alert kinds.
//!
//! Expanding routes on the populated configuration block. Flattening routes
//! on the wire filter type, except that `TEXT_OR_UNSPECIFIED` covers both
//! standard and new-value alerts and is split by the condition kind.

use super::common::{alert_condition, alert_filters, AlertParts, NotificationFlags};
use super::lookup::wire_enum;
use super::model::{AlertType, AlertTypeRef};
use super::{flow, metric, new_value, ratio, standard, time_relative, tracing, unique_count};
use crate::error::ProviderError;
use crate::generated as proto;
use crate::generated::alert_condition::Condition;
use crate::generated::alert_filters::FilterType;

/// Expand the populated alert-type block into its filters and condition.
pub fn expand_alert_type(
    alert_type: AlertTypeRef<'_>,
    flags: NotificationFlags,
) -> Result<AlertParts, ProviderError> {
    match alert_type {
        AlertTypeRef::Standard(a) => standard::expand(a, flags),
        AlertTypeRef::Ratio(a) => ratio::expand(a, flags),
        AlertTypeRef::NewValue(a) => new_value::expand(a, flags),
        AlertTypeRef::UniqueCount(a) => unique_count::expand(a, flags),
        AlertTypeRef::TimeRelative(a) => time_relative::expand(a, flags),
        AlertTypeRef::Metric(a) => metric::expand(a, flags),
        AlertTypeRef::Tracing(a) => tracing::expand(a, flags),
        AlertTypeRef::Flow(a) => flow::expand(a),
    }
}

/// The alert kinds, as seen on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Standard,
    Ratio,
    NewValue,
    UniqueCount,
    TimeRelative,
    Metric,
    Tracing,
    Flow,
}

impl AlertKind {
    /// Name of the configuration block of this kind.
    pub fn name(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Ratio => "ratio",
            Self::NewValue => "new_value",
            Self::UniqueCount => "unique_count",
            Self::TimeRelative => "time_relative",
            Self::Metric => "metric",
            Self::Tracing => "tracing",
            Self::Flow => "flow",
        }
    }
}

/// The kind a wire alert flattens into.
pub fn alert_kind(alert: &proto::Alert) -> Result<AlertKind, ProviderError> {
    let filter_type: FilterType = wire_enum("filter type", alert_filters(alert)?.filter_type)?;
    let kind = match filter_type {
        FilterType::TextOrUnspecified => match alert_condition(alert) {
            Some(Condition::NewValue(_)) => AlertKind::NewValue,
            _ => AlertKind::Standard,
        },
        FilterType::Ratio => AlertKind::Ratio,
        FilterType::UniqueCount => AlertKind::UniqueCount,
        FilterType::TimeRelative => AlertKind::TimeRelative,
        FilterType::Metric => AlertKind::Metric,
        FilterType::Tracing => AlertKind::Tracing,
        FilterType::Flow => AlertKind::Flow,
        FilterType::Template => {
            return Err(ProviderError::Validation(
                "template alerts are not managed by coralogix_alert".to_string(),
            ))
        },
    };
    Ok(kind)
}

/// Flatten a wire alert into the matching alert-type block.
pub fn flatten_alert_type(alert: &proto::Alert) -> Result<AlertType, ProviderError> {
    let alert_type = match alert_kind(alert)? {
        AlertKind::Standard => AlertType::Standard(standard::flatten(alert)?),
        AlertKind::NewValue => AlertType::NewValue(new_value::flatten(alert)?),
        AlertKind::Ratio => AlertType::Ratio(ratio::flatten(alert)?),
        AlertKind::UniqueCount => AlertType::UniqueCount(unique_count::flatten(alert)?),
        AlertKind::TimeRelative => AlertType::TimeRelative(time_relative::flatten(alert)?),
        AlertKind::Metric => AlertType::Metric(metric::flatten(alert)?),
        AlertKind::Tracing => AlertType::Tracing(tracing::flatten(alert)?),
        AlertKind::Flow => AlertType::Flow(flow::flatten(alert)?),
    };
    Ok(alert_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::lookup::{
        FlowOperator, MetricTimeWindow, NewValueTimeWindow, RelativeTimeWindow, TimeWindow,
        UniqueCountTimeWindow,
    };
    use crate::alert::model::*;

    fn one_of_each() -> Vec<AlertType> {
        vec![
            AlertType::Standard(StandardAlert {
                filters: CommonFilters::default(),
                condition: StandardCondition {
                    more_than: true,
                    occurrences_threshold: Some(5),
                    time_window: Some(TimeWindow::TenMinutes),
                    ..Default::default()
                },
            }),
            AlertType::Ratio(RatioAlert {
                query_1: RatioQuery1::default(),
                query_2: RatioQuery2::default(),
                condition: RatioCondition {
                    less_than: false,
                    more_than: true,
                    queries_ratio: 2.0,
                    time_window: TimeWindow::OneHour,
                    group_by: vec![],
                    group_by_q1: false,
                    group_by_q2: false,
                    group_by_both: false,
                    manage_undetected_values: None,
                },
            }),
            AlertType::NewValue(NewValueAlert {
                filters: CommonFilters::default(),
                condition: NewValueCondition {
                    key_to_track: "ip".into(),
                    time_window: NewValueTimeWindow::TwentyFourHours,
                },
            }),
            AlertType::UniqueCount(UniqueCountAlert {
                filters: CommonFilters::default(),
                condition: UniqueCountCondition {
                    unique_count_key: "user".into(),
                    max_unique_values: 5,
                    time_window: UniqueCountTimeWindow::OneHour,
                    group_by_key: None,
                    max_unique_values_for_group_by: None,
                },
            }),
            AlertType::TimeRelative(TimeRelativeAlert {
                filters: CommonFilters::default(),
                condition: TimeRelativeCondition {
                    less_than: false,
                    more_than: true,
                    ratio_threshold: 3.0,
                    relative_time_window: RelativeTimeWindow::Yesterday,
                    group_by: vec![],
                    manage_undetected_values: None,
                },
            }),
            AlertType::Metric(MetricAlert {
                lucene: None,
                promql: Some(PromqlMetric {
                    search_query: "up == 0".into(),
                    condition: PromqlCondition {
                        less_than: false,
                        more_than: true,
                        threshold: 0.0,
                        sample_threshold_percentage: 0,
                        time_window: MetricTimeWindow::FiveMinutes,
                        replace_missing_value_with_zero: false,
                        min_non_null_values_percentage: None,
                    },
                }),
            }),
            AlertType::Tracing(TracingAlert {
                filters: CommonFilters::default(),
                latency_threshold_ms: 100.0,
                tag_filters: vec![],
                field_filters: vec![],
                condition: TracingCondition {
                    immediately: true,
                    ..Default::default()
                },
            }),
            AlertType::Flow(FlowAlert {
                stages: vec![FlowStage {
                    groups: vec![FlowGroup {
                        sub_alerts: vec![SubAlert {
                            not: false,
                            user_alert_id: "x".into(),
                        }],
                        operator: FlowOperator::And,
                    }],
                    time_window: FlowTimeWindow::default(),
                }],
            }),
        ]
    }

    fn to_wire(parts: AlertParts) -> proto::Alert {
        proto::Alert {
            filters: Some(parts.filters),
            condition: Some(parts.condition),
            tracing_alert: parts.tracing_alert,
            ..Default::default()
        }
    }

    #[test]
    fn test_exclusive_dispatch() {
        let kinds = one_of_each();
        assert_eq!(kinds.len(), ALERT_TYPE_NAMES.len());

        for kind in kinds {
            let parts = expand_alert_type(kind.as_ref(), NotificationFlags::default()).unwrap();
            let wire = to_wire(parts);
            assert_eq!(alert_kind(&wire).unwrap().name(), kind.name());
            assert_eq!(flatten_alert_type(&wire).unwrap(), kind);
        }
    }

    #[test]
    fn test_text_filter_type_splits_on_condition() {
        let mut wire = proto::Alert {
            filters: Some(proto::AlertFilters::default()),
            condition: Some(proto::AlertCondition {
                condition: Some(Condition::Immediate(proto::ImmediateCondition {})),
            }),
            ..Default::default()
        };
        assert_eq!(alert_kind(&wire).unwrap(), AlertKind::Standard);

        wire.condition = Some(proto::AlertCondition {
            condition: Some(Condition::NewValue(proto::NewValueCondition::default())),
        });
        assert_eq!(alert_kind(&wire).unwrap(), AlertKind::NewValue);
    }

    #[test]
    fn test_template_and_unknown_filter_types() {
        let mut wire = proto::Alert {
            filters: Some(proto::AlertFilters {
                filter_type: FilterType::Template as i32,
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(alert_kind(&wire).is_err());

        wire.filters = Some(proto::AlertFilters {
            filter_type: 42,
            ..Default::default()
        });
        assert!(matches!(
            alert_kind(&wire).unwrap_err(),
            ProviderError::UnknownToken { .. }
        ));
    }
}
