//! Tracing alerts: span latency with tag and field filters.
//!
//! Latency is configured in milliseconds and stored in microseconds.

use super::common::{
    alert_condition, alert_filters, expand_filters, flatten_filters, flatten_time_window,
    required_parameters, select_operator, unexpected_condition, AlertParts, NotificationFlags,
};
use super::lookup::{TracingOperator, TIME_WINDOWS, TRACING_FIELDS, TRACING_OPERATORS};
use super::model::{FieldFilter, FilterValues, TagFilter, TracingAlert, TracingCondition};
use crate::error::ProviderError;
use crate::generated as proto;
use crate::generated::alert_condition::Condition;
use crate::generated::alert_filters::FilterType;

const BLOCK: &str = "tracing.condition";
const MICROS_PER_MILLI: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    Immediately,
    MoreThan,
}

fn expand_values(filters: &[FilterValues]) -> Result<Vec<proto::Filters>, ProviderError> {
    filters
        .iter()
        .map(|f| {
            Ok(proto::Filters {
                values: f.values.clone(),
                operator: TRACING_OPERATORS.expand(f.operator)?.to_string(),
            })
        })
        .collect()
}

fn flatten_values(filters: &[proto::Filters]) -> Result<Vec<FilterValues>, ProviderError> {
    filters
        .iter()
        .map(|f| {
            let operator: TracingOperator = TRACING_OPERATORS.flatten(f.operator.as_str())?;
            Ok(FilterValues {
                values: f.values.clone(),
                operator,
            })
        })
        .collect()
}

pub fn expand(alert: &TracingAlert, flags: NotificationFlags) -> Result<AlertParts, ProviderError> {
    let c = &alert.condition;
    let operator = select_operator(
        BLOCK,
        &[
            ("immediately", c.immediately, Operator::Immediately),
            ("more_than", c.more_than, Operator::MoreThan),
        ],
    )?;

    let condition = match operator {
        Operator::Immediately => Condition::Immediate(proto::ImmediateCondition {}),
        Operator::MoreThan => {
            let time_window = c.time_window.ok_or_else(|| {
                ProviderError::Validation(format!("{}: time_window is required with more_than", BLOCK))
            })?;
            let mut parameters = proto::ConditionParameters {
                threshold: c.occurrences_threshold.map(f64::from),
                timeframe: TIME_WINDOWS.expand(time_window)? as i32,
                group_by: c.group_by.clone(),
                ..Default::default()
            };
            flags.apply(&mut parameters);
            Condition::MoreThan(proto::MoreThanCondition {
                parameters: Some(parameters),
            })
        },
    };

    let tag_filters = alert
        .tag_filters
        .iter()
        .map(|t| {
            Ok(proto::FilterData {
                field: t.field.clone(),
                filters: expand_values(&t.filters)?,
            })
        })
        .collect::<Result<Vec<_>, ProviderError>>()?;
    let field_filters = alert
        .field_filters
        .iter()
        .map(|f| {
            Ok(proto::FilterData {
                field: TRACING_FIELDS.expand(f.field)?.to_string(),
                filters: expand_values(&f.filters)?,
            })
        })
        .collect::<Result<Vec<_>, ProviderError>>()?;

    let mut parts = AlertParts::new(expand_filters(&alert.filters, FilterType::Tracing)?, condition);
    parts.tracing_alert = Some(proto::TracingAlert {
        condition_latency: (alert.latency_threshold_ms * MICROS_PER_MILLI).round() as u32,
        field_filters,
        tag_filters,
    });
    Ok(parts)
}

pub fn flatten(alert: &proto::Alert) -> Result<TracingAlert, ProviderError> {
    let filters = flatten_filters(alert_filters(alert)?)?;

    let condition = match alert_condition(alert) {
        Some(Condition::Immediate(_)) => TracingCondition {
            immediately: true,
            ..Default::default()
        },
        Some(Condition::MoreThan(c)) => {
            let parameters = required_parameters(BLOCK, &c.parameters)?;
            TracingCondition {
                more_than: true,
                occurrences_threshold: parameters.threshold.map(|t| t as u32),
                time_window: Some(flatten_time_window(&*TIME_WINDOWS, parameters.timeframe)?),
                group_by: parameters.group_by.clone(),
                ..Default::default()
            }
        },
        other => return Err(unexpected_condition("tracing", other)),
    };

    let tracing = alert.tracing_alert.clone().unwrap_or_default();
    let tag_filters = tracing
        .tag_filters
        .iter()
        .map(|t| {
            Ok(TagFilter {
                field: t.field.clone(),
                filters: flatten_values(&t.filters)?,
            })
        })
        .collect::<Result<Vec<_>, ProviderError>>()?;
    let field_filters = tracing
        .field_filters
        .iter()
        .map(|f| {
            Ok(FieldFilter {
                field: TRACING_FIELDS.flatten(f.field.as_str())?,
                filters: flatten_values(&f.filters)?,
            })
        })
        .collect::<Result<Vec<_>, ProviderError>>()?;

    Ok(TracingAlert {
        filters,
        latency_threshold_ms: f64::from(tracing.condition_latency) / MICROS_PER_MILLI,
        tag_filters,
        field_filters,
        condition,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::lookup::{TimeWindow, TracingField};
    use crate::alert::model::CommonFilters;
    use pretty_assertions::assert_eq;

    fn tracing_alert(condition: TracingCondition) -> TracingAlert {
        TracingAlert {
            filters: CommonFilters {
                applications: ["checkout".to_string()].into_iter().collect(),
                ..Default::default()
            },
            latency_threshold_ms: 12.5,
            tag_filters: vec![TagFilter {
                field: "http.status_code".into(),
                filters: vec![FilterValues {
                    values: vec!["500".into(), "503".into()],
                    operator: TracingOperator::Equals,
                }],
            }],
            field_filters: vec![FieldFilter {
                field: TracingField::Service,
                filters: vec![FilterValues {
                    values: vec!["payments".into()],
                    operator: TracingOperator::StartsWith,
                }],
            }],
            condition,
        }
    }

    fn wire(parts: AlertParts) -> proto::Alert {
        proto::Alert {
            filters: Some(parts.filters),
            condition: Some(parts.condition),
            tracing_alert: parts.tracing_alert,
            ..Default::default()
        }
    }

    #[test]
    fn test_latency_is_stored_in_microseconds() {
        let alert = tracing_alert(TracingCondition {
            immediately: true,
            ..Default::default()
        });
        let parts = expand(&alert, NotificationFlags::default()).unwrap();
        let tracing = parts.tracing_alert.as_ref().unwrap();
        assert_eq!(tracing.condition_latency, 12_500);
        assert_eq!(tracing.field_filters[0].field, "serviceName");
        assert_eq!(tracing.field_filters[0].filters[0].operator, "startsWith");
        assert_eq!(flatten(&wire(parts)).unwrap(), alert);
    }

    #[test]
    fn test_more_than_round_trip() {
        let alert = tracing_alert(TracingCondition {
            more_than: true,
            occurrences_threshold: Some(10),
            time_window: Some(TimeWindow::FifteenMinutes),
            group_by: vec!["service".into()],
            ..Default::default()
        });
        let parts = expand(&alert, NotificationFlags::default()).unwrap();
        assert_eq!(parts.filters.filter_type, FilterType::Tracing as i32);
        assert_eq!(flatten(&wire(parts)).unwrap(), alert);
    }

    #[test]
    fn test_unknown_wire_operator() {
        let mut parts = expand(
            &tracing_alert(TracingCondition {
                immediately: true,
                ..Default::default()
            }),
            NotificationFlags::default(),
        )
        .unwrap();
        if let Some(t) = parts.tracing_alert.as_mut() {
            t.tag_filters[0].filters[0].operator = "matches".into();
        }
        let err = flatten(&wire(parts)).unwrap_err();
        assert_eq!(err.to_string(), "Unknown tracing operator token: \"matches\"");
    }
}
