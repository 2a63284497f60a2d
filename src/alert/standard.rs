//! Standard (log count) alerts.

use super::common::{
    alert_condition, alert_filters, deadman_applies, expand_deadman, expand_filters,
    flatten_deadman_if, flatten_filters, flatten_time_window, required_parameters,
    select_operator, threshold_condition, unexpected_condition, AlertParts, NotificationFlags,
};
use super::lookup::TIME_WINDOWS;
use super::model::{StandardAlert, StandardCondition};
use crate::error::ProviderError;
use crate::generated as proto;
use crate::generated::alert_condition::Condition;
use crate::generated::alert_filters::FilterType;

const BLOCK: &str = "standard.condition";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    Immediately,
    LessThan,
    MoreThan,
    MoreThanUsual,
}

pub fn expand(alert: &StandardAlert, flags: NotificationFlags) -> Result<AlertParts, ProviderError> {
    let c = &alert.condition;
    let operator = select_operator(
        BLOCK,
        &[
            ("immediately", c.immediately, Operator::Immediately),
            ("less_than", c.less_than, Operator::LessThan),
            ("more_than", c.more_than, Operator::MoreThan),
            ("more_than_usual", c.more_than_usual, Operator::MoreThanUsual),
        ],
    )?;

    let condition = match operator {
        Operator::Immediately => Condition::Immediate(proto::ImmediateCondition {}),
        Operator::LessThan | Operator::MoreThan => {
            let less_than = operator == Operator::LessThan;
            let time_window = c.time_window.ok_or_else(|| {
                ProviderError::Validation(format!(
                    "{}: time_window is required with less_than and more_than",
                    BLOCK
                ))
            })?;
            let mut parameters = proto::ConditionParameters {
                threshold: c.occurrences_threshold.map(f64::from),
                timeframe: TIME_WINDOWS.expand(time_window)? as i32,
                group_by: c.group_by.clone(),
                related_extended_data: expand_deadman(
                    BLOCK,
                    c.manage_undetected_values.as_ref(),
                    deadman_applies(less_than, &c.group_by),
                )?,
                ..Default::default()
            };
            flags.apply(&mut parameters);
            threshold_condition(less_than, parameters)
        },
        Operator::MoreThanUsual => {
            let mut parameters = proto::ConditionParameters {
                threshold: c.occurrences_threshold.map(f64::from),
                group_by: c.group_by_key.iter().cloned().collect(),
                related_extended_data: expand_deadman(
                    BLOCK,
                    c.manage_undetected_values.as_ref(),
                    false,
                )?,
                ..Default::default()
            };
            flags.apply(&mut parameters);
            Condition::MoreThanUsual(proto::MoreThanUsualCondition {
                parameters: Some(parameters),
            })
        },
    };

    Ok(AlertParts::new(
        expand_filters(&alert.filters, FilterType::TextOrUnspecified)?,
        condition,
    ))
}

/// Occurrence counts travel as doubles. Round to the nearest count and
/// refuse anything that is not one.
fn flatten_occurrences(threshold: Option<f64>) -> Result<Option<u32>, ProviderError> {
    threshold
        .map(|t| {
            let rounded = t.round();
            if rounded.is_finite() && (0.0..=f64::from(u32::MAX)).contains(&rounded) {
                Ok(rounded as u32)
            } else {
                Err(ProviderError::Validation(format!(
                    "{}: occurrences_threshold {} is not a count",
                    BLOCK, t
                )))
            }
        })
        .transpose()
}

fn flatten_threshold(
    less_than: bool,
    parameters: &proto::ConditionParameters,
) -> Result<StandardCondition, ProviderError> {
    Ok(StandardCondition {
        less_than,
        more_than: !less_than,
        occurrences_threshold: flatten_occurrences(parameters.threshold)?,
        time_window: Some(flatten_time_window(&*TIME_WINDOWS, parameters.timeframe)?),
        group_by: parameters.group_by.clone(),
        manage_undetected_values: flatten_deadman_if(
            deadman_applies(less_than, &parameters.group_by),
            parameters,
        )?,
        ..Default::default()
    })
}

pub fn flatten(alert: &proto::Alert) -> Result<StandardAlert, ProviderError> {
    let filters = flatten_filters(alert_filters(alert)?)?;

    let condition = match alert_condition(alert) {
        Some(Condition::Immediate(_)) => StandardCondition {
            immediately: true,
            ..Default::default()
        },
        Some(Condition::LessThan(c)) => {
            flatten_threshold(true, required_parameters(BLOCK, &c.parameters)?)?
        },
        Some(Condition::MoreThan(c)) => {
            flatten_threshold(false, required_parameters(BLOCK, &c.parameters)?)?
        },
        Some(Condition::MoreThanUsual(c)) => {
            let parameters = required_parameters(BLOCK, &c.parameters)?;
            StandardCondition {
                more_than_usual: true,
                occurrences_threshold: flatten_occurrences(parameters.threshold)?,
                group_by_key: parameters.group_by.first().cloned(),
                ..Default::default()
            }
        },
        other => return Err(unexpected_condition("standard", other)),
    };

    Ok(StandardAlert { filters, condition })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::lookup::{DeadmanRatio, LogSeverity, TimeWindow};
    use crate::alert::model::{CommonFilters, ManageUndetectedValues};
    use pretty_assertions::assert_eq;

    fn wire(parts: AlertParts) -> proto::Alert {
        proto::Alert {
            filters: Some(parts.filters),
            condition: Some(parts.condition),
            ..Default::default()
        }
    }

    fn filters() -> CommonFilters {
        CommonFilters {
            search_query: Some("timeout".into()),
            severities: [LogSeverity::Error].into_iter().collect(),
            subsystems: ["billing".to_string()].into_iter().collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_more_than_scenario() {
        let alert = StandardAlert {
            filters: CommonFilters::default(),
            condition: StandardCondition {
                more_than: true,
                occurrences_threshold: Some(5),
                time_window: Some(TimeWindow::TenMinutes),
                group_by: vec!["app".into()],
                ..Default::default()
            },
        };

        let parts = expand(&alert, NotificationFlags::default()).unwrap();
        assert_eq!(parts.filters.filter_type, FilterType::TextOrUnspecified as i32);
        let Some(Condition::MoreThan(c)) = &parts.condition.condition else {
            panic!("expected more_than, got {:?}", parts.condition);
        };
        let p = c.parameters.as_ref().unwrap();
        assert_eq!(p.threshold, Some(5.0));
        assert_eq!(p.timeframe, proto::Timeframe::Timeframe10Min as i32);
        assert_eq!(p.group_by, vec!["app".to_string()]);
        assert_eq!(p.related_extended_data, None);

        assert_eq!(flatten(&wire(parts)).unwrap(), alert);
    }

    #[test]
    fn test_round_trip_each_operator() {
        let conditions = vec![
            StandardCondition {
                immediately: true,
                ..Default::default()
            },
            StandardCondition {
                less_than: true,
                occurrences_threshold: Some(1),
                time_window: Some(TimeWindow::OneHour),
                group_by: vec!["host".into(), "pod".into()],
                manage_undetected_values: Some(ManageUndetectedValues {
                    enable_triggering_on_undetected_values: true,
                    auto_retire_ratio: Some(DeadmanRatio::TwoHours),
                }),
                ..Default::default()
            },
            StandardCondition {
                less_than: true,
                occurrences_threshold: Some(3),
                time_window: Some(TimeWindow::ThirtySixHours),
                ..Default::default()
            },
            StandardCondition {
                more_than_usual: true,
                occurrences_threshold: Some(20),
                group_by_key: Some("service".into()),
                ..Default::default()
            },
        ];

        for condition in conditions {
            let alert = StandardAlert {
                filters: filters(),
                condition,
            };
            let parts = expand(&alert, NotificationFlags::default()).unwrap();
            assert_eq!(flatten(&wire(parts)).unwrap(), alert);
        }
    }

    #[test]
    fn test_no_operator_is_an_error() {
        let alert = StandardAlert {
            filters: filters(),
            condition: StandardCondition::default(),
        };
        let err = expand(&alert, NotificationFlags::default()).unwrap_err();
        assert!(err.message().contains("exactly one of immediately, less_than"));
    }

    #[test]
    fn test_deadman_without_group_by_is_rejected() {
        let alert = StandardAlert {
            filters: filters(),
            condition: StandardCondition {
                less_than: true,
                time_window: Some(TimeWindow::FiveMinutes),
                manage_undetected_values: Some(ManageUndetectedValues::default()),
                ..Default::default()
            },
        };
        assert!(expand(&alert, NotificationFlags::default()).is_err());
    }

    #[test]
    fn test_absent_deadman_flattens_to_default() {
        let parts = expand(
            &StandardAlert {
                filters: filters(),
                condition: StandardCondition {
                    less_than: true,
                    time_window: Some(TimeWindow::FiveMinutes),
                    group_by: vec!["host".into()],
                    ..Default::default()
                },
            },
            NotificationFlags::default(),
        )
        .unwrap();
        let back = flatten(&wire(parts)).unwrap();
        assert_eq!(
            back.condition.manage_undetected_values,
            Some(ManageUndetectedValues::default())
        );
    }

    #[test]
    fn test_occurrences_threshold_from_wire() {
        assert_eq!(flatten_occurrences(None).unwrap(), None);
        assert_eq!(flatten_occurrences(Some(4.6)).unwrap(), Some(5));
        assert_eq!(flatten_occurrences(Some(2.0)).unwrap(), Some(2));
        assert!(flatten_occurrences(Some(-3.0)).is_err());
        assert!(flatten_occurrences(Some(f64::NAN)).is_err());
    }

    #[test]
    fn test_unexpected_condition() {
        let alert = proto::Alert {
            filters: Some(proto::AlertFilters::default()),
            condition: Some(proto::AlertCondition {
                condition: Some(Condition::Flow(proto::FlowCondition::default())),
            }),
            ..Default::default()
        };
        let err = flatten(&alert).unwrap_err();
        assert_eq!(err.message(), "standard alert cannot have a flow condition");
    }
}
