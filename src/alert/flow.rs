//! Flow alerts: ordered stages of grouped references to other alerts.

use super::common::{alert_condition, unexpected_condition, AlertParts};
use super::lookup::{wire_enum, FLOW_OPERATORS};
use super::model::{FlowAlert, FlowGroup, FlowStage, FlowTimeWindow, SubAlert};
use crate::error::ProviderError;
use crate::generated as proto;
use crate::generated::alert_condition::Condition;
use crate::generated::alert_filters::FilterType;

const MS_PER_HOUR: u64 = 3_600_000;
const MS_PER_MINUTE: u64 = 60_000;
const MS_PER_SECOND: u64 = 1_000;

/// Milliseconds of a stage window. Overflowing the wire's `u32` is an error.
pub fn time_window_to_ms(window: &FlowTimeWindow) -> Result<u32, ProviderError> {
    let ms = u64::from(window.hours) * MS_PER_HOUR
        + u64::from(window.minutes) * MS_PER_MINUTE
        + u64::from(window.seconds) * MS_PER_SECOND;
    u32::try_from(ms).map_err(|_| {
        ProviderError::Validation(format!(
            "flow stage time_window of {}h{}m{}s is too long",
            window.hours, window.minutes, window.seconds
        ))
    })
}

/// Split milliseconds back into hours, minutes and seconds. Sub-second
/// remainders are dropped.
pub fn ms_to_time_window(ms: u32) -> FlowTimeWindow {
    let ms = u64::from(ms);
    FlowTimeWindow {
        hours: (ms / MS_PER_HOUR) as u32,
        minutes: (ms % MS_PER_HOUR / MS_PER_MINUTE) as u32,
        seconds: (ms % MS_PER_MINUTE / MS_PER_SECOND) as u32,
    }
}

fn expand_group(group: &FlowGroup) -> Result<proto::FlowGroup, ProviderError> {
    Ok(proto::FlowGroup {
        alerts: Some(proto::FlowAlerts {
            values: group
                .sub_alerts
                .iter()
                .map(|sub| proto::FlowAlert {
                    id: Some(sub.user_alert_id.clone()),
                    not: Some(sub.not),
                })
                .collect(),
        }),
        next_op: FLOW_OPERATORS.expand(group.operator)? as i32,
    })
}

fn flatten_group(group: &proto::FlowGroup) -> Result<FlowGroup, ProviderError> {
    let operator: proto::FlowOperator = wire_enum(FLOW_OPERATORS.domain(), group.next_op)?;
    Ok(FlowGroup {
        sub_alerts: group
            .alerts
            .iter()
            .flat_map(|a| a.values.iter())
            .map(|a| SubAlert {
                not: a.not.unwrap_or_default(),
                user_alert_id: a.id.clone().unwrap_or_default(),
            })
            .collect(),
        operator: FLOW_OPERATORS.flatten(&operator)?,
    })
}

pub fn expand(alert: &FlowAlert) -> Result<AlertParts, ProviderError> {
    let stages = alert
        .stages
        .iter()
        .map(|stage| {
            Ok(proto::FlowStage {
                groups: stage
                    .groups
                    .iter()
                    .map(expand_group)
                    .collect::<Result<Vec<_>, _>>()?,
                timeframe: Some(proto::FlowTimeframe {
                    ms: Some(time_window_to_ms(&stage.time_window)?),
                }),
            })
        })
        .collect::<Result<Vec<_>, ProviderError>>()?;

    Ok(AlertParts::new(
        proto::AlertFilters {
            filter_type: FilterType::Flow as i32,
            ..Default::default()
        },
        Condition::Flow(proto::FlowCondition { stages }),
    ))
}

pub fn flatten(alert: &proto::Alert) -> Result<FlowAlert, ProviderError> {
    let condition = match alert_condition(alert) {
        Some(Condition::Flow(c)) => c,
        other => return Err(unexpected_condition("flow", other)),
    };

    let stages = condition
        .stages
        .iter()
        .map(|stage| {
            Ok(FlowStage {
                groups: stage
                    .groups
                    .iter()
                    .map(flatten_group)
                    .collect::<Result<Vec<_>, _>>()?,
                time_window: ms_to_time_window(
                    stage.timeframe.as_ref().and_then(|t| t.ms).unwrap_or_default(),
                ),
            })
        })
        .collect::<Result<Vec<_>, ProviderError>>()?;

    Ok(FlowAlert { stages })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::lookup::FlowOperator;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_time_window_conversion() {
        let window = FlowTimeWindow {
            hours: 1,
            minutes: 30,
            seconds: 15,
        };
        assert_eq!(time_window_to_ms(&window).unwrap(), 5_415_000);
        assert_eq!(ms_to_time_window(5_415_000), window);

        assert_eq!(time_window_to_ms(&FlowTimeWindow::default()).unwrap(), 0);
        assert_eq!(
            ms_to_time_window(90_000),
            FlowTimeWindow {
                hours: 0,
                minutes: 1,
                seconds: 30
            }
        );
        assert_eq!(ms_to_time_window(1_999).seconds, 1);

        let too_long = FlowTimeWindow {
            hours: 2_000,
            minutes: 0,
            seconds: 0,
        };
        assert!(time_window_to_ms(&too_long).is_err());
    }

    #[test]
    fn test_round_trip() {
        let alert = FlowAlert {
            stages: vec![
                FlowStage {
                    groups: vec![
                        FlowGroup {
                            sub_alerts: vec![
                                SubAlert {
                                    not: false,
                                    user_alert_id: "a1".into(),
                                },
                                SubAlert {
                                    not: true,
                                    user_alert_id: "a2".into(),
                                },
                            ],
                            operator: FlowOperator::And,
                        },
                        FlowGroup {
                            sub_alerts: vec![SubAlert {
                                not: false,
                                user_alert_id: "a3".into(),
                            }],
                            operator: FlowOperator::Or,
                        },
                    ],
                    time_window: FlowTimeWindow {
                        hours: 0,
                        minutes: 10,
                        seconds: 0,
                    },
                },
                FlowStage {
                    groups: vec![FlowGroup {
                        sub_alerts: vec![SubAlert {
                            not: false,
                            user_alert_id: "a4".into(),
                        }],
                        operator: FlowOperator::And,
                    }],
                    time_window: FlowTimeWindow {
                        hours: 2,
                        minutes: 0,
                        seconds: 30,
                    },
                },
            ],
        };

        let parts = expand(&alert).unwrap();
        assert_eq!(parts.filters.filter_type, FilterType::Flow as i32);
        let Some(Condition::Flow(c)) = &parts.condition.condition else {
            panic!("expected flow");
        };
        assert_eq!(c.stages[0].timeframe.as_ref().unwrap().ms, Some(600_000));
        assert_eq!(c.stages[0].groups[1].next_op, proto::FlowOperator::Or as i32);

        let wire = proto::Alert {
            filters: Some(parts.filters),
            condition: Some(parts.condition),
            ..Default::default()
        };
        assert_eq!(flatten(&wire).unwrap(), alert);
    }
}
