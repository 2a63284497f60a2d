//! Unique-count alerts: fire when a key takes too many distinct values.

use super::collections::first_required;
use super::common::{
    alert_condition, alert_filters, expand_filters, flatten_filters, flatten_time_window,
    required_parameters, unexpected_condition, AlertParts, NotificationFlags,
};
use super::lookup::UNIQUE_COUNT_TIME_WINDOWS;
use super::model::{UniqueCountAlert, UniqueCountCondition};
use crate::error::ProviderError;
use crate::generated as proto;
use crate::generated::alert_condition::Condition;
use crate::generated::alert_filters::FilterType;

const BLOCK: &str = "unique_count.condition";

pub fn expand(
    alert: &UniqueCountAlert,
    flags: NotificationFlags,
) -> Result<AlertParts, ProviderError> {
    let c = &alert.condition;
    let mut parameters = proto::ConditionParameters {
        threshold: Some(f64::from(c.max_unique_values)),
        timeframe: UNIQUE_COUNT_TIME_WINDOWS.expand(c.time_window)? as i32,
        cardinality_fields: vec![c.unique_count_key.clone()],
        group_by: c.group_by_key.iter().cloned().collect(),
        max_unique_count_values_for_group_by_key: c.max_unique_values_for_group_by,
        ..Default::default()
    };
    flags.apply(&mut parameters);

    Ok(AlertParts::new(
        expand_filters(&alert.filters, FilterType::UniqueCount)?,
        Condition::UniqueCount(proto::UniqueCountCondition {
            parameters: Some(parameters),
        }),
    ))
}

pub fn flatten(alert: &proto::Alert) -> Result<UniqueCountAlert, ProviderError> {
    let filters = flatten_filters(alert_filters(alert)?)?;
    let parameters = match alert_condition(alert) {
        Some(Condition::UniqueCount(c)) => required_parameters(BLOCK, &c.parameters)?,
        other => return Err(unexpected_condition("unique_count", other)),
    };

    Ok(UniqueCountAlert {
        filters,
        condition: UniqueCountCondition {
            unique_count_key: first_required(&parameters.cardinality_fields, "unique count key")?
                .clone(),
            max_unique_values: parameters.threshold.unwrap_or_default() as u32,
            time_window: flatten_time_window(&*UNIQUE_COUNT_TIME_WINDOWS, parameters.timeframe)?,
            group_by_key: parameters.group_by.first().cloned(),
            max_unique_values_for_group_by: parameters.max_unique_count_values_for_group_by_key,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::lookup::UniqueCountTimeWindow;
    use crate::alert::model::CommonFilters;
    use pretty_assertions::assert_eq;

    fn round_trip(alert: &UniqueCountAlert) -> UniqueCountAlert {
        let parts = expand(alert, NotificationFlags::default()).unwrap();
        assert_eq!(parts.filters.filter_type, FilterType::UniqueCount as i32);
        flatten(&proto::Alert {
            filters: Some(parts.filters),
            condition: Some(parts.condition),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_round_trip_with_and_without_group_by() {
        let ungrouped = UniqueCountAlert {
            filters: CommonFilters::default(),
            condition: UniqueCountCondition {
                unique_count_key: "user_id".into(),
                max_unique_values: 100,
                time_window: UniqueCountTimeWindow::TwentyMinutes,
                group_by_key: None,
                max_unique_values_for_group_by: None,
            },
        };
        assert_eq!(round_trip(&ungrouped), ungrouped);

        let grouped = UniqueCountAlert {
            condition: UniqueCountCondition {
                group_by_key: Some("tenant".into()),
                max_unique_values_for_group_by: Some(50),
                ..ungrouped.condition.clone()
            },
            ..ungrouped
        };
        assert_eq!(round_trip(&grouped), grouped);
    }

    #[test]
    fn test_missing_cardinality_field_is_an_error() {
        let wire = proto::Alert {
            filters: Some(proto::AlertFilters::default()),
            condition: Some(proto::AlertCondition {
                condition: Some(Condition::UniqueCount(proto::UniqueCountCondition {
                    parameters: Some(proto::ConditionParameters::default()),
                })),
            }),
            ..Default::default()
        };
        assert!(flatten(&wire).is_err());
    }
}
