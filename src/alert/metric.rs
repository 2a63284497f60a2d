//! Metric alerts, written as lucene (a logs2metrics field with an
//! aggregation) or as promql. Both share the condition-parameters envelope;
//! each carries its own sub-message in it.

use super::common::{
    alert_condition, deadman_applies, expand_deadman, flatten_deadman_if, flatten_time_window,
    required_parameters, select_operator, threshold_condition, unexpected_condition, AlertParts,
    NotificationFlags,
};
use super::collections::wire_string;
use super::lookup::{wire_enum, ARITHMETIC_OPERATORS, METRIC_TIME_WINDOWS};
use super::model::{
    LuceneCondition, LuceneMetric, MetricAlert, PromqlCondition, PromqlMetric,
};
use crate::error::ProviderError;
use crate::generated as proto;
use crate::generated::alert_condition::Condition;
use crate::generated::alert_filters::FilterType;
use crate::generated::metric_alert_condition_parameters::{ArithmeticOperator, MetricSource};

const LUCENE: &str = "metric.lucene.condition";
const PROMQL: &str = "metric.promql.condition";

fn metric_filters(text: Option<String>) -> proto::AlertFilters {
    proto::AlertFilters {
        text,
        filter_type: FilterType::Metric as i32,
        ..Default::default()
    }
}

pub fn expand(alert: &MetricAlert, flags: NotificationFlags) -> Result<AlertParts, ProviderError> {
    match (&alert.lucene, &alert.promql) {
        (Some(lucene), None) => expand_lucene(lucene, flags),
        (None, Some(promql)) => expand_promql(promql, flags),
        _ => Err(ProviderError::Validation(
            "metric: exactly one of lucene, promql must be set".to_string(),
        )),
    }
}

fn expand_lucene(metric: &LuceneMetric, flags: NotificationFlags) -> Result<AlertParts, ProviderError> {
    let c = &metric.condition;
    let less_than = select_operator(
        LUCENE,
        &[("less_than", c.less_than, true), ("more_than", c.more_than, false)],
    )?;

    let mut parameters = proto::ConditionParameters {
        threshold: Some(c.threshold),
        timeframe: METRIC_TIME_WINDOWS.expand(c.time_window)? as i32,
        group_by: c.group_by.clone(),
        metric_alert_parameters: Some(proto::MetricAlertConditionParameters {
            metric_field: Some(c.metric_field.clone()),
            metric_source: MetricSource::Logs2metricsOrUnspecified as i32,
            arithmetic_operator: ARITHMETIC_OPERATORS.expand(c.arithmetic_operator)? as i32,
            arithmetic_operator_modifier: c.arithmetic_operator_modifier,
            sample_threshold_percentage: Some(c.sample_threshold_percentage),
            non_null_percentage: c.min_non_null_values_percentage,
            swap_null_values: Some(c.replace_missing_value_with_zero),
        }),
        related_extended_data: expand_deadman(
            LUCENE,
            c.manage_undetected_values.as_ref(),
            deadman_applies(less_than, &c.group_by),
        )?,
        ..Default::default()
    };
    flags.apply(&mut parameters);

    Ok(AlertParts::new(
        metric_filters(Some(metric.search_query.clone())),
        threshold_condition(less_than, parameters),
    ))
}

/// Promql conditions have no group-by, so they never carry an
/// undetected-values policy.
fn expand_promql(metric: &PromqlMetric, flags: NotificationFlags) -> Result<AlertParts, ProviderError> {
    let c = &metric.condition;
    let less_than = select_operator(
        PROMQL,
        &[("less_than", c.less_than, true), ("more_than", c.more_than, false)],
    )?;

    let mut parameters = proto::ConditionParameters {
        threshold: Some(c.threshold),
        timeframe: METRIC_TIME_WINDOWS.expand(c.time_window)? as i32,
        metric_alert_promql_parameters: Some(proto::MetricAlertPromqlConditionParameters {
            promql_text: Some(metric.search_query.clone()),
            arithmetic_operator_modifier: None,
            sample_threshold_percentage: Some(c.sample_threshold_percentage),
            non_null_percentage: c.min_non_null_values_percentage,
            swap_null_values: Some(c.replace_missing_value_with_zero),
        }),
        ..Default::default()
    };
    flags.apply(&mut parameters);

    Ok(AlertParts::new(
        metric_filters(None),
        threshold_condition(less_than, parameters),
    ))
}

pub fn flatten(alert: &proto::Alert) -> Result<MetricAlert, ProviderError> {
    let (less_than, parameters) = match alert_condition(alert) {
        Some(Condition::LessThan(c)) => (true, required_parameters("metric", &c.parameters)?),
        Some(Condition::MoreThan(c)) => (false, required_parameters("metric", &c.parameters)?),
        other => return Err(unexpected_condition("metric", other)),
    };
    let time_window = flatten_time_window(&*METRIC_TIME_WINDOWS, parameters.timeframe)?;

    if let Some(promql) = &parameters.metric_alert_promql_parameters {
        return Ok(MetricAlert {
            lucene: None,
            promql: Some(PromqlMetric {
                search_query: promql.promql_text.clone().unwrap_or_default(),
                condition: PromqlCondition {
                    less_than,
                    more_than: !less_than,
                    threshold: parameters.threshold.unwrap_or_default(),
                    sample_threshold_percentage: promql
                        .sample_threshold_percentage
                        .unwrap_or_default(),
                    time_window,
                    replace_missing_value_with_zero: promql.swap_null_values.unwrap_or_default(),
                    min_non_null_values_percentage: promql.non_null_percentage,
                },
            }),
        });
    }

    let lucene = parameters.metric_alert_parameters.as_ref().ok_or_else(|| {
        ProviderError::Validation(
            "metric condition has neither lucene nor promql parameters".to_string(),
        )
    })?;
    let operator: ArithmeticOperator =
        wire_enum(ARITHMETIC_OPERATORS.domain(), lucene.arithmetic_operator)?;

    Ok(MetricAlert {
        lucene: Some(LuceneMetric {
            search_query: alert
                .filters
                .as_ref()
                .and_then(|f| wire_string(&f.text))
                .unwrap_or_default(),
            condition: LuceneCondition {
                metric_field: lucene.metric_field.clone().unwrap_or_default(),
                arithmetic_operator: ARITHMETIC_OPERATORS.flatten(&operator)?,
                arithmetic_operator_modifier: lucene.arithmetic_operator_modifier,
                less_than,
                more_than: !less_than,
                threshold: parameters.threshold.unwrap_or_default(),
                sample_threshold_percentage: lucene.sample_threshold_percentage.unwrap_or_default(),
                time_window,
                group_by: parameters.group_by.clone(),
                replace_missing_value_with_zero: lucene.swap_null_values.unwrap_or_default(),
                min_non_null_values_percentage: lucene.non_null_percentage,
                manage_undetected_values: flatten_deadman_if(
                    deadman_applies(less_than, &parameters.group_by),
                    parameters,
                )?,
            },
        }),
        promql: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::lookup::{self, DeadmanRatio, MetricTimeWindow};
    use crate::alert::model::ManageUndetectedValues;
    use pretty_assertions::assert_eq;

    fn wire(parts: AlertParts) -> proto::Alert {
        proto::Alert {
            filters: Some(parts.filters),
            condition: Some(parts.condition),
            ..Default::default()
        }
    }

    fn lucene() -> LuceneMetric {
        LuceneMetric {
            search_query: "name:\"checkout\"".into(),
            condition: LuceneCondition {
                metric_field: "duration_ms".into(),
                arithmetic_operator: lookup::ArithmeticOperator::Percentile,
                arithmetic_operator_modifier: Some(95),
                less_than: false,
                more_than: true,
                threshold: 750.0,
                sample_threshold_percentage: 50,
                time_window: MetricTimeWindow::OneMinute,
                group_by: vec!["region".into()],
                replace_missing_value_with_zero: false,
                min_non_null_values_percentage: Some(30),
                manage_undetected_values: None,
            },
        }
    }

    fn promql() -> PromqlMetric {
        PromqlMetric {
            search_query: "sum(rate(http_requests_total{code=~\"5..\"}[5m]))".into(),
            condition: PromqlCondition {
                less_than: true,
                more_than: false,
                threshold: 3.0,
                sample_threshold_percentage: 10,
                time_window: MetricTimeWindow::TwelveHours,
                replace_missing_value_with_zero: true,
                min_non_null_values_percentage: None,
            },
        }
    }

    #[test]
    fn test_lucene_round_trip() {
        let alert = MetricAlert {
            lucene: Some(lucene()),
            promql: None,
        };
        let parts = expand(&alert, NotificationFlags::default()).unwrap();
        assert_eq!(parts.filters.filter_type, FilterType::Metric as i32);
        assert_eq!(parts.filters.text.as_deref(), Some("name:\"checkout\""));
        assert_eq!(flatten(&wire(parts)).unwrap(), alert);
    }

    #[test]
    fn test_lucene_less_than_with_deadman() {
        let mut metric = lucene();
        metric.condition.less_than = true;
        metric.condition.more_than = false;
        metric.condition.manage_undetected_values = Some(ManageUndetectedValues {
            enable_triggering_on_undetected_values: true,
            auto_retire_ratio: Some(DeadmanRatio::FiveMinutes),
        });
        let alert = MetricAlert {
            lucene: Some(metric),
            promql: None,
        };
        let parts = expand(&alert, NotificationFlags::default()).unwrap();
        assert_eq!(flatten(&wire(parts)).unwrap(), alert);
    }

    #[test]
    fn test_promql_round_trip() {
        let alert = MetricAlert {
            lucene: None,
            promql: Some(promql()),
        };
        let parts = expand(&alert, NotificationFlags::default()).unwrap();
        assert_eq!(parts.filters.text, None);
        let Some(Condition::LessThan(c)) = &parts.condition.condition else {
            panic!("expected less_than");
        };
        let p = c.parameters.as_ref().unwrap();
        assert!(p.metric_alert_parameters.is_none());
        assert!(p.related_extended_data.is_none());
        assert_eq!(flatten(&wire(parts)).unwrap(), alert);
    }

    #[test]
    fn test_exactly_one_form() {
        let both = MetricAlert {
            lucene: Some(lucene()),
            promql: Some(promql()),
        };
        assert!(expand(&both, NotificationFlags::default()).is_err());

        let neither = MetricAlert {
            lucene: None,
            promql: None,
        };
        assert!(expand(&neither, NotificationFlags::default()).is_err());
    }
}
