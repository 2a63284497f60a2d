//! Ratio alerts: two queries compared against each other.
//!
//! The first query rides in the alert's own filters, the second in
//! `filters.ratio_alerts[0]`. Grouping goes to the first query through the
//! condition parameters, to the second through its own `group_by`, or to both.

use super::collections::{expand_enums, flatten_enums, wire_string};
use super::common::{
    alert_condition, alert_filters, deadman_applies, expand_deadman, expand_filters,
    flatten_deadman_if, flatten_filters, flatten_time_window, required_parameters,
    select_operator, threshold_condition, unexpected_condition, AlertParts, NotificationFlags,
};
use super::lookup::{LOG_SEVERITIES, TIME_WINDOWS};
use super::model::{RatioAlert, RatioCondition, RatioQuery1, RatioQuery2};
use crate::error::ProviderError;
use crate::generated as proto;
use crate::generated::alert_condition::Condition;
use crate::generated::alert_filters::{self, FilterType};

const BLOCK: &str = "ratio.condition";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GroupByTarget {
    Query1,
    Query2,
    Both,
}

impl GroupByTarget {
    fn query_1(self) -> bool {
        matches!(self, Self::Query1 | Self::Both)
    }

    fn query_2(self) -> bool {
        matches!(self, Self::Query2 | Self::Both)
    }
}

/// Where grouping goes. A non-empty `group_by` needs exactly one target flag,
/// and a target flag needs a non-empty `group_by`.
fn group_by_target(condition: &RatioCondition) -> Result<Option<GroupByTarget>, ProviderError> {
    let flags = [
        ("group_by_q1", condition.group_by_q1, GroupByTarget::Query1),
        ("group_by_q2", condition.group_by_q2, GroupByTarget::Query2),
        ("group_by_both", condition.group_by_both, GroupByTarget::Both),
    ];

    if condition.group_by.is_empty() {
        if flags.iter().any(|(_, set, _)| *set) {
            return Err(ProviderError::Validation(format!(
                "{}: group_by_q1, group_by_q2 and group_by_both require a non-empty group_by",
                BLOCK
            )));
        }
        return Ok(None);
    }
    select_operator(BLOCK, &flags).map(Some)
}

pub fn expand(alert: &RatioAlert, flags: NotificationFlags) -> Result<AlertParts, ProviderError> {
    let c = &alert.condition;
    let less_than = select_operator(
        BLOCK,
        &[("less_than", c.less_than, true), ("more_than", c.more_than, false)],
    )?;
    let target = group_by_target(c)?;
    let grouped = |applies: fn(GroupByTarget) -> bool| match target {
        Some(t) if applies(t) => c.group_by.clone(),
        _ => Vec::new(),
    };

    let mut parameters = proto::ConditionParameters {
        threshold: Some(c.queries_ratio),
        timeframe: TIME_WINDOWS.expand(c.time_window)? as i32,
        group_by: grouped(GroupByTarget::query_1),
        related_extended_data: expand_deadman(
            BLOCK,
            c.manage_undetected_values.as_ref(),
            deadman_applies(less_than, &c.group_by),
        )?,
        ..Default::default()
    };
    flags.apply(&mut parameters);

    let q2 = &alert.query_2;
    let mut filters = expand_filters(&alert.query_1.filters, FilterType::Ratio)?;
    filters.alias = Some(alert.query_1.alias.clone());
    filters.ratio_alerts = vec![alert_filters::RatioAlert {
        alias: Some(q2.alias.clone()),
        text: q2.search_query.clone(),
        severities: expand_enums(&*LOG_SEVERITIES, &q2.severities)?,
        applications: q2.applications.clone(),
        subsystems: q2.subsystems.clone(),
        group_by: grouped(GroupByTarget::query_2),
    }];

    Ok(AlertParts::new(filters, threshold_condition(less_than, parameters)))
}

pub fn flatten(alert: &proto::Alert) -> Result<RatioAlert, ProviderError> {
    let wire_filters = alert_filters(alert)?;
    let (less_than, parameters) = match alert_condition(alert) {
        Some(Condition::LessThan(c)) => (true, required_parameters(BLOCK, &c.parameters)?),
        Some(Condition::MoreThan(c)) => (false, required_parameters(BLOCK, &c.parameters)?),
        other => return Err(unexpected_condition("ratio", other)),
    };

    let mut query_1 = RatioQuery1 {
        filters: flatten_filters(wire_filters)?,
        ..Default::default()
    };
    if let Some(alias) = wire_string(&wire_filters.alias) {
        query_1.alias = alias;
    }

    let wire_q2 = wire_filters.ratio_alerts.first().cloned().unwrap_or_default();
    let mut query_2 = RatioQuery2 {
        search_query: wire_string(&wire_q2.text),
        severities: flatten_enums(&*LOG_SEVERITIES, &wire_q2.severities)?,
        applications: wire_q2.applications.clone(),
        subsystems: wire_q2.subsystems.clone(),
        ..Default::default()
    };
    if let Some(alias) = wire_string(&wire_q2.alias) {
        query_2.alias = alias;
    }

    let q1_group_by = &parameters.group_by;
    let q2_group_by = &wire_q2.group_by;
    let (group_by, target) = match (q1_group_by.is_empty(), q2_group_by.is_empty()) {
        (false, false) => (q1_group_by.clone(), Some(GroupByTarget::Both)),
        (false, true) => (q1_group_by.clone(), Some(GroupByTarget::Query1)),
        (true, false) => (q2_group_by.clone(), Some(GroupByTarget::Query2)),
        (true, true) => (Vec::new(), None),
    };

    let condition = RatioCondition {
        less_than,
        more_than: !less_than,
        queries_ratio: parameters.threshold.unwrap_or_default(),
        time_window: flatten_time_window(&*TIME_WINDOWS, parameters.timeframe)?,
        group_by_q1: target == Some(GroupByTarget::Query1),
        group_by_q2: target == Some(GroupByTarget::Query2),
        group_by_both: target == Some(GroupByTarget::Both),
        manage_undetected_values: flatten_deadman_if(
            deadman_applies(less_than, &group_by),
            parameters,
        )?,
        group_by,
    };

    Ok(RatioAlert {
        query_1,
        query_2,
        condition,
    })
}
