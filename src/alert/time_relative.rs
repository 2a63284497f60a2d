//! Time-relative alerts: compare the current window with an earlier one.
//!
//! The window is a single configuration token that maps to a
//! (timeframe, relative timeframe) pair on the wire.

use super::common::{
    alert_condition, alert_filters, deadman_applies, expand_deadman, expand_filters,
    flatten_deadman_if, flatten_filters, required_parameters, select_operator,
    threshold_condition, unexpected_condition, AlertParts, NotificationFlags,
};
use super::lookup::{wire_enum, RELATIVE_TIME_WINDOWS};
use super::model::{TimeRelativeAlert, TimeRelativeCondition};
use crate::error::ProviderError;
use crate::generated as proto;
use crate::generated::alert_condition::Condition;
use crate::generated::alert_filters::FilterType;

const BLOCK: &str = "time_relative.condition";

pub fn expand(
    alert: &TimeRelativeAlert,
    flags: NotificationFlags,
) -> Result<AlertParts, ProviderError> {
    let c = &alert.condition;
    let less_than = select_operator(
        BLOCK,
        &[("less_than", c.less_than, true), ("more_than", c.more_than, false)],
    )?;
    let (timeframe, relative_timeframe) = RELATIVE_TIME_WINDOWS.expand(c.relative_time_window)?;

    let mut parameters = proto::ConditionParameters {
        threshold: Some(c.ratio_threshold),
        timeframe: timeframe as i32,
        relative_timeframe: relative_timeframe as i32,
        group_by: c.group_by.clone(),
        related_extended_data: expand_deadman(
            BLOCK,
            c.manage_undetected_values.as_ref(),
            deadman_applies(less_than, &c.group_by),
        )?,
        ..Default::default()
    };
    flags.apply(&mut parameters);

    Ok(AlertParts::new(
        expand_filters(&alert.filters, FilterType::TimeRelative)?,
        threshold_condition(less_than, parameters),
    ))
}

pub fn flatten(alert: &proto::Alert) -> Result<TimeRelativeAlert, ProviderError> {
    let filters = flatten_filters(alert_filters(alert)?)?;
    let (less_than, parameters) = match alert_condition(alert) {
        Some(Condition::LessThan(c)) => (true, required_parameters(BLOCK, &c.parameters)?),
        Some(Condition::MoreThan(c)) => (false, required_parameters(BLOCK, &c.parameters)?),
        other => return Err(unexpected_condition("time_relative", other)),
    };

    let domain = RELATIVE_TIME_WINDOWS.domain();
    let pair: (proto::Timeframe, proto::RelativeTimeframe) = (
        wire_enum(domain, parameters.timeframe)?,
        wire_enum(domain, parameters.relative_timeframe)?,
    );

    Ok(TimeRelativeAlert {
        filters,
        condition: TimeRelativeCondition {
            less_than,
            more_than: !less_than,
            ratio_threshold: parameters.threshold.unwrap_or_default(),
            relative_time_window: RELATIVE_TIME_WINDOWS.flatten(&pair)?,
            group_by: parameters.group_by.clone(),
            manage_undetected_values: flatten_deadman_if(
                deadman_applies(less_than, &parameters.group_by),
                parameters,
            )?,
        },
    })
}
