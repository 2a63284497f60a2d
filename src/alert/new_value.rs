//! New-value alerts: fire when a tracked key shows a value not seen within
//! the window.

use super::collections::first_required;
use super::common::{
    alert_condition, alert_filters, expand_filters, flatten_filters, flatten_time_window,
    required_parameters, unexpected_condition, AlertParts, NotificationFlags,
};
use super::lookup::NEW_VALUE_TIME_WINDOWS;
use super::model::{NewValueAlert, NewValueCondition};
use crate::error::ProviderError;
use crate::generated as proto;
use crate::generated::alert_condition::Condition;
use crate::generated::alert_filters::FilterType;

const BLOCK: &str = "new_value.condition";

pub fn expand(alert: &NewValueAlert, flags: NotificationFlags) -> Result<AlertParts, ProviderError> {
    let c = &alert.condition;
    let mut parameters = proto::ConditionParameters {
        timeframe: NEW_VALUE_TIME_WINDOWS.expand(c.time_window)? as i32,
        group_by: vec![c.key_to_track.clone()],
        ..Default::default()
    };
    flags.apply(&mut parameters);

    Ok(AlertParts::new(
        expand_filters(&alert.filters, FilterType::TextOrUnspecified)?,
        Condition::NewValue(proto::NewValueCondition {
            parameters: Some(parameters),
        }),
    ))
}

pub fn flatten(alert: &proto::Alert) -> Result<NewValueAlert, ProviderError> {
    let filters = flatten_filters(alert_filters(alert)?)?;
    let parameters = match alert_condition(alert) {
        Some(Condition::NewValue(c)) => required_parameters(BLOCK, &c.parameters)?,
        other => return Err(unexpected_condition("new_value", other)),
    };

    Ok(NewValueAlert {
        filters,
        condition: NewValueCondition {
            key_to_track: first_required(&parameters.group_by, "key to track")?.clone(),
            time_window: flatten_time_window(&*NEW_VALUE_TIME_WINDOWS, parameters.timeframe)?,
        },
    })
}
