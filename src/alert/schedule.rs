//! Weekly activity windows between a user time zone and GMT.
//!
//! The backend stores schedules GMT-anchored. A window written in `UTC+u`
//! moves its start hour by `-u`; when that crosses midnight every enabled day
//! moves with it. Only hours shift: minutes are the same in every whole-hour
//! offset.

use std::collections::BTreeSet;

use super::lookup::{wire_enum, DayOfWeek, DAYS_OF_WEEK};
use super::model::{Scheduling, TimeFrame, TimeOfDay, UtcOffset};
use crate::error::ProviderError;
use crate::generated as proto;

/// A GMT-anchored hour plus the number of days the shift rolled over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftedHour {
    pub hour: u8,
    /// Day offset in `0..7`, applied modulo 7 to each day of the week.
    pub day_offset: i32,
}

/// Shift a user-local hour into GMT.
pub fn hour_to_gmt(hour: u8, offset: UtcOffset) -> ShiftedHour {
    shift(i32::from(hour) - offset.hours())
}

/// Shift a GMT hour into the user's offset.
pub fn hour_from_gmt(hour: u8, offset: UtcOffset) -> ShiftedHour {
    shift(i32::from(hour) + offset.hours())
}

fn shift(sum: i32) -> ShiftedHour {
    ShiftedHour {
        hour: sum.rem_euclid(24) as u8,
        day_offset: sum.div_euclid(24).rem_euclid(7),
    }
}

/// Move a day of the week by `offset` days, wrapping around Sunday.
pub fn shift_day(day: proto::DayOfWeek, offset: i32) -> Result<proto::DayOfWeek, ProviderError> {
    wire_enum("day of week", (day as i32 + offset).rem_euclid(7))
}

fn shift_time(time: TimeOfDay, hour: u8) -> proto::Time {
    proto::Time {
        hours: i32::from(hour),
        minutes: i32::from(time.minute()),
        seconds: 0,
    }
}

fn wire_time_of_day(time: Option<&proto::Time>) -> Result<TimeOfDay, ProviderError> {
    let time = time.ok_or_else(|| {
        ProviderError::Validation("scheduled time range is missing a bound".to_string())
    })?;
    let hour = u8::try_from(time.hours)
        .map_err(|_| ProviderError::unknown_token("hour", time.hours))?;
    let minute = u8::try_from(time.minutes)
        .map_err(|_| ProviderError::unknown_token("minute", time.minutes))?;
    TimeOfDay::new(hour, minute)
}

/// Expand one user-local time frame into a GMT wire time frame.
pub fn expand_time_frame(
    frame: &TimeFrame,
    offset: UtcOffset,
) -> Result<proto::AlertActiveTimeframe, ProviderError> {
    let start = hour_to_gmt(frame.start_time.hour(), offset);
    let end = hour_to_gmt(frame.end_time.hour(), offset);

    let days_of_week = frame
        .days_enabled
        .iter()
        .map(|day| {
            let wire = DAYS_OF_WEEK.expand(*day)?;
            Ok(shift_day(wire, start.day_offset)? as i32)
        })
        .collect::<Result<Vec<_>, ProviderError>>()?;

    Ok(proto::AlertActiveTimeframe {
        days_of_week,
        range: Some(proto::TimeRange {
            start: Some(shift_time(frame.start_time, start.hour)),
            end: Some(shift_time(frame.end_time, end.hour)),
        }),
    })
}

/// Flatten one GMT wire time frame into the user's offset.
///
/// The day offset is taken from the start hour, mirroring [`expand_time_frame`].
pub fn flatten_time_frame(
    frame: &proto::AlertActiveTimeframe,
    offset: UtcOffset,
) -> Result<TimeFrame, ProviderError> {
    let range = frame.range.as_ref();
    let gmt_start = wire_time_of_day(range.and_then(|r| r.start.as_ref()))?;
    let gmt_end = wire_time_of_day(range.and_then(|r| r.end.as_ref()))?;

    let start = hour_from_gmt(gmt_start.hour(), offset);
    let end = hour_from_gmt(gmt_end.hour(), offset);

    let days_enabled = frame
        .days_of_week
        .iter()
        .map(|raw| {
            let wire: proto::DayOfWeek = wire_enum("day of week", *raw)?;
            DAYS_OF_WEEK.flatten(&shift_day(wire, start.day_offset)?)
        })
        .collect::<Result<BTreeSet<DayOfWeek>, ProviderError>>()?;

    Ok(TimeFrame {
        days_enabled,
        start_time: TimeOfDay::new(start.hour, gmt_start.minute())?,
        end_time: TimeOfDay::new(end.hour, gmt_end.minute())?,
    })
}

/// Expand a schedule. Every time frame is translated independently.
pub fn expand_scheduling(scheduling: &Scheduling) -> Result<proto::AlertActiveWhen, ProviderError> {
    let timeframes = scheduling
        .time_frames
        .iter()
        .map(|frame| expand_time_frame(frame, scheduling.time_zone))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(proto::AlertActiveWhen { timeframes })
}

/// Flatten a wire schedule into `time_zone`. An empty schedule is `None`.
pub fn flatten_scheduling(
    active_when: Option<&proto::AlertActiveWhen>,
    time_zone: UtcOffset,
) -> Result<Option<Scheduling>, ProviderError> {
    let Some(active_when) = active_when.filter(|a| !a.timeframes.is_empty()) else {
        return Ok(None);
    };

    let time_frames = active_when
        .timeframes
        .iter()
        .map(|frame| flatten_time_frame(frame, time_zone))
        .collect::<Result<BTreeSet<_>, _>>()?;

    Ok(Some(Scheduling {
        time_zone,
        time_frames,
    }))
}
