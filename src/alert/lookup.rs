//! Token tables between configuration enums and wire enumerations.
//!
//! Every enumerated configuration domain is a closed Rust enum whose serde
//! names are the user-facing tokens (`"5Min"`, `"Critical"`, ...). Each
//! domain has a [`Lookup`] table built once on first use; the reverse
//! direction is computed by inverting the forward pairs. A miss in either
//! direction is an [`ProviderError::UnknownToken`], never a zero value.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::error::ProviderError;
use crate::generated as proto;
use crate::generated::alert_filters::LogSeverity as WireLogSeverity;
use crate::generated::metric_alert_condition_parameters::ArithmeticOperator as WireArithmeticOperator;

macro_rules! schema_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $token:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $token)]
                $variant,
            )+
        }

        impl $name {
            /// Every token of the domain, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The configuration token.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $token,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = ProviderError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($token => Ok($name::$variant),)+
                    _ => Err(ProviderError::unknown_token(stringify!($name), s)),
                }
            }
        }
    };
}

schema_enum! {
    /// Alert severity.
    pub enum Severity {
        Info => "Info",
        Warning => "Warning",
        Critical => "Critical",
        Error => "Error",
    }
}

schema_enum! {
    /// Severity of the log lines an alert filters on.
    pub enum LogSeverity {
        Debug => "Debug",
        Verbose => "Verbose",
        Info => "Info",
        Warning => "Warning",
        Error => "Error",
        Critical => "Critical",
    }
}

schema_enum! {
    /// Day of the week, Monday first.
    pub enum DayOfWeek {
        Monday => "Monday",
        Tuesday => "Tuesday",
        Wednesday => "Wednesday",
        Thursday => "Thursday",
        Friday => "Friday",
        Saturday => "Saturday",
        Sunday => "Sunday",
    }
}

schema_enum! {
    /// Evaluation window of standard, ratio and tracing alerts.
    pub enum TimeWindow {
        FiveMinutes => "5Min",
        TenMinutes => "10Min",
        FifteenMinutes => "15Min",
        TwentyMinutes => "20Min",
        ThirtyMinutes => "30Min",
        OneHour => "1H",
        TwoHours => "2H",
        FourHours => "4H",
        SixHours => "6H",
        TwelveHours => "12H",
        TwentyFourHours => "24H",
        ThirtySixHours => "36H",
    }
}

schema_enum! {
    /// Evaluation window of unique-count alerts.
    pub enum UniqueCountTimeWindow {
        TenMinutes => "10Min",
        FifteenMinutes => "15Min",
        TwentyMinutes => "20Min",
        ThirtyMinutes => "30Min",
        OneHour => "1H",
        TwoHours => "2H",
        FourHours => "4H",
        SixHours => "6H",
        TwelveHours => "12H",
        TwentyFourHours => "24H",
    }
}

schema_enum! {
    /// Window in which a new-value alert remembers previously seen values.
    pub enum NewValueTimeWindow {
        TwelveHours => "12H",
        TwentyFourHours => "24H",
        FortyEightHours => "48H",
        SeventyTwoHours => "72H",
        OneWeek => "1W",
        OneMonth => "1Month",
        TwoMonths => "2Month",
        ThreeMonths => "3Month",
    }
}

schema_enum! {
    /// Evaluation window of metric alerts.
    pub enum MetricTimeWindow {
        OneMinute => "1Min",
        FiveMinutes => "5Min",
        TenMinutes => "10Min",
        FifteenMinutes => "15Min",
        TwentyMinutes => "20Min",
        ThirtyMinutes => "30Min",
        OneHour => "1H",
        TwoHours => "2H",
        FourHours => "4H",
        SixHours => "6H",
        TwelveHours => "12H",
        TwentyFourHours => "24H",
    }
}

schema_enum! {
    /// The compared pair of windows of a time-relative alert.
    pub enum RelativeTimeWindow {
        PreviousHour => "Previous_hour",
        SameHourYesterday => "Same_hour_yesterday",
        SameHourLastWeek => "Same_hour_last_week",
        Yesterday => "Yesterday",
        SameDayLastWeek => "Same_day_last_week",
        SameDayLastMonth => "Same_day_last_month",
    }
}

schema_enum! {
    /// Aggregation applied to a lucene metric field.
    pub enum ArithmeticOperator {
        Avg => "Avg",
        Min => "Min",
        Max => "Max",
        Sum => "Sum",
        Count => "Count",
        Percentile => "Percentile",
    }
}

schema_enum! {
    /// Match operator of a tracing filter.
    pub enum TracingOperator {
        Equals => "Equals",
        Contains => "Contains",
        StartsWith => "Start_with",
        EndsWith => "End_with",
    }
}

schema_enum! {
    /// Span field a tracing field filter applies to.
    pub enum TracingField {
        Application => "Application",
        Subsystem => "Subsystem",
        Service => "Service",
    }
}

schema_enum! {
    /// Delay after which an undetected group value auto-resolves.
    pub enum DeadmanRatio {
        Never => "Never",
        FiveMinutes => "5Min",
        TenMinutes => "10Min",
        OneHour => "1H",
        TwoHours => "2H",
        SixHours => "6H",
        TwelveHours => "12H",
        TwentyFourHours => "24H",
    }
}

schema_enum! {
    /// Boolean operator joining flow groups.
    pub enum FlowOperator {
        And => "AND",
        Or => "OR",
    }
}

/// A bidirectional token table for one enumerated domain.
#[derive(Debug)]
pub struct Lookup<S, W> {
    domain: &'static str,
    forward: HashMap<S, W>,
    reverse: HashMap<W, S>,
}

impl<S, W> Lookup<S, W>
where
    S: Copy + Eq + Hash + Debug,
    W: Copy + Eq + Hash + Debug,
{
    /// Build a table from its forward pairs.
    pub fn new(domain: &'static str, pairs: &[(S, W)]) -> Self {
        let forward: HashMap<S, W> = pairs.iter().copied().collect();
        let reverse = invert(&forward);
        Self {
            domain,
            forward,
            reverse,
        }
    }

    /// Name of the domain, used in error messages.
    pub fn domain(&self) -> &'static str {
        self.domain
    }

    /// Map a configuration token to its wire value.
    pub fn expand(&self, token: S) -> Result<W, ProviderError> {
        self.forward
            .get(&token)
            .copied()
            .ok_or_else(|| ProviderError::unknown_token(self.domain, token))
    }

    /// Map a wire value back to its configuration token.
    pub fn flatten<Q>(&self, wire: &Q) -> Result<S, ProviderError>
    where
        W: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        self.reverse
            .get(wire)
            .copied()
            .ok_or_else(|| ProviderError::unknown_token(self.domain, wire))
    }

    /// True when no two tokens share a wire value.
    pub fn is_injective(&self) -> bool {
        self.forward.len() == self.reverse.len()
    }

    /// Number of tokens in the domain.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

/// Invert a forward map. Colliding values keep an arbitrary key, which
/// [`Lookup::is_injective`] detects.
pub fn invert<S, W>(forward: &HashMap<S, W>) -> HashMap<W, S>
where
    S: Copy,
    W: Copy + Eq + Hash,
{
    forward.iter().map(|(s, w)| (*w, *s)).collect()
}

/// Decode a raw wire enumeration value.
pub fn wire_enum<E>(domain: &'static str, value: i32) -> Result<E, ProviderError>
where
    E: TryFrom<i32>,
{
    E::try_from(value).map_err(|_| ProviderError::unknown_token(domain, value))
}

lazy_static! {
    /// Alert severity.
    pub static ref SEVERITIES: Lookup<Severity, proto::AlertSeverity> = Lookup::new(
        "severity",
        &[
            (Severity::Info, proto::AlertSeverity::InfoOrUnspecified),
            (Severity::Warning, proto::AlertSeverity::Warning),
            (Severity::Critical, proto::AlertSeverity::Critical),
            (Severity::Error, proto::AlertSeverity::Error),
        ],
    );

    /// Log line severity.
    pub static ref LOG_SEVERITIES: Lookup<LogSeverity, WireLogSeverity> = Lookup::new(
        "log severity",
        &[
            (LogSeverity::Debug, WireLogSeverity::DebugOrUnspecified),
            (LogSeverity::Verbose, WireLogSeverity::Verbose),
            (LogSeverity::Info, WireLogSeverity::Info),
            (LogSeverity::Warning, WireLogSeverity::Warning),
            (LogSeverity::Error, WireLogSeverity::Error),
            (LogSeverity::Critical, WireLogSeverity::Critical),
        ],
    );

    /// Day of week.
    pub static ref DAYS_OF_WEEK: Lookup<DayOfWeek, proto::DayOfWeek> = Lookup::new(
        "day of week",
        &[
            (DayOfWeek::Monday, proto::DayOfWeek::MondayOrUnspecified),
            (DayOfWeek::Tuesday, proto::DayOfWeek::Tuesday),
            (DayOfWeek::Wednesday, proto::DayOfWeek::Wednesday),
            (DayOfWeek::Thursday, proto::DayOfWeek::Thursday),
            (DayOfWeek::Friday, proto::DayOfWeek::Friday),
            (DayOfWeek::Saturday, proto::DayOfWeek::Saturday),
            (DayOfWeek::Sunday, proto::DayOfWeek::Sunday),
        ],
    );

    /// Standard, ratio and tracing windows.
    pub static ref TIME_WINDOWS: Lookup<TimeWindow, proto::Timeframe> = Lookup::new(
        "time window",
        &[
            (TimeWindow::FiveMinutes, proto::Timeframe::Timeframe5MinOrUnspecified),
            (TimeWindow::TenMinutes, proto::Timeframe::Timeframe10Min),
            (TimeWindow::FifteenMinutes, proto::Timeframe::Timeframe15Min),
            (TimeWindow::TwentyMinutes, proto::Timeframe::Timeframe20Min),
            (TimeWindow::ThirtyMinutes, proto::Timeframe::Timeframe30Min),
            (TimeWindow::OneHour, proto::Timeframe::Timeframe1H),
            (TimeWindow::TwoHours, proto::Timeframe::Timeframe2H),
            (TimeWindow::FourHours, proto::Timeframe::Timeframe4H),
            (TimeWindow::SixHours, proto::Timeframe::Timeframe6H),
            (TimeWindow::TwelveHours, proto::Timeframe::Timeframe12H),
            (TimeWindow::TwentyFourHours, proto::Timeframe::Timeframe24H),
            (TimeWindow::ThirtySixHours, proto::Timeframe::Timeframe36H),
        ],
    );

    /// Unique-count windows.
    pub static ref UNIQUE_COUNT_TIME_WINDOWS: Lookup<UniqueCountTimeWindow, proto::Timeframe> =
        Lookup::new(
            "unique count time window",
            &[
                (UniqueCountTimeWindow::TenMinutes, proto::Timeframe::Timeframe10Min),
                (UniqueCountTimeWindow::FifteenMinutes, proto::Timeframe::Timeframe15Min),
                (UniqueCountTimeWindow::TwentyMinutes, proto::Timeframe::Timeframe20Min),
                (UniqueCountTimeWindow::ThirtyMinutes, proto::Timeframe::Timeframe30Min),
                (UniqueCountTimeWindow::OneHour, proto::Timeframe::Timeframe1H),
                (UniqueCountTimeWindow::TwoHours, proto::Timeframe::Timeframe2H),
                (UniqueCountTimeWindow::FourHours, proto::Timeframe::Timeframe4H),
                (UniqueCountTimeWindow::SixHours, proto::Timeframe::Timeframe6H),
                (UniqueCountTimeWindow::TwelveHours, proto::Timeframe::Timeframe12H),
                (UniqueCountTimeWindow::TwentyFourHours, proto::Timeframe::Timeframe24H),
            ],
        );

    /// New-value windows.
    pub static ref NEW_VALUE_TIME_WINDOWS: Lookup<NewValueTimeWindow, proto::Timeframe> =
        Lookup::new(
            "new value time window",
            &[
                (NewValueTimeWindow::TwelveHours, proto::Timeframe::Timeframe12H),
                (NewValueTimeWindow::TwentyFourHours, proto::Timeframe::Timeframe24H),
                (NewValueTimeWindow::FortyEightHours, proto::Timeframe::Timeframe48H),
                (NewValueTimeWindow::SeventyTwoHours, proto::Timeframe::Timeframe72H),
                (NewValueTimeWindow::OneWeek, proto::Timeframe::Timeframe1W),
                (NewValueTimeWindow::OneMonth, proto::Timeframe::Timeframe1M),
                (NewValueTimeWindow::TwoMonths, proto::Timeframe::Timeframe2M),
                (NewValueTimeWindow::ThreeMonths, proto::Timeframe::Timeframe3M),
            ],
        );

    /// Metric windows.
    pub static ref METRIC_TIME_WINDOWS: Lookup<MetricTimeWindow, proto::Timeframe> = Lookup::new(
        "metric time window",
        &[
            (MetricTimeWindow::OneMinute, proto::Timeframe::Timeframe1Min),
            (MetricTimeWindow::FiveMinutes, proto::Timeframe::Timeframe5MinOrUnspecified),
            (MetricTimeWindow::TenMinutes, proto::Timeframe::Timeframe10Min),
            (MetricTimeWindow::FifteenMinutes, proto::Timeframe::Timeframe15Min),
            (MetricTimeWindow::TwentyMinutes, proto::Timeframe::Timeframe20Min),
            (MetricTimeWindow::ThirtyMinutes, proto::Timeframe::Timeframe30Min),
            (MetricTimeWindow::OneHour, proto::Timeframe::Timeframe1H),
            (MetricTimeWindow::TwoHours, proto::Timeframe::Timeframe2H),
            (MetricTimeWindow::FourHours, proto::Timeframe::Timeframe4H),
            (MetricTimeWindow::SixHours, proto::Timeframe::Timeframe6H),
            (MetricTimeWindow::TwelveHours, proto::Timeframe::Timeframe12H),
            (MetricTimeWindow::TwentyFourHours, proto::Timeframe::Timeframe24H),
        ],
    );

    /// Time-relative window pairs, keyed by the composite wire value.
    pub static ref RELATIVE_TIME_WINDOWS: Lookup<
        RelativeTimeWindow,
        (proto::Timeframe, proto::RelativeTimeframe),
    > = Lookup::new(
        "relative time window",
        &[
            (
                RelativeTimeWindow::PreviousHour,
                (proto::Timeframe::Timeframe1H, proto::RelativeTimeframe::HourOrUnspecified),
            ),
            (
                RelativeTimeWindow::SameHourYesterday,
                (proto::Timeframe::Timeframe1H, proto::RelativeTimeframe::Day),
            ),
            (
                RelativeTimeWindow::SameHourLastWeek,
                (proto::Timeframe::Timeframe1H, proto::RelativeTimeframe::Week),
            ),
            (
                RelativeTimeWindow::Yesterday,
                (proto::Timeframe::Timeframe24H, proto::RelativeTimeframe::Day),
            ),
            (
                RelativeTimeWindow::SameDayLastWeek,
                (proto::Timeframe::Timeframe24H, proto::RelativeTimeframe::Week),
            ),
            (
                RelativeTimeWindow::SameDayLastMonth,
                (proto::Timeframe::Timeframe24H, proto::RelativeTimeframe::Month),
            ),
        ],
    );

    /// Lucene metric aggregations.
    pub static ref ARITHMETIC_OPERATORS: Lookup<ArithmeticOperator, WireArithmeticOperator> =
        Lookup::new(
            "arithmetic operator",
            &[
                (ArithmeticOperator::Avg, WireArithmeticOperator::AvgOrUnspecified),
                (ArithmeticOperator::Min, WireArithmeticOperator::Min),
                (ArithmeticOperator::Max, WireArithmeticOperator::Max),
                (ArithmeticOperator::Sum, WireArithmeticOperator::Sum),
                (ArithmeticOperator::Count, WireArithmeticOperator::Count),
                (ArithmeticOperator::Percentile, WireArithmeticOperator::Percentile),
            ],
        );

    /// Tracing filter operators, as wire strings.
    pub static ref TRACING_OPERATORS: Lookup<TracingOperator, &'static str> = Lookup::new(
        "tracing operator",
        &[
            (TracingOperator::Equals, "equals"),
            (TracingOperator::Contains, "contains"),
            (TracingOperator::StartsWith, "startsWith"),
            (TracingOperator::EndsWith, "endsWith"),
        ],
    );

    /// Tracing field names, as wire strings.
    pub static ref TRACING_FIELDS: Lookup<TracingField, &'static str> = Lookup::new(
        "tracing field",
        &[
            (TracingField::Application, "applicationName"),
            (TracingField::Subsystem, "subsystemName"),
            (TracingField::Service, "serviceName"),
        ],
    );

    /// Auto-retire delays of undetected values.
    pub static ref DEADMAN_RATIOS: Lookup<DeadmanRatio, proto::CleanupDeadmanDuration> =
        Lookup::new(
            "deadman ratio",
            &[
                (DeadmanRatio::Never, proto::CleanupDeadmanDuration::NeverOrUnspecified),
                (DeadmanRatio::FiveMinutes, proto::CleanupDeadmanDuration::CleanupDeadmanDuration5min),
                (DeadmanRatio::TenMinutes, proto::CleanupDeadmanDuration::CleanupDeadmanDuration10min),
                (DeadmanRatio::OneHour, proto::CleanupDeadmanDuration::CleanupDeadmanDuration1h),
                (DeadmanRatio::TwoHours, proto::CleanupDeadmanDuration::CleanupDeadmanDuration2h),
                (DeadmanRatio::SixHours, proto::CleanupDeadmanDuration::CleanupDeadmanDuration6h),
                (DeadmanRatio::TwelveHours, proto::CleanupDeadmanDuration::CleanupDeadmanDuration12h),
                (
                    DeadmanRatio::TwentyFourHours,
                    proto::CleanupDeadmanDuration::CleanupDeadmanDuration24h,
                ),
            ],
        );

    /// Flow group operators.
    pub static ref FLOW_OPERATORS: Lookup<FlowOperator, proto::FlowOperator> = Lookup::new(
        "flow operator",
        &[
            (FlowOperator::And, proto::FlowOperator::And),
            (FlowOperator::Or, proto::FlowOperator::Or),
        ],
    );
}
