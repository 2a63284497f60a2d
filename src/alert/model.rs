//! Typed configuration of a `coralogix_alert` resource.
//!
//! This is the shape users write and the shape persisted as state. Sets of
//! scalars and sets of blocks (meta labels, time frames) are `BTreeSet`s so
//! that two configurations listing the same members in a different order
//! compare equal; lists keep their order.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::lookup::{
    ArithmeticOperator, DayOfWeek, DeadmanRatio, FlowOperator, LogSeverity, MetricTimeWindow,
    NewValueTimeWindow, RelativeTimeWindow, Severity, TimeWindow, TracingField, TracingOperator,
    UniqueCountTimeWindow,
};
use crate::error::ProviderError;

lazy_static! {
    static ref TIME_OF_DAY_RE: Regex =
        Regex::new(r"^(0\d|1\d|2[0-3]):([0-5]\d)$").expect("Is a valid regex");
}

fn default_true() -> bool {
    true
}

fn is_false(value: &bool) -> bool {
    !*value
}

fn default_query_1_alias() -> String {
    "Query 1".to_string()
}

fn default_query_2_alias() -> String {
    "Query 2".to_string()
}

/// Root of an alert resource configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlertConfig {
    /// Backend identifier, set once the alert exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default = "default_true")]
    pub enabled: bool,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub severity: Severity,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub meta_labels: BTreeSet<MetaLabel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<ExpirationDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification: Option<Notification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduling: Option<Scheduling>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard: Option<StandardAlert>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratio: Option<RatioAlert>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_value: Option<NewValueAlert>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_count: Option<UniqueCountAlert>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_relative: Option<TimeRelativeAlert>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric: Option<MetricAlert>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracing: Option<TracingAlert>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flow: Option<FlowAlert>,
}

/// The eight alert kinds, owned.
#[derive(Debug, Clone, PartialEq)]
pub enum AlertType {
    Standard(StandardAlert),
    Ratio(RatioAlert),
    NewValue(NewValueAlert),
    UniqueCount(UniqueCountAlert),
    TimeRelative(TimeRelativeAlert),
    Metric(MetricAlert),
    Tracing(TracingAlert),
    Flow(FlowAlert),
}

/// The populated alert-type block of an [`AlertConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AlertTypeRef<'a> {
    Standard(&'a StandardAlert),
    Ratio(&'a RatioAlert),
    NewValue(&'a NewValueAlert),
    UniqueCount(&'a UniqueCountAlert),
    TimeRelative(&'a TimeRelativeAlert),
    Metric(&'a MetricAlert),
    Tracing(&'a TracingAlert),
    Flow(&'a FlowAlert),
}

/// Names of the alert-type blocks, in schema order.
pub const ALERT_TYPE_NAMES: [&str; 8] = [
    "standard",
    "ratio",
    "new_value",
    "unique_count",
    "time_relative",
    "metric",
    "tracing",
    "flow",
];

impl AlertTypeRef<'_> {
    /// Name of the configuration block.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Standard(_) => "standard",
            Self::Ratio(_) => "ratio",
            Self::NewValue(_) => "new_value",
            Self::UniqueCount(_) => "unique_count",
            Self::TimeRelative(_) => "time_relative",
            Self::Metric(_) => "metric",
            Self::Tracing(_) => "tracing",
            Self::Flow(_) => "flow",
        }
    }
}

impl AlertType {
    /// Name of the configuration block.
    pub fn name(&self) -> &'static str {
        self.as_ref().name()
    }

    /// Borrow as an [`AlertTypeRef`].
    pub fn as_ref(&self) -> AlertTypeRef<'_> {
        match self {
            Self::Standard(a) => AlertTypeRef::Standard(a),
            Self::Ratio(a) => AlertTypeRef::Ratio(a),
            Self::NewValue(a) => AlertTypeRef::NewValue(a),
            Self::UniqueCount(a) => AlertTypeRef::UniqueCount(a),
            Self::TimeRelative(a) => AlertTypeRef::TimeRelative(a),
            Self::Metric(a) => AlertTypeRef::Metric(a),
            Self::Tracing(a) => AlertTypeRef::Tracing(a),
            Self::Flow(a) => AlertTypeRef::Flow(a),
        }
    }
}

impl AlertConfig {
    /// A configuration with the given type block and every optional field unset.
    pub fn new(name: impl Into<String>, severity: Severity, alert_type: AlertType) -> Self {
        let mut config = Self {
            id: None,
            enabled: true,
            name: name.into(),
            description: String::new(),
            severity,
            meta_labels: BTreeSet::new(),
            expiration_date: None,
            notification: None,
            scheduling: None,
            standard: None,
            ratio: None,
            new_value: None,
            unique_count: None,
            time_relative: None,
            metric: None,
            tracing: None,
            flow: None,
        };
        config.set_alert_type(alert_type);
        config
    }

    /// Names of every populated alert-type block.
    pub fn populated_alert_types(&self) -> Vec<&'static str> {
        let present = [
            self.standard.is_some(),
            self.ratio.is_some(),
            self.new_value.is_some(),
            self.unique_count.is_some(),
            self.time_relative.is_some(),
            self.metric.is_some(),
            self.tracing.is_some(),
            self.flow.is_some(),
        ];
        ALERT_TYPE_NAMES
            .iter()
            .zip(present)
            .filter_map(|(name, set)| set.then_some(*name))
            .collect()
    }

    /// The single populated alert-type block.
    pub fn alert_type(&self) -> Result<AlertTypeRef<'_>, ProviderError> {
        let mut present = [
            self.standard.as_ref().map(AlertTypeRef::Standard),
            self.ratio.as_ref().map(AlertTypeRef::Ratio),
            self.new_value.as_ref().map(AlertTypeRef::NewValue),
            self.unique_count.as_ref().map(AlertTypeRef::UniqueCount),
            self.time_relative.as_ref().map(AlertTypeRef::TimeRelative),
            self.metric.as_ref().map(AlertTypeRef::Metric),
            self.tracing.as_ref().map(AlertTypeRef::Tracing),
            self.flow.as_ref().map(AlertTypeRef::Flow),
        ]
        .into_iter()
        .flatten();

        match (present.next(), present.next()) {
            (Some(kind), None) => Ok(kind),
            _ => Err(ProviderError::Validation(format!(
                "exactly one of {} must be set, found [{}]",
                ALERT_TYPE_NAMES.join(", "),
                self.populated_alert_types().join(", ")
            ))),
        }
    }

    /// Replace the alert-type block, clearing the other seven.
    pub fn set_alert_type(&mut self, alert_type: AlertType) {
        self.standard = None;
        self.ratio = None;
        self.new_value = None;
        self.unique_count = None;
        self.time_relative = None;
        self.metric = None;
        self.tracing = None;
        self.flow = None;

        match alert_type {
            AlertType::Standard(a) => self.standard = Some(a),
            AlertType::Ratio(a) => self.ratio = Some(a),
            AlertType::NewValue(a) => self.new_value = Some(a),
            AlertType::UniqueCount(a) => self.unique_count = Some(a),
            AlertType::TimeRelative(a) => self.time_relative = Some(a),
            AlertType::Metric(a) => self.metric = Some(a),
            AlertType::Tracing(a) => self.tracing = Some(a),
            AlertType::Flow(a) => self.flow = Some(a),
        }
    }

    /// Time zone the schedule is written in, `UTC+0` when unscheduled.
    pub fn time_zone(&self) -> UtcOffset {
        self.scheduling
            .as_ref()
            .map(|s| s.time_zone)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MetaLabel {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpirationDate {
    pub day: u32,
    pub month: u32,
    pub year: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_trigger_and_resolved: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_infinity: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notify_only_on_triggered_group_by_values: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipients: Option<Recipients>,
    /// Minimal re-notification interval, in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notify_every_min: Option<u32>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub payload_fields: BTreeSet<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recipients {
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub emails: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub webhooks: BTreeSet<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scheduling {
    #[serde(default)]
    pub time_zone: UtcOffset,
    pub time_frames: BTreeSet<TimeFrame>,
}

/// A weekly activity window, written in the schedule's time zone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimeFrame {
    pub days_enabled: BTreeSet<DayOfWeek>,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
}

/// Hours east of GMT, `UTC-11` through `UTC+14`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UtcOffset(i32);

impl UtcOffset {
    pub const MIN: i32 = -11;
    pub const MAX: i32 = 14;

    pub fn new(hours: i32) -> Result<Self, ProviderError> {
        if (Self::MIN..=Self::MAX).contains(&hours) {
            Ok(Self(hours))
        } else {
            Err(ProviderError::Validation(format!(
                "time zone offset {} is outside UTC{}..UTC+{}",
                hours,
                Self::MIN,
                Self::MAX
            )))
        }
    }

    pub fn hours(&self) -> i32 {
        self.0
    }
}

impl FromStr for UtcOffset {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let offset = s
            .split_once("UTC")
            .filter(|(prefix, _)| prefix.is_empty())
            .map(|(_, rest)| rest)
            .ok_or_else(|| ProviderError::unknown_token("time zone", s))?;
        let hours = offset
            .parse::<i32>()
            .map_err(|_| ProviderError::unknown_token("time zone", s))?;
        Self::new(hours)
    }
}

impl TryFrom<String> for UtcOffset {
    type Error = ProviderError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            write!(f, "UTC{}", self.0)
        } else {
            write!(f, "UTC+{}", self.0)
        }
    }
}

impl From<UtcOffset> for String {
    fn from(offset: UtcOffset) -> Self {
        offset.to_string()
    }
}

/// Wall-clock time as `"HH:MM"`. A bare integer hour is accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawTimeOfDay", into = "String")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimeOfDay {
    Hour(u8),
    Text(String),
}

impl TimeOfDay {
    pub fn new(hour: u8, minute: u8) -> Result<Self, ProviderError> {
        if hour < 24 && minute < 60 {
            Ok(Self { hour, minute })
        } else {
            Err(ProviderError::Validation(format!(
                "{}:{} is not a time of day",
                hour, minute
            )))
        }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }
}

impl FromStr for TimeOfDay {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = TIME_OF_DAY_RE.captures(s).ok_or_else(|| {
            ProviderError::Validation(format!("{:?} is not a time in HH:MM format", s))
        })?;
        // Both groups are two ASCII digits after the regex match.
        let hour = caps[1].parse().unwrap_or_default();
        let minute = caps[2].parse().unwrap_or_default();
        Self::new(hour, minute)
    }
}

impl TryFrom<RawTimeOfDay> for TimeOfDay {
    type Error = ProviderError;

    fn try_from(raw: RawTimeOfDay) -> Result<Self, Self::Error> {
        match raw {
            RawTimeOfDay::Hour(hour) => Self::new(hour, 0),
            RawTimeOfDay::Text(text) => text.parse(),
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}

/// Search text, severities and metadata shared by the log-based alert kinds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommonFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_query: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub severities: BTreeSet<LogSeverity>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub applications: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub subsystems: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub categories: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub computers: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub classes: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub methods: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub ip_addresses: BTreeSet<String>,
}

/// Auto-resolution of group values that stop reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManageUndetectedValues {
    #[serde(default = "default_true")]
    pub enable_triggering_on_undetected_values: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_retire_ratio: Option<DeadmanRatio>,
}

impl Default for ManageUndetectedValues {
    fn default() -> Self {
        Self {
            enable_triggering_on_undetected_values: true,
            auto_retire_ratio: Some(DeadmanRatio::Never),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardAlert {
    #[serde(flatten)]
    pub filters: CommonFilters,
    pub condition: StandardCondition,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StandardCondition {
    #[serde(default, skip_serializing_if = "is_false")]
    pub immediately: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub less_than: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub more_than: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub more_than_usual: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occurrences_threshold: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_window: Option<TimeWindow>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub group_by: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_by_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manage_undetected_values: Option<ManageUndetectedValues>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioAlert {
    pub query_1: RatioQuery1,
    pub query_2: RatioQuery2,
    pub condition: RatioCondition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioQuery1 {
    #[serde(default = "default_query_1_alias")]
    pub alias: String,
    #[serde(flatten)]
    pub filters: CommonFilters,
}

impl Default for RatioQuery1 {
    fn default() -> Self {
        Self {
            alias: default_query_1_alias(),
            filters: CommonFilters::default(),
        }
    }
}

/// The second ratio query. Unlike the first, its collections are ordered lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioQuery2 {
    #[serde(default = "default_query_2_alias")]
    pub alias: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_query: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub severities: Vec<LogSeverity>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub applications: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subsystems: Vec<String>,
}

impl Default for RatioQuery2 {
    fn default() -> Self {
        Self {
            alias: default_query_2_alias(),
            search_query: None,
            severities: Vec::new(),
            applications: Vec::new(),
            subsystems: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioCondition {
    #[serde(default, skip_serializing_if = "is_false")]
    pub less_than: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub more_than: bool,
    pub queries_ratio: f64,
    pub time_window: TimeWindow,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub group_by: Vec<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub group_by_q1: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub group_by_q2: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub group_by_both: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manage_undetected_values: Option<ManageUndetectedValues>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewValueAlert {
    #[serde(flatten)]
    pub filters: CommonFilters,
    pub condition: NewValueCondition,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewValueCondition {
    pub key_to_track: String,
    pub time_window: NewValueTimeWindow,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniqueCountAlert {
    #[serde(flatten)]
    pub filters: CommonFilters,
    pub condition: UniqueCountCondition,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniqueCountCondition {
    pub unique_count_key: String,
    pub max_unique_values: u32,
    pub time_window: UniqueCountTimeWindow,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_by_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_unique_values_for_group_by: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeRelativeAlert {
    #[serde(flatten)]
    pub filters: CommonFilters,
    pub condition: TimeRelativeCondition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeRelativeCondition {
    #[serde(default, skip_serializing_if = "is_false")]
    pub less_than: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub more_than: bool,
    pub ratio_threshold: f64,
    pub relative_time_window: RelativeTimeWindow,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub group_by: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manage_undetected_values: Option<ManageUndetectedValues>,
}

/// A metric alert, written either as lucene or as promql.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricAlert {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lucene: Option<LuceneMetric>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promql: Option<PromqlMetric>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LuceneMetric {
    pub search_query: String,
    pub condition: LuceneCondition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LuceneCondition {
    pub metric_field: String,
    pub arithmetic_operator: ArithmeticOperator,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arithmetic_operator_modifier: Option<u32>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub less_than: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub more_than: bool,
    pub threshold: f64,
    pub sample_threshold_percentage: u32,
    pub time_window: MetricTimeWindow,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub group_by: Vec<String>,
    #[serde(default)]
    pub replace_missing_value_with_zero: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_non_null_values_percentage: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manage_undetected_values: Option<ManageUndetectedValues>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromqlMetric {
    pub search_query: String,
    pub condition: PromqlCondition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromqlCondition {
    #[serde(default, skip_serializing_if = "is_false")]
    pub less_than: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub more_than: bool,
    pub threshold: f64,
    pub sample_threshold_percentage: u32,
    pub time_window: MetricTimeWindow,
    #[serde(default)]
    pub replace_missing_value_with_zero: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_non_null_values_percentage: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TracingAlert {
    #[serde(flatten)]
    pub filters: CommonFilters,
    #[serde(default)]
    pub latency_threshold_ms: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tag_filters: Vec<TagFilter>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub field_filters: Vec<FieldFilter>,
    pub condition: TracingCondition,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagFilter {
    pub field: String,
    pub filters: Vec<FilterValues>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldFilter {
    pub field: TracingField,
    pub filters: Vec<FilterValues>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterValues {
    pub values: Vec<String>,
    pub operator: TracingOperator,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TracingCondition {
    #[serde(default, skip_serializing_if = "is_false")]
    pub immediately: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub more_than: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occurrences_threshold: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_window: Option<TimeWindow>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub group_by: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowAlert {
    pub stages: Vec<FlowStage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowStage {
    pub groups: Vec<FlowGroup>,
    pub time_window: FlowTimeWindow,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowGroup {
    pub sub_alerts: Vec<SubAlert>,
    pub operator: FlowOperator,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubAlert {
    #[serde(default)]
    pub not: bool,
    pub user_alert_id: String,
}

/// Duration a flow stage waits for its groups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowTimeWindow {
    #[serde(default)]
    pub hours: u32,
    #[serde(default)]
    pub minutes: u32,
    #[serde(default)]
    pub seconds: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn standard() -> AlertType {
        AlertType::Standard(StandardAlert {
            filters: CommonFilters::default(),
            condition: StandardCondition {
                immediately: true,
                ..Default::default()
            },
        })
    }

    #[test]
    fn test_deserialize_minimal_standard() {
        let config: AlertConfig = serde_json::from_value(json!({
            "name": "errors",
            "severity": "Critical",
            "standard": {
                "applications": ["api", "web"],
                "condition": {"more_than": true, "occurrences_threshold": 5, "time_window": "10Min", "group_by": ["app"]}
            }
        }))
        .unwrap();

        assert!(config.enabled);
        assert_eq!(config.severity, Severity::Critical);
        let kind = config.alert_type().unwrap();
        assert_eq!(kind.name(), "standard");
        let standard = config.standard.as_ref().unwrap();
        assert!(standard.filters.applications.contains("web"));
        assert_eq!(standard.condition.time_window, Some(TimeWindow::TenMinutes));
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let result = serde_json::from_value::<AlertConfig>(json!({
            "name": "x",
            "severity": "Info",
            "standrd": {}
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_exactly_one_alert_type() {
        let mut config = AlertConfig::new("x", Severity::Info, standard());
        assert!(config.alert_type().is_ok());

        config.flow = Some(FlowAlert { stages: vec![] });
        let err = config.alert_type().unwrap_err();
        assert!(err.message().contains("found [standard, flow]"));

        config.standard = None;
        assert!(matches!(config.alert_type(), Ok(AlertTypeRef::Flow(_))));

        config.flow = None;
        assert!(config.alert_type().is_err());
    }

    #[test]
    fn test_set_alert_type_clears_others() {
        let mut config = AlertConfig::new("x", Severity::Info, standard());
        config.set_alert_type(AlertType::Flow(FlowAlert { stages: vec![] }));
        assert_eq!(config.populated_alert_types(), vec!["flow"]);
    }

    #[test]
    fn test_utc_offset_parsing() {
        assert_eq!("UTC+3".parse::<UtcOffset>().unwrap().hours(), 3);
        assert_eq!("UTC-11".parse::<UtcOffset>().unwrap().hours(), -11);
        assert_eq!("UTC+0".parse::<UtcOffset>().unwrap(), UtcOffset::default());
        assert!("UTC+15".parse::<UtcOffset>().is_err());
        assert!("GMT+1".parse::<UtcOffset>().is_err());
        assert!("UTC".parse::<UtcOffset>().is_err());

        assert_eq!(UtcOffset::new(-5).unwrap().to_string(), "UTC-5");
        assert_eq!(UtcOffset::new(14).unwrap().to_string(), "UTC+14");
    }

    #[test]
    fn test_time_of_day_forms() {
        let t: TimeOfDay = serde_json::from_value(json!("08:30")).unwrap();
        assert_eq!((t.hour(), t.minute()), (8, 30));

        let t: TimeOfDay = serde_json::from_value(json!(22)).unwrap();
        assert_eq!(serde_json::to_value(t).unwrap(), json!("22:00"));

        assert!(serde_json::from_value::<TimeOfDay>(json!("24:00")).is_err());
        assert!(serde_json::from_value::<TimeOfDay>(json!("7:00")).is_err());
        assert!(serde_json::from_value::<TimeOfDay>(json!(25)).is_err());
    }

    #[test]
    fn test_time_frames_compare_as_sets() {
        let a: Scheduling = serde_json::from_value(json!({
            "time_frames": [{"days_enabled": ["Monday", "Friday"], "start_time": "08:00", "end_time": "18:00"}]
        }))
        .unwrap();
        let b: Scheduling = serde_json::from_value(json!({
            "time_zone": "UTC+0",
            "time_frames": [{"days_enabled": ["Friday", "Monday", "Friday"], "start_time": 8, "end_time": "18:00"}]
        }))
        .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_ratio_aliases_default() {
        let ratio: RatioAlert = serde_json::from_value(json!({
            "query_1": {},
            "query_2": {"severities": ["Error", "Debug"]},
            "condition": {"more_than": true, "queries_ratio": 2.5, "time_window": "1H"}
        }))
        .unwrap();
        assert_eq!(ratio.query_1.alias, "Query 1");
        assert_eq!(ratio.query_2.alias, "Query 2");
        assert_eq!(
            ratio.query_2.severities,
            vec![LogSeverity::Error, LogSeverity::Debug]
        );
    }
}
