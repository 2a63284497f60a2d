//! Pre-flight validation of an alert configuration.
//!
//! Everything here runs before any request is sent. Each finding is a
//! [`Diagnostic`] anchored at the offending attribute, so a single pass can
//! report every problem at once.
//!
//! # Example
//!
//! ```
//! use coralogix_provider::alert::model::AlertConfig;
//! use coralogix_provider::validation::validate;
//! use serde_json::json;
//!
//! let config: AlertConfig = serde_json::from_value(json!({
//!     "name": "",
//!     "severity": "Info",
//!     "standard": {"condition": {"immediately": true}}
//! }))
//! .unwrap();
//!
//! let diagnostics = validate(&config);
//! assert_eq!(diagnostics.len(), 1);
//! assert_eq!(diagnostics[0].attribute, Some("name".to_string()));
//! ```

use lazy_static::lazy_static;
use regex::Regex;

use crate::alert::model::{
    AlertConfig, AlertTypeRef, CommonFilters, FilterValues, Notification, Scheduling,
};
use crate::diagnostic::Diagnostic;

lazy_static! {
    static ref META_LABEL_KEY_RE: Regex = Regex::new(r"^[A-Za-z\d_-]*$").expect("Is a valid regex");
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("Is a valid regex");
}

/// Validate an alert configuration. An empty list means it is valid.
pub fn validate(config: &AlertConfig) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    if config.name.trim().is_empty() {
        diagnostics.push(Diagnostic::error("must not be empty").with_attribute("name"));
    }

    for label in &config.meta_labels {
        if !META_LABEL_KEY_RE.is_match(&label.key) {
            diagnostics.push(
                Diagnostic::error("may only contain letters, digits, '_' and '-'")
                    .with_detail(format!("got {:?}", label.key))
                    .with_attribute("meta_labels.key"),
            );
        }
    }

    if let Some(date) = &config.expiration_date {
        check_range(&mut diagnostics, "expiration_date.day", date.day, 1, 31);
        check_range(&mut diagnostics, "expiration_date.month", date.month, 1, 12);
        check_range(&mut diagnostics, "expiration_date.year", date.year, 1, 9999);
    }

    if let Some(scheduling) = &config.scheduling {
        validate_scheduling(scheduling, &mut diagnostics);
    }

    match config.alert_type() {
        Ok(kind) => {
            validate_alert_type(kind, &mut diagnostics);
            if let Some(notification) = &config.notification {
                validate_notification(notification, kind, &mut diagnostics);
            }
        },
        Err(err) => diagnostics.push(Diagnostic::error(err.message().to_string())),
    }

    diagnostics
}

/// Like [`validate`], returning `Err` with the diagnostics when any were found.
pub fn validate_result(config: &AlertConfig) -> Result<(), Vec<Diagnostic>> {
    let diagnostics = validate(config);
    if diagnostics.is_empty() {
        Ok(())
    } else {
        Err(diagnostics)
    }
}

/// Whether a configuration passes validation.
pub fn is_valid(config: &AlertConfig) -> bool {
    validate(config).is_empty()
}

fn check_range(diagnostics: &mut Vec<Diagnostic>, attribute: &str, value: u32, min: u32, max: u32) {
    if !(min..=max).contains(&value) {
        diagnostics.push(
            Diagnostic::error(format!("must be between {} and {}", min, max))
                .with_detail(format!("got {}", value))
                .with_attribute(attribute),
        );
    }
}

fn conflict(diagnostics: &mut Vec<Diagnostic>, attribute: &str, with: &str) {
    diagnostics.push(
        Diagnostic::error(format!("conflicts with {}", with)).with_attribute(attribute),
    );
}

fn required(diagnostics: &mut Vec<Diagnostic>, attribute: &str, with: &str) {
    diagnostics.push(
        Diagnostic::error(format!("is required with {}", with)).with_attribute(attribute),
    );
}

fn validate_search_query(query: Option<&str>, attribute: &str, diagnostics: &mut Vec<Diagnostic>) {
    if let Some(query) = query {
        if let Err(err) = Regex::new(query) {
            diagnostics.push(
                Diagnostic::error("is not a valid regular expression")
                    .with_detail(err.to_string())
                    .with_attribute(attribute),
            );
        }
    }
}

fn validate_filters(filters: &CommonFilters, block: &str, diagnostics: &mut Vec<Diagnostic>) {
    validate_search_query(
        filters.search_query.as_deref(),
        &format!("{}.search_query", block),
        diagnostics,
    );
}

fn validate_scheduling(scheduling: &Scheduling, diagnostics: &mut Vec<Diagnostic>) {
    if scheduling.time_frames.len() != 1 {
        diagnostics.push(
            Diagnostic::error("exactly one time frame is supported")
                .with_detail(format!("got {}", scheduling.time_frames.len()))
                .with_attribute("scheduling.time_frames"),
        );
    }
    if scheduling.time_frames.iter().any(|f| f.days_enabled.is_empty()) {
        diagnostics.push(
            Diagnostic::error("must enable at least one day")
                .with_attribute("scheduling.time_frames.days_enabled"),
        );
    }
}

fn validate_notification(
    notification: &Notification,
    kind: AlertTypeRef<'_>,
    diagnostics: &mut Vec<Diagnostic>,
) {
    if let Some(recipients) = &notification.recipients {
        for email in recipients.emails.iter().filter(|e| !EMAIL_RE.is_match(e)) {
            diagnostics.push(
                Diagnostic::error("is not a valid email address")
                    .with_detail(format!("got {:?}", email))
                    .with_attribute("notification.recipients.emails"),
            );
        }
    }
    if notification.notify_every_min == Some(0) {
        diagnostics.push(
            Diagnostic::error("must be at least 1").with_attribute("notification.notify_every_min"),
        );
    }

    let support = FlagSupport::of(kind);
    let flags = [
        (
            "notification.on_trigger_and_resolved",
            notification.on_trigger_and_resolved.is_some(),
            support.on_trigger_and_resolved,
        ),
        (
            "notification.ignore_infinity",
            notification.ignore_infinity.is_some(),
            support.ignore_infinity,
        ),
        (
            "notification.notify_only_on_triggered_group_by_values",
            notification.notify_only_on_triggered_group_by_values.is_some(),
            support.notify_only_on_triggered_group_by_values,
        ),
    ];
    for (attribute, set, supported) in flags {
        if set && !supported {
            diagnostics.push(
                Diagnostic::error(format!("is not supported by {} alerts", kind.name()))
                    .with_attribute(attribute),
            );
        }
    }
}

/// Which notification flags an alert kind carries in its condition.
struct FlagSupport {
    on_trigger_and_resolved: bool,
    ignore_infinity: bool,
    notify_only_on_triggered_group_by_values: bool,
}

impl FlagSupport {
    fn of(kind: AlertTypeRef<'_>) -> Self {
        let (resolved, infinity, group_by_only) = match kind {
            AlertTypeRef::Standard(a) => {
                let c = &a.condition;
                let thresholded = !c.immediately && !c.more_than_usual;
                (thresholded, false, !c.immediately)
            },
            AlertTypeRef::Ratio(_) => (true, true, true),
            AlertTypeRef::NewValue(_) | AlertTypeRef::UniqueCount(_) | AlertTypeRef::Flow(_) => {
                (false, false, false)
            },
            AlertTypeRef::TimeRelative(_) => (true, true, true),
            AlertTypeRef::Metric(a) => (true, false, a.promql.is_none()),
            AlertTypeRef::Tracing(a) => (!a.condition.immediately, false, false),
        };
        Self {
            on_trigger_and_resolved: resolved,
            ignore_infinity: infinity,
            notify_only_on_triggered_group_by_values: group_by_only,
        }
    }
}

fn validate_alert_type(kind: AlertTypeRef<'_>, diagnostics: &mut Vec<Diagnostic>) {
    match kind {
        AlertTypeRef::Standard(a) => {
            validate_filters(&a.filters, "standard", diagnostics);
            let c = &a.condition;
            let thresholded = c.less_than || c.more_than;
            if thresholded && c.time_window.is_none() {
                required(diagnostics, "standard.condition.time_window", "less_than and more_than");
            }
            if (c.immediately || c.more_than_usual) && c.time_window.is_some() {
                conflict(
                    diagnostics,
                    "standard.condition.time_window",
                    "immediately and more_than_usual",
                );
            }
            if c.immediately && c.occurrences_threshold.is_some() {
                conflict(diagnostics, "standard.condition.occurrences_threshold", "immediately");
            }
            if (c.immediately || c.more_than_usual) && !c.group_by.is_empty() {
                conflict(
                    diagnostics,
                    "standard.condition.group_by",
                    "immediately and more_than_usual",
                );
            }
            if !c.more_than_usual && c.group_by_key.is_some() {
                required(diagnostics, "standard.condition.more_than_usual", "group_by_key");
            }
        },
        AlertTypeRef::Ratio(a) => {
            validate_filters(&a.query_1.filters, "ratio.query_1", diagnostics);
            validate_search_query(
                a.query_2.search_query.as_deref(),
                "ratio.query_2.search_query",
                diagnostics,
            );
        },
        AlertTypeRef::NewValue(a) => {
            validate_filters(&a.filters, "new_value", diagnostics);
            if a.condition.key_to_track.is_empty() {
                diagnostics.push(
                    Diagnostic::error("must not be empty")
                        .with_attribute("new_value.condition.key_to_track"),
                );
            }
        },
        AlertTypeRef::UniqueCount(a) => {
            validate_filters(&a.filters, "unique_count", diagnostics);
            let c = &a.condition;
            check_range(
                diagnostics,
                "unique_count.condition.max_unique_values",
                c.max_unique_values,
                1,
                1000,
            );
            match (&c.group_by_key, c.max_unique_values_for_group_by) {
                (Some(_), None) => required(
                    diagnostics,
                    "unique_count.condition.max_unique_values_for_group_by",
                    "group_by_key",
                ),
                (None, Some(_)) => required(
                    diagnostics,
                    "unique_count.condition.group_by_key",
                    "max_unique_values_for_group_by",
                ),
                _ => {},
            }
        },
        AlertTypeRef::TimeRelative(a) => {
            validate_filters(&a.filters, "time_relative", diagnostics);
        },
        AlertTypeRef::Metric(a) => {
            let (block, percentage, non_null, replace) = match (&a.lucene, &a.promql) {
                (Some(l), None) => (
                    "metric.lucene.condition",
                    l.condition.sample_threshold_percentage,
                    l.condition.min_non_null_values_percentage,
                    l.condition.replace_missing_value_with_zero,
                ),
                (None, Some(p)) => (
                    "metric.promql.condition",
                    p.condition.sample_threshold_percentage,
                    p.condition.min_non_null_values_percentage,
                    p.condition.replace_missing_value_with_zero,
                ),
                _ => {
                    diagnostics.push(
                        Diagnostic::error("exactly one of lucene, promql must be set")
                            .with_attribute("metric"),
                    );
                    return;
                },
            };
            let attribute = format!("{}.sample_threshold_percentage", block);
            check_range(diagnostics, &attribute, percentage, 0, 100);
            if percentage % 10 != 0 {
                diagnostics.push(
                    Diagnostic::error("must be a multiple of 10").with_attribute(attribute),
                );
            }
            if let Some(non_null) = non_null {
                let attribute = format!("{}.min_non_null_values_percentage", block);
                check_range(diagnostics, &attribute, non_null, 0, 100);
                if replace {
                    conflict(diagnostics, &attribute, "replace_missing_value_with_zero");
                }
            }
        },
        AlertTypeRef::Tracing(a) => {
            validate_filters(&a.filters, "tracing", diagnostics);
            if a.latency_threshold_ms < 0.0 {
                diagnostics.push(
                    Diagnostic::error("must not be negative")
                        .with_attribute("tracing.latency_threshold_ms"),
                );
            }
            let c = &a.condition;
            if c.more_than && c.time_window.is_none() {
                required(diagnostics, "tracing.condition.time_window", "more_than");
            }
            if c.immediately && (c.time_window.is_some() || !c.group_by.is_empty()) {
                conflict(diagnostics, "tracing.condition", "immediately");
            }
            let values = a
                .tag_filters
                .iter()
                .flat_map(|t| &t.filters)
                .chain(a.field_filters.iter().flat_map(|f| &f.filters));
            if values.into_iter().any(|f: &FilterValues| f.values.is_empty()) {
                diagnostics.push(
                    Diagnostic::error("must list at least one value")
                        .with_attribute("tracing.filters.values"),
                );
            }
        },
        AlertTypeRef::Flow(a) => {
            if a.stages.is_empty() {
                diagnostics.push(
                    Diagnostic::error("must contain at least one stage").with_attribute("flow.stages"),
                );
            }
            for stage in &a.stages {
                if stage.groups.is_empty() {
                    diagnostics.push(
                        Diagnostic::error("must contain at least one group")
                            .with_attribute("flow.stages.groups"),
                    );
                }
                if stage.groups.iter().any(|g| g.sub_alerts.is_empty()) {
                    diagnostics.push(
                        Diagnostic::error("must reference at least one alert")
                            .with_attribute("flow.stages.groups.sub_alerts"),
                    );
                }
                let ids = stage.groups.iter().flat_map(|g| &g.sub_alerts);
                if ids.into_iter().any(|s| s.user_alert_id.is_empty()) {
                    diagnostics.push(
                        Diagnostic::error("must not be empty")
                            .with_attribute("flow.stages.groups.sub_alerts.user_alert_id"),
                    );
                }
                let window = &stage.time_window;
                if window.minutes >= 60 || window.seconds >= 60 {
                    diagnostics.push(
                        Diagnostic::error("minutes and seconds must be below 60")
                            .with_attribute("flow.stages.time_window"),
                    );
                }
            }
        },
    }
}
