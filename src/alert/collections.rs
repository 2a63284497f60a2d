//! Conversions between configuration collections and repeated wire fields.
//!
//! Sets flatten into `BTreeSet`s, so wire order never leaks into state.
//! Lists keep wire order.

use std::collections::BTreeSet;
use std::hash::Hash;

use super::lookup::{wire_enum, Lookup};
use super::model::MetaLabel;
use crate::error::ProviderError;
use crate::generated as proto;

/// A set of strings as a repeated wire field, in sorted order.
pub fn set_to_repeated(set: &BTreeSet<String>) -> Vec<String> {
    set.iter().cloned().collect()
}

/// A repeated wire field as a set. Duplicates collapse.
pub fn repeated_to_set(values: &[String]) -> BTreeSet<String> {
    values.iter().cloned().collect()
}

/// Expand every token of a collection through `table` into raw wire values.
pub fn expand_enums<'a, S, W, I>(table: &Lookup<S, W>, tokens: I) -> Result<Vec<i32>, ProviderError>
where
    S: Copy + Eq + Hash + std::fmt::Debug + 'a,
    W: Copy + Eq + Hash + std::fmt::Debug + Into<i32>,
    I: IntoIterator<Item = &'a S>,
{
    tokens
        .into_iter()
        .map(|token| table.expand(*token).map(Into::into))
        .collect()
}

/// Flatten raw wire values through `table`, collecting into any container.
pub fn flatten_enums<S, W, C>(table: &Lookup<S, W>, values: &[i32]) -> Result<C, ProviderError>
where
    S: Copy + Eq + Hash + std::fmt::Debug,
    W: Copy + Eq + Hash + std::fmt::Debug + TryFrom<i32>,
    C: FromIterator<S>,
{
    values
        .iter()
        .map(|raw| {
            let wire: W = wire_enum(table.domain(), *raw)?;
            table.flatten(&wire)
        })
        .collect()
}

pub fn expand_meta_labels(labels: &BTreeSet<MetaLabel>) -> Vec<proto::MetaLabel> {
    labels
        .iter()
        .map(|label| proto::MetaLabel {
            key: Some(label.key.clone()),
            value: Some(label.value.clone()),
        })
        .collect()
}

pub fn flatten_meta_labels(labels: &[proto::MetaLabel]) -> BTreeSet<MetaLabel> {
    labels
        .iter()
        .map(|label| MetaLabel {
            key: label.key.clone().unwrap_or_default(),
            value: label.value.clone().unwrap_or_default(),
        })
        .collect()
}

/// `Some` for a non-empty string, `None` otherwise.
pub fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// An optional wire string, dropping the empty string.
pub fn wire_string(value: &Option<String>) -> Option<String> {
    value.as_deref().and_then(non_empty)
}

/// The first element of a repeated field, required by single-key conditions.
pub fn first_required<'a>(values: &'a [String], what: &str) -> Result<&'a String, ProviderError> {
    values.first().ok_or_else(|| {
        ProviderError::Validation(format!("backend alert has no {}", what))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::lookup::{LogSeverity, LOG_SEVERITIES};
    use crate::generated::alert_filters::LogSeverity as WireLogSeverity;

    #[test]
    fn test_set_conversion_is_order_free() {
        let a = repeated_to_set(&["b".to_string(), "a".to_string(), "b".to_string()]);
        let b = repeated_to_set(&["a".to_string(), "b".to_string()]);
        assert_eq!(a, b);
        assert_eq!(set_to_repeated(&a), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_enum_collections() {
        let tokens: BTreeSet<LogSeverity> = [LogSeverity::Error, LogSeverity::Debug].into_iter().collect();
        let wire = expand_enums(&*LOG_SEVERITIES, &tokens).unwrap();
        assert_eq!(
            wire,
            vec![WireLogSeverity::DebugOrUnspecified as i32, WireLogSeverity::Error as i32]
        );

        let back: BTreeSet<LogSeverity> = flatten_enums(&*LOG_SEVERITIES, &wire).unwrap();
        assert_eq!(back, tokens);

        let ordered: Vec<LogSeverity> =
            flatten_enums(&*LOG_SEVERITIES, &[4, 0]).unwrap();
        assert_eq!(ordered, vec![LogSeverity::Error, LogSeverity::Debug]);

        let err = flatten_enums::<_, _, Vec<LogSeverity>>(&*LOG_SEVERITIES, &[42]).unwrap_err();
        assert!(err.to_string().contains("42"));
    }

    #[test]
    fn test_meta_labels() {
        let labels: BTreeSet<MetaLabel> = [
            MetaLabel { key: "team".into(), value: "sre".into() },
            MetaLabel { key: "env".into(), value: "prod".into() },
        ]
        .into_iter()
        .collect();

        let mut wire = expand_meta_labels(&labels);
        wire.reverse();
        assert_eq!(flatten_meta_labels(&wire), labels);
    }

    #[test]
    fn test_string_helpers() {
        assert_eq!(non_empty(""), None);
        assert_eq!(non_empty("x"), Some("x".to_string()));
        assert_eq!(wire_string(&Some(String::new())), None);
        assert!(first_required(&[], "group-by key").is_err());
        assert_eq!(first_required(&["k".to_string()], "group-by key").unwrap(), "k");
    }
}
