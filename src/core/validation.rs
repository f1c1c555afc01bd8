//! Client-side constraint checking.
//!
//! Every model type implements [`Validate`]. Checking walks the whole value
//! and collects one [`ValidationError`] per violated constraint, so a single
//! call reports everything that the service would reject.

use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

use super::REDACTED;

/// The kind of constraint a value failed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Constraint {
    /// The member must be present.
    Required,
    /// The member must be present because of the value of a sibling member.
    RequiredWhen(&'static str),
    /// Character count must fall within `min..=max`.
    Length { min: usize, max: usize },
    /// The whole value must match the pattern.
    Pattern(String),
    /// Numeric value must fall within `min..=max`.
    Range { min: i64, max: i64 },
    /// Collection size must fall within `min..=max`.
    ItemCount { min: usize, max: usize },
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Required => f.write_str("is required"),
            Constraint::RequiredWhen(condition) => write!(f, "is required when {condition}"),
            Constraint::Length { min, max } => {
                write!(f, "length must be between {min} and {max}")
            }
            Constraint::Pattern(pattern) => write!(f, "must match pattern {pattern}"),
            Constraint::Range { min, max } => write!(f, "must be between {min} and {max}"),
            Constraint::ItemCount { min, max } => {
                write!(f, "must contain between {min} and {max} items")
            }
        }
    }
}

/// One violated constraint.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
#[error("{field} {constraint}{}", observed(.value))]
pub struct ValidationError {
    field: String,
    constraint: Constraint,
    value: Option<String>,
}

fn observed(value: &Option<String>) -> String {
    match value {
        Some(value) => format!(" (got {value:?})"),
        None => String::new(),
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, constraint: Constraint, value: Option<String>) -> Self {
        Self {
            field: field.into(),
            constraint,
            value,
        }
    }

    /// Dotted wire path of the offending member, e.g. `ContextData.HttpHeaders[0].headerName`.
    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn constraint(&self) -> &Constraint {
        &self.constraint
    }

    /// The observed value, redacted for sensitive members.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

/// All constraint violations found in one value.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
#[error("{} constraint violation(s): {}", .0.len(), join(.0))]
pub struct ValidationErrors(Vec<ValidationError>);

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First violation reported for `field`.
    pub fn find(&self, field: &str) -> Option<&ValidationError> {
        self.0.iter().find(|error| error.field == field)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Length, pattern and sensitivity rules for a string member.
#[derive(Debug, Clone, Copy)]
pub struct StringRule {
    min: usize,
    max: usize,
    pattern: Option<&'static Pattern>,
    sensitive: bool,
}

impl StringRule {
    pub const fn new(min: usize, max: usize) -> Self {
        Self {
            min,
            max,
            pattern: None,
            sensitive: false,
        }
    }

    pub const fn with_pattern(mut self, pattern: &'static Pattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Observed values are redacted from reported errors.
    pub const fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    pub fn is_sensitive(&self) -> bool {
        self.sensitive
    }
}

/// A documented value pattern, compiled on first use.
///
/// `\w`, `\s` and `\S` keep their ASCII meaning from the API reference;
/// `\p{..}` classes stay Unicode.
#[derive(Debug)]
pub struct Pattern {
    source: &'static str,
    compiled: OnceLock<Regex>,
}

impl Pattern {
    pub const fn new(source: &'static str) -> Self {
        Self {
            source,
            compiled: OnceLock::new(),
        }
    }

    /// The pattern as documented, without anchors.
    pub fn source(&self) -> &'static str {
        self.source
    }

    /// Whether the entire value matches.
    pub fn is_match(&self, value: &str) -> bool {
        self.compiled
            .get_or_init(|| anchored(&ascii_shorthand(self.source)))
            .is_match(value)
    }
}

/// Only called with literal patterns from this crate.
fn anchored(pattern: &str) -> Regex {
    Regex::new(&format!("^(?:{pattern})$")).expect("constraint pattern is a valid regex")
}

/// Rewrites `\w`, `\s` and `\S` as ASCII classes. Nested classes keep the
/// rewrite valid inside brackets too.
fn ascii_shorthand(source: &str) -> String {
    let mut rewritten = String::with_capacity(source.len() + 16);
    let mut chars = source.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            rewritten.push(c);
            continue;
        }
        match chars.next() {
            Some('w') => rewritten.push_str("[[:word:]]"),
            Some('s') => rewritten.push_str("[[:space:]]"),
            Some('S') => rewritten.push_str("[^[:space:]]"),
            Some(other) => {
                rewritten.push('\\');
                rewritten.push(other);
            }
            None => rewritten.push('\\'),
        }
    }
    rewritten
}

/// Types whose documented constraints can be checked locally.
pub trait Validate {
    /// Records every violation in `validator`.
    fn check(&self, validator: &mut Validator);

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut validator = Validator::new();
        self.check(&mut validator);
        validator.finish()
    }
}

impl<T: Validate + ?Sized> Validate for Box<T> {
    fn check(&self, validator: &mut Validator) {
        (**self).check(validator)
    }
}

/// Collects violations while walking a value.
#[derive(Debug, Default)]
pub struct Validator {
    path: Vec<String>,
    errors: Vec<ValidationError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    fn qualify(&self, field: &str) -> String {
        if self.path.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", self.path.join("."), field)
        }
    }

    pub fn violation(
        &mut self,
        field: &str,
        constraint: Constraint,
        observed: Option<&str>,
        sensitive: bool,
    ) {
        let value = observed.map(|value| {
            if sensitive {
                REDACTED.to_string()
            } else {
                value.to_string()
            }
        });
        let field = self.qualify(field);
        self.errors.push(ValidationError::new(field, constraint, value));
    }

    /// Records [`Constraint::Required`] when `value` is absent; returns whether it is present.
    pub fn required<T: ?Sized>(&mut self, field: &str, value: Option<&T>) -> bool {
        if value.is_none() {
            self.violation(field, Constraint::Required, None, false);
        }
        value.is_some()
    }

    /// Records [`Constraint::RequiredWhen`] when `value` is absent.
    pub fn required_when<T: ?Sized>(
        &mut self,
        field: &str,
        value: Option<&T>,
        condition: &'static str,
    ) {
        if value.is_none() {
            self.violation(field, Constraint::RequiredWhen(condition), None, false);
        }
    }

    /// Checks an optional string member against `rule`.
    pub fn string(&mut self, field: &str, value: Option<&str>, rule: &StringRule) {
        let Some(value) = value else {
            return;
        };
        let length = value.chars().count();
        if length < rule.min || length > rule.max {
            self.violation(
                field,
                Constraint::Length {
                    min: rule.min,
                    max: rule.max,
                },
                Some(value),
                rule.sensitive,
            );
        }
        if let Some(pattern) = rule.pattern {
            if !pattern.is_match(value) {
                self.violation(
                    field,
                    Constraint::Pattern(pattern.source().to_string()),
                    Some(value),
                    rule.sensitive,
                );
            }
        }
    }

    pub fn required_string(&mut self, field: &str, value: Option<&str>, rule: &StringRule) {
        if self.required(field, value) {
            self.string(field, value, rule);
        }
    }

    pub fn range(&mut self, field: &str, value: Option<i64>, min: i64, max: i64) {
        if let Some(value) = value {
            if value < min || value > max {
                let observed = value.to_string();
                self.violation(
                    field,
                    Constraint::Range { min, max },
                    Some(&observed),
                    false,
                );
            }
        }
    }

    /// Checks the size of a collection member that is present.
    pub fn item_count(&mut self, field: &str, len: Option<usize>, min: usize, max: usize) {
        if let Some(len) = len {
            if len < min || len > max {
                let observed = len.to_string();
                self.violation(
                    field,
                    Constraint::ItemCount { min, max },
                    Some(&observed),
                    false,
                );
            }
        }
    }

    /// Checks every element of a string list against `rule`.
    pub fn strings(&mut self, field: &str, values: &[String], rule: &StringRule) {
        for (index, value) in values.iter().enumerate() {
            self.string(&format!("{field}[{index}]"), Some(value), rule);
        }
    }

    /// Checks the keys and values of a string map member.
    pub fn map(
        &mut self,
        field: &str,
        map: Option<&BTreeMap<String, String>>,
        key_rule: &StringRule,
        value_rule: &StringRule,
    ) {
        for (key, value) in map.into_iter().flatten() {
            self.string(&format!("{field}.<key>"), Some(key), key_rule);
            self.string(&format!("{field}[{key}]"), Some(value), value_rule);
        }
    }

    /// Descends into a nested member that is present.
    pub fn nested<T: Validate + ?Sized>(&mut self, field: &str, value: Option<&T>) {
        if let Some(value) = value {
            self.path.push(field.to_string());
            value.check(self);
            self.path.pop();
        }
    }

    /// Descends into every element of a list member.
    pub fn each<T: Validate>(&mut self, field: &str, items: &[T]) {
        for (index, item) in items.iter().enumerate() {
            self.nested(&format!("{field}[{index}]"), Some(item));
        }
    }

    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(self.errors))
        }
    }
}
