use super::*;
use crate::core::entries::insert_unique;
use crate::core::timestamp::epoch_seconds_option;
use crate::core::validation::{Constraint, Pattern, StringRule, Validate, Validator};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Stamped {
    #[serde(
        default,
        with = "epoch_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    at: Option<DateTime<Utc>>,
}

#[test]
fn test_epoch_seconds_integer() {
    let stamped: Stamped = serde_json::from_value(json!({ "at": 1700000000 })).unwrap();
    assert_eq!(
        stamped.at,
        Some(Utc.with_ymd_and_hms(2023, 11, 14, 22, 13, 20).unwrap())
    );
    assert_eq!(serde_json::to_value(&stamped).unwrap(), json!({ "at": 1700000000 }));
}

#[test]
fn test_epoch_seconds_fractional() {
    let stamped: Stamped = serde_json::from_value(json!({ "at": 1700000000.25 })).unwrap();
    let at = stamped.at.unwrap();
    assert_eq!(at.timestamp_millis(), 1_700_000_000_250);
    assert_eq!(serde_json::to_value(&stamped).unwrap(), json!({ "at": 1700000000.25 }));
}

#[test]
fn test_epoch_seconds_absent_and_null() {
    let missing: Stamped = serde_json::from_value(json!({})).unwrap();
    assert_eq!(missing.at, None);
    let null: Stamped = serde_json::from_value(json!({ "at": null })).unwrap();
    assert_eq!(null.at, None);
    assert_eq!(serde_json::to_value(&missing).unwrap(), json!({}));
}

#[test]
fn test_epoch_seconds_rejects_strings() {
    let result = serde_json::from_value::<Stamped>(json!({ "at": "2023-11-14" }));
    assert!(result.is_err());
}

#[test]
fn test_insert_unique_keeps_first_value() {
    let mut map = None;
    insert_unique(&mut map, "ClientMetadata", "k".into(), "v1".into()).unwrap();
    let err = insert_unique(&mut map, "ClientMetadata", "k".into(), "v2".into()).unwrap_err();

    assert_eq!(err.field(), "ClientMetadata");
    assert_eq!(err.key(), "k");
    assert_eq!(err.to_string(), "duplicate key `k` in `ClientMetadata`");

    let expected = BTreeMap::from([("k".to_string(), "v1".to_string())]);
    assert_eq!(map, Some(expected));
}

static SHORT: StringRule = StringRule::new(2, 4);
static SECRET: StringRule = StringRule::new(8, 16).sensitive();

struct Inner {
    name: Option<String>,
}

impl Validate for Inner {
    fn check(&self, validator: &mut Validator) {
        validator.required_string("Name", self.name.as_deref(), &SHORT);
    }
}

struct Outer {
    token: Option<String>,
    count: Option<i64>,
    items: Vec<Inner>,
}

impl Validate for Outer {
    fn check(&self, validator: &mut Validator) {
        validator.string("Token", self.token.as_deref(), &SECRET);
        validator.range("Count", self.count, 1, 10);
        validator.each("Items", &self.items);
    }
}

#[test]
fn test_validator_collects_every_violation() {
    let outer = Outer {
        token: Some("short".to_string()),
        count: Some(11),
        items: vec![
            Inner {
                name: Some("ok".to_string()),
            },
            Inner { name: None },
            Inner {
                name: Some("too long".to_string()),
            },
        ],
    };

    let errors = outer.validate().unwrap_err();
    assert_eq!(errors.len(), 4);

    let token = errors.find("Token").unwrap();
    assert_eq!(token.constraint(), &Constraint::Length { min: 8, max: 16 });
    assert_eq!(token.value(), Some(REDACTED));

    let count = errors.find("Count").unwrap();
    assert_eq!(count.constraint(), &Constraint::Range { min: 1, max: 10 });
    assert_eq!(count.value(), Some("11"));

    assert_eq!(
        errors.find("Items[1].Name").unwrap().constraint(),
        &Constraint::Required
    );
    assert_eq!(
        errors.find("Items[2].Name").unwrap().value(),
        Some("too long")
    );
}

#[test]
fn test_validator_accepts_valid_value() {
    let outer = Outer {
        token: None,
        count: Some(10),
        items: vec![Inner {
            name: Some("abcd".to_string()),
        }],
    };
    assert!(outer.validate().is_ok());
}

#[test]
fn test_validation_error_display() {
    let mut validator = Validator::new();
    validator.range("MinimumLength", Some(4), 6, 99);
    let errors = validator.finish().unwrap_err();
    assert_eq!(
        errors.to_string(),
        "1 constraint violation(s): MinimumLength must be between 6 and 99 (got \"4\")"
    );
}

#[test]
fn test_length_counts_characters() {
    let mut validator = Validator::new();
    validator.string("Name", Some("ñøå"), &SHORT);
    assert!(validator.finish().is_ok());
}

static CLIENT_NAME: Pattern = Pattern::new(r"[\w\s+=,.@-]+");
static PRINTABLE: Pattern = Pattern::new(r"[\p{L}\p{N}]+");

#[test]
fn test_pattern_shorthand_classes_are_ascii() {
    assert!(CLIENT_NAME.is_match("web app_2.0"));
    assert!(CLIENT_NAME.is_match("tab\there"));
    assert!(!CLIENT_NAME.is_match("naïve"));
    assert!(!CLIENT_NAME.is_match("web\u{00A0}app"));
    assert!(!CLIENT_NAME.is_match("web app!"));
    assert_eq!(CLIENT_NAME.source(), r"[\w\s+=,.@-]+");

    assert!(PRINTABLE.is_match("naïve"));
    assert!(!PRINTABLE.is_match(""));
}

#[test]
fn test_pattern_violation_reports_documented_source() {
    static RULE: StringRule = StringRule::new(1, 10).with_pattern(&CLIENT_NAME);
    let mut validator = Validator::new();
    validator.string("ClientName", Some("a#b"), &RULE);
    let errors = validator.finish().unwrap_err();
    assert_eq!(
        errors.find("ClientName").unwrap().constraint(),
        &Constraint::Pattern(r"[\w\s+=,.@-]+".to_string())
    );
}

#[test]
fn test_service_error_code() {
    let response: ServiceErrorResponse = serde_json::from_value(json!({
        "__type": "com.amazonaws.cognito#UserNotFoundException",
        "message": "User does not exist."
    }))
    .unwrap();
    assert_eq!(response.code(), "UserNotFoundException");
    assert_eq!(
        response.display_message(),
        "UserNotFoundException: User does not exist."
    );

    let response: ServiceErrorResponse = serde_json::from_value(json!({
        "__type": "InvalidParameterException:http://internal.amazon.com/",
        "Message": "bad"
    }))
    .unwrap();
    assert_eq!(response.code(), "InvalidParameterException");
    assert_eq!(response.message.as_deref(), Some("bad"));
}

#[test]
fn test_service_error_code_missing() {
    let response: ServiceErrorResponse = serde_json::from_value(json!({})).unwrap();
    assert_eq!(response.code(), "Unknown");
    assert_eq!(response.display_message(), "Unknown: no message");
}
