//! Epoch-seconds wire format for timestamps.
//!
//! The service exchanges dates as JSON numbers of seconds since the UNIX
//! epoch, with an optional fractional part. Values are kept to millisecond
//! precision.

use chrono::{DateTime, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serializer};
use std::fmt;

struct EpochSeconds(DateTime<Utc>);

impl<'de> Deserialize<'de> for EpochSeconds {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(EpochSecondsVisitor)
    }
}

struct EpochSecondsVisitor;

impl<'de> Visitor<'de> for EpochSecondsVisitor {
    type Value = EpochSeconds;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("seconds since the UNIX epoch")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        DateTime::from_timestamp(value, 0)
            .map(EpochSeconds)
            .ok_or_else(|| E::custom(format!("timestamp {value} out of range")))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        let seconds = i64::try_from(value)
            .map_err(|_| E::custom(format!("timestamp {value} out of range")))?;
        self.visit_i64(seconds)
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        if !value.is_finite() {
            return Err(E::custom("timestamp is not a finite number"));
        }
        let millis = (value * 1000.0).round() as i64;
        DateTime::from_timestamp_millis(millis)
            .map(EpochSeconds)
            .ok_or_else(|| E::custom(format!("timestamp {value} out of range")))
    }
}

fn serialize_epoch<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    let millis = value.timestamp_millis();
    if millis % 1000 == 0 {
        serializer.serialize_i64(millis / 1000)
    } else {
        serializer.serialize_f64(millis as f64 / 1000.0)
    }
}

/// `#[serde(with = ...)]` adapter for `Option<DateTime<Utc>>` members.
pub(crate) mod epoch_seconds_option {
    use super::*;

    pub(crate) fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => serialize_epoch(value, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        Ok(Option::<EpochSeconds>::deserialize(deserializer)?.map(|epoch| epoch.0))
    }
}
