//! Structures shared by several operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::debug_present;
use crate::core::timestamp::epoch_seconds_option;
use crate::core::validation::{Validate, Validator};
use crate::core::{DebugPresent, REDACTED};
use crate::models::constraints;
use crate::models::{DeliveryMediumType, UserStatusType};

/// A user attribute name/value pair.
#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttributeType {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl AttributeType {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }
}

impl fmt::Debug for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut formatter = f.debug_struct("AttributeType");
        formatter.field("name", &self.name);
        if self.value.is_some() {
            formatter.field("value", &REDACTED);
        }
        formatter.finish()
    }
}

impl Validate for AttributeType {
    fn check(&self, validator: &mut Validator) {
        validator.string("Name", Some(&self.name), &constraints::ATTRIBUTE_NAME);
        validator.string("Value", self.value.as_deref(), &constraints::ATTRIBUTE_VALUE);
    }
}

/// Amazon Pinpoint endpoint used for analytics on authentication calls.
#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AnalyticsMetadataType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics_endpoint_id: Option<String>,
}

debug_present!(AnalyticsMetadataType { analytics_endpoint_id });

impl Validate for AnalyticsMetadataType {
    fn check(&self, _validator: &mut Validator) {}
}

/// One HTTP header observed by the caller's server.
#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpHeader {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_value: Option<String>,
}

debug_present!(HttpHeader { header_name, header_value });

impl HttpHeader {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            header_name: Some(name.into()),
            header_value: Some(value.into()),
        }
    }
}

/// Request context collected by a server-side caller for adaptive authentication.
#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContextDataType {
    pub ip_address: String,
    pub server_name: String,
    pub server_path: String,
    pub http_headers: Vec<HttpHeader>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoded_data: Option<String>,
}

impl fmt::Debug for ContextDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextDataType")
            .field("ip_address", &self.ip_address)
            .field("server_name", &self.server_name)
            .field("server_path", &self.server_path)
            .field("http_headers", &self.http_headers)
            .redacted("encoded_data", &self.encoded_data)
            .finish()
    }
}

impl Validate for ContextDataType {
    fn check(&self, validator: &mut Validator) {
        if self.ip_address.is_empty() {
            validator.required::<str>("IpAddress", None);
        }
        if self.server_name.is_empty() {
            validator.required::<str>("ServerName", None);
        }
        if self.server_path.is_empty() {
            validator.required::<str>("ServerPath", None);
        }
    }
}

/// Device fingerprint collected by a client-side caller.
#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserContextDataType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoded_data: Option<String>,
}

impl fmt::Debug for UserContextDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut formatter = f.debug_struct("UserContextDataType");
        if let Some(ip_address) = &self.ip_address {
            formatter.field("ip_address", ip_address);
        }
        if self.encoded_data.is_some() {
            formatter.field("encoded_data", &REDACTED);
        }
        formatter.finish()
    }
}

impl Validate for UserContextDataType {
    fn check(&self, _validator: &mut Validator) {}
}

/// Device identifiers issued when a new device is remembered.
#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NewDeviceMetadataType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_group_key: Option<String>,
}

debug_present!(NewDeviceMetadataType { device_key, device_group_key });

/// Tokens issued by a completed authentication.
#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AuthenticationResultType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    /// Lifetime of the access token, in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_device_metadata: Option<NewDeviceMetadataType>,
}

impl fmt::Debug for AuthenticationResultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut formatter = f.debug_struct("AuthenticationResultType");
        if self.access_token.is_some() {
            formatter.field("access_token", &REDACTED);
        }
        if let Some(expires_in) = &self.expires_in {
            formatter.field("expires_in", expires_in);
        }
        if let Some(token_type) = &self.token_type {
            formatter.field("token_type", token_type);
        }
        if self.refresh_token.is_some() {
            formatter.field("refresh_token", &REDACTED);
        }
        if self.id_token.is_some() {
            formatter.field("id_token", &REDACTED);
        }
        if let Some(new_device_metadata) = &self.new_device_metadata {
            formatter.field("new_device_metadata", new_device_metadata);
        }
        formatter.finish()
    }
}

/// Legacy SMS MFA setting of a user.
#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MfaOptionType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_medium: Option<DeliveryMediumType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_name: Option<String>,
}

debug_present!(MfaOptionType { delivery_medium, attribute_name });

/// A user as returned by user-management calls.
#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<AttributeType>>,
    #[serde(
        default,
        with = "epoch_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_create_date: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "epoch_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_last_modified_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_status: Option<UserStatusType>,
    #[serde(rename = "MFAOptions", skip_serializing_if = "Option::is_none")]
    pub mfa_options: Option<Vec<MfaOptionType>>,
}

impl UserType {
    /// Value of the attribute called `name`, if the user has one.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .flatten()
            .find(|attribute| attribute.name == name)
            .and_then(|attribute| attribute.value.as_deref())
    }
}

impl fmt::Debug for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut formatter = f.debug_struct("UserType");
        if self.username.is_some() {
            formatter.field("username", &REDACTED);
        }
        if let Some(attributes) = &self.attributes {
            formatter.field("attributes", attributes);
        }
        if let Some(user_create_date) = &self.user_create_date {
            formatter.field("user_create_date", user_create_date);
        }
        if let Some(user_last_modified_date) = &self.user_last_modified_date {
            formatter.field("user_last_modified_date", user_last_modified_date);
        }
        if let Some(enabled) = &self.enabled {
            formatter.field("enabled", enabled);
        }
        if let Some(user_status) = &self.user_status {
            formatter.field("user_status", user_status);
        }
        if let Some(mfa_options) = &self.mfa_options {
            formatter.field("mfa_options", mfa_options);
        }
        formatter.finish()
    }
}
