use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::debug_present;
use crate::core::timestamp::epoch_seconds_option;
use crate::core::validation::{Validate, Validator};
use crate::core::REDACTED;
use crate::models::constraints;
use crate::models::{
    ExplicitAuthFlowsType, OAuthFlowType, PreventUserExistenceErrorTypes, TimeUnitsType,
};

/// Units for the `*TokenValidity` members of an app client.
#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TokenValidityUnitsType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<TimeUnitsType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_token: Option<TimeUnitsType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<TimeUnitsType>,
}

debug_present!(TokenValidityUnitsType { access_token, id_token, refresh_token });

/// Amazon Pinpoint project that receives analytics for an app client.
#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AnalyticsConfigurationType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_data_shared: Option<bool>,
}

debug_present!(AnalyticsConfigurationType {
    application_id,
    application_arn,
    role_arn,
    external_id,
    user_data_shared,
});

impl Validate for AnalyticsConfigurationType {
    fn check(&self, validator: &mut Validator) {
        validator.string(
            "ApplicationId",
            self.application_id.as_deref(),
            &constraints::ANALYTICS_APPLICATION_ID,
        );
        validator.string(
            "ApplicationArn",
            self.application_arn.as_deref(),
            &constraints::ARN,
        );
        validator.string("RoleArn", self.role_arn.as_deref(), &constraints::ARN);
    }
}

/// An app client of a user pool.
#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserPoolClientType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_pool_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    #[serde(
        default,
        with = "epoch_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified_date: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "epoch_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token_validity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token_validity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_token_validity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_validity_units: Option<TokenValidityUnitsType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_attributes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_attributes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explicit_auth_flows: Option<Vec<ExplicitAuthFlowsType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_identity_providers: Option<Vec<String>>,
    #[serde(rename = "CallbackURLs", skip_serializing_if = "Option::is_none")]
    pub callback_urls: Option<Vec<String>>,
    #[serde(rename = "LogoutURLs", skip_serializing_if = "Option::is_none")]
    pub logout_urls: Option<Vec<String>>,
    #[serde(rename = "DefaultRedirectURI", skip_serializing_if = "Option::is_none")]
    pub default_redirect_uri: Option<String>,
    #[serde(rename = "AllowedOAuthFlows", skip_serializing_if = "Option::is_none")]
    pub allowed_oauth_flows: Option<Vec<OAuthFlowType>>,
    #[serde(rename = "AllowedOAuthScopes", skip_serializing_if = "Option::is_none")]
    pub allowed_oauth_scopes: Option<Vec<String>>,
    #[serde(
        rename = "AllowedOAuthFlowsUserPoolClient",
        skip_serializing_if = "Option::is_none"
    )]
    pub allowed_oauth_flows_user_pool_client: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics_configuration: Option<AnalyticsConfigurationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prevent_user_existence_errors: Option<PreventUserExistenceErrorTypes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_token_revocation: Option<bool>,
}

impl Validate for UserPoolClientType {
    fn check(&self, validator: &mut Validator) {
        validator.string(
            "UserPoolId",
            self.user_pool_id.as_deref(),
            &constraints::USER_POOL_ID,
        );
        validator.string(
            "ClientName",
            self.client_name.as_deref(),
            &constraints::CLIENT_NAME,
        );
        validator.string("ClientId", self.client_id.as_deref(), &constraints::CLIENT_ID);
        validator.string(
            "ClientSecret",
            self.client_secret.as_deref(),
            &constraints::CLIENT_SECRET,
        );
        validator.range(
            "RefreshTokenValidity",
            self.refresh_token_validity.map(i64::from),
            0,
            315_360_000,
        );
        validator.range(
            "AccessTokenValidity",
            self.access_token_validity.map(i64::from),
            1,
            86_400,
        );
        validator.range(
            "IdTokenValidity",
            self.id_token_validity.map(i64::from),
            1,
            86_400,
        );
        let urls = [
            ("CallbackURLs", &self.callback_urls),
            ("LogoutURLs", &self.logout_urls),
        ];
        for (field, list) in urls {
            if let Some(list) = list {
                validator.item_count(field, Some(list.len()), 0, 100);
                validator.strings(field, list, &constraints::REDIRECT_URL);
            }
        }
        validator.string(
            "DefaultRedirectURI",
            self.default_redirect_uri.as_deref(),
            &constraints::REDIRECT_URL,
        );
        if let Some(scopes) = &self.allowed_oauth_scopes {
            validator.item_count("AllowedOAuthScopes", Some(scopes.len()), 0, 50);
            validator.strings("AllowedOAuthScopes", scopes, &constraints::SCOPE);
        }
        if let Some(flows) = &self.allowed_oauth_flows {
            validator.item_count("AllowedOAuthFlows", Some(flows.len()), 0, 3);
        }
        validator.nested(
            "AnalyticsConfiguration",
            self.analytics_configuration.as_ref(),
        );
    }
}

impl fmt::Debug for UserPoolClientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut formatter = f.debug_struct("UserPoolClientType");
        if let Some(user_pool_id) = &self.user_pool_id {
            formatter.field("user_pool_id", user_pool_id);
        }
        if let Some(client_name) = &self.client_name {
            formatter.field("client_name", client_name);
        }
        if self.client_id.is_some() {
            formatter.field("client_id", &REDACTED);
        }
        if self.client_secret.is_some() {
            formatter.field("client_secret", &REDACTED);
        }
        if let Some(last_modified_date) = &self.last_modified_date {
            formatter.field("last_modified_date", last_modified_date);
        }
        if let Some(creation_date) = &self.creation_date {
            formatter.field("creation_date", creation_date);
        }
        if let Some(refresh_token_validity) = &self.refresh_token_validity {
            formatter.field("refresh_token_validity", refresh_token_validity);
        }
        if let Some(access_token_validity) = &self.access_token_validity {
            formatter.field("access_token_validity", access_token_validity);
        }
        if let Some(id_token_validity) = &self.id_token_validity {
            formatter.field("id_token_validity", id_token_validity);
        }
        if let Some(token_validity_units) = &self.token_validity_units {
            formatter.field("token_validity_units", token_validity_units);
        }
        if let Some(read_attributes) = &self.read_attributes {
            formatter.field("read_attributes", read_attributes);
        }
        if let Some(write_attributes) = &self.write_attributes {
            formatter.field("write_attributes", write_attributes);
        }
        if let Some(explicit_auth_flows) = &self.explicit_auth_flows {
            formatter.field("explicit_auth_flows", explicit_auth_flows);
        }
        if let Some(supported_identity_providers) = &self.supported_identity_providers {
            formatter.field("supported_identity_providers", supported_identity_providers);
        }
        if let Some(callback_urls) = &self.callback_urls {
            formatter.field("callback_urls", callback_urls);
        }
        if let Some(logout_urls) = &self.logout_urls {
            formatter.field("logout_urls", logout_urls);
        }
        if let Some(default_redirect_uri) = &self.default_redirect_uri {
            formatter.field("default_redirect_uri", default_redirect_uri);
        }
        if let Some(allowed_oauth_flows) = &self.allowed_oauth_flows {
            formatter.field("allowed_oauth_flows", allowed_oauth_flows);
        }
        if let Some(allowed_oauth_scopes) = &self.allowed_oauth_scopes {
            formatter.field("allowed_oauth_scopes", allowed_oauth_scopes);
        }
        if let Some(flag) = &self.allowed_oauth_flows_user_pool_client {
            formatter.field("allowed_oauth_flows_user_pool_client", flag);
        }
        if let Some(analytics_configuration) = &self.analytics_configuration {
            formatter.field("analytics_configuration", analytics_configuration);
        }
        if let Some(prevent_user_existence_errors) = &self.prevent_user_existence_errors {
            formatter.field("prevent_user_existence_errors", prevent_user_existence_errors);
        }
        if let Some(enable_token_revocation) = &self.enable_token_revocation {
            formatter.field("enable_token_revocation", enable_token_revocation);
        }
        formatter.finish()
    }
}
