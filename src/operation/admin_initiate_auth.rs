//! `AdminInitiateAuth`: starts an authentication flow from a trusted back end.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::core::entries::{insert_unique, DuplicateKeyError};
use crate::core::validation::{Validate, Validator};
use crate::core::DebugPresent;
use crate::models::constraints;
use crate::models::{
    AnalyticsMetadataType, AuthFlowType, AuthenticationResultType, ChallengeNameType,
    ContextDataType,
};
use crate::operation::Operation;

#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdminInitiateAuthInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    user_pool_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    auth_flow: Option<AuthFlowType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    auth_parameters: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    client_metadata: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    analytics_metadata: Option<AnalyticsMetadataType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    context_data: Option<ContextDataType>,
}

impl AdminInitiateAuthInput {
    pub fn builder() -> AdminInitiateAuthInputBuilder {
        AdminInitiateAuthInputBuilder::default()
    }

    pub fn to_builder(&self) -> AdminInitiateAuthInputBuilder {
        AdminInitiateAuthInputBuilder {
            inner: self.clone(),
        }
    }

    pub fn user_pool_id(&self) -> Option<&str> {
        self.user_pool_id.as_deref()
    }

    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    pub fn auth_flow(&self) -> Option<AuthFlowType> {
        self.auth_flow
    }

    /// Flow-specific inputs such as `USERNAME`, `PASSWORD`, `SRP_A` or `SECRET_HASH`.
    pub fn auth_parameters(&self) -> Option<&BTreeMap<String, String>> {
        self.auth_parameters.as_ref()
    }

    pub fn client_metadata(&self) -> Option<&BTreeMap<String, String>> {
        self.client_metadata.as_ref()
    }

    pub fn analytics_metadata(&self) -> Option<&AnalyticsMetadataType> {
        self.analytics_metadata.as_ref()
    }

    pub fn context_data(&self) -> Option<&ContextDataType> {
        self.context_data.as_ref()
    }
}

impl Validate for AdminInitiateAuthInput {
    fn check(&self, validator: &mut Validator) {
        validator.required_string(
            "UserPoolId",
            self.user_pool_id.as_deref(),
            &constraints::USER_POOL_ID,
        );
        validator.required_string(
            "ClientId",
            self.client_id.as_deref(),
            &constraints::CLIENT_ID,
        );
        validator.required("AuthFlow", self.auth_flow.as_ref());
        validator.nested("AnalyticsMetadata", self.analytics_metadata.as_ref());
        validator.nested("ContextData", self.context_data.as_ref());
    }
}

impl Operation for AdminInitiateAuthInput {
    const NAME: &'static str = "AdminInitiateAuth";
    type Output = AdminInitiateAuthOutput;
}

impl fmt::Debug for AdminInitiateAuthInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminInitiateAuthInput")
            .present("user_pool_id", &self.user_pool_id)
            .redacted("client_id", &self.client_id)
            .present("auth_flow", &self.auth_flow)
            .redacted("auth_parameters", &self.auth_parameters)
            .present("client_metadata", &self.client_metadata)
            .present("analytics_metadata", &self.analytics_metadata)
            .present("context_data", &self.context_data)
            .finish()
    }
}

#[derive(Clone, PartialEq, Default)]
pub struct AdminInitiateAuthInputBuilder {
    inner: AdminInitiateAuthInput,
}

impl AdminInitiateAuthInputBuilder {
    pub fn user_pool_id(mut self, input: impl Into<String>) -> Self {
        self.inner.user_pool_id = Some(input.into());
        self
    }

    pub fn set_user_pool_id(mut self, input: Option<String>) -> Self {
        self.inner.user_pool_id = input;
        self
    }

    pub fn get_user_pool_id(&self) -> &Option<String> {
        &self.inner.user_pool_id
    }

    pub fn client_id(mut self, input: impl Into<String>) -> Self {
        self.inner.client_id = Some(input.into());
        self
    }

    pub fn set_client_id(mut self, input: Option<String>) -> Self {
        self.inner.client_id = input;
        self
    }

    pub fn get_client_id(&self) -> &Option<String> {
        &self.inner.client_id
    }

    pub fn auth_flow(mut self, input: AuthFlowType) -> Self {
        self.inner.auth_flow = Some(input);
        self
    }

    pub fn set_auth_flow(mut self, input: Option<AuthFlowType>) -> Self {
        self.inner.auth_flow = input;
        self
    }

    pub fn get_auth_flow(&self) -> &Option<AuthFlowType> {
        &self.inner.auth_flow
    }

    pub fn add_auth_parameters_entry(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&mut Self, DuplicateKeyError> {
        insert_unique(
            &mut self.inner.auth_parameters,
            "AuthParameters",
            key.into(),
            value.into(),
        )?;
        Ok(self)
    }

    pub fn clear_auth_parameters_entries(&mut self) -> &mut Self {
        self.inner.auth_parameters = None;
        self
    }

    pub fn set_auth_parameters(mut self, input: Option<BTreeMap<String, String>>) -> Self {
        self.inner.auth_parameters = input;
        self
    }

    pub fn get_auth_parameters(&self) -> &Option<BTreeMap<String, String>> {
        &self.inner.auth_parameters
    }

    pub fn add_client_metadata_entry(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&mut Self, DuplicateKeyError> {
        insert_unique(
            &mut self.inner.client_metadata,
            "ClientMetadata",
            key.into(),
            value.into(),
        )?;
        Ok(self)
    }

    pub fn clear_client_metadata_entries(&mut self) -> &mut Self {
        self.inner.client_metadata = None;
        self
    }

    pub fn set_client_metadata(mut self, input: Option<BTreeMap<String, String>>) -> Self {
        self.inner.client_metadata = input;
        self
    }

    pub fn get_client_metadata(&self) -> &Option<BTreeMap<String, String>> {
        &self.inner.client_metadata
    }

    pub fn analytics_metadata(mut self, input: AnalyticsMetadataType) -> Self {
        self.inner.analytics_metadata = Some(input);
        self
    }

    pub fn set_analytics_metadata(mut self, input: Option<AnalyticsMetadataType>) -> Self {
        self.inner.analytics_metadata = input;
        self
    }

    pub fn get_analytics_metadata(&self) -> &Option<AnalyticsMetadataType> {
        &self.inner.analytics_metadata
    }

    pub fn context_data(mut self, input: ContextDataType) -> Self {
        self.inner.context_data = Some(input);
        self
    }

    pub fn set_context_data(mut self, input: Option<ContextDataType>) -> Self {
        self.inner.context_data = input;
        self
    }

    pub fn get_context_data(&self) -> &Option<ContextDataType> {
        &self.inner.context_data
    }

    pub fn build(self) -> AdminInitiateAuthInput {
        self.inner
    }
}

impl From<AdminInitiateAuthInput> for AdminInitiateAuthInputBuilder {
    fn from(inner: AdminInitiateAuthInput) -> Self {
        Self { inner }
    }
}

impl fmt::Debug for AdminInitiateAuthInputBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AdminInitiateAuthInputBuilder")
            .field(&self.inner)
            .finish()
    }
}

/// Either a challenge to answer with `AdminRespondToAuthChallenge`, or tokens.
#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdminInitiateAuthOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    challenge_name: Option<ChallengeNameType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    session: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    challenge_parameters: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    authentication_result: Option<AuthenticationResultType>,
}

impl AdminInitiateAuthOutput {
    pub fn builder() -> AdminInitiateAuthOutputBuilder {
        AdminInitiateAuthOutputBuilder::default()
    }

    pub fn to_builder(&self) -> AdminInitiateAuthOutputBuilder {
        AdminInitiateAuthOutputBuilder::from(self.clone())
    }

    pub fn challenge_name(&self) -> Option<ChallengeNameType> {
        self.challenge_name
    }

    pub fn session(&self) -> Option<&str> {
        self.session.as_deref()
    }

    pub fn challenge_parameters(&self) -> Option<&BTreeMap<String, String>> {
        self.challenge_parameters.as_ref()
    }

    pub fn authentication_result(&self) -> Option<&AuthenticationResultType> {
        self.authentication_result.as_ref()
    }
}

impl fmt::Debug for AdminInitiateAuthOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminInitiateAuthOutput")
            .present("challenge_name", &self.challenge_name)
            .redacted("session", &self.session)
            .present("challenge_parameters", &self.challenge_parameters)
            .present("authentication_result", &self.authentication_result)
            .finish()
    }
}

#[derive(Clone, PartialEq, Default)]
pub struct AdminInitiateAuthOutputBuilder {
    inner: AdminInitiateAuthOutput,
}

impl AdminInitiateAuthOutputBuilder {
    pub fn challenge_name(mut self, input: ChallengeNameType) -> Self {
        self.inner.challenge_name = Some(input);
        self
    }

    pub fn set_challenge_name(mut self, input: Option<ChallengeNameType>) -> Self {
        self.inner.challenge_name = input;
        self
    }

    pub fn get_challenge_name(&self) -> &Option<ChallengeNameType> {
        &self.inner.challenge_name
    }

    pub fn session(mut self, input: impl Into<String>) -> Self {
        self.inner.session = Some(input.into());
        self
    }

    pub fn set_session(mut self, input: Option<String>) -> Self {
        self.inner.session = input;
        self
    }

    pub fn get_session(&self) -> &Option<String> {
        &self.inner.session
    }

    pub fn add_challenge_parameters_entry(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&mut Self, DuplicateKeyError> {
        insert_unique(
            &mut self.inner.challenge_parameters,
            "ChallengeParameters",
            key.into(),
            value.into(),
        )?;
        Ok(self)
    }

    pub fn clear_challenge_parameters_entries(&mut self) -> &mut Self {
        self.inner.challenge_parameters = None;
        self
    }

    pub fn set_challenge_parameters(mut self, input: Option<BTreeMap<String, String>>) -> Self {
        self.inner.challenge_parameters = input;
        self
    }

    pub fn get_challenge_parameters(&self) -> &Option<BTreeMap<String, String>> {
        &self.inner.challenge_parameters
    }

    pub fn authentication_result(mut self, input: AuthenticationResultType) -> Self {
        self.inner.authentication_result = Some(input);
        self
    }

    pub fn set_authentication_result(mut self, input: Option<AuthenticationResultType>) -> Self {
        self.inner.authentication_result = input;
        self
    }

    pub fn get_authentication_result(&self) -> &Option<AuthenticationResultType> {
        &self.inner.authentication_result
    }

    pub fn build(self) -> AdminInitiateAuthOutput {
        self.inner
    }
}

impl From<AdminInitiateAuthOutput> for AdminInitiateAuthOutputBuilder {
    fn from(inner: AdminInitiateAuthOutput) -> Self {
        Self { inner }
    }
}

impl fmt::Debug for AdminInitiateAuthOutputBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AdminInitiateAuthOutputBuilder")
            .field(&self.inner)
            .finish()
    }
}
