//! `RespondToAuthChallenge`: answers a challenge returned by `InitiateAuth`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::core::entries::{insert_unique, DuplicateKeyError};
use crate::core::validation::{Validate, Validator};
use crate::core::DebugPresent;
use crate::models::constraints;
use crate::models::{
    AnalyticsMetadataType, AuthenticationResultType, ChallengeNameType, UserContextDataType,
};
use crate::operation::Operation;

#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RespondToAuthChallengeInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    challenge_name: Option<ChallengeNameType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    session: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    challenge_responses: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    analytics_metadata: Option<AnalyticsMetadataType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_context_data: Option<UserContextDataType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    client_metadata: Option<BTreeMap<String, String>>,
}

impl RespondToAuthChallengeInput {
    pub fn builder() -> RespondToAuthChallengeInputBuilder {
        RespondToAuthChallengeInputBuilder::default()
    }

    pub fn to_builder(&self) -> RespondToAuthChallengeInputBuilder {
        RespondToAuthChallengeInputBuilder {
            inner: self.clone(),
        }
    }

    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    pub fn challenge_name(&self) -> Option<ChallengeNameType> {
        self.challenge_name
    }

    pub fn session(&self) -> Option<&str> {
        self.session.as_deref()
    }

    /// Answers keyed by challenge, e.g. `SMS_MFA_CODE` and `USERNAME` for `SMS_MFA`.
    pub fn challenge_responses(&self) -> Option<&BTreeMap<String, String>> {
        self.challenge_responses.as_ref()
    }

    pub fn analytics_metadata(&self) -> Option<&AnalyticsMetadataType> {
        self.analytics_metadata.as_ref()
    }

    pub fn user_context_data(&self) -> Option<&UserContextDataType> {
        self.user_context_data.as_ref()
    }

    pub fn client_metadata(&self) -> Option<&BTreeMap<String, String>> {
        self.client_metadata.as_ref()
    }
}

impl Validate for RespondToAuthChallengeInput {
    fn check(&self, validator: &mut Validator) {
        validator.required_string(
            "ClientId",
            self.client_id.as_deref(),
            &constraints::CLIENT_ID,
        );
        validator.required("ChallengeName", self.challenge_name.as_ref());
        validator.string("Session", self.session.as_deref(), &constraints::SESSION);
        validator.nested("AnalyticsMetadata", self.analytics_metadata.as_ref());
        validator.nested("UserContextData", self.user_context_data.as_ref());
    }
}

impl Operation for RespondToAuthChallengeInput {
    const NAME: &'static str = "RespondToAuthChallenge";
    type Output = RespondToAuthChallengeOutput;
}

impl fmt::Debug for RespondToAuthChallengeInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RespondToAuthChallengeInput")
            .redacted("client_id", &self.client_id)
            .present("challenge_name", &self.challenge_name)
            .redacted("session", &self.session)
            .redacted("challenge_responses", &self.challenge_responses)
            .present("analytics_metadata", &self.analytics_metadata)
            .present("user_context_data", &self.user_context_data)
            .present("client_metadata", &self.client_metadata)
            .finish()
    }
}

#[derive(Clone, PartialEq, Default)]
pub struct RespondToAuthChallengeInputBuilder {
    inner: RespondToAuthChallengeInput,
}

impl RespondToAuthChallengeInputBuilder {
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

    pub fn add_challenge_responses_entry(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&mut Self, DuplicateKeyError> {
        insert_unique(
            &mut self.inner.challenge_responses,
            "ChallengeResponses",
            key.into(),
            value.into(),
        )?;
        Ok(self)
    }

    pub fn clear_challenge_responses_entries(&mut self) -> &mut Self {
        self.inner.challenge_responses = None;
        self
    }

    pub fn set_challenge_responses(mut self, input: Option<BTreeMap<String, String>>) -> Self {
        self.inner.challenge_responses = input;
        self
    }

    pub fn get_challenge_responses(&self) -> &Option<BTreeMap<String, String>> {
        &self.inner.challenge_responses
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

    pub fn user_context_data(mut self, input: UserContextDataType) -> Self {
        self.inner.user_context_data = Some(input);
        self
    }

    pub fn set_user_context_data(mut self, input: Option<UserContextDataType>) -> Self {
        self.inner.user_context_data = input;
        self
    }

    pub fn get_user_context_data(&self) -> &Option<UserContextDataType> {
        &self.inner.user_context_data
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

    pub fn build(self) -> RespondToAuthChallengeInput {
        self.inner
    }
}

impl From<RespondToAuthChallengeInput> for RespondToAuthChallengeInputBuilder {
    fn from(inner: RespondToAuthChallengeInput) -> Self {
        Self { inner }
    }
}

impl fmt::Debug for RespondToAuthChallengeInputBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RespondToAuthChallengeInputBuilder")
            .field(&self.inner)
            .finish()
    }
}

/// The next challenge, or tokens once the flow completes.
#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RespondToAuthChallengeOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    challenge_name: Option<ChallengeNameType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    session: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    challenge_parameters: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    authentication_result: Option<AuthenticationResultType>,
}

impl RespondToAuthChallengeOutput {
    pub fn builder() -> RespondToAuthChallengeOutputBuilder {
        RespondToAuthChallengeOutputBuilder::default()
    }

    pub fn to_builder(&self) -> RespondToAuthChallengeOutputBuilder {
        RespondToAuthChallengeOutputBuilder::from(self.clone())
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

impl fmt::Debug for RespondToAuthChallengeOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RespondToAuthChallengeOutput")
            .present("challenge_name", &self.challenge_name)
            .redacted("session", &self.session)
            .present("challenge_parameters", &self.challenge_parameters)
            .present("authentication_result", &self.authentication_result)
            .finish()
    }
}

#[derive(Clone, PartialEq, Default)]
pub struct RespondToAuthChallengeOutputBuilder {
    inner: RespondToAuthChallengeOutput,
}

impl RespondToAuthChallengeOutputBuilder {
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

    pub fn build(self) -> RespondToAuthChallengeOutput {
        self.inner
    }
}

impl From<RespondToAuthChallengeOutput> for RespondToAuthChallengeOutputBuilder {
    fn from(inner: RespondToAuthChallengeOutput) -> Self {
        Self { inner }
    }
}

impl fmt::Debug for RespondToAuthChallengeOutputBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RespondToAuthChallengeOutputBuilder")
            .field(&self.inner)
            .finish()
    }
}
