//! `DescribeUserPoolClient`: reads the configuration of an app client.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::validation::{Validate, Validator};
use crate::core::DebugPresent;
use crate::models::constraints;
use crate::models::UserPoolClientType;
use crate::operation::Operation;

#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeUserPoolClientInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    user_pool_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    client_id: Option<String>,
}

impl DescribeUserPoolClientInput {
    pub fn builder() -> DescribeUserPoolClientInputBuilder {
        DescribeUserPoolClientInputBuilder::default()
    }

    pub fn to_builder(&self) -> DescribeUserPoolClientInputBuilder {
        DescribeUserPoolClientInputBuilder {
            inner: self.clone(),
        }
    }

    pub fn user_pool_id(&self) -> Option<&str> {
        self.user_pool_id.as_deref()
    }

    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }
}

impl Validate for DescribeUserPoolClientInput {
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
    }
}

impl Operation for DescribeUserPoolClientInput {
    const NAME: &'static str = "DescribeUserPoolClient";
    type Output = DescribeUserPoolClientOutput;
}

impl fmt::Debug for DescribeUserPoolClientInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DescribeUserPoolClientInput")
            .present("user_pool_id", &self.user_pool_id)
            .redacted("client_id", &self.client_id)
            .finish()
    }
}

#[derive(Clone, PartialEq, Default)]
pub struct DescribeUserPoolClientInputBuilder {
    inner: DescribeUserPoolClientInput,
}

impl DescribeUserPoolClientInputBuilder {
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

    pub fn build(self) -> DescribeUserPoolClientInput {
        self.inner
    }
}

impl From<DescribeUserPoolClientInput> for DescribeUserPoolClientInputBuilder {
    fn from(inner: DescribeUserPoolClientInput) -> Self {
        Self { inner }
    }
}

impl fmt::Debug for DescribeUserPoolClientInputBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DescribeUserPoolClientInputBuilder")
            .field(&self.inner)
            .finish()
    }
}

#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeUserPoolClientOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    user_pool_client: Option<UserPoolClientType>,
}

impl DescribeUserPoolClientOutput {
    pub fn builder() -> DescribeUserPoolClientOutputBuilder {
        DescribeUserPoolClientOutputBuilder::default()
    }

    pub fn to_builder(&self) -> DescribeUserPoolClientOutputBuilder {
        DescribeUserPoolClientOutputBuilder::from(self.clone())
    }

    pub fn user_pool_client(&self) -> Option<&UserPoolClientType> {
        self.user_pool_client.as_ref()
    }
}

impl fmt::Debug for DescribeUserPoolClientOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DescribeUserPoolClientOutput")
            .present("user_pool_client", &self.user_pool_client)
            .finish()
    }
}

#[derive(Clone, PartialEq, Default)]
pub struct DescribeUserPoolClientOutputBuilder {
    inner: DescribeUserPoolClientOutput,
}

impl DescribeUserPoolClientOutputBuilder {
    pub fn user_pool_client(mut self, input: UserPoolClientType) -> Self {
        self.inner.user_pool_client = Some(input);
        self
    }

    pub fn set_user_pool_client(mut self, input: Option<UserPoolClientType>) -> Self {
        self.inner.user_pool_client = input;
        self
    }

    pub fn get_user_pool_client(&self) -> &Option<UserPoolClientType> {
        &self.inner.user_pool_client
    }

    pub fn build(self) -> DescribeUserPoolClientOutput {
        self.inner
    }
}

impl From<DescribeUserPoolClientOutput> for DescribeUserPoolClientOutputBuilder {
    fn from(inner: DescribeUserPoolClientOutput) -> Self {
        Self { inner }
    }
}

impl fmt::Debug for DescribeUserPoolClientOutputBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DescribeUserPoolClientOutputBuilder")
            .field(&self.inner)
            .finish()
    }
}
