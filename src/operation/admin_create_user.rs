//! `AdminCreateUser`: creates a user as an administrator and optionally sends
//! an invitation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::core::entries::{insert_unique, DuplicateKeyError};
use crate::core::validation::{Validate, Validator};
use crate::core::DebugPresent;
use crate::models::constraints;
use crate::models::{AttributeType, DeliveryMediumType, MessageActionType, UserType};
use crate::operation::Operation;

#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdminCreateUserInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    user_pool_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_attributes: Option<Vec<AttributeType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    validation_data: Option<Vec<AttributeType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temporary_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    force_alias_creation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message_action: Option<MessageActionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    desired_delivery_mediums: Option<Vec<DeliveryMediumType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    client_metadata: Option<BTreeMap<String, String>>,
}

impl AdminCreateUserInput {
    pub fn builder() -> AdminCreateUserInputBuilder {
        AdminCreateUserInputBuilder::default()
    }

    pub fn to_builder(&self) -> AdminCreateUserInputBuilder {
        AdminCreateUserInputBuilder {
            inner: self.clone(),
        }
    }

    pub fn user_pool_id(&self) -> Option<&str> {
        self.user_pool_id.as_deref()
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn user_attributes(&self) -> &[AttributeType] {
        self.user_attributes.as_deref().unwrap_or_default()
    }

    /// Attributes passed to the pre sign-up trigger; not stored.
    pub fn validation_data(&self) -> &[AttributeType] {
        self.validation_data.as_deref().unwrap_or_default()
    }

    pub fn temporary_password(&self) -> Option<&str> {
        self.temporary_password.as_deref()
    }

    pub fn force_alias_creation(&self) -> Option<bool> {
        self.force_alias_creation
    }

    pub fn message_action(&self) -> Option<MessageActionType> {
        self.message_action
    }

    pub fn desired_delivery_mediums(&self) -> &[DeliveryMediumType] {
        self.desired_delivery_mediums.as_deref().unwrap_or_default()
    }

    pub fn client_metadata(&self) -> Option<&BTreeMap<String, String>> {
        self.client_metadata.as_ref()
    }
}

impl Validate for AdminCreateUserInput {
    fn check(&self, validator: &mut Validator) {
        validator.required_string(
            "UserPoolId",
            self.user_pool_id.as_deref(),
            &constraints::USER_POOL_ID,
        );
        validator.required_string(
            "Username",
            self.username.as_deref(),
            &constraints::USERNAME,
        );
        validator.each("UserAttributes", self.user_attributes());
        validator.each("ValidationData", self.validation_data());
        validator.string(
            "TemporaryPassword",
            self.temporary_password.as_deref(),
            &constraints::TEMPORARY_PASSWORD,
        );
    }
}

impl Operation for AdminCreateUserInput {
    const NAME: &'static str = "AdminCreateUser";
    type Output = AdminCreateUserOutput;
}

impl fmt::Debug for AdminCreateUserInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCreateUserInput")
            .present("user_pool_id", &self.user_pool_id)
            .redacted("username", &self.username)
            .present("user_attributes", &self.user_attributes)
            .present("validation_data", &self.validation_data)
            .redacted("temporary_password", &self.temporary_password)
            .present("force_alias_creation", &self.force_alias_creation)
            .present("message_action", &self.message_action)
            .present("desired_delivery_mediums", &self.desired_delivery_mediums)
            .present("client_metadata", &self.client_metadata)
            .finish()
    }
}

/// Builder for [`AdminCreateUserInput`].
#[derive(Clone, PartialEq, Default)]
pub struct AdminCreateUserInputBuilder {
    inner: AdminCreateUserInput,
}

impl AdminCreateUserInputBuilder {
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

    pub fn username(mut self, input: impl Into<String>) -> Self {
        self.inner.username = Some(input.into());
        self
    }

    pub fn set_username(mut self, input: Option<String>) -> Self {
        self.inner.username = input;
        self
    }

    pub fn get_username(&self) -> &Option<String> {
        &self.inner.username
    }

    /// Appends one attribute.
    pub fn user_attributes(mut self, input: AttributeType) -> Self {
        self.inner
            .user_attributes
            .get_or_insert_with(Vec::new)
            .push(input);
        self
    }

    pub fn set_user_attributes(mut self, input: Option<Vec<AttributeType>>) -> Self {
        self.inner.user_attributes = input;
        self
    }

    pub fn get_user_attributes(&self) -> &Option<Vec<AttributeType>> {
        &self.inner.user_attributes
    }

    /// Appends one validation attribute.
    pub fn validation_data(mut self, input: AttributeType) -> Self {
        self.inner
            .validation_data
            .get_or_insert_with(Vec::new)
            .push(input);
        self
    }

    pub fn set_validation_data(mut self, input: Option<Vec<AttributeType>>) -> Self {
        self.inner.validation_data = input;
        self
    }

    pub fn get_validation_data(&self) -> &Option<Vec<AttributeType>> {
        &self.inner.validation_data
    }

    pub fn temporary_password(mut self, input: impl Into<String>) -> Self {
        self.inner.temporary_password = Some(input.into());
        self
    }

    pub fn set_temporary_password(mut self, input: Option<String>) -> Self {
        self.inner.temporary_password = input;
        self
    }

    pub fn get_temporary_password(&self) -> &Option<String> {
        &self.inner.temporary_password
    }

    pub fn force_alias_creation(mut self, input: bool) -> Self {
        self.inner.force_alias_creation = Some(input);
        self
    }

    pub fn set_force_alias_creation(mut self, input: Option<bool>) -> Self {
        self.inner.force_alias_creation = input;
        self
    }

    pub fn get_force_alias_creation(&self) -> &Option<bool> {
        &self.inner.force_alias_creation
    }

    pub fn message_action(mut self, input: MessageActionType) -> Self {
        self.inner.message_action = Some(input);
        self
    }

    pub fn set_message_action(mut self, input: Option<MessageActionType>) -> Self {
        self.inner.message_action = input;
        self
    }

    pub fn get_message_action(&self) -> &Option<MessageActionType> {
        &self.inner.message_action
    }

    /// Appends one delivery medium.
    pub fn desired_delivery_mediums(mut self, input: DeliveryMediumType) -> Self {
        self.inner
            .desired_delivery_mediums
            .get_or_insert_with(Vec::new)
            .push(input);
        self
    }

    pub fn set_desired_delivery_mediums(mut self, input: Option<Vec<DeliveryMediumType>>) -> Self {
        self.inner.desired_delivery_mediums = input;
        self
    }

    pub fn get_desired_delivery_mediums(&self) -> &Option<Vec<DeliveryMediumType>> {
        &self.inner.desired_delivery_mediums
    }

    /// Adds one client metadata entry; an existing key is never overwritten.
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

    pub fn build(self) -> AdminCreateUserInput {
        self.inner
    }
}

impl From<AdminCreateUserInput> for AdminCreateUserInputBuilder {
    fn from(inner: AdminCreateUserInput) -> Self {
        Self { inner }
    }
}

impl fmt::Debug for AdminCreateUserInputBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AdminCreateUserInputBuilder")
            .field(&self.inner)
            .finish()
    }
}

#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdminCreateUserOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<UserType>,
}

impl AdminCreateUserOutput {
    pub fn builder() -> AdminCreateUserOutputBuilder {
        AdminCreateUserOutputBuilder::default()
    }

    pub fn to_builder(&self) -> AdminCreateUserOutputBuilder {
        AdminCreateUserOutputBuilder::from(self.clone())
    }

    /// The newly created user.
    pub fn user(&self) -> Option<&UserType> {
        self.user.as_ref()
    }
}

impl fmt::Debug for AdminCreateUserOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCreateUserOutput")
            .present("user", &self.user)
            .finish()
    }
}

#[derive(Clone, PartialEq, Default)]
pub struct AdminCreateUserOutputBuilder {
    inner: AdminCreateUserOutput,
}

impl AdminCreateUserOutputBuilder {
    pub fn user(mut self, input: UserType) -> Self {
        self.inner.user = Some(input);
        self
    }

    pub fn set_user(mut self, input: Option<UserType>) -> Self {
        self.inner.user = input;
        self
    }

    pub fn get_user(&self) -> &Option<UserType> {
        &self.inner.user
    }

    pub fn build(self) -> AdminCreateUserOutput {
        self.inner
    }
}

impl From<AdminCreateUserOutput> for AdminCreateUserOutputBuilder {
    fn from(inner: AdminCreateUserOutput) -> Self {
        Self { inner }
    }
}

impl fmt::Debug for AdminCreateUserOutputBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AdminCreateUserOutputBuilder")
            .field(&self.inner)
            .finish()
    }
}
