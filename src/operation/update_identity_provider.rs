//! `UpdateIdentityProvider`: changes the configuration of a federated provider.
//!
//! The input only serializes: the wire form of `ProviderDetails` carries no
//! provider type, so it cannot be read back into a typed variant.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::core::entries::{insert_unique, DuplicateKeyError};
use crate::core::validation::{Validate, Validator};
use crate::core::DebugPresent;
use crate::models::constraints;
use crate::models::provider_details::serialize_as_wire_map;
use crate::models::{IdentityProviderType, ProviderDetails};
use crate::operation::Operation;

#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateIdentityProviderInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    user_pool_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    provider_name: Option<String>,
    #[serde(
        serialize_with = "serialize_as_wire_map",
        skip_serializing_if = "Option::is_none"
    )]
    provider_details: Option<ProviderDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    attribute_mapping: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    idp_identifiers: Option<Vec<String>>,
}

impl UpdateIdentityProviderInput {
    pub fn builder() -> UpdateIdentityProviderInputBuilder {
        UpdateIdentityProviderInputBuilder::default()
    }

    pub fn to_builder(&self) -> UpdateIdentityProviderInputBuilder {
        UpdateIdentityProviderInputBuilder {
            inner: self.clone(),
        }
    }

    pub fn user_pool_id(&self) -> Option<&str> {
        self.user_pool_id.as_deref()
    }

    pub fn provider_name(&self) -> Option<&str> {
        self.provider_name.as_deref()
    }

    pub fn provider_details(&self) -> Option<&ProviderDetails> {
        self.provider_details.as_ref()
    }

    /// User pool attribute name to provider attribute name.
    pub fn attribute_mapping(&self) -> Option<&BTreeMap<String, String>> {
        self.attribute_mapping.as_ref()
    }

    pub fn idp_identifiers(&self) -> &[String] {
        self.idp_identifiers.as_deref().unwrap_or_default()
    }
}

impl fmt::Debug for UpdateIdentityProviderInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateIdentityProviderInput")
            .present("user_pool_id", &self.user_pool_id)
            .present("provider_name", &self.provider_name)
            .present("provider_details", &self.provider_details)
            .present("attribute_mapping", &self.attribute_mapping)
            .present("idp_identifiers", &self.idp_identifiers)
            .finish()
    }
}

impl Validate for UpdateIdentityProviderInput {
    fn check(&self, validator: &mut Validator) {
        validator.required_string(
            "UserPoolId",
            self.user_pool_id.as_deref(),
            &constraints::USER_POOL_ID,
        );
        validator.required_string(
            "ProviderName",
            self.provider_name.as_deref(),
            &constraints::PROVIDER_NAME,
        );
        validator.nested("ProviderDetails", self.provider_details.as_ref());
        validator.map(
            "AttributeMapping",
            self.attribute_mapping.as_ref(),
            &constraints::ATTRIBUTE_MAPPING_KEY,
            &constraints::ATTRIBUTE_MAPPING_VALUE,
        );
        validator.item_count(
            "IdpIdentifiers",
            self.idp_identifiers.as_ref().map(Vec::len),
            0,
            50,
        );
        validator.strings(
            "IdpIdentifiers",
            self.idp_identifiers(),
            &constraints::IDP_IDENTIFIER,
        );
    }
}

impl Operation for UpdateIdentityProviderInput {
    const NAME: &'static str = "UpdateIdentityProvider";
    type Output = UpdateIdentityProviderOutput;
}

#[derive(Clone, PartialEq, Default)]
pub struct UpdateIdentityProviderInputBuilder {
    inner: UpdateIdentityProviderInput,
}

impl UpdateIdentityProviderInputBuilder {
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

    pub fn provider_name(mut self, input: impl Into<String>) -> Self {
        self.inner.provider_name = Some(input.into());
        self
    }

    pub fn set_provider_name(mut self, input: Option<String>) -> Self {
        self.inner.provider_name = input;
        self
    }

    pub fn get_provider_name(&self) -> &Option<String> {
        &self.inner.provider_name
    }

    pub fn provider_details(mut self, input: impl Into<ProviderDetails>) -> Self {
        self.inner.provider_details = Some(input.into());
        self
    }

    pub fn set_provider_details(mut self, input: Option<ProviderDetails>) -> Self {
        self.inner.provider_details = input;
        self
    }

    pub fn get_provider_details(&self) -> &Option<ProviderDetails> {
        &self.inner.provider_details
    }

    pub fn add_attribute_mapping_entry(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&mut Self, DuplicateKeyError> {
        insert_unique(
            &mut self.inner.attribute_mapping,
            "AttributeMapping",
            key.into(),
            value.into(),
        )?;
        Ok(self)
    }

    pub fn clear_attribute_mapping_entries(&mut self) -> &mut Self {
        self.inner.attribute_mapping = None;
        self
    }

    pub fn set_attribute_mapping(mut self, input: Option<BTreeMap<String, String>>) -> Self {
        self.inner.attribute_mapping = input;
        self
    }

    pub fn get_attribute_mapping(&self) -> &Option<BTreeMap<String, String>> {
        &self.inner.attribute_mapping
    }

    /// Appends one identifier.
    pub fn idp_identifiers(mut self, input: impl Into<String>) -> Self {
        self.inner
            .idp_identifiers
            .get_or_insert_with(Vec::new)
            .push(input.into());
        self
    }

    pub fn set_idp_identifiers(mut self, input: Option<Vec<String>>) -> Self {
        self.inner.idp_identifiers = input;
        self
    }

    pub fn get_idp_identifiers(&self) -> &Option<Vec<String>> {
        &self.inner.idp_identifiers
    }

    pub fn build(self) -> UpdateIdentityProviderInput {
        self.inner
    }
}

impl From<UpdateIdentityProviderInput> for UpdateIdentityProviderInputBuilder {
    fn from(inner: UpdateIdentityProviderInput) -> Self {
        Self { inner }
    }
}

impl fmt::Debug for UpdateIdentityProviderInputBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UpdateIdentityProviderInputBuilder")
            .field(&self.inner)
            .finish()
    }
}

#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateIdentityProviderOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    identity_provider: Option<IdentityProviderType>,
}

impl UpdateIdentityProviderOutput {
    pub fn builder() -> UpdateIdentityProviderOutputBuilder {
        UpdateIdentityProviderOutputBuilder::default()
    }

    pub fn to_builder(&self) -> UpdateIdentityProviderOutputBuilder {
        UpdateIdentityProviderOutputBuilder::from(self.clone())
    }

    pub fn identity_provider(&self) -> Option<&IdentityProviderType> {
        self.identity_provider.as_ref()
    }
}

impl fmt::Debug for UpdateIdentityProviderOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateIdentityProviderOutput")
            .present("identity_provider", &self.identity_provider)
            .finish()
    }
}

#[derive(Clone, PartialEq, Default)]
pub struct UpdateIdentityProviderOutputBuilder {
    inner: UpdateIdentityProviderOutput,
}

impl UpdateIdentityProviderOutputBuilder {
    pub fn identity_provider(mut self, input: IdentityProviderType) -> Self {
        self.inner.identity_provider = Some(input);
        self
    }

    pub fn set_identity_provider(mut self, input: Option<IdentityProviderType>) -> Self {
        self.inner.identity_provider = input;
        self
    }

    pub fn get_identity_provider(&self) -> &Option<IdentityProviderType> {
        &self.inner.identity_provider
    }

    pub fn build(self) -> UpdateIdentityProviderOutput {
        self.inner
    }
}

impl From<UpdateIdentityProviderOutput> for UpdateIdentityProviderOutputBuilder {
    fn from(inner: UpdateIdentityProviderOutput) -> Self {
        Self { inner }
    }
}

impl fmt::Debug for UpdateIdentityProviderOutputBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UpdateIdentityProviderOutputBuilder")
            .field(&self.inner)
            .finish()
    }
}
