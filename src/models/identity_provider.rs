use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::debug_present;
use crate::core::timestamp::epoch_seconds_option;
use crate::core::validation::{Validate, Validator};
use crate::models::constraints;
use crate::models::{IdentityProviderTypeType, ProviderDetails, ProviderDetailsError};

/// A federated identity provider of a user pool.
#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "RawIdentityProvider", into = "RawIdentityProvider")]
pub struct IdentityProviderType {
    pub user_pool_id: Option<String>,
    pub provider_name: Option<String>,
    /// Present whenever `provider_details` is; the type is derived from the details.
    pub provider_type: Option<IdentityProviderTypeType>,
    pub provider_details: Option<ProviderDetails>,
    pub attribute_mapping: Option<BTreeMap<String, String>>,
    pub idp_identifiers: Option<Vec<String>>,
    pub last_modified_date: Option<DateTime<Utc>>,
    pub creation_date: Option<DateTime<Utc>>,
}

debug_present!(IdentityProviderType {
    user_pool_id,
    provider_name,
    provider_type,
    provider_details,
    attribute_mapping,
    idp_identifiers,
    last_modified_date,
    creation_date,
});

impl Validate for IdentityProviderType {
    fn check(&self, validator: &mut Validator) {
        validator.string(
            "UserPoolId",
            self.user_pool_id.as_deref(),
            &constraints::USER_POOL_ID,
        );
        validator.string(
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
        if let Some(idp_identifiers) = &self.idp_identifiers {
            validator.item_count("IdpIdentifiers", Some(idp_identifiers.len()), 0, 50);
            validator.strings(
                "IdpIdentifiers",
                idp_identifiers,
                &constraints::IDP_IDENTIFIER,
            );
        }
    }
}

/// Wire shape: provider details travel as a flat map next to `ProviderType`.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawIdentityProvider {
    #[serde(skip_serializing_if = "Option::is_none")]
    user_pool_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    provider_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    provider_type: Option<IdentityProviderTypeType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    provider_details: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    attribute_mapping: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    idp_identifiers: Option<Vec<String>>,
    #[serde(
        default,
        with = "epoch_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    last_modified_date: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "epoch_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    creation_date: Option<DateTime<Utc>>,
}

impl TryFrom<RawIdentityProvider> for IdentityProviderType {
    type Error = ProviderDetailsError;

    fn try_from(raw: RawIdentityProvider) -> Result<Self, Self::Error> {
        let provider_details = match (raw.provider_type, raw.provider_details) {
            (Some(provider_type), Some(map)) => {
                Some(ProviderDetails::from_wire_map(provider_type, map)?)
            }
            (None, Some(map)) if !map.is_empty() => {
                return Err(ProviderDetailsError::MissingProviderType)
            }
            _ => None,
        };
        Ok(Self {
            user_pool_id: raw.user_pool_id,
            provider_name: raw.provider_name,
            provider_type: raw.provider_type,
            provider_details,
            attribute_mapping: raw.attribute_mapping,
            idp_identifiers: raw.idp_identifiers,
            last_modified_date: raw.last_modified_date,
            creation_date: raw.creation_date,
        })
    }
}

impl From<IdentityProviderType> for RawIdentityProvider {
    fn from(provider: IdentityProviderType) -> Self {
        let provider_type = provider
            .provider_details
            .as_ref()
            .map(ProviderDetails::provider_type)
            .or(provider.provider_type);
        Self {
            user_pool_id: provider.user_pool_id,
            provider_name: provider.provider_name,
            provider_type,
            provider_details: provider
                .provider_details
                .as_ref()
                .map(ProviderDetails::to_wire_map),
            attribute_mapping: provider.attribute_mapping,
            idp_identifiers: provider.idp_identifiers,
            last_modified_date: provider.last_modified_date,
            creation_date: provider.creation_date,
        }
    }
}
