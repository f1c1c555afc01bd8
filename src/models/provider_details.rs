//! Typed identity-provider details.
//!
//! On the wire, provider details are a flat string map whose valid keys depend
//! on the provider type. [`ProviderDetails`] holds one typed variant per
//! provider type and only converts to and from the flat map at the
//! serialization boundary.

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

use crate::core::validation::{Validate, Validator};
use crate::core::DebugPresent;
use crate::models::{AttributesRequestMethod, IdentityProviderTypeType, UnknownVariantError};

/// A flat provider-details map could not be converted into its typed form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderDetailsError {
    #[error("provider details for {provider_type} set both `{first}` and `{second}`")]
    ConflictingKeys {
        provider_type: IdentityProviderTypeType,
        first: &'static str,
        second: &'static str,
    },
    #[error("provider detail `{key}` has invalid value {value:?} (expected {expected})")]
    InvalidValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
    #[error("provider details are present but ProviderType is missing")]
    MissingProviderType,
    #[error(transparent)]
    UnknownProviderType(#[from] UnknownVariantError),
}

/// Endpoint keys the service fills in for social providers.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct ProviderEndpoints {
    pub authorize_url: Option<String>,
    pub token_url: Option<String>,
    pub token_request_method: Option<String>,
    pub attributes_url: Option<String>,
    pub attributes_url_add_attributes: Option<bool>,
    pub oidc_issuer: Option<String>,
}

/// OpenID Connect provider settings.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct OidcProviderDetails {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub attributes_request_method: Option<AttributesRequestMethod>,
    pub oidc_issuer: Option<String>,
    pub authorize_scopes: Option<String>,
    pub authorize_url: Option<String>,
    pub token_url: Option<String>,
    pub attributes_url: Option<String>,
    pub jwks_uri: Option<String>,
    pub attributes_url_add_attributes: Option<bool>,
}

/// Where a SAML provider's metadata document comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SamlMetadata {
    /// `MetadataURL`: the service fetches the document.
    Url(String),
    /// `MetadataFile`: the document itself.
    File(String),
}

/// SAML 2.0 provider settings.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct SamlProviderDetails {
    pub metadata: Option<SamlMetadata>,
    pub idp_signout: Option<bool>,
    pub idp_init: Option<bool>,
    pub encrypted_responses: Option<bool>,
    /// For example `rsa-sha256`.
    pub request_signing_algorithm: Option<String>,
    pub active_encryption_certificate: Option<String>,
    pub sso_redirect_binding_uri: Option<String>,
    pub slo_redirect_binding_uri: Option<String>,
}

#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct GoogleProviderDetails {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub authorize_scopes: Option<String>,
    pub endpoints: ProviderEndpoints,
}

#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct FacebookProviderDetails {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub authorize_scopes: Option<String>,
    /// Graph API version, e.g. `v17.0`.
    pub api_version: Option<String>,
    pub endpoints: ProviderEndpoints,
}

#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct LoginWithAmazonProviderDetails {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub authorize_scopes: Option<String>,
    pub endpoints: ProviderEndpoints,
}

#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct SignInWithAppleProviderDetails {
    pub client_id: Option<String>,
    pub team_id: Option<String>,
    pub key_id: Option<String>,
    pub private_key: Option<String>,
    pub authorize_scopes: Option<String>,
    pub endpoints: ProviderEndpoints,
}

/// Provider configuration, one variant per [`IdentityProviderTypeType`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProviderDetails {
    Oidc(OidcProviderDetails),
    Saml(SamlProviderDetails),
    Google(GoogleProviderDetails),
    Facebook(FacebookProviderDetails),
    LoginWithAmazon(LoginWithAmazonProviderDetails),
    SignInWithApple(SignInWithAppleProviderDetails),
}

const CLIENT_ID: &str = "client_id";
const CLIENT_SECRET: &str = "client_secret";
const AUTHORIZE_SCOPES: &str = "authorize_scopes";
const AUTHORIZE_URL: &str = "authorize_url";
const TOKEN_URL: &str = "token_url";
const TOKEN_REQUEST_METHOD: &str = "token_request_method";
const ATTRIBUTES_URL: &str = "attributes_url";
const ATTRIBUTES_URL_ADD_ATTRIBUTES: &str = "attributes_url_add_attributes";
const ATTRIBUTES_REQUEST_METHOD: &str = "attributes_request_method";
const OIDC_ISSUER: &str = "oidc_issuer";
const JWKS_URI: &str = "jwks_uri";
const API_VERSION: &str = "api_version";
const TEAM_ID: &str = "team_id";
const KEY_ID: &str = "key_id";
const PRIVATE_KEY: &str = "private_key";
const METADATA_URL: &str = "MetadataURL";
const METADATA_FILE: &str = "MetadataFile";
const IDP_SIGNOUT: &str = "IDPSignout";
const IDP_INIT: &str = "IDPInit";
const ENCRYPTED_RESPONSES: &str = "EncryptedResponses";
const REQUEST_SIGNING_ALGORITHM: &str = "RequestSigningAlgorithm";
const ACTIVE_ENCRYPTION_CERTIFICATE: &str = "ActiveEncryptionCertificate";
const SSO_REDIRECT_BINDING_URI: &str = "SSORedirectBindingURI";
const SLO_REDIRECT_BINDING_URI: &str = "SLORedirectBindingURI";

/// Consumes known keys from a wire map; whatever remains is unknown.
struct WireMap(BTreeMap<String, String>);

impl WireMap {
    fn take(&mut self, key: &'static str) -> Option<String> {
        self.0.remove(key)
    }

    fn take_bool(&mut self, key: &'static str) -> Result<Option<bool>, ProviderDetailsError> {
        match self.take(key) {
            None => Ok(None),
            Some(value) => match value.as_str() {
                "true" => Ok(Some(true)),
                "false" => Ok(Some(false)),
                _ => Err(ProviderDetailsError::InvalidValue {
                    key,
                    value,
                    expected: "\"true\" or \"false\"",
                }),
            },
        }
    }

    fn take_endpoints(&mut self) -> Result<ProviderEndpoints, ProviderDetailsError> {
        Ok(ProviderEndpoints {
            authorize_url: self.take(AUTHORIZE_URL),
            token_url: self.take(TOKEN_URL),
            token_request_method: self.take(TOKEN_REQUEST_METHOD),
            attributes_url: self.take(ATTRIBUTES_URL),
            attributes_url_add_attributes: self.take_bool(ATTRIBUTES_URL_ADD_ATTRIBUTES)?,
            oidc_issuer: self.take(OIDC_ISSUER),
        })
    }

    fn finish(self, provider_type: IdentityProviderTypeType) {
        for key in self.0.keys() {
            tracing::debug!(%provider_type, key = %key, "dropping unrecognized provider detail");
        }
    }
}

/// Builds a wire map, skipping absent members.
#[derive(Default)]
struct WireMapWriter(BTreeMap<String, String>);

impl WireMapWriter {
    fn put(&mut self, key: &'static str, value: &Option<String>) {
        if let Some(value) = value {
            self.0.insert(key.to_string(), value.clone());
        }
    }

    fn put_bool(&mut self, key: &'static str, value: Option<bool>) {
        if let Some(value) = value {
            self.0.insert(key.to_string(), value.to_string());
        }
    }

    fn put_endpoints(&mut self, endpoints: &ProviderEndpoints) {
        self.put(AUTHORIZE_URL, &endpoints.authorize_url);
        self.put(TOKEN_URL, &endpoints.token_url);
        self.put(TOKEN_REQUEST_METHOD, &endpoints.token_request_method);
        self.put(ATTRIBUTES_URL, &endpoints.attributes_url);
        self.put_bool(
            ATTRIBUTES_URL_ADD_ATTRIBUTES,
            endpoints.attributes_url_add_attributes,
        );
        self.put(OIDC_ISSUER, &endpoints.oidc_issuer);
    }
}

impl ProviderDetails {
    pub fn provider_type(&self) -> IdentityProviderTypeType {
        match self {
            ProviderDetails::Oidc(_) => IdentityProviderTypeType::Oidc,
            ProviderDetails::Saml(_) => IdentityProviderTypeType::Saml,
            ProviderDetails::Google(_) => IdentityProviderTypeType::Google,
            ProviderDetails::Facebook(_) => IdentityProviderTypeType::Facebook,
            ProviderDetails::LoginWithAmazon(_) => IdentityProviderTypeType::LoginWithAmazon,
            ProviderDetails::SignInWithApple(_) => IdentityProviderTypeType::SignInWithApple,
        }
    }

    /// Flattens the details into the wire map.
    pub fn to_wire_map(&self) -> BTreeMap<String, String> {
        let mut writer = WireMapWriter::default();
        match self {
            ProviderDetails::Oidc(details) => {
                writer.put(CLIENT_ID, &details.client_id);
                writer.put(CLIENT_SECRET, &details.client_secret);
                writer.put(
                    ATTRIBUTES_REQUEST_METHOD,
                    &details
                        .attributes_request_method
                        .map(|method| method.as_str().to_string()),
                );
                writer.put(OIDC_ISSUER, &details.oidc_issuer);
                writer.put(AUTHORIZE_SCOPES, &details.authorize_scopes);
                writer.put(AUTHORIZE_URL, &details.authorize_url);
                writer.put(TOKEN_URL, &details.token_url);
                writer.put(ATTRIBUTES_URL, &details.attributes_url);
                writer.put(JWKS_URI, &details.jwks_uri);
                writer.put_bool(
                    ATTRIBUTES_URL_ADD_ATTRIBUTES,
                    details.attributes_url_add_attributes,
                );
            }
            ProviderDetails::Saml(details) => {
                match &details.metadata {
                    Some(SamlMetadata::Url(url)) => writer.put(METADATA_URL, &Some(url.clone())),
                    Some(SamlMetadata::File(file)) => {
                        writer.put(METADATA_FILE, &Some(file.clone()))
                    }
                    None => {}
                }
                writer.put_bool(IDP_SIGNOUT, details.idp_signout);
                writer.put_bool(IDP_INIT, details.idp_init);
                writer.put_bool(ENCRYPTED_RESPONSES, details.encrypted_responses);
                writer.put(REQUEST_SIGNING_ALGORITHM, &details.request_signing_algorithm);
                writer.put(
                    ACTIVE_ENCRYPTION_CERTIFICATE,
                    &details.active_encryption_certificate,
                );
                writer.put(SSO_REDIRECT_BINDING_URI, &details.sso_redirect_binding_uri);
                writer.put(SLO_REDIRECT_BINDING_URI, &details.slo_redirect_binding_uri);
            }
            ProviderDetails::Google(details) => {
                writer.put(CLIENT_ID, &details.client_id);
                writer.put(CLIENT_SECRET, &details.client_secret);
                writer.put(AUTHORIZE_SCOPES, &details.authorize_scopes);
                writer.put_endpoints(&details.endpoints);
            }
            ProviderDetails::Facebook(details) => {
                writer.put(CLIENT_ID, &details.client_id);
                writer.put(CLIENT_SECRET, &details.client_secret);
                writer.put(AUTHORIZE_SCOPES, &details.authorize_scopes);
                writer.put(API_VERSION, &details.api_version);
                writer.put_endpoints(&details.endpoints);
            }
            ProviderDetails::LoginWithAmazon(details) => {
                writer.put(CLIENT_ID, &details.client_id);
                writer.put(CLIENT_SECRET, &details.client_secret);
                writer.put(AUTHORIZE_SCOPES, &details.authorize_scopes);
                writer.put_endpoints(&details.endpoints);
            }
            ProviderDetails::SignInWithApple(details) => {
                writer.put(CLIENT_ID, &details.client_id);
                writer.put(TEAM_ID, &details.team_id);
                writer.put(KEY_ID, &details.key_id);
                writer.put(PRIVATE_KEY, &details.private_key);
                writer.put(AUTHORIZE_SCOPES, &details.authorize_scopes);
                writer.put_endpoints(&details.endpoints);
            }
        }
        writer.0
    }

    /// Reads the wire map of a provider of type `provider_type`.
    ///
    /// Unrecognized keys are dropped.
    pub fn from_wire_map(
        provider_type: IdentityProviderTypeType,
        map: BTreeMap<String, String>,
    ) -> Result<Self, ProviderDetailsError> {
        let mut map = WireMap(map);
        let details = match provider_type {
            IdentityProviderTypeType::Oidc => {
                let attributes_request_method = match map.take(ATTRIBUTES_REQUEST_METHOD) {
                    None => None,
                    Some(value) => Some(value.parse::<AttributesRequestMethod>().map_err(
                        |_| ProviderDetailsError::InvalidValue {
                            key: ATTRIBUTES_REQUEST_METHOD,
                            value,
                            expected: "GET or POST",
                        },
                    )?),
                };
                ProviderDetails::Oidc(OidcProviderDetails {
                    client_id: map.take(CLIENT_ID),
                    client_secret: map.take(CLIENT_SECRET),
                    attributes_request_method,
                    oidc_issuer: map.take(OIDC_ISSUER),
                    authorize_scopes: map.take(AUTHORIZE_SCOPES),
                    authorize_url: map.take(AUTHORIZE_URL),
                    token_url: map.take(TOKEN_URL),
                    attributes_url: map.take(ATTRIBUTES_URL),
                    jwks_uri: map.take(JWKS_URI),
                    attributes_url_add_attributes: map.take_bool(ATTRIBUTES_URL_ADD_ATTRIBUTES)?,
                })
            }
            IdentityProviderTypeType::Saml => {
                let metadata = match (map.take(METADATA_URL), map.take(METADATA_FILE)) {
                    (Some(_), Some(_)) => {
                        return Err(ProviderDetailsError::ConflictingKeys {
                            provider_type,
                            first: METADATA_URL,
                            second: METADATA_FILE,
                        })
                    }
                    (Some(url), None) => Some(SamlMetadata::Url(url)),
                    (None, Some(file)) => Some(SamlMetadata::File(file)),
                    (None, None) => None,
                };
                ProviderDetails::Saml(SamlProviderDetails {
                    metadata,
                    idp_signout: map.take_bool(IDP_SIGNOUT)?,
                    idp_init: map.take_bool(IDP_INIT)?,
                    encrypted_responses: map.take_bool(ENCRYPTED_RESPONSES)?,
                    request_signing_algorithm: map.take(REQUEST_SIGNING_ALGORITHM),
                    active_encryption_certificate: map.take(ACTIVE_ENCRYPTION_CERTIFICATE),
                    sso_redirect_binding_uri: map.take(SSO_REDIRECT_BINDING_URI),
                    slo_redirect_binding_uri: map.take(SLO_REDIRECT_BINDING_URI),
                })
            }
            IdentityProviderTypeType::Google => ProviderDetails::Google(GoogleProviderDetails {
                client_id: map.take(CLIENT_ID),
                client_secret: map.take(CLIENT_SECRET),
                authorize_scopes: map.take(AUTHORIZE_SCOPES),
                endpoints: map.take_endpoints()?,
            }),
            IdentityProviderTypeType::Facebook => {
                ProviderDetails::Facebook(FacebookProviderDetails {
                    client_id: map.take(CLIENT_ID),
                    client_secret: map.take(CLIENT_SECRET),
                    authorize_scopes: map.take(AUTHORIZE_SCOPES),
                    api_version: map.take(API_VERSION),
                    endpoints: map.take_endpoints()?,
                })
            }
            IdentityProviderTypeType::LoginWithAmazon => {
                ProviderDetails::LoginWithAmazon(LoginWithAmazonProviderDetails {
                    client_id: map.take(CLIENT_ID),
                    client_secret: map.take(CLIENT_SECRET),
                    authorize_scopes: map.take(AUTHORIZE_SCOPES),
                    endpoints: map.take_endpoints()?,
                })
            }
            IdentityProviderTypeType::SignInWithApple => {
                ProviderDetails::SignInWithApple(SignInWithAppleProviderDetails {
                    client_id: map.take(CLIENT_ID),
                    team_id: map.take(TEAM_ID),
                    key_id: map.take(KEY_ID),
                    private_key: map.take(PRIVATE_KEY),
                    authorize_scopes: map.take(AUTHORIZE_SCOPES),
                    endpoints: map.take_endpoints()?,
                })
            }
        };
        map.finish(provider_type);
        Ok(details)
    }
}

/// `serialize_with` adapter writing details as the flat wire map.
pub(crate) fn serialize_as_wire_map<S: Serializer>(
    details: &Option<ProviderDetails>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match details {
        Some(details) => details.to_wire_map().serialize(serializer),
        None => serializer.serialize_none(),
    }
}

fn require(validator: &mut Validator, key: &'static str, value: &Option<String>) {
    validator.required(key, value.as_deref());
}

impl Validate for ProviderDetails {
    fn check(&self, validator: &mut Validator) {
        match self {
            ProviderDetails::Oidc(details) => {
                require(validator, CLIENT_ID, &details.client_id);
                validator.required(
                    ATTRIBUTES_REQUEST_METHOD,
                    details.attributes_request_method.as_ref(),
                );
                require(validator, OIDC_ISSUER, &details.oidc_issuer);
                require(validator, AUTHORIZE_SCOPES, &details.authorize_scopes);
            }
            ProviderDetails::Saml(details) => {
                if details.metadata.is_none() {
                    validator.required_when::<str>(
                        METADATA_URL,
                        None,
                        "MetadataFile is not set",
                    );
                }
            }
            ProviderDetails::Google(GoogleProviderDetails {
                client_id,
                client_secret,
                authorize_scopes,
                ..
            })
            | ProviderDetails::LoginWithAmazon(LoginWithAmazonProviderDetails {
                client_id,
                client_secret,
                authorize_scopes,
                ..
            })
            | ProviderDetails::Facebook(FacebookProviderDetails {
                client_id,
                client_secret,
                authorize_scopes,
                ..
            }) => {
                require(validator, CLIENT_ID, client_id);
                require(validator, CLIENT_SECRET, client_secret);
                require(validator, AUTHORIZE_SCOPES, authorize_scopes);
            }
            ProviderDetails::SignInWithApple(details) => {
                require(validator, CLIENT_ID, &details.client_id);
                require(validator, TEAM_ID, &details.team_id);
                require(validator, KEY_ID, &details.key_id);
                require(validator, PRIVATE_KEY, &details.private_key);
                require(validator, AUTHORIZE_SCOPES, &details.authorize_scopes);
            }
        }
    }
}

impl From<OidcProviderDetails> for ProviderDetails {
    fn from(details: OidcProviderDetails) -> Self {
        ProviderDetails::Oidc(details)
    }
}

impl From<SamlProviderDetails> for ProviderDetails {
    fn from(details: SamlProviderDetails) -> Self {
        ProviderDetails::Saml(details)
    }
}

impl From<GoogleProviderDetails> for ProviderDetails {
    fn from(details: GoogleProviderDetails) -> Self {
        ProviderDetails::Google(details)
    }
}

impl From<FacebookProviderDetails> for ProviderDetails {
    fn from(details: FacebookProviderDetails) -> Self {
        ProviderDetails::Facebook(details)
    }
}

impl From<LoginWithAmazonProviderDetails> for ProviderDetails {
    fn from(details: LoginWithAmazonProviderDetails) -> Self {
        ProviderDetails::LoginWithAmazon(details)
    }
}

impl From<SignInWithAppleProviderDetails> for ProviderDetails {
    fn from(details: SignInWithAppleProviderDetails) -> Self {
        ProviderDetails::SignInWithApple(details)
    }
}

impl fmt::Debug for ProviderEndpoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderEndpoints")
            .present("authorize_url", &self.authorize_url)
            .present("token_url", &self.token_url)
            .present("token_request_method", &self.token_request_method)
            .present("attributes_url", &self.attributes_url)
            .present(
                "attributes_url_add_attributes",
                &self.attributes_url_add_attributes,
            )
            .present("oidc_issuer", &self.oidc_issuer)
            .finish()
    }
}

/// Service-filled endpoints are omitted until one is known.
fn endpoints(endpoints: &ProviderEndpoints) -> Option<&ProviderEndpoints> {
    (*endpoints != ProviderEndpoints::default()).then_some(endpoints)
}

impl fmt::Debug for OidcProviderDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OidcProviderDetails")
            .redacted("client_id", &self.client_id)
            .redacted("client_secret", &self.client_secret)
            .present("attributes_request_method", &self.attributes_request_method)
            .present("oidc_issuer", &self.oidc_issuer)
            .present("authorize_scopes", &self.authorize_scopes)
            .present("authorize_url", &self.authorize_url)
            .present("token_url", &self.token_url)
            .present("attributes_url", &self.attributes_url)
            .present("jwks_uri", &self.jwks_uri)
            .present(
                "attributes_url_add_attributes",
                &self.attributes_url_add_attributes,
            )
            .finish()
    }
}

impl fmt::Debug for SamlProviderDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SamlProviderDetails")
            .present("metadata", &self.metadata)
            .present("idp_signout", &self.idp_signout)
            .present("idp_init", &self.idp_init)
            .present("encrypted_responses", &self.encrypted_responses)
            .present("request_signing_algorithm", &self.request_signing_algorithm)
            .present(
                "active_encryption_certificate",
                &self.active_encryption_certificate,
            )
            .present("sso_redirect_binding_uri", &self.sso_redirect_binding_uri)
            .present("slo_redirect_binding_uri", &self.slo_redirect_binding_uri)
            .finish()
    }
}

impl fmt::Debug for GoogleProviderDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoogleProviderDetails")
            .redacted("client_id", &self.client_id)
            .redacted("client_secret", &self.client_secret)
            .present("authorize_scopes", &self.authorize_scopes)
            .present("endpoints", &endpoints(&self.endpoints))
            .finish()
    }
}

impl fmt::Debug for FacebookProviderDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FacebookProviderDetails")
            .redacted("client_id", &self.client_id)
            .redacted("client_secret", &self.client_secret)
            .present("authorize_scopes", &self.authorize_scopes)
            .present("api_version", &self.api_version)
            .present("endpoints", &endpoints(&self.endpoints))
            .finish()
    }
}

impl fmt::Debug for LoginWithAmazonProviderDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginWithAmazonProviderDetails")
            .redacted("client_id", &self.client_id)
            .redacted("client_secret", &self.client_secret)
            .present("authorize_scopes", &self.authorize_scopes)
            .present("endpoints", &endpoints(&self.endpoints))
            .finish()
    }
}

impl fmt::Debug for SignInWithAppleProviderDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignInWithAppleProviderDetails")
            .redacted("client_id", &self.client_id)
            .present("team_id", &self.team_id)
            .present("key_id", &self.key_id)
            .redacted("private_key", &self.private_key)
            .present("authorize_scopes", &self.authorize_scopes)
            .present("endpoints", &endpoints(&self.endpoints))
            .finish()
    }
}
