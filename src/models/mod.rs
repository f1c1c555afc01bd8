//! Value types shared by the operations: enumerations, nested structures and
//! their documented constraints.

mod common;
pub(crate) mod constraints;
mod enums;
mod identity_provider;
pub(crate) mod provider_details;
mod user_pool;
mod user_pool_client;

#[cfg(test)]
mod tests;

pub use common::{
    AnalyticsMetadataType, AttributeType, AuthenticationResultType, ContextDataType, HttpHeader,
    MfaOptionType, NewDeviceMetadataType, UserContextDataType, UserType,
};
pub use enums::{
    AdvancedSecurityModeType, AttributesRequestMethod, AuthFlowType, ChallengeNameType,
    DefaultEmailOptionType, DeletionProtectionType, DeliveryMediumType, EmailSendingAccountType,
    ExplicitAuthFlowsType, IdentityProviderTypeType, MessageActionType, OAuthFlowType,
    PreventUserExistenceErrorTypes, RecoveryOptionNameType, TimeUnitsType, UnknownVariantError,
    UserPoolMfaType, UserStatusType, VerifiedAttributeType,
};
pub use identity_provider::IdentityProviderType;
pub use provider_details::{
    FacebookProviderDetails, GoogleProviderDetails, LoginWithAmazonProviderDetails,
    OidcProviderDetails, ProviderDetails, ProviderDetailsError, ProviderEndpoints,
    SamlMetadata, SamlProviderDetails, SignInWithAppleProviderDetails,
};
pub use user_pool::{
    AccountRecoverySettingType, AdminCreateUserConfigType, DeviceConfigurationType,
    EmailConfigurationType, LambdaConfigType, MessageTemplateType, PasswordPolicyType,
    RecoveryOptionType, SmsConfigurationType, UserAttributeUpdateSettingsType,
    UserPoolAddOnsType, UserPoolPolicyType, VerificationMessageTemplateType,
};
pub use user_pool_client::{
    AnalyticsConfigurationType, TokenValidityUnitsType, UserPoolClientType,
};
