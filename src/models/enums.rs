//! Closed enumerations exchanged with the service.
//!
//! Each enum converts to and from its wire string in exactly one place
//! (`as_str` / `FromStr`); serde goes through the same conversion, so an
//! unrecognized value is rejected rather than carried as a free string.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A wire string that is not a member of a closed enumeration.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
#[error("`{value}` is not a valid {type_name} (expected one of: {})", .expected.join(", "))]
pub struct UnknownVariantError {
    type_name: &'static str,
    value: String,
    expected: &'static [&'static str],
}

impl UnknownVariantError {
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn expected(&self) -> &'static [&'static str] {
        self.expected
    }
}

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$variant_meta:meta])* $variant:ident => $wire:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $( $(#[$variant_meta])* $variant, )+
        }

        impl $name {
            /// The wire representation of this value.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $wire, )+
                }
            }

            /// Every wire value accepted for this type.
            pub const fn values() -> &'static [&'static str] {
                &[$( $wire, )+]
            }
        }

        impl FromStr for $name {
            type Err = UnknownVariantError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $( $wire => Ok($name::$variant), )+
                    other => Err(UnknownVariantError {
                        type_name: stringify!($name),
                        value: other.to_string(),
                        expected: Self::values(),
                    }),
                }
            }
        }

        impl TryFrom<&str> for $name {
            type Error = UnknownVariantError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = String::deserialize(deserializer)?;
                value.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

wire_enum! {
    /// How an authentication request proves the user's identity.
    pub enum AuthFlowType {
        UserSrpAuth => "USER_SRP_AUTH",
        RefreshTokenAuth => "REFRESH_TOKEN_AUTH",
        RefreshToken => "REFRESH_TOKEN",
        CustomAuth => "CUSTOM_AUTH",
        AdminNoSrpAuth => "ADMIN_NO_SRP_AUTH",
        UserPasswordAuth => "USER_PASSWORD_AUTH",
        AdminUserPasswordAuth => "ADMIN_USER_PASSWORD_AUTH",
    }
}

wire_enum! {
    /// The next step the service asks the caller to complete.
    pub enum ChallengeNameType {
        SmsMfa => "SMS_MFA",
        SoftwareTokenMfa => "SOFTWARE_TOKEN_MFA",
        SelectMfaType => "SELECT_MFA_TYPE",
        MfaSetup => "MFA_SETUP",
        PasswordVerifier => "PASSWORD_VERIFIER",
        CustomChallenge => "CUSTOM_CHALLENGE",
        DeviceSrpAuth => "DEVICE_SRP_AUTH",
        DevicePasswordVerifier => "DEVICE_PASSWORD_VERIFIER",
        AdminNoSrpAuth => "ADMIN_NO_SRP_AUTH",
        NewPasswordRequired => "NEW_PASSWORD_REQUIRED",
    }
}

wire_enum! {
    /// Whether an invitation message is resent or suppressed.
    pub enum MessageActionType {
        Resend => "RESEND",
        Suppress => "SUPPRESS",
    }
}

wire_enum! {
    pub enum DeliveryMediumType {
        Sms => "SMS",
        Email => "EMAIL",
    }
}

wire_enum! {
    /// Which sender the user pool uses for email.
    pub enum EmailSendingAccountType {
        CognitoDefault => "COGNITO_DEFAULT",
        Developer => "DEVELOPER",
    }
}

wire_enum! {
    /// Federated identity provider kinds. Wire values are case-sensitive.
    pub enum IdentityProviderTypeType {
        Saml => "SAML",
        Facebook => "Facebook",
        Google => "Google",
        LoginWithAmazon => "LoginWithAmazon",
        SignInWithApple => "SignInWithApple",
        Oidc => "OIDC",
    }
}

wire_enum! {
    pub enum UserStatusType {
        Unconfirmed => "UNCONFIRMED",
        Confirmed => "CONFIRMED",
        Archived => "ARCHIVED",
        Compromised => "COMPROMISED",
        Unknown => "UNKNOWN",
        ResetRequired => "RESET_REQUIRED",
        ForceChangePassword => "FORCE_CHANGE_PASSWORD",
    }
}

wire_enum! {
    pub enum UserPoolMfaType {
        Off => "OFF",
        On => "ON",
        Optional => "OPTIONAL",
    }
}

wire_enum! {
    pub enum VerifiedAttributeType {
        PhoneNumber => "phone_number",
        Email => "email",
    }
}

wire_enum! {
    pub enum DefaultEmailOptionType {
        ConfirmWithLink => "CONFIRM_WITH_LINK",
        ConfirmWithCode => "CONFIRM_WITH_CODE",
    }
}

wire_enum! {
    pub enum AdvancedSecurityModeType {
        Off => "OFF",
        Audit => "AUDIT",
        Enforced => "ENFORCED",
    }
}

wire_enum! {
    pub enum RecoveryOptionNameType {
        VerifiedEmail => "verified_email",
        VerifiedPhoneNumber => "verified_phone_number",
        AdminOnly => "admin_only",
    }
}

wire_enum! {
    pub enum DeletionProtectionType {
        Active => "ACTIVE",
        Inactive => "INACTIVE",
    }
}

wire_enum! {
    /// Error behavior when a user does not exist in the pool.
    pub enum PreventUserExistenceErrorTypes {
        Legacy => "LEGACY",
        Enabled => "ENABLED",
    }
}

wire_enum! {
    /// Authentication flows an app client may use. The un-prefixed names are legacy.
    pub enum ExplicitAuthFlowsType {
        AdminNoSrpAuth => "ADMIN_NO_SRP_AUTH",
        CustomAuthFlowOnly => "CUSTOM_AUTH_FLOW_ONLY",
        UserPasswordAuth => "USER_PASSWORD_AUTH",
        AllowAdminUserPasswordAuth => "ALLOW_ADMIN_USER_PASSWORD_AUTH",
        AllowCustomAuth => "ALLOW_CUSTOM_AUTH",
        AllowUserPasswordAuth => "ALLOW_USER_PASSWORD_AUTH",
        AllowUserSrpAuth => "ALLOW_USER_SRP_AUTH",
        AllowRefreshTokenAuth => "ALLOW_REFRESH_TOKEN_AUTH",
    }
}

wire_enum! {
    pub enum OAuthFlowType {
        Code => "code",
        Implicit => "implicit",
        ClientCredentials => "client_credentials",
    }
}

wire_enum! {
    pub enum TimeUnitsType {
        Seconds => "seconds",
        Minutes => "minutes",
        Hours => "hours",
        Days => "days",
    }
}

wire_enum! {
    /// HTTP method used by an OIDC provider's userinfo endpoint.
    pub enum AttributesRequestMethod {
        Get => "GET",
        Post => "POST",
    }
}
