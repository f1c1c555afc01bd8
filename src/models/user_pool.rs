//! User pool configuration blocks accepted by `UpdateUserPool`.

use serde::{Deserialize, Serialize};

use crate::core::debug_present;
use crate::core::validation::{Validate, Validator};
use crate::models::constraints;
use crate::models::{
    AdvancedSecurityModeType, DefaultEmailOptionType, EmailSendingAccountType,
    RecoveryOptionNameType, VerifiedAttributeType,
};

#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PasswordPolicyType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_length: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_uppercase: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_lowercase: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_numbers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_symbols: Option<bool>,
    /// Days an administrator-set temporary password stays valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temporary_password_validity_days: Option<i32>,
}

debug_present!(PasswordPolicyType {
    minimum_length,
    require_uppercase,
    require_lowercase,
    require_numbers,
    require_symbols,
    temporary_password_validity_days,
});

impl Validate for PasswordPolicyType {
    fn check(&self, validator: &mut Validator) {
        validator.range("MinimumLength", self.minimum_length.map(i64::from), 6, 99);
        validator.range(
            "TemporaryPasswordValidityDays",
            self.temporary_password_validity_days.map(i64::from),
            0,
            365,
        );
    }
}

#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserPoolPolicyType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_policy: Option<PasswordPolicyType>,
}

debug_present!(UserPoolPolicyType { password_policy });

impl Validate for UserPoolPolicyType {
    fn check(&self, validator: &mut Validator) {
        validator.nested("PasswordPolicy", self.password_policy.as_ref());
    }
}

/// Lambda triggers, by ARN.
#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LambdaConfigType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_sign_up: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_confirmation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_authentication: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_authentication: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub define_auth_challenge: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_auth_challenge: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify_auth_challenge_response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_token_generation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_migration: Option<String>,
    #[serde(rename = "KMSKeyID", skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
}

debug_present!(LambdaConfigType {
    pre_sign_up,
    custom_message,
    post_confirmation,
    pre_authentication,
    post_authentication,
    define_auth_challenge,
    create_auth_challenge,
    verify_auth_challenge_response,
    pre_token_generation,
    user_migration,
    kms_key_id,
});

impl Validate for LambdaConfigType {
    fn check(&self, validator: &mut Validator) {
        let arns = [
            ("PreSignUp", &self.pre_sign_up),
            ("CustomMessage", &self.custom_message),
            ("PostConfirmation", &self.post_confirmation),
            ("PreAuthentication", &self.pre_authentication),
            ("PostAuthentication", &self.post_authentication),
            ("DefineAuthChallenge", &self.define_auth_challenge),
            ("CreateAuthChallenge", &self.create_auth_challenge),
            ("VerifyAuthChallengeResponse", &self.verify_auth_challenge_response),
            ("PreTokenGeneration", &self.pre_token_generation),
            ("UserMigration", &self.user_migration),
            ("KMSKeyID", &self.kms_key_id),
        ];
        for (field, value) in arns {
            validator.string(field, value.as_deref(), &constraints::ARN);
        }
    }
}

/// Templates for verification messages.
#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VerificationMessageTemplateType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_message_by_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_subject_by_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_email_option: Option<DefaultEmailOptionType>,
}

debug_present!(VerificationMessageTemplateType {
    sms_message,
    email_message,
    email_subject,
    email_message_by_link,
    email_subject_by_link,
    default_email_option,
});

impl Validate for VerificationMessageTemplateType {
    fn check(&self, validator: &mut Validator) {
        validator.string(
            "SmsMessage",
            self.sms_message.as_deref(),
            &constraints::SMS_MESSAGE,
        );
        validator.string(
            "EmailMessage",
            self.email_message.as_deref(),
            &constraints::EMAIL_MESSAGE,
        );
        validator.string(
            "EmailSubject",
            self.email_subject.as_deref(),
            &constraints::EMAIL_SUBJECT,
        );
        validator.string(
            "EmailMessageByLink",
            self.email_message_by_link.as_deref(),
            &constraints::EMAIL_MESSAGE_BY_LINK,
        );
        validator.string(
            "EmailSubjectByLink",
            self.email_subject_by_link.as_deref(),
            &constraints::EMAIL_SUBJECT,
        );
    }
}

#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserAttributeUpdateSettingsType {
    /// Attributes whose old value stays active until the new one is verified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes_require_verification_before_update: Option<Vec<VerifiedAttributeType>>,
}

debug_present!(UserAttributeUpdateSettingsType { attributes_require_verification_before_update });

impl Validate for UserAttributeUpdateSettingsType {
    fn check(&self, _validator: &mut Validator) {}
}

#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeviceConfigurationType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub challenge_required_on_new_device: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_only_remembered_on_user_prompt: Option<bool>,
}

debug_present!(DeviceConfigurationType {
    challenge_required_on_new_device,
    device_only_remembered_on_user_prompt,
});

impl Validate for DeviceConfigurationType {
    fn check(&self, _validator: &mut Validator) {}
}

/// Email delivery settings.
///
/// With [`EmailSendingAccountType::Developer`], mail goes through the caller's
/// own SES identity and `source_arn` must be set.
#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmailConfigurationType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_email_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_sending_account: Option<EmailSendingAccountType>,
    /// e.g. `John Smith <john@example.com>`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration_set: Option<String>,
}

debug_present!(EmailConfigurationType {
    source_arn,
    reply_to_email_address,
    email_sending_account,
    from,
    configuration_set,
});

impl Validate for EmailConfigurationType {
    fn check(&self, validator: &mut Validator) {
        if self.email_sending_account == Some(EmailSendingAccountType::Developer) {
            validator.required_when(
                "SourceArn",
                self.source_arn.as_deref(),
                "EmailSendingAccount is DEVELOPER",
            );
        }
        validator.string("SourceArn", self.source_arn.as_deref(), &constraints::ARN);
        validator.string(
            "ReplyToEmailAddress",
            self.reply_to_email_address.as_deref(),
            &constraints::EMAIL_ADDRESS,
        );
        validator.string(
            "ConfigurationSet",
            self.configuration_set.as_deref(),
            &constraints::CONFIGURATION_SET,
        );
    }
}

#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SmsConfigurationType {
    /// IAM role the service assumes to publish through SNS. Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sns_caller_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sns_region: Option<String>,
}

debug_present!(SmsConfigurationType { sns_caller_arn, external_id, sns_region });

impl Validate for SmsConfigurationType {
    fn check(&self, validator: &mut Validator) {
        validator.required_string(
            "SnsCallerArn",
            self.sns_caller_arn.as_deref(),
            &constraints::ARN,
        );
        validator.string(
            "SnsRegion",
            self.sns_region.as_deref(),
            &constraints::SNS_REGION,
        );
    }
}

#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MessageTemplateType {
    #[serde(rename = "SMSMessage", skip_serializing_if = "Option::is_none")]
    pub sms_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_subject: Option<String>,
}

debug_present!(MessageTemplateType { sms_message, email_message, email_subject });

impl Validate for MessageTemplateType {
    fn check(&self, validator: &mut Validator) {
        validator.string(
            "SMSMessage",
            self.sms_message.as_deref(),
            &constraints::SMS_MESSAGE,
        );
        validator.string(
            "EmailMessage",
            self.email_message.as_deref(),
            &constraints::EMAIL_MESSAGE,
        );
        validator.string(
            "EmailSubject",
            self.email_subject.as_deref(),
            &constraints::EMAIL_SUBJECT,
        );
    }
}

#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdminCreateUserConfigType {
    /// Only administrators may create users when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_admin_create_user_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unused_account_validity_days: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invite_message_template: Option<MessageTemplateType>,
}

debug_present!(AdminCreateUserConfigType {
    allow_admin_create_user_only,
    unused_account_validity_days,
    invite_message_template,
});

impl Validate for AdminCreateUserConfigType {
    fn check(&self, validator: &mut Validator) {
        validator.range(
            "UnusedAccountValidityDays",
            self.unused_account_validity_days.map(i64::from),
            0,
            365,
        );
        validator.nested(
            "InviteMessageTemplate",
            self.invite_message_template.as_ref(),
        );
    }
}

#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserPoolAddOnsType {
    /// Required when the add-ons block is present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced_security_mode: Option<AdvancedSecurityModeType>,
}

debug_present!(UserPoolAddOnsType { advanced_security_mode });

impl Validate for UserPoolAddOnsType {
    fn check(&self, validator: &mut Validator) {
        validator.required("AdvancedSecurityMode", self.advanced_security_mode.as_ref());
    }
}

#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecoveryOptionType {
    /// 1 is tried first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<RecoveryOptionNameType>,
}

debug_present!(RecoveryOptionType { priority, name });

impl RecoveryOptionType {
    pub fn new(priority: i32, name: RecoveryOptionNameType) -> Self {
        Self {
            priority: Some(priority),
            name: Some(name),
        }
    }
}

impl Validate for RecoveryOptionType {
    fn check(&self, validator: &mut Validator) {
        if validator.required("Priority", self.priority.as_ref()) {
            validator.range("Priority", self.priority.map(i64::from), 1, 2);
        }
        validator.required("Name", self.name.as_ref());
    }
}

#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccountRecoverySettingType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovery_mechanisms: Option<Vec<RecoveryOptionType>>,
}

debug_present!(AccountRecoverySettingType { recovery_mechanisms });

impl Validate for AccountRecoverySettingType {
    fn check(&self, validator: &mut Validator) {
        if let Some(mechanisms) = &self.recovery_mechanisms {
            validator.item_count("RecoveryMechanisms", Some(mechanisms.len()), 1, 2);
            validator.each("RecoveryMechanisms", mechanisms);
        }
    }
}
