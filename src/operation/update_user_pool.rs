//! `UpdateUserPool`: replaces the configuration of a user pool.
//!
//! Members left unset are reset to their defaults by the service.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::core::entries::{insert_unique, DuplicateKeyError};
use crate::core::validation::{Validate, Validator};
use crate::core::DebugPresent;
use crate::models::constraints;
use crate::models::{
    AccountRecoverySettingType, AdminCreateUserConfigType, DeletionProtectionType,
    DeviceConfigurationType, EmailConfigurationType, LambdaConfigType, SmsConfigurationType,
    UserAttributeUpdateSettingsType, UserPoolAddOnsType, UserPoolMfaType, UserPoolPolicyType,
    VerificationMessageTemplateType, VerifiedAttributeType,
};
use crate::operation::Operation;

#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateUserPoolInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    user_pool_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    policies: Option<UserPoolPolicyType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    deletion_protection: Option<DeletionProtectionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lambda_config: Option<LambdaConfigType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    auto_verified_attributes: Option<Vec<VerifiedAttributeType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sms_verification_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email_verification_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email_verification_subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    verification_message_template: Option<VerificationMessageTemplateType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sms_authentication_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_attribute_update_settings: Option<UserAttributeUpdateSettingsType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mfa_configuration: Option<UserPoolMfaType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    device_configuration: Option<DeviceConfigurationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email_configuration: Option<EmailConfigurationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sms_configuration: Option<SmsConfigurationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_pool_tags: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    admin_create_user_config: Option<AdminCreateUserConfigType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_pool_add_ons: Option<UserPoolAddOnsType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    account_recovery_setting: Option<AccountRecoverySettingType>,
}

impl UpdateUserPoolInput {
    pub fn builder() -> UpdateUserPoolInputBuilder {
        UpdateUserPoolInputBuilder::default()
    }

    pub fn to_builder(&self) -> UpdateUserPoolInputBuilder {
        UpdateUserPoolInputBuilder {
            inner: self.clone(),
        }
    }

    pub fn user_pool_id(&self) -> Option<&str> {
        self.user_pool_id.as_deref()
    }

    pub fn policies(&self) -> Option<&UserPoolPolicyType> {
        self.policies.as_ref()
    }

    pub fn deletion_protection(&self) -> Option<DeletionProtectionType> {
        self.deletion_protection
    }

    pub fn lambda_config(&self) -> Option<&LambdaConfigType> {
        self.lambda_config.as_ref()
    }

    pub fn auto_verified_attributes(&self) -> &[VerifiedAttributeType] {
        self.auto_verified_attributes.as_deref().unwrap_or_default()
    }

    pub fn sms_verification_message(&self) -> Option<&str> {
        self.sms_verification_message.as_deref()
    }

    pub fn email_verification_message(&self) -> Option<&str> {
        self.email_verification_message.as_deref()
    }

    pub fn email_verification_subject(&self) -> Option<&str> {
        self.email_verification_subject.as_deref()
    }

    pub fn verification_message_template(&self) -> Option<&VerificationMessageTemplateType> {
        self.verification_message_template.as_ref()
    }

    pub fn sms_authentication_message(&self) -> Option<&str> {
        self.sms_authentication_message.as_deref()
    }

    pub fn user_attribute_update_settings(&self) -> Option<&UserAttributeUpdateSettingsType> {
        self.user_attribute_update_settings.as_ref()
    }

    pub fn mfa_configuration(&self) -> Option<UserPoolMfaType> {
        self.mfa_configuration
    }

    pub fn device_configuration(&self) -> Option<&DeviceConfigurationType> {
        self.device_configuration.as_ref()
    }

    pub fn email_configuration(&self) -> Option<&EmailConfigurationType> {
        self.email_configuration.as_ref()
    }

    pub fn sms_configuration(&self) -> Option<&SmsConfigurationType> {
        self.sms_configuration.as_ref()
    }

    /// Cost-allocation tags.
    pub fn user_pool_tags(&self) -> Option<&BTreeMap<String, String>> {
        self.user_pool_tags.as_ref()
    }

    pub fn admin_create_user_config(&self) -> Option<&AdminCreateUserConfigType> {
        self.admin_create_user_config.as_ref()
    }

    pub fn user_pool_add_ons(&self) -> Option<&UserPoolAddOnsType> {
        self.user_pool_add_ons.as_ref()
    }

    pub fn account_recovery_setting(&self) -> Option<&AccountRecoverySettingType> {
        self.account_recovery_setting.as_ref()
    }
}

impl fmt::Debug for UpdateUserPoolInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateUserPoolInput")
            .present("user_pool_id", &self.user_pool_id)
            .present("policies", &self.policies)
            .present("deletion_protection", &self.deletion_protection)
            .present("lambda_config", &self.lambda_config)
            .present("auto_verified_attributes", &self.auto_verified_attributes)
            .present("sms_verification_message", &self.sms_verification_message)
            .present("email_verification_message", &self.email_verification_message)
            .present("email_verification_subject", &self.email_verification_subject)
            .present("verification_message_template", &self.verification_message_template)
            .present("sms_authentication_message", &self.sms_authentication_message)
            .present("user_attribute_update_settings", &self.user_attribute_update_settings)
            .present("mfa_configuration", &self.mfa_configuration)
            .present("device_configuration", &self.device_configuration)
            .present("email_configuration", &self.email_configuration)
            .present("sms_configuration", &self.sms_configuration)
            .present("user_pool_tags", &self.user_pool_tags)
            .present("admin_create_user_config", &self.admin_create_user_config)
            .present("user_pool_add_ons", &self.user_pool_add_ons)
            .present("account_recovery_setting", &self.account_recovery_setting)
            .finish()
    }
}

impl Validate for UpdateUserPoolInput {
    fn check(&self, validator: &mut Validator) {
        validator.required_string(
            "UserPoolId",
            self.user_pool_id.as_deref(),
            &constraints::USER_POOL_ID,
        );
        validator.nested("Policies", self.policies.as_ref());
        validator.nested("LambdaConfig", self.lambda_config.as_ref());
        validator.string(
            "SmsVerificationMessage",
            self.sms_verification_message.as_deref(),
            &constraints::SMS_MESSAGE,
        );
        validator.string(
            "EmailVerificationMessage",
            self.email_verification_message.as_deref(),
            &constraints::EMAIL_MESSAGE,
        );
        validator.string(
            "EmailVerificationSubject",
            self.email_verification_subject.as_deref(),
            &constraints::EMAIL_SUBJECT,
        );
        validator.nested(
            "VerificationMessageTemplate",
            self.verification_message_template.as_ref(),
        );
        validator.string(
            "SmsAuthenticationMessage",
            self.sms_authentication_message.as_deref(),
            &constraints::SMS_MESSAGE,
        );
        validator.nested(
            "UserAttributeUpdateSettings",
            self.user_attribute_update_settings.as_ref(),
        );
        validator.nested("DeviceConfiguration", self.device_configuration.as_ref());
        validator.nested("EmailConfiguration", self.email_configuration.as_ref());
        validator.nested("SmsConfiguration", self.sms_configuration.as_ref());
        validator.map(
            "UserPoolTags",
            self.user_pool_tags.as_ref(),
            &constraints::TAG_KEY,
            &constraints::TAG_VALUE,
        );
        validator.nested(
            "AdminCreateUserConfig",
            self.admin_create_user_config.as_ref(),
        );
        validator.nested("UserPoolAddOns", self.user_pool_add_ons.as_ref());
        validator.nested(
            "AccountRecoverySetting",
            self.account_recovery_setting.as_ref(),
        );
    }
}

impl Operation for UpdateUserPoolInput {
    const NAME: &'static str = "UpdateUserPool";
    type Output = UpdateUserPoolOutput;
}

#[derive(Clone, PartialEq, Default)]
pub struct UpdateUserPoolInputBuilder {
    inner: UpdateUserPoolInput,
}

impl UpdateUserPoolInputBuilder {
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

    pub fn policies(mut self, input: UserPoolPolicyType) -> Self {
        self.inner.policies = Some(input);
        self
    }

    pub fn set_policies(mut self, input: Option<UserPoolPolicyType>) -> Self {
        self.inner.policies = input;
        self
    }

    pub fn get_policies(&self) -> &Option<UserPoolPolicyType> {
        &self.inner.policies
    }

    pub fn deletion_protection(mut self, input: DeletionProtectionType) -> Self {
        self.inner.deletion_protection = Some(input);
        self
    }

    pub fn set_deletion_protection(mut self, input: Option<DeletionProtectionType>) -> Self {
        self.inner.deletion_protection = input;
        self
    }

    pub fn get_deletion_protection(&self) -> &Option<DeletionProtectionType> {
        &self.inner.deletion_protection
    }

    pub fn lambda_config(mut self, input: LambdaConfigType) -> Self {
        self.inner.lambda_config = Some(input);
        self
    }

    pub fn set_lambda_config(mut self, input: Option<LambdaConfigType>) -> Self {
        self.inner.lambda_config = input;
        self
    }

    pub fn get_lambda_config(&self) -> &Option<LambdaConfigType> {
        &self.inner.lambda_config
    }

    /// Appends one auto-verified attribute.
    pub fn auto_verified_attributes(mut self, input: VerifiedAttributeType) -> Self {
        self.inner
            .auto_verified_attributes
            .get_or_insert_with(Vec::new)
            .push(input);
        self
    }

    pub fn set_auto_verified_attributes(mut self, input: Option<Vec<VerifiedAttributeType>>) -> Self {
        self.inner.auto_verified_attributes = input;
        self
    }

    pub fn get_auto_verified_attributes(&self) -> &Option<Vec<VerifiedAttributeType>> {
        &self.inner.auto_verified_attributes
    }

    pub fn sms_verification_message(mut self, input: impl Into<String>) -> Self {
        self.inner.sms_verification_message = Some(input.into());
        self
    }

    pub fn set_sms_verification_message(mut self, input: Option<String>) -> Self {
        self.inner.sms_verification_message = input;
        self
    }

    pub fn get_sms_verification_message(&self) -> &Option<String> {
        &self.inner.sms_verification_message
    }

    pub fn email_verification_message(mut self, input: impl Into<String>) -> Self {
        self.inner.email_verification_message = Some(input.into());
        self
    }

    pub fn set_email_verification_message(mut self, input: Option<String>) -> Self {
        self.inner.email_verification_message = input;
        self
    }

    pub fn get_email_verification_message(&self) -> &Option<String> {
        &self.inner.email_verification_message
    }

    pub fn email_verification_subject(mut self, input: impl Into<String>) -> Self {
        self.inner.email_verification_subject = Some(input.into());
        self
    }

    pub fn set_email_verification_subject(mut self, input: Option<String>) -> Self {
        self.inner.email_verification_subject = input;
        self
    }

    pub fn get_email_verification_subject(&self) -> &Option<String> {
        &self.inner.email_verification_subject
    }

    pub fn verification_message_template(mut self, input: VerificationMessageTemplateType) -> Self {
        self.inner.verification_message_template = Some(input);
        self
    }

    pub fn set_verification_message_template(
        mut self,
        input: Option<VerificationMessageTemplateType>,
    ) -> Self {
        self.inner.verification_message_template = input;
        self
    }

    pub fn get_verification_message_template(&self) -> &Option<VerificationMessageTemplateType> {
        &self.inner.verification_message_template
    }

    pub fn sms_authentication_message(mut self, input: impl Into<String>) -> Self {
        self.inner.sms_authentication_message = Some(input.into());
        self
    }

    pub fn set_sms_authentication_message(mut self, input: Option<String>) -> Self {
        self.inner.sms_authentication_message = input;
        self
    }

    pub fn get_sms_authentication_message(&self) -> &Option<String> {
        &self.inner.sms_authentication_message
    }

    pub fn user_attribute_update_settings(mut self, input: UserAttributeUpdateSettingsType) -> Self {
        self.inner.user_attribute_update_settings = Some(input);
        self
    }

    pub fn set_user_attribute_update_settings(
        mut self,
        input: Option<UserAttributeUpdateSettingsType>,
    ) -> Self {
        self.inner.user_attribute_update_settings = input;
        self
    }

    pub fn get_user_attribute_update_settings(&self) -> &Option<UserAttributeUpdateSettingsType> {
        &self.inner.user_attribute_update_settings
    }

    pub fn mfa_configuration(mut self, input: UserPoolMfaType) -> Self {
        self.inner.mfa_configuration = Some(input);
        self
    }

    pub fn set_mfa_configuration(mut self, input: Option<UserPoolMfaType>) -> Self {
        self.inner.mfa_configuration = input;
        self
    }

    pub fn get_mfa_configuration(&self) -> &Option<UserPoolMfaType> {
        &self.inner.mfa_configuration
    }

    pub fn device_configuration(mut self, input: DeviceConfigurationType) -> Self {
        self.inner.device_configuration = Some(input);
        self
    }

    pub fn set_device_configuration(mut self, input: Option<DeviceConfigurationType>) -> Self {
        self.inner.device_configuration = input;
        self
    }

    pub fn get_device_configuration(&self) -> &Option<DeviceConfigurationType> {
        &self.inner.device_configuration
    }

    pub fn email_configuration(mut self, input: EmailConfigurationType) -> Self {
        self.inner.email_configuration = Some(input);
        self
    }

    pub fn set_email_configuration(mut self, input: Option<EmailConfigurationType>) -> Self {
        self.inner.email_configuration = input;
        self
    }

    pub fn get_email_configuration(&self) -> &Option<EmailConfigurationType> {
        &self.inner.email_configuration
    }

    pub fn sms_configuration(mut self, input: SmsConfigurationType) -> Self {
        self.inner.sms_configuration = Some(input);
        self
    }

    pub fn set_sms_configuration(mut self, input: Option<SmsConfigurationType>) -> Self {
        self.inner.sms_configuration = input;
        self
    }

    pub fn get_sms_configuration(&self) -> &Option<SmsConfigurationType> {
        &self.inner.sms_configuration
    }

    pub fn add_user_pool_tags_entry(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&mut Self, DuplicateKeyError> {
        insert_unique(
            &mut self.inner.user_pool_tags,
            "UserPoolTags",
            key.into(),
            value.into(),
        )?;
        Ok(self)
    }

    pub fn clear_user_pool_tags_entries(&mut self) -> &mut Self {
        self.inner.user_pool_tags = None;
        self
    }

    pub fn set_user_pool_tags(mut self, input: Option<BTreeMap<String, String>>) -> Self {
        self.inner.user_pool_tags = input;
        self
    }

    pub fn get_user_pool_tags(&self) -> &Option<BTreeMap<String, String>> {
        &self.inner.user_pool_tags
    }

    pub fn admin_create_user_config(mut self, input: AdminCreateUserConfigType) -> Self {
        self.inner.admin_create_user_config = Some(input);
        self
    }

    pub fn set_admin_create_user_config(mut self, input: Option<AdminCreateUserConfigType>) -> Self {
        self.inner.admin_create_user_config = input;
        self
    }

    pub fn get_admin_create_user_config(&self) -> &Option<AdminCreateUserConfigType> {
        &self.inner.admin_create_user_config
    }

    pub fn user_pool_add_ons(mut self, input: UserPoolAddOnsType) -> Self {
        self.inner.user_pool_add_ons = Some(input);
        self
    }

    pub fn set_user_pool_add_ons(mut self, input: Option<UserPoolAddOnsType>) -> Self {
        self.inner.user_pool_add_ons = input;
        self
    }

    pub fn get_user_pool_add_ons(&self) -> &Option<UserPoolAddOnsType> {
        &self.inner.user_pool_add_ons
    }

    pub fn account_recovery_setting(mut self, input: AccountRecoverySettingType) -> Self {
        self.inner.account_recovery_setting = Some(input);
        self
    }

    pub fn set_account_recovery_setting(
        mut self,
        input: Option<AccountRecoverySettingType>,
    ) -> Self {
        self.inner.account_recovery_setting = input;
        self
    }

    pub fn get_account_recovery_setting(&self) -> &Option<AccountRecoverySettingType> {
        &self.inner.account_recovery_setting
    }

    pub fn build(self) -> UpdateUserPoolInput {
        self.inner
    }
}

impl From<UpdateUserPoolInput> for UpdateUserPoolInputBuilder {
    fn from(inner: UpdateUserPoolInput) -> Self {
        Self { inner }
    }
}

impl fmt::Debug for UpdateUserPoolInputBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UpdateUserPoolInputBuilder")
            .field(&self.inner)
            .finish()
    }
}

/// The service returns an empty body on success.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct UpdateUserPoolOutput {}

impl UpdateUserPoolOutput {
    pub fn builder() -> UpdateUserPoolOutputBuilder {
        UpdateUserPoolOutputBuilder
    }

    pub fn to_builder(&self) -> UpdateUserPoolOutputBuilder {
        UpdateUserPoolOutputBuilder::from(self.clone())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpdateUserPoolOutputBuilder;

impl UpdateUserPoolOutputBuilder {
    pub fn build(self) -> UpdateUserPoolOutput {
        UpdateUserPoolOutput {}
    }
}

impl From<UpdateUserPoolOutput> for UpdateUserPoolOutputBuilder {
    fn from(_: UpdateUserPoolOutput) -> Self {
        Self
    }
}
