//! Documented length and pattern constraints of the service's string shapes.

use crate::core::validation::{Pattern, StringRule};

static USER_POOL_ID_PATTERN: Pattern = Pattern::new(r"[\w-]+_[0-9a-zA-Z]+");
static PRINTABLE_PATTERN: Pattern = Pattern::new(r"[\p{L}\p{M}\p{S}\p{N}\p{P}]+");
static NON_WHITESPACE_PATTERN: Pattern = Pattern::new(r"[\S]+");
static CLIENT_ID_PATTERN: Pattern = Pattern::new(r"[\w+]+");
static CLIENT_NAME_PATTERN: Pattern = Pattern::new(r"[\w\s+=,.@-]+");
static IDP_IDENTIFIER_PATTERN: Pattern = Pattern::new(r"[\w\s+=.@-]+");
static ARN_PATTERN: Pattern =
    Pattern::new(r"arn:[\w+=/,.@-]+:[\w+=/,.@-]+:([\w+=/,.@-]*)?:[0-9]+:[\w+=/,.@-]+(:[\w+=/,.@-]+)?(:[\w+=/,.@-]+)?");
static SMS_MESSAGE_PATTERN: Pattern = Pattern::new(r".*\{####\}.*");
static EMAIL_MESSAGE_PATTERN: Pattern =
    Pattern::new(r"[\p{L}\p{M}\p{S}\p{N}\p{P}\s*]*\{####\}[\p{L}\p{M}\p{S}\p{N}\p{P}\s*]*");
static EMAIL_MESSAGE_BY_LINK_PATTERN: Pattern =
    Pattern::new(r"[\p{L}\p{M}\p{S}\p{N}\p{P}\s*]*\{##[\p{L}\p{M}\p{S}\p{N}\p{P}\s*]*##\}[\p{L}\p{M}\p{S}\p{N}\p{P}\s*]*");
static EMAIL_SUBJECT_PATTERN: Pattern = Pattern::new(r"[\p{L}\p{M}\p{S}\p{N}\p{P}\s]+");
static EMAIL_ADDRESS_PATTERN: Pattern =
    Pattern::new(r"[\p{L}\p{M}\p{S}\p{N}\p{P}]+@[\p{L}\p{M}\p{S}\p{N}\p{P}]+");
static CONFIGURATION_SET_PATTERN: Pattern = Pattern::new(r"[a-zA-Z0-9_-]+");
static REGION_PATTERN: Pattern = Pattern::new(r"[A-Za-z0-9-]+");
static TAG_KEY_PATTERN: Pattern = Pattern::new(r"[\p{L}\p{Z}\p{N}_.:/=+\-@]*");
static HEX_PATTERN: Pattern = Pattern::new(r"[0-9A-Fa-f]+");

pub(crate) static USER_POOL_ID: StringRule =
    StringRule::new(1, 55).with_pattern(&USER_POOL_ID_PATTERN);
pub(crate) static USERNAME: StringRule = StringRule::new(1, 128)
    .with_pattern(&PRINTABLE_PATTERN)
    .sensitive();
pub(crate) static TEMPORARY_PASSWORD: StringRule = StringRule::new(6, 256)
    .with_pattern(&NON_WHITESPACE_PATTERN)
    .sensitive();
pub(crate) static CLIENT_ID: StringRule = StringRule::new(1, 128)
    .with_pattern(&CLIENT_ID_PATTERN)
    .sensitive();
pub(crate) static CLIENT_NAME: StringRule =
    StringRule::new(1, 128).with_pattern(&CLIENT_NAME_PATTERN);
pub(crate) static SESSION: StringRule = StringRule::new(20, 2048).sensitive();
pub(crate) static ATTRIBUTE_NAME: StringRule =
    StringRule::new(1, 32).with_pattern(&PRINTABLE_PATTERN);
pub(crate) static ATTRIBUTE_VALUE: StringRule = StringRule::new(0, 2048).sensitive();
pub(crate) static PROVIDER_NAME: StringRule =
    StringRule::new(1, 32).with_pattern(&PRINTABLE_PATTERN);
pub(crate) static IDP_IDENTIFIER: StringRule =
    StringRule::new(1, 40).with_pattern(&IDP_IDENTIFIER_PATTERN);
pub(crate) static ATTRIBUTE_MAPPING_KEY: StringRule = StringRule::new(1, 32);
pub(crate) static ATTRIBUTE_MAPPING_VALUE: StringRule = StringRule::new(0, 131_072);
pub(crate) static ARN: StringRule = StringRule::new(20, 2048).with_pattern(&ARN_PATTERN);
pub(crate) static SMS_MESSAGE: StringRule =
    StringRule::new(6, 140).with_pattern(&SMS_MESSAGE_PATTERN);
pub(crate) static EMAIL_MESSAGE: StringRule =
    StringRule::new(6, 20_000).with_pattern(&EMAIL_MESSAGE_PATTERN);
pub(crate) static EMAIL_MESSAGE_BY_LINK: StringRule =
    StringRule::new(6, 20_000).with_pattern(&EMAIL_MESSAGE_BY_LINK_PATTERN);
pub(crate) static EMAIL_SUBJECT: StringRule =
    StringRule::new(1, 140).with_pattern(&EMAIL_SUBJECT_PATTERN);
pub(crate) static EMAIL_ADDRESS: StringRule =
    StringRule::new(0, 2048).with_pattern(&EMAIL_ADDRESS_PATTERN);
pub(crate) static CONFIGURATION_SET: StringRule =
    StringRule::new(1, 64).with_pattern(&CONFIGURATION_SET_PATTERN);
pub(crate) static SNS_REGION: StringRule = StringRule::new(5, 32).with_pattern(&REGION_PATTERN);
pub(crate) static TAG_KEY: StringRule = StringRule::new(1, 128).with_pattern(&TAG_KEY_PATTERN);
pub(crate) static TAG_VALUE: StringRule = StringRule::new(0, 256);
pub(crate) static REDIRECT_URL: StringRule =
    StringRule::new(1, 1024).with_pattern(&PRINTABLE_PATTERN);
pub(crate) static SCOPE: StringRule = StringRule::new(1, 256).with_pattern(&PRINTABLE_PATTERN);
pub(crate) static CLIENT_SECRET: StringRule = StringRule::new(1, 64)
    .with_pattern(&CLIENT_ID_PATTERN)
    .sensitive();
pub(crate) static ANALYTICS_APPLICATION_ID: StringRule =
    StringRule::new(0, 2048).with_pattern(&HEX_PATTERN);
