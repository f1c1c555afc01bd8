//! Request ("input") and response ("output") types, one module per API operation.
//!
//! Inputs and outputs are immutable values produced by a builder:
//!
//! ```
//! use cognito_idp_model::models::MessageActionType;
//! use cognito_idp_model::operation::admin_create_user::AdminCreateUserInput;
//!
//! let mut builder = AdminCreateUserInput::builder()
//!     .user_pool_id("us-east-1_AbC123")
//!     .username("alice")
//!     .message_action(MessageActionType::Suppress);
//! builder.add_client_metadata_entry("source", "import").unwrap();
//! let input = builder.build();
//! assert_eq!(input.username(), Some("alice"));
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::core::validation::Validate;

pub mod admin_create_user;
pub mod admin_initiate_auth;
pub mod describe_user_pool_client;
pub mod initiate_auth;
pub mod respond_to_auth_challenge;
pub mod update_identity_provider;
pub mod update_user_pool;


/// Prefix of the `X-Amz-Target` header.
pub const SERVICE_TARGET_PREFIX: &str = "AWSCognitoIdentityProviderService";

/// An API operation, identified by the type of its input.
pub trait Operation: Serialize + Validate {
    /// Operation name as it appears in the API reference.
    const NAME: &'static str;

    type Output: DeserializeOwned;

    /// Value of the `X-Amz-Target` header for this operation.
    fn target() -> String {
        format!("{}.{}", SERVICE_TARGET_PREFIX, Self::NAME)
    }
}
