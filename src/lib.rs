//! Typed request and response models for the Amazon Cognito Identity Provider API.
//!
//! Every operation has an input built with a builder, checked locally with
//! [`Validate::validate`], and serialized to the service's JSON wire format.
//! With the `client` feature (on by default), [`client::CognitoIdentityProvider`]
//! sends inputs and decodes the outputs.

pub mod core;
pub mod models;
pub mod operation;

#[cfg(feature = "client")]
pub mod client;

pub use crate::core::entries::DuplicateKeyError;
pub use crate::core::validation::{Constraint, Validate, ValidationError, ValidationErrors};
pub use crate::operation::Operation;

#[cfg(feature = "client")]
pub use crate::client::{ClientConfig, CognitoError, CognitoIdentityProvider};
