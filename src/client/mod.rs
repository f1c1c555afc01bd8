//! Dispatches operations to the service over its JSON 1.1 protocol.
//!
//! Requests are not signed here. Callers that talk to the real service plug a
//! SigV4 signing middleware into the stack passed to
//! [`CognitoIdentityProvider::new_with_client`].

mod config;
#[cfg(test)]
mod tests;

pub use config::ClientConfig;

use reqwest::{header, Client};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use thiserror::Error;
use url::Url;

use crate::core::parse_error_response;
use crate::core::validation::ValidationErrors;
use crate::operation::admin_create_user::{AdminCreateUserInput, AdminCreateUserOutput};
use crate::operation::admin_initiate_auth::{AdminInitiateAuthInput, AdminInitiateAuthOutput};
use crate::operation::describe_user_pool_client::{
    DescribeUserPoolClientInput, DescribeUserPoolClientOutput,
};
use crate::operation::initiate_auth::{InitiateAuthInput, InitiateAuthOutput};
use crate::operation::respond_to_auth_challenge::{
    RespondToAuthChallengeInput, RespondToAuthChallengeOutput,
};
use crate::operation::update_identity_provider::{
    UpdateIdentityProviderInput, UpdateIdentityProviderOutput,
};
use crate::operation::update_user_pool::{UpdateUserPoolInput, UpdateUserPoolOutput};
use crate::operation::Operation;

const AMZ_JSON: &str = "application/x-amz-json-1.1";
const X_AMZ_TARGET: &str = "x-amz-target";

#[derive(Error, Debug)]
pub enum CognitoError {
    #[error("HTTP Request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("Middleware error: {0}")]
    MiddlewareError(#[from] reqwest_middleware::Error),
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[error("Invalid request: {0}")]
    ValidationError(#[from] ValidationErrors),
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
    #[error("Service error ({status}) {code}: {message}")]
    ServiceError {
        status: u16,
        code: String,
        message: String,
    },
}

impl CognitoError {
    /// Exception name reported by the service, e.g. `UserNotFoundException`.
    pub fn code(&self) -> Option<&str> {
        match self {
            CognitoError::ServiceError { code, .. } => Some(code),
            _ => None,
        }
    }
}

#[derive(Clone)]
pub struct CognitoIdentityProvider {
    client: ClientWithMiddleware,
    endpoint: Url,
}

impl CognitoIdentityProvider {
    pub fn new(config: ClientConfig) -> Result<Self, CognitoError> {
        let endpoint = config.endpoint_url()?;
        let retry_policy =
            ExponentialBackoff::builder().build_with_max_retries(config.max_retries);

        let client = ClientBuilder::new(Client::new())
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        Ok(Self { client, endpoint })
    }

    /// Uses a caller-built middleware stack, such as one that signs requests.
    pub fn new_with_client(client: ClientWithMiddleware, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Validates `input`, then posts it and decodes the operation's output.
    ///
    /// Nothing is sent when validation fails.
    pub async fn send<O: Operation>(&self, input: &O) -> Result<O::Output, CognitoError> {
        input.validate()?;

        let target = O::target();
        tracing::debug!(operation = O::NAME, endpoint = %self.endpoint, "sending request");

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(header::CONTENT_TYPE, AMZ_JSON)
            .header(X_AMZ_TARGET, target.as_str())
            .body(serde_json::to_vec(input)?)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error = parse_error_response(response).await;
            tracing::warn!(
                operation = O::NAME,
                status = status.as_u16(),
                code = error.code(),
                "request rejected"
            );
            return Err(CognitoError::ServiceError {
                status: status.as_u16(),
                code: error.code().to_string(),
                message: error.message.unwrap_or_default(),
            });
        }

        let body = response.bytes().await?;
        let body: &[u8] = if body.is_empty() { b"{}" } else { &body };
        let output = serde_json::from_slice(body)?;
        tracing::debug!(operation = O::NAME, status = status.as_u16(), "request succeeded");
        Ok(output)
    }

    pub async fn admin_create_user(
        &self,
        input: &AdminCreateUserInput,
    ) -> Result<AdminCreateUserOutput, CognitoError> {
        self.send(input).await
    }

    pub async fn admin_initiate_auth(
        &self,
        input: &AdminInitiateAuthInput,
    ) -> Result<AdminInitiateAuthOutput, CognitoError> {
        self.send(input).await
    }

    pub async fn initiate_auth(
        &self,
        input: &InitiateAuthInput,
    ) -> Result<InitiateAuthOutput, CognitoError> {
        self.send(input).await
    }

    pub async fn respond_to_auth_challenge(
        &self,
        input: &RespondToAuthChallengeInput,
    ) -> Result<RespondToAuthChallengeOutput, CognitoError> {
        self.send(input).await
    }

    pub async fn update_identity_provider(
        &self,
        input: &UpdateIdentityProviderInput,
    ) -> Result<UpdateIdentityProviderOutput, CognitoError> {
        self.send(input).await
    }

    pub async fn update_user_pool(
        &self,
        input: &UpdateUserPoolInput,
    ) -> Result<UpdateUserPoolOutput, CognitoError> {
        self.send(input).await
    }

    pub async fn describe_user_pool_client(
        &self,
        input: &DescribeUserPoolClientInput,
    ) -> Result<DescribeUserPoolClientOutput, CognitoError> {
        self.send(input).await
    }
}
