use super::*;
use crate::models::{
    AuthFlowType, ChallengeNameType, MessageActionType, OidcProviderDetails,
    AttributesRequestMethod, UserStatusType,
};
use httpmock::prelude::*;
use serde_json::json;
use std::collections::HashMap;

fn client_for(server: &MockServer) -> CognitoIdentityProvider {
    let client = ClientBuilder::new(Client::new()).build();
    CognitoIdentityProvider::new_with_client(client, Url::parse(&server.url("/")).unwrap())
}

#[tokio::test]
async fn test_admin_create_user() {
    let server = MockServer::start();
    let client = client_for(&server);

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/")
            .header("content-type", "application/x-amz-json-1.1")
            .header("x-amz-target", "AWSCognitoIdentityProviderService.AdminCreateUser")
            .json_body(json!({
                "UserPoolId": "us-east-1_AbC123",
                "Username": "alice",
                "TemporaryPassword": "Passw0rd!",
                "MessageAction": "SUPPRESS"
            }));
        then.status(200)
            .header("content-type", "application/x-amz-json-1.1")
            .json_body(json!({
                "User": {
                    "Username": "alice",
                    "Attributes": [{ "Name": "sub", "Value": "4a1c2e2b" }],
                    "UserCreateDate": 1700000000.5,
                    "Enabled": true,
                    "UserStatus": "FORCE_CHANGE_PASSWORD"
                }
            }));
    });

    let input = AdminCreateUserInput::builder()
        .user_pool_id("us-east-1_AbC123")
        .username("alice")
        .temporary_password("Passw0rd!")
        .message_action(MessageActionType::Suppress)
        .build();
    let output = client.admin_create_user(&input).await.unwrap();

    mock.assert();
    let user = output.user().unwrap();
    assert_eq!(user.username.as_deref(), Some("alice"));
    assert_eq!(user.attribute("sub"), Some("4a1c2e2b"));
    assert_eq!(user.user_status, Some(UserStatusType::ForceChangePassword));
}

#[tokio::test]
async fn test_initiate_auth_challenge() {
    let server = MockServer::start();
    let client = client_for(&server);

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/")
            .header("x-amz-target", "AWSCognitoIdentityProviderService.InitiateAuth")
            .json_body(json!({
                "AuthFlow": "USER_PASSWORD_AUTH",
                "AuthParameters": { "USERNAME": "alice", "PASSWORD": "Passw0rd!" },
                "ClientId": "3n4b5urk1ft4fl3mg5e62d9ado"
            }));
        then.status(200).json_body(json!({
            "ChallengeName": "NEW_PASSWORD_REQUIRED",
            "Session": "AYABeC1kUXlUZ2Q3R3JkZGhQb0VMdmRjYQ",
            "ChallengeParameters": { "USER_ID_FOR_SRP": "alice" }
        }));
    });

    let mut builder = InitiateAuthInput::builder()
        .auth_flow(AuthFlowType::UserPasswordAuth)
        .client_id("3n4b5urk1ft4fl3mg5e62d9ado");
    builder
        .add_auth_parameters_entry("USERNAME", "alice")
        .unwrap()
        .add_auth_parameters_entry("PASSWORD", "Passw0rd!")
        .unwrap();
    let output = client.initiate_auth(&builder.build()).await.unwrap();

    mock.assert();
    assert_eq!(
        output.challenge_name(),
        Some(ChallengeNameType::NewPasswordRequired)
    );
    assert_eq!(output.session(), Some("AYABeC1kUXlUZ2Q3R3JkZGhQb0VMdmRjYQ"));
}

#[tokio::test]
async fn test_respond_to_auth_challenge_tokens() {
    let server = MockServer::start();
    let client = client_for(&server);

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/")
            .header(
                "x-amz-target",
                "AWSCognitoIdentityProviderService.RespondToAuthChallenge",
            );
        then.status(200).json_body(json!({
            "AuthenticationResult": {
                "AccessToken": "access",
                "ExpiresIn": 3600,
                "TokenType": "Bearer",
                "RefreshToken": "refresh",
                "IdToken": "id"
            },
            "ChallengeParameters": {}
        }));
    });

    let mut builder = RespondToAuthChallengeInput::builder()
        .client_id("3n4b5urk1ft4fl3mg5e62d9ado")
        .challenge_name(ChallengeNameType::NewPasswordRequired)
        .session("AYABeC1kUXlUZ2Q3R3JkZGhQb0VMdmRjYQ");
    builder
        .add_challenge_responses_entry("USERNAME", "alice")
        .unwrap()
        .add_challenge_responses_entry("NEW_PASSWORD", "N3wPassw0rd!")
        .unwrap();
    let output = client
        .respond_to_auth_challenge(&builder.build())
        .await
        .unwrap();

    mock.assert();
    let result = output.authentication_result().unwrap();
    assert_eq!(result.token_type.as_deref(), Some("Bearer"));
    assert_eq!(result.expires_in, Some(3600));
}

#[tokio::test]
async fn test_update_user_pool_empty_response() {
    let server = MockServer::start();
    let client = client_for(&server);

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/")
            .header("x-amz-target", "AWSCognitoIdentityProviderService.UpdateUserPool")
            .json_body(json!({
                "UserPoolId": "us-east-1_AbC123",
                "UserPoolTags": { "team": "identity" }
            }));
        then.status(200);
    });

    let mut builder = UpdateUserPoolInput::builder().user_pool_id("us-east-1_AbC123");
    builder.add_user_pool_tags_entry("team", "identity").unwrap();
    let output = client.update_user_pool(&builder.build()).await.unwrap();

    mock.assert();
    assert_eq!(output, UpdateUserPoolOutput::default());
}

#[tokio::test]
async fn test_update_identity_provider() {
    let server = MockServer::start();
    let client = client_for(&server);

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/")
            .header(
                "x-amz-target",
                "AWSCognitoIdentityProviderService.UpdateIdentityProvider",
            )
            .json_body(json!({
                "UserPoolId": "us-east-1_AbC123",
                "ProviderName": "Okta",
                "ProviderDetails": {
                    "client_id": "okta-client",
                    "client_secret": "okta-secret",
                    "attributes_request_method": "GET",
                    "oidc_issuer": "https://example.okta.com",
                    "authorize_scopes": "openid email"
                }
            }));
        then.status(200).json_body(json!({
            "IdentityProvider": {
                "UserPoolId": "us-east-1_AbC123",
                "ProviderName": "Okta",
                "ProviderType": "OIDC",
                "ProviderDetails": {
                    "client_id": "okta-client",
                    "client_secret": "okta-secret",
                    "attributes_request_method": "GET",
                    "oidc_issuer": "https://example.okta.com",
                    "authorize_scopes": "openid email",
                    "authorize_url": "https://example.okta.com/oauth2/v1/authorize",
                    "jwks_uri": "https://example.okta.com/oauth2/v1/keys"
                },
                "LastModifiedDate": 1700000000,
                "CreationDate": 1690000000
            }
        }));
    });

    let input = UpdateIdentityProviderInput::builder()
        .user_pool_id("us-east-1_AbC123")
        .provider_name("Okta")
        .provider_details(OidcProviderDetails {
            client_id: Some("okta-client".to_string()),
            client_secret: Some("okta-secret".to_string()),
            attributes_request_method: Some(AttributesRequestMethod::Get),
            oidc_issuer: Some("https://example.okta.com".to_string()),
            authorize_scopes: Some("openid email".to_string()),
            ..Default::default()
        })
        .build();
    let output = client.update_identity_provider(&input).await.unwrap();

    mock.assert();
    let provider = output.identity_provider().unwrap();
    match &provider.provider_details {
        Some(crate::models::ProviderDetails::Oidc(oidc)) => {
            assert_eq!(
                oidc.jwks_uri.as_deref(),
                Some("https://example.okta.com/oauth2/v1/keys")
            );
        }
        other => panic!("expected OIDC details, got {:?}", other),
    }
}

#[tokio::test]
async fn test_describe_user_pool_client() {
    let server = MockServer::start();
    let client = client_for(&server);

    let mock = server.mock(|when, then| {
        when.method(POST).path("/").header(
            "x-amz-target",
            "AWSCognitoIdentityProviderService.DescribeUserPoolClient",
        );
        then.status(200).json_body(json!({
            "UserPoolClient": {
                "UserPoolId": "us-east-1_AbC123",
                "ClientName": "web",
                "ClientId": "3n4b5urk1ft4fl3mg5e62d9ado",
                "AllowedOAuthFlows": ["code"],
                "EnableTokenRevocation": true
            }
        }));
    });

    let input = DescribeUserPoolClientInput::builder()
        .user_pool_id("us-east-1_AbC123")
        .client_id("3n4b5urk1ft4fl3mg5e62d9ado")
        .build();
    let output = client.describe_user_pool_client(&input).await.unwrap();

    mock.assert();
    let app_client = output.user_pool_client().unwrap();
    assert_eq!(app_client.enable_token_revocation, Some(true));
}

#[tokio::test]
async fn test_service_error() {
    let server = MockServer::start();
    let client = client_for(&server);

    let mock = server.mock(|when, then| {
        when.method(POST).path("/");
        then.status(400)
            .header("content-type", "application/x-amz-json-1.1")
            .json_body(json!({
                "__type": "com.amazonaws.cognito#UsernameExistsException",
                "message": "User account already exists"
            }));
    });

    let input = AdminCreateUserInput::builder()
        .user_pool_id("us-east-1_AbC123")
        .username("alice")
        .build();
    let err = client.admin_create_user(&input).await.unwrap_err();

    mock.assert();
    assert_eq!(err.code(), Some("UsernameExistsException"));
    match err {
        CognitoError::ServiceError {
            status,
            code,
            message,
        } => {
            assert_eq!(status, 400);
            assert_eq!(code, "UsernameExistsException");
            assert_eq!(message, "User account already exists");
        }
        other => panic!("expected a service error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_service_error_from_header() {
    let server = MockServer::start();
    let client = client_for(&server);

    let _mock = server.mock(|when, then| {
        when.method(POST).path("/");
        then.status(400)
            .header("x-amzn-ErrorType", "NotAuthorizedException:http://internal.amazon.com/")
            .body("");
    });

    let input = DescribeUserPoolClientInput::builder()
        .user_pool_id("us-east-1_AbC123")
        .client_id("3n4b5urk1ft4fl3mg5e62d9ado")
        .build();
    let err = client.describe_user_pool_client(&input).await.unwrap_err();

    assert_eq!(err.code(), Some("NotAuthorizedException"));
}

#[tokio::test]
async fn test_invalid_input_is_not_sent() {
    // Nothing listens here; reaching the network would surface a middleware error.
    let client = CognitoIdentityProvider::new_with_client(
        ClientBuilder::new(Client::new()).build(),
        Url::parse("http://127.0.0.1:9/").unwrap(),
    );

    let input = AdminCreateUserInput::builder()
        .user_pool_id("bad id with spaces")
        .username("alice")
        .build();
    let err = client.admin_create_user(&input).await.unwrap_err();

    match err {
        CognitoError::ValidationError(errors) => {
            assert_eq!(errors.len(), 1);
            assert!(errors.find("UserPoolId").is_some());
        }
        other => panic!("expected a validation error, got {:?}", other),
    }
}

#[test]
fn test_config_defaults() {
    let config = ClientConfig::default();
    assert_eq!(config.region, "us-east-1");
    assert_eq!(config.max_retries, 3);
    assert_eq!(
        config.endpoint_url().unwrap().as_str(),
        "https://cognito-idp.us-east-1.amazonaws.com/"
    );
}

#[test]
fn test_config_from_env() {
    let env = HashMap::from([
        ("AWS_REGION", ""),
        ("AWS_DEFAULT_REGION", "eu-west-1"),
        ("COGNITO_IDP_ENDPOINT", "http://localhost:9229/"),
    ]);
    let config =
        ClientConfig::from_env_with(|name| env.get(name).map(|value| value.to_string()));
    assert_eq!(config.region, "eu-west-1");
    assert_eq!(config.endpoint.as_deref(), Some("http://localhost:9229/"));
    assert_eq!(
        config.endpoint_url().unwrap().as_str(),
        "http://localhost:9229/"
    );

    let config = ClientConfig::from_env_with(|_| None);
    assert_eq!(config, ClientConfig::default());
}

#[test]
fn test_invalid_endpoint() {
    let config = ClientConfig::default().endpoint("not a url");
    assert!(matches!(
        CognitoIdentityProvider::new(config),
        Err(CognitoError::InvalidEndpoint(_))
    ));

    let client = CognitoIdentityProvider::new(
        ClientConfig::default().region("ap-southeast-2").max_retries(0),
    )
    .unwrap();
    assert_eq!(
        client.endpoint().as_str(),
        "https://cognito-idp.ap-southeast-2.amazonaws.com/"
    );
}

#[tokio::test]
async fn test_admin_initiate_auth_tokens() {
    let server = MockServer::start();
    let client = client_for(&server);

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/")
            .header("x-amz-target", "AWSCognitoIdentityProviderService.AdminInitiateAuth")
            .json_body(json!({
                "UserPoolId": "us-east-1_AbC123",
                "ClientId": "3n4b5urk1ft4fl3mg5e62d9ado",
                "AuthFlow": "ADMIN_USER_PASSWORD_AUTH",
                "AuthParameters": { "PASSWORD": "Passw0rd!", "USERNAME": "alice" }
            }));
        then.status(200).json_body(json!({
            "AuthenticationResult": {
                "AccessToken": "access",
                "ExpiresIn": 3600,
                "TokenType": "Bearer",
                "IdToken": "id"
            },
            "ChallengeParameters": {}
        }));
    });

    let mut builder = AdminInitiateAuthInput::builder()
        .user_pool_id("us-east-1_AbC123")
        .client_id("3n4b5urk1ft4fl3mg5e62d9ado")
        .auth_flow(AuthFlowType::AdminUserPasswordAuth);
    builder
        .add_auth_parameters_entry("USERNAME", "alice")
        .unwrap()
        .add_auth_parameters_entry("PASSWORD", "Passw0rd!")
        .unwrap();
    let output = client.admin_initiate_auth(&builder.build()).await.unwrap();

    mock.assert();
    assert_eq!(output.challenge_name(), None);
    let result = output.authentication_result().unwrap();
    assert_eq!(result.id_token.as_deref(), Some("id"));
    assert_eq!(result.refresh_token, None);
}
