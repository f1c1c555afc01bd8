use url::Url;

const DEFAULT_REGION: &str = "us-east-1";
const DEFAULT_MAX_RETRIES: u32 = 3;

/// Settings for [`CognitoIdentityProvider::new`](super::CognitoIdentityProvider::new).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub region: String,
    /// Overrides the regional endpoint, e.g. for a local emulator.
    pub endpoint: Option<String>,
    /// Retries for transient failures, with exponential backoff.
    pub max_retries: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            endpoint: None,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl ClientConfig {
    /// Reads `AWS_REGION` (falling back to `AWS_DEFAULT_REGION`) and
    /// `COGNITO_IDP_ENDPOINT` from the process environment.
    pub fn from_env() -> Self {
        Self::from_env_with(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_env_with(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();
        if let Some(region) = non_empty("AWS_REGION").or_else(|| non_empty("AWS_DEFAULT_REGION")) {
            config.region = region;
        }
        config.endpoint = non_empty("COGNITO_IDP_ENDPOINT");
        config
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// The endpoint requests are posted to.
    pub fn endpoint_url(&self) -> Result<Url, url::ParseError> {
        match &self.endpoint {
            Some(endpoint) => Url::parse(endpoint),
            None => Url::parse(&format!(
                "https://cognito-idp.{}.amazonaws.com/",
                self.region
            )),
        }
    }
}
