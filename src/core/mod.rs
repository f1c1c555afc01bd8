pub mod entries;
pub(crate) mod timestamp;
pub mod validation;

#[cfg(test)]
mod tests;

use serde::Deserialize;
use std::fmt;

/// Placeholder printed in place of sensitive members.
pub(crate) const REDACTED: &str = "*** Sensitive Data Redacted ***";

/// `Debug` helpers that leave absent members out of the output.
pub(crate) trait DebugPresent {
    fn present<T: fmt::Debug>(&mut self, name: &str, value: &Option<T>) -> &mut Self;
    fn redacted<T>(&mut self, name: &str, value: &Option<T>) -> &mut Self;
}

impl DebugPresent for fmt::DebugStruct<'_, '_> {
    fn present<T: fmt::Debug>(&mut self, name: &str, value: &Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.field(name, value);
        }
        self
    }

    fn redacted<T>(&mut self, name: &str, value: &Option<T>) -> &mut Self {
        if value.is_some() {
            self.field(name, &REDACTED);
        }
        self
    }
}

/// Implements `Debug` for a struct of optional members, leaving absent ones out.
macro_rules! debug_present {
    ($name:ident { $($field:ident),+ $(,)? }) => {
        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                use $crate::core::DebugPresent;
                f.debug_struct(stringify!($name))
                    $(.present(stringify!($field), &self.$field))+
                    .finish()
            }
        }
    };
}

pub(crate) use debug_present;

/// Error body returned by the service for a rejected call.
///
/// The `__type` member may be a bare exception name or a shape id such as
/// `com.amazonaws.cognito#NotAuthorizedException`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceErrorResponse {
    #[serde(rename = "__type", default)]
    pub error_type: Option<String>,
    #[serde(alias = "Message", default)]
    pub message: Option<String>,
}

impl ServiceErrorResponse {
    /// Exception name without any namespace or trailing metadata.
    pub fn code(&self) -> &str {
        let raw = self.error_type.as_deref().unwrap_or("Unknown");
        let raw = raw.rsplit('#').next().unwrap_or(raw);
        raw.split(':').next().unwrap_or(raw)
    }

    pub fn display_message(&self) -> String {
        format!(
            "{}: {}",
            self.code(),
            self.message.as_deref().unwrap_or("no message")
        )
    }
}

#[cfg(feature = "client")]
pub async fn parse_error_response(response: reqwest::Response) -> ServiceErrorResponse {
    let header_type = response
        .headers()
        .get("x-amzn-errortype")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let status = response.status();

    let text = response.text().await.unwrap_or_default();
    match serde_json::from_str::<ServiceErrorResponse>(&text) {
        Ok(mut parsed) => {
            if parsed.error_type.is_none() {
                parsed.error_type = header_type;
            }
            parsed
        }
        Err(_) => ServiceErrorResponse {
            error_type: header_type,
            message: Some(format!("{}: {}", status, text)),
        },
    }
}
