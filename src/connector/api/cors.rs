use axum::http::header::{
    ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::http::{HeaderMap, HeaderValue};

use crate::domain::{DomainError, GatewayConfig};

const ALLOW_CREDENTIALS: &str = "true";
const ALLOW_HEADERS: &str = "Content-Type, Authorization";
const ALLOW_METHODS: &str = "GET, POST, OPTIONS";

/// The fixed set of cross-origin headers stamped on every response.
///
/// Note: a wildcard origin together with `Allow-Credentials: true` is rejected
/// by browsers for credentialed requests. Both are sent as configured.
#[derive(Debug, Clone)]
pub struct CorsPolicy {
    headers: HeaderMap,
}

impl CorsPolicy {
    pub fn from_config(config: &GatewayConfig) -> Result<Self, DomainError> {
        let origin = HeaderValue::from_str(&config.cors_allow_origin).map_err(|_| {
            DomainError::config(format!(
                "CORS_ALLOW_ORIGIN is not a valid header value: '{}'",
                config.cors_allow_origin
            ))
        })?;

        let mut headers = HeaderMap::with_capacity(4);
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, origin);
        headers.insert(
            ACCESS_CONTROL_ALLOW_CREDENTIALS,
            HeaderValue::from_static(ALLOW_CREDENTIALS),
        );
        headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static(ALLOW_HEADERS));
        headers.insert(ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static(ALLOW_METHODS));

        Ok(Self { headers })
    }

    /// Headers for a response. `origin_hint` is accepted but does not change the result.
    pub fn headers(&self, _origin_hint: Option<&str>) -> HeaderMap {
        self.headers.clone()
    }

    /// Overlay the policy onto `target`, replacing any same-named header.
    pub fn apply(&self, target: &mut HeaderMap, origin_hint: Option<&str>) {
        for (name, value) in self.headers(origin_hint).iter() {
            target.insert(name.clone(), value.clone());
        }
    }
}
