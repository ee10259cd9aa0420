//! Axum integration for API key extraction.

use std::fmt;

use axum::extract::{FromRequestParts, OptionalFromRequestParts};
use axum::http::{header::WWW_AUTHENTICATE, request::Parts, HeaderValue};
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::extract::{get_api_key, API_KEY_SCHEME};
use crate::error::AuthError;

/// API key taken from the `Authorization: ApiKey <key>` request header.
///
/// The key is not checked against anything; handlers decide whether it is
/// authorized. Use `Option<ApiKey>` to accept requests without the header
/// while still rejecting malformed ones.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(pub String);

impl ApiKey {
    /// Borrow the raw key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the extractor and return the owned key.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&"<redacted>").finish()
    }
}

impl<S> FromRequestParts<S> for ApiKey
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        get_api_key(&parts.headers).map(|key| Self(key.to_owned()))
    }
}

impl<S> OptionalFromRequestParts<S> for ApiKey
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        match get_api_key(&parts.headers) {
            Ok(key) => Ok(Some(Self(key.to_owned()))),
            Err(AuthError::NoAuthHeader) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.client_message() }));
        (
            self.status_code(),
            [(WWW_AUTHENTICATE, HeaderValue::from_static(API_KEY_SCHEME))],
            body,
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header::AUTHORIZATION, Request, StatusCode};
    use axum::routing::get;
    use axum::Router;
    use tower::ServiceExt;

    async fn required(key: ApiKey) -> String {
        key.into_inner()
    }

    async fn optional(key: Option<ApiKey>) -> String {
        key.map_or_else(|| "anonymous".to_string(), ApiKey::into_inner)
    }

    fn app() -> Router {
        Router::new()
            .route("/required", get(required))
            .route("/optional", get(optional))
    }

    fn request(uri: &str, authorization: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(value) = authorization {
            builder = builder.header(AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_required_key_extracted() {
        let response = app()
            .oneshot(request("/required", Some("ApiKey my-secret-api-key")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "my-secret-api-key");
    }

    #[tokio::test]
    async fn test_required_key_missing() {
        let response = app().oneshot(request("/required", None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(WWW_AUTHENTICATE).unwrap(),
            API_KEY_SCHEME
        );
        let json = body_json(response).await;
        assert_eq!(json["error"], "missing credentials");
    }

    #[tokio::test]
    async fn test_required_key_malformed() {
        let response = app()
            .oneshot(request("/required", Some("Bearer my-secret-api-key")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let json = body_json(response).await;
        assert_eq!(json["error"], "invalid credentials format");
    }

    #[tokio::test]
    async fn test_optional_key_missing() {
        let response = app().oneshot(request("/optional", None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "anonymous");
    }

    #[tokio::test]
    async fn test_optional_key_present() {
        let response = app()
            .oneshot(request("/optional", Some("ApiKey abc")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "abc");
    }

    #[tokio::test]
    async fn test_optional_key_malformed_still_rejected() {
        let response = app()
            .oneshot(request("/optional", Some("ApiKeyabc")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let json = body_json(response).await;
        assert_eq!(json["error"], "invalid credentials format");
    }

    #[test]
    fn test_debug_redacts_key() {
        let key = ApiKey("super-secret".to_string());
        let debug_str = format!("{key:?}");
        assert!(!debug_str.contains("super-secret"));
        assert!(debug_str.contains("redacted"));
    }

    #[test]
    fn test_accessors() {
        let key = ApiKey("k".to_string());
        assert_eq!(key.as_str(), "k");
        assert_eq!(key.into_inner(), "k");
    }
}
