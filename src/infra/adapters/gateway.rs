use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use lakeview_app::ports::CatalogError;

use super::wire::{Envelope, ErrorBody};

/// Whether the response carries a `status` discriminator that must read `"success"`.
/// Under `Required` a missing or non-string `status` is a failure too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeCheck {
    Required,
    Skip,
}

/// Thin JSON-over-HTTP client for the catalog backend.
///
/// Every call funnels through [`decode`], so transport, HTTP and application failures all
/// come back as a [`CatalogError`]. No caching and no request timeout.
pub struct HttpGateway {
    client: Client,
    base_url: String,
}

impl HttpGateway {
    pub fn new(base_url: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        check: EnvelopeCheck,
    ) -> Result<T, CatalogError> {
        let request = self.client.get(self.url(path));
        self.send(request, path, check).await
    }

    pub async fn post<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        check: EnvelopeCheck,
    ) -> Result<T, CatalogError> {
        let request = self.client.post(self.url(path)).json(body);
        self.send(request, path, check).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        path: &str,
        check: EnvelopeCheck,
    ) -> Result<T, CatalogError> {
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(endpoint = path, error = %e, "catalog request failed");
                return Err(CatalogError::Network(e.to_string()));
            }
        };

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        let result = decode(status, &body, check);
        match &result {
            Ok(_) => debug!(endpoint = path, status, "catalog request succeeded"),
            Err(e) => warn!(endpoint = path, status, error = %e, "catalog request returned an error"),
        }
        result
    }
}

/// Turns a raw HTTP response into a typed body or a classified error.
pub fn decode<T: DeserializeOwned>(
    status: u16,
    body: &str,
    check: EnvelopeCheck,
) -> Result<T, CatalogError> {
    if !(200..300).contains(&status) {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(ErrorBody::detail);
        return Err(CatalogError::Network(match detail {
            Some(detail) => format!("HTTP {status}: {detail}"),
            None => format!("HTTP {status}"),
        }));
    }

    let value: Value = serde_json::from_str(body)
        .map_err(|e| CatalogError::Network(format!("Malformed response: {e}")))?;

    if check == EnvelopeCheck::Required {
        if let Some(message) = Envelope::deserialize(&value).unwrap_or_default().failure() {
            return Err(CatalogError::Application(message));
        }
    }

    serde_json::from_value(value)
        .map_err(|e| CatalogError::Network(format!("Malformed response: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::wire::NamespacesBody;

    fn decode_namespaces(status: u16, body: &str) -> Result<NamespacesBody, CatalogError> {
        decode(status, body, EnvelopeCheck::Required)
    }

    #[test]
    fn success_envelope_decodes_body() {
        let body = decode_namespaces(200, r#"{"status":"success","namespaces":["a","b"]}"#).unwrap();

        assert_eq!(body.namespaces, vec!["a", "b"]);
    }

    #[test]
    fn error_envelope_is_application_error() {
        let err = decode_namespaces(200, r#"{"status":"error","message":"Not connected"}"#)
            .unwrap_err();

        assert_eq!(err, CatalogError::Application("Not connected".to_string()));
    }

    #[test]
    fn error_envelope_without_message_says_unknown() {
        let err = decode_namespaces(200, r#"{"status":"error"}"#).unwrap_err();

        assert_eq!(err, CatalogError::Application("Unknown error".to_string()));
    }

    #[test]
    fn missing_status_is_application_error() {
        let err = decode_namespaces(200, r#"{"namespaces":["a"]}"#).unwrap_err();

        assert_eq!(err, CatalogError::Application("Unknown error".to_string()));
    }

    #[test]
    fn non_string_status_is_application_error() {
        let err = decode_namespaces(200, r#"{"status":false,"message":"down","namespaces":["a"]}"#)
            .unwrap_err();

        assert_eq!(err, CatalogError::Application("down".to_string()));
    }

    #[test]
    fn status_must_match_exactly() {
        let err = decode_namespaces(200, r#"{"status":"Success","namespaces":["a"]}"#).unwrap_err();

        assert!(matches!(err, CatalogError::Application(_)));
    }

    #[test]
    fn skipped_check_accepts_body_without_status() {
        let body: NamespacesBody =
            decode(200, r#"{"namespaces":["a"]}"#, EnvelopeCheck::Skip).unwrap();

        assert_eq!(body.namespaces, vec!["a"]);
    }

    #[test]
    fn non_2xx_is_network_error_with_backend_detail() {
        let err = decode_namespaces(500, r#"{"error":"Explorer not initialized"}"#).unwrap_err();

        assert_eq!(
            err,
            CatalogError::Network("HTTP 500: Explorer not initialized".to_string())
        );
    }

    #[test]
    fn non_2xx_without_json_body_keeps_status_only() {
        let err = decode_namespaces(502, "<html>Bad Gateway</html>").unwrap_err();

        assert_eq!(err, CatalogError::Network("HTTP 502".to_string()));
    }

    #[test]
    fn malformed_body_is_network_error() {
        let err = decode_namespaces(200, "not json").unwrap_err();

        assert!(err.is_network());
        assert!(err.message().starts_with("Malformed response"));
    }

    #[test]
    fn skipped_check_ignores_status_field() {
        let body: Value = decode(200, r#"{"status":"error","connected":false}"#, EnvelopeCheck::Skip)
            .unwrap();

        assert_eq!(body["connected"], Value::Bool(false));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let gateway = HttpGateway::with_client(Client::new(), "http://localhost:5000/api/");

        assert_eq!(gateway.url("/status"), "http://localhost:5000/api/status");
    }
}
