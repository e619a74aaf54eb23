use crate::utils::error::{NylasError, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::multipart::Form;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

const API_WRAPPER_HEADER: &str = "x-nylas-api-wrapper";

/// Shared HTTP session for every resource wrapper.
///
/// Holds the API location and credentials and one `reqwest::Client`, so all
/// requests reuse the same connection pool. Requests are assembled through
/// [`ApiRequest`], which keeps URL and header construction inspectable
/// before anything goes over the wire.
#[derive(Clone)]
pub struct HttpClient {
    api_uri: String,
    api_key: String,
    timeout: Duration,
    client: Client,
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("api_uri", &self.api_uri)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    pub fn new(api_uri: &str, api_key: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            api_uri: api_uri.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            timeout,
            client,
        })
    }

    pub fn api_uri(&self) -> &str {
        &self.api_uri
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn request(&self, method: Method, path: impl Into<String>) -> ApiRequest<'_> {
        ApiRequest {
            http: self,
            method,
            path: path.into(),
            extra_headers: Vec::new(),
            query: None,
            body: None,
        }
    }

    pub fn get(&self, path: impl Into<String>) -> ApiRequest<'_> {
        self.request(Method::GET, path)
    }

    pub fn post(&self, path: impl Into<String>) -> ApiRequest<'_> {
        self.request(Method::POST, path)
    }

    pub fn put(&self, path: impl Into<String>) -> ApiRequest<'_> {
        self.request(Method::PUT, path)
    }

    pub fn patch(&self, path: impl Into<String>) -> ApiRequest<'_> {
        self.request(Method::PATCH, path)
    }

    pub fn delete(&self, path: impl Into<String>) -> ApiRequest<'_> {
        self.request(Method::DELETE, path)
    }

    /// `{api_uri}{path}`, with `?{query}` appended only for a non-empty query.
    pub fn build_url(&self, path: &str, query: Option<&str>) -> String {
        match query {
            Some(query) if !query.is_empty() => format!("{}{}?{}", self.api_uri, path, query),
            _ => format!("{}{}", self.api_uri, path),
        }
    }

    /// Default SDK headers, then `extra` on top. Names compare
    /// case-insensitively, so an extra `authorization` replaces the default.
    pub fn build_headers(&self, extra: &[(String, String)]) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(API_WRAPPER_HEADER),
            HeaderValue::from_static("rust"),
        );
        headers.insert(USER_AGENT, header_value("User-Agent", &user_agent())?);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut auth = header_value("Authorization", &format!("Bearer {}", self.api_key))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        for (name, value) in extra {
            let header_name =
                HeaderName::from_bytes(name.as_bytes()).map_err(|e| NylasError::InvalidHeader {
                    name: name.clone(),
                    reason: e.to_string(),
                })?;
            headers.insert(header_name, header_value(name, value)?);
        }

        Ok(headers)
    }
}

pub fn user_agent() -> String {
    format!("Nylas Rust SDK {}", SDK_VERSION)
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| NylasError::InvalidHeader {
        name: name.to_string(),
        reason: e.to_string(),
    })
}

enum RequestBody {
    Json(Vec<u8>),
    Form(Form),
}

/// One pending API call. Query strings and bodies are serialized as they are
/// attached, so encoding problems surface before the request is sent.
pub struct ApiRequest<'a> {
    http: &'a HttpClient,
    method: Method,
    path: String,
    extra_headers: Vec<(String, String)>,
    query: Option<String>,
    body: Option<RequestBody>,
}

impl<'a> ApiRequest<'a> {
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers.push((name.into(), value.into()));
        self
    }

    pub fn headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.extra_headers
            .extend(headers.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Form-urlencodes `params` (`Option::None` fields should be skipped by
    /// the type's serde attributes). Repeated calls are joined with `&`.
    pub fn query<Q: Serialize + ?Sized>(mut self, params: &Q) -> Result<Self> {
        let encoded = serde_urlencoded::to_string(params)?;
        if !encoded.is_empty() {
            self.query = Some(match self.query.take() {
                Some(existing) => format!("{}&{}", existing, encoded),
                None => encoded,
            });
        }
        Ok(self)
    }

    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        self.body = Some(RequestBody::Json(serde_json::to_vec(body)?));
        Ok(self)
    }

    /// Multipart body; the JSON content type is dropped so reqwest can set
    /// the boundary.
    pub fn form(mut self, form: Form) -> Self {
        self.body = Some(RequestBody::Form(form));
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn url(&self) -> String {
        self.http.build_url(&self.path, self.query.as_deref())
    }

    pub fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = self.http.build_headers(&self.extra_headers)?;
        if matches!(self.body, Some(RequestBody::Form(_))) {
            headers.remove(CONTENT_TYPE);
        }
        Ok(headers)
    }

    /// Sends the request and deserializes a 2xx JSON body into `T`.
    pub async fn send<T: DeserializeOwned>(self) -> Result<T> {
        let body = self.execute().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Sends the request and only checks the status.
    pub async fn send_empty(self) -> Result<()> {
        self.execute().await.map(|_| ())
    }

    async fn execute(self) -> Result<String> {
        let url = self.url();
        let headers = self.build_headers()?;
        let ApiRequest {
            http,
            method,
            path,
            body,
            ..
        } = self;

        // 構建請求
        let mut request = http.client.request(method.clone(), &url);
        request = match body {
            Some(RequestBody::Json(bytes)) => request.body(bytes),
            Some(RequestBody::Form(form)) => request.multipart(form),
            None => request,
        };
        request = request.headers(headers);

        // query 可能帶有 token，只記錄 path
        tracing::debug!("📡 {} {}", method, path);

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        tracing::debug!("📡 {} {} -> {}", method, path, status);

        if !status.is_success() {
            let err = NylasError::from_response(status.as_u16(), &path, &text);
            tracing::warn!("❌ {} {} failed: {}", method, path, err);
            return Err(err);
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde::Deserialize;

    fn client(api_uri: &str) -> HttpClient {
        HttpClient::new(api_uri, "test-key", Duration::from_secs(30)).unwrap()
    }

    #[derive(Serialize)]
    struct Params {
        email: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        limit: Option<u32>,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Thing {
        id: String,
    }

    #[test]
    fn test_build_url_without_query() {
        let http = client("https://api.us.nylas.com");
        assert_eq!(
            http.build_url("/v3/grants/abc/calendars", None),
            "https://api.us.nylas.com/v3/grants/abc/calendars"
        );
        assert_eq!(
            http.build_url("/v3/grants", Some("")),
            "https://api.us.nylas.com/v3/grants"
        );
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        let http = client("https://api.us.nylas.com/");
        assert_eq!(http.api_uri(), "https://api.us.nylas.com");
        assert_eq!(
            http.build_url("/v3/grants", None),
            "https://api.us.nylas.com/v3/grants"
        );
    }

    #[test]
    fn test_query_is_form_urlencoded() {
        let http = client("https://api.us.nylas.com");
        let request = http
            .get("/v3/grants")
            .query(&Params {
                email: "a b@example.com".to_string(),
                limit: Some(5),
            })
            .unwrap();

        assert_eq!(
            request.url(),
            "https://api.us.nylas.com/v3/grants?email=a+b%40example.com&limit=5"
        );
    }

    #[test]
    fn test_empty_query_adds_no_question_mark() {
        let http = client("https://api.us.nylas.com");
        let request = http
            .get("/v3/grants")
            .query(&Vec::<(String, String)>::new())
            .unwrap();
        assert_eq!(request.url(), "https://api.us.nylas.com/v3/grants");
    }

    #[test]
    fn test_repeated_query_calls_are_joined() {
        let http = client("https://api.us.nylas.com");
        let request = http
            .post("/v3/connect/revoke")
            .query(&[("token", "t1")])
            .unwrap()
            .query(&[("extra", "1")])
            .unwrap();
        assert_eq!(
            request.url(),
            "https://api.us.nylas.com/v3/connect/revoke?token=t1&extra=1"
        );
    }

    #[test]
    fn test_default_headers() {
        let http = client("https://api.us.nylas.com");
        let headers = http.build_headers(&[]).unwrap();

        assert_eq!(headers.get("X-Nylas-API-Wrapper").unwrap(), "rust");
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer test-key");
        assert_eq!(
            headers.get(USER_AGENT).unwrap().to_str().unwrap(),
            format!("Nylas Rust SDK {}", SDK_VERSION)
        );
    }

    #[test]
    fn test_extra_headers_override_defaults() {
        let http = client("https://api.us.nylas.com");
        let headers = http
            .build_headers(&[
                ("authorization".to_string(), "Bearer other".to_string()),
                ("X-Request-Source".to_string(), "tests".to_string()),
            ])
            .unwrap();

        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer other");
        assert_eq!(headers.get_all(AUTHORIZATION).iter().count(), 1);
        assert_eq!(headers.get("x-request-source").unwrap(), "tests");
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn test_invalid_header_name_is_rejected() {
        let http = client("https://api.us.nylas.com");
        let err = http
            .build_headers(&[("bad header".to_string(), "x".to_string())])
            .unwrap_err();
        assert!(matches!(err, NylasError::InvalidHeader { ref name, .. } if name == "bad header"));
    }

    #[test]
    fn test_form_request_drops_json_content_type() {
        let http = client("https://api.us.nylas.com");
        let request = http.post("/v3/grants/abc/messages/send").form(Form::new());
        let headers = request.build_headers().unwrap();

        assert!(headers.get(CONTENT_TYPE).is_none());
        assert!(headers.get(AUTHORIZATION).is_some());
    }

    #[tokio::test]
    async fn test_send_deserializes_success_body() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/v3/things")
                .query_param("email", "a@example.com")
                .header("Authorization", "Bearer test-key")
                .header("Content-Type", "application/json")
                .header("X-Nylas-API-Wrapper", "rust")
                .json_body(serde_json::json!({"name": "thing"}));
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"id": "thing-1"}));
        });

        let http = client(&server.base_url());
        let thing: Thing = http
            .post("/v3/things")
            .query(&Params {
                email: "a@example.com".to_string(),
                limit: None,
            })
            .unwrap()
            .json(&serde_json::json!({"name": "thing"}))
            .unwrap()
            .send()
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(thing, Thing { id: "thing-1".to_string() });
    }

    #[tokio::test]
    async fn test_send_maps_api_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v3/things/missing");
            then.status(404).json_body(serde_json::json!({
                "request_id": "req-9",
                "error": {"type": "not_found_error", "message": "not found"}
            }));
        });

        let http = client(&server.base_url());
        let err = http
            .get("/v3/things/missing")
            .send::<Thing>()
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), Some(404));
        assert!(matches!(err, NylasError::Api(ref e) if e.request_id.as_deref() == Some("req-9")));
    }

    #[tokio::test]
    async fn test_send_reports_malformed_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v3/things/1");
            then.status(200).body("not json");
        });

        let http = client(&server.base_url());
        let err = http.get("/v3/things/1").send::<Thing>().await.unwrap_err();
        assert!(matches!(err, NylasError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_send_empty_ignores_body() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(DELETE).path("/v3/things/1");
            then.status(200);
        });

        let http = client(&server.base_url());
        http.delete("/v3/things/1").send_empty().await.unwrap();
        api_mock.assert();
    }
}
