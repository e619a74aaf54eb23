use crate::core::http_client::HttpClient;
use crate::domain::{
    CodeExchangeRequest, CodeExchangeResponse, PkceAuthUrl, Provider, ProviderDetectParams,
    ProviderDetectResponse, Response, TokenExchangeRequest, TokenInfoResponse,
    UrlForAdminConsentConfig, UrlForAuthenticationConfig,
};
use crate::resources::grants::Grants;
use crate::utils::error::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::sync::Arc;
use uuid::Uuid;

type QueryPairs = Vec<(&'static str, String)>;

/// Base64 (standard alphabet, padded) of the SHA-256 digest of `secret`.
pub fn hash_pkce_secret(secret: &str) -> String {
    let digest = Sha256::digest(secret.as_bytes());
    STANDARD.encode(digest)
}

fn set_param(params: &mut QueryPairs, key: &'static str, value: String) {
    match params.iter_mut().find(|(k, _)| *k == key) {
        Some(entry) => entry.1 = value,
        None => params.push((key, value)),
    }
}

/// Scopes go out as a single space-joined `scope` parameter, the key the
/// hosted auth endpoint reads (not `scopes`).
pub fn build_query(config: &UrlForAuthenticationConfig) -> QueryPairs {
    let mut params: QueryPairs = vec![
        ("client_id", config.client_id.clone()),
        ("redirect_uri", config.redirect_uri.clone()),
    ];

    if let Some(provider) = config.provider {
        params.push(("provider", provider.as_str().to_string()));
    }
    params.push((
        "access_type",
        config.access_type.unwrap_or_default().as_str().to_string(),
    ));
    if let Some(prompt) = &config.prompt {
        params.push(("prompt", prompt.clone()));
    }
    if let Some(scope) = config.scope.as_ref().filter(|s| !s.is_empty()) {
        params.push(("scope", scope.join(" ")));
    }
    if let Some(include) = config.include_grant_scopes {
        params.push(("include_grant_scopes", include.to_string()));
    }
    if let Some(state) = &config.state {
        params.push(("state", state.clone()));
    }
    if let Some(login_hint) = &config.login_hint {
        params.push(("login_hint", login_hint.clone()));
    }

    set_param(&mut params, "response_type", "code".to_string());
    params
}

pub fn build_query_with_pkce(config: &UrlForAuthenticationConfig, secret_hash: &str) -> QueryPairs {
    let mut params = build_query(config);
    set_param(&mut params, "code_challenge", secret_hash.to_string());
    set_param(&mut params, "code_challenge_method", "s256".to_string());
    params
}

/// Admin consent is a Microsoft flow, so the provider falls back to
/// `microsoft` when the config leaves it unset.
pub fn build_query_with_admin_consent(config: &UrlForAdminConsentConfig) -> QueryPairs {
    let mut auth = config.auth.clone();
    auth.provider.get_or_insert(Provider::Microsoft);

    let mut params = build_query(&auth);
    set_param(&mut params, "response_type", "adminconsent".to_string());
    set_param(&mut params, "credential_id", config.credential_id.clone());
    params
}

#[derive(Serialize)]
struct TokenRequestBody<'a, R: Serialize> {
    #[serde(flatten)]
    request: &'a R,
    grant_type: &'static str,
}

/// OAuth helpers: hosted-auth URLs, token exchange and token introspection.
#[derive(Debug, Clone)]
pub struct Auth {
    http_client: Arc<HttpClient>,
}

impl Auth {
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    pub fn grants(&self) -> Grants {
        Grants::new(Arc::clone(&self.http_client))
    }

    /// URL that sends a user through hosted authentication.
    pub fn url_for_oauth2(&self, config: &UrlForAuthenticationConfig) -> Result<String> {
        self.url_auth_builder(&build_query(config))
    }

    /// Same as [`Auth::url_for_oauth2`] with a fresh PKCE secret.
    ///
    /// Store the returned `secret`; it goes back in as
    /// `CodeExchangeRequest::code_verifier`.
    pub fn url_for_oauth2_pkce(&self, config: &UrlForAuthenticationConfig) -> Result<PkceAuthUrl> {
        let secret = Uuid::new_v4().to_string();
        let secret_hash = hash_pkce_secret(&secret);
        let url = self.url_auth_builder(&build_query_with_pkce(config, &secret_hash))?;

        Ok(PkceAuthUrl {
            secret,
            secret_hash,
            url,
        })
    }

    pub fn url_for_admin_consent(&self, config: &UrlForAdminConsentConfig) -> Result<String> {
        self.url_auth_builder(&build_query_with_admin_consent(config))
    }

    pub async fn exchange_code_for_token(
        &self,
        request: &CodeExchangeRequest,
    ) -> Result<CodeExchangeResponse> {
        self.get_token(&TokenRequestBody {
            request,
            grant_type: "authorization_code",
        })
        .await
    }

    pub async fn refresh_access_token(
        &self,
        request: &TokenExchangeRequest,
    ) -> Result<CodeExchangeResponse> {
        self.get_token(&TokenRequestBody {
            request,
            grant_type: "refresh_token",
        })
        .await
    }

    pub async fn id_token_info(&self, id_token: &str) -> Result<Response<TokenInfoResponse>> {
        self.get_token_info(&[("id_token", id_token)]).await
    }

    pub async fn validate_access_token(
        &self,
        access_token: &str,
    ) -> Result<Response<TokenInfoResponse>> {
        self.get_token_info(&[("access_token", access_token)]).await
    }

    /// Revokes a single access token. Returns `true` once the API accepts it.
    pub async fn revoke(&self, token: &str) -> Result<bool> {
        self.http_client
            .post("/v3/connect/revoke")
            .query(&[("token", token)])?
            .send_empty()
            .await?;

        tracing::debug!("🔑 access token revoked");
        Ok(true)
    }

    pub async fn detect_provider(
        &self,
        params: &ProviderDetectParams,
    ) -> Result<Response<ProviderDetectResponse>> {
        self.http_client
            .post("/v3/providers/detect")
            .query(params)?
            .send()
            .await
    }

    fn url_auth_builder(&self, query: &QueryPairs) -> Result<String> {
        Ok(format!(
            "{}/v3/connect/auth?{}",
            self.http_client.api_uri(),
            serde_urlencoded::to_string(query)?
        ))
    }

    async fn get_token<B: Serialize + ?Sized>(&self, request_body: &B) -> Result<CodeExchangeResponse> {
        self.http_client
            .post("/v3/connect/token")
            .json(request_body)?
            .send()
            .await
    }

    async fn get_token_info(&self, query: &[(&str, &str)]) -> Result<Response<TokenInfoResponse>> {
        self.http_client
            .get("/v3/connect/tokeninfo")
            .query(query)?
            .send()
            .await
    }
}
