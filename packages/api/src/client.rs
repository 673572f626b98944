//! # ApiClient: the request boundary to the content service
//!
//! Every call issues exactly one request with a JSON content type. The
//! credential token is attached as the [`CREDENTIAL_HEADER`] header only when
//! one is supplied. A non-success status becomes [`ApiError::Remote`] carrying
//! the raw response text; the client never retries.
//!
//! Successful bodies are parsed as JSON and passed through without schema
//! checks. The typed helpers below only go as far as [`Record`], which keeps
//! unknown keys.

use serde::Serialize;
use serde_json::Value;
use store::Credential;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{Collection, Record, RecordId};
use crate::transport::{HttpRequest, HttpTransport, Method, Transport};

/// Header that carries the raw credential token.
pub const CREDENTIAL_HEADER: &str = "auth-token";

/// Create/update body: `{ "data": <record> }`.
#[derive(Serialize)]
struct Envelope<'a> {
    data: &'a Record,
}

#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
}

/// Client for the content API, generic over how requests are sent.
#[derive(Clone, Debug)]
pub struct ApiClient<T: Transport = HttpTransport> {
    config: ApiConfig,
    transport: T,
}

impl ApiClient<HttpTransport> {
    /// A reqwest-backed client for the given configuration.
    pub fn from_config(config: ApiConfig) -> Self {
        let transport = HttpTransport::new(config.request_timeout);
        Self::new(config, transport)
    }

    /// A reqwest-backed client configured from `BACKEND_URL`.
    pub fn from_env() -> Self {
        Self::from_config(ApiConfig::from_env())
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Issue one request and return the raw success body.
    pub async fn send(
        &self,
        path: &str,
        method: Method,
        credential: Option<&Credential>,
        body: Option<&Value>,
    ) -> Result<String, ApiError> {
        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        if let Some(credential) = credential {
            headers.push((CREDENTIAL_HEADER.to_string(), credential.token.clone()));
        }
        let body = body.map(serde_json::to_string).transpose()?;

        let request = HttpRequest {
            method,
            url: self.config.url(path),
            headers,
            body,
        };

        tracing::debug!(%method, path, "api request");
        let response = self.transport.send(request).await.inspect_err(|e| {
            tracing::warn!(%method, path, "api request did not complete: {}", e);
        })?;

        if !response.is_success() {
            tracing::warn!(%method, path, status = response.status, "api request rejected");
            return Err(ApiError::remote(response.status, response.body));
        }
        Ok(response.body)
    }

    /// Issue one request and parse the success body as JSON. An empty body
    /// reads as `null`.
    pub async fn request(
        &self,
        path: &str,
        method: Method,
        credential: Option<&Credential>,
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        let text = self.send(path, method, credential, body).await?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }

    /// `POST /auth/login`. Any failure means "not the designated administrator".
    pub async fn login(&self, email: &str) -> Result<Credential, ApiError> {
        let body = serde_json::to_value(LoginBody { email })?;
        let value = self
            .request("/auth/login", Method::Post, None, Some(&body))
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    /// `POST /auth/logout`. The response body is ignored.
    pub async fn logout(&self, credential: &Credential) -> Result<(), ApiError> {
        self.send("/auth/logout", Method::Post, Some(credential), None)
            .await
            .map(|_| ())
    }

    /// `GET /public/{collection}[?limit=N]`.
    pub async fn public_list(
        &self,
        collection: Collection,
        limit: Option<usize>,
    ) -> Result<Vec<Record>, ApiError> {
        let path = match limit {
            Some(n) => format!("/public/{}?limit={n}", collection.id()),
            None => format!("/public/{}", collection.id()),
        };
        let value = self.request(&path, Method::Get, None, None).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// `GET /public/page/{key}`.
    pub async fn public_page(&self, key: &str) -> Result<Record, ApiError> {
        let value = self
            .request(&format!("/public/page/{key}"), Method::Get, None, None)
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    /// `GET /admin/{collection}`.
    pub async fn admin_list(
        &self,
        collection: Collection,
        credential: &Credential,
    ) -> Result<Vec<Record>, ApiError> {
        let value = self
            .request(&admin_path(collection, None), Method::Get, Some(credential), None)
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    /// `POST /admin/{collection}` with `{ data: record }`.
    pub async fn admin_create(
        &self,
        collection: Collection,
        credential: &Credential,
        record: &Record,
    ) -> Result<Value, ApiError> {
        let body = serde_json::to_value(Envelope { data: record })?;
        self.request(
            &admin_path(collection, None),
            Method::Post,
            Some(credential),
            Some(&body),
        )
        .await
    }

    /// `PUT /admin/{collection}/{id}` with `{ data: record }`.
    pub async fn admin_update(
        &self,
        collection: Collection,
        id: &RecordId,
        credential: &Credential,
        record: &Record,
    ) -> Result<Value, ApiError> {
        let body = serde_json::to_value(Envelope { data: record })?;
        self.request(
            &admin_path(collection, Some(id)),
            Method::Put,
            Some(credential),
            Some(&body),
        )
        .await
    }

    /// `DELETE /admin/{collection}/{id}`.
    pub async fn admin_delete(
        &self,
        collection: Collection,
        id: &RecordId,
        credential: &Credential,
    ) -> Result<Value, ApiError> {
        self.request(
            &admin_path(collection, Some(id)),
            Method::Delete,
            Some(credential),
            None,
        )
        .await
    }
}

fn admin_path(collection: Collection, id: Option<&RecordId>) -> String {
    match id {
        Some(id) => format!("/admin/{}/{}", collection.id(), id),
        None => format!("/admin/{}", collection.id()),
    }
}
