/// HTTP client core
///
/// [`ApiClient`] wraps a shared `reqwest::Client` with the three things
/// every endpoint wrapper needs: base-URL joining, bearer-token injection,
/// and status-to-error mapping. The per-resource operations live in the
/// sibling modules as `impl ApiClient` blocks.
///
/// # Example
///
/// ```no_run
/// use edudash_client::ApiClient;
/// use edudash_core::config::Config;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let client = ApiClient::from_config(&config)?;
/// let paths = client.list_career_paths().await?;
/// println!("{} career paths", paths.len());
/// # Ok(())
/// # }
/// ```
use crate::error::{ApiError, ApiResult};
use edudash_core::config::Config;
use reqwest::multipart::Form;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// List endpoints answer either a bare array or a paginated envelope,
/// depending on backend pagination settings; accept both
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ListResponse<T> {
    /// `{"results": [...], "count": n, ...}`
    Envelope {
        /// Records for the current page
        results: Vec<T>,
    },

    /// `[...]`
    Bare(Vec<T>),
}

impl<T> ListResponse<T> {
    pub(crate) fn into_vec(self) -> Vec<T> {
        match self {
            ListResponse::Envelope { results } => results,
            ListResponse::Bare(items) => items,
        }
    }
}

/// HTTP client for the platform API
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// Shared connection pool
    http: reqwest::Client,

    /// API root without a trailing slash
    base_url: String,

    /// Bearer token attached to every request, when signed in
    token: Option<String>,

    /// Extended timeout for upload requests
    upload_timeout: Duration,
}

impl ApiClient {
    /// Builds a client from the loaded configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be
    /// constructed (TLS backend initialization).
    pub fn from_config(config: &Config) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(ApiClient {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
            upload_timeout: Duration::from_secs(config.upload_timeout_secs),
        })
    }

    /// Builds an unauthenticated client against the given API root
    ///
    /// Used by tests; production callers go through [`Self::from_config`].
    pub fn new(base_url: &str) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(ApiClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
            upload_timeout: Duration::from_secs(120),
        })
    }

    /// Returns a copy of this client carrying the given bearer token
    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = self.http.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Sends a request and maps non-success statuses to [`ApiError`]
    async fn execute(&self, builder: RequestBuilder) -> ApiResult<Response> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_response(status, &body))
        }
    }

    /// GET returning a typed JSON body
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.execute(self.request(Method::GET, path)).await?;
        Ok(response.json().await?)
    }

    /// GET returning a list, tolerating both envelope shapes
    pub(crate) async fn get_list<T: DeserializeOwned>(&self, path: &str) -> ApiResult<Vec<T>> {
        let envelope: ListResponse<T> = self.get_json(path).await?;
        Ok(envelope.into_vec())
    }

    /// POST with a JSON body, returning a typed JSON body
    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .execute(self.request(Method::POST, path).json(body))
            .await?;
        Ok(response.json().await?)
    }

    /// PATCH with a JSON body, returning the updated record
    pub(crate) async fn patch_json<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .execute(self.request(Method::PATCH, path).json(body))
            .await?;
        Ok(response.json().await?)
    }

    /// DELETE, ignoring any response body
    pub(crate) async fn delete(&self, path: &str) -> ApiResult<()> {
        self.execute(self.request(Method::DELETE, path)).await?;
        Ok(())
    }

    /// POST a multipart form under the extended upload timeout
    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> ApiResult<T> {
        let builder = self
            .request(Method::POST, path)
            .timeout(self.upload_timeout)
            .multipart(form);
        let response = self.execute(builder).await?;
        Ok(response.json().await?)
    }

    /// PATCH a multipart form under the extended upload timeout
    pub(crate) async fn patch_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> ApiResult<T> {
        let builder = self
            .request(Method::PATCH, path)
            .timeout(self.upload_timeout)
            .multipart(form);
        let response = self.execute(builder).await?;
        Ok(response.json().await?)
    }
}

/// Collapses a failed listing to an empty one, logging the failure
///
/// The overview fan-outs use this so one broken endpoint cannot blank an
/// entire dashboard.
pub(crate) fn or_empty<T>(result: ApiResult<Vec<T>>, what: &str) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(err) => {
            tracing::warn!("{} fetch failed, continuing without it: {}", what, err);
            Vec::new()
        }
    }
}
