//! HTTP client for the GitHub GraphQL and REST APIs.

use reqwest::StatusCode;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};

use hublens_core::error::{Error, UpstreamError};
use hublens_core::types::AuthToken;

/// Default GitHub GraphQL endpoint.
pub const GITHUB_GRAPHQL_URL: &str = "https://api.github.com/graphql";

/// Default GitHub REST API base URL.
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// Media type for GitHub REST v3 responses.
const GITHUB_JSON: &str = "application/vnd.github+json";

/// Request body for a GraphQL call.
#[derive(Debug, Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
    variables: serde_json::Value,
}

/// Response envelope for a GraphQL call.
#[derive(Debug, Deserialize)]
struct GraphqlResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphqlError>>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

/// Error body returned by the GitHub REST API.
#[derive(Debug, Deserialize)]
struct RestErrorBody {
    message: Option<String>,
}

/// HTTP client for GitHub, carrying injectable base URLs so tests can
/// point it at a local server.
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    graphql_url: String,
    rest_url: String,
}

impl Default for GithubClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GithubClient {
    /// Create a client for the public GitHub endpoints.
    pub fn new() -> Self {
        Self::with_base_urls(GITHUB_GRAPHQL_URL, GITHUB_API_URL)
    }

    /// Create a client with custom GraphQL and REST base URLs.
    pub fn with_base_urls(graphql_url: impl Into<String>, rest_url: impl Into<String>) -> Self {
        // GitHub rejects requests without a User-Agent.
        let http = reqwest::Client::builder()
            .user_agent(concat!("hublens/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");

        Self {
            http,
            graphql_url: graphql_url.into(),
            rest_url: rest_url.into(),
        }
    }

    /// Execute a GraphQL query and unwrap its data envelope.
    #[instrument(skip(self, variables, token))]
    pub(crate) async fn graphql<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: serde_json::Value,
        token: &AuthToken,
    ) -> Result<T, Error> {
        debug!(url = %self.graphql_url, "GraphQL query");
        trace!(%variables, "query variables");

        let response = self
            .http
            .post(&self.graphql_url)
            .header(AUTHORIZATION, token.bearer())
            .json(&GraphqlRequest { query, variables })
            .send()
            .await
            .map_err(map_transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status, response).await);
        }

        let body: GraphqlResponse<T> = response.json().await.map_err(map_transport)?;

        if let Some(errors) = body.errors.filter(|errors| !errors.is_empty()) {
            return Err(UpstreamError::GraphQl {
                messages: errors.into_iter().map(|e| e.message).collect(),
            }
            .into());
        }

        body.data.ok_or_else(|| {
            UpstreamError::GraphQl {
                messages: vec!["response carried no data".to_string()],
            }
            .into()
        })
    }

    /// Perform an authenticated REST GET, returning the raw JSON body for
    /// the decode step.
    #[instrument(skip(self, token))]
    pub(crate) async fn rest_get(
        &self,
        path: &str,
        token: &AuthToken,
    ) -> Result<serde_json::Value, Error> {
        let url = format!("{}{}", self.rest_url, path);
        debug!(%url, "REST GET");

        let response = self
            .http
            .get(&url)
            .header(AUTHORIZATION, token.bearer())
            .header(ACCEPT, GITHUB_JSON)
            .send()
            .await
            .map_err(map_transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status, response).await);
        }

        response.json().await.map_err(map_transport)
    }
}

/// Map a reqwest failure onto the core transport variants.
fn map_transport(err: reqwest::Error) -> Error {
    let upstream = if err.is_timeout() {
        UpstreamError::Timeout
    } else if err.is_connect() {
        UpstreamError::Connection {
            message: err.to_string(),
        }
    } else {
        UpstreamError::Http {
            message: err.to_string(),
        }
    };

    upstream.into()
}

/// Build a status error, pulling the message out of GitHub's error body
/// when one is present.
async fn status_error(status: StatusCode, response: reqwest::Response) -> Error {
    let message = match response.json::<RestErrorBody>().await {
        Ok(body) => body.message.unwrap_or_default(),
        Err(_) => String::new(),
    };

    UpstreamError::Status {
        status: status.as_u16(),
        message,
    }
    .into()
}
