use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::{blocking::Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

pub const GITHUB_GRAPHQL_URL: &str = "https://api.github.com/graphql";

pub type Variables = Map<String, Value>;

/// Successful GraphQL envelope. Only ever built when `data` was present.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResponse {
    pub data: Value,
}

impl QueryResponse {
    pub fn new(data: Value) -> Self {
        Self { data }
    }

    /// JSON pointer lookup relative to `data`, e.g. `/user/followers`.
    pub fn pointer(&self, path: &str) -> Option<&Value> {
        self.data.pointer(path)
    }

    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(&self.data)
    }
}

/// Anything able to run one GraphQL query and hand back the `data` envelope.
pub trait QueryExecutor {
    fn execute(&self, query: &str, variables: &Variables) -> Result<QueryResponse, ExecuteQueryError>;
}

impl<E: QueryExecutor + ?Sized> QueryExecutor for &E {
    fn execute(&self, query: &str, variables: &Variables) -> Result<QueryResponse, ExecuteQueryError> {
        (**self).execute(query, variables)
    }
}

pub struct GitHubGraphQLClient {
    client: Client,
    token: String,
    endpoint: String,
}

impl GitHubGraphQLClient {
    pub fn new(token: &str, endpoint: &str) -> Result<Self, ExecuteQueryError> {
        let client = Client::builder()
            .build()
            .map_err(|source| ExecuteQueryError::TransportFailure { source })?;

        Ok(Self {
            client,
            token: token.to_owned(),
            endpoint: endpoint.to_owned(),
        })
    }
}

impl QueryExecutor for GitHubGraphQLClient {
    fn execute(&self, query: &str, variables: &Variables) -> Result<QueryResponse, ExecuteQueryError> {
        let payload = serde_json::json!({
            "query": query,
            "variables": variables,
        });

        let logged_variables = Value::Object(variables.clone());
        debug!(endpoint = %self.endpoint, variables = %logged_variables, "sending GraphQL query");

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Content-Type", "application/json")
            .header("User-Agent", "github-stats-cards")
            .json(&payload)
            .send()
            .map_err(|source| ExecuteQueryError::TransportFailure { source })?;

        let status = response.status();

        let body = response
            .text()
            .map_err(|source| ExecuteQueryError::TransportFailure { source })?;

        if !status.is_success() {
            return Err(ExecuteQueryError::UnsuccessfulStatus { status, body });
        }

        parse_response(&body)
    }
}

#[derive(Deserialize)]
struct RawEnvelope {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Value>,
}

/// Classifies a 2xx response body. An `errors` entry wins over any partial `data`.
pub fn parse_response(body: &str) -> Result<QueryResponse, ExecuteQueryError> {
    let envelope: RawEnvelope = serde_json::from_str(body).map_err(|source| {
        ExecuteQueryError::MalformedResponse {
            reason: format!("body is not a GraphQL JSON object: {source}"),
        }
    })?;

    if let Some(errors) = envelope.errors.filter(|errors| !errors.is_null()) {
        return Err(ExecuteQueryError::ApplicationError { errors });
    }

    match envelope.data {
        Some(data) if !data.is_null() => Ok(QueryResponse::new(data)),
        _ => Err(ExecuteQueryError::MalformedResponse {
            reason: format!("no 'data' in response: {body}"),
        }),
    }
}

/// Date-times go out as RFC 3339 with an explicit `+00:00` offset.
pub fn datetime_variable(value: DateTime<Utc>) -> Value {
    Value::String(value.to_rfc3339_opts(SecondsFormat::Secs, false))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryErrorKind {
    Transport,
    Application,
    Malformed,
}

#[derive(Debug, Error)]
pub enum ExecuteQueryError {
    #[error("TransportFailure: {source}")]
    TransportFailure {
        source: reqwest::Error,
    },

    #[error("TransportFailure: HTTP {status}: {body}")]
    UnsuccessfulStatus {
        status: StatusCode,
        body: String,
    },

    #[error("ApplicationError: {errors}")]
    ApplicationError {
        errors: Value,
    },

    #[error("MalformedResponse: {reason}")]
    MalformedResponse {
        reason: String,
    },
}

impl ExecuteQueryError {
    pub fn kind(&self) -> QueryErrorKind {
        match self {
            ExecuteQueryError::TransportFailure { .. }
            | ExecuteQueryError::UnsuccessfulStatus { .. } => QueryErrorKind::Transport,
            ExecuteQueryError::ApplicationError { .. } => QueryErrorKind::Application,
            ExecuteQueryError::MalformedResponse { .. } => QueryErrorKind::Malformed,
        }
    }
}
