//! HTTP client for the harvester backend.
//!
//! Consumes four endpoints:
//!   POST /start_harvester → {"status": "started" | "already_running"}
//!   POST /stop_harvester  → {"status": "stopped" | ...}
//!   GET  /status          → RunStatus
//!   GET  /candidates      → {"candidates": [Candidate, ...]}

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fmt;
use thiserror::Error;
use tracing::debug;

pub const START_PATH: &str = "/start_harvester";
pub const STOP_PATH: &str = "/stop_harvester";
pub const STATUS_PATH: &str = "/status";
pub const CANDIDATES_PATH: &str = "/candidates";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{endpoint} returned status {status}")]
    Status { endpoint: &'static str, status: u16 },
    #[error("malformed response from {endpoint}: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

// ─── Wire types ─────────────────────────────────────────────────────────────

/// Snapshot of the harvester process as reported by `/status`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RunStatus {
    pub running: bool,
    pub candidates_found: i64,
    pub transactions_sent: i64,
    /// ISO-8601, emitted by the backend as `null` before the first run.
    #[serde(default)]
    pub last_run: Option<String>,
    #[serde(default)]
    pub dry_run: Option<bool>,
}

/// Surplus arrives either as the raw token string or as a JSON number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Surplus {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for Surplus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Surplus::Text(s) => f.write_str(s),
            Surplus::Number(n) => write!(f, "{}", n),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Candidate {
    pub pair: String,
    pub token: String,
    pub surplus: Surplus,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidatesResponse {
    #[serde(default)]
    pub candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct CommandResponse {
    status: String,
}

/// Outcome of a start/stop command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandStatus {
    Started,
    AlreadyRunning,
    Stopped,
    Other(String),
}

impl From<String> for CommandStatus {
    fn from(status: String) -> Self {
        match status.as_str() {
            "started" => CommandStatus::Started,
            "already_running" => CommandStatus::AlreadyRunning,
            "stopped" => CommandStatus::Stopped,
            _ => CommandStatus::Other(status),
        }
    }
}

// ─── Client ─────────────────────────────────────────────────────────────────

/// Backend operations used by the dashboard components.
#[async_trait(?Send)]
pub trait HarvesterApi {
    async fn start(&self) -> Result<CommandStatus, ApiError>;
    async fn stop(&self) -> Result<CommandStatus, ApiError>;
    async fn status(&self) -> Result<RunStatus, ApiError>;
    async fn candidates(&self) -> Result<CandidatesResponse, ApiError>;
}

/// reqwest-backed client. No timeout or retry is applied.
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &'static str) -> Result<T, ApiError> {
        let resp = self
            .client
            .get(self.url(endpoint))
            .send()
            .await
            .map_err(|source| ApiError::Transport { endpoint, source })?;
        read_json(endpoint, resp).await
    }

    async fn post_command(&self, endpoint: &'static str) -> Result<CommandStatus, ApiError> {
        let resp = self
            .client
            .post(self.url(endpoint))
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|source| ApiError::Transport { endpoint, source })?;
        let body: CommandResponse = read_json(endpoint, resp).await?;
        Ok(CommandStatus::from(body.status))
    }
}

async fn read_json<T: DeserializeOwned>(
    endpoint: &'static str,
    resp: reqwest::Response,
) -> Result<T, ApiError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(ApiError::Status {
            endpoint,
            status: status.as_u16(),
        });
    }
    let body = resp
        .text()
        .await
        .map_err(|source| ApiError::Transport { endpoint, source })?;
    debug!(endpoint = endpoint, bytes = body.len(), "response received");
    parse_body(endpoint, &body)
}

pub fn parse_body<T: DeserializeOwned>(endpoint: &'static str, body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|source| ApiError::Decode { endpoint, source })
}

#[async_trait(?Send)]
impl HarvesterApi for HttpApi {
    async fn start(&self) -> Result<CommandStatus, ApiError> {
        self.post_command(START_PATH).await
    }

    async fn stop(&self) -> Result<CommandStatus, ApiError> {
        self.post_command(STOP_PATH).await
    }

    async fn status(&self) -> Result<RunStatus, ApiError> {
        self.get_json(STATUS_PATH).await
    }

    async fn candidates(&self) -> Result<CandidatesResponse, ApiError> {
        self.get_json(CANDIDATES_PATH).await
    }
}
