use anyhow::{anyhow, bail, Context, Result};
use chrono::{DateTime, Utc};
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::auth::{Session, UserProfile};
use crate::report::AnalysisReport;

const REQUEST_TIMEOUT_SECS: u64 = 120;
const MAX_RETRIES: u32 = 3;
const RETRY_DELAY_MS: u64 = 1000;

/// HTTP client for the VibeCheck analysis backend.
///
/// All analysis is computed server-side; this client only authenticates,
/// triggers runs and downloads reports. Identity comes in as an explicit
/// `Session`, never from ambient state.
pub struct ApiClient {
    base_url: String,
    client: Client,
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: UserProfile,
}

/// Backend answer to "was this repository analyzed before?"
#[derive(Debug, Deserialize)]
pub struct ExistingAnalysis {
    #[serde(default)]
    pub exists: bool,

    #[serde(default)]
    pub repo_id: Option<String>,

    #[serde(default)]
    pub full_name: Option<String>,

    #[serde(default)]
    pub analysis_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub overall_score: Option<f64>,

    #[serde(default)]
    pub file_count: Option<u64>,

    #[serde(default)]
    pub message: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str, session: Option<&Session>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            token: session.map(|s| s.access_token.clone()),
        })
    }

    pub fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let body = serde_json::json!({ "email": email, "password": password });
        let response = self
            .post("/auth/login")
            .json(&body)
            .send()
            .context("Login request failed")?;
        if response.status() == StatusCode::UNAUTHORIZED {
            bail!("Invalid email or password");
        }
        parse(response)
    }

    pub fn me(&self) -> Result<UserProfile> {
        let response = self.get("/auth/me").send().context("Profile request failed")?;
        parse(response)
    }

    pub fn check_existing(&self, repo_url: &str) -> Result<ExistingAnalysis> {
        let response = self
            .get("/api/repos/check")
            .query(&[("repo_url", repo_url)])
            .send()
            .context("Existing-analysis check failed")?;
        parse(response)
    }

    /// Run a full analysis server-side and return the resulting report.
    /// Retried with linear backoff since analysis runs are long and the
    /// backend sheds load under pressure.
    pub fn analyze(
        &self,
        repo_url: &str,
        window_days: u32,
        max_commits: u32,
    ) -> Result<AnalysisReport> {
        let body = serde_json::json!({
            "repo_url": repo_url,
            "window_days": window_days,
            "max_commits": max_commits,
        });
        self.with_retry("analysis", || {
            let response = self
                .post("/api/analyze")
                .json(&body)
                .send()
                .context("Analysis request failed")?;
            parse(response)
        })
    }

    /// Download the latest stored report for an already-analyzed repository
    pub fn latest_report(&self, full_name: &str) -> Result<AnalysisReport> {
        let path = format!("/api/repos/{}/analysis", full_name);
        self.with_retry("report download", || {
            let response = self.get(&path).send().context("Report request failed")?;
            parse(response)
        })
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.authed(self.client.get(format!("{}{}", self.base_url, path)))
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.authed(self.client.post(format!("{}{}", self.base_url, path)))
    }

    fn authed(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    fn with_retry<T>(&self, what: &str, f: impl Fn() -> Result<T>) -> Result<T> {
        for attempt in 1..=MAX_RETRIES {
            match f() {
                Ok(value) => return Ok(value),
                Err(e) if attempt < MAX_RETRIES => {
                    warn!("{} attempt {} failed: {}. Retrying...", what, attempt, e);
                    std::thread::sleep(Duration::from_millis(RETRY_DELAY_MS * attempt as u64));
                }
                Err(e) => {
                    return Err(e.context(format!("{} failed after {} attempts", what, attempt)))
                }
            }
        }
        Err(anyhow!("{} failed", what))
    }
}

fn parse<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let text = response.text().unwrap_or_default();
    debug!(%status, body_len = text.len(), "backend response");

    if status == StatusCode::UNAUTHORIZED {
        bail!("Not authenticated or session expired. Run `vibecheck login` first.");
    }
    if !status.is_success() {
        bail!("Backend error: {} - {}", status, text);
    }
    serde_json::from_str(&text)
        .with_context(|| format!("Unexpected backend response: {}", truncate(&text, 200)))
}

fn truncate(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
