use async_trait::async_trait;
use reqwest::{header, Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::DEFAULT_API_URL;
use crate::error::{Error, Result};
use crate::github::rate_limit::RateLimitInfo;
use crate::github::source::GitHubSource;
use crate::models::{GitHubUser, LanguageBytes, Repository};

/// Single page of repositories; accounts with more are truncated.
const REPOS_PER_PAGE: u32 = 100;

pub struct GitHubClient {
    client: Client,
    base_url: String,
}

impl GitHubClient {
    pub fn new(token: Option<&str>) -> Result<Self> {
        Self::with_base_url(token, DEFAULT_API_URL)
    }

    pub fn with_base_url(token: Option<&str>, base_url: &str) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        if let Some(token) = token {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("Bearer {}", token))?,
            );
        }
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            header::HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("ghfolio/0.1"),
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GETs `url` and decodes the body. Any non-2xx status fails the call.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.send(url).await?;
        Self::decode(url, response).await
    }

    async fn send(&self, url: &str) -> Result<Response> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        if let Some(limit) = RateLimitInfo::from_headers(response.headers()) {
            if limit.is_exhausted() {
                tracing::warn!(
                    "GitHub rate limit exhausted, resets at {:?}",
                    limit.reset_at
                );
            } else {
                tracing::debug!("GitHub rate limit remaining: {}", limit.remaining);
            }
        }

        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(url: &str, response: Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::GitHubApi(format!(
                "GET {} failed: {} - {}",
                url, status, body
            )));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| Error::Format(format!("{}: {}", url, e)))
    }
}

#[async_trait]
impl GitHubSource for GitHubClient {
    async fn get_user(&self, username: &str) -> Result<GitHubUser> {
        let url = format!("{}/users/{}", self.base_url, username);
        tracing::info!("Fetching user: {}", username);

        let response = self.send(&url).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::UserNotFound(username.to_string()));
        }

        Self::decode(&url, response).await
    }

    async fn get_user_repos(&self, username: &str) -> Result<Vec<Repository>> {
        let url = format!(
            "{}/users/{}/repos?sort=stars&per_page={}",
            self.base_url, username, REPOS_PER_PAGE
        );
        tracing::info!("Fetching repositories for: {}", username);
        self.get_json(&url).await
    }

    async fn get_languages(&self, repo: &Repository) -> Result<LanguageBytes> {
        if repo.languages_url.is_empty() {
            return Err(Error::Format(format!(
                "repository {} has no languages_url",
                repo.name
            )));
        }
        self.get_json(&repo.languages_url).await
    }
}
