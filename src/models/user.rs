use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Byte counts per language, as returned by a repository's `languages_url`.
pub type LanguageBytes = HashMap<String, u64>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubUser {
    pub login: String,
    #[serde(default)]
    pub public_repos: u64,
    #[serde(default)]
    pub followers: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub fork: bool,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub updated_at: DateTime<Utc>,
    pub html_url: String,
    #[serde(default)]
    pub languages_url: String,
    #[serde(default)]
    pub topics: Vec<String>,
}

impl Repository {
    pub fn has_description(&self) -> bool {
        self.description.as_deref().is_some_and(|d| !d.is_empty())
    }

    /// Lowercased description, topics and primary language, space separated.
    pub fn searchable_text(&self) -> String {
        format!(
            "{} {} {}",
            self.description.as_deref().unwrap_or_default(),
            self.topics.join(" "),
            self.language.as_deref().unwrap_or_default()
        )
        .to_lowercase()
    }
}
