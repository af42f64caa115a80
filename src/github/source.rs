use async_trait::async_trait;

use crate::error::Result;
use crate::models::{GitHubUser, LanguageBytes, Repository};

/// Where the sync pipelines get their GitHub data from.
#[async_trait]
pub trait GitHubSource: Send + Sync {
    async fn get_user(&self, username: &str) -> Result<GitHubUser>;
    async fn get_user_repos(&self, username: &str) -> Result<Vec<Repository>>;
    async fn get_languages(&self, repo: &Repository) -> Result<LanguageBytes>;
}
