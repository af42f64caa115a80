use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

pub const DEFAULT_USERNAME: &str = "slatejack";
pub const DEFAULT_OUTPUT_DIR: &str = "public/data";
pub const DEFAULT_API_URL: &str = "https://api.github.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub github_token: Option<String>,
    pub username: String,
    pub output_dir: PathBuf,
    pub api_base_url: String,
    pub tools_file: Option<PathBuf>,
    pub show_progress: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds the config from a variable lookup. Optional variables that are
    /// set but blank fall back to defaults; required ones are rejected.
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let github_token = var("GITHUB_TOKEN").filter(|v| !v.trim().is_empty());

        let username = match var("GITHUB_USERNAME") {
            Some(v) if v.trim().is_empty() => {
                return Err(Error::Config("GITHUB_USERNAME is set but empty".to_string()))
            }
            Some(v) => v,
            None => DEFAULT_USERNAME.to_string(),
        };

        let output_dir = var("OUTPUT_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

        let api_base_url = match var("GITHUB_API_URL") {
            Some(v) if v.trim().is_empty() => {
                return Err(Error::Config("GITHUB_API_URL is set but empty".to_string()))
            }
            Some(v) => v,
            None => DEFAULT_API_URL.to_string(),
        };

        let tools_file = var("TOOLS_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            github_token,
            username,
            output_dir,
            api_base_url,
            tools_file,
            show_progress: true,
        })
    }

    /// Checked after CLI overrides are applied.
    pub fn validate(&self) -> Result<()> {
        if self.username.trim().is_empty() {
            return Err(Error::Config("GitHub username must not be empty".to_string()));
        }
        if self.api_base_url.trim().is_empty() {
            return Err(Error::Config("GitHub API URL must not be empty".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub username: String,
    pub tools_file: Option<PathBuf>,
    pub show_progress: bool,
}

impl From<&Config> for PipelineConfig {
    fn from(config: &Config) -> Self {
        Self {
            username: config.username.clone(),
            tools_file: config.tools_file.clone(),
            show_progress: config.show_progress,
        }
    }
}
