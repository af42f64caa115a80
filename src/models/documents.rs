//! Documents written to the output directory and read by the portfolio page.
//!
//! Field names are consumed verbatim by the page, so every struct here is
//! serialized in camelCase and must not be renamed.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

use crate::models::Repository;
use crate::taxonomy::language_badge;

pub const NO_DESCRIPTION: &str = "No description provided";
pub const UNKNOWN_LANGUAGE: &str = "Unknown";

/// A document with a fixed file name and a well-defined degraded shape.
///
/// The degraded shape is what gets written when the pipeline producing the
/// document fails: empty collections plus the failure message.
pub trait Artifact: Serialize {
    const FILE_NAME: &'static str;

    fn degraded(error: String) -> Self;
}

fn serialize_timestamp<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedProject {
    pub name: String,
    pub description: String,
    pub language: String,
    pub language_color: String,
    pub url: String,
    pub stars: u64,
    pub forks: u64,
    pub updated_at: String,
}

impl FeaturedProject {
    pub fn from_repository(repo: &Repository) -> Self {
        let description = repo
            .description
            .clone()
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| NO_DESCRIPTION.to_string());
        let language = repo
            .language
            .clone()
            .unwrap_or_else(|| UNKNOWN_LANGUAGE.to_string());

        Self {
            name: repo.name.clone(),
            description,
            language_color: language_badge(&language).to_string(),
            language,
            url: repo.html_url.clone(),
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            updated_at: repo.updated_at.format("%Y-%m-%d").to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsDocument {
    pub projects: Vec<FeaturedProject>,
    #[serde(serialize_with = "serialize_timestamp")]
    pub last_updated: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProjectsDocument {
    pub fn new(projects: Vec<FeaturedProject>) -> Self {
        Self {
            projects,
            last_updated: Utc::now(),
            error: None,
        }
    }
}

impl Artifact for ProjectsDocument {
    const FILE_NAME: &'static str = "projects.json";

    fn degraded(error: String) -> Self {
        Self {
            error: Some(error),
            ..Self::new(Vec::new())
        }
    }
}

/// One bar in the skills section. `level` is a percentage in `0..=100`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillEntry {
    pub name: String,
    pub level: u32,
    pub icon: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsDocument {
    pub languages: Vec<SkillEntry>,
    pub frameworks: Vec<SkillEntry>,
    pub tools: Vec<SkillEntry>,
    #[serde(serialize_with = "serialize_timestamp")]
    pub last_updated: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SkillsDocument {
    pub fn new(languages: Vec<SkillEntry>, frameworks: Vec<SkillEntry>, tools: Vec<SkillEntry>) -> Self {
        Self {
            languages,
            frameworks,
            tools,
            last_updated: Utc::now(),
            error: None,
        }
    }
}

impl Artifact for SkillsDocument {
    const FILE_NAME: &'static str = "skills.json";

    fn degraded(error: String) -> Self {
        Self {
            error: Some(error),
            ..Self::new(Vec::new(), Vec::new(), Vec::new())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolItem {
    pub icon: String,
    pub icon_color: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCategory {
    pub title: String,
    pub title_color: String,
    pub tools: Vec<ToolItem>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolsDocument {
    pub categories: Vec<ToolCategory>,
    #[serde(serialize_with = "serialize_timestamp")]
    pub last_updated: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ToolsDocument {
    pub fn new(categories: Vec<ToolCategory>) -> Self {
        Self {
            categories,
            last_updated: Utc::now(),
            error: None,
        }
    }
}

impl Artifact for ToolsDocument {
    const FILE_NAME: &'static str = "tools.json";

    fn degraded(error: String) -> Self {
        Self {
            error: Some(error),
            ..Self::new(Vec::new())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatEntry {
    pub icon: String,
    pub value: u64,
    pub label: String,
    pub color: String,
    pub key: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsDocument {
    pub stats: Vec<StatEntry>,
    #[serde(serialize_with = "serialize_timestamp")]
    pub last_updated: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StatsDocument {
    pub fn new(stats: Vec<StatEntry>) -> Self {
        Self {
            stats,
            last_updated: Utc::now(),
            error: None,
        }
    }
}

impl Artifact for StatsDocument {
    const FILE_NAME: &'static str = "github-stats.json";

    fn degraded(error: String) -> Self {
        Self {
            error: Some(error),
            ..Self::new(Vec::new())
        }
    }
}
