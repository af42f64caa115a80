use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;

use futures::future::join_all;
use indicatif::{ProgressBar, ProgressStyle};

use crate::analysis::language_aggregator::LanguageAggregator;
use crate::analysis::selector::RepositorySelector;
use crate::analysis::stats_aggregator::aggregate_stats;
use crate::analysis::tech_classifier::TechnologyClassifier;
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::github::GitHubSource;
use crate::models::{
    Artifact, FeaturedProject, LanguageBytes, ProjectsDocument, Repository, SkillsDocument,
    StatsDocument, ToolsDocument,
};
use crate::storage::Storage;
use crate::taxonomy::{default_tool_categories, load_tool_categories, TechTaxonomy};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    Fresh,
    Degraded(String),
}

#[derive(Debug, Clone)]
pub struct ArtifactReport {
    pub file_name: &'static str,
    pub path: PathBuf,
    pub outcome: SyncOutcome,
}

#[derive(Debug, Clone, Default)]
pub struct SyncReport {
    pub artifacts: Vec<ArtifactReport>,
}

impl SyncReport {
    pub fn outcome(&self, file_name: &str) -> Option<&SyncOutcome> {
        self.artifacts
            .iter()
            .find(|a| a.file_name == file_name)
            .map(|a| &a.outcome)
    }

    pub fn degraded_count(&self) -> usize {
        self.artifacts
            .iter()
            .filter(|a| matches!(a.outcome, SyncOutcome::Degraded(_)))
            .count()
    }
}

/// Regenerates every artifact from GitHub.
///
/// The featured-projects, skills, tools and stats pipelines run concurrently
/// and fail independently: a pipeline that errors writes its degraded
/// document and the others carry on.
pub struct SyncPipeline {
    github: Arc<dyn GitHubSource>,
    storage: Storage,
    selector: RepositorySelector,
    languages: LanguageAggregator,
    classifier: TechnologyClassifier,
    config: PipelineConfig,
}

impl SyncPipeline {
    pub fn new(github: impl GitHubSource + 'static, storage: Storage, config: PipelineConfig) -> Self {
        Self {
            github: Arc::new(github),
            storage,
            selector: RepositorySelector::new(),
            languages: LanguageAggregator::new(),
            classifier: TechnologyClassifier::new(TechTaxonomy::new()),
            config,
        }
    }

    /// Fails only if an artifact could not be written.
    pub async fn run(&self) -> Result<SyncReport> {
        tracing::info!("Syncing portfolio data for: {}", self.config.username);

        let (projects, skills, tools, stats) = tokio::join!(
            self.publish(self.build_projects()),
            self.publish(self.build_skills()),
            self.publish(self.build_tools()),
            self.publish(self.build_stats()),
        );

        let report = SyncReport {
            artifacts: vec![projects?, skills?, tools?, stats?],
        };
        tracing::info!(
            "Wrote {} artifacts ({} degraded) to {}",
            report.artifacts.len(),
            report.degraded_count(),
            self.storage.dir().display()
        );

        Ok(report)
    }

    async fn publish<D, F>(&self, build: F) -> Result<ArtifactReport>
    where
        D: Artifact,
        F: Future<Output = Result<D>>,
    {
        let (document, outcome) = match build.await {
            Ok(document) => (document, SyncOutcome::Fresh),
            Err(e) => {
                let kind = if e.is_transport() { "upstream" } else { "data" };
                tracing::warn!("{} degraded ({} error): {}", D::FILE_NAME, kind, e);
                let message = e.to_string();
                (D::degraded(message.clone()), SyncOutcome::Degraded(message))
            }
        };

        let path = self.storage.write(D::FILE_NAME, &document)?;
        Ok(ArtifactReport {
            file_name: D::FILE_NAME,
            path,
            outcome,
        })
    }

    async fn build_projects(&self) -> Result<ProjectsDocument> {
        let repos = self.github.get_user_repos(&self.config.username).await?;

        let projects: Vec<_> = self
            .selector
            .select(&repos)
            .into_iter()
            .map(FeaturedProject::from_repository)
            .collect();
        tracing::info!("Selected {} featured projects", projects.len());

        Ok(ProjectsDocument::new(projects))
    }

    async fn build_skills(&self) -> Result<SkillsDocument> {
        let repos = self.github.get_user_repos(&self.config.username).await?;

        let per_repo = self.fetch_languages(&repos).await;
        let totals = self.languages.aggregate(&per_repo);
        let languages = self.languages.rank(&totals);

        let classification = self.classifier.classify(&repos);
        tracing::info!(
            "Ranked {} languages, {} frameworks, {} tools",
            languages.len(),
            classification.frameworks.len(),
            classification.tools.len()
        );

        Ok(SkillsDocument::new(
            languages,
            classification.frameworks,
            classification.tools,
        ))
    }

    async fn build_tools(&self) -> Result<ToolsDocument> {
        let categories = match &self.config.tools_file {
            Some(path) => {
                tracing::info!("Loading tool categories from {}", path.display());
                load_tool_categories(path)?
            }
            None => default_tool_categories(),
        };

        Ok(ToolsDocument::new(categories))
    }

    async fn build_stats(&self) -> Result<StatsDocument> {
        let username = &self.config.username;
        let (user, repos) = tokio::try_join!(
            self.github.get_user(username),
            self.github.get_user_repos(username),
        )?;

        Ok(StatsDocument::new(aggregate_stats(&user, &repos)))
    }

    /// Fetches every repository's language breakdown concurrently. A failed
    /// fetch contributes an empty map rather than failing the whole run.
    async fn fetch_languages(&self, repos: &[Repository]) -> Vec<LanguageBytes> {
        let pb = if self.config.show_progress {
            ProgressBar::new(repos.len() as u64)
        } else {
            ProgressBar::hidden()
        };
        if let Ok(style) = ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} repos",
        ) {
            pb.set_style(style.progress_chars("#>-"));
        }

        let fetches = repos.iter().map(|repo| {
            let github = self.github.clone();
            let pb = pb.clone();
            async move {
                let languages = match github.get_languages(repo).await {
                    Ok(languages) => languages,
                    Err(e) => {
                        tracing::warn!("Language fetch failed for {}: {}", repo.name, e);
                        LanguageBytes::new()
                    }
                };
                pb.inc(1);
                languages
            }
        });

        let results = join_all(fetches).await;
        pb.finish_and_clear();
        results
    }
}
