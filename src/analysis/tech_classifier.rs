use std::cmp::Reverse;

use crate::models::{Repository, SkillEntry};
use crate::taxonomy::TechTaxonomy;

use super::language_aggregator::percentage;

pub const MAX_FRAMEWORKS: usize = 5;
pub const MAX_TOOLS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechnologyCount {
    pub name: &'static str,
    pub matches: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub frameworks: Vec<SkillEntry>,
    pub tools: Vec<SkillEntry>,
}

pub struct TechnologyClassifier {
    taxonomy: TechTaxonomy,
}

impl TechnologyClassifier {
    pub fn new(taxonomy: TechTaxonomy) -> Self {
        Self { taxonomy }
    }

    /// Counts keyword hits per technology, highest first, zero counts dropped.
    ///
    /// Every keyword found in a repository's text adds one, so a repository
    /// mentioning both "react" and "redux" counts twice towards React.
    pub fn count_matches(&self, repos: &[Repository]) -> Vec<TechnologyCount> {
        let texts: Vec<String> = repos.iter().map(Repository::searchable_text).collect();

        let mut counts: Vec<TechnologyCount> = self
            .taxonomy
            .technologies()
            .iter()
            .map(|tech| {
                let matches = tech
                    .keywords
                    .iter()
                    .map(|keyword| texts.iter().filter(|text| text.contains(keyword)).count() as u32)
                    .sum();
                TechnologyCount {
                    name: tech.name,
                    matches,
                }
            })
            .filter(|count| count.matches > 0)
            .collect();

        counts.sort_by_key(|count| Reverse(count.matches));
        counts
    }

    pub fn classify(&self, repos: &[Repository]) -> Classification {
        let counts = self.count_matches(repos);
        let total_matches: u32 = counts.iter().map(|c| c.matches).sum();
        if total_matches == 0 {
            return Classification::default();
        }

        let mut classification = Classification::default();
        for count in counts {
            let style = self.taxonomy.style(count.name);
            let entry = SkillEntry {
                name: count.name.to_string(),
                level: percentage(count.matches.into(), total_matches.into()).round() as u32,
                icon: style.icon.to_string(),
                color: style.color.to_string(),
            };

            if self.taxonomy.is_tool(count.name) {
                if classification.tools.len() < MAX_TOOLS {
                    classification.tools.push(entry);
                }
            } else if classification.frameworks.len() < MAX_FRAMEWORKS {
                classification.frameworks.push(entry);
            }
        }

        tracing::debug!(
            "Classified {} frameworks and {} tools from {} keyword matches",
            classification.frameworks.len(),
            classification.tools.len(),
            total_matches
        );

        classification
    }
}

impl Default for TechnologyClassifier {
    fn default() -> Self {
        Self::new(TechTaxonomy::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn repo(description: &str, topics: &[&str], language: Option<&str>) -> Repository {
        Repository {
            name: "repo".to_string(),
            description: Some(description.to_string()),
            language: language.map(str::to_string),
            fork: false,
            stargazers_count: 0,
            forks_count: 0,
            updated_at: Utc::now(),
            html_url: String::new(),
            languages_url: String::new(),
            topics: topics.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn count_of(counts: &[TechnologyCount], name: &str) -> u32 {
        counts.iter().find(|c| c.name == name).map(|c| c.matches).unwrap_or(0)
    }

    #[test]
    fn test_synonyms_inflate_counts() {
        // Known skew: one repository hitting three React keywords counts three times.
        let classifier = TechnologyClassifier::default();
        let counts = classifier.count_matches(&[repo("React app with Redux and hooks", &[], None)]);

        assert_eq!(count_of(&counts, "React"), 3);
    }

    #[test]
    fn test_topics_and_language_are_searched() {
        let classifier = TechnologyClassifier::default();
        let counts = classifier.count_matches(&[repo("", &["Django"], Some("Python"))]);

        assert_eq!(count_of(&counts, "Django"), 1);
    }

    #[test]
    fn test_zero_matches_never_reported() {
        let classifier = TechnologyClassifier::default();
        let counts = classifier.count_matches(&[repo("flask service", &[], None)]);

        assert!(counts.iter().all(|c| c.matches > 0));
        assert_eq!(count_of(&counts, "Flask"), 1);
        assert!(counts.iter().all(|c| c.name != "React"));

        assert!(classifier.count_matches(&[]).is_empty());
    }

    #[test]
    fn test_counts_grow_with_more_repositories() {
        let classifier = TechnologyClassifier::default();
        let mut repos = vec![repo("docker images", &[], None)];
        let before = classifier.count_matches(&repos);

        repos.push(repo("docker compose setup", &["kubernetes"], None));
        let after = classifier.count_matches(&repos);

        for count in &before {
            assert!(count_of(&after, count.name) >= count.matches);
        }
        assert!(count_of(&after, "Docker") > count_of(&before, "Docker"));
    }

    #[test]
    fn test_sorted_by_count_descending() {
        let classifier = TechnologyClassifier::default();
        let counts = classifier.count_matches(&[
            repo("vue nuxt vuex", &[], None),
            repo("flask", &[], None),
        ]);

        assert_eq!(counts[0].name, "Vue");
        assert!(counts.windows(2).all(|w| w[0].matches >= w[1].matches));
    }

    #[test]
    fn test_partition_into_frameworks_and_tools() {
        let classifier = TechnologyClassifier::default();
        let classification = classifier.classify(&[
            repo("flask api", &["docker"], None),
            repo("vue dashboard", &[], None),
        ]);

        let frameworks: Vec<_> = classification.frameworks.iter().map(|e| e.name.as_str()).collect();
        let tools: Vec<_> = classification.tools.iter().map(|e| e.name.as_str()).collect();

        assert_eq!(frameworks, ["Vue", "Flask"]);
        assert_eq!(tools, ["Docker"]);
        assert_eq!(classification.tools[0].icon, "fab fa-docker");
        assert_eq!(classification.frameworks[0].icon, "fab fa-vuejs");
        assert_eq!(classification.frameworks[1].icon, "fas fa-code");
        assert!(classification.frameworks.iter().all(|e| e.level == 33));
    }

    #[test]
    fn test_short_keywords_match_inside_words() {
        // "ng" is an Angular keyword, so "django" also counts towards Angular.
        let classifier = TechnologyClassifier::default();
        let counts = classifier.count_matches(&[repo("django", &[], None)]);

        assert_eq!(count_of(&counts, "Angular"), 1);
        assert_eq!(count_of(&counts, "Django"), 1);
    }

    #[test]
    fn test_levels_share_of_total_matches() {
        let classifier = TechnologyClassifier::default();
        let classification = classifier.classify(&[
            repo("flask", &[], None),
            repo("flask", &[], None),
            repo("flask", &[], None),
            repo("vue", &[], None),
        ]);

        assert_eq!(classification.frameworks[0].name, "Flask");
        assert_eq!(classification.frameworks[0].level, 75);
        assert_eq!(classification.frameworks[1].name, "Vue");
        assert_eq!(classification.frameworks[1].level, 25);
        assert!(classification.tools.is_empty());
    }

    #[test]
    fn test_levels_are_rounded_shares() {
        // Seven matches in total: 4, 2 and 1 of them.
        let classifier = TechnologyClassifier::default();
        let classification = classifier.classify(&[
            repo("flask", &[], None),
            repo("flask", &[], None),
            repo("flask", &[], None),
            repo("flask", &[], None),
            repo("vue", &[], None),
            repo("vue", &[], None),
            repo("docker", &[], None),
        ]);

        let levels: Vec<_> = classification.frameworks.iter().map(|e| e.level).collect();
        assert_eq!(levels, [57, 29]);
        assert_eq!(classification.tools[0].level, 14);
    }

    #[test]
    fn test_caps_each_partition() {
        // The ranked list is split into frameworks and tools before the cap
        // applies, so up to ten entries come back in total rather than only
        // the five best-ranked technologies overall.
        let classifier = TechnologyClassifier::default();
        let classification = classifier.classify(&[repo(
            "react vue angular express spring django flask mongodb postgres graphql \
             docker kubernetes aws git jenkins",
            &[],
            None,
        )]);

        assert_eq!(classification.frameworks.len(), MAX_FRAMEWORKS);
        assert_eq!(classification.tools.len(), MAX_TOOLS);
        assert_eq!(classification.frameworks.len() + classification.tools.len(), 10);
    }

    #[test]
    fn test_tool_ranked_past_top_five_is_kept() {
        let classifier = TechnologyClassifier::default();
        let classification = classifier.classify(&[
            repo("vue", &[], None),
            repo("vue", &[], None),
            repo("flask", &[], None),
            repo("flask", &[], None),
            repo("django", &[], None),
            repo("react", &[], None),
            repo("graphql", &[], None),
            repo("kubernetes", &[], None),
        ]);

        let tools: Vec<_> = classification.tools.iter().map(|e| e.name.as_str()).collect();
        // Kubernetes ranks sixth overall, behind five frameworks.
        assert_eq!(classification.frameworks.len(), MAX_FRAMEWORKS);
        assert_eq!(tools, ["Kubernetes"]);
    }
}
