pub mod languages;
pub mod toolbox;

use std::collections::HashSet;

pub use languages::{language_badge, language_style, IconStyle, GENERIC_STYLE};
pub use toolbox::{default_tool_categories, load_tool_categories};

/// Technologies detected from repository text, in ranking tie-break order.
///
/// Keywords are matched as lowercase substrings, so short ones such as `ci`
/// or `ng` hit liberally.
const TECHNOLOGY_KEYWORDS: &[(&str, &[&str])] = &[
    ("React", &["react", "jsx", "redux", "hooks"]),
    ("Vue", &["vue", "vuex", "nuxt"]),
    ("Node.js", &["node", "nodejs", "npm", "express", "koa"]),
    ("Angular", &["angular", "ng"]),
    ("Express", &["express", "middleware", "rest api"]),
    ("Spring Boot", &["spring", "java web", "boot"]),
    ("Django", &["django", "python web"]),
    ("Flask", &["flask", "python web"]),
    ("Docker", &["docker", "container", "dockerfile"]),
    ("Kubernetes", &["kubernetes", "k8s", "helm"]),
    ("AWS", &["aws", "amazon", "lambda", "s3", "ec2"]),
    ("MongoDB", &["mongo", "mongodb", "nosql"]),
    ("MySQL", &["mysql", "sql", "mariadb"]),
    ("PostgreSQL", &["postgres", "postgresql"]),
    ("GraphQL", &["graphql", "apollo"]),
    ("Git", &["git", "github", "gitlab"]),
    ("CI/CD", &["ci", "cd", "pipeline", "jenkins", "github actions"]),
];

/// Technologies reported as tools rather than frameworks.
const TOOL_TECHNOLOGIES: &[&str] = &["Docker", "Kubernetes", "AWS", "Git", "CI/CD"];

const TECHNOLOGY_STYLES: &[(&str, IconStyle)] = &[
    ("React", IconStyle { icon: "fab fa-react", color: "text-blue-400" }),
    ("Vue", IconStyle { icon: "fab fa-vuejs", color: "text-green-400" }),
    ("Node.js", IconStyle { icon: "fab fa-node-js", color: "text-green-500" }),
    ("Angular", IconStyle { icon: "fab fa-angular", color: "text-red-500" }),
    ("Docker", IconStyle { icon: "fab fa-docker", color: "text-blue-500" }),
    ("AWS", IconStyle { icon: "fab fa-aws", color: "text-orange-400" }),
    ("Git", IconStyle { icon: "fab fa-git-alt", color: "text-orange-500" }),
    ("CI/CD", IconStyle { icon: "fas fa-sync-alt", color: "text-green-400" }),
    ("Express", IconStyle { icon: "fas fa-server", color: "text-gray-400" }),
    ("Spring Boot", IconStyle { icon: "fas fa-leaf", color: "text-green-500" }),
];

#[derive(Debug, Clone)]
pub struct Technology {
    pub name: &'static str,
    pub keywords: Vec<&'static str>,
}

pub struct TechTaxonomy {
    technologies: Vec<Technology>,
    tools: HashSet<&'static str>,
}

impl TechTaxonomy {
    pub fn new() -> Self {
        let technologies = TECHNOLOGY_KEYWORDS
            .iter()
            .map(|&(name, keywords)| Technology {
                name,
                keywords: keywords.to_vec(),
            })
            .collect();

        Self {
            technologies,
            tools: TOOL_TECHNOLOGIES.iter().copied().collect(),
        }
    }

    pub fn technologies(&self) -> &[Technology] {
        &self.technologies
    }

    pub fn is_tool(&self, name: &str) -> bool {
        self.tools.contains(name)
    }

    pub fn style(&self, name: &str) -> IconStyle {
        TECHNOLOGY_STYLES
            .iter()
            .find(|(tech, _)| *tech == name)
            .map(|(_, style)| *style)
            .unwrap_or(GENERIC_STYLE)
    }
}

impl Default for TechTaxonomy {
    fn default() -> Self {
        Self::new()
    }
}
