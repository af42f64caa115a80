use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::models::{ToolCategory, ToolItem};

const CURATED_TOOLS: &[(&str, &[(&str, &str, &str)])] = &[
    (
        "Development Tools",
        &[
            ("fas fa-code", "text-github-blue", "JetBrains"),
            ("fas fa-code", "text-blue-400", "VS Code"),
            ("fab fa-docker", "text-blue-500", "Docker"),
        ],
    ),
    (
        "Testing Tools",
        &[
            ("fas fa-vial", "text-github-green", "Jest"),
            ("fas fa-bug", "text-red-400", "Postman"),
        ],
    ),
    (
        "Deployment Tools",
        &[
            ("fab fa-aws", "text-orange-400", "AWS"),
            ("fab fa-github", "text-github-blue", "GitHub Pages"),
            ("fas fa-rocket", "text-purple-400", "Vercel"),
        ],
    ),
];

const CATEGORY_TITLE_COLOR: &str = "text-github-blue";

pub fn default_tool_categories() -> Vec<ToolCategory> {
    CURATED_TOOLS
        .iter()
        .map(|(title, tools)| ToolCategory {
            title: title.to_string(),
            title_color: CATEGORY_TITLE_COLOR.to_string(),
            tools: tools
                .iter()
                .map(|(icon, icon_color, name)| ToolItem {
                    icon: icon.to_string(),
                    icon_color: icon_color.to_string(),
                    name: name.to_string(),
                })
                .collect(),
        })
        .collect()
}

#[derive(Deserialize)]
struct ToolsFile {
    categories: Vec<ToolCategory>,
}

/// Reads a `{ "categories": [...] }` file in the same shape as `tools.json`.
pub fn load_tool_categories(path: &Path) -> Result<Vec<ToolCategory>> {
    let content = fs::read_to_string(path)?;
    let file: ToolsFile = serde_json::from_str(&content)
        .map_err(|e| Error::Format(format!("{}: {}", path.display(), e)))?;
    Ok(file.categories)
}
