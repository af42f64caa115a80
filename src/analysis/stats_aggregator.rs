use crate::models::{GitHubUser, Repository, StatEntry};

/// Builds the four headline counters. The page renders them by position, so
/// the order (repos, stars, forks, followers) is fixed.
pub fn aggregate_stats(user: &GitHubUser, repos: &[Repository]) -> Vec<StatEntry> {
    let total_stars: u64 = repos.iter().map(|r| r.stargazers_count).sum();
    let total_forks: u64 = repos.iter().map(|r| r.forks_count).sum();

    vec![
        stat("fas fa-code", user.public_repos, "Public Repos", "text-github-blue", "public_repos"),
        stat("fas fa-star", total_stars, "Stars Earned", "text-yellow-400", "stargazers"),
        stat("fas fa-code-branch", total_forks, "Forks", "text-purple-400", "forks"),
        stat("fas fa-users", user.followers, "Followers", "text-github-blue", "followers"),
    ]
}

fn stat(icon: &str, value: u64, label: &str, color: &str, key: &str) -> StatEntry {
    StatEntry {
        icon: icon.to_string(),
        value,
        label: label.to_string(),
        color: color.to_string(),
        key: key.to_string(),
    }
}
