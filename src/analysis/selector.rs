use std::cmp::Reverse;

use crate::models::Repository;

pub const MAX_FEATURED: usize = 6;
pub const MIN_FEATURED: usize = 3;

/// Picks the repositories shown as featured projects.
///
/// Own repositories with a description come first, ranked by stars then by
/// most recent update. When fewer than `min_featured` qualify, described
/// forks are appended (most recently updated first) to make up the shortfall.
pub struct RepositorySelector {
    max_featured: usize,
    min_featured: usize,
}

impl RepositorySelector {
    pub fn new() -> Self {
        Self {
            max_featured: MAX_FEATURED,
            min_featured: MIN_FEATURED,
        }
    }

    pub fn select<'a>(&self, repos: &'a [Repository]) -> Vec<&'a Repository> {
        let mut featured: Vec<&Repository> = repos
            .iter()
            .filter(|r| !r.fork && r.has_description())
            .collect();
        featured.sort_by_key(|r| (Reverse(r.stargazers_count), Reverse(r.updated_at)));
        featured.truncate(self.max_featured);

        if featured.len() < self.min_featured {
            let mut forks: Vec<&Repository> = repos
                .iter()
                .filter(|r| r.fork && r.has_description())
                .collect();
            forks.sort_by_key(|r| Reverse(r.updated_at));

            let shortfall = self.min_featured - featured.len();
            tracing::debug!(
                "Only {} featured repositories, backfilling up to {} forks",
                featured.len(),
                shortfall
            );
            featured.extend(forks.into_iter().take(shortfall));
        }

        featured
    }
}

impl Default for RepositorySelector {
    fn default() -> Self {
        Self::new()
    }
}
