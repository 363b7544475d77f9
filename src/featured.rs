// Featured repository selection.
// GitHub exposes no cheap "pinned" lookup, so the most starred repositories
// stand in for them.

use chrono::{DateTime, Utc};

use crate::github::Repository;

/// Upper bound on featured repositories.
pub const FEATURED_LIMIT: usize = 6;

const PLACEHOLDER_COUNT: usize = 3;
const PLACEHOLDER_LANGUAGES: [&str; 3] = ["JavaScript", "TypeScript", "Python"];
const PLACEHOLDER_TOPICS: [&str; 3] = ["web", "react", "nextjs"];
const PLACEHOLDER_DESCRIPTION: &str =
    "A sample project description that showcases my development skills and expertise.";

/// Pick up to six repositories by stars (desc), then last update (desc).
///
/// An empty input yields three placeholder projects so the section never
/// renders blank. Placeholders are stamped with `now`.
pub fn select_featured(
    repositories: &[Repository],
    username: &str,
    now: DateTime<Utc>,
) -> Vec<Repository> {
    if repositories.is_empty() {
        return placeholder_repositories(username, now);
    }

    let mut ranked = repositories.to_vec();
    ranked.sort_by(|a, b| {
        b.stargazers_count
            .cmp(&a.stargazers_count)
            .then_with(|| b.updated_at.cmp(&a.updated_at))
    });
    ranked.truncate(FEATURED_LIMIT);
    ranked
}

/// Three deterministic stand-ins named `Project 1..3`.
pub fn placeholder_repositories(username: &str, now: DateTime<Utc>) -> Vec<Repository> {
    (0..PLACEHOLDER_COUNT)
        .map(|i| Repository {
            id: i as u64,
            name: format!("Project {}", i + 1),
            full_name: format!("{}/project-{}", username, i + 1),
            description: Some(PLACEHOLDER_DESCRIPTION.to_string()),
            html_url: format!("https://github.com/{}", username),
            homepage: None,
            language: Some(PLACEHOLDER_LANGUAGES[i % PLACEHOLDER_LANGUAGES.len()].to_string()),
            stargazers_count: 0,
            forks_count: 0,
            updated_at: now,
            created_at: now,
            topics: PLACEHOLDER_TOPICS.iter().map(|t| t.to_string()).collect(),
        })
        .collect()
}
