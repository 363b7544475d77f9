// GitHub API endpoint functions.
// Typed methods for the three REST calls the portfolio needs.

use serde_json::{Map, Value};
use tracing::{debug, instrument};

use crate::error::Result;

use super::client::GitHubClient;
use super::types::{Profile, Repository};

/// Largest page GitHub serves for repository listings.
pub const MAX_PER_PAGE: u32 = 100;

impl GitHubClient {
    /// Get a user's public profile.
    #[instrument(skip(self))]
    pub async fn get_user(&self, username: &str) -> Result<Profile> {
        let response = self.get(&format!("/users/{}", username)).await?;
        let profile: Profile = response.json().await?;
        Ok(profile)
    }

    /// Get one page of a user's repositories, most recently updated first.
    #[instrument(skip(self))]
    pub async fn get_user_repos(&self, username: &str, per_page: u32) -> Result<Vec<Repository>> {
        let per_page = per_page.clamp(1, MAX_PER_PAGE);
        let params = [
            ("sort", "updated"),
            ("direction", "desc"),
            ("per_page", &per_page.to_string()),
        ];
        let response = self
            .get_with_params(&format!("/users/{}/repos", username), &params)
            .await?;
        let mut repos: Vec<Repository> = response.json().await?;
        for repo in &mut repos {
            repo.dedup_topics();
        }
        debug!(count = repos.len(), "Fetched repositories");
        Ok(repos)
    }

    /// Get byte counts per language for a repository, in the order GitHub
    /// returns them (largest first).
    #[instrument(skip(self))]
    pub async fn get_repo_languages(&self, owner: &str, repo: &str) -> Result<Vec<(String, u64)>> {
        let response = self
            .get(&format!("/repos/{}/{}/languages", owner, repo))
            .await?;
        let map: Map<String, Value> = response.json().await?;

        map.into_iter()
            .map(|(name, bytes)| -> Result<(String, u64)> {
                Ok((name, serde_json::from_value(bytes)?))
            })
            .collect()
    }
}
