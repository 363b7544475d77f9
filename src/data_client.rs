// Data client seam.
// The three upstream lookups the portfolio performs, as a trait so the
// aggregation layer can run against GitHub or an in-memory double.

use async_trait::async_trait;
use tracing::instrument;

use crate::error::Result;
use crate::github::{GitHubClient, LanguageStat, MAX_PER_PAGE, Profile, Repository};
use crate::languages::language_breakdown;

/// Source of profile, repository and language data.
#[async_trait]
pub trait DataClient: Send + Sync {
    /// Look up a single account by handle.
    async fn fetch_profile(&self, username: &str) -> Result<Profile>;

    /// List up to 100 repositories, most recently updated first.
    async fn list_repositories(&self, username: &str) -> Result<Vec<Repository>>;

    /// Language share of one repository with display colors attached.
    async fn fetch_languages(&self, username: &str, repo: &str) -> Result<Vec<LanguageStat>>;
}

#[async_trait]
impl DataClient for GitHubClient {
    async fn fetch_profile(&self, username: &str) -> Result<Profile> {
        self.get_user(username).await
    }

    async fn list_repositories(&self, username: &str) -> Result<Vec<Repository>> {
        self.get_user_repos(username, MAX_PER_PAGE).await
    }

    #[instrument(skip(self))]
    async fn fetch_languages(&self, username: &str, repo: &str) -> Result<Vec<LanguageStat>> {
        let bytes = self.get_repo_languages(username, repo).await?;
        Ok(language_breakdown(&bytes))
    }
}
