// Portfolio data facade.
// The operations the page calls: profile, repositories, featured projects,
// languages and skills, each cached and routed through one fallback policy.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures::future::join_all;
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::cache::{Cache, Clock, SystemClock};
use crate::config::Settings;
use crate::data_client::DataClient;
use crate::error::Result;
use crate::fallback::FallbackPolicy;
use crate::featured::select_featured;
use crate::github::{GitHubClient, LanguageStat, Profile, Repository};
use crate::humanize::format_distance;
use crate::skills::{SkillGroup, categorize_skills, derive_skill_set};

/// A featured repository with its language breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    #[serde(flatten)]
    pub repository: Repository,
    pub languages: Vec<LanguageStat>,
    /// "Updated" text, e.g. "3 days ago".
    pub updated: String,
}

/// Everything the page renders, in one serializable value.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillGroup>,
    pub generated_at: DateTime<Utc>,
}

/// Result of a health check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    pub login: String,
    pub public_repos: u64,
    pub repositories_listed: usize,
}

/// Cached, policy-governed access to one account's portfolio data.
pub struct Portfolio {
    client: Arc<dyn DataClient>,
    policy: Arc<dyn FallbackPolicy>,
    clock: Arc<dyn Clock>,
    username: String,
    profile: Cache<(), Profile>,
    repositories: Cache<(), Vec<Repository>>,
    languages: Cache<String, Vec<LanguageStat>>,
}

impl Portfolio {
    /// Build a portfolio backed by the GitHub API.
    pub fn from_settings(settings: &Settings, policy: Arc<dyn FallbackPolicy>) -> Result<Self> {
        let client = GitHubClient::new(settings)?;
        info!(
            username = %settings.username,
            authenticated = settings.is_authenticated(),
            policy = policy.name(),
            "Portfolio client ready"
        );
        Ok(Self::new(settings, Arc::new(client), policy))
    }

    pub fn new(
        settings: &Settings,
        client: Arc<dyn DataClient>,
        policy: Arc<dyn FallbackPolicy>,
    ) -> Self {
        Self::with_clock(settings, client, policy, Arc::new(SystemClock))
    }

    pub fn with_clock(
        settings: &Settings,
        client: Arc<dyn DataClient>,
        policy: Arc<dyn FallbackPolicy>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let ttl = settings.cache_ttl;
        Self {
            client,
            policy,
            username: settings.username.clone(),
            profile: Cache::new(ttl, clock.clone()),
            repositories: Cache::new(ttl, clock.clone()),
            languages: Cache::new(ttl, clock.clone()),
            clock,
        }
    }

    /// The account's profile.
    #[instrument(skip(self), fields(username = %self.username))]
    pub async fn profile(&self) -> Result<Profile> {
        let fetched = self
            .profile
            .get_or_try_insert_with((), || self.client.fetch_profile(&self.username))
            .await;

        match fetched {
            Ok(profile) => Ok(profile),
            Err(e) => self.policy.profile(&self.username, self.clock.now(), e),
        }
    }

    /// Up to 100 repositories, most recently updated first.
    #[instrument(skip(self), fields(username = %self.username))]
    pub async fn repositories(&self) -> Result<Vec<Repository>> {
        let fetched = self
            .repositories
            .get_or_try_insert_with((), || self.client.list_repositories(&self.username))
            .await;

        match fetched {
            Ok(repos) => Ok(repos),
            Err(e) => self.policy.repositories(&self.username, e),
        }
    }

    /// The six most starred repositories, or placeholders when there are none.
    pub async fn featured_repositories(&self) -> Result<Vec<Repository>> {
        let repos = self.repositories().await?;
        Ok(select_featured(&repos, &self.username, self.clock.now()))
    }

    /// Language breakdown for one of the account's repositories.
    #[instrument(skip(self))]
    pub async fn languages(&self, repo: &str) -> Result<Vec<LanguageStat>> {
        let fetched = self
            .languages
            .get_or_try_insert_with(repo.to_string(), || {
                self.client.fetch_languages(&self.username, repo)
            })
            .await;

        match fetched {
            Ok(languages) => Ok(languages),
            Err(e) => self.policy.languages(repo, e),
        }
    }

    /// Featured repositories with their languages. Language lookups run
    /// concurrently; results follow the featured order.
    pub async fn featured_projects(&self) -> Result<Vec<Project>> {
        let featured = self.featured_repositories().await?;
        self.projects_for(featured).await
    }

    async fn projects_for(&self, featured: Vec<Repository>) -> Result<Vec<Project>> {
        debug!(count = featured.len(), "Fetching languages for featured repositories");

        let lookups = featured.iter().map(|repo| self.languages(&repo.name));
        let languages = join_all(lookups).await;

        let now = self.clock.now();
        featured
            .into_iter()
            .zip(languages)
            .map(|(repository, languages)| -> Result<Project> {
                Ok(Project {
                    updated: format_distance(repository.updated_at, now),
                    languages: languages?,
                    repository,
                })
            })
            .collect()
    }

    /// Skill labels inferred from the repositories.
    pub async fn skills(&self) -> Result<BTreeSet<String>> {
        let repos = self.repositories().await?;
        Ok(derive_skill_set(&repos))
    }

    /// Skills grouped into display categories.
    pub async fn skill_groups(&self) -> Result<Vec<SkillGroup>> {
        let skills = self.skills().await?;
        Ok(categorize_skills(&skills))
    }

    /// Gather everything the page shows. The repository list is fetched
    /// once and both the projects and skills sections derive from it.
    pub async fn snapshot(&self) -> Result<Snapshot> {
        let repos = self.repositories().await?;
        let featured = select_featured(&repos, &self.username, self.clock.now());
        let skills = categorize_skills(&derive_skill_set(&repos));

        let (profile, projects) =
            futures::try_join!(self.profile(), self.projects_for(featured))?;

        Ok(Snapshot {
            profile,
            projects,
            skills,
            generated_at: self.clock.now(),
        })
    }

    /// Confirm the profile and repository list can be fetched.
    pub async fn health(&self) -> Result<HealthReport> {
        let profile = self.profile().await?;
        let repos = self.repositories().await?;

        Ok(HealthReport {
            login: profile.login,
            public_repos: profile.public_repos,
            repositories_listed: repos.len(),
        })
    }
}
