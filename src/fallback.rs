// Fallback policy.
// Decides, once per portfolio, whether upstream failures propagate or are
// replaced with static substitute data.

use chrono::{DateTime, Utc};
use tracing::error;

use crate::error::{FolioError, Result};
use crate::github::{LanguageStat, Profile, Repository};

const DEFAULT_NAME: &str = "Farzad Pousheh";
const DEFAULT_LOCATION: &str = "Remote";
const DEFAULT_BIO: &str =
    "Full-stack software developer specializing in creating robust, scalable applications.";

/// Generic split shown when a repository's languages cannot be fetched.
const FALLBACK_LANGUAGES: [(&str, &str, u32); 3] = [
    ("JavaScript", "#f1e05a", 60),
    ("CSS", "#563d7c", 30),
    ("HTML", "#e34c26", 10),
];

/// What to do when a data client call fails.
pub trait FallbackPolicy: Send + Sync {
    fn name(&self) -> &'static str;

    fn profile(&self, username: &str, now: DateTime<Utc>, error: FolioError) -> Result<Profile>;

    fn repositories(&self, username: &str, error: FolioError) -> Result<Vec<Repository>>;

    fn languages(&self, repo: &str, error: FolioError) -> Result<Vec<LanguageStat>>;
}

/// Log the failure and substitute static data. Used for the public page,
/// which must render even when GitHub is unreachable.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lenient;

impl FallbackPolicy for Lenient {
    fn name(&self) -> &'static str {
        "lenient"
    }

    fn profile(&self, username: &str, now: DateTime<Utc>, error: FolioError) -> Result<Profile> {
        error!(username, error = %error, "Failed to fetch GitHub profile, using default");
        Ok(default_profile(username, now))
    }

    fn repositories(&self, username: &str, error: FolioError) -> Result<Vec<Repository>> {
        error!(username, error = %error, "Failed to fetch repositories, using empty list");
        Ok(Vec::new())
    }

    fn languages(&self, repo: &str, error: FolioError) -> Result<Vec<LanguageStat>> {
        error!(repo, error = %error, "Failed to fetch languages, using default split");
        Ok(fallback_languages())
    }
}

/// Propagate every failure. Used by the health check.
#[derive(Debug, Clone, Copy, Default)]
pub struct Strict;

impl FallbackPolicy for Strict {
    fn name(&self) -> &'static str {
        "strict"
    }

    fn profile(&self, _username: &str, _now: DateTime<Utc>, error: FolioError) -> Result<Profile> {
        Err(error)
    }

    fn repositories(&self, _username: &str, error: FolioError) -> Result<Vec<Repository>> {
        Err(error)
    }

    fn languages(&self, _repo: &str, error: FolioError) -> Result<Vec<LanguageStat>> {
        Err(error)
    }
}

/// Profile shown when the real one is unavailable.
pub fn default_profile(username: &str, now: DateTime<Utc>) -> Profile {
    Profile {
        login: username.to_string(),
        name: Some(DEFAULT_NAME.to_string()),
        avatar_url: format!("https://avatars.githubusercontent.com/{}", username),
        html_url: format!("https://github.com/{}", username),
        bio: Some(DEFAULT_BIO.to_string()),
        location: Some(DEFAULT_LOCATION.to_string()),
        company: None,
        blog: None,
        email: None,
        twitter_username: None,
        public_repos: 0,
        followers: 0,
        following: 0,
        created_at: now,
    }
}

pub fn fallback_languages() -> Vec<LanguageStat> {
    FALLBACK_LANGUAGES
        .iter()
        .map(|(name, color, percentage)| LanguageStat {
            name: name.to_string(),
            color: color.to_string(),
            percentage: *percentage,
        })
        .collect()
}
