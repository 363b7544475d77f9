// GitHub API response types.
// Profile, repository and language shapes consumed by the portfolio page.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Public profile of a GitHub account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: String,
    pub html_url: String,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub email: Option<String>,
    pub twitter_username: Option<String>,
    #[serde(default)]
    pub public_repos: u64,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
    pub created_at: DateTime<Utc>,
}

/// GitHub repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub homepage: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    pub updated_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub topics: Vec<String>,
}

impl Repository {
    /// Drop repeated topics, keeping the first occurrence.
    pub fn dedup_topics(&mut self) {
        let mut seen = std::collections::HashSet::new();
        self.topics.retain(|topic| seen.insert(topic.clone()));
    }
}

/// Share of one language in a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageStat {
    pub name: String,
    pub color: String,
    pub percentage: u32,
}

/// Rate limit information from response headers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateLimit {
    pub limit: u64,
    pub remaining: u64,
    pub reset: u64,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_repository_without_topics() {
        let repo: Repository = serde_json::from_value(json!({
            "id": 7,
            "name": "dotfiles",
            "full_name": "octocat/dotfiles",
            "description": null,
            "html_url": "https://github.com/octocat/dotfiles",
            "homepage": null,
            "language": null,
            "stargazers_count": 2,
            "forks_count": 0,
            "updated_at": "2024-03-01T10:00:00Z",
            "created_at": "2020-01-01T00:00:00Z",
            "private": false
        }))
        .unwrap();

        assert!(repo.topics.is_empty());
        assert!(repo.language.is_none());
        assert_eq!(repo.stargazers_count, 2);
    }

    #[test]
    fn test_dedup_topics_keeps_order() {
        let mut repo: Repository = serde_json::from_value(json!({
            "id": 1,
            "name": "site",
            "full_name": "octocat/site",
            "description": "Personal site",
            "html_url": "https://github.com/octocat/site",
            "homepage": "https://octo.cat",
            "language": "TypeScript",
            "updated_at": "2024-03-01T10:00:00Z",
            "created_at": "2020-01-01T00:00:00Z",
            "topics": ["react", "nextjs", "react", "css", "nextjs"]
        }))
        .unwrap();

        repo.dedup_topics();
        assert_eq!(repo.topics, vec!["react", "nextjs", "css"]);
    }

    #[test]
    fn test_profile_optional_fields() {
        let profile: Profile = serde_json::from_value(json!({
            "login": "octocat",
            "id": 583231,
            "name": null,
            "avatar_url": "https://avatars.githubusercontent.com/u/583231",
            "html_url": "https://github.com/octocat",
            "bio": null,
            "location": "San Francisco",
            "company": "@github",
            "blog": "https://github.blog",
            "email": null,
            "twitter_username": null,
            "public_repos": 8,
            "followers": 100,
            "following": 9,
            "created_at": "2011-01-25T18:44:36Z"
        }))
        .unwrap();

        assert_eq!(profile.login, "octocat");
        assert!(profile.name.is_none());
        assert_eq!(profile.location.as_deref(), Some("San Francisco"));
        assert_eq!(profile.public_repos, 8);
    }
}
