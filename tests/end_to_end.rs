// End-to-end tests.
// Runs the portfolio against a mocked GitHub API.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use folio::cache::ManualClock;
use folio::github::GitHubClient;
use folio::skills::derive_skill_set;
use folio::{FolioError, Lenient, Portfolio, Settings, Strict};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings_for(server: &MockServer) -> Settings {
    Settings {
        username: "octocat".to_string(),
        ..Settings::default()
    }
    .with_api_base(server.uri())
    .with_retries(1, Duration::ZERO)
}

fn portfolio_for(
    server: &MockServer,
    policy: Arc<dyn folio::FallbackPolicy>,
) -> (Portfolio, Arc<ManualClock>) {
    let settings = settings_for(server);
    let client = Arc::new(GitHubClient::new(&settings).unwrap());
    let clock = Arc::new(ManualClock::new(Utc::now()));
    let portfolio = Portfolio::with_clock(&settings, client, policy, clock.clone());
    (portfolio, clock)
}

async fn mount_profile(server: &MockServer, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/users/octocat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "login": "octocat",
            "name": "The Octocat",
            "avatar_url": "https://avatars.githubusercontent.com/u/583231",
            "html_url": "https://github.com/octocat",
            "bio": null,
            "location": "San Francisco",
            "company": "@github",
            "blog": "https://github.blog",
            "email": null,
            "twitter_username": null,
            "public_repos": 1,
            "followers": 10,
            "following": 0,
            "created_at": "2011-01-25T18:44:36Z"
        })))
        .expect(expected_calls)
        .mount(server)
        .await;
}

async fn mount_single_repository(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 42,
                "name": "site",
                "full_name": "octocat/site",
                "description": "Personal site",
                "html_url": "https://github.com/octocat/site",
                "homepage": "https://octo.cat",
                "language": "TypeScript",
                "stargazers_count": 12,
                "forks_count": 3,
                "updated_at": "2024-05-01T00:00:00Z",
                "created_at": "2023-01-01T00:00:00Z",
                "topics": ["react", "hello-world"]
            }
        ])))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/site/languages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "TypeScript": 300,
            "CSS": 100
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_single_repository_scenario() {
    let server = MockServer::start().await;
    mount_single_repository(&server).await;
    let (portfolio, _clock) = portfolio_for(&server, Arc::new(Strict));

    let repos = portfolio.repositories().await.unwrap();
    let skills = derive_skill_set(&repos);
    assert!(skills.contains("React"));
    assert!(skills.contains("TypeScript"));
    assert!(!skills.contains("Hello World"));

    let languages = portfolio.languages("site").await.unwrap();
    let shares: Vec<(&str, u32)> = languages
        .iter()
        .map(|l| (l.name.as_str(), l.percentage))
        .collect();
    assert_eq!(shares, vec![("TypeScript", 75), ("CSS", 25)]);
}

#[tokio::test]
async fn test_profile_fetched_once_per_ttl() {
    let server = MockServer::start().await;
    mount_profile(&server, 2).await;
    let (portfolio, clock) = portfolio_for(&server, Arc::new(Strict));

    let first = portfolio.profile().await.unwrap();
    let second = portfolio.profile().await.unwrap();
    assert_eq!(first, second);
    assert_eq!(server.received_requests().await.unwrap().len(), 1);

    clock.advance(Duration::from_secs(3600));
    portfolio.profile().await.unwrap();
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_snapshot_with_real_data() {
    let server = MockServer::start().await;
    mount_profile(&server, 1).await;
    mount_single_repository(&server).await;
    let (portfolio, _clock) = portfolio_for(&server, Arc::new(Lenient));

    let snapshot = portfolio.snapshot().await.unwrap();
    assert_eq!(snapshot.profile.name.as_deref(), Some("The Octocat"));
    assert_eq!(snapshot.projects.len(), 1);
    assert_eq!(snapshot.projects[0].repository.name, "site");
    assert_eq!(snapshot.projects[0].languages.len(), 2);

    let frontend = &snapshot.skills[1];
    assert_eq!(frontend.skills, vec!["React"]);
    assert!(!frontend.fallback);

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["projects"][0]["full_name"], "octocat/site");
    assert_eq!(json["projects"][0]["languages"][0]["color"], "#3178c6");
}

#[tokio::test]
async fn test_lenient_page_survives_outage() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let (portfolio, _clock) = portfolio_for(&server, Arc::new(Lenient));

    let snapshot = portfolio.snapshot().await.unwrap();
    assert_eq!(snapshot.profile.login, "octocat");
    let names: Vec<&str> = snapshot
        .projects
        .iter()
        .map(|p| p.repository.name.as_str())
        .collect();
    assert_eq!(names, vec!["Project 1", "Project 2", "Project 3"]);
    assert!(snapshot.projects.iter().all(|p| p.languages.len() == 3));
    assert!(snapshot.skills.iter().all(|g| g.fallback));
}

#[tokio::test]
async fn test_strict_health_check_fails_on_outage() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/octocat"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let (portfolio, _clock) = portfolio_for(&server, Arc::new(Strict));

    let err = portfolio.health().await.unwrap_err();
    assert!(matches!(err, FolioError::NotFound(_)));
}
