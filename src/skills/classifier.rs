// Skill classifier.
// Decides which repository topics name a technology and renders them as labels.

use std::collections::BTreeSet;

use crate::github::Repository;

/// Technologies, frameworks and practices recognized in topics.
const SKILL_KEYWORDS: &[&str] = &[
    "react", "node", "typescript", "javascript", "vue", "angular", "express",
    "next", "nextjs", "gatsby", "graphql", "apollo", "firebase", "aws", "azure",
    "docker", "kubernetes", "mongo", "mongodb", "sql", "postgresql", "mysql",
    "redux", "mobx", "tailwind", "css", "sass", "less", "html", "webpack", "vite",
    "rollup", "jest", "testing", "cypress", "playwright", "storybook", "figma",
    "design", "ui", "ux", "responsive", "mobile", "pwa", "web", "api", "rest",
    "soap", "auth", "oauth", "jwt", "security", "devops", "ci", "cd", "git",
    "github", "gitlab", "bitbucket", "python", "django", "flask", "fastapi",
    "java", "spring", "boot", "go", "golang", "rust", "c", "cpp", "c++", "csharp",
    "dotnet", "php", "laravel", "symfony", "wordpress", "ruby", "rails",
];

/// Title-cased words or phrases that need their canonical spelling.
const SPECIAL_CASES: &[(&str, &str)] = &[
    ("Ci Cd", "CI/CD"),
    ("Reactjs", "React"),
    ("Nodejs", "Node.js"),
    ("Nextjs", "Next.js"),
    ("Javascript", "JavaScript"),
    ("Typescript", "TypeScript"),
    ("Github", "GitHub"),
    ("Api", "API"),
    ("Ui", "UI"),
    ("Ux", "UX"),
    ("Css", "CSS"),
    ("Html", "HTML"),
    ("Aws", "AWS"),
    ("Ci", "CI"),
    ("Cd", "CD"),
    ("Jwt", "JWT"),
    ("Pwa", "PWA"),
];

/// Whether a topic looks like a technical skill.
///
/// Case-insensitive substring match in both directions against the keyword
/// list: "react-native" contains "react", "js" would be contained by
/// "nextjs". Short keywords make this generous; an empty topic never matches.
pub fn is_skill_topic(topic: &str) -> bool {
    let topic = topic.trim().to_lowercase();
    if topic.is_empty() {
        return false;
    }

    SKILL_KEYWORDS
        .iter()
        .any(|keyword| topic.contains(keyword) || keyword.contains(topic.as_str()))
}

/// Render a topic slug as a display label.
///
/// Hyphens and underscores become spaces and each word is capitalized. The
/// whole label is then checked against the special-case table, and failing
/// that each word is, so "ci-cd" keeps both tokens.
pub fn format_skill_label(topic: &str) -> String {
    let title = topic
        .replace(['-', '_'], " ")
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ");

    if let Some(label) = special_case(&title) {
        return label.to_string();
    }

    title
        .split(' ')
        .map(|word| special_case(word).map(str::to_string).unwrap_or_else(|| word.to_string()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Union of primary languages and skill-like topics across repositories.
pub fn derive_skill_set(repositories: &[Repository]) -> BTreeSet<String> {
    let mut skills = BTreeSet::new();

    for repo in repositories {
        if let Some(language) = &repo.language {
            skills.insert(language.clone());
        }
        for topic in &repo.topics {
            if is_skill_topic(topic) {
                skills.insert(format_skill_label(topic));
            }
        }
    }

    skills
}

fn special_case(label: &str) -> Option<&'static str> {
    SPECIAL_CASES
        .iter()
        .find(|(from, _)| *from == label)
        .map(|(_, to)| *to)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn repo(language: Option<&str>, topics: &[&str]) -> Repository {
        Repository {
            id: 1,
            name: "site".to_string(),
            full_name: "octocat/site".to_string(),
            description: None,
            html_url: "https://github.com/octocat/site".to_string(),
            homepage: None,
            language: language.map(str::to_string),
            stargazers_count: 0,
            forks_count: 0,
            updated_at: Utc::now(),
            created_at: Utc::now(),
            topics: topics.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_is_skill_topic() {
        assert!(is_skill_topic("react-native"));
        assert!(is_skill_topic("Docker"));
        assert!(is_skill_topic("js"));
        assert!(!is_skill_topic("my-random-blog-post"));
        assert!(!is_skill_topic("hello-world"));
        assert!(!is_skill_topic(""));
        assert!(!is_skill_topic("   "));
    }

    #[test]
    fn test_short_keywords_are_generous() {
        // "go" is a substring of "mongoose"; kept as-is.
        assert!(is_skill_topic("mongoose"));
        assert!(is_skill_topic("algorithms"));
    }

    #[test]
    fn test_format_single_words() {
        assert_eq!(format_skill_label("nextjs"), "Next.js");
        assert_eq!(format_skill_label("nodejs"), "Node.js");
        assert_eq!(format_skill_label("reactjs"), "React");
        assert_eq!(format_skill_label("api"), "API");
        assert_eq!(format_skill_label("docker"), "Docker");
    }

    #[test]
    fn test_format_multi_word() {
        assert_eq!(format_skill_label("ci-cd"), "CI/CD");
        assert_eq!(format_skill_label("react_native"), "React Native");
        assert_eq!(format_skill_label("rest-api"), "Rest API");
        assert_eq!(format_skill_label("tailwind-css"), "Tailwind CSS");
        assert_eq!(format_skill_label("github-actions"), "GitHub Actions");
    }

    #[test]
    fn test_derive_skill_set() {
        let repos = vec![
            repo(Some("TypeScript"), &["react", "hello-world", "nextjs"]),
            repo(Some("TypeScript"), &["react"]),
            repo(None, &["docker", "ci-cd"]),
        ];

        let skills = derive_skill_set(&repos);
        let expected: BTreeSet<String> = ["TypeScript", "React", "Next.js", "Docker", "CI/CD"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(skills, expected);
    }

    #[test]
    fn test_derive_skill_set_empty() {
        assert!(derive_skill_set(&[]).is_empty());
    }
}
