// Skill categories.
// Groups an inferred skill set into the six sections shown on the page.

use std::collections::BTreeSet;

use serde::Serialize;

/// Display section for a skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SkillCategory {
    Languages,
    Frontend,
    Backend,
    Database,
    DevOps,
    Tools,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 6] = [
        SkillCategory::Languages,
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Database,
        SkillCategory::DevOps,
        SkillCategory::Tools,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            SkillCategory::Languages => "Languages",
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Database => "Database",
            SkillCategory::DevOps => "DevOps",
            SkillCategory::Tools => "Tools",
        }
    }

    /// Labels that count toward this category, in display order.
    fn candidates(&self) -> &'static [&'static str] {
        match self {
            SkillCategory::Languages => &[
                "JavaScript", "TypeScript", "Python", "Java", "C++", "PHP", "Ruby", "Swift",
                "Go", "Rust", "C#", "Kotlin",
            ],
            SkillCategory::Frontend => &[
                "React", "Vue", "Angular", "Next.js", "Svelte", "HTML", "CSS", "SASS", "LESS",
                "Tailwind CSS", "Bootstrap", "Material UI",
            ],
            SkillCategory::Backend => &[
                "Node.js", "Express", "Django", "Flask", "Spring Boot", "ASP.NET", "Laravel",
                "Ruby on Rails", "GraphQL", "REST API",
            ],
            SkillCategory::Database => &[
                "MongoDB", "PostgreSQL", "MySQL", "SQLite", "Redis", "Firebase", "DynamoDB",
                "Oracle", "Cassandra",
            ],
            SkillCategory::DevOps => &[
                "Docker", "Kubernetes", "AWS", "GCP", "Azure", "CI/CD", "Jenkins",
                "GitHub Actions", "GitLab CI", "Terraform",
            ],
            SkillCategory::Tools => &[
                "VSCode", "Git", "Webpack", "Vite", "Babel", "Jest", "Mocha", "Chai", "Cypress",
                "Selenium", "Figma", "Photoshop",
            ],
        }
    }

    /// Labels shown when nothing in the skill set matches.
    fn fallback(&self) -> &'static [&'static str] {
        match self {
            SkillCategory::Languages => {
                &["JavaScript", "TypeScript", "Python", "Java", "C++", "PHP"]
            }
            SkillCategory::Frontend => &[
                "React", "Vue", "Angular", "Next.js", "HTML", "CSS", "SASS", "Tailwind CSS",
            ],
            SkillCategory::Backend => {
                &["Node.js", "Express", "Django", "Flask", "Spring Boot", "ASP.NET"]
            }
            SkillCategory::Database => &["MongoDB", "PostgreSQL", "MySQL", "Redis", "Firebase"],
            SkillCategory::DevOps => &["Docker", "Kubernetes", "AWS", "GCP", "CI/CD", "Git"],
            SkillCategory::Tools => {
                &["VSCode", "Webpack", "Vite", "Jest", "Testing Library", "Figma"]
            }
        }
    }
}

/// One display section with its skills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillGroup {
    pub category: SkillCategory,
    pub skills: Vec<String>,
    /// True when `skills` came from the fixed list rather than repositories.
    pub fallback: bool,
}

/// Sort a skill set into the six categories. A category with no match
/// falls back to its fixed list.
pub fn categorize_skills(skills: &BTreeSet<String>) -> Vec<SkillGroup> {
    SkillCategory::ALL
        .iter()
        .map(|category| {
            let matched: Vec<String> = category
                .candidates()
                .iter()
                .filter(|candidate| skills.contains(**candidate))
                .map(|candidate| candidate.to_string())
                .collect();

            if matched.is_empty() {
                fallback_group(*category)
            } else {
                SkillGroup {
                    category: *category,
                    skills: matched,
                    fallback: false,
                }
            }
        })
        .collect()
}

/// All six categories with their fixed lists.
pub fn fallback_skill_groups() -> Vec<SkillGroup> {
    SkillCategory::ALL.iter().copied().map(fallback_group).collect()
}

fn fallback_group(category: SkillCategory) -> SkillGroup {
    SkillGroup {
        category,
        skills: category.fallback().iter().map(|s| s.to_string()).collect(),
        fallback: true,
    }
}
