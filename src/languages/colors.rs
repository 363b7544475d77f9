// Language display colors.
// Matches the swatches GitHub shows next to repository languages.

/// Color for languages missing from the table.
pub const DEFAULT_COLOR: &str = "#858585";

const COLORS: &[(&str, &str)] = &[
    ("JavaScript", "#f1e05a"),
    ("TypeScript", "#3178c6"),
    ("HTML", "#e34c26"),
    ("CSS", "#563d7c"),
    ("Python", "#3572A5"),
    ("Java", "#b07219"),
    ("PHP", "#4F5D95"),
    ("Ruby", "#701516"),
    ("Go", "#00ADD8"),
    ("C", "#555555"),
    ("C++", "#f34b7d"),
    ("C#", "#178600"),
    ("Swift", "#ffac45"),
    ("Kotlin", "#A97BFF"),
    ("Rust", "#dea584"),
    ("Dart", "#00B4AB"),
];

/// Look up the display color for a language name (exact, case-sensitive).
pub fn language_color(language: &str) -> &'static str {
    COLORS
        .iter()
        .find(|(name, _)| *name == language)
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_languages() {
        assert_eq!(language_color("Rust"), "#dea584");
        assert_eq!(language_color("C++"), "#f34b7d");
        assert_eq!(language_color("C#"), "#178600");
    }

    #[test]
    fn test_unknown_language_is_gray() {
        assert_eq!(language_color("Brainfuck"), DEFAULT_COLOR);
        assert_eq!(language_color("rust"), DEFAULT_COLOR);
    }
}
