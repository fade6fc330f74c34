//! Language colour table.

/// Colour used when a language has no entry in [`LANGUAGE_COLORS`].
pub const FALLBACK_COLOR: &str = "#888888";

/// Dot colours for common languages, matching GitHub's linguist palette.
const LANGUAGE_COLORS: &[(&str, &str)] = &[
    ("C", "#555555"),
    ("C#", "#178600"),
    ("C++", "#f34b7d"),
    ("Dart", "#00B4AB"),
    ("Go", "#00ADD8"),
    ("HTML", "#e34c26"),
    ("Java", "#b07219"),
    ("JavaScript", "#f1e05a"),
    ("Kotlin", "#A97BFF"),
    ("Lua", "#000080"),
    ("PHP", "#4F5D95"),
    ("Python", "#3572A5"),
    ("React", "#61dafb"),
    ("Ruby", "#701516"),
    ("Rust", "#dea584"),
    ("Shell", "#89e051"),
    ("Swift", "#ffac45"),
    ("TypeScript", "#2b7489"),
    ("Vue", "#41b883"),
    ("Zig", "#ec915c"),
];

/// Returns the dot colour for `language`.
#[must_use]
pub fn language_color(language: Option<&str>) -> &'static str {
    language
        .and_then(|language| {
            LANGUAGE_COLORS
                .iter()
                .find(|(name, _)| *name == language)
                .map(|(_, color)| *color)
        })
        .unwrap_or(FALLBACK_COLOR)
}
