use crate::types::SkillDisplayName;

/// Names whose conventional spelling cannot be derived by capitalizing words.
const SPECIAL_DISPLAY_NAMES: &[(&str, &str)] = &[
    ("asp.net", "ASP.NET"),
    ("c#", "C#"),
    ("c++", "C++"),
    ("ci/cd", "CI/CD"),
    ("javascript", "JavaScript"),
    ("node.js", "Node.js"),
    ("python", "Python"),
    ("typescript", "TypeScript"),
];

/// Derives a presentation name for a skill which was defined without one.
///
/// Underscores are treated as word separators, so canonical ids such as
/// `machine_learning` render as "Machine Learning".
///
/// # Example
/// ```rust
/// use skill_sniffer::format_skill_name;
///
/// assert_eq!(format_skill_name("machine_learning"), "Machine Learning");
/// assert_eq!(format_skill_name("c++"), "C++");
/// ```
pub fn format_skill_name(skill: &str) -> SkillDisplayName {
    let lowercased = skill.trim().to_lowercase();

    if let Some((_, name)) = SPECIAL_DISPLAY_NAMES
        .iter()
        .find(|(pattern, _)| *pattern == lowercased)
    {
        return name.to_string();
    }

    lowercased
        .split(|c: char| c.is_whitespace() || c == '_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
