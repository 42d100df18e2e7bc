use crate::Error;
use std::fmt;
use std::str::FromStr;

/// Coarse grouping of skills, used for the per-category overlap breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum SkillCategory {
    ProgrammingLanguages,
    FrameworksLibraries,
    Databases,
    CloudDevops,
    SoftwareTools,
    Methodologies,
    MachineLearning,
    SoftSkills,
    Other,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 9] = [
        SkillCategory::ProgrammingLanguages,
        SkillCategory::FrameworksLibraries,
        SkillCategory::Databases,
        SkillCategory::CloudDevops,
        SkillCategory::SoftwareTools,
        SkillCategory::Methodologies,
        SkillCategory::MachineLearning,
        SkillCategory::SoftSkills,
        SkillCategory::Other,
    ];

    /// The snake_case name used in ontology resources.
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::ProgrammingLanguages => "programming_languages",
            SkillCategory::FrameworksLibraries => "frameworks_libraries",
            SkillCategory::Databases => "databases",
            SkillCategory::CloudDevops => "cloud_devops",
            SkillCategory::SoftwareTools => "software_tools",
            SkillCategory::Methodologies => "methodologies",
            SkillCategory::MachineLearning => "machine_learning",
            SkillCategory::SoftSkills => "soft_skills",
            SkillCategory::Other => "other",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillCategory {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_lowercase().replace([' ', '-'], "_");

        SkillCategory::ALL
            .iter()
            .find(|category| category.as_str() == normalized)
            .copied()
            .ok_or_else(|| {
                Error::ConfigurationError(format!("Unknown skill category: {:?}", value))
            })
    }
}
