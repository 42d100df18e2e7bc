use skill_sniffer::{
    CanonicalSkillId, Error as LibError, SkillExtractor, SkillExtractorConfig, SkillOntology,
    SkillSet,
};
use std::{fs, path::Path};
pub mod constants;
use constants::{COMMENT_PREFIX, EXPECTED_PREFIX};

// Helper function to get the expected skills from the text file
pub fn get_expected_skills(file_path: &Path) -> Vec<CanonicalSkillId> {
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    content
        .lines()
        .filter_map(|line| {
            line.trim()
                .strip_prefix(EXPECTED_PREFIX)
                .map(|canonical_id| canonical_id.trim().to_string())
        })
        .collect()
}

// Helper function to remove the `EXPECTED:` and `COMMENT:` lines from a fixture
pub fn strip_fixture_lines(raw_text: &str) -> String {
    raw_text
        .lines()
        .filter(|line| {
            !line.trim_start().starts_with(EXPECTED_PREFIX)
                && !line.trim_start().starts_with(COMMENT_PREFIX)
        })
        .collect::<Vec<&str>>()
        .join("\n")
}

/// Extracts the skills of a fixture file and asserts they are exactly the
/// expected ones.
///
/// Returns the extracted skill set along with the missing and unexpected ids.
pub fn run_test_for_file(
    test_file_path: &Path,
    ontology: &SkillOntology,
    skill_extractor_config: &SkillExtractorConfig,
) -> Result<(SkillSet, Vec<CanonicalSkillId>, Vec<CanonicalSkillId>), LibError> {
    let raw_text = fs::read_to_string(test_file_path)?;
    let filtered_text = strip_fixture_lines(&raw_text);

    let skill_extractor = SkillExtractor::new(ontology, skill_extractor_config)?;
    let document_id = test_file_path.to_string_lossy();
    let skill_set = skill_extractor.extract_text(&document_id, &filtered_text);

    let expected_skills = get_expected_skills(test_file_path);
    let actual_skills = skill_set.canonical_ids();

    let unexpected_skills: Vec<CanonicalSkillId> = actual_skills
        .iter()
        .filter(|canonical_id| !expected_skills.contains(canonical_id))
        .cloned()
        .collect();

    let missing_skills: Vec<CanonicalSkillId> = expected_skills
        .iter()
        .filter(|canonical_id| !actual_skills.contains(*canonical_id))
        .cloned()
        .collect();

    assert!(
        missing_skills.is_empty() && unexpected_skills.is_empty(),
        "{} - Missing: {:?}, Unexpected: {:?}",
        test_file_path.display(),
        missing_skills,
        unexpected_skills
    );

    Ok((skill_set, missing_skills, unexpected_skills))
}
