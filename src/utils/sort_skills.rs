use crate::models::{SkillEvidence, SkillSet};
use crate::types::CanonicalSkillId;

/// Ranks the skills of a `SkillSet` for presentation.
///
/// ### Sorting Order:
/// - **Primary:** Confidence, descending.
/// - **Secondary:** Frequency (number of evidence spans), descending.
/// - **Tertiary:** Canonical id, ascending, for deterministic ordering.
///
/// ### Example:
/// ```rust
/// use skill_sniffer::{sort_skills, SkillOntology, DEFAULT_SKILL_EXTRACTOR_CONFIG};
/// use skill_sniffer::models::SkillExtractor;
///
/// let ontology = SkillOntology::embedded().unwrap();
/// let extractor = SkillExtractor::new(&ontology, &DEFAULT_SKILL_EXTRACTOR_CONFIG).unwrap();
/// let skill_set = extractor.extract_text(
///     "resume",
///     "Built machine learning services in Python, with python tests and SQL",
/// );
///
/// let ranked: Vec<&str> = sort_skills(&skill_set)
///     .into_iter()
///     .map(|(canonical_id, _)| canonical_id.as_str())
///     .collect();
///
/// assert_eq!(ranked, vec!["machine_learning", "python", "sql"]);
/// ```
pub fn sort_skills(skill_set: &SkillSet) -> Vec<(&CanonicalSkillId, &SkillEvidence)> {
    let mut sorted_skills: Vec<(&CanonicalSkillId, &SkillEvidence)> =
        skill_set.skills.iter().collect();

    sorted_skills.sort_by(|a, b| {
        b.1.confidence
            .partial_cmp(&a.1.confidence)
            .unwrap_or(std::cmp::Ordering::Equal) // Handle NaN gracefully
            .then_with(|| b.1.frequency().cmp(&a.1.frequency()))
            .then_with(|| a.0.cmp(b.0))
    });

    sorted_skills
}
