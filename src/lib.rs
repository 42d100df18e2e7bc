#[cfg(doctest)]
doc_comment::doctest!("../README.md");

mod config;
pub use config::DEFAULT_SKILL_EXTRACTOR_CONFIG;
mod constants;
pub use constants::{EMBEDDED_SKILL_ONTOLOGY_CSV, STOP_WORDS};
pub mod models;
pub use models::{
    CandidateTerm, CandidateTermExtractor, CapitalizationRoleTagger, Document, DocumentRole,
    Error, MatchResult, NormalizedText, OverlapScorer, RoleTagger, SkillCategory, SkillExtractor,
    SkillExtractorConfig, SkillMatch, SkillMatcher, SkillOntology, SkillSet, SkillSetBuilder,
    TermRole, TextNormalizer,
};
pub mod types;
mod utils;
pub use types::{
    CanonicalSkillId, Confidence, DocumentId, SkillAlias, SkillDefinitionList, SkillDisplayName,
    SkillFrequency, Token, TokenIndex, TokenRef, TokenSpan,
};
pub use utils::{
    format_skill_name, lemmatize, parse_stop_words, read_skill_definitions,
    read_skill_definitions_from_path, sort_skills,
};

/// Extracts the skills of a text using the default configuration.
///
/// The returned set has an empty document id.
pub fn extract_skills_from_text(text: &str, ontology: &SkillOntology) -> Result<SkillSet, Error> {
    let skill_set =
        extract_skills_from_text_with_custom_config(&DEFAULT_SKILL_EXTRACTOR_CONFIG, text, ontology)?;

    Ok(skill_set)
}

pub fn extract_skills_from_text_with_custom_config(
    skill_extractor_config: &SkillExtractorConfig,
    text: &str,
    ontology: &SkillOntology,
) -> Result<SkillSet, Error> {
    let skill_extractor = SkillExtractor::new(ontology, skill_extractor_config)?;

    Ok(skill_extractor.extract_text("", text))
}

/// Extracts the skills of a resume and a job description and scores the
/// resume against the job.
///
/// Returns the resume skill set, the job skill set and the match result.
pub fn extract_and_compare(
    resume_text: &str,
    job_text: &str,
    ontology: &SkillOntology,
) -> Result<(SkillSet, SkillSet, MatchResult), Error> {
    let skill_extractor = SkillExtractor::new(ontology, &DEFAULT_SKILL_EXTRACTOR_CONFIG)?;

    Ok(skill_extractor.compare_texts(resume_text, job_text))
}
