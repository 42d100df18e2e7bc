use crate::models::{
    CandidateTermExtractor, CapitalizationRoleTagger, Document, DocumentRole, MatchResult,
    NormalizedText, OverlapScorer, RoleTagger, SkillExtractorConfig, SkillMatch, SkillMatcher,
    SkillOntology, SkillSet, SkillSetBuilder,
};
use crate::Error;
use log::{debug, warn};

/// Runs the full pipeline for documents matched against one ontology:
/// normalization, candidate extraction, matching and aggregation.
///
/// Holds no per-document state, so a single extractor may be shared across
/// threads and reused for any number of documents.
pub struct SkillExtractor<'a, T: RoleTagger = CapitalizationRoleTagger> {
    ontology: &'a SkillOntology,
    candidate_extractor: CandidateTermExtractor<T>,
    matcher: SkillMatcher,
}

impl<'a> SkillExtractor<'a, CapitalizationRoleTagger> {
    /// # Errors
    /// Returns `Error::ConfigurationError` if `max_phrase_length` is zero.
    pub fn new(ontology: &'a SkillOntology, config: &SkillExtractorConfig) -> Result<Self, Error> {
        Self::with_tagger(ontology, config, CapitalizationRoleTagger)
    }
}

impl<'a, T: RoleTagger> SkillExtractor<'a, T> {
    /// Creates an extractor which uses a custom role-tagging backend.
    pub fn with_tagger(
        ontology: &'a SkillOntology,
        config: &SkillExtractorConfig,
        tagger: T,
    ) -> Result<Self, Error> {
        if config.max_phrase_length == 0 {
            return Err(Error::ConfigurationError(
                "max_phrase_length must be at least 1".to_string(),
            ));
        }

        if ontology.longest_alias_length() > config.max_phrase_length {
            warn!(
                "Ontology has aliases of {} tokens, but max_phrase_length is {}; longer aliases will never match",
                ontology.longest_alias_length(),
                config.max_phrase_length
            );
        }

        Ok(Self {
            ontology,
            candidate_extractor: CandidateTermExtractor::with_tagger(config, tagger),
            matcher: SkillMatcher::new(config),
        })
    }

    pub fn ontology(&self) -> &SkillOntology {
        self.ontology
    }

    /// Normalizes text with the ontology's own normalizer.
    pub fn normalize(&self, text: &str) -> NormalizedText {
        self.ontology.normalizer().normalize(text)
    }

    /// Returns every accepted match in the text, including negated ones.
    pub fn extract_matches(&self, text: &str) -> Vec<SkillMatch> {
        let normalized = self.normalize(text);
        let candidates = self.candidate_extractor.extract(&normalized);

        self.matcher.match_candidates(candidates, self.ontology)
    }

    /// Extracts the skill set of a plain text.
    pub fn extract_text(&self, document_id: &str, text: &str) -> SkillSet {
        let matches = self.extract_matches(text);

        debug!("Document {:?} produced {} matches", document_id, matches.len());

        SkillSetBuilder::build(document_id, matches)
    }

    /// Extracts the skill set of a document.
    pub fn extract(&self, document: &Document) -> SkillSet {
        self.extract_text(&document.id, &document.raw_text)
    }

    /// Extracts and scores both documents.
    ///
    /// # Errors
    /// Returns `Error::DocumentRoleMismatch` unless `resume` has the resume
    /// role and `job` the job role.
    pub fn match_documents(&self, resume: &Document, job: &Document) -> Result<MatchResult, Error> {
        Self::expect_role(resume, DocumentRole::Resume)?;
        Self::expect_role(job, DocumentRole::Job)?;

        let resume_set = self.extract(resume);
        let job_set = self.extract(job);

        Ok(OverlapScorer::score(&resume_set, &job_set))
    }

    /// Extracts both texts and scores the resume against the job, returning
    /// the two skill sets alongside the result.
    pub fn compare_texts(
        &self,
        resume_text: &str,
        job_text: &str,
    ) -> (SkillSet, SkillSet, MatchResult) {
        let resume_set = self.extract_text("resume", resume_text);
        let job_set = self.extract_text("job", job_text);
        let match_result = OverlapScorer::score(&resume_set, &job_set);

        (resume_set, job_set, match_result)
    }

    fn expect_role(document: &Document, expected_role: DocumentRole) -> Result<(), Error> {
        if document.role == expected_role {
            Ok(())
        } else {
            Err(Error::DocumentRoleMismatch(format!(
                "Document {:?} has role {}, expected {}",
                document.id, document.role, expected_role
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NormalizedText, TermRole};
    use crate::types::TokenSpan;
    use crate::DEFAULT_SKILL_EXTRACTOR_CONFIG;

    #[test]
    fn test_zero_phrase_length_is_rejected() {
        let ontology = SkillOntology::embedded().unwrap();
        let config = SkillExtractorConfig {
            max_phrase_length: 0,
            ..DEFAULT_SKILL_EXTRACTOR_CONFIG
        };

        assert!(matches!(
            SkillExtractor::new(&ontology, &config),
            Err(Error::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_aliases_collapse_into_one_skill() {
        let ontology = SkillOntology::embedded().unwrap();
        let extractor = SkillExtractor::new(&ontology, &DEFAULT_SKILL_EXTRACTOR_CONFIG).unwrap();

        let skill_set = extractor.extract_text("resume", "Wrote JavaScript daily, plus some js tooling");

        assert_eq!(skill_set.len(), 1);
        assert_eq!(skill_set.get("javascript").unwrap().frequency(), 2);
    }

    #[test]
    fn test_document_roles_are_checked() {
        let ontology = SkillOntology::embedded().unwrap();
        let extractor = SkillExtractor::new(&ontology, &DEFAULT_SKILL_EXTRACTOR_CONFIG).unwrap();

        let resume = Document::resume("r-1", "Python and SQL");
        let job = Document::job("j-1", "Python and Java");

        let result = extractor.match_documents(&resume, &job).unwrap();
        assert_eq!(result.resume_id, "r-1");
        assert_eq!(result.job_id, "j-1");
        assert_eq!(result.score, 0.5);

        assert!(matches!(
            extractor.match_documents(&job, &resume),
            Err(Error::DocumentRoleMismatch(_))
        ));
    }

    struct NoEntityTagger;

    impl RoleTagger for NoEntityTagger {
        fn tag_roles(&self, text: &NormalizedText) -> Vec<TermRole> {
            vec![TermRole::NounPhrase; text.len()]
        }

        fn detect_entities(&self, _text: &NormalizedText) -> Vec<TokenSpan> {
            Vec::new()
        }
    }

    #[test]
    fn test_custom_tagger() {
        let ontology = SkillOntology::embedded().unwrap();
        let extractor =
            SkillExtractor::with_tagger(&ontology, &DEFAULT_SKILL_EXTRACTOR_CONFIG, NoEntityTagger)
                .unwrap();

        let skill_set = extractor.extract_text("resume", "Shipped services on Kubernetes");

        assert_eq!(skill_set.get("kubernetes").unwrap().confidence, 0.85);
    }
}
