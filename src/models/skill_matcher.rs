use crate::config::{
    MULTI_WORD_MATCH_CONFIDENCE, NAMED_ENTITY_CONFIDENCE_BONUS, SINGLE_TOKEN_MATCH_CONFIDENCE,
};
use crate::models::{CandidateTerm, SkillCategory, SkillExtractorConfig, SkillOntology, TermRole};
use crate::types::{CanonicalSkillId, Confidence, TokenSpan};
use log::debug;
use std::cmp::Reverse;

/// A candidate term accepted as evidence for a canonical skill.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillMatch {
    pub canonical_id: CanonicalSkillId,
    pub category: SkillCategory,
    pub candidate_term: CandidateTerm,

    /// Zero for negated matches.
    pub confidence: Confidence,
}

impl SkillMatch {
    pub fn span(&self) -> TokenSpan {
        self.candidate_term.span
    }

    pub fn is_negated(&self) -> bool {
        self.candidate_term.negated
    }
}

/// Resolves candidate terms to canonical skills.
///
/// Candidates are visited longest first, then left to right. An accepted
/// match consumes every token position in its span, and any later candidate
/// overlapping a consumed position is skipped, so each token supports at most
/// one skill and the longest phrase always wins.
#[derive(Debug, Clone)]
pub struct SkillMatcher {
    min_unambiguous_alias_length: usize,
}

impl SkillMatcher {
    pub fn new(config: &SkillExtractorConfig) -> Self {
        Self {
            min_unambiguous_alias_length: config.min_unambiguous_alias_length,
        }
    }

    /// Matches the candidates against the ontology.
    ///
    /// Returned matches are ordered by span. Negated matches are kept, with a
    /// confidence of zero.
    pub fn match_candidates<I>(&self, candidates: I, ontology: &SkillOntology) -> Vec<SkillMatch>
    where
        I: IntoIterator<Item = CandidateTerm>,
    {
        let mut candidates: Vec<CandidateTerm> = candidates.into_iter().collect();
        candidates.sort_by_key(|candidate| (Reverse(candidate.span.len()), candidate.span.start));

        let token_count = candidates
            .iter()
            .map(|candidate| candidate.span.end)
            .max()
            .unwrap_or(0);
        let mut consumed = vec![false; token_count];
        let mut matches = Vec::new();

        for candidate in candidates {
            if candidate.span.indices().any(|token_index| consumed[token_index]) {
                continue;
            }

            let Some(entry) = ontology.lookup_entry(&candidate.text) else {
                continue;
            };

            if !self.is_unambiguous(&candidate) {
                debug!(
                    "Skipping ambiguous short match {:?} for {}",
                    candidate.cased_text, entry.canonical_id
                );
                continue;
            }

            for token_index in candidate.span.indices() {
                consumed[token_index] = true;
            }

            let confidence = Self::compute_confidence(&candidate);

            debug!(
                "Matched {:?} at {:?} to {} (confidence {:.2}, negated: {})",
                candidate.text, candidate.span, entry.canonical_id, confidence, candidate.negated
            );

            matches.push(SkillMatch {
                canonical_id: entry.canonical_id.clone(),
                category: entry.category,
                candidate_term: candidate,
                confidence,
            });
        }

        matches.sort_by_key(|skill_match| skill_match.span());

        matches
    }

    /// Single-token aliases shorter than `min_unambiguous_alias_length`
    /// (e.g. "r", "c") only count when written with a capital letter.
    fn is_unambiguous(&self, candidate: &CandidateTerm) -> bool {
        candidate.span.len() > 1
            || candidate.text.chars().count() >= self.min_unambiguous_alias_length
            || candidate.cased_text.chars().any(|c| c.is_uppercase())
    }

    fn compute_confidence(candidate: &CandidateTerm) -> Confidence {
        if candidate.negated {
            return 0.0;
        }

        let mut confidence = if candidate.span.len() > 1 {
            MULTI_WORD_MATCH_CONFIDENCE
        } else {
            SINGLE_TOKEN_MATCH_CONFIDENCE
        };

        if candidate.role == TermRole::NamedEntity {
            confidence += NAMED_ENTITY_CONFIDENCE_BONUS;
        }

        confidence.min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CandidateTermExtractor;
    use crate::DEFAULT_SKILL_EXTRACTOR_CONFIG;

    fn test_ontology() -> SkillOntology {
        SkillOntology::new(&vec![
            (
                "machine_learning".to_string(),
                None,
                SkillCategory::MachineLearning,
                vec!["ml".to_string()],
            ),
            (
                "learning".to_string(),
                None,
                SkillCategory::SoftSkills,
                vec![],
            ),
            (
                "python".to_string(),
                None,
                SkillCategory::ProgrammingLanguages,
                vec![],
            ),
            (
                "r".to_string(),
                Some("R".to_string()),
                SkillCategory::ProgrammingLanguages,
                vec![],
            ),
            (
                "aws".to_string(),
                Some("AWS".to_string()),
                SkillCategory::CloudDevops,
                vec!["amazon web services".to_string()],
            ),
        ])
        .unwrap()
    }

    fn match_text(text: &str) -> Vec<SkillMatch> {
        let ontology = test_ontology();
        let normalized = ontology.normalizer().normalize(text);
        let extractor = CandidateTermExtractor::new(&DEFAULT_SKILL_EXTRACTOR_CONFIG);

        SkillMatcher::new(&DEFAULT_SKILL_EXTRACTOR_CONFIG)
            .match_candidates(extractor.extract(&normalized), &ontology)
    }

    #[test]
    fn test_longest_match_wins() {
        let matches = match_text("machine learning");

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].canonical_id, "machine_learning");
        assert_eq!(matches[0].span(), TokenSpan::new(0, 2));
        assert_eq!(matches[0].confidence, MULTI_WORD_MATCH_CONFIDENCE);
    }

    #[test]
    fn test_unconsumed_tokens_still_match() {
        let matches = match_text("machine learning and continuous learning");

        let ids: Vec<&str> = matches
            .iter()
            .map(|skill_match| skill_match.canonical_id.as_str())
            .collect();
        assert_eq!(ids, vec!["machine_learning", "learning"]);
        assert_eq!(matches[1].confidence, SINGLE_TOKEN_MATCH_CONFIDENCE);
    }

    #[test]
    fn test_negated_match_is_kept_with_zero_confidence() {
        let matches = match_text("no experience with python");

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].canonical_id, "python");
        assert!(matches[0].is_negated());
        assert_eq!(matches[0].confidence, 0.0);
    }

    #[test]
    fn test_short_alias_requires_capital() {
        assert!(match_text("plot r values").is_empty());

        let matches = match_text("statistics in R");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].canonical_id, "r");
    }

    #[test]
    fn test_named_entity_bonus_is_capped() {
        let matches = match_text("we deploy to Amazon Web Services and use Python");

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].canonical_id, "aws");
        assert_eq!(matches[0].confidence, 1.0);
        assert_eq!(matches[1].canonical_id, "python");
        assert_eq!(
            matches[1].confidence,
            SINGLE_TOKEN_MATCH_CONFIDENCE + NAMED_ENTITY_CONFIDENCE_BONUS
        );
    }

    #[test]
    fn test_no_candidates() {
        let ontology = test_ontology();
        let matcher = SkillMatcher::new(&DEFAULT_SKILL_EXTRACTOR_CONFIG);

        assert!(matcher.match_candidates(Vec::new(), &ontology).is_empty());
    }
}
