use crate::constants::{NEGATION_CUES, NEGATION_SCOPE_TERMINATORS};
use crate::models::{CapitalizationRoleTagger, NormalizedText, RoleTagger, SkillExtractorConfig};
use crate::types::{TokenIndex, TokenSpan};
use log::debug;

/// Coarse grammatical role of a candidate term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TermRole {
    /// A multi-token span, or a single content word.
    NounPhrase,
    /// A proper-noun-like span, such as a product or technology name.
    NamedEntity,
    /// A function word which survived stop-word removal.
    Unclassified,
}

/// A token or token span considered for skill matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateTerm {
    pub span: TokenSpan,

    /// Lemma-joined text of the span, in ontology lookup form.
    pub text: String,

    /// Original-case text of the span, space-joined.
    pub cased_text: String,

    pub role: TermRole,

    /// Whether a negation cue precedes the span within the negation window.
    pub negated: bool,
}

/// Produces candidate terms from a normalized document.
///
/// Candidates are emitted left to right by start position; for each start,
/// longer windows come before shorter ones. Multi-word windows are taken from
/// the full token stream (stop words included) and never cross a sentence
/// boundary, while single-token candidates only come from retained tokens.
pub struct CandidateTermExtractor<T: RoleTagger = CapitalizationRoleTagger> {
    tagger: T,
    max_phrase_length: usize,
    negation_window: usize,
}

impl CandidateTermExtractor<CapitalizationRoleTagger> {
    pub fn new(config: &SkillExtractorConfig) -> Self {
        Self::with_tagger(config, CapitalizationRoleTagger)
    }
}

impl<T: RoleTagger> CandidateTermExtractor<T> {
    pub fn with_tagger(config: &SkillExtractorConfig, tagger: T) -> Self {
        Self {
            tagger,
            max_phrase_length: config.max_phrase_length,
            negation_window: config.negation_window,
        }
    }

    /// Returns a lazy, finite sequence of candidate terms for the text.
    ///
    /// The sequence is recomputed on every call; identical input always
    /// yields an identical sequence.
    pub fn extract<'a>(&self, normalized: &'a NormalizedText) -> CandidateTerms<'a> {
        let roles = self.tagger.tag_roles(normalized);
        let entities = self.tagger.detect_entities(normalized);
        let negation_scope = self.collect_negation_scope(normalized);

        debug!(
            "Extracting candidates from {} tokens ({} entity spans)",
            normalized.len(),
            entities.len()
        );

        CandidateTerms {
            normalized,
            roles,
            entities,
            negation_scope,
            max_phrase_length: self.max_phrase_length,
            start: 0,
            length: self.max_phrase_length.min(normalized.len()),
        }
    }

    /// Marks every token position which lies within the scope of a negation cue.
    ///
    /// A position is in scope when a cue's last token precedes it by at most
    /// `negation_window` tokens, in the same sentence, with no scope terminator
    /// in between.
    fn collect_negation_scope(&self, normalized: &NormalizedText) -> Vec<bool> {
        let token_count = normalized.len();
        let mut negation_scope = vec![false; token_count];

        for cue_start in 0..token_count {
            for cue in NEGATION_CUES {
                let cue_span = TokenSpan::new(cue_start, cue_start + cue.len());

                if cue_span.end > token_count || !normalized.is_single_sentence(cue_span) {
                    continue;
                }

                let is_cue = cue_span.indices().zip(cue.iter()).all(|(token_index, word)| {
                    normalized.tokens[token_index].surface_form == *word
                });

                if !is_cue {
                    continue;
                }

                let cue_last: TokenIndex = cue_span.end - 1;
                let cue_sentence = normalized.tokens[cue_last].sentence_index;
                let scope_end = cue_last
                    .saturating_add(self.negation_window)
                    .min(token_count - 1);

                for token_index in cue_span.end..=scope_end {
                    let token = &normalized.tokens[token_index];

                    if token.sentence_index != cue_sentence
                        || NEGATION_SCOPE_TERMINATORS.contains(&token.surface_form.as_str())
                    {
                        break;
                    }

                    negation_scope[token_index] = true;
                }
            }
        }

        negation_scope
    }
}

/// Lazy iterator over the candidate terms of one document.
pub struct CandidateTerms<'a> {
    normalized: &'a NormalizedText,
    roles: Vec<TermRole>,
    entities: Vec<TokenSpan>,
    negation_scope: Vec<bool>,
    max_phrase_length: usize,
    start: TokenIndex,
    length: usize,
}

impl<'a> CandidateTerms<'a> {
    fn build_candidate(&self, span: TokenSpan) -> Option<CandidateTerm> {
        if span.len() == 1 {
            // Single-word matching uses the post-stop-word-removal stream
            if self.normalized.tokens[span.start].is_stopword {
                return None;
            }
        } else if !self.normalized.is_single_sentence(span) {
            return None;
        }

        let is_entity = self
            .entities
            .iter()
            .any(|entity| entity.start <= span.start && span.end <= entity.end);

        let role = if is_entity {
            TermRole::NamedEntity
        } else if span.len() > 1 {
            TermRole::NounPhrase
        } else {
            self.roles
                .get(span.start)
                .copied()
                .unwrap_or(TermRole::Unclassified)
        };

        let cased_text = span
            .indices()
            .filter_map(|token_index| self.normalized.cased_form(token_index))
            .collect::<Vec<_>>()
            .join(" ");

        Some(CandidateTerm {
            span,
            text: self.normalized.phrase_text(span),
            cased_text,
            role,
            negated: self.negation_scope[span.start],
        })
    }
}

impl<'a> Iterator for CandidateTerms<'a> {
    type Item = CandidateTerm;

    fn next(&mut self) -> Option<Self::Item> {
        let token_count = self.normalized.len();

        while self.start < token_count {
            if self.length == 0 {
                self.start += 1;
                // Windows never run past the last token
                self.length = self
                    .max_phrase_length
                    .min(token_count.saturating_sub(self.start));
                continue;
            }

            let span = TokenSpan::new(self.start, self.start + self.length);
            self.length -= 1;

            if span.end > token_count {
                continue;
            }

            if let Some(candidate) = self.build_candidate(span) {
                return Some(candidate);
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TextNormalizer, DEFAULT_SKILL_EXTRACTOR_CONFIG};

    fn candidate_texts(text: &str, max_phrase_length: usize) -> Vec<String> {
        let config = SkillExtractorConfig {
            max_phrase_length,
            ..DEFAULT_SKILL_EXTRACTOR_CONFIG
        };
        let normalized = TextNormalizer::default().normalize(text);

        CandidateTermExtractor::new(&config)
            .extract(&normalized)
            .map(|candidate| candidate.text)
            .collect()
    }

    #[test]
    fn test_longer_windows_first_for_each_start() {
        let texts = candidate_texts("machine learning models", 2);

        assert_eq!(
            texts,
            vec!["machine learning", "machine", "learning model", "learning", "model"]
        );
    }

    #[test]
    fn test_window_length_is_bounded_by_the_text() {
        let texts = candidate_texts("machine learning models", usize::MAX);

        assert_eq!(texts, candidate_texts("machine learning models", 3));
        assert_eq!(texts.len(), 6);
    }

    #[test]
    fn test_stop_words_only_inside_phrases() {
        let texts = candidate_texts("ruby on rails", 3);

        assert_eq!(
            texts,
            vec!["ruby on rails", "ruby on", "ruby", "on rails", "rails"]
        );
    }

    #[test]
    fn test_phrases_do_not_cross_sentences() {
        let texts = candidate_texts("Java. Script", 2);

        assert_eq!(texts, vec!["java", "script"]);
    }

    #[test]
    fn test_empty_text_yields_nothing() {
        assert!(candidate_texts("", 4).is_empty());
        // Stop words never stand alone as candidates
        assert_eq!(
            candidate_texts("the and of", 4),
            vec!["the and of", "the and", "and of"]
        );
    }

    #[test]
    fn test_negation_within_window() {
        let normalized =
            TextNormalizer::default().normalize("No experience with Python, strong in Java");
        let extractor = CandidateTermExtractor::new(&DEFAULT_SKILL_EXTRACTOR_CONFIG);

        let negated: Vec<String> = extractor
            .extract(&normalized)
            .filter(|candidate| candidate.span.len() == 1)
            .filter(|candidate| candidate.negated)
            .map(|candidate| candidate.text)
            .collect();

        assert_eq!(negated, vec!["experience", "python"]);
    }

    #[test]
    fn test_negation_stops_at_terminator_and_sentence() {
        let normalized = TextNormalizer::default().normalize("Without Java but Go. Rust");
        let extractor = CandidateTermExtractor::new(&DEFAULT_SKILL_EXTRACTOR_CONFIG);

        let negated: Vec<String> = extractor
            .extract(&normalized)
            .filter(|candidate| candidate.negated)
            .map(|candidate| candidate.text)
            .collect();

        assert_eq!(negated, vec!["java but go", "java but", "java"]);
    }

    #[test]
    fn test_multi_word_cue() {
        let normalized =
            TextNormalizer::default().normalize("Not familiar with Kubernetes at all");
        let extractor = CandidateTermExtractor::new(&DEFAULT_SKILL_EXTRACTOR_CONFIG);

        let kubernetes = extractor
            .extract(&normalized)
            .find(|candidate| candidate.text == "kubernetes")
            .expect("single-token candidate");

        assert!(kubernetes.negated);
        assert_eq!(kubernetes.role, TermRole::NamedEntity);
        assert_eq!(kubernetes.cased_text, "Kubernetes");
    }

    #[test]
    fn test_roles() {
        let normalized = TextNormalizer::default().normalize("we use Amazon Web Services and etc");
        let extractor = CandidateTermExtractor::new(&DEFAULT_SKILL_EXTRACTOR_CONFIG);
        let candidates: Vec<CandidateTerm> = extractor.extract(&normalized).collect();

        let role_of = |text: &str| {
            candidates
                .iter()
                .find(|candidate| candidate.text == text)
                .map(|candidate| candidate.role)
        };

        assert_eq!(role_of("amazon web service"), Some(TermRole::NamedEntity));
        assert_eq!(role_of("use amazon"), Some(TermRole::NounPhrase));
        assert_eq!(role_of("etc"), Some(TermRole::Unclassified));
        assert_eq!(role_of("use"), Some(TermRole::NounPhrase));
    }

    #[test]
    fn test_deterministic() {
        let text = "Senior Rust engineer; no Java. Built CI/CD on AWS.";

        assert_eq!(candidate_texts(text, 4), candidate_texts(text, 4));
    }
}
