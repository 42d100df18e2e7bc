use crate::constants::FUNCTION_WORDS;
use crate::models::{NormalizedText, TermRole};
use crate::types::TokenSpan;

/// Supplies grammatical roles and entity spans for a normalized document.
///
/// The matching logic only depends on this capability, so a learned tagging
/// backend can be substituted for the built-in heuristics.
pub trait RoleTagger {
    /// Returns one role per token, parallel to `text.tokens`.
    fn tag_roles(&self, text: &NormalizedText) -> Vec<TermRole>;

    /// Returns the spans recognized as proper-noun-like sequences
    /// (product and technology names).
    fn detect_entities(&self, text: &NormalizedText) -> Vec<TokenSpan>;
}

/// Heuristic tagger driven by the original-case form of each token.
///
/// Entities are maximal runs of capitalized tokens within a sentence. A
/// sentence-initial token only counts when it carries capitals or digits
/// beyond its first letter (e.g. "PostgreSQL", "AWS"), since ordinary words
/// are capitalized there too.
#[derive(Debug, Clone, Copy, Default)]
pub struct CapitalizationRoleTagger;

impl CapitalizationRoleTagger {
    fn is_entity_like(text: &NormalizedText, token_index: usize) -> bool {
        let (Some(token), Some(cased_form)) =
            (text.get(token_index), text.cased_form(token_index))
        else {
            return false;
        };

        if token.is_stopword || !cased_form.chars().any(|c| c.is_uppercase()) {
            return false;
        }

        let is_sentence_start = token_index == 0
            || text
                .get(token_index - 1)
                .map_or(true, |previous| previous.sentence_index != token.sentence_index);

        if !is_sentence_start {
            return true;
        }

        cased_form
            .chars()
            .skip(1)
            .any(|c| c.is_uppercase() || c.is_ascii_digit())
    }
}

impl RoleTagger for CapitalizationRoleTagger {
    fn tag_roles(&self, text: &NormalizedText) -> Vec<TermRole> {
        text.tokens
            .iter()
            .map(|token| {
                let is_function_word = token.is_stopword
                    || FUNCTION_WORDS.contains(&token.surface_form.as_str())
                    || token.surface_form.chars().all(|c| c.is_numeric());

                if is_function_word {
                    TermRole::Unclassified
                } else {
                    TermRole::NounPhrase
                }
            })
            .collect()
    }

    fn detect_entities(&self, text: &NormalizedText) -> Vec<TokenSpan> {
        let mut entities = Vec::new();
        let mut run_start: Option<usize> = None;

        for token_index in 0..text.len() {
            let continues_run = run_start.map_or(false, |start| {
                text.is_single_sentence(TokenSpan::new(start, token_index + 1))
            });

            if Self::is_entity_like(text, token_index) {
                match run_start {
                    Some(start) if !continues_run => {
                        entities.push(TokenSpan::new(start, token_index));
                        run_start = Some(token_index);
                    }
                    None => run_start = Some(token_index),
                    _ => {}
                }
            } else if let Some(start) = run_start.take() {
                entities.push(TokenSpan::new(start, token_index));
            }
        }

        if let Some(start) = run_start {
            entities.push(TokenSpan::new(start, text.len()));
        }

        entities
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TextNormalizer;

    #[test]
    fn test_function_words_are_unclassified() {
        let normalized = TextNormalizer::default().normalize("Using Python with 3 teams");
        let roles = CapitalizationRoleTagger.tag_roles(&normalized);

        assert_eq!(
            roles,
            vec![
                TermRole::Unclassified,
                TermRole::NounPhrase,
                TermRole::Unclassified,
                TermRole::Unclassified,
                TermRole::NounPhrase,
            ]
        );
    }

    #[test]
    fn test_detects_capitalized_runs() {
        let normalized =
            TextNormalizer::default().normalize("Deployed services on Amazon Web Services daily");
        let entities = CapitalizationRoleTagger.detect_entities(&normalized);

        assert_eq!(entities, vec![TokenSpan::new(3, 6)]);
    }

    #[test]
    fn test_sentence_initial_capital_is_not_an_entity() {
        let normalized = TextNormalizer::default().normalize("Python is great. AWS too");
        let entities = CapitalizationRoleTagger.detect_entities(&normalized);

        assert_eq!(entities, vec![TokenSpan::new(3, 4)]);
    }

    #[test]
    fn test_entity_runs_stop_at_sentence_boundaries() {
        let normalized = TextNormalizer::default().normalize("We use Docker.\nKubernetes later");
        let entities = CapitalizationRoleTagger.detect_entities(&normalized);

        // "Kubernetes" starts a new sentence with a single capital
        assert_eq!(entities, vec![TokenSpan::new(2, 3)]);
    }

    #[test]
    fn test_entity_run_split_by_sentence_boundary() {
        let normalized = TextNormalizer::default().normalize("Shipped with React. GraphQL APIs");
        let entities = CapitalizationRoleTagger.detect_entities(&normalized);

        assert_eq!(
            entities,
            vec![TokenSpan::new(2, 3), TokenSpan::new(3, 5)]
        );
    }
}
