/// Tunables for skill extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillExtractorConfig {
    /// Maximum number of tokens in a multi-word candidate phrase.
    pub max_phrase_length: usize,

    /// Maximum distance, in tokens, between the end of a negation cue and a
    /// negated skill mention.
    pub negation_window: usize,

    /// Single-token aliases shorter than this (e.g. "r", "c") only match when
    /// the original text carries an uppercase letter.
    pub min_unambiguous_alias_length: usize,
}
