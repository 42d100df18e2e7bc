use crate::models::SkillExtractorConfig;

pub const DEFAULT_SKILL_EXTRACTOR_CONFIG: SkillExtractorConfig = SkillExtractorConfig {
    max_phrase_length: 4,
    negation_window: 3,
    min_unambiguous_alias_length: 2,
};

/// Confidence assigned to an exact multi-word alias match.
pub const MULTI_WORD_MATCH_CONFIDENCE: f32 = 1.0;

/// Confidence assigned to a single-token alias match. Lower, as single tokens
/// are more ambiguous.
pub const SINGLE_TOKEN_MATCH_CONFIDENCE: f32 = 0.85;

/// Bonus added when the matched span was recognized as a named entity.
pub const NAMED_ENTITY_CONFIDENCE_BONUS: f32 = 0.05;
