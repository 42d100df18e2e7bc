use crate::models::SkillCategory;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a token as an owned `String`. Tokens are the basic units used for processing text.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// The base (lemma) form of a token, always lowercase.
pub type Lemma = String;

/// Position of a token within a `NormalizedText`.
pub type TokenIndex = usize;

/// Index of the sentence a token belongs to, counted from the start of the document.
pub type SentenceIndex = usize;

/// A stable identifier for one skill concept (e.g. `"javascript"`), independent of
/// the surface phrase used to express it.
pub type CanonicalSkillId = String;

/// Human-readable name of a skill (e.g. `"JavaScript"`).
pub type SkillDisplayName = String;

/// Any surface string (synonym, abbreviation) that resolves to a canonical skill id.
pub type SkillAlias = String;

/// Caller-assigned identifier of a resume or job document.
pub type DocumentId = String;

/// A value in `[0, 1]` expressing how strongly a span supports a skill.
pub type Confidence = f32;

/// Number of distinct evidence spans supporting a skill within one document.
pub type SkillFrequency = usize;

/// A list of skill definitions, where each entry includes:
/// - `CanonicalSkillId`: The skill's stable identifier.
/// - `Option<SkillDisplayName>`: The presentation name (derived from the id if not available).
/// - `SkillCategory`: The coarse grouping the skill belongs to.
/// - `Vec<SkillAlias>`: Synonyms and abbreviations for the skill.
pub type SkillDefinitionList = Vec<(
    CanonicalSkillId,
    Option<SkillDisplayName>,
    SkillCategory,
    Vec<SkillAlias>,
)>;

/// A half-open range of token positions (`start..end`) within a `NormalizedText`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenSpan {
    pub start: TokenIndex,
    /// Note: `end` is non-inclusive
    pub end: TokenIndex,
}

impl TokenSpan {
    pub fn new(start: TokenIndex, end: TokenIndex) -> Self {
        debug_assert!(start <= end, "span start must not exceed its end");
        TokenSpan { start, end }
    }

    /// Number of tokens covered by the span.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Iterates the token positions covered by the span.
    pub fn indices(&self) -> std::ops::Range<TokenIndex> {
        self.start..self.end
    }
}
