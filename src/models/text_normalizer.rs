use crate::constants::{SENTENCE_TERMINATORS, STOP_WORDS};
use crate::types::{Lemma, SentenceIndex, Token, TokenIndex, TokenRef, TokenSpan};
use crate::utils::{lemmatize, parse_stop_words};
use log::debug;
use std::collections::HashSet;

/// A single token of a normalized document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedToken {
    /// The lowercased token, with surrounding punctuation stripped.
    pub surface_form: Token,

    /// The base form of the token. Stop words keep their surface form.
    pub lemma: Lemma,

    /// Whether the token is a member of the normalizer's stop-word set.
    pub is_stopword: bool,

    /// The sentence the token belongs to. Phrases never span two sentences.
    pub sentence_index: SentenceIndex,
}

/// The ordered token stream of a document.
///
/// Stop words are flagged rather than removed: the full stream is used for
/// phrase matching, while the stream of retained tokens is used for
/// single-word matching.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedText {
    pub tokens: Vec<NormalizedToken>,

    /// Case-preserved form of each token, parallel to `tokens`.
    pub cased_forms: Vec<Token>,
}

impl NormalizedText {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, token_index: TokenIndex) -> Option<&NormalizedToken> {
        self.tokens.get(token_index)
    }

    /// Returns the original-case form of the token at the given index.
    pub fn cased_form(&self, token_index: TokenIndex) -> Option<&TokenRef> {
        self.cased_forms.get(token_index).map(|form| form.as_str())
    }

    /// Iterates the tokens which survive stop-word removal, with their positions.
    pub fn retained(&self) -> impl Iterator<Item = (TokenIndex, &NormalizedToken)> {
        self.tokens
            .iter()
            .enumerate()
            .filter(|(_, token)| !token.is_stopword)
    }

    /// Whether every token in the span belongs to the same sentence.
    pub fn is_single_sentence(&self, span: TokenSpan) -> bool {
        match (self.tokens.get(span.start), span.end.checked_sub(1)) {
            (Some(first), Some(last_index)) => self
                .tokens
                .get(last_index)
                .map_or(false, |last| last.sentence_index == first.sentence_index),
            _ => false,
        }
    }

    /// Joins the lemmas of the span with single spaces.
    pub fn phrase_text(&self, span: TokenSpan) -> String {
        self.tokens[span.start..span.end.min(self.tokens.len())]
            .iter()
            .map(|token| token.lemma.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Lemma-joined form of the whole text, ignoring sentence boundaries.
    ///
    /// This is the key under which phrases are stored in a `SkillOntology`.
    pub fn lemma_phrase(&self) -> String {
        self.phrase_text(TokenSpan::new(0, self.tokens.len()))
    }

    /// Renders the lowercase surface forms back to text, one sentence per line.
    ///
    /// Normalizing the rendered text yields the same token sequence.
    pub fn render(&self) -> String {
        let mut lines: Vec<Vec<&str>> = Vec::new();

        for token in &self.tokens {
            if lines.len() <= token.sentence_index {
                lines.resize_with(token.sentence_index + 1, Vec::new);
            }
            lines[token.sentence_index].push(token.surface_form.as_str());
        }

        lines
            .iter()
            .map(|words| words.join(" "))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Converts raw document text into a `NormalizedText`.
///
/// Lowercases, strips punctuation, flags stop words and lemmatizes. Pure:
/// the output depends only on the input text and the stop-word set.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    stop_words: HashSet<String>,
}

impl Default for TextNormalizer {
    /// Creates a normalizer using the built-in `STOP_WORDS`.
    fn default() -> Self {
        Self::new(STOP_WORDS.iter().map(|word| word.to_string()).collect())
    }
}

impl TextNormalizer {
    /// Creates a normalizer with a custom stop-word set. Entries are lowercased.
    pub fn new(stop_words: HashSet<String>) -> Self {
        Self {
            stop_words: stop_words
                .into_iter()
                .map(|word| word.to_lowercase())
                .collect(),
        }
    }

    /// Creates a normalizer from a newline-separated stop-word resource.
    pub fn from_stop_word_resource(resource: &str) -> Self {
        Self::new(parse_stop_words(resource))
    }

    pub fn is_stop_word(&self, word: &TokenRef) -> bool {
        self.stop_words.contains(word)
    }

    /// Normalizes the input text.
    ///
    /// Empty or whitespace-only input yields an empty `NormalizedText`.
    pub fn normalize(&self, raw_text: &str) -> NormalizedText {
        let mut normalized = NormalizedText::default();
        let mut sentence_index: SentenceIndex = 0;
        let mut sentence_has_tokens = false;

        let text = raw_text
            .replace("-\r\n", "") // Merge hyphenated words across lines
            .replace("-\n", "")
            .replace("--", " "); // Replace standalone double hyphens

        for line in text.lines() {
            for word in line.split_whitespace() {
                let (pieces, ends_sentence) = Self::split_word(word);

                for piece in pieces {
                    let surface_form = piece.to_lowercase();
                    let is_stopword = self.is_stop_word(&surface_form);
                    let lemma = if is_stopword {
                        surface_form.clone()
                    } else {
                        lemmatize(&surface_form)
                    };

                    normalized.tokens.push(NormalizedToken {
                        surface_form,
                        lemma,
                        is_stopword,
                        sentence_index,
                    });
                    normalized.cased_forms.push(piece);
                    sentence_has_tokens = true;
                }

                if ends_sentence && sentence_has_tokens {
                    sentence_index += 1;
                    sentence_has_tokens = false;
                }
            }

            // Line breaks always end a sentence
            if sentence_has_tokens {
                sentence_index += 1;
                sentence_has_tokens = false;
            }
        }

        debug!(
            "Normalized {} tokens across {} sentences",
            normalized.len(),
            sentence_index
        );

        normalized
    }

    /// Normalizes a short phrase (such as an ontology alias) into its
    /// lemma-joined lookup form.
    pub fn normalize_phrase(&self, phrase: &str) -> String {
        self.normalize(phrase).lemma_phrase()
    }

    /// Splits one whitespace-delimited word into case-preserved token pieces.
    ///
    /// Returns the pieces and whether the word's trailing punctuation ends a sentence.
    fn split_word(word: &str) -> (Vec<Token>, bool) {
        let chars: Vec<char> = word.chars().collect();
        let is_terminator = |c: &char| SENTENCE_TERMINATORS.contains(c);

        let Some(start) = chars.iter().position(|c| Self::is_word_char(*c)) else {
            // Punctuation-only words (e.g. a standalone ".") may still end a sentence
            return (Vec::new(), chars.iter().any(is_terminator));
        };

        let mut end = chars
            .iter()
            .rposition(|c| Self::is_word_char(*c))
            .map_or(start + 1, |index| index + 1);

        // Keep symbol suffixes such as "c++" and "c#"
        while end < chars.len() && (chars[end] == '+' || chars[end] == '#') {
            end += 1;
        }

        let trailing = &chars[end..];
        let mut core: String = chars[start..end].iter().collect();

        // Remove possessive endings, then any remaining apostrophes
        for possessive in ["'s", "\u{2019}s", "'S", "\u{2019}S"] {
            if let Some(stripped) = core.strip_suffix(possessive) {
                core = stripped.to_string();
                break;
            }
        }
        core.retain(|c| c != '\'' && c != '\u{2019}');

        if Self::is_abbreviation(&core) {
            // The first trailing period belongs to the abbreviation itself
            let rest = match trailing.first() {
                Some('.') => &trailing[1..],
                _ => trailing,
            };

            return (vec![format!("{}.", core)], rest.iter().any(is_terminator));
        }

        let pieces = core
            .split(|c: char| !(Self::is_word_char(c) || c == '-' || c == '+' || c == '#'))
            .filter_map(Self::clean_piece)
            .collect();

        (pieces, trailing.iter().any(is_terminator))
    }

    /// Letters, digits and combining marks.
    ///
    /// Lowercasing can emit a combining mark ("İ" becomes "i\u{307}"), so marks
    /// must stay inside the word for normalization to be idempotent.
    fn is_word_char(c: char) -> bool {
        c.is_alphanumeric()
            || matches!(
                c,
                '\u{0300}'..='\u{036F}'
                    | '\u{1AB0}'..='\u{1AFF}'
                    | '\u{1DC0}'..='\u{1DFF}'
                    | '\u{20D0}'..='\u{20FF}'
                    | '\u{FE20}'..='\u{FE2F}'
            )
    }

    /// Whether the word is a run of single letters separated by periods (e.g. "c.i", "e.g").
    fn is_abbreviation(word: &str) -> bool {
        let segments: Vec<&str> = word.split('.').collect();

        segments.len() >= 2
            && segments.iter().all(|segment| {
                let mut chars = segment.chars();
                matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic())
            })
    }

    /// Removes stray symbols from a word piece, keeping internal hyphens and
    /// a trailing `+`/`#` run.
    fn clean_piece(piece: &str) -> Option<Token> {
        let body_len = piece.trim_end_matches(['+', '#']).len();
        let (body, symbols) = piece.split_at(body_len);

        let body: String = body
            .chars()
            .filter(|c| Self::is_word_char(*c) || *c == '-')
            .collect();
        let body = body.trim_matches('-');

        if body.is_empty() {
            None
        } else {
            Some(format!("{}{}", body, symbols))
        }
    }
}
