use crate::constants::LEMMA_EXCEPTIONS;
use crate::types::{Lemma, TokenRef};

/// Words shorter than this are returned unchanged (e.g. "aws", "gcp", "sas").
const MIN_LEMMATIZE_LENGTH: usize = 4;

/// Reduces a lowercase token to its base form using a fixed suffix rule set.
///
/// The rules are noun-oriented (plural to singular), with an exception table
/// for irregular forms and for proper nouns which happen to end in "s". Tokens
/// carrying digits or symbols (e.g. "neo4j", "c++", "c.i.") are left intact.
///
/// Hyphenated tokens only have their final segment reduced:
/// "micro-services" becomes "micro-service".
///
/// # Example
/// ```rust
/// use skill_sniffer::lemmatize;
///
/// assert_eq!(lemmatize("technologies"), "technology");
/// assert_eq!(lemmatize("databases"), "database");
/// assert_eq!(lemmatize("kubernetes"), "kubernetes");
/// assert_eq!(lemmatize("aws"), "aws");
/// ```
pub fn lemmatize(token: &TokenRef) -> Lemma {
    if let Some((head, tail)) = token.rsplit_once('-') {
        if !head.is_empty() && !tail.is_empty() {
            return format!("{}-{}", head, lemmatize_word(tail));
        }
    }

    lemmatize_word(token)
}

fn lemmatize_word(word: &TokenRef) -> Lemma {
    if let Some((_, lemma)) = LEMMA_EXCEPTIONS.iter().find(|(form, _)| *form == word) {
        return lemma.to_string();
    }

    if word.chars().count() < MIN_LEMMATIZE_LENGTH
        || !word.chars().all(|c| c.is_ascii_lowercase())
    {
        return word.to_string();
    }

    if let Some(stem) = word.strip_suffix("ies") {
        return format!("{}y", stem);
    }

    if word.ends_with("sses")
        || word.ends_with("xes")
        || word.ends_with("ches")
        || word.ends_with("shes")
    {
        return word[..word.len() - 2].to_string();
    }

    if word.ends_with("ss")
        || word.ends_with("us")
        || word.ends_with("is")
        || word.ends_with("ics")
        || word.ends_with("os")
    {
        return word.to_string();
    }

    match word.strip_suffix('s') {
        Some(stem) => stem.to_string(),
        None => word.to_string(),
    }
}
