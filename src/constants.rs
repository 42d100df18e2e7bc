/// Skill vocabulary compiled into the crate, used by `SkillOntology::embedded`.
pub const EMBEDDED_SKILL_ONTOLOGY_CSV: &str = include_str!("../data/skill_ontology.csv");

/// Column headers expected in a skill ontology CSV resource.
pub const ONTOLOGY_HEADER_SKILL_ID: &str = "Skill Id";
pub const ONTOLOGY_HEADER_DISPLAY_NAME: &str = "Display Name";
pub const ONTOLOGY_HEADER_CATEGORY: &str = "Category";
pub const ONTOLOGY_HEADER_ALIASES: &str = "Aliases";

/// Default stop-word set (lowercase).
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "aren", "arent", "as", "at", "be", "because", "been", "before", "being", "below", "between",
    "both", "but", "by", "can", "cant", "could", "did", "do", "does", "doing", "dont", "down",
    "during", "each", "few", "for", "from", "further", "had", "has", "have", "having", "he", "her",
    "here", "hers", "herself", "him", "himself", "his", "how", "i", "if", "in", "into", "is",
    "isnt", "it", "its", "itself", "just", "me", "more", "most", "my", "myself", "no", "nor", "not",
    "of", "off", "on", "once", "only", "or", "other", "our", "ours", "ourselves", "out", "over",
    "own", "same", "she", "should", "so", "some", "such", "than", "that", "the", "their",
    "theirs", "them", "themselves", "then", "there", "these", "they", "this", "those", "through",
    "to", "too", "under", "until", "up", "very", "was", "we", "were", "what", "when", "where",
    "which", "while", "who", "whom", "why", "will", "with", "wont", "would", "you", "your",
    "yours", "yourself", "yourselves",
];

/// Words which carry no skill meaning on their own but are not stop words.
/// Single-token candidates built from these are tagged `Unclassified`.
pub const FUNCTION_WORDS: &[&str] = &[
    "also", "among", "across", "able", "etc", "e.g.", "i.e.", "including", "like", "per",
    "plus", "using", "via", "well", "within", "without", "never", "however", "although",
    "though", "yet", "except",
];

/// Cue phrases (lowercase surface forms) that negate a following skill mention.
pub const NEGATION_CUES: &[&[&str]] = &[
    &["no"],
    &["without"],
    &["never"],
    &["lacking"],
    &["lack", "of"],
    &["not", "familiar", "with"],
    &["not", "experienced", "with"],
];

/// Words that end the scope of a preceding negation cue.
pub const NEGATION_SCOPE_TERMINATORS: &[&str] =
    &["but", "however", "although", "though", "yet", "except"];

/// Irregular forms and words which must not be reduced by the suffix rules.
pub const LEMMA_EXCEPTIONS: &[(&str, &str)] = &[
    ("analyses", "analysis"),
    ("apis", "api"),
    ("bases", "base"),
    ("caches", "cache"),
    ("children", "child"),
    ("criteria", "criterion"),
    ("databases", "database"),
    ("diagnoses", "diagnosis"),
    ("hypotheses", "hypothesis"),
    ("indices", "index"),
    ("leaves", "leaf"),
    ("lives", "life"),
    ("matrices", "matrix"),
    ("people", "person"),
    ("phenomena", "phenomenon"),
    ("theses", "thesis"),
    ("vertices", "vertex"),
    ("women", "woman"),
    // Proper nouns ending in "s"
    ("devops", "devops"),
    ("jenkins", "jenkins"),
    ("kubernetes", "kubernetes"),
    ("pandas", "pandas"),
    ("postgres", "postgres"),
    ("rails", "rails"),
    ("series", "series"),
    ("species", "species"),
    ("teams", "teams"),
    ("windows", "windows"),
];

/// Punctuation which terminates a sentence when it trails a word.
pub const SENTENCE_TERMINATORS: &[char] = &['.', '!', '?', ';'];
