pub mod candidate_term_extractor;
pub use candidate_term_extractor::{CandidateTerm, CandidateTermExtractor, CandidateTerms, TermRole};

pub mod config;
pub use config::SkillExtractorConfig;

pub mod document;
pub use document::{Document, DocumentRole};

pub mod error;
pub use error::Error;

pub mod overlap_scorer;
pub use overlap_scorer::{CategoryOverlap, MatchResult, OverlapScorer};

pub mod role_tagger;
pub use role_tagger::{CapitalizationRoleTagger, RoleTagger};

pub mod skill_category;
pub use skill_category::SkillCategory;

pub mod skill_extractor;
pub use skill_extractor::SkillExtractor;

pub mod skill_matcher;
pub use skill_matcher::{SkillMatch, SkillMatcher};

pub mod skill_ontology;
pub use skill_ontology::{SkillOntology, SkillOntologyEntry};

pub mod skill_set_builder;
pub use skill_set_builder::{SkillEvidence, SkillSet, SkillSetBuilder};

pub mod text_normalizer;
pub use text_normalizer::{NormalizedText, NormalizedToken, TextNormalizer};
