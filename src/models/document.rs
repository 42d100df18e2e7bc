use crate::types::DocumentId;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DocumentRole {
    Resume,
    Job,
}

impl fmt::Display for DocumentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentRole::Resume => f.write_str("resume"),
            DocumentRole::Job => f.write_str("job"),
        }
    }
}

/// Plain text of a resume or job posting, already extracted from its
/// original file format.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    pub id: DocumentId,
    pub role: DocumentRole,
    pub raw_text: String,
}

impl Document {
    pub fn new(id: &str, role: DocumentRole, raw_text: &str) -> Self {
        Self {
            id: id.to_string(),
            role,
            raw_text: raw_text.to_string(),
        }
    }

    pub fn resume(id: &str, raw_text: &str) -> Self {
        Self::new(id, DocumentRole::Resume, raw_text)
    }

    pub fn job(id: &str, raw_text: &str) -> Self {
        Self::new(id, DocumentRole::Job, raw_text)
    }
}
