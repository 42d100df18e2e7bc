use crate::models::{SkillCategory, SkillMatch};
use crate::types::{CanonicalSkillId, Confidence, DocumentId, SkillFrequency, TokenSpan};
use log::debug;
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};

/// Aggregated support for one skill within a document.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillEvidence {
    pub category: SkillCategory,

    /// The highest confidence among the supporting matches.
    pub confidence: Confidence,

    /// Token ranges in the source text which justified the skill.
    pub evidence_spans: BTreeSet<TokenSpan>,
}

impl SkillEvidence {
    /// Number of distinct places the skill was mentioned.
    pub fn frequency(&self) -> SkillFrequency {
        self.evidence_spans.len()
    }
}

/// The deduplicated skills of one document, keyed by canonical id.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillSet {
    pub document_id: DocumentId,
    pub skills: BTreeMap<CanonicalSkillId, SkillEvidence>,
}

impl SkillSet {
    /// Creates an empty skill set for the given document.
    pub fn new(document_id: &str) -> Self {
        Self {
            document_id: document_id.to_string(),
            skills: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn contains(&self, canonical_id: &str) -> bool {
        self.skills.contains_key(canonical_id)
    }

    pub fn get(&self, canonical_id: &str) -> Option<&SkillEvidence> {
        self.skills.get(canonical_id)
    }

    /// Canonical ids in ascending order.
    pub fn canonical_ids(&self) -> BTreeSet<CanonicalSkillId> {
        self.skills.keys().cloned().collect()
    }

    pub fn skills_in_category(
        &self,
        category: SkillCategory,
    ) -> impl Iterator<Item = (&CanonicalSkillId, &SkillEvidence)> {
        self.skills
            .iter()
            .filter(move |(_, evidence)| evidence.category == category)
    }
}

pub struct SkillSetBuilder;

impl SkillSetBuilder {
    /// Groups matches by canonical id.
    ///
    /// Zero-confidence (negated) matches are discarded. Repeated matches of
    /// the same skill keep the maximum confidence and union their spans.
    pub fn build<I>(document_id: &str, matches: I) -> SkillSet
    where
        I: IntoIterator<Item = SkillMatch>,
    {
        let mut skill_set = SkillSet::new(document_id);
        let mut discarded_count = 0;

        for skill_match in matches {
            if skill_match.confidence <= 0.0 {
                discarded_count += 1;
                continue;
            }

            let span = skill_match.span();

            match skill_set.skills.entry(skill_match.canonical_id) {
                Entry::Occupied(mut occupied) => {
                    let evidence = occupied.get_mut();
                    evidence.confidence = evidence.confidence.max(skill_match.confidence);
                    evidence.evidence_spans.insert(span);
                }
                Entry::Vacant(vacant) => {
                    vacant.insert(SkillEvidence {
                        category: skill_match.category,
                        confidence: skill_match.confidence,
                        evidence_spans: BTreeSet::from([span]),
                    });
                }
            }
        }

        debug!(
            "Built skill set for {:?} with {} skills ({} zero-confidence matches discarded)",
            skill_set.document_id,
            skill_set.len(),
            discarded_count
        );

        skill_set
    }
}
