use crate::models::{SkillCategory, SkillSet};
use crate::types::{CanonicalSkillId, DocumentId};
use log::info;
use std::collections::{BTreeMap, BTreeSet};

/// Overlap restricted to a single skill category.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CategoryOverlap {
    pub matched: BTreeSet<CanonicalSkillId>,

    /// Job skills of this category the resume does not cover.
    pub missing: BTreeSet<CanonicalSkillId>,

    /// `|matched| / |job skills in category|`, or 0.0 if the job has none.
    pub score: f64,
}

/// The comparison of one resume against one job.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchResult {
    pub resume_id: DocumentId,
    pub job_id: DocumentId,

    /// Share of the job's skills which the resume covers, in `[0, 1]`.
    pub score: f64,

    pub matched: BTreeSet<CanonicalSkillId>,
    pub resume_only: BTreeSet<CanonicalSkillId>,
    pub job_only: BTreeSet<CanonicalSkillId>,

    /// Breakdown for every category present in either skill set.
    pub categories: BTreeMap<SkillCategory, CategoryOverlap>,
}

impl MatchResult {
    /// The score as a percentage, rounded to two decimal places.
    pub fn match_percentage(&self) -> f64 {
        (self.score * 100.0 * 100.0).round() / 100.0
    }
}

pub struct OverlapScorer;

impl OverlapScorer {
    /// Scores how much of the job's skill set the resume covers.
    ///
    /// The score is asymmetric: `|matched| / |job skills|`. A job with no
    /// identifiable skills scores 0.0 against any resume.
    pub fn score(resume_set: &SkillSet, job_set: &SkillSet) -> MatchResult {
        let resume_ids = resume_set.canonical_ids();
        let job_ids = job_set.canonical_ids();

        let matched: BTreeSet<CanonicalSkillId> =
            resume_ids.intersection(&job_ids).cloned().collect();
        let resume_only: BTreeSet<CanonicalSkillId> =
            resume_ids.difference(&job_ids).cloned().collect();
        let job_only: BTreeSet<CanonicalSkillId> =
            job_ids.difference(&resume_ids).cloned().collect();

        let score = Self::ratio(matched.len(), job_ids.len());

        info!(
            "Scored resume {:?} against job {:?}: {}/{} job skills matched",
            resume_set.document_id,
            job_set.document_id,
            matched.len(),
            job_ids.len()
        );

        MatchResult {
            resume_id: resume_set.document_id.clone(),
            job_id: job_set.document_id.clone(),
            score,
            categories: Self::score_categories(resume_set, job_set, &matched),
            matched,
            resume_only,
            job_only,
        }
    }

    fn score_categories(
        resume_set: &SkillSet,
        job_set: &SkillSet,
        matched: &BTreeSet<CanonicalSkillId>,
    ) -> BTreeMap<SkillCategory, CategoryOverlap> {
        let present_categories: BTreeSet<SkillCategory> = resume_set
            .skills
            .values()
            .chain(job_set.skills.values())
            .map(|evidence| evidence.category)
            .collect();

        present_categories
            .into_iter()
            .map(|category| {
                let job_ids: BTreeSet<CanonicalSkillId> = job_set
                    .skills_in_category(category)
                    .map(|(canonical_id, _)| canonical_id.clone())
                    .collect();

                let (category_matched, missing): (BTreeSet<_>, BTreeSet<_>) = job_ids
                    .iter()
                    .cloned()
                    .partition(|canonical_id| matched.contains(canonical_id));

                let overlap = CategoryOverlap {
                    score: Self::ratio(category_matched.len(), job_ids.len()),
                    matched: category_matched,
                    missing,
                };

                (category, overlap)
            })
            .collect()
    }

    fn ratio(numerator: usize, denominator: usize) -> f64 {
        if denominator == 0 {
            0.0
        } else {
            numerator as f64 / denominator as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SkillEvidence;
    use crate::types::TokenSpan;

    fn skill_set(document_id: &str, skills: &[(&str, SkillCategory)]) -> SkillSet {
        let mut skill_set = SkillSet::new(document_id);

        for (index, (canonical_id, category)) in skills.iter().enumerate() {
            skill_set.skills.insert(
                canonical_id.to_string(),
                SkillEvidence {
                    category: *category,
                    confidence: 1.0,
                    evidence_spans: BTreeSet::from([TokenSpan::new(index, index + 1)]),
                },
            );
        }

        skill_set
    }

    fn ids(values: &[&str]) -> BTreeSet<CanonicalSkillId> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn test_asymmetric_score() {
        let resume = skill_set(
            "resume",
            &[
                ("python", SkillCategory::ProgrammingLanguages),
                ("sql", SkillCategory::Databases),
            ],
        );
        let job = skill_set(
            "job",
            &[
                ("python", SkillCategory::ProgrammingLanguages),
                ("java", SkillCategory::ProgrammingLanguages),
            ],
        );

        let result = OverlapScorer::score(&resume, &job);

        assert_eq!(result.resume_id, "resume");
        assert_eq!(result.job_id, "job");
        assert_eq!(result.score, 0.5);
        assert_eq!(result.matched, ids(&["python"]));
        assert_eq!(result.resume_only, ids(&["sql"]));
        assert_eq!(result.job_only, ids(&["java"]));
        assert_eq!(result.match_percentage(), 50.0);

        let swapped = OverlapScorer::score(&job, &resume);
        assert_eq!(swapped.resume_only, ids(&["java"]));
        assert_eq!(swapped.job_only, ids(&["sql"]));
    }

    #[test]
    fn test_empty_job_set_scores_zero() {
        let resume = skill_set("resume", &[("python", SkillCategory::ProgrammingLanguages)]);
        let job = SkillSet::new("job");

        let result = OverlapScorer::score(&resume, &job);

        assert_eq!(result.score, 0.0);
        assert!(result.matched.is_empty());
        assert!(result.job_only.is_empty());
        assert_eq!(result.resume_only, ids(&["python"]));
    }

    #[test]
    fn test_category_breakdown() {
        let resume = skill_set(
            "resume",
            &[
                ("python", SkillCategory::ProgrammingLanguages),
                ("teamwork", SkillCategory::SoftSkills),
            ],
        );
        let job = skill_set(
            "job",
            &[
                ("python", SkillCategory::ProgrammingLanguages),
                ("rust", SkillCategory::ProgrammingLanguages),
                ("go", SkillCategory::ProgrammingLanguages),
                ("postgresql", SkillCategory::Databases),
            ],
        );

        let result = OverlapScorer::score(&resume, &job);

        let languages = &result.categories[&SkillCategory::ProgrammingLanguages];
        assert_eq!(languages.matched, ids(&["python"]));
        assert_eq!(languages.missing, ids(&["go", "rust"]));
        assert!((languages.score - 1.0 / 3.0).abs() < 1e-9);

        let databases = &result.categories[&SkillCategory::Databases];
        assert_eq!(databases.score, 0.0);
        assert_eq!(databases.missing, ids(&["postgresql"]));

        // Present only on the resume side
        let soft_skills = &result.categories[&SkillCategory::SoftSkills];
        assert!(soft_skills.matched.is_empty());
        assert_eq!(soft_skills.score, 0.0);

        assert!(!result.categories.contains_key(&SkillCategory::Other));
        assert_eq!(result.match_percentage(), 25.0);
    }

    #[test]
    fn test_match_percentage_rounding() {
        let resume = skill_set("resume", &[("a", SkillCategory::Other)]);
        let job = skill_set(
            "job",
            &[
                ("a", SkillCategory::Other),
                ("b", SkillCategory::Other),
                ("c", SkillCategory::Other),
            ],
        );

        assert_eq!(OverlapScorer::score(&resume, &job).match_percentage(), 33.33);
    }
}
