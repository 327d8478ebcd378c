use serde::Serialize;

use crate::{
    Career, EducationTier,
    api::questionnaire::{EducationLevel, QuestionnaireAnswers, TimeCommitment},
};

/// Outcome of a single eligibility rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum EligibilityDecision {
    /// Career is removed from the skilled list.
    Excluded { reason: String },
    Pass,
}

impl EligibilityDecision {
    pub fn is_excluded(&self) -> bool {
        matches!(self, EligibilityDecision::Excluded { .. })
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            EligibilityDecision::Excluded { reason } => Some(reason),
            EligibilityDecision::Pass => None,
        }
    }
}

/// Every eligibility rule evaluated for one career.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EligibilityResult {
    /// True when any rule excluded the career.
    pub is_excluded: bool,
    pub decisions: Vec<(&'static str, EligibilityDecision)>,
}

impl EligibilityResult {
    pub fn new(decisions: Vec<(&'static str, EligibilityDecision)>) -> Self {
        let is_excluded = decisions.iter().any(|(_, d)| d.is_excluded());
        Self {
            is_excluded,
            decisions,
        }
    }

    /// `name: reason` for every excluding rule, `; ` separated.
    pub fn exclusion_reasons(&self) -> Option<String> {
        let reasons: Vec<_> = self
            .decisions
            .iter()
            .filter_map(|(name, d)| d.reason().map(|reason| format!("{name}: {reason}")))
            .collect();

        (!reasons.is_empty()).then(|| reasons.join("; "))
    }
}

pub fn run_all_eligibility_checks(
    career: &Career,
    answers: &QuestionnaireAnswers,
) -> EligibilityResult {
    EligibilityResult::new(vec![
        ("master_requirement", check_master_requirement(career, answers)),
        ("short_track_bachelor", check_short_track_bachelor(career, answers)),
    ])
}

/// High-school respondents cannot reach a Master-level career.
fn check_master_requirement(career: &Career, answers: &QuestionnaireAnswers) -> EligibilityDecision {
    if answers.education == Some(EducationLevel::HighSchool)
        && career.min_education == EducationTier::Master
    {
        EligibilityDecision::Excluded {
            reason: "requires Master; respondent has High School".into(),
        }
    } else {
        EligibilityDecision::Pass
    }
}

/// Short time horizon rules out Bachelor-level careers for high-school respondents.
fn check_short_track_bachelor(
    career: &Career,
    answers: &QuestionnaireAnswers,
) -> EligibilityDecision {
    if answers.education == Some(EducationLevel::HighSchool)
        && answers.time == Some(TimeCommitment::Short)
        && career.min_education == EducationTier::Bachelor
    {
        EligibilityDecision::Excluded {
            reason: "requires Bachelor; respondent wants a short track".into(),
        }
    } else {
        EligibilityDecision::Pass
    }
}
