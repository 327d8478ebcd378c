use tracing::debug;

use super::{
    boost::{BoostOutcome, BoostPolicy, evaluate_boost},
    eligibility::{EligibilityResult, run_all_eligibility_checks},
    enrichment::EnrichedCandidate,
};
use crate::api::questionnaire::QuestionnaireAnswers;

/// Candidate that survived eligibility, with its adjusted score.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjustedCandidate {
    pub candidate: EnrichedCandidate,
    pub base_score: f64,
    pub adjusted_score: f64,
    pub eligibility: EligibilityResult,
    pub boost: BoostOutcome,
}

/// Drop ineligible careers, then multiply each survivor's score by its boost
/// factor. Order is preserved; re-sorting is left to the caller.
pub fn apply_interactions(
    candidates: Vec<EnrichedCandidate>,
    answers: &QuestionnaireAnswers,
    policy: BoostPolicy,
) -> Vec<AdjustedCandidate> {
    let total = candidates.len();
    let mut boosted = 0usize;

    let adjusted: Vec<_> = candidates
        .into_iter()
        .filter_map(|candidate| {
            let eligibility = run_all_eligibility_checks(&candidate.career, answers);
            if eligibility.is_excluded {
                debug!(
                    career_id = candidate.career.id,
                    reasons = ?eligibility.exclusion_reasons(),
                    "career excluded"
                );
                return None;
            }

            let boost = evaluate_boost(&candidate.career, answers, policy);
            if !boost.is_neutral() {
                boosted += 1;
            }

            Some(AdjustedCandidate {
                base_score: candidate.score,
                adjusted_score: candidate.score * boost.factor,
                candidate,
                eligibility,
                boost,
            })
        })
        .collect();

    debug!(
        total,
        kept = adjusted.len(),
        boosted,
        policy = policy.as_ref(),
        "applied eligibility and boosts"
    );
    adjusted
}
