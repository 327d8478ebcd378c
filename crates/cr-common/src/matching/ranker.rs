use std::cmp::Ordering;

use tracing::debug;

use super::{
    similarity::sparse_cosine_similarity,
    vectors::{CareerVector, UserVector},
};
use crate::CareerId;

#[derive(Debug, Clone)]
pub struct RankerConfig {
    /// Candidates kept after sorting (score descending).
    pub max_candidates: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCareer {
    pub career_id: CareerId,
    pub score: f64,
}

/// Score descending, then career id ascending.
pub fn rank_order(a_score: f64, a_id: CareerId, b_score: f64, b_id: CareerId) -> Ordering {
    b_score
        .partial_cmp(&a_score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a_id.cmp(&b_id))
}

pub struct SimilarityRanker {
    config: RankerConfig,
}

impl SimilarityRanker {
    pub fn new(config: RankerConfig) -> Self {
        Self { config }
    }

    /// Cosine similarity of every career against the user. Careers scoring
    /// ≤ 0 are discarded outright; the rest are ranked and truncated.
    pub fn rank(&self, user: &UserVector, careers: &[CareerVector]) -> Vec<ScoredCareer> {
        if user.is_zero() {
            debug!(careers = careers.len(), "user vector is all zero; nothing to rank");
            return Vec::new();
        }

        let mut scored: Vec<_> = careers
            .iter()
            .filter_map(|career| {
                let score = sparse_cosine_similarity(user, career);
                (score > 0.0).then_some(ScoredCareer {
                    career_id: career.career_id,
                    score,
                })
            })
            .collect();

        let matched = scored.len();
        scored.sort_by(|a, b| rank_order(a.score, a.career_id, b.score, b.career_id));
        scored.truncate(self.config.max_candidates);

        debug!(
            careers = careers.len(),
            matched,
            kept = scored.len(),
            "ranked careers by similarity"
        );
        scored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        CareerSkillWeight, SkillId,
        matching::{skill_index::SkillIndex, vectors::build_career_vectors},
    };

    fn row(career_id: CareerId, skill_id: SkillId, weight: f64) -> CareerSkillWeight {
        CareerSkillWeight {
            career_id,
            skill_id,
            weight,
        }
    }

    fn rank(held: &[SkillId], rows: &[CareerSkillWeight], max: usize) -> Vec<ScoredCareer> {
        let index = SkillIndex::build(&[1, 2, 3, 4]);
        let user = UserVector::build(&index, held);
        let careers = build_career_vectors(&index, rows);
        SimilarityRanker::new(RankerConfig {
            max_candidates: max,
        })
        .rank(&user, &careers)
    }

    #[test]
    fn discards_zero_similarity_and_sorts_descending() {
        let ranked = rank(
            &[1],
            &[row(1, 1, 0.4), row(1, 2, 1.0), row(2, 1, 1.0), row(3, 3, 1.0)],
            20,
        );

        let ids: Vec<_> = ranked.iter().map(|r| r.career_id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert!((ranked[0].score - 1.0).abs() < 1e-12);
        assert!(ranked.iter().all(|r| r.score > 0.0));
    }

    #[test]
    fn ties_break_by_ascending_career_id() {
        let ranked = rank(&[2], &[row(9, 2, 0.5), row(4, 2, 1.0), row(6, 2, 0.2)], 20);

        let ids: Vec<_> = ranked.iter().map(|r| r.career_id).collect();
        assert_eq!(ids, vec![4, 6, 9]);
    }

    #[test]
    fn truncates_to_max_candidates() {
        let rows: Vec<_> = (1..=30).map(|id| row(id, 1, id as f64 / 30.0)).collect();
        let ranked = rank(&[1, 2], &rows, 20);
        assert_eq!(ranked.len(), 20);
    }

    #[test]
    fn zero_user_vector_yields_nothing() {
        let ranked = rank(&[42], &[row(1, 1, 1.0), row(2, 2, 1.0)], 20);
        assert!(ranked.is_empty());
    }

    #[test]
    fn rank_order_treats_nan_as_equal_then_uses_id() {
        assert_eq!(rank_order(f64::NAN, 1, 0.5, 2), Ordering::Less);
        assert_eq!(rank_order(0.2, 1, 0.9, 2), Ordering::Greater);
    }
}
