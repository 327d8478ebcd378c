use std::collections::BTreeMap;

use tracing::{debug, warn};

use super::skill_index::SkillIndex;
use crate::{CareerId, CareerSkillWeight, SkillId};

/// Dense binary presence vector for the user's held skills.
#[derive(Debug, Clone, PartialEq)]
pub struct UserVector {
    values: Vec<f64>,
}

impl UserVector {
    /// Held skills missing from the index are ignored.
    pub fn build(index: &SkillIndex, held_skill_ids: &[SkillId]) -> Self {
        let mut values = vec![0.0; index.len()];
        let mut ignored = 0usize;

        for &skill_id in held_skill_ids {
            match index.dimension(skill_id) {
                Some(dim) => values[dim] = 1.0,
                None => ignored += 1,
            }
        }

        if ignored > 0 {
            debug!(ignored, "held skills not present in catalog were ignored");
        }

        Self { values }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, dimension: usize) -> f64 {
        self.values.get(dimension).copied().unwrap_or(0.0)
    }

    pub fn norm(&self) -> f64 {
        self.values.iter().map(|x| x * x).sum::<f64>().sqrt()
    }

    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|x| *x == 0.0)
    }
}

/// Sparse weighted vector for one career (dimension → weight, absent = 0).
#[derive(Debug, Clone, PartialEq)]
pub struct CareerVector {
    pub career_id: CareerId,
    entries: BTreeMap<usize, f64>,
}

impl CareerVector {
    pub fn entries(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.entries.iter().map(|(dim, weight)| (*dim, *weight))
    }

    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn norm(&self) -> f64 {
        self.entries.values().map(|w| w * w).sum::<f64>().sqrt()
    }

    pub fn to_dense(&self, len: usize) -> Vec<f64> {
        let mut dense = vec![0.0; len];
        for (dim, weight) in self.entries() {
            if dim < len {
                dense[dim] = weight;
            }
        }
        dense
    }
}

/// Build one sparse vector per career that has at least one weight on a known
/// skill. Rows on unknown skills and non-finite weights are dropped; weights
/// outside 0.0〜1.0 are clamped. A repeated (career, skill) row overwrites the
/// earlier one. Output is ordered by career id.
pub fn build_career_vectors(index: &SkillIndex, weights: &[CareerSkillWeight]) -> Vec<CareerVector> {
    let mut by_career: BTreeMap<CareerId, BTreeMap<usize, f64>> = BTreeMap::new();
    let mut orphaned = 0usize;

    for row in weights {
        let Some(dim) = index.dimension(row.skill_id) else {
            orphaned += 1;
            continue;
        };

        if !row.weight.is_finite() {
            warn!(
                career_id = row.career_id,
                skill_id = row.skill_id,
                "dropping non-finite career skill weight"
            );
            continue;
        }

        let weight = if (0.0..=1.0).contains(&row.weight) {
            row.weight
        } else {
            warn!(
                career_id = row.career_id,
                skill_id = row.skill_id,
                weight = row.weight,
                "career skill weight outside 0..=1; clamping"
            );
            row.weight.clamp(0.0, 1.0)
        };

        by_career.entry(row.career_id).or_default().insert(dim, weight);
    }

    if orphaned > 0 {
        debug!(orphaned, "dropped weight rows referencing unknown skills");
    }

    by_career
        .into_iter()
        .map(|(career_id, entries)| CareerVector { career_id, entries })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(career_id: CareerId, skill_id: SkillId, weight: f64) -> CareerSkillWeight {
        CareerSkillWeight {
            career_id,
            skill_id,
            weight,
        }
    }

    #[test]
    fn user_vector_marks_known_held_skills() {
        let index = SkillIndex::build(&[1, 2, 3]);
        let user = UserVector::build(&index, &[1, 3, 42]);

        assert_eq!(user.as_slice(), &[1.0, 0.0, 1.0]);
        assert!(!user.is_zero());
        assert!((user.norm() - 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn empty_held_set_is_a_valid_zero_vector() {
        let index = SkillIndex::build(&[1, 2]);
        let user = UserVector::build(&index, &[]);

        assert_eq!(user.len(), 2);
        assert!(user.is_zero());
        assert_eq!(user.norm(), 0.0);
    }

    #[test]
    fn career_vectors_are_sparse_and_drop_orphans() {
        let index = SkillIndex::build(&[1, 2, 3]);
        let vectors = build_career_vectors(
            &index,
            &[row(7, 1, 1.0), row(7, 2, 0.5), row(8, 99, 0.9), row(5, 3, 0.25)],
        );

        let ids: Vec<_> = vectors.iter().map(|v| v.career_id).collect();
        assert_eq!(ids, vec![5, 7]);
        assert_eq!(vectors[1].to_dense(index.len()), vec![1.0, 0.5, 0.0]);
        assert_eq!(vectors[1].nnz(), 2);
        assert_eq!(vectors[0].to_dense(index.len()), vec![0.0, 0.0, 0.25]);
    }

    #[test]
    fn weights_are_sanitized() {
        let index = SkillIndex::build(&[1, 2, 3]);
        let vectors = build_career_vectors(
            &index,
            &[row(1, 1, 1.7), row(1, 2, -0.3), row(1, 3, f64::NAN)],
        );

        assert_eq!(vectors.len(), 1);
        assert_eq!(vectors[0].to_dense(3), vec![1.0, 0.0, 0.0]);
    }

    #[test]
    fn repeated_rows_keep_the_last_weight() {
        let index = SkillIndex::build(&[1]);
        let vectors = build_career_vectors(&index, &[row(1, 1, 0.2), row(1, 1, 0.8)]);
        assert_eq!(vectors[0].to_dense(1), vec![0.8]);
    }
}
