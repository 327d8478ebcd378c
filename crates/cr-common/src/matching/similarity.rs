use super::vectors::{CareerVector, UserVector};

/// Cosine similarity `(A·B) / (‖A‖·‖B‖)`.
///
/// Returns 0.0 when either norm is zero or the lengths differ. Non-negative
/// inputs give a value in 0.0〜1.0.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        tracing::warn!(
            a_len = a.len(),
            b_len = b.len(),
            "vector dimension mismatch; returning zero similarity"
        );
        return 0.0;
    }

    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    ratio(dot, norm_a, norm_b)
}

/// Same value as [`cosine_similarity`] on the dense form, touching only the
/// career's non-zero dimensions.
pub fn sparse_cosine_similarity(user: &UserVector, career: &CareerVector) -> f64 {
    let dot: f64 = career
        .entries()
        .map(|(dim, weight)| user.get(dim) * weight)
        .sum();

    ratio(dot, user.norm(), career.norm())
}

fn ratio(dot: f64, norm_a: f64, norm_b: f64) -> f64 {
    if norm_a > 0.0 && norm_b > 0.0 {
        dot / (norm_a * norm_b)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        CareerSkillWeight,
        matching::{skill_index::SkillIndex, vectors::build_career_vectors},
    };

    #[test]
    fn cosine_similarity_returns_one_for_identical_vectors() {
        for a in [vec![1.0, 0.0, 0.0], vec![0.3, 0.7, 0.2], vec![5.0, 5.0]] {
            let sim = cosine_similarity(&a, &a);
            assert!((sim - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn cosine_similarity_handles_zero_vectors() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[0.0, 0.0]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 0.5]), 0.0);
    }

    #[test]
    fn cosine_similarity_returns_zero_on_dimension_mismatch() {
        assert_eq!(cosine_similarity(&[1.0, 0.0, 0.0], &[1.0, 0.0]), 0.0);
    }

    #[test]
    fn non_negative_vectors_stay_within_unit_range() {
        let samples = [
            vec![0.0, 0.1, 0.9, 1.0],
            vec![1.0, 0.0, 0.0, 0.0],
            vec![0.5, 0.5, 0.5, 0.5],
            vec![0.0, 0.0, 0.0, 0.2],
        ];
        for a in &samples {
            for b in &samples {
                let sim = cosine_similarity(a, b);
                assert!((0.0..=1.0 + 1e-12).contains(&sim), "sim={sim}");
            }
        }
    }

    #[test]
    fn weighted_career_against_single_held_skill() {
        // user=[1,0,0], career=[1,0.5,0] → 1 / √1.25
        let sim = cosine_similarity(&[1.0, 0.0, 0.0], &[1.0, 0.5, 0.0]);
        assert!((sim - 0.894_427_191).abs() < 1e-9);
    }

    #[test]
    fn sparse_form_matches_dense_form() {
        let index = SkillIndex::build(&[1, 2, 3, 4]);
        let user = UserVector::build(&index, &[1, 3]);
        let careers = build_career_vectors(
            &index,
            &[
                CareerSkillWeight { career_id: 1, skill_id: 1, weight: 1.0 },
                CareerSkillWeight { career_id: 1, skill_id: 2, weight: 0.5 },
                CareerSkillWeight { career_id: 2, skill_id: 4, weight: 0.7 },
                CareerSkillWeight { career_id: 3, skill_id: 3, weight: 0.3 },
                CareerSkillWeight { career_id: 3, skill_id: 4, weight: 0.9 },
            ],
        );

        for career in &careers {
            let dense = cosine_similarity(user.as_slice(), &career.to_dense(index.len()));
            let sparse = sparse_cosine_similarity(&user, career);
            assert!((dense - sparse).abs() < 1e-12);
        }
    }
}
