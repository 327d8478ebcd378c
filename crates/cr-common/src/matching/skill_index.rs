use std::collections::HashMap;

use crate::SkillId;

/// Bijection between catalog skill ids and vector dimensions `0..N`.
///
/// Built fresh from one snapshot per computation; dimensions are assigned in
/// first-seen order and duplicate ids collapse onto their first dimension.
#[derive(Debug, Clone, Default)]
pub struct SkillIndex {
    dimensions: HashMap<SkillId, usize>,
    skills: Vec<SkillId>,
}

impl SkillIndex {
    pub fn build(skill_ids: &[SkillId]) -> Self {
        let mut index = Self {
            dimensions: HashMap::with_capacity(skill_ids.len()),
            skills: Vec::with_capacity(skill_ids.len()),
        };

        for &id in skill_ids {
            if !index.dimensions.contains_key(&id) {
                index.dimensions.insert(id, index.skills.len());
                index.skills.push(id);
            }
        }

        index
    }

    /// Vector length N.
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn dimension(&self, skill_id: SkillId) -> Option<usize> {
        self.dimensions.get(&skill_id).copied()
    }

    pub fn skill_at(&self, dimension: usize) -> Option<SkillId> {
        self.skills.get(dimension).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assigns_dense_dimensions_in_catalog_order() {
        let index = SkillIndex::build(&[30, 10, 20]);

        assert_eq!(index.len(), 3);
        assert_eq!(index.dimension(30), Some(0));
        assert_eq!(index.dimension(10), Some(1));
        assert_eq!(index.dimension(20), Some(2));
        assert_eq!(index.dimension(99), None);
    }

    #[test]
    fn mapping_is_bijective_even_with_duplicates() {
        let index = SkillIndex::build(&[5, 7, 5, 9, 7]);

        assert_eq!(index.len(), 3);
        for dim in 0..index.len() {
            let skill = index.skill_at(dim).unwrap();
            assert_eq!(index.dimension(skill), Some(dim));
        }
        assert_eq!(index.skill_at(3), None);
    }

    #[test]
    fn empty_catalog_has_no_dimensions() {
        let index = SkillIndex::build(&[]);
        assert!(index.is_empty());
        assert_eq!(index.dimension(1), None);
    }
}
