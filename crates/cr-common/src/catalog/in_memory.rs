use std::{
    collections::HashSet,
    path::Path,
    sync::{Arc, RwLock},
};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{
    CareerDirectory, CatalogError, CatalogProvider, CatalogSnapshot, CatalogView, CourseCatalog,
    SkillGraphSource,
};
use crate::{Career, CareerId, CareerSkillWeight, Course, Skill, SkillId};

/// Whole-catalog document, also the JSON format accepted by `from_json_file`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogData {
    pub skills: Vec<Skill>,
    pub careers: Vec<Career>,
    pub career_skills: Vec<CareerSkillWeight>,
    pub courses: Vec<Course>,
}

impl CatalogData {
    fn skill_ids_for_career(&self, career_id: CareerId) -> HashSet<SkillId> {
        self.career_skills
            .iter()
            .filter(|row| row.career_id == career_id)
            .map(|row| row.skill_id)
            .collect()
    }

    /// Courses linked to any skill of the career, each at most once, easiest
    /// first, then by course id.
    pub fn courses_for_career(&self, career_id: CareerId, limit: Option<usize>) -> Vec<Course> {
        let skills = self.skill_ids_for_career(career_id);

        let mut courses: Vec<Course> = self
            .courses
            .iter()
            .filter(|course| course.skill_id.is_some_and(|id| skills.contains(&id)))
            .cloned()
            .collect();

        courses.sort_by_key(|course| (course.difficulty, course.id));
        if let Some(limit) = limit {
            courses.truncate(limit);
        }
        courses
    }
}

/// Catalog held in memory as an immutable `Arc<CatalogData>`.
///
/// `pin` clones the current `Arc` once and the view reads only from it;
/// `replace` swaps in a whole new document. Readers never observe a
/// half-applied update.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    data: RwLock<Arc<CatalogData>>,
}

impl InMemoryCatalog {
    pub fn new(data: CatalogData) -> Self {
        Self {
            data: RwLock::new(Arc::new(data)),
        }
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(raw)?;
        Ok(Self::new(data))
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&raw)?;
        let current = catalog.current();
        info!(
            path = %path.display(),
            skills = current.skills.len(),
            careers = current.careers.len(),
            career_skills = current.career_skills.len(),
            courses = current.courses.len(),
            "loaded catalog document"
        );
        Ok(catalog)
    }

    /// Current catalog version.
    pub fn current(&self) -> Arc<CatalogData> {
        let guard = self.data.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        Arc::clone(&*guard)
    }

    /// View over the current catalog version.
    pub fn pinned(&self) -> PinnedCatalog {
        PinnedCatalog::new(self.current())
    }

    pub fn replace(&self, data: CatalogData) {
        let mut guard = self
            .data
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Arc::new(data);
        debug!("catalog replaced");
    }
}

#[async_trait]
impl CatalogProvider for InMemoryCatalog {
    async fn pin(&self) -> Result<Box<dyn CatalogView>, CatalogError> {
        Ok(Box::new(self.pinned()))
    }
}

/// One frozen catalog version.
#[derive(Debug, Clone)]
pub struct PinnedCatalog {
    data: Arc<CatalogData>,
}

impl PinnedCatalog {
    pub fn new(data: Arc<CatalogData>) -> Self {
        Self { data }
    }
}

#[async_trait]
impl SkillGraphSource for PinnedCatalog {
    async fn snapshot(&self) -> Result<CatalogSnapshot, CatalogError> {
        Ok(CatalogSnapshot::new(
            self.data.skills.iter().map(|skill| skill.id).collect(),
            self.data.career_skills.clone(),
        ))
    }
}

#[async_trait]
impl CareerDirectory for PinnedCatalog {
    async fn all_careers(&self) -> Result<Vec<Career>, CatalogError> {
        Ok(self.data.careers.clone())
    }

    async fn careers_by_ids(&self, ids: &[CareerId]) -> Result<Vec<Career>, CatalogError> {
        let wanted: HashSet<CareerId> = ids.iter().copied().collect();
        Ok(self
            .data
            .careers
            .iter()
            .filter(|career| wanted.contains(&career.id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl CourseCatalog for PinnedCatalog {
    async fn courses_for_career(
        &self,
        career_id: CareerId,
        limit: Option<usize>,
    ) -> Result<Vec<Course>, CatalogError> {
        Ok(self.data.courses_for_career(career_id, limit))
    }
}

impl CatalogView for PinnedCatalog {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CareerCategory, Difficulty, EducationTier};

    fn career(id: CareerId, category: CareerCategory) -> Career {
        Career {
            id,
            title: format!("career-{id}"),
            description: String::new(),
            category,
            min_education: EducationTier::None,
        }
    }

    fn course(id: i64, skill_id: SkillId, difficulty: Difficulty) -> Course {
        Course {
            id,
            title: format!("course-{id}"),
            link: format!("https://courses.example/{id}"),
            platform: "Udemy".into(),
            skill_id: Some(skill_id),
            difficulty,
        }
    }

    fn data() -> CatalogData {
        CatalogData {
            skills: vec![
                Skill { id: 1, name: "Wiring".into(), category: None },
                Skill { id: 2, name: "Safety".into(), category: None },
                Skill { id: 3, name: "Drawing".into(), category: None },
            ],
            careers: vec![
                career(10, CareerCategory::Trade),
                career(11, CareerCategory::Creative),
            ],
            career_skills: vec![
                CareerSkillWeight { career_id: 10, skill_id: 1, weight: 1.0 },
                CareerSkillWeight { career_id: 10, skill_id: 2, weight: 0.4 },
                CareerSkillWeight { career_id: 11, skill_id: 3, weight: 0.9 },
            ],
            courses: vec![
                course(100, 1, Difficulty::Advanced),
                course(101, 2, Difficulty::Beginner),
                course(102, 1, Difficulty::Intermediate),
                course(103, 3, Difficulty::Beginner),
                Course { skill_id: None, ..course(104, 0, Difficulty::Beginner) },
            ],
        }
    }

    #[tokio::test]
    async fn orders_courses_by_difficulty_and_limits() {
        let catalog = InMemoryCatalog::new(data()).pinned();

        let sample = catalog.courses_for_career(10, Some(2)).await.unwrap();
        let ids: Vec<_> = sample.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![101, 102]);

        let roadmap = catalog.courses_for_career(10, None).await.unwrap();
        let ids: Vec<_> = roadmap.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![101, 102, 100]);

        assert!(catalog.courses_for_career(99, None).await.unwrap().is_empty());
    }

    #[test]
    fn repeated_career_skill_rows_do_not_repeat_courses() {
        let mut data = data();
        data.career_skills
            .push(CareerSkillWeight { career_id: 10, skill_id: 1, weight: 0.7 });

        let ids: Vec<_> = data
            .courses_for_career(10, None)
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec![101, 102, 100]);
    }

    #[tokio::test]
    async fn pinned_view_is_unaffected_by_later_replace() {
        let catalog = InMemoryCatalog::new(data());
        let view = catalog.pin().await.unwrap();

        catalog.replace(CatalogData::default());

        let snapshot = view.snapshot().await.unwrap();
        assert_eq!(snapshot.skill_ids, vec![1, 2, 3]);
        assert_eq!(snapshot.weights.len(), 3);
        assert_eq!(view.all_careers().await.unwrap().len(), 2);
        assert_eq!(view.courses_for_career(10, None).await.unwrap().len(), 3);
        view.release().await.unwrap();

        let fresh = catalog.pin().await.unwrap();
        assert!(fresh.snapshot().await.unwrap().skill_ids.is_empty());
        assert!(fresh.all_careers().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn careers_by_ids_skips_unknown_ids() {
        let catalog = InMemoryCatalog::new(data()).pinned();

        let careers = catalog.careers_by_ids(&[11, 42]).await.unwrap();
        assert_eq!(careers.len(), 1);
        assert_eq!(careers[0].id, 11);

        let all = catalog.all_careers().await.unwrap();
        assert_eq!(all.iter().map(|c| c.id).collect::<Vec<_>>(), vec![10, 11]);
    }

    #[test]
    fn loads_catalog_document_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, serde_json::to_string(&data()).unwrap()).unwrap();

        let catalog = InMemoryCatalog::from_json_file(&path).unwrap();
        assert_eq!(*catalog.current(), data());

        let missing = InMemoryCatalog::from_json_file(dir.path().join("missing.json"));
        assert!(matches!(missing, Err(CatalogError::Io(_))));
    }
}
