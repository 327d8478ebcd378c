use std::sync::Arc;

use async_trait::async_trait;

use super::{
    CareerDirectory, CatalogError, CatalogProvider, CatalogSnapshot, CatalogView, CourseCatalog,
    SkillGraphSource,
};
use crate::{Career, CareerId, Course};

/// Three independently supplied providers behind one `CatalogProvider`.
///
/// No pinning happens across the three: each provider is expected to serve
/// fixed data for as long as a computation runs (fixtures, stubs, a frozen
/// `PinnedCatalog`).
#[derive(Clone)]
pub struct SplitCatalog {
    skills: Arc<dyn SkillGraphSource>,
    careers: Arc<dyn CareerDirectory>,
    courses: Arc<dyn CourseCatalog>,
}

impl SplitCatalog {
    pub fn new(
        skills: Arc<dyn SkillGraphSource>,
        careers: Arc<dyn CareerDirectory>,
        courses: Arc<dyn CourseCatalog>,
    ) -> Self {
        Self {
            skills,
            careers,
            courses,
        }
    }
}

#[async_trait]
impl SkillGraphSource for SplitCatalog {
    async fn snapshot(&self) -> Result<CatalogSnapshot, CatalogError> {
        self.skills.snapshot().await
    }
}

#[async_trait]
impl CareerDirectory for SplitCatalog {
    async fn all_careers(&self) -> Result<Vec<Career>, CatalogError> {
        self.careers.all_careers().await
    }

    async fn careers_by_ids(&self, ids: &[CareerId]) -> Result<Vec<Career>, CatalogError> {
        self.careers.careers_by_ids(ids).await
    }
}

#[async_trait]
impl CourseCatalog for SplitCatalog {
    async fn courses_for_career(
        &self,
        career_id: CareerId,
        limit: Option<usize>,
    ) -> Result<Vec<Course>, CatalogError> {
        self.courses.courses_for_career(career_id, limit).await
    }
}

impl CatalogView for SplitCatalog {}

#[async_trait]
impl CatalogProvider for SplitCatalog {
    async fn pin(&self) -> Result<Box<dyn CatalogView>, CatalogError> {
        Ok(Box::new(self.clone()))
    }
}
