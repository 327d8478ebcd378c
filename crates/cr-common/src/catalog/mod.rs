pub mod in_memory;
pub mod split;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use deadpool_postgres::PoolError;
use thiserror::Error;
use tokio_postgres::Error as PgError;

use crate::{Career, CareerId, CareerSkillWeight, Course, SkillId};
pub use in_memory::{CatalogData, InMemoryCatalog, PinnedCatalog};
pub use split::SplitCatalog;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to get postgres connection: {0}")]
    Pool(#[from] PoolError),
    #[error("postgres error: {0}")]
    Postgres(#[from] PgError),
    #[error("failed to map catalog row: {0}")]
    Mapping(String),
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

/// Skill catalog and career-skill weights captured by one consistent read.
///
/// A computation builds its vector space from exactly one snapshot, so the
/// dimension count stays fixed even if the catalog changes underneath it.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    pub skill_ids: Vec<SkillId>,
    pub weights: Vec<CareerSkillWeight>,
    pub captured_at: DateTime<Utc>,
}

impl CatalogSnapshot {
    pub fn new(skill_ids: Vec<SkillId>, weights: Vec<CareerSkillWeight>) -> Self {
        Self {
            skill_ids,
            weights,
            captured_at: Utc::now(),
        }
    }
}

/// Skill catalog provider + career-skill weight provider.
#[async_trait]
pub trait SkillGraphSource: Send + Sync {
    async fn snapshot(&self) -> Result<CatalogSnapshot, CatalogError>;
}

/// Career detail provider.
#[async_trait]
pub trait CareerDirectory: Send + Sync {
    /// Every career, in catalog order.
    async fn all_careers(&self) -> Result<Vec<Career>, CatalogError>;

    /// Careers for the given ids. Unknown ids are skipped; order is unspecified.
    async fn careers_by_ids(&self, ids: &[CareerId]) -> Result<Vec<Career>, CatalogError>;
}

/// Course catalog provider.
#[async_trait]
pub trait CourseCatalog: Send + Sync {
    /// Courses attached to any skill of the career, ordered by difficulty
    /// (Beginner first) then course id. `None` returns all of them.
    async fn courses_for_career(
        &self,
        career_id: CareerId,
        limit: Option<usize>,
    ) -> Result<Vec<Course>, CatalogError>;
}

/// All three provider roles answered from one pinned catalog version.
///
/// Every read made through a view sees the same data, however the catalog
/// changes after `CatalogProvider::pin` returned it.
#[async_trait]
pub trait CatalogView: SkillGraphSource + CareerDirectory + CourseCatalog {
    /// Close the view once the computation is done with it. Dropping a view
    /// without calling this abandons it.
    async fn release(&self) -> Result<(), CatalogError> {
        Ok(())
    }
}

/// Hands out views pinned to the catalog version current at the call.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    async fn pin(&self) -> Result<Box<dyn CatalogView>, CatalogError>;
}
