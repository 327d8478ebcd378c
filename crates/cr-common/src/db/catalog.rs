use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use deadpool_postgres::Client;
use tokio_postgres::Row;
use tracing::{debug, instrument, warn};

use super::{PgPool, util::TimedClientExt};
use crate::{
    Career, CareerCategory, CareerId, CareerSkillWeight, Course, Difficulty, EducationTier,
    catalog::{
        CareerDirectory, CatalogError, CatalogProvider, CatalogSnapshot, CatalogView,
        CourseCatalog, SkillGraphSource,
    },
};

const BEGIN_PINNED_READ_SQL: &str = "BEGIN ISOLATION LEVEL REPEATABLE READ READ ONLY";

const SKILL_IDS_SQL: &str = "SELECT id::BIGINT AS id FROM skills ORDER BY id";

const CAREER_SKILLS_SQL: &str = r#"
SELECT
    career_id::BIGINT AS career_id,
    skill_id::BIGINT AS skill_id,
    weight::FLOAT8 AS weight
FROM career_skills
"#;

const CAREER_COLUMNS: &str = r#"
    id::BIGINT AS id,
    title,
    COALESCE(description, '') AS description,
    category,
    min_education
"#;

const COURSES_FOR_CAREER_SQL: &str = r#"
SELECT
    c.id::BIGINT AS id,
    c.title,
    COALESCE(c.link, '') AS link,
    COALESCE(c.platform, '') AS platform,
    c.skill_id::BIGINT AS skill_id,
    c.difficulty
FROM courses c
WHERE c.skill_id IN (
    SELECT cs.skill_id FROM career_skills cs WHERE cs.career_id = $1
)
ORDER BY
    CASE c.difficulty
        WHEN 'Beginner' THEN 0
        WHEN 'Intermediate' THEN 1
        WHEN 'Advanced' THEN 2
        ELSE 3
    END,
    c.id
LIMIT $2
"#;

/// Catalog provider backed by the `skills`, `careers`, `career_skills` and
/// `courses` tables.
#[derive(Clone)]
pub struct PgCatalog {
    pool: PgPool,
}

impl PgCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogProvider for PgCatalog {
    /// Opens a REPEATABLE READ READ ONLY transaction on a dedicated
    /// connection. Every read through the returned view shares its snapshot.
    #[instrument(skip(self))]
    async fn pin(&self) -> Result<Box<dyn CatalogView>, CatalogError> {
        let client = self.pool.get().await?;
        client.batch_execute(BEGIN_PINNED_READ_SQL).await?;
        Ok(Box::new(PgCatalogView::new(client)))
    }
}

/// Reads inside one open snapshot transaction.
///
/// `release` commits and hands the connection back to the pool. A view dropped
/// without `release` takes its connection out of the pool instead, so the open
/// transaction dies with it.
pub struct PgCatalogView {
    client: Option<Client>,
    released: AtomicBool,
}

impl PgCatalogView {
    fn new(client: Client) -> Self {
        Self {
            client: Some(client),
            released: AtomicBool::new(false),
        }
    }

    fn client(&self) -> Result<&Client, CatalogError> {
        match (&self.client, self.released.load(Ordering::Acquire)) {
            (Some(client), false) => Ok(client),
            _ => Err(CatalogError::Unavailable("catalog view already released".into())),
        }
    }
}

impl Drop for PgCatalogView {
    fn drop(&mut self) {
        if self.released.load(Ordering::Acquire) {
            return;
        }
        if let Some(client) = self.client.take() {
            warn!("catalog view dropped mid-transaction; discarding its connection");
            drop(Client::take(client));
        }
    }
}

fn required_text(column: &str, value: Option<String>) -> Result<String, CatalogError> {
    value.ok_or_else(|| CatalogError::Mapping(format!("{column} is NULL")))
}

fn parse_difficulty(label: Option<String>) -> Result<Difficulty, CatalogError> {
    let label = required_text("difficulty", label)?;
    Difficulty::from_label(&label)
        .ok_or_else(|| CatalogError::Mapping(format!("unknown course difficulty: {label}")))
}

fn map_career(row: &Row) -> Result<Career, CatalogError> {
    Ok(Career {
        id: row.try_get("id")?,
        title: required_text("career title", row.try_get("title")?)?,
        description: row
            .try_get::<_, Option<String>>("description")?
            .unwrap_or_default(),
        category: row
            .try_get::<_, Option<String>>("category")?
            .as_deref()
            .map(CareerCategory::from_label)
            .unwrap_or(CareerCategory::Other),
        min_education: row
            .try_get::<_, Option<String>>("min_education")?
            .as_deref()
            .map(EducationTier::from_label)
            .unwrap_or(EducationTier::Unknown),
    })
}

fn map_course(row: &Row) -> Result<Course, CatalogError> {
    Ok(Course {
        id: row.try_get("id")?,
        title: required_text("course title", row.try_get("title")?)?,
        link: row.try_get::<_, Option<String>>("link")?.unwrap_or_default(),
        platform: row
            .try_get::<_, Option<String>>("platform")?
            .unwrap_or_default(),
        skill_id: row.try_get("skill_id")?,
        difficulty: parse_difficulty(row.try_get("difficulty")?)?,
    })
}

fn map_weight(row: &Row) -> Result<CareerSkillWeight, CatalogError> {
    Ok(CareerSkillWeight {
        career_id: row.try_get("career_id")?,
        skill_id: row.try_get("skill_id")?,
        weight: row.try_get::<_, Option<f64>>("weight")?.unwrap_or_default(),
    })
}

#[async_trait]
impl SkillGraphSource for PgCatalogView {
    #[instrument(skip(self))]
    async fn snapshot(&self) -> Result<CatalogSnapshot, CatalogError> {
        let client = self.client()?;

        let skill_ids = client
            .timed_query_cached(SKILL_IDS_SQL, &[], "snapshot_skill_ids")
            .await?
            .iter()
            .map(|row| row.try_get::<_, i64>("id"))
            .collect::<Result<Vec<_>, _>>()?;

        let weights = client
            .timed_query_cached(CAREER_SKILLS_SQL, &[], "snapshot_career_skills")
            .await?
            .iter()
            .map(map_weight)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            skills = skill_ids.len(),
            career_skills = weights.len(),
            "captured catalog snapshot"
        );
        Ok(CatalogSnapshot::new(skill_ids, weights))
    }
}

#[async_trait]
impl CareerDirectory for PgCatalogView {
    #[instrument(skip(self))]
    async fn all_careers(&self) -> Result<Vec<Career>, CatalogError> {
        let query = format!("SELECT {CAREER_COLUMNS} FROM careers ORDER BY id");
        let rows = self
            .client()?
            .timed_query_cached(&query, &[], "all_careers")
            .await?;
        rows.iter().map(map_career).collect()
    }

    #[instrument(skip(self, ids), fields(ids = ids.len()))]
    async fn careers_by_ids(&self, ids: &[CareerId]) -> Result<Vec<Career>, CatalogError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let query =
            format!("SELECT {CAREER_COLUMNS} FROM careers WHERE id::BIGINT = ANY($1::BIGINT[])");
        let ids = ids.to_vec();
        let rows = self
            .client()?
            .timed_query_cached(&query, &[&ids], "careers_by_ids")
            .await?;
        rows.iter().map(map_career).collect()
    }
}

#[async_trait]
impl CourseCatalog for PgCatalogView {
    #[instrument(skip(self))]
    async fn courses_for_career(
        &self,
        career_id: CareerId,
        limit: Option<usize>,
    ) -> Result<Vec<Course>, CatalogError> {
        // LIMIT NULL is "no limit".
        let limit = limit.map(|l| l as i64);
        let rows = self
            .client()?
            .timed_query_cached(
                COURSES_FOR_CAREER_SQL,
                &[&career_id, &limit],
                "courses_for_career",
            )
            .await?;
        rows.iter().map(map_course).collect()
    }
}

#[async_trait]
impl CatalogView for PgCatalogView {
    async fn release(&self) -> Result<(), CatalogError> {
        self.client()?.batch_execute("COMMIT").await?;
        self.released.store(true, Ordering::Release);
        Ok(())
    }
}
