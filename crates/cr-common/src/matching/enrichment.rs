use std::collections::HashMap;

use futures::future::try_join_all;
use tracing::debug;

use super::ranker::ScoredCareer;
use crate::{
    Career, Course,
    catalog::{CareerDirectory, CatalogError, CourseCatalog},
};

/// Ranked candidate joined with its career record and sample courses.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedCandidate {
    pub career: Career,
    pub score: f64,
    pub courses: Vec<Course>,
}

/// Fetch career details for the ranked candidates and up to `course_limit`
/// courses for each, all from the same `catalog`. Course lookups run
/// concurrently; the first failure fails the whole call. Output keeps the
/// ranked order; candidates the directory does not know are dropped.
pub async fn enrich_candidates<C>(
    catalog: &C,
    ranked: &[ScoredCareer],
    course_limit: usize,
) -> Result<Vec<EnrichedCandidate>, CatalogError>
where
    C: CareerDirectory + CourseCatalog + ?Sized,
{
    if ranked.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<_> = ranked.iter().map(|r| r.career_id).collect();
    let mut details: HashMap<_, _> = catalog
        .careers_by_ids(&ids)
        .await?
        .into_iter()
        .map(|career| (career.id, career))
        .collect();

    let joined: Vec<_> = ranked
        .iter()
        .filter_map(|r| details.remove(&r.career_id).map(|career| (career, r.score)))
        .collect();

    if joined.len() < ranked.len() {
        debug!(
            ranked = ranked.len(),
            found = joined.len(),
            "some ranked careers have no detail record"
        );
    }

    let lookups = joined
        .iter()
        .map(|(career, _)| catalog.courses_for_career(career.id, Some(course_limit)));
    let course_lists = try_join_all(lookups).await?;

    Ok(joined
        .into_iter()
        .zip(course_lists)
        .map(|((career, score), courses)| EnrichedCandidate {
            career,
            score,
            courses,
        })
        .collect())
}
