use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, error, info, instrument};

use super::{
    cold_start::select_cold_start,
    enrichment::{EnrichedCandidate, enrich_candidates},
    interaction::apply_interactions,
    ranker::{RankerConfig, SimilarityRanker, rank_order},
    skill_index::SkillIndex,
    vectors::{UserVector, build_career_vectors},
};
use crate::{
    Career, CareerId, Course, SkillId,
    api::{
        CourseSummary, QuestionnaireAnswers, RecommendMode, RecommendRequest, RecommendResponse,
        SkilledRecommendation,
    },
    catalog::{
        CareerDirectory, CatalogError, CatalogProvider, CatalogView, CourseCatalog,
        SkillGraphSource, SplitCatalog,
    },
    config::RecommenderConfig,
    run_id,
};

/// The only failure callers see. The collaborator error is kept as `source`.
#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("failed to generate recommendations")]
    Failed(#[from] CatalogError),
}

/// Recommendation engine over an injected catalog provider.
///
/// Holds no per-request state: every call pins its own catalog view and
/// rebuilds the skill index and vectors from it, so one instance can serve
/// concurrent requests.
pub struct Recommender {
    catalog: Arc<dyn CatalogProvider>,
    ranker: SimilarityRanker,
    config: RecommenderConfig,
}

impl Recommender {
    /// Separately supplied collaborators, each serving fixed data.
    pub fn new(
        skills: Arc<dyn SkillGraphSource>,
        careers: Arc<dyn CareerDirectory>,
        courses: Arc<dyn CourseCatalog>,
        config: RecommenderConfig,
    ) -> Self {
        Self::from_catalog(Arc::new(SplitCatalog::new(skills, careers, courses)), config)
    }

    /// One catalog serving all three collaborator roles from a pinned view.
    pub fn from_catalog<C>(catalog: Arc<C>, config: RecommenderConfig) -> Self
    where
        C: CatalogProvider + 'static,
    {
        let ranker = SimilarityRanker::new(RankerConfig {
            max_candidates: config.candidate_limit,
        });

        Self {
            catalog,
            ranker,
            config,
        }
    }

    pub fn config(&self) -> &RecommenderConfig {
        &self.config
    }

    #[instrument(
        skip_all,
        fields(computation_id = %run_id::generate(), mode = ?request.mode)
    )]
    pub async fn recommend(
        &self,
        request: &RecommendRequest,
    ) -> Result<RecommendResponse, RecommendError> {
        match self.compute(request).await {
            Ok(response) => {
                info!(
                    kind = response.kind(),
                    count = response.len(),
                    "recommendations generated"
                );
                Ok(response)
            }
            Err(err) => {
                error!(error = %err, "catalog collaborator failed; computation aborted");
                Err(err.into())
            }
        }
    }

    /// Every course linked to the career's skills, Beginner first.
    #[instrument(skip(self))]
    pub async fn roadmap(&self, career_id: CareerId) -> Result<Vec<Course>, RecommendError> {
        match self.roadmap_courses(career_id).await {
            Ok(courses) => {
                info!(count = courses.len(), "roadmap generated");
                Ok(courses)
            }
            Err(err) => {
                error!(error = %err, "course catalog failed while building roadmap");
                Err(err.into())
            }
        }
    }

    /// Runs the whole request against one pinned view.
    async fn compute(&self, request: &RecommendRequest) -> Result<RecommendResponse, CatalogError> {
        let view = self.catalog.pin().await?;
        let answers = request.answers.as_ref();

        let response = match request.mode {
            RecommendMode::ColdStart => RecommendResponse::ColdStart {
                recommendations: self.cold_start(view.as_ref(), answers).await?,
            },
            RecommendMode::Skilled => RecommendResponse::Skilled {
                recommendations: self
                    .skilled(view.as_ref(), &request.held_skill_ids, answers)
                    .await?,
            },
        };

        view.release().await?;
        Ok(response)
    }

    async fn roadmap_courses(&self, career_id: CareerId) -> Result<Vec<Course>, CatalogError> {
        let view = self.catalog.pin().await?;
        let courses = view.courses_for_career(career_id, None).await?;
        view.release().await?;
        Ok(courses)
    }

    async fn cold_start(
        &self,
        view: &dyn CatalogView,
        answers: Option<&QuestionnaireAnswers>,
    ) -> Result<Vec<Career>, CatalogError> {
        let careers = view.all_careers().await?;
        let unanswered = QuestionnaireAnswers::default();

        Ok(select_cold_start(
            &careers,
            answers.unwrap_or(&unanswered),
            self.config.cold_start_limit,
        ))
    }

    async fn skilled(
        &self,
        view: &dyn CatalogView,
        held_skill_ids: &[SkillId],
        answers: Option<&QuestionnaireAnswers>,
    ) -> Result<Vec<SkilledRecommendation>, CatalogError> {
        let snapshot = view.snapshot().await?;

        let index = SkillIndex::build(&snapshot.skill_ids);
        let user = UserVector::build(&index, held_skill_ids);
        let career_vectors = build_career_vectors(&index, &snapshot.weights);
        let ranked = self.ranker.rank(&user, &career_vectors);

        debug!(
            dimensions = index.len(),
            careers = career_vectors.len(),
            ranked = ranked.len(),
            captured_at = %snapshot.captured_at,
            "similarity ranking complete"
        );

        let enriched =
            enrich_candidates(view, &ranked, self.config.sample_course_limit).await?;

        let mut scored: Vec<(EnrichedCandidate, f64)> = match answers {
            Some(answers) => apply_interactions(enriched, answers, self.config.boost_policy)
                .into_iter()
                .map(|adjusted| (adjusted.candidate, adjusted.adjusted_score))
                .collect(),
            None => enriched
                .into_iter()
                .map(|candidate| {
                    let score = candidate.score;
                    (candidate, score)
                })
                .collect(),
        };

        scored.sort_by(|(a, a_score), (b, b_score)| {
            rank_order(*a_score, a.career.id, *b_score, b.career.id)
        });
        scored.truncate(self.config.response_limit);

        Ok(scored
            .into_iter()
            .map(|(candidate, score)| SkilledRecommendation {
                sample_courses: candidate.courses.iter().map(CourseSummary::from).collect(),
                career: candidate.career,
                score,
            })
            .collect())
    }
}
