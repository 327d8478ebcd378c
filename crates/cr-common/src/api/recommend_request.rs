use serde::{Deserialize, Serialize};

use super::questionnaire::QuestionnaireAnswers;
use crate::SkillId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendMode {
    ColdStart,
    Skilled,
}

/// Recommendation request handed to the engine by the enclosing request boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendRequest {
    #[serde(alias = "assessmentType")]
    pub mode: RecommendMode,
    /// Held skills (binary presence). Ids unknown to the catalog are ignored.
    #[serde(default, alias = "heldSkillIds", alias = "skills")]
    pub held_skill_ids: Vec<SkillId>,
    #[serde(default)]
    pub answers: Option<QuestionnaireAnswers>,
}

impl RecommendRequest {
    pub fn cold_start(answers: QuestionnaireAnswers) -> Self {
        Self {
            mode: RecommendMode::ColdStart,
            held_skill_ids: Vec::new(),
            answers: Some(answers),
        }
    }

    pub fn skilled(held_skill_ids: Vec<SkillId>, answers: Option<QuestionnaireAnswers>) -> Self {
        Self {
            mode: RecommendMode::Skilled,
            held_skill_ids,
            answers,
        }
    }
}
