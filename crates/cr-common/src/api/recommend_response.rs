use serde::{Deserialize, Serialize};

use crate::{Career, Course, Difficulty};

/// Engine output. Serializes as `{ "type": "...", "recommendations": [...] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RecommendResponse {
    /// Raw career records in catalog order, unscored.
    ColdStart { recommendations: Vec<Career> },
    Skilled {
        recommendations: Vec<SkilledRecommendation>,
    },
}

impl RecommendResponse {
    pub fn len(&self) -> usize {
        match self {
            Self::ColdStart { recommendations } => recommendations.len(),
            Self::Skilled { recommendations } => recommendations.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::ColdStart { .. } => "cold_start",
            Self::Skilled { .. } => "skilled",
        }
    }
}

/// Career record augmented with its (possibly boosted) score and sample courses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkilledRecommendation {
    #[serde(flatten)]
    pub career: Career,
    pub score: f64,
    pub sample_courses: Vec<CourseSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSummary {
    pub title: String,
    pub link: String,
    pub platform: String,
    pub difficulty: Difficulty,
}

impl From<&Course> for CourseSummary {
    fn from(course: &Course) -> Self {
        Self {
            title: course.title.clone(),
            link: course.link.clone(),
            platform: course.platform.clone(),
            difficulty: course.difficulty,
        }
    }
}
