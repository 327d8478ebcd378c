pub mod api;
pub mod catalog;
pub mod config;
pub mod db;
pub mod logging;
pub mod matching;
pub mod run_id;

use serde::{Deserialize, Serialize};
use strum::AsRefStr;

pub type SkillId = i64;
pub type CareerId = i64;
pub type CourseId = i64;

// Commonly used data models for recommendation functions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: SkillId,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
}

/// Curated association between a career and one of its skills (weight in 0.0〜1.0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CareerSkillWeight {
    pub career_id: CareerId,
    pub skill_id: SkillId,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Career {
    pub id: CareerId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: CareerCategory,
    pub min_education: EducationTier,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr)]
pub enum CareerCategory {
    Trade,
    Technical,
    Creative,
    Service,
    Business,
    Education,
    Health,
    /// Any category label outside the known set. Never matches a rule clause.
    #[serde(other)]
    Other,
}

impl CareerCategory {
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Trade" => Self::Trade,
            "Technical" => Self::Technical,
            "Creative" => Self::Creative,
            "Service" => Self::Service,
            "Business" => Self::Business,
            "Education" => Self::Education,
            "Health" => Self::Health,
            _ => Self::Other,
        }
    }
}

/// Minimum education a career asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr)]
pub enum EducationTier {
    None,
    #[serde(rename = "High School/Cert")]
    #[strum(serialize = "High School/Cert")]
    HighSchoolCert,
    #[serde(rename = "Diploma/Bootcamp")]
    #[strum(serialize = "Diploma/Bootcamp")]
    DiplomaBootcamp,
    Apprenticeship,
    Bachelor,
    Master,
    #[serde(other)]
    Unknown,
}

impl EducationTier {
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "None" => Self::None,
            "High School/Cert" => Self::HighSchoolCert,
            "Diploma/Bootcamp" => Self::DiplomaBootcamp,
            "Apprenticeship" => Self::Apprenticeship,
            "Bachelor" => Self::Bachelor,
            "Master" => Self::Master,
            _ => Self::Unknown,
        }
    }
}

/// Course difficulty. Declaration order is the roadmap order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, AsRefStr,
)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "Beginner" => Some(Self::Beginner),
            "Intermediate" => Some(Self::Intermediate),
            "Advanced" => Some(Self::Advanced),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub skill_id: Option<SkillId>,
    pub difficulty: Difficulty,
}
