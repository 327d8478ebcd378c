use serde::{Deserialize, Serialize};
use strum::AsRefStr;

/// Categorical answers collected by the assessment questionnaire.
///
/// Every field is optional. A missing field, or a value outside the known set
/// (deserialized as `Unrecognized`), disables the rule clauses that read it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuestionnaireAnswers {
    pub work_type: Option<WorkType>,
    pub environment: Option<Environment>,
    pub time: Option<TimeCommitment>,
    pub social: Option<SocialPreference>,
    pub creativity: Option<Creativity>,
    pub structure: Option<Structure>,
    pub education: Option<EducationLevel>,
    pub current_status: Option<CurrentStatus>,
    pub hobby: Option<Hobby>,
    pub value: Option<CoreValue>,
}

impl QuestionnaireAnswers {
    /// "High School" education with a "Short" time horizon.
    pub fn is_short_track_high_school(&self) -> bool {
        self.education == Some(EducationLevel::HighSchool)
            && self.time == Some(TimeCommitment::Short)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr)]
pub enum WorkType {
    Practical,
    Theoretical,
    Digital,
    #[serde(other)]
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr)]
pub enum Environment {
    Indoor,
    Outdoor,
    #[serde(other)]
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr)]
pub enum TimeCommitment {
    Short,
    Long,
    #[serde(other)]
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr)]
pub enum SocialPreference {
    Team,
    Solo,
    #[serde(other)]
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr)]
pub enum Creativity {
    Logical,
    Creative,
    #[serde(other)]
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr)]
pub enum Structure {
    Fixed,
    Flexible,
    #[serde(other)]
    Unrecognized,
}

/// The respondent's own highest education (not a career requirement).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr)]
pub enum EducationLevel {
    #[serde(rename = "High School")]
    #[strum(serialize = "High School")]
    HighSchool,
    Diploma,
    Bachelor,
    Master,
    #[serde(other)]
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr)]
pub enum CurrentStatus {
    Student,
    #[serde(rename = "Job Seeker")]
    #[strum(serialize = "Job Seeker")]
    JobSeeker,
    #[serde(rename = "Working Professional")]
    #[strum(serialize = "Working Professional")]
    WorkingProfessional,
    #[serde(rename = "Gap Year")]
    #[strum(serialize = "Gap Year")]
    GapYear,
    #[serde(other)]
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr)]
pub enum Hobby {
    Gaming,
    Art,
    Social,
    Fixing,
    Reading,
    Sports,
    #[serde(other)]
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr)]
pub enum CoreValue {
    #[serde(rename = "High Pay")]
    #[strum(serialize = "High Pay")]
    HighPay,
    #[serde(rename = "WLB")]
    #[strum(serialize = "WLB")]
    WorkLifeBalance,
    Impact,
    Passion,
    #[serde(other)]
    Unrecognized,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_questionnaire_wire_format() {
        let answers: QuestionnaireAnswers = serde_json::from_str(
            r#"{
                "workType": "Practical",
                "environment": "Indoor",
                "time": "Short",
                "social": "Team",
                "creativity": "Logical",
                "structure": "Fixed",
                "education": "High School",
                "currentStatus": "Job Seeker",
                "hobby": "Gaming",
                "value": "High Pay"
            }"#,
        )
        .unwrap();

        assert_eq!(answers.work_type, Some(WorkType::Practical));
        assert_eq!(answers.education, Some(EducationLevel::HighSchool));
        assert_eq!(answers.current_status, Some(CurrentStatus::JobSeeker));
        assert_eq!(answers.value, Some(CoreValue::HighPay));
        assert!(answers.is_short_track_high_school());
    }

    #[test]
    fn unknown_and_missing_fields_are_tolerated() {
        let answers: QuestionnaireAnswers =
            serde_json::from_str(r#"{"hobby": "Knitting", "value": "WLB", "extra": 1}"#).unwrap();

        assert_eq!(answers.hobby, Some(Hobby::Unrecognized));
        assert_eq!(answers.value, Some(CoreValue::WorkLifeBalance));
        assert_eq!(answers.work_type, None);
        assert!(!answers.is_short_track_high_school());
    }
}
