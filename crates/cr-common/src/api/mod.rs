pub mod questionnaire;
pub mod recommend_request;
pub mod recommend_response;

pub use questionnaire::{
    CoreValue, Creativity, CurrentStatus, EducationLevel, Environment, Hobby, QuestionnaireAnswers,
    SocialPreference, Structure, TimeCommitment, WorkType,
};
pub use recommend_request::{RecommendMode, RecommendRequest};
pub use recommend_response::{CourseSummary, RecommendResponse, SkilledRecommendation};
