pub mod boost;
pub mod cold_start;
pub mod eligibility;
pub mod enrichment;
pub mod interaction;
pub mod pipeline;
pub mod ranker;
pub mod rules;
pub mod similarity;
pub mod skill_index;
pub mod vectors;

pub use boost::{BoostOutcome, BoostPolicy};
pub use eligibility::{EligibilityDecision, EligibilityResult};
pub use pipeline::{RecommendError, Recommender};
