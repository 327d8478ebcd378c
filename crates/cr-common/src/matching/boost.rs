use serde::Serialize;
use strum::AsRefStr;

use super::rules::{BOOST_RULES, BoostRule};
use crate::{Career, api::questionnaire::QuestionnaireAnswers};

/// How the factors of several matching boost rules combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum BoostPolicy {
    /// Each matching rule overwrites the factor; the last one in table order wins.
    LastMatchWins,
    /// Largest factor among the matching rules.
    Max,
    /// Factors of all matching rules multiplied together.
    Product,
}

impl BoostPolicy {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "last_match_wins" | "last" => Some(Self::LastMatchWins),
            "max" => Some(Self::Max),
            "product" => Some(Self::Product),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoostOutcome {
    /// Multiplier for the similarity score (1.0 when nothing matched).
    pub factor: f64,
    /// Names of every rule that matched, in table order.
    pub fired: Vec<&'static str>,
}

impl BoostOutcome {
    pub fn neutral() -> Self {
        Self {
            factor: 1.0,
            fired: Vec::new(),
        }
    }

    pub fn is_neutral(&self) -> bool {
        self.fired.is_empty()
    }
}

pub fn evaluate_boost(
    career: &Career,
    answers: &QuestionnaireAnswers,
    policy: BoostPolicy,
) -> BoostOutcome {
    evaluate_rules(BOOST_RULES, career, answers, policy)
}

fn evaluate_rules(
    rules: &[BoostRule],
    career: &Career,
    answers: &QuestionnaireAnswers,
    policy: BoostPolicy,
) -> BoostOutcome {
    let mut outcome = BoostOutcome::neutral();

    for rule in rules {
        if !rule.clause.matches(answers) || !rule.categories.contains(&career.category) {
            continue;
        }

        outcome.factor = match (policy, outcome.fired.is_empty()) {
            (BoostPolicy::LastMatchWins, _) | (_, true) => rule.factor,
            (BoostPolicy::Max, false) => outcome.factor.max(rule.factor),
            (BoostPolicy::Product, false) => outcome.factor * rule.factor,
        };
        outcome.fired.push(rule.name);
    }

    outcome
}
