//! Static questionnaire rule tables.
//!
//! Kept as plain data so the rule set can be audited and tested on its own,
//! apart from the code that applies it.

use crate::{
    CareerCategory::{self, Business, Creative, Education, Health, Service, Technical, Trade},
    EducationTier,
    api::questionnaire::{
        CoreValue, Environment, Hobby, QuestionnaireAnswers, SocialPreference, WorkType,
    },
};

/// One answered value of one questionnaire dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerClause {
    WorkType(WorkType),
    Environment(Environment),
    Social(SocialPreference),
    Hobby(Hobby),
    Value(CoreValue),
}

impl AnswerClause {
    pub fn matches(&self, answers: &QuestionnaireAnswers) -> bool {
        match *self {
            Self::WorkType(v) => answers.work_type == Some(v),
            Self::Environment(v) => answers.environment == Some(v),
            Self::Social(v) => answers.social == Some(v),
            Self::Hobby(v) => answers.hobby == Some(v),
            Self::Value(v) => answers.value == Some(v),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AllowList {
    pub clause: AnswerClause,
    pub categories: &'static [CareerCategory],
}

/// Cold-start category allow-lists. Every matching entry is ANDed; values not
/// listed here (Indoor, Sports, WLB, ...) add no restriction.
pub const COLD_START_ALLOW_LISTS: &[AllowList] = &[
    AllowList {
        clause: AnswerClause::WorkType(WorkType::Practical),
        categories: &[Trade, Technical, Creative, Service],
    },
    AllowList {
        clause: AnswerClause::WorkType(WorkType::Theoretical),
        categories: &[Business, Technical, Education],
    },
    AllowList {
        clause: AnswerClause::WorkType(WorkType::Digital),
        categories: &[Technical, Business, Creative],
    },
    AllowList {
        clause: AnswerClause::Environment(Environment::Outdoor),
        categories: &[Trade],
    },
    AllowList {
        clause: AnswerClause::Social(SocialPreference::Team),
        categories: &[Business, Service, Technical],
    },
    AllowList {
        clause: AnswerClause::Social(SocialPreference::Solo),
        categories: &[Technical, Creative, Trade],
    },
    AllowList {
        clause: AnswerClause::Hobby(Hobby::Gaming),
        categories: &[Technical, Creative, Business],
    },
    AllowList {
        clause: AnswerClause::Hobby(Hobby::Social),
        categories: &[Technical, Creative, Business],
    },
    AllowList {
        clause: AnswerClause::Hobby(Hobby::Art),
        categories: &[Creative],
    },
    AllowList {
        clause: AnswerClause::Hobby(Hobby::Fixing),
        categories: &[Trade, Technical],
    },
    AllowList {
        clause: AnswerClause::Hobby(Hobby::Reading),
        categories: &[Education, Business, Technical],
    },
    AllowList {
        clause: AnswerClause::Value(CoreValue::HighPay),
        categories: &[Technical, Business],
    },
    AllowList {
        clause: AnswerClause::Value(CoreValue::Impact),
        categories: &[Service, Education, Health],
    },
];

/// Minimum-education tiers kept for a short-track high-school respondent.
pub const ENTRY_LEVEL_TIERS: &[EducationTier] = &[
    EducationTier::HighSchoolCert,
    EducationTier::DiplomaBootcamp,
    EducationTier::Apprenticeship,
    EducationTier::None,
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoostRule {
    pub name: &'static str,
    pub clause: AnswerClause,
    pub categories: &'static [CareerCategory],
    pub factor: f64,
}

/// Score boosts, evaluated in this order.
pub const BOOST_RULES: &[BoostRule] = &[
    BoostRule {
        name: "gaming_technical_creative",
        clause: AnswerClause::Hobby(Hobby::Gaming),
        categories: &[Technical, Creative],
        factor: 1.2,
    },
    BoostRule {
        name: "art_creative",
        clause: AnswerClause::Hobby(Hobby::Art),
        categories: &[Creative],
        factor: 1.2,
    },
    BoostRule {
        name: "high_pay_business",
        clause: AnswerClause::Value(CoreValue::HighPay),
        categories: &[Business],
        factor: 1.1,
    },
];

/// Allow-lists switched on by these answers.
pub fn active_allow_lists(answers: &QuestionnaireAnswers) -> Vec<&'static AllowList> {
    COLD_START_ALLOW_LISTS
        .iter()
        .filter(|list| list.clause.matches(answers))
        .collect()
}
