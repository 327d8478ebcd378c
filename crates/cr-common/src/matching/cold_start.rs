use std::collections::HashSet;

use tracing::debug;

use super::rules::{ENTRY_LEVEL_TIERS, active_allow_lists};
use crate::{Career, CareerCategory, api::questionnaire::QuestionnaireAnswers};

/// Intersection of every active allow-list, or `None` when no clause is active.
pub fn allowed_categories(answers: &QuestionnaireAnswers) -> Option<HashSet<CareerCategory>> {
    active_allow_lists(answers)
        .into_iter()
        .map(|list| list.categories.iter().copied().collect::<HashSet<_>>())
        .reduce(|acc, next| acc.intersection(&next).copied().collect())
}

/// Whether one career survives the questionnaire filters.
pub fn admits(
    career: &Career,
    allowed: Option<&HashSet<CareerCategory>>,
    entry_level_only: bool,
) -> bool {
    let category_ok = allowed.map_or(true, |set| set.contains(&career.category));
    let education_ok = !entry_level_only || ENTRY_LEVEL_TIERS.contains(&career.min_education);
    category_ok && education_ok
}

/// First `limit` careers (catalog order) passing the allow-list conjunction and
/// the short-track education rule. No scoring.
pub fn select_cold_start(
    careers: &[Career],
    answers: &QuestionnaireAnswers,
    limit: usize,
) -> Vec<Career> {
    let allowed = allowed_categories(answers);
    let entry_level_only = answers.is_short_track_high_school();

    debug!(
        allowed = ?allowed,
        entry_level_only,
        catalog = careers.len(),
        "cold start filters resolved"
    );

    careers
        .iter()
        .filter(|career| admits(career, allowed.as_ref(), entry_level_only))
        .take(limit)
        .cloned()
        .collect()
}
