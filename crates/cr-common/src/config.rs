use crate::matching::boost::BoostPolicy;

/// Tunables for one recommendation engine instance.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommenderConfig {
    /// Similarity candidates kept for enrichment (bounds course lookups).
    pub candidate_limit: usize,
    /// Skilled recommendations returned after filtering and boosting.
    pub response_limit: usize,
    /// Careers returned in cold-start mode.
    pub cold_start_limit: usize,
    /// Sample courses attached to each skilled recommendation.
    pub sample_course_limit: usize,
    pub boost_policy: BoostPolicy,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            candidate_limit: 20,
            response_limit: 5,
            cold_start_limit: 3,
            sample_course_limit: 2,
            boost_policy: BoostPolicy::LastMatchWins,
        }
    }
}

/// Load config from `CR_*` environment variables. Unset, unparseable or zero values keep the default.
pub fn load_config_from_env() -> RecommenderConfig {
    load_config_with(|name| std::env::var(name).ok())
}

fn load_config_with(lookup: impl Fn(&str) -> Option<String>) -> RecommenderConfig {
    let defaults = RecommenderConfig::default();
    let limit = |name: &str, default: usize| {
        lookup(name)
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .filter(|value| *value > 0)
            .unwrap_or(default)
    };

    RecommenderConfig {
        candidate_limit: limit("CR_CANDIDATE_LIMIT", defaults.candidate_limit),
        response_limit: limit("CR_RESPONSE_LIMIT", defaults.response_limit),
        cold_start_limit: limit("CR_COLD_START_LIMIT", defaults.cold_start_limit),
        sample_course_limit: limit("CR_SAMPLE_COURSE_LIMIT", defaults.sample_course_limit),
        boost_policy: lookup("CR_BOOST_POLICY")
            .and_then(|raw| BoostPolicy::parse(&raw))
            .unwrap_or(defaults.boost_policy),
    }
}
