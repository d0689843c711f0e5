//! Lenient query parameters for the random exercise endpoints.
//!
//! Values that fail to parse never reject the request: a bad topic filter
//! means "all topics" and a bad count falls back to the endpoint default.

#[derive(Debug, Default, serde::Deserialize)]
pub struct RandomQuery {
    pub topic_id: Option<String>,
    pub limit: Option<String>,
    pub pairs: Option<String>,
    pub questions: Option<String>,
    pub words: Option<String>,
}

impl RandomQuery {
    /// `None` for a missing, unparsable or zero id.
    pub fn topic_filter(&self) -> Option<i64> {
        self.topic_id
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .filter(|id| *id != 0)
    }
}

/// Parses a requested size, falling back to `default` and capping at `max`.
pub fn count(raw: Option<&str>, default: usize, max: usize) -> usize {
    raw.and_then(|raw| raw.trim().parse::<usize>().ok())
        .unwrap_or(default)
        .min(max)
}
