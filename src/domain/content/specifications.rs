use chrono::{DateTime, Duration, Utc};

use crate::domain::content::entity::Reaction;

/// Flood protection: a member must wait `delay` between two consecutive
/// notes on the same content.
pub struct AntispamSpec<'a> {
    last_reaction: Option<&'a Reaction>,
    now: DateTime<Utc>,
    delay: Duration,
}

impl<'a> AntispamSpec<'a> {
    pub fn new(last_reaction: Option<&'a Reaction>, now: DateTime<Utc>, delay: Duration) -> Self {
        Self {
            last_reaction,
            now,
            delay,
        }
    }

    /// True when the member is still inside the waiting window.
    pub fn is_satisfied(&self) -> bool {
        self.last_reaction
            .is_some_and(|reaction| self.now - reaction.posted_at < self.delay)
    }
}
