pub mod hacker_news;
pub mod llm;
pub mod reddit;

use crate::models::{DiscussionItem, Timestamp};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// A read-only public discussion search keyed by the raw idea text.
#[async_trait]
pub trait DiscussionSource: Send + Sync {
    fn name(&self) -> &'static str;

    async fn search(&self, idea: &str) -> anyhow::Result<Vec<DiscussionItem>>;
}

impl Timestamp {
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        match self {
            Timestamp::Epoch(secs) => DateTime::from_timestamp(*secs as i64, 0),
            Timestamp::Iso(raw) => DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
        }
    }
}

/// Short numeric calendar date (`M/D/YYYY`, UTC), or empty when unknown.
pub fn format_date(when: Option<DateTime<Utc>>) -> String {
    when.map(|dt| dt.format("%-m/%-d/%Y").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_epoch_and_iso_dates() {
        assert_eq!(
            format_date(Timestamp::Epoch(1700000000.0).to_utc()),
            "11/14/2023"
        );
        assert_eq!(
            format_date(Timestamp::Iso("2024-03-05T10:00:00.000Z".to_string()).to_utc()),
            "3/5/2024"
        );
    }

    #[test]
    fn unknown_dates_render_empty() {
        assert_eq!(format_date(None), "");
        assert_eq!(
            format_date(Timestamp::Iso("yesterday".to_string()).to_utc()),
            ""
        );
    }
}
