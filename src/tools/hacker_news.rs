use super::{format_date, DiscussionSource};
use crate::models::{AlgoliaHit, AlgoliaSearchResponse, DiscussionItem, Timestamp};
use anyhow::Context;
use async_trait::async_trait;
use tracing::debug;

const HITS_PER_PAGE: usize = 3;
const KEEP_HITS: usize = 2;

/// Story search over the Hacker News Algolia API.
#[derive(Debug, Clone)]
pub struct HackerNewsSearch {
    client: reqwest::Client,
    base_url: String,
}

impl HackerNewsSearch {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn search_url(&self, idea: &str) -> String {
        format!(
            "{}/search?query={}&tags=story&hitsPerPage={}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(idea),
            HITS_PER_PAGE
        )
    }
}

#[async_trait]
impl DiscussionSource for HackerNewsSearch {
    fn name(&self) -> &'static str {
        "hacker_news"
    }

    async fn search(&self, idea: &str) -> anyhow::Result<Vec<DiscussionItem>> {
        let url = self.search_url(idea);
        debug!("Searching Hacker News: {}", url);

        let response: AlgoliaSearchResponse = self
            .client
            .get(&url)
            .send()
            .await
            .context("Hacker News request failed")?
            .json()
            .await
            .context("Failed to parse Hacker News response")?;

        Ok(response
            .hits
            .into_iter()
            .take(KEEP_HITS)
            .map(to_discussion)
            .collect())
    }
}

fn to_discussion(hit: AlgoliaHit) -> DiscussionItem {
    let created = hit
        .created_at
        .as_ref()
        .and_then(Timestamp::to_utc)
        .or_else(|| hit.created_at_i.and_then(|secs| Timestamp::Epoch(secs as f64).to_utc()));

    DiscussionItem::hacker_news(hit.title.unwrap_or_default(), format_date(created))
}
