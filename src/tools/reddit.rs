use super::{format_date, DiscussionSource};
use crate::models::{DiscussionItem, PushshiftComment, PushshiftSearchResponse, Timestamp};
use anyhow::Context;
use async_trait::async_trait;
use tracing::debug;

const RESULT_SIZE: usize = 2;
const EXCERPT_CHARS: usize = 200;

/// Newest-first comment search over the Pushshift Reddit API.
#[derive(Debug, Clone)]
pub struct RedditSearch {
    client: reqwest::Client,
    base_url: String,
}

impl RedditSearch {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn search_url(&self, idea: &str) -> String {
        // Words joined with '+', each word percent-encoded on its own.
        let query = idea
            .split(' ')
            .map(|word| urlencoding::encode(word).into_owned())
            .collect::<Vec<_>>()
            .join("+");

        format!(
            "{}/reddit/search/comment/?q={}&size={}&sort=desc&sort_type=created_utc",
            self.base_url.trim_end_matches('/'),
            query,
            RESULT_SIZE
        )
    }
}

#[async_trait]
impl DiscussionSource for RedditSearch {
    fn name(&self) -> &'static str {
        "reddit"
    }

    async fn search(&self, idea: &str) -> anyhow::Result<Vec<DiscussionItem>> {
        let url = self.search_url(idea);
        debug!("Searching Reddit: {}", url);

        let response: PushshiftSearchResponse = self
            .client
            .get(&url)
            .send()
            .await
            .context("Reddit request failed")?
            .json()
            .await
            .context("Failed to parse Reddit response")?;

        Ok(response.data.into_iter().map(to_discussion).collect())
    }
}

fn to_discussion(comment: PushshiftComment) -> DiscussionItem {
    let created = comment.created_utc.as_ref().and_then(Timestamp::to_utc);
    DiscussionItem::reddit(
        excerpt(comment.body.as_deref().unwrap_or_default()),
        format_date(created),
    )
}

fn excerpt(body: &str) -> String {
    match body.char_indices().nth(EXCERPT_CHARS) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
