use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct ValidateRequest {
    pub idea: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Source {
    #[serde(rename = "Hacker News")]
    HackerNews,
    #[serde(rename = "Reddit")]
    Reddit,
}

impl Source {
    pub fn label(&self) -> &'static str {
        match self {
            Source::HackerNews => "Hacker News",
            Source::Reddit => "Reddit",
        }
    }
}

/// A single piece of public discussion. Hacker News items carry a `title`,
/// Reddit items carry a `text` excerpt; never both.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscussionItem {
    pub source: Source,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    pub date: String,
}

impl DiscussionItem {
    pub fn hacker_news(title: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            source: Source::HackerNews,
            title: Some(title.into()),
            text: None,
            date: date.into(),
        }
    }

    pub fn reddit(text: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            source: Source::Reddit,
            title: None,
            text: Some(text.into()),
            date: date.into(),
        }
    }

    /// The story title or comment excerpt, whichever this item carries.
    pub fn headline(&self) -> &str {
        self.title
            .as_deref()
            .or(self.text.as_deref())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub human_thinking: String,
    pub ai_thinking: String,
    pub urgency_score: f64,
    pub competitor_gaps: Vec<String>,
    pub target_audience: Vec<String>,
}

impl Analysis {
    /// Substituted whenever the model reply holds no usable analysis.
    pub fn fallback() -> Self {
        Self {
            human_thinking: "People are actively discussing problems like this.".to_string(),
            ai_thinking: "Strong signal of unmet need.".to_string(),
            urgency_score: 7.5,
            competitor_gaps: vec![
                "No real-demand validation".to_string(),
                "Poor technical testing".to_string(),
            ],
            target_audience: vec!["Indie Hackers".to_string(), "Founders".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    pub discussions: Vec<DiscussionItem>,
    #[serde(flatten)]
    pub analysis: Analysis,
}

impl ValidationResult {
    pub fn new(discussions: Vec<DiscussionItem>, analysis: Analysis) -> Self {
        Self {
            discussions,
            analysis,
        }
    }

    /// Static result served when live data cannot be gathered at all.
    pub fn demo() -> Self {
        Self {
            discussions: vec![
                DiscussionItem::hacker_news(
                    "How do you validate a SaaS idea before coding?",
                    "2 days ago",
                ),
                DiscussionItem::reddit("Wasted 6 months on something nobody wanted.", "1 week ago"),
            ],
            analysis: Analysis {
                human_thinking: "People are frustrated with existing tools. They say: \u{201c}I wasted 4 months building something nobody wanted.\u{201d}".to_string(),
                ai_thinking: "High emotional intensity suggests urgent need. Gap: no tool combines real demand + technical testing.".to_string(),
                urgency_score: 8.2,
                competitor_gaps: vec![
                    "Most tools use AI guesses, not real forum data".to_string(),
                    "No one checks if users actually complain about the problem".to_string(),
                ],
                target_audience: vec![
                    "Indie Hackers \u{2014} solo founders fearing wasted time".to_string(),
                    "Pre-seed SaaS founders needing proof before fundraising".to_string(),
                ],
            },
        }
    }
}

// Upstream wire types

/// Upstream creation time, either epoch seconds or an ISO-8601 string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Epoch(f64),
    Iso(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlgoliaSearchResponse {
    #[serde(default)]
    pub hits: Vec<AlgoliaHit>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlgoliaHit {
    pub title: Option<String>,
    pub created_at: Option<Timestamp>,
    pub created_at_i: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PushshiftSearchResponse {
    #[serde(default)]
    pub data: Vec<PushshiftComment>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PushshiftComment {
    pub body: Option<String>,
    pub created_utc: Option<Timestamp>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}
