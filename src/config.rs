use clap::Parser;
use std::net::SocketAddr;

#[derive(Parser, Debug, Clone)]
#[command(name = "idea-validator")]
#[command(about = "Validates startup ideas against live community discussion")]
pub struct Config {
    /// HTTP listen address
    #[arg(long, env = "IDEA_VALIDATOR_ADDR", default_value = "0.0.0.0:3000")]
    pub listen_addr: SocketAddr,

    /// Groq API key used for chat completions
    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
    pub groq_api_key: Option<String>,

    /// Groq OpenAI-compatible API base URL
    #[arg(long, env = "GROQ_BASE_URL", default_value = "https://api.groq.com/openai/v1")]
    pub groq_base_url: String,

    /// Model used for idea analysis
    #[arg(long, env = "GROQ_MODEL", default_value = "llama-3.3-70b-versatile")]
    pub groq_model: String,

    /// Hacker News (Algolia) search API base URL
    #[arg(long, env = "HN_BASE_URL", default_value = "https://hn.algolia.com/api/v1")]
    pub hn_base_url: String,

    /// Reddit (Pushshift) search API base URL
    #[arg(long, env = "REDDIT_BASE_URL", default_value = "https://api.pushshift.io")]
    pub reddit_base_url: String,
}

impl Config {
    /// The completion credential, treating a blank value as unset.
    pub fn groq_api_key(&self) -> Option<&str> {
        self.groq_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            groq_api_key: None,
            groq_base_url: "https://api.groq.com/openai/v1".to_string(),
            groq_model: "llama-3.3-70b-versatile".to_string(),
            hn_base_url: "https://hn.algolia.com/api/v1".to_string(),
            reddit_base_url: "https://api.pushshift.io".to_string(),
        }
    }
}
