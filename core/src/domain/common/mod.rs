use std::path::PathBuf;

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct CycleFoodConfig {
    pub database: DatabaseConfig,
    pub llm: LLMConfig,
    pub engine: EngineConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.name
        )
    }
}

/// Settings for the OpenAI-compatible chat completions endpoint used to look
/// up food attributes. Keys are tried in order.
#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub api_keys: Vec<String>,
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
}

#[derive(Clone, Debug, Default)]
pub struct EngineConfig {
    /// JSON weight table overriding the built-in one.
    pub weights_path: Option<PathBuf>,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}
