use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser};
use cyclefood_core::domain::common::{CycleFoodConfig, DatabaseConfig, EngineConfig, LLMConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "cyclefood-api", version, about = "Food impact prediction API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub engine: EngineArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix for every route, e.g. "/api".
    #[arg(long, env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct DatabaseArgs {
    #[arg(long, env = "DATABASE_HOST", default_value = "localhost")]
    pub db_host: String,

    #[arg(long, env = "DATABASE_PORT", default_value_t = 5432)]
    pub db_port: u16,

    #[arg(long, env = "DATABASE_USER", default_value = "postgres")]
    pub db_user: String,

    #[arg(long, env = "DATABASE_PASSWORD", default_value = "postgres")]
    pub db_password: String,

    #[arg(long, env = "DATABASE_NAME", default_value = "cyclefood")]
    pub db_name: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    /// Comma-separated; later keys are used when earlier ones are rejected.
    #[arg(long, env = "LLM_API_KEYS", value_delimiter = ',')]
    pub llm_api_keys: Vec<String>,

    #[arg(long, env = "LLM_BASE_URL", default_value = "https://api.groq.com/openai/v1")]
    pub llm_base_url: String,

    #[arg(long, env = "LLM_MODEL", default_value = "llama-3.3-70b-versatile")]
    pub llm_model: String,

    #[arg(long, env = "LLM_TIMEOUT_SECS", default_value_t = 30)]
    pub llm_timeout_secs: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct EngineArgs {
    /// JSON weight table replacing the built-in one.
    #[arg(long, env = "WEIGHTS_PATH")]
    pub weights_path: Option<PathBuf>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

impl From<Args> for CycleFoodConfig {
    fn from(args: Args) -> Self {
        CycleFoodConfig {
            database: DatabaseConfig {
                host: args.database.db_host,
                port: args.database.db_port,
                username: args.database.db_user,
                password: args.database.db_password,
                name: args.database.db_name,
            },
            llm: LLMConfig {
                api_keys: args
                    .llm
                    .llm_api_keys
                    .into_iter()
                    .map(|key| key.trim().to_string())
                    .filter(|key| !key.is_empty())
                    .collect(),
                base_url: args.llm.llm_base_url,
                model: args.llm.llm_model,
                timeout_secs: args.llm.llm_timeout_secs,
            },
            engine: EngineConfig {
                weights_path: args.engine.weights_path,
            },
        }
    }
}
