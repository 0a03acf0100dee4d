pub mod chat_completions_client;
pub mod prompt;
