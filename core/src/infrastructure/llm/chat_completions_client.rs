use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    food_profile::{RawAttributes, keys},
    prediction::ports::FoodAttributeLookup,
};
use crate::infrastructure::llm::prompt::{SYSTEM_PROMPT, extract_json_block, food_attributes_prompt};

const TEMPERATURE: f32 = 0.1;
const MAX_TOKENS: u32 = 500;

/// Client for an OpenAI-compatible `/chat/completions` endpoint.
#[derive(Debug, Clone)]
pub struct ChatCompletionsClient {
    api_keys: Vec<String>,
    base_url: String,
    model: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: MessageResponse,
}

#[derive(Debug, Deserialize)]
struct MessageResponse {
    content: String,
}

impl ChatCompletionsClient {
    pub fn new(config: LLMConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                error!("Failed to build HTTP client: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Self {
            api_keys: config.api_keys,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model,
            client,
        })
    }

    /// Tries each API key in order. A rejected key (401) or a transport
    /// failure moves on to the next one; any other error status is final.
    async fn call_chat_api(&self, request: &ChatRequest) -> Result<String, CoreError> {
        let url = format!("{}/chat/completions", self.base_url);
        let mut last_error =
            CoreError::ExternalServiceError("No LLM API key configured".to_string());

        for (index, api_key) in self.api_keys.iter().enumerate() {
            let response = match self
                .client
                .post(&url)
                .bearer_auth(api_key)
                .json(request)
                .send()
                .await
            {
                Ok(response) => response,
                Err(e) => {
                    warn!("LLM request with key #{} failed: {}", index + 1, e);
                    last_error = CoreError::ExternalServiceError(format!("LLM API error: {}", e));
                    continue;
                }
            };

            let status = response.status();
            if status == StatusCode::UNAUTHORIZED {
                warn!("LLM API key #{} was rejected, trying next key", index + 1);
                last_error =
                    CoreError::ExternalServiceError("All LLM API keys were rejected".to_string());
                continue;
            }

            if !status.is_success() {
                let error_text = response.text().await.unwrap_or_default();
                error!("LLM API error: {} - {}", status, error_text);
                return Err(CoreError::ExternalServiceError(format!(
                    "LLM API returned error: {} - {}",
                    status, error_text
                )));
            }

            let chat_response: ChatResponse = response.json().await.map_err(|e| {
                error!("Failed to parse LLM response: {}", e);
                CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
            })?;

            return chat_response
                .choices
                .into_iter()
                .next()
                .map(|c| c.message.content)
                .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()));
        }

        Err(last_error)
    }
}

/// Parses a model reply into attributes, keeping the caller's food name.
fn parse_attributes(content: &str, food_name: &str) -> Result<RawAttributes, CoreError> {
    let value: serde_json::Value =
        serde_json::from_str(extract_json_block(content)).map_err(|e| {
            error!("Failed to parse food attributes: {}", e);
            CoreError::ExternalServiceError(format!("Invalid food attributes: {}", e))
        })?;

    if !value.is_object() {
        return Err(CoreError::ExternalServiceError(
            "Food attributes are not a JSON object".to_string(),
        ));
    }

    let mut attributes = RawAttributes::from(value);
    attributes.insert(keys::FOOD_NAME[0], food_name);

    Ok(attributes)
}

impl FoodAttributeLookup for ChatCompletionsClient {
    async fn lookup_food_attributes(&self, food_name: String) -> Result<RawAttributes, CoreError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                Message {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                Message {
                    role: "user",
                    content: food_attributes_prompt(&food_name),
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let content = self.call_chat_api(&request).await?;
        parse_attributes(&content, &food_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_attributes_overrides_food_name() {
        let reply = "```json\n{\"food_name\": \"Banana (ripe)\", \"glycemic_index\": 51}\n```";

        let attributes = parse_attributes(reply, "banana").unwrap();

        assert_eq!(attributes.food_name(), Some("banana"));
        assert_eq!(
            attributes.get("glycemic_index"),
            Some(&serde_json::json!(51))
        );
    }

    #[test]
    fn test_parse_attributes_rejects_non_objects() {
        assert!(parse_attributes("[1, 2, 3]", "banana").is_err());
        assert!(parse_attributes("I am not sure.", "banana").is_err());
    }

    #[test]
    fn test_new_trims_base_url() {
        let client = ChatCompletionsClient::new(LLMConfig {
            api_keys: vec!["key".to_string()],
            base_url: "https://api.groq.com/openai/v1/".to_string(),
            model: "llama-3.3-70b-versatile".to_string(),
            timeout_secs: 30,
        })
        .unwrap();

        assert_eq!(client.base_url, "https://api.groq.com/openai/v1");
    }

    #[tokio::test]
    async fn test_no_keys_is_an_external_error() {
        let client = ChatCompletionsClient::new(LLMConfig {
            api_keys: vec![],
            base_url: "http://127.0.0.1:9".to_string(),
            model: "test".to_string(),
            timeout_secs: 1,
        })
        .unwrap();

        let result = client.lookup_food_attributes("apple".to_string()).await;

        assert!(matches!(result, Err(CoreError::ExternalServiceError(_))));
    }
}
