// Claude Backend Adapter
//
// Chat-style messages API: structured system prompt plus an ordered
// message list. Response arrives as content blocks.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::domain::backend::{BackendError, ModelBackend};
use crate::domain::evaluation::Message;

const MODEL_ID: &str = "anthropic.claude-3-sonnet-20240229-v1:0";
const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";
const MAX_TOKENS: u32 = 4096;
const TOP_P: u32 = 1;
const TOP_K: u32 = 250;

pub struct ClaudeBackend {
    model_id: String,
}

#[derive(Deserialize)]
struct ClaudeResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    text: String,
}

impl ClaudeBackend {
    pub fn new() -> Self {
        Self {
            model_id: MODEL_ID.to_string(),
        }
    }
}

impl Default for ClaudeBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelBackend for ClaudeBackend {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    fn build_request(&self, system_prompt: &str, messages: &[Message], temperature: f32) -> Value {
        json!({
            "anthropic_version": ANTHROPIC_VERSION,
            "temperature": temperature,
            "top_p": TOP_P,
            "top_k": TOP_K,
            "max_tokens": MAX_TOKENS,
            "system": system_prompt,
            "messages": messages,
        })
    }

    fn extract_text(&self, response: &Value) -> Result<String, BackendError> {
        let parsed: ClaudeResponse = serde_json::from_value(response.clone())
            .map_err(|e| BackendError::MalformedResponse(format!("chat payload: {}", e)))?;

        parsed
            .content
            .first()
            .map(|block| block.text.clone())
            .ok_or_else(|| BackendError::MalformedResponse("empty content block list".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn body_carries_fixed_sampling_fields() {
        let backend = ClaudeBackend::new();
        let messages = vec![Message::user("rate this")];
        let body = backend.build_request("You are a rater.", &messages, 0.3);

        assert_eq!(body["anthropic_version"], "bedrock-2023-05-31");
        assert_eq!(body["top_p"], 1);
        assert_eq!(body["top_k"], 250);
        assert_eq!(body["max_tokens"], 4096);
        assert_eq!(body["system"], "You are a rater.");
        assert!((body["temperature"].as_f64().unwrap() - 0.3).abs() < 1e-6);
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "rate this");
    }

    #[test]
    fn extracts_first_content_block_verbatim() {
        let backend = ClaudeBackend::new();
        let response = json!({"content": [{"text": "Rating: 4/5"}]});
        assert_eq!(backend.extract_text(&response).unwrap(), "Rating: 4/5");
    }

    #[test]
    fn empty_content_list_is_malformed() {
        let backend = ClaudeBackend::new();
        let response = json!({"content": []});
        assert!(matches!(
            backend.extract_text(&response),
            Err(BackendError::MalformedResponse(_))
        ));
    }

    #[test]
    fn missing_content_field_is_malformed() {
        let backend = ClaudeBackend::new();
        let response = json!({"generation": "wrong family"});
        assert!(matches!(
            backend.extract_text(&response),
            Err(BackendError::MalformedResponse(_))
        ));
    }
}
