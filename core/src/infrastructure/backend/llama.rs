// Llama Backend Adapter
//
// Completion-style single-prompt API. The backend takes no structural
// message list, so messages are flattened into the prompt text; the
// generation comes back as one free-form string that embeds a JSON-looking
// rating object.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::domain::backend::{BackendError, ModelBackend};
use crate::domain::evaluation::Message;

const MODEL_ID: &str = "meta.llama2-70b-chat-v1";
const MAX_GEN_LEN: u32 = 2048;
const TOP_P: u32 = 1;

pub struct LlamaBackend {
    model_id: String,
}

#[derive(Deserialize)]
struct LlamaResponse {
    generation: String,
}

impl LlamaBackend {
    pub fn new() -> Self {
        Self::with_model_id(MODEL_ID)
    }

    /// Use a non-default Llama model id, e.g. a `70b-instruct` deployment.
    pub fn with_model_id(model_id: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
        }
    }

    /// Instruct deployments require the prompt wrapped in instruction
    /// delimiter tags; chat deployments take it bare.
    fn is_instruct(&self) -> bool {
        self.model_id.contains("instruct")
    }

    fn flatten_prompt(&self, system_prompt: &str, messages: &[Message]) -> String {
        let serialized = serde_json::to_string(messages)
            .expect("a message list of plain strings serializes to JSON");
        let flattened = format!("{}{}", system_prompt, serialized);
        if self.is_instruct() {
            format!("[INST] {} [/INST]", flattened)
        } else {
            flattened
        }
    }
}

impl Default for LlamaBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelBackend for LlamaBackend {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    fn build_request(&self, system_prompt: &str, messages: &[Message], temperature: f32) -> Value {
        json!({
            "prompt": self.flatten_prompt(system_prompt, messages),
            "temperature": temperature,
            "top_p": TOP_P,
            "max_gen_len": MAX_GEN_LEN,
        })
    }

    fn extract_text(&self, response: &Value) -> Result<String, BackendError> {
        let parsed: LlamaResponse = serde_json::from_value(response.clone())
            .map_err(|e| BackendError::MalformedResponse(format!("completion payload: {}", e)))?;

        // The generation may carry leading/trailing commentary around the
        // rating object; keep the substring from the first '{' through the
        // last '}'.
        let start = parsed.generation.find('{');
        let end = parsed.generation.rfind('}');
        match (start, end) {
            (Some(start), Some(end)) if start <= end => {
                Ok(parsed.generation[start..=end].to_string())
            }
            _ => Err(BackendError::MalformedResponse(
                "no rating object in generation".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn body_carries_fixed_sampling_fields() {
        let backend = LlamaBackend::new();
        let messages = vec![Message::user("rate this")];
        let body = backend.build_request("You are a rater.\n", &messages, 0.0);

        assert_eq!(body["top_p"], 1);
        assert_eq!(body["max_gen_len"], 2048);
        assert_eq!(body["temperature"], 0.0);
        assert!(body.get("messages").is_none());
    }

    #[test]
    fn messages_are_flattened_into_the_prompt() {
        let backend = LlamaBackend::new();
        let messages = vec![Message::user("rate this")];
        let body = backend.build_request("You are a rater.\n", &messages, 0.0);

        let prompt = body["prompt"].as_str().unwrap();
        assert!(prompt.starts_with("You are a rater.\n"));
        assert!(prompt.contains("\"role\":\"user\""));
        assert!(prompt.contains("rate this"));
        assert!(!prompt.starts_with("[INST]"));
    }

    #[test]
    fn flattening_never_drops_awkward_message_content() {
        let backend = LlamaBackend::new();
        let messages = vec![Message::user("rate \"Grüße\"\nline two")];
        let body = backend.build_request("sys", &messages, 0.0);

        let prompt = body["prompt"].as_str().unwrap();
        assert!(prompt.contains("rate \\\"Grüße\\\"\\nline two"));
    }

    #[test]
    fn instruct_configuration_wraps_the_prompt() {
        let backend = LlamaBackend::with_model_id("meta.llama2-70b-instruct-v1");
        let messages = vec![Message::user("rate this")];
        let body = backend.build_request("sys", &messages, 0.0);

        let prompt = body["prompt"].as_str().unwrap();
        assert!(prompt.starts_with("[INST] "));
        assert!(prompt.ends_with(" [/INST]"));
    }

    #[test]
    fn extracts_braced_substring_exactly() {
        let backend = LlamaBackend::new();
        let response = json!({"generation": "noise{\"a\":1}more-noise"});
        assert_eq!(backend.extract_text(&response).unwrap(), "{\"a\":1}");
    }

    #[test]
    fn keeps_everything_between_outermost_braces() {
        let backend = LlamaBackend::new();
        let response = json!({"generation": "x {\"rating\": {\"score\": 4}} y"});
        assert_eq!(
            backend.extract_text(&response).unwrap(),
            "{\"rating\": {\"score\": 4}}"
        );
    }

    #[test]
    fn braceless_generation_is_malformed() {
        let backend = LlamaBackend::new();
        let response = json!({"generation": "I would rate this 4 out of 5"});
        assert!(matches!(
            backend.extract_text(&response),
            Err(BackendError::MalformedResponse(_))
        ));
    }

    #[test]
    fn missing_generation_field_is_malformed() {
        let backend = LlamaBackend::new();
        let response = json!({"content": [{"text": "wrong family"}]});
        assert!(matches!(
            backend.extract_text(&response),
            Err(BackendError::MalformedResponse(_))
        ));
    }
}
