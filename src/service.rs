use std::sync::Arc;

use serde_json::Value;

use crate::config::{Config, EnhanceDefaults};
use crate::errors::EnhanceError;
use crate::llm_client::{LLMClient, LLMClientTrait};
use crate::llm_request;
use crate::models::Usage;
use crate::models::form::EnhanceForm;
use crate::models::response_direct::CompletionEnvelope;

pub fn estimate_cost(usage: &Usage, token_price: f64) -> f64 {
    usage.total_tokens as f64 * token_price
}

#[derive(Clone)]
pub struct EnhanceService {
    client: Arc<dyn LLMClientTrait>,
    defaults: EnhanceDefaults,
}

impl EnhanceService {
    pub fn new(http_client: reqwest::Client, config: &Config) -> Self {
        let client = LLMClient::new(http_client, &config.api_url, &config.api_key);
        Self::with_client(Arc::new(client), config.defaults.clone())
    }

    pub fn with_client(client: Arc<dyn LLMClientTrait>, defaults: EnhanceDefaults) -> Self {
        Self { client, defaults }
    }

    /// Builds the enhancement prompt from `form` and returns the upstream
    /// completion body as-is.
    pub async fn enhance(&self, form: EnhanceForm) -> Result<Value, EnhanceError> {
        let params = llm_request::build_completion_params(&form, &self.defaults)?;
        let request = llm_request::build_chat_request(&params);

        log::debug!("request: {:?}", request);

        let body = self.client.request_chat_completion(request).await?;

        let envelope = CompletionEnvelope::from_body(&body);
        match envelope.usage {
            Some(usage) => log::info!(
                "completion {} model={} tokens={} cost={:.6}",
                envelope.id.as_deref().unwrap_or("-"),
                envelope.model.as_deref().unwrap_or(&params.model),
                usage.total_tokens,
                estimate_cost(&usage, params.token_price),
            ),
            None => log::info!("completion without usage, model={}", params.model),
        }

        Ok(body)
    }
}
