use actix_web::mime;
use async_trait::async_trait;
use serde_json::Value;

use crate::errors::EnhanceError;
use crate::models::request;

#[async_trait]
pub trait LLMClientTrait: Send + Sync {
    async fn request_chat_completion(
        &self,
        request: request::ChatCompletionCreate,
    ) -> Result<Value, EnhanceError>;
}

pub struct LLMClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl LLMClient {
    pub fn new(client: reqwest::Client, base_url: &str, api_key: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }
}

#[async_trait]
impl LLMClientTrait for LLMClient {
    async fn request_chat_completion(
        &self,
        request: request::ChatCompletionCreate,
    ) -> Result<Value, EnhanceError> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, "/chat/completions"))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(EnhanceError::ApiError(format!(
                "error: status {status}, text {text}"
            )));
        }

        let content_type: mime::Mime = match response.headers().get(reqwest::header::CONTENT_TYPE)
        {
            Some(value) => value.to_str()?.parse()?,
            None => {
                return Err(EnhanceError::ParseError(
                    "error: missing content-type".to_string(),
                ));
            }
        };
        if content_type.essence_str() != mime::APPLICATION_JSON.essence_str() {
            return Err(EnhanceError::ParseError(format!(
                "content-type: {content_type}, expected: {}",
                mime::APPLICATION_JSON
            )));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
