#![allow(dead_code)]

use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

use article_enhancer::config::{Config, ConfigLoader, EnhanceDefaults};
use article_enhancer::errors::EnhanceError;

pub fn create_test_config(api_url: String) -> Config {
    Config {
        api_url,
        api_key: "test-key".to_string(),
        defaults: EnhanceDefaults::default(),
    }
}

pub async fn setup_chat_completion_mock(status: u16, body: impl Into<Value>) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body.into()))
        .mount(&mock_server)
        .await;

    mock_server
}

pub async fn setup_error_mock(
    status_code: u16,
    error_message: &str,
    error_type: &str,
) -> MockServer {
    let error_body = json!({
        "error": {
            "message": error_message,
            "type": error_type
        }
    });

    setup_chat_completion_mock(status_code, error_body).await
}

pub async fn received_chat_request(mock_server: &MockServer) -> Value {
    let requests = mock_server
        .received_requests()
        .await
        .expect("request recording should be enabled");
    assert_eq!(requests.len(), 1, "expected exactly one upstream call");
    requests[0].body_json().expect("upstream body should be JSON")
}

pub struct InMemoryConfigLoader {
    config: Config,
}

impl InMemoryConfigLoader {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl ConfigLoader for InMemoryConfigLoader {
    fn load_config(&self) -> Result<Config, EnhanceError> {
        self.config.defaults.validate()?;
        Ok(self.config.clone())
    }
}
