use std::fmt;

use actix_web::http::StatusCode;

#[derive(Debug, Clone)]
pub enum EnhanceError {
    ValidationError(String),
    ApiError(String),
    ParseError(String),
    ConfigError(String),
    NetworkError(String),
}

impl EnhanceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            EnhanceError::ValidationError(_) => StatusCode::BAD_REQUEST,
            EnhanceError::ApiError(_) => StatusCode::BAD_GATEWAY,
            EnhanceError::ParseError(_) => StatusCode::BAD_GATEWAY,
            EnhanceError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            EnhanceError::NetworkError(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl fmt::Display for EnhanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnhanceError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            EnhanceError::ApiError(msg) => write!(f, "API error: {}", msg),
            EnhanceError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            EnhanceError::ConfigError(msg) => write!(f, "Config error: {}", msg),
            EnhanceError::NetworkError(msg) => write!(f, "Network error: {}", msg),
        }
    }
}

impl std::error::Error for EnhanceError {}

impl From<String> for EnhanceError {
    fn from(msg: String) -> Self {
        EnhanceError::ValidationError(msg)
    }
}

impl From<reqwest::Error> for EnhanceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() {
            EnhanceError::NetworkError(err.to_string())
        } else {
            EnhanceError::ApiError(err.to_string())
        }
    }
}

impl From<reqwest::header::ToStrError> for EnhanceError {
    fn from(err: reqwest::header::ToStrError) -> Self {
        EnhanceError::ParseError(err.to_string())
    }
}

impl From<serde_json::Error> for EnhanceError {
    fn from(err: serde_json::Error) -> Self {
        EnhanceError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for EnhanceError {
    fn from(err: std::io::Error) -> Self {
        EnhanceError::ConfigError(err.to_string())
    }
}

impl From<actix_web::mime::FromStrError> for EnhanceError {
    fn from(err: actix_web::mime::FromStrError) -> Self {
        EnhanceError::ParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[test]
    fn test_error_display_validation_error() {
        let error = EnhanceError::ValidationError("test message".to_string());
        assert_eq!(error.to_string(), "Validation error: test message");
    }

    #[test]
    fn test_error_display_api_error() {
        let error = EnhanceError::ApiError("API failed".to_string());
        assert_eq!(error.to_string(), "API error: API failed");
    }

    #[test]
    fn test_error_display_config_error() {
        let error = EnhanceError::ConfigError("Missing config".to_string());
        assert_eq!(error.to_string(), "Config error: Missing config");
    }

    #[test]
    fn test_error_display_network_error() {
        let error = EnhanceError::NetworkError("Connection refused".to_string());
        assert_eq!(error.to_string(), "Network error: Connection refused");
    }

    #[test]
    fn test_error_from_string() {
        let error: EnhanceError = "bad dropdown".to_string().into();
        match error {
            EnhanceError::ValidationError(msg) => assert_eq!(msg, "bad dropdown"),
            _ => panic!("Expected ValidationError"),
        }
    }

    #[test]
    fn test_error_from_io_error_is_config_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let error: EnhanceError = io.into();
        assert!(matches!(error, EnhanceError::ConfigError(_)));
    }

    #[test]
    fn test_error_from_serde_json_is_parse_error() {
        let err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let error: EnhanceError = err.into();
        assert!(matches!(error, EnhanceError::ParseError(_)));
    }

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            EnhanceError::ValidationError(String::new()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            EnhanceError::ApiError(String::new()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            EnhanceError::ParseError(String::new()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            EnhanceError::NetworkError(String::new()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            EnhanceError::ConfigError(String::new()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_source() {
        let error = EnhanceError::ApiError("API error".to_string());
        assert!(error.source().is_none());
    }
}
