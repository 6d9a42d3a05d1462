use http::StatusCode;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    HttpError(reqwest::Error),
    ApiError { status: StatusCode, message: String },
    DecodeError(String),
    ConfigError(String),
    IoError(std::io::Error),
    NotFound(String),
    Unauthorized(String),
    ValidationError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::HttpError(e) => write!(f, "Ошибка сети: {}", e),
            AppError::ApiError { status, message } => {
                write!(f, "Ошибка сервера ({}): {}", status.as_u16(), message)
            }
            AppError::DecodeError(msg) => write!(f, "Некорректный ответ сервера: {}", msg),
            AppError::ConfigError(msg) => write!(f, "Ошибка конфигурации: {}", msg),
            AppError::IoError(e) => write!(f, "Ошибка ввода-вывода: {}", e),
            AppError::NotFound(msg) => write!(f, "Не найдено: {}", msg),
            AppError::Unauthorized(msg) => write!(f, "Требуется авторизация: {}", msg),
            AppError::ValidationError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    /// Status code the collaborator answered with, when the failure came from a response.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::ApiError { status, .. } => Some(*status),
            AppError::NotFound(_) => Some(StatusCode::NOT_FOUND),
            AppError::Unauthorized(_) => Some(StatusCode::UNAUTHORIZED),
            AppError::HttpError(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }

    /// Message text supplied by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            AppError::ApiError { message, .. }
            | AppError::NotFound(message)
            | AppError::Unauthorized(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::DecodeError(err.to_string())
        } else {
            AppError::HttpError(err)
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::DecodeError(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err)
    }
}

impl From<std::env::VarError> for AppError {
    fn from(err: std::env::VarError) -> Self {
        AppError::ConfigError(err.to_string())
    }
}
