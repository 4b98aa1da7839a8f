use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Categorization of client-side errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    /// The request never produced a usable response: connection refused,
    /// timeout, or a body that failed to decode.
    NetworkError,
    ValidationError,
    /// The remote service answered with a non-success status.
    ServerError,
    /// A submission is already in flight or has already succeeded.
    Conflict,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::NetworkError => write!(f, "NetworkError"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::ServerError => write!(f, "ServerError"),
            AppErrorKind::Conflict => write!(f, "Conflict"),
        }
    }
}

/// Structured error shared by the HTTP services and the UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::NetworkError,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::ServerError,
            message: format!("({status}) {}", message.into()),
            field_errors: HashMap::new(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Conflict,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    /// Whether retrying the same request could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.kind,
            AppErrorKind::NetworkError | AppErrorKind::ServerError
        )
    }

    /// Message suitable for showing to the user.
    pub fn friendly_message(&self) -> String {
        match self.kind {
            AppErrorKind::NetworkError => {
                "Não foi possível conectar ao servidor. Tente novamente.".to_string()
            }
            AppErrorKind::ServerError => {
                "O servidor recusou a requisição. Tente novamente.".to_string()
            }
            AppErrorKind::ValidationError => "Verifique os campos destacados.".to_string(),
            AppErrorKind::Conflict => self.message.clone(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors = HashMap::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                field_errors.insert(field.to_string(), msg);
            }
        }
        AppError::validation("Validation failed", field_errors)
    }
}
