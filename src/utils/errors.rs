use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Todo {0} not found")]
    NotFound(i64),
    #[error("No route for path")]
    NoRoute,
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Invalid form: {0}")]
    InvalidForm(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
}

impl AppError {
    pub fn status(&self) -> u16 {
        match self {
            AppError::NotFound(_) | AppError::NoRoute => 404,
            AppError::MethodNotAllowed => 405,
            AppError::InvalidForm(_) => 400,
            AppError::Config(_) | AppError::Storage(_) | AppError::Template(_) => 500,
        }
    }

    /// Text safe to show the client; server-side failures stay in the log.
    pub fn public_message(&self) -> String {
        match self {
            AppError::NotFound(_) | AppError::NoRoute => "Not found".to_string(),
            AppError::MethodNotAllowed => "Method not allowed".to_string(),
            AppError::InvalidForm(msg) => msg.clone(),
            _ => "Internal server error".to_string(),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Storage(e.to_string())
    }
}

impl From<matchit::InsertError> for AppError {
    fn from(e: matchit::InsertError) -> Self {
        AppError::Config(format!("route table: {}", e))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<worker::Error> for AppError {
    fn from(e: worker::Error) -> Self {
        AppError::Storage(e.to_string())
    }
}
