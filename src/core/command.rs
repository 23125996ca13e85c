use async_trait::async_trait;
use crate::core::library::CatalogError;

#[derive(Debug)]
pub enum CommandError {
    NotFound {
        message: String,
    },
    AlreadyExists {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    InvalidDate {
        message: String,
    },
    Infrastructure {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
}

impl CommandError {
    pub fn message(&self) -> &str {
        match self {
            CommandError::NotFound { message } => { message }
            CommandError::AlreadyExists { message } => { message }
            CommandError::Validation { message, .. } => { message }
            CommandError::InvalidDate { message } => { message }
            CommandError::Infrastructure { message, .. } => { message }
        }
    }
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<CatalogError> for CommandError {
    fn from(other: CatalogError) -> Self {
        match other {
            CatalogError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            CatalogError::AlreadyExists { message } => {
                CommandError::AlreadyExists { message }
            }
            CatalogError::InvalidInput { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            CatalogError::InvalidDate { message } => {
                CommandError::InvalidDate { message }
            }
            CatalogError::Infrastructure { message, reason_code, retryable } => {
                CommandError::Infrastructure { message, reason_code, retryable }
            }
        }
    }
}
