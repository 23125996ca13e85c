use std::sync::Arc;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use crate::catalog::domain::CatalogService;
use crate::catalog::factory::create_catalog_service;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;

#[derive(Clone)]
pub struct AppState {
    pub config: Configuration,
    pub catalog_service: Arc<dyn CatalogService>,
}

impl AppState {
    pub fn new(config: Configuration, catalog_service: Arc<dyn CatalogService>) -> AppState {
        AppState {
            config,
            catalog_service,
        }
    }

    pub async fn build(stage: &str, store: RepositoryStore) -> AppState {
        let config = Configuration::new(stage);
        let catalog_service = create_catalog_service(&config, store).await;
        AppState::new(config, catalog_service)
    }
}

// ResponseDto is the envelope of every response of the api
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseDto<T> {
    pub status_code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

impl<T> ResponseDto<T> {
    pub fn success(result: Option<T>) -> Self {
        Self {
            status_code: StatusCode::OK.as_u16(),
            message: "success".to_string(),
            result,
        }
    }

    pub fn failure(status: StatusCode, message: &str) -> Self {
        Self {
            status_code: status.as_u16(),
            message: message.to_string(),
            result: None,
        }
    }
}

pub type ServerError = (StatusCode, Json<ResponseDto<()>>);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    server_error(StatusCode::BAD_REQUEST, format!("{}", err).as_str())
}

fn server_error(status: StatusCode, message: &str) -> ServerError {
    (status, Json(ResponseDto::failure(status, message)))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::NotFound { .. } => {
                server_error(StatusCode::NOT_FOUND, err.message())
            }
            CommandError::AlreadyExists { .. } => {
                server_error(StatusCode::CONFLICT, err.message())
            }
            CommandError::Validation { .. } => {
                server_error(StatusCode::BAD_REQUEST, err.message())
            }
            CommandError::InvalidDate { .. } => {
                server_error(StatusCode::BAD_REQUEST, err.message())
            }
            CommandError::Infrastructure { retryable: true, .. } => {
                server_error(StatusCode::SERVICE_UNAVAILABLE, err.message())
            }
            CommandError::Infrastructure { .. } => {
                server_error(StatusCode::INTERNAL_SERVER_ERROR, err.message())
            }
        }
    }
}
