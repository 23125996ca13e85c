use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::books::dto::{BookDto, UpsertBookRequest};
use crate::catalog::domain::CatalogService;
use crate::catalog::validation::validate_book_fields;
use crate::core::command::{Command, CommandError};

pub(crate) struct UpsertBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl UpsertBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct UpsertBookCommandResponse {
    pub book: BookDto,
}

impl UpsertBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<UpsertBookRequest, UpsertBookCommandResponse> for UpsertBookCommand {
    async fn execute(&self, req: UpsertBookRequest) -> Result<UpsertBookCommandResponse, CommandError> {
        validate_book_fields(&req)?;
        self.catalog_service.upsert_book(&req).await
            .map_err(CommandError::from).map(UpsertBookCommandResponse::new)
    }
}
