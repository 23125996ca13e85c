pub mod service;

use async_trait::async_trait;
use crate::books::dto::{BookDto, UpsertBookRequest};
use crate::core::library::{CatalogResult, Page};

#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn upsert_book(&self, req: &UpsertBookRequest) -> CatalogResult<BookDto>;
    async fn find_book_by_id(&self, id: &str) -> CatalogResult<BookDto>;
    async fn find_all_books(&self) -> CatalogResult<Vec<BookDto>>;
    async fn find_all_books_paged(&self, offset: usize, limit: usize) -> CatalogResult<Page<BookDto>>;
    async fn remove_book(&self, id: &str) -> CatalogResult<()>;
}
