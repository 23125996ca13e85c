pub mod ddb_book_repository;
pub mod memory_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::library::CatalogResult;
use crate::core::repository::Repository;


#[async_trait]
pub trait BookRepository: Repository<BookEntity> {
    // exact match on the isbn business key
    async fn find_by_isbn(&self, isbn: &str) -> CatalogResult<Option<BookEntity>>;
}
