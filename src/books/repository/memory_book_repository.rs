use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{CatalogError, CatalogResult, PaginatedResult};
use crate::core::repository::Repository;

// MemoryBookRepository keeps books in process memory. Writes are serialized by the lock and
// isbn uniqueness is re-checked while holding it.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: RwLock<HashMap<String, BookEntity>>,
}

impl MemoryBookRepository {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn sorted(books: &HashMap<String, BookEntity>) -> Vec<BookEntity> {
        let mut all: Vec<BookEntity> = books.values().cloned().collect();
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.book_id.cmp(&b.book_id)));
        all
    }
}

fn poisoned(op: &str) -> CatalogError {
    CatalogError::infrastructure(format!("books lock poisoned on {}", op).as_str(), None, false)
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn upsert(&self, entity: &BookEntity) -> CatalogResult<BookEntity> {
        let mut books = self.books.write().map_err(|_| poisoned("write"))?;
        let book_id = entity.book_id.clone().unwrap_or_else(|| Uuid::new_v4().to_string());
        let taken = books.values().any(|other| {
            other.isbn == entity.isbn && other.book_id.as_deref() != Some(book_id.as_str())
        });
        if taken {
            warn!("rejected write of {} as isbn {} is held by another book", book_id, entity.isbn);
            return Err(CatalogError::already_exists(
                format!("book with isbn {} already exists", entity.isbn).as_str()));
        }
        let mut saved = entity.clone();
        saved.book_id = Some(book_id.clone());
        books.insert(book_id, saved.clone());
        Ok(saved)
    }

    async fn get(&self, id: &str) -> CatalogResult<Option<BookEntity>> {
        let books = self.books.read().map_err(|_| poisoned("read"))?;
        debug!("looking up book {}", id);
        Ok(books.get(id).cloned())
    }

    async fn delete(&self, id: &str) -> CatalogResult<usize> {
        let mut books = self.books.write().map_err(|_| poisoned("write"))?;
        Ok(books.remove(id).map(|_| 1).unwrap_or(0))
    }

    async fn list_all(&self) -> CatalogResult<Vec<BookEntity>> {
        let books = self.books.read().map_err(|_| poisoned("read"))?;
        Ok(Self::sorted(&books))
    }

    async fn list_page(&self, offset: usize, limit: usize) -> CatalogResult<PaginatedResult<BookEntity>> {
        let books = self.books.read().map_err(|_| poisoned("read"))?;
        Ok(PaginatedResult::from_all(offset, limit, Self::sorted(&books)))
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn find_by_isbn(&self, isbn: &str) -> CatalogResult<Option<BookEntity>> {
        let books = self.books.read().map_err(|_| poisoned("read"))?;
        Ok(books.values().find(|b| b.isbn == isbn).cloned())
    }
}

#[cfg(test)]
mod tests {
    use bigdecimal::BigDecimal;
    use chrono::NaiveDate;
    use crate::books::domain::model::BookEntity;
    use crate::books::repository::BookRepository;
    use crate::books::repository::memory_book_repository::MemoryBookRepository;
    use crate::core::library::CatalogError;
    use crate::core::repository::Repository;

    fn new_book(isbn: &str) -> BookEntity {
        BookEntity::new("test book", "author", isbn, BigDecimal::from(10),
                        NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid date"))
    }

    #[tokio::test]
    async fn test_should_upsert_get_books() {
        let books_repo = MemoryBookRepository::new();
        let saved = books_repo.upsert(&new_book("111-222-333-4")).await.expect("should create book");
        let book_id = saved.book_id.clone().expect("should assign id");

        let loaded = books_repo.get(book_id.as_str()).await.expect("should get book").expect("should find book");
        assert_eq!(saved, loaded);
    }

    #[tokio::test]
    async fn test_should_replace_in_place() {
        let books_repo = MemoryBookRepository::new();
        let mut saved = books_repo.upsert(&new_book("111-222-333-4")).await.expect("should create book");
        saved.title = "new title".to_string();
        let updated = books_repo.upsert(&saved).await.expect("should update book");
        assert_eq!(saved.book_id, updated.book_id);

        let all = books_repo.list_all().await.expect("should list books");
        assert_eq!(1, all.len());
        assert_eq!("new title", all[0].title.as_str());
    }

    #[tokio::test]
    async fn test_should_guard_isbn_uniqueness() {
        let books_repo = MemoryBookRepository::new();
        let _ = books_repo.upsert(&new_book("111-222-333-4")).await.expect("should create book");
        let res = books_repo.upsert(&new_book("111-222-333-4")).await;
        assert!(matches!(res, Err(CatalogError::AlreadyExists { .. })));
        assert_eq!(1, books_repo.list_all().await.expect("should list books").len());
    }

    #[tokio::test]
    async fn test_should_find_by_isbn() {
        let books_repo = MemoryBookRepository::new();
        let saved = books_repo.upsert(&new_book("111-222-333-4")).await.expect("should create book");
        let found = books_repo.find_by_isbn("111-222-333-4").await.expect("should query");
        assert_eq!(Some(saved), found);
        assert_eq!(None, books_repo.find_by_isbn("999-999-999-9").await.expect("should query"));
    }

    #[tokio::test]
    async fn test_should_page_books() {
        let books_repo = MemoryBookRepository::new();
        for i in 0..7 {
            let _ = books_repo.upsert(&new_book(format!("111-222-333-{}", i).as_str())).await.expect("should create book");
        }
        let all = books_repo.list_all().await.expect("should list books");
        let page = books_repo.list_page(5, 5).await.expect("should page books");
        assert_eq!(7, page.total_count);
        assert_eq!(2, page.records.len());
        assert_eq!(all[5..].to_vec(), page.records);
    }

    #[tokio::test]
    async fn test_should_delete_books() {
        let books_repo = MemoryBookRepository::new();
        let saved = books_repo.upsert(&new_book("111-222-333-4")).await.expect("should create book");
        let book_id = saved.book_id.expect("should assign id");

        assert_eq!(1, books_repo.delete(book_id.as_str()).await.expect("should delete book"));
        assert_eq!(0, books_repo.delete(book_id.as_str()).await.expect("should delete nothing"));
        assert_eq!(None, books_repo.get(book_id.as_str()).await.expect("should get"));
    }
}
