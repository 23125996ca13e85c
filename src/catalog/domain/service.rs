use async_trait::async_trait;
use chrono::Utc;
use tracing::{error, info, warn};
use crate::books::domain::{Book, isbn_held_by_other};
use crate::books::domain::model::BookEntity;
use crate::books::dto::{BookDto, UpsertBookRequest};
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::library::{CatalogError, CatalogResult, Page};
use crate::utils::date::{ensure_past_or_present, parse_published_date};

pub(crate) struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(_config: &Configuration, book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }

    async fn get_book(&self, id: &str) -> CatalogResult<BookEntity> {
        self.book_repository.get(id).await?
            .ok_or_else(|| CatalogError::not_found(format!("book not found for {}", id).as_str()))
    }
}

fn store_failure(op: &str, err: CatalogError) -> CatalogError {
    if err.retryable() {
        warn!("book {} failed and may be retried: {}", op, err);
    } else {
        error!("book {} failed: {}", op, err);
    }
    err
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    // Checks run in order: target exists, isbn is free, date parses, date is not in the future.
    // Nothing is written until all of them pass.
    async fn upsert_book(&self, req: &UpsertBookRequest) -> CatalogResult<BookDto> {
        let current = match req.book_id.as_deref() {
            Some(id) => Some(self.get_book(id).await?),
            None => None,
        };

        if let Some(holder) = self.book_repository.find_by_isbn(req.isbn.as_str()).await? {
            if isbn_held_by_other(&holder, current.as_ref().map(|b| b as &dyn Book)) {
                warn!("rejected upsert of {:?} as isbn {} is held by {:?}", req.book_id, holder.isbn(), holder.book_id);
                return Err(CatalogError::already_exists(
                    format!("book with isbn {} already exists", req.isbn).as_str()));
            }
        }

        let published_date = parse_published_date(req.published_date.as_str())?;
        if let Err(err) = ensure_past_or_present(published_date, Utc::now().date_naive()) {
            warn!("rejected upsert of {:?}: {}", req.book_id, err);
            return Err(err);
        }

        let book = match current {
            Some(mut book) => {
                book.replace_with(req, published_date);
                book
            }
            None => BookEntity::from_request(req, published_date),
        };
        let book = self.book_repository.upsert(&book).await.map_err(|err| store_failure("upsert", err))?;
        info!("upserted book {:?} with isbn {}", book.book_id, book.isbn);
        Ok(BookDto::from(&book))
    }

    async fn find_book_by_id(&self, id: &str) -> CatalogResult<BookDto> {
        self.get_book(id).await.map(|b| BookDto::from(&b))
    }

    async fn find_all_books(&self) -> CatalogResult<Vec<BookDto>> {
        let res = self.book_repository.list_all().await?;
        Ok(res.iter().map(BookDto::from).collect())
    }

    async fn find_all_books_paged(&self, offset: usize, limit: usize) -> CatalogResult<Page<BookDto>> {
        let res = self.book_repository.list_page(offset, limit).await?;
        Ok(Page::new(res.total_count, res.records.iter().map(BookDto::from).collect()))
    }

    async fn remove_book(&self, id: &str) -> CatalogResult<()> {
        let book = self.get_book(id).await?;
        self.book_repository.delete(id).await.map_err(|err| store_failure("delete", err))?;
        info!("removed book {} with isbn {}", id, book.isbn);
        Ok(())
    }
}
