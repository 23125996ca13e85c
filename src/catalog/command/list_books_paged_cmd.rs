use std::sync::Arc;
use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::Page;

pub(crate) struct ListBooksPagedCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl ListBooksPagedCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, PartialEq)]
pub(crate) struct ListBooksPagedCommandRequest {
    pub(crate) offset: usize,
    pub(crate) limit: usize,
}

impl ListBooksPagedCommandRequest {
    pub fn new(offset: usize, limit: usize) -> Self {
        Self {
            offset,
            limit,
        }
    }

    // converts a zero-based page number and page size into a window, size is capped at max_size
    pub fn from_page(page: usize, size: usize, max_size: usize) -> Self {
        let limit = size.min(max_size);
        Self::new(page.saturating_mul(limit), limit)
    }
}

pub(crate) type ListBooksPagedCommandResponse = Page<BookDto>;

#[async_trait]
impl Command<ListBooksPagedCommandRequest, ListBooksPagedCommandResponse> for ListBooksPagedCommand {
    async fn execute(&self, req: ListBooksPagedCommandRequest) -> Result<ListBooksPagedCommandResponse, CommandError> {
        self.catalog_service.find_all_books_paged(req.offset, req.limit).await
            .map_err(CommandError::from)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::list_books_paged_cmd::{ListBooksPagedCommand, ListBooksPagedCommandRequest};
    use crate::catalog::command::upsert_book_cmd::UpsertBookCommand;
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;
    use crate::utils::fixtures::upsert_request;

    #[tokio::test]
    async fn test_should_build_window_from_page() {
        assert_eq!(ListBooksPagedCommandRequest::new(0, 5), ListBooksPagedCommandRequest::from_page(0, 5, 100));
        assert_eq!(ListBooksPagedCommandRequest::new(10, 5), ListBooksPagedCommandRequest::from_page(2, 5, 100));
        assert_eq!(ListBooksPagedCommandRequest::new(300, 100), ListBooksPagedCommandRequest::from_page(3, 500, 100));
    }

    #[tokio::test]
    async fn test_should_run_list_books_paged() {
        let svc = factory::create_catalog_service(&Configuration::new("test"), RepositoryStore::Memory).await;
        let upsert_cmd = UpsertBookCommand::new(svc.clone());
        let paged_cmd = ListBooksPagedCommand::new(svc);

        for isbn in ["111-222-333-1", "111-222-333-2", "111-222-333-3"] {
            let _ = upsert_cmd.execute(upsert_request(None, isbn, "01-01-2020")).await.expect("should add book");
        }
        let page = paged_cmd.execute(ListBooksPagedCommandRequest::from_page(0, 2, 100)).await.expect("should page");
        assert_eq!(3, page.total_count);
        assert_eq!(2, page.data.len());

        let page = paged_cmd.execute(ListBooksPagedCommandRequest::from_page(1, 2, 100)).await.expect("should page");
        assert_eq!(3, page.total_count);
        assert_eq!(1, page.data.len());

        // page larger than the store
        let page = paged_cmd.execute(ListBooksPagedCommandRequest::from_page(0, 10, 100)).await.expect("should page");
        assert_eq!(3, page.total_count);
        assert_eq!(3, page.data.len());
    }
}
