use tracing::debug;
use crate::books::repository::BookRepository;
use crate::books::repository::ddb_book_repository::DDBBookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::utils::ddb::{build_db_client, build_local_db_client, create_table};

pub async fn create_book_repository(config: &Configuration, store: RepositoryStore) -> Box<dyn BookRepository> {
    match store {
        RepositoryStore::DynamoDB => {
            let client = build_db_client().await;
            Box::new(DDBBookRepository::new(client, config.table_name.as_str(), config.isbn_index_name.as_str()))
        }
        RepositoryStore::LocalDynamoDB => {
            let client = build_local_db_client(config.local_endpoint.as_str());
            if let Err(err) = create_table(&client, config.table_name.as_str(), "book_id",
                                           config.isbn_index_name.as_str(), "isbn").await {
                debug!("skipped creating {} table: {}", config.table_name, err);
            }
            Box::new(DDBBookRepository::new(client, config.table_name.as_str(), config.isbn_index_name.as_str()))
        }
        RepositoryStore::Memory => {
            Box::new(MemoryBookRepository::new())
        }
    }
}
