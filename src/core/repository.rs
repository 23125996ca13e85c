use std::fmt;
use std::fmt::{Display, Formatter};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::library::{CatalogResult, PaginatedResult};

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // inserts an entity, assigning its id when absent, or replaces the stored one in place
    async fn upsert(&self, entity: &Entity) -> CatalogResult<Entity>;

    // get an entity
    async fn get(&self, id: &str) -> CatalogResult<Option<Entity>>;

    // delete an entity
    async fn delete(&self, id: &str) -> CatalogResult<usize>;

    // all entities in store order
    async fn list_all(&self) -> CatalogResult<Vec<Entity>>;

    // a window of entities in store order along with the count of all entities
    async fn list_page(&self, offset: usize, limit: usize) -> CatalogResult<PaginatedResult<Entity>>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    DynamoDB,
    LocalDynamoDB,
    Memory,
}

impl From<String> for RepositoryStore {
    fn from(s: String) -> Self {
        match s.as_str() {
            "DynamoDB" => RepositoryStore::DynamoDB,
            "Memory" => RepositoryStore::Memory,
            _ => RepositoryStore::LocalDynamoDB,
        }
    }
}

impl Display for RepositoryStore {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            RepositoryStore::DynamoDB => write!(f, "DynamoDB"),
            RepositoryStore::LocalDynamoDB => write!(f, "LocalDynamoDB"),
            RepositoryStore::Memory => write!(f, "Memory"),
        }
    }
}
