use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable: Sync + Send {
    // surrogate id, absent until the store assigns one
    fn id(&self) -> Option<&str>;

    fn is_persisted(&self) -> bool {
        self.id().is_some()
    }
}


// Configuration abstracts config options for the catalog service
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub stage: String,
    pub table_name: String,
    pub isbn_index_name: String,
    pub local_endpoint: String,
    pub default_page_size: usize,
    pub max_page_size: usize,
}

impl Configuration {
    pub fn new(stage: &str) -> Self {
        Configuration {
            stage: stage.to_string(),
            table_name: "books".to_string(),
            isbn_index_name: "books_isbn_ndx".to_string(),
            local_endpoint: "http://localhost:8000".to_string(),
            default_page_size: 5,
            max_page_size: 100,
        }
    }
}
