use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::dto::UpsertBookRequest;
use crate::core::domain::Identifiable;
use crate::utils::date::serializer;

// BookEntity is the stored form of a catalog record. book_id stays None until the store
// assigns one on first insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    pub book_id: Option<String>,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub price: BigDecimal,
    pub published_date: NaiveDate,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, isbn: &str, price: BigDecimal, published_date: NaiveDate) -> Self {
        Self {
            book_id: None,
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            price,
            published_date,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }

    pub(crate) fn from_request(req: &UpsertBookRequest, published_date: NaiveDate) -> Self {
        Self::new(req.title.as_str(), req.author.as_str(), req.isbn.as_str(),
                  req.price.clone().unwrap_or_default(), published_date)
    }

    // overwrites every mutable field; id and created_at are kept
    pub(crate) fn replace_with(&mut self, req: &UpsertBookRequest, published_date: NaiveDate) {
        self.title = req.title.to_string();
        self.author = req.author.to_string();
        self.isbn = req.isbn.to_string();
        self.price = req.price.clone().unwrap_or_default();
        self.published_date = published_date;
        self.updated_at = Utc::now().naive_utc();
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> Option<&str> {
        self.book_id.as_deref()
    }
}

impl Book for BookEntity {
    fn isbn(&self) -> &str {
        self.isbn.as_str()
    }
}
