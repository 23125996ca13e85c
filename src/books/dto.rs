use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;
use crate::utils::date::{published_date_serializer, serializer};
use crate::utils::json::{decimal_text, nullable_text};

// BookDto is a data transfer object for Catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDto {
    pub book_id: Option<String>,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub price: BigDecimal,
    #[serde(with = "published_date_serializer")]
    pub published_date: NaiveDate,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl Identifiable for BookDto {
    fn id(&self) -> Option<&str> {
        self.book_id.as_deref()
    }
}

impl Book for BookDto {
    fn isbn(&self) -> &str {
        self.isbn.as_str()
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            book_id: other.book_id.clone(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            isbn: other.isbn.to_string(),
            price: other.price.clone(),
            published_date: other.published_date,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

// UpsertBookRequest creates a book when book_id is absent and replaces the stored book otherwise.
// published_date is kept as text; the catalog parses it as MM-dd-yyyy. Missing or null fields
// decode as empty text or no price and are reported by field validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpsertBookRequest {
    #[serde(default, alias = "bookId", alias = "id")]
    pub book_id: Option<String>,
    #[serde(default, deserialize_with = "nullable_text::deserialize")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable_text::deserialize")]
    pub author: String,
    #[serde(default, deserialize_with = "nullable_text::deserialize")]
    pub isbn: String,
    #[serde(default, with = "decimal_text")]
    pub price: Option<BigDecimal>,
    #[serde(default, alias = "publishedDate", deserialize_with = "nullable_text::deserialize")]
    pub published_date: String,
}
