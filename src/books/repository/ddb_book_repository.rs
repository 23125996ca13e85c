use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;
use tracing::debug;
use uuid::Uuid;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{CatalogError, CatalogResult, PaginatedResult};
use crate::core::repository::Repository;
use crate::utils::ddb::{parse_date_attribute, parse_day_attribute, parse_decimal_attribute, parse_item, parse_string_attribute};

#[derive(Debug)]
pub struct DDBBookRepository {
    client: Client,
    table_name: String,
    index_name: String,
}

impl DDBBookRepository {
    pub(crate) fn new(client: Client, table_name: &str, index_name: &str) -> Self {
        Self {
            client,
            table_name: table_name.to_string(),
            index_name: index_name.to_string(),
        }
    }

    // reads every page of the table; the catalog is small enough to be ordered in memory
    async fn scan_all(&self) -> CatalogResult<Vec<BookEntity>> {
        let table_name: &str = self.table_name.as_ref();
        let mut records = vec![];
        let mut exclusive_start_key: Option<HashMap<String, AttributeValue>> = None;
        loop {
            let res = self.client
                .scan()
                .table_name(table_name)
                .consistent_read(true)
                .set_exclusive_start_key(exclusive_start_key)
                .send()
                .await.map_err(CatalogError::from)?;
            for item in res.items().unwrap_or_default() {
                records.push(map_to_book(item)?);
            }
            match res.last_evaluated_key() {
                Some(key) => exclusive_start_key = Some(key.clone()),
                None => break,
            }
        }
        records.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.book_id.cmp(&b.book_id)));
        Ok(records)
    }
}

#[async_trait]
impl Repository<BookEntity> for DDBBookRepository {
    async fn upsert(&self, entity: &BookEntity) -> CatalogResult<BookEntity> {
        let table_name: &str = self.table_name.as_ref();
        let mut saved = entity.clone();
        if saved.book_id.is_none() {
            saved.book_id = Some(Uuid::new_v4().to_string());
        }
        let val = serde_json::to_value(&saved)?;
        self.client
            .put_item()
            .table_name(table_name)
            .set_item(Some(parse_item(val)?))
            .send()
            .await.map_err(CatalogError::from)?;
        Ok(saved)
    }

    async fn get(&self, id: &str) -> CatalogResult<Option<BookEntity>> {
        let table_name: &str = self.table_name.as_ref();
        let res = self.client
            .get_item()
            .table_name(table_name)
            .consistent_read(true)
            .key("book_id", AttributeValue::S(id.to_string()))
            .send()
            .await.map_err(CatalogError::from)?;
        res.item().map(map_to_book).transpose()
    }

    async fn delete(&self, id: &str) -> CatalogResult<usize> {
        let table_name: &str = self.table_name.as_ref();
        self.client.delete_item()
            .table_name(table_name)
            .key("book_id", AttributeValue::S(id.to_string()))
            .send()
            .await.map(|_| 1).map_err(CatalogError::from)
    }

    async fn list_all(&self) -> CatalogResult<Vec<BookEntity>> {
        self.scan_all().await
    }

    async fn list_page(&self, offset: usize, limit: usize) -> CatalogResult<PaginatedResult<BookEntity>> {
        let all = self.scan_all().await?;
        Ok(PaginatedResult::from_all(offset, limit, all))
    }
}

#[async_trait]
impl BookRepository for DDBBookRepository {
    async fn find_by_isbn(&self, isbn: &str) -> CatalogResult<Option<BookEntity>> {
        let table_name: &str = self.table_name.as_ref();
        let index_name: &str = self.index_name.as_ref();
        debug!("querying {} for isbn {}", index_name, isbn);
        let res = self.client
            .query()
            .table_name(table_name)
            .index_name(index_name)
            .limit(2)
            .key_condition_expression("isbn = :isbn")
            .expression_attribute_values(":isbn", AttributeValue::S(isbn.to_string()))
            .send()
            .await.map_err(CatalogError::from)?;
        let items = res.items().unwrap_or_default();
        if items.len() > 1 {
            return Err(CatalogError::database(format!("too many books for isbn {}", isbn).as_str(), None, false));
        }
        items.first().map(map_to_book).transpose()
    }
}

fn map_to_book(map: &HashMap<String, AttributeValue>) -> CatalogResult<BookEntity> {
    let book_id = parse_string_attribute("book_id", map);
    let malformed = |name: &str| CatalogError::infrastructure(
        format!("book item {:?} has no valid {}", book_id, name).as_str(), None, false);
    Ok(BookEntity {
        book_id: book_id.clone(),
        title: parse_string_attribute("title", map).unwrap_or_default(),
        author: parse_string_attribute("author", map).unwrap_or_default(),
        isbn: parse_string_attribute("isbn", map).ok_or_else(|| malformed("isbn"))?,
        price: parse_decimal_attribute("price", map).ok_or_else(|| malformed("price"))?,
        published_date: parse_day_attribute("published_date", map).ok_or_else(|| malformed("published_date"))?,
        created_at: parse_date_attribute("created_at", map).ok_or_else(|| malformed("created_at"))?,
        updated_at: parse_date_attribute("updated_at", map).ok_or_else(|| malformed("updated_at"))?,
    })
}
