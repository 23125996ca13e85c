use std::str::FromStr;
use bigdecimal::BigDecimal;
use chrono::Utc;
use rand::Rng;
use crate::books::dto::UpsertBookRequest;
use crate::utils::date::format_published_date;

// random isbn in xxx-xxx-xxx-x form so tests sharing a store do not collide
pub(crate) fn random_isbn() -> String {
    let mut rng = rand::thread_rng();
    format!("{:03}-{:03}-{:03}-{}",
            rng.gen_range(0..1000), rng.gen_range(0..1000), rng.gen_range(0..1000), rng.gen_range(0..10))
}

pub(crate) fn today() -> String {
    format_published_date(Utc::now().date_naive())
}

pub(crate) fn upsert_request(book_id: Option<&str>, isbn: &str, published_date: &str) -> UpsertBookRequest {
    UpsertBookRequest {
        book_id: book_id.map(str::to_string),
        title: "T1".to_string(),
        author: "A1".to_string(),
        isbn: isbn.to_string(),
        price: BigDecimal::from_str("10.00").ok(),
        published_date: published_date.to_string(),
    }
}
