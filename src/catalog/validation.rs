use bigdecimal::BigDecimal;
use lazy_static::lazy_static;
use regex::Regex;
use crate::books::dto::UpsertBookRequest;
use crate::core::library::{CatalogError, CatalogResult};

lazy_static! {
    static ref ISBN_RE: Regex = Regex::new(r"^(\d{3}-\d{3}-\d{3}-\d{3}-\d|\d{3}-\d{3}-\d{3}-\d)$")
        .unwrap_or_else(|err| panic!("invalid isbn pattern {}", err));
    static ref PUBLISHED_DATE_RE: Regex = Regex::new(r"^(0[1-9]|1[0-2])-(0[1-9]|[12][0-9]|3[01])-\d{4}$")
        .unwrap_or_else(|err| panic!("invalid published date pattern {}", err));
}

/// Checks presence and format of the fields of an upsert request. The first violated rule is
/// reported as `CatalogError::InvalidInput`; business rules (existence, uniqueness, date not in
/// the future) are left to the catalog service.
pub fn validate_book_fields(req: &UpsertBookRequest) -> CatalogResult<()> {
    if req.title.trim().is_empty() {
        return Err(invalid("Title is required", "title"));
    }
    if req.author.trim().is_empty() {
        return Err(invalid("Author is required", "author"));
    }
    if req.isbn.trim().is_empty() {
        return Err(invalid("ISBN is required", "isbn"));
    }
    if !ISBN_RE.is_match(req.isbn.as_str()) {
        return Err(invalid("ISBN must be in the format xxx-xxx-xxx-xxx-x or xxx-xxx-xxx-x", "isbn"));
    }
    match &req.price {
        None => return Err(invalid("Price is required", "price")),
        Some(price) if *price < BigDecimal::from(0) => return Err(invalid("Price must not be negative", "price")),
        Some(_) => {}
    }
    if req.published_date.trim().is_empty() {
        return Err(invalid("Published date is required", "published_date"));
    }
    if !PUBLISHED_DATE_RE.is_match(req.published_date.as_str()) {
        return Err(invalid("Published date must be in format MM-dd-yyyy", "published_date"));
    }
    Ok(())
}

fn invalid(message: &str, field: &str) -> CatalogError {
    CatalogError::invalid_input(message, Some(field.to_string()))
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use bigdecimal::BigDecimal;
    use crate::catalog::validation::validate_book_fields;
    use crate::core::library::CatalogError;
    use crate::utils::fixtures::upsert_request;

    fn reason(res: Result<(), CatalogError>) -> Option<String> {
        match res {
            Err(CatalogError::InvalidInput { reason_code, .. }) => reason_code,
            _ => None,
        }
    }

    #[tokio::test]
    async fn test_should_accept_valid_request() {
        assert!(validate_book_fields(&upsert_request(None, "111-222-333-4", "01-01-2020")).is_ok());
        assert!(validate_book_fields(&upsert_request(None, "111-222-333-444-5", "12-31-1999")).is_ok());
    }

    #[tokio::test]
    async fn test_should_require_title_and_author() {
        let mut req = upsert_request(None, "111-222-333-4", "01-01-2020");
        req.title = "  ".to_string();
        assert_eq!(Some("title".to_string()), reason(validate_book_fields(&req)));

        let mut req = upsert_request(None, "111-222-333-4", "01-01-2020");
        req.author = "".to_string();
        assert_eq!(Some("author".to_string()), reason(validate_book_fields(&req)));
    }

    #[tokio::test]
    async fn test_should_check_isbn_format() {
        for isbn in ["1112223334", "111-222-333", "111-222-333-44", "abc-def-ghi-j", "111-222-333-4 "] {
            let req = upsert_request(None, isbn, "01-01-2020");
            assert_eq!(Some("isbn".to_string()), reason(validate_book_fields(&req)), "{}", isbn);
        }
    }

    #[tokio::test]
    async fn test_should_reject_negative_price() {
        let mut req = upsert_request(None, "111-222-333-4", "01-01-2020");
        req.price = BigDecimal::from_str("-0.01").ok();
        assert_eq!(Some("price".to_string()), reason(validate_book_fields(&req)));

        req.price = Some(BigDecimal::from(0));
        assert!(validate_book_fields(&req).is_ok());
    }

    #[tokio::test]
    async fn test_should_report_absent_fields() {
        let message = |req| match validate_book_fields(&req) {
            Err(CatalogError::InvalidInput { message, .. }) => message,
            other => panic!("unexpected {:?}", other),
        };
        let mut req = upsert_request(None, "", "01-01-2020");
        assert_eq!("ISBN is required", message(req.clone()));

        req.isbn = "111-222-333-4".to_string();
        req.price = None;
        assert_eq!("Price is required", message(req.clone()));

        req.price = Some(BigDecimal::from(1));
        req.published_date = "".to_string();
        assert_eq!("Published date is required", message(req.clone()));

        req.title = "".to_string();
        assert_eq!("Title is required", message(req));
    }

    #[tokio::test]
    async fn test_should_check_published_date_format() {
        for date in ["2020-01-01", "1-1-2020", "13-01-2020", "01/01/2020", "01-32-2020"] {
            let req = upsert_request(None, "111-222-333-4", date);
            assert_eq!(Some("published_date".to_string()), reason(validate_book_fields(&req)), "{}", date);
        }
    }
}
