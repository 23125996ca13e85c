use std::fmt;
use std::fmt::{Display, Formatter};
use serde::Serialize;

#[derive(Debug)]
pub enum CatalogError {
    NotFound {
        message: String,
    },
    AlreadyExists {
        message: String,
    },
    InvalidInput {
        message: String,
        reason_code: Option<String>,
    },
    InvalidDate {
        message: String,
    },
    // Raised when the backing store could not complete a call. The service never interprets
    // these; retryable is set for throttling, timeouts and server-side failures of the store.
    Infrastructure {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
}

impl CatalogError {
    pub fn not_found(message: &str) -> CatalogError {
        CatalogError::NotFound { message: message.to_string() }
    }

    pub fn already_exists(message: &str) -> CatalogError {
        CatalogError::AlreadyExists { message: message.to_string() }
    }

    pub fn invalid_input(message: &str, reason_code: Option<String>) -> CatalogError {
        CatalogError::InvalidInput { message: message.to_string(), reason_code }
    }

    pub fn invalid_date(message: &str) -> CatalogError {
        CatalogError::InvalidDate { message: message.to_string() }
    }

    pub fn infrastructure(message: &str, reason_code: Option<String>, retryable: bool) -> CatalogError {
        CatalogError::Infrastructure { message: message.to_string(), reason_code, retryable }
    }

    pub fn database(message: &str, reason: Option<String>, retryable: bool) -> CatalogError {
        if retryable {
            CatalogError::infrastructure(
                format!("ddb database unavailable error {:?} {:?}", message, reason).as_str(), reason, true)
        } else {
            CatalogError::infrastructure(
                format!("ddb database error {:?} {:?}", message, reason).as_str(), reason, false)
        }
    }

    pub fn message(&self) -> &str {
        match self {
            CatalogError::NotFound { message } => { message }
            CatalogError::AlreadyExists { message } => { message }
            CatalogError::InvalidInput { message, .. } => { message }
            CatalogError::InvalidDate { message } => { message }
            CatalogError::Infrastructure { message, .. } => { message }
        }
    }

    pub fn retryable(&self) -> bool {
        match self {
            CatalogError::NotFound { .. } => { false }
            CatalogError::AlreadyExists { .. } => { false }
            CatalogError::InvalidInput { .. } => { false }
            CatalogError::InvalidDate { .. } => { false }
            CatalogError::Infrastructure { retryable, .. } => { *retryable }
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::infrastructure(
            format!("serde json parsing {:?}", err).as_str(), None, false)
    }
}

impl From<String> for CatalogError {
    fn from(err: String) -> Self {
        CatalogError::infrastructure(
            format!("serde parsing {:?}", err).as_str(), None, false)
    }
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::NotFound { message } => {
                write!(f, "{}", message)
            }
            CatalogError::AlreadyExists { message } => {
                write!(f, "{}", message)
            }
            CatalogError::InvalidInput { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            CatalogError::InvalidDate { message } => {
                write!(f, "{}", message)
            }
            CatalogError::Infrastructure { message, reason_code, retryable } => {
                write!(f, "{} {:?} {}", message, reason_code, retryable)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// A specialized Result type for the catalog.
pub type CatalogResult<T> = Result<T, CatalogError>;

// A window of store records together with the size of the whole record set
#[derive(Debug, Clone)]
pub struct PaginatedResult<T> {
    // count of all records, independent of the window
    pub total_count: usize,
    // list of records
    pub records: Vec<T>,
}

impl<T> PaginatedResult<T> {
    pub(crate) fn new(total_count: usize, records: Vec<T>) -> Self {
        PaginatedResult {
            total_count,
            records,
        }
    }

    // slices an ordered record set into the requested window
    pub(crate) fn from_all(offset: usize, limit: usize, all: Vec<T>) -> Self {
        let total_count = all.len();
        let records = all.into_iter().skip(offset).take(limit).collect();
        PaginatedResult::new(total_count, records)
    }
}

// Page is what the catalog hands out for paged listings
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub total_count: usize,
    pub data: Vec<T>,
}

impl<T> Page<T> {
    pub fn new(total_count: usize, data: Vec<T>) -> Self {
        Page {
            total_count,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::{CatalogError, PaginatedResult};

    #[tokio::test]
    async fn test_should_create_not_found_error() {
        assert!(matches!(CatalogError::not_found("test"), CatalogError::NotFound{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_already_exists_error() {
        assert!(matches!(CatalogError::already_exists("test"), CatalogError::AlreadyExists{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_invalid_input_error() {
        assert!(matches!(CatalogError::invalid_input("test", None), CatalogError::InvalidInput{ message: _, reason_code: _ }));
    }

    #[tokio::test]
    async fn test_should_create_invalid_date_error() {
        assert!(matches!(CatalogError::invalid_date("test"), CatalogError::InvalidDate{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_database_error() {
        assert!(matches!(CatalogError::database("test", None, true), CatalogError::Infrastructure{ retryable: true, .. }));
        assert!(matches!(CatalogError::database("test", Some("500".to_string()), false), CatalogError::Infrastructure{ retryable: false, .. }));
    }

    #[tokio::test]
    async fn test_should_create_retryable_error() {
        assert!(!CatalogError::not_found("test").retryable());
        assert!(!CatalogError::already_exists("test").retryable());
        assert!(!CatalogError::invalid_input("test", None).retryable());
        assert!(!CatalogError::invalid_date("test").retryable());
        assert!(!CatalogError::infrastructure("test", None, false).retryable());
        assert!(CatalogError::infrastructure("test", None, true).retryable());
    }

    #[tokio::test]
    async fn test_should_expose_message() {
        assert_eq!("missing", CatalogError::not_found("missing").message());
        assert_eq!("missing", CatalogError::not_found("missing").to_string());
    }

    #[tokio::test]
    async fn test_should_slice_window_and_keep_total() {
        let res = PaginatedResult::from_all(2, 2, vec![1, 2, 3, 4, 5]);
        assert_eq!(5, res.total_count);
        assert_eq!(vec![3, 4], res.records);

        let res = PaginatedResult::from_all(0, 5, vec![1, 2, 3]);
        assert_eq!(3, res.total_count);
        assert_eq!(3, res.records.len());

        let res = PaginatedResult::from_all(10, 5, vec![1, 2, 3]);
        assert_eq!(3, res.total_count);
        assert!(res.records.is_empty());
    }
}
