use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::config::{Credentials, Region};
use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::query::QueryError;
use aws_sdk_dynamodb::operation::scan::ScanError;
use aws_sdk_dynamodb::types::{AttributeDefinition, AttributeValue, GlobalSecondaryIndex, KeySchemaElement, KeyType, Projection, ProjectionType, ProvisionedThroughput, ScalarAttributeType, TableStatus};
use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;
use crate::core::library::{CatalogError, CatalogResult};
use crate::utils::date::DATE_FMT;

// creates a table keyed by pk with a single-key global secondary index on gsi_pk
pub(crate) async fn create_table(client: &Client,
                                 table_name: &str, pk: &str,
                                 index_name: &str, gsi_pk: &str) -> CatalogResult<()> {
    let gsi = GlobalSecondaryIndex::builder()
        .index_name(index_name)
        .key_schema(KeySchemaElement::builder()
            .attribute_name(gsi_pk)
            .key_type(KeyType::Hash).build())
        .projection(Projection::builder().projection_type(ProjectionType::All).build())
        .provisioned_throughput(
            ProvisionedThroughput::builder().read_capacity_units(10).write_capacity_units(10).build())
        .build();

    match client
        .create_table()
        .table_name(table_name)
        .global_secondary_indexes(gsi)
        .key_schema(
            KeySchemaElement::builder()
                .attribute_name(pk)
                .key_type(KeyType::Hash)
                .build(),
        )
        .attribute_definitions(
            AttributeDefinition::builder()
                .attribute_name(pk)
                .attribute_type(ScalarAttributeType::S)
                .build(),
        )
        .attribute_definitions(
            AttributeDefinition::builder()
                .attribute_name(gsi_pk)
                .attribute_type(ScalarAttributeType::S)
                .build(),
        )
        .provisioned_throughput(
            ProvisionedThroughput::builder()
                .read_capacity_units(10)
                .write_capacity_units(10)
                .build(),
        )
        .send()
        .await
    {
        Ok(_k) => {
            wait_until_table_status_is_not(client, table_name, TableStatus::Creating).await;
            Ok(())
        }
        Err(err) => {
            Err(CatalogError::database(format!("failed to create {} table due to {}",
                                               table_name, err).as_str(), None, false))
        }
    }
}

pub(crate) async fn delete_table(client: &Client, table_name: &str) -> CatalogResult<()> {
    match client.delete_table().table_name(table_name).send().await {
        Ok(_k) => {
            wait_until_table_status_is_not(client, table_name, TableStatus::Deleting).await;
            Ok(())
        }
        Err(err) => {
            Err(CatalogError::database(format!("failed to delete {} table due to {}",
                                               table_name, err).as_str(), None, false))
        }
    }
}

async fn wait_until_table_status_is_not(client: &Client, table_name: &str, other_status: TableStatus) {
    for _i in 0..30 {
        if let Ok(status) = describe_table(client, table_name).await {
            if status != other_status {
                return;
            }
        }
        tokio::time::sleep(Duration::from_secs(1)).await;
    }
}

async fn describe_table(client: &Client, table_name: &str) -> CatalogResult<TableStatus> {
    match client
        .describe_table()
        .table_name(table_name)
        .send()
        .await
    {
        Ok(out) => {
            if let Some(table) = out.table() {
                if let Some(status) = table.table_status() {
                    return Ok(status.clone());
                }
            }
            Err(CatalogError::infrastructure(format!("failed to describe {} table",
                                                     table_name).as_str(), None, false))
        }
        Err(err) => {
            Err(CatalogError::database(format!("failed to describe {} table due to {}",
                                               table_name, err).as_str(), None, false))
        }
    }
}

pub(crate) fn parse_item(value: Value) -> Result<HashMap<String, AttributeValue>, String> {
    match value_to_item(value) {
        AttributeValue::M(map) => Ok(map),
        other => Err(format!("failed to parse{:?}", other)),
    }
}

pub(crate) fn parse_string_attribute(name: &str, map: &HashMap<String, AttributeValue>) -> Option<String> {
    if let Some(AttributeValue::S(str)) = map.get(name) {
        return Some(str.clone());
    }
    None
}

pub(crate) fn parse_date_attribute(name: &str, map: &HashMap<String, AttributeValue>) -> Option<NaiveDateTime> {
    if let Some(AttributeValue::S(str)) = map.get(name) {
        // e.g. 2022-09-24T04:40:35.726029
        if let Ok(date) = NaiveDateTime::parse_from_str(str, DATE_FMT) {
            return Some(date);
        }
    }
    None
}

pub(crate) fn parse_day_attribute(name: &str, map: &HashMap<String, AttributeValue>) -> Option<NaiveDate> {
    if let Some(AttributeValue::S(str)) = map.get(name) {
        // e.g. 2022-09-24
        if let Ok(date) = NaiveDate::from_str(str) {
            return Some(date);
        }
    }
    None
}

// decimals are written as strings by serde but may be N when written by other tools
pub(crate) fn parse_decimal_attribute(name: &str, map: &HashMap<String, AttributeValue>) -> Option<BigDecimal> {
    match map.get(name) {
        Some(AttributeValue::S(str)) | Some(AttributeValue::N(str)) => BigDecimal::from_str(str).ok(),
        _ => None,
    }
}

fn value_to_item(value: Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s),
        Value::Array(a) => AttributeValue::L(a.into_iter().map(value_to_item).collect()),
        Value::Object(o) => {
            AttributeValue::M(o.into_iter().map(|(k, v)| (k, value_to_item(v))).collect())
        }
    }
}

// helper method to build db-client from the environment
pub(crate) async fn build_db_client() -> Client {
    //Get config from environment.
    let config = aws_config::load_from_env().await;
    //Create the DynamoDB client.
    Client::new(&config)
}

// See https://docs.aws.amazon.com/sdk-for-rust/latest/dg/dynamodb-local.html
pub(crate) fn build_local_db_client(endpoint: &str) -> Client {
    let dynamodb_local_config = aws_sdk_dynamodb::Config::builder()
        .region(Region::new("local"))
        .credentials_provider(
            Credentials::new("AKIDLOCALSTACK", "localstacksecret", None, None, "faked"))
        .endpoint_url(endpoint)
        .build();
    Client::from_conf(dynamodb_local_config)
}

// required to enable CloudWatch error logging by the runtime
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // this needs to be set to false, otherwise ANSI color codes will
        // show up in a confusing manner in CloudWatch logs.
        .with_ansi(false)
        // disabling time is handy because CloudWatch will add the ingestion time.
        .without_time()
        .json()
        .init();
}


impl From<SdkError<GetItemError>> for CatalogError {
    fn from(err: SdkError<GetItemError>) -> Self {
        let (retryable, reason) = retryable_sdk_error(&err);
        CatalogError::database(format!("{:?}", err).as_str(), reason, retryable)
    }
}

impl From<SdkError<PutItemError>> for CatalogError {
    fn from(err: SdkError<PutItemError>) -> Self {
        let (retryable, reason) = retryable_sdk_error(&err);
        CatalogError::database(format!("{:?}", err).as_str(), reason, retryable)
    }
}

impl From<SdkError<DeleteItemError>> for CatalogError {
    fn from(err: SdkError<DeleteItemError>) -> Self {
        let (retryable, reason) = retryable_sdk_error(&err);
        CatalogError::database(format!("{:?}", err).as_str(), reason, retryable)
    }
}

impl From<SdkError<QueryError>> for CatalogError {
    fn from(err: SdkError<QueryError>) -> Self {
        let (retryable, reason) = retryable_sdk_error(&err);
        CatalogError::database(format!("{:?}", err).as_str(), reason, retryable)
    }
}

impl From<SdkError<ScanError>> for CatalogError {
    fn from(err: SdkError<ScanError>) -> Self {
        let (retryable, reason) = retryable_sdk_error(&err);
        CatalogError::database(format!("{:?}", err).as_str(), reason, retryable)
    }
}

fn retryable_sdk_error<T>(err: &SdkError<T>) -> (bool, Option<String>) {
    match err {
        SdkError::ConstructionFailure(_) => { (false, Some("ConstructionFailure".to_string())) }
        SdkError::TimeoutError(_) => { (true, Some("TimeoutError".to_string())) }
        SdkError::DispatchFailure(_) => { (true, Some("DispatchFailure".to_string())) }
        SdkError::ResponseError { .. } => { (true, Some("ResponseError".to_string())) }
        SdkError::ServiceError(ctx) => {
            (ctx.raw().http().status().is_server_error() || has_exceeded_limit(ctx.raw().http().body().bytes()), Some(ctx.raw().http().status().to_string()))
        }
        _ => { (true, Some("Unknown".to_string())) }
    }
}

// throughput and request limit errors mention "exceeded" in their body
fn has_exceeded_limit(opts: Option<&[u8]>) -> bool {
    if let Some(b) = opts {
        return b.windows(6).any(|w| w == b"ceeded");
    }
    false
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::str::FromStr;
    use aws_sdk_dynamodb::types::AttributeValue;
    use bigdecimal::BigDecimal;
    use chrono::NaiveDate;
    use serde_json::json;
    use crate::utils::ddb::{has_exceeded_limit, parse_date_attribute, parse_day_attribute, parse_decimal_attribute, parse_item, parse_string_attribute};

    #[tokio::test]
    async fn test_should_parse_item_attributes() {
        let map = parse_item(json!({
            "book_id": "id1",
            "price": "10.50",
            "published_date": "2020-01-31",
            "created_at": "2022-09-24T04:40:35.726029",
        })).expect("should parse item");
        assert_eq!(Some("id1".to_string()), parse_string_attribute("book_id", &map));
        assert_eq!(BigDecimal::from_str("10.50").ok(), parse_decimal_attribute("price", &map));
        assert_eq!(NaiveDate::from_ymd_opt(2020, 1, 31), parse_day_attribute("published_date", &map));
        assert!(parse_date_attribute("created_at", &map).is_some());
        assert_eq!(None, parse_string_attribute("missing", &map));
    }

    #[tokio::test]
    async fn test_should_parse_numeric_decimal() {
        let map = HashMap::from([("price".to_string(), AttributeValue::N("7.25".to_string()))]);
        assert_eq!(BigDecimal::from_str("7.25").ok(), parse_decimal_attribute("price", &map));
    }

    #[tokio::test]
    async fn test_should_reject_non_object_item() {
        assert!(parse_item(json!("text")).is_err());
    }

    #[tokio::test]
    async fn test_should_detect_exceeded_limit() {
        assert!(has_exceeded_limit(Some(b"ProvisionedThroughputExceededException".as_slice())));
        assert!(!has_exceeded_limit(Some(b"ok".as_slice())));
        assert!(!has_exceeded_limit(None));
    }
}
