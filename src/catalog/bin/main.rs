use lambda_http::{run, Error};
use book_catalog::catalog::controller::routes;
use book_catalog::core::controller::AppState;
use book_catalog::core::repository::RepositoryStore;
use book_catalog::utils::ddb::setup_tracing;

// See https://docs.aws.amazon.com/lambda/latest/dg/lambda-rust.html
// https://docs.aws.amazon.com/lambda/latest/dg/images-test.html
// https://docs.aws.amazon.com/lambda/latest/dg/rust-http-events.html

const DEV_MODE: bool = true;

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_tracing();

    let state = if DEV_MODE {
        std::env::set_var("AWS_LAMBDA_FUNCTION_NAME", "_");
        std::env::set_var("AWS_LAMBDA_FUNCTION_MEMORY_SIZE", "4096");
        std::env::set_var("AWS_LAMBDA_FUNCTION_VERSION", "1");
        std::env::set_var("AWS_LAMBDA_RUNTIME_API", "http://[::]:9000/.rt");
        let store = RepositoryStore::from(std::env::var("CATALOG_STORE").unwrap_or_default());
        AppState::build("dev", store).await
    } else {
        AppState::build("prod", RepositoryStore::DynamoDB).await
    };

    run(routes(state)).await
}
