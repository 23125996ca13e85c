use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::{delete, get},
    Router,
};
use serde::Deserialize;
use serde_json::Value;
use crate::books::dto::{BookDto, UpsertBookRequest};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::list_books_paged_cmd::{ListBooksPagedCommand, ListBooksPagedCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::upsert_book_cmd::UpsertBookCommand;
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ResponseDto, ServerError};
use crate::core::library::Page;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PageParams {
    page: Option<usize>,
    size: Option<usize>,
}

pub fn routes(state: AppState) -> Router<(), lambda_http::Body> {
    Router::new()
        .route("/api/v1/books", get(find_all_books).post(upsert_book))
        .route("/api/v1/books-pagination", get(find_all_books_paged))
        .route("/api/v1/book/:id", get(find_book_by_id))
        .route("/api/v1/books/:id", delete(remove_book))
        .with_state(state)
}

pub(crate) async fn upsert_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<ResponseDto<BookDto>>, ServerError> {
    let req: UpsertBookRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = UpsertBookCommand::new(state.catalog_service).execute(req).await?;
    Ok(Json(ResponseDto::success(Some(res.book))))
}

pub(crate) async fn find_all_books(
    State(state): State<AppState>) -> Result<Json<ResponseDto<Vec<BookDto>>>, ServerError> {
    let res = ListBooksCommand::new(state.catalog_service).execute(ListBooksCommandRequest::new()).await?;
    Ok(Json(ResponseDto::success(Some(res.books))))
}

pub(crate) async fn find_all_books_paged(
    State(state): State<AppState>,
    Query(params): Query<PageParams>) -> Result<Json<ResponseDto<Page<BookDto>>>, ServerError> {
    let req = ListBooksPagedCommandRequest::from_page(
        params.page.unwrap_or(0),
        params.size.unwrap_or(state.config.default_page_size),
        state.config.max_page_size);
    let res = ListBooksPagedCommand::new(state.catalog_service).execute(req).await?;
    Ok(Json(ResponseDto::success(Some(res))))
}

pub(crate) async fn find_book_by_id(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<Json<ResponseDto<BookDto>>, ServerError> {
    let req = GetBookCommandRequest { book_id };
    let res = GetBookCommand::new(state.catalog_service).execute(req).await?;
    Ok(Json(ResponseDto::success(Some(res.book))))
}

pub(crate) async fn remove_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<Json<ResponseDto<()>>, ServerError> {
    let req = RemoveBookCommandRequest { book_id };
    let _ = RemoveBookCommand::new(state.catalog_service).execute(req).await?;
    Ok(Json(ResponseDto::success(None)))
}
