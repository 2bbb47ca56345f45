//! # fb-api Handlers
//!
//! This module coordinates the flow between HTTP requests and the board service.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use fb_core::models::{Board, CreateBoard, UpdateBoard};
use fb_core::BoardService;

use crate::error::ApiError;
use crate::extract::{BoardIdPath, ValidatedJson};

/// State shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub boards: BoardService,
}

type ApiResult<T> = Result<T, ApiError>;

/// `POST /board`
pub async fn create_board(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateBoard>,
) -> ApiResult<(StatusCode, Json<Board>)> {
    let board = state.boards.create(input).await?;
    Ok((StatusCode::CREATED, Json(board)))
}

/// `GET /board`
pub async fn list_boards(State(state): State<AppState>) -> ApiResult<Json<Vec<Board>>> {
    Ok(Json(state.boards.find_all().await?))
}

/// `GET /board/{id}`
pub async fn get_board(
    State(state): State<AppState>,
    BoardIdPath(id): BoardIdPath,
) -> ApiResult<Json<Board>> {
    Ok(Json(state.boards.find_one(id).await?))
}

/// `PATCH /board/{id}`
pub async fn update_board(
    State(state): State<AppState>,
    BoardIdPath(id): BoardIdPath,
    ValidatedJson(patch): ValidatedJson<UpdateBoard>,
) -> ApiResult<Json<Board>> {
    Ok(Json(state.boards.update(id, patch).await?))
}

/// `DELETE /board/{id}` answers with an empty 200.
pub async fn delete_board(
    State(state): State<AppState>,
    BoardIdPath(id): BoardIdPath,
) -> ApiResult<StatusCode> {
    state.boards.remove(id).await?;
    Ok(StatusCode::OK)
}
