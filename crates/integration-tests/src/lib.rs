//! Shared fixtures for the cross-crate test suites.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::Router;
use fb_api::AppState;
use fb_core::models::CreateBoard;
use fb_core::traits::BoardRepo;
use fb_core::BoardService;
use fb_db_json::JsonBoardRepo;
use tempfile::TempDir;

/// A service and router backed by a JSON file in a throwaway directory.
pub struct TestBoard {
    pub repo: Arc<JsonBoardRepo>,
    pub service: BoardService,
    _dir: TempDir,
}

impl TestBoard {
    pub async fn new() -> anyhow::Result<Self> {
        let dir = tempfile::tempdir()?;
        let repo = Arc::new(JsonBoardRepo::open(dir.path().join("boardDB.json")).await?);
        repo.clear().await?;

        let service = BoardService::new(repo.clone());
        Ok(Self { repo, service, _dir: dir })
    }

    pub fn router(&self) -> Router {
        fb_api::router(AppState {
            boards: self.service.clone(),
        })
    }
}

pub fn create_input(title: &str, content: &str, author: &str) -> CreateBoard {
    CreateBoard {
        title: title.to_string(),
        content: content.to_string(),
        author: author.to_string(),
    }
}

pub fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("valid request")
}
