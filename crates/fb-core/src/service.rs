//! # BoardService
//!
//! Business rules on top of a [`BoardRepo`]: existence checks, timestamp
//! stamping and merge-on-update. Absence is reported as [`AppError::NotFound`].

use std::sync::Arc;

use chrono::Utc;

use crate::error::{AppError, Result};
use crate::models::{Board, BoardId, CreateBoard, UpdateBoard};
use crate::traits::BoardRepo;

#[derive(Clone)]
pub struct BoardService {
    repo: Arc<dyn BoardRepo>,
}

impl BoardService {
    pub fn new(repo: Arc<dyn BoardRepo>) -> Self {
        Self { repo }
    }

    /// Allocates an id, stamps both timestamps and persists the new board.
    pub async fn create(&self, input: CreateBoard) -> Result<Board> {
        let id = self.repo.next_id().await?;
        let board = self.repo.save(Board::new(id, input, Utc::now())).await?;

        tracing::info!(board_id = board.id, author = %board.author, "board created");
        Ok(board)
    }

    pub async fn find_all(&self) -> Result<Vec<Board>> {
        Ok(self.repo.find_all().await?)
    }

    pub async fn find_one(&self, id: BoardId) -> Result<Board> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::board_not_found(id))
    }

    /// Merges the supplied fields over the stored board and refreshes `updated_at`.
    ///
    /// The lookup and the write are separate repository calls. If the board
    /// disappears in between, the write reports no match and this returns
    /// `NotFound` rather than recreating it.
    pub async fn update(&self, id: BoardId, patch: UpdateBoard) -> Result<Board> {
        let mut board = self.find_one(id).await?;
        board.apply(patch, Utc::now());

        let updated = self
            .repo
            .update(id, board)
            .await?
            .ok_or_else(|| AppError::board_not_found(id))?;

        tracing::info!(board_id = id, "board updated");
        Ok(updated)
    }

    pub async fn remove(&self, id: BoardId) -> Result<()> {
        if !self.repo.delete(id).await? {
            return Err(AppError::board_not_found(id));
        }

        tracing::info!(board_id = id, "board removed");
        Ok(())
    }
}
