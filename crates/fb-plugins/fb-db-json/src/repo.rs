//! # JsonBoardRepo
//!
//! `BoardRepo` implementation over a [`FlatFileStore`]. Lookups are linear
//! scans over the stored array; mutations rewrite the whole document.

use std::path::PathBuf;

use anyhow::Context;
use async_trait::async_trait;
use fb_core::models::{Board, BoardId};
use fb_core::traits::BoardRepo;
use tokio::sync::Mutex;

use crate::store::{DocPath, FlatFileStore};

pub struct JsonBoardRepo {
    store: FlatFileStore,
    /// Held for the whole read-modify-write of every operation.
    lock: Mutex<()>,
}

impl JsonBoardRepo {
    /// Opens (or creates) the data file and ensures the expected keys exist.
    pub async fn open(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let store = FlatFileStore::new(path);
        store
            .initialize()
            .await
            .with_context(|| format!("failed to initialize {}", store.path().display()))?;

        tracing::info!(path = %store.path().display(), "json board store ready");
        Ok(Self { store, lock: Mutex::new(()) })
    }

    /// Lenient read for lookups: unreadable data is reported as no boards.
    async fn load_boards(&self) -> Vec<Board> {
        match self.store.get::<Vec<Board>>(DocPath::Boards).await {
            Ok(boards) => boards.unwrap_or_default(),
            Err(err) => {
                tracing::warn!(path = %self.store.path().display(), error = %err, "unreadable boards, treating as empty");
                Vec::new()
            }
        }
    }

    /// Strict read for mutations. Writing back after a lenient read would
    /// drop every record that failed to decode.
    async fn load_boards_for_write(&self) -> anyhow::Result<Vec<Board>> {
        let boards = self
            .store
            .get::<Vec<Board>>(DocPath::Boards)
            .await
            .with_context(|| format!("refusing to rewrite unreadable boards in {}", self.store.path().display()))?;
        Ok(boards.unwrap_or_default())
    }

    /// One past the largest stored id, so a lost counter never reissues an id.
    async fn id_after_existing(&self) -> anyhow::Result<BoardId> {
        let max = self.load_boards().await.iter().map(|b| b.id).max().unwrap_or(0);
        max.checked_add(1).context("id counter exhausted")
    }

    async fn store_boards(&self, boards: &[Board]) -> anyhow::Result<()> {
        self.store
            .set(DocPath::Boards, boards)
            .await
            .context("failed to persist boards")
    }
}

#[async_trait]
impl BoardRepo for JsonBoardRepo {
    async fn next_id(&self) -> anyhow::Result<BoardId> {
        let _guard = self.lock.lock().await;

        let current = match self.store.get::<BoardId>(DocPath::NextId).await {
            Ok(Some(id)) => id,
            Ok(None) => self.id_after_existing().await?,
            Err(err) => {
                let seeded = self.id_after_existing().await?;
                tracing::warn!(error = %err, next_id = seeded, "unusable id counter, reseeding from stored boards");
                seeded
            }
        };
        let next = current.checked_add(1).context("id counter exhausted")?;
        self.store
            .set(DocPath::NextId, &next)
            .await
            .context("failed to persist id counter")?;
        Ok(current)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Board>> {
        let _guard = self.lock.lock().await;
        Ok(self.load_boards().await)
    }

    async fn find_by_id(&self, id: BoardId) -> anyhow::Result<Option<Board>> {
        let _guard = self.lock.lock().await;
        Ok(self.load_boards().await.into_iter().find(|b| b.id == id))
    }

    async fn save(&self, board: Board) -> anyhow::Result<Board> {
        let _guard = self.lock.lock().await;

        let mut boards = self.load_boards_for_write().await?;
        boards.push(board.clone());
        self.store_boards(&boards).await?;
        Ok(board)
    }

    async fn update(&self, id: BoardId, board: Board) -> anyhow::Result<Option<Board>> {
        let _guard = self.lock.lock().await;

        let mut boards = self.load_boards_for_write().await?;
        let Some(slot) = boards.iter_mut().find(|b| b.id == id) else {
            return Ok(None);
        };
        *slot = board.clone();
        self.store_boards(&boards).await?;
        Ok(Some(board))
    }

    async fn delete(&self, id: BoardId) -> anyhow::Result<bool> {
        let _guard = self.lock.lock().await;

        let mut boards = self.load_boards_for_write().await?;
        let Some(index) = boards.iter().position(|b| b.id == id) else {
            return Ok(false);
        };
        boards.remove(index);
        self.store_boards(&boards).await?;
        Ok(true)
    }

    async fn clear(&self) -> anyhow::Result<()> {
        let _guard = self.lock.lock().await;

        self.store_boards(&[]).await?;
        self.store
            .set(DocPath::NextId, &1u64)
            .await
            .context("failed to reset id counter")?;
        tracing::debug!(path = %self.store.path().display(), "board store cleared");
        Ok(())
    }
}
