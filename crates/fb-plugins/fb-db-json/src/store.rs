//! # Flat-file Store
//!
//! A single JSON document on disk, addressed by top-level key:
//!
//! ```json
//! { "boards": [ ... ], "nextId": 1 }
//! ```
//!
//! Every read loads the whole file and every write rewrites it. Writes land in
//! a sibling `.tmp` file first and are renamed over the target.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;
use tokio::fs;

type Document = Map<String, Value>;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("data file i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("data file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("data file {0} does not hold a JSON object")]
    NotAnObject(PathBuf),
}

/// Addressable locations inside the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocPath {
    Boards,
    NextId,
}

impl DocPath {
    pub fn key(self) -> &'static str {
        match self {
            DocPath::Boards => "boards",
            DocPath::NextId => "nextId",
        }
    }
}

#[derive(Debug, Clone)]
pub struct FlatFileStore {
    path: PathBuf,
}

impl FlatFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the value stored under `at`. `None` when the file or the key is missing.
    pub async fn get<T: DeserializeOwned>(&self, at: DocPath) -> Result<Option<T>, StoreError> {
        let Some(mut doc) = self.read_document().await? else {
            return Ok(None);
        };
        let value = doc.remove(at.key()).map(serde_json::from_value).transpose()?;
        Ok(value)
    }

    /// Replaces the value stored under `at` and rewrites the whole document.
    ///
    /// A document that cannot be parsed is discarded and replaced.
    pub async fn set<T: Serialize + ?Sized>(&self, at: DocPath, value: &T) -> Result<(), StoreError> {
        let mut doc = match self.read_document().await {
            Ok(doc) => doc.unwrap_or_default(),
            Err(StoreError::Io(err)) => return Err(StoreError::Io(err)),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "discarding unreadable data file");
                Document::new()
            }
        };
        doc.insert(at.key().to_string(), serde_json::to_value(value)?);
        self.write_document(&doc).await
    }

    /// Makes sure `boards` is an array and `nextId` is a number.
    ///
    /// A missing counter starts one past the largest stored `id`.
    pub async fn initialize(&self) -> Result<(), StoreError> {
        if !matches!(self.get::<Value>(DocPath::Boards).await, Ok(Some(Value::Array(_)))) {
            self.set(DocPath::Boards, &Vec::<Value>::new()).await?;
        }
        if !matches!(self.get::<Value>(DocPath::NextId).await, Ok(Some(Value::Number(_)))) {
            let boards = self.get::<Vec<Value>>(DocPath::Boards).await?.unwrap_or_default();
            let next = boards
                .iter()
                .filter_map(|b| b.get("id").and_then(Value::as_u64))
                .max()
                .map_or(1, |max| max.saturating_add(1));
            self.set(DocPath::NextId, &next).await?;
        }
        Ok(())
    }

    async fn read_document(&self) -> Result<Option<Document>, StoreError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        match serde_json::from_slice(&bytes)? {
            Value::Object(doc) => Ok(Some(doc)),
            _ => Err(StoreError::NotAnObject(self.path.clone())),
        }
    }

    async fn write_document(&self, doc: &Document) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, serde_json::to_vec(doc)?).await?;
        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}
