//! # fb-db-json
//!
//! Flat-file persistence for Flatboard: one JSON document holding every board
//! and the id counter.

pub mod repo;
pub mod store;

pub use repo::JsonBoardRepo;
pub use store::{DocPath, FlatFileStore, StoreError};
