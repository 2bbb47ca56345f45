//! Request extractors that reject bad input with a 400 before any service
//! call is made.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use fb_core::error::Result;
use fb_core::models::{BoardId, CreateBoard, UpdateBoard};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Field-level checks run after a payload has been deserialized.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

impl Validate for CreateBoard {
    fn validate(&self) -> Result<()> {
        CreateBoard::validate(self)
    }
}

impl Validate for UpdateBoard {
    fn validate(&self) -> Result<()> {
        UpdateBoard::validate(self)
    }
}

/// A JSON body that deserialized cleanly and passed [`Validate`].
///
/// Malformed JSON, missing fields, unknown fields and a wrong content type
/// all become validation errors.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> std::result::Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::validation(rejection.body_text()))?;
        value.validate()?;
        Ok(Self(value))
    }
}

/// The `{id}` segment of a board route.
#[derive(Debug, Clone, Copy)]
pub struct BoardIdPath(pub BoardId);

impl<S> FromRequestParts<S> for BoardIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> std::result::Result<Self, Self::Rejection> {
        let Path(id) = Path::<BoardId>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::validation(rejection.body_text()))?;
        Ok(Self(id))
    }
}
