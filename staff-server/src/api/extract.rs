//! Extractors whose rejections are rendered as [`AppError`]s
//!
//! axum's own rejections answer with plain text and assorted status codes;
//! these wrappers turn a bad path segment, query string or body into a
//! `400` problem body instead.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::Json;
use http::request::Parts;
use serde::de::DeserializeOwned;

use crate::utils::AppError;

/// [`Path`] with a `400` problem rejection
#[derive(Debug)]
pub struct ApiPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => Err(path_rejected(rejection)),
        }
    }
}

fn path_rejected(rejection: PathRejection) -> AppError {
    AppError::invalid_request(rejection.body_text())
}

/// [`Query`] with a `400` problem rejection
#[derive(Debug)]
pub struct ApiQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(Self(value)),
            Err(rejection) => Err(query_rejected(rejection)),
        }
    }
}

fn query_rejected(rejection: QueryRejection) -> AppError {
    AppError::invalid_request(rejection.body_text())
}

/// [`Json`] body; a malformed body is a bad submission
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(json_rejected(rejection)),
        }
    }
}

fn json_rejected(rejection: JsonRejection) -> AppError {
    let reason = rejection.body_text();
    tracing::warn!(reason = %reason, "Rejected malformed body");
    AppError::invalid_format(reason)
}
