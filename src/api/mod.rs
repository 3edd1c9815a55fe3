//! REST API module.
//!
//! Contains all API routes and handlers following the browser client contract.

mod import;
mod recipes;

pub use import::*;
pub use recipes::*;

use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use serde::Serialize;

use crate::errors::AppError;

/// Response type for every handler.
pub type ApiResult<T> = Result<T, AppError>;

/// Body returned by endpoints that have nothing else to report.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Extract a numeric recipe id, reporting bad ids as a 400.
pub(crate) fn recipe_id(path: Result<Path<i64>, PathRejection>) -> ApiResult<i64> {
    path.map(|Path(id)| id)
        .map_err(|_| AppError::BadRequest("Invalid recipe id".to_string()))
}
