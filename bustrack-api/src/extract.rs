//! Extractors whose rejections go through [`AppError`], so malformed bodies
//! and query strings get the same `{"error": ...}` response as failed
//! validation.

use axum::extract::{FromRequest, FromRequestParts};
use crate::error::AppError;

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);
