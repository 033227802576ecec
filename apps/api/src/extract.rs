use axum::extract::FromRequest;

use crate::errors::AppError;

/// `axum::Json` whose rejections (bad content type, unparsable body, wrong
/// field types) come back as `AppError::Validation` JSON bodies.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
