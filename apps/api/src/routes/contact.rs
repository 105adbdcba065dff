use axum::Json;
use bytes::Bytes;
use tracing::info;

use crate::contract::{ContactSubmission, Contract, SuccessResponse};
use crate::errors::AppError;

/// POST /api/contact
/// Validates the submission and records it in the log. Nothing is persisted
/// and no email is sent.
pub async fn handle_submit_contact(body: Bytes) -> Result<Json<SuccessResponse>, AppError> {
    let submission = ContactSubmission::from_body(&body)?;

    info!(
        name = %submission.name,
        email = %submission.email,
        message = %submission.message,
        "Contact form submission"
    );

    Ok(Json(SuccessResponse::ok()))
}
