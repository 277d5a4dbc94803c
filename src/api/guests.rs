//! Guest book submission endpoint

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::{
    error::{AppError, AppResult},
    models::{SubmitGuestRequest, SubmitGuestResponse},
};

/// Submit a guest book entry
#[utoipa::path(
    post,
    path = "/submit-guest",
    tag = "guests",
    request_body = SubmitGuestRequest,
    responses(
        (status = 200, description = "Entry appended to the visit log", body = SubmitGuestResponse),
        (status = 400, description = "Missing or empty required field, or a body that is not a JSON object of string fields (numbers are rejected, not stored)", body = crate::error::ErrorResponse),
        (status = 500, description = "Configuration or storage failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn submit_guest(
    State(state): State<crate::AppState>,
    payload: Result<Json<SubmitGuestRequest>, JsonRejection>,
) -> AppResult<Json<SubmitGuestResponse>> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;

    state.services.guests.submit(request).await?;
    Ok(Json(SubmitGuestResponse::saved()))
}
