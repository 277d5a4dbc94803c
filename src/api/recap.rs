//! Visit recap endpoint

use axum::{
    extract::{Query, State},
    Json,
};

use crate::{
    error::AppResult,
    models::{RecapQuery, RecapResult},
};

/// Visit statistics, optionally counted for a single day
#[utoipa::path(
    get,
    path = "/visit-recap",
    tag = "recap",
    params(RecapQuery),
    responses(
        (status = 200, description = "Visit recap", body = RecapResult),
        (status = 400, description = "`date` is not a valid YYYY-MM-DD day (rejected instead of counting zero visits)", body = crate::error::ErrorResponse),
        (status = 500, description = "Configuration or storage failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn visit_recap(
    State(state): State<crate::AppState>,
    Query(query): Query<RecapQuery>,
) -> AppResult<Json<RecapResult>> {
    let target_date = query.target_date()?;

    let recap = state.services.recap.compute(target_date).await?;
    Ok(Json(recap))
}
