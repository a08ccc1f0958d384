use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_services(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let services = state.service_repo.list_active().await?;
    Ok(Json(services))
}
