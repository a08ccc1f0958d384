use axum::{extract::{Path, Query, State}, response::IntoResponse, Json};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::UpdateBookingStatusRequest;
use crate::api::extractors::auth::AdminUser;
use crate::domain::models::booking::BookingStatus;
use crate::domain::services::booking_query::{filter_and_sort, status_counts, BookingQuery};
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let query = parse_query(&params)?;
    let bookings = state.booking_repo.list_all().await?;
    Ok(Json(filter_and_sort(bookings, &query)))
}

pub async fn booking_stats(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
) -> Result<impl IntoResponse, AppError> {
    let bookings = state.booking_repo.list_all().await?;
    Ok(Json(status_counts(&bookings)))
}

pub async fn update_booking_status(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(booking_id): Path<String>,
    Json(payload): Json<UpdateBookingStatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    let new_status: BookingStatus = payload.status.parse()
        .map_err(|_| AppError::Validation(format!("Unknown status: {}", payload.status)))?;

    let booking = state.booking_repo.find_by_id(&booking_id).await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;

    if !booking.status.can_transition_to(new_status) {
        return Err(AppError::Conflict(format!(
            "Cannot move booking from {} to {}",
            booking.status, new_status
        )));
    }

    let updated = state.booking_repo.update_status(&booking_id, new_status).await?;
    info!("Booking {} moved from {} to {}", updated.id, booking.status, updated.status);

    Ok(Json(updated))
}

fn parse_query(params: &HashMap<String, String>) -> Result<BookingQuery, AppError> {
    let status = match params.get("status").map(String::as_str) {
        None | Some("all") => None,
        Some(s) => Some(s.parse()
            .map_err(|_| AppError::Validation(format!("Unknown status filter: {s}")))?),
    };

    let sort_by = match params.get("sort_by") {
        None => Default::default(),
        Some(s) => s.parse()
            .map_err(|_| AppError::Validation(format!("Unknown sort key: {s}")))?,
    };

    let order = match params.get("order") {
        None => Default::default(),
        Some(s) => s.parse()
            .map_err(|_| AppError::Validation(format!("Unknown sort order: {s}")))?,
    };

    Ok(BookingQuery {
        phone: params.get("phone").cloned().unwrap_or_default(),
        status,
        sort_by,
        order,
    })
}
