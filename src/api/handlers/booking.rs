use axum::{extract::{Query, State}, response::IntoResponse, Json};
use chrono::{Local, NaiveDate, NaiveTime};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

use crate::api::dtos::requests::CreateBookingRequest;
use crate::api::dtos::responses::SlotsResponse;
use crate::domain::models::booking::{is_valid_phone, Booking, NewBookingParams};
use crate::domain::services::availability::{
    is_bookable_date, is_valid_slot, occupied_times, time_slots,
};
use crate::error::AppError;
use crate::state::AppState;

pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let service = state.service_repo.find_by_id(&payload.service_id).await?
        .ok_or(AppError::NotFound("Service not found".into()))?;

    if !service.is_active {
        return Err(AppError::Validation("Service is not currently offered".into()));
    }

    let date = NaiveDate::parse_from_str(&payload.date, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format".into()))?;
    let time = NaiveTime::parse_from_str(&payload.time, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(&payload.time, "%H:%M:%S"))
        .map_err(|_| AppError::Validation("Invalid time format (HH:MM)".into()))?;

    let today = Local::now().date_naive();
    if !is_bookable_date(today, date) {
        return Err(AppError::Validation("Date is outside the 30-day booking window".into()));
    }
    if !is_valid_slot(time) {
        return Err(AppError::Validation("Time is not on the 30-minute booking grid".into()));
    }
    if payload.customer_name.trim().is_empty() {
        return Err(AppError::Validation("Customer name is required".into()));
    }
    if !is_valid_phone(&payload.customer_phone) {
        return Err(AppError::Validation("Invalid mobile number format".into()));
    }

    // Fast pre-check so the caller learns which service holds the slot. The
    // store's partial unique index stays authoritative if a concurrent insert
    // slips past this read.
    let existing = state.booking_repo.find_active_for_slot(date, time).await?;
    if let Some(occupying) = existing.first() {
        let occupying_service = state.service_repo.find_by_id(&occupying.service_id).await?
            .map(|s| s.name)
            .unwrap_or_else(|| "其他服务".to_string());

        warn!("Booking rejected: slot {} {} already held by {}", date, payload.time, occupying_service);
        return Err(AppError::Conflict(format!(
            "该时间段已被预约（{}），请选择其他时间",
            occupying_service
        )));
    }

    let booking = Booking::new(NewBookingParams {
        service_id: payload.service_id,
        date,
        time,
        customer_name: payload.customer_name.trim().to_string(),
        customer_phone: payload.customer_phone,
        notes: payload.notes,
    });

    let created = state.booking_repo.create(&booking).await?;
    info!("Booking created: {} ({} at {} {})", created.id, service.name, date, payload.time);

    Ok(Json(created))
}

pub async fn get_booked_slots(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let date_str = params.get("date").ok_or(AppError::Validation("date required".into()))?;
    let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format".into()))?;

    let bookings = state.booking_repo.list_active_for_date(date).await?;

    Ok(Json(SlotsResponse {
        date: date_str.clone(),
        slots: time_slots().iter().map(|t| t.format("%H:%M").to_string()).collect(),
        booked: occupied_times(&bookings),
    }))
}

pub async fn lookup_bookings(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let phone = params.get("phone").ok_or(AppError::Validation("phone required".into()))?;
    if !is_valid_phone(phone) {
        return Err(AppError::Validation("Invalid mobile number format".into()));
    }

    let bookings = state.booking_repo.list_by_phone(phone).await?;
    Ok(Json(bookings))
}
