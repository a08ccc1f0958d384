use crate::domain::{
    models::booking::{Booking, BookingStatus, BookingWithService},
    ports::BookingRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime, Utc};
use sqlx::SqlitePool;

const JOINED_SELECT: &str = "SELECT b.id, b.service_id, b.appointment_date, b.appointment_time, b.status, b.customer_name, b.customer_phone, b.notes, b.created_at, b.updated_at, s.name AS service_name, s.price AS service_price, s.duration_min AS service_duration_min FROM bookings b LEFT JOIN services s ON s.id = b.service_id";

pub struct SqliteBookingRepo {
    pool: SqlitePool,
}

impl SqliteBookingRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for SqliteBookingRepo {
    async fn create(&self, booking: &Booking) -> Result<Booking, AppError> {
        sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (id, service_id, appointment_date, appointment_time, status, customer_name, customer_phone, notes, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&booking.id).bind(&booking.service_id).bind(booking.appointment_date).bind(booking.appointment_time)
            .bind(booking.status).bind(&booking.customer_name).bind(&booking.customer_phone).bind(&booking.notes)
            .bind(booking.created_at).bind(booking.updated_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = ?").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn list_active_for_date(&self, date: NaiveDate) -> Result<Vec<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE appointment_date = ? AND status != 'cancelled'").bind(date).fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn find_active_for_slot(&self, date: NaiveDate, time: NaiveTime) -> Result<Vec<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE appointment_date = ? AND appointment_time = ? AND status != 'cancelled'").bind(date).bind(time).fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn list_by_phone(&self, phone: &str) -> Result<Vec<BookingWithService>, AppError> {
        sqlx::query_as::<_, BookingWithService>(&format!("{JOINED_SELECT} WHERE b.customer_phone = ? ORDER BY b.appointment_date DESC, b.appointment_time DESC")).bind(phone).fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn list_all(&self) -> Result<Vec<BookingWithService>, AppError> {
        sqlx::query_as::<_, BookingWithService>(&format!("{JOINED_SELECT} ORDER BY b.appointment_date DESC, b.appointment_time DESC")).fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn update_status(&self, id: &str, status: BookingStatus) -> Result<Booking, AppError> {
        sqlx::query_as::<_, Booking>("UPDATE bookings SET status = ?, updated_at = ? WHERE id = ? RETURNING *")
            .bind(status).bind(Utc::now()).bind(id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound("Booking not found".into()))
    }
}
