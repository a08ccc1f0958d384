use crate::domain::models::{
    booking::{Booking, BookingStatus, BookingWithService},
    service::Service,
    session::AdminSession,
    user::User,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};

#[async_trait]
pub trait ServiceRepository: Send + Sync {
    async fn create(&self, service: &Service) -> Result<Service, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Service>, AppError>;
    /// Active services only, ordered by name.
    async fn list_active(&self) -> Result<Vec<Service>, AppError>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn create(&self, booking: &Booking) -> Result<Booking, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError>;
    /// Non-cancelled bookings on a date (slot-availability reads).
    async fn list_active_for_date(&self, date: NaiveDate) -> Result<Vec<Booking>, AppError>;
    /// Non-cancelled bookings occupying an exact (date, time) slot.
    async fn find_active_for_slot(
        &self,
        date: NaiveDate,
        time: NaiveTime,
    ) -> Result<Vec<Booking>, AppError>;
    /// A customer's bookings, newest appointment first, service joined.
    async fn list_by_phone(&self, phone: &str) -> Result<Vec<BookingWithService>, AppError>;
    /// Every booking, newest appointment first, service joined (admin view).
    async fn list_all(&self) -> Result<Vec<BookingWithService>, AppError>;
    /// Persists the status field only; NotFound when the id is unknown.
    async fn update_status(&self, id: &str, status: BookingStatus) -> Result<Booking, AppError>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<User, AppError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;
}

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn create(&self, session: &AdminSession) -> Result<(), AppError>;
    async fn find_by_hash(&self, token_hash: &str) -> Result<Option<AdminSession>, AppError>;
    async fn delete_by_hash(&self, token_hash: &str) -> Result<(), AppError>;
    async fn delete_expired(&self) -> Result<u64, AppError>;
}
