use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;

/// Booking lifecycle. `completed` and `cancelled` are terminal; only a
/// `cancelled` booking frees its slot for re-booking.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, BookingStatus::Completed | BookingStatus::Cancelled)
    }

    /// Legal transitions: pending -> confirmed, confirmed -> completed,
    /// pending|confirmed -> cancelled. Everything else is rejected.
    pub fn can_transition_to(self, next: BookingStatus) -> bool {
        matches!(
            (self, next),
            (BookingStatus::Pending, BookingStatus::Confirmed)
                | (BookingStatus::Confirmed, BookingStatus::Completed)
                | (BookingStatus::Pending, BookingStatus::Cancelled)
                | (BookingStatus::Confirmed, BookingStatus::Cancelled)
        )
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(BookingStatus::Pending),
            "confirmed" => Ok(BookingStatus::Confirmed),
            "completed" => Ok(BookingStatus::Completed),
            "cancelled" => Ok(BookingStatus::Cancelled),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Booking {
    pub id: String,
    pub service_id: String,
    pub appointment_date: NaiveDate,
    pub appointment_time: NaiveTime,
    pub status: BookingStatus,
    pub customer_name: String,
    pub customer_phone: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewBookingParams {
    pub service_id: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub customer_name: String,
    pub customer_phone: String,
    pub notes: Option<String>,
}

impl Booking {
    pub fn new(params: NewBookingParams) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            service_id: params.service_id,
            appointment_date: params.date,
            appointment_time: params.time,
            status: BookingStatus::Pending,
            customer_name: params.customer_name,
            customer_phone: params.customer_phone,
            notes: params.notes,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn appointment_instant(&self) -> NaiveDateTime {
        self.appointment_date.and_time(self.appointment_time)
    }
}

/// Booking row joined with its service for the admin and phone-lookup views.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct BookingWithService {
    pub id: String,
    pub service_id: String,
    pub appointment_date: NaiveDate,
    pub appointment_time: NaiveTime,
    pub status: BookingStatus,
    pub customer_name: String,
    pub customer_phone: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub service_name: Option<String>,
    pub service_price: Option<f64>,
    pub service_duration_min: Option<i32>,
}

impl BookingWithService {
    pub fn appointment_instant(&self) -> NaiveDateTime {
        self.appointment_date.and_time(self.appointment_time)
    }
}

/// Mainland mobile number: 11 digits, leading 1, second digit 3-9.
pub fn is_valid_phone(phone: &str) -> bool {
    let bytes = phone.as_bytes();
    bytes.len() == 11
        && bytes[0] == b'1'
        && (b'3'..=b'9').contains(&bytes[1])
        && bytes.iter().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_table() {
        assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Confirmed));
        assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Cancelled));
        assert!(BookingStatus::Confirmed.can_transition_to(BookingStatus::Completed));
        assert!(BookingStatus::Confirmed.can_transition_to(BookingStatus::Cancelled));

        assert!(!BookingStatus::Pending.can_transition_to(BookingStatus::Completed));
        assert!(!BookingStatus::Pending.can_transition_to(BookingStatus::Pending));
        assert!(!BookingStatus::Completed.can_transition_to(BookingStatus::Cancelled));
        assert!(!BookingStatus::Cancelled.can_transition_to(BookingStatus::Pending));
        assert!(!BookingStatus::Cancelled.can_transition_to(BookingStatus::Confirmed));
    }

    #[test]
    fn phone_format() {
        assert!(is_valid_phone("13800138000"));
        assert!(is_valid_phone("19912345678"));
        assert!(!is_valid_phone("12800138000")); // second digit 2
        assert!(!is_valid_phone("1380013800")); // too short
        assert!(!is_valid_phone("138001380000")); // too long
        assert!(!is_valid_phone("1380013800a"));
        assert!(!is_valid_phone(""));
    }
}
