use serde::Serialize;
use std::str::FromStr;
use crate::domain::models::booking::{BookingStatus, BookingWithService};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Combined (appointment_date, appointment_time) instant.
    #[default]
    AppointmentDate,
    /// Lexicographic on the status string.
    Status,
    CreatedAt,
}

impl FromStr for SortKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date" => Ok(SortKey::AppointmentDate),
            "status" => Ok(SortKey::Status),
            "created" => Ok(SortKey::CreatedAt),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl FromStr for SortOrder {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Default)]
pub struct BookingQuery {
    /// Substring match on customer_phone; empty matches everything.
    pub phone: String,
    /// None = all statuses.
    pub status: Option<BookingStatus>,
    pub sort_by: SortKey,
    pub order: SortOrder,
}

/// Pure filter + stable sort over an already-fetched collection. Filters are
/// a conjunction; ties keep store iteration order.
pub fn filter_and_sort(
    mut bookings: Vec<BookingWithService>,
    query: &BookingQuery,
) -> Vec<BookingWithService> {
    bookings.retain(|b| {
        let phone_match = query.phone.is_empty() || b.customer_phone.contains(&query.phone);
        let status_match = query.status.is_none_or(|s| b.status == s);
        phone_match && status_match
    });

    bookings.sort_by(|a, b| {
        let ord = match query.sort_by {
            SortKey::AppointmentDate => a.appointment_instant().cmp(&b.appointment_instant()),
            SortKey::Status => a.status.as_str().cmp(b.status.as_str()),
            SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
        };
        match query.order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });

    bookings
}

#[derive(Debug, Serialize, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub total: usize,
    pub pending: usize,
    pub confirmed: usize,
    pub completed: usize,
    pub cancelled: usize,
}

pub fn status_counts(bookings: &[BookingWithService]) -> StatusCounts {
    let mut counts = StatusCounts {
        total: bookings.len(),
        ..StatusCounts::default()
    };
    for booking in bookings {
        match booking.status {
            BookingStatus::Pending => counts.pending += 1,
            BookingStatus::Confirmed => counts.confirmed += 1,
            BookingStatus::Completed => counts.completed += 1,
            BookingStatus::Cancelled => counts.cancelled += 1,
        }
    }
    counts
}
