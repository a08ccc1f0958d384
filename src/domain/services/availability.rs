use chrono::{Duration, NaiveDate, NaiveTime, Timelike};
use crate::domain::models::booking::{Booking, BookingStatus};

/// Business hours: a fixed 30-minute grid from 09:00 through 20:30 inclusive,
/// 24 slots per day. Slots are business-wide, not per-service.
pub const FIRST_SLOT_HOUR: u32 = 9;
pub const LAST_SLOT_HOUR: u32 = 20;
pub const SLOT_INTERVAL_MIN: u32 = 30;

/// Bookable dates roll: today through 29 days ahead.
pub const BOOKING_WINDOW_DAYS: i64 = 30;

pub fn time_slots() -> Vec<NaiveTime> {
    let mut slots = Vec::new();
    for hour in FIRST_SLOT_HOUR..=LAST_SLOT_HOUR {
        for minute in (0..60).step_by(SLOT_INTERVAL_MIN as usize) {
            slots.push(NaiveTime::from_hms_opt(hour, minute, 0).unwrap());
        }
    }
    slots
}

pub fn is_valid_slot(time: NaiveTime) -> bool {
    (FIRST_SLOT_HOUR..=LAST_SLOT_HOUR).contains(&time.hour())
        && time.minute() % SLOT_INTERVAL_MIN == 0
        && time.second() == 0
}

pub fn is_bookable_date(today: NaiveDate, date: NaiveDate) -> bool {
    date >= today && date < today + Duration::days(BOOKING_WINDOW_DAYS)
}

/// Distinct occupied times for one day, normalized to HH:MM. Cancelled
/// bookings never occupy a slot; duplicates across services collapse.
pub fn occupied_times(bookings: &[Booking]) -> Vec<String> {
    let mut times: Vec<String> = bookings
        .iter()
        .filter(|b| b.status != BookingStatus::Cancelled)
        .map(|b| b.appointment_time.format("%H:%M").to_string())
        .collect();
    times.sort();
    times.dedup();
    times
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::booking::NewBookingParams;

    fn booking_at(hour: u32, min: u32, sec: u32) -> Booking {
        Booking::new(NewBookingParams {
            service_id: "svc".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            time: NaiveTime::from_hms_opt(hour, min, sec).unwrap(),
            customer_name: "测试".to_string(),
            customer_phone: "13800138000".to_string(),
            notes: None,
        })
    }

    #[test]
    fn grid_is_24_slots() {
        let slots = time_slots();
        assert_eq!(slots.len(), 24);
        assert_eq!(slots[0], NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(slots[23], NaiveTime::from_hms_opt(20, 30, 0).unwrap());
    }

    #[test]
    fn slot_validity() {
        assert!(is_valid_slot(NaiveTime::from_hms_opt(9, 0, 0).unwrap()));
        assert!(is_valid_slot(NaiveTime::from_hms_opt(20, 30, 0).unwrap()));
        assert!(!is_valid_slot(NaiveTime::from_hms_opt(8, 30, 0).unwrap()));
        assert!(!is_valid_slot(NaiveTime::from_hms_opt(21, 0, 0).unwrap()));
        assert!(!is_valid_slot(NaiveTime::from_hms_opt(10, 15, 0).unwrap()));
        assert!(!is_valid_slot(NaiveTime::from_hms_opt(10, 0, 30).unwrap()));
    }

    #[test]
    fn booking_window_is_30_days() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert!(is_bookable_date(today, today));
        assert!(is_bookable_date(today, today + Duration::days(29)));
        assert!(!is_bookable_date(today, today + Duration::days(30)));
        assert!(!is_bookable_date(today, today - Duration::days(1)));
    }

    #[test]
    fn occupied_times_dedups_and_normalizes() {
        let mut a = booking_at(10, 0, 0);
        let b = booking_at(10, 0, 30); // same slot, different service, stray seconds
        let c = booking_at(9, 30, 0);
        a.service_id = "other".to_string();

        let times = occupied_times(&[a, b, c]);
        assert_eq!(times, vec!["09:30".to_string(), "10:00".to_string()]);
    }

    #[test]
    fn occupied_times_skips_cancelled() {
        let mut cancelled = booking_at(11, 0, 0);
        cancelled.status = BookingStatus::Cancelled;
        let active = booking_at(12, 0, 0);

        let times = occupied_times(&[cancelled, active]);
        assert_eq!(times, vec!["12:00".to_string()]);
    }
}
