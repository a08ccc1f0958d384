use serde::Serialize;

#[derive(Serialize)]
pub struct SlotsResponse {
    pub date: String,
    /// The full 30-minute grid for the day, HH:MM.
    pub slots: Vec<String>,
    /// Occupied entries of that grid (non-cancelled bookings, deduped).
    pub booked: Vec<String>,
}

#[derive(Serialize)]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    pub role: String,
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub user: UserProfile,
}
