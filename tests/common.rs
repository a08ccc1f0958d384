use salon_booking_backend::{
    api::router::create_router,
    config::Config,
    domain::models::service::Service,
    domain::services::auth_service::AuthService,
    infra::repositories::{
        sqlite_booking_repo::SqliteBookingRepo,
        sqlite_service_repo::SqliteServiceRepo,
        sqlite_session_repo::SqliteSessionRepo,
        sqlite_user_repo::SqliteUserRepo,
    },
    state::AppState,
};
use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use chrono::{Duration, Local};
use serde_json::json;
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "correct-horse-battery";

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            admin_username: ADMIN_USERNAME.to_string(),
            admin_password: ADMIN_PASSWORD.to_string(),
            session_ttl_minutes: 60,
        };

        let user_repo = Arc::new(SqliteUserRepo::new(pool.clone()));
        let session_repo = Arc::new(SqliteSessionRepo::new(pool.clone()));
        let auth_service = Arc::new(AuthService::new(user_repo.clone(), session_repo.clone(), &config));
        auth_service
            .seed_admin_user(&config)
            .await
            .expect("Failed to seed admin user");

        let state = Arc::new(AppState {
            config,
            service_repo: Arc::new(SqliteServiceRepo::new(pool.clone())),
            booking_repo: Arc::new(SqliteBookingRepo::new(pool.clone())),
            user_repo,
            session_repo,
            auth_service,
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    /// Logs in as the seeded admin and returns the "admin_session=<token>"
    /// cookie pair for request headers.
    pub async fn login(&self) -> String {
        let res = self.router.clone().oneshot(
            Request::builder().method("POST").uri("/api/v1/admin/login")
                .header("Content-Type", "application/json")
                .body(Body::from(json!({
                    "username": ADMIN_USERNAME,
                    "password": ADMIN_PASSWORD
                }).to_string())).unwrap()
        ).await.unwrap();
        assert!(res.status().is_success(), "admin login failed: {}", res.status());

        let set_cookie = res.headers().get(header::SET_COOKIE)
            .expect("login did not set a session cookie")
            .to_str().unwrap();
        set_cookie.split(';').next().unwrap().to_string()
    }

    /// First seeded catalogue entry, for tests that don't care which service.
    #[allow(dead_code)]
    pub async fn any_service(&self) -> Service {
        self.state.service_repo.list_active().await.unwrap()
            .into_iter().next().expect("seed migration installed no services")
    }

    #[allow(dead_code)]
    pub async fn submit_booking(
        &self,
        service_id: &str,
        date: &str,
        time: &str,
        phone: &str,
    ) -> axum::response::Response {
        self.router.clone().oneshot(
            Request::builder().method("POST").uri("/api/v1/bookings")
                .header("Content-Type", "application/json")
                .body(Body::from(json!({
                    "service_id": service_id,
                    "date": date,
                    "time": time,
                    "customer_name": "张三",
                    "customer_phone": phone
                }).to_string())).unwrap()
        ).await.unwrap()
    }

    #[allow(dead_code)]
    pub async fn set_status(
        &self,
        cookie: &str,
        booking_id: &str,
        status: &str,
    ) -> axum::response::Response {
        self.router.clone().oneshot(
            Request::builder().method("PUT")
                .uri(format!("/api/v1/admin/bookings/{}/status", booking_id))
                .header(header::COOKIE, cookie)
                .header("Content-Type", "application/json")
                .body(Body::from(json!({ "status": status }).to_string())).unwrap()
        ).await.unwrap()
    }
}

/// A bookable date `days` from today, formatted for the API.
#[allow(dead_code)]
pub fn days_ahead(days: i64) -> String {
    (Local::now().date_naive() + Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}
