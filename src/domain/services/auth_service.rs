use std::sync::Arc;
use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Argon2, PasswordHash, PasswordVerifier,
};
use chrono::{Duration, Utc};
use rand::rngs::OsRng;
use rand::{distributions::Alphanumeric, Rng};
use sha2::{Digest, Sha256};
use tracing::info;

use crate::config::Config;
use crate::domain::models::{session::AdminSession, user::User};
use crate::domain::ports::{SessionRepository, UserRepository};
use crate::error::AppError;

/// Opaque-token admin auth: argon2 passwords, random session tokens stored
/// hashed with a TTL, validated against the store on every request.
pub struct AuthService {
    user_repo: Arc<dyn UserRepository>,
    session_repo: Arc<dyn SessionRepository>,
    session_ttl: Duration,
}

impl AuthService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        session_repo: Arc<dyn SessionRepository>,
        config: &Config,
    ) -> Self {
        Self {
            user_repo,
            session_repo,
            session_ttl: Duration::minutes(config.session_ttl_minutes),
        }
    }

    /// Creates the staff account from config on first boot.
    pub async fn seed_admin_user(&self, config: &Config) -> Result<(), AppError> {
        if self
            .user_repo
            .find_by_username(&config.admin_username)
            .await?
            .is_some()
        {
            return Ok(());
        }

        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(config.admin_password.as_bytes(), &salt)
            .map_err(|_| AppError::Internal)?
            .to_string();

        let user = User::new(config.admin_username.clone(), password_hash);
        self.user_repo.create(&user).await?;
        info!("Seeded admin user: {}", user.username);
        Ok(())
    }

    /// Verifies credentials and opens a session. Returns the raw token
    /// (cookie value) and the authenticated user.
    pub async fn login(&self, username: &str, password: &str) -> Result<(String, User), AppError> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or(AppError::Unauthorized)?;

        let parsed_hash =
            PasswordHash::new(&user.password_hash).map_err(|_| AppError::Internal)?;
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| AppError::Unauthorized)?;

        let token: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(48)
            .map(char::from)
            .collect();

        let session = AdminSession::new(user.id.clone(), self.hash_token(&token), self.session_ttl);
        self.session_repo.create(&session).await?;

        Ok((token, user))
    }

    pub async fn validate(&self, raw_token: &str) -> Result<User, AppError> {
        let record = self
            .session_repo
            .find_by_hash(&self.hash_token(raw_token))
            .await?
            .ok_or(AppError::Unauthorized)?;

        if record.expires_at < Utc::now() {
            self.session_repo.delete_by_hash(&record.token_hash).await?;
            return Err(AppError::Unauthorized);
        }

        self.user_repo
            .find_by_id(&record.user_id)
            .await?
            .ok_or(AppError::Unauthorized)
    }

    pub async fn logout(&self, raw_token: &str) -> Result<(), AppError> {
        self.session_repo
            .delete_by_hash(&self.hash_token(raw_token))
            .await
    }

    pub fn hash_token(&self, token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        hex::encode(hasher.finalize())
    }
}
