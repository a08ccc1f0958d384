use crate::domain::{models::session::AdminSession, ports::SessionRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

pub struct PostgresSessionRepo {
    pool: PgPool,
}

impl PostgresSessionRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for PostgresSessionRepo {
    async fn create(&self, session: &AdminSession) -> Result<(), AppError> {
        sqlx::query("INSERT INTO admin_sessions (token_hash, user_id, expires_at, created_at) VALUES ($1, $2, $3, $4)").bind(&session.token_hash).bind(&session.user_id).bind(session.expires_at).bind(session.created_at).execute(&self.pool).await.map_err(AppError::Database)?;
        Ok(())
    }
    async fn find_by_hash(&self, token_hash: &str) -> Result<Option<AdminSession>, AppError> {
        sqlx::query_as::<_, AdminSession>("SELECT * FROM admin_sessions WHERE token_hash = $1").bind(token_hash).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn delete_by_hash(&self, token_hash: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM admin_sessions WHERE token_hash = $1").bind(token_hash).execute(&self.pool).await.map_err(AppError::Database)?;
        Ok(())
    }
    async fn delete_expired(&self) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM admin_sessions WHERE expires_at < $1").bind(Utc::now()).execute(&self.pool).await.map_err(AppError::Database)?;
        Ok(result.rows_affected())
    }
}
