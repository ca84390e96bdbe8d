//! User repository for database operations

use std::time::Duration;

use common::database::with_timeout;
use common::error::DatabaseResult;
use sqlx::PgPool;
use tracing::info;

use crate::models::{NewUser, User};

/// User repository
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
    query_timeout: Duration,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }

    /// Find a user by exact email
    pub async fn find_by_email(&self, email: &str) -> DatabaseResult<Option<User>> {
        info!("Finding user by email: {}", email);

        with_timeout(
            self.query_timeout,
            sqlx::query_as::<_, User>(
                r#"
                SELECT id, name, email, password
                FROM users
                WHERE email = $1
                "#,
            )
            .bind(email)
            .fetch_optional(&self.pool),
        )
        .await
    }

    /// Find a user by ID
    pub async fn find_by_id(&self, id: i32) -> DatabaseResult<Option<User>> {
        info!("Finding user by ID: {}", id);

        with_timeout(
            self.query_timeout,
            sqlx::query_as::<_, User>(
                r#"
                SELECT id, name, email, password
                FROM users
                WHERE id = $1
                "#,
            )
            .bind(id)
            .fetch_optional(&self.pool),
        )
        .await
    }

    /// Create a new user, returning the stored row with its generated id
    pub async fn create(&self, new_user: &NewUser) -> DatabaseResult<User> {
        info!("Creating new user: {}", new_user.email);

        with_timeout(
            self.query_timeout,
            sqlx::query_as::<_, User>(
                r#"
                INSERT INTO users (name, email, password)
                VALUES ($1, $2, $3)
                RETURNING id, name, email, password
                "#,
            )
            .bind(&new_user.name)
            .bind(&new_user.email)
            .bind(&new_user.password)
            .fetch_one(&self.pool),
        )
        .await
    }
}
