//! The query gateway
//!
//! [`QueryGateway`] is the single entry point callers use. It holds no state
//! of its own beyond the shared pool; each call is one statement, and
//! overlapping calls rely on the pool for connection checkout.

use std::time::Duration;

use common::database::{self, DatabaseConfig, init_pool};
use common::error::DatabaseResult;
use sqlx::PgPool;

use crate::models::{
    NewProperty, NewUser, Property, PropertyWithRating, ReservationWithProperty, User,
};
use crate::repositories::{PropertyRepository, ReservationRepository, UserRepository};
use crate::search::PropertyFilters;

#[derive(Clone)]
pub struct QueryGateway {
    pool: PgPool,
    users: UserRepository,
    reservations: ReservationRepository,
    properties: PropertyRepository,
}

impl QueryGateway {
    /// Build a gateway over an existing pool
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            users: UserRepository::new(pool.clone(), query_timeout),
            reservations: ReservationRepository::new(pool.clone(), query_timeout),
            properties: PropertyRepository::new(pool.clone(), query_timeout),
            pool,
        }
    }

    /// Open a pool from `config` and build a gateway over it
    pub async fn connect(config: &DatabaseConfig) -> DatabaseResult<Self> {
        let pool = init_pool(config).await?;
        Ok(Self::new(pool, config.query_timeout()))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn health_check(&self) -> DatabaseResult<bool> {
        database::health_check(&self.pool).await
    }

    /// `Ok(None)` when no user has this email
    pub async fn find_user_by_email(&self, email: &str) -> DatabaseResult<Option<User>> {
        self.users.find_by_email(email).await
    }

    /// `Ok(None)` when no user has this id
    pub async fn find_user_by_id(&self, id: i32) -> DatabaseResult<Option<User>> {
        self.users.find_by_id(id).await
    }

    pub async fn create_user(&self, new_user: &NewUser) -> DatabaseResult<User> {
        self.users.create(new_user).await
    }

    pub async fn list_reservations_for_guest(
        &self,
        guest_id: i32,
        limit: i64,
    ) -> DatabaseResult<Vec<ReservationWithProperty>> {
        self.reservations.list_for_guest(guest_id, limit).await
    }

    pub async fn search_properties(
        &self,
        filters: &PropertyFilters,
        limit: i64,
    ) -> DatabaseResult<Vec<PropertyWithRating>> {
        self.properties.search(filters, limit).await
    }

    pub async fn create_property(&self, new_property: &NewProperty) -> DatabaseResult<Property> {
        self.properties.create(new_property).await
    }
}
