//! Persistence gateway: the only code that talks to Postgres.
//!
//! Each call checks one connection out of the pool, runs one parameterized
//! statement and hands the connection back before returning, whether the
//! statement succeeded or not. Driver errors are logged here and collapse to
//! `None`; callers only learn "no result".

use std::str::FromStr;

use sqlx::postgres::{PgArguments, PgConnectOptions, PgPoolOptions, PgRow, PgSslMode};
use sqlx::query::Query;
use sqlx::{PgPool, Postgres};
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::config::DatabaseConfig;
use crate::errors::AppResult;

/// Bind parameter for [`Gateway::execute`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlParam {
    Text(String),
    Bool(bool),
    Uuid(Uuid),
}

impl From<&str> for SqlParam {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<bool> for SqlParam {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Uuid> for SqlParam {
    fn from(value: Uuid) -> Self {
        Self::Uuid(value)
    }
}

fn bind_all<'q>(
    mut query: Query<'q, Postgres, PgArguments>,
    params: &'q [SqlParam],
) -> Query<'q, Postgres, PgArguments> {
    for param in params {
        query = match param {
            SqlParam::Text(v) => query.bind(v.as_str()),
            SqlParam::Bool(v) => query.bind(*v),
            SqlParam::Uuid(v) => query.bind(*v),
        };
    }
    query
}

/// Shared handle over the connection pool. Cloning is cheap.
#[derive(Clone)]
pub struct Gateway {
    pool: PgPool,
}

impl Gateway {
    /// Open the pool described by `config`.
    ///
    /// Outside development the connection negotiates TLS without verifying the
    /// server certificate.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let ssl_mode = if config.require_tls {
            PgSslMode::Require
        } else {
            PgSslMode::Disable
        };
        let options = PgConnectOptions::from_str(&config.url)?.ssl_mode(ssl_mode);

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect_with(options)
            .await?;

        info!(
            max_connections = config.max_connections,
            tls = config.require_tls,
            "database pool ready"
        );
        Ok(Self { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Run one parameterized statement and return its rows.
    ///
    /// `None` means the statement did not run to completion: no connection,
    /// or the driver rejected it. The cause is logged, not returned.
    pub async fn execute(&self, sql: &str, params: &[SqlParam]) -> Option<Vec<PgRow>> {
        let mut conn = match self.pool.acquire().await {
            Ok(conn) => conn,
            Err(e) => {
                error!(error = %e, "could not acquire database connection");
                return None;
            }
        };

        let result = bind_all(sqlx::query(sql), params).fetch_all(&mut *conn).await;
        drop(conn);

        match result {
            Ok(rows) => {
                debug!(rows = rows.len(), "query completed");
                Some(rows)
            }
            Err(e) => {
                error!(error = %e, "query failed");
                None
            }
        }
    }

    /// Close every pooled connection. Called once on shutdown.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("database pool closed");
    }
}
