//! Schema bootstrap for the `signatures` table.

use tracing::info;

use super::gateway::Gateway;
use crate::errors::AppResult;

pub const CREATE_SIGNATURES: &str = r#"
CREATE TABLE IF NOT EXISTS signatures (
    id UUID PRIMARY KEY,
    name TEXT NOT NULL,
    "nationalId" VARCHAR(10) NOT NULL,
    comment TEXT NOT NULL DEFAULT '',
    anonymous BOOLEAN NOT NULL DEFAULT FALSE,
    signed TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT CURRENT_TIMESTAMP
)
"#;

impl Gateway {
    /// Create the `signatures` table if it is missing.
    ///
    /// Unlike [`Gateway::execute`] this propagates the driver error: a service
    /// without its table cannot start.
    pub async fn ensure_schema(&self) -> AppResult<()> {
        sqlx::query(CREATE_SIGNATURES).execute(self.pool()).await?;
        info!("signatures table ready");
        Ok(())
    }
}
