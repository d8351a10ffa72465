//! Signature repository
//!
//! Write path (one parameterized insert) and read path (load everything,
//! re-escape, format the date) for the `signatures` table.

use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::Row;
use tracing::{error, info};

use super::gateway::{Gateway, SqlParam};
use crate::models::{NewSignature, SignatureView, StoredSignature};
use crate::pipeline::escape;

const SELECT_ALL: &str =
    r#"SELECT id, name, "nationalId", comment, anonymous, signed FROM signatures"#;

const INSERT_ONE: &str = r#"
    INSERT INTO signatures (id, name, "nationalId", comment, anonymous)
    VALUES ($1, $2, $3, $4, $5)
"#;

/// Append-only signature storage.
///
/// Both operations report failure as `None`; the cause has already been logged
/// by the implementation.
#[allow(async_fn_in_trait)]
pub trait SignatureStore {
    /// Every stored row, in storage order.
    async fn all(&self) -> Option<Vec<StoredSignature>>;

    /// Insert exactly one row.
    async fn insert(&self, row: &NewSignature) -> Option<()>;
}

/// Postgres-backed store on top of the [`Gateway`].
pub struct SignatureRepository {
    gateway: Gateway,
}

impl SignatureRepository {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }
}

fn row_to_signature(row: &PgRow) -> Result<StoredSignature, sqlx::Error> {
    Ok(StoredSignature {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        national_id: row.try_get("nationalId")?,
        comment: row.try_get("comment")?,
        anonymous: row.try_get("anonymous")?,
        signed: row.try_get("signed")?,
    })
}

impl SignatureStore for SignatureRepository {
    async fn all(&self) -> Option<Vec<StoredSignature>> {
        let rows = self.gateway.execute(SELECT_ALL, &[]).await?;
        match rows.iter().map(row_to_signature).collect::<Result<Vec<_>, _>>() {
            Ok(signatures) => Some(signatures),
            Err(e) => {
                error!(error = %e, "could not decode signature row");
                None
            }
        }
    }

    async fn insert(&self, row: &NewSignature) -> Option<()> {
        let params = [
            SqlParam::from(row.id),
            SqlParam::from(row.name.as_str()),
            SqlParam::from(row.national_id.as_str()),
            SqlParam::from(row.comment.as_str()),
            SqlParam::from(row.anonymous),
        ];
        self.gateway.execute(INSERT_ONE, &params).await?;
        info!(id = %row.id, anonymous = row.anonymous, "signature stored");
        Some(())
    }
}

/// `DD.MM.YYYY`, zero-padded, in UTC.
pub fn format_signed(signed: &DateTime<Utc>) -> String {
    signed.format("%d.%m.%Y").to_string()
}

/// Display form of a stored row. Text is escaped again even though it was
/// escaped on the way in; [`escape`] is idempotent.
pub fn to_view(row: &StoredSignature) -> SignatureView {
    SignatureView {
        id: escape(&row.id.to_string()),
        name: escape(&row.name),
        national_id: escape(&row.national_id),
        comment: escape(&row.comment),
        anonymous: row.anonymous,
        signed: format_signed(&row.signed),
    }
}

/// Read path: load every signature ready for display.
pub async fn list_signatures<S: SignatureStore>(store: &S) -> Option<Vec<SignatureView>> {
    let rows = store.all().await?;
    Some(rows.iter().map(to_view).collect())
}

/// Write path: persist one sanitized submission.
pub async fn save_signature<S: SignatureStore>(store: &S, row: &NewSignature) -> Option<()> {
    store.insert(row).await
}
