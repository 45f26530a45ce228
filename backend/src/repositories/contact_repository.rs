use async_trait::async_trait;
use clearway_common::ContactMessage;
use diesel::prelude::*;
use thiserror::Error;

use crate::{
    models::contact_models::NewContactMessage,
    schema::contact_messages,
    DbPool,
};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    #[error("request to hosted database failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("hosted database rejected insert ({status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("insert task failed: {0}")]
    Task(String),
}

/// Insert-only storage for contact-form messages.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactStore: Send + Sync {
    async fn insert(&self, message: ContactMessage) -> Result<(), StoreError>;
}

pub struct SqliteContactStore {
    pool: DbPool,
}

impl SqliteContactStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactStore for SqliteContactStore {
    async fn insert(&self, message: ContactMessage) -> Result<(), StoreError> {
        let pool = self.pool.clone();
        let row = NewContactMessage::from(message);

        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get()?;
            diesel::insert_into(contact_messages::table)
                .values(&row)
                .execute(&mut conn)?;
            Ok::<_, StoreError>(())
        })
        .await
        .map_err(|e| StoreError::Task(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::contact_models::ContactMessageRow;
    use chrono::{TimeZone, Utc};

    fn message(name: &str) -> ContactMessage {
        ContactMessage {
            name: name.to_string(),
            email: "ada@example.com".to_string(),
            phone: None,
            message: "Do you teach in automatics?".to_string(),
            created_at: Utc.with_ymd_and_hms(2026, 5, 4, 12, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn inserts_rows_without_deduplicating() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.db");
        let pool = crate::create_pool(path.to_str().unwrap()).unwrap();
        let store = SqliteContactStore::new(pool.clone());

        store.insert(message("Ada")).await.unwrap();
        store.insert(message("Ada")).await.unwrap();

        let mut conn = pool.get().unwrap();
        let rows: Vec<ContactMessageRow> = contact_messages::table
            .select(ContactMessageRow::as_select())
            .order(contact_messages::id.asc())
            .load(&mut conn)
            .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Ada");
        assert_eq!(rows[0].phone, None);
        assert_eq!(rows[0].created_at, 1_777_896_000);
    }
}
