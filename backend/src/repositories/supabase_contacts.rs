use async_trait::async_trait;
use clearway_common::ContactMessage;
use serde::Serialize;

use crate::repositories::contact_repository::{ContactStore, StoreError};

/// Writes contact messages into a Supabase table through its REST API.
pub struct SupabaseContactStore {
    client: reqwest::Client,
    insert_url: String,
    service_key: String,
}

#[derive(Serialize)]
struct ContactRow<'a> {
    name: &'a str,
    email: &'a str,
    phone: Option<&'a str>,
    message: &'a str,
    created_at: String,
}

impl SupabaseContactStore {
    pub fn new(base_url: &str, service_key: &str, table: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            insert_url: format!("{}/rest/v1/{}", base_url.trim_end_matches('/'), table),
            service_key: service_key.to_string(),
        }
    }
}

#[async_trait]
impl ContactStore for SupabaseContactStore {
    async fn insert(&self, message: ContactMessage) -> Result<(), StoreError> {
        let row = ContactRow {
            name: &message.name,
            email: &message.email,
            phone: message.phone.as_deref(),
            message: &message.message,
            created_at: message.created_at.to_rfc3339(),
        };

        let response = self
            .client
            .post(&self.insert_url)
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .header("Prefer", "return=minimal")
            .json(&row)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!("Stored contact message in Supabase ({})", status);
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(StoreError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
