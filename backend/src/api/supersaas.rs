use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::Serialize;
use thiserror::Error;

use crate::config::settings::SuperSaasSettings;

const SUPERSAAS_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Error)]
pub enum SchedulerError {
    /// The wrapped error never carries the request URL, which holds the API key.
    #[error("request to SuperSaaS failed: {0}")]
    Http(reqwest::Error),
    #[error("SuperSaaS rejected the booking ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// A booking as SuperSaaS should record it.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub full_name: String,
    pub email: String,
    pub mobile: String,
    pub address: String,
    pub package_name: String,
    pub start: NaiveDateTime,
    pub finish: NaiveDateTime,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingProvider: Send + Sync {
    /// Creates the booking and returns its reference when SuperSaaS gives one.
    async fn create_booking(&self, booking: NewBooking) -> Result<Option<String>, SchedulerError>;
}

#[derive(Serialize)]
struct BookingEnvelope<'a> {
    booking: BookingFields<'a>,
}

#[derive(Serialize)]
struct BookingFields<'a> {
    start: String,
    finish: String,
    full_name: &'a str,
    email: &'a str,
    mobile: &'a str,
    address: &'a str,
    field_1: &'a str, // package name, shown to instructors in the schedule
}

pub struct SuperSaasClient {
    client: reqwest::Client,
    settings: SuperSaasSettings,
}

impl SuperSaasClient {
    pub fn new(settings: SuperSaasSettings) -> Self {
        Self {
            client: reqwest::Client::new(),
            settings,
        }
    }
}

#[async_trait]
impl BookingProvider for SuperSaasClient {
    async fn create_booking(&self, booking: NewBooking) -> Result<Option<String>, SchedulerError> {
        let body = BookingEnvelope {
            booking: BookingFields {
                start: booking.start.format(SUPERSAAS_TIME_FORMAT).to_string(),
                finish: booking.finish.format(SUPERSAAS_TIME_FORMAT).to_string(),
                full_name: &booking.full_name,
                email: &booking.email,
                mobile: &booking.mobile,
                address: &booking.address,
                field_1: &booking.package_name,
            },
        };

        let response = self
            .client
            .post(format!("{}/api/bookings.json", self.settings.base_url))
            .query(&[
                ("schedule_id", self.settings.schedule_id.as_str()),
                ("account", self.settings.account.as_str()),
                ("api_key", self.settings.api_key.as_str()),
            ])
            .json(&body)
            .send()
            .await
            .map_err(|e| SchedulerError::Http(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("SuperSaaS booking rejected with {}: {}", status, body);
            return Err(SchedulerError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        // SuperSaaS answers 201 with the new booking's URL in Location
        let reference = response
            .headers()
            .get(reqwest::header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|loc| loc.rsplit('/').next())
            .map(|id| id.trim_end_matches(".json").to_string())
            .filter(|id| !id.is_empty());
        Ok(reference)
    }
}
