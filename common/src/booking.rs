use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::packages::Package;

/// Body of the booking-creation endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingRequest {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub selected_date: String, // YYYY-MM-DD
    pub selected_time: String, // HH:MM
    pub package_type: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingResponse {
    pub success: bool,
    pub message: String,
}

impl BookingResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookingError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("'{0}' is not a valid date (expected YYYY-MM-DD)")]
    InvalidDate(String),
    #[error("'{0}' is not a valid time (expected HH:MM)")]
    InvalidTime(String),
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}

impl BookingRequest {
    pub fn validate(&self) -> Result<(), BookingError> {
        let required = [
            ("customerName", &self.customer_name),
            ("customerEmail", &self.customer_email),
            ("customerPhone", &self.customer_phone),
            ("selectedDate", &self.selected_date),
            ("selectedTime", &self.selected_time),
            ("address", &self.address),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(BookingError::MissingField(field));
            }
        }
        if !crate::contact::looks_like_email(self.customer_email.trim()) {
            return Err(BookingError::InvalidEmail(self.customer_email.clone()));
        }
        self.start().map(|_| ())
    }

    /// Start of the requested slot, local to the school.
    pub fn start(&self) -> Result<NaiveDateTime, BookingError> {
        let date = NaiveDate::parse_from_str(self.selected_date.trim(), "%Y-%m-%d")
            .map_err(|_| BookingError::InvalidDate(self.selected_date.clone()))?;
        let time = NaiveTime::parse_from_str(self.selected_time.trim(), "%H:%M")
            .map_err(|_| BookingError::InvalidTime(self.selected_time.clone()))?;
        Ok(date.and_time(time))
    }

    /// Start and finish of the slot for the given package.
    pub fn slot(&self, package: &Package) -> Result<(NaiveDateTime, NaiveDateTime), BookingError> {
        let start = self.start()?;
        Ok((start, start + Duration::minutes(package.lesson_minutes as i64)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packages::find_package;

    fn request() -> BookingRequest {
        BookingRequest {
            customer_name: "Sam Driver".into(),
            customer_email: "sam@example.com".into(),
            customer_phone: "07700 900456".into(),
            selected_date: "2026-11-02".into(),
            selected_time: "09:30".into(),
            package_type: "testrental".into(),
            address: "1 Harbour Way, Bristol".into(),
        }
    }

    #[test]
    fn decodes_camel_case_body() {
        let body = r#"{
            "customerName": "Sam Driver",
            "customerEmail": "sam@example.com",
            "customerPhone": "07700 900456",
            "selectedDate": "2026-11-02",
            "selectedTime": "09:30",
            "packageType": "testrental",
            "address": "1 Harbour Way, Bristol"
        }"#;
        let decoded: BookingRequest = serde_json::from_str(body).unwrap();
        assert_eq!(decoded, request());
    }

    #[test]
    fn slot_uses_package_length() {
        let package = find_package("testrental").unwrap();
        let (start, finish) = request().slot(package).unwrap();
        assert_eq!(start.to_string(), "2026-11-02 09:30:00");
        assert_eq!(finish.to_string(), "2026-11-02 11:30:00");
    }

    #[test]
    fn rejects_bad_date_and_time() {
        let mut r = request();
        r.selected_date = "02/11/2026".into();
        assert_eq!(r.validate(), Err(BookingError::InvalidDate("02/11/2026".into())));

        let mut r = request();
        r.selected_time = "25:00".into();
        assert_eq!(r.validate(), Err(BookingError::InvalidTime("25:00".into())));
    }

    #[test]
    fn requires_address() {
        let mut r = request();
        r.address = " ".into();
        assert_eq!(r.validate(), Err(BookingError::MissingField("address")));
    }

    #[test]
    fn package_type_is_not_required() {
        let mut r = request();
        r.package_type.clear();
        assert!(r.validate().is_ok());
    }
}
