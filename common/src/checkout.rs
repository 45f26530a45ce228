use serde::{Deserialize, Serialize};

use crate::packages::format_gbp;

/// What the success page shows about a finished Stripe Checkout session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSessionDetails {
    #[serde(default)]
    pub id: String,
    pub payment_status: String,
    #[serde(default)]
    pub amount_total: Option<i64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub metadata: SessionMetadata,
    #[serde(default)]
    pub customer_details: Option<CustomerDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionMetadata {
    #[serde(default)]
    pub package_name: Option<String>,
    #[serde(default)]
    pub package_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerDetails {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl CheckoutSessionDetails {
    pub fn is_paid(&self) -> bool {
        self.payment_status == "paid" || self.payment_status == "no_payment_required"
    }

    pub fn formatted_total(&self) -> Option<String> {
        let amount = self.amount_total?;
        match self.currency.as_deref().map(str::to_ascii_lowercase).as_deref() {
            None | Some("gbp") => Some(format_gbp(amount)),
            Some(other) => Some(format!("{:.2} {}", amount as f64 / 100.0, other.to_uppercase())),
        }
    }

    pub fn customer_email(&self) -> Option<&str> {
        self.customer_details.as_ref()?.email.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCheckoutRequest {
    pub package_id: String,
    #[serde(default)]
    pub customer_email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCheckoutResponse {
    pub session_id: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_serverless_shape() {
        let body = r#"{
            "payment_status": "paid",
            "amount_total": 35000,
            "metadata": {"packageName": "10-Hour Package"},
            "customer_details": {"email": "ada@example.com"}
        }"#;
        let details: CheckoutSessionDetails = serde_json::from_str(body).unwrap();
        assert!(details.is_paid());
        assert_eq!(details.formatted_total().as_deref(), Some("£350"));
        assert_eq!(details.metadata.package_name.as_deref(), Some("10-Hour Package"));
        assert_eq!(details.customer_email(), Some("ada@example.com"));
        assert!(details.id.is_empty());
    }

    #[test]
    fn tolerates_missing_optional_sections() {
        let details: CheckoutSessionDetails =
            serde_json::from_str(r#"{"payment_status":"unpaid"}"#).unwrap();
        assert!(!details.is_paid());
        assert_eq!(details.formatted_total(), None);
        assert_eq!(details.customer_email(), None);
    }

    #[test]
    fn formats_foreign_currency() {
        let details = CheckoutSessionDetails {
            id: "cs_test".into(),
            payment_status: "paid".into(),
            amount_total: Some(4250),
            currency: Some("eur".into()),
            metadata: SessionMetadata::default(),
            customer_details: None,
        };
        assert_eq!(details.formatted_total().as_deref(), Some("42.50 EUR"));
    }
}
