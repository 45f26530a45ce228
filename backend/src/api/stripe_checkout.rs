use std::collections::HashMap;

use async_trait::async_trait;
use clearway_common::checkout::{CustomerDetails, SessionMetadata};
use clearway_common::{CheckoutSessionDetails, CreateCheckoutResponse};
use stripe::{
    CheckoutSession,
    CheckoutSessionId,
    CheckoutSessionMode,
    Client,
    CreateCheckoutSession,
    CreateCheckoutSessionLineItems,
    CreateCheckoutSessionLineItemsPriceData,
    CreateCheckoutSessionLineItemsPriceDataProductData,
    Currency,
    StripeError,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("'{0}' is not a valid checkout session id")]
    InvalidSessionId(String),
    #[error("checkout session {0} not found")]
    NotFound(String),
    #[error("stripe error: {0}")]
    Stripe(String),
    #[error("stripe returned a session without a checkout url")]
    MissingUrl,
}

/// Everything needed to open a one-off Checkout session for a package.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutOrder {
    pub package_id: String,
    pub package_name: String,
    pub description: String,
    pub amount_pence: i64,
    pub customer_email: Option<String>,
    pub success_url: String,
    pub cancel_url: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CheckoutProvider: Send + Sync {
    async fn create_session(&self, order: CheckoutOrder) -> Result<CreateCheckoutResponse, CheckoutError>;
    async fn retrieve_session(&self, session_id: String) -> Result<CheckoutSessionDetails, CheckoutError>;
}

pub struct StripeCheckout {
    client: Client,
}

impl StripeCheckout {
    pub fn new(secret_key: &str) -> Self {
        Self {
            client: Client::new(secret_key.to_string()),
        }
    }
}

#[async_trait]
impl CheckoutProvider for StripeCheckout {
    async fn create_session(&self, order: CheckoutOrder) -> Result<CreateCheckoutResponse, CheckoutError> {
        let mut metadata = HashMap::new();
        metadata.insert("packageId".to_string(), order.package_id.clone());
        metadata.insert("packageName".to_string(), order.package_name.clone());

        let mut params = CreateCheckoutSession::new();
        params.success_url = Some(&order.success_url);
        params.cancel_url = Some(&order.cancel_url);
        params.mode = Some(CheckoutSessionMode::Payment);
        params.customer_email = order.customer_email.as_deref();
        params.metadata = Some(metadata);
        params.line_items = Some(vec![CreateCheckoutSessionLineItems {
            price_data: Some(CreateCheckoutSessionLineItemsPriceData {
                currency: Currency::GBP,
                product_data: Some(CreateCheckoutSessionLineItemsPriceDataProductData {
                    name: order.package_name.clone(),
                    description: Some(order.description.clone()),
                    ..Default::default()
                }),
                unit_amount: Some(order.amount_pence),
                ..Default::default()
            }),
            quantity: Some(1),
            ..Default::default()
        }]);

        let session = CheckoutSession::create(&self.client, params)
            .await
            .map_err(|e| {
                tracing::error!("Stripe checkout creation failed: {:?}", e);
                CheckoutError::Stripe(e.to_string())
            })?;

        let url = session.url.ok_or(CheckoutError::MissingUrl)?;
        tracing::info!("Created checkout session {} for {}", session.id, order.package_id);
        Ok(CreateCheckoutResponse {
            session_id: session.id.to_string(),
            url,
        })
    }

    async fn retrieve_session(&self, session_id: String) -> Result<CheckoutSessionDetails, CheckoutError> {
        let id: CheckoutSessionId = session_id
            .parse()
            .map_err(|_| CheckoutError::InvalidSessionId(session_id.clone()))?;

        let session = CheckoutSession::retrieve(&self.client, &id, &[])
            .await
            .map_err(|e| match e {
                StripeError::Stripe(ref request_error) if request_error.http_status == 404 => {
                    CheckoutError::NotFound(session_id.clone())
                }
                other => CheckoutError::Stripe(other.to_string()),
            })?;

        Ok(session_details(session))
    }
}

fn session_details(session: CheckoutSession) -> CheckoutSessionDetails {
    let metadata = session.metadata.unwrap_or_default();
    CheckoutSessionDetails {
        id: session.id.to_string(),
        payment_status: session.payment_status.as_str().to_string(),
        amount_total: session.amount_total,
        currency: session.currency.map(|c| c.to_string()),
        metadata: SessionMetadata {
            package_name: metadata.get("packageName").cloned(),
            package_id: metadata.get("packageId").cloned(),
        },
        customer_details: session.customer_details.map(|c| CustomerDetails {
            email: c.email,
            name: c.name,
        }),
    }
}
