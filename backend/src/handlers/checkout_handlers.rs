use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use clearway_common::{
    find_package, CheckoutSessionDetails, CreateCheckoutRequest, CreateCheckoutResponse,
};
use serde::Deserialize;

use crate::{
    api::stripe_checkout::{CheckoutError, CheckoutOrder},
    error::ApiError,
    AppState,
};

#[derive(Deserialize)]
pub struct SessionQuery {
    pub session_id: Option<String>,
}

pub async fn create_checkout_session(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateCheckoutRequest>,
) -> Result<Json<CreateCheckoutResponse>, ApiError> {
    // Payment never falls back to another package.
    let package = find_package(&request.package_id).ok_or_else(|| {
        tracing::info!("Checkout requested for unknown package '{}'", request.package_id);
        ApiError::BadRequest(format!("Unknown package '{}'", request.package_id))
    })?;

    let frontend = &state.settings.frontend_url;
    let order = CheckoutOrder {
        package_id: package.id.to_string(),
        package_name: package.name.to_string(),
        description: package.description.to_string(),
        amount_pence: package.price_pence as i64,
        customer_email: request
            .customer_email
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty()),
        success_url: format!("{}/booking/success?session_id={{CHECKOUT_SESSION_ID}}", frontend),
        cancel_url: format!("{}/booking/cancel?session_id={{CHECKOUT_SESSION_ID}}", frontend),
    };

    let session = state.checkout.create_session(order).await.map_err(|e| {
        tracing::error!("Failed to create checkout session for {}: {}", package.id, e);
        ApiError::Upstream("Failed to start checkout. Please try again.".to_string())
    })?;

    Ok(Json(session))
}

pub async fn get_checkout_session(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SessionQuery>,
) -> Result<Json<CheckoutSessionDetails>, ApiError> {
    let session_id = query
        .session_id
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::BadRequest("session_id is required".to_string()))?;

    match state.checkout.retrieve_session(session_id).await {
        Ok(details) => Ok(Json(details)),
        Err(CheckoutError::InvalidSessionId(id)) => {
            Err(ApiError::BadRequest(format!("'{}' is not a valid session id", id)))
        }
        Err(CheckoutError::NotFound(id)) => {
            Err(ApiError::NotFound(format!("Checkout session {} not found", id)))
        }
        Err(e) => {
            tracing::error!("Failed to retrieve checkout session: {}", e);
            Err(ApiError::Upstream("Failed to load payment details".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::stripe_checkout::MockCheckoutProvider;
    use crate::test_support::state_with_checkout;
    use axum::http::StatusCode;
    use clearway_common::checkout::{CustomerDetails, SessionMetadata};

    #[tokio::test]
    async fn creates_session_priced_from_catalog() {
        let mut checkout = MockCheckoutProvider::new();
        checkout
            .expect_create_session()
            .withf(|order| {
                order.package_id == "10hour"
                    && order.amount_pence == 35000
                    && order.customer_email.as_deref() == Some("ada@example.com")
                    && order.success_url
                        == "https://clearway.test/booking/success?session_id={CHECKOUT_SESSION_ID}"
                    && order.cancel_url
                        == "https://clearway.test/booking/cancel?session_id={CHECKOUT_SESSION_ID}"
            })
            .times(1)
            .returning(|_| {
                Ok(CreateCheckoutResponse {
                    session_id: "cs_test_1".to_string(),
                    url: "https://checkout.stripe.com/c/pay/cs_test_1".to_string(),
                })
            });

        let request = CreateCheckoutRequest {
            package_id: "10-hour".to_string(),
            customer_email: Some(" ada@example.com ".to_string()),
        };
        let Json(response) = create_checkout_session(State(state_with_checkout(checkout)), Json(request))
            .await
            .unwrap();
        assert_eq!(response.session_id, "cs_test_1");
    }

    #[tokio::test]
    async fn unknown_package_is_rejected_without_calling_stripe() {
        let mut checkout = MockCheckoutProvider::new();
        checkout.expect_create_session().times(0);

        let request = CreateCheckoutRequest {
            package_id: "20hour".to_string(),
            customer_email: None,
        };
        let err = create_checkout_session(State(state_with_checkout(checkout)), Json(request))
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn returns_session_details() {
        let mut checkout = MockCheckoutProvider::new();
        checkout
            .expect_retrieve_session()
            .withf(|id| id == "cs_test_1")
            .times(1)
            .returning(|id| {
                Ok(CheckoutSessionDetails {
                    id,
                    payment_status: "paid".to_string(),
                    amount_total: Some(21600),
                    currency: Some("gbp".to_string()),
                    metadata: SessionMetadata {
                        package_name: Some("6-Hour Package".to_string()),
                        package_id: Some("6hour".to_string()),
                    },
                    customer_details: Some(CustomerDetails {
                        email: Some("ada@example.com".to_string()),
                        name: None,
                    }),
                })
            });

        let query = SessionQuery {
            session_id: Some("cs_test_1".to_string()),
        };
        let Json(details) = get_checkout_session(State(state_with_checkout(checkout)), Query(query))
            .await
            .unwrap();
        assert!(details.is_paid());
        assert_eq!(details.formatted_total().as_deref(), Some("£216"));
    }

    #[tokio::test]
    async fn missing_session_id_is_a_bad_request() {
        let mut checkout = MockCheckoutProvider::new();
        checkout.expect_retrieve_session().times(0);

        let query = SessionQuery {
            session_id: Some("  ".to_string()),
        };
        let err = get_checkout_session(State(state_with_checkout(checkout)), Query(query))
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn maps_unknown_session_to_not_found() {
        let mut checkout = MockCheckoutProvider::new();
        checkout
            .expect_retrieve_session()
            .returning(|id| Err(CheckoutError::NotFound(id)));

        let query = SessionQuery {
            session_id: Some("cs_test_missing".to_string()),
        };
        let err = get_checkout_session(State(state_with_checkout(checkout)), Query(query))
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }
}
