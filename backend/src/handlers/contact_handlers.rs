use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use clearway_common::ContactForm;
use serde_json::{json, Value};

use crate::{error::ApiError, AppState};

pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Json(form): Json<ContactForm>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let message = form.into_message(Utc::now()).map_err(|e| {
        tracing::info!("Rejected contact form: {}", e);
        ApiError::from(e)
    })?;

    state.contact_store.insert(message).await.map_err(|e| {
        tracing::error!("Failed to store contact message: {}", e);
        ApiError::Upstream("We couldn't send your message. Please try again.".to_string())
    })?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Thanks for getting in touch! We'll reply within one working day."
        })),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::contact_repository::{MockContactStore, StoreError};
    use crate::test_support::state_with;
    use axum::response::IntoResponse;

    fn form() -> ContactForm {
        ContactForm {
            name: "Ada Learner".to_string(),
            email: "ada@example.com".to_string(),
            phone: Some("07700 900123".to_string()),
            message: "When is your next free slot?".to_string(),
        }
    }

    #[tokio::test]
    async fn valid_form_inserts_exactly_once() {
        let before = Utc::now();
        let mut store = MockContactStore::new();
        store
            .expect_insert()
            .withf(move |m| {
                m.name == "Ada Learner"
                    && m.email == "ada@example.com"
                    && m.phone.as_deref() == Some("07700 900123")
                    && m.message == "When is your next free slot?"
                    && m.created_at >= before
                    && m.created_at <= Utc::now()
            })
            .times(1)
            .returning(|_| Ok(()));

        let state = state_with(store);
        let (status, Json(body)) = submit_contact(State(state), Json(form())).await.unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["success"], true);
    }

    #[tokio::test]
    async fn missing_field_never_reaches_the_store() {
        let mut store = MockContactStore::new();
        store.expect_insert().times(0);

        let mut incomplete = form();
        incomplete.message.clear();
        let err = submit_contact(State(state_with(store)), Json(incomplete))
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "message is required");
    }

    #[tokio::test]
    async fn store_failure_becomes_retry_message() {
        let mut store = MockContactStore::new();
        store.expect_insert().times(1).returning(|_| {
            Err(StoreError::Rejected {
                status: 500,
                body: "down".to_string(),
            })
        });

        let err = submit_contact(State(state_with(store)), Json(form()))
            .await
            .unwrap_err();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
