use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use clearway_common::{select_package, BookingRequest, BookingResponse};

use crate::{api::supersaas::NewBooking, AppState};

pub async fn create_supersaas_booking(
    State(state): State<Arc<AppState>>,
    Json(request): Json<BookingRequest>,
) -> Result<Json<BookingResponse>, (StatusCode, Json<BookingResponse>)> {
    if let Err(e) = request.validate() {
        tracing::info!("Rejected booking request: {}", e);
        return Err((StatusCode::BAD_REQUEST, Json(BookingResponse::failed(e.to_string()))));
    }

    let selection = select_package(&request.package_type);
    let (start, finish) = request
        .slot(selection.package)
        .map_err(|e| (StatusCode::BAD_REQUEST, Json(BookingResponse::failed(e.to_string()))))?;

    let booking = NewBooking {
        full_name: request.customer_name.trim().to_string(),
        email: request.customer_email.trim().to_string(),
        mobile: request.customer_phone.trim().to_string(),
        address: request.address.trim().to_string(),
        package_name: selection.package.name.to_string(),
        start,
        finish,
    };

    match state.bookings.create_booking(booking).await {
        Ok(reference) => {
            tracing::info!("Created SuperSaaS booking {:?} for {}", reference, selection.package.id);
            Ok(Json(BookingResponse::ok(format!(
                "Your {} is booked for {}.",
                selection.package.name,
                start.format("%A %-d %B at %H:%M")
            ))))
        }
        Err(e) => {
            tracing::error!("SuperSaaS booking failed: {}", e);
            Err((
                StatusCode::BAD_GATEWAY,
                Json(BookingResponse::failed(
                    "We couldn't confirm that slot. Please try another time or call us.",
                )),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::supersaas::{MockBookingProvider, SchedulerError};
    use crate::test_support::state_with_bookings;

    fn request(package_type: &str) -> BookingRequest {
        BookingRequest {
            customer_name: "Sam Driver".to_string(),
            customer_email: "sam@example.com".to_string(),
            customer_phone: "07700 900456".to_string(),
            selected_date: "2026-11-02".to_string(),
            selected_time: "09:30".to_string(),
            package_type: package_type.to_string(),
            address: "1 Harbour Way".to_string(),
        }
    }

    #[tokio::test]
    async fn books_slot_sized_to_package() {
        let mut bookings = MockBookingProvider::new();
        bookings
            .expect_create_booking()
            .withf(|b| {
                b.package_name == "Test Day Car Rental"
                    && b.start.to_string() == "2026-11-02 09:30:00"
                    && b.finish.to_string() == "2026-11-02 11:30:00"
            })
            .times(1)
            .returning(|_| Ok(Some("98765".to_string())));

        let Json(response) = create_supersaas_booking(State(state_with_bookings(bookings)), Json(request("testrental")))
            .await
            .unwrap();
        assert!(response.success);
        assert_eq!(response.message, "Your Test Day Car Rental is booked for Monday 2 November at 09:30.");
    }

    #[tokio::test]
    async fn unknown_package_books_as_pay_as_you_go() {
        let mut bookings = MockBookingProvider::new();
        bookings
            .expect_create_booking()
            .withf(|b| b.package_name == "Pay As You Go" && b.finish.to_string() == "2026-11-02 10:30:00")
            .times(1)
            .returning(|_| Ok(None));

        let Json(response) = create_supersaas_booking(State(state_with_bookings(bookings)), Json(request("mystery")))
            .await
            .unwrap();
        assert!(response.success);
    }

    #[tokio::test]
    async fn invalid_request_makes_no_booking() {
        let mut bookings = MockBookingProvider::new();
        bookings.expect_create_booking().times(0);

        let mut bad = request("testrental");
        bad.selected_time = "half nine".to_string();
        let (status, Json(response)) = create_supersaas_booking(State(state_with_bookings(bookings)), Json(bad))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!response.success);
        assert!(response.message.contains("half nine"));
    }

    #[tokio::test]
    async fn scheduler_failure_is_reported() {
        let mut bookings = MockBookingProvider::new();
        bookings.expect_create_booking().returning(|_| {
            Err(SchedulerError::Rejected {
                status: 422,
                body: "taken".to_string(),
            })
        });

        let (status, Json(response)) = create_supersaas_booking(State(state_with_bookings(bookings)), Json(request("testrental")))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(!response.success);
    }
}
