use gloo_net::http::Request;
use serde::{de::DeserializeOwned, Serialize};

use clearway_common::endpoints::{with_query, CHECKOUT_SESSION, CONTACT, CREATE_BOOKING, CREATE_CHECKOUT};
use clearway_common::{
    with_fallback, BookingRequest, BookingResponse, CheckoutSessionDetails, ContactForm,
    CreateCheckoutRequest, CreateCheckoutResponse,
};

use crate::config;

async fn read_json<T: DeserializeOwned>(response: gloo_net::http::Response) -> Result<T, String> {
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    response.json::<T>().await.map_err(|e| e.to_string())
}

async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, String> {
    let response = Request::post(url)
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}

pub async fn submit_contact(form: &ContactForm) -> Result<(), String> {
    let url = format!("{}{}", config::get_backend_url(), CONTACT);
    post_json::<_, serde_json::Value>(&url, form).await.map(|_| ())
}

pub async fn fetch_checkout_session(session_id: &str) -> Result<CheckoutSessionDetails, String> {
    with_fallback(&CHECKOUT_SESSION, |path| {
        let url = with_query(config::get_backend_url(), path, "session_id", session_id);
        async move {
            let response = Request::get(&url).send().await.map_err(|e| e.to_string())?;
            read_json::<CheckoutSessionDetails>(response).await
        }
    })
    .await
    .map_err(|e| e.to_string())
}

/// Returns the Stripe Checkout URL to redirect to.
pub async fn start_checkout(request: &CreateCheckoutRequest) -> Result<String, String> {
    with_fallback(&CREATE_CHECKOUT, |path| {
        let url = format!("{}{}", config::get_backend_url(), path);
        async move { post_json::<_, CreateCheckoutResponse>(&url, request).await }
    })
    .await
    .map(|session| session.url)
    .map_err(|e| e.to_string())
}

/// Rejections (400) and upstream scheduler failures (502) still carry a
/// readable `{success, message}` body.
fn carries_booking_body(status: u16) -> bool {
    matches!(status, 400 | 502)
}

pub async fn create_booking(request: &BookingRequest) -> Result<BookingResponse, String> {
    with_fallback(&CREATE_BOOKING, |path| {
        let url = format!("{}{}", config::get_backend_url(), path);
        async move {
            let response = Request::post(&url)
                .json(request)
                .map_err(|e| e.to_string())?
                .send()
                .await
                .map_err(|e| e.to_string())?;
            if carries_booking_body(response.status()) {
                return response.json::<BookingResponse>().await.map_err(|e| e.to_string());
            }
            read_json::<BookingResponse>(response).await
        }
    })
    .await
    .map_err(|e| e.to_string())
}
