use std::sync::Arc;

use crate::api::stripe_checkout::MockCheckoutProvider;
use crate::api::supersaas::MockBookingProvider;
use crate::config::settings::test_settings;
use crate::repositories::contact_repository::MockContactStore;
use crate::AppState;

pub fn state(
    contact: MockContactStore,
    checkout: MockCheckoutProvider,
    bookings: MockBookingProvider,
) -> Arc<AppState> {
    Arc::new(AppState {
        settings: test_settings(),
        contact_store: Arc::new(contact),
        checkout: Arc::new(checkout),
        bookings: Arc::new(bookings),
    })
}

pub fn state_with(contact: MockContactStore) -> Arc<AppState> {
    state(contact, MockCheckoutProvider::new(), MockBookingProvider::new())
}

pub fn state_with_checkout(checkout: MockCheckoutProvider) -> Arc<AppState> {
    state(MockContactStore::new(), checkout, MockBookingProvider::new())
}

pub fn state_with_bookings(bookings: MockBookingProvider) -> Arc<AppState> {
    state(MockContactStore::new(), MockCheckoutProvider::new(), bookings)
}
