use yew::prelude::*;
use yew_router::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::UrlSearchParams;

use crate::api;
use crate::components::confetti::Confetti;
use crate::components::ui::{LinkButton, Section};
use crate::Route;
use clearway_common::CheckoutSessionDetails;

#[derive(Clone, PartialEq)]
enum SessionState {
    Missing,
    Loading,
    Loaded(CheckoutSessionDetails),
    Failed,
}

/// Reads `session_id` from the current query string. Blank values count as missing.
#[hook]
pub fn use_session_id() -> Option<String> {
    let location = use_location();
    location
        .and_then(|location| {
            UrlSearchParams::new_with_str(location.query_str())
                .ok()
                .and_then(|params| params.get("session_id"))
        })
        .filter(|id| !id.trim().is_empty())
}

#[function_component(BookingSuccess)]
pub fn booking_success() -> Html {
    let session_id = use_session_id();
    let state = use_state(|| {
        if session_id.is_some() {
            SessionState::Loading
        } else {
            SessionState::Missing
        }
    });

    {
        let state = state.clone();
        use_effect_with_deps(
            move |session_id| {
                if let Some(session_id) = session_id.clone() {
                    state.set(SessionState::Loading);
                    spawn_local(async move {
                        match api::fetch_checkout_session(&session_id).await {
                            Ok(details) => state.set(SessionState::Loaded(details)),
                            Err(e) => {
                                log::error!("Could not load checkout session {}: {}", session_id, e);
                                state.set(SessionState::Failed);
                            }
                        }
                    });
                } else {
                    state.set(SessionState::Missing);
                }
                || ()
            },
            session_id,
        );
    }

    let body = match &*state {
        SessionState::Missing => html! {
            <>
                <h1>{"Nothing to show here"}</h1>
                <p>{"We couldn't find a payment reference in this link. If you've just paid, check your email for the receipt."}</p>
            </>
        },
        SessionState::Loading => html! {
            <>
                <h1>{"Confirming your payment..."}</h1>
                <p>{"This only takes a moment."}</p>
            </>
        },
        SessionState::Failed => html! {
            <>
                <h1>{"Payment received?"}</h1>
                <p>{"We couldn't load your booking details right now. Your receipt email has everything you need, or get in touch and we'll check for you."}</p>
            </>
        },
        SessionState::Loaded(details) => {
            let package = details
                .metadata
                .package_name
                .clone()
                .unwrap_or_else(|| "your lessons".to_string());
            html! {
                <>
                    if details.is_paid() {
                        <Confetti />
                        <h1>{"Thank you, you're all set!"}</h1>
                    } else {
                        <h1>{"Booking received"}</h1>
                    }
                    <dl class="session-details">
                        <dt>{"Package"}</dt>
                        <dd>{package}</dd>
                        if let Some(total) = details.formatted_total() {
                            <dt>{"Amount"}</dt>
                            <dd>{total}</dd>
                        }
                        <dt>{"Payment status"}</dt>
                        <dd>{details.payment_status.replace('_', " ")}</dd>
                        if let Some(email) = details.customer_email() {
                            <dt>{"Receipt sent to"}</dt>
                            <dd>{email.to_string()}</dd>
                        }
                    </dl>
                </>
            }
        }
    };

    html! {
        <div class="booking-result-page">
            <Section>
                <div class="result-card">
                    { body }
                    <div class="result-actions">
                        <LinkButton to={Route::Home}>{"Back to home"}</LinkButton>
                        <LinkButton to={Route::Contact}>{"Questions? Contact us"}</LinkButton>
                    </div>
                </div>
            </Section>
        </div>
    }
}
