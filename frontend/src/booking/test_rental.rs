use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlFormElement, HtmlInputElement, SubmitEvent};

use crate::api;
use crate::booking::widgets::SuperSaasEmbed;
use crate::components::confetti::Confetti;
use crate::components::seo::use_page_meta;
use crate::components::ui::{Button, Card, PriceTag, Section};
use crate::config;
use clearway_common::{find_package, site, BookingRequest};

#[derive(Clone, PartialEq)]
enum BookingState {
    Idle,
    Submitting,
    Booked(String),
    Failed(String),
}

fn value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value().trim().to_string())
        .unwrap_or_default()
}

/// Test-day car rental. The date and time come from the candidate's DVSA
/// booking, so this page takes them directly instead of a Calendly slot.
#[function_component(TestRental)]
pub fn test_rental() -> Html {
    use_page_meta(
        format!("Test day car rental | {}", site::SCHOOL_NAME),
        "Hire your instructor's car for your driving test in Bristol, with a warm-up lesson beforehand.".to_string(),
    );

    let form_ref = use_node_ref();
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let phone_ref = use_node_ref();
    let date_ref = use_node_ref();
    let time_ref = use_node_ref();
    let address_ref = use_node_ref();
    let state = use_state(|| BookingState::Idle);

    let package = find_package("testrental");

    let onsubmit = {
        let refs = (
            form_ref.clone(),
            name_ref.clone(),
            email_ref.clone(),
            phone_ref.clone(),
            date_ref.clone(),
            time_ref.clone(),
            address_ref.clone(),
        );
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *state == BookingState::Submitting {
                return;
            }
            let (form_ref, name_ref, email_ref, phone_ref, date_ref, time_ref, address_ref) = &refs;

            let form_ok = form_ref
                .cast::<HtmlFormElement>()
                .map(|form| form.check_validity())
                .unwrap_or(true);
            if !form_ok {
                state.set(BookingState::Failed("Please complete every field.".to_string()));
                return;
            }

            let request = BookingRequest {
                customer_name: value(name_ref),
                customer_email: value(email_ref),
                customer_phone: value(phone_ref),
                selected_date: value(date_ref),
                selected_time: value(time_ref),
                package_type: "testrental".to_string(),
                address: value(address_ref),
            };
            if let Err(e) = request.validate() {
                state.set(BookingState::Failed(e.to_string()));
                return;
            }

            state.set(BookingState::Submitting);
            let state = state.clone();
            spawn_local(async move {
                match api::create_booking(&request).await {
                    Ok(response) if response.success => state.set(BookingState::Booked(response.message)),
                    Ok(response) => state.set(BookingState::Failed(response.message)),
                    Err(e) => {
                        log::error!("Booking request failed: {}", e);
                        state.set(BookingState::Failed(
                            "We couldn't reach the booking system. Please try again or call us.".to_string(),
                        ));
                    }
                }
            });
        })
    };

    let submitting = *state == BookingState::Submitting;

    html! {
        <div class="booking-page test-rental-page">
            <section class="page-hero">
                <h1>{"Test day car rental"}</h1>
                <p>{"Sit your test in the car you learned in, with a warm-up drive on the local routes first."}</p>
                if let Some(package) = package {
                    <PriceTag label={package.price_label()} suffix="test day" />
                }
            </section>

            <Section title="Check availability">
                <SuperSaasEmbed schedule_url={config::SUPERSAAS_SCHEDULE_URL} title="Test day rental availability" />
            </Section>

            <Section title="Request your rental" subtitle="Enter the date and time from your DVSA confirmation email.">
                <Card>
                    if let BookingState::Booked(message) = &*state {
                        <Confetti />
                        <div class="booking-confirmed">
                            <h2>{"You're booked!"}</h2>
                            <p>{message}</p>
                            <p>{"A confirmation email is on its way."}</p>
                        </div>
                    } else {
                        <form ref={form_ref} class="booking-form" {onsubmit}>
                            <label for="rental-name">{"Full name"}</label>
                            <input ref={name_ref} id="rental-name" type="text" required=true autocomplete="name" />

                            <label for="rental-email">{"Email"}</label>
                            <input ref={email_ref} id="rental-email" type="email" required=true autocomplete="email" />

                            <label for="rental-phone">{"Mobile"}</label>
                            <input ref={phone_ref} id="rental-phone" type="tel" required=true autocomplete="tel" />

                            <label for="rental-date">{"Test date"}</label>
                            <input ref={date_ref} id="rental-date" type="date" required=true />

                            <label for="rental-time">{"Test time"}</label>
                            <input ref={time_ref} id="rental-time" type="time" required=true />

                            <label for="rental-address">{"Pick-up address"}</label>
                            <input ref={address_ref} id="rental-address" type="text" required=true autocomplete="street-address" />

                            if let BookingState::Failed(message) = &*state {
                                <p class="form-error" role="alert">{message}</p>
                            }

                            <Button kind="submit" disabled={submitting}>
                                { if submitting { "Booking..." } else { "Request booking" } }
                            </Button>
                        </form>
                    }
                </Card>
            </Section>
        </div>
    }
}
