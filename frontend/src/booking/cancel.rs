use yew::prelude::*;

use crate::booking::success::use_session_id;
use crate::components::ui::{ButtonVariant, LinkButton, Section};
use crate::Route;

#[function_component(BookingCancel)]
pub fn booking_cancel() -> Html {
    let session_id = use_session_id();

    html! {
        <div class="booking-result-page">
            <Section>
                <div class="result-card">
                    <h1>{"Payment cancelled"}</h1>
                    <p>{"No money has been taken. Your lesson isn't paid for yet, but you can try again whenever you're ready."}</p>
                    if let Some(id) = session_id {
                        <p class="session-reference">{format!("Reference: {}", id)}</p>
                    }
                    <div class="result-actions">
                        <LinkButton to={Route::Booking}>{"Back to booking"}</LinkButton>
                        <LinkButton to={Route::Contact} variant={ButtonVariant::Secondary}>
                            {"Talk to us"}
                        </LinkButton>
                    </div>
                </div>
            </Section>
        </div>
    }
}
