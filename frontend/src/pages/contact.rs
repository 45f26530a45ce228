use yew::prelude::*;
use web_sys::{HtmlFormElement, HtmlInputElement, HtmlTextAreaElement, SubmitEvent};
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::components::confetti::Confetti;
use crate::components::seo::use_page_meta;
use crate::components::ui::{Button, Card, Section};
use clearway_common::{site, ContactForm};

#[derive(Clone, PartialEq)]
enum SendState {
    Idle,
    Sending,
    Sent,
    Failed(String),
}

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

#[function_component(Contact)]
pub fn contact() -> Html {
    use_page_meta(
        format!("Contact | {}", site::SCHOOL_NAME),
        "Get in touch with Clearway Driving School about lessons in Bristol.".to_string(),
    );

    let form_ref = use_node_ref();
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let phone_ref = use_node_ref();
    let message_ref = use_node_ref();
    let state = use_state(|| SendState::Idle);

    let onsubmit = {
        let form_ref = form_ref.clone();
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let phone_ref = phone_ref.clone();
        let message_ref = message_ref.clone();
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *state == SendState::Sending {
                return;
            }

            let form_ok = form_ref
                .cast::<HtmlFormElement>()
                .map(|form| form.check_validity())
                .unwrap_or(true);
            if !form_ok {
                state.set(SendState::Failed("Please fill in the highlighted fields.".to_string()));
                return;
            }

            let phone = input_value(&phone_ref);
            let form = ContactForm {
                name: input_value(&name_ref),
                email: input_value(&email_ref),
                phone: (!phone.trim().is_empty()).then_some(phone),
                message: message_ref
                    .cast::<HtmlTextAreaElement>()
                    .map(|area| area.value())
                    .unwrap_or_default(),
            };
            if let Err(e) = form.validate() {
                state.set(SendState::Failed(e.to_string()));
                return;
            }

            state.set(SendState::Sending);
            let state = state.clone();
            let form_ref = form_ref.clone();
            spawn_local(async move {
                match api::submit_contact(&form).await {
                    Ok(()) => {
                        if let Some(form) = form_ref.cast::<HtmlFormElement>() {
                            form.reset();
                        }
                        state.set(SendState::Sent);
                    }
                    Err(e) => {
                        log::error!("Contact form submission failed: {}", e);
                        state.set(SendState::Failed(
                            "Sorry, we couldn't send your message. Please try again or call us.".to_string(),
                        ));
                    }
                }
            });
        })
    };

    let sending = *state == SendState::Sending;

    html! {
        <div class="contact-page">
            <section class="page-hero">
                <h1>{"Get in touch"}</h1>
                <p>{"Questions about lessons, availability or prices? We usually reply within a working day."}</p>
            </section>

            <Section>
                <div class="contact-layout">
                    <Card>
                        if *state == SendState::Sent {
                            <Confetti />
                            <div class="contact-success">
                                <h2>{"Thanks, message received!"}</h2>
                                <p>{"One of our instructors will be in touch shortly."}</p>
                            </div>
                        } else {
                            <form ref={form_ref} class="contact-form" {onsubmit}>
                                <label for="contact-name">{"Name"}</label>
                                <input ref={name_ref} id="contact-name" type="text" required=true autocomplete="name" />

                                <label for="contact-email">{"Email"}</label>
                                <input ref={email_ref} id="contact-email" type="email" required=true autocomplete="email" />

                                <label for="contact-phone">{"Phone (optional)"}</label>
                                <input ref={phone_ref} id="contact-phone" type="tel" autocomplete="tel" />

                                <label for="contact-message">{"Message"}</label>
                                <textarea ref={message_ref} id="contact-message" rows="6" required=true />

                                if let SendState::Failed(message) = &*state {
                                    <p class="form-error" role="alert">{message}</p>
                                }

                                <Button kind="submit" disabled={sending}>
                                    { if sending { "Sending..." } else { "Send message" } }
                                </Button>
                            </form>
                        }
                    </Card>

                    <Card>
                        <h3>{"Other ways to reach us"}</h3>
                        <p>
                            {"Phone: "}
                            <a href={format!("tel:{}", site::PHONE.replace(' ', ""))}>{site::PHONE}</a>
                        </p>
                        <p>
                            {"Email: "}
                            <a href={format!("mailto:{}", site::EMAIL)}>{site::EMAIL}</a>
                        </p>
                        <p>{"Office hours: Monday to Saturday, 8am to 7pm"}</p>
                    </Card>
                </div>
            </Section>
        </div>
    }
}
