use yew::prelude::*;
use yew_router::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, MouseEvent};

use crate::api;
use crate::booking::widgets::{CalendlyHandle, CalendlyWidget};
use crate::components::seo::use_page_meta;
use crate::components::ui::{Button, ButtonVariant, Card, Section};
use crate::Route;
use clearway_common::{select_package, site, CreateCheckoutRequest, PackageSelection, PACKAGES};

#[derive(Properties, PartialEq)]
pub struct BookingProps {
    /// Package id or slug taken from the URL. Unknown values fall back to
    /// pay as you go.
    #[prop_or_default]
    pub package: Option<AttrValue>,
}

fn initial_selection(package: &Option<AttrValue>) -> PackageSelection {
    package
        .as_deref()
        .map(select_package)
        .unwrap_or_default()
}

#[function_component(Booking)]
pub fn booking(props: &BookingProps) -> Html {
    let selection = use_state(|| initial_selection(&props.package));
    let calendly = use_state(|| None::<CalendlyHandle>);
    let widget_error = use_state(|| None::<String>);
    let checkout_error = use_state(|| None::<String>);
    let redirecting = use_state(|| false);
    let email_ref = use_node_ref();

    use_page_meta(
        format!("Book {} | {}", selection.package.name, site::SCHOOL_NAME),
        "Pick a package and book your driving lesson online.".to_string(),
    );

    // the route prop changes when navigating between /booking/{package} pages
    {
        let selection = selection.clone();
        use_effect_with_deps(
            move |package| {
                let next = initial_selection(package);
                if !next.matched {
                    log::info!("Unknown package {:?}, showing {}", package, next.package.id);
                }
                if *selection != next {
                    selection.set(next);
                }
                || ()
            },
            props.package.clone(),
        );
    }

    // load the scheduling library once and keep the handle in state
    {
        let calendly = calendly.clone();
        let widget_error = widget_error.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match CalendlyHandle::load().await {
                        Ok(handle) => calendly.set(Some(handle)),
                        Err(e) => {
                            log::error!("Failed to load Calendly: {}", e);
                            widget_error.set(Some(
                                "The booking calendar couldn't load. Please refresh or call us to book.".to_string(),
                            ));
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    let choose = {
        let selection = selection.clone();
        let checkout_error = checkout_error.clone();
        Callback::from(move |id: &'static str| {
            checkout_error.set(None);
            selection.set(select_package(id));
        })
    };

    let pay_now = {
        let selection = selection.clone();
        let checkout_error = checkout_error.clone();
        let redirecting = redirecting.clone();
        let email_ref = email_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if *redirecting {
                return;
            }
            let email = email_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value().trim().to_string())
                .filter(|email| !email.is_empty());
            let request = CreateCheckoutRequest {
                package_id: selection.package.id.to_string(),
                customer_email: email,
            };
            redirecting.set(true);
            checkout_error.set(None);

            let checkout_error = checkout_error.clone();
            let redirecting = redirecting.clone();
            spawn_local(async move {
                match api::start_checkout(&request).await {
                    Ok(url) => {
                        let navigated = web_sys::window()
                            .map(|w| w.location().set_href(&url).is_ok())
                            .unwrap_or(false);
                        if !navigated {
                            redirecting.set(false);
                            checkout_error.set(Some("Couldn't open the payment page.".to_string()));
                        }
                    }
                    Err(e) => {
                        log::error!("Checkout failed: {}", e);
                        redirecting.set(false);
                        checkout_error.set(Some(
                            "We couldn't start the payment. Please try again in a moment.".to_string(),
                        ));
                    }
                }
            });
        })
    };

    let current = selection.package;

    html! {
        <div class="booking-page">
            <section class="page-hero">
                <h1>{"Book your lessons"}</h1>
                <p>{"Choose a package, then pick a time that suits you."}</p>
            </section>

            <Section title="1. Choose a package">
                <div class="card-grid package-picker">
                    { for PACKAGES.iter().map(|p| {
                        let onclick = {
                            let choose = choose.clone();
                            let id = p.id;
                            Callback::from(move |_: MouseEvent| choose.emit(id))
                        };
                        let selected = p.id == current.id;
                        html! {
                            <Card highlighted={selected}>
                                <h3>{p.name}</h3>
                                <p class="price">{p.price_label()}</p>
                                <p>{p.description}</p>
                                <Button
                                    {onclick}
                                    variant={if selected { ButtonVariant::Primary } else { ButtonVariant::Secondary }}
                                >
                                    { if selected { "Selected" } else { "Choose" } }
                                </Button>
                            </Card>
                        }
                    }) }
                </div>
                if current.id == "testrental" {
                    <p class="booking-note">
                        {"Booking a test-day rental with your own test date? "}
                        <Link<Route> to={Route::BookingTestRental}>{"Use the test rental form"}</Link<Route>>
                    </p>
                }
            </Section>

            <Section title="2. Pick a time" subtitle={format!("Showing availability for {}", current.name)}>
                if let Some(error) = &*widget_error {
                    <p class="form-error" role="alert">{error}</p>
                } else {
                    <CalendlyWidget url={current.calendly_url} handle={(*calendly).clone()} />
                }
            </Section>

            <Section title="3. Pay online (optional)" subtitle="Prefer to pay in advance? Secure card payment through Stripe.">
                <div class="checkout-box">
                    <label for="checkout-email">{"Email for your receipt"}</label>
                    <input ref={email_ref} id="checkout-email" type="email" autocomplete="email" />
                    <Button onclick={pay_now} disabled={*redirecting}>
                        { if *redirecting {
                            "Opening secure checkout...".to_string()
                        } else {
                            format!("Pay {} now", current.price_label())
                        } }
                    </Button>
                    if let Some(error) = &*checkout_error {
                        <p class="form-error" role="alert">{error}</p>
                    }
                </div>
            </Section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_package_prop_uses_default() {
        let selection = initial_selection(&None);
        assert_eq!(selection.package.id, "payg");
        assert!(selection.matched);
    }

    #[test]
    fn slug_from_route_selects_package() {
        let selection = initial_selection(&Some(AttrValue::from("6-hour")));
        assert_eq!(selection.package.id, "6hour");
    }

    #[test]
    fn unknown_route_package_falls_back() {
        let selection = initial_selection(&Some(AttrValue::from("helicopter")));
        assert_eq!(selection.package.id, "payg");
        assert!(!selection.matched);
    }
}
