use yew::prelude::*;
use web_sys::MouseEvent;

use crate::components::seo::use_page_meta;
use crate::components::ui::{Card, CtaBanner, LinkButton, PriceTag, Section};
use crate::pages::sections::SpecialOffers;
use crate::Route;
use clearway_common::{site, Package, PACKAGES};

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", (*is_open).then_some("open"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            if *is_open {
                <div class="faq-answer">
                    { for props.children.iter() }
                </div>
            }
        </div>
    }
}

fn price_suffix(package: &Package) -> Option<AttrValue> {
    match package.id {
        "payg" => Some("per hour".into()),
        "testrental" => Some("test day".into()),
        _ => None,
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    use_page_meta(
        format!("Lessons & Prices | {}", site::SCHOOL_NAME),
        "Driving lesson prices in Bristol: pay as you go, 6 and 10 hour blocks, mock tests and test-day car rental.".to_string(),
    );

    html! {
        <div class="services-page">
            <section class="page-hero">
                <h1>{"Lessons & prices"}</h1>
                <p>{"Straightforward pricing. No registration fees, no hidden extras."}</p>
            </section>

            <Section>
                <div class="card-grid">
                    { for PACKAGES.iter().map(|p| html! {
                        <Card highlighted={p.id == "10hour"}>
                            <h3>{p.name}</h3>
                            <PriceTag label={p.price_label()} suffix={price_suffix(p)} />
                            <p>{p.description}</p>
                            <ul class="feature-list">
                                { for p.features.iter().map(|f| html! { <li>{*f}</li> }) }
                            </ul>
                            <LinkButton to={Route::BookingPackage { package: p.slug.to_string() }}>
                                {format!("Book {}", p.name)}
                            </LinkButton>
                        </Card>
                    }) }
                </div>
            </Section>

            <SpecialOffers />

            <Section title="Common questions">
                <FaqItem question="Do you teach in automatic cars?">
                    <p>{"Yes. Mention it when you book and we'll match you with an automatic instructor."}</p>
                </FaqItem>
                <FaqItem question="Can I pay for a block in instalments?">
                    <p>{"Blocks are paid up front through our secure checkout. Pay as you go is the flexible option."}</p>
                </FaqItem>
                <FaqItem question="What happens on test day rental?">
                    <p>{"We pick you up two hours before the test, warm up on the local routes, and you sit the test in the car you know."}</p>
                </FaqItem>
                <FaqItem question="How much notice do I need to give to cancel?">
                    <p>{"48 hours. Lessons cancelled with less notice are charged in full."}</p>
                </FaqItem>
            </Section>

            <CtaBanner
                title="Not sure which package?"
                text="Start with a single lesson. We'll recommend the right block once we've seen you drive."
                to={Route::BookingPayg}
                action="Book a single lesson"
            />
        </div>
    }
}
