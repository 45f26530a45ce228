use yew::prelude::*;

use crate::components::seo::use_page_meta;
use crate::components::ui::{ButtonVariant, Card, CtaBanner, LinkButton, PriceTag, Section};
use crate::pages::sections::{InstagramFeed, SpecialOffers, Testimonials};
use crate::Route;
use clearway_common::{site, LOCATIONS, PACKAGES};

#[function_component(Home)]
pub fn home() -> Html {
    use_page_meta(
        format!("Driving Lessons in Bristol | {}", site::SCHOOL_NAME),
        "Friendly, DVSA-approved driving instructors covering Bristol. Pay as you go, block bookings, mock tests and test-day car rental.".to_string(),
    );

    html! {
        <div class="home-page">
            <section class="hero">
                <div class="hero-content">
                    <h1>{"Learn to drive in Bristol with confidence"}</h1>
                    <p class="hero-subtitle">
                        {"Patient, DVSA-approved instructors, modern dual-control cars and lessons planned around the test routes you'll actually drive."}
                    </p>
                    <div class="hero-actions">
                        <LinkButton to={Route::Booking}>{"Book your first lesson"}</LinkButton>
                        <LinkButton to={Route::Services} variant={ButtonVariant::Secondary}>
                            {"See prices"}
                        </LinkButton>
                    </div>
                    <ul class="hero-highlights">
                        <li>{"92% first-time pass rate in 2025"}</li>
                        <li>{"Free pick-up across BS postcodes"}</li>
                        <li>{"Manual and automatic"}</li>
                    </ul>
                </div>
            </section>

            <Section title="Lessons & packages" subtitle="Pick what suits you. Switch any time.">
                <div class="card-grid">
                    { for PACKAGES.iter().map(|p| html! {
                        <Card highlighted={p.id == "10hour"}>
                            <h3>{p.name}</h3>
                            <PriceTag label={p.price_label()} />
                            <p>{p.description}</p>
                            <LinkButton to={Route::BookingPackage { package: p.slug.to_string() }}>
                                {"Book"}
                            </LinkButton>
                        </Card>
                    }) }
                </div>
            </Section>

            <Testimonials />
            <SpecialOffers />

            <Section title="Areas we cover" subtitle="Lessons start from your door">
                <div class="area-links">
                    { for LOCATIONS.iter().map(|l| html! {
                        <LinkButton
                            to={Route::Location { slug: l.slug.to_string() }}
                            variant={ButtonVariant::Secondary}
                        >
                            {l.area}
                        </LinkButton>
                    }) }
                </div>
            </Section>

            <InstagramFeed />

            <CtaBanner
                title="Ready to get on the road?"
                text="Choose a package and pick a time that works for you. It takes two minutes."
            />
        </div>
    }
}
