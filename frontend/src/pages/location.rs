use yew::prelude::*;

use crate::components::seo::{use_page_keywords, use_page_meta};
use crate::components::ui::{Card, CtaBanner, LinkButton, PriceTag, Section};
use crate::pages::not_found::NotFound;
use crate::pages::sections::Testimonials;
use crate::Route;
use clearway_common::{find_location, PACKAGES};

#[derive(Properties, PartialEq)]
pub struct LocationPageProps {
    pub slug: AttrValue,
}

/// Landing page for one of the areas we cover, rendered from the location table.
#[function_component(LocationPage)]
pub fn location_page(props: &LocationPageProps) -> Html {
    let location = find_location(&props.slug);
    use_page_meta(
        location.map(|l| l.page_title()).unwrap_or_default(),
        location.map(|l| l.intro.to_string()).unwrap_or_default(),
    );
    use_page_keywords(location.map(|l| l.meta_keywords()).unwrap_or_default());

    let Some(location) = location else {
        return html! { <NotFound /> };
    };

    html! {
        <div class="location-page">
            <section class="page-hero">
                <h1>{location.headline}</h1>
                <p>{location.intro}</p>
                <LinkButton to={Route::Booking}>{format!("Book lessons in {}", location.area)}</LinkButton>
            </section>

            <Section title={format!("Learning to drive in {}", location.area)}>
                <div class="prose">
                    <p>
                        {format!(
                            "Most of our {} pupils sit their test at {}. We build lessons around its routes from early on, so test day feels familiar.",
                            location.area, location.test_centre
                        )}
                    </p>
                    <p>
                        {"We pick up from home, school or work in "}
                        {location.postcodes.join(", ")}
                        {" and the surrounding streets."}
                    </p>
                </div>
            </Section>

            <Section title="Prices" subtitle={format!("The same fair prices in {} as everywhere we teach", location.area)}>
                <div class="card-grid">
                    { for PACKAGES.iter().map(|p| html! {
                        <Card>
                            <h3>{p.name}</h3>
                            <PriceTag label={p.price_label()} />
                            <LinkButton to={Route::BookingPackage { package: p.slug.to_string() }}>
                                {"Book"}
                            </LinkButton>
                        </Card>
                    }) }
                </div>
            </Section>

            <Testimonials />

            <CtaBanner
                title={format!("Start driving in {}", location.area)}
                text="Pick a package and a time. Your instructor will meet you at your door."
            />
        </div>
    }
}
