use yew::prelude::*;

use crate::components::ui::{Card, LinkButton, Section};
use crate::{config, Route};
use clearway_common::find_package;

struct Testimonial {
    name: &'static str,
    area: &'static str,
    quote: &'static str,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Priya S.",
        area: "Bishopston",
        quote: "Passed first time with only two minors. Every lesson had a clear plan and I always knew what we were working on next.",
    },
    Testimonial {
        name: "Tom H.",
        area: "Bedminster",
        quote: "I'd had a bad experience with another school. The patience here made all the difference, especially on the Cumberland Basin roundabouts.",
    },
    Testimonial {
        name: "Grace O.",
        area: "Fishponds",
        quote: "The mock test was exactly like the real thing. On the day nothing surprised me.",
    },
];

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <Section title="What our learners say" subtitle="Real reviews from pupils across Bristol">
            <div class="card-grid">
                { for TESTIMONIALS.iter().map(|t| html! {
                    <Card>
                        <p class="testimonial-stars" aria-label="5 stars">{"★★★★★"}</p>
                        <blockquote>{t.quote}</blockquote>
                        <p class="testimonial-name">{format!("{}, {}", t.name, t.area)}</p>
                    </Card>
                }) }
            </div>
        </Section>
    }
}

struct InstagramPost {
    image: &'static str,
    caption: &'static str,
}

// Static stand-ins until the feed is wired to the Instagram Graph API.
const POSTS: &[InstagramPost] = &[
    InstagramPost { image: "/assets/instagram/pass-1.jpg", caption: "Another first-time pass at Kingswood!" },
    InstagramPost { image: "/assets/instagram/pass-2.jpg", caption: "Zero minors for Hannah. Incredible drive." },
    InstagramPost { image: "/assets/instagram/car.jpg", caption: "Our new dual-control Corolla hybrid." },
    InstagramPost { image: "/assets/instagram/pass-3.jpg", caption: "Congrats Sam, Avonmouth test centre conquered." },
    InstagramPost { image: "/assets/instagram/motorway.jpg", caption: "Motorway lesson on the M32 after passing." },
    InstagramPost { image: "/assets/instagram/pass-4.jpg", caption: "Two passes in one morning for the Filton team." },
];

#[function_component(InstagramFeed)]
pub fn instagram_feed() -> Html {
    let profile = format!("https://instagram.com/{}", config::INSTAGRAM_HANDLE);

    html! {
        <Section title="Follow our passes" subtitle={format!("@{} on Instagram", config::INSTAGRAM_HANDLE)}>
            <div class="instagram-grid">
                { for POSTS.iter().map(|post| html! {
                    <a class="instagram-post" href={profile.clone()} target="_blank" rel="noopener noreferrer">
                        <img src={post.image} alt={post.caption} loading="lazy" />
                        <span class="instagram-caption">{post.caption}</span>
                    </a>
                }) }
            </div>
        </Section>
    }
}

#[function_component(SpecialOffers)]
pub fn special_offers() -> Html {
    let block = find_package("10hour");
    let mock = find_package("mocktest");

    html! {
        <Section title="Special offers" subtitle="Save when you book in advance" class={classes!("special-offers")}>
            <div class="card-grid">
                if let Some(block) = block {
                    <Card highlighted=true>
                        <h3>{block.name}</h3>
                        <p>{"Save £30 on ten hours of tuition compared with paying as you go."}</p>
                        <p class="offer-price">{block.price_label()}</p>
                        <LinkButton to={Route::BookingPackage { package: block.slug.to_string() }}>
                            {"Book the block"}
                        </LinkButton>
                    </Card>
                }
                if let Some(mock) = mock {
                    <Card>
                        <h3>{mock.name}</h3>
                        <p>{"A full test-route rehearsal marked against the DVSA sheet."}</p>
                        <p class="offer-price">{mock.price_label()}</p>
                        <LinkButton to={Route::BookingPackage { package: mock.slug.to_string() }}>
                            {"Book a mock test"}
                        </LinkButton>
                    </Card>
                }
            </div>
        </Section>
    }
}
