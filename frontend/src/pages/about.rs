use yew::prelude::*;

use crate::components::seo::use_page_meta;
use crate::components::ui::{Card, CtaBanner, Section};
use crate::pages::sections::Testimonials;
use clearway_common::site;

struct Instructor {
    name: &'static str,
    role: &'static str,
    bio: &'static str,
    photo: &'static str,
}

const INSTRUCTORS: &[Instructor] = &[
    Instructor {
        name: "Sarah Mitchell",
        role: "Founder, Grade A instructor",
        bio: "Sarah has taught in Bristol for fourteen years and still takes nervous beginners herself. She built Clearway around one idea: every lesson should have a plan.",
        photo: "/assets/team/sarah.jpg",
    },
    Instructor {
        name: "Dev Patel",
        role: "Automatic specialist",
        bio: "Dev teaches in our hybrid automatics and looks after most of our north Bristol pupils around Filton and Horfield.",
        photo: "/assets/team/dev.jpg",
    },
    Instructor {
        name: "Megan Price",
        role: "Intensive courses and mock tests",
        bio: "Megan runs the mock test programme and knows every test route out of Kingswood and Avonmouth by heart.",
        photo: "/assets/team/megan.jpg",
    },
];

#[function_component(About)]
pub fn about() -> Html {
    use_page_meta(
        format!("About us | {}", site::SCHOOL_NAME),
        "Meet the instructors behind Clearway Driving School in Bristol.".to_string(),
    );

    html! {
        <div class="about-page">
            <section class="page-hero">
                <h1>{"About Clearway"}</h1>
                <p>{"A small, independent Bristol driving school. No franchise, no call centre."}</p>
            </section>

            <Section title="How we teach">
                <div class="prose">
                    <p>
                        {"Every pupil gets a progress record that follows them between lessons, so nothing is repeated and nothing is skipped. We teach on the roads around your local test centre from the first lesson onwards."}
                    </p>
                    <p>
                        {"All our cars are dual-controlled, less than three years old and fully insured for learners. Lessons start and finish at your home, college or workplace anywhere in Bristol."}
                    </p>
                </div>
            </Section>

            <Section title="Meet the team">
                <div class="card-grid">
                    { for INSTRUCTORS.iter().map(|i| html! {
                        <Card>
                            <img class="team-photo" src={i.photo} alt={i.name} loading="lazy" />
                            <h3>{i.name}</h3>
                            <p class="team-role">{i.role}</p>
                            <p>{i.bio}</p>
                        </Card>
                    }) }
                </div>
            </Section>

            <Testimonials />

            <CtaBanner
                title="Come and drive with us"
                text="Your first lesson is a relaxed assessment drive. We'll plan the rest together."
            />
        </div>
    }
}
