use yew::prelude::*;
use yew_router::components::Link;

use crate::components::seo::use_page_meta;
use crate::components::ui::CtaBanner;
use crate::pages::not_found::NotFound;
use crate::Route;
use clearway_common::site;

pub struct Post {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub date: &'static str,
    pub image: &'static str,
    pub paragraphs: &'static [&'static str],
}

pub const POSTS: &[Post] = &[
    Post {
        slug: "bristol-test-centres-compared",
        title: "Bristol test centres compared: Kingswood, Avonmouth and Brislington",
        summary: "Pass rates, tricky junctions and what to expect at each of Bristol's practical test centres.",
        date: "September 2, 2026",
        image: "/assets/blog/test-centres.webp",
        paragraphs: &[
            "Bristol learners can sit their practical test at Kingswood, Avonmouth or Brislington. Each centre has its own character and its own set of junctions examiners love.",
            "Kingswood routes lean on busy suburban roundabouts and the A4174 ring road. Avonmouth brings faster dual carriageways and industrial estates with heavy goods traffic. Brislington mixes tight residential streets with the A4 into town.",
            "Pass rates move around from year to year, so we pick your centre on availability and on where you already drive with confidence.",
        ],
    },
    Post {
        slug: "how-many-lessons-do-i-need",
        title: "How many driving lessons do I really need?",
        summary: "The DVSA average is around 45 hours. Here's how a plan and some private practice bring that down.",
        date: "July 18, 2026",
        image: "/assets/blog/how-many-lessons.webp",
        paragraphs: &[
            "The DVSA quotes about 45 hours of professional tuition plus 22 hours of private practice as the average for a first-time pass.",
            "Pupils who book a block and keep lessons weekly tend to need fewer hours, because less time is spent recapping. Two-hour lessons help too: the first twenty minutes of any lesson is warming back up.",
            "After your first assessment drive we'll give you an honest estimate and review it every five hours.",
        ],
    },
    Post {
        slug: "what-to-expect-on-a-mock-test",
        title: "What to expect on a mock driving test",
        summary: "A mock test is the closest thing to the real day. Here's how ours works and why it settles nerves.",
        date: "May 6, 2026",
        image: "/assets/blog/mock-test.webp",
        paragraphs: &[
            "Our mock tests follow the real format: eyesight check, show me tell me questions, around twenty minutes of independent driving and one reversing manoeuvre.",
            "Your instructor stays quiet and marks faults on the same sheet the examiner uses. Afterwards we go through every minor together.",
            "Most pupils book one mock two or three weeks before their test date, leaving time to fix anything that comes up.",
        ],
    },
];

pub fn find_post(slug: &str) -> Option<&'static Post> {
    POSTS.iter().find(|p| p.slug == slug)
}

#[hook]
fn use_scroll_to_top() {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );
}

#[function_component(Blog)]
pub fn blog() -> Html {
    use_scroll_to_top();
    use_page_meta(
        format!("Blog | {}", site::SCHOOL_NAME),
        "Tips, test-centre guides and advice for learner drivers in Bristol.".to_string(),
    );

    html! {
        <div class="blog-list-page">
            <section class="page-hero">
                <h1>{"Blog"}</h1>
                <p>{"Guides and advice for learner drivers in Bristol"}</p>
            </section>
            <section class="blog-list-section">
                { for POSTS.iter().map(|post| html! {
                    <div class="blog-post-preview">
                        <Link<Route> to={Route::BlogPost { slug: post.slug.to_string() }}>
                            <img src={post.image} alt={post.title} loading="lazy" class="blog-preview-image" />
                            <h2>{post.title}</h2>
                            <p>{post.summary}</p>
                            <span class="blog-date">{post.date}</span>
                        </Link<Route>>
                    </div>
                }) }
            </section>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BlogPostProps {
    pub slug: AttrValue,
}

#[function_component(BlogPost)]
pub fn blog_post(props: &BlogPostProps) -> Html {
    use_scroll_to_top();
    let post = find_post(&props.slug);
    use_page_meta(
        post.map(|p| format!("{} | {}", p.title, site::SCHOOL_NAME))
            .unwrap_or_else(|| site::SCHOOL_NAME.to_string()),
        post.map(|p| p.summary.to_string()).unwrap_or_default(),
    );

    let Some(post) = post else {
        return html! { <NotFound /> };
    };

    html! {
        <article class="blog-post-page">
            <header class="page-hero">
                <span class="blog-date">{post.date}</span>
                <h1>{post.title}</h1>
            </header>
            <img src={post.image} alt={post.title} class="blog-hero-image" />
            <div class="prose">
                { for post.paragraphs.iter().map(|p| html! { <p>{*p}</p> }) }
            </div>
            <Link<Route> to={Route::Blog} classes="back-link">{"← All posts"}</Link<Route>>
            <CtaBanner
                title="Put it into practice"
                text="Book a lesson with one of our Bristol instructors."
            />
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_slugs_are_unique() {
        for (i, post) in POSTS.iter().enumerate() {
            assert!(POSTS.iter().skip(i + 1).all(|other| other.slug != post.slug));
        }
    }

    #[test]
    fn find_post_by_slug() {
        assert!(find_post("how-many-lessons-do-i-need").is_some());
        assert!(find_post("nope").is_none());
    }
}
