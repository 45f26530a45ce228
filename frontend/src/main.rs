use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod api;
mod config;
mod components {
    pub mod confetti;
    pub mod footer;
    pub mod navbar;
    pub mod seo;
    pub mod ui;
}
mod pages {
    pub mod about;
    pub mod blog;
    pub mod contact;
    pub mod home;
    pub mod location;
    pub mod not_found;
    pub mod sections;
    pub mod services;
}
mod booking {
    pub mod booking;
    pub mod cancel;
    pub mod script_loader;
    pub mod success;
    pub mod test_rental;
    pub mod widgets;
}

use components::{footer::Footer, navbar::Navbar};
use pages::{
    about::About,
    blog::{Blog, BlogPost},
    contact::Contact,
    home::Home,
    location::LocationPage,
    not_found::NotFound,
    services::Services,
};
use booking::{
    booking::Booking,
    cancel::BookingCancel,
    success::BookingSuccess,
    test_rental::TestRental,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/services")]
    Services,
    #[at("/blog")]
    Blog,
    #[at("/blog/:slug")]
    BlogPost { slug: String },
    #[at("/contact")]
    Contact,
    #[at("/driving-lessons/:slug")]
    Location { slug: String },
    #[at("/booking")]
    Booking,
    #[at("/booking/6-hour")]
    Booking6Hour,
    #[at("/booking/payg")]
    BookingPayg,
    #[at("/booking/test-rental")]
    BookingTestRental,
    #[at("/booking/success")]
    BookingSuccess,
    #[at("/booking/cancel")]
    BookingCancel,
    #[at("/booking/:package")]
    BookingPackage { package: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        },
        Route::Blog => {
            info!("Rendering Blog page");
            html! { <Blog /> }
        },
        Route::BlogPost { slug } => {
            info!("Rendering blog post {}", slug);
            html! { <BlogPost {slug} /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::Location { slug } => {
            info!("Rendering location page {}", slug);
            html! { <LocationPage {slug} /> }
        },
        Route::Booking => {
            info!("Rendering Booking page");
            html! { <Booking /> }
        },
        Route::Booking6Hour => {
            info!("Rendering Booking page for 6 hour package");
            html! { <Booking package="6hour" /> }
        },
        Route::BookingPayg => {
            info!("Rendering Booking page for pay as you go");
            html! { <Booking package="payg" /> }
        },
        Route::BookingTestRental => {
            info!("Rendering Test Rental page");
            html! { <TestRental /> }
        },
        Route::BookingPackage { package } => {
            info!("Rendering Booking page for {}", package);
            html! { <Booking {package} /> }
        },
        Route::BookingSuccess => {
            info!("Rendering Booking Success page");
            html! { <BookingSuccess /> }
        },
        Route::BookingCancel => {
            info!("Rendering Booking Cancel page");
            html! { <BookingCancel /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Navbar />
            <main class="site-main">
                <Switch<Route> render={switch} />
            </main>
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
