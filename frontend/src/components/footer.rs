use yew::prelude::*;
use yew_router::prelude::*;

use crate::{config, Route};
use clearway_common::{site, LOCATIONS, PACKAGES};

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().format("%Y").to_string();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-column">
                    <h3>{site::SCHOOL_NAME}</h3>
                    <p>{"DVSA-approved instructors, dual-control cars and patient teaching across Bristol."}</p>
                    <p>
                        <a href={format!("tel:{}", site::PHONE.replace(' ', ""))}>{site::PHONE}</a>
                        <br/>
                        <a href={format!("mailto:{}", site::EMAIL)}>{site::EMAIL}</a>
                    </p>
                    <a
                        href={format!("https://instagram.com/{}", config::INSTAGRAM_HANDLE)}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {format!("@{}", config::INSTAGRAM_HANDLE)}
                    </a>
                    <p>
                        <Link<Route> to={Route::Booking} classes="nav-book-button">
                            {"Book a lesson"}
                        </Link<Route>>
                    </p>
                </div>

                <div class="footer-column">
                    <h4>{"Lessons"}</h4>
                    <ul>
                        { for PACKAGES.iter().map(|p| html! {
                            <li>
                                <Link<Route> to={Route::BookingPackage { package: p.slug.to_string() }}>
                                    {p.name}
                                </Link<Route>>
                            </li>
                        }) }
                    </ul>
                </div>

                <div class="footer-column">
                    <h4>{"Areas we cover"}</h4>
                    <ul>
                        { for LOCATIONS.iter().map(|l| html! {
                            <li>
                                <Link<Route> to={Route::Location { slug: l.slug.to_string() }}>
                                    {format!("Driving lessons {}", l.area)}
                                </Link<Route>>
                            </li>
                        }) }
                    </ul>
                </div>

                <div class="footer-column">
                    <h4>{"School"}</h4>
                    <ul>
                        <li><Link<Route> to={Route::About}>{"About us"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Services}>{"Lessons & prices"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Blog}>{"Blog"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>></li>
                    </ul>
                </div>
            </div>
            <p class="footer-legal">
                {format!("© {} {}. All rights reserved.", year, site::SCHOOL_NAME)}
            </p>
        </footer>
    }
}
