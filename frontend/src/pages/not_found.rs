use yew::prelude::*;

use crate::components::ui::LinkButton;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <section class="page-hero">
                <h1>{"Page not found"}</h1>
                <p>{"Looks like a wrong turn. Let's get you back on the road."}</p>
                <LinkButton to={Route::Home}>{"Back to the homepage"}</LinkButton>
            </section>
        </div>
    }
}
