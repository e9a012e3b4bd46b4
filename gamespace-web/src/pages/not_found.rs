use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

/// Not-found page to show when routing fails to match a known view.
#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="panel not-found" aria-live="assertive">
            <h1>{ "Page not found" }</h1>
            <p>{ "The page you were looking for does not exist." }</p>
            <Link<Route> to={Route::Space}>{ "Back to your space" }</Link<Route>>
        </section>
    }
}
