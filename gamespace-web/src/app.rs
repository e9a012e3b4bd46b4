use crate::context::{SessionContext, StoreContext};
use crate::pages::not_found::NotFound;
use crate::pages::space::SpacePage;
use crate::router::Route;
use crate::store::HttpStore;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    /// Handle of the authenticated user, when the surrounding shell resolved one.
    #[prop_or_default]
    pub user: Option<AttrValue>,
    /// Store client override; defaults to the fetch-backed client under `/api`.
    #[prop_or_default]
    pub store: Option<StoreContext>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let fallback = use_memo((), |()| {
        StoreContext::new(Rc::new(HttpStore::new("/api")))
    });
    let store = props.store.clone().unwrap_or_else(|| (*fallback).clone());
    let session = SessionContext {
        user: props.user.clone(),
    };

    html! {
        <BrowserRouter>
            <ContextProvider<StoreContext> context={store}>
                <ContextProvider<SessionContext> context={session}>
                    <Switch<Route> render={switch} />
                </ContextProvider<SessionContext>>
            </ContextProvider<StoreContext>>
        </BrowserRouter>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Space => html! { <SpacePage /> },
        Route::NotFound => html! { <NotFound /> },
    }
}
