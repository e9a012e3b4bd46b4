use crate::components::header::Header;
use crate::components::search_box::SearchBox;
use crate::components::sidebar::Sidebar;
use crate::context::{SessionContext, StoreContext};
use crate::dom;
use gamespace_core::{SearchEvent, SearchState, UserProfile, load_catalog, resolve_profile};
use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

/// [`SearchState`] behind yew's reducer hook, so each named event is one
/// atomic dispatch and the query/results/selection/visibility fields can
/// never drift apart between renders.
#[derive(Default, PartialEq)]
pub struct SearchReducer(pub SearchState);

impl Reducible for SearchReducer {
    type Action = SearchEvent;

    fn reduce(self: Rc<Self>, action: SearchEvent) -> Rc<Self> {
        Rc::new(Self(self.0.apply(action)))
    }
}

/// The space dashboard: greeting, live game search, and page furniture.
///
/// Both loads start on mount and finish in either order; a result that
/// arrives after unmount is dropped by the effect's scope guard instead of
/// writing into stale state.
#[function_component(SpacePage)]
pub fn space_page() -> Html {
    let session = use_context::<SessionContext>().unwrap_or_default();
    let store = use_context::<StoreContext>();
    let profile = use_state(|| None::<UserProfile>);
    let search = use_reducer(SearchReducer::default);

    // Profile load: re-runs only when the handle identity changes. With no
    // handle the read is never issued and the greeting stays blank.
    {
        let profile = profile.clone();
        let store = store.clone();
        use_effect_with(session.user.clone(), move |handle| {
            let alive = Rc::new(Cell::new(true));
            let guard = alive.clone();
            if let (Some(store), Some(handle)) = (store, handle.clone()) {
                dom::spawn_local(async move {
                    let resolved = resolve_profile(store.store.as_ref(), &handle).await;
                    if alive.get() {
                        profile.set(resolved);
                    }
                });
            }
            move || guard.set(false)
        });
    }

    // Catalog load: once per mount, never refreshed within a session.
    {
        let search = search.clone();
        use_effect_with((), move |()| {
            let alive = Rc::new(Cell::new(true));
            let guard = alive.clone();
            if let Some(store) = store {
                dom::spawn_local(async move {
                    let catalog = load_catalog(store.store.as_ref()).await;
                    if alive.get() {
                        search.dispatch(SearchEvent::CatalogLoaded(catalog));
                    }
                });
            }
            move || guard.set(false)
        });
    }

    let on_search_event = {
        let search = search.clone();
        Callback::from(move |event: SearchEvent| {
            if let SearchEvent::SelectItem(game) = &event {
                log::debug!("selected game {} ({})", game.title, game.id);
            }
            search.dispatch(event);
        })
    };

    let username = profile
        .as_ref()
        .map(|p| p.username.clone())
        .unwrap_or_default();

    html! {
        <div class="space-page">
            <Header user={session.user.clone()} />
            <div class="content-page">
                <div class="welcome-holder">
                    <span class="welcome-text">
                        { "Welcome back, " }
                        <span class="welcome-name" data-testid="welcome-name">{ username }</span>
                        { "!" }
                    </span>
                </div>
                <div class="game-searcher">
                    <span class="card-text">{ "FIND A TEAMMATE!" }</span>
                </div>
                <div class="search-holder">
                    <SearchBox state={search.0.clone()} on_event={on_search_event} />
                    <div class="game-button">
                        <span>{ "Search" }</span>
                    </div>
                </div>
                <div class="popular-game-tab">
                    <span>{ "Popular Games" }</span>
                    <div class="popular-games-holder">
                        <div class="popular-games-box"></div>
                        <div class="popular-games-box"></div>
                    </div>
                </div>
            </div>
            <Sidebar />
        </div>
    }
}
