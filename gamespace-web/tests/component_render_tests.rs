use futures::executor::block_on;
use gamespace_core::{GameRecord, SearchEvent, SearchState};
use gamespace_web::components::header::Header;
use gamespace_web::components::search_box::SearchBox;
use gamespace_web::components::sidebar::Sidebar;
use yew::{AttrValue, Callback, LocalServerRenderer};

fn loaded_state() -> SearchState {
    SearchState::new().apply(SearchEvent::CatalogLoaded(vec![
        GameRecord::new("1", "Chess Arena"),
        GameRecord::new("2", "Speed Chess"),
        GameRecord::new("3", "Poker Night"),
    ]))
}

fn render_search_box(state: SearchState) -> String {
    let props = gamespace_web::components::search_box::Props {
        state,
        on_event: Callback::noop(),
    };
    block_on(LocalServerRenderer::<SearchBox>::with_props(props).render())
}

#[test]
fn header_renders_account_badge_for_a_signed_in_user() {
    let props = gamespace_web::components::header::Props {
        user: Some(AttrValue::from("u1")),
    };
    let html = block_on(LocalServerRenderer::<Header>::with_props(props).render());
    assert!(html.contains("account-badge"));
    assert!(html.contains("Gamespace"));
}

#[test]
fn header_renders_guest_without_a_user() {
    let props = gamespace_web::components::header::Props { user: None };
    let html = block_on(LocalServerRenderer::<Header>::with_props(props).render());
    assert!(html.contains("header-account--guest"));
    assert!(!html.contains("account-badge"));
}

#[test]
fn sidebar_renders_primary_navigation() {
    let html = block_on(LocalServerRenderer::<Sidebar>::new().render());
    assert!(html.contains("space-sidebar"));
    assert!(html.contains("Your space"));
}

#[test]
fn search_box_hides_the_dropdown_when_idle() {
    let html = render_search_box(loaded_state());
    assert!(html.contains("Search games..."));
    assert!(!html.contains("search-dropdown"));
}

#[test]
fn search_box_lists_matches_in_catalog_order() {
    let state = loaded_state().apply(SearchEvent::Type("chess".into()));
    let html = render_search_box(state);
    let arena = html.find("Chess Arena").expect("first match rendered");
    let speed = html.find("Speed Chess").expect("second match rendered");
    assert!(arena < speed);
    assert!(!html.contains("Poker Night"));
}

#[test]
fn search_box_shows_the_placeholder_for_a_dead_query() {
    let state = loaded_state().apply(SearchEvent::Type("xyz".into()));
    let html = render_search_box(state);
    assert!(html.contains("No games found."));
}

#[test]
fn search_box_prompts_when_focused_with_an_empty_query() {
    let state = loaded_state().apply(SearchEvent::Focus);
    let html = render_search_box(state);
    assert!(html.contains("Type to search for a game."));
    assert!(!html.contains("No games found."));
}

#[test]
fn search_box_echoes_the_selected_title_in_the_input() {
    let state = loaded_state().apply(SearchEvent::Type("chess".into()));
    let pick = state.results()[0].clone();
    let state = state.apply(SearchEvent::SelectItem(pick));
    let html = render_search_box(state);
    assert!(html.contains("Chess Arena"));
    assert!(!html.contains("search-dropdown"));
}
