use crate::dom;
use gamespace_core::{DropdownView, GameRecord, SearchEvent, SearchState};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub state: SearchState,
    pub on_event: Callback<SearchEvent>,
}

/// The live search input plus its results dropdown.
///
/// Dismissal is a document-level `mousedown` listener scoped to this
/// instance: attached when the component mounts and detached by the effect
/// cleanup on unmount, so remounts never stack listeners. Pointer-downs
/// inside the container are never treated as outside clicks.
#[function_component(SearchBox)]
pub fn search_box(props: &Props) -> Html {
    let container = use_node_ref();

    {
        let container = container.clone();
        let on_event = props.on_event.clone();
        use_effect_with((), move |()| {
            let listener = Closure::<dyn Fn(web_sys::Event)>::wrap(Box::new(
                move |event: web_sys::Event| {
                    if !targets_container(&container, &event) {
                        on_event.emit(SearchEvent::ClickOutside);
                    }
                },
            ));
            let attached = dom::document().add_event_listener_with_callback(
                "mousedown",
                listener.as_ref().unchecked_ref(),
            );
            if let Err(err) = attached {
                dom::console_error(&format!(
                    "failed to attach dismissal listener: {}",
                    dom::js_error_message(&err)
                ));
            }
            move || {
                let _ = dom::document().remove_event_listener_with_callback(
                    "mousedown",
                    listener.as_ref().unchecked_ref(),
                );
            }
        });
    }

    let on_input = {
        let on_event = props.on_event.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                on_event.emit(SearchEvent::Type(input.value()));
            }
        })
    };

    let on_focus = {
        let on_event = props.on_event.clone();
        Callback::from(move |_: FocusEvent| on_event.emit(SearchEvent::Focus))
    };

    html! {
        <div class="search-section" ref={container} data-testid="search-section">
            <input
                class="search-input"
                type="text"
                placeholder="Search games..."
                value={props.state.query().to_string()}
                oninput={on_input}
                onfocus={on_focus}
            />
            { dropdown(&props.state, &props.on_event) }
        </div>
    }
}

fn dropdown(state: &SearchState, on_event: &Callback<SearchEvent>) -> Html {
    match state.dropdown_view() {
        DropdownView::Hidden => Html::default(),
        DropdownView::Prompt => panel(html! {
            <div class="search-row search-row--hint">{ "Type to search for a game." }</div>
        }),
        DropdownView::NoMatches => panel(html! {
            <div class="search-row search-row--empty">{ "No games found." }</div>
        }),
        DropdownView::Matches => panel(html! {
            { for state.results().iter().map(|game| result_row(game.clone(), on_event.clone())) }
        }),
    }
}

fn panel(rows: Html) -> Html {
    html! {
        <div class="search-dropdown" data-testid="search-dropdown" role="listbox">
            { rows }
        </div>
    }
}

fn result_row(game: GameRecord, on_event: Callback<SearchEvent>) -> Html {
    let title = game.title.clone();
    let key = game.id.clone();
    let onclick = Callback::from(move |_: MouseEvent| {
        on_event.emit(SearchEvent::SelectItem(game.clone()));
    });
    html! {
        <div key={key} class="search-row" role="option" {onclick}>
            { title }
        </div>
    }
}

fn targets_container(container: &NodeRef, event: &web_sys::Event) -> bool {
    let Some(element) = container.cast::<web_sys::Element>() else {
        return false;
    };
    let Some(target) = event
        .target()
        .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
    else {
        return false;
    };
    element.contains(Some(&target))
}
