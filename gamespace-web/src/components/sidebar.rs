use yew::prelude::*;

/// Static page navigation. Takes no input and feeds nothing back.
#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    html! {
        <aside class="space-sidebar" role="navigation" aria-label="primary">
            <ul class="sidebar-links">
                <li><a href="/">{ "Your space" }</a></li>
                <li><a href="/friends">{ "Friends" }</a></li>
                <li><a href="/settings">{ "Settings" }</a></li>
            </ul>
        </aside>
    }
}
