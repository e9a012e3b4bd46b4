use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Opaque handle of the signed-in user, if any. Presentational only.
    #[prop_or_default]
    pub user: Option<AttrValue>,
}

#[function_component(Header)]
pub fn header(props: &Props) -> Html {
    let account = if props.user.is_some() {
        html! { <span class="header-account" data-testid="account-badge">{ "My account" }</span> }
    } else {
        html! { <span class="header-account header-account--guest">{ "Guest" }</span> }
    };

    html! {
        <header class="space-header" role="banner">
            <div class="header-content">
                <span class="header-brand">{ "Gamespace" }</span>
                <nav aria-label="account" class="header-right">
                    { account }
                </nav>
            </div>
        </header>
    }
}
