//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::notice::NoticeBanner;
use crate::pages::{console::ConsolePage, login::LoginPage};
use crate::state::cards::CardsState;
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::state::users::UsersState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Rehydrates the persisted session before the first render, provides all
/// shared state contexts, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(
        crate::util::storage::load_session()
            .map(|(token, user)| SessionState::restored(token, user))
            .unwrap_or_default(),
    );
    let cards = RwSignal::new(CardsState::default());
    let users = RwSignal::new(UsersState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(session);
    provide_context(cards);
    provide_context(users);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/cardkey-console.css"/>
        <Title text="Card Key Console"/>

        <NoticeBanner/>
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=ConsolePage/>
            </Routes>
        </Router>
    }
}
