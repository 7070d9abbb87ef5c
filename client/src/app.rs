//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{chat::ChatPage, discover::DiscoverPage};
use crate::state::{conversation::ConversationState, members::MembersState};

/// Root application component.
///
/// Provides the shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Reactive state contexts shared by all child components.
    let conversation = RwSignal::new(ConversationState::default());
    let members = RwSignal::new(MembersState::default());

    provide_context(conversation);
    provide_context(members);

    view! {
        <Stylesheet id="leptos" href="/styles.css"/>
        <Title text="Connect"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ChatPage/>
                <Route path=StaticSegment("discover") view=DiscoverPage/>
            </Routes>
        </Router>
    }
}
