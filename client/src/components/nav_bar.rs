//! Top navigation bar shared by all pages.

use leptos::prelude::*;

/// Navigation bar. `active` names the current page ("chat" or "discover").
#[component]
pub fn NavBar(active: &'static str) -> impl IntoView {
    let link_class = move |name: &str| {
        if name == active { "nav__link nav__link--active" } else { "nav__link" }
    };

    view! {
        <header class="nav">
            <span class="nav__brand">"Connect"</span>
            <nav class="nav__links">
                <a class=link_class("chat") href="/">"Chat"</a>
                <a class=link_class("discover") href="/discover">"Discover"</a>
            </nav>
        </header>
    }
}
