//! Discover page: browse and filter the static member preview dataset.

use leptos::prelude::*;

use crate::components::member_card::MemberCard;
use crate::components::member_profile_modal::MemberProfileModal;
use crate::components::nav_bar::NavBar;
use crate::net::types::Member;
use crate::state::members::{MembersState, filter_members, sample_members};

/// Discover page with a local text filter over the preview dataset.
#[component]
pub fn DiscoverPage() -> impl IntoView {
    let members = expect_context::<RwSignal<MembersState>>();
    let query = RwSignal::new(String::new());

    let on_select = Callback::new(move |member: Member| {
        members.update(|m| m.selected = Some(member));
    });

    view! {
        <div class="page">
            <NavBar active="discover"/>

            <main class="discover">
                <div class="discover__header">
                    <h1>"Discover Members"</h1>
                    <p>"Connect with like-minded professionals in your field"</p>
                </div>

                <input
                    class="discover__search"
                    placeholder="Search by name, interests, goals, location..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />

                <div class="discover__grid">
                    {move || {
                        let hits = filter_members(&sample_members(), &query.get());
                        if hits.is_empty() {
                            return view! {
                                <div class="discover__empty">"No members match your search."</div>
                            }
                                .into_any();
                        }
                        hits.into_iter()
                            .map(|member| view! { <MemberCard member=member on_select=on_select/> })
                            .collect::<Vec<_>>()
                            .into_any()
                    }}
                </div>
            </main>

            <MemberProfileModal/>
        </div>
    }
}
