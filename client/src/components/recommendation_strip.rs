//! Horizontally scrollable strip of recommended members.

use leptos::prelude::*;

use crate::components::member_card::MemberCard;
use crate::net::types::Member;
use crate::state::members::MembersState;

/// Recommendation strip below the chat. Hidden until a fetch is loading or
/// has produced members.
#[component]
pub fn RecommendationStrip() -> impl IntoView {
    let members = expect_context::<RwSignal<MembersState>>();

    let on_select = Callback::new(move |member: Member| {
        members.update(|m| m.selected = Some(member));
    });

    move || {
        let state = members.get();
        if !state.show_strip() {
            return ().into_any();
        }

        view! {
            <section class="recommendations">
                <h2 class="recommendations__title">"Recommended members"</h2>
                {if state.loading {
                    view! {
                        <div class="recommendations__spinner">"Finding members for you..."</div>
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="recommendations__row">
                            {state
                                .recommended
                                .iter()
                                .map(|member| {
                                    view! { <MemberCard member=member.clone() on_select=on_select/> }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any()
                }}
            </section>
        }
        .into_any()
    }
}
