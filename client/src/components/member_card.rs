//! Compact member card used by the recommendation strip and Discover grid.

use leptos::prelude::*;

use crate::net::types::Member;

/// Clickable member summary card. Clicking hands the member to `on_select`
/// for the detail overlay.
#[component]
pub fn MemberCard(member: Member, on_select: Callback<Member>) -> impl IntoView {
    let selected = member.clone();
    let score = format!("{:.0}% match", member.match_score);

    view! {
        <div class="member-card" on:click=move |_| on_select.run(selected.clone())>
            <img class="member-card__avatar" src=member.avatar.clone() alt=member.name.clone()/>
            <div class="member-card__body">
                <div class="member-card__top">
                    <span class="member-card__name">{member.name.clone()}</span>
                    <span class="member-card__score">{score}</span>
                </div>
                <p class="member-card__bio">{member.bio.clone()}</p>
                <div class="member-card__tags">
                    {member
                        .interests
                        .iter()
                        .take(3)
                        .map(|interest| view! { <span class="member-card__tag">{interest.clone()}</span> })
                        .collect::<Vec<_>>()}
                </div>
                <span class="member-card__location">{member.location.clone()}</span>
            </div>
        </div>
    }
}
