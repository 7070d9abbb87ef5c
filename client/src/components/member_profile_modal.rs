//! Member detail overlay.

use leptos::prelude::*;

use crate::state::members::MembersState;

/// Modal showing the full profile of the selected member. Renders nothing
/// while no member is selected; clicking the backdrop or the close button
/// clears the selection.
#[component]
pub fn MemberProfileModal() -> impl IntoView {
    let members = expect_context::<RwSignal<MembersState>>();

    let close = move || members.update(|m| m.selected = None);

    move || {
        members.get().selected.map(|member| {
            let score = format!("{:.0}% match", member.match_score);
            let discord = format!("Connect on Discord: {}", member.discord_handle);

            view! {
                <div class="modal-backdrop" on:click=move |_| close()>
                    <div class="modal" on:click=|ev| ev.stop_propagation()>
                        <header class="modal__header">
                            <h2 class="modal__title">{member.name.clone()}</h2>
                            <button class="modal__close" on:click=move |_| close()>
                                "×"
                            </button>
                        </header>

                        <div class="modal__body">
                            <div class="modal__summary">
                                <img class="modal__avatar" src=member.avatar.clone() alt=member.name.clone()/>
                                <div class="modal__facts">
                                    <span class="modal__score">{score}</span>
                                    <span class="modal__fact">{member.location.clone()}</span>
                                    <span class="modal__fact">{member.experience.clone()}</span>
                                </div>
                            </div>

                            <p class="modal__bio">{member.bio.clone()}</p>

                            {(!member.interests.is_empty())
                                .then(|| {
                                    view! {
                                        <div class="modal__section">
                                            <h3>"Interests"</h3>
                                            <div class="modal__tags">
                                                {member
                                                    .interests
                                                    .iter()
                                                    .map(|tag| view! { <span class="modal__tag">{tag.clone()}</span> })
                                                    .collect::<Vec<_>>()}
                                            </div>
                                        </div>
                                    }
                                })}

                            {(!member.goals.is_empty())
                                .then(|| {
                                    view! {
                                        <div class="modal__section">
                                            <h3>"Goals"</h3>
                                            <div class="modal__tags">
                                                {member
                                                    .goals
                                                    .iter()
                                                    .map(|tag| view! { <span class="modal__tag">{tag.clone()}</span> })
                                                    .collect::<Vec<_>>()}
                                            </div>
                                        </div>
                                    }
                                })}

                            <div class="modal__discord">{discord}</div>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
