//! Chat page: transcript, input, and live member recommendations.
//!
//! SYSTEM CONTEXT
//! ==============
//! This page drives the whole turn lifecycle. The state transitions live in
//! `state::conversation`; this module wires them to the two gateway calls
//! and keeps the UI reflecting the latest cumulative text between stream
//! fragments.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::member_profile_modal::MemberProfileModal;
use crate::components::nav_bar::NavBar;
use crate::components::recommendation_strip::RecommendationStrip;
use crate::net::{api, chat_stream, log_warn};
use crate::state::conversation::{ChatMessage, ConversationState};
use crate::state::members::MembersState;
use crate::state::now_ms;

/// Chat page with transcript, input form, and the recommendation strip.
#[component]
pub fn ChatPage() -> impl IntoView {
    let conversation = expect_context::<RwSignal<ConversationState>>();
    let members = expect_context::<RwSignal<MembersState>>();

    let input = RwSignal::new(String::new());

    let submit = move || {
        let text = input.get();
        let mut transcript = None;
        conversation.update(|c| transcript = c.begin_turn(&text, now_ms()));
        let Some(transcript) = transcript else {
            return;
        };
        input.set(String::new());
        spawn_local(run_turn(conversation, members, transcript));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit();
    };

    let can_send = move || !input.get().trim().is_empty() && !conversation.get().is_busy();

    view! {
        <div class="page">
            <NavBar active="chat"/>

            <main class="chat">
                <div class="chat__transcript">
                    {move || {
                        let messages = conversation.get().messages;
                        if messages.is_empty() {
                            return view! {
                                <div class="chat__empty">
                                    "Share what you're working on or curious about, and we'll introduce you to aligned community members."
                                </div>
                            }
                                .into_any();
                        }

                        messages
                            .iter()
                            .map(|msg| {
                                let side = if msg.role == "user" { "user" } else { "assistant" };
                                let class = format!("chat__message chat__message--{side}");
                                let content = msg.content.clone();
                                view! { <div class=class>{content}</div> }
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }}
                </div>

                {move || {
                    conversation
                        .get()
                        .is_busy()
                        .then(|| view! { <div class="chat__spinner">"Thinking..."</div> })
                }}

                <form class="chat__input-row" on:submit=on_submit>
                    <input
                        class="chat__input"
                        placeholder="Tell me about your interests and goals..."
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                    />
                    <button class="chat__send" type="submit" disabled=move || !can_send()>
                        "Send"
                    </button>
                </form>

                <RecommendationStrip/>
            </main>

            <MemberProfileModal/>
        </div>
    }
}

/// Drive one user turn: stream the assistant reply, then fetch member
/// recommendations from the settled transcript. A chat failure substitutes
/// the fallback message and skips the recommendation fetch entirely.
async fn run_turn(
    conversation: RwSignal<ConversationState>,
    members: RwSignal<MembersState>,
    transcript: Vec<ChatMessage>,
) {
    let streamed = chat_stream::stream_chat(
        &transcript,
        || conversation.update(|c| c.begin_stream(now_ms())),
        |cumulative| conversation.update(|c| c.apply_assistant_text(&cumulative)),
    )
    .await;

    if let Err(e) = streamed {
        log_warn(&format!("chat stream failed: {e}"));
        conversation.update(|c| c.fail_turn(now_ms()));
        return;
    }

    let mut query = String::new();
    conversation.update(|c| query = c.finish_turn());

    members.update(MembersState::begin_loading);
    match api::fetch_member_matches(&query).await {
        Ok(list) => members.update(|m| m.apply_results(list)),
        Err(e) => {
            log_warn(&format!("member match failed: {e}"));
            members.update(MembersState::fail);
        }
    }
}
