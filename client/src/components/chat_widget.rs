//! Floating chat bubble that builds a plan from a typed topic.
//!
//! SYSTEM CONTEXT
//! ==============
//! The conversation runs on `ChatSession`; a successful generation also
//! lands in the shared results panel, exactly as a form submission would.

use leptos::prelude::*;
use plans::chat::{ChatSession, Sender};

use crate::net::api::BrowserApi;
use crate::state::chat::{apply_generation, generate_for_topic};
use crate::state::plan::{PlanState, RESULTS_ID};
use crate::util::dom;

#[component]
pub fn ChatWidget(plan: RwSignal<PlanState>) -> impl IntoView {
    let session = RwSignal::new(ChatSession::new());
    let draft = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    Effect::new(move || {
        session.track();

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let toggle = move |_| {
        if session.with_untracked(ChatSession::is_open) {
            session.update(ChatSession::close);
            return;
        }
        session.update(|s| {
            s.open();
        });
        #[cfg(feature = "csr")]
        request_animation_frame(move || {
            if let Some(el) = input_ref.get_untracked() {
                let _ = el.focus();
            }
        });
    };

    let do_send = move || {
        let text = draft.get_untracked();
        let mut topic = None;
        session.update(|s| topic = s.submit(&text));
        let Some(topic) = topic else {
            return;
        };
        draft.set(String::new());

        leptos::task::spawn_local(async move {
            let outcome = generate_for_topic(&BrowserApi, &topic).await;
            session.update(|s| plan.update(|p| apply_generation(s, p, &outcome)));
            if outcome.is_ok() {
                request_animation_frame(|| dom::scroll_into_view(RESULTS_ID));
            }
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            do_send();
        }
    };

    let accepts_input = move || session.with(ChatSession::accepts_input);

    view! {
        <div class="chat-widget">
            <button class="chat-widget__bubble" on:click=toggle title="Chat with the planner">
                <i class="fas fa-comments"></i>
            </button>
            <Show when=move || session.with(ChatSession::is_open)>
                <div class="chat-widget__window">
                    <div class="chat-widget__messages" node_ref=messages_ref>
                        {move || {
                            session
                                .get()
                                .messages()
                                .iter()
                                .map(|msg| {
                                    let from_user = msg.sender == Sender::User;
                                    let text = msg.text.clone();
                                    view! {
                                        <div
                                            class="chat-widget__message"
                                            class:chat-widget__message--user=from_user
                                            class:chat-widget__message--bot=!from_user
                                        >
                                            {text}
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                    <div class="chat-widget__input-row">
                        <input
                            class="chat-widget__input"
                            type="text"
                            placeholder="Type a topic..."
                            node_ref=input_ref
                            disabled=move || !accepts_input()
                            prop:value=move || draft.get()
                            on:input=move |ev| draft.set(event_target_value(&ev))
                            on:keydown=on_keydown
                        />
                        <button
                            class="btn btn--primary"
                            on:click=move |_| do_send()
                            disabled=move || !accepts_input()
                        >
                            "Send"
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
