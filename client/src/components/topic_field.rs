//! Topic input with debounced suggestions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each keystroke takes a fresh debounce ticket. A timer waits
//! `DEBOUNCE_MS`, and the lookup only runs if no newer keystroke has
//! arrived since. Clicking anywhere outside the input and the panel hides
//! the suggestions.
//!
//! TRADE-OFFS
//! ==========
//! Responses are not sequenced. A slow answer for an older query can land
//! after a newer one and replace its rows.

use leptos::prelude::*;
#[cfg(feature = "csr")]
use plans::suggest::DEBOUNCE_MS;

#[cfg(feature = "csr")]
use crate::net::api::BrowserApi;
use crate::state::plan::PlanFormInput;
use crate::state::suggest::SuggestState;
#[cfg(feature = "csr")]
use crate::state::suggest::settle;

/// Topic `<input>` plus its suggestion dropdown.
#[component]
pub fn TopicField(input: RwSignal<PlanFormInput>) -> impl IntoView {
    let suggest = RwSignal::new(SuggestState::default());
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let panel_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "csr")]
    {
        let handle = window_event_listener(leptos::ev::click, move |ev| {
            use wasm_bindgen::JsCast;

            let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
            let in_input = input_ref
                .get_untracked()
                .is_some_and(|el| el.contains(target.as_ref()));
            let in_panel = panel_ref
                .get_untracked()
                .is_some_and(|el| el.contains(target.as_ref()));
            if !in_input && !in_panel {
                suggest.update(|s| s.panel.hide());
            }
        });
        on_cleanup(move || handle.remove());
    }

    let on_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        input.update(|i| i.topic.clone_from(&value));

        let mut ticket = 0;
        suggest.update(|s| ticket = s.debouncer.schedule());

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(DEBOUNCE_MS).await;
            let debouncer = suggest.with_untracked(|s| s.debouncer);
            if let Some(items) = settle(&BrowserApi, debouncer, ticket, &value).await {
                suggest.update(|s| s.panel.show(items));
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (value, ticket);
        }
    };

    let on_pick = move |index: usize| {
        let mut picked = None;
        suggest.update(|s| picked = s.panel.pick(index));
        if let Some(topic) = picked {
            input.update(|i| i.topic = topic);
        }
    };

    view! {
        <div class="topic-field">
            <label for="topic">"What do you want to learn?"</label>
            <input
                id="topic"
                name="topic"
                type="text"
                autocomplete="off"
                placeholder="e.g. Linear Algebra"
                node_ref=input_ref
                prop:value=move || input.get().topic
                on:input=on_input
            />
            <Show when=move || suggest.with(|s| s.panel.is_visible())>
                <div class="topic-field__suggestions" node_ref=panel_ref>
                    {move || {
                        suggest
                            .get()
                            .panel
                            .items()
                            .iter()
                            .enumerate()
                            .map(|(index, item)| {
                                let item = item.clone();
                                view! {
                                    <div
                                        class="topic-field__suggestion"
                                        on:click=move |_| on_pick(index)
                                    >
                                        {item}
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </div>
    }
}
