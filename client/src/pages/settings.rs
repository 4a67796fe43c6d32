//! AI provider and feature settings page.
//!
//! DESIGN
//! ======
//! Exactly one provider group is visible at a time. Stored API keys never
//! come back to the browser in clear; their inputs start blank with a masked
//! placeholder, and leaving them blank keeps the stored key.

use leptos::prelude::*;
use plans::settings::{Provider, SettingsForm};

use crate::net::api::BrowserApi;
use crate::state::settings::{Banner, SettingsState, load_form, save_form};

#[component]
pub fn SettingsPage() -> impl IntoView {
    let state = RwSignal::new(SettingsState::default());

    leptos::task::spawn_local(async move {
        if let Some(form) = load_form(&BrowserApi).await {
            state.update(|s| s.form = form);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if state.with_untracked(|s| s.saving) {
            return;
        }
        let form = state.with_untracked(|s| s.form.clone());
        state.update(|s| {
            s.saving = true;
            s.banner = None;
        });

        leptos::task::spawn_local(async move {
            let banner = save_form(&BrowserApi, &form).await;
            state.update(|s| {
                s.saving = false;
                s.banner = Some(banner);
            });
        });
    };

    let edit = move |apply: fn(&mut SettingsForm, String)| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            state.update(|s| apply(&mut s.form, value));
        }
    };
    let provider = move || state.with(|s| s.form.provider);

    view! {
        <div class="settings-page">
            <header class="settings-page__header">
                <h1>"Settings"</h1>
                <a href="/dashboard">"Back to planner"</a>
            </header>

            {move || {
                state
                    .get()
                    .banner
                    .map(|banner| {
                        view! {
                            <div
                                class="settings-banner"
                                class:settings-banner--success=banner == Banner::Success
                                class:settings-banner--error=banner == Banner::Error
                            >
                                {banner.text()}
                            </div>
                        }
                    })
            }}

            <form id="settingsForm" class="settings-form" on:submit=on_submit>
                <label for="AI_PROVIDER">"AI provider"</label>
                <select
                    id="AI_PROVIDER"
                    name="AI_PROVIDER"
                    prop:value=move || provider().as_str()
                    on:change=move |ev| {
                        let choice = Provider::parse(&event_target_value(&ev));
                        state.update(|s| s.form.provider = choice);
                    }
                >
                    {Provider::ALL
                        .iter()
                        .map(|p| view! { <option value=p.as_str()>{p.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>

                <Show when=move || provider() == Provider::Ollama>
                    <fieldset class="settings-group">
                        <label for="OLLAMA_HOST">"Ollama host"</label>
                        <input
                            id="OLLAMA_HOST"
                            type="text"
                            placeholder="http://localhost:11434"
                            prop:value=move || state.get().form.ollama_host
                            on:input=edit(|f, v| f.ollama_host = v)
                        />
                        <label for="OLLAMA_MODEL">"Ollama model"</label>
                        <input
                            id="OLLAMA_MODEL"
                            type="text"
                            prop:value=move || state.get().form.ollama_model
                            on:input=edit(|f, v| f.ollama_model = v)
                        />
                    </fieldset>
                </Show>

                <Show when=move || provider() == Provider::OpenRouter>
                    <fieldset class="settings-group">
                        <label for="OPENROUTER_API_KEY">"OpenRouter API key"</label>
                        <input
                            id="OPENROUTER_API_KEY"
                            type="password"
                            autocomplete="off"
                            placeholder=move || state.get().form.openrouter_key_placeholder
                            prop:value=move || state.get().form.openrouter_api_key
                            on:input=edit(|f, v| f.openrouter_api_key = v)
                        />
                        <label for="OPENROUTER_MODEL">"OpenRouter model"</label>
                        <input
                            id="OPENROUTER_MODEL"
                            type="text"
                            prop:value=move || state.get().form.openrouter_model
                            on:input=edit(|f, v| f.openrouter_model = v)
                        />
                    </fieldset>
                </Show>

                <Show when=move || provider() == Provider::Gemini>
                    <fieldset class="settings-group">
                        <label for="GEMINI_API_KEY">"Gemini API key"</label>
                        <input
                            id="GEMINI_API_KEY"
                            type="password"
                            autocomplete="off"
                            placeholder=move || state.get().form.gemini_key_placeholder
                            prop:value=move || state.get().form.gemini_api_key
                            on:input=edit(|f, v| f.gemini_api_key = v)
                        />
                        <label for="GEMINI_MODEL">"Gemini model"</label>
                        <input
                            id="GEMINI_MODEL"
                            type="text"
                            prop:value=move || state.get().form.gemini_model
                            on:input=edit(|f, v| f.gemini_model = v)
                        />
                    </fieldset>
                </Show>

                <label class="settings-form__check">
                    <input
                        id="ENABLE_FACIAL_ANALYSIS"
                        type="checkbox"
                        prop:checked=move || state.get().form.enable_facial_analysis
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            state.update(|s| s.form.enable_facial_analysis = checked);
                        }
                    />
                    "Enable facial expression feedback"
                </label>

                <button class="btn btn--primary" type="submit" disabled=move || state.get().saving>
                    {move || if state.get().saving { "Saving..." } else { "Save Settings" }}
                </button>
            </form>
        </div>
    }
}
