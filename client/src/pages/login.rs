//! Email + password login page.

use leptos::prelude::*;

use crate::net::api::BrowserApi;
use crate::state::login::{LoginOutcome, submit_login};
use crate::util::dom;

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        busy.set(true);

        leptos::task::spawn_local(async move {
            let outcome = submit_login(&BrowserApi, &email_value, &password_value).await;
            dom::alert(&outcome.alert_text());
            match outcome {
                LoginOutcome::Redirect(path) => dom::redirect(path),
                LoginOutcome::Invalid(_) | LoginOutcome::Rejected(_) | LoginOutcome::Failed => {
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"StudyplannerAI"</h1>
                <p class="login-card__subtitle">"Sign in to plan your studies"</p>
                <form id="loginForm" class="login-form" on:submit=on_submit>
                    <input
                        id="email"
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        id="password"
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Log In"
                    </button>
                </form>
            </div>
        </div>
    }
}
