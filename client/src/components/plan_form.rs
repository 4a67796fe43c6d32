//! Study-plan request form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submitting serializes the inputs into form fields, normalizes them into a
//! `StudyPlanRequest`, and posts it. The shared `PlanState` drives the
//! loading indicator and the results panel.
//!
//! ERROR HANDLING
//! ==============
//! Validation errors and failed requests surface as blocking alerts; the form
//! keeps its values so the user can retry.

use leptos::prelude::*;
use plans::form::normalize_request;

use crate::components::topic_field::TopicField;
use crate::net::api::BrowserApi;
use crate::state::plan::{FORM_ID, GENERATION_FAILED, PlanFormInput, PlanState, RESULTS_ID, fetch_plan};
use crate::util::dom;

/// Select options as `(value, label)`.
const DEPTH_LEVELS: [(&str, &str); 5] = [
    ("1", "1 - Overview"),
    ("2", "2 - Basic"),
    ("3", "3 - Moderate"),
    ("4", "4 - Detailed"),
    ("5", "5 - Comprehensive"),
];
const LEARNING_STYLES: [(&str, &str); 5] = [
    ("", "No preference"),
    ("visual", "Visual"),
    ("auditory", "Auditory"),
    ("reading/writing", "Reading/Writing"),
    ("kinesthetic", "Kinesthetic"),
];
const PRIOR_KNOWLEDGE: [(&str, &str); 5] = [
    ("", "Not specified"),
    ("none", "None"),
    ("beginner", "Beginner"),
    ("intermediate", "Intermediate"),
    ("advanced", "Advanced"),
];

#[component]
pub fn PlanForm(input: RwSignal<PlanFormInput>, plan: RwSignal<PlanState>) -> impl IntoView {
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if plan.with_untracked(|p| p.loading) {
            return;
        }

        let request = match normalize_request(&input.with_untracked(PlanFormInput::to_fields)) {
            Ok(request) => request,
            Err(e) => {
                dom::alert(&e.to_string());
                return;
            }
        };

        plan.update(PlanState::begin);
        leptos::task::spawn_local(async move {
            match fetch_plan(&BrowserApi, &request).await {
                Ok(result) => {
                    plan.update(|p| p.show(&result));
                    request_animation_frame(|| dom::scroll_into_view(RESULTS_ID));
                }
                Err(_) => {
                    plan.update(PlanState::fail);
                    dom::alert(GENERATION_FAILED);
                }
            }
        });
    };

    let loading = move || plan.with(|p| p.loading);

    view! {
        <form id=FORM_ID class="plan-form" on:submit=on_submit>
            <TopicField input=input/>

            <label for="goals">"Learning goals (comma separated)"</label>
            <textarea
                id="goals"
                name="goals"
                rows="2"
                prop:value=move || input.get().goals
                on:input=move |ev| input.update(|i| i.goals = event_target_value(&ev))
            ></textarea>

            <div class="plan-form__row">
                <label for="depth_level">"Depth"</label>
                <select
                    id="depth_level"
                    name="depth_level"
                    prop:value=move || input.get().depth_level
                    on:change=move |ev| input.update(|i| i.depth_level = event_target_value(&ev))
                >
                    {options(&DEPTH_LEVELS)}
                </select>

                <label for="duration_weeks">"Duration (weeks)"</label>
                <input
                    id="duration_weeks"
                    name="duration_weeks"
                    type="number"
                    min="1"
                    max="52"
                    prop:value=move || input.get().duration_weeks
                    on:input=move |ev| input.update(|i| i.duration_weeks = event_target_value(&ev))
                />
            </div>

            <div class="plan-form__row">
                <label for="learning_style">"Learning style"</label>
                <select
                    id="learning_style"
                    name="learning_style"
                    prop:value=move || input.get().learning_style
                    on:change=move |ev| input.update(|i| i.learning_style = event_target_value(&ev))
                >
                    {options(&LEARNING_STYLES)}
                </select>

                <label for="prior_knowledge">"Prior knowledge"</label>
                <select
                    id="prior_knowledge"
                    name="prior_knowledge"
                    prop:value=move || input.get().prior_knowledge
                    on:change=move |ev| input.update(|i| i.prior_knowledge = event_target_value(&ev))
                >
                    {options(&PRIOR_KNOWLEDGE)}
                </select>
            </div>

            <label for="additional_context">"Anything else we should know?"</label>
            <textarea
                id="additional_context"
                name="additional_context"
                rows="2"
                prop:value=move || input.get().additional_context
                on:input=move |ev| input.update(|i| i.additional_context = event_target_value(&ev))
            ></textarea>

            <label for="language">"Response language"</label>
            <input
                id="language"
                name="language"
                type="text"
                placeholder="en"
                prop:value=move || input.get().language
                on:input=move |ev| input.update(|i| i.language = event_target_value(&ev))
            />

            <label class="plan-form__check">
                <input
                    type="checkbox"
                    name="include_resources"
                    prop:checked=move || input.get().include_resources
                    on:change=move |ev| input.update(|i| i.include_resources = event_target_checked(&ev))
                />
                "Include learning resources"
            </label>
            <label class="plan-form__check">
                <input
                    type="checkbox"
                    name="generate_goals"
                    prop:checked=move || input.get().generate_goals
                    on:change=move |ev| input.update(|i| i.generate_goals = event_target_checked(&ev))
                />
                "Suggest goals for me"
            </label>

            <button class="btn btn--primary" type="submit" disabled=loading>
                {move || if loading() { "Generating..." } else { "Generate Study Plan" }}
            </button>
        </form>

        <Show when=loading>
            <div class="plan-loading">
                <div class="plan-loading__spinner"></div>
                "Building your study plan..."
            </div>
        </Show>
    }
}

fn options(choices: &[(&'static str, &'static str)]) -> Vec<AnyView> {
    choices
        .iter()
        .map(|&(value, label)| view! { <option value=value>{label}</option> }.into_any())
        .collect()
}
