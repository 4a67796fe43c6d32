//! Planner page: request form, results, chat and camera feedback.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns the form input and plan signals so the example buttons,
//! the form, the chat widget and the results panel all act on one plan.

use leptos::prelude::*;

use crate::components::camera_widget::CameraWidget;
use crate::components::chat_widget::ChatWidget;
use crate::components::plan_form::PlanForm;
use crate::components::plan_results::PlanResults;
use crate::state::plan::{EXAMPLE_TOPICS, FORM_ID, PlanFormInput, PlanState};
use crate::util::dom;

#[component]
pub fn PlannerPage() -> impl IntoView {
    let input = RwSignal::new(PlanFormInput::default());
    let plan = RwSignal::new(PlanState::default());

    let use_example = move |topic: &'static str| {
        input.update(|i| i.topic = topic.to_owned());
        dom::scroll_into_view(FORM_ID);
    };

    view! {
        <div class="planner-page">
            <header class="planner-page__header">
                <h1>"StudyplannerAI"</h1>
                <nav>
                    <a href="/settings">
                        <i class="fas fa-cog"></i>
                        " Settings"
                    </a>
                </nav>
            </header>

            <section class="planner-page__examples">
                <p>"Try an example:"</p>
                {EXAMPLE_TOPICS
                    .iter()
                    .map(|&topic| {
                        view! {
                            <button class="btn example-topic" on:click=move |_| use_example(topic)>
                                {topic}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>

            <PlanForm input=input plan=plan/>
            <PlanResults plan=plan input=input/>
            <CameraWidget/>
            <ChatWidget plan=plan/>
        </div>
    }
}
