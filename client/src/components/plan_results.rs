//! Rendered study plan with print, download and reset actions.

use leptos::prelude::*;
use plans::view::{MilestoneView, PlanView, ResourceView};

use crate::state::plan::{DOWNLOAD_PENDING, FORM_ID, PlanFormInput, PlanState, RESULTS_ID};
use crate::util::dom;

#[component]
pub fn PlanResults(plan: RwSignal<PlanState>, input: RwSignal<PlanFormInput>) -> impl IntoView {
    let on_new_plan = move |_| {
        plan.update(PlanState::reset);
        input.set(PlanFormInput::default());
        dom::scroll_into_view(FORM_ID);
    };

    view! {
        <Show when=move || plan.with(PlanState::results_visible)>
            <section id=RESULTS_ID class="plan-results">
                {move || plan.get().view.map(render_plan)}
                <div class="plan-results__actions">
                    <button class="btn" on:click=move |_| dom::print()>
                        <i class="fas fa-print"></i>
                        " Print"
                    </button>
                    <button class="btn" on:click=move |_| dom::alert(DOWNLOAD_PENDING)>
                        <i class="fas fa-download"></i>
                        " Download PDF"
                    </button>
                    <button class="btn btn--primary" on:click=on_new_plan>
                        <i class="fas fa-plus"></i>
                        " New Plan"
                    </button>
                </div>
            </section>
        </Show>
    }
}

fn render_plan(view: PlanView) -> impl IntoView {
    let show_prerequisites = view.show_prerequisites();
    let show_resources = view.show_resources();
    let PlanView {
        title,
        subtitle,
        summary,
        objectives,
        concepts,
        prerequisites,
        milestones,
        resources,
        recommendations,
    } = view;

    view! {
        <header class="plan-results__header">
            <h2 id="planTitle">{title}</h2>
            <p class="plan-results__subtitle">{subtitle}</p>
        </header>
        <p class="plan-results__summary">{summary}</p>

        {show_prerequisites
            .then(|| {
                view! {
                    <h3>"Prerequisites"</h3>
                    <ul class="plan-results__prerequisites">{bullets(prerequisites)}</ul>
                }
            })}

        <h3>"Learning Objectives"</h3>
        <ul class="plan-results__objectives">{bullets(objectives)}</ul>

        <h3>"Key Concepts"</h3>
        <div class="plan-results__concepts">
            {concepts
                .into_iter()
                .map(|concept| view! { <span class="concept-tag">{concept}</span> })
                .collect::<Vec<_>>()}
        </div>

        <h3>"Milestones"</h3>
        <div class="plan-results__milestones">
            {milestones.into_iter().map(milestone_card).collect::<Vec<_>>()}
        </div>

        {show_resources
            .then(|| {
                view! {
                    <div class="plan-results__resources">
                        <h3>"Resources"</h3>
                        {resources.into_iter().map(resource_row).collect::<Vec<_>>()}
                    </div>
                }
            })}

        {recommendations
            .map(|text| {
                view! {
                    <div class="plan-results__recommendations">
                        <h3>"Recommendations"</h3>
                        <p>{text}</p>
                    </div>
                }
            })}
    }
}

fn bullets(items: Vec<String>) -> Vec<AnyView> {
    items
        .into_iter()
        .map(|item| view! { <li>{item}</li> }.into_any())
        .collect()
}

fn milestone_card(milestone: MilestoneView) -> impl IntoView {
    view! {
        <div class="milestone">
            {milestone.week_label.map(|week| view! { <span class="milestone__week">{week}</span> })}
            <h4 class="milestone__title">{milestone.title}</h4>
            <p class="milestone__description">{milestone.description}</p>
            <div class="milestone__hours">
                <i class="far fa-clock"></i>
                " "
                {milestone.hours_label}
            </div>
            <ul class="milestone__tasks">{bullets(milestone.tasks)}</ul>
        </div>
    }
}

fn resource_row(resource: ResourceView) -> impl IntoView {
    let title = match resource.link {
        Some(href) => view! {
            <a href=href target="_blank" rel="noopener noreferrer">
                {resource.title}
            </a>
        }
            .into_any(),
        None => view! { <span>{resource.title}</span> }.into_any(),
    };

    view! {
        <div class="resource">
            <i class=format!("fas {} resource__icon", resource.icon.css_class())></i>
            <div class="resource__body">
                <div class="resource__title">{title}</div>
                <div class="resource__type">{resource.kind_label}</div>
                <p class="resource__description">{resource.description}</p>
            </div>
        </div>
    }
}
