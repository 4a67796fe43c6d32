//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{login::LoginPage, planner::PlannerPage, settings::SettingsPage};

/// Root application component.
///
/// Pages own their state; nothing is provided at the root beyond meta
/// context, since the widgets never talk to each other.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="StudyplannerAI"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=PlannerPage/>
                <Route path=StaticSegment("dashboard") view=PlannerPage/>
                <Route path=StaticSegment("settings") view=SettingsPage/>
            </Routes>
        </Router>
    }
}
