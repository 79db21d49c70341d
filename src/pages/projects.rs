//! Projects page: lists portfolio projects and collects rating submissions.

use leptos::prelude::*;

use crate::components::project_card::ProjectCard;
use crate::state::projects::ProjectsState;

/// Projects page — fetches the project list on activation and renders one
/// card per project. Submitting a rating persists it and re-fetches the
/// whole list; the refreshed server state is authoritative.
#[component]
pub fn ProjectsPage() -> impl IntoView {
    let state = RwSignal::new(ProjectsState::default());
    let error = RwSignal::new(None::<String>);

    // Initial fetch. Reads nothing reactive, so this runs once on mount.
    Effect::new(move || load_projects(state, error));

    let on_submit = Callback::new(move |project_id: i64| submit_rating(project_id, state, error));

    view! {
        <div class="projects-page">
            <h1>"Projects"</h1>
            {move || {
                error
                    .get()
                    .map(|msg| view! { <p class="projects-page__error">{msg}</p> })
            }}
            <div class="projects-page__list">
                {move || {
                    state
                        .get()
                        .projects
                        .map(|projects| {
                            projects
                                .into_iter()
                                .map(|p| {
                                    view! { <ProjectCard project=p state=state on_submit=on_submit/> }
                                })
                                .collect::<Vec<_>>()
                        })
                }}
            </div>
        </div>
    }
}

/// Fire a project list fetch and apply the result when it resolves.
///
/// On failure the current list is left untouched and only the generic error
/// message is shown. In-flight fetches are never cancelled; whichever
/// response arrives last wins.
fn load_projects(state: RwSignal<ProjectsState>, error: RwSignal<Option<String>>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_projects().await {
                Ok(projects) => {
                    state.update(|s| s.set_projects(projects));
                    error.set(None);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (state, error);
    }
}

/// Submit the draft rating for a project.
///
/// A draft with no numeric value is incomplete and silently ignored — no
/// network call is made. On success the draft is cleared and a full list
/// refresh is issued, exactly once.
fn submit_rating(project_id: i64, state: RwSignal<ProjectsState>, error: RwSignal<Option<String>>) {
    let Some(rating) = state.with_untracked(|s| s.draft(project_id)).into_rating() else {
        return;
    };

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::submit_rating(project_id, &rating).await {
                Ok(()) => {
                    state.update(|s| s.clear_draft(project_id));
                    error.set(None);
                    load_projects(state, error);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (rating, error);
    }
}
