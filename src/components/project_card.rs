//! Card component for a single portfolio project.

use leptos::prelude::*;

use crate::net::types::Project;
use crate::state::projects::{ProjectsState, average_rating};

/// A project card: title, description, current ratings with their average,
/// and a form for composing a new rating draft.
///
/// The draft lives in the shared [`ProjectsState`] keyed by project id, so
/// it survives list re-renders and is cleared by the page after a
/// successful submission.
#[component]
pub fn ProjectCard(
    project: Project,
    state: RwSignal<ProjectsState>,
    on_submit: Callback<i64>,
) -> impl IntoView {
    let project_id = project.project_id;

    let average_label = average_rating(&project).map_or_else(
        || "No ratings yet".to_owned(),
        |avg| format!("Average rating: {avg:.1}"),
    );

    let on_value_change = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev).parse::<f64>().ok();
        state.update(|s| s.set_draft_value(project_id, value));
    };

    let on_comment_input = move |ev: leptos::ev::Event| {
        state.update(|s| s.set_draft_comment(project_id, event_target_value(&ev)));
    };

    view! {
        <article class="project-card">
            <h2 class="project-card__title">{project.title}</h2>
            <p class="project-card__description">{project.description}</p>
            <p class="project-card__average">{average_label}</p>

            <ul class="project-card__ratings">
                {project
                    .ratings
                    .into_iter()
                    .map(|r| {
                        view! {
                            <li class="project-card__rating">
                                <span class="project-card__rating-value">{r.value}</span>
                                <span class="project-card__rating-comment">{r.comment}</span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>

            <div class="project-card__form">
                <label class="project-card__label">
                    "Your rating"
                    <select
                        class="project-card__value"
                        prop:value=move || {
                            state
                                .get()
                                .draft(project_id)
                                .value
                                .map(|v| format!("{v}"))
                                .unwrap_or_default()
                        }
                        on:change=on_value_change
                    >
                        <option value="">"Select a rating"</option>
                        <option value="1">"1"</option>
                        <option value="2">"2"</option>
                        <option value="3">"3"</option>
                        <option value="4">"4"</option>
                        <option value="5">"5"</option>
                    </select>
                </label>
                <label class="project-card__label">
                    "Comment"
                    <textarea
                        class="project-card__comment"
                        prop:value=move || state.get().draft(project_id).comment.unwrap_or_default()
                        on:input=on_comment_input
                    ></textarea>
                </label>
                <button class="btn btn--primary" on:click=move |_| on_submit.run(project_id)>
                    "Submit rating"
                </button>
            </div>
        </article>
    }
}
