#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use std::collections::HashMap;

use crate::net::types::{Project, Rating};

/// State for the projects page: the fetched project list and the per-project
/// rating drafts being composed by the visitor.
///
/// `projects` stays `None` until the first successful fetch; each later fetch
/// replaces it wholesale. The refreshed server state is authoritative — there
/// is no optimistic update or merge.
#[derive(Clone, Debug, Default)]
pub struct ProjectsState {
    pub projects: Option<Vec<Project>>,
    pub drafts: HashMap<i64, RatingDraft>,
}

impl ProjectsState {
    /// Replace the project list with a freshly fetched snapshot.
    pub fn set_projects(&mut self, projects: Vec<Project>) {
        self.projects = Some(projects);
    }

    /// The draft for a project, or an empty one if none is in progress.
    #[must_use]
    pub fn draft(&self, project_id: i64) -> RatingDraft {
        self.drafts.get(&project_id).cloned().unwrap_or_default()
    }

    pub fn set_draft_value(&mut self, project_id: i64, value: Option<f64>) {
        self.drafts.entry(project_id).or_default().value = value;
    }

    pub fn set_draft_comment(&mut self, project_id: i64, comment: String) {
        self.drafts.entry(project_id).or_default().comment = Some(comment);
    }

    /// Drop the draft for a project after a successful submission.
    pub fn clear_draft(&mut self, project_id: i64) {
        self.drafts.remove(&project_id);
    }
}

/// An in-progress, not-yet-submitted rating held in client memory.
///
/// Absent fields mean the visitor has not filled them in yet.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RatingDraft {
    pub value: Option<f64>,
    pub comment: Option<String>,
}

impl RatingDraft {
    /// Convert the draft into a submittable [`Rating`].
    ///
    /// Returns `None` when no numeric value has been chosen — an incomplete
    /// draft is silently ignored rather than treated as an error. A missing
    /// comment is normalized to the empty string so the outgoing payload
    /// always carries an explicit comment field. The server assigns the real
    /// rating id; the draft sends the `0` placeholder.
    #[must_use]
    pub fn into_rating(self) -> Option<Rating> {
        let value = self.value?;
        Some(Rating {
            rating_id: 0,
            value,
            comment: self.comment.unwrap_or_default(),
        })
    }
}

/// Arithmetic mean of a project's rating values, or `None` when the project
/// has no ratings yet. Never reports 0 for "no ratings" — that would imply a
/// measured score.
#[must_use]
pub fn average_rating(project: &Project) -> Option<f64> {
    if project.ratings.is_empty() {
        return None;
    }
    let total: f64 = project.ratings.iter().map(|r| r.value).sum();
    let count = project.ratings.len() as f64;
    Some(total / count)
}
