#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// A numeric score (plus optional comment) attached to one project.
///
/// `rating_id` is assigned server-side; a draft that has not been submitted
/// yet carries the `0` placeholder.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub rating_id: i64,
    pub value: f64,
    pub comment: String,
}

/// A portfolio item with its attached ratings.
///
/// Created and owned server-side; the client holds a read-only snapshot
/// refreshed on demand.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub project_id: i64,
    pub title: String,
    pub description: String,
    pub ratings: Vec<Rating>,
}
