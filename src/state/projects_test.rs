use super::*;

fn project(id: i64, values: &[f64]) -> Project {
    Project {
        project_id: id,
        title: format!("Project {id}"),
        description: String::new(),
        ratings: values
            .iter()
            .enumerate()
            .map(|(i, v)| Rating {
                rating_id: i64::try_from(i).unwrap() + 1,
                value: *v,
                comment: String::new(),
            })
            .collect(),
    }
}

// =============================================================
// average_rating
// =============================================================

#[test]
fn average_of_no_ratings_is_none() {
    assert_eq!(average_rating(&project(1, &[])), None);
}

#[test]
fn average_of_three_and_five_is_four() {
    assert_eq!(average_rating(&project(1, &[3.0, 5.0])), Some(4.0));
}

#[test]
fn average_of_four_and_two_is_three() {
    assert_eq!(average_rating(&project(1, &[4.0, 2.0])), Some(3.0));
}

#[test]
fn average_of_single_rating_is_that_rating() {
    assert_eq!(average_rating(&project(1, &[5.0])), Some(5.0));
}

// =============================================================
// RatingDraft
// =============================================================

#[test]
fn draft_without_value_yields_no_rating() {
    let draft = RatingDraft {
        value: None,
        comment: Some("nice".to_owned()),
    };
    assert_eq!(draft.into_rating(), None);
}

#[test]
fn draft_without_comment_normalizes_to_empty_string() {
    let draft = RatingDraft {
        value: Some(5.0),
        comment: None,
    };
    let rating = draft.into_rating().unwrap();
    assert_eq!(rating.comment, "");
    assert_eq!(rating.value, 5.0);
}

#[test]
fn draft_rating_id_is_the_placeholder() {
    let draft = RatingDraft {
        value: Some(3.0),
        comment: Some("ok".to_owned()),
    };
    assert_eq!(draft.into_rating().unwrap().rating_id, 0);
}

#[test]
fn normalized_payload_carries_explicit_empty_comment() {
    let draft = RatingDraft {
        value: Some(5.0),
        comment: None,
    };
    let json = serde_json::to_value(draft.into_rating().unwrap()).unwrap();
    assert_eq!(json["comment"], "");
}

// =============================================================
// ProjectsState
// =============================================================

#[test]
fn projects_state_defaults() {
    let s = ProjectsState::default();
    assert!(s.projects.is_none());
    assert!(s.drafts.is_empty());
}

#[test]
fn set_projects_replaces_the_snapshot_wholesale() {
    let mut s = ProjectsState::default();
    s.set_projects(vec![project(1, &[4.0]), project(2, &[])]);
    s.set_projects(vec![project(3, &[])]);

    let projects = s.projects.unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].project_id, 3);
}

#[test]
fn draft_for_unknown_project_is_empty() {
    let s = ProjectsState::default();
    assert_eq!(s.draft(42), RatingDraft::default());
}

#[test]
fn draft_edits_accumulate_per_project() {
    let mut s = ProjectsState::default();
    s.set_draft_value(1, Some(4.0));
    s.set_draft_comment(1, "great".to_owned());
    s.set_draft_value(2, Some(2.0));

    assert_eq!(s.draft(1).value, Some(4.0));
    assert_eq!(s.draft(1).comment.as_deref(), Some("great"));
    assert_eq!(s.draft(2).comment, None);
}

#[test]
fn clearing_a_draft_leaves_other_drafts_alone() {
    let mut s = ProjectsState::default();
    s.set_draft_value(1, Some(4.0));
    s.set_draft_value(2, Some(2.0));
    s.clear_draft(1);

    assert_eq!(s.draft(1), RatingDraft::default());
    assert_eq!(s.draft(2).value, Some(2.0));
}

#[test]
fn clearing_draft_value_marks_the_draft_incomplete_again() {
    let mut s = ProjectsState::default();
    s.set_draft_value(1, Some(4.0));
    s.set_draft_value(1, None);
    assert_eq!(s.draft(1).into_rating(), None);
}
