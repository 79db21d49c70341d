use super::*;

#[test]
fn urls_target_the_portfolio_endpoints() {
    assert_eq!(projects_url(), "https://caswell.dev/api/projects");
    assert_eq!(rating_url(7), "https://caswell.dev/api/projects/7/rating");
}

#[test]
fn api_error_displays_the_generic_message() {
    assert_eq!(
        ApiError.to_string(),
        "Something bad happened; please try again later."
    );
}

#[test]
fn failure_causes_collapse_into_the_same_opaque_error() {
    let network = normalize(&ApiFailure::Network("connection refused".to_owned()));
    let status = normalize(&ApiFailure::Status {
        status: 500,
        body: "oops".to_owned(),
    });
    assert_eq!(network, status);
}

#[test]
fn status_failure_log_line_includes_code_and_body() {
    let cause = ApiFailure::Status {
        status: 403,
        body: "forbidden".to_owned(),
    };
    assert_eq!(cause.to_string(), "backend returned code 403, body was: forbidden");
}
