mod common;

use cpstats_rs::CpError;
use httpmock::Method::{GET, POST};

#[tokio::test]
async fn leetcode_full_submission_stats() {
    let server = common::setup_server();
    let probe = server.mock(|when, then| {
        when.method(GET).path("/uwi");
        then.status(200).header("content-type", "text/html").body("<html></html>");
    });
    let graphql = server.mock(|when, then| {
        when.method(POST)
            .path("/graphql")
            .header_exists("referer")
            .json_body_includes(r#"{"operationName":"getUserProfile","variables":{"username":"uwi"}}"#);
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("leetcode_graphql", "full", "json"));
    });

    let client = common::leetcode_client(&server);
    let stats = cpstats_rs::leetcode::fetch(&client, "uwi").await.unwrap();
    probe.assert();
    graphql.assert();

    assert_eq!(stats.total_problems_solved, "120");
    assert_eq!(stats.easy_questions_solved, "60");
    assert_eq!(stats.medium_questions_solved, "45");
    assert_eq!(stats.hard_questions_solved, "15");
}

#[tokio::test]
async fn leetcode_absent_difficulties_default_to_zero() {
    let server = common::setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/sparse");
        then.status(200).body("<html></html>");
    });
    server.mock(|when, then| {
        when.method(POST).path("/graphql");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("leetcode_graphql", "all_only", "json"));
    });

    let client = common::leetcode_client(&server);
    let stats = cpstats_rs::leetcode::fetch(&client, "sparse").await.unwrap();

    assert_eq!(stats.total_problems_solved, "42");
    assert_eq!(stats.easy_questions_solved, "0");
    assert_eq!(stats.medium_questions_solved, "0");
    assert_eq!(stats.hard_questions_solved, "0");
}

#[tokio::test]
async fn leetcode_failed_probe_is_username_not_found() {
    let server = common::setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/no_such_user");
        then.status(404).body("not found");
    });

    let client = common::leetcode_client(&server);
    let err = cpstats_rs::leetcode::fetch(&client, "no_such_user")
        .await
        .unwrap_err();
    assert!(matches!(err, CpError::UsernameNotFound), "got {err:?}");
}

#[tokio::test]
async fn leetcode_graphql_failure_surfaces_as_status_error() {
    let server = common::setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/ratelimited");
        then.status(200).body("<html></html>");
    });
    server.mock(|when, then| {
        when.method(POST).path("/graphql");
        then.status(429).body("too many requests");
    });

    let client = common::leetcode_client(&server);
    let err = cpstats_rs::leetcode::fetch(&client, "ratelimited")
        .await
        .unwrap_err();
    assert!(
        matches!(err, CpError::Status { status: 429, .. }),
        "got {err:?}"
    );
}

#[tokio::test]
async fn leetcode_missing_submission_stats_is_data_error() {
    let server = common::setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/renamed");
        then.status(200).body("<html></html>");
    });
    server.mock(|when, then| {
        when.method(POST).path("/graphql");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"data":{"matchedUser":null}}"#);
    });

    let client = common::leetcode_client(&server);
    let err = cpstats_rs::leetcode::fetch(&client, "renamed").await.unwrap_err();
    assert!(matches!(err, CpError::Data(_)), "got {err:?}");
}
