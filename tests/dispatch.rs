mod common;

use cpstats_rs::{CpClient, CpError, ProfileStats, get_details};
use httpmock::Method::GET;

#[tokio::test]
async fn unknown_platform_is_rejected_before_any_request() {
    let client = CpClient::default();
    let err = get_details(&client, "whoever", "myspace").await.unwrap_err();
    match err {
        CpError::PlatformNotSupported(platform) => assert_eq!(platform, "myspace"),
        other => panic!("expected PlatformNotSupported, got {other:?}"),
    }
}

#[tokio::test]
async fn platform_identifiers_are_case_sensitive() {
    let client = CpClient::default();
    let err = get_details(&client, "whoever", "Codeforces").await.unwrap_err();
    assert!(matches!(err, CpError::PlatformNotSupported(_)), "got {err:?}");
}

#[tokio::test]
async fn dispatch_routes_to_the_requested_platform() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/user/geek");
        then.status(200)
            .header("content-type", "text/html")
            .body(common::fixture("geeksforgeeks_profile", "valid", "html"));
    });

    let client = common::geeksforgeeks_client(&server);
    let stats = get_details(&client, "geek", "geeksforgeeks").await.unwrap();
    mock.assert();

    assert_eq!(stats.status(), "Success");
    assert_eq!(stats.platform(), "GeeksForGeeks");
    match stats {
        ProfileStats::GeeksForGeeks(g) => {
            assert_eq!(g.score, 250);
            assert_eq!(g.solved, 78);
        }
        other => panic!("expected GeeksForGeeks stats, got {other:?}"),
    }
}

#[tokio::test]
async fn strategy_failures_propagate_unchanged() {
    let server = common::setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/profile/unknown");
        then.status(404).body("not found");
    });

    let client = common::interviewbit_client(&server);
    let err = get_details(&client, "unknown", "interviewbit").await.unwrap_err();
    assert!(matches!(err, CpError::UsernameNotFound), "got {err:?}");
}
