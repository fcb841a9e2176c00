mod common;

use cpstats_rs::CpError;
use httpmock::Method::GET;

#[tokio::test]
async fn spoj_valid_profile() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/users/somebody/");
        then.status(200)
            .header("content-type", "text/html")
            .body(common::fixture("spoj_profile", "valid", "html"));
    });

    let client = common::spoj_client(&server);
    let stats = cpstats_rs::spoj::fetch(&client, "somebody").await.unwrap();
    mock.assert();

    assert_eq!(stats.username, "somebody");
    // "(1234.5" with its leading decoration stripped.
    assert!((stats.points - 1234.5).abs() < f64::EPSILON);
    assert_eq!(stats.rank, 42);
    // Six cells, four with non-empty link text.
    assert_eq!(stats.solved, 4);
}

#[tokio::test]
async fn spoj_non_numeric_points_is_username_not_found() {
    let server = common::setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/users/odd_layout/");
        then.status(200)
            .header("content-type", "text/html")
            .body(common::fixture("spoj_profile", "badpoints", "html"));
    });

    let client = common::spoj_client(&server);
    let err = cpstats_rs::spoj::fetch(&client, "odd_layout").await.unwrap_err();
    assert!(matches!(err, CpError::UsernameNotFound), "got {err:?}");
}

#[tokio::test]
async fn spoj_missing_paragraphs_is_username_not_found() {
    let server = common::setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/users/ghost/");
        then.status(200)
            .header("content-type", "text/html")
            .body(common::fixture("spoj_profile", "missing", "html"));
    });

    let client = common::spoj_client(&server);
    let err = cpstats_rs::spoj::fetch(&client, "ghost").await.unwrap_err();
    assert!(matches!(err, CpError::UsernameNotFound), "got {err:?}");
}

#[tokio::test]
async fn spoj_non_numeric_rank_is_username_not_found() {
    let server = common::setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/users/reshuffled/");
        then.status(200).header("content-type", "text/html").body(
            r#"<html><body>
                <p>Somebody</p>
                <p>Joined: 2015-03-02</p>
                <p>World Rank: #unranked (1234.5 points)</p>
                <table class="table table-condensed">
                  <tr><td><a href="/problems/PRIME1/">PRIME1</a></td></tr>
                </table>
            </body></html>"#,
        );
    });

    let client = common::spoj_client(&server);
    let err = cpstats_rs::spoj::fetch(&client, "reshuffled").await.unwrap_err();
    assert!(matches!(err, CpError::UsernameNotFound), "got {err:?}");
}
