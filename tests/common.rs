#![allow(dead_code)]

use std::{fs, path::Path};

use cpstats_rs::CpClient;
use httpmock::MockServer;
use url::Url;

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn fixture(endpoint: &str, name: &str, ext: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let filename = format!("{}_{}.{}", endpoint, name, ext);
    let path = dir.join(&filename);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

pub fn server_url(server: &MockServer, path: &str) -> Url {
    Url::parse(&format!("{}{}", server.base_url(), path)).unwrap()
}

/* ---- clients with one platform base pointed at the mock server ---- */

pub fn codechef_client(server: &MockServer) -> CpClient {
    CpClient::builder()
        .base_codechef(server_url(server, "/users/"))
        .build()
        .unwrap()
}

pub fn codeforces_client(server: &MockServer) -> CpClient {
    CpClient::builder()
        .base_codeforces_api(server_url(server, "/api/"))
        .build()
        .unwrap()
}

pub fn spoj_client(server: &MockServer) -> CpClient {
    CpClient::builder()
        .base_spoj(server_url(server, "/users/"))
        .build()
        .unwrap()
}

pub fn geeksforgeeks_client(server: &MockServer) -> CpClient {
    CpClient::builder()
        .base_geeksforgeeks(server_url(server, "/user/"))
        .build()
        .unwrap()
}

pub fn interviewbit_client(server: &MockServer) -> CpClient {
    CpClient::builder()
        .base_interviewbit(server_url(server, "/profile/"))
        .build()
        .unwrap()
}

pub fn leetcode_client(server: &MockServer) -> CpClient {
    CpClient::builder()
        .base_leetcode(server_url(server, "/"))
        .leetcode_graphql(server_url(server, "/graphql"))
        .build()
        .unwrap()
}
