//! Mock server helpers for testing
//!
//! Thin wrappers over mockito that serve the repository manifests and the
//! GitHub release endpoint. Each test creates its own `mockito::Server`, so
//! mocks never collide across tests running in parallel. Mocks are removed
//! when the returned `Mock` values drop.

use mockito::{Mock, ServerGuard};

use crate::fixtures::repository_json;

/// Path the mocked `repository.json` is served from
pub const REPOSITORY_PATH: &str = "/repository.json";

/// Path the mocked `packages.json` is served from
pub const PACKAGES_PATH: &str = "/packages.json";

/// Mocks a GET endpoint returning a JSON body
pub fn mock_json(server: &mut ServerGuard, path: &str, status: usize, body: &str) -> Mock {
    server
        .mock("GET", path)
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create()
}

/// Both manifest mocks plus the URL to start from
pub struct MockedRepository {
    pub repository: Mock,
    pub packages: Mock,
    /// Full URL of the mocked `repository.json`
    pub repository_url: String,
}

/// Serves `repository.json` pointing at a mocked `packages.json` with `packages_body`
pub fn mock_repository(server: &mut ServerGuard, packages_body: &str) -> MockedRepository {
    let packages_url = format!("{}{}", server.url(), PACKAGES_PATH);
    let repository = mock_json(server, REPOSITORY_PATH, 200, &repository_json(&packages_url));
    let packages = mock_json(server, PACKAGES_PATH, 200, packages_body);

    MockedRepository {
        repository,
        packages,
        repository_url: format!("{}{}", server.url(), REPOSITORY_PATH),
    }
}

/// Mocks `GET /repos/{username}/{repository}/releases/tags/{tag}`
pub fn mock_release(
    server: &mut ServerGuard,
    username: &str,
    repository: &str,
    tag: &str,
    status: usize,
    body: &str,
) -> Mock {
    let path = format!("/repos/{}/{}/releases/tags/{}", username, repository, tag);
    mock_json(server, &path, status, body)
}
