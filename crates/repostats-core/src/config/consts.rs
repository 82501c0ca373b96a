//! Constants shared across the workspace

/// Remote endpoints
pub mod endpoints {
    /// Top-level manifest of the KiCad package repository
    pub const REPOSITORY_JSON: &str = "https://repository.kicad.org/repository.json";

    /// GitHub REST API root
    pub const GITHUB_API: &str = "https://api.github.com";

    /// Host serving GitHub release downloads
    pub const GITHUB_HOST: &str = "github.com";
}

/// HTTP request settings
pub mod http {
    /// User agent sent with every request
    pub const USER_AGENT: &str = "https://github.com/pointhi/kicad-package-repository-stats/";

    /// Accept header value sent with every request
    pub const ACCEPT_JSON: &str = "application/json";

    /// Transport timeout in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
}

/// Environment variable names
pub mod env {
    /// GitHub credential used for authenticated API calls
    pub const GITHUB_TOKEN: &str = "GITHUB_TOKEN";

    /// Override for the repository manifest URL
    pub const REPOSITORY_URL: &str = "REPOSTATS_REPOSITORY_URL";

    /// Override for the GitHub API root
    pub const GITHUB_API_URL: &str = "REPOSTATS_GITHUB_API_URL";
}
