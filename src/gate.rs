//! Environment gating: only trusted CI builds may upload.

/// Set to `"true"` when running on the CI service.
pub const CI_VAR: &str = "TRAVIS";
/// Set to `"true"` when the CI service exposed encrypted variables to this build.
pub const SECURE_VAR: &str = "TRAVIS_SECURE_ENV_VARS";

pub const USAGE: &str = "\
This program uploads the screenshots to a server so that they can be further
investigated. The key is obtained via secret CI environment variables to
prevent unauthorized uploads.

You should not run this program locally.
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Trusted CI build with credentials available.
    Allowed,
    /// CI build without secure variables, i.e. a pull request.
    PullRequest,
    /// Not on CI, or credentials are missing.
    NotAuthorized,
}

impl Gate {
    pub fn exit_code(self) -> i32 {
        match self {
            Gate::Allowed => 0,
            Gate::NotAuthorized => 1,
            Gate::PullRequest => 2,
        }
    }
}

/// Decide whether this process may upload. The pull-request check runs first.
pub fn check(lookup: impl Fn(&str) -> Option<String>) -> Gate {
    let on_ci = lookup(CI_VAR).as_deref() == Some("true");
    let secure = lookup(SECURE_VAR).as_deref() == Some("true");

    if on_ci && !secure {
        return Gate::PullRequest;
    }
    if !on_ci || !secure {
        return Gate::NotAuthorized;
    }
    Gate::Allowed
}

/// Check the real process environment.
pub fn check_env() -> Gate {
    check(|name| std::env::var(name).ok())
}
