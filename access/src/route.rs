//! Path classification into public and protected routes.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

pub const DEFAULT_LOGIN_PATH: &str = "/login";

/// Classification of a single request path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteClassification {
    /// Normalized path (no query string, no trailing slash).
    pub path: String,
    pub is_public: bool,
}

/// Table of public paths. Anything not listed is protected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable {
    login_path: String,
    public: Vec<String>,
}

impl RouteTable {
    /// Build a table whose only public route is `login_path`.
    #[must_use]
    pub fn new(login_path: &str) -> Self {
        Self { login_path: normalize_path(login_path), public: Vec::new() }
    }

    /// Mark an additional exact path as public.
    #[must_use]
    pub fn with_public(mut self, path: &str) -> Self {
        let path = normalize_path(path);
        if path != self.login_path && !self.public.contains(&path) {
            self.public.push(path);
        }
        self
    }

    #[must_use]
    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    /// Classify `path`. The login path is always public.
    #[must_use]
    pub fn classify(&self, path: &str) -> RouteClassification {
        let path = normalize_path(path);
        let is_public = path == self.login_path || self.public.iter().any(|p| *p == path);
        RouteClassification { path, is_public }
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new(DEFAULT_LOGIN_PATH)
    }
}

/// Strip query string, fragment and trailing slashes; empty becomes `/`.
#[must_use]
pub fn normalize_path(raw: &str) -> String {
    let end = raw.find(['?', '#']).unwrap_or(raw.len());
    let trimmed = raw[..end].trim_end_matches('/');
    if trimmed.is_empty() {
        return "/".to_owned();
    }
    if trimmed.starts_with('/') {
        trimmed.to_owned()
    } else {
        format!("/{trimmed}")
    }
}
