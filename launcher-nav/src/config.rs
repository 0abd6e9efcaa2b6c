//! Router configuration.
//!
//! Deserializable from the application's TOML config; every field has a
//! default so an absent or partial `[router]` section is fine.

use serde::Deserialize;

/// How navigation history is hosted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HistoryMode {
    /// Integrated with the host address bar: the current path is visible,
    /// shareable, and deep-linkable, and external changes are followed.
    #[default]
    Address,
    /// Purely in-memory history, no address persistence. For embedded
    /// hosting where no address surface exists.
    Memory,
}

/// What to do when a requested path matches no route.
///
/// Either way the failure is recoverable and navigation state stays
/// exactly as it was before the request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotFoundPolicy {
    /// Keep the current view; the router reports `RouteNotFound`.
    #[default]
    Ignore,
    /// Navigate to the named route instead.
    Fallback(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RouterConfig {
    pub history: HistoryMode,
    pub not_found: NotFoundPolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Wrapper {
        #[serde(default)]
        router: RouterConfig,
    }

    #[test]
    fn defaults_when_section_absent() {
        let cfg: Wrapper = toml::from_str("").unwrap();
        assert_eq!(cfg.router.history, HistoryMode::Address);
        assert_eq!(cfg.router.not_found, NotFoundPolicy::Ignore);
    }

    #[test]
    fn parses_memory_history_and_fallback() {
        let cfg: Wrapper = toml::from_str(
            r#"
            [router]
            history = "memory"
            not-found = { fallback = "CreateJob" }
            "#,
        )
        .unwrap();
        assert_eq!(cfg.router.history, HistoryMode::Memory);
        assert_eq!(
            cfg.router.not_found,
            NotFoundPolicy::Fallback("CreateJob".to_string())
        );
    }

    #[test]
    fn parses_explicit_ignore() {
        let cfg: Wrapper = toml::from_str(
            r#"
            [router]
            not-found = "ignore"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.router.not_found, NotFoundPolicy::Ignore);
    }
}
