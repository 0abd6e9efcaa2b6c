//! Application wiring: configuration and router construction.

use std::path::Path;

use anyhow::Context as _;
use launcher_nav::{AddressBar, Router, RouterConfig};
use serde::Deserialize;

use crate::pages::{BatchSetupPage, CreateJobPage, ListJobsPage};

/// Top-level launcher configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    pub router: RouterConfig,
}

impl LauncherConfig {
    /// Load from the given TOML file; a missing file means defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw =
            std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let config =
            toml::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }
}

/// Build the launcher's router: the fixed three-route table bound to its
/// pages. Constructed explicitly and handed to the caller, no globals.
pub fn build_router(config: &LauncherConfig, address: AddressBar) -> launcher_nav::Result<Router> {
    Router::builder()
        .route("/", "CreateJob", CreateJobPage::default())
        .route("/jobs", "ListJobs", ListJobsPage::default())
        .route("/batch-setup", "AWSBatchSetup", BatchSetupPage::default())
        .config(config.router.clone())
        .address_bar(address)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn router_builds_from_default_config() {
        let config = LauncherConfig::default();
        let router = build_router(&config, AddressBar::new("/")).unwrap();
        assert_eq!(router.table().len(), 3);
        assert_eq!(router.resolve_current().name(), "CreateJob");
    }

    #[test]
    fn deep_linked_address_starts_on_jobs() {
        let config = LauncherConfig::default();
        let router = build_router(&config, AddressBar::new("/jobs")).unwrap();
        let current = router.resolve_current();
        assert_eq!(current.path(), "/jobs");
        assert_eq!(current.name(), "ListJobs");
    }
}
