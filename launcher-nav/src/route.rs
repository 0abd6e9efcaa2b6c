//! Route bindings and the immutable route table.
//!
//! A [`Route`] pairs a URL-style path with a unique view name. The
//! [`RouteTable`] is built once at startup, validated, and never mutated
//! afterwards; matching is an exact string lookup, no patterns or wildcards.

use snafu::ensure;

use crate::error::{self, Result};

/// Path of the route every table must contain.
pub const ROOT_PATH: &str = "/";

/// An immutable binding from a path to a named view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    path: String,
    name: String,
}

impl Route {
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The fixed, ordered collection of all routes for an application.
///
/// Paths and names are pairwise unique, so lookup is unambiguous by
/// construction. A table without a `/` route is rejected because the
/// router falls back to it when the initial address matches nothing.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Validate and freeze a list of routes.
    pub fn new(routes: Vec<Route>) -> Result<Self> {
        ensure!(!routes.is_empty(), error::EmptyRouteTableSnafu);
        for (i, route) in routes.iter().enumerate() {
            for earlier in &routes[..i] {
                ensure!(
                    earlier.path != route.path,
                    error::DuplicateRoutePathSnafu { path: route.path.clone() }
                );
                ensure!(
                    earlier.name != route.name,
                    error::DuplicateRouteNameSnafu { name: route.name.clone() }
                );
            }
        }
        ensure!(
            routes.iter().any(|r| r.path == ROOT_PATH),
            error::MissingRootRouteSnafu
        );
        Ok(Self { routes })
    }

    /// Exact-match lookup by path.
    pub fn find(&self, path: &str) -> Option<usize> {
        self.routes.iter().position(|r| r.path == path)
    }

    /// Lookup by route name.
    pub fn by_name(&self, name: &str) -> Option<usize> {
        self.routes.iter().position(|r| r.name == name)
    }

    pub fn get(&self, index: usize) -> &Route {
        &self.routes[index]
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn launcher_routes() -> Vec<Route> {
        vec![
            Route::new("/", "CreateJob"),
            Route::new("/jobs", "ListJobs"),
            Route::new("/batch-setup", "AWSBatchSetup"),
        ]
    }

    #[test]
    fn exact_match_lookup() {
        let table = RouteTable::new(launcher_routes()).unwrap();

        assert_eq!(table.get(table.find("/").unwrap()).name(), "CreateJob");
        assert_eq!(table.get(table.find("/jobs").unwrap()).name(), "ListJobs");
        assert_eq!(
            table.get(table.find("/batch-setup").unwrap()).name(),
            "AWSBatchSetup"
        );
        assert!(table.find("/jobs/").is_none());
        assert!(table.find("/does-not-exist").is_none());
    }

    #[test]
    fn duplicate_path_rejected() {
        let mut routes = launcher_routes();
        routes.push(Route::new("/jobs", "JobsAgain"));
        match RouteTable::new(routes) {
            Err(Error::DuplicateRoutePath { path }) => assert_eq!(path, "/jobs"),
            other => panic!("expected DuplicateRoutePath, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_name_rejected() {
        let mut routes = launcher_routes();
        routes.push(Route::new("/jobs/archive", "ListJobs"));
        match RouteTable::new(routes) {
            Err(Error::DuplicateRouteName { name }) => assert_eq!(name, "ListJobs"),
            other => panic!("expected DuplicateRouteName, got {other:?}"),
        }
    }

    #[test]
    fn empty_table_rejected() {
        assert!(matches!(
            RouteTable::new(Vec::new()),
            Err(Error::EmptyRouteTable)
        ));
    }

    #[test]
    fn missing_root_rejected() {
        let routes = vec![Route::new("/jobs", "ListJobs")];
        assert!(matches!(
            RouteTable::new(routes),
            Err(Error::MissingRootRoute)
        ));
    }
}
