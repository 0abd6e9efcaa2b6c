use snafu::prelude::*;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("No route matches path '{path}'"))]
    RouteNotFound { path: String },

    #[snafu(display("Duplicate route path '{path}'"))]
    DuplicateRoutePath { path: String },

    #[snafu(display("Duplicate route name '{name}'"))]
    DuplicateRouteName { name: String },

    #[snafu(display("Route table is empty"))]
    EmptyRouteTable,

    #[snafu(display("Route table has no route for the root path '/'"))]
    MissingRootRoute,

    #[snafu(display("Not-found fallback '{name}' is not a configured route"))]
    UnknownFallback { name: String },
}

pub type Result<T> = std::result::Result<T, Error>;
