pub mod address;
pub mod application;
pub mod config;
pub mod error;
pub mod history;
pub mod route;
pub mod router;
pub mod view;

pub use error::{Error, Result};

// Re-export common types for convenience
pub use address::AddressBar;
pub use application::{AppContext, Application, Context, EventContext};
pub use config::{HistoryMode, NotFoundPolicy, RouterConfig};
pub use history::NavigationState;
pub use route::{ROOT_PATH, Route, RouteTable};
pub use router::{Router, RouterBuilder};
pub use view::{Action, Event, View};
