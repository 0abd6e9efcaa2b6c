//! View module.
//!
//! The polymorphic interface the router activates views through.

pub mod traits;

pub use traits::{Action, Event, View};
