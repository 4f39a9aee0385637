//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Registration (at startup):
//!     Route::builder().pattern(..).handler(..).build()
//!     → RouterBuilder::add_route (append)
//!     → RouterBuilder::build (anchor if configured, sort once, freeze)
//!     → Router (immutable, shared via Arc)
//!
//! Incoming Request (path)
//!     → http/request.rs (percent-decode path)
//!     → router.rs (scan table in order)
//!     → matcher.rs (regex test, anchored or not)
//!     → params.rs (split path into positional segments)
//!     → handler.rs (application code)
//!     → Response, or 404 / 500
//! ```
//!
//! # Design Decisions
//! - Routes compiled at registration; bad patterns never reach serving
//! - Table sorted once at seal time, not per request
//! - First match wins
//! - Parameters are positional, not named

pub mod handler;
pub mod matcher;
pub mod params;
pub mod route;
pub mod router;

pub use handler::{Handler, HandlerResult};
pub use matcher::MatchMode;
pub use params::Params;
pub use route::{Route, RouteBuilder, RouteError};
pub use router::{RouteOrder, Router, RouterBuilder, RouterOptions};
