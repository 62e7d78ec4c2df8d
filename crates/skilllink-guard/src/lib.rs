//! Route authorization for SkillLink.
//!
//! Given the current user (or nobody) and a route's allowed roles, the
//! guard decides: render the page, or redirect. That's the whole job —
//! it never renders anything itself, and it holds no state of its own.
//!
//! The decision is a pure, synchronous, total function over state that
//! is already in memory. It runs on every protected navigation and is
//! never cached: the moment the session changes (say, a logout), the
//! next evaluation reflects it.
//!
//! - [`authorize`] — the decision function
//! - [`RouteTable`] — which paths are protected, and for whom
//! - [`dashboard_path`] — where each role lands after signing in

mod access;
mod routes;

pub use access::{Access, RedirectTarget, authorize};
pub use routes::{RouteTable, dashboard_path};
