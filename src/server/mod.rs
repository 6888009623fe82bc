//! HTTP server wiring: shared state and route registration

pub mod router;

pub use router::{AppState, build_router};
