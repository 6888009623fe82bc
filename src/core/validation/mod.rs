//! Request validation
//!
//! A declarative guard-chain layer: pure predicates over JSON values, the
//! chain engine that runs guards in order, and reusable guard builders that
//! resource modules compose ahead of their terminal handlers.

pub mod chain;
pub mod guards;
pub mod predicate;

pub use chain::{Chain, Guard, RequestContext};
