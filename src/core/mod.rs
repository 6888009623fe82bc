//! Core module: errors, id supply, resource stores, and the validation engine

pub mod error;
pub mod id;
pub mod store;
pub mod validation;

pub use error::{ApiError, ApiResult};
pub use id::{IdSupplier, SequentialIdSupplier, UuidIdSupplier};
pub use store::{Removal, ResourceStore};
pub use validation::chain::{Chain, RequestContext};
