//! # Platter
//!
//! A dish-and-order delivery API built around a composable guard-chain
//! validation core.
//!
//! Every mutating route declares an ordered chain of guard steps. A step
//! either lets the request continue or terminates the chain with a
//! structured error; only when the whole chain passes does the terminal
//! handler touch the in-memory store. The order lifecycle is a four-state
//! machine (`pending`, `preparing`, `out-for-delivery`, `delivered`) with
//! `delivered` as a terminal sink: a delivered order accepts no further
//! update, and only a pending order may be deleted.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use platter::prelude::*;
//!
//! let app = build_router(AppState::new());
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:5000").await?;
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod server;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        error::{ApiError, ApiResult},
        id::{IdSupplier, SequentialIdSupplier, UuidIdSupplier},
        store::{Removal, ResourceStore},
        validation::chain::{Chain, RequestContext},
    };

    // === Entities ===
    pub use crate::entities::dish::Dish;
    pub use crate::entities::order::{Order, OrderLine, OrderStatus};

    // === Config ===
    pub use crate::config::ServerConfig;

    // === Server ===
    pub use crate::server::{AppState, build_router};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use serde::{Deserialize, Serialize};
    pub use serde_json::{Value, json};
}
