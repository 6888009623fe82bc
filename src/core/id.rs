//! Unique id supply
//!
//! Stores key records by opaque string ids. Handlers never mint ids
//! themselves; they ask the supplier injected through `AppState`, which
//! keeps id generation swappable (deterministic ids in tests, UUIDs in
//! production).

use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Supplies one unique identifier per call for the process lifetime.
pub trait IdSupplier: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random v4 UUID ids
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdSupplier;

impl IdSupplier for UuidIdSupplier {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Monotonic counter ids ("1", "2", ...) for tests and demos
#[derive(Debug, Default)]
pub struct SequentialIdSupplier {
    next: AtomicU64,
}

impl IdSupplier for SequentialIdSupplier {
    fn next_id(&self) -> String {
        (self.next.fetch_add(1, Ordering::Relaxed) + 1).to_string()
    }
}
