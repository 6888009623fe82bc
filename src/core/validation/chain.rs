//! Guard-chain execution
//!
//! A chain is an ordered list of guard steps run against one request
//! context. Each step either lets execution continue or terminates the
//! chain with an [`ApiError`]; [`Chain::run`] short-circuits on the first
//! error, so every chain execution has exactly one terminal outcome.

use crate::core::error::ApiError;
use serde_json::Value;

/// Per-request state threaded through a guard chain.
///
/// Holds the route id (when the operation addresses a single resource),
/// the request body, and a scratch slot that lookup guards fill with the
/// record they resolved so later steps and the terminal handler can use it.
pub struct RequestContext<R> {
    route_id: Option<String>,
    body: Value,
    found: Option<R>,
}

impl<R> RequestContext<R> {
    /// Context for a collection-level operation.
    pub fn new(body: Value) -> Self {
        Self {
            route_id: None,
            body,
            found: None,
        }
    }

    /// Context for an operation addressing `/{resource}/{id}`.
    pub fn for_route(route_id: impl Into<String>, body: Value) -> Self {
        Self {
            route_id: Some(route_id.into()),
            body,
            found: None,
        }
    }

    /// A field of the body's `data` envelope; `Null` when absent.
    pub fn field(&self, name: &str) -> &Value {
        self.body
            .get("data")
            .and_then(|data| data.get(name))
            .unwrap_or(&Value::Null)
    }

    /// The field as text; empty when absent or not a string.
    pub fn text(&self, name: &str) -> String {
        self.field(name).as_str().unwrap_or_default().to_string()
    }

    /// The field as a whole number; zero when absent or not numeric.
    pub fn integer(&self, name: &str) -> i64 {
        self.field(name).as_f64().unwrap_or_default() as i64
    }

    pub fn route_id(&self) -> Option<&str> {
        self.route_id.as_deref()
    }

    pub fn found(&self) -> Option<&R> {
        self.found.as_ref()
    }

    pub fn set_found(&mut self, record: R) {
        self.found = Some(record);
    }

    pub fn take_found(&mut self) -> Option<R> {
        self.found.take()
    }
}

/// A single guard step: pass (`Ok`) or terminate the chain (`Err`).
pub type Guard<R> = Box<dyn Fn(&mut RequestContext<R>) -> Result<(), ApiError> + Send + Sync>;

/// Ordered sequence of guards executed ahead of a terminal handler.
pub struct Chain<R> {
    steps: Vec<Guard<R>>,
}

impl<R> Chain<R> {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a guard; steps run in the order they were added.
    pub fn guard<F>(mut self, step: F) -> Self
    where
        F: Fn(&mut RequestContext<R>) -> Result<(), ApiError> + Send + Sync + 'static,
    {
        self.steps.push(Box::new(step));
        self
    }

    /// Append every step of `other`, preserving its order.
    pub fn extend(mut self, other: Chain<R>) -> Self {
        self.steps.extend(other.steps);
        self
    }

    /// Run every step in order, stopping at the first error.
    pub fn run(&self, ctx: &mut RequestContext<R>) -> Result<(), ApiError> {
        for step in &self.steps {
            step(ctx)?;
        }
        Ok(())
    }
}

impl<R> Default for Chain<R> {
    fn default() -> Self {
        Self::new()
    }
}
