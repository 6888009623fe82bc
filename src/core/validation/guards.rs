//! Reusable guard builders
//!
//! Each builder returns a closure with the common guard signature; resource
//! modules assemble them into chains alongside their own domain guards.

use super::chain::RequestContext;
use super::predicate::is_provided;
use crate::core::error::ApiError;
use crate::core::store::ResourceStore;
use serde_json::Value;

/// Guard: a body field passes [`is_provided`], else a 400 with `message`.
pub fn provided<R>(
    field: &'static str,
    message: &'static str,
) -> impl Fn(&mut RequestContext<R>) -> Result<(), ApiError> {
    move |ctx| {
        if is_provided(ctx.field(field)) {
            Ok(())
        } else {
            Err(ApiError::validation(message))
        }
    }
}

/// Guard: a body field is present at all (non-null), else a 400 with
/// `message`.
///
/// Unlike [`provided`], zero and empty placeholder values count as
/// present; numeric fields use this so a zero reaches the range check
/// that owns the precise message.
pub fn present<R>(
    field: &'static str,
    message: &'static str,
) -> impl Fn(&mut RequestContext<R>) -> Result<(), ApiError> {
    move |ctx| {
        if ctx.field(field).is_null() {
            Err(ApiError::validation(message))
        } else {
            Ok(())
        }
    }
}

/// Guard: the route id resolves in `store`.
///
/// On success the record lands in the context's scratch slot; otherwise the
/// chain terminates with a 404 naming the resource and the id.
pub fn found_in<R: Clone>(
    store: ResourceStore<R>,
    resource: &'static str,
) -> impl Fn(&mut RequestContext<R>) -> Result<(), ApiError> {
    move |ctx| {
        let id = ctx.route_id().unwrap_or_default().to_string();
        match store.get(&id) {
            Some(record) => {
                ctx.set_found(record);
                Ok(())
            }
            None => Err(ApiError::not_found(resource, id)),
        }
    }
}

/// Guard: a body `id`, when provided, must equal the route id.
///
/// Ids the request left out (or sent as an empty/zero placeholder) defer to
/// the route id; anything else must match it exactly.
pub fn body_id_matches<R>(
    resource: &'static str,
) -> impl Fn(&mut RequestContext<R>) -> Result<(), ApiError> {
    move |ctx| {
        let body_id = ctx.field("id");
        if !is_provided(body_id) {
            return Ok(());
        }
        let route_id = ctx.route_id().unwrap_or_default();
        if body_id.as_str() == Some(route_id) {
            Ok(())
        } else {
            Err(ApiError::validation(format!(
                "{resource} id does not match route id. {resource}: {}, Route: {route_id}",
                display_value(body_id)
            )))
        }
    }
}

/// Render a JSON scalar the way it reads in a payload: strings without
/// quotes, everything else via its JSON form.
fn display_value(value: &Value) -> String {
    match value.as_str() {
        Some(s) => s.to_string(),
        None => value.to_string(),
    }
}
