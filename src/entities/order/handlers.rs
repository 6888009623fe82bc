//! Order HTTP handlers
//!
//! The update chain ends in the status transition guard: the requested
//! status must name one of the four states, and a delivered order accepts
//! no update at all. Deletion is gated on the stored status being
//! `pending`, checked and committed under one store lock acquisition.

use super::model::{Order, OrderLine, OrderStatus};
use crate::core::error::ApiError;
use crate::core::store::Removal;
use crate::core::validation::chain::{Chain, RequestContext};
use crate::core::validation::guards::{body_id_matches, found_in, provided};
use crate::core::validation::predicate::{is_non_empty_sequence, is_positive_integer, is_provided};
use crate::server::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::{Value, json};

const RESOURCE: &str = "Order";

const STATUS_MESSAGE: &str =
    "Order must have a status of pending, preparing, out-for-delivery, delivered";

fn dishes_not_empty(ctx: &mut RequestContext<Order>) -> Result<(), ApiError> {
    if is_non_empty_sequence(ctx.field("dishes")) {
        Ok(())
    } else {
        Err(ApiError::validation("Order must include at least one dish"))
    }
}

/// Every entry must carry a positive-integer quantity; the first offender
/// terminates the chain with its index in the message.
fn quantities_valid(ctx: &mut RequestContext<Order>) -> Result<(), ApiError> {
    let entries = ctx.field("dishes").as_array().cloned().unwrap_or_default();
    for (index, entry) in entries.iter().enumerate() {
        let quantity = entry.get("quantity").unwrap_or(&Value::Null);
        if !is_positive_integer(quantity) {
            return Err(ApiError::validation(format!(
                "Dish {index} must have a quantity that is an integer greater than 0"
            )));
        }
    }
    Ok(())
}

/// Create-side status check: status may be absent, but a present value
/// must name one of the four states.
fn status_well_formed(ctx: &mut RequestContext<Order>) -> Result<(), ApiError> {
    let status = ctx.field("status");
    if is_provided(status) && OrderStatus::parse(status).is_none() {
        return Err(ApiError::validation(STATUS_MESSAGE));
    }
    Ok(())
}

/// Update-side status check: the requested status must be one of the four
/// states, and a delivered order is immutable.
fn status_transition(ctx: &mut RequestContext<Order>) -> Result<(), ApiError> {
    if OrderStatus::parse(ctx.field("status")).is_none() {
        return Err(ApiError::validation(STATUS_MESSAGE));
    }
    let stored = ctx.found().and_then(|order| order.status);
    if stored.is_some_and(OrderStatus::is_terminal) {
        return Err(ApiError::state_conflict("A delivered order cannot be changed"));
    }
    Ok(())
}

/// Field checks shared by create and update.
fn field_checks() -> Chain<Order> {
    Chain::new()
        .guard(provided("deliverTo", "Order must include a deliverTo"))
        .guard(provided("mobileNumber", "Order must include a mobileNumber"))
        .guard(provided("dishes", "Order must include a dish"))
        .guard(dishes_not_empty)
        .guard(quantities_valid)
}

fn create_chain() -> Chain<Order> {
    field_checks().guard(status_well_formed)
}

fn update_chain(state: &AppState) -> Chain<Order> {
    Chain::new()
        .guard(found_in(state.orders.clone(), RESOURCE))
        .extend(field_checks())
        .guard(body_id_matches(RESOURCE))
        .guard(status_transition)
}

/// Build the order lines from a validated payload.
fn order_lines(ctx: &RequestContext<Order>) -> Vec<OrderLine> {
    ctx.field("dishes")
        .as_array()
        .map(|entries| {
            entries
                .iter()
                .map(|entry| OrderLine {
                    dish_id: entry.get("dishId").cloned().unwrap_or(Value::Null),
                    quantity: entry
                        .get("quantity")
                        .and_then(Value::as_f64)
                        .unwrap_or_default() as u64,
                })
                .collect()
        })
        .unwrap_or_default()
}

pub async fn list_orders(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "data": state.orders.list() }))
}

pub async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let mut ctx = RequestContext::new(payload);
    create_chain().run(&mut ctx)?;

    let order = Order {
        id: state.ids.next_id(),
        deliver_to: ctx.text("deliverTo"),
        mobile_number: ctx.text("mobileNumber"),
        status: OrderStatus::parse(ctx.field("status")),
        dishes: order_lines(&ctx),
    };
    state.orders.add(order.id.clone(), order.clone());
    tracing::debug!(id = %order.id, "order created");

    Ok((StatusCode::CREATED, Json(json!({ "data": order }))))
}

pub async fn read_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let mut ctx = RequestContext::for_route(order_id.clone(), Value::Null);
    Chain::new()
        .guard(found_in(state.orders.clone(), RESOURCE))
        .run(&mut ctx)?;

    let order = ctx
        .take_found()
        .ok_or_else(|| ApiError::not_found(RESOURCE, order_id))?;
    Ok(Json(json!({ "data": order })))
}

pub async fn update_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let mut ctx = RequestContext::for_route(order_id.clone(), payload);
    update_chain(&state).run(&mut ctx)?;

    let deliver_to = ctx.text("deliverTo");
    let mobile_number = ctx.text("mobileNumber");
    let status = OrderStatus::parse(ctx.field("status"));
    let dishes = order_lines(&ctx);

    let updated = state
        .orders
        .update_with(&order_id, |order| {
            order.deliver_to = deliver_to;
            order.mobile_number = mobile_number;
            order.status = status;
            order.dishes = dishes;
        })
        .ok_or_else(|| ApiError::not_found(RESOURCE, order_id))?;
    tracing::debug!(id = %updated.id, status = ?updated.status, "order updated");

    Ok(Json(json!({ "data": updated })))
}

pub async fn delete_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let mut ctx = RequestContext::for_route(order_id.clone(), Value::Null);
    Chain::new()
        .guard(found_in(state.orders.clone(), RESOURCE))
        .run(&mut ctx)?;

    match state
        .orders
        .delete_if(&order_id, |order| {
            order.status.is_some_and(OrderStatus::is_deletable)
        }) {
        Removal::Removed(order) => {
            tracing::debug!(id = %order.id, "order deleted");
            Ok(StatusCode::NO_CONTENT)
        }
        Removal::Refused => Err(ApiError::state_conflict(
            "An order cannot be deleted unless it is pending",
        )),
        Removal::Missing => Err(ApiError::not_found(RESOURCE, order_id)),
    }
}
