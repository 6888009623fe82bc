//! Dish HTTP handlers
//!
//! Each mutating route runs its guard chain first; only when every guard
//! passes does the terminal handler touch the store. Dishes have no delete
//! route.

use super::model::Dish;
use crate::core::error::ApiError;
use crate::core::validation::chain::{Chain, RequestContext};
use crate::core::validation::guards::{body_id_matches, found_in, present, provided};
use crate::core::validation::predicate::is_positive_integer;
use crate::server::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::{Value, json};

const RESOURCE: &str = "Dish";

fn price_is_positive_integer(ctx: &mut RequestContext<Dish>) -> Result<(), ApiError> {
    if is_positive_integer(ctx.field("price")) {
        Ok(())
    } else {
        Err(ApiError::validation(
            "Dish must have a price that is an integer greater than 0",
        ))
    }
}

/// Field checks shared by create and update.
fn field_checks() -> Chain<Dish> {
    Chain::new()
        .guard(provided("name", "Dish must include a name"))
        .guard(provided("description", "Dish must include a description"))
        .guard(present("price", "Dish must include a price"))
        .guard(provided("image_url", "Dish must include a image_url"))
        .guard(price_is_positive_integer)
}

fn create_chain() -> Chain<Dish> {
    field_checks()
}

fn update_chain(state: &AppState) -> Chain<Dish> {
    Chain::new()
        .guard(found_in(state.dishes.clone(), RESOURCE))
        .extend(field_checks())
        .guard(body_id_matches(RESOURCE))
}

pub async fn list_dishes(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "data": state.dishes.list() }))
}

pub async fn create_dish(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let mut ctx = RequestContext::new(payload);
    create_chain().run(&mut ctx)?;

    let dish = Dish {
        id: state.ids.next_id(),
        name: ctx.text("name"),
        description: ctx.text("description"),
        price: ctx.integer("price"),
        image_url: ctx.text("image_url"),
    };
    state.dishes.add(dish.id.clone(), dish.clone());
    tracing::debug!(id = %dish.id, "dish created");

    Ok((StatusCode::CREATED, Json(json!({ "data": dish }))))
}

pub async fn read_dish(
    State(state): State<AppState>,
    Path(dish_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let mut ctx = RequestContext::for_route(dish_id.clone(), Value::Null);
    Chain::new()
        .guard(found_in(state.dishes.clone(), RESOURCE))
        .run(&mut ctx)?;

    let dish = ctx
        .take_found()
        .ok_or_else(|| ApiError::not_found(RESOURCE, dish_id))?;
    Ok(Json(json!({ "data": dish })))
}

pub async fn update_dish(
    State(state): State<AppState>,
    Path(dish_id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let mut ctx = RequestContext::for_route(dish_id.clone(), payload);
    update_chain(&state).run(&mut ctx)?;

    let name = ctx.text("name");
    let description = ctx.text("description");
    let price = ctx.integer("price");
    let image_url = ctx.text("image_url");

    let updated = state
        .dishes
        .update_with(&dish_id, |dish| {
            dish.name = name;
            dish.description = description;
            dish.price = price;
            dish.image_url = image_url;
        })
        .ok_or_else(|| ApiError::not_found(RESOURCE, dish_id))?;
    tracing::debug!(id = %updated.id, "dish updated");

    Ok(Json(json!({ "data": updated })))
}
