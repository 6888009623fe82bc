//! Dish resource: model and HTTP handlers

pub mod handlers;
pub mod model;

pub use model::Dish;
