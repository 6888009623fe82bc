//! Resource modules: one per entity type, each with its model and handlers

pub mod dish;
pub mod order;
