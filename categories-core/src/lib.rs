//! Read-only HTTP directory of product categories.
//!
//! The category list is compiled in and never changes; [`server::build_router`]
//! exposes it over JSON endpoints.

pub mod data;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod server;
