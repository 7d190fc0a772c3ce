//! API Module
//!
//! HTTP handlers and routing for the fallback cache REST API.
//!
//! # Endpoints
//! - `PUT /entries` - Store or replace an entry
//! - `GET /entries` - List every stored entry
//! - `POST /match` - Resolve a query key to the most specific entry
//! - `POST /explain` - Show the probe sequence for a query key
//! - `GET /table` - Plain-text dump of the table
//! - `GET /stats` - Lookup statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
