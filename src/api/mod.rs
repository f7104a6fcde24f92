//! API Module
//!
//! HTTP handlers and routing exposing the item pool as a REST API.
//!
//! # Endpoints
//! - `PUT /items` - Save or stage an item
//! - `GET /items/:key` - Fetch an item
//! - `DELETE /items/:key` - Delete an item
//! - `GET /items/:key/exists` - Check an item exists
//! - `POST /items/lookup` - Fetch several items
//! - `POST /items/delete` - Delete several items
//! - `POST /commit` - Flush staged items
//! - `POST /clear` - Purge every pool item
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
