//! Request and Response models for the item pool API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{KeysRequest, SaveItemRequest};
pub use responses::{
    ClearResponse, CommitResponse, DeleteResponse, ErrorResponse, ExistsResponse, HealthResponse,
    ItemResponse, ItemsResponse, SaveResponse,
};
