//! Request and Response models for the fallback cache API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{PutRequest, QueryRequest};
pub use responses::{
    EntryView, ErrorResponse, ExplainResponse, HealthResponse, MatchResponse, ProbeView,
    PutResponse, StatsResponse,
};
