//! HTTP boundary for the crewdesk backend.
//!
//! Maps routes to project aggregate manager calls and serializes results
//! and errors to JSON. All identifier text crosses through the
//! `DocumentId` codec at this layer.

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod state;
