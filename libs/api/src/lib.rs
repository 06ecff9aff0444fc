//! HTTP plumbing for the posts API test suite.
//!
//! Request builders, a thin client wrapper, and per-verb service wrappers
//! that assert the status codes the API defines for each
//! operation. Nothing here retries, paginates, or authenticates; every
//! operation is a single HTTP call.

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod routes;
pub mod services;
pub mod shape;

pub use client::HttpClient;
pub use config::{Config, Environment};
pub use error::ApiError;
pub use model::{Post, PostCreatePayload, PostFullUpdatePayload, PostUpdatePayload};
pub use services::{
    CreateService, DeleteOutcome, DeleteService, ReadService, ServiceReply, UpdateService,
};

/// Re-export for status assertions in tests.
pub use reqwest::StatusCode;
