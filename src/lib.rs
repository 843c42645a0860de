//! Vitals: an HTTP health-check endpoint that reports EC2 instance metadata.
//!
//! Serves a single HTML page at `/` confirming the instance is alive, along
//! with a best-effort dump of the host's identity from the EC2 instance
//! metadata service. Off-cloud the metadata section degrades to a fixed
//! marker instead of failing the request.

pub mod cli;
pub mod config;
pub mod error;
pub mod metadata;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod templates;
