//! Configuration values and constants.
//!
//! `ServerConfig` is built once at startup from command-line input and never
//! mutated afterward; handlers see it through an `Arc` in the shared state.

use crate::cli::Args;
use crate::metadata::ImdsClient;

// =============================================================================
// Defaults
// =============================================================================

/// Default bind address.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";

/// Default listen port.
pub const DEFAULT_PORT: u16 = 80;

/// Region used when the instance-metadata service cannot tell us ours.
pub const FALLBACK_REGION: &str = "us-east-2";

/// Default log filter when RUST_LOG is not set.
pub const DEFAULT_LOG_FILTER: &str = "vitals=debug";

// =============================================================================
// Health Page Strings
// =============================================================================

/// Title of the health page.
pub const HEALTH_PAGE_TITLE: &str = "healthcheck";

/// Heading of the metadata section, present whether or not metadata resolves.
pub const METADATA_HEADING: &str = "<br/><hr><h3>EC2 Metadata</h3>";

/// Text shown in place of the metadata when the service is unreachable.
pub const METADATA_UNAVAILABLE: &str = "Running outside AWS";

/// Cache-Control for the health page: probes must always see a fresh response.
pub const CACHE_CONTROL_HEALTH: &str = "no-store";

/// Immutable runtime configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    pub bind_address: String,
    /// Port the HTTP listener binds to (1-65535, enforced by the CLI).
    pub port: u16,
    /// AWS region this instance reports itself in.
    pub region: String,
}

impl ServerConfig {
    /// Builds the runtime configuration from parsed CLI arguments.
    ///
    /// When no region was given on the command line, asks the instance
    /// metadata service for it; off-cloud the query fails and the
    /// hard-coded fallback region is used instead.
    pub async fn from_args(args: &Args, imds: &ImdsClient) -> Self {
        let region = match &args.region {
            Some(region) => region.clone(),
            None => match imds.fetch_region().await {
                Ok(region) => {
                    tracing::debug!(%region, "Detected region from instance metadata");
                    region
                }
                Err(err) => {
                    tracing::debug!(error = %err, "Region detection failed, using fallback");
                    FALLBACK_REGION.to_string()
                }
            },
        };

        Self {
            bind_address: args.server_ip.clone(),
            port: args.server_port,
            region,
        }
    }
}
