//! Client for the EC2 instance-metadata service (IMDSv2).
//!
//! Fetches the identity fields shown on the health page. Requests are
//! session-oriented: a token is obtained first and sent with every query in
//! the `X-aws-ec2-metadata-token` header. The snapshot is all-or-nothing --
//! if any underlying call fails, the whole fetch reports unavailability and
//! the caller renders the fallback text instead of a partial listing.

use std::time::Duration;

use serde::Deserialize;

/// Where the instance-metadata service lives on EC2.
const BASE_URI: &str = "http://169.254.169.254";

/// Environment variable overriding the metadata base URI (lab mocks).
const BASE_URI_ENV: &str = "IMDS_BASE_URI";

/// IMDSv2 session token endpoint.
const TOKEN_TARGET: &str = "latest/api/token";

/// Requested session token lifetime in seconds.
const TOKEN_TTL_SECS: &str = "60";

/// Upper bound on any single metadata request, so an unreachable service
/// cannot hang a request handler.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    #[error("Metadata request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Metadata service returned {status} for {target}")]
    UnexpectedStatus {
        target: String,
        status: reqwest::StatusCode,
    },
}

/// Host identity fields reported on the health page.
///
/// Built fresh for every request that needs it and discarded after the
/// response is rendered; never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataSnapshot {
    pub account_id: String,
    pub ami_id: String,
    pub availability_zone: String,
    pub instance_id: String,
    pub instance_type: String,
    pub private_hostname: String,
    pub private_ipv4: String,
}

impl MetadataSnapshot {
    /// Renders the snapshot as `label: value` lines joined by `<br>`, in
    /// fixed field order.
    pub fn to_html(&self) -> String {
        [
            format!("account_id: {}", self.account_id),
            format!("ami_id: {}", self.ami_id),
            format!("availability_zone: {}", self.availability_zone),
            format!("instance_id: {}", self.instance_id),
            format!("instance_type: {}", self.instance_type),
            format!("private_hostname: {}", self.private_hostname),
            format!("private_ipv4: {}", self.private_ipv4),
        ]
        .join("<br>")
    }
}

/// Subset of the instance-identity document this service reads.
#[derive(Debug, Deserialize)]
struct IdentityDocument {
    #[serde(rename = "accountId")]
    account_id: String,
    region: String,
}

/// IMDSv2 client with an overridable base URI.
#[derive(Debug, Clone)]
pub struct ImdsClient {
    client: reqwest::Client,
    base_uri: String,
}

impl ImdsClient {
    /// Client against the well-known EC2 metadata address.
    pub fn new() -> Self {
        Self::with_base_uri(BASE_URI.to_string())
    }

    /// Client against an explicit base URI (tests and lab mocks).
    pub fn with_base_uri(base_uri: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_uri,
        }
    }

    /// Client honoring the `IMDS_BASE_URI` environment override.
    pub fn from_env() -> Self {
        match std::env::var(BASE_URI_ENV) {
            Ok(uri) if !uri.is_empty() => Self::with_base_uri(uri),
            _ => Self::new(),
        }
    }

    /// Fetches every health-page field, all-or-nothing.
    ///
    /// The account id comes from the instance-identity document; the rest
    /// are plain-text `meta-data` targets. The first failure aborts the
    /// whole fetch with no retry and no partial result.
    pub async fn fetch_snapshot(&self) -> Result<MetadataSnapshot, MetadataError> {
        let token = self.fetch_token().await?;
        let identity = self.fetch_identity_document(&token).await?;

        Ok(MetadataSnapshot {
            account_id: identity.account_id,
            ami_id: self.fetch_string(&token, "meta-data/ami-id").await?,
            availability_zone: self
                .fetch_string(&token, "meta-data/placement/availability-zone")
                .await?,
            instance_id: self.fetch_string(&token, "meta-data/instance-id").await?,
            instance_type: self.fetch_string(&token, "meta-data/instance-type").await?,
            private_hostname: self.fetch_string(&token, "meta-data/local-hostname").await?,
            private_ipv4: self.fetch_string(&token, "meta-data/local-ipv4").await?,
        })
    }

    /// Region according to the instance-identity document.
    pub async fn fetch_region(&self) -> Result<String, MetadataError> {
        let token = self.fetch_token().await?;
        Ok(self.fetch_identity_document(&token).await?.region)
    }

    /// Obtains an IMDSv2 session token.
    async fn fetch_token(&self) -> Result<String, MetadataError> {
        let uri = format!("{}/{}", self.base_uri, TOKEN_TARGET);
        let response = self
            .client
            .put(&uri)
            .header("X-aws-ec2-metadata-token-ttl-seconds", TOKEN_TTL_SECS)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        if response.status() != reqwest::StatusCode::OK {
            return Err(MetadataError::UnexpectedStatus {
                target: TOKEN_TARGET.to_string(),
                status: response.status(),
            });
        }

        Ok(response.text().await?)
    }

    /// Fetches a plain-text metadata target under `latest/`.
    async fn fetch_string(&self, token: &str, target: &str) -> Result<String, MetadataError> {
        let uri = format!("{}/latest/{}", self.base_uri, target);
        tracing::debug!(%uri, "Requesting instance metadata");
        let response = self
            .client
            .get(&uri)
            .header("X-aws-ec2-metadata-token", token)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        if response.status() != reqwest::StatusCode::OK {
            return Err(MetadataError::UnexpectedStatus {
                target: target.to_string(),
                status: response.status(),
            });
        }

        Ok(response.text().await?)
    }

    /// Fetches and decodes the instance-identity document.
    async fn fetch_identity_document(&self, token: &str) -> Result<IdentityDocument, MetadataError> {
        let target = "dynamic/instance-identity/document";
        let uri = format!("{}/latest/{}", self.base_uri, target);
        tracing::debug!(%uri, "Requesting instance-identity document");
        let response = self
            .client
            .get(&uri)
            .header("X-aws-ec2-metadata-token", token)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        if response.status() != reqwest::StatusCode::OK {
            return Err(MetadataError::UnexpectedStatus {
                target: target.to_string(),
                status: response.status(),
            });
        }

        Ok(response.json().await?)
    }
}

impl Default for ImdsClient {
    fn default() -> Self {
        Self::new()
    }
}
