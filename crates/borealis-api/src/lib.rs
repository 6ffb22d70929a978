//! borealis-api
//!
//! HTTP client for a running node's health endpoints. Unrelated to genesis
//! assembly — used by operational tooling to wait for nodes that loaded the
//! genesis to come up healthy.

use std::collections::BTreeMap;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Reply from the node's health API: one entry per registered check plus an
/// overall verdict.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthReply {
    #[serde(default)]
    pub checks: BTreeMap<String, serde_json::Value>,
    pub healthy: bool,
}

/// Client for the node health API.
///
/// Uses raw HTTP GET with serde_json rather than a full RPC client stack to
/// keep operational tooling lean.
pub struct HealthClient {
    base_url: String,
    client: reqwest::Client,
}

impl HealthClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    async fn get(&self, path: &str, tags: &[String]) -> anyhow::Result<HealthReply> {
        let url = format!("{}/{path}", self.base_url);
        let mut request = self.client.get(&url);
        if !tags.is_empty() {
            request = request.query(&[("tags", tags.join(","))]);
        }

        let resp = request
            .send()
            .await
            .with_context(|| format!("connecting to node at {url}"))?;

        // Health endpoints report failing checks with a non-2xx status but
        // still carry a parseable reply body.
        let reply: HealthReply = resp.json().await.context("parsing health response")?;
        Ok(reply)
    }

    /// Overall node health, optionally filtered by check tags.
    pub async fn health(&self, tags: &[String]) -> anyhow::Result<HealthReply> {
        self.get("ext/health", tags).await
    }

    /// Whether the node has finished bootstrapping.
    pub async fn readiness(&self, tags: &[String]) -> anyhow::Result<HealthReply> {
        self.get("ext/health/readiness", tags).await
    }

    /// Whether the node process is alive at all.
    pub async fn liveness(&self, tags: &[String]) -> anyhow::Result<HealthReply> {
        self.get("ext/health/liveness", tags).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_parses_with_and_without_checks() {
        let reply: HealthReply = serde_json::from_str(
            r#"{"checks":{"network":{"message":null,"error":"not connected"}},"healthy":false}"#,
        )
        .unwrap();
        assert!(!reply.healthy);
        assert_eq!(reply.checks.len(), 1);

        let reply: HealthReply = serde_json::from_str(r#"{"healthy":true}"#).unwrap();
        assert!(reply.healthy);
        assert!(reply.checks.is_empty());
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = HealthClient::new("http://127.0.0.1:9650/");
        assert_eq!(client.base_url, "http://127.0.0.1:9650");
    }
}
