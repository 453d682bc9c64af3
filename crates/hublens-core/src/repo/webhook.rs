//! Repository webhook types from the REST hooks endpoint.

use serde::{Deserialize, Serialize};

use super::de;

/// A repository webhook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Webhook {
    #[serde(deserialize_with = "de::lenient_u64")]
    pub id: u64,
    pub name: String,
    pub active: bool,
    #[serde(rename = "type")]
    pub kind: String,
    pub events: Vec<String>,
    pub config: WebhookConfig,
    pub updated_at: String,
    pub created_at: String,
    pub url: String,
    pub test_url: String,
    pub ping_url: String,
    #[serde(default)]
    pub deliveries_url: Option<String>,
    pub last_response: WebhookLastResponse,
}

/// Delivery configuration of a webhook.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WebhookConfig {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub secret: Option<String>,
    #[serde(default)]
    pub insecure_ssl: Option<String>,
}

/// Outcome of the most recent webhook delivery.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WebhookLastResponse {
    #[serde(default, deserialize_with = "de::lenient_opt_i64")]
    pub code: Option<i64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode;
    use serde_json::json;

    fn raw_webhook() -> serde_json::Value {
        json!({
            "id": 42,
            "name": "web",
            "active": true,
            "type": "Repository",
            "events": ["push", "pull_request"],
            "config": {
                "url": "https://example.com/hook",
                "content_type": "json",
                "insecure_ssl": "0"
            },
            "updated_at": "2024-01-02T00:00:00Z",
            "created_at": "2024-01-01T00:00:00Z",
            "url": "https://api.github.com/repos/octocat/repo/hooks/42",
            "test_url": "https://api.github.com/repos/octocat/repo/hooks/42/test",
            "ping_url": "https://api.github.com/repos/octocat/repo/hooks/42/pings",
            "deliveries_url": null,
            "last_response": { "code": null, "status": "unused", "message": null },
            "some_future_field": { "ignored": true }
        })
    }

    #[test]
    fn decodes_and_drops_unknown_fields() {
        let webhook: Webhook = decode(raw_webhook()).unwrap();
        assert_eq!(webhook.id, 42);
        assert_eq!(webhook.kind, "Repository");
        assert_eq!(webhook.config.content_type.as_deref(), Some("json"));
        assert!(webhook.config.secret.is_none());
        assert!(webhook.deliveries_url.is_none());
        assert_eq!(webhook.last_response.status.as_deref(), Some("unused"));
    }

    #[test]
    fn coerces_numeric_strings() {
        let mut raw = raw_webhook();
        raw["id"] = json!("42");
        raw["last_response"]["code"] = json!("200");

        let webhook: Webhook = decode(raw).unwrap();
        assert_eq!(webhook.id, 42);
        assert_eq!(webhook.last_response.code, Some(200));
    }

    #[test]
    fn decoding_is_idempotent() {
        let first: Webhook = decode(raw_webhook()).unwrap();
        let second: Webhook = decode(raw_webhook()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn rejects_malformed_webhooks() {
        let mut raw = raw_webhook();
        raw.as_object_mut().unwrap().remove("name");

        let err = decode::<Webhook>(raw).unwrap_err();
        assert!(err.to_string().contains("name"), "{err}");
    }
}
