//! Client-side API types and fetch helpers
//!
//! The wire types mirror the backend's JSON envelopes. Fetch helpers run
//! against the page origin in hydrate builds; SSR builds compile them to
//! inert defaults and the server supplies the initial markup.

use serde::{Deserialize, Serialize};

/// A monitor as returned by the collection endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monitor {
    pub id: u64,
    pub name: String,
    pub url: String,
    pub status: String,
    pub response_time: f64,
    #[serde(default)]
    pub uptime: Option<f64>,
}

/// Envelope for `GET /api/monitors`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorsResponse {
    pub success: bool,
    #[serde(default)]
    pub monitors: Vec<Monitor>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Envelope for mutation endpoints (delete, create, update)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AckResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Request body for create and update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorDraft {
    pub name: String,
    pub url: String,
}

/// A collection fetch already folded to its UI meaning: either the new
/// collection or a message for the page-level error card.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Success(Vec<Monitor>),
    Failure(String),
}

/// Fetch the monitor collection. Transport failures and `success: false`
/// envelopes both fold into `Failure` with a user-facing message.
pub async fn fetch_monitors() -> FetchOutcome {
    #[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
    {
        let resp: Result<MonitorsResponse, String> = get_json("/api/monitors").await;
        match resp {
            Ok(body) if body.success => FetchOutcome::Success(body.monitors),
            Ok(body) => FetchOutcome::Failure(
                body.message
                    .unwrap_or_else(|| "Unable to load monitors".to_string()),
            ),
            Err(e) => FetchOutcome::Failure(e),
        }
    }

    #[cfg(not(all(feature = "hydrate", target_arch = "wasm32")))]
    {
        FetchOutcome::Success(Vec::new())
    }
}

/// Delete a monitor by id. `Err` carries the message to surface to the
/// user; the caller decides how to present it.
pub async fn delete_monitor(id: u64) -> Result<(), String> {
    #[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
    {
        let url = api_url(&format!("/api/monitors/{}", id))?;
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(|e| format!("{}", e))?;
        let ack: AckResponse = resp.json().await.map_err(|e| format!("{}", e))?;
        ack_to_result(ack, "Unable to delete monitor")
    }

    #[cfg(not(all(feature = "hydrate", target_arch = "wasm32")))]
    {
        let _ = id;
        Ok(())
    }
}

/// Create a monitor from a draft
pub async fn create_monitor(draft: &MonitorDraft) -> Result<(), String> {
    #[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
    {
        let url = api_url("/api/monitors")?;
        let resp = gloo_net::http::Request::post(&url)
            .json(draft)
            .map_err(|e| format!("{}", e))?
            .send()
            .await
            .map_err(|e| format!("{}", e))?;
        let ack: AckResponse = resp.json().await.map_err(|e| format!("{}", e))?;
        ack_to_result(ack, "Unable to save monitor")
    }

    #[cfg(not(all(feature = "hydrate", target_arch = "wasm32")))]
    {
        let _ = draft;
        Ok(())
    }
}

/// Update an existing monitor from a draft
pub async fn update_monitor(id: u64, draft: &MonitorDraft) -> Result<(), String> {
    #[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
    {
        let url = api_url(&format!("/api/monitors/{}", id))?;
        let resp = gloo_net::http::Request::put(&url)
            .json(draft)
            .map_err(|e| format!("{}", e))?
            .send()
            .await
            .map_err(|e| format!("{}", e))?;
        let ack: AckResponse = resp.json().await.map_err(|e| format!("{}", e))?;
        ack_to_result(ack, "Unable to save monitor")
    }

    #[cfg(not(all(feature = "hydrate", target_arch = "wasm32")))]
    {
        let _ = (id, draft);
        Ok(())
    }
}

#[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
fn ack_to_result(ack: AckResponse, fallback: &str) -> Result<(), String> {
    if ack.success {
        Ok(())
    } else {
        Err(ack.message.unwrap_or_else(|| fallback.to_string()))
    }
}

#[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
async fn get_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, String> {
    let resp = gloo_net::http::Request::get(&api_url(path)?)
        .send()
        .await
        .map_err(|e| format!("{}", e))?;
    resp.json().await.map_err(|e| format!("{}", e))
}

#[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
fn api_url(path: &str) -> Result<String, String> {
    let window = web_sys::window().ok_or("no window")?;
    let origin = window.location().origin().map_err(|e| format!("{:?}", e))?;
    Ok(format!("{}{}", origin, path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_envelope_parses() {
        let json = r#"{
            "success": true,
            "monitors": [
                {"id": 1, "name": "A", "url": "http://a", "status": "up",
                 "response_time": 120, "uptime": 99.995}
            ]
        }"#;
        let resp: MonitorsResponse = serde_json::from_str(json).unwrap();
        assert!(resp.success);
        assert_eq!(resp.monitors.len(), 1);
        assert_eq!(resp.monitors[0].id, 1);
        assert_eq!(resp.monitors[0].name, "A");
        assert_eq!(resp.monitors[0].response_time, 120.0);
        assert_eq!(resp.monitors[0].uptime, Some(99.995));
        assert_eq!(resp.message, None);
    }

    #[test]
    fn failure_envelope_parses_without_monitors_key() {
        let json = r#"{"success": false, "message": "db down"}"#;
        let resp: MonitorsResponse = serde_json::from_str(json).unwrap();
        assert!(!resp.success);
        assert!(resp.monitors.is_empty());
        assert_eq!(resp.message.as_deref(), Some("db down"));
    }

    #[test]
    fn monitor_without_uptime_parses() {
        let json = r#"{"id": 2, "name": "B", "url": "http://b",
                       "status": "pending", "response_time": 0}"#;
        let monitor: Monitor = serde_json::from_str(json).unwrap();
        assert_eq!(monitor.uptime, None);
    }

    #[test]
    fn ack_envelope_parses() {
        let ok: AckResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(ok.success);
        assert_eq!(ok.message, None);

        let failed: AckResponse =
            serde_json::from_str(r#"{"success": false, "message": "not found"}"#).unwrap();
        assert!(!failed.success);
        assert_eq!(failed.message.as_deref(), Some("not found"));
    }

    #[test]
    fn draft_serializes_name_and_url_only() {
        let draft = MonitorDraft {
            name: "A".to_string(),
            url: "http://a".to_string(),
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json, serde_json::json!({"name": "A", "url": "http://a"}));
    }
}
