//! Wire types for the Solana Actions protocol.
//!
//! These mirror the JSON shapes consumed by Actions-aware clients
//! (`ActionGetResponse` / `ActionPostResponse` in `@solana/actions`), so
//! field names serialize as camelCase.

use serde::{Deserialize, Serialize};

/// Metadata describing a blink, returned from GET.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionGetResponse {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub label: String,
    pub links: ActionLinks,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionLinks {
    pub actions: Vec<LinkedAction>,
}

/// One selectable action (a button, or a form when `parameters` is set).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedAction {
    pub href: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<ActionParameter>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionParameter {
    pub name: String,
    pub label: String,
}

/// POST request body: the buyer's wallet address, base58.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionPostRequest {
    pub account: String,
}

/// POST response: base64-encoded unsigned transaction plus a display message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionPostResponse {
    pub transaction: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_action_omits_parameters() {
        let action = LinkedAction {
            href: "/api/actions/tokens/abc?amount=100000".to_string(),
            label: "Buy 100k Pump Tokens".to_string(),
            parameters: None,
        };
        let json = serde_json::to_value(&action).unwrap();
        assert!(json.get("parameters").is_none());
        assert_eq!(json["href"], "/api/actions/tokens/abc?amount=100000");
    }

    #[test]
    fn test_custom_action_serializes_parameters() {
        let action = LinkedAction {
            href: "/api/actions/tokens/abc?amount={amount}".to_string(),
            label: "Custom amount".to_string(),
            parameters: Some(vec![ActionParameter {
                name: "amount".to_string(),
                label: "Enter amount".to_string(),
            }]),
        };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["parameters"][0]["name"], "amount");
    }

    #[test]
    fn test_post_request_roundtrip() {
        let body: ActionPostRequest =
            serde_json::from_str(r#"{"account":"DgT9qyYwYKBRDyDw3EfR12LHQCQjtNrKu2qMsXHuosmB"}"#)
                .unwrap();
        assert_eq!(body.account, "DgT9qyYwYKBRDyDw3EfR12LHQCQjtNrKu2qMsXHuosmB");
    }
}
