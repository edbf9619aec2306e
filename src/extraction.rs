//! Recovery of the listing id from a creation response.
//!
//! The creation endpoint answers either with a human readable message that
//! embeds the id (`{"status": "Saved listing - <uuid>"}`) or with the id in a
//! dedicated field (`{"id": "<value>"}`). Both shapes have been observed in
//! production, so both are checked, in that order.
use crate::api_client::ApiResponse;
use crate::domain::ItemId;
use crate::telemetry::error_chain_fmt;
use regex::Regex;
use reqwest::StatusCode;
use std::sync::LazyLock;

static EMBEDDED_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-f0-9-]{36}").expect("a valid regex"));

/// Where in the creation body the id was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdSource {
    StatusMessage,
    IdField,
}

#[derive(thiserror::Error)]
pub enum ExtractionError {
    #[error("The creation response body is not valid JSON")]
    InvalidJson(#[from] serde_json::Error),
}

impl std::fmt::Debug for ExtractionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Id of the listing created by `response`, or `None` when the creation
/// failed or the body carries no recognisable id.
pub fn extract_item_id(response: &ApiResponse) -> Result<Option<ItemId>, ExtractionError> {
    Ok(locate_item_id(response)?.map(|(id, _)| id))
}

/// Like [`extract_item_id`], also reporting which body shape held the id.
#[tracing::instrument(name = "Extracting item id", skip(response), fields(status = response.status().as_u16()))]
pub fn locate_item_id(
    response: &ApiResponse,
) -> Result<Option<(ItemId, IdSource)>, ExtractionError> {
    // Exactly 200: other 2xx codes are not a successful creation
    if response.status() != StatusCode::OK {
        return Ok(None);
    }
    let body: serde_json::Value = response.json()?;

    if let Some(id) = id_from_status_message(&body) {
        tracing::debug!(item_id = %id, "Found id in the status message");
        return Ok(Some((id, IdSource::StatusMessage)));
    }
    if let Some(id) = id_from_id_field(&body) {
        tracing::debug!(item_id = %id, "Found id in the id field");
        return Ok(Some((id, IdSource::IdField)));
    }
    tracing::warn!("Creation response carries no item id: {}", body);
    Ok(None)
}

fn id_from_status_message(body: &serde_json::Value) -> Option<ItemId> {
    let message = body.get("status")?.as_str()?;
    EMBEDDED_ID.find(message).map(|m| ItemId::new(m.as_str()))
}

fn id_from_id_field(body: &serde_json::Value) -> Option<ItemId> {
    match body.get("id")? {
        serde_json::Value::String(id) => Some(ItemId::new(id.as_str())),
        serde_json::Value::Number(id) => Some(ItemId::new(id.to_string())),
        _ => None,
    }
}
