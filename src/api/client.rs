//! Fetch client for the content-listing endpoint.

use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

use crate::api::types::RawItem;
use crate::error::{GaleriaError, Result};
use crate::gallery::record::{normalize_item, Record};

pub const DEFAULT_ENDPOINT: &str =
    "https://corrupcionaldia.com/wp-json/wp/v2/galeria-de-corruptos";
pub const DEFAULT_PER_PAGE: u32 = 100;

/// Thin wrapper over a shared reqwest client, bound to one endpoint.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    endpoint: Url,
    per_page: u32,
}

impl ApiClient {
    pub fn new(endpoint: &str, per_page: u32) -> Result<Self> {
        Ok(Self {
            http: Client::new(),
            endpoint: Url::parse(endpoint)?,
            per_page,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// GET the listing and normalize every item.
    ///
    /// Transport failures, non-success statuses, and a non-array body all
    /// surface as a single error; per-item gaps never fail the fetch.
    pub async fn fetch_records(&self) -> Result<Vec<Record>> {
        debug!(endpoint = %self.endpoint, per_page = self.per_page, "fetching gallery listing");

        let response = self
            .http
            .get(self.endpoint.clone())
            .query(&[("_fields", "acf,id,title")])
            .query(&[("per_page", self.per_page)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "gallery endpoint returned non-success status");
            return Err(GaleriaError::Status(status));
        }

        let body: serde_json::Value = response.json().await?;
        let records = parse_listing(&body)?;
        debug!(count = records.len(), "gallery fetch complete");
        Ok(records)
    }
}

/// Turn a listing body into normalized records. The body must be a JSON
/// array; anything else is a malformed response. Entries that are null or not
/// mappings count as absent items and are discarded.
pub fn parse_listing(body: &serde_json::Value) -> Result<Vec<Record>> {
    let items = body
        .as_array()
        .ok_or_else(|| GaleriaError::Shape("expected a JSON array of items".to_string()))?;

    Ok(items
        .iter()
        .enumerate()
        .filter_map(|(position, value)| {
            let raw: Option<RawItem> = serde_json::from_value(value.clone()).ok();
            normalize_item(position, raw.as_ref())
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn non_array_body_is_a_shape_error() {
        let body = json!({"code": "rest_no_route"});
        match parse_listing(&body) {
            Err(GaleriaError::Shape(_)) => {}
            other => panic!("expected shape error, got {other:?}"),
        }
    }

    #[test]
    fn null_entries_are_discarded() {
        let body = json!([null, {"id": 1, "acf": {"nombre": "Ana"}}, null]);
        let records = parse_listing(&body).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Ana");
    }

    #[test]
    fn empty_array_yields_empty_set() {
        assert!(parse_listing(&json!([])).unwrap().is_empty());
    }
}
