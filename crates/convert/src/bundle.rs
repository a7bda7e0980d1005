//! FHIR Bundle assembly.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// FHIR Bundle types
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum BundleType {
    Searchset,
    History,
    Collection,
    Document,
    Message,
    Transaction,
    TransactionResponse,
    Batch,
    BatchResponse,
}

/// FHIR Bundle resource wrapping a list of already-mapped resources.
///
/// `total` always equals `entry.len()`; both fields serialize even when the
/// bundle is empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    pub resource_type: String,

    #[serde(rename = "type")]
    pub bundle_type: BundleType,

    pub total: u32,

    #[serde(default)]
    pub entry: Vec<BundleEntry>,
}

/// One entry in a Bundle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleEntry {
    pub full_url: String,
    pub resource: JsonValue,
}

impl BundleEntry {
    /// Wrap a resource, deriving `fullUrl` from its `id`.
    pub fn new(resource: JsonValue) -> Self {
        let id = resource
            .get("id")
            .and_then(JsonValue::as_str)
            .unwrap_or_default();
        Self {
            full_url: format!("urn:uuid:{id}"),
            resource,
        }
    }
}

impl Bundle {
    /// Assemble a Bundle from mapped resources, preserving input order.
    pub fn assemble(resources: Vec<JsonValue>, bundle_type: BundleType) -> Self {
        let entry: Vec<BundleEntry> = resources.into_iter().map(BundleEntry::new).collect();
        Self {
            resource_type: "Bundle".to_string(),
            bundle_type,
            total: entry.len() as u32,
            entry,
        }
    }

    /// Assemble a `collection` Bundle, the default type for patient exports.
    pub fn collection(resources: Vec<JsonValue>) -> Self {
        Self::assemble(resources, BundleType::Collection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn total_matches_entry_count() {
        let resources = vec![
            json!({ "resourceType": "Patient", "id": "a" }),
            json!({ "resourceType": "Observation", "id": "b" }),
        ];
        let bundle = Bundle::collection(resources);
        assert_eq!(bundle.total, 2);
        assert_eq!(bundle.entry.len(), 2);
    }

    #[test]
    fn empty_bundle_serializes_with_total_and_entry() {
        let bundle = Bundle::collection(Vec::new());
        let value = serde_json::to_value(&bundle).unwrap();
        assert_eq!(value["resourceType"], "Bundle");
        assert_eq!(value["type"], "collection");
        assert_eq!(value["total"], 0);
        assert_eq!(value["entry"], json!([]));
    }

    #[test]
    fn full_url_is_urn_uuid_of_resource_id() {
        let bundle = Bundle::collection(vec![json!({ "resourceType": "Patient", "id": "p1" })]);
        assert_eq!(bundle.entry[0].full_url, "urn:uuid:p1");
    }

    #[test]
    fn input_order_is_preserved() {
        let bundle = Bundle::collection(vec![
            json!({ "id": "first" }),
            json!({ "id": "second" }),
            json!({ "id": "third" }),
        ]);
        let ids: Vec<&str> = bundle
            .entry
            .iter()
            .map(|e| e.resource["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, ["first", "second", "third"]);
    }
}
