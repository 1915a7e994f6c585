//! Vault storage models
//!
//! A vault is a document store with per-object ingestion (text extraction
//! and embedding) and semantic search over ingested objects.

use crate::schema::enums::string_enum;
use crate::schema::{model_schema, FieldKind, FieldSpec, Model};
use crate::utils::error::{ClientError, ClientResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Number of free-form tag slots on an uploaded object
pub const TAG_SLOTS: usize = 12;

string_enum! {
    /// Ingestion state of a vault object
    pub enum IngestionStatus {
        Pending => "pending",
        Processing => "processing",
        Completed => "completed",
        Failed => "failed",
    }
}

string_enum! {
    /// Retrieval method for vault search
    pub enum VaultSearchMethod {
        Vector => "vector",
        Hybrid => "hybrid",
        Fulltext => "fulltext",
        Graph => "graph",
    }
}

/// Parameters for `POST vault`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VaultCreateParams {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Build a knowledge graph on ingestion (optional)
    #[serde(rename = "enableGraph", skip_serializing_if = "Option::is_none")]
    pub enable_graph: Option<bool>,
}

impl VaultCreateParams {
    /// Create parameters from the required name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), description: None, enable_graph: None }
    }

    /// Replace the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Enable or disable graph extraction
    pub fn with_enable_graph(mut self, enable_graph: bool) -> Self {
        self.enable_graph = Some(enable_graph);
        self
    }
}

model_schema!(VaultCreateParams, "VaultCreateParams", [
    FieldSpec::required("name", FieldKind::String),
    FieldSpec::optional("description", FieldKind::String),
    FieldSpec::optional("enableGraph", FieldKind::Boolean),
]);

/// A vault
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vault {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "enableGraph", skip_serializing_if = "Option::is_none")]
    pub enable_graph: Option<bool>,
    /// Number of stored objects (optional)
    #[serde(rename = "objectCount", skip_serializing_if = "Option::is_none")]
    pub object_count: Option<u64>,
    /// Bytes stored (optional)
    #[serde(rename = "totalBytes", skip_serializing_if = "Option::is_none")]
    pub total_bytes: Option<u64>,
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

model_schema!(Vault, "Vault", [
    FieldSpec::required("id", FieldKind::String),
    FieldSpec::required("name", FieldKind::String),
    FieldSpec::optional("description", FieldKind::String),
    FieldSpec::optional("enableGraph", FieldKind::Boolean),
    FieldSpec::optional("objectCount", FieldKind::Integer),
    FieldSpec::optional("totalBytes", FieldKind::Integer),
    FieldSpec::optional("createdAt", FieldKind::DateTime),
]);

/// Response of `GET vault`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultListResponse {
    pub vaults: Vec<Vault>,
}

model_schema!(VaultListResponse, "VaultListResponse", [
    FieldSpec::required("vaults", FieldKind::Model(Vault::schema)).list(),
]);

/// Parameters for `POST vault/{id}/upload`.
///
/// The response carries a presigned URL; the file body itself is PUT to
/// that URL by the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UploadParams {
    /// Original file name
    pub filename: String,
    /// MIME type
    #[serde(rename = "contentType")]
    pub content_type: String,
    /// File size in bytes (optional)
    #[serde(rename = "sizeBytes", skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
    /// Start ingestion once the upload lands (optional)
    #[serde(rename = "autoIngest", skip_serializing_if = "Option::is_none")]
    pub auto_ingest: Option<bool>,
    /// Free-form metadata (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_4: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_5: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_6: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_7: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_8: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_9: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_10: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_11: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_12: Option<String>,
}

impl UploadParams {
    /// Create parameters from the required fields
    pub fn new(filename: impl Into<String>, content_type: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            content_type: content_type.into(),
            size_bytes: None,
            auto_ingest: None,
            metadata: None,
            tag_1: None,
            tag_2: None,
            tag_3: None,
            tag_4: None,
            tag_5: None,
            tag_6: None,
            tag_7: None,
            tag_8: None,
            tag_9: None,
            tag_10: None,
            tag_11: None,
            tag_12: None,
        }
    }

    /// Replace the file name
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    /// Replace the MIME type
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Set the file size
    pub fn with_size_bytes(mut self, size_bytes: u64) -> Self {
        self.size_bytes = Some(size_bytes);
        self
    }

    /// Enable or disable ingestion after upload
    pub fn with_auto_ingest(mut self, auto_ingest: bool) -> Self {
        self.auto_ingest = Some(auto_ingest);
        self
    }

    /// Set the metadata
    pub fn with_metadata(mut self, metadata: Value) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Set tag slot `index` (1 through 12)
    pub fn with_tag(mut self, index: usize, value: impl Into<String>) -> ClientResult<Self> {
        *self.tag_slot(index)? = Some(value.into());
        Ok(self)
    }

    /// Read tag slot `index` (1 through 12)
    pub fn tag(&self, index: usize) -> Option<&str> {
        let slot = match index {
            1 => &self.tag_1,
            2 => &self.tag_2,
            3 => &self.tag_3,
            4 => &self.tag_4,
            5 => &self.tag_5,
            6 => &self.tag_6,
            7 => &self.tag_7,
            8 => &self.tag_8,
            9 => &self.tag_9,
            10 => &self.tag_10,
            11 => &self.tag_11,
            12 => &self.tag_12,
            _ => return None,
        };
        slot.as_deref()
    }

    fn tag_slot(&mut self, index: usize) -> ClientResult<&mut Option<String>> {
        let slot = match index {
            1 => &mut self.tag_1,
            2 => &mut self.tag_2,
            3 => &mut self.tag_3,
            4 => &mut self.tag_4,
            5 => &mut self.tag_5,
            6 => &mut self.tag_6,
            7 => &mut self.tag_7,
            8 => &mut self.tag_8,
            9 => &mut self.tag_9,
            10 => &mut self.tag_10,
            11 => &mut self.tag_11,
            12 => &mut self.tag_12,
            _ => {
                return Err(ClientError::Validation(format!(
                    "tag index {} out of range 1..={}",
                    index, TAG_SLOTS
                )))
            }
        };
        Ok(slot)
    }
}

model_schema!(UploadParams, "UploadParams", [
    FieldSpec::required("filename", FieldKind::String),
    FieldSpec::required("contentType", FieldKind::String),
    FieldSpec::optional("sizeBytes", FieldKind::Integer),
    FieldSpec::optional("autoIngest", FieldKind::Boolean),
    FieldSpec::optional("metadata", FieldKind::Mixed),
    FieldSpec::optional("tag1", FieldKind::String).wire("tag_1"),
    FieldSpec::optional("tag2", FieldKind::String).wire("tag_2"),
    FieldSpec::optional("tag3", FieldKind::String).wire("tag_3"),
    FieldSpec::optional("tag4", FieldKind::String).wire("tag_4"),
    FieldSpec::optional("tag5", FieldKind::String).wire("tag_5"),
    FieldSpec::optional("tag6", FieldKind::String).wire("tag_6"),
    FieldSpec::optional("tag7", FieldKind::String).wire("tag_7"),
    FieldSpec::optional("tag8", FieldKind::String).wire("tag_8"),
    FieldSpec::optional("tag9", FieldKind::String).wire("tag_9"),
    FieldSpec::optional("tag10", FieldKind::String).wire("tag_10"),
    FieldSpec::optional("tag11", FieldKind::String).wire("tag_11"),
    FieldSpec::optional("tag12", FieldKind::String).wire("tag_12"),
]);

/// Response of `POST vault/{id}/upload`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    /// ID of the object being created
    #[serde(rename = "objectId")]
    pub object_id: String,
    /// Presigned URL to PUT the file body to
    #[serde(rename = "uploadUrl")]
    pub upload_url: String,
    /// Seconds until the URL expires (optional)
    #[serde(rename = "expiresIn", skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
}

model_schema!(UploadResponse, "UploadResponse", [
    FieldSpec::required("objectID", FieldKind::String).wire("objectId"),
    FieldSpec::required("uploadURL", FieldKind::String).wire("uploadUrl"),
    FieldSpec::optional("expiresIn", FieldKind::Integer),
]);

/// A stored object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultObject {
    pub id: String,
    pub filename: String,
    #[serde(rename = "contentType", skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(rename = "sizeBytes", skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
    #[serde(rename = "ingestionStatus", skip_serializing_if = "Option::is_none")]
    pub ingestion_status: Option<IngestionStatus>,
    /// Pages detected during ingestion (optional)
    #[serde(rename = "pageCount", skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

model_schema!(VaultObject, "VaultObject", [
    FieldSpec::required("id", FieldKind::String),
    FieldSpec::required("filename", FieldKind::String),
    FieldSpec::optional("contentType", FieldKind::String),
    FieldSpec::optional("sizeBytes", FieldKind::Integer),
    FieldSpec::optional("ingestionStatus", FieldKind::Enum(IngestionStatus::VALUES)),
    FieldSpec::optional("pageCount", FieldKind::Integer),
    FieldSpec::optional("tags", FieldKind::String).list(),
    FieldSpec::optional("metadata", FieldKind::Mixed),
    FieldSpec::optional("createdAt", FieldKind::DateTime).wire("created_at"),
    FieldSpec::optional("updatedAt", FieldKind::DateTime).wire("updated_at"),
]);

/// Response of `GET vault/{id}/objects`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectListResponse {
    #[serde(rename = "vaultId", skip_serializing_if = "Option::is_none")]
    pub vault_id: Option<String>,
    pub objects: Vec<VaultObject>,
}

model_schema!(ObjectListResponse, "ObjectListResponse", [
    FieldSpec::optional("vaultID", FieldKind::String).wire("vaultId"),
    FieldSpec::required("objects", FieldKind::Model(VaultObject::schema)).list(),
]);

/// Response of `POST vault/{id}/ingest/{objectID}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestResponse {
    #[serde(rename = "objectId")]
    pub object_id: String,
    pub status: IngestionStatus,
    /// Background job tracking the ingestion (optional)
    #[serde(rename = "workflowId", skip_serializing_if = "Option::is_none")]
    pub workflow_id: Option<String>,
}

model_schema!(IngestResponse, "IngestResponse", [
    FieldSpec::required("objectID", FieldKind::String).wire("objectId"),
    FieldSpec::required("status", FieldKind::Enum(IngestionStatus::VALUES)),
    FieldSpec::optional("workflowID", FieldKind::String).wire("workflowId"),
]);

/// Parameters for `POST vault/{id}/search`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VaultSearchParams {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<VaultSearchMethod>,
    /// Number of chunks to return (optional)
    #[serde(rename = "topK", skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    /// Metadata filters, passed through (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Value>,
}

impl VaultSearchParams {
    /// Create parameters from the required query
    pub fn new(query: impl Into<String>) -> Self {
        Self { query: query.into(), method: None, top_k: None, filters: None }
    }

    /// Replace the query
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Set the retrieval method
    pub fn with_method(mut self, method: impl Into<VaultSearchMethod>) -> Self {
        self.method = Some(method.into());
        self
    }

    /// Set the result count
    pub fn with_top_k(mut self, top_k: u32) -> Self {
        self.top_k = Some(top_k);
        self
    }

    /// Set the metadata filters
    pub fn with_filters(mut self, filters: Value) -> Self {
        self.filters = Some(filters);
        self
    }
}

model_schema!(VaultSearchParams, "VaultSearchParams", [
    FieldSpec::required("query", FieldKind::String),
    FieldSpec::optional("method", FieldKind::Enum(VaultSearchMethod::VALUES)),
    FieldSpec::optional("topK", FieldKind::Integer),
    FieldSpec::optional("filters", FieldKind::Mixed),
]);

/// One matching chunk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultSearchChunk {
    #[serde(rename = "objectId")]
    pub object_id: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Page the chunk was extracted from (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
}

model_schema!(VaultSearchChunk, "VaultSearchChunk", [
    FieldSpec::required("objectID", FieldKind::String).wire("objectId"),
    FieldSpec::required("text", FieldKind::String),
    FieldSpec::optional("score", FieldKind::Number),
    FieldSpec::optional("filename", FieldKind::String),
    FieldSpec::optional("page", FieldKind::Integer),
]);

/// Response of `POST vault/{id}/search`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultSearchResponse {
    pub results: Vec<VaultSearchChunk>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<VaultSearchMethod>,
}

model_schema!(VaultSearchResponse, "VaultSearchResponse", [
    FieldSpec::required("results", FieldKind::Model(VaultSearchChunk::schema)).list(),
    FieldSpec::optional("method", FieldKind::Enum(VaultSearchMethod::VALUES)),
]);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{hydrate_value, normalize_item, Item};
    use serde_json::json;

    #[test]
    fn test_tag_slots_use_wire_names() {
        let params = UploadParams::new("brief.pdf", "application/pdf")
            .with_tag(1, "contract")
            .and_then(|p| p.with_tag(12, "2024"))
            .unwrap();
        assert_eq!(params.tag(1), Some("contract"));

        let wire = normalize_item(&Item::from(params)).unwrap();
        assert_eq!(wire["tag_1"], json!("contract"));
        assert_eq!(wire["tag_12"], json!("2024"));
        assert!(!wire.contains_key("tag_2"));
    }

    #[test]
    fn test_raw_tag_names_remapped() {
        let raw: Item<UploadParams> = Item::raw(json!({
            "filename": "a.txt",
            "contentType": "text/plain",
            "tag3": "discovery",
        }));
        let wire = normalize_item(&raw).unwrap();
        assert_eq!(wire["tag_3"], json!("discovery"));
        assert!(!wire.contains_key("tag3"));
    }

    #[test]
    fn test_tag_index_out_of_range() {
        assert!(UploadParams::new("a", "b").with_tag(0, "x").is_err());
        assert!(UploadParams::new("a", "b").with_tag(13, "x").is_err());
        assert_eq!(UploadParams::new("a", "b").tag(13), None);
    }

    #[test]
    fn test_object_snake_case_timestamps() {
        let object: VaultObject = hydrate_value(json!({
            "id": "o1",
            "filename": "a.pdf",
            "created_at": "2024-05-01T12:00:00Z",
            "ingestionStatus": "completed",
        })).unwrap();
        assert!(object.created_at.is_some());
        assert_eq!(object.ingestion_status, Some(IngestionStatus::Completed));

        let object: VaultObject = hydrate_value(json!({
            "id": "o1",
            "filename": "a.pdf",
            "createdAt": "2024-05-01T12:00:00Z",
        })).unwrap();
        assert!(object.created_at.is_some());
    }

    #[test]
    fn test_upload_response_remaps() {
        let response: UploadResponse = hydrate_value(json!({
            "objectId": "o1",
            "uploadUrl": "https://storage.example/put",
        })).unwrap();
        assert_eq!(response.object_id, "o1");
        assert!(response.expires_in.is_none());
    }
}
