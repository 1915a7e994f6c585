//! Vault storage service

use super::client::{payload, Client};
use super::dispatch::Operation;
use super::transport::RequestOptions;
use crate::models::vault::*;
use crate::schema::Item;
use crate::utils::error::ClientResult;

const CREATE: Operation = Operation::post("vault.create", "vault");
const LIST: Operation = Operation::get("vault.list", "vault");
const RETRIEVE: Operation = Operation::get("vault.retrieve", "vault/{id}");
const UPLOAD: Operation = Operation::post("vault.upload", "vault/{id}/upload");
const LIST_OBJECTS: Operation = Operation::get("vault.list_objects", "vault/{id}/objects");
const RETRIEVE_OBJECT: Operation = Operation::get("vault.retrieve_object", "vault/{id}/objects/{objectID}");
const DOWNLOAD_OBJECT: Operation = Operation::get("vault.download_object", "vault/{id}/objects/{objectID}/download");
const INGEST: Operation = Operation::post("vault.ingest", "vault/{id}/ingest/{objectID}");
const SEARCH: Operation = Operation::post("vault.search", "vault/{id}/search");

/// `vault`
#[derive(Debug, Clone, Copy)]
pub struct VaultService<'a> {
    client: &'a Client,
}

impl<'a> VaultService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Create a vault
    pub async fn create(
        &self,
        params: impl Into<Item<VaultCreateParams>>,
        options: Option<RequestOptions>,
    ) -> ClientResult<Vault> {
        let body = payload::<VaultCreateParams>(params.into())?;
        self.client.request(&CREATE, &[], Some(body), options).await
    }

    /// List vaults
    pub async fn list(&self, options: Option<RequestOptions>) -> ClientResult<VaultListResponse> {
        self.client.request(&LIST, &[], None, options).await
    }

    /// Fetch a vault
    pub async fn retrieve(&self, id: &str, options: Option<RequestOptions>) -> ClientResult<Vault> {
        self.client.request(&RETRIEVE, &[id], None, options).await
    }

    /// Reserve an object and get a presigned upload URL
    pub async fn upload(
        &self,
        id: &str,
        params: impl Into<Item<UploadParams>>,
        options: Option<RequestOptions>,
    ) -> ClientResult<UploadResponse> {
        let body = payload::<UploadParams>(params.into())?;
        self.client.request(&UPLOAD, &[id], Some(body), options).await
    }

    /// List the objects of a vault
    pub async fn list_objects(&self, id: &str, options: Option<RequestOptions>) -> ClientResult<ObjectListResponse> {
        self.client.request(&LIST_OBJECTS, &[id], None, options).await
    }

    /// Fetch object metadata
    pub async fn retrieve_object(
        &self,
        id: &str,
        object_id: &str,
        options: Option<RequestOptions>,
    ) -> ClientResult<VaultObject> {
        self.client.request(&RETRIEVE_OBJECT, &[id, object_id], None, options).await
    }

    /// Download the original file bytes
    pub async fn download_object(
        &self,
        id: &str,
        object_id: &str,
        options: Option<RequestOptions>,
    ) -> ClientResult<Vec<u8>> {
        self.client.request_bytes(&DOWNLOAD_OBJECT, &[id, object_id], None, options).await
    }

    /// Start ingestion of an uploaded object
    pub async fn ingest(&self, id: &str, object_id: &str, options: Option<RequestOptions>) -> ClientResult<IngestResponse> {
        self.client.request(&INGEST, &[id, object_id], None, options).await
    }

    /// Search the ingested content of a vault
    pub async fn search(
        &self,
        id: &str,
        params: impl Into<Item<VaultSearchParams>>,
        options: Option<RequestOptions>,
    ) -> ClientResult<VaultSearchResponse> {
        let body = payload::<VaultSearchParams>(params.into())?;
        self.client.request(&SEARCH, &[id], Some(body), options).await
    }
}
