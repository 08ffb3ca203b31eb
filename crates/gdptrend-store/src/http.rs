//! HTTP backend for an external document-collection REST API.
//!
//! The store is reached over a small JSON contract:
//!
//! - `GET    {base}/v1/collections/{name}/documents` — full collection
//! - `GET    {base}/v1/collections/{name}/documents?year=N` — equality query
//! - `POST   {base}/v1/collections/{name}/documents` — insert, returns the
//!   document with its store-assigned id
//! - `PATCH  {base}/v1/collections/{name}/documents/{id}` — partial update
//! - `DELETE {base}/v1/collections/{name}/documents/{id}`
//!
//! The backend assigns ids; this client never invents one.

use crate::traits::RecordStore;
use async_trait::async_trait;
use gdptrend_core::validate::ensure_positive_value;
use gdptrend_core::{Error, GdpRecord, RecordDraft, RecordId, Result};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

/// Connection settings for an [`HttpStore`].
///
/// Constructed by the caller and injected; there is no ambient default.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL of the document store, e.g. `https://store.example.com`
    pub base_url: String,
    /// Collection name holding GDP records, e.g. `gdp_records`
    pub collection: String,
    /// Bearer token for the store, if it requires one
    pub token: Option<String>,
}

impl StoreConfig {
    /// Creates a config for an unauthenticated store.
    pub fn new<B: Into<String>, C: Into<String>>(base_url: B, collection: C) -> Self {
        Self {
            base_url: base_url.into(),
            collection: collection.into(),
            token: None,
        }
    }

    /// Sets the bearer token sent with every store request.
    pub fn with_token<T: Into<String>>(mut self, token: T) -> Self {
        self.token = Some(token.into());
        self
    }

    fn collection_url(&self) -> String {
        format!(
            "{}/v1/collections/{}/documents",
            self.base_url.trim_end_matches('/'),
            self.collection
        )
    }

    fn document_url(&self, id: &RecordId) -> String {
        format!("{}/{}", self.collection_url(), id.as_str())
    }
}

/// Wire form of a new document insert.
#[derive(Debug, Serialize)]
struct NewDocument<'a> {
    year: i32,
    value: f64,
    country: &'a str,
}

/// Wire form of a `value` overwrite.
#[derive(Debug, Serialize)]
struct ValuePatch {
    value: f64,
}

/// Wire form of a stored document.
#[derive(Debug, Deserialize)]
struct Document {
    id: String,
    year: i32,
    value: f64,
    country: String,
}

impl Document {
    fn into_record(self) -> Result<GdpRecord> {
        let id = RecordId::new(self.id)
            .ok_or_else(|| Error::store("store returned a document with an empty id"))?;
        Ok(GdpRecord {
            id,
            year: self.year,
            value: self.value,
            country: self.country,
        })
    }
}

/// Wire form of a collection listing or query result.
#[derive(Debug, Deserialize)]
struct DocumentList {
    documents: Vec<Document>,
}

/// Record store gateway over the document-store REST API.
#[derive(Debug, Clone)]
pub struct HttpStore {
    client: reqwest::Client,
    config: StoreConfig,
}

impl HttpStore {
    /// Creates a store gateway from an injected config.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        self.authorize(request)
            .send()
            .await
            .map_err(|e| Error::store_with_source("store request failed", e))
    }

    /// Maps a non-success status to the error taxonomy. `id` names the
    /// document for 404 mapping on per-document routes.
    fn check_status(response: &reqwest::Response, id: Option<&RecordId>) -> Result<()> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        match (status, id) {
            (StatusCode::NOT_FOUND, Some(id)) => Err(Error::not_found(id.as_str())),
            _ => Err(Error::store(format!("store returned HTTP {status}"))),
        }
    }

    async fn read_document(&self, response: reqwest::Response) -> Result<GdpRecord> {
        let doc: Document = response
            .json()
            .await
            .map_err(|e| Error::store_with_source("malformed store response", e))?;
        doc.into_record()
    }

    async fn query(&self, year: Option<i32>) -> Result<Vec<GdpRecord>> {
        let mut request = self.client.get(self.config.collection_url());
        if let Some(year) = year {
            request = request.query(&[("year", year)]);
        }

        let response = self.send(request).await?;
        Self::check_status(&response, None)?;

        let list: DocumentList = response
            .json()
            .await
            .map_err(|e| Error::store_with_source("malformed store response", e))?;
        list.documents.into_iter().map(Document::into_record).collect()
    }
}

#[async_trait]
impl RecordStore for HttpStore {
    async fn create(&self, draft: RecordDraft) -> Result<GdpRecord> {
        // Check-then-insert: two independent calls. A concurrent creator
        // can admit a second record for the same year between them.
        if self.find_by_year(draft.year).await?.is_some() {
            tracing::debug!(year = draft.year, "rejected duplicate-year create");
            return Err(Error::DuplicateYear { year: draft.year });
        }

        let body = NewDocument {
            year: draft.year,
            value: draft.value,
            country: &draft.country,
        };
        let request = self.client.post(self.config.collection_url()).json(&body);

        let response = self.send(request).await?;
        Self::check_status(&response, None)?;

        let record = self.read_document(response).await?;
        tracing::debug!(id = %record.id, year = record.year, "record created");
        Ok(record)
    }

    async fn update_value(&self, id: &RecordId, value: f64) -> Result<GdpRecord> {
        ensure_positive_value(value)?;

        let request = self
            .client
            .patch(self.config.document_url(id))
            .json(&ValuePatch { value });

        let response = self.send(request).await?;
        Self::check_status(&response, Some(id))?;

        let record = self.read_document(response).await?;
        tracing::debug!(id = %id, value, "record value updated");
        Ok(record)
    }

    async fn delete(&self, id: &RecordId) -> Result<()> {
        let request = self.client.delete(self.config.document_url(id));

        let response = self.send(request).await?;
        Self::check_status(&response, Some(id))?;

        tracing::debug!(id = %id, "record deleted");
        Ok(())
    }

    async fn list(&self) -> Result<Vec<GdpRecord>> {
        let mut records = self.query(None).await?;
        // The contract says the store orders by year; sort anyway so the
        // gateway's own contract holds for sloppy backends.
        records.sort_by_key(|r| r.year);
        Ok(records)
    }

    async fn find_by_year(&self, year: i32) -> Result<Option<GdpRecord>> {
        let matches = self.query(Some(year)).await?;
        Ok(matches.into_iter().next())
    }
}
