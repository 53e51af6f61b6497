//! Firestore REST client
//!
//! HTTP-based access to the hosted document database. All calls go through
//! the retrying [`HttpClient`]; authentication is a bearer token obtained
//! from an injected [`AccessTokenProvider`]. The client is constructed once
//! per process and shared by the repository adapters.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tracing::debug;
use worktrack_domain::StoreConfig;

use super::auth::AccessTokenProvider;
use super::errors::StoreError;
use super::value;
use crate::http::HttpClient;

const DEFAULT_BASE_URL: &str = "https://firestore.googleapis.com/v1";
const PAGE_SIZE: usize = 300;

/// Configuration for the Firestore client
#[derive(Debug, Clone)]
pub struct FirestoreConfig {
    /// Firebase project id
    pub project_id: String,
    /// Override for the API root (emulators, tests)
    pub base_url: Option<String>,
    /// Timeout for store requests
    pub timeout: Duration,
    /// Max attempts for transient failures
    pub max_attempts: usize,
}

impl Default for FirestoreConfig {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            base_url: None,
            timeout: Duration::from_secs(30),
            max_attempts: 3,
        }
    }
}

impl From<&StoreConfig> for FirestoreConfig {
    fn from(config: &StoreConfig) -> Self {
        Self {
            project_id: config.project_id.clone(),
            base_url: config.base_url.clone(),
            timeout: Duration::from_secs(config.timeout_seconds),
            max_attempts: 3,
        }
    }
}

/// A stored document: resource name plus Firestore-encoded fields
#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    pub name: String,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl Document {
    /// Last path segment of the resource name
    pub fn doc_id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }

    /// Decode the fields into a domain type
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, StoreError> {
        let fields = value::decode_fields(&self.fields)?;
        serde_json::from_value(Value::Object(fields))
            .map_err(|err| StoreError::Decode(err.to_string()))
    }

    /// Decode the fields into a domain type, injecting the document id
    /// under `id_field` (entities store their id only in the resource name)
    pub fn decode_with_id<T: DeserializeOwned>(&self, id_field: &str) -> Result<T, StoreError> {
        let mut fields = value::decode_fields(&self.fields)?;
        fields.insert(id_field.to_string(), Value::String(self.doc_id().to_string()));
        serde_json::from_value(Value::Object(fields))
            .map_err(|err| StoreError::Decode(err.to_string()))
    }
}

#[derive(Debug, Deserialize)]
struct ListDocumentsResponse {
    #[serde(default)]
    documents: Vec<Document>,
    #[serde(rename = "nextPageToken")]
    next_page_token: Option<String>,
}

/// `runQuery` streams one row per result; rows without a document carry
/// only a read time and are skipped
#[derive(Debug, Deserialize)]
struct QueryResultRow {
    document: Option<Document>,
}

/// Result of a conditional document insert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    Created,
    /// The store already held a document with this id; nothing was written
    AlreadyExists,
}

/// Firestore REST client shared by the repository adapters
pub struct FirestoreClient {
    http: HttpClient,
    auth: Arc<dyn AccessTokenProvider>,
    documents_url: String,
}

impl FirestoreClient {
    /// Create a new client
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Config` when the project id is missing or the
    /// HTTP client cannot be built.
    pub fn new(
        config: FirestoreConfig,
        auth: Arc<dyn AccessTokenProvider>,
    ) -> Result<Self, StoreError> {
        if config.project_id.is_empty() {
            return Err(StoreError::Config("firestore project id is not configured".to_string()));
        }

        let http = HttpClient::builder()
            .timeout(config.timeout)
            .max_attempts(config.max_attempts)
            .build()
            .map_err(StoreError::from)?;

        let base = config.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL).trim_end_matches('/');
        let documents_url =
            format!("{base}/projects/{}/databases/(default)/documents", config.project_id);

        Ok(Self { http, auth, documents_url })
    }

    /// Fetch a single document; `Ok(None)` for a missing id
    pub async fn get_document(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Document>, StoreError> {
        let url = format!("{}/{collection}/{id}", self.documents_url);
        let request = self.authorize(self.http.request(Method::GET, &url)).await?;
        let response = self.http.send(request).await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_status_error(status, &url, &body));
        }

        let document: Document =
            response.json().await.map_err(|err| StoreError::Decode(err.to_string()))?;
        Ok(Some(document))
    }

    /// List every document in a collection, following pagination
    pub async fn list_documents(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let url = format!("{}/{collection}", self.documents_url);
        let mut documents = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut request =
                self.http.request(Method::GET, &url).query(&[("pageSize", PAGE_SIZE.to_string())]);
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token)]);
            }
            let request = self.authorize(request).await?;
            let response = self.http.send(request).await?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(map_status_error(status, &url, &body));
            }

            let page: ListDocumentsResponse =
                response.json().await.map_err(|err| StoreError::Decode(err.to_string()))?;
            documents.extend(page.documents);

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        debug!(collection, count = documents.len(), "listed documents");
        Ok(documents)
    }

    /// Run a structured query with equality filters over one collection
    pub async fn query_equal(
        &self,
        collection: &str,
        filters: &[(&str, Value)],
    ) -> Result<Vec<Document>, StoreError> {
        let url = format!("{}:runQuery", self.documents_url);

        let mut structured = json!({ "from": [{ "collectionId": collection }] });
        if let Some(clause) = build_where(filters) {
            structured["where"] = clause;
        }
        let body = json!({ "structuredQuery": structured });

        let request = self.authorize(self.http.request(Method::POST, &url).json(&body)).await?;
        let response = self.http.send(request).await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(map_status_error(status, &url, &text));
        }

        let rows: Vec<QueryResultRow> =
            response.json().await.map_err(|err| StoreError::Decode(err.to_string()))?;
        let documents: Vec<Document> = rows.into_iter().filter_map(|row| row.document).collect();

        debug!(collection, count = documents.len(), "query completed");
        Ok(documents)
    }

    /// Insert a document under an explicit id.
    ///
    /// The store rejects an existing id, which maps to
    /// [`CreateOutcome::AlreadyExists`]; this is the atomic
    /// insert-if-absent the reminder ledger relies on.
    pub async fn create_document(
        &self,
        collection: &str,
        id: &str,
        fields: Map<String, Value>,
    ) -> Result<CreateOutcome, StoreError> {
        let url = format!("{}/{collection}", self.documents_url);
        let body = json!({ "fields": fields });

        let request = self
            .authorize(
                self.http.request(Method::POST, &url).query(&[("documentId", id)]).json(&body),
            )
            .await?;
        let response = self.http.send(request).await?;

        let status = response.status();
        if status == StatusCode::CONFLICT {
            debug!(collection, id, "document already exists");
            return Ok(CreateOutcome::AlreadyExists);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(map_status_error(status, &url, &text));
        }

        Ok(CreateOutcome::Created)
    }

    async fn authorize(&self, builder: RequestBuilder) -> Result<RequestBuilder, StoreError> {
        match self.auth.access_token().await? {
            Some(token) => Ok(builder.header("Authorization", format!("Bearer {token}"))),
            None => Ok(builder),
        }
    }
}

fn build_where(filters: &[(&str, Value)]) -> Option<Value> {
    let mut clauses: Vec<Value> = filters
        .iter()
        .map(|(field, filter_value)| {
            json!({
                "fieldFilter": {
                    "field": { "fieldPath": field },
                    "op": "EQUAL",
                    "value": value::encode_value(filter_value),
                }
            })
        })
        .collect();

    match clauses.len() {
        0 => None,
        1 => clauses.pop(),
        _ => Some(json!({ "compositeFilter": { "op": "AND", "filters": clauses } })),
    }
}

fn map_status_error(status: StatusCode, url: &str, body: &str) -> StoreError {
    let message = format!("{status} from {url}: {body}");
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => StoreError::Auth(message),
        StatusCode::TOO_MANY_REQUESTS => StoreError::RateLimit(message),
        s if s.is_server_error() => StoreError::Server(message),
        _ => StoreError::Client(message),
    }
}
