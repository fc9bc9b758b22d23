// src/api/client.rs
//! Thin HTTP wrapper around reqwest for the Notion API.
//!
//! Handles authentication headers and request/response plumbing; wire
//! parsing lives in `responses` and traversal logic in `fetcher`.

use super::pagination::Paginated;
use super::responses::{block_from_value, record_from_value, ErrorBody};
use super::NotionRepository;
use crate::error::{AppError, NotionErrorCode};
use crate::model::{Block, Record};
use crate::types::{ApiKey, BlockId, DatabaseId};
use reqwest::{header, Client, Response};
use serde::Serialize;
use serde_json::Value;

const API_BASE_URL: &str = "https://api.notion.com/v1";

/// Authenticated HTTP client for the Notion API.
#[derive(Clone)]
pub struct NotionHttpClient {
    client: Client,
}

impl NotionHttpClient {
    /// Creates a client carrying the bearer credential, protocol
    /// version, and content-type headers on every request.
    pub fn new(api_key: &ApiKey, api_version: &str) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers(api_key, api_version)?)
            .build()?;
        Ok(Self { client })
    }

    fn create_headers(api_key: &ApiKey, api_version: &str) -> Result<header::HeaderMap, AppError> {
        let mut headers = header::HeaderMap::new();

        let auth_header = format!("Bearer {}", api_key.as_str());
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&auth_header)
                .map_err(|e| AppError::InvalidApiKey(e.to_string()))?,
        );

        headers.insert(
            "Notion-Version",
            header::HeaderValue::from_str(api_version).map_err(|e| {
                AppError::MissingConfiguration(format!("Invalid API version: {}", e))
            })?,
        );

        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        Ok(headers)
    }

    async fn get(&self, endpoint: &str) -> Result<Response, AppError> {
        let url = format!("{}/{}", API_BASE_URL, endpoint);
        log::debug!("GET {}", url);
        Ok(self.client.get(url).send().await?)
    }

    async fn post<T: Serialize>(&self, endpoint: &str, body: &T) -> Result<Response, AppError> {
        let url = format!("{}/{}", API_BASE_URL, endpoint);
        log::debug!("POST {}", url);
        Ok(self.client.post(url).json(body).send().await?)
    }
}

/// Reads a response body as a raw JSON page, mapping non-success
/// statuses to the typed error vocabulary.
async fn read_paginated(response: Response) -> Result<Paginated<Value>, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text().await?;

    if !status.is_success() {
        return Err(match serde_json::from_str::<ErrorBody>(&text) {
            Ok(body) => AppError::NotionService {
                code: NotionErrorCode::from_api_response(&body.code),
                message: body.message,
                status,
            },
            Err(_) => AppError::NotionService {
                code: NotionErrorCode::from_http_status(status.as_u16()),
                message: format!("HTTP {} from {}", status, url),
                status,
            },
        });
    }

    serde_json::from_str(&text).map_err(|e| {
        log::error!("Failed to parse response from {}: {}", url, e);
        AppError::MalformedResponse(e.to_string())
    })
}

fn query_body(page_size: u32, cursor: Option<String>) -> Value {
    let mut body = serde_json::json!({ "page_size": page_size });
    if let Some(cursor) = cursor {
        body["start_cursor"] = serde_json::json!(cursor);
    }
    body
}

#[async_trait::async_trait]
impl NotionRepository for NotionHttpClient {
    async fn query_records_page(
        &self,
        database: &DatabaseId,
        page_size: u32,
        cursor: Option<String>,
    ) -> Result<Paginated<Record>, AppError> {
        let endpoint = format!("databases/{}/query", database.to_hyphenated());
        let response = self.post(&endpoint, &query_body(page_size, cursor)).await?;
        let page = read_paginated(response).await?;

        Ok(Paginated {
            results: page
                .results
                .iter()
                .map(record_from_value)
                .collect::<Result<Vec<_>, _>>()?,
            next_cursor: page.next_cursor,
            has_more: page.has_more,
        })
    }

    async fn list_children_page(
        &self,
        parent: &BlockId,
        page_size: u32,
        cursor: Option<String>,
    ) -> Result<Paginated<Block>, AppError> {
        let mut endpoint = format!(
            "blocks/{}/children?page_size={}",
            parent.to_hyphenated(),
            page_size
        );
        if let Some(cursor) = &cursor {
            endpoint.push_str(&format!("&start_cursor={}", cursor));
        }
        let response = self.get(&endpoint).await?;
        let page = read_paginated(response).await?;

        Ok(Paginated {
            results: page
                .results
                .iter()
                .map(block_from_value)
                .collect::<Result<Vec<_>, _>>()?,
            next_cursor: page.next_cursor,
            has_more: page.has_more,
        })
    }
}
