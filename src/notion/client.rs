use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::{Method, StatusCode};
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

use super::blocks::{Block, BlockList, Page};

const API_BASE: &str = "https://api.notion.com/v1";
const NOTION_VERSION: &str = "2022-06-28";

/// Notion API client for the migration endpoints
pub struct NotionClient {
    client: Client,
    token: String,
}

#[derive(Error, Debug)]
pub enum NotionError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Authentication failed (check the integration token and page sharing)")]
    AuthFailed,
    #[error("Resource not found: {0}")]
    NotFound(String),
    #[error("Rate limited by the Notion API")]
    RateLimited,
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
}

impl NotionClient {
    /// Create a new client using the given integration token
    pub fn new(token: String) -> Result<Self, NotionError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self { client, token })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", API_BASE, path.trim_start_matches('/'));
        self.client
            .request(method, url)
            .bearer_auth(&self.token)
            .header("Notion-Version", NOTION_VERSION)
    }

    /// Fetch a page object (title property, archived flag)
    pub fn get_page(&self, page_id: &str) -> Result<Page, NotionError> {
        let response = self
            .request(Method::GET, &format!("pages/{}", page_id))
            .send()?;

        Ok(ensure_success(response, page_id)?.json()?)
    }

    /// Fetch all direct child blocks of a page, following pagination
    /// cursors until the listing is exhausted.
    pub fn list_children(&self, page_id: &str) -> Result<Vec<Block>, NotionError> {
        let path = format!("blocks/{}/children", page_id);
        let mut all_blocks = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let mut request = self.request(Method::GET, &path);
            if let Some(cursor) = &cursor {
                request = request.query(&[("start_cursor", cursor.as_str())]);
            }

            let response = ensure_success(request.send()?, page_id)?;
            let listing: BlockList = response.json()?;
            all_blocks.extend(listing.results);

            if !listing.has_more {
                break;
            }
            match listing.next_cursor {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        Ok(all_blocks)
    }

    /// Append new child blocks to the end of a page
    pub fn append_children(&self, page_id: &str, children: &[Value]) -> Result<(), NotionError> {
        let response = self
            .request(Method::PATCH, &format!("blocks/{}/children", page_id))
            .json(&serde_json::json!({ "children": children }))
            .send()?;

        ensure_success(response, page_id)?;
        Ok(())
    }

    /// Delete (archive) a single block
    pub fn delete_block(&self, block_id: Uuid) -> Result<(), NotionError> {
        let response = self
            .request(Method::DELETE, &format!("blocks/{}", block_id))
            .send()?;

        ensure_success(response, &block_id.to_string())?;
        Ok(())
    }
}

fn ensure_success(response: Response, resource: &str) -> Result<Response, NotionError> {
    match response.status() {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(NotionError::AuthFailed),
        StatusCode::NOT_FOUND => Err(NotionError::NotFound(resource.to_string())),
        StatusCode::TOO_MANY_REQUESTS => Err(NotionError::RateLimited),
        status if !status.is_success() => Err(NotionError::Api {
            status: status.as_u16(),
            message: response.text().unwrap_or_default(),
        }),
        _ => Ok(response),
    }
}
