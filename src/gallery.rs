//! Image gallery fed by the public picsum listing.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub const GALLERY_PAGE: u32 = 2;
pub const GALLERY_LIMIT: u32 = 8;
pub const PICSUM_LIST_URL: &str = "https://picsum.photos/v2/list";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: String,
    pub author: String,
    pub download_url: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum GalleryError {
    #[error("gallery request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("gallery listing returned {0}")]
    Status(u16),

    #[error("gallery listing unreadable: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Where gallery entries come from.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait GallerySource {
    async fn fetch_items(&self) -> Result<Vec<GalleryItem>, GalleryError>;
}

#[derive(Clone)]
pub struct PicsumGallery {
    client: Client,
    list_url: String,
}

impl Default for PicsumGallery {
    fn default() -> Self {
        Self::new(PICSUM_LIST_URL)
    }
}

impl PicsumGallery {
    pub fn new(list_url: impl Into<String>) -> Self {
        Self::with_client(list_url, Client::new())
    }

    pub fn with_client(list_url: impl Into<String>, client: Client) -> Self {
        Self {
            client,
            list_url: list_url.into(),
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl GallerySource for PicsumGallery {
    async fn fetch_items(&self) -> Result<Vec<GalleryItem>, GalleryError> {
        let response = self
            .client
            .get(&self.list_url)
            .query(&[("page", GALLERY_PAGE), ("limit", GALLERY_LIMIT)])
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GalleryError::Status(status.as_u16()));
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Fetch the listing once. Failures are logged and produce an empty gallery.
pub async fn load_gallery<S: GallerySource + ?Sized>(source: &S) -> Vec<GalleryItem> {
    match source.fetch_items().await {
        Ok(items) => {
            tracing::info!(count = items.len(), "gallery loaded");
            items
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to fetch gallery");
            Vec::new()
        }
    }
}

/// What the gallery section renders from.
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryState {
    pub loading: bool,
    pub items: Vec<GalleryItem>,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self {
            loading: true,
            items: Vec::new(),
        }
    }
}

impl GalleryState {
    pub fn resolve(&mut self, items: Vec<GalleryItem>) {
        self.items = items;
        self.loading = false;
    }
}

/// Every third tile, starting with the first, spans two columns.
pub fn is_wide_tile(index: usize) -> bool {
    index % 3 == 0
}
