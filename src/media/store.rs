// SPDX-License-Identifier: MPL-2.0
//! Decoded image store.
//!
//! Maps each [`ImageRef`] on the page to a loading slot. Embedded defaults
//! are rasterized, local paths are read from disk and remote URLs are
//! downloaded; all of it runs off the UI thread. Finished slots live in an
//! LRU so the store stays bounded. The LRU grows to hold every image of the
//! requested page, so only images the page no longer shows are evicted.
//!
//! # Usage
//!
//! ```ignore
//! let mut store = ImageStore::new(capacity, Some(http));
//! let tasks = store
//!     .request(page.images())
//!     .into_iter()
//!     .map(|(image, load)| Task::perform(load, move |r| Message::ImageLoaded(image.clone(), r)));
//! ```

use super::assets;
use super::image::{self, ImageData};
use crate::content::ImageRef;
use crate::error::{Error, Result};
use futures_util::future::BoxFuture;
use futures_util::{FutureExt, StreamExt};
use lru::LruCache;
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Largest download accepted for a single image (32 MB).
pub const MAX_DOWNLOAD_BYTES: usize = 32 * 1024 * 1024;

#[derive(Debug, Clone)]
enum Slot {
    Loading,
    Ready(ImageData),
    Failed,
}

/// What the view should draw for a reference.
#[derive(Debug, Clone, Copy)]
pub enum Lookup<'a> {
    Ready(&'a ImageData),
    Loading,
    /// Unresolved, failed, or evicted without a reload.
    Broken(Option<&'a ImageData>),
}

pub struct ImageStore {
    slots: LruCache<ImageRef, Slot>,
    /// Missing when the HTTP client could not be built; remote loads then fail.
    http: Option<reqwest::Client>,
    placeholder: Option<ImageData>,
}

impl std::fmt::Debug for ImageStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageStore")
            .field("len", &self.slots.len())
            .field("capacity", &self.slots.cap())
            .finish_non_exhaustive()
    }
}

impl ImageStore {
    #[must_use]
    pub fn new(capacity: usize, http: Option<reqwest::Client>) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        let placeholder = assets::get(assets::BROKEN_IMAGE)
            .ok_or_else(|| Error::Io(format!("missing embedded {}", assets::BROKEN_IMAGE)))
            .and_then(|bytes| image::rasterize_svg(&bytes));
        let placeholder = match placeholder {
            Ok(data) => Some(data),
            Err(err) => {
                tracing::error!(error = %err, "broken-image placeholder unavailable");
                None
            }
        };

        Self {
            slots: LruCache::new(capacity),
            http,
            placeholder,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.cap().get()
    }

    /// Marks every new reference as loading and returns the loads to run.
    ///
    /// References already loading, loaded or failed are skipped, as are
    /// unresolved ones. The requested set becomes the most recent in the
    /// LRU, which grows if the set does not fit.
    pub fn request<'a>(
        &mut self,
        images: impl IntoIterator<Item = &'a ImageRef>,
    ) -> Vec<(ImageRef, BoxFuture<'static, Result<ImageData>>)> {
        let mut page: Vec<&ImageRef> = Vec::new();
        for image in images {
            if !image.is_unresolved() && !page.contains(&image) {
                page.push(image);
            }
        }

        if let Some(needed) = NonZeroUsize::new(page.len()) {
            if needed > self.slots.cap() {
                tracing::debug!(
                    from = self.slots.cap().get(),
                    to = needed.get(),
                    "growing image store to fit page"
                );
                self.slots.resize(needed);
            }
        }

        let mut loads = Vec::new();
        for image in page {
            if self.slots.contains(image) {
                self.slots.promote(image);
                continue;
            }
            self.slots.put(image.clone(), Slot::Loading);
            loads.push((image.clone(), self.load(image.clone())));
        }
        loads
    }

    /// Stores the outcome of a load started by [`Self::request`].
    ///
    /// Results for references evicted since the request are dropped.
    pub fn insert(&mut self, image: ImageRef, result: Result<ImageData>) {
        let Some(slot) = self.slots.peek_mut(&image) else {
            tracing::debug!(%image, "dropping result for untracked image");
            return;
        };
        *slot = match result {
            Ok(data) => {
                tracing::debug!(%image, width = data.width, height = data.height, "image ready");
                Slot::Ready(data)
            }
            Err(err) => {
                tracing::warn!(%image, error = %err, "image failed to load");
                Slot::Failed
            }
        };
    }

    /// Looks up a reference without touching recency.
    #[must_use]
    pub fn lookup(&self, image: &ImageRef) -> Lookup<'_> {
        match self.slots.peek(image) {
            Some(Slot::Ready(data)) => Lookup::Ready(data),
            Some(Slot::Loading) => Lookup::Loading,
            Some(Slot::Failed) | None => Lookup::Broken(self.placeholder.as_ref()),
        }
    }

    fn load(&self, image: ImageRef) -> BoxFuture<'static, Result<ImageData>> {
        match image {
            ImageRef::Local(path) => load_local(path).boxed(),
            ImageRef::Remote(url) => match self.http.clone() {
                Some(http) => download(http, url).boxed(),
                None => async move { Err(Error::Image(format!("no HTTP client for {url}"))) }.boxed(),
            },
            ImageRef::Unresolved => {
                async { Err(Error::Image("unresolved image reference".into())) }.boxed()
            }
        }
    }
}

async fn decode_blocking(bytes: Vec<u8>) -> Result<ImageData> {
    tokio::task::spawn_blocking(move || image::decode(&bytes))
        .await
        .map_err(|e| Error::Image(e.to_string()))?
}

async fn load_local(path: String) -> Result<ImageData> {
    if let Some(bytes) = assets::get(&path) {
        return decode_blocking(bytes.into_owned()).await;
    }
    tokio::task::spawn_blocking(move || image::load_file(&PathBuf::from(path)))
        .await
        .map_err(|e| Error::Image(e.to_string()))?
}

async fn download(http: reqwest::Client, url: String) -> Result<ImageData> {
    let response = http.get(&url).send().await.map_err(|e| Error::Image(e.to_string()))?;

    if !response.status().is_success() {
        return Err(Error::Image(format!("HTTP status: {}", response.status())));
    }

    let mut bytes = Vec::with_capacity(
        response
            .content_length()
            .map_or(0, |len| (len as usize).min(MAX_DOWNLOAD_BYTES)),
    );
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| Error::Image(e.to_string()))?;
        if bytes.len() + chunk.len() > MAX_DOWNLOAD_BYTES {
            return Err(Error::Image(format!(
                "image exceeds {} bytes",
                MAX_DOWNLOAD_BYTES
            )));
        }
        bytes.extend_from_slice(&chunk);
    }

    decode_blocking(bytes).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::fallback::{DEFAULT_GALLERY_IMAGE, DEFAULT_HEADSHOT};

    fn store(capacity: usize) -> ImageStore {
        ImageStore::new(capacity, None)
    }

    fn local(path: &str) -> ImageRef {
        ImageRef::Local(path.into())
    }

    #[test]
    fn placeholder_is_rasterized() {
        let store = store(8);
        assert!(matches!(
            store.lookup(&ImageRef::Unresolved),
            Lookup::Broken(Some(_))
        ));
    }

    #[test]
    fn each_reference_is_requested_once() {
        let mut store = store(8);
        let headshot = local(DEFAULT_HEADSHOT);

        let first = store.request([&headshot, &headshot]);
        let second = store.request([&headshot]);

        assert_eq!(first.len(), 1);
        assert!(second.is_empty());
        assert!(matches!(store.lookup(&headshot), Lookup::Loading));
    }

    #[test]
    fn unresolved_references_are_not_loaded() {
        let mut store = store(8);
        assert!(store.request([&ImageRef::Unresolved]).is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn failed_load_renders_broken() {
        let mut store = store(8);
        let image = ImageRef::Remote("https://example.invalid/x.jpg".into());
        let _loads = store.request([&image]);

        store.insert(image.clone(), Err(Error::Image("404".into())));

        assert!(matches!(store.lookup(&image), Lookup::Broken(_)));
    }

    fn pixel() -> Result<ImageData> {
        Ok(ImageData::from_rgba(1, 1, vec![0; 4]))
    }

    #[test]
    fn store_is_bounded() {
        let mut store = store(2);
        for batch in 0..3 {
            let images: Vec<_> = (0..2).map(|i| local(&format!("img{batch}-{i}.png"))).collect();
            let _loads = store.request(&images);
        }
        assert_eq!(store.len(), 2);
        assert_eq!(store.capacity(), 2);
    }

    #[test]
    fn page_larger_than_capacity_keeps_every_image() {
        let mut store = store(8);
        let headshot = local(DEFAULT_HEADSHOT);
        let mut page = vec![headshot.clone()];
        page.extend((0..8).map(|i| ImageRef::Remote(format!("https://cdn.example/img{i}.jpg"))));

        let loads = store.request(&page);
        assert_eq!(loads.len(), page.len());
        assert_eq!(store.capacity(), page.len());

        for (image, _load) in loads {
            store.insert(image, pixel());
        }

        for image in &page {
            assert!(matches!(store.lookup(image), Lookup::Ready(_)), "{image} not ready");
        }
        assert!(store.request(&page).is_empty());
    }

    #[test]
    fn rerequested_images_survive_eviction() {
        let mut store = store(2);
        let headshot = local(DEFAULT_HEADSHOT);
        let first = local("a.png");
        for (image, _load) in store.request([&headshot, &first]) {
            store.insert(image, pixel());
        }

        let second = local("b.png");
        let _loads = store.request([&headshot, &second]);

        assert!(matches!(store.lookup(&headshot), Lookup::Ready(_)));
        assert!(matches!(store.lookup(&first), Lookup::Broken(_)));
    }

    #[test]
    fn untracked_results_are_dropped() {
        let mut store = store(2);
        store.insert(local("late.png"), pixel());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn embedded_defaults_load() {
        let mut store = store(8);
        let gallery = local(DEFAULT_GALLERY_IMAGE);

        let mut loads = store.request([&gallery]);
        let (image, load) = loads.pop().expect("one load");
        let result = load.await;
        assert!(result.is_ok());

        store.insert(image, result);
        assert!(matches!(store.lookup(&gallery), Lookup::Ready(_)));
    }

    #[tokio::test]
    async fn remote_without_client_fails() {
        let mut store = store(8);
        let remote = ImageRef::Remote("https://cdn.example/a.jpg".into());

        let mut loads = store.request([&remote]);
        let (_, load) = loads.pop().expect("one load");

        assert!(matches!(load.await, Err(Error::Image(_))));
    }

    #[tokio::test]
    async fn missing_local_file_fails() {
        let mut store = store(8);
        let missing = local("/definitely/not/here.png");

        let mut loads = store.request([&missing]);
        let (_, load) = loads.pop().expect("one load");

        assert!(load.await.is_err());
    }
}
