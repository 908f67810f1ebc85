//! Cover persistence.

use crate::error::{CoverError, Result};
use async_trait::async_trait;
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;
use std::path::PathBuf;
use tome_core::BookId;
use tracing::info;

/// Durable storage for book covers.
///
/// Implementations take ownership of the decoded image. Saving is
/// idempotent per book id: a repeat save replaces the previous cover, and
/// when concurrent saves race the last write wins.
#[async_trait]
pub trait CoverStore: Send + Sync {
    /// Persist `cover` as the cover for `book_id`.
    async fn save_cover(&self, book_id: &BookId, cover: DynamicImage) -> Result<()>;
}

/// Filesystem-backed cover store.
///
/// Covers are written as `<covers_dir>/<book_id>.png`. The directory is
/// created on first save.
pub struct FsCoverStore {
    covers_dir: PathBuf,
}

impl FsCoverStore {
    /// Create a store rooted at `covers_dir`.
    pub fn new(covers_dir: impl Into<PathBuf>) -> Self {
        Self {
            covers_dir: covers_dir.into(),
        }
    }

    /// Path a given book's cover is stored at.
    pub fn cover_path(&self, book_id: &BookId) -> PathBuf {
        self.covers_dir.join(format!("{}.png", book_id))
    }
}

#[async_trait]
impl CoverStore for FsCoverStore {
    async fn save_cover(&self, book_id: &BookId, cover: DynamicImage) -> Result<()> {
        tokio::fs::create_dir_all(&self.covers_dir).await?;

        // PNG encoding is CPU-bound, keep it off the async runtime
        let encoded = tokio::task::spawn_blocking(move || {
            let mut buf = Cursor::new(Vec::new());
            cover.write_to(&mut buf, ImageFormat::Png)?;
            Ok::<_, image::ImageError>(buf.into_inner())
        })
        .await
        .map_err(|e| CoverError::TaskFailed(e.to_string()))??;

        let path = self.cover_path(book_id);
        tokio::fs::write(&path, encoded).await?;

        info!(
            book_id = %book_id,
            path = %path.display(),
            "Cover saved"
        );

        Ok(())
    }
}
