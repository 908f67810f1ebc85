//! Fire-and-forget cover replacement.

use crate::client::CoverClient;
use crate::error::CoverError;
use crate::store::CoverStore;
use std::sync::Arc;
use tome_core::BookId;
use tracing::{debug, error, warn};

/// Replaces a book's cover with a freshly fetched image.
///
/// The update is best-effort: every failure (transport, status, decode,
/// persistence) is logged with the book id and absorbed, so
/// [`update_cover`](CoverUpdater::update_cover) never surfaces an error to
/// the caller. Callers observe success only indirectly through the store.
pub struct CoverUpdater {
    client: CoverClient,
    store: Arc<dyn CoverStore>,
}

impl CoverUpdater {
    /// Create an updater over a client and a cover store.
    pub fn new(client: CoverClient, store: Arc<dyn CoverStore>) -> Self {
        Self { client, store }
    }

    /// Fetch a new cover and persist it for `book_id`.
    ///
    /// A single linear attempt: no retry, no backoff, no dedup of
    /// concurrent calls. Two racing updates for one book resolve through
    /// the store's last-write-wins contract.
    pub async fn update_cover(&self, book_id: &BookId) {
        let cover = match self.client.fetch_cover().await {
            Ok(cover) => cover,
            Err(CoverError::ServerError { status, message }) => {
                warn!(
                    book_id = %book_id,
                    status,
                    message = %message,
                    "Cover service returned an error status"
                );
                return;
            }
            Err(err @ CoverError::Decode(_)) => {
                warn!(
                    book_id = %book_id,
                    error = %err,
                    "Fetched payload is not a valid image"
                );
                return;
            }
            Err(err) => {
                error!(book_id = %book_id, error = %err, "Error fetching replacement cover");
                return;
            }
        };

        match self.store.save_cover(book_id, cover).await {
            Ok(()) => debug!(book_id = %book_id, "Updated cover"),
            Err(err) => {
                error!(book_id = %book_id, error = %err, "Error saving replacement cover");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::types::CoverServiceConfig;
    use async_trait::async_trait;
    use image::DynamicImage;
    use mockall::mock;
    use std::io::Cursor;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    mock! {
        Store {}

        #[async_trait]
        impl CoverStore for Store {
            async fn save_cover(&self, book_id: &BookId, cover: DynamicImage) -> Result<()>;
        }
    }

    fn png_bytes(size: u32) -> Vec<u8> {
        let img = DynamicImage::ImageRgb8(image::RgbImage::from_pixel(
            size,
            size,
            image::Rgb([10, 20, 30]),
        ));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, image::ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    fn updater_for(server_uri: &str, store: MockStore) -> CoverUpdater {
        let client = CoverClient::new(CoverServiceConfig::new(server_uri)).unwrap();
        CoverUpdater::new(client, Arc::new(store))
    }

    #[tokio::test]
    async fn save_receives_matching_book_id_and_image() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(png_bytes(3), "image/png"))
            .mount(&server)
            .await;

        let mut store = MockStore::new();
        store
            .expect_save_cover()
            .withf(|id, cover| id.as_str() == "book-7" && cover.width() == 3)
            .times(1)
            .returning(|_, _| Ok(()));

        updater_for(&server.uri(), store)
            .update_cover(&BookId::new("book-7"))
            .await;
    }

    #[tokio::test]
    async fn http_failure_skips_save() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let mut store = MockStore::new();
        store.expect_save_cover().never();

        updater_for(&server.uri(), store)
            .update_cover(&BookId::new("book-8"))
            .await;
    }

    #[tokio::test]
    async fn store_error_is_absorbed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(png_bytes(2), "image/png"))
            .mount(&server)
            .await;

        let mut store = MockStore::new();
        store.expect_save_cover().times(1).returning(|_, _| {
            Err(CoverError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "disk full",
            )))
        });

        // Completes normally even though persistence failed
        updater_for(&server.uri(), store)
            .update_cover(&BookId::new("book-9"))
            .await;
    }
}
