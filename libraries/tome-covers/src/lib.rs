//! Tome Player Covers
//!
//! Cover management for Tome Player: fetch a replacement cover image from
//! a remote image service, decode it, and persist it under the book's id.
//!
//! # Features
//!
//! - **Fetching**: single GET against a fixed cover image endpoint
//! - **Decoding**: payload bytes are decoded off the async runtime
//! - **Persistence**: pluggable [`CoverStore`] with a filesystem
//!   implementation writing one PNG per book
//! - **Fire-and-forget updates**: [`CoverUpdater::update_cover`] absorbs
//!   and logs every failure instead of surfacing it to the caller
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use tome_core::BookId;
//! use tome_covers::{CoverClient, CoverServiceConfig, CoverUpdater, FsCoverStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = CoverClient::new(CoverServiceConfig::default())?;
//! let store = Arc::new(FsCoverStore::new("covers"));
//! let updater = CoverUpdater::new(client, store);
//!
//! // Best-effort: failures are logged, never returned.
//! updater.update_cover(&BookId::new("book-42")).await;
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod store;
mod types;
mod updater;

// Re-export main types
pub use client::CoverClient;
pub use error::{CoverError, Result};
pub use store::{CoverStore, FsCoverStore};
pub use types::{CoverServiceConfig, DEFAULT_COVER_ENDPOINT};
pub use updater::CoverUpdater;
