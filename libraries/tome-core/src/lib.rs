//! Tome Player Core
//!
//! Platform-agnostic core types and error handling for Tome Player.
//!
//! This crate provides the foundational building blocks shared by the
//! library subsystems (scanning, playback, cover management).
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `BookId`
//! - **Error Handling**: Unified `TomeError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use tome_core::BookId;
//!
//! // Reference an existing book
//! let id = BookId::new("book-42");
//!
//! // Or mint a fresh one
//! let generated = BookId::generate();
//! assert_ne!(id, generated);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{Result, TomeError};
pub use types::BookId;
