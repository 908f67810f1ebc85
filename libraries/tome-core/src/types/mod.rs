//! Domain types shared across Tome Player subsystems.

mod ids;

pub use ids::BookId;
