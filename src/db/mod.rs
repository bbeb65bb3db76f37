//! Database access layer: the Loader and Writer from the component design.
//!
//! Grounded on `original_source/frontend/utils/db.py` and `original_source/scripts/helpers.py`
//! for the connection shape, and on `original_source/scripts/optimize.py` for the exact queries
//! and the clear-then-insert write transaction. Uses a synchronous MySQL client so the core
//! stays single-threaded, matching the concurrency model in the specification.

mod connection;
mod loader;
mod writer;

pub use connection::connect;
pub use loader::load_input;
pub use writer::write_schedule;
